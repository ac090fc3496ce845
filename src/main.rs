//! biab: build a cross-linked book from Markdown fragments.
#![allow(clippy::multiple_crate_versions)]

use biab::publish::{self, DirectorySink};
use biab::{build_book, BookConfig, OutputFormat};
use clap::Parser;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "biab")]
#[command(about = "Build a cross-linked book from Markdown fragments", long_about = None)]
struct Args {
    /// Book directory containing index.md and index.yaml
    #[arg(value_name = "SOURCE")]
    source: PathBuf,

    /// Directory to write the rendered book into
    #[arg(long, short = 'o', default_value = "built")]
    output: PathBuf,

    /// Output format: markdown, notebook, html or website
    #[arg(long, short = 'f', default_value = "notebook")]
    format: OutputFormat,

    /// Stylesheet copied next to every HTML page
    #[arg(long, value_name = "FILE")]
    css: Option<PathBuf>,

    /// GitHub repository (owner/name) for edit links
    #[arg(long)]
    repo: Option<String>,

    /// Validate structure and cross-references without writing anything
    #[arg(long)]
    check: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> biab::Result<()> {
    let mut cfg = BookConfig::load(&args.source)?;

    // Override config with command line args
    if let Some(repo) = args.repo {
        cfg.repo = repo;
    }

    let built = build_book(&args.source, &cfg, args.format.link_style())?;
    if args.check {
        tracing::info!(sections = built.map.len(), "book is consistent");
        return Ok(());
    }

    let stylesheet = args.css.as_ref().map(fs::read).transpose()?;
    let renderer = args.format.renderer(stylesheet.is_some());
    let artifacts = publish::lay_out(
        &built.units,
        &built.map,
        args.format,
        renderer.as_ref(),
        stylesheet.as_deref(),
    )?;

    let mut sink = DirectorySink::new(&args.output);
    publish::publish(&artifacts, &mut sink)
}
