//! biab: build one cross-linked book from a directory tree of Markdown fragments.
//!
//! Each directory holds an `index.md` and an `index.yaml` listing its children in order. Every
//! heading carries a `<link src="...">` marker giving it a stable id, and any section can refer to
//! any other as `alias://<id>`. A build walks the directories into a single section tree, numbers
//! it, adds tables of contents and edit links, resolves aliases into relative links, and renders
//! the pages as Markdown, notebooks or HTML.
//!
//! ```no_run
//! use biab::{build_book, BookConfig, OutputFormat};
//! use std::path::Path;
//!
//! let source = Path::new("book");
//! let config = BookConfig::load(source)?;
//! let built = build_book(source, &config, OutputFormat::Notebook.link_style())?;
//! assert_eq!(built.units[0].label, "");
//! # Ok::<(), biab::Error>(())
//! ```
#![allow(clippy::multiple_crate_versions)]

pub mod alias;
pub mod assemble;
pub mod builder;
pub mod config;
pub mod error;
pub mod formats;
pub mod heading;
pub mod links;
pub mod manifest;
pub mod node;
pub mod paths;
pub mod publish;
pub mod render;
pub mod toc;

pub use assemble::{build_book, BuiltBook, OutputUnit};
pub use config::BookConfig;
pub use error::{Error, Result};
pub use render::OutputFormat;
