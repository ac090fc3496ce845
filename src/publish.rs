//! Laying rendered pages out as files and handing them to a sink.
//!
//! The front matter renders to the top-level index, unit `i` to directory `i/`, and within a unit
//! the first page is `index` and chapter `k` is page `k`. These names are exactly what the link
//! resolver targets, so they must stay in step with it.

use crate::assemble::{MapEntry, OutputUnit};
use crate::error::Result;
use crate::render::{OutputFormat, Renderer};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the published section map.
pub const MAP_FILE: &str = "map.json";
/// File name given to a copied stylesheet in every HTML directory.
pub const STYLESHEET_FILE: &str = "custom.css";

#[derive(Clone, Debug, PartialEq, Eq)]
/// One file to publish.
pub struct Artifact {
    /// Location relative to the output root.
    pub path: PathBuf,
    /// File contents.
    pub bytes: Vec<u8>,
    /// MIME type for hosts that need one.
    pub content_type: String,
}

/// Destination for published artifacts.
pub trait Sink {
    /// Stores one artifact.
    ///
    /// # Errors
    ///
    /// Returns an error if the artifact cannot be stored.
    fn accept(&mut self, artifact: &Artifact) -> Result<()>;
}

/// Writes artifacts beneath a local directory.
pub struct DirectorySink {
    root: PathBuf,
}

impl DirectorySink {
    #[must_use]
    /// Creates a sink writing beneath `root`.
    pub fn new(root: &Path) -> Self {
        Self {
            root: root.to_path_buf(),
        }
    }
}

impl Sink for DirectorySink {
    fn accept(&mut self, artifact: &Artifact) -> Result<()> {
        let path = self.root.join(&artifact.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, &artifact.bytes)?;
        tracing::debug!(
            path = %path.display(),
            content_type = %artifact.content_type,
            "wrote artifact"
        );
        Ok(())
    }
}

/// Renders every page and names it, adding the section map and any stylesheet copies.
///
/// # Errors
///
/// Propagates renderer and serialisation failures.
pub fn lay_out(
    units: &[OutputUnit],
    map: &[MapEntry],
    format: OutputFormat,
    renderer: &dyn Renderer,
    stylesheet: Option<&[u8]>,
) -> Result<Vec<Artifact>> {
    let mut artifacts = Vec::new();

    for unit in units {
        let dir = PathBuf::from(&unit.label);
        for (position, document) in unit.documents.iter().enumerate() {
            let name = if position == 0 {
                page_name("index", format, true)
            } else {
                page_name(&position.to_string(), format, false)
            };
            artifacts.push(Artifact {
                path: dir.join(name),
                bytes: renderer.render(document)?,
                content_type: renderer.content_type().to_string(),
            });
        }
        if let (Some(css), true) = (stylesheet, format.is_html()) {
            artifacts.push(Artifact {
                path: dir.join(STYLESHEET_FILE),
                bytes: css.to_vec(),
                content_type: "text/css".to_string(),
            });
        }
    }

    artifacts.push(Artifact {
        path: PathBuf::from(MAP_FILE),
        bytes: serde_json::to_vec_pretty(map)?,
        content_type: "application/json".to_string(),
    });

    Ok(artifacts)
}

/// Website index pages keep `.html` so hosts serve them as the directory's default document.
fn page_name(stem: &str, format: OutputFormat, index: bool) -> String {
    if index && format == OutputFormat::Website {
        format!("{stem}.html")
    } else {
        format!("{stem}{}", format.extension())
    }
}

/// Hands every artifact to `sink` in order.
///
/// # Errors
///
/// Stops at the first artifact the sink rejects.
pub fn publish(artifacts: &[Artifact], sink: &mut dyn Sink) -> Result<()> {
    for artifact in artifacts {
        sink.accept(artifact)?;
    }
    tracing::info!(artifacts = artifacts.len(), "published book");
    Ok(())
}

#[cfg(test)]
#[path = "tests/publish.rs"]
mod tests;
