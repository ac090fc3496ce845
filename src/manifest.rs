//! Directory manifests and the recursive book walk.
//!
//! Every book directory holds an `index.md` (the directory's own section) and an `index.yaml`
//! whose `contents` list names its children in order. An entry names either a sibling fragment
//! (`<entry>.md`) or a subdirectory that is walked the same way. Manifest order, never directory
//! listing order, decides sibling order.

use crate::builder::build_file_tree;
use crate::error::{Error, Result};
use crate::formats::markdown::MarkdownFormat;
use crate::heading::{parse_headings, MarkdownSource};
use crate::node::{NodeId, Tree};
use serde::Deserialize;
use std::fs;
use std::path::{Component, Path, PathBuf};

/// File name of a directory's manifest.
pub const MANIFEST_FILE: &str = "index.yaml";
/// File name of a directory's own fragment.
pub const INDEX_FILE: &str = "index.md";

#[derive(Deserialize, Debug, Clone, Default)]
/// Ordered child listing of a book directory.
pub struct Manifest {
    #[serde(default)]
    /// Child names: fragment stems or subdirectory names.
    pub contents: Option<Vec<String>>,
}

impl Manifest {
    /// Loads the manifest of `root/dir`.
    ///
    /// # Errors
    ///
    /// Returns `MissingManifest` if the file is absent, or `Manifest` if it is not valid YAML.
    pub fn load(root: &Path, dir: &Path) -> Result<Self> {
        let rel = dir.join(MANIFEST_FILE);
        let path = root.join(&rel);
        if !path.is_file() {
            return Err(Error::MissingManifest {
                dir: dir.to_path_buf(),
            });
        }
        let text = fs::read_to_string(path)?;
        serde_yaml::from_str(&text).map_err(|source| Error::Manifest { file: rel, source })
    }

    #[must_use]
    /// Child entries in listing order.
    pub fn entries(&self) -> &[String] {
        self.contents.as_deref().unwrap_or_default()
    }
}

/// Assembles the whole book below `root` into one tree and returns it with its entry node.
///
/// # Errors
///
/// Propagates any manifest, fragment or heading structure error. Returns `InvalidManifestEntry`
/// for an entry that is not a plain name and `ManifestCycle` if a subdirectory leads back into a
/// directory that is still being walked.
pub fn walk_book(root: &Path) -> Result<(Tree, NodeId)> {
    let mut tree = Tree::new();
    let mut walking = Vec::new();
    let entry = build_branch(&mut tree, root, Path::new(""), &mut walking)?;
    tracing::info!(nodes = tree.len(), root = %root.display(), "assembled book tree");
    Ok((tree, entry))
}

fn build_branch(
    tree: &mut Tree,
    root: &Path,
    dir: &Path,
    walking: &mut Vec<PathBuf>,
) -> Result<NodeId> {
    let manifest = Manifest::load(root, dir)?;

    let canonical = fs::canonicalize(root.join(dir))?;
    if walking.contains(&canonical) {
        return Err(Error::ManifestCycle {
            dir: dir.to_path_buf(),
        });
    }

    let index = dir.join(INDEX_FILE);
    if !root.join(&index).is_file() {
        return Err(Error::MissingIndexFile {
            dir: dir.to_path_buf(),
        });
    }
    let branch = parse_fragment(tree, root, &index)?;

    walking.push(canonical);
    for entry in manifest.entries() {
        if !is_plain_name(entry) {
            return Err(Error::InvalidManifestEntry {
                file: dir.join(MANIFEST_FILE),
                entry: entry.clone(),
            });
        }
        let fragment = dir.join(format!("{entry}.md"));
        let child = if root.join(&fragment).is_file() {
            parse_fragment(tree, root, &fragment)?
        } else {
            tracing::debug!(dir = %dir.display(), entry, "descending into subdirectory");
            build_branch(tree, root, &dir.join(entry), walking)?
        };
        tree.attach(branch, child);
    }
    walking.pop();

    Ok(branch)
}

/// Whether a manifest entry names exactly one child of its directory.
fn is_plain_name(entry: &str) -> bool {
    let mut components = Path::new(entry).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}

/// Parses one fragment into `tree`, returning its root section.
///
/// # Errors
///
/// Propagates read, parse and heading structure errors.
pub fn parse_fragment(tree: &mut Tree, root: &Path, rel: &Path) -> Result<NodeId> {
    let format = MarkdownFormat;
    let source = MarkdownSource::read(root, rel, &format)?;
    let events = parse_headings(&source, &format)?;
    tracing::debug!(file = %rel.display(), headings = events.len(), "parsed fragment");
    build_file_tree(tree, &source.path, &source.lines(), &events)
}

#[cfg(test)]
#[path = "tests/manifest.rs"]
mod tests;
