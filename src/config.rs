//! Book settings that sit alongside the sources.
//!
//! Specifically, we look for a biab.toml in the book directory, and if present we load settings
//! from there. This provides the repository coordinates used for "edit this section" links.

use crate::error::{Error, Result};
use facet::Facet;
use std::fs;
use std::path::Path;

/// Name of the settings file inside the book directory.
pub const CONFIG_FILE: &str = "biab.toml";

#[derive(Facet, Clone, Debug)]
/// Book settings loaded from biab.toml or falling back to defaults.
pub struct BookConfig {
    #[facet(default = String::new())]
    /// GitHub `owner/name` hosting the sources; empty disables edit links.
    pub repo: String,
    #[facet(default = String::new())]
    /// Directory of the book inside that repository.
    pub root: String,
    #[facet(default = "master".to_string())]
    /// Branch edit links point at.
    pub branch: String,
}

impl BookConfig {
    /// Load configuration from `dir/biab.toml`, or defaults when the file is absent.
    ///
    /// # Errors
    ///
    /// Returns `Config` if the file exists but cannot be parsed.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn load(dir: &Path) -> Result<Self> {
        let path = dir.join(CONFIG_FILE);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::defaults()),
            Err(e) => return Err(e.into()),
        };
        facet_toml::from_str::<Self>(&contents).map_err(|e| Error::Config {
            file: path,
            message: e.to_string(),
        })
    }

    #[must_use]
    /// Defaults, as if biab.toml were empty.
    ///
    /// # Panics
    ///
    /// Panics if the default configuration cannot be parsed.
    pub fn defaults() -> Self {
        facet_toml::from_str::<Self>("").unwrap()
    }

    #[must_use]
    /// URL of the GitHub editor for `file` at `line`, if a repository is configured.
    pub fn edit_url(&self, file: &Path, line: usize) -> Option<String> {
        if self.repo.is_empty() {
            return None;
        }
        let file = file.to_string_lossy().replace('\\', "/");
        let root = self.root.trim_matches('/');
        let path = if root.is_empty() {
            file
        } else {
            format!("{root}/{file}")
        };
        Some(format!(
            "https://github.com/{}/edit/{}/{path}#L{line}",
            self.repo, self.branch
        ))
    }
}

#[cfg(test)]
#[path = "tests/config.rs"]
mod tests;
