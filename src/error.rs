//! Error types for book builds.
//!
//! Every failure aborts the build: a partially linked book is never written. Structural errors
//! carry the source file (relative to the book root) and, where one exists, the 1-based line of
//! the offending heading so authors can jump straight to it.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while assembling, linking or publishing a book.
#[derive(Error, Debug)]
pub enum Error {
    /// Underlying filesystem failure.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Notebook serialisation failure.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A fragment that should be Markdown has some other extension.
    #[error("Not a markdown file: {}", file.display())]
    InvalidInputKind {
        /// Offending path.
        file: PathBuf,
    },

    /// A heading has no `<link src="...">` marker, or carries something else in its place.
    #[error("{}:{line}: heading {heading:?} has no section id marker", file.display())]
    MissingSectionId {
        /// Fragment containing the heading.
        file: PathBuf,
        /// Line of the heading.
        line: usize,
        /// Raw heading text.
        heading: String,
    },

    /// A heading skips at least one level below the current section.
    #[error("{}:{line}: stranded header {heading:?}", file.display())]
    StrandedHeader {
        /// Fragment containing the heading.
        file: PathBuf,
        /// Line of the heading.
        line: usize,
        /// Heading title.
        heading: String,
    },

    /// A heading would have to close more sections than are open.
    #[error("{}:{line}: overindented header {heading:?}", file.display())]
    OverindentedHeader {
        /// Fragment containing the heading.
        file: PathBuf,
        /// Line of the heading.
        line: usize,
        /// Heading title.
        heading: String,
    },

    /// A fragment contains no headings at all.
    #[error("{}: no headings found", file.display())]
    NoHeadings {
        /// Offending fragment.
        file: PathBuf,
    },

    /// A fragment opens a second top-level section.
    #[error("{}:{line}: second top-level heading {heading:?}", file.display())]
    MultipleRootHeadings {
        /// Fragment containing the heading.
        file: PathBuf,
        /// Line of the second top-level heading.
        line: usize,
        /// Heading title.
        heading: String,
    },

    /// A book directory has no `index.yaml`.
    #[error("{}: missing index.yaml manifest", dir.display())]
    MissingManifest {
        /// Directory relative to the book root.
        dir: PathBuf,
    },

    /// A book directory has no `index.md`.
    #[error("{}: missing index.md", dir.display())]
    MissingIndexFile {
        /// Directory relative to the book root.
        dir: PathBuf,
    },

    /// A manifest entry is not a plain file or directory name.
    #[error("{}: invalid manifest entry {entry:?}", file.display())]
    InvalidManifestEntry {
        /// Manifest path relative to the book root.
        file: PathBuf,
        /// Offending entry.
        entry: String,
    },

    /// A subdirectory leads back into a directory that is still being walked.
    #[error("{}: directory is its own ancestor", dir.display())]
    ManifestCycle {
        /// Directory relative to the book root, as reached through the manifests.
        dir: PathBuf,
    },

    /// A manifest is not valid YAML or lacks its `contents` list.
    #[error("{}: invalid manifest: {source}", file.display())]
    Manifest {
        /// Manifest path relative to the book root.
        file: PathBuf,
        /// Parser diagnostic.
        source: serde_yaml::Error,
    },

    /// `biab.toml` could not be parsed.
    #[error("{}: invalid configuration: {message}", file.display())]
    Config {
        /// Configuration file path.
        file: PathBuf,
        /// Parser diagnostic.
        message: String,
    },

    /// tree-sitter could not load the grammar or parse the source.
    #[error("{}: parse failure: {message}", file.display())]
    Parse {
        /// Fragment being parsed.
        file: PathBuf,
        /// Description of the failure.
        message: String,
    },

    /// An `alias://` token names an id no section carries.
    #[error("{}:{line}: unresolved alias {id:?}", file.display())]
    UnresolvedAlias {
        /// Alias target.
        id: String,
        /// Fragment of the section containing the token.
        file: PathBuf,
        /// Heading line of that section.
        line: usize,
    },

    /// Two sections share an id, making aliases to it ambiguous.
    #[error(
        "duplicate section id {id:?} at {}:{first_line} and {}:{second_line}",
        first_file.display(),
        second_file.display()
    )]
    DuplicateSectionId {
        /// Repeated id.
        id: String,
        /// Earlier section in document order.
        first_file: PathBuf,
        /// Heading line of the earlier section.
        first_line: usize,
        /// Later section in document order.
        second_file: PathBuf,
        /// Heading line of the later section.
        second_line: usize,
    },

    /// Output format name not recognised.
    #[error("Unknown output format: {name}. Known formats are: {known}")]
    UnknownFormat {
        /// Requested name.
        name: String,
        /// Comma-separated accepted names.
        known: String,
    },
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
