//! Format trait and implementations for book source fragments.
//!
//! This module defines the `Format` trait which abstracts over the grammar used to find section
//! headings in a fragment, by providing the tree-sitter language and queries for that grammar.

pub mod markdown;

/// Grammar and queries needed to locate section headings in a source fragment.
pub trait Format {
    /// File extension (without the dot) that fragments of this format must carry.
    fn file_extension(&self) -> &'static str;
    /// Block-level tree-sitter grammar.
    fn language(&self) -> tree_sitter::Language;
    /// Query capturing every heading node as `@heading`.
    fn heading_query(&self) -> &str;
    /// Node kinds a heading may be nested in and still open a section.
    fn section_containers(&self) -> &[&str];
}
