//! Markdown format implementation using tree-sitter-md.
//!
//! Only ATX-style headings (# syntax) open sections. Headings nested inside block quotes or list
//! items are body content, so containers are restricted to the document and its sections.

use crate::formats::Format;

/// Tree-sitter queries for ATX-style markdown headings (# syntax).
pub struct MarkdownFormat;

impl Format for MarkdownFormat {
    fn file_extension(&self) -> &'static str {
        "md"
    }

    fn language(&self) -> tree_sitter::Language {
        tree_sitter_md::LANGUAGE.into()
    }

    fn heading_query(&self) -> &'static str {
        "(atx_heading) @heading"
    }

    fn section_containers(&self) -> &[&str] {
        &["document", "section"]
    }
}
