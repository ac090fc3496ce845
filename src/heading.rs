//! Heading extraction from a single Markdown fragment.
//!
//! tree-sitter gives us the block structure, so fenced code containing `#` lines never opens a
//! section. Each heading's inline text is then split into plain text and raw HTML spans: the first
//! span is the title, and the trailing `<link src="...">` span carries the section's stable id.

use crate::alias::SECTION_ID_PATTERN;
use crate::error::{Error, Result};
use crate::formats::Format;
use regex::Regex;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Parser, Query, QueryCursor};

static TAG: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\A<[^<>]+>").unwrap());

static SECTION_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("^{SECTION_ID_PATTERN}$")).unwrap());

static MARKER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^<link\b[^>]*?\bsrc\s*=\s*(?:"([^"]+)"|'([^']+)')[^>]*>$"#).unwrap()
});

#[derive(Clone, Debug, PartialEq, Eq)]
/// One piece of a heading's inline content.
pub enum InlineSpan {
    /// Plain text, trimmed.
    Text(String),
    /// A raw HTML tag, verbatim.
    Html(String),
}

#[derive(Clone, Debug, PartialEq, Eq)]
/// A heading found in a fragment, in document order.
pub struct HeadingEvent {
    /// ATX level (number of `#`).
    pub level: usize,
    /// Inline content split into text and HTML spans.
    pub spans: Vec<InlineSpan>,
    /// 1-based line of the heading in its fragment.
    pub line: usize,
    /// Inline heading text exactly as written.
    pub inline: String,
}

impl HeadingEvent {
    #[must_use]
    /// Builds an event from raw inline heading text.
    pub fn new(level: usize, inline: &str, line: usize) -> Self {
        Self {
            level,
            spans: split_inline(inline),
            line,
            inline: inline.to_string(),
        }
    }

    #[must_use]
    /// Display title: the leading text span, or empty if the heading starts with markup.
    pub fn title(&self) -> &str {
        match self.spans.first() {
            Some(InlineSpan::Text(text)) => text,
            _ => "",
        }
    }

    #[must_use]
    /// Section id from the heading's `<link src="...">` marker.
    ///
    /// The marker must be the only HTML span and must close the heading, after a text title, and
    /// its value must be usable in an `alias://` token. Anything else yields `None`.
    pub fn section_id(&self) -> Option<&str> {
        if !matches!(self.spans.first(), Some(InlineSpan::Text(_))) {
            return None;
        }
        let Some(InlineSpan::Html(marker)) = self.spans.last() else {
            return None;
        };
        let tags = self
            .spans
            .iter()
            .filter(|span| matches!(span, InlineSpan::Html(_)))
            .count();
        if tags != 1 {
            return None;
        }
        let caps = MARKER.captures(marker)?;
        caps.get(1)
            .or_else(|| caps.get(2))
            .map(|m| m.as_str())
            .filter(|id| SECTION_ID.is_match(id))
    }

    #[must_use]
    /// Heading text as written, for diagnostics.
    pub fn raw(&self) -> &str {
        &self.inline
    }
}

#[must_use]
/// Splits heading inline text into text and HTML spans, dropping blank text between tags.
///
/// Code spans are text: a `<T>` between backticks never counts as markup.
pub fn split_inline(inline: &str) -> Vec<InlineSpan> {
    fn push_text(text: &str, spans: &mut Vec<InlineSpan>) {
        let text = text.trim();
        if !text.is_empty() {
            spans.push(InlineSpan::Text(text.to_string()));
        }
    }

    let mut spans = Vec::new();
    let mut text_start = 0;
    let mut pos = 0;

    while let Some(c) = inline[pos..].chars().next() {
        let rest = &inline[pos..];
        if c == '`' {
            let ticks = backtick_run(rest);
            pos = code_span_end(inline, pos + ticks, ticks).unwrap_or(pos + ticks);
            continue;
        }
        if let Some(tag) = TAG.find(rest) {
            push_text(&inline[text_start..pos], &mut spans);
            spans.push(InlineSpan::Html(tag.as_str().to_string()));
            pos += tag.end();
            text_start = pos;
            continue;
        }
        pos += c.len_utf8();
    }
    push_text(&inline[text_start..], &mut spans);
    spans
}

fn backtick_run(text: &str) -> usize {
    text.len() - text.trim_start_matches('`').len()
}

/// End of the code span whose opening run of `ticks` backticks finishes at `from`.
///
/// Only a run of exactly the same length closes it. An unclosed run is literal text.
fn code_span_end(inline: &str, from: usize, ticks: usize) -> Option<usize> {
    let mut pos = from;
    while let Some(offset) = inline[pos..].find('`') {
        let start = pos + offset;
        let run = backtick_run(&inline[start..]);
        if run == ticks {
            return Some(start + run);
        }
        pos = start + run;
    }
    None
}

/// A fragment read from disk, addressed relative to the book root.
pub struct MarkdownSource {
    /// Path relative to the book root, as shown in edit links and errors.
    pub path: PathBuf,
    /// Full file contents.
    pub text: String,
}

impl MarkdownSource {
    /// Reads `root/rel` after checking it carries the format's extension.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInputKind` for the wrong extension, or an I/O error if reading fails.
    pub fn read(root: &Path, rel: &Path, format: &impl Format) -> Result<Self> {
        if rel.extension().and_then(|ext| ext.to_str()) != Some(format.file_extension()) {
            return Err(Error::InvalidInputKind {
                file: rel.to_path_buf(),
            });
        }
        let text = fs::read_to_string(root.join(rel))?;
        Ok(Self {
            path: rel.to_path_buf(),
            text,
        })
    }

    #[must_use]
    /// Source lines, each keeping its line terminator.
    pub fn lines(&self) -> Vec<String> {
        self.text
            .split_inclusive('\n')
            .map(str::to_string)
            .collect()
    }
}

/// Extracts every section-opening heading from a fragment, in document order.
///
/// # Errors
///
/// Returns `Parse` if the grammar cannot be loaded or the source cannot be parsed.
pub fn parse_headings(source: &MarkdownSource, format: &impl Format) -> Result<Vec<HeadingEvent>> {
    let parse_error = |message: String| Error::Parse {
        file: source.path.clone(),
        message,
    };

    let language = format.language();
    let mut parser = Parser::new();
    parser
        .set_language(&language)
        .map_err(|e| parse_error(e.to_string()))?;
    let tree = parser
        .parse(&source.text, None)
        .ok_or_else(|| parse_error("parser produced no tree".to_string()))?;
    let query =
        Query::new(&language, format.heading_query()).map_err(|e| parse_error(e.to_string()))?;

    let bytes = source.text.as_bytes();
    let mut cursor = QueryCursor::new();
    let mut matches = cursor.matches(&query, tree.root_node(), bytes);
    let mut events = Vec::new();

    while let Some(m) = matches.next() {
        for capture in m.captures {
            let node = capture.node;
            if !opens_section(node, format.section_containers()) {
                continue;
            }
            let Some(level) = heading_level(node) else {
                continue;
            };
            let inline = inline_text(node, bytes);
            events.push(HeadingEvent::new(level, &inline, node.start_position().row + 1));
        }
    }

    Ok(events)
}

fn opens_section(node: Node, containers: &[&str]) -> bool {
    let mut parent = node.parent();
    while let Some(p) = parent {
        if !containers.contains(&p.kind()) {
            return false;
        }
        parent = p.parent();
    }
    true
}

fn heading_level(node: Node) -> Option<usize> {
    let mut walk = node.walk();
    let level = node.children(&mut walk).find_map(|child| {
        child
            .kind()
            .strip_prefix("atx_h")
            .and_then(|rest| rest.strip_suffix("_marker"))
            .and_then(|digit| digit.parse().ok())
    });
    level
}

fn inline_text(node: Node, bytes: &[u8]) -> String {
    let mut walk = node.walk();
    let text = node
        .children(&mut walk)
        .find(|child| child.kind() == "inline")
        .and_then(|inline| inline.utf8_text(bytes).ok())
        .map(|text| text.trim().to_string())
        .unwrap_or_default();
    text
}

#[cfg(test)]
#[path = "tests/heading.rs"]
mod tests;
