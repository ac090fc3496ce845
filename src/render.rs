//! Output formats and the renderers that produce them.
//!
//! Rendering is the seam to the outside world: the pipeline hands each renderer one page of fully
//! resolved Markdown and gets bytes back. Formats differ in only two other ways, the page
//! extension and whether directory links name their index page, both captured in `LinkStyle`.

use crate::error::{Error, Result};
use crate::links::LinkStyle;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
/// Target of a build.
pub enum OutputFormat {
    /// Resolved Markdown, one `.md` file per page.
    Markdown,
    /// Jupyter notebooks, one `.ipynb` file per page.
    Notebook,
    /// Standalone HTML pages.
    Html,
    /// HTML pages keyed for a static host: extensionless chapter pages, `index.html` indexes.
    Website,
}

impl OutputFormat {
    /// Accepted names, in the order shown to users.
    pub const NAMES: [&'static str; 4] = ["markdown", "notebook", "html", "website"];

    #[must_use]
    /// Page extension, including the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::Markdown => ".md",
            Self::Notebook => ".ipynb",
            Self::Html => ".html",
            Self::Website => "",
        }
    }

    #[must_use]
    /// Whether links to a directory rely on the server's default document.
    pub fn short_index(self) -> bool {
        matches!(self, Self::Html | Self::Website)
    }

    #[must_use]
    /// Link conventions for pages of this format.
    pub fn link_style(self) -> LinkStyle {
        LinkStyle::new(self.extension(), self.short_index())
    }

    #[must_use]
    /// Whether pages are HTML, and so can use a stylesheet.
    pub fn is_html(self) -> bool {
        matches!(self, Self::Html | Self::Website)
    }

    #[must_use]
    /// Renderer producing this format's pages.
    pub fn renderer(self, stylesheet: bool) -> Box<dyn Renderer> {
        match self {
            Self::Markdown => Box::new(MarkdownRenderer),
            Self::Notebook => Box::new(NotebookRenderer),
            Self::Html | Self::Website => Box::new(HtmlRenderer { stylesheet }),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Markdown => "markdown",
            Self::Notebook => "notebook",
            Self::Html => "html",
            Self::Website => "website",
        };
        f.write_str(name)
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "markdown" | "md" => Ok(Self::Markdown),
            "notebook" | "ipynb" => Ok(Self::Notebook),
            "html" => Ok(Self::Html),
            "website" | "s3" => Ok(Self::Website),
            _ => Err(Error::UnknownFormat {
                name: s.to_string(),
                known: Self::NAMES.join(", "),
            }),
        }
    }
}

/// Converts one page of resolved Markdown into output bytes.
pub trait Renderer {
    /// Renders a page.
    ///
    /// # Errors
    ///
    /// Returns an error if the page cannot be encoded.
    fn render(&self, markdown: &str) -> Result<Vec<u8>>;
    /// MIME type of rendered pages, used as the publishing content type.
    fn content_type(&self) -> &'static str;
}

/// Passes Markdown through unchanged.
pub struct MarkdownRenderer;

impl Renderer for MarkdownRenderer {
    fn render(&self, markdown: &str) -> Result<Vec<u8>> {
        Ok(markdown.as_bytes().to_vec())
    }

    fn content_type(&self) -> &'static str {
        "text/markdown; charset=utf-8"
    }
}

/// Produces nbformat 4 notebooks. Python code fences become code cells.
pub struct NotebookRenderer;

#[derive(Serialize)]
struct Notebook {
    cells: Vec<Cell>,
    metadata: serde_json::Map<String, serde_json::Value>,
    nbformat: u32,
    nbformat_minor: u32,
}

#[derive(Serialize, Debug, PartialEq)]
#[serde(tag = "cell_type", rename_all = "lowercase")]
enum Cell {
    Markdown {
        metadata: serde_json::Map<String, serde_json::Value>,
        source: Vec<String>,
    },
    Code {
        execution_count: Option<u32>,
        metadata: serde_json::Map<String, serde_json::Value>,
        outputs: Vec<serde_json::Value>,
        source: Vec<String>,
    },
}

impl Cell {
    fn markdown(lines: &[&str]) -> Self {
        Self::Markdown {
            metadata: serde_json::Map::new(),
            source: cell_source(lines),
        }
    }

    fn code(lines: &[&str]) -> Self {
        Self::Code {
            execution_count: None,
            metadata: serde_json::Map::new(),
            outputs: Vec::new(),
            source: cell_source(lines),
        }
    }
}

/// nbformat stores sources as lines, each but the last keeping its newline.
fn cell_source(lines: &[&str]) -> Vec<String> {
    let mut source: Vec<String> = lines.iter().map(|line| (*line).to_string()).collect();
    if let Some(last) = source.last_mut() {
        if last.ends_with('\n') {
            last.pop();
        }
    }
    source
}

fn is_code_fence(info: &str) -> bool {
    matches!(info.trim(), "" | "python" | "py")
}

fn flush_text(text: &mut Vec<&str>, cells: &mut Vec<Cell>) {
    if text.iter().any(|line| !line.trim().is_empty()) {
        cells.push(Cell::markdown(text.as_slice()));
    }
    text.clear();
}

fn split_cells(markdown: &str) -> Vec<Cell> {
    let mut cells = Vec::new();
    let mut text: Vec<&str> = Vec::new();
    let mut code: Option<Vec<&str>> = None;
    let mut other_fence = false;

    for line in markdown.split_inclusive('\n') {
        let trimmed = line.trim_start();
        match code.as_mut() {
            Some(body) => {
                if trimmed.starts_with("```") {
                    cells.push(Cell::code(body.as_slice()));
                    code = None;
                } else {
                    body.push(line);
                }
            }
            None => {
                if let Some(info) = trimmed.strip_prefix("```") {
                    if other_fence {
                        other_fence = false;
                    } else if is_code_fence(info) {
                        flush_text(&mut text, &mut cells);
                        code = Some(Vec::new());
                        continue;
                    } else {
                        other_fence = true;
                    }
                }
                text.push(line);
            }
        }
    }
    if let Some(body) = code {
        cells.push(Cell::code(&body));
    }
    flush_text(&mut text, &mut cells);
    cells
}

impl Renderer for NotebookRenderer {
    fn render(&self, markdown: &str) -> Result<Vec<u8>> {
        let notebook = Notebook {
            cells: split_cells(markdown),
            metadata: serde_json::Map::new(),
            nbformat: 4,
            nbformat_minor: 0,
        };
        let mut bytes = serde_json::to_vec_pretty(&notebook)?;
        bytes.push(b'\n');
        Ok(bytes)
    }

    fn content_type(&self) -> &'static str {
        "application/x-ipynb+json"
    }
}

/// Produces standalone HTML pages with comrak, keeping inline HTML such as anchors.
pub struct HtmlRenderer {
    /// Link each page to a `custom.css` in its own directory.
    pub stylesheet: bool,
}

impl Renderer for HtmlRenderer {
    fn render(&self, markdown: &str) -> Result<Vec<u8>> {
        let mut options = comrak::Options::default();
        options.render.unsafe_ = true;
        options.extension.table = true;
        options.extension.strikethrough = true;
        let body = comrak::markdown_to_html(markdown, &options);

        let css = if self.stylesheet {
            "<link rel=\"stylesheet\" href=\"custom.css\">\n"
        } else {
            ""
        };
        let page = format!(
            "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n{css}</head>\n<body>\n{body}</body>\n</html>\n"
        );
        Ok(page.into_bytes())
    }

    fn content_type(&self) -> &'static str {
        "text/html; charset=utf-8"
    }
}

#[cfg(test)]
#[path = "tests/render.rs"]
mod tests;
