//! The build pipeline from source directory to output units.
//!
//! Decorating content only happens once the tree is complete and numbered: every node gets its
//! table of contents, edit link, anchor and heading, then its content is flattened and its alias
//! tokens resolved. The numbered tree is finally cut into pages: the book root on its own, then one
//! group per unit holding the unit's own page followed by each chapter with all its sections.

use crate::alias::AliasIndex;
use crate::config::BookConfig;
use crate::error::Result;
use crate::links::LinkStyle;
use crate::manifest::walk_book;
use crate::node::NodeId;
use crate::paths::NumberedTree;
use crate::toc::build_toc;
use serde::Serialize;
use std::path::Path;

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// Pages of one top-level division, ready for rendering.
pub struct OutputUnit {
    /// Unit number as a string; empty for the book's front matter.
    pub label: String,
    /// Resolved Markdown pages: the unit's own page first, then its chapters in order.
    pub documents: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
/// One row of the published section map.
pub struct MapEntry {
    /// Section id.
    pub id: String,
    /// Dotted section path.
    pub path: String,
    /// Section title.
    pub title: String,
}

/// Output of a complete build.
pub struct BuiltBook {
    /// Pages grouped by unit, front matter first.
    pub units: Vec<OutputUnit>,
    /// Every section in document order.
    pub map: Vec<MapEntry>,
}

/// Decorates and resolves a numbered book for one output format.
pub struct BookAssembler<'a> {
    config: &'a BookConfig,
    style: LinkStyle,
}

impl<'a> BookAssembler<'a> {
    #[must_use]
    /// Creates an assembler using `config` for edit links and `style` for every link.
    pub fn new(config: &'a BookConfig, style: LinkStyle) -> Self {
        Self { config, style }
    }

    /// Rewrites every node's content into its final form and groups it into output units.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateSectionId` or `UnresolvedAlias` when cross-references are ambiguous or
    /// dangling.
    pub fn assemble(&self, book: &mut NumberedTree) -> Result<Vec<OutputUnit>> {
        let aliases = AliasIndex::new(book)?;
        let order = book.document_order();

        for &id in &order {
            let toc = build_toc(book, id, &self.style);
            book.content_mut(id).splice(0..0, toc);
        }

        for &id in &order {
            let node = &book.tree()[id];
            let mut lead = Vec::new();
            lead.push(heading_line(book, id));
            if let Some(anchor) = node.path.anchor() {
                lead.push(format!(" <a name='{anchor}'></a>"));
            }
            if let Some(url) = self.config.edit_url(&node.source_file, node.source_line) {
                lead.push(format!(
                    " <a class='biab-edit' href='{url}' target='_blank'>[edit]</a>"
                ));
            }
            lead.push("\n\n".to_string());
            book.content_mut(id).splice(0..0, lead);
        }

        for &id in &order {
            let flat = book.tree()[id].content.concat();
            let mut resolved = aliases.resolve(book, &flat, id, &self.style)?;
            // Pages concatenate nodes, so each must end its last line.
            if !resolved.ends_with('\n') {
                resolved.push('\n');
            }
            *book.content_mut(id) = vec![resolved];
        }

        Ok(group_units(book))
    }
}

/// Markdown heading for a node: one `#` down to chapters, one more per level below.
fn heading_line(book: &NumberedTree, id: NodeId) -> String {
    let node = &book.tree()[id];
    let depth = node.path.depth();
    let hashes = "#".repeat(if depth <= 2 { 1 } else { (depth - 1).min(6) });
    if node.path.is_root() {
        format!("{hashes} {}", node.title)
    } else {
        format!("{hashes} [{}](alias://{}) {}", node.path, node.id, node.title)
    }
}

fn group_units(book: &NumberedTree) -> Vec<OutputUnit> {
    let tree = book.tree();
    let flat = |id: NodeId| tree[id].content.concat();

    let mut units = vec![OutputUnit {
        label: String::new(),
        documents: vec![flat(book.root())],
    }];
    for (position, &unit) in tree.children(book.root()).iter().enumerate() {
        let mut documents = vec![flat(unit)];
        for &chapter in tree.children(unit) {
            documents.push(tree.traverse(chapter).into_iter().map(flat).collect());
        }
        units.push(OutputUnit {
            label: (position + 1).to_string(),
            documents,
        });
    }
    units
}

#[must_use]
/// Id, path and title of every section in document order.
pub fn section_map(book: &NumberedTree) -> Vec<MapEntry> {
    let tree = book.tree();
    book.document_order()
        .into_iter()
        .map(|id| MapEntry {
            id: tree[id].id.clone(),
            path: tree[id].path.to_string(),
            title: tree[id].title.clone(),
        })
        .collect()
}

/// Walks, numbers and assembles the book under `source`.
///
/// # Errors
///
/// Propagates every structural, manifest and cross-reference error.
pub fn build_book(source: &Path, config: &BookConfig, style: LinkStyle) -> Result<BuiltBook> {
    let (tree, root) = walk_book(source)?;
    let mut book = NumberedTree::number(tree, root);
    let map = section_map(&book);
    let units = BookAssembler::new(config, style).assemble(&mut book)?;
    tracing::info!(units = units.len(), sections = map.len(), "assembled book");
    Ok(BuiltBook { units, map })
}

#[cfg(test)]
#[path = "tests/assemble.rs"]
mod tests;
