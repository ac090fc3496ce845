//! Tables of contents.

use crate::links::{compute_link, LinkStyle};
use crate::node::NodeId;
use crate::paths::NumberedTree;

/// Heading line opening every non-empty table of contents.
pub const TOC_HEADER: &str = "**Table of Contents**\n";

#[must_use]
/// Markdown lines listing every descendant of `node` in document order.
///
/// Entries are bullets indented four spaces per level below `node`, each linking relative to the
/// page `node` renders on. A node without descendants gets no lines at all, so leaf sections never
/// carry an empty header.
pub fn build_toc(book: &NumberedTree, node: NodeId, style: &LinkStyle) -> Vec<String> {
    let tree = book.tree();
    let descendants = tree.descendants(node);
    if descendants.is_empty() {
        return Vec::new();
    }

    let base = tree.depth(node);
    let from = &tree[node].path;
    let mut toc = Vec::with_capacity(descendants.len() + 2);
    toc.push(TOC_HEADER.to_string());
    for id in descendants {
        let entry = &tree[id];
        let indent = "    ".repeat(tree.depth(id) - base - 1);
        let link = compute_link(&entry.path, from, style);
        toc.push(format!("{indent}- [{}]({link})\n", entry.title));
    }
    toc.push("\n".to_string());
    toc
}

#[cfg(test)]
#[path = "tests/toc.rs"]
mod tests;
