//! Symbolic cross-references.
//!
//! Authors refer to any section as `alias://<id>`, where `<id>` is the value of the target
//! heading's `<link src="...">` marker. Once every node is numbered the tokens are rewritten into
//! relative links for the page that contains them.

use crate::error::{Error, Result};
use crate::links::{compute_link, LinkStyle};
use crate::node::NodeId;
use crate::paths::NumberedTree;
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

/// Grammar of a section id: word characters and hyphens, optionally in dot-separated groups.
///
/// A trailing `.` is never part of an id, so `alias://intro.` at the end of a sentence resolves.
pub const SECTION_ID_PATTERN: &str = r"[\w-]+(?:\.[\w-]+)*";

static ALIAS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(&format!("alias://({SECTION_ID_PATTERN})")).unwrap());

/// Lookup from section id to node, validated to be one-to-one.
pub struct AliasIndex {
    ids: HashMap<String, NodeId>,
}

impl AliasIndex {
    /// Indexes every section id in the book.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateSectionId` naming both sections if an id appears twice.
    pub fn new(book: &NumberedTree) -> Result<Self> {
        let tree = book.tree();
        let order = book.document_order();
        let mut ids: HashMap<String, NodeId> = HashMap::with_capacity(order.len());

        for &id in &order {
            let node = &tree[id];
            if let Some(&first) = ids.get(&node.id) {
                let first = &tree[first];
                return Err(Error::DuplicateSectionId {
                    id: node.id.clone(),
                    first_file: first.source_file.clone(),
                    first_line: first.source_line,
                    second_file: node.source_file.clone(),
                    second_line: node.source_line,
                });
            }
            ids.insert(node.id.clone(), id);
        }

        Ok(Self { ids })
    }

    #[must_use]
    /// Node carrying `id`, if any.
    pub fn get(&self, id: &str) -> Option<NodeId> {
        self.ids.get(id).copied()
    }

    /// Rewrites every alias token in `content`, which belongs to the node `from`.
    ///
    /// # Errors
    ///
    /// Returns `UnresolvedAlias` for a token whose id no section carries.
    pub fn resolve(
        &self,
        book: &NumberedTree,
        content: &str,
        from: NodeId,
        style: &LinkStyle,
    ) -> Result<String> {
        let tree = book.tree();
        let source = &tree[from];
        let mut resolved = String::with_capacity(content.len());
        let mut last = 0;

        for caps in ALIAS.captures_iter(content) {
            let (Some(token), Some(id)) = (caps.get(0), caps.get(1)) else {
                continue;
            };
            let target = self.get(id.as_str()).ok_or_else(|| Error::UnresolvedAlias {
                id: id.as_str().to_string(),
                file: source.source_file.clone(),
                line: source.source_line,
            })?;
            let link = compute_link(&tree[target].path, &source.path, style);
            tracing::debug!(alias = id.as_str(), %link, from = %source.path, "resolved alias");

            resolved.push_str(&content[last..token.start()]);
            resolved.push_str(&link);
            last = token.end();
        }
        resolved.push_str(&content[last..]);

        Ok(resolved)
    }
}

#[must_use]
/// Whether any alias token remains in `content`.
pub fn has_alias(content: &str) -> bool {
    ALIAS.is_match(content)
}

#[cfg(test)]
#[path = "tests/alias.rs"]
mod tests;
