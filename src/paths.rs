//! Positional section paths.
//!
//! After the whole book is assembled every node is numbered by a pre-order walk: the root gets the
//! empty path and the `i`th child of a node at `P` gets `P.i`. The path therefore encodes both
//! sibling order and depth, and is the only input the link and TOC generators need.

use crate::node::{NodeId, Tree};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Dotted 1-based position of a node, e.g. `1.2.3`. The root's path is empty.
pub struct SectionPath(Vec<usize>);

impl SectionPath {
    #[must_use]
    /// The empty path of the book root.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    #[must_use]
    /// Path of this node's `position`th child (1-based).
    pub fn child(&self, position: usize) -> Self {
        let mut components = self.0.clone();
        components.push(position);
        Self(components)
    }

    #[must_use]
    /// Positional components from the unit level down.
    pub fn components(&self) -> &[usize] {
        &self.0
    }

    #[must_use]
    /// Number of components, equal to the node's depth.
    pub fn depth(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    /// Whether this is the root path.
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    #[must_use]
    /// In-page anchor name: the components below unit and chapter, e.g. `3.1` for `1.2.3.1`.
    pub fn anchor(&self) -> Option<String> {
        (self.0.len() > 2).then(|| join(&self.0[2..]))
    }
}

fn join(components: &[usize]) -> String {
    components
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(".")
}

impl fmt::Display for SectionPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&join(&self.0))
    }
}

impl FromStr for SectionPath {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Ok(Self::root());
        }
        s.split('.')
            .map(str::parse)
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}

/// Numbers `root` and everything below it.
pub fn assign_paths(tree: &mut Tree, root: NodeId) {
    tree[root].path = SectionPath::root();
    for current in tree.traverse(root) {
        let base = tree[current].path.clone();
        let children = tree.children(current).to_vec();
        for (position, child) in children.into_iter().enumerate() {
            tree[child].path = base.child(position + 1);
        }
    }
}

#[derive(Debug)]
/// A fully assembled and numbered book.
///
/// Only a numbered tree can produce links, so nothing downstream can observe a missing path.
pub struct NumberedTree {
    tree: Tree,
    root: NodeId,
}

impl NumberedTree {
    #[must_use]
    /// Numbers a complete tree.
    pub fn number(mut tree: Tree, root: NodeId) -> Self {
        assign_paths(&mut tree, root);
        tracing::info!(nodes = tree.traverse(root).len(), "numbered book tree");
        Self { tree, root }
    }

    #[must_use]
    /// The book's entry node.
    pub fn root(&self) -> NodeId {
        self.root
    }

    #[must_use]
    /// The underlying arena.
    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Mutable access to node content. Structure and paths stay fixed.
    pub fn content_mut(&mut self, id: NodeId) -> &mut Vec<String> {
        &mut self.tree[id].content
    }

    #[must_use]
    /// Every node reachable from the root, in document order.
    pub fn document_order(&self) -> Vec<NodeId> {
        self.tree.traverse(self.root)
    }
}

#[cfg(test)]
#[path = "tests/paths.rs"]
mod tests;
