//! Section nodes and the arena that owns them.
//!
//! A node represents one heading-delimited section of the book. Nodes live in a single `Tree`
//! arena and refer to each other by index: children are owned in document order, while the
//! parent index is a plain back-reference used to compute depth. Depth is never stored.

use crate::paths::SectionPath;
use std::ops::{Index, IndexMut};
use std::path::PathBuf;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
/// Index of a node within its `Tree`.
pub struct NodeId(usize);

#[derive(Clone, Debug)]
/// One heading-delimited section.
pub struct Node {
    /// Heading text without markup.
    pub title: String,
    /// Stable identifier targeted by `alias://` references.
    pub id: String,
    /// Fragment the heading came from, relative to the book root.
    pub source_file: PathBuf,
    /// 1-based line of the heading in `source_file`.
    pub source_line: usize,
    /// Body lines up to the next heading, each keeping its terminator.
    pub content: Vec<String>,
    /// Subsections in document order.
    pub children: Vec<NodeId>,
    /// Enclosing section, if attached.
    pub parent: Option<NodeId>,
    /// Dotted position, empty until numbered.
    pub path: SectionPath,
}

impl Node {
    #[must_use]
    /// Creates a detached node with no content.
    pub fn new(title: &str, id: &str, source_file: PathBuf, source_line: usize) -> Self {
        Self {
            title: title.to_string(),
            id: id.to_string(),
            source_file,
            source_line,
            content: Vec::new(),
            children: Vec::new(),
            parent: None,
            path: SectionPath::root(),
        }
    }
}

#[derive(Clone, Debug, Default)]
/// Arena owning every node of a book.
pub struct Tree {
    nodes: Vec<Node>,
}

impl Tree {
    #[must_use]
    /// Creates an empty arena.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a detached node and returns its id.
    pub fn push(&mut self, node: Node) -> NodeId {
        self.nodes.push(node);
        NodeId(self.nodes.len() - 1)
    }

    /// Appends `child` as the last child of `parent`.
    ///
    /// A node is attached at most once; reattaching moves it rather than duplicating it.
    pub fn attach(&mut self, parent: NodeId, child: NodeId) {
        if let Some(old) = self.nodes[child.0].parent {
            self.nodes[old.0].children.retain(|&c| c != child);
        }
        self.nodes[parent.0].children.push(child);
        self.nodes[child.0].parent = Some(parent);
    }

    #[must_use]
    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    /// Whether the arena holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    /// Direct children of a node, in document order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    #[must_use]
    /// Enclosing node, if any.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    #[must_use]
    /// Number of parent links between a node and the root of its tree.
    pub fn depth(&self, id: NodeId) -> usize {
        let mut depth = 0;
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            depth += 1;
            current = parent;
        }
        depth
    }

    #[must_use]
    /// Pre-order walk starting at (and including) `id`.
    pub fn traverse(&self, id: NodeId) -> Vec<NodeId> {
        let mut order = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            order.push(current);
            stack.extend(self.children(current).iter().rev());
        }
        order
    }

    #[must_use]
    /// Pre-order walk of everything below `id`, excluding `id` itself.
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut order = self.traverse(id);
        order.remove(0);
        order
    }
}

impl Index<NodeId> for Tree {
    type Output = Node;

    fn index(&self, id: NodeId) -> &Node {
        &self.nodes[id.0]
    }
}

impl IndexMut<NodeId> for Tree {
    fn index_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id.0]
    }
}
