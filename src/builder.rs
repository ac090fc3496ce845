//! Per-fragment section tree construction.
//!
//! Headings are consumed in order against a stack of open ancestors whose length is the current
//! depth. A heading one level deeper than the stack opens a child; a shallower or equal heading
//! first pops back to its parent. Each section's body runs from the line after its heading to the
//! line before the next heading, so the previous section is trimmed whenever a new one opens.

use crate::error::{Error, Result};
use crate::heading::HeadingEvent;
use crate::node::{Node, NodeId, Tree};
use std::path::Path;

/// Builds the section tree of one fragment into `tree` and returns the fragment's root.
///
/// The fragment's first heading must be level 1 and becomes the root; every later heading nests
/// under it. Lines before the first heading are discarded.
///
/// # Errors
///
/// - `StrandedHeader` if a heading skips a level.
/// - `OverindentedHeader` if a heading closes more sections than are open, which only a level
///   below 1 can do.
/// - `MultipleRootHeadings` if a second level-1 heading appears, i.e. a heading would climb above
///   the fragment's root.
/// - `MissingSectionId` if a heading lacks its id marker.
/// - `NoHeadings` if the fragment has no headings.
pub fn build_file_tree(
    tree: &mut Tree,
    file: &Path,
    lines: &[String],
    events: &[HeadingEvent],
) -> Result<NodeId> {
    let mut open: Vec<NodeId> = Vec::new();
    let mut root: Option<NodeId> = None;
    let mut previous: Option<(NodeId, usize)> = None;

    for event in events {
        let depth = open.len();
        if event.level > depth + 1 {
            return Err(Error::StrandedHeader {
                file: file.to_path_buf(),
                line: event.line,
                heading: event.title().to_string(),
            });
        }
        for _ in event.level..=depth {
            if open.pop().is_none() {
                return Err(Error::OverindentedHeader {
                    file: file.to_path_buf(),
                    line: event.line,
                    heading: event.title().to_string(),
                });
            }
        }
        let parent = open.last().copied();
        if parent.is_none() && root.is_some() {
            return Err(Error::MultipleRootHeadings {
                file: file.to_path_buf(),
                line: event.line,
                heading: event.title().to_string(),
            });
        }

        let id = event.section_id().ok_or_else(|| Error::MissingSectionId {
            file: file.to_path_buf(),
            line: event.line,
            heading: event.raw().to_string(),
        })?;

        let mut node = Node::new(event.title(), id, file.to_path_buf(), event.line);
        node.content = slice_lines(lines, event.line, lines.len());
        let node_id = tree.push(node);
        match parent {
            Some(parent) => tree.attach(parent, node_id),
            None => root = Some(node_id),
        }

        if let Some((prev, prev_line)) = previous {
            tree[prev].content = slice_lines(lines, prev_line, event.line - 1);
        }
        previous = Some((node_id, event.line));
        open.push(node_id);
    }

    root.ok_or_else(|| Error::NoHeadings {
        file: file.to_path_buf(),
    })
}

/// Lines in `start..end` (0-based, end exclusive), clamped to the input.
fn slice_lines(lines: &[String], start: usize, end: usize) -> Vec<String> {
    let end = end.min(lines.len());
    let start = start.min(end);
    lines[start..end].to_vec()
}

#[cfg(test)]
#[path = "tests/builder.rs"]
mod tests;
