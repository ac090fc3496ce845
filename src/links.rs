//! Relative links between numbered sections.
//!
//! The book is laid out in three tiers. Path component 0 is a unit, rendered as its own directory;
//! component 1 is a chapter, rendered as its own file inside that directory; deeper components are
//! anchors within the chapter page. A link is computed from the page the source node renders on,
//! so it only has to know both paths and the output format's file conventions.

use crate::paths::SectionPath;
use std::fmt::Write;

#[derive(Clone, Debug, PartialEq, Eq)]
/// File naming conventions of an output format.
pub struct LinkStyle {
    /// Extension appended to page names, including the dot (empty for extensionless pages).
    pub extension: String,
    /// Leave directory links bare instead of naming their `index` page.
    pub short_index: bool,
}

impl LinkStyle {
    #[must_use]
    /// Creates a style from an extension and index convention.
    pub fn new(extension: &str, short_index: bool) -> Self {
        Self {
            extension: extension.to_string(),
            short_index,
        }
    }
}

#[must_use]
/// Link from the page rendering `from` to the section at `target`.
///
/// Linking a node to itself, or to a section whose page and anchor coincide with the current
/// location, gives an empty link.
pub fn compute_link(target: &SectionPath, from: &SectionPath, style: &LinkStyle) -> String {
    let target = target.components();
    let from = from.components();
    let mut link = String::new();
    let mut changed_dir = false;

    let (target_unit, from_unit) = (target.first(), from.first());
    if target_unit != from_unit {
        if from_unit.is_some() {
            changed_dir = true;
            link.push_str("../");
        }
        if let Some(unit) = target_unit {
            let _ = write!(link, "{unit}/");
        }
    }

    match target.get(1) {
        Some(chapter) if changed_dir || from.get(1) != Some(chapter) => {
            let _ = write!(link, "{chapter}{}", style.extension);
        }
        None if target_unit.is_some() && !changed_dir && from.len() > 1 => {
            link.push_str("./");
        }
        _ => {}
    }

    if let Some((first, rest)) = target.get(2..).and_then(<[usize]>::split_first) {
        let _ = write!(link, "#{first}");
        for component in rest {
            let _ = write!(link, ".{component}");
        }
    }

    if !style.short_index && link.ends_with('/') {
        let _ = write!(link, "index{}", style.extension);
    }

    link
}

#[cfg(test)]
#[path = "tests/links.rs"]
mod tests;
