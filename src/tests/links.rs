use super::{compute_link, LinkStyle};
use crate::paths::SectionPath;

fn link(target: &str, from: &str, style: &LinkStyle) -> String {
    let target: SectionPath = target.parse().unwrap();
    let from: SectionPath = from.parse().unwrap();
    compute_link(&target, &from, style)
}

fn notebook() -> LinkStyle {
    LinkStyle::new(".ipynb", false)
}

fn website() -> LinkStyle {
    LinkStyle::new("", true)
}

#[test]
fn test_self_link_stays_on_page() {
    for path in ["", "1", "1.2"] {
        assert_eq!(link(path, path, &notebook()), "", "path {path:?}");
        assert_eq!(link(path, path, &website()), "", "path {path:?}");
    }
    assert_eq!(link("1.2.3", "1.2.3", &notebook()), "#3");
    assert_eq!(link("2.1.4.1", "2.1.4.1", &website()), "#4.1");
}

#[test]
fn test_same_chapter_uses_anchor_only() {
    assert_eq!(link("1.2.3", "1.2", &notebook()), "#3");
    assert_eq!(link("1.2.3.1", "1.2.4", &notebook()), "#3.1");
}

#[test]
fn test_other_chapter_same_unit() {
    assert_eq!(link("1.3", "1.2", &notebook()), "3.ipynb");
    assert_eq!(link("1.3.2", "1.2.1", &notebook()), "3.ipynb#2");
    assert_eq!(link("1.3", "1", &notebook()), "3.ipynb");
}

#[test]
fn test_other_unit_steps_out() {
    assert_eq!(link("2.1", "1.2", &notebook()), "../2/1.ipynb");
    assert_eq!(link("2.1.5", "1.2.3", &notebook()), "../2/1.ipynb#5");
    assert_eq!(link("1.2", "2.2", &notebook()), "../1/2.ipynb");
}

#[test]
fn test_crossing_units_is_symmetric() {
    let forward = link("2.1", "1.3", &notebook());
    let backward = link("1.3", "2.1", &notebook());
    assert_eq!(forward.matches("../").count(), 1);
    assert_eq!(backward.matches("../").count(), 1);
}

#[test]
fn test_directory_links_name_index_unless_short() {
    assert_eq!(link("1", "", &notebook()), "1/index.ipynb");
    assert_eq!(link("1", "", &website()), "1/");
    assert_eq!(link("", "1.2", &notebook()), "../index.ipynb");
    assert_eq!(link("", "1.2", &website()), "../");
    assert_eq!(link("2", "1", &notebook()), "../2/index.ipynb");
}

#[test]
fn test_unit_index_from_inside_unit() {
    assert_eq!(link("1", "1.2", &notebook()), "./index.ipynb");
    assert_eq!(link("1", "1.2.3", &website()), "./");
}

#[test]
fn test_from_front_matter() {
    assert_eq!(link("1.2", "", &notebook()), "1/2.ipynb");
    assert_eq!(link("3.1.2", "", &website()), "3/1#2");
}
