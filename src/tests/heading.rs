use super::{parse_headings, split_inline, HeadingEvent, InlineSpan, MarkdownSource};
use crate::error::Error;
use crate::formats::markdown::MarkdownFormat;
use std::fs;
use std::path::{Path, PathBuf};

fn source(text: &str) -> MarkdownSource {
    MarkdownSource {
        path: PathBuf::from("chapter.md"),
        text: text.to_string(),
    }
}

#[test]
fn test_split_inline_separates_marker() {
    let spans = split_inline("Sequence alignment <link src=\"a1b2\"/>");
    assert_eq!(
        spans,
        vec![
            InlineSpan::Text("Sequence alignment".to_string()),
            InlineSpan::Html("<link src=\"a1b2\"/>".to_string()),
        ]
    );
}

#[test]
fn test_section_id_from_marker() {
    let event = HeadingEvent::new(2, "Alignment <link src='x9'>", 4);
    assert_eq!(event.title(), "Alignment");
    assert_eq!(event.section_id(), Some("x9"));
}

#[test]
fn test_section_id_rejects_other_markup() {
    assert_eq!(HeadingEvent::new(1, "Plain title", 1).section_id(), None);
    assert_eq!(
        HeadingEvent::new(1, "Title <img src=\"x\"/>", 1).section_id(),
        None
    );
    assert_eq!(
        HeadingEvent::new(1, "<b>Bold</b> <link src=\"x\"/>", 1).section_id(),
        None
    );
    assert_eq!(
        HeadingEvent::new(1, "Title <link src=\"x\"/> trailing", 1).section_id(),
        None
    );
}

#[test]
fn test_parse_headings_levels_and_lines() {
    let text = "# Intro <link src=\"intro\"/>\n\nSome text.\n\n## Detail <link src=\"detail\"/>\n\nMore.\n";
    let events = parse_headings(&source(text), &MarkdownFormat).unwrap();

    assert_eq!(events.len(), 2);
    assert_eq!(events[0].level, 1);
    assert_eq!(events[0].line, 1);
    assert_eq!(events[0].title(), "Intro");
    assert_eq!(events[1].level, 2);
    assert_eq!(events[1].line, 5);
    assert_eq!(events[1].section_id(), Some("detail"));
}

#[test]
fn test_parse_headings_ignores_fenced_code() {
    let text = "# Intro <link src=\"intro\"/>\n\n```python\n# not a heading\n```\n";
    let events = parse_headings(&source(text), &MarkdownFormat).unwrap();
    assert_eq!(events.len(), 1);
}

#[test]
fn test_read_rejects_non_markdown() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("notes.txt"), "# A").unwrap();

    let err = MarkdownSource::read(dir.path(), Path::new("notes.txt"), &MarkdownFormat)
        .err()
        .unwrap();
    assert!(matches!(err, Error::InvalidInputKind { .. }));
}

#[test]
fn test_read_keeps_relative_path_and_lines() {
    let dir = tempfile::tempdir().unwrap();
    fs::create_dir(dir.path().join("unit")).unwrap();
    fs::write(dir.path().join("unit/ch.md"), "# A\nbody\nlast").unwrap();

    let src = MarkdownSource::read(dir.path(), Path::new("unit/ch.md"), &MarkdownFormat).unwrap();
    assert_eq!(src.path, PathBuf::from("unit/ch.md"));
    assert_eq!(src.lines(), vec!["# A\n", "body\n", "last"]);
}

#[test]
fn test_code_spans_are_text() {
    let event = HeadingEvent::new(1, "Using `Vec<T>` <link src=\"vec\"/>", 1);
    assert_eq!(
        event.spans,
        vec![
            InlineSpan::Text("Using `Vec<T>`".to_string()),
            InlineSpan::Html("<link src=\"vec\"/>".to_string()),
        ]
    );
    assert_eq!(event.title(), "Using `Vec<T>`");
    assert_eq!(event.section_id(), Some("vec"));

    let doubled = split_inline("Ticks ``a ` <b>`` <link src=\"t\"/>");
    assert_eq!(doubled[0], InlineSpan::Text("Ticks ``a ` <b>``".to_string()));
    assert_eq!(doubled.len(), 2);
}

#[test]
fn test_unclosed_backtick_is_literal() {
    let spans = split_inline("a ` <b> c");
    assert_eq!(
        spans,
        vec![
            InlineSpan::Text("a `".to_string()),
            InlineSpan::Html("<b>".to_string()),
            InlineSpan::Text("c".to_string()),
        ]
    );
}

#[test]
fn test_section_id_must_fit_alias_grammar() {
    for bad in ["intro/more", "book:main", "has space", "trailing."] {
        let inline = format!("Title <link src=\"{bad}\"/>");
        assert_eq!(HeadingEvent::new(1, &inline, 1).section_id(), None, "{bad}");
    }
    let event = HeadingEvent::new(1, "Title <link src=\"unit-2.ch_3\"/>", 1);
    assert_eq!(event.section_id(), Some("unit-2.ch_3"));
}

#[test]
fn test_raw_keeps_heading_verbatim() {
    let event = HeadingEvent::new(1, "Using `Vec<T>` <b>x</b>", 1);
    assert_eq!(event.raw(), "Using `Vec<T>` <b>x</b>");
}

#[test]
fn test_parse_headings_with_code_span_title() {
    let text = "# Using `Vec<T>` <link src=\"vec\"/>\n\nBody.\n";
    let events = parse_headings(&source(text), &MarkdownFormat).unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].title(), "Using `Vec<T>`");
    assert_eq!(events[0].section_id(), Some("vec"));
}
