use super::{split_cells, Cell, HtmlRenderer, NotebookRenderer, OutputFormat, Renderer};
use crate::error::Error;

#[test]
fn test_format_names_and_aliases() {
    assert_eq!("markdown".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
    assert_eq!("ipynb".parse::<OutputFormat>().unwrap(), OutputFormat::Notebook);
    assert_eq!("s3".parse::<OutputFormat>().unwrap(), OutputFormat::Website);
    for name in OutputFormat::NAMES {
        let format: OutputFormat = name.parse().unwrap();
        assert_eq!(format.to_string(), name);
    }
}

#[test]
fn test_unknown_format() {
    match "pdf".parse::<OutputFormat>().unwrap_err() {
        Error::UnknownFormat { name, known } => {
            assert_eq!(name, "pdf");
            assert!(known.contains("notebook"));
        }
        other => panic!("expected UnknownFormat, got {other:?}"),
    }
}

#[test]
fn test_link_conventions_per_format() {
    let notebook = OutputFormat::Notebook.link_style();
    assert_eq!(notebook.extension, ".ipynb");
    assert!(!notebook.short_index);

    let website = OutputFormat::Website.link_style();
    assert_eq!(website.extension, "");
    assert!(website.short_index);
    assert!(OutputFormat::Html.is_html());
    assert!(!OutputFormat::Markdown.is_html());
}

#[test]
fn test_python_fences_become_code_cells() {
    let page = "# Title\n\nIntro.\n\n```python\nx = 1\nprint(x)\n```\n\nAfter.\n```bash\nls\n```\n";
    let cells = split_cells(page);

    assert_eq!(cells.len(), 3);
    assert!(matches!(&cells[0], Cell::Markdown { source, .. } if source[0] == "# Title\n"));
    assert!(matches!(
        &cells[1],
        Cell::Code { source, .. } if source == &vec!["x = 1\n".to_string(), "print(x)".to_string()]
    ));
    match &cells[2] {
        Cell::Markdown { source, .. } => {
            assert!(source.contains(&"```bash\n".to_string()));
            assert_eq!(source.last().map(String::as_str), Some("```"));
        }
        Cell::Code { .. } => panic!("bash fence should stay markdown"),
    }
}

#[test]
fn test_notebook_is_valid_json() {
    let bytes = NotebookRenderer.render("# Title\n\n```\n1 + 1\n```\n").unwrap();
    let notebook: serde_json::Value = serde_json::from_slice(&bytes).unwrap();

    assert_eq!(notebook["nbformat"], 4);
    let cells = notebook["cells"].as_array().unwrap();
    assert_eq!(cells.len(), 2);
    assert_eq!(cells[0]["cell_type"], "markdown");
    assert_eq!(cells[1]["cell_type"], "code");
    assert_eq!(cells[1]["source"][0], "1 + 1");
    assert!(cells[1]["outputs"].as_array().unwrap().is_empty());
}

#[test]
fn test_html_keeps_inline_anchors() {
    let page = "## [1.1.2](#2) Detail <a name='2'></a>\n\nSee [next](2.html).\n";
    let html = String::from_utf8(HtmlRenderer { stylesheet: true }.render(page).unwrap()).unwrap();

    assert!(html.starts_with("<!DOCTYPE html>"));
    assert!(html.contains("<a name='2'></a>"));
    assert!(html.contains("<a href=\"2.html\">next</a>"));
    assert!(html.contains("href=\"custom.css\""));

    let plain =
        String::from_utf8(HtmlRenderer { stylesheet: false }.render(page).unwrap()).unwrap();
    assert!(!plain.contains("custom.css"));
}
