use super::BookConfig;
use crate::error::Error;
use std::fs;
use std::path::Path;

#[test]
fn test_defaults_when_file_absent() {
    let dir = tempfile::tempdir().unwrap();
    let config = BookConfig::load(dir.path()).unwrap();
    assert_eq!(config.repo, "");
    assert_eq!(config.root, "");
    assert_eq!(config.branch, "master");
    assert_eq!(config.edit_url(Path::new("index.md"), 1), None);
}

#[test]
fn test_load_from_toml() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("biab.toml"),
        "repo = \"owner/course\"\nroot = \"book/\"\n",
    )
    .unwrap();

    let config = BookConfig::load(dir.path()).unwrap();
    assert_eq!(config.repo, "owner/course");
    assert_eq!(config.branch, "master");
    assert_eq!(
        config.edit_url(Path::new("unit/ch.md"), 12).as_deref(),
        Some("https://github.com/owner/course/edit/master/book/unit/ch.md#L12")
    );
}

#[test]
fn test_edit_url_without_root() {
    let mut config = BookConfig::defaults();
    config.repo = "owner/course".to_string();
    config.branch = "main".to_string();
    assert_eq!(
        config.edit_url(Path::new("index.md"), 1).as_deref(),
        Some("https://github.com/owner/course/edit/main/index.md#L1")
    );
}

#[test]
fn test_invalid_toml() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("biab.toml"), "repo = \n").unwrap();

    let err = BookConfig::load(dir.path()).err().unwrap();
    assert!(matches!(err, Error::Config { .. }));
}
