//! Unit Tests for Path Resolution

use shellport::paths::{has_trailing_separator, is_absolute_form, normalize, PathResolver};
use std::path::{Path, PathBuf};

fn resolver() -> PathResolver {
    PathResolver::new(PathBuf::from("/home/me"))
}

#[test]
fn test_empty_and_blank_resolve_home() {
    let base = Path::new("/srv/data");
    assert_eq!(resolver().resolve("", base).unwrap(), PathBuf::from("/home/me"));
    assert_eq!(resolver().resolve("   ", base).unwrap(), PathBuf::from("/home/me"));
}

#[test]
fn test_dot_dot_is_parent() {
    let resolved = resolver().resolve("..", Path::new("/srv/data")).unwrap();
    assert_eq!(resolved, PathBuf::from("/srv"));
}

#[test]
fn test_nested_parent_segments_fold() {
    let resolved = resolver().resolve("../logs/./app", Path::new("/srv/data")).unwrap();
    assert_eq!(resolved, PathBuf::from("/srv/logs/app"));
}

#[test]
fn test_parent_segments_stop_at_root() {
    let resolved = resolver().resolve("../../../etc", Path::new("/srv")).unwrap();
    assert_eq!(resolved, PathBuf::from("/etc"));
}

#[test]
fn test_absolute_path_ignores_base() {
    let resolved = resolver().resolve("/etc/hosts", Path::new("/srv")).unwrap();
    assert_eq!(resolved, PathBuf::from("/etc/hosts"));
}

#[test]
fn test_relative_path_joins_current_directory() {
    let resolved = resolver().resolve("docs/readme.md", Path::new("/srv")).unwrap();
    assert_eq!(resolved, PathBuf::from("/srv/docs/readme.md"));
}

#[test]
fn test_drive_letter_forms_are_absolute() {
    assert!(is_absolute_form("C:\\Windows"));
    assert!(is_absolute_form("z:/tmp"));
    assert!(is_absolute_form("\\temp"));
    assert!(!is_absolute_form("Windows"));
    assert!(!is_absolute_form(""));
}

#[test]
fn test_trailing_separator_detection() {
    assert!(has_trailing_separator("out/"));
    assert!(has_trailing_separator("out\\"));
    assert!(!has_trailing_separator("out"));
    assert!(!has_trailing_separator(""));
}

#[test]
fn test_normalize_keeps_leading_parent_of_relative() {
    assert_eq!(normalize(Path::new("../a/./b")), PathBuf::from("../a/b"));
    assert_eq!(normalize(Path::new("a/../../b")), PathBuf::from("../b"));
}

#[test]
fn test_home_accessor() {
    assert_eq!(resolver().home(), Path::new("/home/me"));
}
