use super::*;
use serde::{Deserialize, Serialize};
use tempfile::tempdir;

#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
struct Doc {
    value: u32,
}

#[test]
fn read_json_returns_none_for_missing_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("missing.json");
    let result: Option<Doc> = read_json(&path).unwrap();
    assert_eq!(result, None);
}

#[test]
fn write_then_read_round_trips() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doc.json");
    write_json(&path, &Doc { value: 7 }).unwrap();
    let result: Option<Doc> = read_json(&path).unwrap();
    assert_eq!(result, Some(Doc { value: 7 }));
}

#[test]
fn write_creates_parent_directories() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("nested").join("dir").join("doc.json");
    write_json(&path, &Doc { value: 1 }).unwrap();
    assert!(path.exists());
}

#[test]
fn second_write_rotates_a_backup() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doc.json");
    write_json(&path, &Doc { value: 1 }).unwrap();
    write_json(&path, &Doc { value: 2 }).unwrap();
    assert!(path.with_extension("bak").exists());
    let result: Option<Doc> = read_json(&path).unwrap();
    assert_eq!(result, Some(Doc { value: 2 }));
}

#[test]
fn malformed_json_is_an_error_not_none() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doc.json");
    std::fs::write(&path, b"not json").unwrap();
    let result: Result<Option<Doc>, _> = read_json(&path);
    assert!(result.is_err());
}
