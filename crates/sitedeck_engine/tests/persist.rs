use std::fs;

use sitedeck_engine::{ensure_dir, AtomicFileWriter, FileStore, KeyValueStore};
use tempfile::TempDir;

#[test]
fn creates_missing_data_dir() {
    let temp = TempDir::new().unwrap();
    let new_dir = temp.path().join("data");
    assert!(!new_dir.exists());
    ensure_dir(&new_dir).unwrap();
    assert!(new_dir.is_dir());
}

#[test]
fn atomic_write_replaces_existing() {
    let temp = TempDir::new().unwrap();
    let writer = AtomicFileWriter::new(temp.path().to_path_buf());

    let first = writer.write("sites.json", "[1]").unwrap();
    assert_eq!(first.file_name().unwrap(), "sites.json");
    assert_eq!(fs::read_to_string(&first).unwrap(), "[1]");

    let second = writer.write("sites.json", "[2]").unwrap();
    assert_eq!(first, second);
    assert_eq!(fs::read_to_string(&second).unwrap(), "[2]");
}

#[test]
fn no_partial_file_when_dir_is_a_file() {
    let temp = TempDir::new().unwrap();
    let file_path = temp.path().join("not_a_dir");
    fs::write(&file_path, "x").unwrap();

    let writer = AtomicFileWriter::new(file_path.clone());
    assert!(writer.write("sites.json", "[]").is_err());
    assert!(!file_path.with_file_name("sites.json").exists());
}

#[test]
fn file_store_get_set_remove() {
    let temp = TempDir::new().unwrap();
    let mut store = FileStore::new(temp.path().join("nested"));

    assert_eq!(store.get("sites").unwrap(), None);
    store.set("sites", "[\"a\"]").unwrap();
    assert_eq!(store.get("sites").unwrap().as_deref(), Some("[\"a\"]"));
    assert!(store.path_for("sites").unwrap().is_file());

    store.remove("sites").unwrap();
    assert_eq!(store.get("sites").unwrap(), None);
    store.remove("sites").unwrap();
}

#[test]
fn file_store_rejects_traversal_keys() {
    let temp = TempDir::new().unwrap();
    let mut store = FileStore::new(temp.path());
    assert!(store.set("../outside", "x").is_err());
    assert!(store.get("a/b").is_err());
}
