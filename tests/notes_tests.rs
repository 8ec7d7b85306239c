//! Saved notes on the file-backed store

use chrono::{TimeZone, Utc};
use pretty_assertions::assert_eq;
use tempfile::TempDir;
use voxtex::notes::{FileStore, KeyValueStore, NoteBook, NotesConfig, DEFAULT_NAMESPACE};

fn open(dir: &TempDir) -> NoteBook<FileStore> {
    NoteBook::open(FileStore::new(dir.path()), DEFAULT_NAMESPACE).unwrap()
}

#[test]
fn test_save_then_load_includes_note() {
    let dir = TempDir::new().unwrap();
    let mut book = open(&dir);
    let saved = book.save("Quadratic", "x^{2} + 1\n").unwrap();

    let reopened = open(&dir);
    assert_eq!(reopened.len(), 1);
    assert_eq!(reopened.get(saved.id), Some(&saved));
}

#[test]
fn test_delete_removes_exactly_one() {
    let dir = TempDir::new().unwrap();
    let mut book = open(&dir);
    let base = Utc.timestamp_millis_opt(1_700_000_000_000).unwrap();
    let a = book.save_at("a", "\\alpha", base).unwrap();
    let b = book.save_at("b", "\\beta", base).unwrap();
    let c = book.save_at("c", "\\gamma", base).unwrap();

    assert!(book.delete(b.id).unwrap());
    assert!(!book.delete(b.id).unwrap());

    let reopened = open(&dir);
    let remaining: Vec<_> = reopened.notes().cloned().collect();
    assert_eq!(remaining, vec![a.clone(), c.clone()]);
    let newest: Vec<u64> = reopened.recent_first().iter().map(|n| n.id).collect();
    assert_eq!(newest, vec![c.id, a.id]);
}

#[test]
fn test_stored_format_is_a_json_array() {
    let dir = TempDir::new().unwrap();
    let mut book = open(&dir);
    book.save("t", "x").unwrap();

    let text = FileStore::new(dir.path())
        .get(DEFAULT_NAMESPACE)
        .unwrap()
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&text).unwrap();
    let notes = value.as_array().unwrap();
    assert_eq!(notes.len(), 1);
    for key in ["id", "title", "content", "timestamp"] {
        assert!(notes[0].get(key).is_some(), "missing {}", key);
    }
}

#[test]
fn test_corrupt_file_is_fatal_and_preserved() {
    let dir = TempDir::new().unwrap();
    let path = FileStore::new(dir.path()).path_for(DEFAULT_NAMESPACE);
    std::fs::write(&path, "[{\"id\": \"oops\"").unwrap();

    let err = NoteBook::open(FileStore::new(dir.path()), DEFAULT_NAMESPACE).unwrap_err();
    assert!(err.is_corrupt_store());
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "[{\"id\": \"oops\"");
}

#[test]
fn test_open_configured_uses_namespace_file() {
    let dir = TempDir::new().unwrap();
    let config = NotesConfig {
        directory: dir.path().to_path_buf(),
        namespace: "lectureNotes".to_string(),
    };
    let mut book = NoteBook::open_configured(&config).unwrap();
    book.save("t", "x").unwrap();
    assert!(dir.path().join("lectureNotes.json").exists());
}

#[test]
fn test_saved_document_drops_trailing_newlines() {
    let dir = TempDir::new().unwrap();
    let mut book = open(&dir);
    let saved = book.save("Session", "x^{2}\n\\alpha\n").unwrap();
    assert_eq!(saved.content, "x^{2}\n\\alpha");

    let reopened = open(&dir);
    assert_eq!(
        reopened.get(saved.id).map(|n| n.content.as_str()),
        Some("x^{2}\n\\alpha")
    );
}
