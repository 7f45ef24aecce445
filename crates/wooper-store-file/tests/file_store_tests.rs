#![allow(missing_docs)]

use std::fs;

use tempfile::TempDir;
use wooper_core::{DateContext, Instant, InstantKind, Task, TaskKind};
use wooper_store_file::{Corruption, FileStore, StoreError};

fn temp_dir() -> TempDir {
    tempfile::tempdir().unwrap_or_else(|err| panic!("tempdir: {err}"))
}

fn at(text: &str) -> Instant {
    Instant::resolve(text, DateContext::Event).unwrap_or_else(|err| panic!("resolve {text}: {err}"))
}

fn sample_tasks() -> Vec<Task> {
    vec![
        Task::todo("read book")
            .unwrap_or_else(|err| panic!("todo: {err}"))
            .with_done(true),
        Task::deadline("return book", at("06/06/2026")).unwrap_or_else(|err| panic!("deadline: {err}")),
        Task::event("project meeting", at("06/08/2026 14:00"), at("06/08/2026 16:00"))
            .unwrap_or_else(|err| panic!("event: {err}")),
    ]
}

#[test]
fn missing_file_loads_as_empty_list() {
    let dir = temp_dir();
    let store = FileStore::new(dir.path().join("data").join("wooper.json"));

    let tasks = store.load().unwrap_or_else(|err| panic!("load: {err}"));

    assert!(tasks.is_empty());
    assert!(!store.path().exists());
}

#[test]
fn save_creates_directory_and_round_trips() {
    let dir = temp_dir();
    let store = FileStore::new(dir.path().join("nested").join("data").join("wooper.json"));
    let tasks = sample_tasks();

    store.save(&tasks).unwrap_or_else(|err| panic!("save: {err}"));
    let loaded = store.load().unwrap_or_else(|err| panic!("load: {err}"));

    assert_eq!(loaded, tasks);
    match loaded[1].kind() {
        TaskKind::Deadline { by } => assert_eq!(by.kind(), InstantKind::Date),
        other => panic!("expected deadline, got {other:?}"),
    }
}

#[test]
fn save_overwrites_previous_snapshot() {
    let dir = temp_dir();
    let store = FileStore::new(dir.path().join("wooper.json"));

    store.save(&sample_tasks()).unwrap_or_else(|err| panic!("first save: {err}"));
    let shorter = vec![Task::todo("only one").unwrap_or_else(|err| panic!("todo: {err}"))];
    store.save(&shorter).unwrap_or_else(|err| panic!("second save: {err}"));

    let loaded = store.load().unwrap_or_else(|err| panic!("load: {err}"));
    assert_eq!(loaded, shorter);

    let leftovers: Vec<_> = fs::read_dir(dir.path())
        .unwrap_or_else(|err| panic!("read_dir: {err}"))
        .filter_map(Result::ok)
        .map(|entry| entry.file_name())
        .collect();
    assert_eq!(leftovers.len(), 1, "temporary files must not linger: {leftovers:?}");
}

#[test]
fn saved_file_is_a_json_array_of_records() {
    let dir = temp_dir();
    let store = FileStore::new(dir.path().join("wooper.json"));
    store.save(&sample_tasks()).unwrap_or_else(|err| panic!("save: {err}"));

    let raw = fs::read_to_string(store.path()).unwrap_or_else(|err| panic!("read: {err}"));
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap_or_else(|err| panic!("json: {err}"));

    assert_eq!(
        value,
        serde_json::json!([
            {"type": "T", "desc": "read book", "done": true},
            {"type": "D", "desc": "return book", "done": false, "by": "2026-06-06"},
            {
                "type": "E",
                "desc": "project meeting",
                "done": false,
                "from": "2026-08-06T14:00",
                "to": "2026-08-06T16:00"
            }
        ])
    );
}

#[test]
fn blank_deadline_fails_entire_load() {
    let dir = temp_dir();
    let path = dir.path().join("wooper.json");
    fs::write(
        &path,
        r#"[{"type":"T","desc":"ok"},{"type":"D","desc":"due","by":"   "}]"#,
    )
    .unwrap_or_else(|err| panic!("write: {err}"));

    let err = FileStore::new(&path)
        .load()
        .err()
        .unwrap_or_else(|| panic!("load must fail"));

    assert!(err.is_corrupted());
    assert!(matches!(err, StoreError::Corrupted(Corruption::MissingDeadline)));
    assert_eq!(err.to_string(), "save file is corrupted (missing deadline)");
}

#[test]
fn empty_file_loads_as_empty_list() {
    let dir = temp_dir();
    let path = dir.path().join("wooper.json");
    fs::write(&path, "\n").unwrap_or_else(|err| panic!("write: {err}"));

    let tasks = FileStore::new(&path).load().unwrap_or_else(|err| panic!("load: {err}"));
    assert!(tasks.is_empty());
}

#[test]
fn unreadable_path_is_a_read_error() {
    let dir = temp_dir();
    let err = FileStore::new(dir.path())
        .load()
        .err()
        .unwrap_or_else(|| panic!("loading a directory must fail"));
    assert!(matches!(err, StoreError::Read { .. }));
    assert!(!err.is_corrupted());
}
