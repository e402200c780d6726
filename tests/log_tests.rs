//! Integration tests for logging, editing and deleting entries

#![allow(deprecated)]

use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

mod common;
use common::{entries_json, init_journal, moodlog_on};

const TODAY: &str = "2025-01-17";

#[test]
fn test_log_creates_entry() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_on(temp.path(), TODAY)
        .args(["log", "good", "--note", "Nice walk", "-a", "exercise,outdoors"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood logged"));

    let entries = entries_json(temp.path());
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["date"], TODAY);
    assert_eq!(entries[0]["mood"], "good");
    assert_eq!(entries[0]["note"], "Nice walk");
    assert_eq!(
        entries[0]["activities"],
        serde_json::json!(["exercise", "outdoors"])
    );
}

#[test]
fn test_log_twice_same_day_updates() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_on(temp.path(), TODAY)
        .args(["log", "bad", "-n", "rough"])
        .assert()
        .success();
    let first_id = entries_json(temp.path())[0]["id"].clone();

    moodlog_on(temp.path(), TODAY)
        .args(["log", "great"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Mood updated"));

    let entries = entries_json(temp.path());
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0]["id"], first_id);
    assert_eq!(entries[0]["mood"], "great");
    // Overwritten with the absent note
    assert!(entries[0].get("note").is_none());
}

#[test]
fn test_log_on_different_days_prepends() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_on(temp.path(), "2025-01-16")
        .args(["log", "neutral"])
        .assert()
        .success();
    moodlog_on(temp.path(), TODAY)
        .args(["log", "terrible"])
        .assert()
        .success();

    let entries = entries_json(temp.path());
    assert_eq!(entries[0]["date"], TODAY);
    assert_eq!(entries[1]["date"], "2025-01-16");
}

#[test]
fn test_log_invalid_mood() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_on(temp.path(), TODAY)
        .args(["log", "ecstatic"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Valid moods"));
}

#[test]
fn test_note_without_entry_fails() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_on(temp.path(), TODAY)
        .args(["note", "hello"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("No entry for 2025-01-17"));
}

#[test]
fn test_note_updates_only_note() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_on(temp.path(), TODAY)
        .args(["log", "good", "-a", "reading"])
        .assert()
        .success();
    moodlog_on(temp.path(), TODAY)
        .args(["note", "Finished the book"])
        .assert()
        .success();

    let entry = &entries_json(temp.path())[0];
    assert_eq!(entry["note"], "Finished the book");
    assert_eq!(entry["mood"], "good");
    assert_eq!(entry["activities"], serde_json::json!(["reading"]));
}

#[test]
fn test_edit_entry_by_id() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_on(temp.path(), TODAY)
        .args(["log", "good", "-n", "keep me", "-a", "work"])
        .assert()
        .success();
    let id = entries_json(temp.path())[0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    moodlog_on(temp.path(), TODAY)
        .args(["edit", &id, "--mood", "bad", "--clear-activities"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated entry"));

    let entry = &entries_json(temp.path())[0];
    assert_eq!(entry["mood"], "bad");
    assert_eq!(entry["note"], "keep me");
    assert!(entry.get("activities").is_none());
}

#[test]
fn test_edit_unknown_id_changes_nothing() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_on(temp.path(), TODAY)
        .args(["log", "good"])
        .assert()
        .success();
    let before = fs::read_to_string(temp.path().join(".moodlog/moodEntries.json")).unwrap();

    moodlog_on(temp.path(), TODAY)
        .args(["edit", "missing", "--mood", "bad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entry with id missing"));

    let after = fs::read_to_string(temp.path().join(".moodlog/moodEntries.json")).unwrap();
    assert_eq!(before, after);
}

#[test]
fn test_delete_entry() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_on(temp.path(), TODAY)
        .args(["log", "good"])
        .assert()
        .success();
    let id = entries_json(temp.path())[0]["id"]
        .as_str()
        .unwrap()
        .to_string();

    moodlog_on(temp.path(), TODAY)
        .args(["delete", &id])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry deleted"));

    assert_eq!(entries_json(temp.path()), serde_json::json!([]));
}

#[test]
fn test_delete_unknown_id_is_silent_noop() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());

    moodlog_on(temp.path(), TODAY)
        .args(["log", "good"])
        .assert()
        .success();

    moodlog_on(temp.path(), TODAY)
        .args(["delete", "missing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Entry deleted").not());

    assert_eq!(entries_json(temp.path()).as_array().unwrap().len(), 1);
}

#[test]
fn test_corrupt_entries_file_starts_empty() {
    let temp = TempDir::new().unwrap();
    init_journal(temp.path());
    fs::write(temp.path().join(".moodlog/moodEntries.json"), "{oops").unwrap();

    moodlog_on(temp.path(), TODAY)
        .arg("history")
        .assert()
        .success()
        .stdout(predicate::str::contains("No mood entries yet"));

    moodlog_on(temp.path(), TODAY)
        .args(["log", "good"])
        .assert()
        .success();
    assert_eq!(entries_json(temp.path()).as_array().unwrap().len(), 1);
}
