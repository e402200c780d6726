#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

pub fn moodlog_cmd() -> Command {
    let mut cmd = Command::cargo_bin("moodlog").unwrap();
    cmd.env_remove("MOODLOG_ROOT");
    cmd.env_remove("MOODLOG_TODAY");
    cmd.env_remove("MOODLOG_LOG");
    cmd.env_remove("EDITOR");
    cmd.env_remove("VISUAL");
    cmd
}

/// Command running inside `dir` with "today" pinned to `today`
pub fn moodlog_on(dir: &Path, today: &str) -> Command {
    let mut cmd = moodlog_cmd();
    cmd.current_dir(dir).env("MOODLOG_TODAY", today);
    cmd
}

pub fn init_journal(dir: &Path) {
    moodlog_cmd().arg("init").arg(dir).assert().success();
}

pub fn entries_json(dir: &Path) -> serde_json::Value {
    let raw = std::fs::read_to_string(dir.join(".moodlog/moodEntries.json")).unwrap();
    serde_json::from_str(&raw).unwrap()
}
