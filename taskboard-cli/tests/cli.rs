//! End-to-end tests of the `taskboard` binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const SCRIPT: &str = "\
- op: add_column
- op: add_column
- op: add_task
  column: col-1
- op: drag_start
  item: { kind: task, id: task-1 }
- op: drag_over
  active: { kind: task, id: task-1 }
  over: { kind: column, id: col-2 }
- op: drag_end
  active: { kind: task, id: task-1 }
  over: { kind: column, id: col-2 }
";

/// A `taskboard` command isolated from the caller's config and environment
fn taskboard(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("taskboard").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env_remove("TASKBOARD_IDS")
        .env_remove("TASKBOARD_COLUMN_LABEL")
        .env_remove("TASKBOARD_TASK_LABEL")
        .env_remove("TASKBOARD_LOG_LEVEL");
    cmd
}

#[test]
fn test_replay_prints_final_board_as_json() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("moves.yaml");
    fs::write(&script, SCRIPT).unwrap();

    taskboard(&temp)
        .args(["--sequential-ids", "--format", "json", "replay"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"column_id\": \"col-2\""))
        .stdout(predicate::str::contains("\"content\": \"Task 1\""));
}

#[test]
fn test_replay_yaml_output_uses_project_config() {
    let temp = TempDir::new().unwrap();
    fs::create_dir_all(temp.path().join(".taskboard")).unwrap();
    fs::write(
        temp.path().join(".taskboard/config.yaml"),
        "ids: sequential\ncolumn_label: Lane\n",
    )
    .unwrap();
    let script = temp.path().join("moves.yaml");
    fs::write(&script, SCRIPT).unwrap();

    taskboard(&temp)
        .arg("replay")
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("title: Lane 2"))
        .stdout(predicate::str::contains("column_id: col-2"));
}

#[test]
fn test_quiet_still_prints_board() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("moves.yaml");
    fs::write(&script, SCRIPT).unwrap();

    taskboard(&temp)
        .args(["-q", "-v", "--sequential-ids", "replay"])
        .arg(&script)
        .assert()
        .success()
        .stdout(predicate::str::contains("column_id: col-2"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_replay_missing_script_fails() {
    let temp = TempDir::new().unwrap();

    taskboard(&temp)
        .args(["replay", "does-not-exist.yaml"])
        .assert()
        .failure()
        .code(1);
}

#[test]
fn test_replay_malformed_script_fails() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("bad.json");
    fs::write(&script, r#"[{"op": "teleport"}]"#).unwrap();

    taskboard(&temp)
        .arg("replay")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_missing_config_file_fails() {
    let temp = TempDir::new().unwrap();
    let script = temp.path().join("moves.yaml");
    fs::write(&script, SCRIPT).unwrap();

    taskboard(&temp)
        .args(["--config", "missing.toml", "replay"])
        .arg(&script)
        .assert()
        .failure();
}

#[test]
fn test_demo_prints_every_step() {
    let temp = TempDir::new().unwrap();

    taskboard(&temp)
        .args(["--sequential-ids", "demo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("# initial board"))
        .stdout(predicate::str::contains("# task dragged into the empty Done column"));
}
