//! Integration tests for the recordwatch CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn recordwatch_bin() -> Command {
    Command::cargo_bin("recordwatch").expect("binary is built")
}

#[test]
fn test_version_command() {
    recordwatch_bin()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains("recordwatch"));
}

#[test]
fn test_help_command() {
    recordwatch_bin()
        .arg("--help")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("init")
                .and(predicate::str::contains("watch"))
                .and(predicate::str::contains("replay"))
                .and(predicate::str::contains("menu"))
                .and(predicate::str::contains("config")),
        );
}

#[test]
fn test_invalid_command() {
    recordwatch_bin()
        .arg("invalid-command-that-does-not-exist")
        .assert()
        .failure();
}

#[test]
fn test_init_creates_config() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");

    recordwatch_bin()
        .arg("init")
        .arg("--path")
        .arg(temp_dir.path())
        .assert()
        .success();

    let content = std::fs::read_to_string(temp_dir.path().join("recordwatch.toml"))
        .expect("Failed to read config");
    assert!(content.contains("[records]"));
    assert!(content.contains("[title]"));
    assert!(content.contains("[clipboard]"));
}

#[test]
fn test_config_show_uses_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("custom.toml");
    std::fs::write(&config_path, "[records]\ncapacity = 7\n").unwrap();

    recordwatch_bin()
        .arg("--config")
        .arg(&config_path)
        .args(["config", "--show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("capacity = 7"));
}

#[test]
fn test_invalid_config_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let config_path = temp_dir.path().join("broken.toml");
    std::fs::write(&config_path, "[records\ncapacity = ").unwrap();

    recordwatch_bin()
        .arg("--config")
        .arg(&config_path)
        .arg("version")
        .assert()
        .failure();
}

#[test]
fn test_replay_prints_lists() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let script = temp_dir.path().join("session.txt");
    std::fs::write(
        &script,
        "title Jane Doe | Contact | Salesforce\n\
         title John Roe | Contact | Salesforce\n\
         title Jane Doe | Contact | Salesforce\n\
         title Recently Viewed | Contacts | Salesforce\n\
         clip CN-1001\n\
         type call co \n\
         show\n",
    )
    .unwrap();

    recordwatch_bin()
        .arg("-q")
        .arg("replay")
        .arg(&script)
        .assert()
        .success()
        .stdout(
            predicate::str::contains("[title] Contact: Jane Doe, John Roe")
                .and(predicate::str::contains("[clipboard] CN-: CN-1001"))
                .and(predicate::str::contains("expanded: call Jane Doe "))
                .and(predicate::str::contains("Ignored: Contacts")),
        );
}

#[test]
fn test_replay_json() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let script = temp_dir.path().join("session.txt");
    std::fs::write(&script, "title 00001 | Case | Salesforce\ncapacity 100\nshow\n").unwrap();

    let output = recordwatch_bin()
        .args(["-q", "replay", "--json"])
        .arg(&script)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<serde_json::Value> = stdout
        .lines()
        .map(|l| serde_json::from_str(l).expect("valid JSON line"))
        .collect();

    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0]["kind"], "update");
    assert_eq!(lines[0]["category"], "Case");
    assert_eq!(lines[1]["capacity"], 50);
    assert_eq!(lines[2]["kind"], "snapshot");
    assert_eq!(lines[2]["categories"][0]["records"][0], "00001");
    assert!(lines[2]["categories"][0]["updated"].is_string());
}

#[test]
fn test_replay_bad_script_fails() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let script = temp_dir.path().join("bad.txt");
    std::fs::write(&script, "show\nfly away\n").unwrap();

    recordwatch_bin()
        .arg("replay")
        .arg(&script)
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_menu_list() {
    recordwatch_bin()
        .args(["menu", "--list"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Other Menu -> Option 4 -> Item 4.2",
        ));
}
