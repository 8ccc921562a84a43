//! CLI integration tests

mod support;

use std::fs;
use support::{init_committed_repo, run_cli};
use tempfile::TempDir;

#[test]
fn test_cli_help() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cli(&["--help"], temp_dir.path());

    assert_eq!(output.status, 0);
    assert!(output.stdout.contains("Usage:"));
    assert!(output.stdout.contains("status"));
    assert!(output.stdout.contains("init"));
}

#[test]
fn test_cli_invalid_subcommand() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cli(&["push"], temp_dir.path());
    assert_ne!(output.status, 0);
}

#[test]
fn test_cli_init_twice_applies_settings() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(
        temp_dir.path().join("gitwrap.yaml"),
        "settings:\n  user.name: Config User\n  user.email: config@example.com\n",
    )
    .unwrap();

    let output = run_cli(&["-C", "work", "init"], temp_dir.path());
    assert_eq!(output.status, 0, "stderr: {}", output.stderr);
    assert_eq!(output.stdout.trim(), "true");
    assert!(output.stderr.contains("Init new git repository"));

    let output = run_cli(&["-C", "work", "run", "config", "user.name"], temp_dir.path());
    assert_eq!(output.status, 0);
    assert_eq!(output.stdout.trim(), "Config User");

    let output = run_cli(&["-C", "work", "init"], temp_dir.path());
    assert_eq!(output.status, 0);
    assert_eq!(output.stdout.trim(), "false");
}

#[test]
fn test_cli_exists_and_storage() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_cli(&["exists"], temp_dir.path());
    assert_eq!(output.status, 1);
    assert_eq!(output.stdout.trim(), "false");

    init_committed_repo(temp_dir.path());
    let output = run_cli(&["exists"], temp_dir.path());
    assert_eq!(output.status, 0);
    assert_eq!(output.stdout.trim(), "true");

    let output = run_cli(&["-C", "/srv/repo", "storage"], temp_dir.path());
    assert_eq!(output.stdout.trim(), "/srv/repo/.git");
}

#[test]
fn test_cli_status_text_and_json() {
    let temp_dir = TempDir::new().unwrap();
    init_committed_repo(temp_dir.path());
    fs::write(temp_dir.path().join("README.md"), "changed").unwrap();
    fs::write(temp_dir.path().join("new.txt"), "new").unwrap();

    let output = run_cli(&["status"], temp_dir.path());
    assert_eq!(output.status, 0, "stderr: {}", output.stderr);
    assert!(output.stdout.contains("README.md(modify, None)"));
    assert!(output.stdout.contains("new.txt(untracked, untracked)"));

    let output = run_cli(&["status", "--json", "new.txt"], temp_dir.path());
    assert_eq!(output.status, 0);
    let records: serde_json::Value = serde_json::from_str(&output.stdout).unwrap();
    let records = records.as_array().unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0]["source_path"], "new.txt");
    assert_eq!(records[0]["index_state"], "untracked");
}

#[test]
fn test_cli_status_outside_repository_fails() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cli(&["status"], temp_dir.path());
    assert_ne!(output.status, 0);
    assert!(output.stderr.contains("status query failed"));
    assert!(output.stderr.contains("128"));
}

#[test]
fn test_cli_run_relays_exit_code_and_output() {
    let temp_dir = TempDir::new().unwrap();
    init_committed_repo(temp_dir.path());

    let output = run_cli(&["run", "hash_object", "README.md"], temp_dir.path());
    assert_eq!(output.status, 0);
    assert_eq!(output.stdout.trim().len(), 40);

    let output = run_cli(&["run", "checkout", "no-such-branch"], temp_dir.path());
    assert_ne!(output.status, 0);
    assert!(output.stderr.contains("no-such-branch"));
}

#[test]
fn test_cli_run_rejects_unknown_operation() {
    let temp_dir = TempDir::new().unwrap();
    let output = run_cli(&["run", "hash-object", "x"], temp_dir.path());
    assert_ne!(output.status, 0);
    assert!(output.stderr.contains("unknown operation"));
}

#[test]
fn test_cli_write_config_round_trips() {
    let temp_dir = TempDir::new().unwrap();

    let output = run_cli(&["write-config"], temp_dir.path());
    assert_eq!(output.status, 0, "stderr: {}", output.stderr);
    let written = temp_dir.path().join("gitwrap.yaml");
    let config = gitwrap::Config::load(&written).unwrap();
    assert_eq!(config, gitwrap::Config::default());

    let output = run_cli(&["write-config"], temp_dir.path());
    assert_ne!(output.status, 0);
    assert!(output.stderr.contains("already exists"));

    let output = run_cli(&["write-config", "--force"], temp_dir.path());
    assert_eq!(output.status, 0);
}
