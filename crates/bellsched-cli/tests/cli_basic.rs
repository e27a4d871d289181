//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run against a temporary config file
//! and the core crate's fixture schedule book.

use std::path::{Path, PathBuf};
use std::process::Command;

fn book_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../bellsched-core/tests/fixtures/book.toml")
}

/// Run a CLI command with `--config <config>` and return (stdout, stderr, code).
fn run_cli(config: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-q", "-p", "bellsched-cli", "--"])
        .arg("--config")
        .arg(config)
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn write_config(dir: &Path) -> PathBuf {
    let path = dir.join("config.toml");
    let content = format!(
        r#"
lunch = [false, false]
book_path = "{}"

[[roster]]
name = "Algebra"
teacher = "N"
room = "204"

[[roster]]
name = "Biology"
teacher = "Ruiz"
room = "118"

[[roster]]
name = "Chemistry"

[[roster]]
name = "Debate"

[[events]]
title = "Counselor"
start_time = "10:30"
end_time = "11:15"
"#,
        book_path().display().to_string().replace('\\', "/")
    );
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_day_json() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let (stdout, stderr, code) = run_cli(
        &config,
        &["day", "--date", "2026-10-19", "--time", "9:27", "--json"],
    );
    assert_eq!(code, 0, "day failed: {stderr}");

    let entries: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 7);
    assert_eq!(entries[1]["kind"], "passingPeriod");
    assert_eq!(entries[1]["isCurrent"], true);
    assert_eq!(entries[3]["kind"], "custom");
}

#[test]
fn test_day_text() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let (stdout, stderr, code) =
        run_cli(&config, &["day", "--date", "2026-10-19", "--time", "8:30"]);
    assert_eq!(code, 0, "day failed: {stderr}");
    assert!(stdout.contains("Gold 1"));
    assert!(stdout.contains("> 8:00 to 9:25"));
    assert!(stdout.contains("Algebra (204)"));
}

#[test]
fn test_day_without_schedule() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let (stdout, _, code) = run_cli(&config, &["day", "--date", "2026-10-24", "--time", "9:00"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("No schedule today."));
}

#[test]
fn test_compact() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let (stdout, stderr, code) = run_cli(
        &config,
        &["compact", "--date", "2026-10-19", "--time", "10:45", "--json"],
    );
    assert_eq!(code, 0, "compact failed: {stderr}");

    let entries: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let entries = entries.as_array().unwrap();
    assert_eq!(entries.len(), 2);
    assert_eq!(entries[0]["className"], "Biology");
    assert_eq!(entries[1]["title"], "Counselor");
}

#[test]
fn test_conflicts() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let (stdout, stderr, code) = run_cli(&config, &["conflicts", "--date", "2026-10-19"]);
    assert_eq!(code, 0, "conflicts failed: {stderr}");
    assert!(stdout.contains("Major: Counselor"));
    assert!(stdout.contains("Minor: Counselor"));
}

#[test]
fn test_conflicts_rejects_time_flag() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let (_, stderr, code) = run_cli(&config, &["conflicts", "--time", "9:00"]);
    assert_eq!(code, 2);
    assert!(stderr.contains("--time"));
}

#[test]
fn test_invalid_time_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = write_config(dir.path());
    let (_, stderr, code) = run_cli(&config, &["day", "--time", "lunchtime"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_missing_book_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    let (_, _, code) = run_cli(&config, &["config", "reset"]);
    assert_eq!(code, 0);

    let (_, stderr, code) = run_cli(&config, &["day"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("no schedule book configured"));
}

#[test]
fn test_config_set_get() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.toml");
    assert_eq!(run_cli(&config, &["config", "reset"]).2, 0);

    let (stdout, _, code) = run_cli(&config, &["config", "set", "lunch.1", "true"]);
    assert_eq!(code, 0);
    assert!(stdout.contains("ok"));

    let (stdout, _, code) = run_cli(&config, &["config", "get", "lunch.1"]);
    assert_eq!(code, 0);
    assert_eq!(stdout.trim(), "true");

    let (_, _, code) = run_cli(&config, &["config", "get", "nope"]);
    assert_eq!(code, 1);
}
