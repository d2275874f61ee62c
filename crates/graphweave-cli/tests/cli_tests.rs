//! Tests for the `gw` binary
//!
//! - `resolve`: resolved plan on success, concern/kind/field on failure
//! - `kinds`: closed kind sets
//! - `init`: example settings file

use assert_cmd::Command;
use graphweave_config::write_settings_file;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn gw() -> Command {
    let mut cmd = Command::cargo_bin("gw").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

// ============================================================================
// Resolve Command Tests
// ============================================================================

#[test]
fn test_resolve_prints_object_store_plan() {
    let file = write_settings_file(
        r#"
[reporting]
type = "object-store"
bucket_name = "aiuc-dev-1"
region_name = "eu-north-1"
base_dir = "output/run1/reports"
"#,
        "toml",
    );

    gw().arg("resolve")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("reporting: s3"))
        .stdout(predicate::str::contains("bucket_name: aiuc-dev-1"))
        .stdout(predicate::str::contains("object_name: indexing-engine.log"));
}

#[test]
fn test_resolve_json_output_is_parseable() {
    let file = write_settings_file(r#"{ "cache": { "kind": "none" } }"#, "json");

    let output = gw()
        .arg("resolve")
        .arg(file.path())
        .args(["--format", "json", "--verbose"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["cache"]["kind"], "none");
    assert_eq!(value["reporting"]["kind"], "file");
}

#[test]
fn test_resolve_missing_bucket_fails_with_field_name() {
    let file = write_settings_file(
        "reporting:\n  type: object-store\n  region_name: eu-north-1\n",
        "yaml",
    );

    gw().arg("resolve")
        .arg(file.path())
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("reporting"))
        .stderr(predicate::str::contains("s3"))
        .stderr(predicate::str::contains("bucket_name"));
}

#[test]
fn test_resolve_unknown_kind_fails() {
    let file = write_settings_file("[cache]\nkind = \"redis\"\n", "toml");

    gw().arg("resolve")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown cache kind `redis`"));
}

#[test]
fn test_resolve_never_prints_secrets() {
    let file = write_settings_file(
        "[storage]\nkind = \"blob\"\ncontainer_name = \"artifacts\"\nconnection_string = \"AccountKey=hunter2\"\n",
        "toml",
    );

    gw().arg("resolve")
        .arg(file.path())
        .args(["--log-level", "trace"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[REDACTED]"))
        .stdout(predicate::str::contains("hunter2").not())
        .stderr(predicate::str::contains("hunter2").not());
}

#[test]
fn test_resolve_missing_file_fails() {
    gw().arg("resolve")
        .arg("/nonexistent/graphweave/settings.toml")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to load settings"));
}

// ============================================================================
// Kinds Command Tests
// ============================================================================

#[test]
fn test_kinds_lists_every_concern() {
    gw().arg("kinds")
        .assert()
        .success()
        .stdout(predicate::str::contains("reporting:"))
        .stdout(predicate::str::contains("console"))
        .stdout(predicate::str::contains("cache:"))
        .stdout(predicate::str::contains("none"))
        .stdout(predicate::str::contains("input.file_type:"));
}

// ============================================================================
// Init Command Tests
// ============================================================================

#[test]
fn test_init_creates_resolvable_file() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.toml");

    gw().args(["init", "--path"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("Created settings file at"));

    assert!(fs::read_to_string(&path).unwrap().contains("[reporting]"));

    gw().arg("resolve").arg(&path).assert().success();
}

#[test]
fn test_init_fails_without_force_if_exists() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("settings.toml");
    fs::write(&path, "existing content").unwrap();

    let output = gw().args(["init", "--path"]).arg(&path).output().unwrap();
    let stdout = String::from_utf8_lossy(&output.stdout);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert!(!output.status.success());
    assert!(stdout.contains("--force"));
    assert!(!stdout.contains("Error:"));
    assert_eq!(stderr.matches("Error:").count(), 1);
    assert!(stderr.contains("already exists"));

    assert_eq!(fs::read_to_string(&path).unwrap(), "existing content");
}
