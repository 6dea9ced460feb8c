//! Integration tests for the partcheck CLI
//!
//! These tests exercise the CLI commands end-to-end using assert_cmd.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get a partcheck command isolated from user configuration
fn partcheck() -> Command {
    let mut cmd = Command::cargo_bin("partcheck").unwrap();
    cmd.env_remove("PARTCHECK_FORMAT")
        .env_remove("PARTCHECK_LOG")
        .env_remove("RUST_LOG");
    cmd
}

/// Helper to write a car document listing the given part types
fn write_car(dir: &TempDir, name: &str, types: &[&str]) -> PathBuf {
    let mut yaml = String::from("year: '2014'\nmake: Honda\nmodel: Civic\n");
    if !types.is_empty() {
        yaml.push_str("parts:\n");
        for t in types {
            yaml.push_str(&format!("  - type: {}\n", t));
        }
    }
    let path = dir.path().join(name);
    fs::write(&path, yaml).unwrap();
    path
}

const COMPLETE: &[&str] = &[
    "ENGINE",
    "ELECTRICAL",
    "FUEL_FILTER",
    "OIL_FILTER",
    "TIRE",
    "TIRE",
    "TIRE",
    "TIRE",
];

// ============================================================================
// CLI Basic Tests
// ============================================================================

#[test]
fn test_help_displays() {
    partcheck()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("parts inventory"));
}

#[test]
fn test_version_displays() {
    partcheck()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("partcheck"));
}

// ============================================================================
// Check Command Tests
// ============================================================================

#[test]
fn test_check_empty_car_reports_every_type() {
    let tmp = TempDir::new().unwrap();
    let path = write_car(&tmp, "empty.yaml", &[]);

    let output = partcheck()
        .args(["check", "-f", "json"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value[0]["missing"],
        serde_json::json!({
            "ENGINE": 0,
            "ELECTRICAL": 0,
            "FUEL_FILTER": 0,
            "OIL_FILTER": 0,
            "TIRE": 0
        })
    );
    assert_eq!(value[0]["complete"], serde_json::json!(false));
}

#[test]
fn test_check_three_tires_tsv() {
    let tmp = TempDir::new().unwrap();
    let path = write_car(&tmp, "tires.yaml", &["TIRE", "TIRE", "TIRE"]);

    partcheck()
        .args(["check", "-f", "tsv", "--deficit"])
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("TIRE\t3\t4\t1"))
        .stdout(predicate::str::contains("ENGINE\t0\t1\t1"));
}

#[test]
fn test_check_complete_car() {
    let tmp = TempDir::new().unwrap();
    let path = write_car(&tmp, "complete.yaml", COMPLETE);

    partcheck()
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("All required parts present"));
}

#[test]
fn test_check_excess_tires_is_not_a_shortfall() {
    let tmp = TempDir::new().unwrap();
    let mut types = COMPLETE.to_vec();
    types.extend(["TIRE", "TIRE"]);
    let path = write_car(&tmp, "excess.yaml", &types);

    let output = partcheck()
        .args(["check", "-f", "json", "--strict"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["missing"], serde_json::json!({}));
    assert_eq!(value[0]["excess"][0]["part_type"], serde_json::json!("TIRE"));
    assert_eq!(value[0]["excess"][0]["installed"], serde_json::json!(6));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("too many parts"));
}

#[test]
fn test_check_missing_engine_csv() {
    let tmp = TempDir::new().unwrap();
    let path = write_car(&tmp, "no-engine.yaml", &COMPLETE[1..]);

    let output = partcheck()
        .args(["check", "-f", "csv"])
        .arg(&path)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].ends_with("2014 Honda Civic,ENGINE,0,1"));
}

#[test]
fn test_check_strict_fails_on_incomplete_car() {
    let tmp = TempDir::new().unwrap();
    let path = write_car(&tmp, "tires.yaml", &["TIRE"]);

    partcheck()
        .args(["check", "--strict", "-q"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing parts"));
}

#[test]
fn test_check_directory() {
    let tmp = TempDir::new().unwrap();
    write_car(&tmp, "a.yaml", COMPLETE);
    write_car(&tmp, "b.yaml", &[]);
    fs::write(tmp.path().join("c.json"), r#"{"make": "Ford", "parts": null}"#).unwrap();

    let output = partcheck()
        .args(["check", "-f", "json"])
        .arg(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let checks = value.as_array().unwrap();
    assert_eq!(checks.len(), 3);
    assert_eq!(checks[0]["complete"], serde_json::json!(true));
    assert_eq!(checks[2]["car"], serde_json::json!("Ford"));
}

#[test]
fn test_check_directory_skips_malformed_document() {
    let tmp = TempDir::new().unwrap();
    write_car(&tmp, "a.yaml", COMPLETE);
    fs::write(tmp.path().join("b.yaml"), "parts:\n  - type: NOPE\n").unwrap();

    let output = partcheck()
        .args(["check", "-f", "json"])
        .arg(tmp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let checks = value.as_array().unwrap();
    assert_eq!(checks.len(), 1);
    assert!(checks[0]["file"].as_str().unwrap().ends_with("a.yaml"));
}

#[test]
fn test_check_invalid_part_type_fails() {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("bad.yaml");
    fs::write(&path, "parts:\n  - type: WINDSHIELD\n").unwrap();

    partcheck()
        .arg("check")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("WINDSHIELD"));
}

#[test]
fn test_check_writes_output_file() {
    let tmp = TempDir::new().unwrap();
    let path = write_car(&tmp, "tires.yaml", &["TIRE"]);
    let report = tmp.path().join("report.yaml");

    partcheck()
        .args(["check", "-f", "yaml", "-q", "-o"])
        .arg(&report)
        .arg(&path)
        .assert()
        .success();

    let content = fs::read_to_string(&report).unwrap();
    assert!(content.contains("TIRE: 1"));
}

#[test]
fn test_format_from_environment() {
    let tmp = TempDir::new().unwrap();
    let path = write_car(&tmp, "tires.yaml", &["TIRE"]);

    partcheck()
        .env("PARTCHECK_FORMAT", "tsv")
        .arg("check")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("file\tcar\ttype"));
}

// ============================================================================
// Catalog Command Tests
// ============================================================================

#[test]
fn test_catalog_lists_required_quantities() {
    partcheck()
        .args(["catalog", "-f", "tsv"])
        .assert()
        .success()
        .stdout(predicate::str::contains("TIRE\t4"))
        .stdout(predicate::str::contains("ENGINE\t1"));
}

#[test]
fn test_completions_bash() {
    partcheck()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("partcheck"));
}
