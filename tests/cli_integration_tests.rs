//! CLI Integration Tests
//!
//! Runs the `lcs-convert` binary against scratch project roots using
//! assert_cmd to exercise main.rs argument parsing and exit status.

#![allow(deprecated)] // Command::cargo_bin deprecation - no stable replacement yet

use assert_cmd::Command;
use predicates::prelude::*;
use rust_xlsxwriter::Workbook;
use std::fs;
use tempfile::TempDir;

fn write_platform_csv(dir: &TempDir, content: &str) {
    let extra = dir.path().join("assets").join("extra");
    fs::create_dir_all(&extra).unwrap();
    fs::write(extra.join("platform_ts.csv"), content).unwrap();
}

/// Minimal workbook with one LCS row and one TS row
fn write_workbook(dir: &TempDir) {
    let extra = dir.path().join("assets").join("extra");
    fs::create_dir_all(&extra).unwrap();

    let mut workbook = Workbook::new();
    let lcs = workbook.add_worksheet();
    lcs.set_name("LCS").unwrap();
    lcs.write_string(0, 0, "Current LCS").unwrap();
    lcs.write_string(0, 1, "VCC").unwrap();
    lcs.write_string(1, 0, "LCS-001").unwrap();
    lcs.write_number(1, 1, 3.0).unwrap();

    let ts = workbook.add_worksheet();
    ts.set_name("TS").unwrap();
    ts.write_string(0, 0, "TS").unwrap();
    ts.write_string(0, 1, "Segment").unwrap();
    ts.write_number(1, 0, 101.0).unwrap();
    ts.write_string(1, 1, "A").unwrap();

    let tmp = extra.join("fixture.xlsx");
    workbook.save(&tmp).unwrap();
    fs::rename(&tmp, extra.join("lcschainage1.xlsm")).unwrap();
}

// ═══════════════════════════════════════════════════════════════════════════
// HELP AND VERSION TESTS
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("lcs-convert").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("lcs-convert"))
        .stdout(predicate::str::contains("COMMANDS"));
}

#[test]
fn test_cli_version() {
    let mut cmd = Command::cargo_bin("lcs-convert").unwrap();
    cmd.arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("lcs-convert"));
}

#[test]
fn test_cli_requires_subcommand() {
    let mut cmd = Command::cargo_bin("lcs-convert").unwrap();
    cmd.assert().failure();
}

// ═══════════════════════════════════════════════════════════════════════════
// PLATFORM COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_platform_command_success() {
    let temp_dir = TempDir::new().unwrap();
    write_platform_csv(&temp_dir, "Platform,TrackSectionsRaw\nP1,\"5,6\"\n,9\n");

    let mut cmd = Command::cargo_bin("lcs-convert").unwrap();
    cmd.arg("--root")
        .arg(temp_dir.path())
        .arg("platform")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 1 platform records"));

    let output = temp_dir
        .path()
        .join("assets")
        .join("data")
        .join("platform_ts.json");
    let content = fs::read_to_string(output).unwrap();
    assert!(content.contains("\"platform\": \"P1\""));
}

#[test]
fn test_platform_command_missing_csv() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("lcs-convert").unwrap();
    cmd.arg("--root")
        .arg(temp_dir.path())
        .arg("platform")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("platform_ts.csv"))
        .stdout(predicate::str::contains("plat_TS.pdf"));

    assert!(!temp_dir.path().join("assets").join("data").exists());
}

#[test]
fn test_root_from_environment() {
    let temp_dir = TempDir::new().unwrap();
    write_platform_csv(&temp_dir, "Platform,TrackSectionsRaw\nP7,1\n");

    let mut cmd = Command::cargo_bin("lcs-convert").unwrap();
    cmd.env("LCS_CONVERT_ROOT", temp_dir.path())
        .arg("platform")
        .assert()
        .success();

    assert!(temp_dir
        .path()
        .join("assets")
        .join("data")
        .join("platform_ts.json")
        .exists());
}

// ═══════════════════════════════════════════════════════════════════════════
// EXCEL COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_excel_command_success() {
    let temp_dir = TempDir::new().unwrap();
    write_workbook(&temp_dir);

    let mut cmd = Command::cargo_bin("lcs-convert").unwrap();
    cmd.arg("--root")
        .arg(temp_dir.path())
        .arg("excel")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 1 LCS records"))
        .stdout(predicate::str::contains("Saved 1 TS records"))
        .stdout(predicate::str::contains("plat_TS.pdf"));

    let data = temp_dir.path().join("assets").join("data");
    let lcs = fs::read_to_string(data.join("lcs.json")).unwrap();
    assert!(lcs.contains("\"currentLcsCode\": \"LCS-001\""));
    assert!(data.join("ts.json").exists());
}

#[test]
fn test_excel_command_missing_workbook() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("lcs-convert").unwrap();
    cmd.arg("--root")
        .arg(temp_dir.path())
        .arg("excel")
        .assert()
        .failure()
        .stderr(predicate::str::contains("lcschainage1.xlsm"))
        .stderr(predicate::str::contains("Conversion failed"));
}

// ═══════════════════════════════════════════════════════════════════════════
// ALL COMMAND
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_all_stops_at_first_failure() {
    let temp_dir = TempDir::new().unwrap();
    write_platform_csv(&temp_dir, "Platform,TrackSectionsRaw\nP1,1\n");

    let mut cmd = Command::cargo_bin("lcs-convert").unwrap();
    cmd.arg("--root")
        .arg(temp_dir.path())
        .arg("all")
        .assert()
        .failure();

    assert!(!temp_dir
        .path()
        .join("assets")
        .join("data")
        .join("platform_ts.json")
        .exists());
}

#[test]
fn test_all_command_success() {
    let temp_dir = TempDir::new().unwrap();
    write_workbook(&temp_dir);
    write_platform_csv(&temp_dir, "Platform,TrackSectionsRaw\nP1,\"5,6\"\n");

    let mut cmd = Command::cargo_bin("lcs-convert").unwrap();
    cmd.arg("--root")
        .arg(temp_dir.path())
        .arg("all")
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved 1 platform records"));

    let data = temp_dir.path().join("assets").join("data");
    for name in ["lcs.json", "ts.json", "platform_ts.json"] {
        assert!(data.join(name).exists(), "{} not written", name);
    }
    let ts = fs::read_to_string(data.join("ts.json")).unwrap();
    assert!(ts.contains("\"tsId\": 101"));
}
