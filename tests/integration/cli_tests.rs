//! Command-line tests.
//!
//! Tests verify:
//! - Text and JSON output for decoded files
//! - Directory walking with extension filtering and recursion
//! - Exit status when some or all files fail

use assert_cmd::Command;
use assert_fs::prelude::*;
use assert_fs::TempDir;
use predicates::prelude::*;

use super::test_utils::{camera_jpeg, minimal_jpeg, ByteOrderType};

fn exif_extractor() -> Command {
    let mut cmd = Command::cargo_bin("exif-extractor").unwrap();
    for var in ["EXIF_RECURSIVE", "EXIF_EXTENSIONS", "EXIF_FORMAT", "RUST_LOG"] {
        cmd.env_remove(var);
    }
    cmd
}

// =============================================================================
// Output Formats
// =============================================================================

#[test]
fn test_text_output() {
    let temp = TempDir::new().unwrap();
    let file = temp.child("camera.jpg");
    file.write_binary(&camera_jpeg(ByteOrderType::LittleEndian))
        .unwrap();

    exif_extractor()
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("camera.jpg"))
        .stdout(predicate::str::contains(
            "[Main] 0x010F Make (ASCII\u{d7}6): Canon",
        ))
        .stdout(predicate::str::contains("[Exif] 0x829A Exposure Time"))
        .stdout(predicate::str::contains("): 1/250"))
        .stdout(predicate::str::contains("[GPS] 0x0002"))
        .stdout(predicate::str::contains("[Interop] 0x0001"))
        .stdout(predicate::str::contains("[JFIF] version 1.02"));
}

#[test]
fn test_json_output() {
    let temp = TempDir::new().unwrap();
    let file = temp.child("camera.jpg");
    file.write_binary(&camera_jpeg(ByteOrderType::BigEndian))
        .unwrap();

    let output = exif_extractor()
        .arg("--format")
        .arg("json")
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let report = &json[0];
    assert!(report["path"].as_str().unwrap().ends_with("camera.jpg"));

    let make = &report["metadata"]["main"][0];
    assert_eq!(make["id"], 0x010F);
    assert_eq!(make["value"]["type"], "ascii");
    assert_eq!(make["value"]["value"], "Canon");
    assert_eq!(report["metadata"]["jfif"]["version_major"], 1);
}

#[test]
fn test_format_from_env() {
    let temp = TempDir::new().unwrap();
    let file = temp.child("a.jpg");
    file.write_binary(&minimal_jpeg()).unwrap();

    exif_extractor()
        .env("EXIF_FORMAT", "json")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("["));
}

// =============================================================================
// Directory Walking
// =============================================================================

#[test]
fn test_directory_filters_extensions() {
    let temp = TempDir::new().unwrap();
    temp.child("one.jpg").write_binary(&minimal_jpeg()).unwrap();
    temp.child("two.JPEG").write_binary(&minimal_jpeg()).unwrap();
    temp.child("notes.txt").write_str("not an image").unwrap();

    exif_extractor()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("one.jpg"))
        .stdout(predicate::str::contains("two.JPEG"))
        .stdout(predicate::str::contains("notes.txt").not());
}

#[test]
fn test_custom_extensions() {
    let temp = TempDir::new().unwrap();
    temp.child("one.jpg").write_binary(&minimal_jpeg()).unwrap();
    temp.child("two.jpe").write_binary(&minimal_jpeg()).unwrap();

    exif_extractor()
        .arg("--extensions")
        .arg("jpe")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("two.jpe"))
        .stdout(predicate::str::contains("one.jpg").not());
}

#[test]
fn test_recursive_flag() {
    let temp = TempDir::new().unwrap();
    temp.child("top.jpg").write_binary(&minimal_jpeg()).unwrap();
    temp.child("nested/deep.jpg")
        .write_binary(&minimal_jpeg())
        .unwrap();

    exif_extractor()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("top.jpg"))
        .stdout(predicate::str::contains("deep.jpg").not());

    exif_extractor()
        .arg("-r")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("deep.jpg"));
}

#[cfg(unix)]
#[test]
fn test_recursive_symlink_cycle_reports_file_once() {
    let temp = TempDir::new().unwrap();
    temp.child("a.jpg").write_binary(&minimal_jpeg()).unwrap();
    std::os::unix::fs::symlink(temp.path(), temp.path().join("loop")).unwrap();

    let output = exif_extractor()
        .arg("-r")
        .arg(temp.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert_eq!(stdout.matches("== ").count(), 1);
    assert!(String::from_utf8_lossy(&output.stderr).contains("Skipping directory entry"));
}

// =============================================================================
// Failures
// =============================================================================

#[test]
fn test_one_bad_file_does_not_fail_batch() {
    let temp = TempDir::new().unwrap();
    temp.child("a.jpg").write_binary(&minimal_jpeg()).unwrap();
    temp.child("b.jpg").write_binary(b"garbage").unwrap();

    exif_extractor()
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[Main] 0x0112 Orientation"))
        .stdout(predicate::str::contains("error: Invalid JPEG marker"))
        .stderr(predicate::str::contains("Failed to decode image"));
}

#[test]
fn test_all_files_bad_fails() {
    let temp = TempDir::new().unwrap();
    let file = temp.child("bad.jpg");
    file.write_binary(&[0xFF, 0xD8, 0xFF]).unwrap();

    exif_extractor()
        .arg(file.path())
        .assert()
        .failure()
        .stdout(predicate::str::contains("error: Truncated data"));
}

#[test]
fn test_missing_path_fails() {
    let temp = TempDir::new().unwrap();

    exif_extractor()
        .arg(temp.path().join("missing.jpg"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("File not found"));
}

#[test]
fn test_no_arguments_is_usage_error() {
    exif_extractor()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_empty_extensions_rejected() {
    let temp = TempDir::new().unwrap();

    exif_extractor()
        .arg("--extensions")
        .arg(",")
        .arg(temp.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("extension"));
}
