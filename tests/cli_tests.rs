//! CLI end-to-end tests
//!
//! Each test works on files in its own temporary directory.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use std::process::Command;
use tempfile::tempdir;

#[allow(deprecated)]
fn rename_cmd() -> Command {
    let mut cmd = Command::cargo_bin("one-piece-rename").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

fn touch(path: &Path) {
    fs::write(path, b"").unwrap();
}

#[test]
fn test_cli_no_args_shows_usage() {
    rename_cmd()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_cli_renames_absolute_episode() {
    let dir = tempdir().unwrap();
    let original = dir.path().join("One Piece - 758 (1080p FUNI WEB-DL -KS-).mkv");
    touch(&original);

    rename_cmd()
        .arg(&original)
        .assert()
        .success()
        .stdout(predicate::str::contains("+info: RENAMING"))
        .stdout(predicate::str::contains("One Piece S18E13 (1080p FUNI WEB-DL -KS-).mkv"));

    assert!(!original.exists());
    assert!(dir.path().join("One Piece S18E13 (1080p FUNI WEB-DL -KS-).mkv").exists());
}

#[test]
fn test_cli_skips_already_good_names() {
    let dir = tempdir().unwrap();
    let good = dir.path().join("One Piece S03E10 (1080p FUNI WEB-DL -KS-).mkv");
    touch(&good);

    rename_cmd()
        .arg(&good)
        .assert()
        .success()
        .stdout(predicate::str::contains("+info: skipping"))
        .stdout(predicate::str::contains("RENAMING").not());

    assert!(good.exists());
}

#[test]
fn test_cli_reports_non_matching_names_on_stderr() {
    let dir = tempdir().unwrap();
    let other = dir.path().join("notes.txt");
    touch(&other);

    rename_cmd()
        .arg(&other)
        .assert()
        .success()
        .stderr(predicate::str::contains("-error: Does not match: notes.txt"))
        .stdout(predicate::str::contains("+info: skipping"));

    assert!(other.exists());
}

#[test]
fn test_cli_missing_path_aborts_whole_batch() {
    let dir = tempdir().unwrap();
    let present = dir.path().join("One Piece 12.mkv");
    touch(&present);
    let missing = dir.path().join("One Piece 13.mkv");

    rename_cmd()
        .arg(&present)
        .arg(&missing)
        .assert()
        .failure()
        .stderr(predicate::str::contains("-error: File not found"))
        .stdout(predicate::str::contains("RENAMING").not());

    assert!(present.exists());
    assert!(!dir.path().join("One Piece S02E04.mkv").exists());
}

#[test]
fn test_cli_batch_failure_lines_are_prefixed() {
    let dir = tempdir().unwrap();
    let missing = dir.path().join("One Piece 13.mkv");

    let output = rename_cmd().arg(&missing).output().unwrap();
    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("-error: 1 file(s) not found"));
    for line in stderr.lines() {
        assert!(line.starts_with("-error: "), "unprefixed line: {line}");
    }
}

#[test]
fn test_cli_does_not_overwrite_existing_target() {
    let dir = tempdir().unwrap();
    let source = dir.path().join("one.piece.12.mkv");
    let target = dir.path().join("One Piece S02E04.mkv");
    fs::write(&source, b"source").unwrap();
    fs::write(&target, b"target").unwrap();

    rename_cmd()
        .arg(&source)
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read(&source).unwrap(), b"source");
    assert_eq!(fs::read(&target).unwrap(), b"target");
}

#[test]
fn test_cli_out_of_range_continues_with_batch() {
    let dir = tempdir().unwrap();
    let too_far = dir.path().join("One Piece 5000.mkv");
    let fine = dir.path().join("One Piece 1.mkv");
    touch(&too_far);
    touch(&fine);

    rename_cmd()
        .arg(&too_far)
        .arg(&fine)
        .assert()
        .success()
        .stderr(predicate::str::contains("outside the season table"));

    assert!(too_far.exists());
    assert!(dir.path().join("One Piece S01E01.mkv").exists());
}

#[test]
fn test_cli_custom_table() {
    let dir = tempdir().unwrap();
    let table = dir.path().join("seasons.json");
    fs::write(&table, r#"{"episodes": [0, 8, 22, 17, 13, 9, 22, 39, 13, 52, 31, 99, 56, 100, 35, 62, 49, 118, 33, 98, 14, 194, 35], "specials": [590]}"#).unwrap();
    let episode = dir.path().join("One Piece 758.mkv");
    touch(&episode);

    rename_cmd()
        .arg("--table")
        .arg(&table)
        .arg(&episode)
        .assert()
        .success();

    assert!(dir.path().join("One Piece S18E12.mkv").exists());
}

#[test]
fn test_cli_invalid_table_fails() {
    let dir = tempdir().unwrap();
    let table = dir.path().join("seasons.json");
    fs::write(&table, r#"{"episodes": [0, 8], "specials": [0]}"#).unwrap();
    let episode = dir.path().join("One Piece 1.mkv");
    touch(&episode);

    rename_cmd()
        .args(["-t"])
        .arg(&table)
        .arg(&episode)
        .assert()
        .failure()
        .stderr(predicate::str::contains("-error: Failed to load season table"))
        .stderr(predicate::str::contains("Specials must be absolute episode numbers"));

    assert!(episode.exists());
}
