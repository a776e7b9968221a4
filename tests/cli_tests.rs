/// Tests for the `fileorg` binary: usage, exit codes and argument handling.
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn fileorg() -> Command {
    Command::cargo_bin("fileorg").expect("binary should build")
}

#[test]
fn test_no_arguments_prints_usage() {
    fileorg()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_help_as_first_argument_prints_usage() {
    fileorg()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--recursive"));
}

#[test]
fn test_missing_directory_fails_with_error_prefix() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let missing = temp_dir.path().join("does-not-exist");

    fileorg()
        .current_dir(temp_dir.path())
        .arg(&missing)
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: "))
        .stderr(predicate::str::contains("does-not-exist"));
}

#[test]
fn test_file_as_directory_fails_with_error_prefix() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let file_path = temp_dir.path().join("plain.txt");
    fs::write(&file_path, "x").unwrap();

    fileorg()
        .current_dir(temp_dir.path())
        .arg(&file_path)
        .assert()
        .code(1)
        .stderr(predicate::str::starts_with("Error: Not a directory"));
}

#[test]
fn test_repeated_and_unknown_flags_still_organize() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let root = temp_dir.path().join("inbox");
    fs::create_dir_all(root.join("sub")).unwrap();
    fs::write(root.join("sub").join("song.mp3"), "mp3").unwrap();

    fileorg()
        .current_dir(temp_dir.path())
        .arg(&root)
        .args(["--recursive", "--recursive", "--log", "--log", "--shiny"])
        .assert()
        .success()
        .stdout(predicate::str::contains("song.mp3 → Music"));

    assert!(root.join("Music").join("song.mp3").is_file());
    let log = fs::read_to_string(temp_dir.path().join("logs").join("log.txt")).unwrap();
    assert!(log.trim_end().ends_with("song.mp3 → Music"));
}
