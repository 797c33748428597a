//! CLI-level tests
//!
//! These exercise argument parsing and pre-flight validation only, so they
//! pass on machines without an ffmpeg install.

use assert_cmd::Command;
use predicates::prelude::*;

fn segcut() -> Command {
    Command::cargo_bin("segcut").unwrap()
}

#[test]
fn help_lists_subcommands() {
    segcut()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("cut"))
        .stdout(predicate::str::contains("scenes"))
        .stdout(predicate::str::contains("inspect"));
}

#[test]
fn cut_rejects_missing_input() {
    segcut()
        .args([
            "cut",
            "--input",
            "definitely_missing.mp4",
            "--output",
            "out.mp4",
            "--cuts",
            "[[0,10]]",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source video not found"));
}

#[test]
fn cut_rejects_unknown_coordinate_system() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("video.mp4");
    std::fs::write(&input, b"fake video data").unwrap();

    segcut()
        .args([
            "cut",
            "--input",
            input.to_str().unwrap(),
            "--output",
            "out.mp4",
            "--cuts",
            "[[0,10]]",
            "--mode",
            "keyframe",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported coordinate system"));
}

#[test]
fn cut_rejects_malformed_cuts_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("video.mp4");
    std::fs::write(&input, b"fake video data").unwrap();

    segcut()
        .args([
            "cut",
            "--input",
            input.to_str().unwrap(),
            "--output",
            "out.mp4",
            "--cuts",
            "not json",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid cut specification"));
}

#[test]
fn scenes_rejects_missing_input() {
    segcut()
        .args([
            "scenes",
            "--input",
            "definitely_missing.mp4",
            "--output",
            "out.mp4",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source video not found"));
}

#[test]
fn inspect_rejects_missing_input() {
    segcut()
        .args(["inspect", "--input", "definitely_missing.mp4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Source video not found"));
}

#[test]
fn cut_requires_cuts_argument() {
    segcut()
        .args(["cut", "--input", "a.mp4", "--output", "b.mp4"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--cuts"));
}
