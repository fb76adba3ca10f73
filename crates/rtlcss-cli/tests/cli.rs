//! Integration tests for the rtlcss binary

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;

fn rtlcss() -> Command {
    Command::cargo_bin("rtlcss").unwrap()
}

#[test]
fn writes_override_next_to_input() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("site.css");
    fs::write(&input, ".x { float: left }").unwrap();

    rtlcss().arg(&input).assert().success();

    let out = fs::read_to_string(dir.path().join("site.rtl.css")).unwrap();
    assert_eq!(out, ".x{float:right}\n\n");
}

#[test]
fn collapses_min_segment_in_output_name() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("site.min.css");
    fs::write(&input, ".x { float: left }").unwrap();

    rtlcss().arg(&input).assert().success();

    assert!(dir.path().join("site.rtl.css").exists());
}

#[test]
fn skips_existing_overrides() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("site.rtl.css");
    fs::write(&input, ".x { float: left }").unwrap();

    rtlcss().arg(&input).assert().success();

    assert!(!dir.path().join("site.rtl.rtl.css").exists());
}

#[test]
fn stdout_mode_prints_instead_of_writing() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("site.css");
    fs::write(&input, ".x { margin-left: 1px; margin-right: 2px }").unwrap();

    rtlcss()
        .arg("--stdout")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            ".x{margin-left:2px;margin-right:1px}",
        ));

    assert!(!dir.path().join("site.rtl.css").exists());
}

#[test]
fn processes_directories_recursively() {
    let dir = tempfile::tempdir().unwrap();
    let sub = dir.path().join("theme");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("a.css"), ".x { float: left }").unwrap();
    fs::write(sub.join("b.rtl.css"), "").unwrap();

    rtlcss().arg(dir.path()).assert().success();

    assert!(sub.join("a.rtl.css").exists());
    assert!(!sub.join("b.rtl.rtl.css").exists());
}

#[test]
fn honors_exclusion_list() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("site.css");
    fs::write(&input, ".btn { margin-left: 1px; margin-right: 2px; float: left }").unwrap();
    let exclusions = dir.path().join("exclusions.txt");
    fs::write(&exclusions, "margin:.btn\n").unwrap();

    rtlcss()
        .arg("--stdout")
        .arg("-e")
        .arg(&exclusions)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(".btn{float:right}"))
        .stdout(predicate::str::contains("margin").not());
}

#[test]
fn no_color_disables_ansi_in_logs() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("site.css");
    fs::write(&input, ".x { float: left }").unwrap();

    rtlcss()
        .arg("--no-color")
        .arg(&input)
        .assert()
        .success()
        .stderr(predicate::str::contains("\u{1b}[").not());
}

#[test]
fn missing_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    rtlcss()
        .arg(dir.path().join("absent.css"))
        .assert()
        .failure();
}

#[test]
fn missing_exclusion_list_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("site.css");
    fs::write(&input, ".x { float: left }").unwrap();

    rtlcss()
        .arg("-e")
        .arg(dir.path().join("absent.txt"))
        .arg(&input)
        .assert()
        .failure();
}

#[test]
fn requires_at_least_one_path() {
    rtlcss().assert().failure();
}
