//! CLI tests for the info subcommand.

use assert_cmd::Command;
use predicates::prelude::*;

use super::helpers::{temp_dat, EMPTY_DAT, SAMPLE_DAT};

fn trackplay() -> Command {
    Command::cargo_bin("trackplay").expect("binary builds")
}

#[test]
fn info_prints_summary() {
    let (_dir, path) = temp_dat(SAMPLE_DAT);

    trackplay()
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("points:    3"))
        .stdout(predicate::str::contains("2023-06-15 12:00:00"))
        .stdout(predicate::str::contains("2023-06-15 12:00:20"))
        .stdout(predicate::str::contains("speed:     3/3"));
}

#[test]
fn info_json_dumps_samples() {
    let (_dir, path) = temp_dat(SAMPLE_DAT);

    let output = trackplay()
        .arg("info")
        .arg(&path)
        .arg("--json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let samples: serde_json::Value = serde_json::from_slice(&output).expect("valid JSON");
    let arr = samples.as_array().expect("JSON array");
    assert_eq!(arr.len(), 3);
    assert_eq!(arr[0]["display_time"], "2023-06-15 12:00:00");
    assert_eq!(arr[0]["latitude"], 37.774929);
    assert_eq!(arr[0]["longitude"], -122.419416);
    assert_eq!(arr[0]["speed"], 10.5);
}

#[test]
fn info_rejects_input_without_valid_points() {
    let (_dir, path) = temp_dat(EMPTY_DAT);

    trackplay()
        .arg("info")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no valid track points"));
}

#[test]
fn info_reports_unreadable_file() {
    trackplay()
        .arg("info")
        .arg("/nonexistent/track.dat")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn malformed_lines_are_filtered_not_fatal() {
    let (_dir, path) = temp_dat(
        "garbage\n\
         20230615120000,37.7,N,122.4,W\n\
         1,2,3\n",
    );

    trackplay()
        .arg("info")
        .arg(&path)
        .assert()
        .success()
        .stdout(predicate::str::contains("points:    1"));
}
