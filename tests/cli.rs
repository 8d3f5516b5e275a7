//! CLI surface tests. These never enter the TUI: they only exercise the
//! argument handling paths that exit before the terminal is touched.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn help_describes_the_dashboard() {
    Command::cargo_bin("satsboard")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Bitcoin analytics dashboard"))
        .stdout(predicate::str::contains("--log"));
}

#[test]
fn version_is_reported() {
    Command::cargo_bin("satsboard")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("satsboard"));
}

#[test]
fn unknown_sections_are_rejected_with_the_valid_list() {
    Command::cargo_bin("satsboard")
        .unwrap()
        .arg("nonsense")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown section"))
        .stderr(predicate::str::contains("holdings"));
}
