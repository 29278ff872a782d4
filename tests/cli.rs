//! Binary smoke tests
//!
//! The dashboard itself needs a terminal, so these only exercise the
//! argument surface.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn prints_help() {
    Command::cargo_bin("findash")
        .unwrap()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("personal finance dashboard"))
        .stdout(predicate::str::contains("--sample"))
        .stdout(predicate::str::contains("--currency"));
}

#[test]
fn prints_version() {
    Command::cargo_bin("findash")
        .unwrap()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("findash"));
}

#[test]
fn rejects_unknown_flag() {
    Command::cargo_bin("findash")
        .unwrap()
        .arg("--bogus")
        .assert()
        .failure();
}
