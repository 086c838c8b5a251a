//! End-to-end checks of the CLI surface: help text, version output, and
//! flag validation. Anything past argument parsing prompts for input, so
//! these stick to flags that exit before the interactive path.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_help_documents_the_contains_flag() {
  Command::cargo_bin("cloner")
    .expect("binary exists")
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("--contains"))
    .stdout(predicate::str::contains("GitHub and Bitbucket"));
}

#[test]
fn test_version_flag() {
  Command::cargo_bin("cloner")
    .expect("binary exists")
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("cloner"));
}

#[test]
fn test_unknown_flag_is_rejected() {
  Command::cargo_bin("cloner")
    .expect("binary exists")
    .arg("--bogus")
    .assert()
    .failure()
    .stderr(predicate::str::contains("--bogus"));
}

#[test]
fn test_contains_requires_a_value() {
  Command::cargo_bin("cloner")
    .expect("binary exists")
    .arg("--contains")
    .assert()
    .failure();
}
