//! CLI smoke tests for duplex.
//!
//! These tests verify that the binary parses its surface correctly and
//! fails cleanly before invoking any external tool when the project root
//! is unusable.

use assert_cmd::Command;
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a Command for the duplex binary.
fn duplex_cmd() -> Command {
  cargo_bin_cmd!("duplex")
}

#[test]
fn help_flag_works() {
  duplex_cmd()
    .arg("--help")
    .assert()
    .success()
    .stdout(predicate::str::contains("Usage"));
}

#[test]
fn version_flag_works() {
  duplex_cmd()
    .arg("--version")
    .assert()
    .success()
    .stdout(predicate::str::contains("duplex"));
}

#[test]
fn unusable_project_root_exits_one() {
  // A file where the project root should be makes directory preparation
  // fail before either build command would run.
  let temp = TempDir::new().unwrap();
  let blocker = temp.path().join("blocker");
  std::fs::write(&blocker, "not a directory").unwrap();

  duplex_cmd()
    .arg(blocker.join("project"))
    .assert()
    .failure()
    .code(1)
    .stderr(predicate::str::contains("output directory"));
}
