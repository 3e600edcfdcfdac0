//! Integration tests for the command-line utilities

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn fixture(name: &str) -> String {
    fs::read_to_string(fixture_path(name)).unwrap()
}

fn depunct_cmd() -> Command {
    let mut cmd = Command::cargo_bin("conllx-depunct").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_depunct_file() {
    depunct_cmd()
        .arg(fixture_path("punct.conll"))
        .assert()
        .success()
        .stdout(fixture("depunct.conll"))
        .stderr(predicate::str::is_empty());
}

#[test]
fn test_depunct_stdin() {
    depunct_cmd()
        .write_stdin(fixture("punct.conll"))
        .assert()
        .success()
        .stdout(fixture("depunct.conll"));
}

#[test]
fn test_depunct_output_file() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("depunct.conll");

    depunct_cmd()
        .arg(fixture_path("punct.conll"))
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(&output).unwrap(), fixture("depunct.conll"));
}

#[test]
fn test_depunct_is_idempotent() {
    depunct_cmd()
        .write_stdin(fixture("depunct.conll"))
        .assert()
        .success()
        .stdout(fixture("depunct.conll"));
}

#[test]
fn test_depunct_warns_on_self_loop() {
    depunct_cmd()
        .arg(fixture_path("self-loop.conll"))
        .assert()
        .success()
        .stdout("1\tA\t_\tNOUN\t_\t_\t0\troot\t_\t_\n2\tB\t_\tNOUN\t_\t_\t1\tdep\t_\t_\n\n")
        .stderr(predicate::str::contains("its own head"));
}

#[test]
fn test_depunct_rejects_self_loop_with_dependent() {
    depunct_cmd()
        .arg(fixture_path("self-loop-dependent.conll"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("would be attached to removed token"));
}

#[test]
fn test_depunct_rejects_malformed_head() {
    depunct_cmd()
        .write_stdin("1\ta\t_\tNOUN\t_\t_\tx\troot\t_\t_\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot parse as integer field"));
}

#[test]
fn test_depunct_missing_input() {
    depunct_cmd()
        .arg("tests/fixtures/nonexistent.conll")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Cannot open"));
}

#[test]
fn test_conllu_to_conllx() {
    Command::cargo_bin("conllu-to-conllx")
        .unwrap()
        .arg(fixture_path("ud.conllu"))
        .assert()
        .success()
        .stdout(fixture("ud.conll"));
}

#[test]
fn test_conllu_to_conllx_then_depunct() {
    let conllx = Command::cargo_bin("conllu-to-conllx")
        .unwrap()
        .arg(fixture_path("ud.conllu"))
        .output()
        .unwrap()
        .stdout;

    depunct_cmd()
        .write_stdin(conllx)
        .assert()
        .success()
        .stdout(predicate::str::contains("5\tcine\tcine\tNOUN\t_\t_\t1\tobl\t_\tSpaceAfter=No\n\n"))
        .stdout(predicate::str::contains("PUNCT").not());
}
