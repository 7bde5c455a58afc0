//! Black-box integration tests driving the `replay` subcommand against
//! on-disk command files, in the style of the example pack's
//! `assert_cmd`/`predicates`-based CLI tests.

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;

fn script_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn replay_prints_query_output_to_stdout() {
    let script = script_file("insert 0 2\ninsert 1 4\ninsert 2 1\nprefixsum 2\nfind 6\nget 1\n");

    Command::cargo_bin("packedsum")
        .unwrap()
        .arg("replay")
        .arg("-i")
        .arg(script.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("6\n2\n4\n"));
}

#[test]
fn replay_writes_query_output_to_a_file() {
    let script = script_file("insert 0 10\ninsert 1 20\nget 0\nget 1\n");
    let out = tempfile::NamedTempFile::new().unwrap();

    Command::cargo_bin("packedsum")
        .unwrap()
        .arg("replay")
        .arg("-i")
        .arg(script.path())
        .arg("-o")
        .arg(out.path())
        .assert()
        .success();

    let written = std::fs::read_to_string(out.path()).unwrap();
    assert_eq!(written, "10\n20");
}

#[test]
fn replay_rejects_a_malformed_command_file() {
    let script = script_file("insert 0\n");

    Command::cargo_bin("packedsum")
        .unwrap()
        .arg("replay")
        .arg("-i")
        .arg(script.path())
        .assert()
        .failure();
}

#[test]
fn replay_rejects_a_missing_input_file() {
    Command::cargo_bin("packedsum")
        .unwrap()
        .arg("replay")
        .arg("-i")
        .arg("/nonexistent/path/to/commands.txt")
        .assert()
        .failure();
}
