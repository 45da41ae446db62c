use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("../gendiff/tests/fixtures")
        .join(name)
}

fn expected(name: &str) -> String {
    std::fs::read_to_string(fixture(name)).unwrap()
}

fn gendiff() -> Command {
    let mut cmd = Command::cargo_bin("gendiff").unwrap();
    cmd.env_remove("RUST_LOG");
    cmd
}

#[test]
fn default_format_is_stylish() {
    gendiff()
        .arg(fixture("file1.json"))
        .arg(fixture("file2.json"))
        .assert()
        .success()
        .stdout(predicate::str::diff(expected("result_stylish.txt")))
        .stderr(predicate::str::is_empty());
}

#[test]
fn plain_format_with_short_flag() {
    gendiff()
        .args(["-f", "plain"])
        .arg(fixture("file1.yml"))
        .arg(fixture("file2.yaml"))
        .assert()
        .success()
        .stdout(predicate::str::diff(expected("result_plain.txt")));
}

#[test]
fn json_format_with_long_flag() {
    gendiff()
        .arg(fixture("flat1.toml"))
        .arg(fixture("flat2.toml"))
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("[\n  {\n    \"key\": \"follow\""))
        .stdout(predicate::str::contains("\"status\": \"removed\""))
        .stdout(predicate::str::contains("\"oldValue\": 50"));
}

#[test]
fn unsupported_format_exits_nonzero() {
    gendiff()
        .args(["--format", "xml"])
        .arg(fixture("file1.json"))
        .arg(fixture("file2.json"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("unsupported format: xml"));
}

#[test]
fn missing_argument_is_a_usage_error() {
    gendiff()
        .arg(fixture("file1.json"))
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn extra_argument_is_a_usage_error() {
    gendiff()
        .arg(fixture("file1.json"))
        .arg(fixture("file2.json"))
        .arg(fixture("flat2.json"))
        .assert()
        .failure()
        .code(2);
}

#[test]
fn parse_error_is_reported_on_stderr() {
    gendiff()
        .arg(fixture("broken.yml"))
        .arg(fixture("file2.yaml"))
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("broken.yml"))
        .stderr(predicate::str::contains("invalid YAML"));
}

#[test]
fn parse_error_message_is_printed_once() {
    let dir = tempfile::tempdir().unwrap();
    let broken = dir.path().join("broken.json");
    std::fs::write(&broken, "{not json").unwrap();

    gendiff()
        .arg(&broken)
        .arg(fixture("flat2.json"))
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("invalid JSON"))
        .stderr(predicate::str::contains("Caused by").not());
}

#[test]
fn unsupported_extension_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let ini = dir.path().join("settings.ini");
    std::fs::write(&ini, "a=1").unwrap();

    gendiff()
        .arg(&ini)
        .arg(fixture("flat2.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported file format: .ini"));
}

#[test]
fn verbose_logs_go_to_stderr() {
    gendiff()
        .arg("-v")
        .arg(fixture("flat1.toml"))
        .arg(fixture("flat2.json"))
        .assert()
        .success()
        .stdout(predicate::str::diff(expected("result_flat_stylish.txt")))
        .stderr(predicate::str::contains("diff built"));
}
