use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn version_prints_crate_version() {
    Command::cargo_bin("sqlgen")
        .unwrap()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn unreachable_api_exits_1_before_running_any_test() {
    // Discard port on loopback: connection refused, no listener expected.
    Command::cargo_bin("sqlgen")
        .unwrap()
        .args(["run", "--api-url", "http://127.0.0.1:9"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("cannot reach the API"));
}

#[test]
fn missing_suite_file_exits_2() {
    Command::cargo_bin("sqlgen")
        .unwrap()
        .args(["run", "--suite", "/nonexistent/suite.yaml"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("config error"));
}

#[test]
fn init_writes_sample_suite_and_refuses_overwrite() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("suite.yaml");

    Command::cargo_bin("sqlgen")
        .unwrap()
        .args(["init", "--suite", path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("created"));

    let written = std::fs::read_to_string(&path).unwrap();
    assert!(written.contains("suite: demo"));

    std::fs::write(&path, "do not clobber").unwrap();

    Command::cargo_bin("sqlgen")
        .unwrap()
        .args(["init", "--suite", path.to_str().unwrap()])
        .assert()
        .success()
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(std::fs::read_to_string(&path).unwrap(), "do not clobber");
}
