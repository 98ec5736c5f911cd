//! Runs the json-demo binary end to end.

use std::fs;
use std::process::{Command, Output};
use tempfile::tempdir;

const QUIET_CONFIG: &str = r#"{"logging": {"enable_file": false, "log_level": "error"}}"#;

fn run(args: &[&str], config: &str) -> Output {
    Command::new(env!("CARGO_BIN_EXE_json-demo"))
        .args(args)
        .env("CONFIG", config)
        .output()
        .unwrap()
}

#[test]
fn test_samples_without_arguments() {
    let output = run(&[], QUIET_CONFIG);
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Type of 'str': 'string', value: 'test'"));
    assert!(stdout.contains("Type of 'number': 'float', value: '5.5'"));
    assert!(stdout.contains("  value of dict['arrayOfObjects']: '<array of 2 items>' (array),"));
    assert!(stdout.contains("      value of dict['name']: 'not evan' (string),"));
    assert!(stdout.contains(r#"{"name":"James","age":13,"weeklyPay":1150}"#));
}

#[test]
fn test_inspect_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("doc.json");
    fs::write(&path, r#"{ "a": [1, 2.0], "b": "say \"hi\"" }"#).unwrap();
    let path = path.to_str().unwrap();

    let output = run(&[path], QUIET_CONFIG);
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("    value: '2.0' (float),"));
    assert!(stdout.contains(r#"{"a":[1,2.0],"b":"say "hi""}"#));

    let escaping = r#"{"escape_strings": true, "logging": {"enable_file": false, "log_level": "error"}}"#;
    let output = run(&[path], escaping);
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains(r#"{"a":[1,2.0],"b":"say \"hi\""}"#));
}

#[test]
fn test_malformed_file_fails() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(&path, "[1, 2").unwrap();

    let output = run(&[path.to_str().unwrap()], QUIET_CONFIG);
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Unexpected end of input"));
}

#[test]
fn test_missing_file_fails() {
    let output = run(&["/definitely/not/here.json"], QUIET_CONFIG);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Cannot read /definitely/not/here.json"));
}
