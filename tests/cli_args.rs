//! Tests for the binary: argument parsing and headless script mode.

mod common;

use common::temp_file;
use std::process::{Command, Output};

fn signup_form_cmd() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_signup-form"));
    // Keep the user's config out of the picture
    cmd.env("XDG_CONFIG_HOME", std::env::temp_dir().join("signup-form-tests-no-config"));
    cmd
}

fn stdout_lines(output: &Output) -> Vec<String> {
    String::from_utf8_lossy(&output.stdout)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn test_help_lists_options() {
    let output = signup_form_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    for option in ["--name", "--email", "--validation", "--script", "--config"] {
        assert!(stdout.contains(option), "missing {option} in help");
    }
}

#[test]
fn test_invalid_validation_mode_is_rejected() {
    let output = signup_form_cmd()
        .args(["--validation", "strict"])
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid value"), "got: {stderr}");
}

#[test]
fn test_script_submission_is_printed_as_json() {
    let (_dir, script) = temp_file(
        "fill.jsonl",
        r#"# fill out the fields and submit
{"event":"change","field":"name","value":"Mark"}
{"event":"change","field":"email","value":"mark@email.com"}
{"event":"change","field":"password","value":"Password1"}
{"event":"submit"}
"#,
    );

    let output = signup_form_cmd()
        .arg("--script")
        .arg(&script)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert_eq!(
        stdout_lines(&output),
        vec![r#"{"name":"Mark","email":"mark@email.com","password":"Password1"}"#]
    );
}

#[test]
fn test_script_uses_initial_values_and_dumps_errors() {
    let (_dir, script) = temp_file(
        "blur.jsonl",
        r#"{"event":"blur","field":"name"}
{"event":"blur","field":"email"}
{"event":"dispatch","intent":{"type":"resetForm"}}
{"event":"submit"}
"#,
    );

    let output = signup_form_cmd()
        .args(["--name", "Mark", "--dump-state", "--script"])
        .arg(&script)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], r#"{"name":"Mark","email":"","password":""}"#);
    assert_eq!(
        lines[1],
        r#"{"values":{"name":"Mark","email":"","password":""},"errors":{"email":"email is required"}}"#
    );
}

#[test]
fn test_rules_validation_from_cli() {
    let (_dir, script) = temp_file(
        "rules.jsonl",
        r#"{"event":"change","field":"password","value":"abc"}
{"event":"blur","field":"password"}
"#,
    );

    let output = signup_form_cmd()
        .args(["--validation", "rules", "--min-password-length", "5", "--dump-state", "--script"])
        .arg(&script)
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].contains(r#""password":"password must be at least 5 characters""#));
}

#[test]
fn test_bad_script_line_exits_with_error() {
    let (_dir, script) = temp_file("bad.jsonl", "{\"event\":\"submit\"}\nnot json\n");

    let output = signup_form_cmd()
        .arg("--script")
        .arg(&script)
        .output()
        .expect("Failed to execute command");

    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid event on line 2"), "got: {stderr}");
    assert!(stdout_lines(&output).is_empty());
}

#[test]
fn test_broken_config_file_is_reported() {
    let (_dir, config) = temp_file("config.toml", "[validation]\npassword_min_length = 0\n");
    let (_script_dir, script) = temp_file("empty.jsonl", "");

    let output = signup_form_cmd()
        .arg("--config")
        .arg(&config)
        .arg("--script")
        .arg(&script)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("loading configuration"), "got: {stderr}");
}
