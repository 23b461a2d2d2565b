//! Integration tests for the naval-cli binary
//!
//! These run the compiled binary and check stdout, stderr and exit codes.

use assert_cmd::Command;
use predicates::prelude::*;

fn naval() -> Command {
    let mut cmd = Command::cargo_bin("naval-cli").unwrap();
    cmd.env_remove("NAVAL_CLI_NO_ASCII")
        .env_remove("NAVAL_CLI_COUNT")
        .env_remove("NAVAL_CLI_SEED")
        .env_remove("NAVAL_CLI_WIDTH")
        .env_remove("RUST_LOG");
    cmd
}

fn has_framing(s: &str) -> bool {
    s.chars().any(|c| ('\u{2500}'..='\u{259F}').contains(&c))
}

fn stdout_of(args: &[&str]) -> String {
    let output = naval().args(args).output().unwrap();
    assert!(output.status.success(), "naval-cli {args:?} failed");
    String::from_utf8(output.stdout).unwrap()
}

#[test]
fn test_version_output_is_exact() {
    naval()
        .arg("--version")
        .assert()
        .success()
        .code(0)
        .stdout(predicate::str::diff(format!(
            "naval-cli v{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

#[test]
fn test_version_matches_release_tag() {
    naval()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("naval-cli v1.0.0"));
}

#[test]
fn test_no_ascii_output() {
    let stdout = stdout_of(&["--no-ascii"]);
    assert!(stdout.contains("Naval Ravikant"));
    assert!(!has_framing(&stdout));
    assert!(!stdout.contains('\x1b'), "colors must be off when piped");
}

#[test]
fn test_default_output_is_framed() {
    let stdout = stdout_of(&[]);
    assert!(stdout.contains("Naval Ravikant"));
    assert!(stdout.contains("Seek wealth"));
    assert!(has_framing(&stdout));
}

#[test]
fn test_default_run_is_quiet_on_stderr() {
    naval().assert().success().stderr(predicate::str::is_empty());
}

#[test]
fn test_repeated_runs_are_identical() {
    for args in [&[][..], &["--no-ascii"][..], &["--seed", "11", "-n", "3"][..]] {
        assert_eq!(stdout_of(args), stdout_of(args), "args {args:?}");
    }
}

#[test]
fn test_count_prints_numbered_quotes() {
    let stdout = stdout_of(&["--no-ascii", "--count", "3"]);
    assert!(stdout.contains("[1] "));
    assert!(stdout.contains("[3] "));
    assert!(!stdout.contains("[4] "));
    assert_eq!(stdout.matches("Naval Ravikant").count(), 3);
}

#[test]
fn test_count_zero_is_clamped() {
    let stdout = stdout_of(&["--no-ascii", "--count", "0"]);
    assert_eq!(stdout.matches("Naval Ravikant").count(), 1);
}

#[test]
fn test_negative_count_is_clamped() {
    let stdout = stdout_of(&["--no-ascii", "--count", "-3"]);
    assert_eq!(stdout.matches("Naval Ravikant").count(), 1);
}

#[test]
fn test_framed_cards_share_width() {
    let stdout = stdout_of(&["--count", "3"]);
    let widths: Vec<usize> = stdout
        .lines()
        .filter(|line| !line.is_empty())
        .map(|line| line.chars().count())
        .collect();
    assert!(widths.iter().all(|w| *w == widths[0]), "{widths:?}");
}

#[test]
fn test_env_var_configures_layout() {
    let output = naval().env("NAVAL_CLI_NO_ASCII", "1").output().unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("Naval Ravikant"));
    assert!(!has_framing(&stdout));
}

#[test]
fn test_json_output() {
    let stdout = stdout_of(&["--json", "-n", "2"]);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["status"], "ok");
    assert_eq!(value["data"]["quotes"].as_array().unwrap().len(), 2);
}

#[test]
fn test_unknown_flag_fails_with_usage() {
    naval()
        .arg("--bogus")
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn test_help_succeeds() {
    naval()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--no-ascii"))
        .stdout(predicate::str::contains("EXAMPLES"));
}

#[test]
fn test_narrow_width_is_rejected() {
    naval()
        .args(["--width", "5"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::is_empty());
}

#[test]
fn test_narrow_width_json_error_envelope() {
    naval()
        .args(["--width", "5", "--json"])
        .assert()
        .failure()
        .code(2)
        .stdout(predicate::str::contains(r#""status":"error""#))
        .stdout(predicate::str::contains(r#""code":"config""#));
}

#[test]
fn test_debug_level_logs_to_stderr_only() {
    naval()
        .args(["--level", "debug", "--no-ascii"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Naval Ravikant"))
        .stdout(predicate::str::contains("DEBUG").not())
        .stderr(predicate::str::contains("DEBUG"));
}
