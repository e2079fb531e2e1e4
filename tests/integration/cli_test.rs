//! Integration tests for CLI parsing, demo and completions.

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::{checkline, run_checkline};

// ============================================================================
// Help and Version
// ============================================================================

#[test]
fn help_exits_0_and_lists_subcommands() {
    let (stdout, _stderr, exit_code) = run_checkline(&["--help"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("check"));
    assert!(stdout.contains("demo"));
    assert!(stdout.contains("completions"));
    assert!(stdout.contains("--color"));
}

#[test]
fn version_includes_package_version() {
    Command::from_std(checkline())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::starts_with(format!(
            "checkline {}",
            env!("CARGO_PKG_VERSION")
        )));
}

// ============================================================================
// Usage Errors
// ============================================================================

#[test]
fn no_subcommand_shows_usage_error() {
    let (_stdout, stderr, exit_code) = run_checkline(&[]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("Usage"));
}

#[test]
fn check_without_command_is_rejected() {
    let (stdout, stderr, exit_code) = run_checkline(&["check", "for cc"]);

    assert_eq!(exit_code, 2);
    assert!(stdout.is_empty());
    assert!(stderr.contains("<COMMAND>"));
}

#[test]
fn unknown_color_choice_is_rejected() {
    let (_stdout, stderr, exit_code) = run_checkline(&["--color", "purple", "demo"]);

    assert_eq!(exit_code, 2);
    assert!(stderr.contains("purple"));
}

// ============================================================================
// Demo
// ============================================================================

#[test]
fn demo_lists_every_color() {
    let (stdout, _stderr, exit_code) = run_checkline(&["demo"]);

    assert_eq!(exit_code, 0);
    for name in [
        "BLACK", "BLUE", "GREEN", "CYAN", "RED", "MAGENTA", "YELLOW", "WHITE",
    ] {
        assert!(stdout.contains(&format!("[ {} ]", name)), "missing {}", name);
    }
    assert!(stdout.contains("[ ! ]"));
    assert!(stdout.contains("[ ERROR ]"));
}

#[test]
fn snapshot_demo_narrow_plain() {
    let (stdout, stderr, exit_code) = run_checkline(&["--columns", "40", "demo"]);

    assert_eq!(exit_code, 0, "stderr: {}", stderr);
    let quoted = stdout
        .lines()
        .map(|l| format!("{:?}", l))
        .collect::<Vec<_>>()
        .join("\n");
    insta::assert_snapshot!("demo_narrow_plain", quoted);
}

#[test]
fn verbose_logs_go_to_stderr_only() {
    let (stdout, stderr, exit_code) = run_checkline(&["-v", "demo"]);

    assert_eq!(exit_code, 0);
    assert!(stderr.contains("probed terminal"));
    assert!(!stdout.contains("probed terminal"));
}

// ============================================================================
// Shell Completions
// ============================================================================

#[test]
fn completions_bash_mentions_binary() {
    Command::from_std(checkline())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("checkline"));
}

#[test]
fn completions_zsh_includes_check_subcommand() {
    let (stdout, _stderr, exit_code) = run_checkline(&["completions", "zsh"]);

    assert_eq!(exit_code, 0);
    assert!(stdout.contains("#compdef checkline"));
    assert!(stdout.contains("check"));
}
