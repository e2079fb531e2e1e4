//! Shared helpers for integration tests.

use std::process::Command;

/// Config path that never exists, so a user's config cannot leak into tests.
pub const NO_CONFIG: &str = "/nonexistent/checkline/config.toml";

/// Command for the checkline binary with a predictable environment:
/// no color, 80 columns, no user config, no log filter.
pub fn checkline() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_checkline"));
    cmd.env("NO_COLOR", "1")
        .env("COLUMNS", "80")
        .env("CHECKLINE_CONFIG", NO_CONFIG)
        .env_remove("CHECKLINE_LOG");
    cmd
}

/// Run checkline and capture output.
pub fn run_checkline(args: &[&str]) -> (String, String, i32) {
    let output = checkline()
        .args(args)
        .output()
        .expect("Failed to execute checkline");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let exit_code = output.status.code().unwrap_or(-1);

    (stdout, stderr, exit_code)
}

/// `message` laid out on 80 columns with `tag` at column 65.
pub fn line_80(message: &str, tag: &str) -> String {
    let used = 2 + message.len();
    format!("  {}{} [ {} ]\n", message, " ".repeat(65 - used), tag)
}
