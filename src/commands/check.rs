//! `checkline check` - run a command under a checking line.

use std::process::{Command, Output};

use anyhow::{Context, Result};

use checkline::cli::CheckArgs;
use checkline::{terminal, Config, StatusLine};

/// Exit code used when the program cannot be started (as in POSIX shells).
const EXIT_NOT_RUNNABLE: i32 = 127;

/// Run the checked command and report its result.
///
/// Returns the exit code the process should exit with.
#[cfg(not(tarpaulin_include))]
pub fn handle(args: &CheckArgs, config: &Config) -> Result<i32> {
    let config = args.apply(config.clone());
    let mut status = StatusLine::stdout(terminal::probe(&config)).with_indent(config.indent);

    let (program, program_args) = args
        .command
        .split_first()
        .context("No command given to check")?;

    status
        .checking(&args.message)
        .context("Failed to write status line")?;

    tracing::debug!(program = %program, args = ?program_args, "running check");
    let output = match Command::new(program).args(program_args).output() {
        Ok(output) => output,
        Err(e) => {
            tracing::debug!(error = %e, "failed to start program");
            status.error("ERROR")?;
            status.error_new_line(&format!("{}: {}", program, e))?;
            return Ok(EXIT_NOT_RUNNABLE);
        }
    };

    if output.status.success() {
        status.result(&config.ok_label)?;
        return Ok(0);
    }

    status.error(&config.fail_label)?;
    if args.show_output {
        for line in failure_detail(&output).lines() {
            status.error_new_line(line)?;
        }
    }

    let code = output.status.code().unwrap_or(1);
    tracing::debug!(code, "check failed");
    Ok(code)
}

/// Text shown below a failed check: stderr, or stdout when stderr is empty.
fn failure_detail(output: &Output) -> String {
    let stderr = String::from_utf8_lossy(&output.stderr);
    let text = if stderr.trim().is_empty() {
        String::from_utf8_lossy(&output.stdout)
    } else {
        stderr
    };
    text.trim_end().to_string()
}
