//! Terminal capability lookup.
//!
//! Status lines never branch on the platform themselves; they ask a
//! [`TerminalInfo`] for the width and color sequences. [`probe`] picks the
//! implementation once at startup.

pub mod ansi;
pub mod info;
pub mod plain;

pub use ansi::AnsiTerminal;
pub use info::{TerminalInfo, TerminalKind, DEFAULT_COLUMNS};
pub use plain::PlainTerminal;

use crate::config::{ColorChoice, Config};

/// Facts about the hosting environment that decide which terminal is used.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Environment {
    /// Platform has a terminal capability database (Unix-like)
    pub has_capabilities: bool,
    /// Stdout is attached to a terminal
    pub stdout_is_tty: bool,
    /// Value of `TERM`
    pub term: Option<String>,
    /// `NO_COLOR` is set
    pub no_color: bool,
    /// Width reported by the stdout terminal
    pub tty_columns: Option<usize>,
    /// Value of `COLUMNS`
    pub columns_env: Option<String>,
}

impl Environment {
    /// Inspect the current process environment.
    #[cfg(unix)]
    pub fn detect() -> Self {
        Self {
            has_capabilities: true,
            stdout_is_tty: atty::is(atty::Stream::Stdout),
            term: std::env::var("TERM").ok(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            tty_columns: terminal_size::terminal_size().map(|(w, _)| w.0 as usize),
            columns_env: std::env::var("COLUMNS").ok(),
        }
    }

    /// Inspect the current process environment.
    ///
    /// Without a capability database every lookup degrades to the defaults.
    #[cfg(not(unix))]
    pub fn detect() -> Self {
        Self {
            has_capabilities: false,
            stdout_is_tty: atty::is(atty::Stream::Stdout),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            ..Self::default()
        }
    }

    /// Terminal width, falling back to [`DEFAULT_COLUMNS`].
    ///
    /// Zero is treated the same as "unknown".
    pub fn columns(&self) -> usize {
        if !self.has_capabilities {
            return DEFAULT_COLUMNS;
        }
        self.tty_columns
            .filter(|&c| c > 0)
            .or_else(|| {
                self.columns_env
                    .as_deref()
                    .and_then(|v| v.trim().parse::<usize>().ok())
                    .filter(|&c| c > 0)
            })
            .unwrap_or(DEFAULT_COLUMNS)
    }

    /// Whether color sequences should be emitted under `choice`.
    pub fn supports_color(&self, choice: ColorChoice) -> bool {
        if !self.has_capabilities {
            return false;
        }
        match choice {
            ColorChoice::Never => false,
            ColorChoice::Always => true,
            ColorChoice::Auto => {
                let term_ok = matches!(self.term.as_deref(), Some(t) if !t.is_empty() && t != "dumb");
                self.stdout_is_tty && term_ok && !self.no_color
            }
        }
    }
}

/// Probe the real environment and select a terminal implementation.
pub fn probe(config: &Config) -> Box<dyn TerminalInfo> {
    select(config, &Environment::detect())
}

/// Select a terminal implementation for `env`.
pub fn select(config: &Config, env: &Environment) -> Box<dyn TerminalInfo> {
    let columns = config
        .columns
        .filter(|&c| c > 0)
        .unwrap_or_else(|| env.columns());
    let color = env.supports_color(config.color);

    tracing::debug!(
        columns,
        color,
        choice = ?config.color,
        term = ?env.term,
        tty = env.stdout_is_tty,
        "probed terminal"
    );

    if color {
        Box::new(AnsiTerminal::new(columns))
    } else {
        Box::new(PlainTerminal::new(columns))
    }
}
