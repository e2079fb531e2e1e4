//! Command-line definitions.
//!
//! Lives in the library so xtask can render the man page from it.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::config::{ColorChoice, Config};

/// Print aligned "Checking ... [ OK ]" status lines for setup scripts.
#[derive(Debug, Parser)]
#[command(name = "checkline", version = crate::VERSION, about, long_about = None)]
pub struct Cli {
    /// Config file (defaults to $CHECKLINE_CONFIG or the user config dir)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// When to use colors
    #[arg(long, global = true, value_enum, value_name = "WHEN")]
    pub color: Option<ColorChoice>,

    /// Terminal width to align against instead of probing
    #[arg(long, global = true, value_name = "N")]
    pub columns: Option<usize>,

    /// Log diagnostics to stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run a command under a checking line and print its result tag
    Check(CheckArgs),

    /// Show every tag color and the layout rules
    Demo,

    /// Generate a shell completion script
    Completions {
        /// Target shell
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

#[derive(Debug, Args)]
pub struct CheckArgs {
    /// Message shown while the command runs
    pub message: String,

    /// Spaces before the message
    #[arg(long, value_name = "N")]
    pub indent: Option<usize>,

    /// Tag printed on success
    #[arg(long, value_name = "LABEL")]
    pub ok: Option<String>,

    /// Tag printed on failure
    #[arg(long, value_name = "LABEL")]
    pub fail: Option<String>,

    /// Print the command's output below the tag when it fails
    #[arg(long)]
    pub show_output: bool,

    /// Program and arguments to run
    #[arg(last = true, required = true, value_name = "COMMAND")]
    pub command: Vec<String>,
}

impl Cli {
    /// Apply global flag overrides on top of a loaded config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(color) = self.color {
            config.color = color;
        }
        if let Some(columns) = self.columns {
            config.columns = Some(columns);
        }
        config
    }
}

impl CheckArgs {
    /// Apply per-check overrides on top of a loaded config.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(indent) = self.indent {
            config.indent = indent;
        }
        if let Some(ok) = &self.ok {
            config.ok_label = ok.clone();
        }
        if let Some(fail) = &self.fail {
            config.fail_label = fail.clone();
        }
        config
    }
}
