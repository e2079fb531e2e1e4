//! `checkline completions` - shell completion scripts.

use std::io;

use clap::CommandFactory;
use clap_complete::Shell;

use checkline::cli::Cli;

#[cfg(not(tarpaulin_include))]
pub fn handle(shell: Shell) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
}
