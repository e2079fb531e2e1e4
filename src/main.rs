//! checkline binary entry point.

use anyhow::{Context, Result};
use clap::Parser;

use checkline::cli::{Cli, Commands};
use checkline::{logging, Config};

mod commands;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli) {
        Ok(code) => std::process::exit(code),
        Err(e) => {
            eprintln!("Error: {:#}", e);
            std::process::exit(1);
        }
    }
}

fn run(cli: Cli) -> Result<i32> {
    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;
    let config = cli.apply(config);

    match &cli.command {
        Commands::Check(args) => commands::check::handle(args, &config),
        Commands::Demo => commands::demo::handle(&config).map(|()| 0),
        Commands::Completions { shell } => {
            commands::completions::handle(*shell);
            Ok(0)
        }
    }
}
