//! Subcommand handlers.

pub mod check;
pub mod completions;
pub mod demo;
