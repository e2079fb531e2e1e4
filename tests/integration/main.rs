//! Integration tests for the checkline binary.

mod cli_test;
mod helpers;
