//! `stockline` command-line front end: argument parsing and command execution.

pub mod cli;
pub mod commands;

pub use cli::{Cli, Commands};
pub use commands::{execute, execute_with, run};
