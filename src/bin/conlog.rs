//! `conlog` prints one leveled log line from the shell.
//!
//! Usage:
//!   conlog <level> <value>...            Log one value, or several as a sequence
//!   conlog warn '{"disk": 91}' --types   JSON arguments keep their type
//!   conlog info done --no-date --ms      Tweak the header

use clap::Parser;
use conlog::cli::{Cli, run};
use std::process::ExitCode;

fn main() -> ExitCode {
    run(Cli::parse())
}
