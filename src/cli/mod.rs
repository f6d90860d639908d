//! CLI module for conlog.
//!
//! This module provides the command-line interface using Clap.

pub mod util;

use crate::config::ConfigUpdate;
use crate::emitter::Emitter;
use crate::fmt::{Color, DateFormat};
use crate::internal;
use crate::sink::Environment;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;

pub use util::{flags_update, payload};

/// Log level for CLI arguments.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl From<LogLevel> for crate::level::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Debug => Self::Debug,
            LogLevel::Info => Self::Info,
            LogLevel::Warn => Self::Warn,
            LogLevel::Error => Self::Error,
        }
    }
}

/// conlog - Print leveled, color-coded log lines.
#[derive(Debug, Parser)]
#[command(
    name = "conlog",
    version,
    about = "Print leveled, color-coded log lines"
)]
pub struct Cli {
    /// Log level
    #[arg(value_enum)]
    pub level: LogLevel,
    /// Values to log (each parsed as JSON, falling back to plain text)
    #[arg(required = true)]
    pub values: Vec<String>,
    /// Hide the date
    #[arg(long)]
    pub no_date: bool,
    /// Hide the time
    #[arg(long)]
    pub no_time: bool,
    /// Show milliseconds
    #[arg(long)]
    pub ms: bool,
    /// Annotate argument types
    #[arg(long)]
    pub types: bool,
    /// Date component order (e.g. "ymd", "day/month/year")
    #[arg(long, value_name = "ORDER")]
    pub date_format: Option<DateFormat>,
    /// Override the level color
    #[arg(long, value_name = "INDEX:CSS")]
    pub color: Option<Color>,
    /// Config file (defaults to the platform config directory)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,
    /// Render browser-style console calls instead of ANSI
    #[arg(long)]
    pub browser: bool,
    /// Print conlog's own diagnostics to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

fn file_update(path: Option<&PathBuf>) -> Result<Option<ConfigUpdate>, crate::Error> {
    match path {
        Some(path) => ConfigUpdate::load_from(path).map(Some),
        None => ConfigUpdate::load(),
    }
}

/// Builds the emitter from config file and flags, then logs the payload once.
#[must_use]
pub fn run(cli: Cli) -> ExitCode {
    if cli.verbose {
        internal::init();
    } else {
        internal::init_from_env();
    }

    let env = if cli.browser {
        Environment::Browser
    } else {
        Environment::detect()
    };
    let mut emitter = Emitter::for_environment(env);

    // File first, flags second: flags win.
    match file_update(cli.config.as_ref()) {
        Ok(Some(update)) => {
            if let Err(e) = emitter.configure(&update) {
                internal::warn("CLI", &format!("Ignoring config file: {e}"));
            }
        }
        Ok(None) => {}
        Err(e) => {
            eprintln!("Error loading config: {e}");
            return ExitCode::FAILURE;
        }
    }

    let level = cli.level.into();
    let flags = flags_update(&cli, level);
    if !flags.is_empty()
        && let Err(e) = emitter.configure(&flags)
    {
        eprintln!("Error: {e}");
        return ExitCode::FAILURE;
    }

    emitter.log(payload(&cli.values), level);
    ExitCode::SUCCESS
}
