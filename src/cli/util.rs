//! Utility functions for the CLI.

use super::Cli;
use crate::config::ConfigUpdate;
use crate::level::Level;
use serde_json::Value;

/// Shell arguments are text; anything that parses as JSON is logged as that value.
#[must_use]
pub fn parse_value(arg: &str) -> Value {
    serde_json::from_str(arg).unwrap_or_else(|_| Value::String(arg.to_string()))
}

/// One argument logs as itself; several become a sequence.
#[must_use]
pub fn payload(args: &[String]) -> Value {
    match args {
        [single] => parse_value(single),
        many => Value::Array(many.iter().map(|a| parse_value(a)).collect()),
    }
}

/// Only flags the user actually passed end up in the update.
#[must_use]
pub fn flags_update(cli: &Cli, level: Level) -> ConfigUpdate {
    let mut update = ConfigUpdate::new();
    if cli.no_date {
        update = update.display_date(false);
    }
    if cli.no_time {
        update = update.display_time(false);
    }
    if cli.ms {
        update = update.show_milliseconds(true);
    }
    if cli.types {
        update = update.display_arg_types(true);
    }
    if let Some(format) = cli.date_format {
        update = update.date_format(format);
    }
    if let Some(color) = &cli.color {
        update = update.color(level, color.clone());
    }
    update
}
