#![forbid(unsafe_code)]

//! `conlog` - Leveled, color-coded console logging for terminals and browser devtools.
//!
//! Every line gets a header carrying a level indicator, an optional date and time,
//! the level name and the call site, styled with the level's color:
//! - ANSI bold + 256-color background in a terminal
//! - a `%c` CSS directive in a browser devtools console
//!
//! The payload is passed through untouched after the header. Payloads are
//! `serde_json::Value`s; a JSON array is spread into one argument per element.
//!
//! # Example
//!
//! ```
//! use conlog::{ConfigUpdate, DateFormat, Emitter, Level};
//! use serde_json::json;
//!
//! let mut emitter = Emitter::new();
//! emitter
//!     .set_date_format(DateFormat::YearMonthDay)
//!     .set_show_milliseconds(true)
//!     .set_display_arg_types(true);
//!
//! emitter.info("Application started");
//! emitter.log(json!([1, "a"]), Level::Warn);
//!
//! assert!(emitter.configure(&ConfigUpdate::new()).is_err());
//! ```
//!
//! # Features
//!
//! - `cli` (default): Enables the `conlog` command-line binary
//! - `web`: Sends browser output to the real devtools console on `wasm32`

// Core modules (always available)
pub mod config;
pub mod emitter;
mod error;
pub mod fmt;
pub mod global;
pub mod internal;
pub mod level;
pub mod sink;

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;

// Re-exports for convenience
pub use config::{ConfigUpdate, Configuration, LevelColors};
pub use emitter::{Clock, Emitter};
pub use error::Error;
pub use fmt::{Color, DateFormat, LevelStyle};
pub use level::Level;
pub use sink::{
    BrowserSink, Console, ConsoleCall, DevtoolsConsole, Environment, LogEvent, Sink, SinkKind,
    TerminalSink,
};
