//! Where a finished log line goes. The emitter builds one [`LogEvent`] per call and hands it
//! to a [`Sink`]; the sink decides how the header is styled and where the bytes land.

mod browser;
mod env;
mod terminal;

pub use browser::{BrowserSink, Console, ConsoleCall, DevtoolsConsole};
pub use env::Environment;
pub use terminal::TerminalSink;

use crate::fmt::Color;
use crate::level::Level;
use serde_json::Value;

/// Everything resolved for one call, discarded once the sink has written it.
#[derive(Debug, Clone, PartialEq)]
pub struct LogEvent {
    /// Printed as `(level)` in the header.
    pub level: Level,
    /// Glyph from the fixed level table.
    pub indicator: &'static str,
    /// Built-in level color, or the configured override.
    pub color: Color,
    /// `None` when date display is off.
    pub date: Option<String>,
    /// `None` when time display is off.
    pub time: Option<String>,
    /// `None` when argument-type display is off.
    pub arg_types: Option<String>,
    /// `file:line` of the logging call site. Advisory only.
    pub location: String,
    /// Payload, already spread when the caller passed a sequence.
    pub values: Vec<Value>,
}

impl LogEvent {
    /// `"{date} {time} "` with absent parts dropped, so it can sit directly before `(level)`.
    #[must_use]
    pub fn stamp(&self) -> String {
        let mut out = String::new();
        for part in [&self.date, &self.time].into_iter().flatten() {
            out.push_str(part);
            out.push(' ');
        }
        out
    }

    /// `" {types}"` or empty, to sit directly after `(level)`.
    #[must_use]
    pub fn types_suffix(&self) -> String {
        self.arg_types
            .as_ref()
            .map_or_else(String::new, |t| format!(" {t}"))
    }
}

/// Which family of sink is wired into an emitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SinkKind {
    /// ANSI header on a text stream.
    Terminal,
    /// `%c` template for a devtools console.
    Browser,
    /// Anything supplied by the caller.
    Custom,
}

/// Capability to accept one styled line plus its payload values.
///
/// `Send + Sync` so an emitter can be shared behind the global mutex.
pub trait Sink: Send + Sync {
    /// # Errors
    /// I/O or serialization errors from the underlying stream.
    fn write(&self, event: &LogEvent) -> Result<(), crate::Error>;

    fn kind(&self) -> SinkKind {
        SinkKind::Custom
    }
}
