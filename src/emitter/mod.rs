//! The emitter owns a configuration and a sink. Each `log` call resolves style, timestamp
//! and type annotation into a [`LogEvent`] and hands it to the sink chosen at construction.

mod setters;

use crate::config::Configuration;
use crate::fmt::{LevelStyle, annotate, format_date, format_time};
use crate::internal;
use crate::level::Level;
use crate::sink::{Environment, LogEvent, Sink, SinkKind};
use chrono::{Local, NaiveDateTime};
use serde::Serialize;
use serde_json::Value;
use std::panic::Location;

/// Source of "now" for header timestamps.
pub type Clock = fn() -> NaiveDateTime;

fn local_now() -> NaiveDateTime {
    Local::now().naive_local()
}

/// Leveled console logger.
///
/// Logging takes `&self`; changing settings takes `&mut self`, so a shared emitter can't be
/// reconfigured from under a concurrent reader.
pub struct Emitter {
    config: Configuration,
    sink: Box<dyn Sink>,
    clock: Clock,
}

impl Default for Emitter {
    fn default() -> Self {
        Self::new()
    }
}

impl Emitter {
    /// Detects the environment once and wires the matching sink.
    #[must_use]
    pub fn new() -> Self {
        Self::for_environment(Environment::detect())
    }

    #[must_use]
    pub fn for_environment(env: Environment) -> Self {
        Self::with_sink(env.sink())
    }

    /// Custom destinations (tests, capture buffers, remote consoles).
    #[must_use]
    pub fn with_sink(sink: Box<dyn Sink>) -> Self {
        Self {
            config: Configuration::default(),
            sink,
            clock: local_now,
        }
    }

    /// Replaces the whole configuration at construction time.
    #[must_use]
    pub fn with_config(mut self, config: Configuration) -> Self {
        self.config = config;
        self
    }

    /// Pins the timestamp source, mainly for deterministic output.
    #[must_use]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// Builds the event for one call without writing it.
    #[must_use]
    pub fn event(&self, value: Value, level: Level, location: &Location<'_>) -> LogEvent {
        let style = LevelStyle::of(level).with_override(self.config.colors.get(level));
        let now = (self.clock)();

        let date = self
            .config
            .display_date
            .then(|| format_date(&now, self.config.date_format));
        let time = self
            .config
            .display_time
            .then(|| format_time(&now, self.config.show_milliseconds));
        let arg_types = self.config.display_arg_types.then(|| annotate(&value));

        let values = match value {
            Value::Array(items) => items,
            single => vec![single],
        };

        LogEvent {
            level,
            indicator: style.indicator,
            color: style.color,
            date,
            time,
            arg_types,
            location: format!("{}:{}", location.file(), location.line()),
            values,
        }
    }

    /// Formats `value` at `level` and writes it to the sink.
    ///
    /// A JSON array is treated as a sequence: each element becomes its own argument.
    /// Write failures are reported through internal diagnostics and otherwise ignored.
    #[track_caller]
    pub fn log(&self, value: impl Into<Value>, level: Level) -> &Self {
        self.log_at(value.into(), level, Location::caller())
    }

    /// Logs any serializable value, e.g. a caller's own `#[derive(Serialize)]` struct.
    ///
    /// A value that fails to serialize writes nothing; the failure goes to internal diagnostics.
    #[track_caller]
    pub fn log_serialize<T: Serialize + ?Sized>(&self, value: &T, level: Level) -> &Self {
        let location = Location::caller();
        match serde_json::to_value(value) {
            Ok(value) => self.log_at(value, level, location),
            Err(e) => {
                internal::error(
                    "EMITTER",
                    &format!(
                        "Cannot serialize value from {}:{}: {e}",
                        location.file(),
                        location.line()
                    ),
                );
                self
            }
        }
    }

    /// For forwarders that captured the caller location themselves.
    pub(crate) fn log_at(&self, value: Value, level: Level, location: &Location<'_>) -> &Self {
        if let Err(e) = self.write(value, level, location) {
            internal::error("EMITTER", &format!("Sink write failed: {e}"));
        }
        self
    }

    /// Like [`Emitter::log`] but surfaces the sink error instead of reporting it.
    pub(crate) fn write(
        &self,
        value: Value,
        level: Level,
        location: &Location<'_>,
    ) -> Result<(), crate::Error> {
        self.sink.write(&self.event(value, level, location))
    }

    #[track_caller]
    pub fn debug(&self, value: impl Into<Value>) -> &Self {
        self.log(value, Level::Debug)
    }

    #[track_caller]
    pub fn info(&self, value: impl Into<Value>) -> &Self {
        self.log(value, Level::Info)
    }

    #[track_caller]
    pub fn warn(&self, value: impl Into<Value>) -> &Self {
        self.log(value, Level::Warn)
    }

    #[track_caller]
    pub fn error(&self, value: impl Into<Value>) -> &Self {
        self.log(value, Level::Error)
    }

    #[must_use]
    pub const fn config(&self) -> &Configuration {
        &self.config
    }

    /// Tests and diagnostics check which sink family construction picked.
    #[must_use]
    pub fn sink_kind(&self) -> SinkKind {
        self.sink.kind()
    }
}
