//! Configuration struct definitions.

use crate::fmt::{Color, DateFormat};
use crate::level::Level;
use serde::Deserialize;

/// Per-level color overrides. `None` keeps the built-in color for that level.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LevelColors {
    /// Debug headers default to dark gray, which vanishes on some dark themes.
    pub debug: Option<Color>,
    /// Info headers default to a deep blue.
    pub info: Option<Color>,
    /// Warn headers default to dark orange.
    pub warn: Option<Color>,
    /// Error headers default to dark red, hard to read on red-tinted themes.
    pub error: Option<Color>,
}

impl LevelColors {
    #[must_use]
    pub const fn get(&self, level: Level) -> Option<&Color> {
        match level {
            Level::Debug => self.debug.as_ref(),
            Level::Info => self.info.as_ref(),
            Level::Warn => self.warn.as_ref(),
            Level::Error => self.error.as_ref(),
        }
    }

    pub fn set(&mut self, level: Level, color: Color) {
        let slot = match level {
            Level::Debug => &mut self.debug,
            Level::Info => &mut self.info,
            Level::Warn => &mut self.warn,
            Level::Error => &mut self.error,
        };
        *slot = Some(color);
    }

    /// True when no level carries an override.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.debug.is_none() && self.info.is_none() && self.warn.is_none() && self.error.is_none()
    }
}

/// Live emitter settings, read on every log call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Configuration {
    /// Built-in level colors may clash with the user's terminal or devtools theme.
    pub colors: LevelColors,
    /// Short-lived processes rarely need the date; long-running ones do.
    pub display_date: bool,
    /// Readers expect the component order of their locale.
    pub date_format: DateFormat,
    /// Ordering lines by eye needs the time of day.
    pub display_time: bool,
    /// Lines from a tight loop share the same second without this.
    pub show_milliseconds: bool,
    /// `"1"` and `1` print identically; the annotation tells them apart.
    pub display_arg_types: bool,
}

impl Default for Configuration {
    fn default() -> Self {
        Self {
            colors: LevelColors::default(),
            display_date: true,
            date_format: DateFormat::MonthDayYear,
            display_time: true,
            show_milliseconds: false,
            display_arg_types: false,
        }
    }
}

/// Partial settings: only the fields that are present get merged.
///
/// Unrecognized keys are a hard error rather than silently ignored, so a typo in a
/// config file can't masquerade as a successful update.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ConfigUpdate {
    /// Merged per level: overriding one level keeps the others.
    pub colors: Option<LevelColors>,
    #[serde(alias = "displayDate")]
    pub display_date: Option<bool>,
    #[serde(alias = "dateFormat")]
    pub date_format: Option<DateFormat>,
    #[serde(alias = "displayTime")]
    pub display_time: Option<bool>,
    #[serde(alias = "showMilliseconds")]
    pub show_milliseconds: Option<bool>,
    #[serde(alias = "displayArgTypes")]
    pub display_arg_types: Option<bool>,
}

impl ConfigUpdate {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn color(mut self, level: Level, color: Color) -> Self {
        self.colors.get_or_insert_with(LevelColors::default).set(level, color);
        self
    }

    #[must_use]
    pub const fn display_date(mut self, enabled: bool) -> Self {
        self.display_date = Some(enabled);
        self
    }

    #[must_use]
    pub const fn date_format(mut self, format: DateFormat) -> Self {
        self.date_format = Some(format);
        self
    }

    #[must_use]
    pub const fn display_time(mut self, enabled: bool) -> Self {
        self.display_time = Some(enabled);
        self
    }

    #[must_use]
    pub const fn show_milliseconds(mut self, enabled: bool) -> Self {
        self.show_milliseconds = Some(enabled);
        self
    }

    #[must_use]
    pub const fn display_arg_types(mut self, enabled: bool) -> Self {
        self.display_arg_types = Some(enabled);
        self
    }

    /// True when the update would change nothing. An empty `[colors]` table counts as absent.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.colors.as_ref().is_none_or(LevelColors::is_empty)
            && self.display_date.is_none()
            && self.date_format.is_none()
            && self.display_time.is_none()
            && self.show_milliseconds.is_none()
            && self.display_arg_types.is_none()
    }
}
