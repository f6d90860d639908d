//! The fixed per-level look: which glyph and which color a header gets when no override applies.

use super::color::Color;
use super::icon::indicator;
use crate::level::Level;

/// Static style entry for one level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LevelStyle {
    /// Glyph that makes the level recognizable before the text is read.
    pub indicator: &'static str,
    /// Header background; the only part a configuration can override.
    pub color: Color,
}

impl LevelStyle {
    /// Total over `Level`; there is no unknown level to fall back from.
    #[must_use]
    pub const fn of(level: Level) -> Self {
        let color = match level {
            Level::Debug => Color::dark_gray(),
            Level::Info => Color::cornflower_blue(),
            Level::Warn => Color::dark_orange(),
            Level::Error => Color::dark_red(),
        };
        Self {
            indicator: indicator(level),
            color,
        }
    }

    /// Applies a configured color override, keeping the built-in indicator.
    #[must_use]
    pub fn with_override(mut self, color: Option<&Color>) -> Self {
        if let Some(color) = color {
            self.color = color.clone();
        }
        self
    }
}
