//! Indicator glyphs that open every header line.
//!
//! Emoji render at different widths across terminals, so each glyph carries its own
//! trailing padding to keep the level marker roughly aligned.

use crate::level::Level;

/// Glyph plus padding for `level`.
#[must_use]
pub const fn indicator(level: Level) -> &'static str {
    match level {
        Level::Debug => "\u{1f41b} ",
        Level::Info => "\u{2139}\u{fe0f}  ",
        Level::Warn => "\u{26a0}\u{fe0f}  ",
        Level::Error => "\u{26d4}\u{fe0f} ",
    }
}
