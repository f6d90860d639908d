//! Each level paints its header twice over: a 256-color background for terminals and a
//! CSS color name for browser devtools. Both live in one value so overrides can't drift apart.

use serde::Deserialize;
use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

/// Paired terminal/browser color for a level header.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Color {
    /// Index into the xterm 256-color palette.
    pub ansi: u8,
    /// Any CSS color value (`darkorange`, `#ff8800`, ...).
    pub css: Cow<'static, str>,
}

impl Color {
    /// Turns on bold text. Headers are always bold in the terminal.
    pub const BOLD: &'static str = "\x1b[1m";

    /// Terminates any active SGR styling so the payload prints in the terminal default.
    pub const RESET: &'static str = "\x1b[0m";

    /// `const` so the built-in level palette can be compile-time constants.
    #[must_use]
    pub const fn new(ansi: u8, css: &'static str) -> Self {
        Self {
            ansi,
            css: Cow::Borrowed(css),
        }
    }

    /// Runtime colors (config files, CLI flags) own their CSS string.
    #[must_use]
    pub fn owned(ansi: u8, css: impl Into<String>) -> Self {
        Self {
            ansi,
            css: Cow::Owned(css.into()),
        }
    }

    /// Background SGR sequence for the 256-color palette.
    #[must_use]
    pub fn bg_ansi(&self) -> String {
        format!("\x1b[48;5;{}m", self.ansi)
    }

    #[must_use]
    pub fn css(&self) -> &str {
        &self.css
    }

    #[must_use]
    pub const fn dark_gray() -> Self {
        Self::new(240, "darkgray")
    }

    #[must_use]
    pub const fn cornflower_blue() -> Self {
        Self::new(18, "cornflowerblue")
    }

    #[must_use]
    pub const fn dark_orange() -> Self {
        Self::new(208, "darkorange")
    }

    #[must_use]
    pub const fn dark_red() -> Self {
        Self::new(88, "darkred")
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.ansi, self.css)
    }
}

/// Returned when a `<index>:<css>` color string is malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseColorError(String);

impl fmt::Display for ParseColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid color '{}', expected <0-255>:<css color>", self.0)
    }
}

impl std::error::Error for ParseColorError {}

impl FromStr for Color {
    type Err = ParseColorError;

    /// CLI flags can't carry a table, so colors come in as `208:darkorange`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseColorError(s.to_string());
        let (index, css) = s.split_once(':').ok_or_else(err)?;
        let ansi = index.trim().parse::<u8>().map_err(|_| err())?;
        let css = css.trim();
        if css.is_empty() {
            return Err(err());
        }
        Ok(Self::owned(ansi, css))
    }
}
