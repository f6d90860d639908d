//! Header rendering is split by concern: colors, indicator glyphs, the per-level style
//! table, timestamps, and argument-type annotation.

pub mod args;
mod color;
pub mod datetime;
mod icon;
mod style;

pub use args::{annotate, render_value, type_name};
pub use color::{Color, ParseColorError};
pub use datetime::{DateFormat, ParseDateFormatError, format_date, format_time};
pub use icon::indicator;
pub use style::LevelStyle;
