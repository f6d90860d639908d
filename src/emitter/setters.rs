//! Configuration changes. Every setter touches exactly one field and hands the emitter
//! back so calls can be chained.

use super::Emitter;
use crate::config::ConfigUpdate;
use crate::fmt::{Color, DateFormat};
use crate::level::Level;

impl Emitter {
    /// Merges a partial update.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidConfiguration`] when `update` sets no field.
    /// An empty update is almost always a caller bug, so it is rejected rather than ignored.
    pub fn configure(&mut self, update: &ConfigUpdate) -> Result<&mut Self, crate::Error> {
        self.config.merge(update)?;
        Ok(self)
    }

    pub fn set_color(&mut self, level: Level, color: Color) -> &mut Self {
        self.config.colors.set(level, color);
        self
    }

    pub const fn set_display_date(&mut self, enabled: bool) -> &mut Self {
        self.config.display_date = enabled;
        self
    }

    pub const fn set_date_format(&mut self, format: DateFormat) -> &mut Self {
        self.config.date_format = format;
        self
    }

    pub const fn set_display_time(&mut self, enabled: bool) -> &mut Self {
        self.config.display_time = enabled;
        self
    }

    pub const fn set_show_milliseconds(&mut self, enabled: bool) -> &mut Self {
        self.config.show_milliseconds = enabled;
        self
    }

    pub const fn set_display_arg_types(&mut self, enabled: bool) -> &mut Self {
        self.config.display_arg_types = enabled;
        self
    }
}
