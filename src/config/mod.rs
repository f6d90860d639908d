//! Emitter settings, partial updates, and the optional TOML file they can come from.
//!
//! Separated from struct definitions so that the loading logic (file I/O, merge
//! strategy) stays independent of the serde schema.

mod structs;

pub use structs::{ConfigUpdate, Configuration, LevelColors};

use crate::internal;
use std::fs;
use std::path::{Path, PathBuf};

const APP_NAME: &str = "conlog";
const CONFIG_FILE: &str = "config.toml";

impl Configuration {
    /// Field-by-field merge. Every recognized key is listed here; nothing is copied reflectively.
    ///
    /// # Errors
    /// Returns [`crate::Error::InvalidConfiguration`] when `update` sets no field.
    pub fn merge(&mut self, update: &ConfigUpdate) -> Result<(), crate::Error> {
        if update.is_empty() {
            return Err(crate::Error::InvalidConfiguration(
                "update contains no recognized fields".to_string(),
            ));
        }

        if let Some(colors) = &update.colors {
            if let Some(c) = &colors.debug {
                self.colors.debug = Some(c.clone());
            }
            if let Some(c) = &colors.info {
                self.colors.info = Some(c.clone());
            }
            if let Some(c) = &colors.warn {
                self.colors.warn = Some(c.clone());
            }
            if let Some(c) = &colors.error {
                self.colors.error = Some(c.clone());
            }
        }
        if let Some(v) = update.display_date {
            self.display_date = v;
        }
        if let Some(v) = update.date_format {
            self.date_format = v;
        }
        if let Some(v) = update.display_time {
            self.display_time = v;
        }
        if let Some(v) = update.show_milliseconds {
            self.show_milliseconds = v;
        }
        if let Some(v) = update.display_arg_types {
            self.display_arg_types = v;
        }
        Ok(())
    }
}

impl ConfigUpdate {
    /// Reads the user's config file from the platform config directory.
    ///
    /// A missing file is not an error: `Ok(None)` means "keep the defaults".
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or the file is unreadable or malformed.
    pub fn load() -> Result<Option<Self>, crate::Error> {
        let path = Self::config_path()?;
        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(None);
        }
        let update = Self::load_from(&path)?;
        internal::info(
            "CONFIG",
            &format!("Config loaded from {}", path.display()),
        );
        Ok(Some(update))
    }

    /// Loads an update from an explicit path; a leading `~` is expanded.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let content = fs::read_to_string(&expanded).inspect_err(|e| {
            internal::warn("CONFIG", &format!("Cannot read {expanded}: {e}"));
        })?;
        Self::from_toml_str(&content).inspect_err(|e| {
            internal::error("CONFIG", &format!("Invalid config {expanded}: {e}"));
        })
    }

    /// # Errors
    /// Returns [`crate::Error::ConfigParse`] on syntax errors or unrecognized keys.
    pub fn from_toml_str(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/conlog/config.toml`.
    ///
    /// # Errors
    /// Returns [`crate::Error::ConfigDirNotFound`] when the platform has no home directory.
    pub fn config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", APP_NAME)
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(crate::Error::ConfigDirNotFound)
    }
}
