//! Terminal rendering: a bold header on the level's background color, then the payload.

use super::{LogEvent, Sink, SinkKind};
use crate::fmt::{Color, render_value};

use std::io::{self, Write};
use std::sync::Mutex;

/// ANSI sink. Writes to stdout unless a writer was supplied.
#[derive(Default)]
pub struct TerminalSink {
    writer: Option<Mutex<Box<dyn Write + Send>>>,
}

impl TerminalSink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Redirects output, e.g. to stderr or an in-memory buffer.
    #[must_use]
    pub fn with_writer(writer: impl Write + Send + 'static) -> Self {
        Self {
            writer: Some(Mutex::new(Box::new(writer))),
        }
    }

    /// The header line, styling and reset included, without trailing newlines.
    #[must_use]
    pub fn header(event: &LogEvent) -> String {
        format!(
            "{bold}{bg}{indicator} {stamp}({level}){types} in {location}{reset}",
            bold = Color::BOLD,
            bg = event.color.bg_ansi(),
            indicator = event.indicator,
            stamp = event.stamp(),
            level = event.level,
            types = event.types_suffix(),
            location = event.location,
            reset = Color::RESET,
        )
    }

    /// Full block for one call: header, blank line, values separated by spaces, blank line.
    #[must_use]
    pub fn render(event: &LogEvent) -> String {
        let values: Vec<String> = event.values.iter().map(render_value).collect();
        format!("{}\n\n{}\n\n", Self::header(event), values.join(" "))
    }
}

impl Sink for TerminalSink {
    fn write(&self, event: &LogEvent) -> Result<(), crate::Error> {
        let block = Self::render(event);
        match &self.writer {
            Some(writer) => {
                let mut writer = writer
                    .lock()
                    .unwrap_or_else(std::sync::PoisonError::into_inner);
                writer.write_all(block.as_bytes())?;
                writer.flush()?;
            }
            None => {
                let mut out = io::stdout().lock();
                out.write_all(block.as_bytes())?;
                out.flush()?;
            }
        }
        Ok(())
    }

    fn kind(&self) -> SinkKind {
        SinkKind::Terminal
    }
}
