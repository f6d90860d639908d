//! Picks the sink once, at construction, from whether a browser `window` exists.

use super::{BrowserSink, Sink, TerminalSink};

/// Runtime environment as far as output is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Environment {
    /// No windowing global: write ANSI to stdout.
    #[default]
    Terminal,
    /// A `window` exists: write to the devtools console.
    Browser,
}

impl Environment {
    /// Checks for a `window` global. Always `Terminal` outside `wasm32` + `web`.
    #[must_use]
    pub fn detect() -> Self {
        Self::from_window_present(window_present())
    }

    /// Maps the windowing-global signal to an environment; tests feed it directly.
    #[must_use]
    pub const fn from_window_present(present: bool) -> Self {
        if present { Self::Browser } else { Self::Terminal }
    }

    /// Builds the sink that belongs to this environment.
    #[must_use]
    pub fn sink(self) -> Box<dyn Sink> {
        match self {
            Self::Terminal => Box::new(TerminalSink::new()),
            Self::Browser => Box::new(BrowserSink::new()),
        }
    }
}

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn window_present() -> bool {
    web_sys::window().is_some()
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
const fn window_present() -> bool {
    false
}
