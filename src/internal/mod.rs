//! conlog's own diagnostic output. Config loading and sink failures are reported through
//! the same emitter machinery, written to stderr so they never mix with payload output.
//!
//! Uses `OnceLock` so the logger is initialized exactly once, even if
//! multiple entry points (CLI, global emitter, tests) race to call `init`.

use crate::emitter::Emitter;
use crate::level::Level;
use crate::sink::TerminalSink;
use std::io;
use std::panic::Location;
use std::sync::OnceLock;

/// Setting this variable (to anything) turns diagnostics on without code changes.
pub const ENV_VAR: &str = "CONLOG_INTERNAL";

static INTERNAL_EMITTER: OnceLock<Emitter> = OnceLock::new();

/// Enables diagnostics. Only the first call takes effect; later calls are no-ops.
pub fn init() {
    let was_init = INTERNAL_EMITTER.get().is_some();
    INTERNAL_EMITTER.get_or_init(|| {
        let mut emitter = Emitter::with_sink(Box::new(TerminalSink::with_writer(io::stderr())));
        emitter.set_show_milliseconds(true);
        emitter
    });
    if !was_init {
        debug("INTERNAL", "Internal logger ready");
    }
}

/// Enables diagnostics when [`ENV_VAR`] is set.
pub fn init_from_env() {
    if std::env::var_os(ENV_VAR).is_some() {
        init();
    }
}

#[must_use]
pub fn is_enabled() -> bool {
    INTERNAL_EMITTER.get().is_some()
}

/// Pre-init calls silently vanish rather than crashing, so early startup is safe.
/// Write errors are dropped here; reporting them would recurse.
#[track_caller]
fn log(level: Level, scope: &str, msg: &str) {
    if let Some(emitter) = INTERNAL_EMITTER.get() {
        let _ = emitter.write(format!("[{scope}] {msg}").into(), level, Location::caller());
    }
}

#[track_caller]
pub fn debug(scope: &str, msg: &str) {
    log(Level::Debug, scope, msg);
}

#[track_caller]
pub fn info(scope: &str, msg: &str) {
    log(Level::Info, scope, msg);
}

#[track_caller]
pub fn warn(scope: &str, msg: &str) {
    log(Level::Warn, scope, msg);
}

#[track_caller]
pub fn error(scope: &str, msg: &str) {
    log(Level::Error, scope, msg);
}
