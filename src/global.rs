//! Process-wide default emitter with explicit init-once semantics.
//!
//! Install a configured emitter with [`init`] early in `main`; otherwise the first logging
//! call builds a default one (environment detection plus the user's config file, if any).
//! Reconfiguring later goes through [`with`], which holds the lock for the closure's duration.

use crate::config::ConfigUpdate;
use crate::emitter::Emitter;
use crate::internal;
use crate::level::Level;
use serde_json::Value;
use std::cell::Cell;
use std::panic::Location;
use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

static GLOBAL: OnceLock<Mutex<Emitter>> = OnceLock::new();

/// Installs `emitter` as the process-wide default.
///
/// # Errors
/// Returns [`crate::Error::AlreadyInitialized`] if a default emitter already exists,
/// whether from an earlier `init` or from a logging call that built one lazily.
pub fn init(emitter: Emitter) -> Result<(), crate::Error> {
    GLOBAL
        .set(Mutex::new(emitter))
        .map_err(|_| crate::Error::AlreadyInitialized)
}

#[must_use]
pub fn is_initialized() -> bool {
    GLOBAL.get().is_some()
}

fn default_emitter() -> Emitter {
    internal::init_from_env();
    let mut emitter = Emitter::new();
    match ConfigUpdate::load() {
        Ok(Some(update)) => {
            if let Err(e) = emitter.configure(&update) {
                internal::warn("GLOBAL", &format!("Ignoring config file: {e}"));
            }
        }
        Ok(None) => {}
        Err(e) => internal::warn("GLOBAL", &format!("Config not loaded: {e}")),
    }
    emitter
}

fn global() -> &'static Mutex<Emitter> {
    GLOBAL.get_or_init(|| Mutex::new(default_emitter()))
}

thread_local! {
    /// Set while this thread holds the global lock.
    static HOLDING: Cell<bool> = const { Cell::new(false) };
}

/// Locks the default emitter and marks this thread as the holder until dropped.
struct Held(MutexGuard<'static, Emitter>);

impl Held {
    fn acquire() -> Self {
        let guard = global().lock().unwrap_or_else(PoisonError::into_inner);
        HOLDING.set(true);
        Self(guard)
    }
}

impl Drop for Held {
    fn drop(&mut self) {
        HOLDING.set(false);
    }
}

/// Runs `f` with exclusive access to the default emitter, creating it if needed.
///
/// # Deadlocks
/// Calling `with` again from inside `f` blocks forever. The logging functions of this
/// module don't: called from inside `f` (or from a sink writing for this emitter) they
/// drop their line and report it through [`internal`] diagnostics.
pub fn with<R>(f: impl FnOnce(&mut Emitter) -> R) -> R {
    let mut held = Held::acquire();
    f(&mut *held.0)
}

/// Re-entrant calls from the thread already holding the emitter are dropped rather than
/// locking the mutex a second time. Other threads wait their turn.
#[track_caller]
pub fn log(value: impl Into<Value>, level: Level) {
    let location = Location::caller();
    if HOLDING.get() {
        internal::warn(
            "GLOBAL",
            &format!(
                "Re-entrant {level} call from {}:{} dropped",
                location.file(),
                location.line()
            ),
        );
        return;
    }
    let value = value.into();
    let held = Held::acquire();
    held.0.log_at(value, level, location);
}

#[track_caller]
pub fn debug(value: impl Into<Value>) {
    log(value, Level::Debug);
}

#[track_caller]
pub fn info(value: impl Into<Value>) {
    log(value, Level::Info);
}

#[track_caller]
pub fn warn(value: impl Into<Value>) {
    log(value, Level::Warn);
}

#[track_caller]
pub fn error(value: impl Into<Value>) {
    log(value, Level::Error);
}
