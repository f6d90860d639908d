//! The global emitter is process-wide state, so everything runs in one test.

use conlog::{Emitter, Error, Level, LogEvent, Sink, global};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<LogEvent>>>);

impl Sink for Recorder {
    fn write(&self, event: &LogEvent) -> Result<(), Error> {
        self.0.lock().unwrap().push(event.clone());
        Ok(())
    }
}

#[test]
fn init_once_then_forward() {
    let recorder = Recorder::default();
    assert!(!global::is_initialized());
    global::init(Emitter::with_sink(Box::new(recorder.clone()))).unwrap();
    assert!(global::is_initialized());

    let second = global::init(Emitter::with_sink(Box::new(Recorder::default())));
    assert!(matches!(second, Err(Error::AlreadyInitialized)));

    global::with(|e| {
        e.set_display_arg_types(true);
    });

    global::debug("a");
    global::info(1);
    global::warn(true);
    let line = line!() + 1;
    global::error(vec![1, 2]);
    global::log("custom", Level::Info);

    let events = recorder.0.lock().unwrap();
    assert_eq!(events.len(), 5);
    assert_eq!(events[3].level, Level::Error);
    assert_eq!(events[3].arg_types.as_deref(), Some("[number, number]"));
    assert_eq!(events[3].location, format!("{}:{line}", file!()));
    assert_eq!(events[4].level, Level::Info);
    drop(events);

    // Logging while `with` holds the emitter returns instead of hanging.
    let logged_inside = global::with(|e| {
        e.set_display_date(false);
        global::info("inside with");
        true
    });
    assert!(logged_inside);
    assert_eq!(recorder.0.lock().unwrap().len(), 5);

    // The lock is released again afterwards.
    global::info("after with");
    let events = recorder.0.lock().unwrap();
    assert_eq!(events.len(), 6);
    assert_eq!(events[5].date, None);
}
