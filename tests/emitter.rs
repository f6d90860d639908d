//! Tests for the emitter: style resolution, timestamps, payload handling, configuration.

use chrono::{NaiveDate, NaiveDateTime};
use conlog::{
    Color, ConfigUpdate, DateFormat, Emitter, Environment, Error, Level, LevelStyle, LogEvent,
    Sink, SinkKind,
};
use serde_json::{Value, json};
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct Recorder(Arc<Mutex<Vec<LogEvent>>>);

impl Recorder {
    fn events(&self) -> Vec<LogEvent> {
        self.0.lock().unwrap().clone()
    }

    fn last(&self) -> LogEvent {
        self.events().pop().expect("no event recorded")
    }
}

impl Sink for Recorder {
    fn write(&self, event: &LogEvent) -> Result<(), Error> {
        self.0.lock().unwrap().push(event.clone());
        Ok(())
    }
}

fn fixed() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2024, 3, 7)
        .unwrap()
        .and_hms_milli_opt(9, 5, 3, 7)
        .unwrap()
}

fn emitter() -> (Emitter, Recorder) {
    let recorder = Recorder::default();
    let emitter = Emitter::with_sink(Box::new(recorder.clone())).with_clock(fixed);
    (emitter, recorder)
}

#[test]
fn each_level_uses_its_builtin_style() {
    let (emitter, recorder) = emitter();
    for level in Level::all() {
        emitter.log("x", level);
        let event = recorder.last();
        let style = LevelStyle::of(level);
        assert_eq!(event.level, level);
        assert_eq!(event.indicator, style.indicator);
        assert_eq!(event.color, style.color);
    }
}

#[test]
fn color_override_takes_precedence() {
    let (mut emitter, recorder) = emitter();
    let custom = Color::new(27, "dodgerblue");
    emitter.set_color(Level::Warn, custom.clone());

    emitter.warn("careful");
    assert_eq!(recorder.last().color, custom);

    emitter.error("other levels keep their color");
    assert_eq!(recorder.last().color, LevelStyle::of(Level::Error).color);
}

#[test]
fn convenience_wrappers_fix_the_level() {
    let (emitter, recorder) = emitter();
    emitter.debug(1).info(2).warn(3).error(4);
    let levels: Vec<Level> = recorder.events().iter().map(|e| e.level).collect();
    assert_eq!(levels, Level::all());
}

#[test]
fn default_header_has_date_and_time() {
    let (emitter, recorder) = emitter();
    emitter.info("x");
    let event = recorder.last();
    assert_eq!(event.date.as_deref(), Some("03/07/2024"));
    assert_eq!(event.time.as_deref(), Some("09:05:03"));
    assert_eq!(event.arg_types, None);
}

#[test]
fn date_format_and_milliseconds() {
    let (mut emitter, recorder) = emitter();
    emitter
        .set_date_format(DateFormat::YearDayMonth)
        .set_show_milliseconds(true);
    emitter.info("x");
    let event = recorder.last();
    assert_eq!(event.date.as_deref(), Some("2024/07/03"));
    assert_eq!(event.time.as_deref(), Some("09:05:03:007"));
}

#[test]
fn date_and_time_can_be_hidden() {
    let (mut emitter, recorder) = emitter();
    emitter.set_display_date(false).set_display_time(false);
    emitter.info("x");
    let event = recorder.last();
    assert_eq!(event.date, None);
    assert_eq!(event.time, None);
    assert_eq!(event.stamp(), "");
}

#[test]
fn configure_rejects_empty_update() {
    let (mut emitter, _) = emitter();
    let err = emitter.configure(&ConfigUpdate::new()).err().unwrap();
    assert!(matches!(err, Error::InvalidConfiguration(_)));
}

#[test]
fn configure_display_date_false_suppresses_date() {
    let (mut emitter, recorder) = emitter();
    emitter
        .configure(&ConfigUpdate::new().display_date(false))
        .unwrap()
        .info("x");
    assert_eq!(recorder.last().date, None);
    assert!(recorder.last().time.is_some());
}

#[test]
fn sequences_are_spread() {
    let (emitter, recorder) = emitter();
    emitter.info(json!([1, "a", {"k": true}]));
    assert_eq!(
        recorder.last().values,
        vec![json!(1), json!("a"), json!({"k": true})]
    );

    emitter.info(vec!["x", "y"]);
    assert_eq!(recorder.last().values, vec![json!("x"), json!("y")]);
}

#[test]
fn single_values_pass_through_unchanged() {
    let (emitter, recorder) = emitter();
    let value = json!({"nested": {"list": [1, 2]}});
    emitter.debug(value.clone());
    assert_eq!(recorder.last().values, vec![value]);
}

#[test]
fn arg_types_for_sequence() {
    let (mut emitter, recorder) = emitter();
    emitter.set_display_arg_types(true);
    emitter.info(json!([1, "a"]));
    let event = recorder.last();
    let types = event.arg_types.unwrap();
    assert_eq!(types, "[number, string]");
    assert_eq!(types.split(", ").count(), event.values.len());
}

#[test]
fn arg_types_for_single_value() {
    let (mut emitter, recorder) = emitter();
    emitter.set_display_arg_types(true);
    emitter.info(Value::Null);
    assert_eq!(recorder.last().arg_types.as_deref(), Some("null"));
}

#[test]
fn setters_chain() {
    let (mut emitter, _) = emitter();
    emitter
        .set_color(Level::Info, Color::new(21, "blue"))
        .set_display_date(false)
        .set_date_format(DateFormat::DayMonthYear)
        .set_display_time(false)
        .set_show_milliseconds(true)
        .set_display_arg_types(true)
        .configure(&ConfigUpdate::new().display_time(true))
        .unwrap()
        .set_display_date(true);

    let config = emitter.config();
    assert!(config.display_date);
    assert!(config.display_time);
    assert!(config.show_milliseconds);
    assert!(config.display_arg_types);
    assert_eq!(config.date_format, DateFormat::DayMonthYear);
    assert_eq!(config.colors.get(Level::Info), Some(&Color::new(21, "blue")));
}

#[test]
fn location_points_at_the_caller() {
    let (emitter, recorder) = emitter();
    let line = line!() + 1;
    emitter.warn("here");
    assert_eq!(recorder.last().location, format!("{}:{line}", file!()));
}

#[test]
fn default_level_is_debug() {
    let (emitter, recorder) = emitter();
    emitter.log("x", Level::default());
    assert_eq!(recorder.last().level, Level::Debug);
}

#[test]
fn environment_selects_sink() {
    assert_eq!(
        Emitter::for_environment(Environment::from_window_present(false)).sink_kind(),
        SinkKind::Terminal
    );
    assert_eq!(
        Emitter::for_environment(Environment::from_window_present(true)).sink_kind(),
        SinkKind::Browser
    );
    assert_eq!(emitter().0.sink_kind(), SinkKind::Custom);
}

#[test]
fn native_detection_is_terminal() {
    assert_eq!(Environment::detect(), Environment::Terminal);
    assert_eq!(Emitter::new().sink_kind(), SinkKind::Terminal);
}

#[test]
fn failing_sink_does_not_panic() {
    struct Broken;
    impl Sink for Broken {
        fn write(&self, _: &LogEvent) -> Result<(), Error> {
            Err(Error::Format("broken".to_string()))
        }
    }

    let emitter = Emitter::with_sink(Box::new(Broken));
    emitter.error("dropped");
}

#[test]
fn with_config_replaces_settings() {
    let recorder = Recorder::default();
    let config = conlog::Configuration {
        display_time: false,
        date_format: DateFormat::DayMonthYear,
        ..conlog::Configuration::default()
    };
    let emitter = Emitter::with_sink(Box::new(recorder.clone()))
        .with_clock(fixed)
        .with_config(config);
    emitter.info("x");
    let event = recorder.last();
    assert_eq!(event.date.as_deref(), Some("07/03/2024"));
    assert_eq!(event.time, None);
}

#[test]
fn serializable_structs_log_as_objects() {
    #[derive(serde::Serialize)]
    struct Disk {
        mount: &'static str,
        used: u8,
    }

    let (mut emitter, recorder) = emitter();
    emitter.set_display_arg_types(true);
    emitter.log_serialize(&Disk { mount: "/", used: 91 }, Level::Warn);
    let event = recorder.last();
    assert_eq!(event.values, vec![json!({"mount": "/", "used": 91})]);
    assert_eq!(event.arg_types.as_deref(), Some("object"));

    emitter.log_serialize(&[1, 2][..], Level::Info);
    assert_eq!(recorder.last().values, vec![json!(1), json!(2)]);
}

#[test]
fn unserializable_values_write_nothing() {
    let (emitter, recorder) = emitter();
    let mut map = std::collections::BTreeMap::new();
    map.insert(vec![1u8], 1u8);
    emitter.log_serialize(&map, Level::Error);
    assert!(recorder.events().is_empty());
}
