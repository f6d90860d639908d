//! Browser rendering: devtools consoles style text through a `%c` directive and a CSS
//! declaration, and inspect the payload values natively when they're passed as separate args.

use super::{LogEvent, Sink, SinkKind};
use serde::Serialize;
use serde_json::Value;

/// Arguments for one `console.log` call, in order: template, style, then `args`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConsoleCall {
    /// Header text; its leading `%c` applies `style`.
    pub template: String,
    /// CSS declaration consumed by the `%c` directive.
    pub style: String,
    /// Payload values for native inspection, then a `"\n\n"` spacer.
    pub args: Vec<Value>,
}

/// Whatever actually receives the console call.
pub trait Console: Send + Sync {
    /// # Errors
    /// Serialization or I/O errors while forwarding the call.
    fn log(&self, call: &ConsoleCall) -> Result<(), crate::Error>;
}

/// The real devtools console under `wasm32` with the `web` feature; elsewhere each call
/// is forwarded as one JSON line on stdout for a devtools bridge to pick up.
#[derive(Debug, Clone, Copy, Default)]
pub struct DevtoolsConsole;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
impl Console for DevtoolsConsole {
    fn log(&self, call: &ConsoleCall) -> Result<(), crate::Error> {
        use wasm_bindgen::JsValue;

        let data = js_sys::Array::new();
        data.push(&JsValue::from_str(&call.template));
        data.push(&JsValue::from_str(&call.style));
        for arg in &call.args {
            let value = match arg {
                Value::String(s) => JsValue::from_str(s),
                other => js_sys::JSON::parse(&serde_json::to_string(other)?)
                    .map_err(|e| crate::Error::Format(format!("{e:?}")))?,
            };
            data.push(&value);
        }
        web_sys::console::log(&data);
        Ok(())
    }
}

#[cfg(not(all(target_arch = "wasm32", feature = "web")))]
impl Console for DevtoolsConsole {
    fn log(&self, call: &ConsoleCall) -> Result<(), crate::Error> {
        use std::io::Write;

        let line = serde_json::to_string(call)?;
        let mut out = std::io::stdout().lock();
        writeln!(out, "{line}")?;
        Ok(())
    }
}

/// CSS-styled sink for browser-like environments.
pub struct BrowserSink {
    console: Box<dyn Console>,
}

impl Default for BrowserSink {
    fn default() -> Self {
        Self::new()
    }
}

impl BrowserSink {
    #[must_use]
    pub fn new() -> Self {
        Self::with_console(DevtoolsConsole)
    }

    #[must_use]
    pub fn with_console(console: impl Console + 'static) -> Self {
        Self {
            console: Box::new(console),
        }
    }

    /// Builds the console call without sending it.
    #[must_use]
    pub fn render(event: &LogEvent) -> ConsoleCall {
        let template = format!(
            "%c{} {}({}){}\n\n",
            event.indicator,
            event.stamp(),
            event.level,
            event.types_suffix()
        );
        let style = format!("color:white;background-color:{};", event.color.css());
        let mut args = event.values.clone();
        args.push(Value::String("\n\n".to_string()));
        ConsoleCall {
            template,
            style,
            args,
        }
    }
}

impl Sink for BrowserSink {
    fn write(&self, event: &LogEvent) -> Result<(), crate::Error> {
        self.console.log(&Self::render(event))
    }

    fn kind(&self) -> SinkKind {
        SinkKind::Browser
    }
}
