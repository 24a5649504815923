//! Logging setup.
//!
//! `tracing` events are formatted by `tracing-subscriber` and handed to the
//! browser console, one console call per event, at the matching severity.

use std::io;
use std::sync::Once;

use tracing::{Level, Metadata};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;
use wasm_bindgen::JsValue;

use crate::config::{LOG_QUERY_PARAM, PRODUCT_NAME, VERSION, default_log_filter};

/// Buffers one formatted event and flushes it to the console on drop.
pub struct ConsoleWriter {
    level: Level,
    buf: Vec<u8>,
}

impl io::Write for ConsoleWriter {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buf.extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl Drop for ConsoleWriter {
    fn drop(&mut self) {
        if self.buf.is_empty() {
            return;
        }
        let line = String::from_utf8_lossy(&self.buf);
        let msg = JsValue::from_str(line.trim_end());
        match self.level {
            Level::ERROR => web_sys::console::error_1(&msg),
            Level::WARN => web_sys::console::warn_1(&msg),
            Level::INFO => web_sys::console::info_1(&msg),
            _ => web_sys::console::debug_1(&msg),
        }
    }
}

#[derive(Clone, Copy, Debug, Default)]
pub struct MakeConsoleWriter;

impl<'a> MakeWriter<'a> for MakeConsoleWriter {
    type Writer = ConsoleWriter;

    fn make_writer(&'a self) -> Self::Writer {
        ConsoleWriter {
            level: Level::INFO,
            buf: Vec::new(),
        }
    }

    fn make_writer_for(&'a self, meta: &Metadata<'_>) -> Self::Writer {
        ConsoleWriter {
            level: *meta.level(),
            buf: Vec::new(),
        }
    }
}

/// Decoded `?log=` directive from a `location.search` string, if present
/// and non-empty.
pub fn log_directive(search: &str) -> Option<String> {
    web_sys::UrlSearchParams::new_with_str(search)
        .ok()?
        .get(LOG_QUERY_PARAM)
        .filter(|v| !v.is_empty())
}

fn log_override() -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    log_directive(&search)
}

/// Install the console subscriber. Safe to call more than once.
pub fn init() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let directive = log_override().unwrap_or_else(|| default_log_filter().to_string());
        let filter = EnvFilter::try_new(&directive)
            .unwrap_or_else(|_| EnvFilter::new(default_log_filter()));

        let installed = tracing_subscriber::fmt()
            .with_writer(MakeConsoleWriter)
            .with_env_filter(filter)
            .with_ansi(false)
            .without_time()
            .try_init();

        match installed {
            Ok(()) => tracing::debug!(%directive, "console logging ready"),
            Err(err) => web_sys::console::warn_1(&JsValue::from_str(&format!(
                "logging already initialised: {err}"
            ))),
        }
    });
}

/// Styled greeting for anyone who opens the dev tools.
pub fn banner() {
    web_sys::console::log_2(
        &JsValue::from_str(&format!(
            "%c{PRODUCT_NAME} {VERSION} | AI-powered agriculture"
        )),
        &JsValue::from_str("color: #16a34a; font-weight: bold; font-size: 14px;"),
    );
    web_sys::console::log_2(
        &JsValue::from_str(
            "%cBuilt with Rust + Leptos. Add ?log=debug to see what the page is doing.",
        ),
        &JsValue::from_str("color: #888;"),
    );
}
