//! Console Logging
//!
//! `log` backend that writes `[TARGET] message` lines to the browser console.

use log::{Level, LevelFilter, Log, Metadata, Record};

struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_line(record.target(), &record.args().to_string());
        let line = wasm_bindgen::JsValue::from_str(&line);
        match record.level() {
            Level::Error => web_sys::console::error_1(&line),
            Level::Warn => web_sys::console::warn_1(&line),
            Level::Info => web_sys::console::log_1(&line),
            Level::Debug | Level::Trace => web_sys::console::debug_1(&line),
        }
    }

    fn flush(&self) {}
}

/// Last path segment of the target, upper-cased: `photo_swipe_ui::app` -> `[APP]`
fn format_line(target: &str, message: &str) -> String {
    let tag = target.rsplit("::").next().unwrap_or(target);
    format!("[{}] {}", tag.to_uppercase(), message)
}

/// Install the console logger. Safe to call more than once.
pub fn init(level: LevelFilter) {
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_uses_last_path_segment() {
        assert_eq!(format_line("photo_swipe_ui::app", "mounted"), "[APP] mounted");
        assert_eq!(format_line("screen", "loaded 2"), "[SCREEN] loaded 2");
    }
}
