//! Console Logger
//!
//! `log` backend for WASM frontends. Records are timestamped and routed to the
//! matching browser console method (`error`, `warn`, `info`, `debug`).
//! Outside the browser the same lines go to stderr, which keeps unit tests
//! and native builds quiet about `web_sys` calls.

use std::str::FromStr;

use chrono::{DateTime, Utc};
use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Level used when none is configured
pub const DEFAULT_LEVEL: LevelFilter = LevelFilter::Info;

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
        let line = format_record(Utc::now(), record.level(), record.target(), &record.args().to_string());
        write_line(record.level(), &line);
    }

    fn flush(&self) {}
}

/// Install the console logger as the global `log` backend.
///
/// Fails if another logger was installed first.
pub fn init(level: LevelFilter) -> Result<(), SetLoggerError> {
    log::set_logger(&LOGGER)?;
    log::set_max_level(level);
    Ok(())
}

/// Install with a level given as text, falling back to [`DEFAULT_LEVEL`].
pub fn init_with_level_str(level: Option<&str>) -> Result<(), SetLoggerError> {
    init(level.and_then(parse_level).unwrap_or(DEFAULT_LEVEL))
}

/// Parse `"info"`, `"DEBUG"`, `" warn "` and so on
pub fn parse_level(text: &str) -> Option<LevelFilter> {
    LevelFilter::from_str(text.trim()).ok()
}

/// Render one record as a single console line
pub fn format_record(at: DateTime<Utc>, level: Level, target: &str, message: &str) -> String {
    format!("{} {:<5} [{}] {}", at.format("%H:%M:%S%.3f"), level, target, message)
}

#[cfg(target_arch = "wasm32")]
fn write_line(level: Level, line: &str) {
    let value = wasm_bindgen::JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_line(_level: Level, line: &str) {
    eprintln!("{}", line);
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_parse_level() {
        assert_eq!(parse_level("debug"), Some(LevelFilter::Debug));
        assert_eq!(parse_level(" WARN "), Some(LevelFilter::Warn));
        assert_eq!(parse_level("off"), Some(LevelFilter::Off));
        assert_eq!(parse_level("loud"), None);
    }

    #[test]
    fn test_format_record() {
        let at = Utc.with_ymd_and_hms(2024, 3, 1, 14, 5, 9).unwrap();
        let line = format_record(at, Level::Warn, "jobtree_ui::bulk", "[REMOVE] 1 failed");
        assert_eq!(line, "14:05:09.000 WARN  [jobtree_ui::bulk] [REMOVE] 1 failed");
    }
}
