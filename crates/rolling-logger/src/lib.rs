//! Rolling Logger
//!
//! A `log` backend for browser frontends. Records go to the console and the
//! most recent lines are kept in a circular buffer.

use std::collections::VecDeque;
use std::sync::{Mutex, OnceLock};

use log::{LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Lines kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 200;

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Fixed-size ring of formatted log lines, oldest evicted first
#[derive(Debug)]
pub struct RollingBuffer {
    lines: VecDeque<String>,
    capacity: usize,
}

impl RollingBuffer {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            lines: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    pub fn push(&mut self, line: String) {
        if self.lines.len() == self.capacity {
            self.lines.pop_front();
        }
        self.lines.push_back(line);
    }

    /// Lines in insertion order
    pub fn lines(&self) -> Vec<String> {
        self.lines.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

pub struct RollingLogger {
    level: LevelFilter,
    buffer: Mutex<RollingBuffer>,
}

impl RollingLogger {
    pub fn new(level: LevelFilter, capacity: usize) -> Self {
        Self {
            level,
            buffer: Mutex::new(RollingBuffer::new(capacity)),
        }
    }

    pub fn recent(&self) -> Vec<String> {
        self.buffer
            .lock()
            .map(|buffer| buffer.lines())
            .unwrap_or_default()
    }

    /// The buffered history as one block, oldest line first
    pub fn report(&self) -> String {
        let lines = self.recent();
        let mut report = format!("--- last {} log lines ---", lines.len());
        for line in lines {
            report.push('\n');
            report.push_str(&line);
        }
        report
    }
}

impl Log for RollingLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= self.level
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }
        let line = format_record(record);
        write_console(record.level(), &line);
        if let Ok(mut buffer) = self.buffer.lock() {
            buffer.push(line);
        }
    }

    fn flush(&self) {}
}

/// `LEVEL message`, the form both the console and the ring use
pub fn format_record(record: &Record) -> String {
    format!("{:<5} {}", record.level(), record.args())
}

#[cfg(target_arch = "wasm32")]
fn write_console(level: log::Level, line: &str) {
    use log::Level;
    use wasm_bindgen::JsValue;

    let value = JsValue::from_str(line);
    match level {
        Level::Error => web_sys::console::error_1(&value),
        Level::Warn => web_sys::console::warn_1(&value),
        Level::Info => web_sys::console::info_1(&value),
        Level::Debug | Level::Trace => web_sys::console::debug_1(&value),
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn write_console(_level: log::Level, line: &str) {
    eprintln!("{}", line);
}

/// Install the global logger. Fails if a logger is already set.
pub fn init(level: LevelFilter, capacity: usize) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(level, capacity));
    log::set_logger(logger)?;
    log::set_max_level(level);
    Ok(())
}

/// History block of the global logger, `None` before `init`
pub fn recent_report() -> Option<String> {
    LOGGER.get().map(RollingLogger::report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use log::Level;

    #[test]
    fn test_buffer_evicts_oldest() {
        let mut buffer = RollingBuffer::new(3);
        for i in 0..5 {
            buffer.push(format!("line {}", i));
        }
        assert_eq!(buffer.len(), 3);
        assert_eq!(buffer.lines(), vec!["line 2", "line 3", "line 4"]);
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let mut buffer = RollingBuffer::new(0);
        buffer.push("a".to_string());
        buffer.push("b".to_string());
        assert_eq!(buffer.capacity(), 1);
        assert_eq!(buffer.lines(), vec!["b"]);
    }

    #[test]
    fn test_logger_filters_by_level() {
        let logger = RollingLogger::new(LevelFilter::Warn, 10);
        logger.log(
            &Record::builder()
                .level(Level::Info)
                .args(format_args!("ignored"))
                .build(),
        );
        logger.log(
            &Record::builder()
                .level(Level::Error)
                .args(format_args!("[BOARD] Error moving task"))
                .build(),
        );
        assert_eq!(logger.recent(), vec!["ERROR [BOARD] Error moving task"]);
    }

    #[test]
    fn test_report_lists_history_oldest_first() {
        let logger = RollingLogger::new(LevelFilter::Info, 2);
        for message in ["[APP] Page ready", "[BOARD] Loaded 3 tasks", "[THEME] Switched to dark"] {
            logger.log(&Record::builder().level(Level::Info).args(format_args!("{}", message)).build());
        }
        assert_eq!(
            logger.report(),
            "--- last 2 log lines ---\nINFO  [BOARD] Loaded 3 tasks\nINFO  [THEME] Switched to dark"
        );
    }

    #[test]
    fn test_empty_report() {
        let logger = RollingLogger::new(LevelFilter::Info, DEFAULT_CAPACITY);
        assert_eq!(logger.report(), "--- last 0 log lines ---");
    }
}
