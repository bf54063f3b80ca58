//! Rolling Logger
//!
//! A `log` backend that keeps the most recent lines in a circular buffer
//! and forwards every line to a sink (the browser console in the app).

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Mutex, OnceLock};

use log::{Level, LevelFilter, Log, Metadata, Record, SetLoggerError};

/// Number of lines kept when no capacity is given
pub const DEFAULT_CAPACITY: usize = 500;

/// Receives each formatted line as it is logged
pub type Sink = fn(&LogLine);

/// One captured log record
#[derive(Debug, Clone, PartialEq)]
pub struct LogLine {
    pub timestamp: String,
    pub level: Level,
    pub target: String,
    pub message: String,
}

impl fmt::Display for LogLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {:<5} {}: {}", self.timestamp, self.level, self.target, self.message)
    }
}

/// Circular-buffer logger
pub struct RollingLogger {
    app_name: String,
    capacity: usize,
    level: LevelFilter,
    lines: Mutex<VecDeque<LogLine>>,
    sink: Option<Sink>,
}

impl RollingLogger {
    pub fn new(app_name: &str, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            app_name: app_name.to_string(),
            capacity,
            level: LevelFilter::Debug,
            lines: Mutex::new(VecDeque::with_capacity(capacity)),
            sink: None,
        }
    }

    pub fn with_level(mut self, level: LevelFilter) -> Self {
        self.level = level;
        self
    }

    pub fn with_sink(mut self, sink: Sink) -> Self {
        self.sink = Some(sink);
        self
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Append a line, evicting the oldest one when full
    pub fn push(&self, line: LogLine) {
        if let Some(sink) = self.sink {
            sink(&line);
        }
        let mut lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        if lines.len() == self.capacity {
            lines.pop_front();
        }
        lines.push_back(line);
    }

    /// Snapshot of the buffer, oldest first
    pub fn recent(&self) -> Vec<LogLine> {
        let lines = self.lines.lock().unwrap_or_else(|e| e.into_inner());
        lines.iter().cloned().collect()
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
        self.push(LogLine {
            timestamp: chrono::Local::now().format("%H:%M:%S%.3f").to_string(),
            level: record.level(),
            target: format!("{}::{}", self.app_name, record.target()),
            message: record.args().to_string(),
        });
    }

    fn flush(&self) {}
}

static LOGGER: OnceLock<RollingLogger> = OnceLock::new();

/// Install the global logger. Fails if a logger is already set.
pub fn init_logger(app_name: &str, sink: Sink) -> Result<(), SetLoggerError> {
    let logger = LOGGER.get_or_init(|| RollingLogger::new(app_name, DEFAULT_CAPACITY).with_sink(sink));
    log::set_logger(logger)?;
    log::set_max_level(logger.level());
    Ok(())
}

/// Lines captured by the global logger, oldest first
pub fn recent() -> Vec<LogLine> {
    LOGGER.get().map(RollingLogger::recent).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(message: &str) -> LogLine {
        LogLine {
            timestamp: "12:00:00.000".to_string(),
            level: Level::Info,
            target: "test".to_string(),
            message: message.to_string(),
        }
    }

    #[test]
    fn test_evicts_oldest_when_full() {
        let logger = RollingLogger::new("App", 3);
        for i in 0..5 {
            logger.push(line(&format!("line {}", i)));
        }
        let recent = logger.recent();
        assert_eq!(recent.len(), 3);
        assert_eq!(recent[0].message, "line 2");
        assert_eq!(recent[2].message, "line 4");
    }

    #[test]
    fn test_level_filter_drops_verbose_records() {
        let logger = RollingLogger::new("App", 10).with_level(LevelFilter::Warn);
        logger.log(&Record::builder().args(format_args!("noise")).level(Level::Info).target("app").build());
        logger.log(&Record::builder().args(format_args!("careful")).level(Level::Warn).target("app").build());

        let recent = logger.recent();
        assert_eq!(recent.len(), 1);
        assert_eq!(recent[0].message, "careful");
        assert_eq!(recent[0].target, "App::app");
    }

    #[test]
    fn test_display_format() {
        let text = line("hello").to_string();
        assert_eq!(text, "[12:00:00.000] INFO  test: hello");
    }

    #[test]
    fn test_zero_capacity_keeps_one_line() {
        let logger = RollingLogger::new("App", 0);
        logger.push(line("a"));
        logger.push(line("b"));
        assert_eq!(logger.recent(), vec![line("b")]);
    }
}
