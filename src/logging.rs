/// Structured logging for the water quality monitoring service.
///
/// Provides context-rich logging tagged with the subsystem that produced
/// the message, timestamps, and severity levels. Supports both console
/// output and file-based logging so the simulator can run unattended.

use chrono::Utc;
use std::fmt;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;

use crate::model::SnapshotError;
use crate::sync::SyncOutcome;

// ---------------------------------------------------------------------------
// Log Levels
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Debug,
    Info,
    Warning,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogLevel::Debug => write!(f, "DEBUG"),
            LogLevel::Info => write!(f, "INFO"),
            LogLevel::Warning => write!(f, "WARN"),
            LogLevel::Error => write!(f, "ERROR"),
        }
    }
}

impl LogLevel {
    /// Parses a level name from configuration. Unknown names default to
    /// `Info` rather than failing startup over a logging knob.
    pub fn from_config(name: &str) -> LogLevel {
        match name.trim().to_lowercase().as_str() {
            "debug" => LogLevel::Debug,
            "warn" | "warning" => LogLevel::Warning,
            "error" => LogLevel::Error,
            _ => LogLevel::Info,
        }
    }
}

// ---------------------------------------------------------------------------
// Subsystem tags
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subsystem {
    /// Historical snapshot fetch/parse (sheet CSV export).
    Sheet,
    /// Live reading push to the remote store.
    Sync,
    /// Trend/classification engine.
    Engine,
    /// Telemetry simulator binary.
    Simulator,
    /// Startup, configuration, shutdown.
    System,
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Subsystem::Sheet => write!(f, "SHEET"),
            Subsystem::Sync => write!(f, "SYNC"),
            Subsystem::Engine => write!(f, "ENGINE"),
            Subsystem::Simulator => write!(f, "SIM"),
            Subsystem::System => write!(f, "SYS"),
        }
    }
}

// ---------------------------------------------------------------------------
// Failure Classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureType {
    /// Expected failure - an empty or not-yet-populated sheet is normal
    /// for a fresh deployment.
    Expected,
    /// Unexpected failure - indicates endpoint misconfiguration or an
    /// upstream format change.
    Unexpected,
    /// Unknown - cannot determine if this is expected or not.
    Unknown,
}

impl fmt::Display for FailureType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureType::Expected => write!(f, "EXPECTED"),
            FailureType::Unexpected => write!(f, "UNEXPECTED"),
            FailureType::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

// ---------------------------------------------------------------------------
// Logger
// ---------------------------------------------------------------------------

/// Global logger instance
static LOGGER: Mutex<Option<Logger>> = Mutex::new(None);

pub struct Logger {
    /// Minimum log level to display
    min_level: LogLevel,
    /// Optional file path for logging
    log_file: Option<String>,
}

impl Logger {
    /// Initialize the global logger
    pub fn init(min_level: LogLevel, log_file: Option<String>) {
        let logger = Logger { min_level, log_file };
        *LOGGER.lock().unwrap() = Some(logger);
    }

    fn log(&self, level: LogLevel, subsystem: Subsystem, message: &str) {
        if level < self.min_level {
            return;
        }

        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC");
        let log_entry = format!("{} {} {}: {}", timestamp, level, subsystem, message);

        match level {
            LogLevel::Error | LogLevel::Warning => eprintln!("{}", log_entry),
            LogLevel::Info | LogLevel::Debug => println!("{}", log_entry),
        }

        if let Some(ref path) = self.log_file {
            if let Err(e) = Self::append_to_file(path, &log_entry) {
                eprintln!("Failed to write to log file {}: {}", path, e);
            }
        }
    }

    fn append_to_file(path: &str, entry: &str) -> std::io::Result<()> {
        let mut file = OpenOptions::new().create(true).append(true).open(path)?;
        writeln!(file, "{}", entry)?;
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Public Logging Functions
// ---------------------------------------------------------------------------

/// Initialize the global logger
pub fn init_logger(min_level: LogLevel, log_file: Option<&str>) {
    Logger::init(min_level, log_file.map(String::from));
}

/// Log a general informational message
pub fn info(subsystem: Subsystem, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Info, subsystem, message);
    }
}

/// Log a warning message
pub fn warn(subsystem: Subsystem, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Warning, subsystem, message);
    }
}

/// Log an error message
pub fn error(subsystem: Subsystem, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Error, subsystem, message);
    }
}

/// Log a debug message
pub fn debug(subsystem: Subsystem, message: &str) {
    if let Some(logger) = LOGGER.lock().unwrap().as_ref() {
        logger.log(LogLevel::Debug, subsystem, message);
    }
}

// ---------------------------------------------------------------------------
// Failure Classification Helpers
// ---------------------------------------------------------------------------

/// Classify a snapshot fetch/parse failure.
pub fn classify_sheet_failure(err: &SnapshotError) -> FailureType {
    match err {
        // An empty-body parse failure usually means the sheet has no rows
        // yet; the degraded path handles it.
        SnapshotError::Malformed(msg) if msg.contains("empty") => FailureType::Expected,
        SnapshotError::Malformed(_) => FailureType::Unexpected,
        // 4xx points at a wrong or revoked export URL.
        SnapshotError::Http(code) if *code >= 400 && *code < 500 => FailureType::Unexpected,
        SnapshotError::Http(_) => FailureType::Unknown,
        SnapshotError::Transport(_) => FailureType::Unknown,
    }
}

/// Log a snapshot failure with automatic classification. All snapshot
/// failures are recoverable (empty-history fallback), so even unexpected
/// ones log as warnings, not errors.
pub fn log_sheet_failure(operation: &str, err: &SnapshotError) {
    let failure_type = classify_sheet_failure(err);
    let message = format!("{} failed [{}]: {}", operation, failure_type, err);
    match failure_type {
        FailureType::Expected => debug(Subsystem::Sheet, &message),
        FailureType::Unexpected | FailureType::Unknown => warn(Subsystem::Sheet, &message),
    }
}

/// Log the outcome of a reading push. Failures are non-fatal by design:
/// readings are periodic and redundant, so a missed push only costs one
/// history row.
pub fn log_sync_outcome(subsystem: Subsystem, outcome: &SyncOutcome) {
    match outcome {
        SyncOutcome::Synced(status) => {
            info(subsystem, &format!("reading pushed (HTTP {})", status));
        }
        SyncOutcome::TimedOut => {
            warn(subsystem, "reading push timed out; continuing without sync");
        }
        SyncOutcome::Failed(msg) => {
            warn(subsystem, &format!("reading push failed: {}; continuing without sync", msg));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_ordering() {
        assert!(LogLevel::Debug < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Warning);
        assert!(LogLevel::Warning < LogLevel::Error);
    }

    #[test]
    fn test_log_level_from_config_defaults_to_info() {
        assert_eq!(LogLevel::from_config("debug"), LogLevel::Debug);
        assert_eq!(LogLevel::from_config("WARN"), LogLevel::Warning);
        assert_eq!(LogLevel::from_config("nonsense"), LogLevel::Info);
        assert_eq!(LogLevel::from_config(""), LogLevel::Info);
    }

    #[test]
    fn test_failure_classification() {
        let revoked_url = SnapshotError::Http(404);
        assert_eq!(classify_sheet_failure(&revoked_url), FailureType::Unexpected);

        let upstream_hiccup = SnapshotError::Http(503);
        assert_eq!(classify_sheet_failure(&upstream_hiccup), FailureType::Unknown);

        let fresh_sheet = SnapshotError::Malformed("empty document".to_string());
        assert_eq!(classify_sheet_failure(&fresh_sheet), FailureType::Expected);

        let format_change = SnapshotError::Malformed("no header row".to_string());
        assert_eq!(classify_sheet_failure(&format_change), FailureType::Unexpected);
    }
}
