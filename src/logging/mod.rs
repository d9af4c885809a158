//! CLI Verbose/Debug Logging Module
//!
//! This module provides configurable logging for the BigCommerce CLI with:
//! - Multiple verbosity levels (Normal, Verbose, Debug, Trace)
//! - Environment variable support (BIGCOMMERCE_VERBOSE, BIGCOMMERCE_DEBUG,
//!   BIGCOMMERCE_TRACE)
//! - File output with timestamps
//! - Automatic access-token redaction

pub mod config;
pub mod level;
pub mod output;
pub mod redaction;

pub use config::LogConfig;
pub use level::LogLevel;
pub use output::{FileWriter, HttpDirection, HttpLogEntry, LogEntry, TerminalWriter};
pub use redaction::{Redactor, REDACTED};

use std::collections::HashMap;
use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Main logger for CLI verbose/debug output
///
/// Manages output to terminal and optionally to a file. Handles verbosity
/// levels, access-token redaction, and trace mode warnings.
pub struct Logger {
    config: LogConfig,
    terminal: TerminalWriter,
    file: Option<FileWriter>,
    redactor: Redactor,
    trace_warned: Arc<AtomicBool>,
}

impl Logger {
    /// Create a new logger with the given configuration
    pub fn new(config: LogConfig) -> io::Result<Self> {
        let terminal = TerminalWriter::new(config.color);
        let file = config
            .log_file
            .as_ref()
            .map(|path| FileWriter::new(path))
            .transpose()?;

        Ok(Self {
            config,
            terminal,
            file,
            redactor: Redactor::new(),
            trace_warned: Arc::new(AtomicBool::new(false)),
        })
    }

    /// Check if verbose output is enabled
    pub fn is_verbose(&self) -> bool {
        self.config.is_verbose()
    }

    /// Check if debug output is enabled
    pub fn is_debug(&self) -> bool {
        self.config.is_debug()
    }

    /// Check if trace output is enabled
    pub fn is_trace(&self) -> bool {
        self.config.is_trace()
    }

    /// Show trace warning if not already shown
    fn maybe_show_trace_warning(&self) {
        if self.config.is_trace() && !self.trace_warned.swap(true, Ordering::SeqCst) {
            eprintln!("{}", self.terminal.format_trace_warning());
        }
    }

    /// Log a verbose message
    pub fn verbose(&self, message: impl Into<String>) {
        if !self.config.is_verbose() {
            return;
        }

        let entry = LogEntry::new(LogLevel::Verbose, message).with_context("verbose");
        let _ = self.terminal.write(&entry);

        if let Some(ref file) = self.file {
            let _ = file.write(&entry);
        }
    }

    /// Log an HTTP request at debug level
    pub fn debug_request(&self, method: impl Into<String>, url: impl Into<String>) {
        if !self.config.is_debug() {
            return;
        }

        let entry = HttpLogEntry::request(method, url);
        eprintln!("{}", self.terminal.format_http_debug(&entry));

        if let Some(ref file) = self.file {
            let _ = file.write_http(&entry, &self.redactor);
        }
    }

    /// Log an HTTP response at debug level
    pub fn debug_response(&self, status: u16, status_text: impl Into<String>, timing_ms: u64) {
        if !self.config.is_debug() {
            return;
        }

        let entry = HttpLogEntry::response(status, status_text, timing_ms);
        eprintln!("{}", self.terminal.format_http_debug(&entry));

        if let Some(ref file) = self.file {
            let _ = file.write_http(&entry, &self.redactor);
        }
    }

    /// Log an HTTP request with headers at trace level
    pub fn trace_request(
        &self,
        method: impl Into<String>,
        url: impl Into<String>,
        headers: HashMap<String, String>,
    ) {
        if !self.config.is_trace() {
            return;
        }

        self.maybe_show_trace_warning();

        let entry = HttpLogEntry::request(method, url).with_headers(headers);
        eprintln!("{}", self.terminal.format_http_trace(&entry, &self.redactor));

        if let Some(ref file) = self.file {
            let _ = file.write_http(&entry, &self.redactor);
        }
    }

    /// Log an HTTP response with headers at trace level
    pub fn trace_response(
        &self,
        status: u16,
        status_text: impl Into<String>,
        timing_ms: u64,
        headers: HashMap<String, String>,
    ) {
        if !self.config.is_trace() {
            return;
        }

        self.maybe_show_trace_warning();

        let entry = HttpLogEntry::response(status, status_text, timing_ms).with_headers(headers);
        eprintln!("{}", self.terminal.format_http_trace(&entry, &self.redactor));

        if let Some(ref file) = self.file {
            let _ = file.write_http(&entry, &self.redactor);
        }
    }
}

/// Global logger instance for use throughout the CLI
static GLOBAL_LOGGER: std::sync::OnceLock<Logger> = std::sync::OnceLock::new();

/// Initialize the global logger
///
/// This should be called once at the start of the CLI with the parsed config.
/// Returns an error if the logger has already been initialized or if file
/// creation fails.
pub fn init_global_logger(config: LogConfig) -> io::Result<()> {
    let logger = Logger::new(config)?;
    GLOBAL_LOGGER
        .set(logger)
        .map_err(|_| io::Error::other("Global logger already initialized"))
}

/// Get a reference to the global logger
///
/// Returns None if the global logger hasn't been initialized.
pub fn global_logger() -> Option<&'static Logger> {
    GLOBAL_LOGGER.get()
}

/// Log a verbose message using the global logger
#[macro_export]
macro_rules! verbose {
    ($($arg:tt)*) => {
        if let Some(logger) = $crate::logging::global_logger() {
            logger.verbose(format!($($arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::NamedTempFile;

    fn config_at(level: LogLevel) -> LogConfig {
        LogConfig {
            level,
            quiet: false,
            log_file: None,
            color: false,
        }
    }

    #[test]
    fn test_logger_creation_without_file() {
        let logger = Logger::new(LogConfig::default()).unwrap();
        assert!(!logger.is_verbose());
        assert!(!logger.is_debug());
        assert!(!logger.is_trace());
    }

    #[test]
    fn test_logger_levels_are_cumulative() {
        let logger = Logger::new(config_at(LogLevel::Debug)).unwrap();
        assert!(logger.is_verbose());
        assert!(logger.is_debug());
        assert!(!logger.is_trace());
    }

    #[test]
    fn test_logger_quiet_mode() {
        let config = LogConfig {
            level: LogLevel::Trace,
            quiet: true,
            log_file: None,
            color: false,
        };

        let logger = Logger::new(config).unwrap();
        assert!(!logger.is_verbose());
        assert!(!logger.is_debug());
        assert!(!logger.is_trace());
    }

    #[test]
    fn test_trace_warning_shown_once() {
        let logger = Logger::new(config_at(LogLevel::Trace)).unwrap();

        logger.maybe_show_trace_warning();
        assert!(logger.trace_warned.load(Ordering::SeqCst));

        logger.maybe_show_trace_warning();
        assert!(logger.trace_warned.load(Ordering::SeqCst));
    }

    #[test]
    fn test_logger_writes_to_file() {
        let temp_file = NamedTempFile::new().unwrap();
        let config = LogConfig {
            level: LogLevel::Verbose,
            quiet: false,
            log_file: Some(temp_file.path().to_path_buf()),
            color: false,
        };

        let logger = Logger::new(config).unwrap();
        logger.verbose("Fetching page 2");

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(content.contains("Fetching page 2"));
        assert!(content.contains("[VERBOSE]"));
    }

    #[test]
    fn test_file_never_contains_token() {
        let temp_file = NamedTempFile::new().unwrap();
        let config = LogConfig {
            level: LogLevel::Trace,
            quiet: false,
            log_file: Some(temp_file.path().to_path_buf()),
            color: false,
        };

        let logger = Logger::new(config).unwrap();
        let mut headers = HashMap::new();
        headers.insert("x-auth-token".to_string(), "super-secret".to_string());
        logger.trace_request("GET", "https://api.bigcommerce.com", headers);

        let content = std::fs::read_to_string(temp_file.path()).unwrap();
        assert!(!content.contains("super-secret"));
        assert!(content.contains("[REDACTED]"));
    }

    #[test]
    fn test_disabled_levels_do_nothing() {
        let logger = Logger::new(config_at(LogLevel::Verbose)).unwrap();

        // Should not panic, just do nothing
        logger.debug_request("GET", "https://api.bigcommerce.com");
        logger.debug_response(200, "OK", 100);
        logger.trace_request("GET", "https://api.bigcommerce.com", HashMap::new());
        logger.trace_response(200, "OK", 100, HashMap::new());
    }
}
