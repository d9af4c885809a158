//! Output writers for CLI logging
//!
//! Terminal output goes to stderr so it never mixes with command results on
//! stdout; file output is timestamped and append-only.

use chrono::{DateTime, Local};
use std::collections::HashMap;
use std::fs::{File, OpenOptions};
use std::io::{self, Write};
use std::path::Path;
use std::sync::Mutex;

use super::level::LogLevel;
use super::redaction::Redactor;

/// A log entry to be output
#[derive(Debug, Clone)]
pub struct LogEntry {
    /// When the entry was created
    pub timestamp: DateTime<Local>,
    /// Verbosity level of this entry
    pub level: LogLevel,
    /// The log message content
    pub message: String,
    /// Additional context (e.g., operation name)
    pub context: Option<String>,
}

impl LogEntry {
    /// Create a new log entry at the current time
    pub fn new(level: LogLevel, message: impl Into<String>) -> Self {
        Self {
            timestamp: Local::now(),
            level,
            message: message.into(),
            context: None,
        }
    }

    /// Add context to the entry
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = Some(context.into());
        self
    }
}

/// HTTP log entry for request/response logging
#[derive(Debug, Clone)]
pub struct HttpLogEntry {
    /// Whether this is a request or response
    pub direction: HttpDirection,
    /// HTTP method (for requests)
    pub method: Option<String>,
    /// Request URL (for requests)
    pub url: Option<String>,
    /// HTTP status code (for responses)
    pub status: Option<u16>,
    /// Status text (for responses)
    pub status_text: Option<String>,
    /// Time taken in milliseconds (for responses)
    pub timing_ms: Option<u64>,
    /// Headers (for trace mode)
    pub headers: Option<HashMap<String, String>>,
}

/// HTTP log direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpDirection {
    /// Outgoing request
    Request,
    /// Incoming response
    Response,
}

impl HttpLogEntry {
    /// Create a new HTTP request entry
    pub fn request(method: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            direction: HttpDirection::Request,
            method: Some(method.into()),
            url: Some(url.into()),
            status: None,
            status_text: None,
            timing_ms: None,
            headers: None,
        }
    }

    /// Create a new HTTP response entry
    pub fn response(status: u16, status_text: impl Into<String>, timing_ms: u64) -> Self {
        Self {
            direction: HttpDirection::Response,
            method: None,
            url: None,
            status: Some(status),
            status_text: Some(status_text.into()),
            timing_ms: Some(timing_ms),
            headers: None,
        }
    }

    /// Add headers to the entry
    pub fn with_headers(mut self, headers: HashMap<String, String>) -> Self {
        self.headers = Some(headers);
        self
    }

    /// Format for debug output (method, URL, status, timing)
    pub fn format_debug(&self) -> String {
        match self.direction {
            HttpDirection::Request => {
                format!(
                    "→ {} {}",
                    self.method.as_deref().unwrap_or("?"),
                    self.url.as_deref().unwrap_or("?")
                )
            }
            HttpDirection::Response => {
                format!(
                    "← {} {} ({}ms)",
                    self.status.unwrap_or(0),
                    self.status_text.as_deref().unwrap_or("?"),
                    self.timing_ms.unwrap_or(0)
                )
            }
        }
    }

    /// Format for trace output (includes headers)
    pub fn format_trace(&self, redactor: &Redactor) -> String {
        let mut output = self.format_debug();

        if let Some(ref headers) = self.headers {
            output.push_str("\n  Headers:");
            let mut names: Vec<&String> = headers.keys().collect();
            names.sort();
            for name in names {
                let line = format!("{}: {}", name, headers[name]);
                output.push_str(&format!("\n    {}", redactor.redact(&line)));
            }
        }

        output
    }
}

/// Terminal output writer
pub struct TerminalWriter {
    /// Whether to use color output
    color: bool,
}

impl TerminalWriter {
    /// Create a new terminal writer
    pub fn new(color: bool) -> Self {
        Self { color }
    }

    /// Format a log entry for terminal output
    fn format_entry(&self, entry: &LogEntry) -> String {
        let context = entry.context.as_deref().unwrap_or("verbose");

        if self.color {
            format!("\x1b[36m[{}]\x1b[0m {}", context, entry.message)
        } else {
            format!("[{}] {}", context, entry.message)
        }
    }

    /// Format HTTP entry for debug level
    pub fn format_http_debug(&self, entry: &HttpLogEntry) -> String {
        let text = entry.format_debug();
        if self.color {
            match entry.direction {
                HttpDirection::Request => format!("\x1b[33m{}\x1b[0m", text),
                HttpDirection::Response => {
                    let status = entry.status.unwrap_or(0);
                    if (200..300).contains(&status) {
                        format!("\x1b[32m{}\x1b[0m", text)
                    } else if status >= 400 {
                        format!("\x1b[31m{}\x1b[0m", text)
                    } else {
                        format!("\x1b[33m{}\x1b[0m", text)
                    }
                }
            }
        } else {
            text
        }
    }

    /// Format HTTP entry for trace level
    pub fn format_http_trace(&self, entry: &HttpLogEntry, redactor: &Redactor) -> String {
        let text = entry.format_trace(redactor);
        if self.color {
            match entry.direction {
                HttpDirection::Request => format!("\x1b[33m{}\x1b[0m", text),
                HttpDirection::Response => format!("\x1b[32m{}\x1b[0m", text),
            }
        } else {
            text
        }
    }

    /// Format trace warning message
    pub fn format_trace_warning(&self) -> String {
        if self.color {
            "\x1b[33m⚠️  TRACE MODE: Output may contain sensitive information\x1b[0m".to_string()
        } else {
            "WARNING: TRACE MODE - Output may contain sensitive information".to_string()
        }
    }

    /// Write a log entry to stderr
    pub fn write(&self, entry: &LogEntry) -> io::Result<()> {
        eprintln!("{}", self.format_entry(entry));
        Ok(())
    }
}

/// File output writer with append mode
pub struct FileWriter {
    file: Mutex<File>,
}

impl FileWriter {
    /// Create a new file writer, creating or appending to the file
    pub fn new(path: &Path) -> io::Result<Self> {
        let file = OpenOptions::new().create(true).append(true).open(path)?;

        Ok(Self {
            file: Mutex::new(file),
        })
    }

    /// Format a log entry for file output (with timestamp)
    fn format_entry(&self, entry: &LogEntry) -> String {
        let timestamp = entry.timestamp.format("%Y-%m-%dT%H:%M:%S");
        let context = entry
            .context
            .as_deref()
            .map(|c| format!(" [{}]", c))
            .unwrap_or_default();

        format!(
            "[{}] [{}]{} {}",
            timestamp, entry.level, context, entry.message
        )
    }

    /// Write a log entry to the file
    pub fn write(&self, entry: &LogEntry) -> io::Result<()> {
        let formatted = self.format_entry(entry);

        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("Failed to lock file"))?;

        writeln!(file, "{}", formatted)?;
        file.flush()
    }

    /// Write HTTP entry to file
    pub fn write_http(&self, entry: &HttpLogEntry, redactor: &Redactor) -> io::Result<()> {
        let timestamp = Local::now().format("%Y-%m-%dT%H:%M:%S");
        let formatted = entry.format_trace(redactor);

        let mut file = self
            .file
            .lock()
            .map_err(|_| io::Error::other("Failed to lock file"))?;

        writeln!(file, "[{}] [HTTP] {}", timestamp, formatted)?;
        file.flush()
    }
}
