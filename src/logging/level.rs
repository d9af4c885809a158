//! Log level definitions for CLI verbose/debug output
//!
//! Levels are cumulative: Debug includes Verbose, Trace includes Debug.

use std::fmt;

/// Verbosity level for CLI output
///
/// Levels are ordered: Normal < Verbose < Debug < Trace
/// Higher levels include all output from lower levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub enum LogLevel {
    /// Standard CLI output only (default)
    #[default]
    Normal = 0,
    /// Progress messages for each operation
    Verbose = 1,
    /// HTTP method, URL, status code, timing
    Debug = 2,
    /// Full request/response headers
    Trace = 3,
}

impl LogLevel {
    /// Create LogLevel from CLI flags
    ///
    /// Returns the highest level specified by flags.
    /// Order of precedence: trace > debug > verbose > normal
    pub fn from_flags(verbose: bool, debug: bool, trace: bool) -> Self {
        if trace {
            Self::Trace
        } else if debug {
            Self::Debug
        } else if verbose {
            Self::Verbose
        } else {
            Self::Normal
        }
    }

    /// Check if this level enables verbose output
    pub fn is_verbose(&self) -> bool {
        *self >= Self::Verbose
    }

    /// Check if this level enables debug output
    pub fn is_debug(&self) -> bool {
        *self >= Self::Debug
    }

    /// Check if this level enables trace output
    pub fn is_trace(&self) -> bool {
        *self >= Self::Trace
    }

    /// Get the display name for this level
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal => "NORMAL",
            Self::Verbose => "VERBOSE",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
