//! Logging configuration from CLI flags and environment

use std::path::PathBuf;

use super::level::LogLevel;

/// Configuration for the CLI logger
#[derive(Debug, Clone, Default)]
pub struct LogConfig {
    /// Verbosity level
    pub level: LogLevel,
    /// Suppress all verbose/debug/trace output regardless of level
    pub quiet: bool,
    /// Optional file to append log entries to
    pub log_file: Option<PathBuf>,
    /// Whether to use ANSI color in terminal output
    pub color: bool,
}

impl LogConfig {
    /// Build logging configuration from CLI flags and environment variables
    ///
    /// Environment variables (any non-empty value enables the level):
    /// - `BIGCOMMERCE_VERBOSE`
    /// - `BIGCOMMERCE_DEBUG`
    /// - `BIGCOMMERCE_TRACE`
    ///
    /// CLI flags and environment are combined; the highest level wins.
    /// Color is enabled unless `NO_COLOR` is set.
    pub fn from_args_and_env(
        verbose: bool,
        debug: bool,
        trace: bool,
        quiet: bool,
        log_file: Option<PathBuf>,
    ) -> Self {
        let verbose = verbose || env_flag("BIGCOMMERCE_VERBOSE");
        let debug = debug || env_flag("BIGCOMMERCE_DEBUG");
        let trace = trace || env_flag("BIGCOMMERCE_TRACE");

        Self {
            level: LogLevel::from_flags(verbose, debug, trace),
            quiet,
            log_file,
            color: std::env::var("NO_COLOR").is_err(),
        }
    }

    /// Check if verbose output is enabled (quiet overrides)
    pub fn is_verbose(&self) -> bool {
        !self.quiet && self.level.is_verbose()
    }

    /// Check if debug output is enabled (quiet overrides)
    pub fn is_debug(&self) -> bool {
        !self.quiet && self.level.is_debug()
    }

    /// Check if trace output is enabled (quiet overrides)
    pub fn is_trace(&self) -> bool {
        !self.quiet && self.level.is_trace()
    }
}

fn env_flag(name: &str) -> bool {
    std::env::var(name).map(|v| !v.is_empty()).unwrap_or(false)
}
