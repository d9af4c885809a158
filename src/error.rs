//! CLI error types and exit codes

use thiserror::Error;

/// Exit codes for the CLI
/// - 0: Success
/// - 1: General error
/// - 2: Authorization insufficient
/// - 3: Network error
/// - 4: Validation error
/// - 5: Server error
pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("Network error: {0}")]
    Transport(String),

    #[error("Connection failed: {0}\n\nTroubleshooting:\n  - Check your internet connection\n  - Verify the API endpoint is correct\n  - Try again in a few moments")]
    ConnectionFailed(String),

    #[error("Received {status} {status_text} from the API")]
    Upstream { status: u16, status_text: String },

    #[error("Unexpected response shape: {0}")]
    Schema(String),

    #[error("Missing scopes: {}", missing.join(", "))]
    MissingScopes { missing: Vec<String> },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(String),
}

impl CliError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::MissingScopes { .. } => 2,
            CliError::Transport(_) | CliError::ConnectionFailed(_) => 3,
            CliError::Schema(_) => 4,
            CliError::Upstream { status, .. } => {
                if *status >= 500 {
                    5
                } else if *status == 401 || *status == 403 {
                    2
                } else {
                    4
                }
            }
            CliError::Config(_) | CliError::Io(_) => 1,
        }
    }

    /// Print the error to stderr with appropriate formatting
    pub fn print(&self) {
        let use_color = std::env::var("NO_COLOR").is_err();

        if use_color {
            eprintln!("\x1b[31mError:\x1b[0m {}", self);
        } else {
            eprintln!("Error: {}", self);
        }

        // Print suggested action if available
        if let Some(suggestion) = self.suggestion() {
            if use_color {
                eprintln!("\n\x1b[33mSuggestion:\x1b[0m {}", suggestion);
            } else {
                eprintln!("\nSuggestion: {}", suggestion);
            }
        }
    }

    /// Get a suggested action for this error
    fn suggestion(&self) -> Option<&'static str> {
        match self {
            CliError::MissingScopes { .. } => {
                Some("Re-issue the access token with the required scopes in the store control panel.")
            }
            CliError::ConnectionFailed(_) => Some("Check your network connection and try again."),
            CliError::Upstream { status, .. } if *status == 401 || *status == 403 => {
                Some("Verify the store hash and access token are correct.")
            }
            _ => None,
        }
    }
}

impl From<reqwest::Error> for CliError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() {
            CliError::ConnectionFailed(e.to_string())
        } else if e.is_timeout() {
            CliError::Transport("Request timed out".to_string())
        } else {
            CliError::Transport(e.to_string())
        }
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Schema(e.to_string())
    }
}

impl From<std::io::Error> for CliError {
    fn from(e: std::io::Error) -> Self {
        CliError::Io(e.to_string())
    }
}
