//! Application error types with rich context

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Application error types organized by layer/domain
#[derive(Debug, Error)]
pub enum Error {
    // ─────────────────────────────────────────────────────────────
    // Common/Infrastructure Errors
    // ─────────────────────────────────────────────────────────────
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    // ─────────────────────────────────────────────────────────────
    // Terminal/TUI Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Terminal error: {message}")]
    Terminal { message: String },

    // ─────────────────────────────────────────────────────────────
    // Authentication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("login failed: {message}")]
    Auth { message: String },

    #[error("not logged in: login must succeed before fetching")]
    NotAuthenticated,

    // ─────────────────────────────────────────────────────────────
    // Fetch Errors
    // ─────────────────────────────────────────────────────────────
    #[error("{operation} failed: expected HTTP status {expected}, got {actual}")]
    UnexpectedStatus {
        operation: String,
        expected: u16,
        actual: String,
    },

    #[error("{operation} failed: could not decode response: {message}")]
    Decode { operation: String, message: String },

    #[error("{operation} failed: {message}")]
    Transport { operation: String, message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ─────────────────────────────────────────────────────────────────
// Convenience Constructors
// ─────────────────────────────────────────────────────────────────

impl Error {
    pub fn terminal(message: impl Into<String>) -> Self {
        Self::Terminal {
            message: message.into(),
        }
    }

    pub fn auth(message: impl Into<String>) -> Self {
        Self::Auth {
            message: message.into(),
        }
    }

    pub fn unexpected_status(
        operation: impl Into<String>,
        expected: u16,
        actual: impl Into<String>,
    ) -> Self {
        Self::UnexpectedStatus {
            operation: operation.into(),
            expected,
            actual: actual.into(),
        }
    }

    pub fn decode(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            operation: operation.into(),
            message: message.into(),
        }
    }

    pub fn transport(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Transport {
            operation: operation.into(),
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Login was rejected or no credential is held
    pub fn is_auth(&self) -> bool {
        matches!(self, Error::Auth { .. } | Error::NotAuthenticated)
    }

    /// A read operation against the service failed
    pub fn is_fetch(&self) -> bool {
        matches!(
            self,
            Error::UnexpectedStatus { .. } | Error::Decode { .. } | Error::Transport { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Auth { .. } | Error::NotAuthenticated | Error::Config { .. }
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Log the error with context and pass it on
    fn context(self, context: impl Into<String>) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }
}
