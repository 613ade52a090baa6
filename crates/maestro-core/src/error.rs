//! Application error types with rich context

use std::path::PathBuf;
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

    #[error("Failed to initialize terminal: {0}")]
    TerminalInit(String),

    // ─────────────────────────────────────────────────────────────
    // Remote API Errors
    // ─────────────────────────────────────────────────────────────
    /// Network, DNS, connection or timeout failure before a response arrived.
    #[error("Could not reach maestro API: {message}")]
    Transport { message: String },

    /// The API answered with a non-2xx status.
    #[error("maestro API returned HTTP {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// The API answered 2xx but the body was not the expected record.
    #[error("Malformed response from maestro API: {message}")]
    Parse { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Configuration file not found: {path}")]
    ConfigNotFound { path: PathBuf },

    // ─────────────────────────────────────────────────────────────
    // Navigation Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid route: {path}")]
    InvalidRoute { path: String },

    // ─────────────────────────────────────────────────────────────
    // Channel/Communication Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Channel send error: {message}")]
    ChannelSend { message: String },

    #[error("Channel closed unexpectedly")]
    ChannelClosed,
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

    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    pub fn http_status(status: u16, message: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            message: message.into(),
        }
    }

    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn invalid_route(path: impl Into<String>) -> Self {
        Self::InvalidRoute { path: path.into() }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Check if this is a failure of a single remote call.
    ///
    /// Remote failures are shown in the affected view and never end the
    /// session.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Error::Transport { .. } | Error::HttpStatus { .. } | Error::Parse { .. }
        )
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        self.is_remote()
            || matches!(
                self,
                Error::Json(_) | Error::InvalidRoute { .. } | Error::ChannelSend { .. }
            )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::TerminalInit(_) | Error::ChannelClosed)
    }

    /// Short label for the failure class, used in status lines.
    pub fn kind_label(&self) -> &'static str {
        match self {
            Error::Transport { .. } => "transport",
            Error::HttpStatus { .. } => "http",
            Error::Parse { .. } | Error::Json(_) => "parse",
            Error::Io(_) => "io",
            Error::Terminal { .. } | Error::TerminalInit(_) => "terminal",
            Error::Config { .. } | Error::ConfigNotFound { .. } => "config",
            Error::InvalidRoute { .. } => "route",
            Error::ChannelSend { .. } | Error::ChannelClosed => "channel",
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions (for use with color-eyre)
// ─────────────────────────────────────────────────────────────────

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", context.into(), err);
            err
        })
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| {
            let err = e.into();
            tracing::error!("{}: {:?}", f(), err);
            err
        })
    }
}
