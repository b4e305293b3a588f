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

    // ─────────────────────────────────────────────────────────────
    // View Composition Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Tab list is empty")]
    EmptyTabs,

    #[error("No tab is marked current")]
    NoCurrentTab,

    #[error("Unknown tab: {name}")]
    UnknownTab { name: String },

    // ─────────────────────────────────────────────────────────────
    // Environment Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid environment name: {name:?} (expected a lowercase DNS-label-style name)")]
    InvalidEnvironmentName { name: String },

    #[error("Duplicate environment in snapshot: {name}")]
    DuplicateEnvironment { name: String },

    // ─────────────────────────────────────────────────────────────
    // Snapshot Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Snapshot file not found: {path}")]
    SnapshotNotFound { path: PathBuf },

    #[error("Invalid snapshot: {message}")]
    SnapshotInvalid { message: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration Errors
    // ─────────────────────────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid configuration: {message}")]
    ConfigInvalid { message: String },

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

    pub fn unknown_tab(name: impl Into<String>) -> Self {
        Self::UnknownTab { name: name.into() }
    }

    pub fn invalid_environment_name(name: impl Into<String>) -> Self {
        Self::InvalidEnvironmentName { name: name.into() }
    }

    pub fn duplicate_environment(name: impl Into<String>) -> Self {
        Self::DuplicateEnvironment { name: name.into() }
    }

    pub fn snapshot_not_found(path: impl Into<PathBuf>) -> Self {
        Self::SnapshotNotFound { path: path.into() }
    }

    pub fn snapshot_invalid(message: impl Into<String>) -> Self {
        Self::SnapshotInvalid {
            message: message.into(),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn config_invalid(message: impl Into<String>) -> Self {
        Self::ConfigInvalid {
            message: message.into(),
        }
    }

    pub fn channel_send(message: impl Into<String>) -> Self {
        Self::ChannelSend {
            message: message.into(),
        }
    }

    /// Check if this is a recoverable error
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Error::SnapshotInvalid { .. }
                | Error::DuplicateEnvironment { .. }
                | Error::UnknownTab { .. }
                | Error::ChannelSend { .. }
        )
    }

    /// Check if this error should trigger application exit
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            Error::Terminal { .. } | Error::SnapshotNotFound { .. } | Error::ChannelClosed
        )
    }
}

// ─────────────────────────────────────────────────────────────────
// Error Context Extensions
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
