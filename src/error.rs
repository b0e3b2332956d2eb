//! Error types for the backnav simulator
//!
//! The navigation core never fails: malformed location state degrades to
//! absence. These errors belong to the CLI surface (arguments, session files).

use thiserror::Error;

/// Result type alias for simulator operations
pub type Result<T> = std::result::Result<T, NavError>;

/// Simulator error types
#[derive(Debug, Error)]
pub enum NavError {
    /// Invalid command arguments
    #[error("invalid arguments: {0}")]
    InvalidArguments(String),

    /// Invalid session name
    #[error("invalid session: {0}")]
    InvalidSession(String),

    /// No saved session with this name
    #[error("session not found: {0} (start one with `backnav open <PATH>`)")]
    SessionNotFound(String),

    /// Command execution failed
    #[error("command failed: {0}")]
    CommandFailed(String),

    /// IO error
    #[error("io error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl NavError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            NavError::CommandFailed(_) => 1,
            NavError::InvalidArguments(_) => 64,   // EX_USAGE
            NavError::InvalidSession(_) => 65,     // EX_DATAERR
            NavError::SessionNotFound(_) => 66,    // EX_NOINPUT
            NavError::IoError(_) => 74,            // EX_IOERR
            NavError::SerializationError(_) => 65, // EX_DATAERR
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
