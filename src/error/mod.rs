//! Error handling module for trim-video

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for trim operations
#[derive(Error, Debug)]
pub enum TrimError {
    /// Source file missing or unreadable
    #[error("Source unavailable: {path}: {reason}")]
    SourceUnavailable { path: PathBuf, reason: String },

    /// Requested range is empty, inverted or outside the media
    #[error("Invalid range: {message}")]
    InvalidRange { message: String },

    /// Output location cannot be written
    #[error("Destination unavailable: {path}: {reason}")]
    DestinationUnavailable { path: PathBuf, reason: String },

    /// Source cannot be decoded or probed
    #[error("Decode error: {message}")]
    DecodeError { message: String },

    /// Export or encoding failed
    #[error("Encode error: {message}")]
    EncodeError { message: String },

    /// Malformed or missing command-line arguments
    #[error("Invalid argument {name}: {message}")]
    ArgumentParseError { name: String, message: String },

    /// Configuration file or override is invalid
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// Output duration does not match the requested range
    #[error(
        "Verification failed: expected {expected:.3}s, got {actual:.3}s (tolerance {tolerance_ms}ms)"
    )]
    VerificationFailed {
        expected: f64,
        actual: f64,
        tolerance_ms: u64,
    },
}

impl TrimError {
    pub(crate) fn invalid_range(message: impl Into<String>) -> Self {
        TrimError::InvalidRange {
            message: message.into(),
        }
    }

    pub(crate) fn decode(message: impl Into<String>) -> Self {
        TrimError::DecodeError {
            message: message.into(),
        }
    }

    pub(crate) fn encode(message: impl Into<String>) -> Self {
        TrimError::EncodeError {
            message: message.into(),
        }
    }

    pub(crate) fn config(message: impl Into<String>) -> Self {
        TrimError::Config {
            message: message.into(),
        }
    }
}

/// Result type alias for trim operations
pub type TrimResult<T> = std::result::Result<T, TrimError>;
