//! Error types for PixelBuddy operations.
//!
//! This module defines [`PixelBuddyError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Scoring, parsing and comparing never fail; missing data degrades to
//!   conservative defaults instead of an error
//! - Use `PixelBuddyError` for failures the CLI has to report distinctly
//! - Use `anyhow::Error` (via `PixelBuddyError::Other`) at the HTTP boundary

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for PixelBuddy operations.
#[derive(Debug, Error)]
pub enum PixelBuddyError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// The store search request failed.
    #[error("Steam search for '{query}' failed: {message}")]
    SearchFailed { query: String, message: String },

    /// A result number outside the listed results was chosen.
    #[error("Invalid selection {choice}: expected a number between 1 and {available}")]
    InvalidSelection { choice: usize, available: usize },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for PixelBuddy operations.
pub type Result<T> = std::result::Result<T, PixelBuddyError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = PixelBuddyError::ConfigNotFound {
            path: PathBuf::from("/foo/config.yml"),
        };
        assert!(err.to_string().contains("/foo/config.yml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = PixelBuddyError::ConfigParseError {
            path: PathBuf::from("/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn search_failed_displays_query_and_message() {
        let err = PixelBuddyError::SearchFailed {
            query: "portal 2".into(),
            message: "HTTP 503".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("portal 2"));
        assert!(msg.contains("HTTP 503"));
    }

    #[test]
    fn invalid_selection_displays_range() {
        let err = PixelBuddyError::InvalidSelection {
            choice: 7,
            available: 3,
        };
        let msg = err.to_string();
        assert!(msg.contains('7'));
        assert!(msg.contains("between 1 and 3"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: PixelBuddyError = io_err.into();
        assert!(matches!(err, PixelBuddyError::Io(_)));
    }

    #[test]
    fn anyhow_error_is_transparent() {
        let err: PixelBuddyError = anyhow::anyhow!("connection reset").into();
        assert_eq!(err.to_string(), "connection reset");
    }
}
