//! Error types for the quick-share-core library.
//!
//! Every fallible operation in the crate returns [`AppError`]. The session
//! collapses the generation-related variants into a single user-facing
//! message; the detailed variant is only logged.

use thiserror::Error;

/// Errors that can occur within the quick-share-core library.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration-related errors (missing credential, invalid values).
    #[error("Configuration error: {0}")]
    Config(String),

    /// The user asked for something the current session cannot do.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The Gemini API call failed.
    #[error("Generation failed: {0}")]
    Generation(String),

    /// The model answered but produced no usable text.
    #[error("Gemini returned an empty response")]
    EmptyResponse,

    /// Writing to the system clipboard failed.
    #[error("Clipboard error: {0}")]
    Clipboard(String),

    /// UI-related errors (window creation, event loop).
    #[error("UI error: {0}")]
    Ui(String),

    /// Standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl AppError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a validation error with the given message.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Creates a generation error with the given message.
    pub fn generation(msg: impl Into<String>) -> Self {
        Self::Generation(msg.into())
    }

    /// Creates a clipboard error with the given message.
    pub fn clipboard(msg: impl Into<String>) -> Self {
        Self::Clipboard(msg.into())
    }

    /// Creates a UI error with the given message.
    pub fn ui(msg: impl Into<String>) -> Self {
        Self::Ui(msg.into())
    }

    /// Returns true for errors caused by missing or invalid configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Returns true for errors raised by the caption request itself.
    pub fn is_generation(&self) -> bool {
        matches!(self, Self::Generation(_) | Self::EmptyResponse)
    }
}

/// A convenient alias for Result with [`AppError`].
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classifies_error_kinds() {
        assert!(AppError::config("no key").is_configuration());
        assert!(!AppError::config("no key").is_generation());
        assert!(AppError::generation("timeout").is_generation());
        assert!(AppError::EmptyResponse.is_generation());
        assert!(!AppError::validation("empty").is_generation());
    }

    #[test]
    fn display_includes_context() {
        let err = AppError::generation("connection reset");
        assert_eq!(err.to_string(), "Generation failed: connection reset");
    }
}
