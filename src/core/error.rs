//! Error type system for Fun Bun
//!
//! This module provides the crate-wide error type with:
//! - Error classification for logging
//! - Retryability hints
//! - Error context and chaining support

/// Main error type for the Fun Bun application
#[derive(Debug, thiserror::Error)]
pub enum FunBunError {
    // Catalog-related errors
    #[error("Network error: {0}")]
    NetworkError(#[from] reqwest::Error),

    #[error("Unexpected HTTP status {status} from {url}")]
    HttpStatus { status: u16, url: String },

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    // Front-end errors
    #[error("Prompt error: {0}")]
    PromptError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl FunBunError {
    /// Get the error type name used in structured logs
    pub fn error_type(&self) -> &'static str {
        match self {
            FunBunError::NetworkError(_) => "NetworkError",
            FunBunError::HttpStatus { .. } => "HttpStatus",
            FunBunError::DeserializationError(_) => "DeserializationError",
            FunBunError::PromptError(_) => "PromptError",
            FunBunError::IoError(_) => "IoError",
        }
    }

    /// Check if this error is transient.
    ///
    /// The catalog fetch never retries on its own; this only feeds the log line
    /// so an operator can tell a flaky network from a broken endpoint.
    pub fn is_retryable(&self) -> bool {
        match self {
            FunBunError::NetworkError(e) => e.is_timeout() || e.is_connect(),
            FunBunError::HttpStatus { status, .. } => *status >= 500 || *status == 429,
            _ => false,
        }
    }
}

/// Result type alias for operations that can fail with FunBunError
pub type Result<T> = std::result::Result<T, FunBunError>;

/// Context extension trait for adding context to errors
///
/// The caller names the variant, e.g. `FunBunError::PromptError`, so a terminal
/// failure and a decode failure keep their own classification.
pub trait ErrorContext<T> {
    /// Add context to an error
    fn context(self, kind: fn(String) -> FunBunError, context: impl Into<String>) -> Result<T>;

    /// Add context to an error using a closure
    fn with_context<F>(self, kind: fn(String) -> FunBunError, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: std::fmt::Display,
{
    fn context(self, kind: fn(String) -> FunBunError, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| kind(format!("{}: {}", context.into(), e)))
    }

    fn with_context<F>(self, kind: fn(String) -> FunBunError, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| kind(format!("{}: {}", f(), e)))
    }
}
