//! Error types for the tamiz screener.
//!
//! Per-ticker, per-source failures are contained inside the evaluators and
//! never surface here; [`ScreenError`] covers the failures that end a
//! screening run (an unreachable universe source, an invalid request, or
//! cancellation).

use thiserror::Error;

/// The main error type for screening operations.
#[derive(Debug, Error)]
pub enum ScreenError {
    /// The screening universe could not be retrieved. This is the one
    /// fatal data path: without a universe there is nothing to rank.
    #[error("Universe fetch failed: {0}")]
    Universe(String),

    /// A caller-supplied parameter was invalid.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// The run was cancelled before completion.
    #[error("Screening run cancelled")]
    Cancelled,

    /// Generic error for other cases.
    #[error("Error: {0}")]
    Other(String),
}

impl From<String> for ScreenError {
    fn from(s: String) -> Self {
        Self::Other(s)
    }
}

impl From<&str> for ScreenError {
    fn from(s: &str) -> Self {
        Self::Other(s.to_string())
    }
}

/// A specialized Result type for screening operations.
pub type Result<T> = std::result::Result<T, ScreenError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScreenError::Universe("HTTP 503".to_string());
        assert_eq!(err.to_string(), "Universe fetch failed: HTTP 503");

        let err = ScreenError::InvalidInput("top must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid input: top must be positive");
    }

    #[test]
    fn test_error_from_string() {
        let err: ScreenError = "boom".into();
        assert!(matches!(err, ScreenError::Other(_)));
    }

    #[test]
    fn test_result_type() {
        let ok: Result<i32> = Ok(42);
        assert!(ok.is_ok());

        let err: Result<i32> = Err(ScreenError::Cancelled);
        assert!(err.is_err());
    }
}
