//! Error types for Satsboard.
//!
//! This module provides a unified error handling approach using `thiserror`.
//! The formatting engine is infallible by design and the terminal
//! boundary reports through `anyhow` in `main`; the clipboard is the one
//! fallible library surface.

use thiserror::Error;

/// Result type alias for Satsboard operations.
pub type Result<T> = std::result::Result<T, SatsboardError>;

/// Errors that can occur in Satsboard.
#[derive(Debug, Error)]
pub enum SatsboardError {
    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clipboard_errors_carry_their_context() {
        let err = SatsboardError::from(arboard::Error::ContentNotAvailable);
        assert!(err.to_string().starts_with("Clipboard error:"));
    }
}
