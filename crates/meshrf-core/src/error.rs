// ── Core error types ──
//
// User-facing errors from meshrf-core. Missing or malformed optional data
// (coordinates, radio parameters, facing) is never an error -- it degrades
// to absent values and default factors. The only failures surfaced to the
// caller are input-validation problems with the engine configuration.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }
}
