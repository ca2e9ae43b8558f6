//! Error types shared by every Carelens crate.
//!
//! All fallible operations in the workspace return `CarelensResult<T>`.
//! No failure is fatal to a hosting application: every variant degrades to a
//! user-visible message and an unchanged or reset local state.

use thiserror::Error;

/// The unified error type for the Carelens core.
#[derive(Debug, Error)]
pub enum CarelensError {
    /// A required input field was left empty before scoring or saving could
    /// proceed. Carries every missing field so the message names them all.
    #[error("validation failed: missing required fields: {}", missing.join(", "))]
    Validation { missing: Vec<String> },

    /// A lab-test id that does not exist in the assessment catalog.
    #[error("unknown lab test id '{test_id}'")]
    UnknownTest { test_id: String },

    /// The assessment rules document is missing or malformed.
    #[error("configuration error: {reason}")]
    Config { reason: String },

    /// Persisted metrics exist but could not be read or parsed.
    ///
    /// Callers are expected to skip the update and keep whatever they were
    /// previously displaying.
    #[error("stored metrics could not be read: {reason}")]
    StoreRead { reason: String },

    /// The metrics record could not be written to its storage file.
    #[error("stored metrics could not be written: {reason}")]
    StoreWrite { reason: String },

    /// The remote prediction endpoint returned a non-success status or a
    /// body that does not match the expected shape.
    #[error("health prediction request failed: {reason}")]
    Prediction { reason: String },

    /// A report render could not be produced or written out.
    #[error("report export failed: {reason}")]
    Export { reason: String },
}

/// Convenience alias used throughout the Carelens crates.
pub type CarelensResult<T> = Result<T, CarelensError>;
