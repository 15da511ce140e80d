//! Keyproof error types.

use thiserror::Error;

/// Errors that can occur while loading or validating a license.
///
/// Expected validation failures (a blob that does not open, a payload
/// missing fields) are converted into [`crate::ValidationOutcome::Invalid`]
/// by the orchestrator and never escape `validate` as an `Err`. Only
/// [`LicenseError::KeyMaterial`] indicates a broken deployment and aborts
/// the call.
#[derive(Debug, Error)]
pub enum LicenseError {
    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Built-in verifying key material cannot be decoded (broken deployment).
    #[error("Key material error: {0}")]
    KeyMaterial(String),

    /// The license blob is malformed, carries an unknown key epoch, or
    /// fails the integrity check.
    #[error("License blob rejected: {0}")]
    Decrypt(String),

    /// The decoded payload is missing required fields or carries values
    /// that do not parse.
    #[error("License payload malformed: {0}")]
    Malformed(String),

    /// A license source could not produce a blob/identity pair.
    #[error("License source '{name}' unavailable: {detail}")]
    SourceUnavailable {
        /// Name of the source that failed.
        name: String,
        /// What went wrong while loading from it.
        detail: String,
    },
}
