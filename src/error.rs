//! # Error Types
//!
//! All fallible operations return [`Result<T, KdfError>`](KdfError).

use thiserror::Error;

/// The error type for all key derivation operations.
///
/// The first three variants are caller configuration errors. They are detected
/// before any MAC computation starts.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum KdfError {
    /// The secret was absent (empty) or the MAC refused it as a key.
    #[error("Invalid secret: {0}")]
    InvalidSecret(String),

    /// The KDF parameters are unusable.
    ///
    /// Raised for:
    /// - an iteration count of `0`
    /// - a missing salt when building without the `rand` feature
    #[error("Invalid parameters: {0}")]
    InvalidParameters(String),

    /// The requested output length is negative, unrepresentable, or needs
    /// more than `u32::MAX` blocks.
    #[error("Invalid length: {0}")]
    InvalidLength(String),

    /// The MAC rejected a key that was accepted when the engine was built.
    ///
    /// This signals a defect, not a recoverable condition. Retrying cannot
    /// succeed and no partial key is ever returned alongside it.
    #[error("Internal invariant violation: {0}")]
    InternalInvariantViolation(String),
}

impl KdfError {
    /// `true` for errors that indicate a defect rather than bad caller input.
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        matches!(self, Self::InternalInvariantViolation(_))
    }
}
