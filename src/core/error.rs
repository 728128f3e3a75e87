//! Error types for sealing operations.
//!
//! Each variant corresponds to one stage of the seal pipeline, so callers can
//! branch on the recoverable cases (bad input, short buffer) separately from
//! internal faults. Messages are intentionally terse and never echo key or
//! secret material.

use thiserror::Error;

/// Errors that can occur while sealing a secret.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SealError {
    /// A required argument was empty.
    #[error("Invalid argument: empty input")]
    InvalidArgument,

    /// The public key text is not valid base64 or decodes to the wrong length.
    #[error("Invalid public key encoding")]
    InvalidKeyEncoding,

    /// The sealing primitive reported an error.
    /// Intentionally vague for security.
    #[error("Sealing failed")]
    SealingFailed,

    /// The output buffer cannot hold the encoded ciphertext.
    #[error("Output buffer too small: {required} bytes required")]
    BufferTooSmall {
        /// Exact number of bytes the encoded ciphertext needs.
        required: usize,
    },

    /// Base64 encoding of the ciphertext failed.
    #[error("Encoding failed")]
    EncodingFailed,

    /// The crypto subsystem could not be initialized.
    #[error("Crypto initialization failed")]
    InitFailed,

    /// A seal was attempted before [`init`](crate::init) succeeded.
    #[error("Crypto subsystem not initialized")]
    NotInitialized,

    /// Sealed text is not valid base64 or is shorter than the seal overhead.
    #[error("Invalid sealed ciphertext")]
    InvalidCiphertext,
}

impl SealError {
    /// Returns `true` when the caller can fix its input and retry.
    ///
    /// Internal faults return `false`: sealing is a pure function of its
    /// inputs, so retrying with the same input cannot succeed.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InvalidArgument
                | Self::InvalidKeyEncoding
                | Self::BufferTooSmall { .. }
                | Self::InvalidCiphertext
        )
    }
}

/// Result type alias for sealing operations.
pub type SealResult<T> = Result<T, SealError>;
