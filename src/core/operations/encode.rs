//! Base64 encoding into caller-owned buffers.
//!
//! The encoder never writes past the end of the buffer it is given. When the
//! buffer is too short nothing is written and the exact required size comes
//! back in [`SealError::BufferTooSmall`], so the caller can resize and retry.

use base64::prelude::*;
use tracing::trace;

use crate::core::error::{SealError, SealResult};

/// Returns the length of the standard padded base64 encoding of `len` bytes.
///
/// # Errors
///
/// Returns [`SealError::EncodingFailed`] if the length overflows `usize`.
pub fn encoded_len(len: usize) -> SealResult<usize> {
    base64::encoded_len(len, true).ok_or(SealError::EncodingFailed)
}

/// Encodes `bytes` as standard padded base64 into the front of `out`.
///
/// Returns the number of bytes written, which may be less than `out.len()`.
/// The text is not NUL-terminated; the returned length bounds it.
///
/// # Errors
///
/// - [`SealError::BufferTooSmall`] if `out` is shorter than
///   [`encoded_len`]`(bytes.len())`. `out` is left untouched.
/// - [`SealError::EncodingFailed`] if the encoder itself fails.
pub fn encode_into(bytes: &[u8], out: &mut [u8]) -> SealResult<usize> {
    let required = encoded_len(bytes.len())?;

    if out.len() < required {
        trace!(
            capacity = out.len(),
            required,
            "output buffer too small for encoded ciphertext"
        );
        return Err(SealError::BufferTooSmall { required });
    }

    let written = BASE64_STANDARD
        .encode_slice(bytes, &mut out[..required])
        .map_err(|_| SealError::EncodingFailed)?;

    if written != required {
        return Err(SealError::EncodingFailed);
    }

    Ok(written)
}

/// Encodes `bytes` as standard padded base64 into a new string.
#[must_use]
pub fn encode_to_string(bytes: &[u8]) -> String {
    BASE64_STANDARD.encode(bytes)
}
