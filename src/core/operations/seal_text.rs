//! Top-level seal pipeline: base64 key text + plaintext -> base64 sealed text.
//!
//! Stages run strictly in order and the first failure is returned unchanged:
//!
//! 1. initialization check ([`SealError::NotInitialized`])
//! 2. emptiness check ([`SealError::InvalidArgument`])
//! 3. key decoding ([`SealError::InvalidKeyEncoding`])
//! 4. sealing ([`SealError::SealingFailed`])
//! 5. encoding ([`SealError::BufferTooSmall`], [`SealError::EncodingFailed`])

use tracing::debug;

use crate::core::error::{SealError, SealResult};
use crate::core::init::ensure_initialized;
use crate::core::operations::encode::encoded_len;
use crate::core::operations::seal::sealed_len;
use crate::core::types::{SealPublicKey, SealedSecret};

fn seal_checked(public_key_b64: &str, plaintext: &[u8]) -> SealResult<SealedSecret> {
    ensure_initialized()?;

    if public_key_b64.is_empty() || plaintext.is_empty() {
        return Err(SealError::InvalidArgument);
    }

    let recipient = SealPublicKey::try_from(public_key_b64)?;
    let sealed = SealedSecret::try_seal(&recipient, plaintext)?;
    debug!(
        plaintext_len = plaintext.len(),
        sealed_len = sealed.len(),
        "sealed secret"
    );
    Ok(sealed)
}

/// Seals `plaintext` to the base64 public key and returns the base64 text.
///
/// # Example
///
/// ```rust
/// secret_seal::init().expect("entropy available");
///
/// let sealed = secret_seal::seal_base64(
///     "Zm9vYmFyZm9vYmFyZm9vYmFyZm9vYmFyZm9vYmFyMDA=",
///     b"hello",
/// )
/// .expect("seal should succeed");
/// assert_eq!(sealed.len(), 72);
/// ```
///
/// # Errors
///
/// See the module documentation for the stage order.
pub fn seal_base64(public_key_b64: &str, plaintext: &[u8]) -> SealResult<String> {
    seal_checked(public_key_b64, plaintext).map(|sealed| sealed.to_string())
}

/// Returns the exact text length [`seal_into`] needs for a plaintext of
/// `plaintext_len` bytes.
///
/// # Errors
///
/// Returns [`SealError::EncodingFailed`] on length overflow.
pub fn sealed_text_len(plaintext_len: usize) -> SealResult<usize> {
    let sealed = sealed_len(plaintext_len).ok_or(SealError::EncodingFailed)?;
    encoded_len(sealed)
}

/// Seals `plaintext` and writes the base64 text into `out`.
///
/// Returns the number of bytes written. When `out` is too short, nothing is
/// written and [`SealError::BufferTooSmall`] carries the required length;
/// [`sealed_text_len`] gives the same number up front.
///
/// # Errors
///
/// See the module documentation for the stage order.
pub fn seal_into(public_key_b64: &str, plaintext: &[u8], out: &mut [u8]) -> SealResult<usize> {
    let sealed = seal_checked(public_key_b64, plaintext)?;
    let written = sealed.encode_into(out)?;
    debug!(written, capacity = out.len(), "encoded sealed secret");
    Ok(written)
}
