//! `SealedSecret` - A secret sealed to a recipient's public key.
//!
//! Format: `base64(ephemeral_pk || tag || ciphertext)`, standard alphabet with
//! padding, exactly what libsodium's `crypto_box_seal` followed by
//! `sodium_bin2base64(..., sodium_base64_VARIANT_ORIGINAL)` produces.

use core::fmt::{self, Debug, Display};

use base64::prelude::*;

use crate::core::error::{SealError, SealResult};
use crate::core::init::ensure_initialized;
use crate::core::operations::encode::{encode_into, encode_to_string, encoded_len};
use crate::core::operations::seal::{seal_box, EPHEMERAL_PK_SIZE, SEAL_OVERHEAD};
use crate::core::types::SealPublicKey;

/// An anonymous sealed box.
///
/// Only the holder of the recipient's private key can open it. The recipient
/// cannot tell who sealed it.
///
/// # Example
///
/// ```rust
/// use secret_seal::{SealPublicKey, SealedSecret, SEAL_OVERHEAD};
///
/// secret_seal::init().expect("entropy available");
/// let key = SealPublicKey::from([9u8; 32]);
/// let sealed = SealedSecret::try_seal(&key, b"hello").expect("seal should succeed");
/// assert_eq!(sealed.len(), 5 + SEAL_OVERHEAD);
///
/// // Text form for transport
/// let text = sealed.to_string();
/// let parsed = SealedSecret::try_from(text.as_str()).expect("parse should succeed");
/// assert_eq!(sealed, parsed);
/// ```
#[derive(Clone)]
pub struct SealedSecret {
    /// `ephemeral_pk || tag || ciphertext`
    bytes: Vec<u8>,
}

impl SealedSecret {
    /// Seals `plaintext` to `recipient`.
    ///
    /// Unlike [`seal_base64`](crate::seal_base64) this accepts an empty
    /// plaintext.
    ///
    /// # Errors
    ///
    /// - [`SealError::NotInitialized`] if [`init`](crate::init) has not succeeded
    /// - [`SealError::SealingFailed`] if the primitive fails
    pub fn try_seal(recipient: &SealPublicKey, plaintext: &[u8]) -> SealResult<Self> {
        ensure_initialized()?;
        seal_box(plaintext, recipient.as_bytes()).map(|bytes| Self { bytes })
    }

    /// Returns the ephemeral public key bytes.
    #[must_use]
    pub fn ephemeral_pk(&self) -> &[u8] {
        &self.bytes[..EPHEMERAL_PK_SIZE]
    }

    /// Returns the raw sealed bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Consumes the `SealedSecret` and returns the raw sealed bytes.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }

    /// Returns the sealed length in bytes (plaintext length + [`SEAL_OVERHEAD`]).
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always `false`: a sealed box carries at least [`SEAL_OVERHEAD`] bytes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the length of the plaintext that was sealed.
    #[must_use]
    pub fn plaintext_len(&self) -> usize {
        self.bytes.len() - SEAL_OVERHEAD
    }

    /// Returns the length of the base64 text form.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::EncodingFailed`] on length overflow.
    pub fn encoded_len(&self) -> SealResult<usize> {
        encoded_len(self.bytes.len())
    }

    /// Writes the base64 text form into `out` and returns its length.
    ///
    /// # Errors
    ///
    /// Returns [`SealError::BufferTooSmall`] with the required length if `out`
    /// is too short; `out` is not modified in that case.
    pub fn encode_into(&self, out: &mut [u8]) -> SealResult<usize> {
        encode_into(&self.bytes, out)
    }
}

impl AsRef<[u8]> for SealedSecret {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Display for SealedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_to_string(&self.bytes))
    }
}

impl Debug for SealedSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SealedSecret")
            .field("len", &self.bytes.len())
            .field("ephemeral_pk", &"[...]")
            .field("ciphertext", &"[ENCRYPTED]")
            .finish()
    }
}

impl TryFrom<&str> for SealedSecret {
    type Error = SealError;

    fn try_from(encoded: &str) -> Result<Self, Self::Error> {
        let bytes = BASE64_STANDARD
            .decode(encoded)
            .map_err(|_| SealError::InvalidCiphertext)?;

        if bytes.len() < SEAL_OVERHEAD {
            return Err(SealError::InvalidCiphertext);
        }

        Ok(Self { bytes })
    }
}

impl TryFrom<String> for SealedSecret {
    type Error = SealError;

    fn try_from(encoded: String) -> Result<Self, Self::Error> {
        Self::try_from(encoded.as_str())
    }
}

impl PartialEq for SealedSecret {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        if self.bytes.len() != other.bytes.len() {
            return false;
        }
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl Eq for SealedSecret {}
