//! `SealPublicKey` - Recipient public key for sealing.
//!
//! Keys arrive as standard padded base64 text (for example from a secrets
//! API's "public key" endpoint) and are validated on parse.

use core::fmt::{self, Debug, Display};
use core::str::FromStr;

use crate::core::error::SealError;
use crate::core::operations::decode::decode_fixed;
use crate::core::operations::encode::encode_to_string;
use crate::core::operations::seal::PUBLIC_KEY_SIZE;

/// A recipient's X25519 public key.
///
/// # Example
///
/// ```rust
/// use secret_seal::SealPublicKey;
///
/// let key = SealPublicKey::try_from("Zm9vYmFyZm9vYmFyZm9vYmFyZm9vYmFyZm9vYmFyMDA=")
///     .expect("valid key");
/// assert_eq!(key.as_bytes(), b"foobarfoobarfoobarfoobarfoobar00");
///
/// // Serializes back to the same text
/// assert_eq!(key.to_string(), "Zm9vYmFyZm9vYmFyZm9vYmFyZm9vYmFyZm9vYmFyMDA=");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct SealPublicKey {
    key: [u8; PUBLIC_KEY_SIZE],
}

impl SealPublicKey {
    /// Returns a reference to the raw key bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; PUBLIC_KEY_SIZE] {
        &self.key
    }

    /// Returns the raw key bytes.
    #[must_use]
    pub const fn to_bytes(&self) -> [u8; PUBLIC_KEY_SIZE] {
        self.key
    }
}

impl From<[u8; PUBLIC_KEY_SIZE]> for SealPublicKey {
    fn from(key: [u8; PUBLIC_KEY_SIZE]) -> Self {
        Self { key }
    }
}

impl From<&[u8; PUBLIC_KEY_SIZE]> for SealPublicKey {
    fn from(key: &[u8; PUBLIC_KEY_SIZE]) -> Self {
        Self { key: *key }
    }
}

impl AsRef<[u8]> for SealPublicKey {
    fn as_ref(&self) -> &[u8] {
        &self.key
    }
}

impl Display for SealPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&encode_to_string(&self.key))
    }
}

impl Debug for SealPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SealPublicKey({:02x}{:02x}{:02x}{:02x}..)",
            self.key[0], self.key[1], self.key[2], self.key[3]
        )
    }
}

impl TryFrom<&str> for SealPublicKey {
    type Error = SealError;

    fn try_from(encoded: &str) -> Result<Self, Self::Error> {
        decode_fixed::<PUBLIC_KEY_SIZE>(encoded).map(Self::from)
    }
}

impl TryFrom<String> for SealPublicKey {
    type Error = SealError;

    fn try_from(encoded: String) -> Result<Self, Self::Error> {
        Self::try_from(encoded.as_str())
    }
}

impl FromStr for SealPublicKey {
    type Err = SealError;

    fn from_str(encoded: &str) -> Result<Self, Self::Err> {
        Self::try_from(encoded)
    }
}
