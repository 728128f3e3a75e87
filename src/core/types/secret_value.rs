//! `SecretValue` - Owned plaintext secret.
//!
//! Holds the secret bytes for the lifetime of a provisioning step and wipes
//! them on drop.

use core::fmt::{self, Debug};

use zeroize::{Zeroize, ZeroizeOnDrop};

/// A plaintext secret awaiting sealing.
///
/// # Security
///
/// - Contents are zeroized on drop
/// - Debug output redacts the value
/// - Equality comparison uses constant-time comparison
///
/// # Example
///
/// ```rust
/// use secret_seal::SecretValue;
///
/// let secret = SecretValue::from("ghp_example");
/// assert_eq!(secret.len(), 11);
/// assert!(!format!("{secret:?}").contains("ghp_example"));
/// ```
#[derive(Clone, Default, Zeroize, ZeroizeOnDrop)]
pub struct SecretValue {
    bytes: Vec<u8>,
}

impl SecretValue {
    /// Returns a reference to the secret bytes.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns the secret length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Returns `true` if the secret is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }
}

impl From<Vec<u8>> for SecretValue {
    fn from(bytes: Vec<u8>) -> Self {
        Self { bytes }
    }
}

impl From<&[u8]> for SecretValue {
    fn from(bytes: &[u8]) -> Self {
        Self {
            bytes: bytes.to_vec(),
        }
    }
}

impl From<String> for SecretValue {
    fn from(value: String) -> Self {
        Self {
            bytes: value.into_bytes(),
        }
    }
}

impl From<&str> for SecretValue {
    fn from(value: &str) -> Self {
        Self::from(value.as_bytes())
    }
}

impl AsRef<[u8]> for SecretValue {
    fn as_ref(&self) -> &[u8] {
        &self.bytes
    }
}

impl Debug for SecretValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SecretValue")
            .field("len", &self.bytes.len())
            .field("bytes", &"[REDACTED]")
            .finish()
    }
}

impl PartialEq for SecretValue {
    fn eq(&self, other: &Self) -> bool {
        use subtle::ConstantTimeEq;
        if self.bytes.len() != other.bytes.len() {
            return false;
        }
        self.bytes.ct_eq(&other.bytes).into()
    }
}

impl Eq for SecretValue {}
