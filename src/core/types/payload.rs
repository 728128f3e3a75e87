//! Request and response bodies for repository secrets APIs.
//!
//! A secrets API hands out a repository public key together with an opaque
//! key identifier. The sealed value is submitted along with that identifier
//! so the server knows which private key opens it.

use serde::{Deserialize, Serialize};

use crate::core::error::SealResult;
use crate::core::operations::seal_text::seal_base64;

/// A repository's public key as returned by the secrets API.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RepositoryPublicKey {
    /// Opaque identifier of the key pair.
    pub key_id: String,
    /// Standard padded base64 of the 32-byte public key.
    pub key: String,
}

/// Body for creating or updating a secret.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct EncryptedSecret {
    /// Base64 sealed box of the secret value.
    pub encrypted_value: String,
    /// Identifier of the key the value was sealed to.
    pub key_id: String,
}

impl RepositoryPublicKey {
    /// Seals `plaintext` to this key and pairs the result with its `key_id`.
    ///
    /// # Errors
    ///
    /// Same as [`seal_base64`].
    pub fn seal(&self, plaintext: &[u8]) -> SealResult<EncryptedSecret> {
        Ok(EncryptedSecret {
            encrypted_value: seal_base64(&self.key, plaintext)?,
            key_id: self.key_id.clone(),
        })
    }
}
