//! Value types that flow through a seal call.
//!
//! - [`SealPublicKey`] - Recipient public key, parsed from base64
//! - [`SecretValue`] - Owned plaintext, zeroized on drop
//! - [`SealedSecret`] - Sealed box with its base64 text form
//! - [`RepositoryPublicKey`] / [`EncryptedSecret`] - Secrets API bodies (`serde` feature)

#[cfg(feature = "serde")]
mod payload;
mod public_key;
mod secret_value;
mod sealed;

#[cfg(feature = "serde")]
pub use payload::{EncryptedSecret, RepositoryPublicKey};
pub use public_key::SealPublicKey;
pub use secret_value::SecretValue;
pub use sealed::SealedSecret;
