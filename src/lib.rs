//! Anonymous sealed-box encryption of secrets for transport as base64 text.
//!
//! Secrets APIs (GitHub Actions secrets, for example) accept new secret
//! values only as a libsodium sealed box addressed to a repository public key,
//! encoded with standard padded base64. This crate implements exactly that
//! one operation:
//!
//! 1. decode the recipient's base64 public key (32 bytes, X25519)
//! 2. seal the plaintext (`crypto_box_seal`: 48 bytes of overhead)
//! 3. encode the sealed box as base64, into an owned `String` or a
//!    caller-supplied buffer
//!
//! # Quick Start
//!
//! ```rust
//! // Once per process, before the first seal
//! secret_seal::init().expect("entropy available");
//!
//! let public_key = "Zm9vYmFyZm9vYmFyZm9vYmFyZm9vYmFyZm9vYmFyMDA=";
//! let sealed = secret_seal::seal_base64(public_key, b"hello").expect("seal should succeed");
//!
//! // 5 bytes of plaintext + 48 bytes of overhead, base64 encoded
//! assert_eq!(sealed.len(), 72);
//! ```
//!
//! # Caller-owned buffers
//!
//! [`sealed_text_len`] reports the required size up front; [`seal_into`]
//! fails with [`SealError::BufferTooSmall`] carrying the same number if the
//! buffer is short, and writes nothing in that case. [`status::seal`] offers
//! the same contract with integer status codes and an in/out capacity.
//!
//! # Security
//!
//! - Sealed boxes are anonymous: the recipient cannot authenticate the sender
//! - There is no replay protection
//! - Ephemeral secrets and decoded buffers are zeroized after use
//! - [`SecretValue`] zeroizes plaintext on drop and redacts it in `Debug`
//! - No unsafe code
//!
//! # Features
//!
//! - `prelude` - the [`prelude`] module
//! - `serde` - [`RepositoryPublicKey`] and [`EncryptedSecret`] request bodies

#![forbid(unsafe_code)]

pub mod core;

#[cfg(feature = "prelude")]
pub mod prelude;

#[cfg(test)]
mod proptests;

pub use crate::core::status;

// Re-export commonly used items at crate root
pub use crate::core::error::{SealError, SealResult};
pub use crate::core::init::{init, is_initialized};
pub use crate::core::operations::{
    seal_base64, seal_into, sealed_len, sealed_text_len, EPHEMERAL_PK_SIZE, PUBLIC_KEY_SIZE,
    SEAL_OVERHEAD, SEAL_TAG_SIZE,
};
pub use crate::core::status::Status;
pub use crate::core::types::{SealPublicKey, SealedSecret, SecretValue};

#[cfg(feature = "serde")]
pub use crate::core::types::{EncryptedSecret, RepositoryPublicKey};
