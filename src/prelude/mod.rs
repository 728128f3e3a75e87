//! Ergonomic imports.
//!
//! ```rust
//! use secret_seal::prelude::*;
//!
//! init().expect("entropy available");
//! let key = SealPublicKey::from([7u8; 32]);
//! let sealed = seal_base64(&key.to_string(), b"value").expect("seal should succeed");
//! assert_eq!(sealed.len(), sealed_text_len(5).expect("no overflow"));
//! ```

pub use crate::core::error::{SealError, SealResult};
pub use crate::core::init::{init, is_initialized};
pub use crate::core::operations::{
    seal_base64, seal_into, sealed_len, sealed_text_len, PUBLIC_KEY_SIZE, SEAL_OVERHEAD,
};
pub use crate::core::status::Status;
pub use crate::core::types::{SealPublicKey, SealedSecret, SecretValue};

#[cfg(feature = "serde")]
pub use crate::core::types::{EncryptedSecret, RepositoryPublicKey};
