//! Sealing operations.
//!
//! - [`decode`] - Base64 text to fixed-size key bytes
//! - [`seal`] - Anonymous sealed-box encryption
//! - [`encode`] - Bytes to base64 in caller-owned buffers
//! - [`seal_text`] - The full decode -> seal -> encode pipeline

pub mod decode;
pub mod encode;
pub mod seal;
pub mod seal_text;

pub use seal::{sealed_len, EPHEMERAL_PK_SIZE, PUBLIC_KEY_SIZE, SEAL_OVERHEAD, SEAL_TAG_SIZE};
pub use seal_text::{seal_base64, seal_into, sealed_text_len};
