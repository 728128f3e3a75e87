//! Core sealing types and operations.
//!
//! - [`error`] - Error types for sealing operations
//! - [`init`] - Process-wide one-time initialization
//! - [`operations`] - Decoder, sealer, encoder and the top-level pipeline
//! - [`status`] - Integer status-code boundary
//! - [`types`] - Public key, plaintext and sealed-box value types

pub mod error;
pub mod init;
pub mod operations;
pub mod status;
pub mod types;

// Re-export commonly used items
pub use error::{SealError, SealResult};
pub use init::{init, is_initialized};
