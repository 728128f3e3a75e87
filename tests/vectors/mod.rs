//! Test vector types for sealing tests.
//!
//! The sealed-box vectors were produced with libsodium's `crypto_box_seal`
//! using fixed ephemeral keys, so they pin the wire format byte for byte.

// Many fields are required for deserialization but not directly used in tests
#![allow(dead_code)]

use serde::Deserialize;

/// A test vector suite (top-level JSON structure).
#[derive(Debug, Deserialize)]
pub struct TestVectorSuite<T> {
    pub name: String,
    pub tests: Vec<T>,
}

/// Test vector for public key decoding.
#[derive(Debug, Deserialize)]
pub struct PublicKeyTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Base64 key text as received from a secrets API
    pub key: String,
    /// Hex-encoded decoded key bytes (null for fail tests)
    pub hex: Option<String>,
}

/// Test vector for sealed boxes.
#[derive(Debug, Deserialize)]
pub struct SealTestVector {
    pub name: String,
    #[serde(rename = "expect-fail")]
    pub expect_fail: bool,
    #[serde(default)]
    pub comment: Option<String>,
    /// Hex-encoded recipient X25519 secret key
    #[serde(rename = "recipient-secret-key")]
    pub recipient_secret_key: String,
    /// Base64 recipient public key (null for fail tests)
    #[serde(rename = "recipient-public-key")]
    pub recipient_public_key: Option<String>,
    /// Hex-encoded ephemeral public key the sealer used (null for fail tests)
    #[serde(rename = "ephemeral-public-key")]
    pub ephemeral_public_key: Option<String>,
    /// UTF-8 plaintext (null for fail tests)
    pub plaintext: Option<String>,
    /// Base64 sealed box
    pub sealed: String,
}

/// Loads a test vector suite from a JSON file.
pub fn load_vectors<T: for<'de> Deserialize<'de>>(path: &str) -> TestVectorSuite<T> {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read test vectors from {path}: {e}"));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse test vectors from {path}: {e}"))
}

/// Decodes a hex string to bytes.
pub fn hex_decode(s: &str) -> Option<Vec<u8>> {
    if s.len() % 2 != 0 {
        return None;
    }
    (0..s.len())
        .step_by(2)
        .map(|i| u8::from_str_radix(s.get(i..i + 2)?, 16).ok())
        .collect()
}

/// Decodes a hex string into a fixed-size array.
pub fn hex_array<const N: usize>(s: &str) -> Option<[u8; N]> {
    hex_decode(s)?.try_into().ok()
}
