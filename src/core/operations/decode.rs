//! Base64 decoding of fixed-size key material.

use base64::prelude::*;
use tracing::debug;
use zeroize::Zeroizing;

use crate::core::error::{SealError, SealResult};

/// Decodes standard padded base64 into exactly `N` bytes.
///
/// The input must use the standard alphabet with canonical `=` padding, zero
/// trailing bits and no whitespace. Anything else, or a decoded length other
/// than `N`, is rejected.
///
/// # Errors
///
/// Returns [`SealError::InvalidKeyEncoding`] on any decode failure. The
/// partially decoded bytes are wiped before returning.
pub fn decode_fixed<const N: usize>(encoded: &str) -> SealResult<[u8; N]> {
    let decoded = Zeroizing::new(BASE64_STANDARD.decode(encoded).map_err(|err| {
        debug!(error = %err, "rejecting malformed base64 key text");
        SealError::InvalidKeyEncoding
    })?);

    if decoded.len() != N {
        debug!(
            expected = N,
            actual = decoded.len(),
            "rejecting key text with wrong decoded length"
        );
        return Err(SealError::InvalidKeyEncoding);
    }

    let mut out = [0u8; N];
    out.copy_from_slice(&decoded);
    Ok(out)
}
