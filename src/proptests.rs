//! Property-based tests for the seal pipeline.
//!
//! These tests use proptest to verify that the pipeline's contracts hold for
//! arbitrary inputs:
//!
//! - Roundtrip (seal, then open with the recipient's secret key)
//! - Length determinism of the sealed bytes and their text form
//! - Buffer negotiation (the reported size is always sufficient and exact)
//! - Key decoding accepts exactly 32-byte standard base64

use base64::prelude::*;
use crypto_box::SecretKey;
use proptest::prelude::*;

use crate::core::operations::decode::decode_fixed;
use crate::{
    init, seal_base64, seal_into, sealed_text_len, SealError, SealPublicKey, SealedSecret,
    SEAL_OVERHEAD,
};

// ==================== Sealing Property Tests ====================

proptest! {
    /// Sealed output always opens back to the plaintext.
    #[test]
    fn seal_open_roundtrip(
        seed in any::<[u8; 32]>(),
        plaintext in prop::collection::vec(any::<u8>(), 1..512),
    ) {
        init().unwrap();
        let secret = SecretKey::from(seed);
        let public = SealPublicKey::from(*secret.public_key().as_bytes());

        let text = seal_base64(&public.to_string(), &plaintext).unwrap();
        let sealed = SealedSecret::try_from(text.as_str()).unwrap();
        let opened = secret.unseal(sealed.as_bytes()).unwrap();
        prop_assert_eq!(opened, plaintext);
    }

    /// Sealed length is plaintext length plus the fixed overhead, and the
    /// text length is the padded base64 length of that.
    #[test]
    fn sealed_length_is_deterministic(
        key in any::<[u8; 32]>(),
        plaintext in prop::collection::vec(any::<u8>(), 1..300),
    ) {
        init().unwrap();
        let public = SealPublicKey::from(key);

        let text = seal_base64(&public.to_string(), &plaintext).unwrap();
        let sealed = SealedSecret::try_from(text.as_str()).unwrap();

        prop_assert_eq!(sealed.len(), plaintext.len() + SEAL_OVERHEAD);
        prop_assert_eq!(text.len(), (plaintext.len() + SEAL_OVERHEAD).div_ceil(3) * 4);
        prop_assert_eq!(text.len(), sealed_text_len(plaintext.len()).unwrap());
    }

    /// Any buffer shorter than the required size is rejected with the exact
    /// required size; a buffer of that size succeeds.
    #[test]
    fn buffer_negotiation_is_exact(
        plaintext in prop::collection::vec(any::<u8>(), 1..128),
        shortfall in 1usize..64,
    ) {
        init().unwrap();
        let key = SealPublicKey::from([0x11u8; 32]).to_string();
        let required = sealed_text_len(plaintext.len()).unwrap();

        let mut short = vec![0u8; required.saturating_sub(shortfall)];
        prop_assert_eq!(
            seal_into(&key, &plaintext, &mut short),
            Err(SealError::BufferTooSmall { required })
        );
        prop_assert!(short.iter().all(|&b| b == 0));

        let mut exact = vec![0u8; required];
        prop_assert_eq!(seal_into(&key, &plaintext, &mut exact), Ok(required));
    }
}

// ==================== Decoding Property Tests ====================

proptest! {
    /// Exactly 32 bytes encoded as standard base64 always decode.
    #[test]
    fn decode_accepts_exact_keys(key in any::<[u8; 32]>()) {
        let text = BASE64_STANDARD.encode(key);
        prop_assert_eq!(decode_fixed::<32>(&text), Ok(key));
    }

    /// Any other length is rejected.
    #[test]
    fn decode_rejects_wrong_lengths(
        bytes in prop::collection::vec(any::<u8>(), 0..96)
            .prop_filter("not 32 bytes", |b| b.len() != 32),
    ) {
        let text = BASE64_STANDARD.encode(&bytes);
        prop_assert_eq!(decode_fixed::<32>(&text), Err(SealError::InvalidKeyEncoding));
    }

    /// Arbitrary text never panics and only ever yields a 32-byte key or
    /// `InvalidKeyEncoding`.
    #[test]
    fn decode_arbitrary_text(text in ".{0,64}") {
        match decode_fixed::<32>(&text) {
            Ok(key) => prop_assert_eq!(BASE64_STANDARD.encode(key), text),
            Err(err) => prop_assert_eq!(err, SealError::InvalidKeyEncoding),
        }
    }

    /// Invalid input fails the same way every time.
    #[test]
    fn failures_are_repeatable(text in "[!-~]{0,50}") {
        init().unwrap();
        let first = seal_base64(&text, b"value");
        prop_assume!(first.is_err());
        prop_assert_eq!(first, seal_base64(&text, b"value"));
    }
}
