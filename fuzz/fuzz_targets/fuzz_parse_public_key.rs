#![no_main]

use libfuzzer_sys::fuzz_target;
use secret_seal::{SealError, SealPublicKey};

fuzz_target!(|data: &str| {
    // Should never panic; a decoded key always re-encodes to the input
    match SealPublicKey::try_from(data) {
        Ok(key) => assert_eq!(key.to_string(), data),
        Err(err) => assert_eq!(err, SealError::InvalidKeyEncoding),
    }
});
