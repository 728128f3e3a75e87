#![no_main]

use libfuzzer_sys::fuzz_target;
use secret_seal::SealedSecret;

fuzz_target!(|data: &str| {
    if let Ok(sealed) = SealedSecret::try_from(data) {
        let _ = sealed.ephemeral_pk();
        let _ = sealed.plaintext_len();
    }
});
