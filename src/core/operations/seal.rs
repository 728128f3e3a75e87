//! Anonymous sealed-box encryption, compatible with libsodium's
//! `crypto_box_seal`.
//!
//! This module implements public key encryption using:
//! - X25519 for key exchange with a fresh ephemeral keypair
//! - BLAKE2b-192 over `ephemeral_pk || recipient_pk` for the nonce
//! - XSalsa20-Poly1305 (`crypto_box`) for authenticated encryption
//!
//! Output layout: `ephemeral_pk (32) || tag (16) || ciphertext`.
//!
//! # Security
//!
//! The recipient learns nothing about the sender: there is no sender
//! authentication and no replay protection. Do not use this where sender
//! accountability is required.

use blake2::digest::consts::U24;
use blake2::{Blake2b, Digest};
use crypto_box::aead::generic_array::GenericArray;
use crypto_box::aead::Aead;
use crypto_box::{PublicKey, SalsaBox, SecretKey};
use rand_core::{OsRng, TryRngCore};
use zeroize::Zeroizing;

use crate::core::error::{SealError, SealResult};

/// Size of a recipient public key (X25519).
pub const PUBLIC_KEY_SIZE: usize = 32;

/// Size of the ephemeral public key prepended to every sealed box.
pub const EPHEMERAL_PK_SIZE: usize = 32;

/// Size of the Poly1305 authentication tag.
pub const SEAL_TAG_SIZE: usize = 16;

/// Bytes added to the plaintext length by sealing.
pub const SEAL_OVERHEAD: usize = EPHEMERAL_PK_SIZE + SEAL_TAG_SIZE;

/// Returns the sealed length for a plaintext of `plaintext_len` bytes.
#[must_use]
pub const fn sealed_len(plaintext_len: usize) -> Option<usize> {
    plaintext_len.checked_add(SEAL_OVERHEAD)
}

/// Seals `plaintext` to the recipient's X25519 public key.
///
/// Any plaintext length is accepted, including zero.
///
/// # Errors
///
/// Returns [`SealError::SealingFailed`] if the RNG or the cipher fails.
pub fn seal_box(plaintext: &[u8], recipient_pk: &[u8; PUBLIC_KEY_SIZE]) -> SealResult<Vec<u8>> {
    let mut ephemeral_secret = Zeroizing::new([0u8; 32]);
    OsRng
        .try_fill_bytes(&mut ephemeral_secret[..])
        .map_err(|_| SealError::SealingFailed)?;

    seal_box_with_ephemeral(plaintext, recipient_pk, &ephemeral_secret)
}

/// Deterministic core of [`seal_box`] with a caller-chosen ephemeral secret.
///
/// Reusing an ephemeral secret breaks anonymity and confidentiality; only
/// [`seal_box`] and known-answer tests call this.
pub(crate) fn seal_box_with_ephemeral(
    plaintext: &[u8],
    recipient_pk: &[u8; PUBLIC_KEY_SIZE],
    ephemeral_secret: &[u8; 32],
) -> SealResult<Vec<u8>> {
    let total = sealed_len(plaintext.len()).ok_or(SealError::SealingFailed)?;

    let ephemeral_sk = SecretKey::from(*ephemeral_secret);
    let ephemeral_pk = ephemeral_sk.public_key();
    let recipient = PublicKey::from(*recipient_pk);

    // nonce = BLAKE2b-192(ephemeral_pk || recipient_pk)
    let digest = Blake2b::<U24>::new()
        .chain_update(ephemeral_pk.as_bytes())
        .chain_update(recipient_pk)
        .finalize();
    let nonce = GenericArray::clone_from_slice(digest.as_slice());

    let boxed = SalsaBox::new(&recipient, &ephemeral_sk)
        .encrypt(&nonce, plaintext)
        .map_err(|_| SealError::SealingFailed)?;

    let mut sealed = Vec::with_capacity(total);
    sealed.extend_from_slice(ephemeral_pk.as_bytes());
    sealed.extend_from_slice(&boxed);

    if sealed.len() != total {
        return Err(SealError::SealingFailed);
    }

    Ok(sealed)
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Helper function to generate a recipient keypair for testing.
    fn generate_test_keypair() -> SealResult<(SecretKey, [u8; 32])> {
        let mut seed = [0u8; 32];
        OsRng
            .try_fill_bytes(&mut seed)
            .map_err(|_| SealError::SealingFailed)?;

        let secret = SecretKey::from(seed);
        let public = *secret.public_key().as_bytes();
        Ok((secret, public))
    }

    fn hex(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap_or_default())
            .collect()
    }

    // Keypairs from the NaCl distribution's crypto_box test.
    const RECIPIENT_PK: &str = "de9edb7d7b7dc1b4d35b61c2ece435373f8343c85b78674dadfc7e146f882b4f";
    const EPHEMERAL_SK: &str = "77076d0a7318a57d3c16c17251b26645df4c2f87ebc0992ab177fba51db92c2a";

    #[test]
    fn test_overhead() {
        assert_eq!(SEAL_OVERHEAD, 48);
        assert_eq!(sealed_len(5), Some(53));
        assert_eq!(sealed_len(usize::MAX), None);
    }

    #[test]
    fn test_seal_length() -> SealResult<()> {
        let (_, public) = generate_test_keypair()?;

        for len in [0usize, 1, 5, 31, 32, 33, 1024] {
            let plaintext = vec![0x42u8; len];
            let sealed = seal_box(&plaintext, &public)?;
            assert_eq!(sealed.len(), len + SEAL_OVERHEAD);
        }
        Ok(())
    }

    #[test]
    fn test_seal_known_answer() -> SealResult<()> {
        let mut recipient = [0u8; 32];
        recipient.copy_from_slice(&hex(RECIPIENT_PK));
        let mut ephemeral = [0u8; 32];
        ephemeral.copy_from_slice(&hex(EPHEMERAL_SK));

        let sealed = seal_box_with_ephemeral(b"hello", &recipient, &ephemeral)?;

        let expected = hex(
            "8520f0098930a754748b7ddcb43ef75a0dbf3a0d26381af4eba4a98eaa9b4e6a\
             ad0930145ccea26832517dc0478df85fcf62c0aa87",
        );
        assert_eq!(sealed, expected);
        Ok(())
    }

    #[test]
    fn test_seal_unseal_roundtrip() -> SealResult<()> {
        let (secret, public) = generate_test_keypair()?;

        let plaintext = b"ghp_example_token_value";
        let sealed = seal_box(plaintext, &public)?;

        let opened = secret
            .unseal(&sealed)
            .map_err(|_| SealError::SealingFailed)?;
        assert_eq!(opened, plaintext);
        Ok(())
    }

    #[test]
    fn test_seal_produces_different_output() -> SealResult<()> {
        let (_, public) = generate_test_keypair()?;

        let sealed1 = seal_box(b"same secret", &public)?;
        let sealed2 = seal_box(b"same secret", &public)?;

        // Fresh ephemeral keys every time
        assert_ne!(sealed1[..EPHEMERAL_PK_SIZE], sealed2[..EPHEMERAL_PK_SIZE]);
        assert_ne!(sealed1, sealed2);
        Ok(())
    }

    #[test]
    fn test_unseal_wrong_key() -> SealResult<()> {
        let (_, public1) = generate_test_keypair()?;
        let (secret2, _) = generate_test_keypair()?;

        let sealed = seal_box(b"secret", &public1)?;
        assert!(secret2.unseal(&sealed).is_err());
        Ok(())
    }

    #[test]
    fn test_unseal_modified_tag() -> SealResult<()> {
        let (secret, public) = generate_test_keypair()?;

        let mut sealed = seal_box(b"secret", &public)?;
        sealed[EPHEMERAL_PK_SIZE] ^= 0xff;

        assert!(secret.unseal(&sealed).is_err());
        Ok(())
    }
}
