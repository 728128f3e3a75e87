//! Process-wide one-time initialization.
//!
//! The sealer draws its ephemeral keys from the operating system's entropy
//! source. [`init`] checks that the source is usable before the first seal
//! and publishes success so every later seal call, on any thread, can rely
//! on it.

use core::sync::atomic::{AtomicBool, Ordering};

use rand_core::{OsRng, TryRngCore};
use tracing::{debug, warn};
use zeroize::Zeroize;

use crate::core::error::{SealError, SealResult};

static INITIALIZED: AtomicBool = AtomicBool::new(false);

/// Prepares the crypto subsystem.
///
/// Must succeed once per process before any seal operation. Calling it again
/// after success is a cheap no-op. A failure is not remembered, so the caller
/// may retry once the entropy source becomes available.
///
/// # Errors
///
/// Returns [`SealError::InitFailed`] if the OS entropy source is unavailable.
pub fn init() -> SealResult<()> {
    if INITIALIZED.load(Ordering::Acquire) {
        return Ok(());
    }

    let mut probe = [0u8; 32];
    let result = OsRng.try_fill_bytes(&mut probe);
    probe.zeroize();

    if let Err(err) = result {
        warn!(error = %err, "entropy source unavailable, crypto initialization failed");
        return Err(SealError::InitFailed);
    }

    INITIALIZED.store(true, Ordering::Release);
    debug!("crypto subsystem initialized");
    Ok(())
}

/// Returns `true` once [`init`] has succeeded in this process.
#[must_use]
pub fn is_initialized() -> bool {
    INITIALIZED.load(Ordering::Acquire)
}

/// Fails with [`SealError::NotInitialized`] unless [`init`] has succeeded.
pub(crate) fn ensure_initialized() -> SealResult<()> {
    if is_initialized() {
        Ok(())
    } else {
        Err(SealError::NotInitialized)
    }
}
