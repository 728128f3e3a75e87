//! Status-code boundary.
//!
//! Some callers (FFI shims, process supervisors) want a flat integer status
//! instead of a `Result`, with the classic size-in/size-out buffer contract.
//! The codes are stable and ordered by pipeline stage.

use core::fmt::{self, Display};

use tracing::trace;

use crate::core::error::SealError;
use crate::core::init::ensure_initialized;
use crate::core::operations::seal_text::seal_into;

/// Outcome of a boundary call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Status {
    /// The call succeeded.
    Success = 0,
    /// A required argument was empty, or the declared capacity exceeds the buffer.
    InvalidArgument = -1,
    /// The public key text failed to decode to exactly 32 bytes.
    InvalidKeyEncoding = -2,
    /// The sealing primitive failed.
    SealingFailed = -3,
    /// The buffer is too small; the capacity now holds the required size.
    BufferTooSmall = -4,
    /// Base64 encoding failed.
    EncodingFailed = -5,
    /// Initialization failed.
    InitFailed = -6,
    /// A seal was attempted before initialization.
    NotInitialized = -7,
}

impl Status {
    /// Returns the integer code.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Returns `true` for [`Status::Success`].
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }
}

impl From<&SealError> for Status {
    fn from(err: &SealError) -> Self {
        match err {
            SealError::InvalidArgument | SealError::InvalidCiphertext => Self::InvalidArgument,
            SealError::InvalidKeyEncoding => Self::InvalidKeyEncoding,
            SealError::SealingFailed => Self::SealingFailed,
            SealError::BufferTooSmall { .. } => Self::BufferTooSmall,
            SealError::EncodingFailed => Self::EncodingFailed,
            SealError::InitFailed => Self::InitFailed,
            SealError::NotInitialized => Self::NotInitialized,
        }
    }
}

impl From<SealError> for Status {
    fn from(err: SealError) -> Self {
        Self::from(&err)
    }
}

impl<T> From<&Result<T, SealError>> for Status {
    fn from(result: &Result<T, SealError>) -> Self {
        match result {
            Ok(_) => Self::Success,
            Err(err) => Self::from(err),
        }
    }
}

impl Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?} ({})", self.code())
    }
}

/// Status-returning form of [`init`](crate::init).
#[must_use]
pub fn init() -> Status {
    Status::from(&crate::core::init::init())
}

/// Status-returning form of [`seal_into`](crate::seal_into).
///
/// `capacity` declares how much of `out` may be written. On
/// [`Status::Success`] it is overwritten with the encoded length; on
/// [`Status::BufferTooSmall`] with the required length, and `out` is left
/// untouched. Any other status leaves both unchanged.
///
/// Initialization is checked before the capacity, so an uninitialized call
/// always reports [`Status::NotInitialized`].
///
/// # Example
///
/// ```rust
/// use secret_seal::status::{self, Status};
///
/// assert_eq!(status::init(), Status::Success);
///
/// let key = "Zm9vYmFyZm9vYmFyZm9vYmFyZm9vYmFyZm9vYmFyMDA=";
/// let mut capacity = 0;
/// assert_eq!(status::seal(key, b"hello", &mut [], &mut capacity), Status::BufferTooSmall);
///
/// let mut out = vec![0u8; capacity];
/// assert_eq!(status::seal(key, b"hello", &mut out, &mut capacity), Status::Success);
/// assert_eq!(capacity, 72);
/// ```
#[must_use]
pub fn seal(public_key_b64: &str, plaintext: &[u8], out: &mut [u8], capacity: &mut usize) -> Status {
    if let Err(err) = ensure_initialized() {
        return Status::from(err);
    }

    if *capacity > out.len() {
        trace!(
            capacity = *capacity,
            buffer_len = out.len(),
            "declared capacity exceeds buffer"
        );
        return Status::InvalidArgument;
    }

    match seal_into(public_key_b64, plaintext, &mut out[..*capacity]) {
        Ok(written) => {
            *capacity = written;
            Status::Success
        }
        Err(SealError::BufferTooSmall { required }) => {
            *capacity = required;
            Status::BufferTooSmall
        }
        Err(err) => Status::from(&err),
    }
}
