//! Error types for Veilstr
//!
//! Length and width validation happens entirely at compile time, so the
//! runtime surface is almost total. The one exception is interpreting a
//! decoded buffer as text, which can fail if the caller reads while the
//! container is still encoded.

use thiserror::Error;

/// Runtime errors from the checked text conversions.
#[derive(Error, Debug)]
pub enum VeilstrError {
    #[error("decoded buffer is not valid UTF-8")]
    Utf8(#[from] core::str::Utf8Error),

    #[error("decoded buffer is not valid UTF-16")]
    Utf16(#[from] std::string::FromUtf16Error),
}

/// Result type for Veilstr operations.
pub type VeilstrResult<T> = Result<T, VeilstrError>;
