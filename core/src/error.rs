//! Common error types for declorder.

use thiserror::Error;

/// Errors raised while decoding core values from foreign input.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A member kind code outside the closed enumeration.
    #[error("Unknown member kind code: {0}")]
    UnknownMemberKind(u8),

    /// A message tag that names no known message.
    #[error("Unknown message tag: '{0}'")]
    UnknownMessageTag(String),
}

/// Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;
