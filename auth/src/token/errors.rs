use thiserror::Error;

/// Error type for token operations.
///
/// Parsing failures stay distinct so callers can decide whether to surface
/// them separately or collapse them into one uniform response.
#[derive(Debug, Clone, Error)]
pub enum TokenError {
    #[error("Failed to encode token: {0}")]
    EncodingFailed(String),

    #[error("Token is expired")]
    Expired,

    #[error("Token signature is invalid")]
    InvalidSignature,

    #[error("Token is malformed: {0}")]
    Malformed(String),
}
