//! RLP decoder error type.

use rlp_buffers::BufferError;
use thiserror::Error;

/// Reasons an input is rejected as RLP. Encoding never fails.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RlpError {
    #[error("invalid rlp: input cannot be empty")]
    EmptyInput,
    #[error("invalid rlp: length field has leading zero or uses the long form for a short payload")]
    NonCanonicalLength,
    #[error("invalid rlp: single byte below 0x80 must encode as itself")]
    NonCanonicalShortString,
    #[error("invalid rlp: declared length {expected} exceeds {available} available bytes")]
    TruncatedInput { expected: usize, available: usize },
    #[error("invalid rlp: {width}-byte length field overflows the platform length type")]
    LengthOverflow { width: usize },
    #[error("invalid rlp: long list declares an empty payload")]
    EmptyListPayload,
    #[error("invalid rlp: {remaining} trailing bytes after item")]
    TrailingBytes { remaining: usize },
    #[error("invalid rlp: list nesting exceeds maximum depth {max_depth}")]
    DepthExceeded { max_depth: usize },
}

impl From<BufferError> for RlpError {
    fn from(err: BufferError) -> Self {
        match err {
            BufferError::EndOfBuffer { wanted, available } => RlpError::TruncatedInput {
                expected: wanted,
                available,
            },
        }
    }
}
