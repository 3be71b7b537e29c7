//! Error types for the codec.

use thiserror::Error;

use crate::dimension::Dimension;

/// Result type alias for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Errors that can occur while encoding or decoding a SKU.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Invalid {dimension} code '{code}': expected exactly {expected_width} digit(s)")]
    InvalidSegment {
        dimension: Dimension,
        code: String,
        expected_width: usize,
    },

    #[error("Sequence {sequence} is out of range [1, {max}]")]
    SequenceOutOfRange { sequence: u32, max: u16 },

    #[error("Invalid SKU length: expected {expected} characters, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("SKU '{code}' contains non-digit characters")]
    InvalidCharacters { code: String },
}
