//! Codec errors shared by TimeBlock, ValueBlock and Transaction.

use thiserror::Error;

/// Deterministic byte-layout decoding error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// The buffer is shorter than the field currently being read requires.
    #[error("truncated while reading {context}: needed {needed} bytes, had {available}")]
    Truncated {
        /// What was being parsed when the buffer ran out.
        context: &'static str,
        /// Bytes required to read the field.
        needed: usize,
        /// Bytes actually remaining.
        available: usize,
    },

    /// A fixed-size entity's buffer was not exactly the expected length.
    #[error("wrong length: expected {expected} bytes, got {got}")]
    WrongLength {
        /// The exact length the schema requires.
        expected: usize,
        /// The length actually supplied.
        got: usize,
    },

    /// Bytes remained in the buffer after every declared field was consumed.
    #[error("trailing bytes: consumed {consumed} of {total}")]
    TrailingBytes {
        /// Bytes consumed by the declared schema.
        consumed: usize,
        /// Total buffer length.
        total: usize,
    },
}
