//! Container error model.

use core::ops::Range;

use thiserror::Error;

/// Result type returned by fallible sequence operations.
pub type SequenceResult<T> = Result<T, SequenceError>;

/// Failure raised by a [`DynamicSequence`](crate::DynamicSequence) operation.
///
/// Every variant is detected before the container is mutated.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum SequenceError {
    /// A position outside the currently valid range was addressed.
    #[error("index {index} out of range (valid: {valid:?})")]
    IndexOutOfRange { index: usize, valid: Range<usize> },

    /// The block could not be grown. Not recoverable by retrying.
    #[error("failed to grow block of {capacity} slots by {increment}")]
    AllocationFailure { capacity: usize, increment: usize },
}

impl SequenceError {
    pub fn out_of_range(index: usize, valid: Range<usize>) -> Self {
        Self::IndexOutOfRange { index, valid }
    }

    pub fn allocation_failure(capacity: usize, increment: usize) -> Self {
        Self::AllocationFailure {
            capacity,
            increment,
        }
    }
}
