//! Sequence error types.

use std::error::Error;
use std::fmt;

/// Errors that can occur during sequence operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// An index at or past the current length was used for access.
    IndexOutOfRange {
        /// The rejected index.
        index: usize,
        /// Number of live elements at the time of access.
        len: usize,
    },
    /// The requested slot count cannot be represented as an allocation
    /// (its byte size overflows `usize` or exceeds `isize::MAX`).
    CapacityOverflow {
        /// Number of slots requested.
        requested: usize,
    },
    /// The global allocator returned null.
    AllocationFailed {
        /// Number of slots requested.
        capacity: usize,
        /// Size of the failed allocation in bytes.
        bytes: usize,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfRange { index, len } => {
                write!(f, "index out of range: index {index}, length {len}")
            }
            Self::CapacityOverflow { requested } => {
                write!(f, "capacity overflow: {requested} slots requested")
            }
            Self::AllocationFailed { capacity, bytes } => {
                write!(
                    f,
                    "allocation failed: {capacity} slots ({bytes} bytes) requested"
                )
            }
        }
    }
}

impl Error for SequenceError {}
