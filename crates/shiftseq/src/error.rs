//! Sequence error types.

use std::error::Error;
use std::fmt;

/// Errors returned by [`Sequence`](crate::Sequence) operations.
///
/// Every variant is a precondition violation on the caller's side. Nothing
/// here is retried internally; callers that want fail-fast behaviour can
/// `expect()` at the call site.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// An index was outside the valid range for the operation.
    ///
    /// For element access the valid range is `[0, len)`, for insertion it
    /// is `[0, len]`.
    IndexOutOfBounds {
        /// The offending index.
        index: usize,
        /// Highest valid index, or `None` if no index is valid
        /// (element access on an empty sequence).
        highest: Option<usize>,
    },
    /// A sequence was requested with an initial capacity of zero.
    ZeroCapacity,
    /// Value-based removal found no matching element.
    NotFound,
    /// A [`SequenceConfig`](crate::SequenceConfig) failed validation.
    InvalidConfig {
        /// Which parameter was rejected and why.
        reason: String,
    },
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IndexOutOfBounds {
                index,
                highest: Some(highest),
            } => {
                write!(f, "index {index} higher than highest index {highest}")
            }
            Self::IndexOutOfBounds {
                index,
                highest: None,
            } => {
                write!(f, "index {index} out of bounds for empty sequence")
            }
            Self::ZeroCapacity => write!(f, "cannot create a sequence with capacity 0"),
            Self::NotFound => write!(f, "element not found in sequence"),
            Self::InvalidConfig { reason } => write!(f, "invalid sequence config: {reason}"),
        }
    }
}

impl Error for SequenceError {}

/// Check `index <= highest`, treating `highest = None` as "nothing is valid".
pub(crate) fn check_index(index: usize, highest: Option<usize>) -> Result<(), SequenceError> {
    match highest {
        Some(h) if index <= h => Ok(()),
        _ => Err(SequenceError::IndexOutOfBounds { index, highest }),
    }
}
