//! Error types for counter bank operations.
//!
//! All errors implement `std::error::Error` via `thiserror` and are
//! returned directly to the caller; nothing is retried or logged here.

use thiserror::Error;

/// Result type alias for counter bank operations.
pub type BankResult<T> = Result<T, BankError>;

/// Errors that can occur during counter bank operations.
///
/// Every fallible operation checks its preconditions before touching any
/// state, so a returned error always means the bank is unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    /// Constructor argument out of range.
    #[error("Invalid argument for {field}: {message}")]
    InvalidArgument {
        /// The argument that failed validation.
        field: &'static str,
        /// Error message.
        message: String,
    },

    /// Counter index outside the bank's valid range.
    #[error("Counter index {index} out of range (bank size {size})")]
    IndexOutOfRange {
        /// The offending index.
        index: usize,
        /// The bank size; valid indices are `0..size`.
        size: usize,
    },

    /// Mutation attempted while the bank is inactive.
    #[error("Counter bank is inactive; reactivate before mutating")]
    InactiveBank,
}

impl BankError {
    /// Creates an invalid argument error.
    pub fn invalid_argument(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            field,
            message: message.into(),
        }
    }

    /// Creates an index out of range error.
    pub fn index_out_of_range(index: usize, size: usize) -> Self {
        Self::IndexOutOfRange { index, size }
    }

    /// Returns true if the caller can clear this error condition
    /// through the bank's own API.
    ///
    /// Only [`BankError::InactiveBank`] qualifies: a `reactivate()` call
    /// restores the bank and the rejected operation can be retried.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, BankError::InactiveBank)
    }
}
