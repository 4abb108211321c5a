//! Core error types for the allocation library.
//!
//! `AllocationError` is the domain error produced by the calculator. `Error`
//! wraps it together with the ambient failures of the JSON and configuration
//! helpers.

use thiserror::Error;

use crate::constants::EMPTY_HOLDINGS_MESSAGE;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the allocation library.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Allocation failed: {0}")]
    Allocation(#[from] AllocationError),

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid configuration value: {0}")]
    InvalidConfigValue(String),
}

/// Errors raised while allocating holdings.
///
/// Zero and negative totals are not errors; they surface as non-finite or
/// negative percentages.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationError {
    /// The holdings sequence contained no items.
    #[error("{}", EMPTY_HOLDINGS_MESSAGE)]
    EmptyInput,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_input_message() {
        assert_eq!(
            AllocationError::EmptyInput.to_string(),
            "Sorry, but you have no asset to allocate!"
        );
    }

    #[test]
    fn test_root_error_wraps_allocation_error() {
        let err: Error = AllocationError::EmptyInput.into();
        assert!(matches!(
            err,
            Error::Allocation(AllocationError::EmptyInput)
        ));
        assert_eq!(
            err.to_string(),
            "Allocation failed: Sorry, but you have no asset to allocate!"
        );
    }
}
