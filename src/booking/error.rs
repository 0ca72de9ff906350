//! Booking error types

use crate::storage::StorageError;
use thiserror::Error;

/// A submitted form failed validation. Nothing was mutated.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A required field was empty
    #[error("Missing required field: {0}")]
    MissingField(&'static str),

    /// The appointment time is not a `YYYY-MM-DDTHH:MM` value
    #[error("Invalid appointment time: {0:?}")]
    InvalidTime(String),
}

/// Errors surfaced by the booking service
#[derive(Error, Debug)]
pub enum BookingError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Result type alias for booking operations
pub type BookingResult<T> = Result<T, BookingError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FormError::MissingField("doctor");
        assert_eq!(err.to_string(), "Missing required field: doctor");

        let err: BookingError = FormError::InvalidTime("noon".to_string()).into();
        assert_eq!(err.to_string(), "Invalid appointment time: \"noon\"");
    }
}
