use thiserror::Error;

/// Errors surfaced by the reservation service.
///
/// `Validation` and `Conflict` are the two user-facing kinds; their display
/// strings are the exact wire messages, so the variants carry the full
/// message rather than a prefix-formatted fragment. Store failures are
/// classified separately and never leak a user-facing status.
#[derive(Error, Debug)]
pub enum BookingError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    Conflict(String),

    #[error("Database error: {0}")]
    Database(#[from] eyre::Report),

    #[error("Internal server error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type BookingResult<T> = Result<T, BookingError>;
