//! Error types for the guestlist ecosystem.

use thiserror::Error;

/// Errors that can occur in guestlist operations.
#[derive(Error, Debug)]
pub enum GuestlistError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for guestlist operations.
pub type GuestlistResult<T> = Result<T, GuestlistError>;
