//! Error types for Shelfware

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ShelfwareError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out: {0}")]
    Timeout(String),

    #[error("Service error ({status}): {message}")]
    Service { status: u16, message: String },

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, ShelfwareError>;
