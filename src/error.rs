//! Error types for the pizzeria application
//!
//! All errors use thiserror for structured error handling.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Cart is empty")]
    EmptyCart,

    #[error("Admin login required")]
    Unauthorized,

    #[error("Recipe generator error: {0}")]
    Generator(String),
}

pub type Result<T> = std::result::Result<T, AppError>;
