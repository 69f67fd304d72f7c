//! Error types for the library catalog

use thiserror::Error;

/// Numeric error codes, stable across releases
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u32)]
pub enum ErrorCode {
    Failure = 1,
    NoSuchMember = 4,
    NoSuchItem = 5,
    ItemNotAvailable = 7,
    Duplicate = 8,
    BadValue = 18,
    ItemNotBorrowed = 22,
}

/// Main application error type
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Item is not available: {0}")]
    ItemUnavailable(String),

    #[error("Item is not borrowed: {0}")]
    ItemNotBorrowed(String),

    #[error("Member not found: {0}")]
    MemberNotFound(i32),

    #[error("Item not found: {0}")]
    ItemNotFound(String),

    #[error("Duplicate identifier: {0}")]
    Duplicate(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),
}

impl AppError {
    pub fn code(&self) -> ErrorCode {
        match self {
            AppError::ItemUnavailable(_) => ErrorCode::ItemNotAvailable,
            AppError::ItemNotBorrowed(_) => ErrorCode::ItemNotBorrowed,
            AppError::MemberNotFound(_) => ErrorCode::NoSuchMember,
            AppError::ItemNotFound(_) => ErrorCode::NoSuchItem,
            AppError::Duplicate(_) => ErrorCode::Duplicate,
            AppError::Validation(_) => ErrorCode::BadValue,
            AppError::Config(_) => ErrorCode::Failure,
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

/// Result type alias for catalog operations
pub type AppResult<T> = Result<T, AppError>;
