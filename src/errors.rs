//! Centralized error handling.
//!
//! `AppError` is the unified error for fallible operations in this crate.
//! `ApplicationError` is the named error entry attached to use-case
//! responses, keyed by field name (or "generic" for persistence failures).

use serde::Serialize;
use thiserror::Error;

/// Application error types
/// SOLID - Open/Closed: Extend via new variants without modifying behavior
#[derive(Error, Debug)]
pub enum AppError {
    // Resource errors
    #[error("Resource not found")]
    NotFound,

    #[error("{0} already exists")]
    Conflict(String),

    // Validation
    #[error("{0}")]
    Validation(String),

    // External service errors
    #[error("database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    // Internal
    #[error("{0}")]
    Internal(String),
}

/// Result type alias
pub type AppResult<T> = Result<T, AppError>;

/// Convenience constructors
impl AppError {
    pub fn conflict(entity: impl Into<String>) -> Self {
        AppError::Conflict(entity.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        AppError::Validation(msg.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        AppError::Internal(msg.into())
    }
}

/// Extension trait for Option -> AppError conversion
pub trait OptionExt<T> {
    fn ok_or_not_found(self) -> AppResult<T>;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_not_found(self) -> AppResult<T> {
        self.ok_or(AppError::NotFound)
    }
}

/// Classification of a response error entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorKind {
    ValidationError,
    PersistenceError,
}

/// A named error carried on a use-case response.
///
/// Validation entries are keyed by the offending field; persistence entries
/// are keyed by "generic" and carry the underlying failure message verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationError {
    pub kind: ErrorKind,
    pub message: String,
}

impl ApplicationError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::ValidationError,
            message: message.into(),
        }
    }

    pub fn persistence(message: impl Into<String>) -> Self {
        Self {
            kind: ErrorKind::PersistenceError,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ApplicationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_entry_carries_kind_and_message() {
        let err = ApplicationError::validation("name must not be empty");
        assert_eq!(err.kind, ErrorKind::ValidationError);
        assert_eq!(err.message, "name must not be empty");
    }

    #[test]
    fn persistence_entry_keeps_message_verbatim() {
        let source = AppError::internal("connection reset by peer");
        let err = ApplicationError::persistence(source.to_string());
        assert_eq!(err.kind, ErrorKind::PersistenceError);
        assert_eq!(err.message, "connection reset by peer");
    }

    #[test]
    fn ok_or_not_found_maps_none() {
        let missing: Option<u32> = None;
        assert!(matches!(missing.ok_or_not_found(), Err(AppError::NotFound)));
    }
}
