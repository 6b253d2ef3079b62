//! Name value object.

use serde::Serialize;

use crate::config::MAX_NAME_LENGTH;
use crate::errors::{AppError, AppResult};

/// A user's given name.
///
/// DDD: Value object - immutable, compared by value. Invalid input never
/// produces an instance; holding a `Name` is proof the value is valid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Name(String);

impl Name {
    /// Parse a raw string into a `Name`.
    ///
    /// # Errors
    /// Returns a validation error if the value is empty (after trimming)
    /// or longer than [`MAX_NAME_LENGTH`] characters.
    pub fn parse(value: &str) -> AppResult<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation("name must not be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(AppError::validation(format!(
                "name must not exceed {} characters",
                MAX_NAME_LENGTH
            )));
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Read-only access to the validated value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Name {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
