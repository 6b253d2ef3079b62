//! Email value object.

use serde::Serialize;
use validator::ValidateEmail;

use crate::errors::{AppError, AppResult};

/// A syntactically valid email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Email(String);

impl Email {
    /// Parse a raw string into an `Email`.
    ///
    /// # Errors
    /// Returns a validation error if the value does not have a valid
    /// email shape.
    pub fn parse(value: &str) -> AppResult<Self> {
        if !value.validate_email() {
            return Err(AppError::validation(format!(
                "{} is not a valid email address",
                value
            )));
        }
        Ok(Self(value.to_string()))
    }

    /// Read-only access to the validated value.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl AsRef<str> for Email {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
