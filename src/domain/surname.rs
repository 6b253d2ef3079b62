//! Surname value object.

use serde::Serialize;

use crate::config::MAX_NAME_LENGTH;
use crate::errors::{AppError, AppResult};

/// A user's family name. Same format rule as [`crate::domain::Name`],
/// reported against the "surname" field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Surname(String);

impl Surname {
    /// Parse a raw string into a `Surname`.
    ///
    /// # Errors
    /// Returns a validation error if the value is empty (after trimming)
    /// or longer than [`MAX_NAME_LENGTH`] characters.
    pub fn parse(value: &str) -> AppResult<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(AppError::validation("surname must not be empty"));
        }
        if trimmed.chars().count() > MAX_NAME_LENGTH {
            return Err(AppError::validation(format!(
                "surname must not exceed {} characters",
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

impl AsRef<str> for Surname {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Surname {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_valid_surname_is_parsed_successfully() {
        assert!(Surname::parse("Le Guin").is_ok());
    }

    #[test]
    fn empty_surname_is_rejected() {
        assert!(Surname::parse("").is_err());
    }

    #[test]
    fn whitespace_only_surname_is_rejected() {
        assert!(Surname::parse(" \t ").is_err());
    }

    #[test]
    fn a_surname_over_the_length_limit_is_rejected() {
        let surname = "b".repeat(MAX_NAME_LENGTH + 1);
        assert!(Surname::parse(&surname).is_err());
    }
}
