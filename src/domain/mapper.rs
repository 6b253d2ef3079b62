//! User mapper - converts the domain entity into a transport representation.

use serde_json::{Map, Value};

use super::User;

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// Mapper trait for dependency injection.
///
/// Concrete output strategies are swappable without touching the use cases.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
pub trait UserMapper: Send + Sync {
    /// Convert a user entity into a plain keyed record.
    fn to_record(&self, user: &User) -> Map<String, Value>;
}

/// Default mapper emitting id, name, surname and email.
///
/// The password hash is never part of transport output.
#[derive(Debug, Default, Clone, Copy)]
pub struct UserRecordMapper;

impl UserMapper for UserRecordMapper {
    fn to_record(&self, user: &User) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("id".to_string(), Value::String(user.id().to_string()));
        record.insert(
            "name".to_string(),
            Value::String(user.name().as_str().to_string()),
        );
        record.insert(
            "surname".to_string(),
            Value::String(user.surname().as_str().to_string()),
        );
        record.insert(
            "email".to_string(),
            Value::String(user.email().as_str().to_string()),
        );
        record
    }
}
