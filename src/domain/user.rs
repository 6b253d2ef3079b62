//! User domain entity and identifier.

use serde::Serialize;
use uuid::Uuid;

use super::{Email, Name, Password, Surname};

/// Unique user identifier, assigned by the repository before persistence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct UserId(Uuid);

impl UserId {
    pub fn new(id: Uuid) -> Self {
        Self(id)
    }

    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for UserId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

/// User domain entity.
///
/// DDD: Aggregate of an identifier plus four validated value objects.
/// Immutable after construction; every field is valid by construction.
#[derive(Debug, Clone)]
pub struct User {
    id: UserId,
    name: Name,
    surname: Surname,
    email: Email,
    password: Password,
}

impl User {
    /// Assemble a user from its identifier and validated value objects.
    pub fn new(id: UserId, name: Name, surname: Surname, email: Email, password: Password) -> Self {
        Self {
            id,
            name,
            surname,
            email,
            password,
        }
    }

    pub fn id(&self) -> UserId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn surname(&self) -> &Surname {
        &self.surname
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn password(&self) -> &Password {
        &self.password
    }
}
