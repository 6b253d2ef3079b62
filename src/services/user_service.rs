//! User service - Handles user-related business logic.
//!
//! SOLID (SRP): Handles user lookup and maintenance use cases only;
//! user creation lives in [`crate::services::AddUserUseCase`].

use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::{Email, Name, Surname, User, UserId};
use crate::errors::{AppResult, OptionExt};
use crate::infra::UserRepository;

/// User service trait for dependency injection.
#[async_trait]
pub trait UserService: Send + Sync {
    /// Get user by ID
    async fn get_user(&self, id: UserId) -> AppResult<User>;

    /// List all users
    async fn list_users(&self) -> AppResult<Vec<User>>;

    /// Update user details; absent fields are left unchanged
    async fn update_user(
        &self,
        id: UserId,
        name: Option<String>,
        surname: Option<String>,
        email: Option<String>,
    ) -> AppResult<User>;

    /// Delete user by ID
    async fn delete_user(&self, id: UserId) -> AppResult<()>;
}

/// Concrete implementation of UserService over the repository abstraction.
pub struct UserManager {
    repository: Arc<dyn UserRepository>,
}

impl UserManager {
    /// Create new user service instance
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl UserService for UserManager {
    async fn get_user(&self, id: UserId) -> AppResult<User> {
        self.repository.find_by_id(id).await?.ok_or_not_found()
    }

    async fn list_users(&self) -> AppResult<Vec<User>> {
        self.repository.list().await
    }

    async fn update_user(
        &self,
        id: UserId,
        name: Option<String>,
        surname: Option<String>,
        email: Option<String>,
    ) -> AppResult<User> {
        let existing = self.repository.find_by_id(id).await?.ok_or_not_found()?;

        // Replacement fields go through the same value objects as creation,
        // so an update can never weaken the entity's invariants.
        let name = match name {
            Some(raw) => Name::parse(&raw)?,
            None => existing.name().clone(),
        };
        let surname = match surname {
            Some(raw) => Surname::parse(&raw)?,
            None => existing.surname().clone(),
        };
        let email = match email {
            Some(raw) => Email::parse(&raw)?,
            None => existing.email().clone(),
        };

        let updated = User::new(id, name, surname, email, existing.password().clone());
        self.repository.update(updated).await
    }

    async fn delete_user(&self, id: UserId) -> AppResult<()> {
        self.repository.remove(id).await
    }
}
