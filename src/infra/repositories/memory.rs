//! In-memory user repository.
//!
//! Keeps users in a map guarded by a lock. Useful for tests and for
//! running the use cases without a database.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;
use uuid::Uuid;

use super::user_repository::UserRepository;
use crate::domain::{User, UserId};
use crate::errors::{AppError, AppResult};

/// HashMap-backed repository. Rejects duplicate email addresses with a
/// conflict error, mirroring the database's unique constraint.
#[derive(Debug, Default)]
pub struct InMemoryUserRepository {
    users: RwLock<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn guard_poisoned() -> AppError {
        AppError::internal("user store lock poisoned")
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn next_id(&self) -> AppResult<UserId> {
        Ok(UserId::new(Uuid::new_v4()))
    }

    async fn add(&self, user: User) -> AppResult<()> {
        let mut users = self.users.write().map_err(|_| Self::guard_poisoned())?;

        if users
            .values()
            .any(|existing| existing.email() == user.email())
        {
            return Err(AppError::conflict("User"));
        }

        users.insert(user.id(), user);
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(|_| Self::guard_poisoned())?;
        Ok(users.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let users = self.users.read().map_err(|_| Self::guard_poisoned())?;
        Ok(users
            .values()
            .find(|user| user.email().as_str() == email)
            .cloned())
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let mut users = self.users.write().map_err(|_| Self::guard_poisoned())?;

        if !users.contains_key(&user.id()) {
            return Err(AppError::NotFound);
        }

        users.insert(user.id(), user.clone());
        Ok(user)
    }

    async fn remove(&self, id: UserId) -> AppResult<()> {
        let mut users = self.users.write().map_err(|_| Self::guard_poisoned())?;
        users.remove(&id).map(|_| ()).ok_or(AppError::NotFound)
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let users = self.users.read().map_err(|_| Self::guard_poisoned())?;
        Ok(users.values().cloned().collect())
    }
}
