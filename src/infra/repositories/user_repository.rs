//! User repository trait and SeaORM-backed implementation.

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, Set};
use uuid::Uuid;

use super::entities::user::{self, ActiveModel, Entity as UserRow};
use crate::domain::{User, UserId};
use crate::errors::{AppError, AppResult};

#[cfg(any(test, feature = "test-utils"))]
use mockall::automock;

/// User repository trait for dependency injection.
///
/// The repository owns identifier allocation: callers obtain an id via
/// `next_id` before assembling the entity they pass to `add`.
#[cfg_attr(any(test, feature = "test-utils"), automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Allocate the identifier for the next user to be persisted.
    async fn next_id(&self) -> AppResult<UserId>;

    /// Persist a new user.
    async fn add(&self, user: User) -> AppResult<()>;

    /// Find a user by ID.
    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>>;

    /// Find a user by email address.
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// Replace a persisted user's fields with the given entity's.
    async fn update(&self, user: User) -> AppResult<User>;

    /// Delete a user by ID.
    async fn remove(&self, id: UserId) -> AppResult<()>;

    /// List all users.
    async fn list(&self) -> AppResult<Vec<User>>;
}

/// Concrete implementation of UserRepository backed by SeaORM.
pub struct UserStore {
    db: DatabaseConnection,
}

impl UserStore {
    /// Create new repository instance
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserStore {
    async fn next_id(&self) -> AppResult<UserId> {
        Ok(UserId::new(Uuid::new_v4()))
    }

    async fn add(&self, user: User) -> AppResult<()> {
        let active_model = ActiveModel {
            id: Set(user.id().as_uuid()),
            name: Set(user.name().as_str().to_string()),
            surname: Set(user.surname().as_str().to_string()),
            email: Set(user.email().as_str().to_string()),
            password_hash: Set(user.password().as_str().to_string()),
        };

        active_model.insert(&self.db).await.map_err(AppError::from)?;
        Ok(())
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<User>> {
        let result = UserRow::find_by_id(id.as_uuid())
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(User::try_from).transpose()
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        let result = UserRow::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(AppError::from)?;

        result.map(User::try_from).transpose()
    }

    async fn update(&self, user: User) -> AppResult<User> {
        let existing = UserRow::find_by_id(user.id().as_uuid())
            .one(&self.db)
            .await?
            .ok_or(AppError::NotFound)?;

        let mut active: ActiveModel = existing.into();
        active.name = Set(user.name().as_str().to_string());
        active.surname = Set(user.surname().as_str().to_string());
        active.email = Set(user.email().as_str().to_string());
        active.password_hash = Set(user.password().as_str().to_string());

        let model = active.update(&self.db).await.map_err(AppError::from)?;
        User::try_from(model)
    }

    async fn remove(&self, id: UserId) -> AppResult<()> {
        let result = UserRow::delete_by_id(id.as_uuid())
            .exec(&self.db)
            .await
            .map_err(AppError::from)?;

        if result.rows_affected == 0 {
            return Err(AppError::NotFound);
        }

        Ok(())
    }

    async fn list(&self) -> AppResult<Vec<User>> {
        let models = UserRow::find()
            .all(&self.db)
            .await
            .map_err(AppError::from)?;

        models.into_iter().map(User::try_from).collect()
    }
}
