//! User database entity for SeaORM.

use sea_orm::entity::prelude::*;

use crate::domain::{Email, Name, Password, Surname, User, UserId};
use crate::errors::{AppError, AppResult};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,
    pub name: String,
    pub surname: String,
    #[sea_orm(unique)]
    pub email: String,
    pub password_hash: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Convert a database row back into the domain entity.
///
/// Stored fields passed validation when first persisted, so a parse
/// failure here means the row was tampered with outside the application.
impl TryFrom<Model> for User {
    type Error = AppError;

    fn try_from(model: Model) -> AppResult<User> {
        let name = Name::parse(&model.name)
            .map_err(|e| AppError::internal(format!("corrupt user row {}: {}", model.id, e)))?;
        let surname = Surname::parse(&model.surname)
            .map_err(|e| AppError::internal(format!("corrupt user row {}: {}", model.id, e)))?;
        let email = Email::parse(&model.email)
            .map_err(|e| AppError::internal(format!("corrupt user row {}: {}", model.id, e)))?;

        Ok(User::new(
            UserId::new(model.id),
            name,
            surname,
            email,
            Password::from_hash(model.password_hash),
        ))
    }
}
