//! Application use cases and business logic

pub mod add_user;
pub mod user_service;

pub use add_user::AddUserUseCase;
pub use user_service::{UserManager, UserService};
