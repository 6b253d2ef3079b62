//! User Accounts - a clean-architecture user management core
//!
//! This crate provides the application and domain layers for user
//! management, following DDD, SOLID, and DRY principles: self-validating
//! value objects, an immutable user entity, trait-based repository and
//! mapper collaborators, and use cases that report their outcome through
//! an explicit response value.
//!
//! # Architecture Layers
//!
//! - **config**: Application configuration and constants
//! - **domain**: Core business entities, value objects and the mapper
//! - **services**: Application use cases and business logic
//! - **infra**: Infrastructure concerns (persistence)
//! - **types**: Shared types (request and response carriers)
//! - **errors**: Centralized error handling
//!
//! The enclosing application owns any HTTP/CLI transport; this crate
//! exposes none.

pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;
pub mod types;

// Re-export commonly used types at crate root
pub use config::Config;
pub use domain::{Email, Name, Password, Surname, User, UserId};
pub use errors::{AppError, AppResult, ApplicationError, ErrorKind};
pub use types::{Request, UseCaseResponse};
