//! Infrastructure concerns (persistence)

pub mod db;
pub mod repositories;

pub use repositories::{InMemoryUserRepository, UserRepository, UserStore};

#[cfg(any(test, feature = "test-utils"))]
pub use repositories::MockUserRepository;
