//! Domain layer - Core business entities and value objects
//!
//! DDD: Domain layer has NO external dependencies (except error types).
//! Every value object validates on construction; an instance is proof the
//! contained value satisfies its format rule.

pub mod email;
pub mod mapper;
pub mod name;
pub mod password;
pub mod surname;
pub mod user;

pub use email::Email;
pub use mapper::{UserMapper, UserRecordMapper};

#[cfg(any(test, feature = "test-utils"))]
pub use mapper::MockUserMapper;
pub use name::Name;
pub use password::Password;
pub use surname::Surname;
pub use user::{User, UserId};
