//! Shared types - use-case request and response carriers

pub mod request;
pub mod response;

pub use request::Request;
pub use response::{Status, UseCaseResponse};
