//! Application configuration and constants

pub mod constants;
pub mod settings;

pub use constants::*;
pub use settings::Config;
