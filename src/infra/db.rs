//! Database connection setup.

use sea_orm::{Database, DatabaseConnection};

use crate::config::Config;
use crate::errors::AppResult;

/// Connect to the database configured in the environment.
pub async fn connect(config: &Config) -> AppResult<DatabaseConnection> {
    let db = Database::connect(&config.database_url).await?;
    tracing::info!("database connection established");
    Ok(db)
}
