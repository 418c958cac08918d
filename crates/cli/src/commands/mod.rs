//! CLI command implementations.

use sqlx::PgPool;

pub mod migrate;
pub mod seed;

/// Errors from CLI commands.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Connect to the database named by `FOODCART_DATABASE_URL` (or the generic
/// `DATABASE_URL` fallback).
pub async fn connect() -> Result<PgPool, CliError> {
    dotenvy::dotenv().ok();

    let database_url = std::env::var("FOODCART_DATABASE_URL")
        .or_else(|_| std::env::var("DATABASE_URL"))
        .map_err(|_| CliError::MissingEnvVar("FOODCART_DATABASE_URL"))?;

    Ok(PgPool::connect(&database_url).await?)
}
