use std::time::Duration;

use sqlx::{postgres::PgPoolOptions, PgPool};
use thiserror::Error;
use tracing::info;

use crate::config::DatabaseConfig;

/// Errors from the storage layer
#[derive(Debug, Error)]
pub enum DatabaseError {
    #[error("Missing configuration: {0}")]
    ConfigMissing(&'static str),

    #[error("Conflict: {0}")]
    Conflict(String),

    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

impl DatabaseError {
    /// Map a unique-constraint violation to `Conflict`, leaving other errors as-is.
    pub fn from_insert(err: sqlx::Error, what: &str) -> Self {
        match &err {
            sqlx::Error::Database(db_err) if db_err.is_unique_violation() => {
                DatabaseError::Conflict(format!("{} already exists", what))
            }
            _ => DatabaseError::Sqlx(err),
        }
    }
}

const CREATE_USERS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS users (
        id SERIAL PRIMARY KEY,
        username TEXT UNIQUE NOT NULL,
        password_hash TEXT NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT now()
    )
"#;

const CREATE_TASKS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS tasks (
        id SERIAL PRIMARY KEY,
        title TEXT NOT NULL,
        is_done BOOLEAN NOT NULL DEFAULT FALSE,
        user_id INTEGER REFERENCES users(id)
    )
"#;

/// Connection bootstrap for the Postgres backend
pub struct DatabaseManager;

impl DatabaseManager {
    /// Open a pool against `config.url` and make sure it answers.
    pub async fn connect(config: &DatabaseConfig) -> Result<PgPool, DatabaseError> {
        let url = config
            .url
            .as_deref()
            .ok_or(DatabaseError::ConfigMissing("DATABASE_URL"))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(url)
            .await?;

        Self::health_check(&pool).await?;
        info!(max_connections = config.max_connections, "Connected to Postgres");
        Ok(pool)
    }

    /// Create the `users` and `tasks` tables when missing.
    pub async fn bootstrap_schema(pool: &PgPool) -> Result<(), DatabaseError> {
        // users first: tasks.user_id references it
        sqlx::query(CREATE_USERS_TABLE).execute(pool).await?;
        sqlx::query(CREATE_TASKS_TABLE).execute(pool).await?;
        info!("Database schema ready");
        Ok(())
    }

    pub async fn health_check(pool: &PgPool) -> Result<(), DatabaseError> {
        sqlx::query("SELECT 1").execute(pool).await?;
        Ok(())
    }
}
