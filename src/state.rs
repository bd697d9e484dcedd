use std::sync::Arc;

use chrono::Duration;
use tracing::{debug, warn};

use crate::auth::{PasswordHasher, TokenIssuer};
use crate::config::AppConfig;
use crate::database::{DatabaseError, DatabaseManager, MemoryStore, PgStore, TaskStore, UserStore};

/// Dependencies shared by every handler, injected through axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub users: Arc<dyn UserStore>,
    pub tasks: Arc<dyn TaskStore>,
    pub tokens: Arc<TokenIssuer>,
    pub passwords: Arc<PasswordHasher>,
}

impl AppState {
    /// Build state around one store value that serves both users and tasks.
    pub fn new<S>(store: S, tokens: TokenIssuer, passwords: PasswordHasher) -> Self
    where
        S: UserStore + TaskStore + 'static,
    {
        let store = Arc::new(store);
        Self {
            users: store.clone(),
            tasks: store,
            tokens: Arc::new(tokens),
            passwords: Arc::new(passwords),
        }
    }

    /// In-memory state, mainly for tests.
    pub fn in_memory(secret: &str, token_ttl: Duration, bcrypt_cost: u32) -> anyhow::Result<Self> {
        Ok(Self::new(
            MemoryStore::new(),
            TokenIssuer::new(secret, token_ttl),
            PasswordHasher::new(bcrypt_cost)?,
        ))
    }

    /// Pick the Postgres backend when a URL is configured, the memory store otherwise.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let tokens = TokenIssuer::from_config(&config.security);
        let passwords = PasswordHasher::new(config.security.bcrypt_cost)?;

        match config.database.url {
            Some(_) => {
                let pool = DatabaseManager::connect(&config.database).await?;
                DatabaseManager::bootstrap_schema(&pool).await?;
                Ok(Self::new(PgStore::new(pool), tokens, passwords))
            }
            None => {
                warn!("DATABASE_URL not set; tasks and accounts are kept in memory only");
                Ok(Self::new(MemoryStore::new(), tokens, passwords))
            }
        }
    }

    pub async fn health_check(&self) -> Result<(), DatabaseError> {
        self.tasks.health_check().await?;
        debug!("Health check passed");
        Ok(())
    }
}
