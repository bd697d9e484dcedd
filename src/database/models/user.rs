use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Registered account. Deliberately not `Serialize`: the hash stays inside the store.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub username: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
}
