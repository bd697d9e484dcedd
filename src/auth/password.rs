use bcrypt::BcryptError;
use tokio::task;

use super::AuthError;

/// Longest password bcrypt can take without truncating: its 72-byte input
/// includes a trailing NUL.
pub const MAX_PASSWORD_BYTES: usize = 71;

/// bcrypt wrapper that keeps the hashing work off the async executor.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
    // Verified against when the username is unknown, so misses cost a full bcrypt round.
    dummy_hash: String,
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Result<Self, AuthError> {
        let dummy_hash = bcrypt::hash("placeholder-password", cost)
            .map_err(|e| AuthError::Hashing(e.to_string()))?;
        Ok(Self { cost, dummy_hash })
    }

    pub async fn hash(&self, password: String) -> Result<String, AuthError> {
        let cost = self.cost;
        task::spawn_blocking(move || bcrypt::non_truncating_hash(password, cost))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))?
            .map_err(|e| AuthError::Hashing(e.to_string()))
    }

    /// Returns `false` for a missing hash, after doing the same amount of work.
    /// Passwords longer than bcrypt's input limit never match.
    pub async fn verify(&self, password: String, stored_hash: Option<String>) -> Result<bool, AuthError> {
        let known = stored_hash.is_some();
        let hash = stored_hash.unwrap_or_else(|| self.dummy_hash.clone());

        let result = task::spawn_blocking(move || bcrypt::non_truncating_verify(password, &hash))
            .await
            .map_err(|e| AuthError::Hashing(e.to_string()))?;

        let matched = match result {
            Ok(matched) => matched,
            Err(BcryptError::Truncation(_)) => false,
            Err(e) => return Err(AuthError::Hashing(e.to_string())),
        };

        Ok(known && matched)
    }
}
