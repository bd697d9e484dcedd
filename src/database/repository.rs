use async_trait::async_trait;

use crate::database::manager::DatabaseError;
use crate::database::models::{Task, User};

/// Credential storage keyed by username.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Insert a new account. A taken username yields `DatabaseError::Conflict`.
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, DatabaseError>;

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError>;
}

/// Task storage. Mutations are matched on both task id and owner id and
/// report the number of affected rows; zero means "missing or not yours".
#[async_trait]
pub trait TaskStore: Send + Sync {
    async fn insert_task(&self, title: &str, owner_id: i32) -> Result<Task, DatabaseError>;

    /// List tasks ordered by id, restricted to `owner_id` when given.
    async fn list_tasks(&self, owner_id: Option<i32>) -> Result<Vec<Task>, DatabaseError>;

    /// Flip `is_done` on the task if `owner_id` owns it.
    async fn toggle_task(&self, task_id: i32, owner_id: i32) -> Result<u64, DatabaseError>;

    async fn delete_task(&self, task_id: i32, owner_id: i32) -> Result<u64, DatabaseError>;

    async fn health_check(&self) -> Result<(), DatabaseError> {
        Ok(())
    }
}
