use async_trait::async_trait;
use sqlx::PgPool;

use crate::database::manager::{DatabaseError, DatabaseManager};
use crate::database::models::{Task, User};
use crate::database::repository::{TaskStore, UserStore};

/// Postgres-backed implementation of both stores over a shared pool.
#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl UserStore for PgStore {
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, DatabaseError> {
        sqlx::query_as::<_, User>(
            "INSERT INTO users (username, password_hash)
             VALUES ($1, $2)
             RETURNING id, username, password_hash, created_at",
        )
        .bind(username)
        .bind(password_hash)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DatabaseError::from_insert(e, "username"))
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, username, password_hash, created_at
             FROM users
             WHERE username = $1",
        )
        .bind(username)
        .fetch_optional(&self.pool)
        .await?;

        Ok(user)
    }
}

#[async_trait]
impl TaskStore for PgStore {
    async fn insert_task(&self, title: &str, owner_id: i32) -> Result<Task, DatabaseError> {
        let task = sqlx::query_as::<_, Task>(
            "INSERT INTO tasks (title, is_done, user_id)
             VALUES ($1, FALSE, $2)
             RETURNING id, title, is_done, user_id",
        )
        .bind(title)
        .bind(owner_id)
        .fetch_one(&self.pool)
        .await?;

        Ok(task)
    }

    async fn list_tasks(&self, owner_id: Option<i32>) -> Result<Vec<Task>, DatabaseError> {
        let tasks = match owner_id {
            Some(owner_id) => {
                sqlx::query_as::<_, Task>(
                    "SELECT id, title, is_done, user_id FROM tasks WHERE user_id = $1 ORDER BY id ASC",
                )
                .bind(owner_id)
                .fetch_all(&self.pool)
                .await?
            }
            None => {
                sqlx::query_as::<_, Task>("SELECT id, title, is_done, user_id FROM tasks ORDER BY id ASC")
                    .fetch_all(&self.pool)
                    .await?
            }
        };

        Ok(tasks)
    }

    async fn toggle_task(&self, task_id: i32, owner_id: i32) -> Result<u64, DatabaseError> {
        let result = sqlx::query("UPDATE tasks SET is_done = NOT is_done WHERE id = $1 AND user_id = $2")
            .bind(task_id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn delete_task(&self, task_id: i32, owner_id: i32) -> Result<u64, DatabaseError> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1 AND user_id = $2")
            .bind(task_id)
            .bind(owner_id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn health_check(&self) -> Result<(), DatabaseError> {
        DatabaseManager::health_check(&self.pool).await
    }
}
