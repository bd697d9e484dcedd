use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use crate::database::manager::DatabaseError;
use crate::database::models::{Task, User};
use crate::database::repository::{TaskStore, UserStore};

#[derive(Default)]
struct Tables {
    users: Vec<User>,
    tasks: BTreeMap<i32, Task>,
    next_user_id: i32,
    next_task_id: i32,
}

/// In-process store with the same constraints as the Postgres schema:
/// unique usernames, serial ids, owner-matched mutations.
#[derive(Default)]
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryStore {
    async fn create_user(&self, username: &str, password_hash: &str) -> Result<User, DatabaseError> {
        let mut tables = self.tables.write().await;
        if tables.users.iter().any(|u| u.username == username) {
            return Err(DatabaseError::Conflict("username already exists".to_string()));
        }

        tables.next_user_id += 1;
        let user = User {
            id: tables.next_user_id,
            username: username.to_string(),
            password_hash: password_hash.to_string(),
            created_at: Utc::now(),
        };
        tables.users.push(user.clone());
        Ok(user)
    }

    async fn find_user_by_username(&self, username: &str) -> Result<Option<User>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }
}

#[async_trait]
impl TaskStore for MemoryStore {
    async fn insert_task(&self, title: &str, owner_id: i32) -> Result<Task, DatabaseError> {
        let mut tables = self.tables.write().await;
        tables.next_task_id += 1;
        let task = Task {
            id: tables.next_task_id,
            title: title.to_string(),
            is_done: false,
            user_id: Some(owner_id),
        };
        tables.tasks.insert(task.id, task.clone());
        Ok(task)
    }

    async fn list_tasks(&self, owner_id: Option<i32>) -> Result<Vec<Task>, DatabaseError> {
        let tables = self.tables.read().await;
        Ok(tables
            .tasks
            .values()
            .filter(|t| owner_id.is_none() || t.user_id == owner_id)
            .cloned()
            .collect())
    }

    async fn toggle_task(&self, task_id: i32, owner_id: i32) -> Result<u64, DatabaseError> {
        let mut tables = self.tables.write().await;
        match tables.tasks.get_mut(&task_id) {
            Some(task) if task.user_id == Some(owner_id) => {
                task.is_done = !task.is_done;
                Ok(1)
            }
            _ => Ok(0),
        }
    }

    async fn delete_task(&self, task_id: i32, owner_id: i32) -> Result<u64, DatabaseError> {
        let mut tables = self.tables.write().await;
        let owned = tables
            .tasks
            .get(&task_id)
            .is_some_and(|t| t.user_id == Some(owner_id));
        if owned {
            tables.tasks.remove(&task_id);
            Ok(1)
        } else {
            Ok(0)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn duplicate_username_conflicts_and_keeps_first_user() {
        let store = MemoryStore::new();
        let first = store.create_user("alice", "hash-1").await.unwrap();

        let err = store.create_user("alice", "hash-2").await.unwrap_err();
        assert!(matches!(err, DatabaseError::Conflict(_)));

        let found = store.find_user_by_username("alice").await.unwrap().unwrap();
        assert_eq!(found.id, first.id);
        assert_eq!(found.password_hash, "hash-1");
    }

    #[tokio::test]
    async fn unknown_username_is_none() {
        let store = MemoryStore::new();
        assert!(store.find_user_by_username("ghost").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn owner_can_toggle_and_delete_once() {
        let store = MemoryStore::new();
        let task = store.insert_task("write tests", 1).await.unwrap();
        assert!(!task.is_done);

        assert_eq!(store.toggle_task(task.id, 1).await.unwrap(), 1);
        assert!(store.list_tasks(Some(1)).await.unwrap()[0].is_done);

        assert_eq!(store.delete_task(task.id, 1).await.unwrap(), 1);
        assert_eq!(store.delete_task(task.id, 1).await.unwrap(), 0);
        assert!(store.list_tasks(Some(1)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn non_owner_mutations_affect_nothing() {
        let store = MemoryStore::new();
        let task = store.insert_task("private", 1).await.unwrap();

        assert_eq!(store.toggle_task(task.id, 2).await.unwrap(), 0);
        assert_eq!(store.delete_task(task.id, 2).await.unwrap(), 0);
        assert_eq!(store.toggle_task(999, 1).await.unwrap(), 0);

        let tasks = store.list_tasks(Some(1)).await.unwrap();
        assert_eq!(tasks, vec![task]);
    }

    #[tokio::test]
    async fn listing_filters_by_owner_in_id_order() {
        let store = MemoryStore::new();
        store.insert_task("a", 1).await.unwrap();
        store.insert_task("b", 2).await.unwrap();
        store.insert_task("c", 1).await.unwrap();

        let titles: Vec<String> = store
            .list_tasks(Some(1))
            .await
            .unwrap()
            .into_iter()
            .map(|t| t.title)
            .collect();
        assert_eq!(titles, vec!["a", "c"]);
        assert_eq!(store.list_tasks(None).await.unwrap().len(), 3);
        assert!(store.list_tasks(Some(3)).await.unwrap().is_empty());
    }
}
