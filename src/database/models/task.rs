use serde::Serialize;
use sqlx::FromRow;

#[derive(Debug, Clone, PartialEq, Serialize, FromRow)]
pub struct Task {
    pub id: i32,
    pub title: String,
    pub is_done: bool,
    /// Owning user; `None` for rows created before accounts existed.
    #[serde(skip)]
    pub user_id: Option<i32>,
}
