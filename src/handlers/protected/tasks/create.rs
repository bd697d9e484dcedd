use axum::{extract::State, http::StatusCode, Json};
use serde::Deserialize;
use tracing::info;

use super::utils::TaskQuery;
use crate::database::Task;
use crate::error::{ApiError, ApiResult};
use crate::middleware::AuthUser;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct CreateQuery {
    pub title: Option<String>,
}

/// POST /create?title= - Add a task owned by the caller
pub async fn create_post(
    State(state): State<AppState>,
    user: AuthUser,
    TaskQuery(query): TaskQuery<CreateQuery>,
) -> ApiResult<(StatusCode, Json<Task>)> {
    let title = query.title.as_deref().map(str::trim).unwrap_or_default();
    if title.is_empty() {
        return Err(ApiError::bad_request("Title is required"));
    }

    let task = state.tasks.insert_task(title, user.user_id).await?;
    info!(task_id = task.id, user_id = user.user_id, "Created task");

    Ok((StatusCode::CREATED, Json(task)))
}
