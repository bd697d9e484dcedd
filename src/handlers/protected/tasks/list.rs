use axum::{extract::State, Json};

use crate::database::Task;
use crate::error::ApiResult;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// GET /tasks - Caller's tasks ordered by id; `[]` when there are none
pub async fn list_get(State(state): State<AppState>, user: AuthUser) -> ApiResult<Json<Vec<Task>>> {
    let tasks = state.tasks.list_tasks(Some(user.user_id)).await?;
    Ok(Json(tasks))
}
