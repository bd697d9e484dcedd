use axum::{extract::State, http::StatusCode};
use tracing::{info, warn};

use super::utils::{not_owned, TaskIdQuery, TaskQuery};
use crate::error::ApiResult;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// POST /delete?id= - Remove a task the caller owns
pub async fn delete_post(
    State(state): State<AppState>,
    user: AuthUser,
    TaskQuery(query): TaskQuery<TaskIdQuery>,
) -> ApiResult<StatusCode> {
    let task_id = query.task_id()?;

    if state.tasks.delete_task(task_id, user.user_id).await? == 0 {
        warn!(task_id, user_id = user.user_id, "Delete matched no owned task");
        return Err(not_owned());
    }

    info!(task_id, user_id = user.user_id, "Deleted task");
    Ok(StatusCode::OK)
}
