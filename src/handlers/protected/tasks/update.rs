use axum::{extract::State, http::StatusCode};
use tracing::{info, warn};

use super::utils::{not_owned, TaskIdQuery, TaskQuery};
use crate::error::ApiResult;
use crate::middleware::AuthUser;
use crate::state::AppState;

/// POST /update?id= - Toggle completion of a task the caller owns
pub async fn update_post(
    State(state): State<AppState>,
    user: AuthUser,
    TaskQuery(query): TaskQuery<TaskIdQuery>,
) -> ApiResult<StatusCode> {
    let task_id = query.task_id()?;

    if state.tasks.toggle_task(task_id, user.user_id).await? == 0 {
        warn!(task_id, user_id = user.user_id, "Toggle matched no owned task");
        return Err(not_owned());
    }

    info!(task_id, user_id = user.user_id, "Toggled task");
    Ok(StatusCode::OK)
}
