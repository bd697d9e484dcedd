// handlers/public/auth/register.rs - POST /register handler

use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde_json::json;
use tracing::{info, warn};

use super::utils::Credentials;
use crate::database::DatabaseError;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

/// POST /register - Create a new account
///
/// Form fields: `username` (3+ characters), `password` (6+ characters).
///
/// Responses:
/// - 201 `{ "id": 1, "username": "alice" }`
/// - 400 when either field is too short
/// - 409 when the username is taken
pub async fn register_post(
    State(state): State<AppState>,
    credentials: Credentials,
) -> ApiResult<impl IntoResponse> {
    let username = credentials.validate_for_registration()?;

    let password_hash = state.passwords.hash(credentials.password).await?;

    let user = match state.users.create_user(&username, &password_hash).await {
        Ok(user) => user,
        Err(DatabaseError::Conflict(_)) => {
            warn!(%username, "Registration rejected: username taken");
            return Err(ApiError::conflict("That username is already taken. Try another!"));
        }
        Err(e) => return Err(e.into()),
    };

    info!(user_id = user.id, username = %user.username, "Registered new user");

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "id": user.id,
            "username": user.username,
        })),
    ))
}
