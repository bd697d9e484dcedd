// handlers/public/auth/login.rs - POST /login handler

use axum::{extract::State, Json};
use serde::Serialize;
use tracing::{info, warn};

use super::utils::Credentials;
use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

const INVALID_CREDENTIALS: &str = "Invalid username or password";

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
}

/// POST /login - Authenticate credentials and receive a bearer token
///
/// Form fields: `username`, `password`. An unknown username and a wrong
/// password produce the same 401, and cost the same bcrypt round.
pub async fn login_post(
    State(state): State<AppState>,
    credentials: Credentials,
) -> ApiResult<Json<LoginResponse>> {
    let username = credentials.username.trim();
    info!(%username, "Login attempt");

    let user = state.users.find_user_by_username(username).await?;

    let stored_hash = user.as_ref().map(|u| u.password_hash.clone());
    let verified = state.passwords.verify(credentials.password, stored_hash).await?;

    let user = match user {
        Some(user) if verified => user,
        _ => {
            warn!(%username, "Login failed");
            return Err(ApiError::unauthorized(INVALID_CREDENTIALS));
        }
    };

    let token = state.tokens.issue(user.id, &user.username)?;

    Ok(Json(LoginResponse {
        token,
        username: user.username,
    }))
}
