// handlers/protected/auth/whoami.rs - GET /whoami handler

use axum::Json;
use serde_json::{json, Value};

use crate::middleware::AuthUser;

/// GET /whoami - Identity carried by the caller's token
pub async fn whoami_get(user: AuthUser) -> Json<Value> {
    Json(json!({
        "user_id": user.user_id,
        "username": user.username,
    }))
}
