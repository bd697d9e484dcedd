use axum::{
    async_trait,
    extract::{FromRequest, Multipart, Request},
    http::header::CONTENT_TYPE,
    Form,
};
use serde::Deserialize;

use crate::auth::MAX_PASSWORD_BYTES;
use crate::error::ApiError;

pub const MIN_USERNAME_LEN: usize = 3;
pub const MIN_PASSWORD_LEN: usize = 6;

/// `username` / `password` pair posted by the login and register forms.
///
/// Accepts either `application/x-www-form-urlencoded` or `multipart/form-data`
/// (what a browser sends for `new FormData(form)`). Missing fields come through
/// as empty strings so each handler decides how to reject them.
#[derive(Debug, Default, Deserialize)]
pub struct Credentials {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

impl Credentials {
    /// Enforce the registration length rules, returning the trimmed username.
    pub fn validate_for_registration(&self) -> Result<String, ApiError> {
        let username = self.username.trim();
        if username.chars().count() < MIN_USERNAME_LEN || self.password.chars().count() < MIN_PASSWORD_LEN {
            return Err(ApiError::bad_request(format!(
                "Username ({}+) or password ({}+) too short",
                MIN_USERNAME_LEN, MIN_PASSWORD_LEN
            )));
        }
        if self.password.len() > MAX_PASSWORD_BYTES {
            return Err(ApiError::bad_request(format!(
                "Password must be at most {} bytes",
                MAX_PASSWORD_BYTES
            )));
        }
        Ok(username.to_string())
    }
}

#[async_trait]
impl<S> FromRequest<S> for Credentials
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_multipart = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v.starts_with("multipart/form-data"));

        if !is_multipart {
            let Form(credentials) = Form::<Credentials>::from_request(req, state)
                .await
                .map_err(|e| ApiError::bad_request(format!("Invalid form body: {}", e)))?;
            return Ok(credentials);
        }

        let mut multipart = Multipart::from_request(req, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {}", e)))?;

        let mut credentials = Credentials::default();
        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid multipart body: {}", e)))?
        {
            let name = field.name().unwrap_or_default().to_string();
            let value = field
                .text()
                .await
                .map_err(|e| ApiError::bad_request(format!("Invalid multipart field: {}", e)))?;
            match name.as_str() {
                "username" => credentials.username = value,
                "password" => credentials.password = value,
                _ => {}
            }
        }

        Ok(credentials)
    }
}
