use axum::{
    async_trait,
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use serde::{de::DeserializeOwned, Deserialize};

use crate::error::ApiError;

/// `Query` whose rejections use the JSON error body.
#[derive(Debug)]
pub struct TaskQuery<T>(pub T);

#[async_trait]
impl<T, S> FromRequestParts<S> for TaskQuery<T>
where
    T: DeserializeOwned + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Query(value) = Query::<T>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::bad_request(format!("Invalid query string: {}", e.body_text())))?;
        Ok(TaskQuery(value))
    }
}

/// `?id=` query used by the update and delete endpoints.
#[derive(Debug, Deserialize)]
pub struct TaskIdQuery {
    pub id: Option<String>,
}

impl TaskIdQuery {
    pub fn task_id(&self) -> Result<i32, ApiError> {
        let raw = self
            .id
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ApiError::bad_request("Task id is required"))?;

        raw.parse::<i32>()
            .map_err(|_| ApiError::bad_request(format!("Invalid task id: {}", raw)))
    }
}

/// Shared 403 for ownership-scoped mutations that matched no row.
pub fn not_owned() -> ApiError {
    ApiError::forbidden("Task not found or not owned by you")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn query(id: Option<&str>) -> TaskIdQuery {
        TaskIdQuery { id: id.map(str::to_string) }
    }

    #[test]
    fn parses_numeric_ids() {
        assert_eq!(query(Some("42")).task_id().unwrap(), 42);
        assert_eq!(query(Some(" 7 ")).task_id().unwrap(), 7);
    }

    async fn extract(uri: &str) -> Result<TaskQuery<TaskIdQuery>, ApiError> {
        let (mut parts, _) = axum::http::Request::builder().uri(uri).body(()).unwrap().into_parts();
        TaskQuery::<TaskIdQuery>::from_request_parts(&mut parts, &()).await
    }

    #[tokio::test]
    async fn query_rejection_is_a_json_bad_request() {
        let TaskQuery(parsed) = extract("/update?id=5").await.unwrap();
        assert_eq!(parsed.task_id().unwrap(), 5);

        let err = extract("/update?id=1&id=2").await.unwrap_err();
        assert_eq!(err.status_code(), axum::http::StatusCode::BAD_REQUEST);
        assert_eq!(err.to_json()["code"], "BAD_REQUEST");
    }

    #[test]
    fn rejects_missing_or_non_numeric_ids() {
        assert!(query(None).task_id().is_err());
        assert!(query(Some("")).task_id().is_err());
        assert!(query(Some("abc")).task_id().is_err());
    }
}
