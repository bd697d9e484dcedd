use axum::{
    body::{to_bytes, Body},
    http::{header::AUTHORIZATION, Method, Request, StatusCode},
    Router,
};
use chrono::Duration;
use serde_json::Value;
use tower::ServiceExt;

use task_tracker_api::{app, AppState};

fn router() -> (Router, AppState) {
    let state = AppState::in_memory("router-secret", Duration::hours(1), 4).unwrap();
    (app(state.clone()), state)
}

async fn send(router: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn in_process_task_flow() {
    let (router, state) = router();
    let token = state.tokens.issue(7, "grace").unwrap();
    let bearer = format!("Bearer {}", token);

    let (status, task) = send(
        &router,
        Request::builder()
            .method(Method::POST)
            .uri("/create?title=Water%20plants")
            .header(AUTHORIZATION, &bearer)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(task["title"], "Water plants");

    let (status, list) = send(
        &router,
        Request::builder()
            .uri("/tasks")
            .header(AUTHORIZATION, &bearer)
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(list, serde_json::json!([task]));
}

#[tokio::test]
async fn register_over_router() {
    let (router, _) = router();

    let (status, body) = send(
        &router,
        Request::builder()
            .method(Method::POST)
            .uri("/register")
            .header("content-type", "application/x-www-form-urlencoded")
            .body(Body::from("username=heidi&password=opensesame"))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["username"], "heidi");
}

#[tokio::test]
async fn missing_token_short_circuits_before_handler() {
    let (router, _) = router();

    let (status, body) = send(
        &router,
        Request::builder()
            .method(Method::POST)
            .uri("/create?title=nope")
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error"], true);
}
