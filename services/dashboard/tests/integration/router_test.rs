use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use sea_orm::{DatabaseBackend, MockDatabase};
use tower::ServiceExt as _;

use academy_core::middleware::REQUEST_ID_HEADER;
use academy_dashboard::router::build_router;
use academy_dashboard::state::AppState;

/// Router backed by a mock connection with no queued results: any request
/// that reaches storage fails, so these tests cover paths that must not.
fn router() -> axum::Router {
    let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
    build_router(AppState { db })
}

async fn json_body(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn should_answer_liveness_with_request_id() {
    let response = router()
        .oneshot(Request::get("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert!(response.headers().contains_key(REQUEST_ID_HEADER));
}

#[tokio::test]
async fn should_list_four_named_queries() {
    let response = router()
        .oneshot(Request::get("/insights").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = json_body(response).await;
    let slugs: Vec<&str> = json
        .as_array()
        .unwrap()
        .iter()
        .map(|q| q["slug"].as_str().unwrap())
        .collect();
    assert_eq!(
        slugs,
        vec![
            "students-per-course",
            "enrollment-status-distribution",
            "active-enrollments-per-level",
            "courses-per-teacher",
        ]
    );
}

#[tokio::test]
async fn should_return_404_for_unknown_named_query() {
    let response = router()
        .oneshot(
            Request::get("/insights/drop-everything")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(json_body(response).await["kind"], "UNKNOWN_QUERY");
}

#[tokio::test]
async fn should_return_empty_list_for_blank_search() {
    let response = router()
        .oneshot(Request::get("/students?q=%20").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(json_body(response).await, serde_json::json!([]));
}

#[tokio::test]
async fn should_reject_student_without_email() {
    let body = serde_json::json!({
        "first_name": "Dana",
        "last_name": "Scully",
        "email": "   ",
        "course_ids": [1, 2],
    });
    let response = router()
        .oneshot(
            Request::post("/students")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = json_body(response).await;
    assert_eq!(json["kind"], "VALIDATION");
    assert_eq!(json["message"], "missing required fields: email");
}

#[tokio::test]
async fn should_reject_malformed_overview_query_string() {
    let response = router()
        .oneshot(
            Request::get("/courses/overview?teacher-id=abc")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(json_body(response).await["kind"], "INVALID_QUERY_STRING");
}
