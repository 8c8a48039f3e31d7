//! Router-level contract checks that never reach a live database.
//! The pool is built lazily, so handlers that fail before issuing a query
//! exercise the full HTTP surface without PostgreSQL.

use axum::body::{to_bytes, Body};
use axum::http::{Request, StatusCode};
use axum::Router;
use tower::ServiceExt;
use tutorials_api::{common_routes, tutorial_routes, AppState};

fn app() -> Router {
    let pool = sqlx::postgres::PgPoolOptions::new()
        .acquire_timeout(std::time::Duration::from_secs(2))
        .connect_lazy("postgres://127.0.0.1:1/unreachable")
        .expect("lazy pool");
    let state = AppState::new(pool, "public");
    Router::new()
        .merge(common_routes(state.clone()))
        .nest("/api", tutorial_routes(state))
}

async fn body_json(res: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(res.into_body(), usize::MAX).await.expect("body");
    serde_json::from_slice(&bytes).expect("json body")
}

#[tokio::test]
async fn health_answers_without_a_database() {
    let res = app()
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await["status"], "ok");
}

#[tokio::test]
async fn readiness_degrades_when_the_store_is_unreachable() {
    let res = app()
        .oneshot(Request::get("/ready").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body_json(res).await["status"], "degraded");
}

#[tokio::test]
async fn version_reports_package_metadata() {
    let res = app()
        .oneshot(Request::get("/version").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(body_json(res).await["name"], "tutorials-api");
}

#[tokio::test]
async fn malformed_get_id_is_rejected_before_the_store() {
    let res = app()
        .oneshot(
            Request::get("/api/tutorials/not-a-number")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await["error"]["code"], "bad_request");
}

#[tokio::test]
async fn malformed_delete_id_is_rejected_before_the_store() {
    let res = app()
        .oneshot(
            Request::delete("/api/tutorials/1.5")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn malformed_put_id_is_rejected_before_the_store() {
    let res = app()
        .oneshot(
            Request::put("/api/tutorials/abc")
                .header("content-type", "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(res).await["error"]["code"], "bad_request");
}

#[tokio::test]
async fn non_object_create_body_is_rejected() {
    let res = app()
        .oneshot(
            Request::post("/api/tutorials")
                .header("content-type", "application/json")
                .body(Body::from("[1, 2, 3]"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert!(res.status().is_client_error());
}

#[tokio::test]
async fn openapi_document_lists_every_operation() {
    let res = app()
        .oneshot(
            Request::get("/api-docs/openapi.json")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let doc = body_json(res).await;
    let paths = doc["paths"].as_object().expect("paths");
    assert!(paths.contains_key("/api/tutorials"));
    assert!(paths.contains_key("/api/tutorials/{id}"));
    assert!(paths.contains_key("/api/tutorials/published"));
    assert!(doc["paths"]["/api/tutorials"]["post"].is_object());
    assert!(doc["paths"]["/api/tutorials"]["delete"].is_object());
}

#[tokio::test]
async fn unknown_routes_fall_through_to_404() {
    let res = app()
        .oneshot(Request::get("/api/nope").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
