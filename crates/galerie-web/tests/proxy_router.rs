//! Integration tests for the web host: health, static bundle, API proxy

use std::time::Duration;

use axum::body::{Body, Bytes};
use axum::extract::Request as UpstreamRequest;
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use galerie_web::proxy::MAX_BODY_BYTES;
use galerie_web::{create_router, AppState};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tower::ServiceExt;

fn bundle_dir() -> TempDir {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<html><body>galerie</body></html>").unwrap();
    std::fs::create_dir_all(dir.path().join("img")).unwrap();
    std::fs::write(dir.path().join("img/placeholder.svg"), "<svg></svg>").unwrap();
    dir
}

/// Backend double that echoes what it received
async fn echo(request: UpstreamRequest) -> axum::response::Response {
    let method = request.method().to_string();
    let uri = request.uri().to_string();
    let content_type = request
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body: Bytes = request.into_body().collect().await.unwrap().to_bytes();

    axum::response::Response::builder()
        .status(StatusCode::OK)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::CACHE_CONTROL, "no-store")
        .body(Body::from(
            json!({
                "method": method,
                "uri": uri,
                "content_type": content_type,
                "body": String::from_utf8_lossy(&body),
            })
            .to_string(),
        ))
        .unwrap()
}

async fn spawn_upstream() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let app = Router::new().fallback(echo);
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

fn router(api_origin: &str, dist: &TempDir) -> Router {
    let state = AppState::new(api_origin, dist.path(), Duration::from_secs(5)).unwrap();
    create_router(state)
}

async fn json_body(response: axum::response::Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

async fn text_body(response: axum::response::Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

#[tokio::test]
async fn test_health_endpoint() {
    let dist = bundle_dir();
    let response = router("http://127.0.0.1:1", &dist)
        .oneshot(Request::builder().uri("/healthz").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn test_unknown_page_falls_back_to_index() {
    let dist = bundle_dir();
    let response = router("http://127.0.0.1:1", &dist)
        .oneshot(Request::builder().uri("/artistes/42").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert!(text_body(response).await.contains("galerie"));
}

#[tokio::test]
async fn test_static_file_is_served() {
    let dist = bundle_dir();
    let response = router("http://127.0.0.1:1", &dist)
        .oneshot(
            Request::builder()
                .uri("/img/placeholder.svg")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(text_body(response).await, "<svg></svg>");
}

#[tokio::test]
async fn test_detail_request_is_forwarded() {
    let dist = bundle_dir();
    let upstream = spawn_upstream().await;

    let response = router(&upstream, &dist)
        .oneshot(Request::builder().uri("/artistes/api/5").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get(header::CACHE_CONTROL).unwrap(),
        "no-store"
    );
    let body = json_body(response).await;
    assert_eq!(body["method"], "GET");
    assert_eq!(body["uri"], "/artistes/api/5");
}

#[tokio::test]
async fn test_query_string_is_preserved() {
    let dist = bundle_dir();
    let upstream = spawn_upstream().await;

    let response = router(&upstream, &dist)
        .oneshot(
            Request::builder()
                .uri("/actualites/api?page=2")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    let body = json_body(response).await;
    assert_eq!(body["uri"], "/actualites/api?page=2");
}

#[tokio::test]
async fn test_admin_post_keeps_body_and_content_type() {
    let dist = bundle_dir();
    let upstream = spawn_upstream().await;

    let response = router(&upstream, &dist)
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/expositions/admin/api")
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(r#"{"titre":"Lumières"}"#))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["method"], "POST");
    assert_eq!(body["uri"], "/expositions/admin/api");
    assert_eq!(body["content_type"], "application/json");
    assert_eq!(body["body"], r#"{"titre":"Lumières"}"#);
}

#[tokio::test]
async fn test_unreachable_backend_is_bad_gateway() {
    let dist = bundle_dir();
    let response = router("http://127.0.0.1:1", &dist)
        .oneshot(Request::builder().uri("/medias/api").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_GATEWAY);
    let body = json_body(response).await;
    assert_eq!(body["error"], "bad_gateway");
}

#[tokio::test]
async fn test_oversized_body_is_rejected() {
    let dist = bundle_dir();
    let upstream = spawn_upstream().await;

    let response = router(&upstream, &dist)
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/medias/admin/api")
                .header(header::CONTENT_TYPE, "application/octet-stream")
                .body(Body::from(vec![0u8; MAX_BODY_BYTES + 1]))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);
    let body = json_body(response).await;
    assert_eq!(body["error"], "payload_too_large");
}

#[tokio::test]
async fn test_body_at_limit_is_forwarded() {
    let dist = bundle_dir();
    let upstream = spawn_upstream().await;

    let response = router(&upstream, &dist)
        .oneshot(
            Request::builder()
                .method(Method::PUT)
                .uri("/oeuvres/admin/api/7")
                .header(header::CONTENT_TYPE, "text/plain")
                .body(Body::from("a".repeat(MAX_BODY_BYTES)))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = json_body(response).await;
    assert_eq!(body["method"], "PUT");
    assert_eq!(body["body"].as_str().map(str::len), Some(MAX_BODY_BYTES));
}
