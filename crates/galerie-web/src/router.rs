//! Web router using Axum
//!
//! API paths are forwarded to the backend; everything else is served from
//! the Trunk bundle, with `index.html` answering unknown paths so the
//! client-side router can take over.

use axum::{
    routing::{any, get},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::proxy::{proxy_handler, AppState};

/// Create the web router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let index = state.dist_dir().join("index.html");
    let bundle = ServeDir::new(state.dist_dir()).fallback(ServeFile::new(index));

    Router::new()
        .route("/healthz", get(health_handler))
        .route("/{resource}/api", any(proxy_handler))
        .route("/{resource}/api/{*rest}", any(proxy_handler))
        .route("/{resource}/admin/api", any(proxy_handler))
        .route("/{resource}/admin/api/{*rest}", any(proxy_handler))
        .fallback_service(bundle)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
