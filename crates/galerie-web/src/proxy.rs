//! Forwarding of API requests to the backend origin

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    body::{to_bytes, Body},
    extract::{Request, State},
    http::{
        header::{ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, CACHE_CONTROL, CONTENT_TYPE, COOKIE, LOCATION, SET_COOKIE},
        HeaderName, StatusCode,
    },
    response::{IntoResponse, Response},
    Json,
};
use galerie_core::endpoints::is_api_path;
use http_body_util::LengthLimitError;
use galerie_core::GalerieConfig;
use serde_json::json;
use thiserror::Error;
use tracing::{debug, warn};

/// Request bodies above this size are rejected with 413 before forwarding
pub const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

const FORWARDED_REQUEST_HEADERS: [HeaderName; 5] =
    [ACCEPT, ACCEPT_LANGUAGE, AUTHORIZATION, CONTENT_TYPE, COOKIE];

const FORWARDED_RESPONSE_HEADERS: [HeaderName; 4] = [CACHE_CONTROL, CONTENT_TYPE, LOCATION, SET_COOKIE];

/// Shared state of the web host
#[derive(Clone)]
pub struct AppState {
    client: reqwest::Client,
    api_origin: Arc<str>,
    dist_dir: PathBuf,
}

impl AppState {
    pub fn new(api_origin: &str, dist_dir: impl Into<PathBuf>, timeout: Duration) -> anyhow::Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self {
            client,
            api_origin: Arc::from(api_origin.trim_end_matches('/')),
            dist_dir: dist_dir.into(),
        })
    }

    pub fn from_config(config: &GalerieConfig) -> anyhow::Result<Self> {
        Self::new(
            config.api_origin_trimmed(),
            config.dist_dir.clone(),
            Duration::from_secs(config.upstream_timeout_secs),
        )
    }

    pub fn api_origin(&self) -> &str {
        &self.api_origin
    }

    pub fn dist_dir(&self) -> &PathBuf {
        &self.dist_dir
    }
}

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("request body exceeds {} bytes", MAX_BODY_BYTES)]
    TooLarge,

    #[error("request body could not be read: {0}")]
    Body(axum::Error),

    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    #[error("invalid upstream response: {0}")]
    Response(#[from] axum::http::Error),
}

impl From<axum::Error> for ProxyError {
    fn from(err: axum::Error) -> Self {
        let over_limit = std::error::Error::source(&err)
            .is_some_and(|source| source.is::<LengthLimitError>());
        if over_limit {
            ProxyError::TooLarge
        } else {
            ProxyError::Body(err)
        }
    }
}

impl ProxyError {
    fn status(&self) -> (StatusCode, &'static str) {
        match self {
            ProxyError::TooLarge => (StatusCode::PAYLOAD_TOO_LARGE, "payload_too_large"),
            ProxyError::Body(_) | ProxyError::Upstream(_) | ProxyError::Response(_) => {
                (StatusCode::BAD_GATEWAY, "bad_gateway")
            }
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let (status, code) = self.status();
        warn!(error = %self, status = status.as_u16(), "proxy request failed");
        (
            status,
            Json(json!({
                "error": code,
                "message": self.to_string(),
            })),
        )
            .into_response()
    }
}

/// Forward `/{resource}(/admin)?/api(/...)?` to the backend, preserving
/// method, query string, body and content type
pub async fn proxy_handler(
    State(state): State<AppState>,
    request: Request,
) -> Result<Response, ProxyError> {
    let path_and_query = request
        .uri()
        .path_and_query()
        .map(|pq| pq.as_str().to_string())
        .unwrap_or_else(|| request.uri().path().to_string());

    if !is_api_path(&path_and_query) {
        return Ok(StatusCode::NOT_FOUND.into_response());
    }

    let url = format!("{}{}", state.api_origin, path_and_query);
    let (parts, body) = request.into_parts();
    let body = to_bytes(body, MAX_BODY_BYTES).await?;

    debug!(method = %parts.method, url = %url, "proxying API request");

    let mut upstream = state.client.request(parts.method, &url);
    for name in FORWARDED_REQUEST_HEADERS {
        if let Some(value) = parts.headers.get(&name) {
            upstream = upstream.header(name, value.clone());
        }
    }
    if !body.is_empty() {
        upstream = upstream.body(body);
    }

    let upstream_response = upstream.send().await?;
    let status = upstream_response.status();

    let mut response = Response::builder().status(status);
    for name in FORWARDED_RESPONSE_HEADERS {
        for value in upstream_response.headers().get_all(&name) {
            response = response.header(name.clone(), value.clone());
        }
    }

    let bytes = upstream_response.bytes().await?;
    Ok(response.body(Body::from(bytes))?)
}
