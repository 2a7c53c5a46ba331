//! API client for the gallery backend
//!
//! Requests go to same-origin paths; the Axum host (or any reverse proxy)
//! forwards them to the backend.

use galerie_core::endpoints::{actualites_path, Resource, CURRENT_USER_PATH, LOGOUT_PATH, MEDIAS_PATH};
use galerie_core::models::{decode_detail, Actualite, AuthUser, ListPayload, Media};
use galerie_core::{assets::DEFAULT_BASE_URL, ApiError, AssetResolver};
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;

/// Origin used to resolve relative asset paths, fixed at compile time
pub const BASE_URL: &str = match option_env!("GALERIE_BASE_URL") {
    Some(url) => url,
    None => DEFAULT_BASE_URL,
};

pub fn assets() -> AssetResolver {
    AssetResolver::new(BASE_URL)
}

async fn send(request: Request) -> Result<Response, ApiError> {
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        return Err(ApiError::Http {
            status: response.status(),
        });
    }
    Ok(response)
}

async fn get_text(path: &str) -> Result<String, ApiError> {
    let request = Request::get(path)
        .header("Accept", "application/json")
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    let response = send(request).await?;
    response
        .text()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Fetch a collection; bare arrays and paginated envelopes are both accepted
pub async fn fetch_list<T: DeserializeOwned>(path: &str) -> Result<Vec<T>, ApiError> {
    let body = get_text(path).await?;
    if body.trim().is_empty() {
        return Ok(Vec::new());
    }
    let payload: ListPayload<T> = serde_json::from_str(&body)?;
    Ok(payload.into_inner())
}

pub async fn fetch_all<T: DeserializeOwned>(resource: Resource) -> Result<Vec<T>, ApiError> {
    fetch_list(&resource.list_path()).await
}

/// Fetch one entity; a 404 or an empty body yields `Ok(None)`
pub async fn fetch_detail<T: DeserializeOwned>(resource: Resource, id: u64) -> Result<Option<T>, ApiError> {
    match get_text(&resource.detail_path(id)).await {
        Ok(body) => Ok(decode_detail(&body)?),
        Err(err) if err.is_not_found() => Ok(None),
        Err(err) => Err(err),
    }
}

pub async fn fetch_actualites(page: u32) -> Result<Vec<Actualite>, ApiError> {
    fetch_list(&actualites_path(page)).await
}

pub async fn fetch_medias() -> Result<Vec<Media>, ApiError> {
    fetch_list(MEDIAS_PATH).await
}

/// Current back-office user; 401/403 mean "no session"
pub async fn fetch_current_user() -> Result<Option<AuthUser>, ApiError> {
    match get_text(CURRENT_USER_PATH).await {
        Ok(body) => Ok(decode_detail(&body)?),
        Err(ApiError::Http { status: 401 | 403 }) => Ok(None),
        Err(err) => Err(err),
    }
}

pub async fn logout() -> Result<(), ApiError> {
    let request = Request::post(LOGOUT_PATH)
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))?;
    send(request).await.map(|_| ())
}
