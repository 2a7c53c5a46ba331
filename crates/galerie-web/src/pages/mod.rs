//! Page components, one per route

mod admin;
mod artistes;
mod contact;
mod details_artiste;
mod details_evenement;
mod evenements;
mod expositions;
mod home;
mod login;
mod not_found;
mod oeuvre_details;

pub use admin::AdminShell;
pub use artistes::Artistes;
pub use contact::Contact;
pub use details_artiste::DetailsArtiste;
pub use details_evenement::DetailsEvenement;
pub use evenements::Evenements;
pub use expositions::Expositions;
pub use home::Home;
pub use login::Login;
pub use not_found::NotFound;
pub use oeuvre_details::OeuvreDetails;

use chrono::NaiveDate;
use galerie_core::endpoints::Resource;
use galerie_core::DetailState;
use leptos::logging::error;
use leptos_router::params::ParamsMap;
use serde::de::DeserializeOwned;

use crate::api;

pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// Numeric `:id` route parameter
pub(crate) fn route_id(params: &ParamsMap) -> Option<u64> {
    params.get("id").and_then(|id| id.trim().parse().ok())
}

/// Fetch one entity for a detail page; every failure ends in "not found"
pub(crate) async fn load_detail<T: DeserializeOwned>(resource: Resource, id: Option<u64>) -> DetailState<T> {
    let Some(id) = id else {
        return DetailState::NotFound;
    };
    let result = api::fetch_detail::<T>(resource, id).await;
    if let Err(err) = &result {
        error!("Failed to load {} {}: {}", resource.segment(), id, err);
    }
    DetailState::from_fetch(result, resource.segment())
}
