//! Homepage: hero, current exhibitions, the news feed and gallery media

use galerie_core::endpoints::Resource;
use galerie_core::models::{filter_by_status, Exposition, ExpositionStatus};
use leptos::logging::error;
use leptos::prelude::*;
use leptos_router::components::A;

use super::today;
use crate::api;
use crate::components::{ActualitesFeed, ExpositionCard, MediasGrid};
use crate::i18n::use_i18n;

/// Exhibitions featured on the homepage
const FEATURED_LIMIT: usize = 3;

#[component]
pub fn Home() -> impl IntoView {
    let i18n = use_i18n();

    let featured = LocalResource::new(move || async move {
        match api::fetch_all::<Exposition>(Resource::Exposition).await {
            Ok(expositions) => filter_by_status(&expositions, ExpositionStatus::Current, today())
                .into_iter()
                .take(FEATURED_LIMIT)
                .collect::<Vec<_>>(),
            Err(err) => {
                error!("Failed to load expositions: {}", err);
                Vec::new()
            }
        }
    });

    let medias = LocalResource::new(move || async move {
        api::fetch_medias().await.unwrap_or_else(|err| {
            error!("Failed to load medias: {}", err);
            Vec::new()
        })
    });

    view! {
        <div class="page home-page">
            <section class="hero">
                <h1>{move || i18n.t("home.hero_title")}</h1>
                <p>{move || i18n.t("home.hero_subtitle")}</p>
                <A href="/expositions" attr:class="btn btn-primary">{move || i18n.t("home.discover")}</A>
            </section>

            <Suspense fallback=|| ()>
                {move || {
                    featured
                        .get()
                        .map(|expositions| {
                            let expositions = expositions.to_vec();
                            (!expositions.is_empty()).then(|| view! {
                                <section class="featured">
                                    <h2>{move || i18n.t("home.current_expositions")}</h2>
                                    <div class="card-grid">
                                        {expositions
                                            .into_iter()
                                            .map(|exposition| view! { <ExpositionCard exposition /> })
                                            .collect_view()}
                                    </div>
                                </section>
                            })
                        })
                }}
            </Suspense>

            <ActualitesFeed />

            <Suspense fallback=|| ()>
                {move || medias.get().map(|medias| view! { <MediasGrid medias=medias.to_vec() /> })}
            </Suspense>
        </div>
    }
}
