//! "Médias" grid: images inline, audio/video players, documents as links

use galerie_core::models::{Media, MediaKind};
use leptos::prelude::*;

use super::EmptyState;
use crate::api;
use crate::i18n::use_i18n;

#[component]
pub fn MediasGrid(medias: Vec<Media>) -> impl IntoView {
    let i18n = use_i18n();
    let resolver = api::assets();

    let items: Vec<(Media, String)> = medias
        .into_iter()
        .filter_map(|media| {
            let url = resolver.resolve(media.source()?);
            Some((media, url))
        })
        .collect();

    view! {
        <section class="medias">
            <h2>{move || i18n.t("medias.title")}</h2>
            {if items.is_empty() {
                view! { <EmptyState message_key="medias.empty" icon="🎞️" /> }.into_any()
            } else {
                view! {
                    <div class="medias-grid">
                        {items
                            .into_iter()
                            .map(|(media, url)| view! { <MediaTile media url /> })
                            .collect_view()}
                    </div>
                }
                    .into_any()
            }}
        </section>
    }
}

#[component]
fn MediaTile(media: Media, url: String) -> impl IntoView {
    let i18n = use_i18n();
    let title = media.titre.clone().unwrap_or_default();

    let body = match media.kind() {
        MediaKind::Image => view! { <img src=url alt=title.clone() loading="lazy" /> }.into_any(),
        MediaKind::Video => view! { <video src=url controls=true preload="metadata"></video> }.into_any(),
        MediaKind::Audio => view! { <audio src=url controls=true preload="none"></audio> }.into_any(),
        MediaKind::Document | MediaKind::Link => view! {
            <a class="media-link" href=url target="_blank" rel="noopener noreferrer">
                "📄 " {move || i18n.t("medias.open")}
            </a>
        }
            .into_any(),
    };

    view! {
        <figure class="media-tile">
            {body}
            {(!title.is_empty()).then(|| view! { <figcaption>{title}</figcaption> })}
        </figure>
    }
}
