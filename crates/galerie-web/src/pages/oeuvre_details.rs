//! Artwork detail page with thumbnail strip and zoom lightbox

use galerie_core::assets::PLACEHOLDER_IMAGE;
use galerie_core::endpoints::Resource;
use galerie_core::models::{Availability, Oeuvre};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::{load_detail, route_id};
use crate::api;
use crate::components::{LoadingState, MediasGrid, NotFoundBlock};
use crate::i18n::use_i18n;

#[component]
pub fn OeuvreDetails() -> impl IntoView {
    let params = use_params_map();

    let oeuvre = LocalResource::new(move || {
        let id = params.with(route_id);
        load_detail::<Oeuvre>(Resource::Oeuvre, id)
    });

    view! {
        <div class="page detail-page oeuvre-page">
            <Suspense fallback=|| view! { <LoadingState /> }>
                {move || {
                    oeuvre
                        .get()
                        .map(|state| match state.loaded().cloned() {
                            Some(oeuvre) => view! { <OeuvreDetail oeuvre /> }.into_any(),
                            None => view! {
                                <NotFoundBlock
                                    title_key="oeuvre.not_found"
                                    back_href=Resource::Oeuvre.listing_page()
                                    back_key="oeuvre.back"
                                />
                            }
                                .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

#[component]
fn OeuvreDetail(oeuvre: Oeuvre) -> impl IntoView {
    let i18n = use_i18n();
    let thumbnails = oeuvre.thumbnails(&api::assets());
    let initial = thumbnails
        .first()
        .cloned()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let selected = RwSignal::new(initial);
    let (zoomed, set_zoomed) = signal(false);
    let availability = oeuvre.availability();

    let handle = leptos::leptos_dom::helpers::window_event_listener(leptos::ev::keydown, move |e| {
        if e.key() == "Escape" {
            set_zoomed.set(false);
        }
    });
    on_cleanup(move || handle.remove());

    let title = oeuvre.titre.clone();
    let lightbox_alt = oeuvre.titre.clone();
    let info_rows = [
        ("oeuvre.technique", oeuvre.technique.clone()),
        ("oeuvre.dimensions", oeuvre.dimensions.clone()),
        ("oeuvre.remarque", oeuvre.remarque.clone()),
    ];

    view! {
        <article class="oeuvre-detail">
            <div class="oeuvre-gallery">
                <img
                    class="oeuvre-main-image"
                    src=move || selected.get()
                    alt=title
                    title=move || i18n.t("oeuvre.zoom_hint")
                    on:click=move |_| set_zoomed.update(|z| *z = !*z)
                />
                {if thumbnails.len() > 1 {
                    view! {
                        <div class="thumbnail-strip">
                            {thumbnails
                                .into_iter()
                                .map(|url| {
                                    let target = url.clone();
                                    let current = url.clone();
                                    view! {
                                        <button
                                            class="thumbnail"
                                            class:active=move || selected.get() == current
                                            on:click=move |_| selected.set(target.clone())
                                        >
                                            <img src=url alt="" loading="lazy" />
                                        </button>
                                    }
                                })
                                .collect_view()}
                        </div>
                    }
                        .into_any()
                } else {
                    view! { <p class="detail-meta">{move || i18n.t("oeuvre.no_secondary")}</p> }.into_any()
                }}
            </div>

            <div class="oeuvre-info">
                <h1>{oeuvre.titre.clone()}</h1>
                {oeuvre.artiste.clone().map(|artiste| {
                    let label = artiste.label.clone().unwrap_or_else(|| format!("#{}", artiste.id));
                    view! {
                        <p class="detail-meta">
                            {move || i18n.t("oeuvre.artist")} ": "
                            <A href=Resource::Artiste.page_path(artiste.id)>{label}</A>
                        </p>
                    }
                })}
                {oeuvre.exposition.clone().and_then(|exposition| exposition.label).map(|label| {
                    view! { <p class="detail-meta">{move || i18n.t("oeuvre.exposition")} ": " {label}</p> }
                })}
                <dl class="oeuvre-facts">
                    {info_rows
                        .into_iter()
                        .filter_map(|(key, value)| value.filter(|v| !v.trim().is_empty()).map(|v| (key, v)))
                        .map(|(key, value)| view! {
                            <dt>{move || i18n.t(key)}</dt>
                            <dd>{value}</dd>
                        })
                        .collect_view()}
                </dl>
                <p class="oeuvre-availability">
                    {move || match availability {
                        Availability::Available(stock) => format!("✅ {} ({})", i18n.t("oeuvre.available"), stock),
                        Availability::SoldOut => format!("⛔ {}", i18n.t("oeuvre.sold_out")),
                    }}
                </p>
                {oeuvre.description.clone().map(|text| view! { <p class="detail-description">{text}</p> })}
            </div>

            <MediasGrid medias=oeuvre.medias.clone() />

            <Show when=move || zoomed.get()>
                <div class="lightbox-overlay" on:click=move |_| set_zoomed.set(false)>
                    <img
                        class="lightbox-image"
                        src=move || selected.get()
                        alt=lightbox_alt.clone()
                        on:click=move |e| e.stop_propagation()
                    />
                    <button class="modal-close" aria-label=move || i18n.t("common.close") on:click=move |_| set_zoomed.set(false)>
                        "×"
                    </button>
                </div>
            </Show>
        </article>
    }
}
