//! Artist detail page

use galerie_core::assets::PLACEHOLDER_PORTRAIT;
use galerie_core::dates::{format_lifespan, format_range};
use galerie_core::display::{needs_toggle, visible_items, TourContent, ARTWORK_PREVIEW_LIMIT};
use galerie_core::endpoints::Resource;
use galerie_core::models::{Artiste, ExpositionEntry, Oeuvre};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use super::{load_detail, route_id};
use crate::api;
use crate::components::{EmptyState, LoadingState, MediasGrid, NotFoundBlock, OeuvreCard};
use crate::i18n::use_i18n;

#[component]
pub fn DetailsArtiste() -> impl IntoView {
    let params = use_params_map();

    let artiste = LocalResource::new(move || {
        let id = params.with(route_id);
        load_detail::<Artiste>(Resource::Artiste, id)
    });

    view! {
        <div class="page detail-page artiste-page">
            <Suspense fallback=|| view! { <LoadingState /> }>
                {move || {
                    artiste
                        .get()
                        .map(|state| match state.loaded().cloned() {
                            Some(artiste) => view! { <ArtisteDetail artiste /> }.into_any(),
                            None => view! {
                                <NotFoundBlock
                                    title_key="artistes.not_found"
                                    back_href=Resource::Artiste.listing_page()
                                    back_key="artistes.back"
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
fn ArtisteDetail(artiste: Artiste) -> impl IntoView {
    let i18n = use_i18n();
    let (tour, set_tour) = signal(None::<TourContent>);

    let photo = artiste
        .photo
        .as_deref()
        .map(str::trim)
        .filter(|path| !path.is_empty())
        .map(|path| api::assets().resolve(path));
    let lifespan = format_lifespan(artiste.date_naissance.as_deref(), artiste.date_deces.as_deref());
    let bio = artiste.bio.clone();
    let expositions = artiste.combined_expositions();

    let handle = leptos::leptos_dom::helpers::window_event_listener(leptos::ev::keydown, move |e| {
        if e.key() == "Escape" {
            set_tour.set(None);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <article class="artiste-detail">
            <header class="detail-header">
                {match photo {
                    Some(src) => view! { <img class="artiste-photo" src=src alt=artiste.nom.clone() /> }.into_any(),
                    None => view! {
                        <figure class="artiste-photo artiste-photo-missing">
                            <img src=PLACEHOLDER_PORTRAIT alt="" />
                            <figcaption>{move || i18n.t("artistes.no_photo")}</figcaption>
                        </figure>
                    }
                        .into_any(),
                }}
                <div class="detail-heading">
                    <h1>{artiste.nom.clone()}</h1>
                    {lifespan.map(|years| view! { <p class="detail-meta">{years}</p> })}
                    {artiste.pays.clone().map(|pays| {
                        view! { <p class="detail-meta">{move || i18n.t("artistes.country")} ": " {pays}</p> }
                    })}
                </div>
            </header>

            <section class="artiste-bio">
                <p>
                    {move || {
                        let fallback = i18n.t("artistes.no_bio");
                        bio.as_deref()
                            .map(str::trim)
                            .filter(|text| !text.is_empty())
                            .unwrap_or(fallback)
                            .to_string()
                    }}
                </p>
            </section>

            <ExpositionList expositions set_tour />
            <ArtworkGrid oeuvres=artiste.oeuvres.clone() />
            <MediasGrid medias=artiste.medias.clone() />

            {move || tour.get().map(|content| view! { <TourModal content on_close=move || set_tour.set(None) /> })}
        </article>
    }
}

#[component]
fn ExpositionList(expositions: Vec<ExpositionEntry>, set_tour: WriteSignal<Option<TourContent>>) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section class="artiste-expositions">
            <h2>{move || i18n.t("artistes.expositions")}</h2>
            {if expositions.is_empty() {
                view! { <EmptyState message_key="artistes.no_expositions" /> }.into_any()
            } else {
                view! {
                    <ul class="exposition-list">
                        {expositions
                            .into_iter()
                            .map(|entry| {
                                let debut = entry.exposition.date_debut.clone();
                                let fin = entry.exposition.date_fin.clone();
                                let content = TourContent::for_exposition(&entry.exposition);
                                view! {
                                    <li class="exposition-entry" class:principal=entry.principal>
                                        <div>
                                            <strong>{entry.exposition.titre.clone()}</strong>
                                            {entry.principal.then(|| view! {
                                                <span class="badge badge-accent">
                                                    {move || i18n.t("expositions.principal")}
                                                </span>
                                            })}
                                            <p class="detail-meta">
                                                {move || format_range(debut.as_deref(), fin.as_deref(), i18n.lang()).unwrap_or_default()}
                                            </p>
                                        </div>
                                        <button
                                            class="btn btn-secondary"
                                            on:click=move |_| set_tour.set(Some(content.clone()))
                                        >
                                            {move || i18n.t("expositions.virtual_tour")}
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()}
                    </ul>
                }
                    .into_any()
            }}
        </section>
    }
}

/// Artwork grid truncated to the preview limit behind a toggle
#[component]
fn ArtworkGrid(oeuvres: Vec<Oeuvre>) -> impl IntoView {
    let i18n = use_i18n();
    let (show_all, set_show_all) = signal(false);
    let total = oeuvres.len();
    let oeuvres = StoredValue::new(oeuvres);

    let visible = move || {
        oeuvres.with_value(|list| visible_items(list, show_all.get(), ARTWORK_PREVIEW_LIMIT).to_vec())
    };

    view! {
        <section class="artiste-oeuvres">
            <h2>{move || i18n.t("artistes.oeuvres")} " (" {total} ")"</h2>
            {if total == 0 {
                view! { <EmptyState message_key="artistes.no_oeuvres" /> }.into_any()
            } else {
                view! {
                    <div class="card-grid">
                        {move || visible()
                            .into_iter()
                            .map(|oeuvre| view! { <OeuvreCard oeuvre /> })
                            .collect_view()}
                    </div>
                    <Show when=move || needs_toggle(total, ARTWORK_PREVIEW_LIMIT)>
                        <button class="btn btn-secondary" on:click=move |_| set_show_all.update(|v| *v = !*v)>
                            {move || {
                                if show_all.get() {
                                    i18n.t("artistes.show_less")
                                } else {
                                    i18n.t("artistes.show_all")
                                }
                            }}
                        </button>
                    </Show>
                }
                    .into_any()
            }}
        </section>
    }
}

#[component]
fn TourModal(content: TourContent, on_close: impl Fn() + 'static + Copy + Send + Sync) -> impl IntoView {
    let i18n = use_i18n();
    let title = content.title().to_string();

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal-content tour-modal" on:click=move |e| e.stop_propagation()>
                <div class="modal-header">
                    <h2>{move || i18n.t("tour.title")} " - " {title}</h2>
                    <button class="modal-close" aria-label=move || i18n.t("common.close") on:click=move |_| on_close()>
                        "×"
                    </button>
                </div>
                <div class="modal-body">
                    {match content {
                        TourContent::Frame { url, title } => view! {
                            <iframe class="tour-frame" src=url title=title allowfullscreen=true></iframe>
                        }
                            .into_any(),
                        TourContent::Unavailable { .. } => view! {
                            <p class="tour-unavailable">{move || i18n.t("tour.unavailable")}</p>
                        }
                            .into_any(),
                    }}
                </div>
            </div>
        </div>
    }
}
