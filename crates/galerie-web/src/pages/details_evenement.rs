//! Event detail page

use galerie_core::assets::PLACEHOLDER_IMAGE;
use galerie_core::dates::format_range;
use galerie_core::endpoints::Resource;
use galerie_core::models::{Evenement, Reference};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_params_map;

use super::{load_detail, route_id};
use crate::api;
use crate::components::{LoadingState, MediasGrid, NotFoundBlock, OeuvreCard};
use crate::i18n::use_i18n;

#[component]
pub fn DetailsEvenement() -> impl IntoView {
    let params = use_params_map();

    // The endpoint answers with a bare object or a one-element array
    let evenement = LocalResource::new(move || {
        let id = params.with(route_id);
        load_detail::<Evenement>(Resource::Evenement, id)
    });

    view! {
        <div class="page detail-page evenement-page">
            <Suspense fallback=|| view! { <LoadingState /> }>
                {move || {
                    evenement
                        .get()
                        .map(|state| match state.loaded().cloned() {
                            Some(evenement) => view! { <EvenementDetail evenement /> }.into_any(),
                            None => view! {
                                <NotFoundBlock
                                    title_key="evenements.not_found"
                                    back_href=Resource::Evenement.listing_page()
                                    back_key="evenements.back"
                                />
                            }
                                .into_any(),
                        })
                }}
            </Suspense>
        </div>
    }
}

fn reference_label(reference: &Reference) -> String {
    reference
        .label
        .clone()
        .unwrap_or_else(|| format!("#{}", reference.id))
}

#[component]
fn EvenementDetail(evenement: Evenement) -> impl IntoView {
    let i18n = use_i18n();
    let image = api::assets().resolve_or(evenement.image.as_deref(), PLACEHOLDER_IMAGE);
    let debut = evenement.date_debut.clone();
    let fin = evenement.date_fin.clone();
    let site = evenement
        .site_url
        .clone()
        .filter(|url| !url.trim().is_empty());

    view! {
        <article class="evenement-detail">
            <img class="detail-image" src=image alt=evenement.titre.clone() />
            <div class="detail-heading">
                <h1>{evenement.titre.clone()}</h1>
                <p class="detail-meta">
                    {move || format_range(debut.as_deref(), fin.as_deref(), i18n.lang()).unwrap_or_default()}
                </p>
                {evenement.lieu.clone().map(|lieu| {
                    view! {
                        <p class="detail-meta">{move || i18n.t("evenements.location")} ": " {lieu}</p>
                    }
                })}
                {site.map(|url| {
                    view! {
                        <a class="btn btn-secondary" href=url target="_blank" rel="noopener noreferrer">
                            {move || i18n.t("evenements.website")} " ↗"
                        </a>
                    }
                })}
            </div>

            {evenement.description.clone().map(|text| view! { <p class="detail-description">{text}</p> })}

            {(!evenement.artistes.is_empty()).then(|| {
                let artistes = evenement.artistes.clone();
                view! {
                    <section class="evenement-artistes">
                        <h2>{move || i18n.t("evenements.artists")}</h2>
                        <ul class="chip-list">
                            {artistes
                                .into_iter()
                                .map(|artiste| {
                                    let href = Resource::Artiste.page_path(artiste.id);
                                    let label = reference_label(&artiste);
                                    view! {
                                        <li>
                                            <A href=href attr:class="chip">
                                                {label}
                                            </A>
                                        </li>
                                    }
                                })
                                .collect_view()}
                        </ul>
                    </section>
                }
            })}

            {(!evenement.oeuvres.is_empty()).then(|| {
                let oeuvres = evenement.oeuvres.clone();
                view! {
                    <section class="evenement-oeuvres">
                        <h2>{move || i18n.t("evenements.oeuvres")}</h2>
                        <div class="card-grid">
                            {oeuvres
                                .into_iter()
                                .map(|oeuvre| view! { <OeuvreCard oeuvre /> })
                                .collect_view()}
                        </div>
                    </section>
                }
            })}

            <MediasGrid medias=evenement.medias.clone() />
        </article>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_label() {
        let named = Reference {
            id: 3,
            label: Some("Jon Berg".into()),
        };
        assert_eq!(reference_label(&named), "Jon Berg");
        assert_eq!(reference_label(&Reference { id: 9, label: None }), "#9");
    }
}
