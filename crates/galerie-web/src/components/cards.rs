//! Summary cards used by the listing grids

use galerie_core::assets::{PLACEHOLDER_IMAGE, PLACEHOLDER_PORTRAIT};
use galerie_core::dates::format_range;
use galerie_core::endpoints::Resource;
use galerie_core::models::{Artiste, Availability, Evenement, Exposition, Oeuvre};
use leptos::prelude::*;
use leptos_router::components::A;

use crate::api;
use crate::i18n::use_i18n;

#[component]
pub fn ExpositionCard(exposition: Exposition) -> impl IntoView {
    let i18n = use_i18n();
    let image = api::assets().resolve_or(exposition.image.as_deref(), PLACEHOLDER_IMAGE);
    let debut = exposition.date_debut.clone();
    let fin = exposition.date_fin.clone();
    let tour = exposition.virtual_tour().map(str::to_string);

    view! {
        <article class="card exposition-card">
            <img class="card-image" src=image alt=exposition.titre.clone() loading="lazy" />
            <div class="card-body">
                <h3 class="card-title">{exposition.titre.clone()}</h3>
                <p class="card-dates">
                    {move || format_range(debut.as_deref(), fin.as_deref(), i18n.lang()).unwrap_or_default()}
                </p>
                {exposition.artiste_principal.clone().map(|artiste| {
                    let label = artiste.label.clone().unwrap_or_default();
                    view! {
                        <A href=Resource::Artiste.page_path(artiste.id) attr:class="card-link">
                            {label}
                        </A>
                    }
                })}
                {exposition.description.clone().map(|text| view! { <p class="card-text">{text}</p> })}
                {tour.map(|url| {
                    view! {
                        <a class="btn btn-secondary" href=url target="_blank" rel="noopener noreferrer">
                            {move || i18n.t("expositions.virtual_tour")}
                        </a>
                    }
                })}
            </div>
        </article>
    }
}

#[component]
pub fn ArtisteCard(artiste: Artiste) -> impl IntoView {
    let i18n = use_i18n();
    let photo = api::assets().resolve_or(artiste.photo.as_deref(), PLACEHOLDER_PORTRAIT);

    view! {
        <A href=Resource::Artiste.page_path(artiste.id) attr:class="card artiste-card">
            <img class="card-image" src=photo alt=artiste.nom.clone() loading="lazy" />
            <div class="card-body">
                <h3 class="card-title">{artiste.nom.clone()}</h3>
                {artiste.pays.clone().map(|pays| {
                    view! {
                        <p class="card-meta">{move || i18n.t("artistes.country")} ": " {pays}</p>
                    }
                })}
            </div>
        </A>
    }
}

#[component]
pub fn EvenementCard(evenement: Evenement) -> impl IntoView {
    let i18n = use_i18n();
    let image = api::assets().resolve_or(evenement.image.as_deref(), PLACEHOLDER_IMAGE);
    let debut = evenement.date_debut.clone();
    let fin = evenement.date_fin.clone();

    view! {
        <A href=Resource::Evenement.page_path(evenement.id) attr:class="card evenement-card">
            <img class="card-image" src=image alt=evenement.titre.clone() loading="lazy" />
            <div class="card-body">
                <h3 class="card-title">{evenement.titre.clone()}</h3>
                <p class="card-dates">
                    {move || format_range(debut.as_deref(), fin.as_deref(), i18n.lang()).unwrap_or_default()}
                </p>
                {evenement.lieu.clone().map(|lieu| view! { <p class="card-meta">"📍 " {lieu}</p> })}
            </div>
        </A>
    }
}

#[component]
pub fn OeuvreCard(oeuvre: Oeuvre) -> impl IntoView {
    let i18n = use_i18n();
    let image = oeuvre
        .main_image(&api::assets())
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string());
    let sold_out = oeuvre.availability() == Availability::SoldOut;

    view! {
        <A href=Resource::Oeuvre.page_path(oeuvre.id) attr:class="card oeuvre-card">
            <img class="card-image" src=image alt=oeuvre.titre.clone() loading="lazy" />
            <div class="card-body">
                <h3 class="card-title">{oeuvre.titre.clone()}</h3>
                {oeuvre.technique.clone().map(|technique| view! { <p class="card-meta">{technique}</p> })}
                <Show when=move || sold_out>
                    <span class="badge badge-muted">{move || i18n.t("oeuvre.sold_out")}</span>
                </Show>
            </div>
        </A>
    }
}
