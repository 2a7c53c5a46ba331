//! Fallback page for unmatched routes

use leptos::prelude::*;
use leptos_router::components::A;

use crate::i18n::use_i18n;

#[component]
pub fn NotFound() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="page not-found-page">
            <h1>"404"</h1>
            <h2>{move || i18n.t("notfound.title")}</h2>
            <p>{move || i18n.t("notfound.message")}</p>
            <A href="/" attr:class="btn btn-primary">{move || i18n.t("notfound.home")}</A>
        </div>
    }
}
