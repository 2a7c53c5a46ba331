//! "Not found" branch of the detail pages

use leptos::prelude::*;
use leptos_router::components::A;

use crate::i18n::use_i18n;

/// Not-found message with a link back to the matching listing page
#[component]
pub fn NotFoundBlock(
    title_key: &'static str,
    back_href: &'static str,
    back_key: &'static str,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="not-found-block">
            <h1>{move || i18n.t(title_key)}</h1>
            <A href=back_href attr:class="btn btn-primary">
                "← " {move || i18n.t(back_key)}
            </A>
        </div>
    }
}
