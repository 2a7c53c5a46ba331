//! Language toggle cycling Français → English → Español

use leptos::prelude::*;

use crate::i18n::use_i18n;

#[component]
pub fn LanguageToggle() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <button
            class="lang-toggle"
            title=move || format!("{} ({})", i18n.t("lang.toggle"), i18n.lang().next().label())
            aria-label=move || i18n.t("lang.toggle")
            on:click=move |_| i18n.cycle()
        >
            {move || i18n.lang().code().to_uppercase()}
        </button>
    }
}
