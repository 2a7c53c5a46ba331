//! Loading indicator

use leptos::prelude::*;

use crate::i18n::use_i18n;

#[component]
pub fn LoadingState() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="loading-state" role="status" aria-live="polite">
            <div class="spinner"></div>
            <p>{move || i18n.t("common.loading")}</p>
        </div>
    }
}
