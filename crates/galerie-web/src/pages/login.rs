//! Landing page after logout
//!
//! Sign-in itself is handled by the external session provider.

use leptos::prelude::*;
use leptos_router::components::A;

use crate::i18n::use_i18n;

#[component]
pub fn Login() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="page login-page">
            <h1>{move || i18n.t("login.title")}</h1>
            <p>{move || i18n.t("login.message")}</p>
            <div class="login-actions">
                <A href="/admin" attr:class="btn btn-primary">{move || i18n.t("admin.title")}</A>
                <A href="/" attr:class="btn btn-secondary">{move || i18n.t("admin.back_to_site")}</A>
            </div>
        </div>
    }
}
