//! Site footer

use chrono::Datelike;
use leptos::prelude::*;
use leptos_router::components::A;

use crate::i18n::use_i18n;

#[component]
pub fn Footer() -> impl IntoView {
    let i18n = use_i18n();
    let year = chrono::Local::now().year();

    view! {
        <footer class="footer">
            <div class="footer-brand">
                <strong>{move || i18n.t("site.name")}</strong>
                <span>{move || i18n.t("site.tagline")}</span>
            </div>
            <nav class="footer-links">
                <A href="/expositions">{move || i18n.t("nav.expositions")}</A>
                <A href="/evenements">{move || i18n.t("nav.evenements")}</A>
                <A href="/artistes">{move || i18n.t("nav.artistes")}</A>
                <A href="/contact">{move || i18n.t("nav.contact")}</A>
            </nav>
            <div class="footer-social">
                <span>{move || i18n.t("footer.follow")}</span>
                <a href="https://www.instagram.com" target="_blank" rel="noopener noreferrer">"Instagram"</a>
                <a href="https://www.facebook.com" target="_blank" rel="noopener noreferrer">"Facebook"</a>
            </div>
            <p class="footer-copyright">
                {move || format!("© {} {}. {}", year, i18n.t("site.name"), i18n.t("footer.rights"))}
            </p>
        </footer>
    }
}
