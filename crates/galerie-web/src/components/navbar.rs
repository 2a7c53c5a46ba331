//! Public navigation bar

use leptos::prelude::*;
use leptos_router::components::A;

use super::LanguageToggle;
use crate::i18n::use_i18n;

const LINKS: [(&str, &str); 5] = [
    ("/", "nav.home"),
    ("/expositions", "nav.expositions"),
    ("/evenements", "nav.evenements"),
    ("/artistes", "nav.artistes"),
    ("/contact", "nav.contact"),
];

/// Navbar with site links, language toggle and mobile menu
#[component]
pub fn Navbar() -> impl IntoView {
    let i18n = use_i18n();
    let (menu_open, set_menu_open) = signal(false);

    view! {
        <header class="navbar">
            <A href="/" attr:class="navbar-brand">
                {move || i18n.t("site.name")}
            </A>

            <button
                class="hamburger"
                on:click=move |_| set_menu_open.update(|v| *v = !*v)
                aria-label=move || i18n.t("nav.menu")
                aria-expanded=move || menu_open.get().to_string()
            >
                <span class="hamburger-icon">"☰"</span>
            </button>

            <nav class="navbar-links" class:navbar-open=move || menu_open.get()>
                {LINKS
                    .into_iter()
                    .map(|(href, key)| {
                        view! {
                            <A href=href attr:class="navbar-link" on:click=move |_| set_menu_open.set(false)>
                                {move || i18n.t(key)}
                            </A>
                        }
                    })
                    .collect_view()}
                <LanguageToggle />
            </nav>
        </header>
    }
}
