//! Main Leptos App component with SPA router

use leptos::logging::warn;
use leptos::prelude::*;
use leptos_router::{
    components::{Route, Router, Routes},
    hooks::use_location,
    path,
};

use crate::components::{Footer, Navbar};
use crate::i18n::provide_i18n;
use crate::pages::{
    AdminShell, Artistes, Contact, DetailsArtiste, DetailsEvenement, Evenements, Expositions, Home,
    Login, NotFound, OeuvreDetails,
};

/// The back-office renders its own sidebar instead of the public chrome
fn is_backoffice(pathname: &str) -> bool {
    pathname == "/admin" || pathname.starts_with("/admin/")
}

/// Main App component
#[component]
pub fn App() -> impl IntoView {
    // Language is chosen once for the whole session
    let i18n = provide_i18n();

    Effect::new(move |_| {
        let lang = i18n.lang();
        if let Some(root) = document().document_element() {
            if let Err(err) = root.set_attribute("lang", lang.code()) {
                warn!("Failed to set document language: {:?}", err);
            }
        }
    });

    view! {
        <Router>
            <Shell />
        </Router>
    }
}

#[component]
fn Shell() -> impl IntoView {
    let location = use_location();
    let public = move || !is_backoffice(&location.pathname.get());

    view! {
        <div class="site">
            <Show when=public>
                <Navbar />
            </Show>
            <main class="content">
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=Home />
                    <Route path=path!("/expositions") view=Expositions />
                    <Route path=path!("/evenements") view=Evenements />
                    <Route path=path!("/evenements/:id") view=DetailsEvenement />
                    <Route path=path!("/artistes") view=Artistes />
                    <Route path=path!("/artistes/:id") view=DetailsArtiste />
                    <Route path=path!("/oeuvres/:id") view=OeuvreDetails />
                    <Route path=path!("/contact") view=Contact />
                    <Route path=path!("/login") view=Login />
                    <Route path=path!("/admin") view=AdminShell />
                </Routes>
            </main>
            <Show when=public>
                <Footer />
            </Show>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_backoffice_paths() {
        assert!(is_backoffice("/admin"));
        assert!(!is_backoffice("/administration-des-oeuvres"));
        assert!(!is_backoffice("/artistes/5"));
    }
}
