//! Artists listing with search

use galerie_core::endpoints::Resource;
use galerie_core::models::Artiste;
use galerie_core::search::{filter_artistes, sort_artistes};
use leptos::logging::error;
use leptos::prelude::*;

use crate::api;
use crate::components::{ArtisteCard, EmptyState, LoadingState};
use crate::i18n::use_i18n;

#[component]
pub fn Artistes() -> impl IntoView {
    let i18n = use_i18n();
    let (search, set_search) = signal(String::new());

    let artistes = LocalResource::new(move || async move {
        let mut artistes = api::fetch_all::<Artiste>(Resource::Artiste)
            .await
            .unwrap_or_else(|err| {
                error!("Failed to load artistes: {}", err);
                Vec::new()
            });
        sort_artistes(&mut artistes);
        artistes
    });

    let filtered = Memo::new(move |_| {
        artistes
            .get()
            .map(|all| filter_artistes(&all, &search.get()))
            .unwrap_or_default()
    });

    view! {
        <div class="page artistes-page">
            <div class="page-header">
                <h1>{move || i18n.t("artistes.title")}</h1>
                <input
                    type="search"
                    class="search-input"
                    placeholder=move || i18n.t("artistes.search")
                    prop:value=move || search.get()
                    on:input=move |e| set_search.set(event_target_value(&e))
                />
            </div>

            <Suspense fallback=|| view! { <LoadingState /> }>
                {move || {
                    artistes
                        .get()
                        .map(|_| {
                            let list = filtered.get();
                            if list.is_empty() {
                                view! { <EmptyState message_key="artistes.empty" icon="🔍" /> }.into_any()
                            } else {
                                view! {
                                    <div class="card-grid">
                                        {list
                                            .into_iter()
                                            .map(|artiste| view! { <ArtisteCard artiste /> })
                                            .collect_view()}
                                    </div>
                                }
                                    .into_any()
                            }
                        })
                }}
            </Suspense>
        </div>
    }
}
