//! Events listing: upcoming first, then past

use galerie_core::endpoints::Resource;
use galerie_core::models::{partition_by_date, Evenement};
use leptos::logging::error;
use leptos::prelude::*;

use super::today;
use crate::api;
use crate::components::{EmptyState, EvenementCard, LoadingState};
use crate::i18n::use_i18n;

#[component]
pub fn Evenements() -> impl IntoView {
    let i18n = use_i18n();

    let evenements = LocalResource::new(move || async move {
        api::fetch_all::<Evenement>(Resource::Evenement)
            .await
            .unwrap_or_else(|err| {
                error!("Failed to load evenements: {}", err);
                Vec::new()
            })
    });

    let section = move |title_key: &'static str, list: Vec<Evenement>| {
        (!list.is_empty()).then(|| view! {
            <section class="evenements-section">
                <h2>{move || i18n.t(title_key)}</h2>
                <div class="card-grid">
                    {list
                        .into_iter()
                        .map(|evenement| view! { <EvenementCard evenement /> })
                        .collect_view()}
                </div>
            </section>
        })
    };

    view! {
        <div class="page evenements-page">
            <div class="page-header">
                <h1>{move || i18n.t("evenements.title")}</h1>
            </div>

            <Suspense fallback=|| view! { <LoadingState /> }>
                {move || {
                    evenements
                        .get()
                        .map(|all| {
                            if all.is_empty() {
                                return view! { <EmptyState message_key="evenements.empty" /> }.into_any();
                            }
                            let (upcoming, past) = partition_by_date(&all, today());
                            view! {
                                {section("evenements.upcoming", upcoming)}
                                {section("evenements.past", past)}
                            }
                                .into_any()
                        })
                }}
            </Suspense>
        </div>
    }
}
