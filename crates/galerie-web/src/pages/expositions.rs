//! Exhibitions listing, split into current, upcoming and past

use galerie_core::endpoints::Resource;
use galerie_core::models::{filter_by_status, Exposition, ExpositionStatus};
use leptos::logging::error;
use leptos::prelude::*;

use super::today;
use crate::api;
use crate::components::{EmptyState, ExpositionCard, LoadingState};
use crate::i18n::use_i18n;

const STATUSES: [ExpositionStatus; 3] = [
    ExpositionStatus::Current,
    ExpositionStatus::Upcoming,
    ExpositionStatus::Past,
];

#[component]
pub fn Expositions() -> impl IntoView {
    let i18n = use_i18n();
    let status = RwSignal::new(ExpositionStatus::Current);

    let expositions = LocalResource::new(move || async move {
        api::fetch_all::<Exposition>(Resource::Exposition)
            .await
            .unwrap_or_else(|err| {
                error!("Failed to load expositions: {}", err);
                Vec::new()
            })
    });

    let visible = Memo::new(move |_| {
        expositions
            .get()
            .map(|all| filter_by_status(&all, status.get(), today()))
            .unwrap_or_default()
    });

    view! {
        <div class="page expositions-page">
            <div class="page-header">
                <h1>{move || i18n.t("expositions.title")}</h1>
                <div class="tabs" role="tablist">
                    {STATUSES
                        .into_iter()
                        .map(|tab| {
                            view! {
                                <button
                                    class="tab"
                                    role="tab"
                                    class:active=move || status.get() == tab
                                    aria-selected=move || (status.get() == tab).to_string()
                                    on:click=move |_| status.set(tab)
                                >
                                    {move || i18n.t(tab.i18n_key())}
                                </button>
                            }
                        })
                        .collect_view()}
                </div>
            </div>

            <Suspense fallback=|| view! { <LoadingState /> }>
                {move || {
                    expositions
                        .get()
                        .map(|_| {
                            let list = visible.get();
                            if list.is_empty() {
                                view! { <EmptyState message_key="expositions.empty" /> }.into_any()
                            } else {
                                view! {
                                    <div class="card-grid">
                                        {list
                                            .into_iter()
                                            .map(|exposition| view! { <ExpositionCard exposition /> })
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
