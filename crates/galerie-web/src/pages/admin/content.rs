//! Content tab: per-type tables with placeholder rows

use std::time::Duration;

use galerie_core::admin::{ContentRow, ContentType, MOCK_LATENCY_MS};
use galerie_core::AbortHandle;
use leptos::prelude::*;

use crate::i18n::use_i18n;

#[component]
pub fn ContentTab() -> impl IntoView {
    let i18n = use_i18n();
    let kind = RwSignal::new(ContentType::default());
    let rows = RwSignal::new(None::<Vec<ContentRow>>);
    // Bumped on every selection so an older timer cannot overwrite newer rows
    let generation = StoredValue::new(0u64);
    let abort = AbortHandle::new();

    let load = {
        let abort = abort.clone();
        move |selected: ContentType| {
            generation.update_value(|g| *g += 1);
            let ticket = generation.get_value();
            rows.set(None);

            let abort = abort.clone();
            set_timeout(
                move || {
                    abort.run(|| {
                        if generation.get_value() == ticket {
                            rows.set(Some(selected.mock_rows()));
                        }
                    });
                },
                Duration::from_millis(MOCK_LATENCY_MS),
            );
        }
    };

    load(kind.get_untracked());
    on_cleanup(move || abort.abort());

    let on_change = move |ev: leptos::ev::Event| {
        if let Some(selected) = ContentType::from_slug(&event_target_value(&ev)) {
            kind.set(selected);
            load(selected);
        }
    };

    view! {
        <section class="admin-content-tab">
            <div class="toolbar">
                <label>
                    {move || i18n.t("admin.content_type")}
                    <select on:change=on_change>
                        {ContentType::ALL
                            .into_iter()
                            .map(|option| view! {
                                <option
                                    value=option.slug()
                                    selected=move || kind.get() == option
                                >
                                    {option.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>
                <button class="btn btn-primary">"+ " {move || i18n.t("admin.add")}</button>
            </div>

            {move || match rows.get() {
                None => view! { <p class="loading">{move || i18n.t("admin.loading")}</p> }.into_any(),
                Some(rows) => {
                    let columns = kind.get_untracked().columns();
                    view! {
                        <table class="table">
                            <thead>
                                <tr>
                                    {columns.iter().map(|column| view! { <th>{*column}</th> }).collect_view()}
                                    <th>{move || i18n.t("admin.actions")}</th>
                                </tr>
                            </thead>
                            <tbody>
                                {rows
                                    .into_iter()
                                    .map(|row| view! {
                                        <tr data-id=row.id.to_string()>
                                            {row.cells.into_iter().map(|cell| view! { <td>{cell}</td> }).collect_view()}
                                            <td class="row-actions">
                                                <button class="btn btn-small">{move || i18n.t("admin.edit")}</button>
                                                <button class="btn btn-small btn-danger">
                                                    {move || i18n.t("admin.delete")}
                                                </button>
                                            </td>
                                        </tr>
                                    })
                                    .collect_view()}
                            </tbody>
                        </table>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
