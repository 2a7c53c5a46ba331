//! Dashboard tab with placeholder analytics

use std::time::Duration;

use galerie_core::admin::{format_count, format_duration, DashboardStats, MOCK_LATENCY_MS};
use galerie_core::AbortHandle;
use leptos::prelude::*;

use crate::i18n::use_i18n;

#[component]
fn StatCard(label_key: &'static str, value: String, icon: &'static str) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="stats-card">
            <span class="stats-card-icon">{icon}</span>
            <div>
                <div class="stats-card-label">{move || i18n.t(label_key)}</div>
                <div class="stats-card-value">{value}</div>
            </div>
        </div>
    }
}

#[component]
pub fn DashboardTab() -> impl IntoView {
    let i18n = use_i18n();
    let stats = RwSignal::new(None::<DashboardStats>);
    let abort = AbortHandle::new();

    // Stands in for the analytics request
    let timer_abort = abort.clone();
    set_timeout(
        move || {
            timer_abort.run(|| stats.set(Some(DashboardStats::mock())));
        },
        Duration::from_millis(MOCK_LATENCY_MS),
    );
    on_cleanup(move || abort.abort());

    view! {
        <section class="admin-dashboard">
            {move || match stats.get() {
                None => view! { <p class="loading">{move || i18n.t("admin.loading")}</p> }.into_any(),
                Some(stats) => {
                    let bars = stats.normalized_daily();
                    view! {
                        <div class="stats-grid">
                            <StatCard label_key="admin.visitors" value=format_count(stats.visitors) icon="👁" />
                            <StatCard label_key="admin.page_views" value=format_count(stats.page_views) icon="📄" />
                            <StatCard
                                label_key="admin.avg_duration"
                                value=format_duration(stats.avg_session_secs)
                                icon="⏱"
                            />
                            <StatCard
                                label_key="admin.bounce_rate"
                                value=format!("{:.1} %", stats.bounce_rate * 100.0)
                                icon="↩"
                            />
                        </div>

                        <div class="panel">
                            <h3>{move || i18n.t("admin.daily_visitors")}</h3>
                            <div class="bar-chart">
                                {bars
                                    .into_iter()
                                    .zip(stats.daily_visitors.clone())
                                    .map(|(height, count)| view! {
                                        <div class="bar" style=format!("height: {}%", height.max(2)) title=count.to_string()></div>
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="panel-row">
                            <div class="panel">
                                <h3>{move || i18n.t("admin.top_pages")}</h3>
                                <table class="table">
                                    <tbody>
                                        {stats
                                            .top_pages
                                            .iter()
                                            .map(|(page, views)| view! {
                                                <tr>
                                                    <td><code>{page.clone()}</code></td>
                                                    <td class="numeric">{format_count(*views)}</td>
                                                </tr>
                                            })
                                            .collect_view()}
                                    </tbody>
                                </table>
                            </div>

                            <div class="panel">
                                <h3>{move || i18n.t("admin.traffic_sources")}</h3>
                                {stats
                                    .traffic_sources
                                    .iter()
                                    .map(|(source, share)| {
                                        let percent = share * 100.0;
                                        view! {
                                            <div class="source-row">
                                                <span>{source.clone()}</span>
                                                <div class="source-bar">
                                                    <div class="source-bar-fill" style=format!("width: {:.0}%", percent)></div>
                                                </div>
                                                <span class="numeric">{format!("{:.0} %", percent)}</span>
                                            </div>
                                        }
                                    })
                                    .collect_view()}
                            </div>
                        </div>

                        <div class="panel">
                            <h3>{move || i18n.t("admin.recent_activity")}</h3>
                            <ul class="activity-list">
                                {stats
                                    .recent_activity
                                    .iter()
                                    .map(|entry| view! { <li>{entry.clone()}</li> })
                                    .collect_view()}
                            </ul>
                        </div>
                    }
                        .into_any()
                }
            }}
        </section>
    }
}
