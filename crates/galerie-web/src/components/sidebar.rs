//! Back-office sidebar

use galerie_core::admin::{sidebar_links, AdminTab};
use galerie_core::models::Role;
use leptos::logging::error;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::components::A;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

use crate::api;
use crate::i18n::use_i18n;

/// Sidebar with the tabs visible to `role`, the theme toggle and logout
///
/// `dark_mode` belongs to the admin shell; the sidebar only flips it.
#[component]
pub fn AdminSidebar(
    active_tab: RwSignal<AdminTab>,
    #[prop(into)] role: Signal<Role>,
    dark_mode: RwSignal<bool>,
) -> impl IntoView {
    let i18n = use_i18n();
    let navigate = use_navigate();

    let logout = move |_| {
        let navigate = navigate.clone();
        spawn_local(async move {
            if let Err(err) = api::logout().await {
                error!("Logout request failed: {}", err);
            }
            navigate("/login", NavigateOptions::default());
        });
    };

    view! {
        <aside class="sidebar admin-sidebar">
            <div class="sidebar-title">{move || i18n.t("admin.title")}</div>

            <nav class="nav">
                <ul class="nav-list">
                    {move || {
                        sidebar_links(role.get())
                            .into_iter()
                            .map(|link| {
                                view! {
                                    <li class="nav-item">
                                        <button
                                            class="sidebar-link"
                                            class:active=move || active_tab.get() == link.tab
                                            on:click=move |_| active_tab.set(link.tab)
                                        >
                                            <span class="sidebar-link-icon">{link.icon}</span>
                                            <span class="sidebar-link-label">
                                                {move || i18n.t(link.label_key)}
                                            </span>
                                        </button>
                                    </li>
                                }
                            })
                            .collect_view()
                    }}
                </ul>
            </nav>

            <div class="sidebar-footer">
                <button class="sidebar-link" on:click=move |_| dark_mode.update(|dark| *dark = !*dark)>
                    {move || {
                        if dark_mode.get() {
                            format!("☀️ {}", i18n.t("admin.light_mode"))
                        } else {
                            format!("🌙 {}", i18n.t("admin.dark_mode"))
                        }
                    }}
                </button>
                <A href="/" attr:class="sidebar-link">
                    "← " {move || i18n.t("admin.back_to_site")}
                </A>
                <button class="sidebar-link sidebar-logout" on:click=logout>
                    "⏻ " {move || i18n.t("admin.logout")}
                </button>
            </div>
        </aside>
    }
}
