//! Back-office shell: sidebar, theme and tab switching
//!
//! Tabs are plain local state, not routes. Each tab component owns its
//! simulated loading timers and cancels them when it unmounts.

mod content;
mod dashboard;
mod settings;
mod users;

use galerie_core::admin::{effective_tab, AdminTab};
use galerie_core::models::{AuthUser, Role};
use galerie_core::preferences::ColorScheme;
use leptos::logging::error;
use leptos::prelude::*;

use self::content::ContentTab;
use self::dashboard::DashboardTab;
use self::settings::SettingsTab;
use self::users::UsersTab;
use crate::api;
use crate::components::AdminSidebar;
use crate::i18n::use_i18n;
use crate::storage;

#[component]
pub fn AdminShell() -> impl IntoView {
    let i18n = use_i18n();
    let active_tab = RwSignal::new(AdminTab::default());
    let dark_mode = RwSignal::new(storage::load_preferences().color_scheme.is_dark());

    Effect::new(move |_| {
        let scheme = ColorScheme::from_dark(dark_mode.get());
        storage::update_preferences(|prefs| prefs.color_scheme = scheme);
    });

    let session = LocalResource::new(move || async move {
        api::fetch_current_user().await.unwrap_or_else(|err| {
            error!("Failed to load the current user: {}", err);
            None
        })
    });

    let user = Signal::derive(move || session.get().and_then(|user| user.as_ref().cloned()));
    let role = Signal::derive(move || user.get().map(|user| user.role).unwrap_or(Role::Unknown));
    let tab = Memo::new(move |_| effective_tab(active_tab.get(), role.get()));

    view! {
        <div class="admin" class:dark=move || dark_mode.get()>
            <AdminSidebar active_tab role dark_mode />
            <main class="admin-content">
                <header class="admin-header">
                    <h1>{move || i18n.t(tab.get().i18n_key())}</h1>
                    <span class="admin-user">
                        {move || user.get().map(|user: AuthUser| user.display_name().to_string())}
                    </span>
                </header>
                {move || match tab.get() {
                    AdminTab::Dashboard => view! { <DashboardTab /> }.into_any(),
                    AdminTab::Content => view! { <ContentTab /> }.into_any(),
                    AdminTab::Settings => view! { <SettingsTab /> }.into_any(),
                    AdminTab::Users => view! { <UsersTab /> }.into_any(),
                }}
            </main>
        </div>
    }
}
