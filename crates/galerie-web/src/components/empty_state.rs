//! Empty state block for lists and relations with nothing to show

use leptos::prelude::*;

use crate::i18n::use_i18n;

#[component]
pub fn EmptyState(
    /// Translation key of the message
    message_key: &'static str,
    #[prop(optional)] icon: Option<&'static str>,
) -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <div class="empty-state">
            <span class="empty-state-icon" aria-hidden="true">{icon.unwrap_or("🖼️")}</span>
            <p class="empty-state-description">{move || i18n.t(message_key)}</p>
        </div>
    }
}
