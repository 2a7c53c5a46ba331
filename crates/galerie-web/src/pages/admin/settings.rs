//! Settings tab; the form is not wired to an endpoint

use galerie_core::i18n::Lang;
use leptos::prelude::*;

use crate::i18n::use_i18n;

#[component]
pub fn SettingsTab() -> impl IntoView {
    let i18n = use_i18n();
    let site_title = RwSignal::new(String::from("Galerie"));
    let contact_email = RwSignal::new(String::from("contact@galerie.example"));
    let maintenance = RwSignal::new(false);

    view! {
        <section class="admin-settings">
            <form class="settings-form" on:submit=|ev| ev.prevent_default()>
                <label>
                    {move || i18n.t("admin.site_title")}
                    <input
                        type="text"
                        prop:value=move || site_title.get()
                        on:input=move |ev| site_title.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    {move || i18n.t("admin.contact_email")}
                    <input
                        type="email"
                        prop:value=move || contact_email.get()
                        on:input=move |ev| contact_email.set(event_target_value(&ev))
                    />
                </label>
                <label>
                    {move || i18n.t("admin.default_language")}
                    <select>
                        {Lang::ALL
                            .into_iter()
                            .map(|lang| view! {
                                <option value=lang.code() selected=move || i18n.lang() == lang>
                                    {lang.label()}
                                </option>
                            })
                            .collect_view()}
                    </select>
                </label>
                <label class="checkbox">
                    <input
                        type="checkbox"
                        prop:checked=move || maintenance.get()
                        on:change=move |_| maintenance.update(|on| *on = !*on)
                    />
                    {move || i18n.t("admin.maintenance")}
                </label>
                <button type="submit" class="btn btn-primary">{move || i18n.t("admin.save")}</button>
            </form>
        </section>
    }
}
