//! Contact page: gallery details and a message form
//!
//! The backend has no contact endpoint; the form opens the visitor's mail
//! client with the message prefilled.

use leptos::prelude::*;

use crate::i18n::use_i18n;

const GALLERY_EMAIL: &str = "contact@galerie-lumiere.fr";
const GALLERY_PHONE: &str = "+33 4 78 00 00 00";
const GALLERY_ADDRESS: &str = "12 rue des Arts, 69001 Lyon";

fn mailto_link(name: &str, email: &str, message: &str) -> String {
    let subject = format!("Contact - {}", name.trim());
    let body = format!("{}\n\n{} <{}>", message.trim(), name.trim(), email.trim());
    format!(
        "mailto:{}?subject={}&body={}",
        GALLERY_EMAIL,
        String::from(js_sys::encode_uri_component(&subject)),
        String::from(js_sys::encode_uri_component(&body))
    )
}

#[component]
pub fn Contact() -> impl IntoView {
    let i18n = use_i18n();
    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let (sent, set_sent) = signal(false);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let link = mailto_link(&name.get_untracked(), &email.get_untracked(), &message.get_untracked());
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&link);
        }
        set_sent.set(true);
    };

    view! {
        <div class="page contact-page">
            <div class="page-header">
                <h1>{move || i18n.t("contact.title")}</h1>
                <p>{move || i18n.t("contact.intro")}</p>
            </div>

            <div class="contact-layout">
                <dl class="contact-details">
                    <dt>{move || i18n.t("contact.address")}</dt>
                    <dd>{GALLERY_ADDRESS}</dd>
                    <dt>{move || i18n.t("contact.phone")}</dt>
                    <dd><a href=format!("tel:{}", GALLERY_PHONE.replace(' ', ""))>{GALLERY_PHONE}</a></dd>
                    <dt>{move || i18n.t("contact.email")}</dt>
                    <dd><a href=format!("mailto:{}", GALLERY_EMAIL)>{GALLERY_EMAIL}</a></dd>
                    <dt>{move || i18n.t("contact.hours")}</dt>
                    <dd>{move || i18n.t("contact.hours_value")}</dd>
                </dl>

                <form class="contact-form" on:submit=on_submit>
                    <label>
                        {move || i18n.t("contact.name")}
                        <input type="text" required=true bind:value=name />
                    </label>
                    <label>
                        {move || i18n.t("contact.email")}
                        <input type="email" required=true bind:value=email />
                    </label>
                    <label>
                        {move || i18n.t("contact.message")}
                        <textarea
                            rows="6"
                            required=true
                            prop:value=move || message.get()
                            on:input=move |e| message.set(event_target_value(&e))
                        ></textarea>
                    </label>
                    <button type="submit" class="btn btn-primary">{move || i18n.t("contact.send")}</button>
                    <Show when=move || sent.get()>
                        <p class="form-success">{move || i18n.t("contact.sent")}</p>
                    </Show>
                </form>
            </div>
        </div>
    }
}
