//! Users tab, only reachable by super-admins

use galerie_core::admin::mock_users;
use leptos::prelude::*;

use crate::i18n::use_i18n;

#[component]
pub fn UsersTab() -> impl IntoView {
    let i18n = use_i18n();

    view! {
        <section class="admin-users">
            <table class="table">
                <thead>
                    <tr>
                        <th>{move || i18n.t("admin.name")}</th>
                        <th>{move || i18n.t("admin.email")}</th>
                        <th>{move || i18n.t("admin.role")}</th>
                        <th>{move || i18n.t("admin.last_login")}</th>
                        <th>{move || i18n.t("admin.actions")}</th>
                    </tr>
                </thead>
                <tbody>
                    {mock_users()
                        .into_iter()
                        .map(|user| view! {
                            <tr>
                                <td>{user.name}</td>
                                <td>{user.email}</td>
                                <td>
                                    <span class=format!("badge role-{}", user.role.code().to_lowercase())>
                                        {user.role.code()}
                                    </span>
                                </td>
                                <td>{user.last_login}</td>
                                <td class="row-actions">
                                    <button class="btn btn-small">{move || i18n.t("admin.edit")}</button>
                                </td>
                            </tr>
                        })
                        .collect_view()}
                </tbody>
            </table>
        </section>
    }
}
