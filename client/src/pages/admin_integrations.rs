//! Admin table for integration partners.

use leptos::prelude::*;
use records::{Integration, Toggle};

use super::admin::{AdminCtx, delete_confirmed, editor_items, load_records, save_record, toggle_field};
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::integration_form::IntegrationForm;
use crate::state::auth::AuthState;
use crate::state::editor::EditorState;
use crate::state::toast::ToastState;
use crate::util::admin_guard::require_admin;
use crate::util::mounted::Mounted;

#[component]
pub fn AdminIntegrationsPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let editor = RwSignal::new(EditorState::<Integration>::default());
    let ctx = AdminCtx { editor, toasts, mounted: Mounted::install() };

    require_admin(auth);

    let ctx_load = ctx.clone();
    Effect::new(move || {
        if auth.with(|a| a.user.is_some()) {
            load_records(&ctx_load);
        }
    });

    let ctx_save = ctx.clone();
    let on_submit = Callback::new(move |()| save_record(&ctx_save));
    let on_form_cancel = Callback::new(move |()| editor.update(EditorState::close_form));
    let ctx_delete = ctx.clone();
    let on_delete_confirm = Callback::new(move |()| delete_confirmed(&ctx_delete));
    let on_delete_cancel = Callback::new(move |()| editor.update(EditorState::cancel_delete));

    let items = editor_items(editor);
    let rows = move || {
        let ctx = ctx.clone();
        items
            .get()
            .into_iter()
            .map(|item| {
                let id_toggle = item.id.clone();
                let id_edit = item.id.clone();
                let id_delete = item.id.clone();
                let ctx_toggle = ctx.clone();
                let toggling = {
                    let id = item.id.clone();
                    move || editor.with(|e| e.is_toggling(&id, Toggle::Active))
                };
                let deleting = {
                    let id = item.id.clone();
                    move || editor.with(|e| e.is_deleting(&id))
                };
                view! {
                    <tr>
                        <td>{item.display_order}</td>
                        <td>
                            <strong>{item.name.clone()}</strong>
                            {item.website_url.clone().map(|url| view! { <div class="admin-table__sub">{url}</div> })}
                        </td>
                        <td>{item.category.clone()}</td>
                        <td>
                            <button
                                class="badge-toggle"
                                class:badge-toggle--on=item.is_active
                                disabled=toggling
                                on:click=move |_| {
                                    toggle_field(&ctx_toggle, id_toggle.clone(), Toggle::Active, |r: &Integration| r.is_active);
                                }
                            >
                                {if item.is_active { "Active" } else { "Inactive" }}
                            </button>
                        </td>
                        <td class="admin-table__actions">
                            <button class="btn" on:click=move |_| {
                                editor.update(|e| {
                                    e.open_edit(&id_edit);
                                });
                            }>
                                "Edit"
                            </button>
                            <button
                                class="btn btn--danger"
                                disabled=deleting
                                on:click=move |_| editor.update(|e| e.request_delete(&id_delete))
                            >
                                "Delete"
                            </button>
                        </td>
                    </tr>
                }
            })
            .collect_view()
    };

    view! {
        <Show
            when=move || auth.with(|a| a.user.is_some())
            fallback=move || view! { <p class="admin-page__status">{move || if auth.with(|a| a.loading) { "Loading..." } else { "Redirecting to login..." }}</p> }
        >
            <section class="admin-page">
                <header class="admin-page__header">
                    <h1>"Integrations"</h1>
                    <button class="btn btn--primary" on:click=move |_| editor.update(EditorState::open_create)>
                        "+ New integration"
                    </button>
                </header>
                <Show when=move || editor.with(|e| e.error.is_some())>
                    <p class="admin-page__error">{move || editor.with(|e| e.error.clone().unwrap_or_default())}</p>
                </Show>
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Name"</th>
                            <th>"Category"</th>
                            <th>"Status"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{rows.clone()}</tbody>
                </table>
                <Show when=move || editor.with(|e| e.loading)>
                    <p class="admin-page__status">"Loading integrations..."</p>
                </Show>
            </section>
        </Show>
        <Show when=move || editor.with(|e| e.form.is_some())>
            <IntegrationForm editor=editor on_submit=on_submit on_cancel=on_form_cancel/>
        </Show>
        <Show when=move || editor.with(|e| e.pending_delete.is_some())>
            <ConfirmDialog
                title="Delete integration"
                message="This permanently removes the integration. This cannot be undone."
                on_confirm=on_delete_confirm
                on_cancel=on_delete_cancel
            />
        </Show>
    }
}
