//! Admin table for case studies with create/edit/delete and publish toggles.

use leptos::prelude::*;
use records::{CaseStudy, Toggle};

use super::admin::{AdminCtx, delete_confirmed, editor_items, load_records, save_record, toggle_field};
use crate::components::case_study_form::CaseStudyForm;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::state::auth::AuthState;
use crate::state::editor::EditorState;
use crate::state::toast::ToastState;
use crate::util::admin_guard::require_admin;
use crate::util::mounted::Mounted;

#[component]
pub fn AdminCaseStudiesPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let toasts = expect_context::<RwSignal<ToastState>>();
    let editor = RwSignal::new(EditorState::<CaseStudy>::default());
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
            .map(|study| {
                let id = study.id.clone();
                let (id_publish, id_feature, id_edit, id_delete) = (id.clone(), id.clone(), id.clone(), id);
                let (ctx_publish, ctx_feature) = (ctx.clone(), ctx.clone());
                let publishing = {
                    let id = id_publish.clone();
                    move || editor.with(|e| e.is_toggling(&id, Toggle::Published))
                };
                let featuring = {
                    let id = id_feature.clone();
                    move || editor.with(|e| e.is_toggling(&id, Toggle::Featured))
                };
                let deleting = {
                    let id = id_delete.clone();
                    move || editor.with(|e| e.is_deleting(&id))
                };
                view! {
                    <tr>
                        <td>{study.display_order}</td>
                        <td>
                            <strong>{study.title.clone()}</strong>
                            <div class="admin-table__sub">{format!("/{}", study.slug)}</div>
                        </td>
                        <td>{study.client_name.clone()}</td>
                        <td>{study.industry.clone()}</td>
                        <td>
                            <button
                                class="badge-toggle"
                                class:badge-toggle--on=study.is_published
                                disabled=publishing
                                on:click=move |_| {
                                    toggle_field(&ctx_publish, id_publish.clone(), Toggle::Published, |r: &CaseStudy| r.is_published);
                                }
                            >
                                {if study.is_published { "Published" } else { "Draft" }}
                            </button>
                        </td>
                        <td>
                            <button
                                class="badge-toggle"
                                class:badge-toggle--on=study.featured
                                disabled=featuring
                                on:click=move |_| {
                                    toggle_field(&ctx_feature, id_feature.clone(), Toggle::Featured, |r: &CaseStudy| r.featured);
                                }
                            >
                                {if study.featured { "★ Featured" } else { "☆" }}
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
                    <h1>"Case studies"</h1>
                    <button class="btn btn--primary" on:click=move |_| editor.update(EditorState::open_create)>
                        "+ New case study"
                    </button>
                </header>
                <Show when=move || editor.with(|e| e.error.is_some())>
                    <p class="admin-page__error">{move || editor.with(|e| e.error.clone().unwrap_or_default())}</p>
                </Show>
                <table class="admin-table">
                    <thead>
                        <tr>
                            <th>"#"</th>
                            <th>"Title"</th>
                            <th>"Client"</th>
                            <th>"Industry"</th>
                            <th>"Status"</th>
                            <th>"Featured"</th>
                            <th></th>
                        </tr>
                    </thead>
                    <tbody>{rows.clone()}</tbody>
                </table>
                <Show when=move || editor.with(|e| e.loading)>
                    <p class="admin-page__status">"Loading case studies..."</p>
                </Show>
            </section>
        </Show>
        <Show when=move || editor.with(|e| e.form.is_some())>
            <CaseStudyForm editor=editor on_submit=on_submit on_cancel=on_form_cancel/>
        </Show>
        <Show when=move || editor.with(|e| e.pending_delete.is_some())>
            <ConfirmDialog
                title="Delete case study"
                message="This permanently removes the case study. This cannot be undone."
                on_confirm=on_delete_confirm
                on_cancel=on_delete_cancel
            />
        </Show>
    }
}
