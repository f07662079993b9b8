//! Admin create/edit form for an integration partner.

use leptos::prelude::*;
use records::Integration;

use super::form_fields::{CheckboxField, OrderField, TextAreaField, TextField, draft_setter, draft_value};
use crate::state::editor::{EditorState, FormMode};

#[component]
pub fn IntegrationForm(
    editor: RwSignal<EditorState<Integration>>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let heading = move || match editor.with(|e| e.form.clone()) {
        Some(FormMode::Edit(_)) => "Edit integration",
        _ => "New integration",
    };
    let saving = move || editor.with(|e| e.saving);
    let validation = move || editor.with(|e| e.validation.as_ref().map(ToString::to_string));

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form
                class="dialog form"
                on:click=move |ev| ev.stop_propagation()
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                <h2>{heading}</h2>
                <TextField
                    label="Name"
                    required=true
                    value=draft_value(editor, |d| d.name.clone())
                    on_input=draft_setter(editor, |d, v| d.name = v)
                />
                <TextField
                    label="Category"
                    required=true
                    placeholder="ITSM, Cloud, Monitoring..."
                    value=draft_value(editor, |d| d.category.clone())
                    on_input=draft_setter(editor, |d, v| d.category = v)
                />
                <TextAreaField
                    label="Description"
                    rows=3
                    value=draft_value(editor, |d| d.description.clone())
                    on_input=draft_setter(editor, |d, v| d.description = v)
                />
                <TextField
                    label="Logo URL"
                    value=draft_value(editor, |d| d.logo_url.clone())
                    on_input=draft_setter(editor, |d, v| d.logo_url = v)
                />
                <TextField
                    label="Website URL"
                    value=draft_value(editor, |d| d.website_url.clone())
                    on_input=draft_setter(editor, |d, v| d.website_url = v)
                />
                <div class="form__row">
                    <CheckboxField
                        label="Active"
                        value=draft_value(editor, |d| d.is_active)
                        on_change=draft_setter(editor, |d, v| d.is_active = v)
                    />
                    <OrderField
                        value=draft_value(editor, |d| d.display_order)
                        on_change=draft_setter(editor, |d, v| d.display_order = v)
                    />
                </div>
                <Show when=move || validation().is_some()>
                    <p class="form__error">{move || validation().unwrap_or_default()}</p>
                </Show>
                <div class="dialog__actions">
                    <button class="btn" type="button" on:click=move |_| on_cancel.run(()) disabled=saving>
                        "Cancel"
                    </button>
                    <button class="btn btn--primary" type="submit" disabled=saving>
                        {move || if saving() { "Saving..." } else { "Save" }}
                    </button>
                </div>
            </form>
        </div>
    }
}
