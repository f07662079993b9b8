//! Labeled inputs bound to an `EditorState` draft.
//!
//! Each field reads through a `Signal` and writes through a `Callback`, so
//! the record forms stay declarative. `draft_value` / `draft_setter` build
//! those from plain accessor functions.

use leptos::prelude::*;
use records::EditableRecord;

use crate::state::editor::EditorState;

/// Reactive read of one draft field.
pub fn draft_value<R: EditableRecord, T: Send + Sync + 'static>(
    editor: RwSignal<EditorState<R>>,
    read: fn(&R::Draft) -> T,
) -> Signal<T> {
    Signal::derive(move || editor.with(|e| read(&e.draft)))
}

/// Write one draft field through `EditorState::edit_draft`.
pub fn draft_setter<R: EditableRecord, T: Send + Sync + 'static>(
    editor: RwSignal<EditorState<R>>,
    write: fn(&mut R::Draft, T),
) -> Callback<T> {
    Callback::new(move |value: T| editor.update(|e| e.edit_draft(|d| write(d, value))))
}

#[component]
pub fn TextField(
    label: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] required: bool,
    #[prop(optional)] placeholder: &'static str,
) -> impl IntoView {
    view! {
        <label class="form__field">
            <span class="form__label">{label} {required.then_some(" *")}</span>
            <input
                class="form__input"
                type="text"
                placeholder=placeholder
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            />
        </label>
    }
}

#[component]
pub fn TextAreaField(
    label: &'static str,
    value: Signal<String>,
    on_input: Callback<String>,
    #[prop(optional)] required: bool,
    #[prop(default = 4)] rows: u32,
) -> impl IntoView {
    view! {
        <label class="form__field">
            <span class="form__label">{label} {required.then_some(" *")}</span>
            <textarea
                class="form__textarea"
                rows=rows
                prop:value=move || value.get()
                on:input=move |ev| on_input.run(event_target_value(&ev))
            ></textarea>
        </label>
    }
}

#[component]
pub fn CheckboxField(label: &'static str, value: Signal<bool>, on_change: Callback<bool>) -> impl IntoView {
    view! {
        <label class="form__field form__field--checkbox">
            <input
                type="checkbox"
                prop:checked=move || value.get()
                on:change=move |ev| on_change.run(event_target_checked(&ev))
            />
            <span class="form__label">{label}</span>
        </label>
    }
}

/// Integer input; unparsable text leaves the draft unchanged.
#[component]
pub fn OrderField(value: Signal<i32>, on_change: Callback<i32>) -> impl IntoView {
    view! {
        <label class="form__field">
            <span class="form__label">"Display order"</span>
            <input
                class="form__input"
                type="number"
                prop:value=move || value.get().to_string()
                on:input=move |ev| {
                    if let Ok(order) = event_target_value(&ev).trim().parse::<i32>() {
                        on_change.run(order);
                    }
                }
            />
        </label>
    }
}
