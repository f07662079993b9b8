//! Admin create/edit form for a case study.

use leptos::prelude::*;
use records::case_study::{INDUSTRIES, MetricField};
use records::{CaseStudy, CaseStudyDraft, parse_tags};

use super::form_fields::{CheckboxField, OrderField, TextAreaField, TextField, draft_setter, draft_value};
use crate::state::editor::{EditorState, FormMode};

#[component]
pub fn CaseStudyForm(
    editor: RwSignal<EditorState<CaseStudy>>,
    on_submit: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let heading = move || match editor.with(|e| e.form.clone()) {
        Some(FormMode::Edit(_)) => "Edit case study",
        _ => "New case study",
    };
    let saving = move || editor.with(|e| e.saving);
    let validation = move || editor.with(|e| e.validation.as_ref().map(ToString::to_string));

    // Free-text tag input; the draft keeps the parsed list.
    let tags_text = RwSignal::new(editor.with_untracked(|e| e.draft.tags.join(", ")));
    let on_tags = move |ev| {
        let raw = event_target_value(&ev);
        let tags = parse_tags(&raw);
        tags_text.set(raw);
        editor.update(|e| e.edit_draft(|d| d.tags = tags));
    };

    let industry = draft_value(editor, |d: &CaseStudyDraft| d.industry.clone());
    let on_industry = draft_setter(editor, |d: &mut CaseStudyDraft, v: String| d.industry = v);

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_cancel.run(())>
            <form
                class="dialog dialog--wide form"
                on:click=move |ev| ev.stop_propagation()
                on:submit=move |ev: leptos::ev::SubmitEvent| {
                    ev.prevent_default();
                    on_submit.run(());
                }
            >
                <h2>{heading}</h2>
                <div class="form__grid">
                    <TextField
                        label="Client name"
                        required=true
                        value=draft_value(editor, |d| d.client_name.clone())
                        on_input=draft_setter(editor, |d, v| d.client_name = v)
                    />
                    <label class="form__field">
                        <span class="form__label">"Industry *"</span>
                        <select
                            class="form__input"
                            prop:value=move || industry.get()
                            on:change=move |ev| on_industry.run(event_target_value(&ev))
                        >
                            <option value="">"Select an industry"</option>
                            {INDUSTRIES
                                .iter()
                                .map(|name| view! { <option value=*name>{*name}</option> })
                                .collect_view()}
                        </select>
                    </label>
                    <TextField
                        label="Title"
                        required=true
                        value=draft_value(editor, |d| d.title.clone())
                        on_input=draft_setter(editor, |d, v: String| d.set_title(v))
                    />
                    <TextField
                        label="Slug"
                        required=true
                        placeholder="derived-from-title"
                        value=draft_value(editor, |d| d.slug.clone())
                        on_input=draft_setter(editor, |d, v: String| d.set_slug(v))
                    />
                    <TextField
                        label="Image URL"
                        value=draft_value(editor, |d| d.image_url.clone())
                        on_input=draft_setter(editor, |d, v| d.image_url = v)
                    />
                    <label class="form__field">
                        <span class="form__label">"Tags (comma separated)"</span>
                        <input class="form__input" type="text" prop:value=move || tags_text.get() on:input=on_tags/>
                    </label>
                </div>
                <TextAreaField
                    label="Description"
                    required=true
                    rows=3
                    value=draft_value(editor, |d| d.description.clone())
                    on_input=draft_setter(editor, |d, v| d.description = v)
                />
                <MetricsEditor editor=editor/>
                <TextAreaField
                    label="Challenge"
                    value=draft_value(editor, |d| d.challenge.clone())
                    on_input=draft_setter(editor, |d, v| d.challenge = v)
                />
                <TextAreaField
                    label="Solution"
                    value=draft_value(editor, |d| d.solution.clone())
                    on_input=draft_setter(editor, |d, v| d.solution = v)
                />
                <TextAreaField
                    label="Results"
                    value=draft_value(editor, |d| d.results.clone())
                    on_input=draft_setter(editor, |d, v| d.results = v)
                />
                <TextAreaField
                    label="Content (markdown)"
                    rows=8
                    value=draft_value(editor, |d| d.content.clone())
                    on_input=draft_setter(editor, |d, v| d.content = v)
                />
                <div class="form__row">
                    <CheckboxField
                        label="Published"
                        value=draft_value(editor, |d| d.is_published)
                        on_change=draft_setter(editor, |d, v| d.is_published = v)
                    />
                    <CheckboxField
                        label="Featured"
                        value=draft_value(editor, |d| d.featured)
                        on_change=draft_setter(editor, |d, v| d.featured = v)
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

/// Ordered metric rows with add/remove controls.
#[component]
fn MetricsEditor(editor: RwSignal<EditorState<CaseStudy>>) -> impl IntoView {
    let count = move || editor.with(|e| e.draft.metrics.len());

    let metric_input = move |index: usize, field: MetricField, placeholder: &'static str| {
        let value = move || {
            editor.with(|e| {
                e.draft.metrics.get(index).map_or_else(String::new, |m| match field {
                    MetricField::Icon => m.icon.clone(),
                    MetricField::Value => m.value.clone(),
                    MetricField::Label => m.label.clone(),
                })
            })
        };
        view! {
            <input
                class="form__input"
                type="text"
                placeholder=placeholder
                prop:value=value
                on:input=move |ev| {
                    let text = event_target_value(&ev);
                    editor.update(|e| e.edit_draft(|d| d.set_metric(index, field, text)));
                }
            />
        }
    };

    view! {
        <fieldset class="form__metrics">
            <legend>"Metrics"</legend>
            {move || {
                (0..count())
                    .map(|index| {
                        view! {
                            <div class="form__metric-row">
                                {metric_input(index, MetricField::Icon, "icon")}
                                {metric_input(index, MetricField::Value, "40%")}
                                {metric_input(index, MetricField::Label, "faster deploys")}
                                <button
                                    class="btn btn--ghost"
                                    type="button"
                                    aria-label="Remove metric"
                                    on:click=move |_| editor.update(|e| e.edit_draft(|d| d.remove_metric(index)))
                                >
                                    "×"
                                </button>
                            </div>
                        }
                    })
                    .collect_view()
            }}
            <button
                class="btn"
                type="button"
                on:click=move |_| editor.update(|e| e.edit_draft(CaseStudyDraft::add_metric))
            >
                "+ Add metric"
            </button>
        </fieldset>
    }
}
