//! Request orchestration shared by the admin collection pages.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each helper raises the matching in-flight flag on `EditorState`, issues
//! the REST call, and applies the outcome only while the page is still
//! mounted. Outcomes are reported through toasts; successful mutations
//! re-fetch the list so the table shows server state.

#[cfg(test)]
#[path = "admin_test.rs"]
mod admin_test;

use leptos::prelude::*;
use records::{EditableRecord, Toggle};

use crate::state::editor::EditorState;
use crate::state::toast::ToastState;
#[cfg(feature = "hydrate")]
use crate::state::{
    editor::{SaveAttempt, SaveRequest},
    toast::ToastKind,
};
use crate::util::mounted::Mounted;

/// Page-scoped handles every helper needs.
pub struct AdminCtx<R: EditableRecord> {
    pub editor: RwSignal<EditorState<R>>,
    pub toasts: RwSignal<ToastState>,
    pub mounted: Mounted,
}

impl<R: EditableRecord> Clone for AdminCtx<R> {
    fn clone(&self) -> Self {
        Self { editor: self.editor, toasts: self.toasts, mounted: self.mounted.clone() }
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn capitalized(noun: &str) -> String {
    let mut chars = noun.chars();
    chars.next().map_or_else(String::new, |first| first.to_uppercase().chain(chars).collect())
}

/// Toast text for a successful mutation, e.g. "Case study deleted".
#[cfg(any(test, feature = "hydrate"))]
fn outcome_message(noun: &str, verb: &str) -> String {
    format!("{} {verb}", capitalized(noun))
}

#[cfg(any(test, feature = "hydrate"))]
fn toggle_verb(toggle: Toggle, now_on: bool) -> &'static str {
    match (toggle, now_on) {
        (Toggle::Published, true) => "published",
        (Toggle::Published, false) => "unpublished",
        (Toggle::Featured, true) => "featured",
        (Toggle::Featured, false) => "unfeatured",
        (Toggle::Active, true) => "activated",
        (Toggle::Active, false) => "deactivated",
    }
}

/// The table rows alone. Draft edits leave the rows equal, so the table
/// does not re-render while the form is being typed into.
pub fn editor_items<R: EditableRecord>(editor: RwSignal<EditorState<R>>) -> Memo<Vec<R>> {
    Memo::new(move |_| editor.with(|e| e.items.clone()))
}

/// Fetch the full list. No retry; failure is a toast plus the page error line.
/// A call made while a fetch is running queues one more fetch after it.
pub fn load_records<R: EditableRecord>(ctx: &AdminCtx<R>) {
    if !ctx.editor.try_update(EditorState::begin_load).unwrap_or(false) {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        let ctx = ctx.clone();
        leptos::task::spawn_local(async move {
            loop {
                let result = crate::net::api::list_records::<R>().await;
                if !ctx.mounted.is_mounted() {
                    return;
                }
                if let Some(Err(e)) = ctx.editor.try_update(|ed| ed.finish_load(result)) {
                    log::warn!("list {} failed: {e}", R::COLLECTION);
                    crate::components::toast::show_toast(
                        ctx.toasts,
                        ToastKind::Error,
                        format!("Could not load {}s: {e}", R::NOUN),
                    );
                }
                // A refresh requested mid-flight may postdate the rows just applied.
                if !ctx.editor.try_update(EditorState::take_reload).unwrap_or(false) {
                    return;
                }
            }
        });
    }
}

/// Validate and submit the open form.
pub fn save_record<R: EditableRecord>(ctx: &AdminCtx<R>) {
    #[cfg(feature = "hydrate")]
    {
        let request = match ctx.editor.try_update(EditorState::begin_save) {
            Some(SaveAttempt::Ready(request)) => request,
            Some(SaveAttempt::Invalid(e)) => {
                crate::components::toast::show_toast(ctx.toasts, ToastKind::Error, e.to_string());
                return;
            }
            Some(SaveAttempt::Blocked) | None => return,
        };
        let ctx = ctx.clone();
        leptos::task::spawn_local(async move {
            let (result, verb) = match request {
                SaveRequest::Create(draft) => (crate::net::api::create_record::<R>(&draft).await, "created"),
                SaveRequest::Update { id, draft } => (crate::net::api::update_record::<R>(&id, &draft).await, "saved"),
            };
            if !ctx.mounted.is_mounted() {
                return;
            }
            match ctx.editor.try_update(|ed| ed.finish_save(result)) {
                Some(Ok(())) => {
                    crate::components::toast::show_toast(ctx.toasts, ToastKind::Success, outcome_message(R::NOUN, verb));
                    load_records(&ctx);
                }
                Some(Err(e)) => crate::components::toast::show_toast(ctx.toasts, ToastKind::Error, e),
                None => {}
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = ctx;
    }
}

/// Delete the row awaiting confirmation.
pub fn delete_confirmed<R: EditableRecord>(ctx: &AdminCtx<R>) {
    let Some(id) = ctx.editor.try_update(EditorState::confirm_delete).flatten() else {
        return;
    };
    #[cfg(feature = "hydrate")]
    {
        let ctx = ctx.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::delete_record::<R>(&id).await;
            if !ctx.mounted.is_mounted() {
                return;
            }
            match ctx.editor.try_update(|ed| ed.finish_delete(&id, result)) {
                Some(Ok(())) => {
                    crate::components::toast::show_toast(
                        ctx.toasts,
                        ToastKind::Success,
                        outcome_message(R::NOUN, "deleted"),
                    );
                    load_records(&ctx);
                }
                Some(Err(e)) => crate::components::toast::show_toast(ctx.toasts, ToastKind::Error, e),
                None => {}
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = id;
    }
}

/// Flip one boolean column, then re-fetch the list.
pub fn toggle_field<R: EditableRecord>(ctx: &AdminCtx<R>, id: String, toggle: Toggle, now_on: impl Fn(&R) -> bool + 'static) {
    if !ctx.editor.try_update(|ed| ed.begin_toggle(&id, toggle)).unwrap_or(false) {
        return;
    }
    #[cfg(feature = "hydrate")]
    {
        let ctx = ctx.clone();
        leptos::task::spawn_local(async move {
            let result = crate::net::api::toggle_record::<R>(&id, toggle).await;
            if !ctx.mounted.is_mounted() {
                return;
            }
            let verb = result.as_ref().ok().map(|r| toggle_verb(toggle, now_on(r)));
            match ctx.editor.try_update(|ed| ed.finish_toggle(&id, toggle, result)) {
                Some(Ok(())) => {
                    let verb = verb.unwrap_or("updated");
                    crate::components::toast::show_toast(ctx.toasts, ToastKind::Success, outcome_message(R::NOUN, verb));
                    load_records(&ctx);
                }
                Some(Err(e)) => crate::components::toast::show_toast(ctx.toasts, ToastKind::Error, e),
                None => {}
            }
        });
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = now_on;
    }
}
