use records::{CaseStudy, CaseStudyDraft, Integration};

use super::*;

fn case_study(id: &str, title: &str, order: i32) -> CaseStudy {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "client_name": "Acme",
        "industry": "Retail",
        "title": title,
        "description": "Moved the estate.",
        "slug": records::slugify(title),
        "is_published": false,
        "featured": false,
        "display_order": order,
    }))
    .expect("case study fixture")
}

fn loaded(rows: Vec<CaseStudy>) -> EditorState<CaseStudy> {
    let mut state = EditorState::<CaseStudy>::default();
    assert!(state.begin_load());
    state.finish_load(Ok(rows)).expect("load");
    state
}

fn filled_draft(draft: &mut CaseStudyDraft) {
    draft.client_name = "Coforge".to_owned();
    draft.industry = "Technology".to_owned();
    draft.set_title("Coforge Moves VDI — Azure!");
    draft.description = "VDI migration".to_owned();
}

// =============================================================
// List
// =============================================================

#[test]
fn finish_load_orders_by_display_order() {
    let state = loaded(vec![case_study("b", "Second", 2), case_study("a", "First", 1)]);
    let ids: Vec<&str> = state.items.iter().map(|r| r.id.as_str()).collect();
    assert_eq!(ids, vec!["a", "b"]);
    assert!(!state.loading);
}

#[test]
fn begin_load_refuses_while_loading() {
    let mut state = EditorState::<CaseStudy>::default();
    assert!(state.begin_load());
    assert!(!state.begin_load());
}

#[test]
fn failed_load_keeps_rows_and_records_error() {
    let mut state = loaded(vec![case_study("a", "First", 1)]);
    state.begin_load();
    let err = state.finish_load(Err("network down".to_owned()));
    assert_eq!(err, Err("network down".to_owned()));
    assert_eq!(state.error.as_deref(), Some("network down"));
    assert_eq!(state.items.len(), 1);
}

#[test]
fn refused_load_queues_a_follow_up_fetch() {
    let mut state = loaded(vec![case_study("a", "First", 1), case_study("b", "Second", 2)]);
    assert!(state.begin_toggle("a", Toggle::Featured));
    assert!(state.begin_toggle("b", Toggle::Featured));

    let mut a = case_study("a", "First", 1);
    a.featured = true;
    state.finish_toggle("a", Toggle::Featured, Ok(a.clone())).expect("toggle a");
    assert!(state.begin_load());

    let mut b = case_study("b", "Second", 2);
    b.featured = true;
    state.finish_toggle("b", Toggle::Featured, Ok(b.clone())).expect("toggle b");
    assert!(!state.begin_load());

    // The running fetch read the list before b was saved.
    state.finish_load(Ok(vec![a.clone(), case_study("b", "Second", 2)])).expect("stale load");
    assert!(state.take_reload());
    assert!(state.loading);
    assert!(!state.take_reload());

    state.finish_load(Ok(vec![a, b])).expect("fresh load");
    assert!(state.find("b").is_some_and(|row| row.featured));
    assert!(!state.take_reload());
}

#[test]
fn take_reload_is_false_without_a_refused_load() {
    let mut state = loaded(vec![case_study("a", "First", 1)]);
    assert!(!state.take_reload());
    assert!(!state.loading);
}

// =============================================================
// Save
// =============================================================

#[test]
fn save_without_open_form_is_blocked() {
    let mut state = EditorState::<CaseStudy>::default();
    assert_eq!(state.begin_save(), SaveAttempt::Blocked);
}

#[test]
fn blank_required_fields_block_submission() {
    let mut state = EditorState::<CaseStudy>::default();
    state.open_create();
    let attempt = state.begin_save();
    assert_eq!(attempt, SaveAttempt::Invalid(ValidationError::Required("client name")));
    assert!(!state.saving);
    assert!(state.validation.is_some());
}

#[test]
fn editing_clears_validation_message() {
    let mut state = EditorState::<CaseStudy>::default();
    state.open_create();
    let _ = state.begin_save();
    state.edit_draft(|d| d.client_name = "Acme".to_owned());
    assert!(state.validation.is_none());
}

#[test]
fn duplicate_submission_is_blocked_while_saving() {
    let mut state = EditorState::<CaseStudy>::default();
    state.open_create();
    state.edit_draft(filled_draft);
    let first = state.begin_save();
    assert!(matches!(first, SaveAttempt::Ready(SaveRequest::Create(ref d)) if d.slug == "coforge-moves-vdi-azure"));
    assert!(state.saving);
    assert_eq!(state.begin_save(), SaveAttempt::Blocked);
}

#[test]
fn edit_mode_produces_update_request() {
    let mut state = loaded(vec![case_study("a", "First", 1)]);
    assert!(state.open_edit("a"));
    assert_eq!(state.draft.title, "First");
    match state.begin_save() {
        SaveAttempt::Ready(SaveRequest::Update { id, draft }) => {
            assert_eq!(id, "a");
            assert_eq!(draft.slug, "first");
        }
        other => panic!("expected update request, got {other:?}"),
    }
}

#[test]
fn open_edit_unknown_id_leaves_form_closed() {
    let mut state = loaded(vec![case_study("a", "First", 1)]);
    assert!(!state.open_edit("missing"));
    assert!(state.form.is_none());
}

#[test]
fn successful_save_closes_form_and_upserts() {
    let mut state = loaded(vec![case_study("a", "First", 1)]);
    state.open_edit("a");
    let _ = state.begin_save();
    state.finish_save(Ok(case_study("a", "Renamed", 1))).expect("save");
    assert!(state.form.is_none());
    assert!(!state.saving);
    assert_eq!(state.items.len(), 1);
    assert_eq!(state.items[0].title, "Renamed");
}

#[test]
fn failed_save_keeps_form_open_for_resubmission() {
    let mut state = EditorState::<CaseStudy>::default();
    state.open_create();
    state.edit_draft(filled_draft);
    let _ = state.begin_save();
    let err = state.finish_save(Err("slug taken".to_owned()));
    assert_eq!(err, Err("slug taken".to_owned()));
    assert_eq!(state.form, Some(FormMode::Create));
    assert!(!state.saving);
    assert!(matches!(state.begin_save(), SaveAttempt::Ready(_)));
}

#[test]
fn close_form_ignored_while_saving() {
    let mut state = EditorState::<CaseStudy>::default();
    state.open_create();
    state.edit_draft(filled_draft);
    let _ = state.begin_save();
    state.close_form();
    assert_eq!(state.form, Some(FormMode::Create));
}

// =============================================================
// Delete
// =============================================================

#[test]
fn delete_without_confirmation_leaves_collection_unchanged() {
    let mut state = loaded(vec![case_study("a", "First", 1), case_study("b", "Second", 2)]);
    state.request_delete("a");
    state.cancel_delete();
    assert_eq!(state.confirm_delete(), None);
    assert_eq!(state.items.len(), 2);
    assert!(!state.is_deleting("a"));
}

#[test]
fn confirmed_delete_removes_row_on_success() {
    let mut state = loaded(vec![case_study("a", "First", 1), case_study("b", "Second", 2)]);
    state.request_delete("a");
    let id = state.confirm_delete().expect("pending delete");
    assert!(state.is_deleting(&id));
    state.finish_delete(&id, Ok(())).expect("delete");
    assert_eq!(state.items.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(), vec!["b"]);
    assert!(!state.is_deleting(&id));
}

#[test]
fn failed_delete_keeps_row() {
    let mut state = loaded(vec![case_study("a", "First", 1)]);
    state.request_delete("a");
    let id = state.confirm_delete().expect("pending delete");
    assert!(state.finish_delete(&id, Err("boom".to_owned())).is_err());
    assert_eq!(state.items.len(), 1);
}

#[test]
fn second_confirm_while_deleting_is_blocked() {
    let mut state = loaded(vec![case_study("a", "First", 1)]);
    state.request_delete("a");
    assert!(state.confirm_delete().is_some());
    state.request_delete("a");
    assert_eq!(state.confirm_delete(), None);
}

#[test]
fn request_delete_unknown_id_is_ignored() {
    let mut state = loaded(vec![case_study("a", "First", 1)]);
    state.request_delete("missing");
    assert!(state.pending_delete.is_none());
}

// =============================================================
// Toggles
// =============================================================

#[test]
fn toggle_flag_blocks_duplicate_and_clears_on_finish() {
    let mut state = loaded(vec![case_study("a", "First", 1)]);
    assert!(state.begin_toggle("a", Toggle::Published));
    assert!(!state.begin_toggle("a", Toggle::Published));
    assert!(state.begin_toggle("a", Toggle::Featured));

    let mut published = case_study("a", "First", 1);
    published.is_published = true;
    state.finish_toggle("a", Toggle::Published, Ok(published)).expect("toggle");
    assert!(!state.is_toggling("a", Toggle::Published));
    assert!(state.is_toggling("a", Toggle::Featured));
    assert!(state.items[0].is_published);
}

#[test]
fn unsupported_toggle_is_refused() {
    let mut state = loaded(vec![case_study("a", "First", 1)]);
    assert!(!state.begin_toggle("a", Toggle::Active));

    let mut integrations = EditorState::<Integration>::default();
    assert!(integrations.begin_load());
    integrations
        .finish_load(Ok(vec![
            serde_json::from_value(serde_json::json!({
                "id": "i-1",
                "name": "ServiceNow",
                "category": "ITSM",
                "is_active": true,
                "display_order": 0,
            }))
            .expect("integration fixture"),
        ]))
        .expect("load");
    assert!(integrations.begin_toggle("i-1", Toggle::Active));
    assert!(!integrations.begin_toggle("i-1", Toggle::Published));
}
