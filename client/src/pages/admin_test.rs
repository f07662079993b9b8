use super::*;

#[test]
fn outcome_message_capitalizes_noun() {
    assert_eq!(outcome_message("case study", "deleted"), "Case study deleted");
    assert_eq!(outcome_message("integration", "created"), "Integration created");
}

#[test]
fn capitalized_handles_empty_noun() {
    assert_eq!(capitalized(""), "");
}

#[test]
fn toggle_verb_reflects_new_value() {
    assert_eq!(toggle_verb(Toggle::Published, true), "published");
    assert_eq!(toggle_verb(Toggle::Published, false), "unpublished");
    assert_eq!(toggle_verb(Toggle::Featured, false), "unfeatured");
    assert_eq!(toggle_verb(Toggle::Active, true), "activated");
}

fn case_study(id: &str, order: i32) -> records::CaseStudy {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "client_name": "Acme",
        "industry": "Retail",
        "title": "Moved the estate",
        "description": "Moved the estate.",
        "slug": "moved-the-estate",
        "is_published": false,
        "featured": false,
        "display_order": order,
    }))
    .expect("case study fixture")
}

#[test]
fn draft_edits_do_not_invalidate_table_rows() {
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};

    let owner = Owner::new();
    owner.set();

    let editor = RwSignal::new(EditorState::<records::CaseStudy>::default());
    editor.update(|e| {
        e.begin_load();
        e.finish_load(Ok(vec![case_study("a", 1)])).expect("load");
    });
    let items = editor_items(editor);
    let renders = Arc::new(AtomicUsize::new(0));
    let table = {
        let renders = Arc::clone(&renders);
        Memo::new(move |_| {
            renders.fetch_add(1, Ordering::SeqCst);
            items.get().len()
        })
    };

    assert_eq!(table.get(), 1);
    editor.update(|e| {
        e.open_create();
        e.edit_draft(|d| d.client_name = "Coforge".to_owned());
    });
    assert_eq!(table.get(), 1);
    assert_eq!(renders.load(Ordering::SeqCst), 1);

    editor.update(|e| {
        e.begin_load();
        e.finish_load(Ok(vec![case_study("a", 1), case_study("b", 2)])).expect("load");
    });
    assert_eq!(table.get(), 2);
    assert_eq!(renders.load(Ordering::SeqCst), 2);
}
