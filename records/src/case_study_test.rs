use super::*;
use time::macros::datetime;

fn complete_draft() -> CaseStudyDraft {
    let mut draft = CaseStudyDraft {
        client_name: "Coforge".into(),
        industry: "Technology".into(),
        description: "Desktop estate moved to Azure Virtual Desktop.".into(),
        ..CaseStudyDraft::default()
    };
    draft.set_title("Coforge Moves VDI — Azure!");
    draft
}

fn stored(draft: &CaseStudyDraft) -> CaseStudy {
    CaseStudy {
        id: "cs-1".into(),
        client_name: draft.client_name.clone(),
        industry: draft.industry.clone(),
        title: draft.title.clone(),
        description: draft.description.clone(),
        slug: draft.slug.clone(),
        image_url: None,
        metrics: vec![],
        tags: vec![],
        challenge: None,
        solution: None,
        results: None,
        content: None,
        is_published: false,
        published_at: None,
        featured: false,
        display_order: 0,
        created_by: None,
        updated_by: None,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn empty_draft_fails_on_first_required_field() {
    assert_eq!(CaseStudyDraft::default().validate(), Err(ValidationError::Required("client name")));
}

#[test]
fn whitespace_counts_as_blank() {
    let mut draft = complete_draft();
    draft.description = "   ".into();
    assert_eq!(draft.validate(), Err(ValidationError::Required("description")));
}

#[test]
fn complete_draft_validates() {
    assert_eq!(complete_draft().validate(), Ok(()));
}

#[test]
fn title_drives_slug_until_slug_edited() {
    let mut draft = CaseStudyDraft::default();
    draft.set_title("Retail Cloud Win");
    assert_eq!(draft.slug, "retail-cloud-win");

    draft.set_slug("custom");
    draft.set_title("Something Else");
    assert_eq!(draft.slug, "custom");
    assert!(draft.slug_edited);
}

#[test]
fn editing_existing_record_keeps_its_slug() {
    let record = stored(&complete_draft());
    let mut draft = record.to_draft();
    draft.set_title("Renamed Title");
    assert_eq!(draft.slug, "coforge-moves-vdi-azure");
}

#[test]
fn metric_rows_are_editable() {
    let mut draft = CaseStudyDraft::default();
    draft.add_metric();
    draft.add_metric();
    draft.set_metric(0, MetricField::Value, "40%");
    draft.set_metric(0, MetricField::Label, "Cost reduction");
    draft.set_metric(5, MetricField::Icon, "ignored");
    draft.remove_metric(1);
    draft.remove_metric(9);
    assert_eq!(
        draft.metrics,
        vec![Metric { icon: String::new(), value: "40%".into(), label: "Cost reduction".into() }]
    );
}

#[test]
fn create_columns_stamp_published_at_and_created_at() {
    let now = datetime!(2026-03-01 12:00 UTC);
    let mut draft = complete_draft();
    draft.is_published = true;
    draft.image_url = "  ".into();
    draft.add_metric();
    draft.add_metric();
    draft.set_metric(1, MetricField::Value, "3x");
    draft.tags = vec!["vdi".into()];

    let columns = CaseStudy::write_columns(&draft, None, now);
    assert_eq!(columns["published_at"], json!("2026-03-01T12:00:00Z"));
    assert_eq!(columns["created_at"], json!("2026-03-01T12:00:00Z"));
    assert_eq!(columns["image_url"], Value::Null);
    assert_eq!(columns["metrics"], json!([{ "icon": "", "value": "3x", "label": "" }]));
    assert_eq!(columns["tags"], json!(["vdi"]));
    assert_eq!(columns["slug"], json!("coforge-moves-vdi-azure"));
}

#[test]
fn update_columns_keep_prior_stamp_and_skip_created_at() {
    let earlier = datetime!(2025-11-20 08:30 UTC);
    let now = datetime!(2026-03-01 12:00 UTC);
    let mut draft = complete_draft();
    draft.is_published = true;
    let mut previous = stored(&draft);
    previous.is_published = true;
    previous.published_at = Some(earlier);

    let columns = CaseStudy::write_columns(&draft, Some(&previous), now);
    assert_eq!(columns["published_at"], json!("2025-11-20T08:30:00Z"));
    assert!(!columns.contains_key("created_at"));
}

#[test]
fn unpublishing_through_form_clears_stamp() {
    let now = datetime!(2026-03-01 12:00 UTC);
    let draft = complete_draft();
    let mut previous = stored(&draft);
    previous.is_published = true;
    previous.published_at = Some(datetime!(2025-11-20 08:30 UTC));

    let columns = CaseStudy::write_columns(&draft, Some(&previous), now);
    assert_eq!(columns["published_at"], Value::Null);
}

#[test]
fn publish_toggle_flips_and_stamps() {
    let now = datetime!(2026-03-01 12:00 UTC);
    let record = stored(&complete_draft());

    let columns = record.toggle_columns(Toggle::Published, now).expect("publish supported");
    assert_eq!(columns["is_published"], json!(true));
    assert_eq!(columns["published_at"], json!("2026-03-01T12:00:00Z"));
}

#[test]
fn unpublish_toggle_clears_stamp() {
    let now = datetime!(2026-03-01 12:00 UTC);
    let mut record = stored(&complete_draft());
    record.is_published = true;
    record.published_at = Some(datetime!(2025-11-20 08:30 UTC));

    let columns = record.toggle_columns(Toggle::Published, now).expect("publish supported");
    assert_eq!(columns["is_published"], json!(false));
    assert_eq!(columns["published_at"], Value::Null);
}

#[test]
fn featured_toggle_touches_only_featured() {
    let now = datetime!(2026-03-01 12:00 UTC);
    let record = stored(&complete_draft());
    let columns = record.toggle_columns(Toggle::Featured, now).expect("featured supported");
    assert_eq!(columns["featured"], json!(true));
    assert!(!columns.contains_key("is_published"));
    assert!(record.toggle_columns(Toggle::Active, now).is_none());
}

#[test]
fn row_deserializes_from_store_json() {
    let row = json!({
        "id": "cs-9",
        "client_name": "Acme",
        "industry": "Retail",
        "title": "Acme Goes Hybrid",
        "description": "Hybrid cloud rollout.",
        "slug": "acme-goes-hybrid",
        "image_url": null,
        "metrics": [{ "icon": "trending-up", "value": "25%", "label": "Faster releases" }],
        "tags": ["hybrid"],
        "is_published": true,
        "published_at": "2026-01-05T09:15:30.123456+00:00",
        "featured": true,
        "display_order": 3
    });
    let record: CaseStudy = serde_json::from_value(row).expect("row");
    assert_eq!(record.metrics[0].label, "Faster releases");
    assert_eq!(record.published_at.map(time::OffsetDateTime::year), Some(2026));
    assert_eq!(record.created_by, None);
}
