use super::*;
use time::macros::datetime;

#[test]
fn name_and_category_are_required() {
    let mut draft = IntegrationDraft::default();
    assert_eq!(draft.validate(), Err(ValidationError::Required("name")));
    draft.name = "ServiceNow".into();
    assert_eq!(draft.validate(), Err(ValidationError::Required("category")));
    draft.category = "ITSM".into();
    assert_eq!(draft.validate(), Ok(()));
}

#[test]
fn active_toggle_flips_is_active() {
    let now = datetime!(2026-03-01 12:00 UTC);
    let record = Integration {
        id: "int-1".into(),
        name: "ServiceNow".into(),
        category: "ITSM".into(),
        description: None,
        logo_url: None,
        website_url: Some("https://servicenow.com".into()),
        is_active: true,
        display_order: 1,
        created_by: None,
        updated_by: None,
        created_at: None,
        updated_at: None,
    };
    let columns = record.toggle_columns(Toggle::Active, now).expect("active supported");
    assert_eq!(columns["is_active"], json!(false));
    assert!(record.toggle_columns(Toggle::Published, now).is_none());

    let draft = record.to_draft();
    assert_eq!(draft.website_url, "https://servicenow.com");
    assert_eq!(draft.description, "");
}

#[test]
fn write_columns_null_blank_urls() {
    let now = datetime!(2026-03-01 12:00 UTC);
    let draft = IntegrationDraft {
        name: " Splunk ".into(),
        category: "Observability".into(),
        logo_url: String::new(),
        ..IntegrationDraft::default()
    };
    let columns = Integration::write_columns(&draft, None, now);
    assert_eq!(columns["name"], json!("Splunk"));
    assert_eq!(columns["logo_url"], Value::Null);
    assert_eq!(columns["is_active"], json!(false));
}
