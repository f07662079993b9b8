use super::*;

#[test]
fn admin_endpoints_follow_collection_paths() {
    assert_eq!(admin_collection_endpoint(CaseStudy::COLLECTION), "/api/admin/case-studies");
    assert_eq!(admin_record_endpoint(Integration::COLLECTION, "i-1"), "/api/admin/integrations/i-1");
    assert_eq!(
        admin_toggle_endpoint(CaseStudy::COLLECTION, "c-1", Toggle::Published),
        "/api/admin/case-studies/c-1/publish"
    );
    assert_eq!(
        admin_toggle_endpoint(Integration::COLLECTION, "i-1", Toggle::Active),
        "/api/admin/integrations/i-1/active"
    );
}

#[test]
fn case_study_endpoint_uses_slug() {
    assert_eq!(case_study_endpoint("coforge-moves-vdi-azure"), "/api/case-studies/coforge-moves-vdi-azure");
}

#[test]
fn failure_message_prefers_server_error_body() {
    assert_eq!(
        failure_message(409, r#"{"error":"slug \"acme\" is already used by another record"}"#),
        "slug \"acme\" is already used by another record"
    );
}

#[test]
fn failure_message_falls_back_to_status() {
    assert_eq!(failure_message(502, "<html>Bad Gateway</html>"), "request failed: 502");
    assert_eq!(failure_message(500, ""), "request failed: 500");
}
