use super::*;

#[test]
fn identity_parses_from_me_response() {
    let identity: AdminIdentity =
        serde_json::from_str(r#"{"id":"u-1","email":"admin@xops360.com"}"#).expect("identity");
    assert_eq!(identity.email, "admin@xops360.com");
}

#[test]
fn login_request_serializes_both_fields() {
    let body = serde_json::to_value(LoginRequest { email: "a@b.c", password: "pw" }).expect("json");
    assert_eq!(body, serde_json::json!({ "email": "a@b.c", "password": "pw" }));
}

#[test]
fn error_body_parses() {
    let body: ApiErrorBody = serde_json::from_str(r#"{"error":"slug taken"}"#).expect("error body");
    assert_eq!(body.error, "slug taken");
}
