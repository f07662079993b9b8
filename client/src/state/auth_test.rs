use super::*;

fn admin() -> AdminIdentity {
    AdminIdentity { id: "u-1".to_owned(), email: "admin@xops360.com".to_owned() }
}

#[test]
fn default_state_is_loading_without_user() {
    let state = AuthState::default();
    assert!(state.loading);
    assert!(state.user.is_none());
    assert!(!state.needs_login());
}

#[test]
fn resolve_without_user_requires_login() {
    let mut state = AuthState::default();
    state.resolve(None);
    assert!(!state.loading);
    assert!(state.needs_login());
}

#[test]
fn resolve_with_user_stays_on_page() {
    let mut state = AuthState::default();
    state.resolve(Some(admin()));
    assert!(!state.needs_login());
    assert_eq!(state.user.as_ref().map(|u| u.email.as_str()), Some("admin@xops360.com"));
}
