//! Shared auth UI helpers for the admin routes.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every admin page applies identical probe-then-redirect behavior: resolve
//! the session once via `/api/auth/me`, then send anonymous visitors to
//! `/admin/login`.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;

pub const LOGIN_PATH: &str = "/admin/login";

/// Resolve the session if it has not been probed yet.
pub fn probe_session(auth: RwSignal<AuthState>) {
    if !auth.get_untracked().loading {
        return;
    }
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        let user = crate::net::api::fetch_current_admin().await;
        let _ = auth.try_update(|a| a.resolve(user));
    });
}

/// Probe the session and redirect to the login page when nobody is signed in.
pub fn require_admin(auth: RwSignal<AuthState>) {
    probe_session(auth);
    let navigate = use_navigate();
    Effect::new(move || {
        if auth.get().needs_login() {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}
