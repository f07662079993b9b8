//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the collection store and the auth provider behind trait objects
//! so the Postgres/hosted-auth pair and the in-memory/static pair are
//! interchangeable, plus the admin allowlist.

use std::sync::Arc;

use crate::services::auth::AuthProvider;
use crate::services::store::CollectionStore;

/// Clone is required by Axum; all inner fields are Arc-wrapped or Copy.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CollectionStore>,
    pub auth: Arc<dyn AuthProvider>,
    /// Lowercased admin emails; empty admits every signed-in user.
    pub admin_emails: Arc<Vec<String>>,
    pub cookie_secure: bool,
}

impl AppState {
    #[must_use]
    pub fn new(
        store: Arc<dyn CollectionStore>,
        auth: Arc<dyn AuthProvider>,
        admin_emails: Vec<String>,
        cookie_secure: bool,
    ) -> Self {
        Self { store, auth, admin_emails: Arc::new(admin_emails), cookie_secure }
    }
}

#[cfg(test)]
#[path = "state_helpers_test.rs"]
pub mod test_helpers;
