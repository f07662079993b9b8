//! Admin session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Read by the admin route guard and the site header to decide between the
//! login form and the editor pages.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::AdminIdentity;

/// Signed-in admin and whether the `/api/auth/me` probe is still running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthState {
    pub user: Option<AdminIdentity>,
    pub loading: bool,
}

impl Default for AuthState {
    fn default() -> Self {
        Self { user: None, loading: true }
    }
}

impl AuthState {
    /// Probe finished; `user` is the outcome.
    pub fn resolve(&mut self, user: Option<AdminIdentity>) {
        self.user = user;
        self.loading = false;
    }

    /// The guard should redirect to the login page.
    #[must_use]
    pub fn needs_login(&self) -> bool {
        !self.loading && self.user.is_none()
    }
}
