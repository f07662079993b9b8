//! Auth service — password sign-in and token lookup against the hosted auth API.
//!
//! DESIGN
//! ======
//! The site stores no credentials. [`AuthProvider`] is the seam: the
//! [`RemoteAuth`] implementation calls the hosted service's REST endpoints
//! with `reqwest`; [`StaticAuth`] holds a fixed user list for local preview
//! and tests. Route handlers only ever see the opaque access token and the
//! resolved [`Identity`].

use std::collections::HashMap;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::config::AuthConfig;

/// Signed-in user as reported by the auth service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub access_token: String,
    pub identity: Identity,
}

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("session expired or invalid")]
    InvalidToken,
    #[error("auth service error: {0}")]
    Upstream(String),
}

/// Provider-neutral auth operations. Enables mocking in tests.
#[async_trait::async_trait]
pub trait AuthProvider: Send + Sync {
    /// Exchange email + password for an access token.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidCredentials`] on rejection, [`AuthError::Upstream`]
    /// when the service is unreachable or answers unexpectedly.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError>;

    /// Resolve an access token to its user.
    ///
    /// # Errors
    ///
    /// [`AuthError::InvalidToken`] if the token is unknown or expired.
    async fn identify(&self, access_token: &str) -> Result<Identity, AuthError>;

    /// Revoke an access token. Unknown tokens are not an error.
    ///
    /// # Errors
    ///
    /// [`AuthError::Upstream`] if the service could not be reached.
    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError>;
}

// =============================================================================
// REMOTE PROVIDER
// =============================================================================

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
    user: Identity,
}

pub struct RemoteAuth {
    http: reqwest::Client,
    config: AuthConfig,
}

impl RemoteAuth {
    #[must_use]
    pub fn new(config: AuthConfig) -> Self {
        Self { http: reqwest::Client::new(), config }
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}/auth/v1/{path}", self.config.url)
    }
}

async fn upstream_error(resp: reqwest::Response) -> AuthError {
    let status = resp.status();
    let body = resp.text().await.unwrap_or_default();
    AuthError::Upstream(format!("{status}: {body}"))
}

#[async_trait::async_trait]
impl AuthProvider for RemoteAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let resp = self
            .http
            .post(self.endpoint("token?grant_type=password"))
            .header("apikey", &self.config.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(|e| AuthError::Upstream(e.to_string()))?;

        match resp.status() {
            s if s.is_success() => {}
            reqwest::StatusCode::BAD_REQUEST | reqwest::StatusCode::UNAUTHORIZED => {
                return Err(AuthError::InvalidCredentials);
            }
            _ => return Err(upstream_error(resp).await),
        }

        let token: TokenResponse = resp
            .json()
            .await
            .map_err(|e| AuthError::Upstream(e.to_string()))?;
        Ok(Session { access_token: token.access_token, identity: token.user })
    }

    async fn identify(&self, access_token: &str) -> Result<Identity, AuthError> {
        let resp = self
            .http
            .get(self.endpoint("user"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::Upstream(e.to_string()))?;

        match resp.status() {
            s if s.is_success() => resp
                .json::<Identity>()
                .await
                .map_err(|e| AuthError::Upstream(e.to_string())),
            reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => Err(AuthError::InvalidToken),
            _ => Err(upstream_error(resp).await),
        }
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        let resp = self
            .http
            .post(self.endpoint("logout"))
            .header("apikey", &self.config.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AuthError::Upstream(e.to_string()))?;

        if resp.status().is_success() || resp.status() == reqwest::StatusCode::UNAUTHORIZED {
            Ok(())
        } else {
            Err(upstream_error(resp).await)
        }
    }
}

// =============================================================================
// STATIC PROVIDER
// =============================================================================

/// Fixed credential list with in-process tokens.
#[derive(Clone, Default)]
pub struct StaticAuth {
    users: Arc<Vec<(Identity, String)>>,
    tokens: Arc<RwLock<HashMap<String, Identity>>>,
}

impl StaticAuth {
    /// `users` is `(email, password)` pairs; ids are derived from the email.
    #[must_use]
    pub fn new(users: &[(&str, &str)]) -> Self {
        let users = users
            .iter()
            .map(|(email, password)| {
                let id = Uuid::new_v5(&Uuid::NAMESPACE_OID, email.as_bytes()).to_string();
                (Identity { id, email: (*email).to_owned() }, (*password).to_owned())
            })
            .collect();
        Self { users: Arc::new(users), tokens: Arc::default() }
    }
}

#[async_trait::async_trait]
impl AuthProvider for StaticAuth {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AuthError> {
        let identity = self
            .users
            .iter()
            .find(|(identity, secret)| identity.email.eq_ignore_ascii_case(email) && secret == password)
            .map(|(identity, _)| identity.clone())
            .ok_or(AuthError::InvalidCredentials)?;

        let access_token = Uuid::new_v4().to_string();
        self.tokens
            .write()
            .await
            .insert(access_token.clone(), identity.clone());
        Ok(Session { access_token, identity })
    }

    async fn identify(&self, access_token: &str) -> Result<Identity, AuthError> {
        self.tokens
            .read()
            .await
            .get(access_token)
            .cloned()
            .ok_or(AuthError::InvalidToken)
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AuthError> {
        self.tokens.write().await.remove(access_token);
        Ok(())
    }
}

/// Whether `email` may use the admin panel. An empty allowlist admits everyone.
#[must_use]
pub fn is_admin(admin_emails: &[String], email: &str) -> bool {
    admin_emails.is_empty() || admin_emails.iter().any(|allowed| allowed.eq_ignore_ascii_case(email))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
