//! Auth routes — admin sign-in proxy, session cookie, admin extractor.

use axum::extract::{FromRef, State};
use axum::http::StatusCode;
use axum::http::header::AUTHORIZATION;
use axum::response::{IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use serde::Deserialize;
use time::Duration;

use crate::routes::ApiError;
use crate::services::auth::{AuthError, Identity, is_admin};
use crate::state::AppState;

pub(crate) const COOKIE_NAME: &str = "xops360_session";

pub(crate) fn auth_error_to_status(err: &AuthError) -> StatusCode {
    match err {
        AuthError::InvalidCredentials | AuthError::InvalidToken => StatusCode::UNAUTHORIZED,
        AuthError::Upstream(_) => StatusCode::BAD_GATEWAY,
    }
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        let status = auth_error_to_status(&err);
        if status == StatusCode::BAD_GATEWAY {
            tracing::error!(error = %err, "auth service call failed");
        }
        Self::new(status, err.to_string())
    }
}

fn session_cookie(token: String, secure: bool) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(secure)
        .build()
}

/// Bearer header first, then the session cookie.
pub(crate) fn request_token(parts: &axum::http::request::Parts) -> Option<String> {
    let bearer = parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty());
    if let Some(token) = bearer {
        return Some(token.to_owned());
    }
    let jar = CookieJar::from_headers(&parts.headers);
    jar.get(COOKIE_NAME)
        .map(Cookie::value)
        .filter(|t| !t.is_empty())
        .map(str::to_owned)
}

// =============================================================================
// ADMIN EXTRACTOR
// =============================================================================

/// Signed-in admin. Use as a handler parameter to require admin access.
pub struct AdminUser {
    pub identity: Identity,
    pub token: String,
}

impl<S> axum::extract::FromRequestParts<S> for AdminUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut axum::http::request::Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = request_token(parts).ok_or_else(|| ApiError::new(StatusCode::UNAUTHORIZED, "sign in required"))?;

        let app_state = AppState::from_ref(state);
        let identity = app_state.auth.identify(&token).await?;
        if !is_admin(&app_state.admin_emails, &identity.email) {
            return Err(ApiError::new(StatusCode::FORBIDDEN, "admin access required"));
        }

        Ok(Self { identity, token })
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

#[derive(Deserialize)]
pub struct LoginBody {
    pub email: String,
    pub password: String,
}

/// `POST /api/auth/login` — sign in through the auth service, set cookie.
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(body): Json<LoginBody>,
) -> Result<(CookieJar, Json<Identity>), ApiError> {
    let session = state.auth.sign_in(body.email.trim(), &body.password).await?;

    if !is_admin(&state.admin_emails, &session.identity.email) {
        if let Err(e) = state.auth.sign_out(&session.access_token).await {
            tracing::warn!(error = %e, "failed to revoke non-admin session");
        }
        tracing::warn!(email = %session.identity.email, "non-admin sign-in refused");
        return Err(ApiError::new(StatusCode::FORBIDDEN, "admin access required"));
    }

    tracing::info!(user = %session.identity.id, "admin signed in");
    let jar = jar.add(session_cookie(session.access_token, state.cookie_secure));
    Ok((jar, Json(session.identity)))
}

/// `GET /api/auth/me` — return current admin.
pub async fn me(admin: AdminUser) -> Json<Identity> {
    Json(admin.identity)
}

/// `POST /api/auth/logout` — revoke token, clear cookie.
pub async fn logout(State(state): State<AppState>, admin: AdminUser) -> impl IntoResponse {
    if let Err(e) = state.auth.sign_out(&admin.token).await {
        tracing::warn!(error = %e, "auth service sign-out failed");
    }

    let cookie = Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.cookie_secure)
        .max_age(Duration::ZERO);

    let jar = CookieJar::new().add(cookie);
    (jar, StatusCode::NO_CONTENT)
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
