//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! This module binds the JSON API (public reads, admin CRUD, auth proxy) and
//! stitches it with Leptos SSR rendering under a single Axum router. Every
//! request passes through `TraceLayer` so handler logs carry the request span.

pub mod admin;
pub mod auth;
pub mod public;

use std::path::PathBuf;

use axum::Router;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use axum::routing::{get, post, put};
use leptos::prelude::*;
use leptos_axum::{LeptosRoutes, generate_route_list};
use records::{CaseStudy, Integration};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::services::editor::EditorError;
use crate::services::store::StoreError;
use crate::state::AppState;

// =============================================================================
// API ERRORS
// =============================================================================

/// JSON error body `{ "error": message }` with a status code.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self { status, message: message.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(serde_json::json!({ "error": self.message }))).into_response()
    }
}

pub(crate) fn editor_error_to_status(err: &EditorError) -> StatusCode {
    match err {
        EditorError::Invalid(_) => StatusCode::UNPROCESSABLE_ENTITY,
        EditorError::SlugTaken(_) => StatusCode::CONFLICT,
        EditorError::NotFound { .. } => StatusCode::NOT_FOUND,
        EditorError::UnsupportedToggle(_) => StatusCode::BAD_REQUEST,
        EditorError::Store(StoreError::InvalidColumn(_)) => StatusCode::BAD_REQUEST,
        EditorError::Store(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<EditorError> for ApiError {
    fn from(err: EditorError) -> Self {
        let status = editor_error_to_status(&err);
        if status.is_server_error() {
            tracing::error!(error = %err, "editor operation failed");
            return Self::new(status, "internal error");
        }
        Self::new(status, err.to_string())
    }
}

// =============================================================================
// ROUTER
// =============================================================================

/// JSON API routes.
pub(crate) fn api_routes(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/login", post(auth::login))
        .route("/api/auth/logout", post(auth::logout))
        .route("/api/auth/me", get(auth::me))
        .route("/api/case-studies", get(public::list_case_studies))
        .route("/api/case-studies/{slug}", get(public::get_case_study))
        .route("/api/integrations", get(public::list_integrations))
        .route(
            "/api/admin/case-studies",
            get(admin::list_records::<CaseStudy>).post(admin::create_record::<CaseStudy>),
        )
        .route(
            "/api/admin/case-studies/{id}",
            put(admin::update_record::<CaseStudy>).delete(admin::delete_record::<CaseStudy>),
        )
        .route("/api/admin/case-studies/{id}/{toggle}", post(admin::toggle_record::<CaseStudy>))
        .route(
            "/api/admin/integrations",
            get(admin::list_records::<Integration>).post(admin::create_record::<Integration>),
        )
        .route(
            "/api/admin/integrations/{id}",
            put(admin::update_record::<Integration>).delete(admin::delete_record::<Integration>),
        )
        .route("/api/admin/integrations/{id}/{toggle}", post(admin::toggle_record::<Integration>))
        .route("/healthz", get(healthz))
        .with_state(state)
}

/// API routes + Leptos SSR pages + static assets.
///
/// # Errors
///
/// Returns an error if the Leptos configuration cannot be loaded (missing or
/// malformed `[workspace.metadata.leptos]` section).
pub fn leptos_app(state: AppState) -> Result<Router, String> {
    let conf = get_configuration(None).map_err(|e| format!("leptos configuration: {e}"))?;
    let leptos_options = conf.leptos_options;
    let routes = generate_route_list(client::app::App);

    let leptos_router = Router::new()
        .leptos_routes(&leptos_options, routes, {
            let opts = leptos_options.clone();
            move || client::app::shell(opts.clone())
        })
        .with_state(leptos_options.clone());

    // WASM, CSS and JS bundles produced by the client build.
    let site_root_path = PathBuf::from(leptos_options.site_root.as_ref());

    Ok(api_routes(state)
        .merge(leptos_router)
        .nest_service("/pkg", ServeDir::new(site_root_path.join("pkg")))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http()))
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
