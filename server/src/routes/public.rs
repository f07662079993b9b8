//! Public read routes feeding the landing carousel and detail pages.

use axum::extract::{Path, State};
use axum::response::Json;
use records::{CaseStudy, Integration};

use crate::routes::ApiError;
use crate::services::editor;
use crate::state::AppState;

/// `GET /api/case-studies` — published case studies in display order.
pub async fn list_case_studies(State(state): State<AppState>) -> Result<Json<Vec<CaseStudy>>, ApiError> {
    Ok(Json(editor::published_case_studies(state.store.as_ref()).await?))
}

/// `GET /api/case-studies/{slug}` — one published case study.
pub async fn get_case_study(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<CaseStudy>, ApiError> {
    Ok(Json(editor::published_case_study(state.store.as_ref(), &slug).await?))
}

/// `GET /api/integrations` — active integrations in display order.
pub async fn list_integrations(State(state): State<AppState>) -> Result<Json<Vec<Integration>>, ApiError> {
    Ok(Json(editor::active_integrations(state.store.as_ref()).await?))
}

#[cfg(test)]
#[path = "public_test.rs"]
mod tests;
