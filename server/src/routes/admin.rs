//! Admin collection routes, generic over the edited record type.
//!
//! Each handler is instantiated once per collection in `routes::api_routes`
//! (`list_records::<CaseStudy>`, `list_records::<Integration>`, ...).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use records::Toggle;

use crate::routes::ApiError;
use crate::routes::auth::AdminUser;
use crate::services::editor::{self, Collection};
use crate::state::AppState;

/// `GET /api/admin/{collection}` — every row, published or not.
pub async fn list_records<R: Collection>(
    State(state): State<AppState>,
    _admin: AdminUser,
) -> Result<Json<Vec<R>>, ApiError> {
    Ok(Json(editor::list::<R>(state.store.as_ref()).await?))
}

/// `POST /api/admin/{collection}` — create from a draft.
pub async fn create_record<R: Collection>(
    State(state): State<AppState>,
    admin: AdminUser,
    Json(draft): Json<R::Draft>,
) -> Result<(StatusCode, Json<R>), ApiError> {
    let record = editor::create::<R>(state.store.as_ref(), &draft, &admin.identity).await?;
    Ok((StatusCode::CREATED, Json(record)))
}

/// `PUT /api/admin/{collection}/{id}` — overwrite from a full draft.
pub async fn update_record<R: Collection>(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
    Json(draft): Json<R::Draft>,
) -> Result<Json<R>, ApiError> {
    Ok(Json(editor::update::<R>(state.store.as_ref(), &id, &draft, &admin.identity).await?))
}

/// `DELETE /api/admin/{collection}/{id}`.
pub async fn delete_record<R: Collection>(
    State(state): State<AppState>,
    admin: AdminUser,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    editor::delete::<R>(state.store.as_ref(), &id, &admin.identity).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /api/admin/{collection}/{id}/{toggle}` — `publish`, `featured` or `active`.
pub async fn toggle_record<R: Collection>(
    State(state): State<AppState>,
    admin: AdminUser,
    Path((id, segment)): Path<(String, String)>,
) -> Result<Json<R>, ApiError> {
    let toggle = Toggle::from_path(&segment).filter(|t| R::TOGGLES.contains(t)).ok_or_else(|| {
        ApiError::new(StatusCode::NOT_FOUND, format!("{} has no {segment} toggle", R::NOUN))
    })?;
    Ok(Json(editor::toggle::<R>(state.store.as_ref(), &id, toggle, &admin.identity).await?))
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
