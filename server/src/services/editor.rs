//! Editor service — generic create/read/update/delete over one collection.
//!
//! DESIGN
//! ======
//! Every admin collection runs through the same functions, parameterized by
//! a [`Collection`] record type. The record type owns its write policy
//! (`records::EditableRecord::write_columns` / `toggle_columns`); this module
//! owns validation, user stamping, row decoding and error mapping.
//!
//! ERROR HANDLING
//! ==============
//! Drafts are re-validated here even though the admin form validates first.
//! No pre-flight uniqueness check is made: a store unique violation on a
//! slugged collection becomes [`EditorError::SlugTaken`].

use records::{CaseStudy, Columns, EditableRecord, Integration, RecordDraft, Toggle, ValidationError};
use serde_json::Value;
use time::OffsetDateTime;
use tracing::info;

use crate::services::auth::Identity;
use crate::services::store::{CASE_STUDIES, CollectionStore, Filter, INTEGRATIONS, StoreError, Table};

/// A record type bound to its store table.
pub trait Collection: EditableRecord {
    const STORE: Table;
}

impl Collection for CaseStudy {
    const STORE: Table = CASE_STUDIES;
}

impl Collection for Integration {
    const STORE: Table = INTEGRATIONS;
}

#[derive(Debug, thiserror::Error)]
pub enum EditorError {
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    #[error("slug \"{0}\" is already used by another record")]
    SlugTaken(String),
    #[error("{noun} not found: {id}")]
    NotFound { noun: &'static str, id: String },
    #[error("{0} cannot be toggled on this collection")]
    UnsupportedToggle(&'static str),
    #[error("store error: {0}")]
    Store(StoreError),
}

fn map_store_error<R: Collection>(err: StoreError, columns: Option<&Columns>) -> EditorError {
    match err {
        StoreError::NotFound(id) => EditorError::NotFound { noun: R::NOUN, id },
        StoreError::UniqueViolation(_) => {
            let slug = columns
                .and_then(|c| c.get("slug"))
                .and_then(Value::as_str)
                .unwrap_or_default();
            EditorError::SlugTaken(slug.to_owned())
        }
        other => EditorError::Store(other),
    }
}

fn decode<R: Collection>(row: Value) -> Result<R, EditorError> {
    serde_json::from_value(row).map_err(|e| EditorError::Store(StoreError::Malformed(e)))
}

fn stamp_user(columns: &mut Columns, user: &Identity, creating: bool) {
    let id = Value::String(user.id.clone());
    if creating {
        columns.insert("created_by".into(), id.clone());
    }
    columns.insert("updated_by".into(), id);
}

/// Rows matching `filters`, ascending by display order.
///
/// # Errors
///
/// Returns [`EditorError::Store`] if the store fails or a row does not decode.
pub async fn list_where<R: Collection>(store: &dyn CollectionStore, filters: &[Filter]) -> Result<Vec<R>, EditorError> {
    let rows = store
        .select(R::STORE, filters)
        .await
        .map_err(|e| map_store_error::<R>(e, None))?;
    rows.into_iter().map(decode::<R>).collect()
}

/// All rows, ascending by display order.
///
/// # Errors
///
/// See [`list_where`].
pub async fn list<R: Collection>(store: &dyn CollectionStore) -> Result<Vec<R>, EditorError> {
    list_where::<R>(store, &[]).await
}

/// One row by id.
///
/// # Errors
///
/// Returns [`EditorError::NotFound`] if no row has `id`.
pub async fn get<R: Collection>(store: &dyn CollectionStore, id: &str) -> Result<R, EditorError> {
    list_where::<R>(store, &[Filter::eq("id", id)])
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| EditorError::NotFound { noun: R::NOUN, id: id.to_owned() })
}

/// Validate and insert a new row.
///
/// # Errors
///
/// [`EditorError::Invalid`] for a blank required field,
/// [`EditorError::SlugTaken`] on a uniqueness clash.
pub async fn create<R: Collection>(
    store: &dyn CollectionStore,
    draft: &R::Draft,
    user: &Identity,
) -> Result<R, EditorError> {
    draft.validate()?;
    let mut columns = R::write_columns(draft, None, OffsetDateTime::now_utc());
    stamp_user(&mut columns, user, true);

    let row = store
        .insert(R::STORE, columns.clone())
        .await
        .map_err(|e| map_store_error::<R>(e, Some(&columns)))?;
    let record = decode::<R>(row)?;
    info!(table = R::TABLE, id = record.id(), user = %user.id, "record created");
    Ok(record)
}

/// Validate and overwrite row `id` from a full draft.
///
/// # Errors
///
/// As [`create`], plus [`EditorError::NotFound`].
pub async fn update<R: Collection>(
    store: &dyn CollectionStore,
    id: &str,
    draft: &R::Draft,
    user: &Identity,
) -> Result<R, EditorError> {
    draft.validate()?;
    let previous = get::<R>(store, id).await?;
    let mut columns = R::write_columns(draft, Some(&previous), OffsetDateTime::now_utc());
    stamp_user(&mut columns, user, false);

    let row = store
        .update(R::STORE, id, columns.clone())
        .await
        .map_err(|e| map_store_error::<R>(e, Some(&columns)))?;
    info!(table = R::TABLE, %id, user = %user.id, "record updated");
    decode::<R>(row)
}

/// Remove row `id`. Irreversible.
///
/// # Errors
///
/// Returns [`EditorError::NotFound`] if no row has `id`.
pub async fn delete<R: Collection>(store: &dyn CollectionStore, id: &str, user: &Identity) -> Result<(), EditorError> {
    store
        .delete(R::STORE, id)
        .await
        .map_err(|e| map_store_error::<R>(e, None))?;
    info!(table = R::TABLE, %id, user = %user.id, "record deleted");
    Ok(())
}

/// Flip one boolean column of row `id`.
///
/// # Errors
///
/// [`EditorError::UnsupportedToggle`] if the collection lacks `toggle`,
/// [`EditorError::NotFound`] if no row has `id`.
pub async fn toggle<R: Collection>(
    store: &dyn CollectionStore,
    id: &str,
    toggle: Toggle,
    user: &Identity,
) -> Result<R, EditorError> {
    if !R::TOGGLES.contains(&toggle) {
        return Err(EditorError::UnsupportedToggle(toggle.as_path()));
    }
    let current = get::<R>(store, id).await?;
    let mut columns = current
        .toggle_columns(toggle, OffsetDateTime::now_utc())
        .ok_or(EditorError::UnsupportedToggle(toggle.as_path()))?;
    stamp_user(&mut columns, user, false);

    let row = store
        .update(R::STORE, id, columns)
        .await
        .map_err(|e| map_store_error::<R>(e, None))?;
    info!(table = R::TABLE, %id, toggle = toggle.as_path(), "record toggled");
    decode::<R>(row)
}

/// Published case studies in display order.
///
/// # Errors
///
/// See [`list_where`].
pub async fn published_case_studies(store: &dyn CollectionStore) -> Result<Vec<CaseStudy>, EditorError> {
    list_where::<CaseStudy>(store, &[Filter::eq("is_published", true)]).await
}

/// One published case study by slug.
///
/// # Errors
///
/// Returns [`EditorError::NotFound`] for unknown or unpublished slugs.
pub async fn published_case_study(store: &dyn CollectionStore, slug: &str) -> Result<CaseStudy, EditorError> {
    list_where::<CaseStudy>(store, &[Filter::eq("is_published", true), Filter::eq("slug", slug)])
        .await?
        .into_iter()
        .next()
        .ok_or_else(|| EditorError::NotFound { noun: CaseStudy::NOUN, id: slug.to_owned() })
}

/// Active integrations in display order.
///
/// # Errors
///
/// See [`list_where`].
pub async fn active_integrations(store: &dyn CollectionStore) -> Result<Vec<Integration>, EditorError> {
    list_where::<Integration>(store, &[Filter::eq("is_active", true)]).await
}

#[cfg(test)]
#[path = "editor_test.rs"]
mod tests;
