//! Collection store — ordered JSON row access to named remote tables.
//!
//! DESIGN
//! ======
//! The editor and public read routes never see SQL. They exchange rows as
//! `serde_json::Value` objects against a [`Table`] descriptor, so one generic
//! editor serves every collection. Two backends implement
//! [`CollectionStore`]: [`postgres::PgStore`] for the hosted database and
//! [`memory::MemoryStore`] for local preview and tests.
//!
//! ERROR HANDLING
//! ==============
//! Unique constraint violations are reported as
//! [`StoreError::UniqueViolation`] by both backends so callers can map them
//! to a domain conflict without inspecting driver errors.

pub mod memory;
pub mod postgres;

use records::Columns;
use serde_json::Value;

/// Static description of one remote table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Table {
    pub name: &'static str,
    /// Ascending sort column for `select`.
    pub order_by: &'static str,
    /// Columns carrying a unique constraint.
    pub unique: &'static [&'static str],
}

pub const CASE_STUDIES: Table = Table { name: "case_studies", order_by: "display_order", unique: &["slug"] };

pub const INTEGRATIONS: Table = Table { name: "xops360_integrations", order_by: "display_order", unique: &[] };

/// Equality filter on a single column.
#[derive(Debug, Clone, PartialEq)]
pub struct Filter {
    pub column: &'static str,
    pub value: Value,
}

impl Filter {
    #[must_use]
    pub fn eq(column: &'static str, value: impl Into<Value>) -> Self {
        Self { column, value: value.into() }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("row not found: {0}")]
    NotFound(String),
    #[error("duplicate value for unique column {0}")]
    UniqueViolation(String),
    #[error("invalid column name: {0}")]
    InvalidColumn(String),
    #[error("malformed row: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Async row store. Each mutation touches exactly one row.
#[async_trait::async_trait]
pub trait CollectionStore: Send + Sync {
    /// Rows matching every filter, ascending by `table.order_by`.
    async fn select(&self, table: Table, filters: &[Filter]) -> Result<Vec<Value>, StoreError>;

    /// Insert one row and return it as stored (with `id` assigned).
    async fn insert(&self, table: Table, columns: Columns) -> Result<Value, StoreError>;

    /// Overwrite the given columns of row `id` and return the updated row.
    async fn update(&self, table: Table, id: &str, columns: Columns) -> Result<Value, StoreError>;

    /// Remove row `id`.
    async fn delete(&self, table: Table, id: &str) -> Result<(), StoreError>;
}

/// Column names are interpolated into SQL, so only plain identifiers pass.
pub(crate) fn check_identifier(name: &str) -> Result<(), StoreError> {
    let valid = !name.is_empty()
        && name.bytes().all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'_')
        && !name.as_bytes()[0].is_ascii_digit();
    if valid { Ok(()) } else { Err(StoreError::InvalidColumn(name.to_owned())) }
}

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
