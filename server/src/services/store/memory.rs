//! In-memory collection store for local preview and tests.
//!
//! Each table is a `Vec` of JSON objects behind one `tokio::sync::RwLock`,
//! so every mutation is serialized. Unique columns declared on the
//! [`Table`] are enforced the way the Postgres constraints are.

use std::collections::HashMap;
use std::sync::Arc;

use records::Columns;
use serde_json::Value;
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;
use tokio::sync::RwLock;
use uuid::Uuid;

use super::{CollectionStore, Filter, StoreError, Table};

#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<HashMap<&'static str, Vec<Columns>>>>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

fn row_matches(row: &Columns, filters: &[Filter]) -> bool {
    filters.iter().all(|f| row.get(f.column).unwrap_or(&Value::Null) == &f.value)
}

/// Display order, then creation instant. Unparseable or absent timestamps sort first.
fn sort_key(row: &Columns, column: &str) -> (i64, Option<OffsetDateTime>) {
    let order = row.get(column).and_then(Value::as_i64).unwrap_or_default();
    let created = row
        .get("created_at")
        .and_then(Value::as_str)
        .and_then(|raw| OffsetDateTime::parse(raw, &Rfc3339).ok());
    (order, created)
}

fn row_id(row: &Columns) -> Option<&str> {
    row.get("id").and_then(Value::as_str)
}

/// Reject `candidate` if another row already holds one of its unique values.
fn check_unique(table: Table, rows: &[Columns], candidate: &Columns, skip_id: Option<&str>) -> Result<(), StoreError> {
    for column in table.unique {
        let Some(value) = candidate.get(*column).filter(|v| !v.is_null()) else {
            continue;
        };
        let clash = rows
            .iter()
            .filter(|row| skip_id.is_none_or(|id| row_id(row) != Some(id)))
            .any(|row| row.get(*column) == Some(value));
        if clash {
            return Err(StoreError::UniqueViolation(format!("{}_{column}_key", table.name)));
        }
    }
    Ok(())
}

#[async_trait::async_trait]
impl CollectionStore for MemoryStore {
    async fn select(&self, table: Table, filters: &[Filter]) -> Result<Vec<Value>, StoreError> {
        let tables = self.tables.read().await;
        let mut rows: Vec<&Columns> = tables
            .get(table.name)
            .map(|rows| rows.iter().filter(|row| row_matches(row, filters)).collect())
            .unwrap_or_default();
        rows.sort_by_cached_key(|row| sort_key(row, table.order_by));
        Ok(rows.into_iter().cloned().map(Value::Object).collect())
    }

    async fn insert(&self, table: Table, mut columns: Columns) -> Result<Value, StoreError> {
        let mut tables = self.tables.write().await;
        let rows = tables.entry(table.name).or_default();
        check_unique(table, rows, &columns, None)?;
        columns.insert("id".into(), Value::String(Uuid::new_v4().to_string()));
        rows.push(columns.clone());
        Ok(Value::Object(columns))
    }

    async fn update(&self, table: Table, id: &str, columns: Columns) -> Result<Value, StoreError> {
        let mut tables = self.tables.write().await;
        let rows = tables.entry(table.name).or_default();
        check_unique(table, rows, &columns, Some(id))?;
        let row = rows
            .iter_mut()
            .find(|row| row_id(row) == Some(id))
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))?;
        for (key, value) in columns {
            if key != "id" {
                row.insert(key, value);
            }
        }
        Ok(Value::Object(row.clone()))
    }

    async fn delete(&self, table: Table, id: &str) -> Result<(), StoreError> {
        let mut tables = self.tables.write().await;
        let rows = tables.entry(table.name).or_default();
        let before = rows.len();
        rows.retain(|row| row_id(row) != Some(id));
        if rows.len() == before {
            return Err(StoreError::NotFound(id.to_owned()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "memory_test.rs"]
mod tests;
