//! Postgres collection store.
//!
//! Rows travel as `jsonb`: reads use `to_jsonb(t.*)`, writes go through
//! `jsonb_populate_record` so column types come from the table definition
//! rather than from Rust-side binds.

use records::Columns;
use serde_json::Value;
use sqlx::PgPool;
use uuid::Uuid;

use super::{CollectionStore, Filter, StoreError, Table, check_identifier};

#[derive(Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn column_list(table: Table, columns: &Columns) -> Result<String, StoreError> {
    check_identifier(table.name)?;
    let mut names = Vec::with_capacity(columns.len());
    for name in columns.keys() {
        check_identifier(name)?;
        names.push(name.as_str());
    }
    Ok(names.join(", "))
}

/// Ids are UUIDs in Postgres; anything else cannot match a row.
fn parse_id(id: &str) -> Result<Uuid, StoreError> {
    Uuid::parse_str(id).map_err(|_| StoreError::NotFound(id.to_owned()))
}

fn map_write_error(err: sqlx::Error) -> StoreError {
    if let sqlx::Error::Database(db) = &err {
        if db.is_unique_violation() {
            return StoreError::UniqueViolation(db.constraint().unwrap_or("unique").to_owned());
        }
    }
    StoreError::Database(err)
}

pub(crate) fn select_sql(table: Table) -> Result<String, StoreError> {
    check_identifier(table.name)?;
    check_identifier(table.order_by)?;
    Ok(format!(
        "SELECT to_jsonb(t.*) FROM {name} AS t WHERE to_jsonb(t.*) @> $1::jsonb ORDER BY t.{order} ASC, t.created_at ASC",
        name = table.name,
        order = table.order_by,
    ))
}

pub(crate) fn insert_sql(table: Table, columns: &Columns) -> Result<String, StoreError> {
    let cols = column_list(table, columns)?;
    Ok(format!(
        "INSERT INTO {name} ({cols}) SELECT {cols} FROM jsonb_populate_record(NULL::{name}, $1::jsonb) RETURNING to_jsonb({name}.*)",
        name = table.name,
    ))
}

pub(crate) fn update_sql(table: Table, columns: &Columns) -> Result<String, StoreError> {
    let cols = column_list(table, columns)?;
    Ok(format!(
        "UPDATE {name} AS t SET ({cols}) = (SELECT {cols} FROM jsonb_populate_record(NULL::{name}, $2::jsonb)) WHERE t.id = $1 RETURNING to_jsonb(t.*)",
        name = table.name,
    ))
}

#[async_trait::async_trait]
impl CollectionStore for PgStore {
    async fn select(&self, table: Table, filters: &[Filter]) -> Result<Vec<Value>, StoreError> {
        let mut contains = Columns::new();
        for filter in filters {
            check_identifier(filter.column)?;
            contains.insert(filter.column.to_owned(), filter.value.clone());
        }
        let rows = sqlx::query_scalar::<_, Value>(&select_sql(table)?)
            .bind(Value::Object(contains))
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn insert(&self, table: Table, columns: Columns) -> Result<Value, StoreError> {
        let sql = insert_sql(table, &columns)?;
        sqlx::query_scalar::<_, Value>(&sql)
            .bind(Value::Object(columns))
            .fetch_one(&self.pool)
            .await
            .map_err(map_write_error)
    }

    async fn update(&self, table: Table, id: &str, columns: Columns) -> Result<Value, StoreError> {
        let row_id = parse_id(id)?;
        let sql = update_sql(table, &columns)?;
        sqlx::query_scalar::<_, Value>(&sql)
            .bind(row_id)
            .bind(Value::Object(columns))
            .fetch_optional(&self.pool)
            .await
            .map_err(map_write_error)?
            .ok_or_else(|| StoreError::NotFound(id.to_owned()))
    }

    async fn delete(&self, table: Table, id: &str) -> Result<(), StoreError> {
        check_identifier(table.name)?;
        let row_id = parse_id(id)?;
        let result = sqlx::query(&format!("DELETE FROM {} WHERE id = $1", table.name))
            .bind(row_id)
            .execute(&self.pool)
            .await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::NotFound(id.to_owned()));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "postgres_test.rs"]
mod tests;
