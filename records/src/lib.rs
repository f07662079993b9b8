//! Shared record model for the site's remote collections.
//!
//! This crate owns the row shapes exchanged between `server` and `client`:
//! the remote record, the form draft that mirrors it, draft validation, and
//! the write policy that turns a draft into column values. Both sides run the
//! same validation so the admin form can block submission locally while the
//! server still refuses bad writes.


pub mod case_study;
pub mod integration;
pub mod slug;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use time::OffsetDateTime;

pub use case_study::{CaseStudy, CaseStudyDraft, Metric};
pub use integration::{Integration, IntegrationDraft};
pub use slug::slugify;

/// Column name → JSON value, as written to the remote store.
pub type Columns = Map<String, Value>;

/// A required draft field was blank.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
}

/// Single-field boolean mutations exposed by the admin list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    Published,
    Featured,
    Active,
}

impl Toggle {
    /// URL path segment used by the admin API.
    #[must_use]
    pub fn as_path(self) -> &'static str {
        match self {
            Self::Published => "publish",
            Self::Featured => "featured",
            Self::Active => "active",
        }
    }

    #[must_use]
    pub fn from_path(segment: &str) -> Option<Self> {
        match segment {
            "publish" => Some(Self::Published),
            "featured" => Some(Self::Featured),
            "active" => Some(Self::Active),
            _ => None,
        }
    }
}

/// Form state mirroring one remote row.
pub trait RecordDraft: Clone + Default + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Check required fields.
    ///
    /// # Errors
    ///
    /// Returns the first blank required field in form order.
    fn validate(&self) -> Result<(), ValidationError>;
}

/// A record editable through the generic admin collection editor.
pub trait EditableRecord: Clone + PartialEq + Serialize + DeserializeOwned + Send + Sync + 'static {
    type Draft: RecordDraft;

    /// Remote table name.
    const TABLE: &'static str;
    /// Path segment under `/api/admin/` and `/admin/`.
    const COLLECTION: &'static str;
    /// Human-readable singular noun for notifications.
    const NOUN: &'static str;
    /// Toggles this record supports.
    const TOGGLES: &'static [Toggle];

    fn id(&self) -> &str;

    fn display_order(&self) -> i32;

    /// Populate a draft field-by-field for editing.
    fn to_draft(&self) -> Self::Draft;

    /// Column values for a create (`previous == None`) or update.
    fn write_columns(draft: &Self::Draft, previous: Option<&Self>, now: OffsetDateTime) -> Columns;

    /// Column values that flip `toggle`, or `None` if unsupported.
    fn toggle_columns(&self, toggle: Toggle, now: OffsetDateTime) -> Option<Columns>;
}

/// Publication policy shared by every write path.
///
/// Publishing keeps an existing stamp and otherwise stamps `now`.
/// Unpublishing clears the stamp.
#[must_use]
pub fn resolve_published_at(
    is_published: bool,
    previous: Option<OffsetDateTime>,
    now: OffsetDateTime,
) -> Option<OffsetDateTime> {
    if is_published { Some(previous.unwrap_or(now)) } else { None }
}

/// RFC 3339 JSON value for a timestamp column (`null` when absent).
#[must_use]
pub fn timestamp_value(ts: Option<OffsetDateTime>) -> Value {
    ts.and_then(|t| t.format(&time::format_description::well_known::Rfc3339).ok())
        .map_or(Value::Null, Value::String)
}

/// Trimmed text, or `null` when blank.
#[must_use]
pub fn optional_text(raw: &str) -> Value {
    let trimmed = raw.trim();
    if trimmed.is_empty() { Value::Null } else { Value::String(trimmed.to_owned()) }
}

pub(crate) fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() { Err(ValidationError::Required(field)) } else { Ok(()) }
}

/// Split a comma-separated tag input into trimmed, non-empty tags.
#[must_use]
pub fn parse_tags(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|tag| !tag.is_empty())
        .map(str::to_owned)
        .collect()
}
