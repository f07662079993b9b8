//! Integration partner rows (`xops360_integrations` table).

#[cfg(test)]
#[path = "integration_test.rs"]
mod integration_test;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use time::OffsetDateTime;

use crate::{Columns, EditableRecord, RecordDraft, Toggle, ValidationError, optional_text, require, timestamp_value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Integration {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub website_url: Option<String>,
    #[serde(default)]
    pub is_active: bool,
    #[serde(default)]
    pub display_order: i32,
    #[serde(default)]
    pub created_by: Option<String>,
    #[serde(default)]
    pub updated_by: Option<String>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub created_at: Option<OffsetDateTime>,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub updated_at: Option<OffsetDateTime>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IntegrationDraft {
    pub name: String,
    pub category: String,
    pub description: String,
    pub logo_url: String,
    pub website_url: String,
    pub is_active: bool,
    pub display_order: i32,
}

impl RecordDraft for IntegrationDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("category", &self.category)
    }
}

impl EditableRecord for Integration {
    type Draft = IntegrationDraft;

    const TABLE: &'static str = "xops360_integrations";
    const COLLECTION: &'static str = "integrations";
    const NOUN: &'static str = "integration";
    const TOGGLES: &'static [Toggle] = &[Toggle::Active];

    fn id(&self) -> &str {
        &self.id
    }

    fn display_order(&self) -> i32 {
        self.display_order
    }

    fn to_draft(&self) -> IntegrationDraft {
        IntegrationDraft {
            name: self.name.clone(),
            category: self.category.clone(),
            description: self.description.clone().unwrap_or_default(),
            logo_url: self.logo_url.clone().unwrap_or_default(),
            website_url: self.website_url.clone().unwrap_or_default(),
            is_active: self.is_active,
            display_order: self.display_order,
        }
    }

    fn write_columns(draft: &IntegrationDraft, previous: Option<&Self>, now: OffsetDateTime) -> Columns {
        let mut columns = Columns::new();
        columns.insert("name".into(), Value::String(draft.name.trim().to_owned()));
        columns.insert("category".into(), Value::String(draft.category.trim().to_owned()));
        columns.insert("description".into(), optional_text(&draft.description));
        columns.insert("logo_url".into(), optional_text(&draft.logo_url));
        columns.insert("website_url".into(), optional_text(&draft.website_url));
        columns.insert("is_active".into(), Value::Bool(draft.is_active));
        columns.insert("display_order".into(), json!(draft.display_order));
        columns.insert("updated_at".into(), timestamp_value(Some(now)));
        if previous.is_none() {
            columns.insert("created_at".into(), timestamp_value(Some(now)));
        }
        columns
    }

    fn toggle_columns(&self, toggle: Toggle, now: OffsetDateTime) -> Option<Columns> {
        if toggle != Toggle::Active {
            return None;
        }
        let mut columns = Columns::new();
        columns.insert("is_active".into(), Value::Bool(!self.is_active));
        columns.insert("updated_at".into(), timestamp_value(Some(now)));
        Some(columns)
    }
}
