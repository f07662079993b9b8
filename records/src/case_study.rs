//! Case study rows (`case_studies` table) and their admin form draft.

#[cfg(test)]
#[path = "case_study_test.rs"]
mod case_study_test;

use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use time::OffsetDateTime;

use crate::{
    Columns, EditableRecord, RecordDraft, Toggle, ValidationError, optional_text, require, resolve_published_at,
    slugify, timestamp_value,
};

/// One headline figure shown on a case study card.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Metric {
    pub icon: String,
    pub value: String,
    pub label: String,
}

impl Metric {
    fn is_blank(&self) -> bool {
        self.icon.trim().is_empty() && self.value.trim().is_empty() && self.label.trim().is_empty()
    }
}

/// Which column of a metric row a form input edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MetricField {
    Icon,
    Value,
    Label,
}

/// Remote case study row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseStudy {
    pub id: String,
    pub client_name: String,
    pub industry: String,
    pub title: String,
    pub description: String,
    pub slug: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub metrics: Vec<Metric>,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub challenge: Option<String>,
    #[serde(default)]
    pub solution: Option<String>,
    #[serde(default)]
    pub results: Option<String>,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub is_published: bool,
    #[serde(default, with = "time::serde::rfc3339::option")]
    pub published_at: Option<OffsetDateTime>,
    #[serde(default)]
    pub featured: bool,
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

/// Industries offered by the admin form select.
pub const INDUSTRIES: &[&str] = &[
    "Financial Services",
    "Healthcare",
    "Retail",
    "Manufacturing",
    "Technology",
    "Telecommunications",
    "Public Sector",
    "Energy",
];

/// Admin form state for a case study.
///
/// Optional text columns are plain strings here; blank means `null` on write.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CaseStudyDraft {
    pub client_name: String,
    pub industry: String,
    pub title: String,
    pub description: String,
    pub slug: String,
    pub image_url: String,
    pub metrics: Vec<Metric>,
    pub tags: Vec<String>,
    pub challenge: String,
    pub solution: String,
    pub results: String,
    pub content: String,
    pub is_published: bool,
    pub featured: bool,
    pub display_order: i32,
    /// Set once the slug is typed by hand; stops title-driven derivation.
    #[serde(skip)]
    pub slug_edited: bool,
}

impl CaseStudyDraft {
    /// Update the title, re-deriving the slug unless it was edited by hand.
    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
        if !self.slug_edited {
            self.slug = slugify(&self.title);
        }
    }

    pub fn set_slug(&mut self, slug: impl Into<String>) {
        self.slug = slug.into();
        self.slug_edited = true;
    }

    pub fn add_metric(&mut self) {
        self.metrics.push(Metric::default());
    }

    pub fn remove_metric(&mut self, index: usize) {
        if index < self.metrics.len() {
            self.metrics.remove(index);
        }
    }

    pub fn set_metric(&mut self, index: usize, field: MetricField, value: impl Into<String>) {
        let Some(metric) = self.metrics.get_mut(index) else {
            return;
        };
        let value = value.into();
        match field {
            MetricField::Icon => metric.icon = value,
            MetricField::Value => metric.value = value,
            MetricField::Label => metric.label = value,
        }
    }
}

impl RecordDraft for CaseStudyDraft {
    fn validate(&self) -> Result<(), ValidationError> {
        require("client name", &self.client_name)?;
        require("industry", &self.industry)?;
        require("title", &self.title)?;
        require("slug", &self.slug)?;
        require("description", &self.description)
    }
}

impl EditableRecord for CaseStudy {
    type Draft = CaseStudyDraft;

    const TABLE: &'static str = "case_studies";
    const COLLECTION: &'static str = "case-studies";
    const NOUN: &'static str = "case study";
    const TOGGLES: &'static [Toggle] = &[Toggle::Published, Toggle::Featured];

    fn id(&self) -> &str {
        &self.id
    }

    fn display_order(&self) -> i32 {
        self.display_order
    }

    fn to_draft(&self) -> CaseStudyDraft {
        CaseStudyDraft {
            client_name: self.client_name.clone(),
            industry: self.industry.clone(),
            title: self.title.clone(),
            description: self.description.clone(),
            slug: self.slug.clone(),
            image_url: self.image_url.clone().unwrap_or_default(),
            metrics: self.metrics.clone(),
            tags: self.tags.clone(),
            challenge: self.challenge.clone().unwrap_or_default(),
            solution: self.solution.clone().unwrap_or_default(),
            results: self.results.clone().unwrap_or_default(),
            content: self.content.clone().unwrap_or_default(),
            is_published: self.is_published,
            featured: self.featured,
            display_order: self.display_order,
            slug_edited: true,
        }
    }

    fn write_columns(draft: &CaseStudyDraft, previous: Option<&Self>, now: OffsetDateTime) -> Columns {
        let metrics: Vec<&Metric> = draft.metrics.iter().filter(|m| !m.is_blank()).collect();
        let published_at =
            resolve_published_at(draft.is_published, previous.and_then(|p| p.published_at), now);

        let mut columns = Columns::new();
        columns.insert("client_name".into(), Value::String(draft.client_name.trim().to_owned()));
        columns.insert("industry".into(), Value::String(draft.industry.trim().to_owned()));
        columns.insert("title".into(), Value::String(draft.title.trim().to_owned()));
        columns.insert("description".into(), Value::String(draft.description.trim().to_owned()));
        columns.insert("slug".into(), Value::String(draft.slug.trim().to_owned()));
        columns.insert("image_url".into(), optional_text(&draft.image_url));
        columns.insert("metrics".into(), json!(metrics));
        columns.insert("tags".into(), json!(draft.tags));
        columns.insert("challenge".into(), optional_text(&draft.challenge));
        columns.insert("solution".into(), optional_text(&draft.solution));
        columns.insert("results".into(), optional_text(&draft.results));
        columns.insert("content".into(), optional_text(&draft.content));
        columns.insert("is_published".into(), Value::Bool(draft.is_published));
        columns.insert("published_at".into(), timestamp_value(published_at));
        columns.insert("featured".into(), Value::Bool(draft.featured));
        columns.insert("display_order".into(), json!(draft.display_order));
        columns.insert("updated_at".into(), timestamp_value(Some(now)));
        if previous.is_none() {
            columns.insert("created_at".into(), timestamp_value(Some(now)));
        }
        columns
    }

    fn toggle_columns(&self, toggle: Toggle, now: OffsetDateTime) -> Option<Columns> {
        let mut columns = Columns::new();
        match toggle {
            Toggle::Published => {
                let is_published = !self.is_published;
                columns.insert("is_published".into(), Value::Bool(is_published));
                columns.insert(
                    "published_at".into(),
                    timestamp_value(resolve_published_at(is_published, self.published_at, now)),
                );
            }
            Toggle::Featured => {
                columns.insert("featured".into(), Value::Bool(!self.featured));
            }
            Toggle::Active => return None,
        }
        columns.insert("updated_at".into(), timestamp_value(Some(now)));
        Some(columns)
    }
}
