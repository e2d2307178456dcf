//! Extracted book metadata

use serde::{Deserialize, Serialize};

/// Book metadata scraped from a product page.
///
/// Every field is optional and best-effort. Fields that could not be
/// extracted are omitted from the JSON output entirely, never emitted as
/// null or empty placeholders.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    /// Author names in page order, de-duplicated. Entries carrying a role
    /// annotation in parentheses (e.g. "(Narrator)") are excluded.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authors: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn10: Option<String>,

    /// ISBN-13 with interior hyphens stripped.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn13: Option<String>,

    /// `isbn10` when present, otherwise `isbn13`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isbn: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub asin: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub publisher: Option<String>,

    /// Normalized to `YYYY-MM-DD`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub published_date: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<u32>,

    /// Locale code: one of pt-BR, en, es, fr, de, it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories: Option<Vec<String>>,
}

impl BookRecord {
    /// Number of populated fields.
    pub fn field_count(&self) -> usize {
        match serde_json::to_value(self) {
            Ok(serde_json::Value::Object(map)) => map.len(),
            _ => 0,
        }
    }
}
