//! Content record types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single PLR content record as supplied by the content store.
///
/// Every optional field has a documented fallback, so an item with nothing
/// but an id, title and timestamp can still be planned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub niche: Option<String>,
    #[serde(default)]
    pub sub_niche: Option<String>,
    #[serde(default)]
    pub license_type: Option<String>,
    #[serde(default)]
    pub file_size_bytes: Option<u64>,
    /// Includes the leading dot (e.g. ".zip")
    #[serde(default)]
    pub file_extension: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub category_name: Option<String>,
}

impl ContentItem {
    /// Create an item with only the required fields set
    pub fn new(id: impl Into<String>, title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            niche: None,
            sub_niche: None,
            license_type: None,
            file_size_bytes: None,
            file_extension: None,
            created_at,
            category_name: None,
        }
    }

    pub fn niche(&self) -> Option<&str> {
        present(&self.niche)
    }

    pub fn sub_niche(&self) -> Option<&str> {
        present(&self.sub_niche)
    }

    pub fn license_type(&self) -> Option<&str> {
        present(&self.license_type)
    }

    pub fn file_extension(&self) -> Option<&str> {
        present(&self.file_extension)
    }

    pub fn category_name(&self) -> Option<&str> {
        present(&self.category_name)
    }

    /// Size in bytes, 0 when unknown
    pub fn size_bytes(&self) -> u64 {
        self.file_size_bytes.unwrap_or(0)
    }
}

/// Empty strings count as missing metadata
fn present(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}
