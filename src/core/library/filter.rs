//! Search and filter predicates over the content library.

use super::ContentItem;

/// Filters content items for the library views
///
/// All criteria are optional and combined with AND. Matching is
/// case-insensitive throughout.
#[derive(Debug, Clone, Default)]
pub struct ContentFilter {
    query: Option<String>,
    niche: Option<String>,
    license_type: Option<String>,
    file_extension: Option<String>,
}

impl ContentFilter {
    /// Create a filter that accepts everything
    pub fn new() -> Self {
        Self::default()
    }

    /// Free-text search over title, niche, sub-niche and category
    pub fn with_query(mut self, query: impl Into<String>) -> Self {
        self.query = normalize(query.into());
        self
    }

    /// Only items in this niche
    pub fn with_niche(mut self, niche: impl Into<String>) -> Self {
        self.niche = normalize(niche.into());
        self
    }

    /// Only items with this license type
    pub fn with_license_type(mut self, license_type: impl Into<String>) -> Self {
        self.license_type = normalize(license_type.into());
        self
    }

    /// Only items with this extension (leading dot optional)
    pub fn with_file_extension(mut self, extension: impl Into<String>) -> Self {
        self.file_extension =
            normalize(extension.into()).map(|e| e.trim_start_matches('.').to_string());
        self
    }

    /// Whether no criteria are set
    pub fn is_empty(&self) -> bool {
        self.query.is_none()
            && self.niche.is_none()
            && self.license_type.is_none()
            && self.file_extension.is_none()
    }

    /// Check if an item should be included
    pub fn matches(&self, item: &ContentItem) -> bool {
        if let Some(query) = &self.query {
            let hit = [
                Some(item.title.as_str()),
                item.niche(),
                item.sub_niche(),
                item.category_name(),
            ]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(query));
            if !hit {
                return false;
            }
        }

        if !equals_ignore_case(self.niche.as_deref(), item.niche()) {
            return false;
        }

        if !equals_ignore_case(self.license_type.as_deref(), item.license_type()) {
            return false;
        }

        let extension = item.file_extension().map(|e| e.trim_start_matches('.'));
        equals_ignore_case(self.file_extension.as_deref(), extension)
    }

    /// Select matching items, keeping each item's position in the full library
    ///
    /// The positions feed numbered naming, so a filtered preview numbers
    /// files the same way the full library would.
    pub fn apply<'a>(&self, items: &'a [ContentItem]) -> Vec<(usize, &'a ContentItem)> {
        items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.matches(item))
            .collect()
    }
}

fn normalize(value: String) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_lowercase())
    }
}

/// `wanted` is already lowercased; no criterion always matches
fn equals_ignore_case(wanted: Option<&str>, actual: Option<&str>) -> bool {
    match wanted {
        None => true,
        Some(wanted) => actual.is_some_and(|a| a.to_lowercase() == wanted),
    }
}
