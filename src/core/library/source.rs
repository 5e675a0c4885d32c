//! Content sources that supply records to the planner.

use super::ContentItem;
use crate::error::{Result, SourceError};
use std::fs;
use std::path::{Path, PathBuf};

/// Anything that can supply the list of content records to organize
pub trait ContentSource {
    /// Fetch all content records, in library order
    fn fetch_items(&self) -> Result<Vec<ContentItem>>;
}

/// Reads a JSON array of content records from disk
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ContentSource for JsonFileSource {
    fn fetch_items(&self) -> Result<Vec<ContentItem>> {
        if !self.path.exists() {
            return Err(SourceError::NotFound {
                path: self.path.clone(),
            }
            .into());
        }

        let contents = fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
            path: self.path.clone(),
            source,
        })?;

        let items: Vec<ContentItem> =
            serde_json::from_str(&contents).map_err(|e| SourceError::Parse {
                path: self.path.clone(),
                reason: e.to_string(),
            })?;

        tracing::debug!(count = items.len(), path = %self.path.display(), "Loaded content items");
        Ok(items)
    }
}

/// An in-process list of records
#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    items: Vec<ContentItem>,
}

impl MemorySource {
    pub fn new(items: Vec<ContentItem>) -> Self {
        Self { items }
    }
}

impl ContentSource for MemorySource {
    fn fetch_items(&self) -> Result<Vec<ContentItem>> {
        Ok(self.items.clone())
    }
}
