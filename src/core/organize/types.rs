//! Types for the organize module.

use super::tree::FolderNode;
use crate::error::{ConfigError, OrganizerError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Folder structure options for organization
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum FolderStructure {
    /// Niche, optionally Niche/Sub-Niche (e.g., Health/Weight Loss/)
    #[default]
    Niche,
    /// License type (e.g., MRR/)
    License,
    /// Year/Month name (e.g., 2025/March/)
    Date,
    /// User template with {niche}, {license}, {date}, {category}
    Custom,
    /// Any value this version doesn't know; files stay in the base folder
    #[serde(other)]
    Unrecognized,
}

/// File naming options
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum NamingConvention {
    /// Sanitized title (e.g., Weight_Loss_Guide.zip)
    #[default]
    Original,
    /// Niche - Title - License (e.g., Health - Weight_Loss_Guide - PLR.zip)
    Descriptive,
    /// Library position prefix (e.g., 002_Weight_Loss_Guide.zip)
    Numbered,
    /// Any value this version doesn't know; behaves like `Original`
    #[serde(other)]
    Unrecognized,
}

/// What the mover should do when two files want the same destination
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DuplicatePolicy {
    /// Keep the first file, leave the rest where they are
    Skip,
    /// Give later files a numbered suffix
    #[default]
    Rename,
    /// Later files replace earlier ones
    Overwrite,
}

/// Configuration for an organization preview
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OrganizationConfig {
    pub output_base_path: String,
    pub folder_structure: FolderStructure,
    pub naming_convention: NamingConvention,
    pub handle_duplicates: DuplicatePolicy,
    /// Adds the sub-niche as a second level under the niche folder
    pub create_subfolders: bool,
    pub custom_template: Option<String>,
}

impl Default for OrganizationConfig {
    fn default() -> Self {
        Self {
            output_base_path: String::new(),
            folder_structure: FolderStructure::Niche,
            naming_convention: NamingConvention::Original,
            handle_duplicates: DuplicatePolicy::Rename,
            create_subfolders: true,
            custom_template: None,
        }
    }
}

impl OrganizationConfig {
    /// Default config writing into `output_base_path`
    pub fn new(output_base_path: impl Into<String>) -> Self {
        Self {
            output_base_path: output_base_path.into(),
            ..Self::default()
        }
    }

    /// Load a config from a JSON file. Missing keys take their defaults.
    pub fn from_json_file(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            OrganizerError::from(ConfigError::Parse {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })
        })
    }

    /// Check the config before previewing.
    ///
    /// The planner accepts a blank output path and produces a degenerate plan,
    /// so callers check here first to show a proper message.
    pub fn validate(&self) -> std::result::Result<(), ConfigError> {
        if self.output_base_path.trim().is_empty() {
            return Err(ConfigError::MissingOutputPath);
        }
        Ok(())
    }
}

/// Information about a file to be organized
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedFile {
    /// Id of the content item this file comes from
    pub source_ref: String,
    /// Destination folder + file name
    pub destination_path: String,
    pub file_name: String,
    pub size_bytes: u64,
    /// Another planned file (or a known existing file) has the same destination
    pub conflict: bool,
    /// The destination is already taken on disk, as reported by the caller
    #[serde(default)]
    pub exists: bool,
}

/// Aggregate numbers for the preview header
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanStats {
    pub total_files: usize,
    /// Folders below the root
    pub total_folders: usize,
    pub total_size_bytes: u64,
    pub conflict_count: usize,
}

/// The organization plan (preview)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationPlan {
    /// One entry per input item, in input order
    pub files: Vec<PlannedFile>,
    pub tree: FolderNode,
    pub stats: PlanStats,
    /// Recorded for the mover; the planner never applies it
    pub handle_duplicates: DuplicatePolicy,
    /// Destinations the caller reported as already taken
    #[serde(default)]
    pub existing_paths: BTreeSet<String>,
}

impl OrganizationPlan {
    /// Planned files marked as conflicting
    pub fn conflicts(&self) -> impl Iterator<Item = &PlannedFile> {
        self.files.iter().filter(|f| f.conflict)
    }
}
