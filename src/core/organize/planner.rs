//! Plan generator for organization previews.

use super::naming::file_name;
use super::paths::{destination_folder, relative_segments};
use super::tree::FolderNode;
use super::types::*;
use crate::core::library::ContentItem;
use std::collections::{HashMap, HashSet};

/// Generates organization plans
///
/// Planning is a pure function of the items and config: nothing is read
/// from or written to disk, and every call builds a fresh plan.
pub struct OrganizePlanner;

impl OrganizePlanner {
    /// Plan the whole library. Numbered names use each item's index in `items`.
    pub fn create_plan(items: &[ContentItem], config: &OrganizationConfig) -> OrganizationPlan {
        Self::build(items.iter().enumerate(), config, None)
    }

    /// Plan a subset of the library, e.g. the output of `ContentFilter::apply`.
    ///
    /// Each entry carries the item's position in the full library, which
    /// numbered names use instead of the position within the subset.
    pub fn create_plan_indexed(
        items: &[(usize, &ContentItem)],
        config: &OrganizationConfig,
    ) -> OrganizationPlan {
        Self::build(items.iter().copied(), config, None)
    }

    /// Plan the whole library, also flagging destinations that already exist
    ///
    /// `existing` holds destination paths the caller knows are taken (for
    /// example from a listing of the output folder).
    pub fn create_plan_with_existing(
        items: &[ContentItem],
        config: &OrganizationConfig,
        existing: &HashSet<String>,
    ) -> OrganizationPlan {
        Self::build(items.iter().enumerate(), config, Some(existing))
    }

    fn build<'a, I>(
        entries: I,
        config: &OrganizationConfig,
        existing: Option<&HashSet<String>>,
    ) -> OrganizationPlan
    where
        I: Iterator<Item = (usize, &'a ContentItem)>,
    {
        if config.output_base_path.trim().is_empty() {
            tracing::warn!("Planning without an output folder; destinations will be relative to /");
        }

        let mut total_size = 0u64;
        let mut folders = Vec::new();
        let mut files: Vec<PlannedFile> = entries
            .map(|(position, item)| {
                let folder = destination_folder(item, config);
                let name = file_name(item, config, position);
                let size = item.size_bytes();
                total_size += size;

                let planned = PlannedFile {
                    source_ref: item.id.clone(),
                    destination_path: format!("{}/{}", folder.trim_end_matches('/'), name),
                    file_name: name,
                    size_bytes: size,
                    conflict: false,
                    exists: false,
                };
                folders.push(folder);
                planned
            })
            .collect();

        let conflict_count = Self::mark_conflicts(&mut files, existing);

        let mut tree = FolderNode::root();
        for (file, folder) in files.iter().zip(&folders) {
            tree.insert(
                relative_segments(folder, &config.output_base_path),
                file.clone(),
            );
        }

        let stats = PlanStats {
            total_files: files.len(),
            total_folders: tree.count_folders(),
            total_size_bytes: total_size,
            conflict_count,
        };

        tracing::debug!(
            files = stats.total_files,
            folders = stats.total_folders,
            bytes = stats.total_size_bytes,
            "Built organization plan"
        );
        if conflict_count > 0 {
            tracing::warn!(conflicts = conflict_count, "Plan has conflicting destinations");
        }

        OrganizationPlan {
            files,
            tree,
            stats,
            handle_duplicates: config.handle_duplicates,
            existing_paths: existing
                .map(|e| e.iter().cloned().collect())
                .unwrap_or_default(),
        }
    }

    /// Flag every file whose destination is shared with another planned file
    /// or already exists. Returns the number of flagged files.
    fn mark_conflicts(files: &mut [PlannedFile], existing: Option<&HashSet<String>>) -> usize {
        let mut claims: HashMap<String, usize> = HashMap::new();
        for file in files.iter() {
            *claims.entry(file.destination_path.clone()).or_insert(0) += 1;
        }

        let mut conflict_count = 0;
        for file in files.iter_mut() {
            let shared = claims.get(&file.destination_path).copied().unwrap_or(0) > 1;
            file.exists = existing.is_some_and(|e| e.contains(&file.destination_path));
            file.conflict = shared || file.exists;
            if file.conflict {
                conflict_count += 1;
            }
        }
        conflict_count
    }
}
