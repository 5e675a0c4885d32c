//! Preview of how a mover would apply the duplicate policy.
//!
//! The planner only flags conflicts. This turns a plan into the concrete
//! per-file action a mover would take, so the preview can show renamed
//! names and skipped files before anything is confirmed.

use super::types::{DuplicatePolicy, OrganizationPlan};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// What happens to one planned file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FileAction {
    /// Goes to its planned destination
    Place,
    /// Left where it is
    Skip,
    /// Goes to a suffixed destination instead
    Rename { destination_path: String },
    /// Replaces whatever is at its destination
    Overwrite,
}

/// Resolved action for one planned file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    pub source_ref: String,
    pub action: FileAction,
}

impl Resolution {
    /// Where the file ends up, or `None` when skipped
    pub fn final_destination<'a>(&'a self, planned: &'a str) -> Option<&'a str> {
        match &self.action {
            FileAction::Place | FileAction::Overwrite => Some(planned),
            FileAction::Rename { destination_path } => Some(destination_path.as_str()),
            FileAction::Skip => None,
        }
    }
}

/// Resolve every planned file against the plan's duplicate policy
///
/// The first file claiming a destination is placed unless that destination
/// already exists. Later claimants, and files whose destination already
/// exists, follow the policy. Renamed destinations never collide with another
/// planned destination or an existing path.
pub fn resolve_duplicates(plan: &OrganizationPlan) -> Vec<Resolution> {
    let mut taken: HashSet<String> = plan
        .files
        .iter()
        .map(|f| f.destination_path.clone())
        .chain(plan.existing_paths.iter().cloned())
        .collect();
    let mut claimed: HashSet<&str> = HashSet::new();
    let mut counters: HashMap<String, usize> = HashMap::new();

    plan.files
        .iter()
        .map(|file| {
            let path = file.destination_path.as_str();
            let first_claim = claimed.insert(path);
            let exists = file.exists || plan.existing_paths.contains(path);
            let blocked = !first_claim || exists;

            let action = if !blocked {
                FileAction::Place
            } else {
                match plan.handle_duplicates {
                    DuplicatePolicy::Skip => FileAction::Skip,
                    DuplicatePolicy::Overwrite => FileAction::Overwrite,
                    DuplicatePolicy::Rename => {
                        let renamed = unique_path(path, &taken, &mut counters);
                        taken.insert(renamed.clone());
                        FileAction::Rename {
                            destination_path: renamed,
                        }
                    }
                }
            };

            Resolution {
                source_ref: file.source_ref.clone(),
                action,
            }
        })
        .collect()
}

/// Next free `{stem}_{n}{ext}` for `path`, tracking a counter per path so
/// repeated duplicates don't rescan from 1
fn unique_path(path: &str, taken: &HashSet<String>, counters: &mut HashMap<String, usize>) -> String {
    let (folder, name) = path.rsplit_once('/').unwrap_or(("", path));
    let (stem, ext) = match name.rfind('.') {
        Some(dot) if dot > 0 => name.split_at(dot),
        _ => (name, ""),
    };

    let counter = counters.entry(path.to_string()).or_insert(1);
    loop {
        let candidate = format!("{}/{}_{}{}", folder, stem, counter, ext);
        *counter += 1;
        if !taken.contains(&candidate) {
            return candidate;
        }
    }
}
