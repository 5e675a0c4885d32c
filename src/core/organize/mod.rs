//! Content organization module.
//!
//! Previews where each content item would land under a folder structure and
//! naming convention. Produces a flat list of planned files, a folder tree
//! for display, and summary stats. Nothing here touches the filesystem;
//! moving files is left to whoever confirms the plan.

mod naming;
mod paths;
mod planner;
mod resolve;
mod template;
mod tree;
mod types;

pub use naming::{file_name, sanitize_title, DEFAULT_EXTENSION, MAX_TITLE_LEN};
pub use paths::{destination_folder, relative_segments};
pub use planner::OrganizePlanner;
pub use resolve::{resolve_duplicates, FileAction, Resolution};
pub use template::{apply_template, unknown_variables, KNOWN_VARIABLES};
pub use tree::FolderNode;
pub use types::*;
