//! Destination folder generation.

use super::template::apply_template;
use super::types::{FolderStructure, OrganizationConfig};
use crate::core::library::ContentItem;
use chrono::Datelike;

/// Niche fallback for folders
pub const UNCATEGORIZED: &str = "Uncategorized";

/// License fallback for folders
pub const UNKNOWN: &str = "Unknown";

/// Destination folder for an item, always starting with the output base path
pub fn destination_folder(item: &ContentItem, config: &OrganizationConfig) -> String {
    let base = config.output_base_path.as_str();

    let relative = match config.folder_structure {
        FolderStructure::Niche => {
            let niche = item.niche().unwrap_or(UNCATEGORIZED);
            match item.sub_niche() {
                Some(sub_niche) if config.create_subfolders => format!("{}/{}", niche, sub_niche),
                _ => niche.to_string(),
            }
        }
        FolderStructure::License => item.license_type().unwrap_or(UNKNOWN).to_string(),
        FolderStructure::Date => {
            let date = item.created_at;
            format!("{}/{}", date.year(), month_name(date.month()))
        }
        FolderStructure::Custom => apply_template(config.custom_template.as_deref(), item),
        FolderStructure::Unrecognized => {
            let trimmed = base.trim_end_matches('/');
            return if trimmed.is_empty() && !base.is_empty() {
                "/".to_string()
            } else {
                trimmed.to_string()
            };
        }
    };

    format!("{}/{}", base.trim_end_matches('/'), relative)
}

/// Path segments of `folder` below `base`, skipping empty ones
pub fn relative_segments<'a>(folder: &'a str, base: &str) -> impl Iterator<Item = &'a str> {
    folder
        .strip_prefix(base.trim_end_matches('/'))
        .unwrap_or(folder)
        .split('/')
        .filter(|segment| !segment.is_empty())
}

fn month_name(month: u32) -> &'static str {
    match month {
        1 => "January",
        2 => "February",
        3 => "March",
        4 => "April",
        5 => "May",
        6 => "June",
        7 => "July",
        8 => "August",
        9 => "September",
        10 => "October",
        11 => "November",
        12 => "December",
        _ => "Unknown",
    }
}
