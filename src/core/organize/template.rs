//! Custom folder templates.
//!
//! A template is a path pattern such as `{niche}/{license}` whose variables
//! are filled from item metadata. Variables this module doesn't know stay
//! in the path verbatim; `unknown_variables` lets a UI flag them.

use super::paths::{UNCATEGORIZED, UNKNOWN};
use crate::core::library::ContentItem;
use chrono::Datelike;
use regex::Regex;
use std::sync::OnceLock;

/// Used when the template is empty or unset
pub const DEFAULT_TEMPLATE: &str = "{niche}";

/// Category fallback for `{category}`
pub const OTHER_CATEGORY: &str = "Other";

/// Variables a template may use, in substitution order
pub const KNOWN_VARIABLES: [&str; 4] = ["niche", "license", "date", "category"];

fn variable_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{([^{}]*)\}").unwrap())
}

/// Fill a template from an item's metadata
///
/// Each known variable is replaced at its first occurrence only, in the
/// order niche, license, date, category. `{date}` is the four-digit year.
pub fn apply_template(template: Option<&str>, item: &ContentItem) -> String {
    let template = template.filter(|t| !t.is_empty()).unwrap_or(DEFAULT_TEMPLATE);

    let year = item.created_at.year().to_string();
    let replacements = [
        ("{niche}", item.niche().unwrap_or(UNCATEGORIZED)),
        ("{license}", item.license_type().unwrap_or(UNKNOWN)),
        ("{date}", year.as_str()),
        ("{category}", item.category_name().unwrap_or(OTHER_CATEGORY)),
    ];

    replacements
        .iter()
        .fold(template.to_string(), |path, (token, value)| {
            path.replacen(*token, value, 1)
        })
}

/// Variables in `template` that `apply_template` won't fill, in order of
/// first appearance, without duplicates
pub fn unknown_variables(template: &str) -> Vec<String> {
    let mut unknown: Vec<String> = Vec::new();
    for capture in variable_pattern().captures_iter(template) {
        let name = &capture[1];
        if !KNOWN_VARIABLES.contains(&name) && !unknown.iter().any(|u| u == name) {
            unknown.push(name.to_string());
        }
    }
    unknown
}
