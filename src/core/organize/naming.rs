//! File name generation.

use super::types::{NamingConvention, OrganizationConfig};
use crate::core::library::ContentItem;

/// Extension used when an item has none
pub const DEFAULT_EXTENSION: &str = ".zip";

/// Longest sanitized title kept in a file name
pub const MAX_TITLE_LEN: usize = 50;

/// Replace everything except ASCII letters and digits with `_`, then cut to
/// `MAX_TITLE_LEN` characters
pub fn sanitize_title(title: &str) -> String {
    title
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c } else { '_' })
        .take(MAX_TITLE_LEN)
        .collect()
}

/// File name for an item under the configured naming convention
///
/// `position` is the item's 0-based position in the full library; numbered
/// names show it 1-based and zero-padded to three digits.
pub fn file_name(item: &ContentItem, config: &OrganizationConfig, position: usize) -> String {
    let title = sanitize_title(&item.title);
    let extension = item.file_extension().unwrap_or(DEFAULT_EXTENSION);

    match config.naming_convention {
        NamingConvention::Descriptive => format!(
            "{} - {} - {}{}",
            item.niche().unwrap_or("Unknown"),
            title,
            item.license_type().unwrap_or("PLR"),
            extension
        ),
        NamingConvention::Numbered => format!("{:03}_{}{}", position + 1, title, extension),
        NamingConvention::Original | NamingConvention::Unrecognized => {
            format!("{}{}", title, extension)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn item(title: &str) -> ContentItem {
        ContentItem::new("1", title, Utc.with_ymd_and_hms(2025, 1, 1, 0, 0, 0).unwrap())
    }

    fn config(naming: NamingConvention) -> OrganizationConfig {
        OrganizationConfig {
            naming_convention: naming,
            ..OrganizationConfig::new("/out")
        }
    }

    #[test]
    fn test_sanitize_replaces_non_alphanumerics() {
        assert_eq!(sanitize_title("SEO Tips!!"), "SEO_Tips__");
        assert_eq!(sanitize_title("Café & Co."), "Caf____Co_");
    }

    #[test]
    fn test_sanitize_truncates_after_replacing() {
        let long = "a b".repeat(30);
        let sanitized = sanitize_title(&long);
        assert_eq!(sanitized.len(), MAX_TITLE_LEN);
        assert!(sanitized.starts_with("a_ba_b"));
    }

    #[test]
    fn test_original_naming() {
        let mut item = item("Weight Loss Guide");
        assert_eq!(file_name(&item, &config(NamingConvention::Original), 0), "Weight_Loss_Guide.zip");

        item.file_extension = Some(".pdf".to_string());
        assert_eq!(file_name(&item, &config(NamingConvention::Original), 0), "Weight_Loss_Guide.pdf");
    }

    #[test]
    fn test_descriptive_naming_fallbacks() {
        assert_eq!(
            file_name(&item("Keto Plan"), &config(NamingConvention::Descriptive), 0),
            "Unknown - Keto_Plan - PLR.zip"
        );
    }

    #[test]
    fn test_descriptive_naming_with_metadata() {
        let mut item = item("Keto Plan");
        item.niche = Some("Health".to_string());
        item.license_type = Some("MRR".to_string());
        assert_eq!(
            file_name(&item, &config(NamingConvention::Descriptive), 0),
            "Health - Keto_Plan - MRR.zip"
        );
    }

    #[test]
    fn test_numbered_naming_uses_position() {
        let config = config(NamingConvention::Numbered);
        assert_eq!(file_name(&item("A"), &config, 1), "002_A.zip");
        assert_eq!(file_name(&item("A"), &config, 999), "1000_A.zip");
    }

    #[test]
    fn test_unrecognized_naming_falls_back_to_original() {
        assert_eq!(file_name(&item("A b"), &config(NamingConvention::Unrecognized), 4), "A_b.zip");
    }
}
