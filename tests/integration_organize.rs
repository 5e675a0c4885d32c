//! Integration tests for organization planning.
//!
//! These tests verify end-to-end planner behavior including:
//! - Tree shape and stats for a small library
//! - Metadata fallbacks
//! - Numbered, custom and date layouts
//! - Accounting invariants that hold for any input

use chrono::{DateTime, TimeZone, Utc};
use plr_organizer::core::library::{ContentFilter, ContentItem};
use plr_organizer::core::organize::{
    resolve_duplicates, sanitize_title, DuplicatePolicy, FileAction, FolderNode, FolderStructure,
    NamingConvention, OrganizationConfig, OrganizePlanner,
};
use std::collections::HashSet;

fn created() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 15, 9, 30, 0).unwrap()
}

fn item(id: &str, title: &str, niche: Option<&str>, sub_niche: Option<&str>) -> ContentItem {
    let mut item = ContentItem::new(id, title, created());
    item.niche = niche.map(str::to_string);
    item.sub_niche = sub_niche.map(str::to_string);
    item
}

fn library() -> Vec<ContentItem> {
    let mut guide = item("1", "Weight Loss Guide", Some("Health"), Some("Weight Loss"));
    guide.file_size_bytes = Some(1_048_576);
    vec![
        guide,
        item("2", "SEO Tips!!", Some("Health"), Some("SEO")),
        item("3", "Weight Loss Guide", Some("Health"), Some("Weight Loss")),
    ]
}

fn sum_files(node: &FolderNode) -> usize {
    node.files.len() + node.children.values().map(sum_files).sum::<usize>()
}

#[test]
fn test_niche_plan_end_to_end() {
    let config = OrganizationConfig {
        output_base_path: "/out".to_string(),
        folder_structure: FolderStructure::Niche,
        naming_convention: NamingConvention::Original,
        handle_duplicates: DuplicatePolicy::Rename,
        create_subfolders: true,
        custom_template: None,
    };

    let plan = OrganizePlanner::create_plan(&library(), &config);

    assert_eq!(plan.tree.children.len(), 1);
    let health = plan.tree.get(["Health"]).expect("Health folder");
    let children: Vec<_> = health.children.keys().map(String::as_str).collect();
    assert_eq!(children, vec!["Weight Loss", "SEO"]);

    let weight_loss = plan.tree.get(["Health", "Weight Loss"]).unwrap();
    assert_eq!(weight_loss.files.len(), 2);
    assert!(weight_loss.files.iter().all(|f| f.conflict));
    assert_eq!(weight_loss.files[0].source_ref, "1");
    assert_eq!(weight_loss.files[1].source_ref, "3");

    let seo = plan.tree.get(["Health", "SEO"]).unwrap();
    assert_eq!(seo.files.len(), 1);
    assert_eq!(seo.files[0].file_name, "SEO_Tips__.zip");
    assert!(!seo.files[0].conflict);

    assert_eq!(plan.stats.total_files, 3);
    assert_eq!(plan.stats.conflict_count, 2);
    assert_eq!(plan.stats.total_folders, 3);
    assert_eq!(plan.stats.total_size_bytes, 1_048_576);
    assert_eq!(
        plan.files[0].destination_path,
        "/out/Health/Weight Loss/Weight_Loss_Guide.zip"
    );
}

#[test]
fn test_plan_is_deterministic() {
    let config = OrganizationConfig::new("/out");
    let first = OrganizePlanner::create_plan(&library(), &config);
    let second = OrganizePlanner::create_plan(&library(), &config);
    assert_eq!(first, second);
}

#[test]
fn test_accounting_invariants_hold_for_every_layout() {
    let mut items = library();
    let mut bare = ContentItem::new("4", "Bare", Utc.with_ymd_and_hms(2024, 11, 2, 0, 0, 0).unwrap());
    bare.file_size_bytes = Some(10);
    items.push(bare);

    let structures = [
        FolderStructure::Niche,
        FolderStructure::License,
        FolderStructure::Date,
        FolderStructure::Custom,
        FolderStructure::Unrecognized,
    ];
    for structure in structures {
        let config = OrganizationConfig {
            folder_structure: structure,
            custom_template: Some("{category}/{date}".to_string()),
            ..OrganizationConfig::new("/library/out")
        };
        let plan = OrganizePlanner::create_plan(&items, &config);

        assert_eq!(plan.stats.total_files, items.len());
        assert_eq!(plan.stats.total_size_bytes, 1_048_576 + 10);
        assert_eq!(sum_files(&plan.tree), items.len());
        assert_eq!(plan.tree.file_count(), items.len());
        assert!(plan
            .files
            .iter()
            .all(|f| f.destination_path.starts_with("/library/out")));

        for file in &plan.files {
            let shared = plan
                .files
                .iter()
                .filter(|other| other.destination_path == file.destination_path)
                .count()
                > 1;
            assert_eq!(file.conflict, shared, "{:?}", structure);
        }
    }
}

#[test]
fn test_missing_metadata_uses_fallbacks() {
    let items = vec![ContentItem::new("1", "Keto Plan", created())];
    let config = OrganizationConfig {
        folder_structure: FolderStructure::Niche,
        naming_convention: NamingConvention::Descriptive,
        ..OrganizationConfig::new("/out")
    };

    let plan = OrganizePlanner::create_plan(&items, &config);
    assert_eq!(plan.files[0].file_name, "Unknown - Keto_Plan - PLR.zip");
    assert_eq!(
        plan.files[0].destination_path,
        "/out/Uncategorized/Unknown - Keto_Plan - PLR.zip"
    );
}

#[test]
fn test_numbered_names_use_library_position() {
    let config = OrganizationConfig {
        naming_convention: NamingConvention::Numbered,
        ..OrganizationConfig::new("/out")
    };

    let plan = OrganizePlanner::create_plan(&library(), &config);
    assert!(plan.files[1].file_name.starts_with("002_"));

    // Filtering keeps the full-library numbering
    let items = library();
    let seo_only = ContentFilter::new().with_query("seo").apply(&items);
    let filtered = OrganizePlanner::create_plan_indexed(&seo_only, &config);
    assert_eq!(filtered.files.len(), 1);
    assert_eq!(filtered.files[0].file_name, "002_SEO_Tips__.zip");
}

#[test]
fn test_custom_template_layout() {
    let mut health = item("1", "Guide", Some("Health"), None);
    health.license_type = Some("PLR".to_string());
    let config = OrganizationConfig {
        folder_structure: FolderStructure::Custom,
        custom_template: Some("{niche}/{license}".to_string()),
        ..OrganizationConfig::new("/out")
    };

    let plan = OrganizePlanner::create_plan(&[health], &config);
    assert_eq!(plan.files[0].destination_path, "/out/Health/PLR/Guide.zip");
    assert!(plan.tree.get(["Health", "PLR"]).is_some());
    assert_eq!(plan.stats.total_folders, 2);
}

#[test]
fn test_date_layout() {
    let config = OrganizationConfig {
        folder_structure: FolderStructure::Date,
        ..OrganizationConfig::new("/out")
    };

    let plan = OrganizePlanner::create_plan(&[item("1", "Guide", None, None)], &config);
    assert_eq!(plan.files[0].destination_path, "/out/2025/March/Guide.zip");
}

#[test]
fn test_rename_preview_resolves_every_conflict() {
    let plan = OrganizePlanner::create_plan(&library(), &OrganizationConfig::new("/out"));
    let resolved = resolve_duplicates(&plan);

    assert_eq!(resolved.len(), 3);
    assert_eq!(resolved[0].action, FileAction::Place);
    assert_eq!(
        resolved[2].action,
        FileAction::Rename {
            destination_path: "/out/Health/Weight Loss/Weight_Loss_Guide_1.zip".to_string()
        }
    );
}

#[test]
fn test_existing_destinations_follow_policy_in_preview() {
    let items = vec![
        item("1", "Guide", Some("Health"), None),
        item("2", "Guide", Some("Health"), None),
    ];
    let existing: HashSet<String> = ["/out/Health/Guide.zip".to_string()].into_iter().collect();
    let config = OrganizationConfig {
        handle_duplicates: DuplicatePolicy::Skip,
        ..OrganizationConfig::new("/out")
    };

    let plan = OrganizePlanner::create_plan_with_existing(&items, &config, &existing);
    let skipped: Vec<_> = resolve_duplicates(&plan).into_iter().map(|r| r.action).collect();
    assert_eq!(skipped, vec![FileAction::Skip, FileAction::Skip]);

    let existing: HashSet<String> = ["/out/Health/Guide.zip", "/out/Health/Guide_1.zip"]
        .into_iter()
        .map(str::to_string)
        .collect();
    let plan = OrganizePlanner::create_plan_with_existing(
        &items[..1],
        &OrganizationConfig::new("/out"),
        &existing,
    );
    assert_eq!(
        resolve_duplicates(&plan)[0].action,
        FileAction::Rename {
            destination_path: "/out/Health/Guide_2.zip".to_string()
        }
    );
}

#[test]
fn test_sanitized_titles_are_bounded() {
    let title = "An Extremely Long Title About Everything You Need To Know About Keto";
    let sanitized = sanitize_title(title);
    assert_eq!(sanitized.len(), 50);
    assert!(sanitized.chars().all(|c| c.is_ascii_alphanumeric() || c == '_'));
}
