//! # CLI Module
//!
//! Command-line interface for the PLR content organizer.
//!
//! ## Usage
//! ```bash
//! # Preview a niche-based layout
//! plr-organize plan library.json --output ~/PLR
//!
//! # Date folders with numbered names, only Health items
//! plr-organize plan library.json --output ~/PLR --structure date --naming numbered --niche Health
//!
//! # Machine-readable output
//! plr-organize plan library.json --config organize.json --format json
//!
//! # Check a custom template
//! plr-organize check-template "{niche}/{author}"
//! ```

use clap::{Args, Parser, Subcommand, ValueEnum};
use console::{style, Term};
use plr_organizer::core::library::{ContentFilter, ContentSource, JsonFileSource};
use plr_organizer::core::organize::{
    resolve_duplicates, unknown_variables, DuplicatePolicy, FileAction, FolderStructure,
    NamingConvention, OrganizationConfig, OrganizationPlan, OrganizePlanner, KNOWN_VARIABLES,
};
use plr_organizer::core::reporter::{export_plan_csv, format_bytes};
use plr_organizer::error::{ConfigError, Result};
use std::path::PathBuf;

/// PLR Organizer - See where your content will go before anything moves
#[derive(Parser, Debug)]
#[command(name = "plr-organize")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Preview how content items would be organized
    Plan {
        /// JSON file with the content records
        items: PathBuf,

        #[command(flatten)]
        config: ConfigArgs,

        /// Only items whose title, niche, sub-niche or category contains this text
        #[arg(short, long)]
        query: Option<String>,

        /// Only items in this niche
        #[arg(long)]
        niche: Option<String>,

        /// Only items with this license type
        #[arg(long)]
        license: Option<String>,

        /// Output format
        #[arg(short, long, default_value = "pretty")]
        format: OutputFormat,
    },

    /// List template variables the organizer doesn't recognize
    CheckTemplate {
        /// The template to check
        template: String,
    },
}

/// Config file plus the flags that override its values
#[derive(Args, Debug)]
struct ConfigArgs {
    /// JSON config file; flags below override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output base folder
    #[arg(short, long)]
    output: Option<String>,

    /// Folder structure
    #[arg(short, long)]
    structure: Option<Structure>,

    /// File naming convention
    #[arg(short, long)]
    naming: Option<Naming>,

    /// What to do with files that land on the same path
    #[arg(short, long)]
    duplicates: Option<Duplicates>,

    /// Don't add a sub-niche level under niche folders
    #[arg(long)]
    no_subfolders: bool,

    /// Folder template for --structure custom, e.g. "{niche}/{license}"
    #[arg(short, long)]
    template: Option<String>,
}

impl ConfigArgs {
    /// Load the config file (or defaults) and apply every flag that was given
    fn resolve(self) -> Result<OrganizationConfig> {
        let mut config = match &self.config {
            Some(path) => OrganizationConfig::from_json_file(path)?,
            None => OrganizationConfig::default(),
        };
        if let Some(output) = self.output {
            config.output_base_path = output;
        }
        if let Some(structure) = self.structure {
            config.folder_structure = structure.into();
        }
        if let Some(naming) = self.naming {
            config.naming_convention = naming.into();
        }
        if let Some(duplicates) = self.duplicates {
            config.handle_duplicates = duplicates.into();
        }
        if self.no_subfolders {
            config.create_subfolders = false;
        }
        if self.template.is_some() {
            config.custom_template = self.template;
        }
        Ok(config)
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Structure {
    /// Niche, then sub-niche
    Niche,
    /// License type
    License,
    /// Year, then month name
    Date,
    /// Custom template (see --template)
    Custom,
}

impl From<Structure> for FolderStructure {
    fn from(structure: Structure) -> Self {
        match structure {
            Structure::Niche => FolderStructure::Niche,
            Structure::License => FolderStructure::License,
            Structure::Date => FolderStructure::Date,
            Structure::Custom => FolderStructure::Custom,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Naming {
    /// Sanitized title
    Original,
    /// Niche - Title - License
    Descriptive,
    /// 001_Title
    Numbered,
}

impl From<Naming> for NamingConvention {
    fn from(naming: Naming) -> Self {
        match naming {
            Naming::Original => NamingConvention::Original,
            Naming::Descriptive => NamingConvention::Descriptive,
            Naming::Numbered => NamingConvention::Numbered,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Duplicates {
    /// Keep the first, leave the rest
    Skip,
    /// Add a numbered suffix (default)
    Rename,
    /// Later files replace earlier ones
    Overwrite,
}

impl From<Duplicates> for DuplicatePolicy {
    fn from(duplicates: Duplicates) -> Self {
        match duplicates {
            Duplicates::Skip => DuplicatePolicy::Skip,
            Duplicates::Rename => DuplicatePolicy::Rename,
            Duplicates::Overwrite => DuplicatePolicy::Overwrite,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum OutputFormat {
    /// Folder tree with colors
    Pretty,
    /// The full plan as JSON
    Json,
    /// One CSV row per planned file
    Csv,
}

/// Run the CLI
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Plan {
            items,
            config,
            query,
            niche,
            license,
            format,
        } => {
            let config = config.resolve()?;

            let mut filter = ContentFilter::new();
            if let Some(query) = query {
                filter = filter.with_query(query);
            }
            if let Some(niche) = niche {
                filter = filter.with_niche(niche);
            }
            if let Some(license) = license {
                filter = filter.with_license_type(license);
            }

            run_plan(items, &config, &filter, format)
        }
        Commands::CheckTemplate { template } => run_check_template(&template),
    }
}

fn run_plan(
    items_path: PathBuf,
    config: &OrganizationConfig,
    filter: &ContentFilter,
    format: OutputFormat,
) -> Result<()> {
    config.validate()?;

    let items = JsonFileSource::new(items_path).fetch_items()?;
    let plan = if filter.is_empty() {
        OrganizePlanner::create_plan(&items, config)
    } else {
        OrganizePlanner::create_plan_indexed(&filter.apply(&items), config)
    };

    match format {
        OutputFormat::Pretty => print_pretty_plan(&Term::stdout(), &plan, config),
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&plan).map_err(std::io::Error::from)?;
            println!("{}", json);
        }
        OutputFormat::Csv => export_plan_csv(&plan, std::io::stdout().lock())?,
    }

    Ok(())
}

fn print_pretty_plan(term: &Term, plan: &OrganizationPlan, config: &OrganizationConfig) {
    term.write_line(&format!(
        "{} {}",
        style("PLR Organizer").bold().cyan(),
        style("preview").dim()
    ))
    .ok();
    term.write_line("").ok();

    // Summary
    term.write_line(&format!(
        "  {} files, {} in {} folders",
        style(plan.stats.total_files).cyan(),
        style(format_bytes(plan.stats.total_size_bytes)).yellow(),
        style(plan.stats.total_folders).cyan()
    ))
    .ok();
    if plan.stats.conflict_count > 0 {
        term.write_line(&format!(
            "  {} files have a taken destination",
            style(plan.stats.conflict_count).red().bold()
        ))
        .ok();
    }
    term.write_line("").ok();

    // Tree
    term.write_line(&format!("{}", style(display_path(&config.output_base_path)).bold()))
        .ok();
    for file in &plan.tree.files {
        term.write_line(&format!("  {}", file.file_name)).ok();
    }
    plan.tree.walk(|node, depth| {
        let indent = "  ".repeat(depth);
        term.write_line(&format!(
            "{}{}/ {}",
            indent,
            style(&node.name).blue().bold(),
            style(format!("({} files)", node.file_count())).dim()
        ))
        .ok();
        for file in &node.files {
            let marker = if file.conflict {
                style("!").red().bold().to_string()
            } else {
                style("·").dim().to_string()
            };
            term.write_line(&format!("{}  {} {}", indent, marker, file.file_name))
                .ok();
        }
    });

    // Conflicts
    if plan.stats.conflict_count > 0 {
        term.write_line("").ok();
        term.write_line(&format!("{}", style("Conflicts:").bold().underlined()))
            .ok();
        for (file, resolution) in plan.files.iter().zip(resolve_duplicates(plan)) {
            if !file.conflict {
                continue;
            }
            let outcome = match &resolution.action {
                FileAction::Place => style("placed".to_string()).green(),
                FileAction::Skip => style("skipped".to_string()).yellow(),
                FileAction::Overwrite => style("overwrites".to_string()).red(),
                FileAction::Rename { destination_path } => {
                    style(format!("renamed to {}", display_path(destination_path))).cyan()
                }
            };
            term.write_line(&format!(
                "  {} {} ({})",
                style(&file.source_ref).dim(),
                display_path(&file.destination_path),
                outcome
            ))
            .ok();
        }
    }

    term.write_line("").ok();
    term.write_line(&format!(
        "{}",
        style("Preview only: no files were moved.").dim()
    ))
    .ok();
}

fn run_check_template(template: &str) -> Result<()> {
    let term = Term::stdout();
    let unknown = unknown_variables(template);

    if unknown.is_empty() {
        term.write_line(&format!("{} Template looks good", style("✓").green().bold()))
            .ok();
        return Ok(());
    }

    for name in &unknown {
        term.write_line(&format!(
            "{} Unrecognized variable {}",
            style("✗").red().bold(),
            style(format!("{{{}}}", name)).yellow()
        ))
        .ok();
    }
    term.write_line(&format!(
        "  Known variables: {}",
        KNOWN_VARIABLES
            .iter()
            .map(|v| format!("{{{}}}", v))
            .collect::<Vec<_>>()
            .join(", ")
    ))
    .ok();

    Err(ConfigError::UnknownTemplateVariables { variables: unknown }.into())
}

/// Show paths under the home directory as `~/...`
fn display_path(path: &str) -> String {
    match dirs::home_dir().and_then(|home| {
        PathBuf::from(path)
            .strip_prefix(&home)
            .ok()
            .map(|rest| rest.display().to_string())
    }) {
        Some(rest) if rest.is_empty() => "~".to_string(),
        Some(rest) => format!("~/{}", rest),
        None => path.to_string(),
    }
}
