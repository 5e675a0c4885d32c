//! Export functionality for plans and content lists.
//!
//! CSV is the only format; it opens in any spreadsheet for review before
//! a plan is confirmed.

use crate::core::library::ContentItem;
use crate::core::organize::OrganizationPlan;
use std::borrow::Cow;
use std::io::Write;
use std::path::Path;

/// Export a plan to CSV
///
/// CSV columns: Source, Destination, File Name, Size (bytes), Conflict
pub fn export_plan_csv<W: Write>(plan: &OrganizationPlan, mut writer: W) -> std::io::Result<()> {
    writeln!(writer, "Source,Destination,File Name,Size (bytes),Conflict")?;

    for file in &plan.files {
        writeln!(
            writer,
            "{},{},{},{},{}",
            csv_field(&file.source_ref),
            csv_field(&file.destination_path),
            csv_field(&file.file_name),
            file.size_bytes,
            file.conflict
        )?;
    }

    Ok(())
}

/// Export content items to CSV
pub fn export_items_csv<W: Write>(items: &[ContentItem], mut writer: W) -> std::io::Result<()> {
    writeln!(
        writer,
        "ID,Title,Niche,Sub-Niche,License,Size (bytes),Extension,Created"
    )?;

    for item in items {
        writeln!(
            writer,
            "{},{},{},{},{},{},{},{}",
            csv_field(&item.id),
            csv_field(&item.title),
            csv_field(item.niche().unwrap_or("")),
            csv_field(item.sub_niche().unwrap_or("")),
            csv_field(item.license_type().unwrap_or("")),
            item.size_bytes(),
            csv_field(item.file_extension().unwrap_or("")),
            item.created_at.to_rfc3339()
        )?;
    }

    Ok(())
}

/// Quote a field if it contains a delimiter, quote or line break
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n', '\r']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

/// Plan size for the preview header, in binary units with one decimal
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{} B", bytes);
    }

    let mut size = bytes as f64 / 1024.0;
    let mut unit = 0;
    while size >= 1024.0 && unit + 1 < UNITS.len() {
        size /= 1024.0;
        unit += 1;
    }
    format!("{:.1} {}", size, UNITS[unit])
}

/// Export a plan to a CSV file
pub fn export_plan_to_file(plan: &OrganizationPlan, path: &Path) -> std::io::Result<()> {
    let file = std::fs::File::create(path)?;
    let mut writer = std::io::BufWriter::new(file);
    export_plan_csv(plan, &mut writer)?;
    writer.flush()
}
