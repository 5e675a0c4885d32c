//! # Reporter Module
//!
//! Turns plans and content lists into shareable exports.

mod export;

pub use export::{export_items_csv, export_plan_csv, export_plan_to_file, format_bytes};
