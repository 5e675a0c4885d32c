//! # Core Module
//!
//! The UI-agnostic organization engine.
//!
//! ## Modules
//! - `library` - Content records, sources, and search filters
//! - `organize` - Plans destination folders and file names
//! - `reporter` - Exports plans and content lists

pub mod library;
pub mod organize;
pub mod reporter;

// Re-export commonly used types
pub use library::{ContentFilter, ContentItem, ContentSource};
pub use organize::{FolderNode, OrganizationConfig, OrganizationPlan, OrganizePlanner, PlannedFile};
