//! # PLR Organizer
//!
//! Previews how a library of PLR (Private Label Rights) content would be
//! organized into folders, without touching the filesystem.
//!
//! ## Core Philosophy
//! - **Preview only** - the planner describes moves, it never performs them
//! - **Never fail on metadata** - every missing field has a fallback
//! - **Show conflicts** - files that would collide are flagged up front
//!
//! ## Architecture
//! - `core` - Content library, planner, and exports
//! - `error` - User-friendly error types
//! - `cli` - Command-line interface (binary only)

pub mod core;
pub mod error;

// Re-export commonly used types at the crate root
pub use error::{OrganizerError, Result};

/// Initialize tracing for the library
///
/// This should be called by the application entry point.
pub fn init_tracing() {
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set global default tracing subscriber");
}
