//! # Error Module
//!
//! User-friendly error types for the PLR content organizer.
//!
//! ## Design Principles
//! - **Planning never fails** - missing metadata always has a fallback
//! - **Include context** - paths, file names, what went wrong
//! - **Recovery hints** - suggest how to fix when possible

use std::path::PathBuf;
use thiserror::Error;

/// Top-level application error
#[derive(Error, Debug)]
pub enum OrganizerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Content source error: {0}")]
    Source(#[from] SourceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors in an organization config
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("No output folder selected. Select an output folder before previewing.")]
    MissingOutputPath,

    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config file {path}: {reason}")]
    Parse { path: PathBuf, reason: String },

    #[error(
        "Template uses unrecognized variables: {}. Use {{niche}}, {{license}}, {{date}} or {{category}}.",
        .variables.iter().map(|v| format!("{{{}}}", v)).collect::<Vec<_>>().join(", ")
    )]
    UnknownTemplateVariables { variables: Vec<String> },
}

/// Errors while fetching content records
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Content file not found: {path}")]
    NotFound { path: PathBuf },

    #[error("Failed to read content file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Content file {path} is not a valid list of records: {reason}")]
    Parse { path: PathBuf, reason: String },
}

/// Convenience Result type alias
pub type Result<T> = std::result::Result<T, OrganizerError>;
