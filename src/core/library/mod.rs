//! Content library module.
//!
//! The content records the organizer plans over, where they come from, and
//! the search/filter predicates used to narrow them down.

mod filter;
mod source;
mod types;

pub use filter::ContentFilter;
pub use source::{ContentSource, JsonFileSource, MemorySource};
pub use types::ContentItem;
