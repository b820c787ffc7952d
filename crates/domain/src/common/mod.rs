//! Common utility functions shared across the domain.
//!
//! # Design Principles
//!
//! - **No I/O, no logging** - callers decide how failures are reported
//! - **Generic over entry type** - the same algorithms serve lore, pages,
//!   effects and patterns

pub mod sequence;

// Re-export commonly used functions at crate root for convenience
pub use sequence::{contains_duplicates, remove_indices, remove_matching_from_end, sort_descending};
