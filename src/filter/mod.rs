//! Filter module for nxplorer.
//!
//! Provides fuzzy matching over command entry display strings.

mod fuzzy;

pub use fuzzy::{filter, filter_entries, get_match_indices};
