//! Custom widgets for the TUI.
//!
//! This module contains specialized widgets for rendering the nxplorer interface.

mod detail;
mod entries;
mod filter;
mod footer;
mod header;

pub use detail::{Detail, ErrorDisplay};
pub use entries::{EmptyEntries, EntryList};
pub use filter::Filter;
pub use footer::{Footer, StatusLine};
pub use header::{truncate_with_ellipsis, Header};
