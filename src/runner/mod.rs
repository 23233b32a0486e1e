//! Runner module for nxplorer.
//!
//! Handles executing the chosen task through nx.

mod executor;

pub use executor::{execute, format_dry_run_command, ExecutionResult, NxCommand};
