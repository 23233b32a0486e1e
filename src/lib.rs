//! nxplorer - Nx workspace task explorer
//!
//! A fast, interactive terminal user interface (TUI) for discovering and
//! running the tasks of every project in an Nx monorepo.
//!
//! # Features
//!
//! - **Fast**: projects are discovered on a background thread while the UI is already up
//! - **Fuzzy search**: type to narrow hundreds of `project:task:configuration` entries
//! - **Framework aware**: Next.js, Nuxt, Angular, NestJS, Cypress and Vite projects
//!   get their conventional commands, and custom frameworks can be configured
//! - **Ignore aware**: honours `.gitignore` and extra patterns while scanning
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface argument parsing
//! - [`config`] - Configuration file loading and types
//! - [`error`] - Error types and result helpers
//! - [`filter`] - Fuzzy filtering for command entries
//! - [`logging`] - Tracing subscriber setup
//! - [`project`] - Manifest scanning, parsing, framework detection and entry synthesis
//! - [`runner`] - nx command execution
//! - [`tui`] - Terminal user interface
//! - [`utils`] - Workspace and platform path helpers
//!
//! # Example
//!
//! ```no_run
//! use nxplorer::project::discover;
//! use std::path::Path;
//!
//! let result = discover(Path::new("./my-workspace")).expect("discovery failed");
//! for entry in &result.entries {
//!     println!("{}", entry.display_string());
//! }
//! println!("{}", result.summary());
//! ```

/// CLI argument definitions.
pub mod cli;

/// Configuration system for loading and merging settings.
pub mod config;

/// Error types and result helpers.
pub mod error;

/// Fuzzy filtering for command entries.
pub mod filter;

/// Tracing subscriber setup.
pub mod logging;

/// Project discovery and command entry synthesis.
pub mod project;

/// nx command execution.
pub mod runner;

/// Terminal user interface.
pub mod tui;

/// Workspace and platform path helpers.
pub mod utils;

// Re-export commonly used types
pub use cli::Cli;
pub use config::Config;
pub use error::{NxError, Result};
pub use project::{CommandEntry, DiscoveryResult, Project, ProjectType, Task};
