//! Configuration module for nxplorer.
//!
//! Handles loading and merging configuration from multiple sources:
//! - CLI `--config <path>` (highest priority)
//! - Workspace-level `.nxplorerrc.toml`
//! - User-level `~/.config/nxplorer/config.toml`

pub mod file;
mod types;

pub use file::{generate_example_config, load_config, load_config_from_path, LOCAL_CONFIG_NAME};
pub use types::{
    AppearanceConfig, Config, ExcludeConfig, FrameworksConfig, GeneralConfig, ScanConfig, Theme,
};
