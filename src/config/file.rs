//! Configuration file loading and parsing.

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use super::types::Config;
use crate::error::{NxError, Result};

/// Name of the workspace-level configuration file.
pub const LOCAL_CONFIG_NAME: &str = ".nxplorerrc.toml";

/// Load configuration from the specified path.
///
/// # Errors
///
/// Returns [`NxError::InvalidConfig`] if the file cannot be read or parsed.
pub fn load_config_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path).map_err(|e| NxError::InvalidConfig {
        path: path.to_path_buf(),
        message: format!("cannot read file: {e}"),
    })?;

    toml::from_str(&content).map_err(|e| NxError::InvalidConfig {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Load configuration with proper priority and merging.
///
/// Searches for config files in order of priority (lowest to highest):
/// 1. `<config dir>/nxplorer/config.toml` (user-level)
/// 2. `.nxplorerrc.toml` in the workspace root
/// 3. CLI argument `--config <path>`
///
/// Missing default files are skipped. Broken default files are logged and
/// skipped.
///
/// # Errors
///
/// Returns an error if the file given on the command line cannot be read or
/// parsed.
pub fn load_config(cli_config_path: Option<&Path>, workspace_root: &Path) -> Result<Config> {
    let mut config = Config::default();

    if let Some(user_config_path) = Config::user_config_path() {
        merge_optional(&mut config, &user_config_path);
    }

    merge_optional(&mut config, &workspace_root.join(LOCAL_CONFIG_NAME));

    if let Some(cli_path) = cli_config_path {
        config.merge(load_config_from_path(cli_path)?);
        debug!(path = %cli_path.display(), "loaded config");
    }

    Ok(config)
}

fn merge_optional(config: &mut Config, path: &Path) {
    if !path.exists() {
        return;
    }
    match load_config_from_path(path) {
        Ok(layer) => {
            debug!(path = %path.display(), "loaded config");
            config.merge(layer);
        }
        Err(e) => warn!("ignoring config file: {e}"),
    }
}

/// Generate an example configuration file with all options documented.
pub fn generate_example_config() -> String {
    r#"# nxplorer Configuration File
# Place this file at ~/.config/nxplorer/config.toml for global settings
# or .nxplorerrc.toml in your workspace root for workspace-specific settings

# General settings
[general]
# Command used to invoke nx (split like a shell would)
nx_command = "nx"
# nx_command = "npx nx"

# Arguments passed to nx for the reset action (Ctrl+R)
reset_args = ["reset"]

# Refuse to start when node_modules is missing
check_node_modules = true

# Project scanning
[scan]
# Manifest file names that define a project
manifest_names = ["project.json"]

# Ignore file read from the workspace root (gitignore syntax)
ignore_file = ".gitignore"

# Patterns ignored in addition to the ignore file
ignore = ["node_modules/", ".git/"]

# Exclude patterns
[exclude]
# Glob patterns matched against "project:command[:configuration]"
patterns = [
    # "*:lint",
    # "*-e2e:*",
]

# Framework detection
[frameworks]
# Detect nextjs, nuxt, angular, nestjs, cypress and Vite
builtin = true

# Custom frameworks are checked before the built-in ones
# [[frameworks.custom]]
# name = "remix"
# markers = ["remix.config.js"]
# manifest_keywords = ["@remix-run"]
# deep = [{ path = "app/root.tsx", keyword = "@remix-run/react" }]
# commands = ["dev", "build"]

# Appearance settings
[appearance]
# Color theme: "default", "minimal", "none"
theme = "default"

# Show icons
icons = true

# Show help footer
show_footer = true

# Compact mode (less padding)
compact = false
"#
    .to_string()
}
