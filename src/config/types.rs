//! Configuration type definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::project::{Framework, FrameworkRegistry};

/// Color theme for the TUI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    /// Full color theme.
    #[default]
    Default,
    /// Minimal colors.
    Minimal,
    /// No colors (monochrome).
    None,
}

/// General configuration settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Command used to invoke nx, e.g. `"npx nx"`.
    #[serde(default)]
    pub nx_command: Option<String>,
    /// Arguments passed to nx for the reset action.
    #[serde(default)]
    pub reset_args: Option<Vec<String>>,
    /// Require `node_modules` at the workspace root.
    #[serde(default)]
    pub check_node_modules: Option<bool>,
}

impl GeneralConfig {
    /// The nx command, `"nx"` unless configured.
    pub fn nx_command(&self) -> &str {
        self.nx_command.as_deref().unwrap_or("nx")
    }

    /// Arguments for the reset action, `["reset"]` unless configured.
    pub fn reset_args(&self) -> Vec<String> {
        self.reset_args
            .clone()
            .unwrap_or_else(|| vec!["reset".to_string()])
    }

    /// Whether to require `node_modules`, true unless configured.
    pub fn check_node_modules(&self) -> bool {
        self.check_node_modules.unwrap_or(true)
    }
}

/// Project scanning settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Manifest file names to look for.
    #[serde(default)]
    pub manifest_names: Option<Vec<String>>,
    /// Ignore file read from the workspace root.
    #[serde(default)]
    pub ignore_file: Option<String>,
    /// Patterns ignored in addition to the ignore file.
    #[serde(default)]
    pub ignore: Option<Vec<String>>,
}

impl ScanConfig {
    /// Manifest names, `["project.json"]` unless configured.
    pub fn manifest_names(&self) -> Vec<String> {
        self.manifest_names
            .clone()
            .filter(|names| !names.is_empty())
            .unwrap_or_else(|| vec!["project.json".to_string()])
    }

    /// Ignore file name, `.gitignore` unless configured.
    pub fn ignore_file(&self) -> &str {
        self.ignore_file.as_deref().unwrap_or(".gitignore")
    }

    /// Extra ignore patterns, `node_modules/` and `.git/` unless configured.
    pub fn ignore(&self) -> Vec<String> {
        self.ignore
            .clone()
            .unwrap_or_else(|| vec!["node_modules/".to_string(), ".git/".to_string()])
    }
}

/// Exclude patterns configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExcludeConfig {
    /// Glob patterns matched against invocation strings.
    #[serde(default)]
    pub patterns: Vec<String>,
}

/// Framework detection settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameworksConfig {
    /// Include the built-in frameworks.
    #[serde(default)]
    pub builtin: Option<bool>,
    /// User-defined frameworks, checked before the built-ins.
    #[serde(default)]
    pub custom: Vec<Framework>,
}

impl FrameworksConfig {
    /// Build the registry described by this configuration.
    pub fn registry(&self) -> FrameworkRegistry {
        FrameworkRegistry::with_custom(self.custom.clone(), self.builtin.unwrap_or(true))
    }
}

/// Appearance configuration settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppearanceConfig {
    /// Color theme.
    #[serde(default)]
    pub theme: Theme,
    /// Show icons.
    #[serde(default = "default_true")]
    pub icons: bool,
    /// Show help footer.
    #[serde(default = "default_true")]
    pub show_footer: bool,
    /// Compact mode (less padding).
    #[serde(default)]
    pub compact: bool,
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            icons: true,
            show_footer: true,
            compact: false,
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Scan settings.
    #[serde(default)]
    pub scan: ScanConfig,
    /// Exclude patterns.
    #[serde(default)]
    pub exclude: ExcludeConfig,
    /// Framework detection.
    #[serde(default)]
    pub frameworks: FrameworksConfig,
    /// Appearance settings. Replaced as a whole when a layer sets it.
    #[serde(default)]
    pub appearance: Option<AppearanceConfig>,
}

impl Config {
    /// Create a new configuration with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the config file path for the user's home directory.
    pub fn user_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("nxplorer").join("config.toml"))
    }

    /// Effective appearance settings.
    pub fn appearance(&self) -> AppearanceConfig {
        self.appearance.clone().unwrap_or_default()
    }

    /// Merge another config into this one (other takes precedence for set values).
    pub fn merge(&mut self, other: Config) {
        if other.general.nx_command.is_some() {
            self.general.nx_command = other.general.nx_command;
        }
        if other.general.reset_args.is_some() {
            self.general.reset_args = other.general.reset_args;
        }
        if other.general.check_node_modules.is_some() {
            self.general.check_node_modules = other.general.check_node_modules;
        }

        if other.scan.manifest_names.is_some() {
            self.scan.manifest_names = other.scan.manifest_names;
        }
        if other.scan.ignore_file.is_some() {
            self.scan.ignore_file = other.scan.ignore_file;
        }
        if other.scan.ignore.is_some() {
            self.scan.ignore = other.scan.ignore;
        }

        // Exclude patterns - append rather than replace
        self.exclude.patterns.extend(other.exclude.patterns);

        if other.frameworks.builtin.is_some() {
            self.frameworks.builtin = other.frameworks.builtin;
        }
        // Higher layers' frameworks take priority.
        let mut custom = other.frameworks.custom;
        custom.append(&mut self.frameworks.custom);
        self.frameworks.custom = custom;

        if other.appearance.is_some() {
            self.appearance = other.appearance;
        }
    }
}

fn default_true() -> bool {
    true
}
