//! Custom error types for nxplorer.
//!
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for nxplorer.
pub mod exit_code {
    /// Success.
    pub const SUCCESS: i32 = 0;
    /// General error.
    pub const GENERAL_ERROR: i32 = 1;
    /// The path is not an Nx workspace.
    pub const NOT_A_WORKSPACE: i32 = 2;
    /// The `nx` executable could not be found.
    pub const NX_NOT_INSTALLED: i32 = 3;
    /// Project discovery failed.
    pub const SCAN_FAILED: i32 = 4;
    /// Invalid configuration.
    pub const INVALID_CONFIG: i32 = 5;
    /// Interrupted (Ctrl+C).
    pub const INTERRUPTED: i32 = 130;

    /// Narrow `code` to a process exit status.
    ///
    /// Codes outside `0..=255` become [`GENERAL_ERROR`].
    pub fn to_status(code: i32) -> u8 {
        u8::try_from(code).unwrap_or(GENERAL_ERROR as u8)
    }
}

/// Main error type for nxplorer.
#[derive(Error, Debug)]
pub enum NxError {
    /// The directory (or any of its parents) has no nx.json.
    #[error(
        "The path {path} does not appear to be an nx repo (no nx.json found, searched up to {depth} levels)"
    )]
    NotAWorkspace { path: PathBuf, depth: usize },

    /// The workspace has not been installed yet.
    #[error("No node_modules found in {path}\n\nTip: Install the workspace dependencies in the project root first (npm install, yarn or pnpm install).")]
    MissingNodeModules { path: PathBuf },

    /// The nx executable is not on PATH.
    #[error("'{program}' is NOT installed globally. Currently nx is required to be installed globally.\n\nPlease install nx globally and try again.\n\nFor npm:\n  npm install -g nx\nFor yarn:\n  yarn global add nx\nFor pnpm:\n  pnpm add -g nx")]
    NxNotInstalled { program: String },

    /// A project manifest is not well-formed JSON.
    #[error("Failed to parse {path}:\n  {message}")]
    ManifestParse {
        path: PathBuf,
        message: String,
        line: usize,
        column: usize,
    },

    /// A project manifest is missing a required field.
    #[error("Invalid project manifest {path}: {message}")]
    ManifestSchema { path: PathBuf, message: String },

    /// Project discovery failed as a whole.
    #[error("Failed to scan projects in {root}: {source}")]
    ScanFailed {
        root: PathBuf,
        #[source]
        source: Box<NxError>,
    },

    /// An exclude pattern is not a valid glob.
    #[error("Invalid exclude pattern '{pattern}': {message}")]
    InvalidPattern { pattern: String, message: String },

    /// Invalid configuration file.
    #[error("Invalid config at {path}:\n  {message}\n\nTip: Check the config file syntax and ensure all values are valid.")]
    InvalidConfig { path: PathBuf, message: String },

    /// The configured nx command is empty or cannot be split into words.
    #[error("Invalid nx command '{command}': {message}")]
    InvalidCommand { command: String, message: String },

    /// The executed nx command exited unsuccessfully.
    #[error("'{command}' failed with exit code {code}")]
    CommandFailed { command: String, code: i32 },

    /// IO error with path context.
    #[error("Failed to {operation} '{path}': {source}")]
    IoWithContext {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl NxError {
    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            NxError::NotAWorkspace { .. } => exit_code::NOT_A_WORKSPACE,
            NxError::MissingNodeModules { .. } => exit_code::NOT_A_WORKSPACE,
            NxError::NxNotInstalled { .. } => exit_code::NX_NOT_INSTALLED,
            NxError::ManifestParse { .. } => exit_code::SCAN_FAILED,
            NxError::ManifestSchema { .. } => exit_code::SCAN_FAILED,
            NxError::ScanFailed { .. } => exit_code::SCAN_FAILED,
            NxError::InvalidPattern { .. } => exit_code::INVALID_CONFIG,
            NxError::InvalidConfig { .. } => exit_code::INVALID_CONFIG,
            NxError::InvalidCommand { .. } => exit_code::INVALID_CONFIG,
            NxError::CommandFailed { code, .. } => *code,
            NxError::IoWithContext { .. } => exit_code::GENERAL_ERROR,
            NxError::Io(_) => exit_code::GENERAL_ERROR,
        }
    }

    /// Wrap an IO error with the operation and path that produced it.
    pub fn io(operation: impl Into<String>, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        NxError::IoWithContext {
            operation: operation.into(),
            path: path.into(),
            source,
        }
    }

    /// Build a parse error from a serde_json error, keeping its location.
    pub fn manifest_parse(path: impl Into<PathBuf>, content: &str, error: &serde_json::Error) -> Self {
        NxError::ManifestParse {
            path: path.into(),
            message: format_json_error(content, error),
            line: error.line(),
            column: error.column(),
        }
    }

    /// Whether this error only affects a single project and discovery may continue.
    pub fn is_per_project(&self) -> bool {
        matches!(
            self,
            NxError::ManifestParse { .. }
                | NxError::ManifestSchema { .. }
                | NxError::IoWithContext { .. }
        )
    }
}

/// Format a JSON parsing error with the offending line and a caret.
fn format_json_error(content: &str, error: &serde_json::Error) -> String {
    let line = error.line();
    let column = error.column();

    if let Some(error_line) = content.lines().nth(line.saturating_sub(1)) {
        let pointer = " ".repeat(column.saturating_sub(1)) + "^";
        format!(
            "{}\n  at line {}, column {}:\n    {}\n    {}",
            error, line, column, error_line, pointer
        )
    } else {
        format!("{} at line {}, column {}", error, line, column)
    }
}

/// Result type alias for nxplorer operations.
pub type Result<T> = std::result::Result<T, NxError>;
