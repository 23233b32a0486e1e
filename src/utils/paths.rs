//! Path utilities.

use std::env;
use std::path::{Path, PathBuf};

use crate::error::{NxError, Result};

/// Maximum number of parent directories to search.
pub const MAX_SEARCH_DEPTH: usize = 10;

/// File marking the root of an Nx workspace.
pub const WORKSPACE_MARKER: &str = "nx.json";

/// Find the workspace root (directory containing `nx.json`).
///
/// Searches the given directory and up to 10 parent directories.
///
/// # Errors
///
/// Returns an error if the start directory is inaccessible or no `nx.json`
/// is found.
pub fn find_workspace_root(start_dir: &Path) -> Result<PathBuf> {
    let start = start_dir
        .canonicalize()
        .map_err(|e| NxError::io("access", start_dir, e))?;

    let mut current = start.as_path();
    let mut depth = 0;

    while depth < MAX_SEARCH_DEPTH {
        if current.join(WORKSPACE_MARKER).is_file() {
            return Ok(current.to_path_buf());
        }

        match current.parent() {
            Some(parent) if parent != current => {
                current = parent;
                depth += 1;
            }
            _ => break,
        }
    }

    Err(NxError::NotAWorkspace {
        path: start,
        depth: MAX_SEARCH_DEPTH,
    })
}

/// Require an installed `node_modules` directory at the workspace root.
///
/// # Errors
///
/// Returns [`NxError::MissingNodeModules`] if it is absent.
pub fn check_node_modules(workspace_root: &Path) -> Result<()> {
    if workspace_root.join("node_modules").is_dir() {
        Ok(())
    } else {
        Err(NxError::MissingNodeModules {
            path: workspace_root.to_path_buf(),
        })
    }
}

/// Locate `program` on PATH.
///
/// A program containing a path separator is checked as given.
pub fn find_in_path(program: &str) -> Option<PathBuf> {
    let candidate = Path::new(program);
    if candidate.components().count() > 1 {
        return is_executable(candidate).then(|| candidate.to_path_buf());
    }

    let paths = env::var_os("PATH")?;
    env::split_paths(&paths).find_map(|dir| {
        executable_names(program)
            .into_iter()
            .map(|name| dir.join(name))
            .find(|path| is_executable(path))
    })
}

#[cfg(windows)]
fn executable_names(program: &str) -> Vec<String> {
    let mut names = vec![program.to_string()];
    for ext in [".exe", ".cmd", ".bat"] {
        names.push(format!("{program}{ext}"));
    }
    names
}

#[cfg(not(windows))]
fn executable_names(program: &str) -> Vec<String> {
    vec![program.to_string()]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// Get the config directory for nxplorer.
///
/// Returns `~/.config/nxplorer` on Linux.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("nxplorer"))
}

/// Get the global config file path.
///
/// Returns `~/.config/nxplorer/config.toml` on Linux.
pub fn global_config_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Find local config file in the workspace root.
///
/// Looks for `.nxplorerrc.toml` in the given directory.
pub fn local_config_file(workspace_root: &Path) -> Option<PathBuf> {
    let config_file = workspace_root.join(crate::config::LOCAL_CONFIG_NAME);
    config_file.exists().then_some(config_file)
}
