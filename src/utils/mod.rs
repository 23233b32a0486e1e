//! Utility module for nxplorer.
//!
//! Workspace and platform path helpers.

mod paths;

pub use paths::{
    check_node_modules, config_dir, find_in_path, find_workspace_root, global_config_file,
    local_config_file, MAX_SEARCH_DEPTH, WORKSPACE_MARKER,
};
