//! Test fixtures: temporary Nx workspaces on disk.

use std::fs;
use std::path::Path;

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::{json, Map, Value};
use tempfile::TempDir;

/// A target name with its configuration names.
pub type Target<'a> = (&'a str, &'a [&'a str]);

/// Get a Command for the nxplorer binary, isolated from the user's config
/// and log settings.
pub fn nxplorer(home: &Path) -> Command {
    let mut cmd = cargo_bin_cmd!("nxplorer");
    cmd.env("XDG_CONFIG_HOME", home.join(".config"))
        .env("XDG_CACHE_HOME", home.join(".cache"))
        .env("HOME", home)
        .env_remove("RUST_LOG");
    cmd
}

/// Create an empty workspace: `nx.json` and `node_modules/`.
pub fn create_workspace() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("nx.json"), "{}").expect("Failed to write nx.json");
    fs::create_dir(dir.path().join("node_modules")).expect("Failed to create node_modules");
    dir
}

/// Create a workspace without `node_modules/`.
pub fn create_uninstalled_workspace() -> TempDir {
    let dir = TempDir::new().expect("Failed to create temp dir");
    fs::write(dir.path().join("nx.json"), "{}").expect("Failed to write nx.json");
    dir
}

/// Build `project.json` content.
pub fn project_json(name: &str, project_type: &str, targets: &[Target<'_>]) -> String {
    let mut target_map = Map::new();
    for (target, configurations) in targets {
        let mut body = Map::new();
        body.insert("executor".to_string(), json!("nx:run-commands"));
        if !configurations.is_empty() {
            let configs: Map<String, Value> = configurations
                .iter()
                .map(|c| (c.to_string(), json!({})))
                .collect();
            body.insert("configurations".to_string(), Value::Object(configs));
        }
        target_map.insert(target.to_string(), Value::Object(body));
    }

    serde_json::to_string_pretty(&json!({
        "name": name,
        "projectType": project_type,
        "targets": target_map,
    }))
    .expect("Failed to serialize project.json")
}

/// Write a file below `root`, creating parent directories.
pub fn write_file(root: &Path, relative: &str, content: &str) {
    let path = root.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).expect("Failed to create directories");
    }
    fs::write(&path, content).expect("Failed to write file");
}

/// Add a project at `dir` (relative to the workspace root).
pub fn add_project(
    root: &Path,
    dir: &str,
    name: &str,
    project_type: &str,
    targets: &[Target<'_>],
) {
    write_file(
        root,
        &format!("{dir}/project.json"),
        &project_json(name, project_type, targets),
    );
}

/// A workspace with three projects:
///
/// - `apps/api`: NestJS application (detected from `src/main.ts`)
/// - `apps/web`: Next.js application with build configurations
/// - `libs/ui`: plain library
pub fn create_standard_workspace() -> TempDir {
    let ws = create_workspace();
    let root = ws.path();

    add_project(root, "apps/api", "api", "application", &[("serve", &[]), ("test", &[])]);
    write_file(
        root,
        "apps/api/src/main.ts",
        "import { Module } from '@nestjs/common';\nimport { NestFactory } from '@nestjs/core';\n",
    );

    add_project(
        root,
        "apps/web",
        "web",
        "application",
        &[("build", &["production", "development"]), ("serve", &[])],
    );
    write_file(root, "apps/web/next.config.js", "module.exports = {};\n");

    add_project(root, "libs/ui", "ui", "library", &[("test", &[]), ("lint", &[])]);

    ws
}

/// Write `.nxplorerrc.toml` at the workspace root.
pub fn write_local_config(root: &Path, content: &str) {
    write_file(root, ".nxplorerrc.toml", content);
}
