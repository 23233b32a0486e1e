//! Snapshot tests using insta.
//!
//! These tests capture and verify the output format of various commands.

use crate::integration::fixtures::{
    add_project, create_standard_workspace, create_workspace, nxplorer, write_file,
    write_local_config,
};

/// Run `nxplorer --list` with extra args in `root` and return stdout.
fn list_output(root: &std::path::Path, args: &[&str]) -> String {
    let output = nxplorer(root)
        .arg("--list")
        .args(args)
        .current_dir(root)
        .output()
        .expect("Failed to run nxplorer");

    assert!(output.status.success());
    String::from_utf8_lossy(&output.stdout).trim_end().to_string()
}

// ==================== List Output Snapshots ====================

#[test]
fn test_snapshot_list_standard_workspace() {
    let ws = create_standard_workspace();

    insta::assert_snapshot!(list_output(ws.path(), &[]), @r"
[app:nestjs] api:serve
[app:nestjs] api:test
[app:nestjs] api:start
[app:nestjs] api:build
[app:nextjs] web:build
[app:nextjs] web:build:production
[app:nextjs] web:build:development
[app:nextjs] web:serve
[app:nextjs] web:dev
[app:nextjs] web:build
[app:nextjs] web:start
[lib] ui:test
[lib] ui:lint
3 projects with 13 tasks
");
}

#[test]
fn test_snapshot_list_with_exclude() {
    let ws = create_standard_workspace();

    insta::assert_snapshot!(list_output(ws.path(), &["--exclude", "web:*", "--exclude", "*:test"]), @r"
[app:nestjs] api:serve
[app:nestjs] api:start
[app:nestjs] api:build
[lib] ui:lint
3 projects with 4 tasks
");
}

#[test]
fn test_snapshot_list_empty_workspace() {
    let ws = create_workspace();

    insta::assert_snapshot!(list_output(ws.path(), &[]), @"0 projects with 0 tasks");
}

#[test]
fn test_snapshot_list_frameworks() {
    let ws = create_workspace();
    add_project(ws.path(), "apps/docs", "docs", "application", &[]);
    write_file(ws.path(), "apps/docs/nuxt.config.ts", "export default {};\n");
    add_project(ws.path(), "apps/shop-e2e", "shop-e2e", "application", &[("lint", &[])]);
    write_file(ws.path(), "apps/shop-e2e/cypress.config.ts", "export default {};\n");
    add_project(ws.path(), "libs/kit", "kit", "library", &[("test", &["ci"])]);
    write_file(ws.path(), "libs/kit/vite.config.mts", "export default {};\n");

    insta::assert_snapshot!(list_output(ws.path(), &[]), @r"
[app:nuxt] docs:dev
[app:nuxt] docs:build
[app:nuxt] docs:start
[app:cypress] shop-e2e:lint
[app:cypress] shop-e2e:open-cypress
[app:cypress] shop-e2e:e2e
[lib:Vite] kit:test
[lib:Vite] kit:test:ci
[lib:Vite] kit:serve
[lib:Vite] kit:build
3 projects with 10 tasks
");
}

#[test]
fn test_snapshot_list_custom_framework() {
    let ws = create_workspace();
    add_project(ws.path(), "apps/worker", "worker", "application", &[("build", &[])]);
    write_file(ws.path(), "apps/worker/wrangler.toml", "name = \"worker\"\n");
    write_local_config(
        ws.path(),
        r#"
[[frameworks.custom]]
name = "workers"
markers = ["wrangler.toml"]
commands = ["deploy", "tail"]
"#,
    );

    insta::assert_snapshot!(list_output(ws.path(), &[]), @r"
[app:workers] worker:build
[app:workers] worker:deploy
[app:workers] worker:tail
1 projects with 3 tasks
");
}

// ==================== Error Output Snapshots ====================

#[test]
fn test_snapshot_nx_not_installed() {
    let ws = create_standard_workspace();
    write_local_config(
        ws.path(),
        "[general]\nnx_command = \"nxplorer-test-missing-nx\"\n",
    );

    let output = nxplorer(ws.path())
        .current_dir(ws.path())
        .output()
        .expect("Failed to run nxplorer");

    assert_eq!(output.status.code(), Some(3));
    let stderr = String::from_utf8_lossy(&output.stderr).trim_end().to_string();

    insta::assert_snapshot!(stderr, @r"
Error: 'nxplorer-test-missing-nx' is NOT installed globally. Currently nx is required to be installed globally.

Please install nx globally and try again.

For npm:
  npm install -g nx
For yarn:
  yarn global add nx
For pnpm:
  pnpm add -g nx
");
}

#[test]
fn test_snapshot_missing_node_modules_tip() {
    let ws = create_workspace();
    std::fs::remove_dir(ws.path().join("node_modules")).expect("Failed to remove node_modules");

    let output = nxplorer(ws.path())
        .arg("--list")
        .current_dir(ws.path())
        .output()
        .expect("Failed to run nxplorer");

    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    let tip = stderr.lines().last().unwrap_or_default();

    insta::assert_snapshot!(tip, @"Tip: Install the workspace dependencies in the project root first (npm install, yarn or pnpm install).");
}
