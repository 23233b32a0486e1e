//! Integration tests for configuration loading and merging.

use nxplorer::config::{
    load_config_from_path, AppearanceConfig, Config, ExcludeConfig, GeneralConfig, Theme,
};
use predicates::prelude::*;

use crate::integration::fixtures::{
    add_project, create_standard_workspace, nxplorer, write_file, write_local_config,
};

// ==================== Config Defaults ====================

#[test]
fn test_default_config() {
    let config = Config::default();

    assert_eq!(config.general.nx_command(), "nx");
    assert_eq!(config.general.reset_args(), vec!["reset".to_string()]);
    assert!(config.general.check_node_modules());
    assert_eq!(config.scan.manifest_names(), vec!["project.json".to_string()]);
    assert!(config.exclude.patterns.is_empty());
    assert!(config.appearance.is_none());

    let appearance = config.appearance();
    assert!(appearance.icons);
    assert!(appearance.show_footer);
    assert!(!appearance.compact);
    assert_eq!(appearance.theme, Theme::Default);
}

#[test]
fn test_default_scan_ignores_dependencies() {
    let config = Config::new();
    let ignore = config.scan.ignore();

    assert!(ignore.contains(&"node_modules/".to_string()));
    assert!(ignore.contains(&".git/".to_string()));
}

// ==================== Config Merging ====================

#[test]
fn test_merge_overrides_set_values() {
    let mut base = Config {
        general: GeneralConfig {
            nx_command: Some("nx".to_string()),
            check_node_modules: Some(false),
            ..Default::default()
        },
        ..Default::default()
    };

    let overlay = Config {
        general: GeneralConfig {
            nx_command: Some("npx nx".to_string()),
            ..Default::default()
        },
        ..Default::default()
    };

    base.merge(overlay);

    assert_eq!(base.general.nx_command(), "npx nx");
    // Unset values in the overlay leave the base untouched
    assert!(!base.general.check_node_modules());
}

#[test]
fn test_merge_appends_exclude_patterns() {
    let mut base = Config {
        exclude: ExcludeConfig {
            patterns: vec!["*:lint".to_string()],
        },
        ..Default::default()
    };
    let overlay = Config {
        exclude: ExcludeConfig {
            patterns: vec!["web:*".to_string()],
        },
        ..Default::default()
    };

    base.merge(overlay);

    assert_eq!(base.exclude.patterns, vec!["*:lint", "web:*"]);
}

#[test]
fn test_merge_replaces_appearance_whole() {
    let mut base = Config {
        appearance: Some(AppearanceConfig {
            compact: true,
            icons: false,
            ..Default::default()
        }),
        ..Default::default()
    };
    let overlay = Config {
        appearance: Some(AppearanceConfig {
            theme: Theme::Minimal,
            ..Default::default()
        }),
        ..Default::default()
    };

    base.merge(overlay);

    let appearance = base.appearance();
    assert_eq!(appearance.theme, Theme::Minimal);
    assert!(!appearance.compact);
    assert!(appearance.icons);
}

#[test]
fn test_merge_without_appearance_keeps_base() {
    let mut base = Config {
        appearance: Some(AppearanceConfig {
            show_footer: false,
            ..Default::default()
        }),
        ..Default::default()
    };

    base.merge(Config::default());

    assert!(!base.appearance().show_footer);
}

// ==================== Config Files ====================

#[test]
fn test_load_config_from_path() {
    let dir = tempfile::TempDir::new().unwrap();
    write_file(
        dir.path(),
        "nxplorer.toml",
        r#"
[general]
nx_command = "pnpm nx"
reset_args = ["reset", "--only-cache"]

[scan]
manifest_names = ["project.json", "workspace.json"]

[exclude]
patterns = ["*:e2e"]

[[frameworks.custom]]
name = "remix"
markers = ["remix.config.js"]
commands = ["dev"]

[appearance]
theme = "none"
compact = true
"#,
    );

    let config = load_config_from_path(&dir.path().join("nxplorer.toml")).unwrap();

    assert_eq!(config.general.nx_command(), "pnpm nx");
    assert_eq!(config.general.reset_args(), vec!["reset", "--only-cache"]);
    assert_eq!(
        config.scan.manifest_names(),
        vec!["project.json", "workspace.json"]
    );
    assert_eq!(config.exclude.patterns, vec!["*:e2e"]);
    assert_eq!(config.frameworks.custom.len(), 1);
    assert_eq!(config.frameworks.custom[0].name, "remix");

    let appearance = config.appearance();
    assert_eq!(appearance.theme, Theme::None);
    assert!(appearance.compact);
    assert!(appearance.icons);
}

#[test]
fn test_load_config_from_path_invalid_toml() {
    let dir = tempfile::TempDir::new().unwrap();
    write_file(dir.path(), "broken.toml", "[general\nnx_command = ");

    let err = load_config_from_path(&dir.path().join("broken.toml")).unwrap_err();

    assert_eq!(err.exit_code(), 5);
    assert!(err.to_string().contains("Invalid config"));
}

#[test]
fn test_load_config_from_path_wrong_type() {
    let dir = tempfile::TempDir::new().unwrap();
    write_file(dir.path(), "typed.toml", "[general]\ncheck_node_modules = \"yes\"\n");

    assert!(load_config_from_path(&dir.path().join("typed.toml")).is_err());
}

// ==================== Config Layers (binary) ====================

#[test]
fn test_local_config_exclude() {
    let ws = create_standard_workspace();
    write_local_config(ws.path(), "[exclude]\npatterns = [\"*:lint\", \"web:build:*\"]\n");

    nxplorer(ws.path())
        .arg("--list")
        .current_dir(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ui:lint").not())
        .stdout(predicate::str::contains("web:build:production").not())
        .stdout(predicate::str::contains("web:build\n"))
        .stdout(predicate::str::contains("3 projects with 10 tasks"));
}

#[test]
fn test_local_and_cli_excludes_combine() {
    let ws = create_standard_workspace();
    write_local_config(ws.path(), "[exclude]\npatterns = [\"*:lint\"]\n");

    nxplorer(ws.path())
        .args(["--list", "--exclude", "api:*"])
        .current_dir(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ui:lint").not())
        .stdout(predicate::str::contains("api:").not())
        .stdout(predicate::str::contains("3 projects with 8 tasks"));
}

#[test]
fn test_local_config_custom_framework() {
    let ws = create_standard_workspace();
    add_project(ws.path(), "apps/shop", "shop", "application", &[("build", &[])]);
    write_file(ws.path(), "apps/shop/remix.config.js", "module.exports = {};\n");
    write_local_config(
        ws.path(),
        r#"
[[frameworks.custom]]
name = "remix"
markers = ["remix.config.js"]
commands = ["dev", "routes"]
"#,
    );

    nxplorer(ws.path())
        .arg("--list")
        .current_dir(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[app:remix] shop:build"))
        .stdout(predicate::str::contains("[app:remix] shop:dev"))
        .stdout(predicate::str::contains("[app:remix] shop:routes"))
        .stdout(predicate::str::contains("4 projects with 16 tasks"));
}

#[test]
fn test_custom_framework_precedes_builtin() {
    let ws = create_standard_workspace();
    write_local_config(
        ws.path(),
        r#"
[[frameworks.custom]]
name = "next-custom"
markers = ["next.config.js"]
commands = ["export"]
"#,
    );

    nxplorer(ws.path())
        .arg("--list")
        .current_dir(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[app:next-custom] web:export"))
        .stdout(predicate::str::contains("[app:nextjs]").not());
}

#[test]
fn test_disable_builtin_frameworks() {
    let ws = create_standard_workspace();
    write_local_config(ws.path(), "[frameworks]\nbuiltin = false\n");

    nxplorer(ws.path())
        .arg("--list")
        .current_dir(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[app] web:build"))
        .stdout(predicate::str::contains("nextjs").not())
        .stdout(predicate::str::contains("nestjs").not())
        .stdout(predicate::str::contains("3 projects with 8 tasks"));
}

#[test]
fn test_scan_ignore_patterns() {
    let ws = create_standard_workspace();
    write_local_config(ws.path(), "[scan]\nignore = [\"libs/\"]\n");

    nxplorer(ws.path())
        .arg("--list")
        .current_dir(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ui:").not())
        .stdout(predicate::str::contains("2 projects with 11 tasks"));
}

#[test]
fn test_scan_custom_ignore_file() {
    let ws = create_standard_workspace();
    write_file(ws.path(), ".nxignore", "apps/api/\n");
    write_local_config(ws.path(), "[scan]\nignore_file = \".nxignore\"\n");

    nxplorer(ws.path())
        .arg("--list")
        .current_dir(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("api:").not())
        .stdout(predicate::str::contains("2 projects with 9 tasks"));
}

#[test]
fn test_user_config_is_loaded() {
    let ws = create_standard_workspace();
    write_file(
        ws.path(),
        ".config/nxplorer/config.toml",
        "[exclude]\npatterns = [\"web:*\"]\n",
    );

    nxplorer(ws.path())
        .arg("--list")
        .current_dir(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("web:").not())
        .stdout(predicate::str::contains("3 projects with 6 tasks"));
}

#[test]
fn test_cli_config_overrides_local() {
    let ws = create_standard_workspace();
    write_local_config(ws.path(), "[frameworks]\nbuiltin = false\n");
    write_file(ws.path(), "override.toml", "[frameworks]\nbuiltin = true\n");

    nxplorer(ws.path())
        .args(["--list", "--config", "override.toml"])
        .current_dir(ws.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("[app:nextjs] web:dev"))
        .stdout(predicate::str::contains("3 projects with 13 tasks"));
}
