//! Integration tests for project discovery on real directory trees.

use nxplorer::project::{
    discover, Classifier, Discovery, Framework, FrameworkRegistry, ProjectType, Scanner,
};

use crate::integration::fixtures::{
    add_project, create_standard_workspace, create_workspace, write_file,
};

fn invocations(result: &nxplorer::DiscoveryResult) -> Vec<String> {
    result.entries.iter().map(|e| e.invocation()).collect()
}

#[test]
fn test_discover_standard_workspace() {
    let ws = create_standard_workspace();

    let result = discover(ws.path()).unwrap();

    let names: Vec<&str> = result.projects.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["api", "web", "ui"]);
    assert_eq!(result.entries.len(), 13);
    assert!(result.skipped.is_empty());
    assert_eq!(result.summary(), "3 projects with 13 tasks");
}

#[test]
fn test_configurations_follow_their_task() {
    let ws = create_standard_workspace();

    let result = discover(ws.path()).unwrap();
    let web: Vec<String> = invocations(&result)
        .into_iter()
        .filter(|i| i.starts_with("web:"))
        .collect();

    assert_eq!(
        web,
        vec![
            "web:build",
            "web:build:production",
            "web:build:development",
            "web:serve",
            "web:dev",
            "web:build",
            "web:start",
        ]
    );
}

#[test]
fn test_project_root_is_manifest_directory() {
    let ws = create_standard_workspace();

    let result = discover(ws.path()).unwrap();
    let ui = result
        .projects
        .iter()
        .find(|p| p.name() == "ui")
        .unwrap();

    assert!(ui.root().ends_with("libs/ui"));
    assert_eq!(ui.project_type(), ProjectType::Library);
    assert!(ui.framework().is_none());
}

#[test]
fn test_empty_workspace() {
    let ws = create_workspace();

    let result = discover(ws.path()).unwrap();

    assert!(result.projects.is_empty());
    assert!(result.entries.is_empty());
    assert_eq!(result.summary(), "0 projects with 0 tasks");
}

#[test]
fn test_gitignore_prunes_directories() {
    let ws = create_standard_workspace();
    write_file(ws.path(), ".gitignore", "# build output\ntmp/\n");
    add_project(ws.path(), "tmp/copy", "copy", "application", &[("build", &[])]);

    let result = discover(ws.path()).unwrap();

    assert!(result.projects.iter().all(|p| p.name() != "copy"));
    assert_eq!(result.projects.len(), 3);
}

#[test]
fn test_node_modules_and_git_are_ignored() {
    let ws = create_standard_workspace();
    add_project(ws.path(), "node_modules/pkg", "pkg", "library", &[("build", &[])]);
    add_project(ws.path(), ".git/hidden", "hidden", "library", &[("build", &[])]);

    let result = discover(ws.path()).unwrap();

    assert_eq!(result.projects.len(), 3);
}

#[test]
fn test_scanner_without_extra_patterns_finds_everything() {
    let ws = create_standard_workspace();
    add_project(ws.path(), "node_modules/pkg", "pkg", "library", &[("build", &[])]);

    let discovery = Discovery::new(Scanner::default(), &FrameworkRegistry::builtin());
    let result = discovery.run(ws.path()).unwrap();

    assert!(result.projects.iter().any(|p| p.name() == "pkg"));
}

#[test]
fn test_marker_beats_deep_rule() {
    let ws = create_workspace();
    add_project(ws.path(), "apps/site", "site", "application", &[]);
    write_file(ws.path(), "apps/site/vite.config.ts", "export default {};\n");
    write_file(
        ws.path(),
        "apps/site/src/main.ts",
        "import { Controller } from '@nestjs/common';\n",
    );

    let result = discover(ws.path()).unwrap();

    assert_eq!(result.projects[0].framework().unwrap().name, "Vite");
    assert_eq!(invocations(&result), vec!["site:serve", "site:build"]);
}

#[test]
fn test_deep_rule_used_as_fallback() {
    let ws = create_workspace();
    add_project(ws.path(), "apps/api", "api", "application", &[]);
    write_file(
        ws.path(),
        "apps/api/src/main.ts",
        "import { NestFactory } from '@nestjs/core';\nimport '@nestjs/common';\n",
    );

    let result = discover(ws.path()).unwrap();

    assert_eq!(result.projects[0].framework().unwrap().name, "nestjs");
}

#[test]
fn test_manifest_keyword_detection() {
    let ws = create_workspace();
    write_file(
        ws.path(),
        "apps/shell/project.json",
        r#"{"name": "shell", "projectType": "application", "targets": {"build": {"executor": "@angular-devkit/build-angular:browser"}}}"#,
    );

    let result = discover(ws.path()).unwrap();

    assert_eq!(result.projects[0].framework().unwrap().name, "angular");
    assert_eq!(
        invocations(&result),
        vec!["shell:build", "shell:serve", "shell:build"]
    );
}

#[test]
fn test_library_with_framework_gets_commands() {
    let ws = create_workspace();
    add_project(ws.path(), "libs/ui", "ui", "library", &[]);
    write_file(ws.path(), "libs/ui/next.config.js", "module.exports = {};\n");

    let result = discover(ws.path()).unwrap();
    let displays: Vec<String> = result.entries.iter().map(|e| e.display_string()).collect();

    assert_eq!(
        displays,
        vec![
            "[lib:nextjs] ui:dev",
            "[lib:nextjs] ui:build",
            "[lib:nextjs] ui:start",
        ]
    );
}

#[test]
fn test_broken_manifest_is_skipped() {
    let ws = create_standard_workspace();
    write_file(ws.path(), "libs/broken/project.json", "{ not json");
    write_file(ws.path(), "libs/anon/project.json", "{\"targets\": {}}");

    let result = discover(ws.path()).unwrap();

    assert_eq!(result.projects.len(), 3);
    assert_eq!(result.skipped.len(), 2);
    assert!(result
        .skipped
        .iter()
        .any(|p| p.ends_with("libs/broken/project.json")));
}

#[test]
fn test_exclude_patterns_hide_entries() {
    let ws = create_standard_workspace();

    let discovery = Discovery::default().with_exclude(vec!["*:build*".to_string()]);
    let result = discovery.run(ws.path()).unwrap();

    assert!(invocations(&result).iter().all(|i| !i.contains(":build")));
    // Projects stay even when all their entries are hidden
    assert_eq!(result.projects.len(), 3);
}

#[test]
fn test_invalid_exclude_pattern() {
    let ws = create_standard_workspace();

    let discovery = Discovery::default().with_exclude(vec!["[".to_string()]);
    let err = discovery.run(ws.path()).unwrap_err();

    assert_eq!(err.exit_code(), 5);
}

#[test]
fn test_custom_manifest_names() {
    let ws = create_workspace();
    write_file(
        ws.path(),
        "apps/legacy/nx-project.json",
        r#"{"name": "legacy", "targets": {"build": {}}}"#,
    );
    add_project(ws.path(), "apps/web", "web", "application", &[("build", &[])]);

    let discovery = Discovery::default().with_manifest_names(vec!["nx-project.json".to_string()]);
    let result = discovery.run(ws.path()).unwrap();

    let names: Vec<&str> = result.projects.iter().map(|p| p.name()).collect();
    assert_eq!(names, vec!["legacy"]);
}

#[test]
fn test_classifier_orders_shallow_before_deep() {
    let registry = FrameworkRegistry::new(vec![
        Framework::new("deep-first", ["a"]).deep("src/index.ts", "marker"),
        Framework::new("shallow-second", ["b"]).markers(["second.config.js"]),
    ]);

    let classifier = Classifier::new(&registry);
    let deep: Vec<bool> = classifier
        .rules()
        .iter()
        .map(|r| r.strategy().is_deep())
        .collect();

    assert_eq!(deep, vec![false, true]);
    assert_eq!(classifier.rules()[0].framework().name, "shallow-second");
}
