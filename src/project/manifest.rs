//! Project manifest (`project.json`) parsing.

use std::fs;
use std::path::Path;

use serde_json::{Map, Value};

use super::types::{Project, ProjectType, Task};
use crate::error::{NxError, Result};

/// Parse the manifest at `path` into a project without a framework.
///
/// # Errors
///
/// Returns an error if:
/// - The file cannot be read
/// - The content is not well-formed JSON
/// - The `name` field is missing or not a string
pub fn parse_manifest(path: &Path) -> Result<Project> {
    let content = fs::read_to_string(path).map_err(|e| NxError::io("read", path, e))?;
    parse_manifest_str(&content, path)
}

/// Parse manifest content. `path` is only used for error reporting and is
/// recorded as the project's manifest path.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use nxplorer::project::parse_manifest_str;
///
/// let json = r#"{"name": "web", "targets": {"build": {}}}"#;
/// let project = parse_manifest_str(json, Path::new("apps/web/project.json")).unwrap();
/// assert_eq!(project.name(), "web");
/// assert_eq!(project.tasks().len(), 1);
/// ```
pub fn parse_manifest_str(content: &str, path: &Path) -> Result<Project> {
    let json: Value =
        serde_json::from_str(content).map_err(|e| NxError::manifest_parse(path, content, &e))?;

    let Some(root) = json.as_object() else {
        return Err(NxError::ManifestSchema {
            path: path.to_path_buf(),
            message: "expected a JSON object at the top level".to_string(),
        });
    };

    let name = root
        .get("name")
        .and_then(Value::as_str)
        .ok_or_else(|| NxError::ManifestSchema {
            path: path.to_path_buf(),
            message: "missing or invalid 'name' field".to_string(),
        })?;

    let project_type = ProjectType::from_manifest(root.get("projectType").and_then(Value::as_str));

    Ok(Project::new(name, project_type)
        .with_tasks(parse_tasks(root))
        .with_manifest_path(path))
}

/// Extract tasks from the `targets` map, in declaration order.
fn parse_tasks(root: &Map<String, Value>) -> Vec<Task> {
    let Some(targets) = root.get("targets").and_then(Value::as_object) else {
        return Vec::new();
    };

    targets
        .iter()
        .map(|(command, target)| {
            let mut task = Task::new(command);
            if let Some(configs) = target.get("configurations").and_then(Value::as_object) {
                for variant in configs.keys() {
                    task.add_subcommand(variant);
                }
            }
            task
        })
        .collect()
}
