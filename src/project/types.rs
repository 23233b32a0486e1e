//! Type definitions for discovered projects and command entries.

use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::framework::Framework;

/// Kind of project declared in a manifest.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    /// A deployable application (the default).
    #[default]
    Application,
    /// A library consumed by other projects.
    Library,
}

impl ProjectType {
    /// Interpret a raw `projectType` value.
    ///
    /// Only the literal `"library"` yields a library; anything else,
    /// including a missing value, is an application.
    pub fn from_manifest(value: Option<&str>) -> Self {
        match value {
            Some("library") => ProjectType::Library,
            _ => ProjectType::Application,
        }
    }

    /// Short label used in display strings.
    pub fn short_label(&self) -> &'static str {
        match self {
            ProjectType::Application => "app",
            ProjectType::Library => "lib",
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProjectType::Application => write!(f, "application"),
            ProjectType::Library => write!(f, "library"),
        }
    }
}

/// A named operation a project exposes, with its configuration variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    command: String,
    subcommands: Vec<String>,
}

impl Task {
    /// Create a task without configuration variants.
    pub fn new(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
            subcommands: Vec::new(),
        }
    }

    /// Create a task with configuration variants.
    pub fn with_subcommands<I, S>(command: impl Into<String>, subcommands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut task = Self::new(command);
        for sub in subcommands {
            task.add_subcommand(sub);
        }
        task
    }

    /// Get the command name.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Get the subcommand names, in declaration order.
    pub fn subcommands(&self) -> &[String] {
        &self.subcommands
    }

    /// Add a subcommand, keeping the first occurrence of each name.
    pub fn add_subcommand(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.subcommands.contains(&name) {
            self.subcommands.push(name);
        }
    }
}

/// A buildable unit discovered from a manifest file.
#[derive(Debug, Clone)]
pub struct Project {
    name: String,
    project_type: ProjectType,
    tasks: Vec<Task>,
    framework: Option<Arc<Framework>>,
    manifest_path: PathBuf,
}

impl Project {
    /// Create a project with no tasks and no framework.
    pub fn new(name: impl Into<String>, project_type: ProjectType) -> Self {
        Self {
            name: name.into(),
            project_type,
            tasks: Vec::new(),
            framework: None,
            manifest_path: PathBuf::new(),
        }
    }

    /// Set the tasks.
    pub fn with_tasks(mut self, tasks: Vec<Task>) -> Self {
        self.tasks = tasks;
        self
    }

    /// Set the detected framework.
    pub fn with_framework(mut self, framework: Option<Arc<Framework>>) -> Self {
        self.framework = framework;
        self
    }

    /// Set the manifest the project was read from.
    pub fn with_manifest_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.manifest_path = path.into();
        self
    }

    /// Get the project name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the project type.
    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    /// Get the declared tasks.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Get the detected framework, if any.
    pub fn framework(&self) -> Option<&Framework> {
        self.framework.as_deref()
    }

    /// Get the manifest path.
    pub fn manifest_path(&self) -> &Path {
        &self.manifest_path
    }

    /// Get the directory containing the manifest.
    pub fn root(&self) -> &Path {
        self.manifest_path.parent().unwrap_or(Path::new(""))
    }
}

/// One directly invocable (project, command, optional subcommand) triple.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandEntry {
    project_type: ProjectType,
    framework: String,
    project: String,
    command: String,
    subcommand: String,
    project_index: usize,
}

impl CommandEntry {
    /// Create a new entry. Empty `framework` / `subcommand` mean "none".
    pub fn new(
        project_type: ProjectType,
        framework: impl Into<String>,
        project: impl Into<String>,
        command: impl Into<String>,
        subcommand: impl Into<String>,
    ) -> Self {
        Self {
            project_type,
            framework: framework.into(),
            project: project.into(),
            command: command.into(),
            subcommand: subcommand.into(),
            project_index: 0,
        }
    }

    /// Record the position of the owning project in the discovered list.
    ///
    /// Project names are not unique, so this is what ties an entry back to
    /// its project.
    pub fn with_project_index(mut self, index: usize) -> Self {
        self.project_index = index;
        self
    }

    /// Position of the owning project in the discovered list.
    pub fn project_index(&self) -> usize {
        self.project_index
    }

    /// Get the project type.
    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    /// Get the framework name (empty when none was detected).
    pub fn framework(&self) -> &str {
        &self.framework
    }

    /// Get the project name.
    pub fn project(&self) -> &str {
        &self.project
    }

    /// Get the command name.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Get the subcommand name (empty for the bare command).
    pub fn subcommand(&self) -> &str {
        &self.subcommand
    }

    /// Build the display string, e.g. `[lib:nextjs] web:build:prod`.
    pub fn display_string(&self) -> String {
        let kind = self.project_type.short_label();
        let tag = if self.framework.is_empty() {
            kind.to_string()
        } else {
            format!("{}:{}", kind, self.framework)
        };
        format!("[{}] {}", tag, self.invocation())
    }

    /// Build the string handed to `nx run`, e.g. `web:build:prod`.
    pub fn invocation(&self) -> String {
        if self.subcommand.is_empty() {
            format!("{}:{}", self.project, self.command)
        } else {
            format!("{}:{}:{}", self.project, self.command, self.subcommand)
        }
    }
}

impl fmt::Display for CommandEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display_string())
    }
}
