//! The discovery pipeline: scan, parse, classify, synthesize.

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};

use super::commands::{synthesize, without_matching};
use super::framework::{Classifier, FrameworkRegistry};
use super::manifest::parse_manifest;
use super::scanner::Scanner;
use super::types::{CommandEntry, Project};
use crate::error::{NxError, Result};

/// Everything discovery produces for one workspace.
#[derive(Debug, Clone, Default)]
pub struct DiscoveryResult {
    /// Successfully parsed projects, in scan order.
    pub projects: Vec<Project>,
    /// Command entries for all projects.
    pub entries: Vec<CommandEntry>,
    /// Manifests that were skipped because they could not be read or parsed.
    pub skipped: Vec<PathBuf>,
}

impl DiscoveryResult {
    /// Status summary, e.g. `3 projects with 12 tasks`.
    pub fn summary(&self) -> String {
        format!(
            "{} projects with {} tasks",
            self.projects.len(),
            self.entries.len()
        )
    }
}

/// Configured discovery pipeline.
#[derive(Debug, Clone)]
pub struct Discovery {
    scanner: Scanner,
    classifier: Classifier,
    manifest_names: Vec<String>,
    exclude: Vec<String>,
}

impl Default for Discovery {
    fn default() -> Self {
        Self::new(
            Scanner::default().with_patterns(["node_modules/", ".git/"]),
            &FrameworkRegistry::builtin(),
        )
    }
}

impl Discovery {
    /// Create a pipeline from a scanner and a framework registry.
    pub fn new(scanner: Scanner, registry: &FrameworkRegistry) -> Self {
        Self {
            scanner,
            classifier: Classifier::new(registry),
            manifest_names: vec!["project.json".to_string()],
            exclude: Vec::new(),
        }
    }

    /// Set the manifest file names to look for.
    ///
    /// The first name is also the manifest read by keyword detection.
    pub fn with_manifest_names(mut self, names: Vec<String>) -> Self {
        if let Some(first) = names.first() {
            self.classifier = self.classifier.manifest_name(first.clone());
        }
        self.manifest_names = names;
        self
    }

    /// Set glob patterns for invocations to hide.
    pub fn with_exclude(mut self, patterns: Vec<String>) -> Self {
        self.exclude = patterns;
        self
    }

    /// Run discovery below `root`.
    ///
    /// # Errors
    ///
    /// A traversal failure yields [`NxError::ScanFailed`]. An invalid exclude
    /// pattern yields [`NxError::InvalidPattern`]. Broken manifests are
    /// skipped with a warning.
    pub fn run(&self, root: &Path) -> Result<DiscoveryResult> {
        let manifests = self
            .scanner
            .scan(root, &self.manifest_names)
            .map_err(|e| NxError::ScanFailed {
                root: root.to_path_buf(),
                source: Box::new(e),
            })?;

        let mut projects = Vec::with_capacity(manifests.len());
        let mut skipped = Vec::new();

        for path in manifests {
            match parse_manifest(&path) {
                Ok(project) => {
                    let framework = self.classifier.classify(project.root());
                    debug!(
                        project = project.name(),
                        framework = framework.as_ref().map(|f| f.name.as_str()).unwrap_or("-"),
                        "classified project"
                    );
                    projects.push(project.with_framework(framework));
                }
                Err(e) if e.is_per_project() => {
                    warn!(path = %path.display(), "skipping project: {e}");
                    skipped.push(path);
                }
                Err(e) => return Err(e),
            }
        }

        let entries = without_matching(synthesize(&projects), &self.exclude)?;

        let result = DiscoveryResult {
            projects,
            entries,
            skipped,
        };
        info!(
            root = %root.display(),
            projects = result.projects.len(),
            entries = result.entries.len(),
            skipped = result.skipped.len(),
            "discovery complete"
        );
        Ok(result)
    }
}

/// Run discovery with the default pipeline.
pub fn discover(root: &Path) -> Result<DiscoveryResult> {
    Discovery::default().run(root)
}
