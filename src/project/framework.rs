//! Framework detection.
//!
//! A [`FrameworkRegistry`] is an ordered, immutable list of known frameworks.
//! [`Classifier`] compiles it into a flat list of [`DetectionRule`]s: every
//! shallow rule (marker files, manifest keywords) of every framework comes
//! before any deep rule (keyword inside a source file). The first rule that
//! succeeds decides the framework.

use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::debug;

/// Keyword lookup inside a file relative to the project root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeepMatcher {
    /// Path relative to the project root.
    pub path: String,
    /// Substring that identifies the framework.
    pub keyword: String,
}

impl DeepMatcher {
    /// Create a new deep matcher.
    pub fn new(path: impl Into<String>, keyword: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            keyword: keyword.into(),
        }
    }
}

/// A recognised tool ecosystem contributing implicit commands.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Framework {
    /// Framework name shown in display strings.
    pub name: String,
    /// Any one of these files at the project root identifies the framework.
    #[serde(default)]
    pub markers: Vec<String>,
    /// Any one of these substrings in the manifest identifies the framework.
    #[serde(default)]
    pub manifest_keywords: Vec<String>,
    /// Fallback content checks.
    #[serde(default)]
    pub deep: Vec<DeepMatcher>,
    /// Commands every project using this framework exposes.
    #[serde(default)]
    pub commands: Vec<String>,
}

impl Framework {
    /// Create a framework with only a name and commands.
    pub fn new<I, S>(name: impl Into<String>, commands: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            markers: Vec::new(),
            manifest_keywords: Vec::new(),
            deep: Vec::new(),
            commands: commands.into_iter().map(Into::into).collect(),
        }
    }

    /// Set the marker files.
    pub fn markers<I, S>(mut self, markers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.markers = markers.into_iter().map(Into::into).collect();
        self
    }

    /// Set the manifest keywords.
    pub fn manifest_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.manifest_keywords = keywords.into_iter().map(Into::into).collect();
        self
    }

    /// Add a deep content matcher.
    pub fn deep(mut self, path: impl Into<String>, keyword: impl Into<String>) -> Self {
        self.deep.push(DeepMatcher::new(path, keyword));
        self
    }
}

/// Ordered set of known frameworks. Earlier entries win ties.
#[derive(Debug, Clone, Default)]
pub struct FrameworkRegistry {
    frameworks: Vec<Arc<Framework>>,
}

impl FrameworkRegistry {
    /// Create a registry from frameworks in priority order.
    pub fn new(frameworks: Vec<Framework>) -> Self {
        Self {
            frameworks: frameworks.into_iter().map(Arc::new).collect(),
        }
    }

    /// The frameworks Nx workspaces commonly use.
    pub fn builtin() -> Self {
        Self::new(vec![
            Framework::new("nextjs", ["dev", "build", "start"]).markers([
                "next.config.js",
                "next.config.ts",
                "next.config.mjs",
                "next.config.cjs",
            ]),
            Framework::new("nuxt", ["dev", "build", "start"])
                .markers(["nuxt.config.js", "nuxt.config.ts"]),
            Framework::new("angular", ["serve", "build"])
                .markers(["angular.json"])
                .manifest_keywords(["@angular"]),
            Framework::new("nestjs", ["start", "build"]).deep("src/main.ts", "@nestjs/common"),
            Framework::new("cypress", ["open-cypress", "e2e"]).markers([
                "cypress.config.ts",
                "cypress.json",
                "cypress.config.js",
                "cypress.config.mjs",
                "cypress.config.cjs",
            ]),
            Framework::new("Vite", ["serve", "build"]).markers([
                "vite.config.ts",
                "vite.config.js",
                "vite.config.mjs",
                "vite.config.cjs",
                "vite.config.mts",
                "vite.config.cts",
            ]),
        ])
    }

    /// Build a registry with `custom` frameworks ahead of the built-ins.
    pub fn with_custom(custom: Vec<Framework>, include_builtin: bool) -> Self {
        let mut frameworks: Vec<Arc<Framework>> = custom.into_iter().map(Arc::new).collect();
        if include_builtin {
            frameworks.extend(Self::builtin().frameworks);
        }
        Self { frameworks }
    }

    /// Iterate over frameworks in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<Framework>> {
        self.frameworks.iter()
    }

    /// Get the number of frameworks.
    pub fn len(&self) -> usize {
        self.frameworks.len()
    }

    /// Check if the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.frameworks.is_empty()
    }
}

/// How a single rule inspects a project directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
    /// Any of these files exists at the project root.
    MarkerFiles(Vec<String>),
    /// Any of these substrings appears in the manifest.
    ManifestKeywords(Vec<String>),
    /// The file at `path` contains `keyword`.
    FileContains { path: String, keyword: String },
}

impl Strategy {
    /// Whether this is a deep (fallback) strategy.
    pub fn is_deep(&self) -> bool {
        matches!(self, Strategy::FileContains { .. })
    }
}

/// One entry of the classifier's priority list.
#[derive(Debug, Clone)]
pub struct DetectionRule {
    framework: Arc<Framework>,
    strategy: Strategy,
}

impl DetectionRule {
    /// The framework this rule identifies.
    pub fn framework(&self) -> &Framework {
        &self.framework
    }

    /// The check this rule performs.
    pub fn strategy(&self) -> &Strategy {
        &self.strategy
    }

    fn matches(&self, project_dir: &Path, manifest_name: &str) -> bool {
        match &self.strategy {
            Strategy::MarkerFiles(files) => files.iter().any(|f| project_dir.join(f).exists()),
            Strategy::ManifestKeywords(keywords) => read_lossy(&project_dir.join(manifest_name))
                .is_some_and(|content| keywords.iter().any(|k| content.contains(k.as_str()))),
            Strategy::FileContains { path, keyword } => read_lossy(&project_dir.join(path))
                .is_some_and(|content| content.contains(keyword.as_str())),
        }
    }
}

/// Assigns at most one framework to a project directory.
#[derive(Debug, Clone)]
pub struct Classifier {
    rules: Vec<DetectionRule>,
    manifest_name: String,
}

impl Classifier {
    /// Compile `registry` into an ordered rule list.
    pub fn new(registry: &FrameworkRegistry) -> Self {
        let mut rules = Vec::new();

        for framework in registry.iter() {
            if !framework.markers.is_empty() {
                rules.push(DetectionRule {
                    framework: Arc::clone(framework),
                    strategy: Strategy::MarkerFiles(framework.markers.clone()),
                });
            }
            if !framework.manifest_keywords.is_empty() {
                rules.push(DetectionRule {
                    framework: Arc::clone(framework),
                    strategy: Strategy::ManifestKeywords(framework.manifest_keywords.clone()),
                });
            }
        }

        for framework in registry.iter() {
            for matcher in &framework.deep {
                rules.push(DetectionRule {
                    framework: Arc::clone(framework),
                    strategy: Strategy::FileContains {
                        path: matcher.path.clone(),
                        keyword: matcher.keyword.clone(),
                    },
                });
            }
        }

        Self {
            rules,
            manifest_name: "project.json".to_string(),
        }
    }

    /// Set the manifest file name searched by keyword rules.
    pub fn manifest_name(mut self, name: impl Into<String>) -> Self {
        self.manifest_name = name.into();
        self
    }

    /// The rules in evaluation order.
    pub fn rules(&self) -> &[DetectionRule] {
        &self.rules
    }

    /// Detect the framework of the project rooted at `project_dir`.
    ///
    /// Never fails: unreadable files count as "no match".
    pub fn classify(&self, project_dir: &Path) -> Option<Arc<Framework>> {
        let rule = self
            .rules
            .iter()
            .find(|rule| rule.matches(project_dir, &self.manifest_name))?;

        debug!(
            project = %project_dir.display(),
            framework = %rule.framework.name,
            deep = rule.strategy.is_deep(),
            "framework detected"
        );
        Some(Arc::clone(&rule.framework))
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::new(&FrameworkRegistry::builtin())
    }
}

fn read_lossy(path: &Path) -> Option<String> {
    fs::read(path)
        .ok()
        .map(|bytes| String::from_utf8_lossy(&bytes).into_owned())
}
