//! Ignore-aware discovery of manifest files.
//!
//! Patterns come from the workspace ignore file (gitignore syntax) plus any
//! extra patterns from configuration. A matching directory is pruned without
//! descending into it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};
use ignore::WalkBuilder;
use tracing::{debug, warn};

use crate::error::{NxError, Result};

/// Recursive scanner for files with well-known names.
#[derive(Debug, Clone)]
pub struct Scanner {
    ignore_file: String,
    extra_patterns: Vec<String>,
}

impl Default for Scanner {
    fn default() -> Self {
        Self::new(".gitignore")
    }
}

impl Scanner {
    /// Create a scanner reading patterns from `ignore_file` at the root.
    pub fn new(ignore_file: impl Into<String>) -> Self {
        Self {
            ignore_file: ignore_file.into(),
            extra_patterns: Vec::new(),
        }
    }

    /// Add patterns applied in addition to the ignore file.
    pub fn with_patterns<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Find every file below `root` whose base name is in `targets`.
    ///
    /// Returned paths are absolute and sorted.
    ///
    /// # Errors
    ///
    /// Any traversal failure aborts the whole scan; there is no partial result.
    pub fn scan(&self, root: &Path, targets: &[String]) -> Result<Vec<PathBuf>> {
        let root = root
            .canonicalize()
            .map_err(|e| NxError::io("access", root, e))?;
        let matcher = self.build_matcher(&root);

        let mut walker = WalkBuilder::new(&root);
        walker.standard_filters(false).follow_links(false);

        let filter_root = root.clone();
        walker.filter_entry(move |entry| {
            if entry.depth() == 0 {
                return true;
            }
            let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);
            let relative = entry
                .path()
                .strip_prefix(&filter_root)
                .unwrap_or(entry.path());
            !matcher.matched(relative, is_dir).is_ignore()
        });

        let mut results = Vec::new();
        for item in walker.build() {
            let entry = item.map_err(|e| walk_error(&root, e))?;
            let is_file = entry.file_type().map(|t| !t.is_dir()).unwrap_or(false);
            if !is_file {
                continue;
            }

            let matches = entry
                .file_name()
                .to_str()
                .is_some_and(|name| targets.iter().any(|t| t == name));
            if matches {
                results.push(entry.into_path());
            }
        }

        results.sort();
        debug!(root = %root.display(), found = results.len(), "scan finished");
        Ok(results)
    }

    /// Build the ignore matcher for `root`.
    fn build_matcher(&self, root: &Path) -> Gitignore {
        let mut builder = GitignoreBuilder::new(root);

        let ignore_path = root.join(&self.ignore_file);
        if ignore_path.is_file() {
            match fs::read_to_string(&ignore_path) {
                Ok(content) => {
                    for line in content.lines() {
                        let line = line.trim();
                        if line.is_empty() || line.starts_with('#') {
                            continue;
                        }
                        if let Err(e) = builder.add_line(Some(ignore_path.clone()), line) {
                            warn!(pattern = line, "skipping invalid ignore pattern: {e}");
                        }
                    }
                }
                Err(e) => warn!(
                    path = %ignore_path.display(),
                    "failed to read ignore file, continuing without it: {e}"
                ),
            }
        }

        for pattern in &self.extra_patterns {
            if let Err(e) = builder.add_line(None, pattern) {
                warn!(pattern = %pattern, "skipping invalid ignore pattern: {e}");
            }
        }

        builder.build().unwrap_or_else(|e| {
            warn!("failed to build ignore matcher: {e}");
            Gitignore::empty()
        })
    }
}

/// Convert a traversal error into an IO error carrying the failing path.
fn walk_error(root: &Path, err: ignore::Error) -> NxError {
    let path = error_path(&err).unwrap_or_else(|| root.to_path_buf());
    let message = err.to_string();
    let source = err
        .into_io_error()
        .unwrap_or_else(|| io::Error::new(io::ErrorKind::Other, message));
    NxError::io("traverse", path, source)
}

fn error_path(err: &ignore::Error) -> Option<PathBuf> {
    match err {
        ignore::Error::WithPath { path, .. } => Some(path.clone()),
        ignore::Error::WithDepth { err, .. } | ignore::Error::WithLineNumber { err, .. } => {
            error_path(err)
        }
        _ => None,
    }
}
