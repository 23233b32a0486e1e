//! Expansion of projects into directly invocable command entries.

use glob::Pattern;

use super::types::{CommandEntry, Project};
use crate::error::{NxError, Result};

/// Expand `projects` into the flat list of command entries.
///
/// For each project, in order: every task's bare command followed by its
/// subcommands, then the framework's implicit commands. Duplicates are kept.
pub fn synthesize(projects: &[Project]) -> Vec<CommandEntry> {
    let mut entries = Vec::new();

    for (index, project) in projects.iter().enumerate() {
        let framework = project.framework().map(|f| f.name.as_str()).unwrap_or("");
        let entry = |command: &str, subcommand: &str| {
            CommandEntry::new(
                project.project_type(),
                framework,
                project.name(),
                command,
                subcommand,
            )
            .with_project_index(index)
        };

        for task in project.tasks() {
            entries.push(entry(task.command(), ""));
            for sub in task.subcommands() {
                entries.push(entry(task.command(), sub));
            }
        }

        if let Some(fw) = project.framework() {
            for command in &fw.commands {
                entries.push(entry(command, ""));
            }
        }
    }

    entries
}

/// Drop entries whose invocation string matches any of `patterns`.
///
/// # Errors
///
/// Returns [`NxError::InvalidPattern`] if a pattern is not a valid glob.
pub fn without_matching(entries: Vec<CommandEntry>, patterns: &[String]) -> Result<Vec<CommandEntry>> {
    if patterns.is_empty() {
        return Ok(entries);
    }

    let compiled = patterns
        .iter()
        .map(|p| {
            Pattern::new(p).map_err(|e| NxError::InvalidPattern {
                pattern: p.clone(),
                message: e.to_string(),
            })
        })
        .collect::<Result<Vec<_>>>()?;

    Ok(entries
        .into_iter()
        .filter(|entry| {
            let invocation = entry.invocation();
            !compiled.iter().any(|p| p.matches(&invocation))
        })
        .collect())
}
