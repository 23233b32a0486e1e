//! nx command execution.
//!
//! Builds `nx run <invocation>` / `nx reset` command lines from the configured
//! nx command and runs them in the workspace root with inherited stdio.

use std::path::Path;
use std::process::{Command, ExitStatus, Stdio};

use tracing::info;

use crate::error::{exit_code, NxError, Result};

/// The program and leading arguments used to invoke nx, e.g. `npx nx`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NxCommand {
    program: String,
    base_args: Vec<String>,
}

impl Default for NxCommand {
    fn default() -> Self {
        Self {
            program: "nx".to_string(),
            base_args: Vec::new(),
        }
    }
}

impl NxCommand {
    /// Split a configured command such as `"pnpm exec nx"` into words.
    ///
    /// # Errors
    ///
    /// Returns [`NxError::InvalidCommand`] if the string has unbalanced quotes
    /// or contains no words.
    pub fn parse(command: &str) -> Result<Self> {
        let words = shell_words::split(command).map_err(|e| NxError::InvalidCommand {
            command: command.to_string(),
            message: e.to_string(),
        })?;

        let mut words = words.into_iter();
        let program = words.next().ok_or_else(|| NxError::InvalidCommand {
            command: command.to_string(),
            message: "command is empty".to_string(),
        })?;

        Ok(Self {
            program,
            base_args: words.collect(),
        })
    }

    /// The executable looked up on PATH.
    pub fn program(&self) -> &str {
        &self.program
    }

    /// Full argument list for `nx run <invocation>`.
    pub fn run_args(&self, invocation: &str) -> Vec<String> {
        self.with_args(["run", invocation])
    }

    /// Full argument list with `args` appended to the base arguments.
    pub fn with_args<I, S>(&self, args: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut all = self.base_args.clone();
        all.extend(args.into_iter().map(Into::into));
        all
    }

    /// Format a full command line for display.
    pub fn format(&self, args: &[String]) -> String {
        let mut words = Vec::with_capacity(args.len() + 1);
        words.push(self.program.as_str());
        words.extend(args.iter().map(String::as_str));
        shell_words::join(words)
    }
}

/// Result of command execution.
#[derive(Debug)]
pub struct ExecutionResult {
    /// Exit status, `None` for dry runs.
    pub status: Option<ExitStatus>,
    /// The command line that was (or would have been) executed.
    pub command: String,
}

impl ExecutionResult {
    /// Check if the execution was successful.
    pub fn success(&self) -> bool {
        self.status.map_or(true, |s| s.success())
    }

    /// Get the exit code to propagate.
    ///
    /// A process killed by a signal reports [`exit_code::INTERRUPTED`].
    pub fn code(&self) -> i32 {
        match self.status {
            None => exit_code::SUCCESS,
            Some(status) => status.code().unwrap_or(exit_code::INTERRUPTED),
        }
    }
}

/// Execute nx with `args` in `workspace_root`.
///
/// With `dry_run`, prints `Would run: ...` and spawns nothing.
///
/// # Errors
///
/// Returns an error if the process cannot be spawned.
pub fn execute(
    nx: &NxCommand,
    args: &[String],
    workspace_root: &Path,
    dry_run: bool,
) -> Result<ExecutionResult> {
    let command_str = nx.format(args);

    if dry_run {
        println!("{}", format_dry_run_command(nx, args));
        return Ok(ExecutionResult {
            status: None,
            command: command_str,
        });
    }

    info!(command = %command_str, dir = %workspace_root.display(), "executing");

    let status = Command::new(nx.program())
        .args(args)
        .current_dir(workspace_root)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| NxError::io("execute", nx.program(), e))?;

    Ok(ExecutionResult {
        status: Some(status),
        command: command_str,
    })
}

/// Format a command for display in dry-run mode.
pub fn format_dry_run_command(nx: &NxCommand, args: &[String]) -> String {
    format!("Would run: {}", nx.format(args))
}
