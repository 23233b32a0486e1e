//! CLI argument definitions for nxplorer.
//!
//! Uses clap with derive macros for argument parsing.
//!
//! # Example
//!
//! ```no_run
//! use nxplorer::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! println!("Workspace: {:?}", cli.workspace_dir());
//! ```

use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{generate, Shell};

/// Fast interactive TUI for exploring and running Nx workspace tasks.
#[derive(Parser, Debug, Default)]
#[command(name = "nxplorer")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path inside an Nx workspace (default: current directory)
    #[arg(value_name = "PATH")]
    pub path: Option<PathBuf>,

    /// List tasks non-interactively (no TUI)
    #[arg(short, long)]
    pub list: bool,

    /// Show the nx command without executing it
    #[arg(short, long)]
    pub dry_run: bool,

    /// Hide tasks whose invocation matches pattern (can be repeated)
    #[arg(short, long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    pub no_config: bool,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,

    /// Print resolved paths and discovery details to stderr
    #[arg(long)]
    pub debug: bool,

    /// Write logs to this file (interactive runs log nowhere otherwise)
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Do not require nx to be installed on PATH
    #[arg(long)]
    pub skip_nx_check: bool,

    /// Print an example configuration file and exit
    #[arg(long)]
    pub print_config: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<CliShell>,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliShell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    Powershell,
    /// Elvish shell
    Elvish,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Get the directory to start the workspace search from.
    ///
    /// Returns the provided path or the current directory.
    pub fn workspace_dir(&self) -> PathBuf {
        self.path
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }

    /// Check if the TUI should be shown.
    pub fn should_show_tui(&self) -> bool {
        !self.list
    }

    /// Check if nx must be resolvable on PATH.
    pub fn requires_nx(&self) -> bool {
        !(self.list || self.dry_run || self.skip_nx_check)
    }

    /// Generate shell completions and write to stdout.
    pub fn generate_completions(shell: CliShell) {
        let mut cmd = Cli::command();
        let shell = match shell {
            CliShell::Bash => Shell::Bash,
            CliShell::Zsh => Shell::Zsh,
            CliShell::Fish => Shell::Fish,
            CliShell::Powershell => Shell::PowerShell,
            CliShell::Elvish => Shell::Elvish,
        };
        generate(shell, &mut cmd, "nxplorer", &mut std::io::stdout());
    }
}
