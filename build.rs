//! Build script for nxplorer.
//!
//! Generates man pages using clap_mangen.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};

/// Minimal CLI struct for man page generation.
///
/// Mirrors `src/cli.rs`; the build script cannot depend on the crate itself.
#[derive(Parser)]
#[command(name = "nxplorer")]
#[command(
    author,
    version,
    about = "Fast interactive TUI for exploring and running Nx workspace tasks"
)]
#[command(
    long_about = "nxplorer scans an Nx workspace for project.json files, detects the \
    framework each project uses and lists every runnable task.\n\n\
    Run without arguments to launch the interactive TUI. Type to fuzzy filter, use the \
    arrow keys to navigate, Enter to run the highlighted task with `nx run`, or Ctrl+R \
    to run `nx reset`."
)]
struct Cli {
    /// Path inside an Nx workspace (default: current directory)
    #[arg(value_name = "PATH")]
    path: Option<PathBuf>,

    /// List tasks non-interactively (no TUI)
    #[arg(short, long)]
    list: bool,

    /// Show the nx command without executing it
    #[arg(short, long)]
    dry_run: bool,

    /// Hide tasks whose invocation matches pattern (can be repeated)
    #[arg(short, long, value_name = "PATTERN")]
    exclude: Vec<String>,

    /// Path to config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Ignore config files
    #[arg(long)]
    no_config: bool,

    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    /// Print resolved paths and discovery details to stderr
    #[arg(long)]
    debug: bool,

    /// Write logs to this file (interactive runs log nowhere otherwise)
    #[arg(long, value_name = "PATH")]
    log_file: Option<PathBuf>,

    /// Do not require nx to be installed on PATH
    #[arg(long)]
    skip_nx_check: bool,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_config: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Elvish,
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-env-changed=NXPLORER_GEN_MANPAGE");

    // Only generate man pages for release builds or when explicitly requested
    let profile = env::var("PROFILE").unwrap_or_default();
    if profile != "release" && env::var("NXPLORER_GEN_MANPAGE").is_err() {
        return;
    }

    let Some(out_dir) = env::var_os("OUT_DIR").map(PathBuf::from) else {
        return;
    };

    let man = clap_mangen::Man::new(Cli::command());
    let mut buffer = Vec::new();
    if let Err(e) = man.render(&mut buffer) {
        println!("cargo:warning=failed to render man page: {e}");
        return;
    }

    let man_path = out_dir.join("nxplorer.1");
    if let Err(e) = fs::write(&man_path, buffer) {
        println!("cargo:warning=failed to write man page: {e}");
        return;
    }

    // Also copy to docs directory for distribution
    if let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR") {
        let docs_dir = PathBuf::from(manifest_dir).join("docs");
        if docs_dir.exists() {
            let _ = fs::copy(&man_path, docs_dir.join("nxplorer.1"));
        }
    }
}
