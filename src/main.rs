//! nxplorer - Nx workspace task explorer
//!
//! Entry point for the nxplorer CLI application.

use std::io::{self, IsTerminal};
use std::path::Path;
use std::process::ExitCode;

use anyhow::{Context, Result};
use tracing::debug;

use nxplorer::cli::Cli;
use nxplorer::config::{generate_example_config, load_config, Config};
use nxplorer::error::{exit_code, NxError};
use nxplorer::logging::{init_logging, LogTarget};
use nxplorer::project::{Discovery, DiscoveryResult, Scanner};
use nxplorer::runner::{execute, NxCommand};
use nxplorer::tui::{run_tui, App, SessionOutcome};
use nxplorer::utils::{
    check_node_modules, find_in_path, find_workspace_root, global_config_file,
    local_config_file,
};

fn main() -> ExitCode {
    match run() {
        Ok(code) => ExitCode::from(exit_code::to_status(code)),
        Err(err) => {
            if let Some(nx_err) = err.downcast_ref::<NxError>() {
                eprintln!("Error: {nx_err}");
                return ExitCode::from(exit_code::to_status(nx_err.exit_code()));
            }
            eprintln!("Error: {err:#}");
            ExitCode::from(exit_code::to_status(exit_code::GENERAL_ERROR))
        }
    }
}

fn run() -> Result<i32> {
    let cli = Cli::parse_args();

    // Handle early-exit flags
    if let Some(shell) = cli.completions {
        Cli::generate_completions(shell);
        return Ok(exit_code::SUCCESS);
    }

    if cli.print_config {
        print!("{}", generate_example_config());
        return Ok(exit_code::SUCCESS);
    }

    let log_target = if cli.should_show_tui() {
        LogTarget::interactive(cli.log_file.clone())
    } else {
        LogTarget::Stderr
    };
    let active_log = init_logging(log_target.clone(), cli.verbose);

    if cli.debug {
        print_debug_header();
        eprintln!("Debug: CLI arguments = {cli:#?}");
    }

    let root = find_workspace_root(&cli.workspace_dir())?;

    let config = if cli.no_config {
        Config::default()
    } else {
        load_config(cli.config.as_deref(), &root)?
    };

    if cli.debug {
        eprintln!("Debug: Workspace root = {}", root.display());
        print_debug_paths(&root, &log_target, active_log.as_deref());
        eprintln!("Debug: Config = {config:#?}");
        eprintln!();
    }

    if config.general.check_node_modules() {
        check_node_modules(&root)?;
    }

    let nx = NxCommand::parse(config.general.nx_command())?;
    if cli.requires_nx() && find_in_path(nx.program()).is_none() {
        return Err(NxError::NxNotInstalled {
            program: nx.program().to_string(),
        }
        .into());
    }

    let discovery = build_discovery(&config, &cli);

    if cli.list {
        let result = discovery.run(&root)?;
        if cli.debug {
            print_debug_discovery(&result);
        }
        return list_entries(&result);
    }

    // TUI mode
    let workspace_name = root
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("workspace")
        .to_string();

    let app = App::new(workspace_name, config.appearance())
        .with_nx_command(config.general.nx_command());

    let scan_root = root.clone();
    let outcome = run_tui(app, move || discovery.run(&scan_root)).context("TUI error")?;

    let args = match outcome {
        SessionOutcome::Quit => return Ok(exit_code::SUCCESS),
        SessionOutcome::Run(invocation) => nx.run_args(&invocation),
        SessionOutcome::Reset => nx.with_args(config.general.reset_args()),
    };

    debug!(?args, "running selected command");
    let result = execute(&nx, &args, &root, cli.dry_run)?;

    Ok(result.code())
}

/// Build the discovery pipeline from config and CLI exclude patterns.
fn build_discovery(config: &Config, cli: &Cli) -> Discovery {
    let scanner = Scanner::new(config.scan.ignore_file()).with_patterns(config.scan.ignore());

    let mut exclude = config.exclude.patterns.clone();
    exclude.extend(cli.exclude.iter().cloned());

    Discovery::new(scanner, &config.frameworks.registry())
        .with_manifest_names(config.scan.manifest_names())
        .with_exclude(exclude)
}

/// List entries (non-TUI mode).
fn list_entries(result: &DiscoveryResult) -> Result<i32> {
    let use_colors = io::stdout().is_terminal();

    for entry in &result.entries {
        println!("{}", entry.display_string());
    }

    if use_colors {
        println!("\x1b[2m{}\x1b[0m", result.summary());
    } else {
        println!("{}", result.summary());
    }

    Ok(exit_code::SUCCESS)
}

// ==================== Debug Functions ====================

/// Print debug header with version info.
fn print_debug_header() {
    eprintln!("=== nxplorer debug mode ===");
    eprintln!("Version: {}", env!("CARGO_PKG_VERSION"));
    eprintln!();
}

/// Print debug information about file paths.
fn print_debug_paths(root: &Path, log_target: &LogTarget, active_log: Option<&Path>) {
    eprintln!("Debug: File locations:");

    match global_config_file() {
        Some(cfg) => eprintln!(
            "  Global config: {} (exists: {})",
            cfg.display(),
            cfg.exists()
        ),
        None => eprintln!("  Global config: <not available>"),
    }

    match local_config_file(root) {
        Some(cfg) => eprintln!("  Local config: {} (exists: true)", cfg.display()),
        None => eprintln!(
            "  Local config: {} (exists: false)",
            root.join(nxplorer::config::LOCAL_CONFIG_NAME).display()
        ),
    }

    match (log_target, active_log) {
        (LogTarget::Stderr, _) => eprintln!("  Log file: <stderr>"),
        (LogTarget::Off, _) => eprintln!("  Log file: <disabled, use --log-file>"),
        (LogTarget::File(_), Some(path)) => eprintln!("  Log file: {}", path.display()),
        (LogTarget::File(path), None) => {
            eprintln!("  Log file: {} (could not be opened)", path.display())
        }
    }

    let node_modules = root.join("node_modules");
    eprintln!(
        "  node_modules: {} (exists: {})",
        node_modules.display(),
        node_modules.is_dir()
    );
}

/// Print debug information about discovered projects.
fn print_debug_discovery(result: &DiscoveryResult) {
    eprintln!("Debug: Projects found:");
    for project in result.projects.iter().take(20) {
        let framework = project.framework().map(|f| f.name.as_str()).unwrap_or("-");
        eprintln!(
            "  {} ({}, {}) at {}",
            project.name(),
            project.project_type(),
            framework,
            project.root().display()
        );
    }
    if result.projects.len() > 20 {
        eprintln!("  ... and {} more", result.projects.len() - 20);
    }
    for path in &result.skipped {
        eprintln!("  skipped: {}", path.display());
    }
    eprintln!();
}
