//! Tracing subscriber setup.
//!
//! The TUI owns the terminal, so interactive runs log only to a file named
//! with `--log-file` and otherwise not at all. Plain output modes log to
//! stderr. Nothing is written to disk unless a log file was asked for.

use std::fs::{self, File, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

/// Where log lines go.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    /// Standard error.
    Stderr,
    /// Append to a file.
    File(PathBuf),
    /// Discard everything.
    Off,
}

impl LogTarget {
    /// Target for an interactive session: the requested file, or nothing.
    pub fn interactive(log_file: Option<PathBuf>) -> Self {
        log_file.map_or(LogTarget::Off, LogTarget::File)
    }
}

/// Filter used when `RUST_LOG` is not set.
pub fn default_directive(target: &LogTarget, verbose: bool) -> &'static str {
    match (verbose, target) {
        (_, LogTarget::Off) => "off",
        (true, _) => "nxplorer=debug",
        (false, LogTarget::File(_)) => "nxplorer=info",
        (false, LogTarget::Stderr) => "nxplorer=warn",
    }
}

/// Install the global subscriber.
///
/// Returns the log file actually in use. If the file cannot be opened,
/// logging is disabled and `None` is returned. [`LogTarget::Off`] installs
/// no subscriber and touches no file.
pub fn init_logging(target: LogTarget, verbose: bool) -> Option<PathBuf> {
    if target == LogTarget::Off {
        return None;
    }

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(&target, verbose)));

    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .with_target(false)
                .try_init();
            None
        }
        LogTarget::File(path) => {
            let file = open_log_file(&path)?;
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .try_init();
            Some(path)
        }
        LogTarget::Off => None,
    }
}

fn open_log_file(path: &Path) -> Option<File> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).ok()?;
    }
    OpenOptions::new().create(true).append(true).open(path).ok()
}
