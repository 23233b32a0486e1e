//! TUI module for nxplorer.
//!
//! Provides the terminal user interface for interactive task selection.

mod app;
mod input;
mod layout;
mod theme;
mod ui;
pub mod widgets;

pub use app::{App, SessionOutcome, SessionState};
pub use input::handle_event;
pub use layout::{centered_rect_fixed, MainLayout, MIN_HEIGHT, MIN_WIDTH};
pub use theme::Theme;
pub use ui::{render, run_tui, TerminalGuard};
