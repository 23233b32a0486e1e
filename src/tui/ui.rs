//! Main UI rendering and TUI loop.

use std::io::{stdout, Stdout};
use std::panic;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor, event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    layout::Rect,
    widgets::{Block, Borders, Clear},
    Frame, Terminal,
};
use tracing::debug;

use super::app::{App, SessionOutcome, SessionState};
use super::input::handle_event;
use super::layout::{centered_rect_fixed, MainLayout};
use super::theme::Theme;
use super::widgets::{
    Detail, EmptyEntries, EntryList, ErrorDisplay, Filter, Footer, Header, StatusLine,
};
use crate::error::Result as NxResult;
use crate::project::DiscoveryResult;

/// Blink interval for cursor (in milliseconds).
const CURSOR_BLINK_MS: u64 = 530;

/// Spinner frame interval (in milliseconds).
const SPINNER_TICK_MS: u64 = 80;

/// How long to wait for input before redrawing (in milliseconds).
const INPUT_POLL_MS: u64 = 50;

/// Global flag to track if terminal is in raw mode.
static TERMINAL_RAW_MODE: AtomicBool = AtomicBool::new(false);

/// RAII guard for terminal state.
/// Ensures terminal is properly restored even on panic.
pub struct TerminalGuard {
    terminal: Terminal<CrosstermBackend<Stdout>>,
}

impl TerminalGuard {
    /// Create a new terminal guard, setting up the terminal for TUI.
    pub fn new() -> Result<Self> {
        // Set up panic hook before entering raw mode
        setup_panic_hook();

        enable_raw_mode().context("Failed to enable raw mode")?;
        TERMINAL_RAW_MODE.store(true, Ordering::SeqCst);

        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, cursor::Hide)
            .context("Failed to enter alternate screen")?;

        let backend = CrosstermBackend::new(stdout);
        let terminal = Terminal::new(backend).context("Failed to create terminal")?;

        Ok(Self { terminal })
    }

    /// Get a mutable reference to the terminal.
    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        TERMINAL_RAW_MODE.store(false, Ordering::SeqCst);
        let _ = execute!(
            self.terminal.backend_mut(),
            LeaveAlternateScreen,
            cursor::Show
        );
    }
}

/// Set up a panic hook that restores the terminal.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        if TERMINAL_RAW_MODE.load(Ordering::SeqCst) {
            let _ = disable_raw_mode();
            let _ = execute!(stdout(), LeaveAlternateScreen, cursor::Show);
        }

        original_hook(panic_info);
    }));
}

/// Run the TUI application.
///
/// `scan` runs on a background thread while the loading screen is shown.
/// The terminal is restored before this returns, so the caller can run
/// the chosen command with an ordinary terminal.
pub fn run_tui<F>(mut app: App, scan: F) -> Result<SessionOutcome>
where
    F: FnOnce() -> NxResult<DiscoveryResult> + Send + 'static,
{
    let (tx, rx) = mpsc::channel();

    // Detached: if the user quits early the result is simply dropped.
    thread::Builder::new()
        .name("nxplorer-scan".to_string())
        .spawn(move || {
            let _ = tx.send(scan());
        })
        .context("Failed to start project scan")?;

    let mut guard = TerminalGuard::new()?;
    let result = run_loop(guard.terminal(), &mut app, &rx);
    drop(guard);
    result?;

    let outcome = app.outcome();
    debug!(?outcome, "session ended");
    Ok(outcome)
}

/// Main TUI loop.
fn run_loop<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    scan: &Receiver<NxResult<DiscoveryResult>>,
) -> Result<()> {
    let theme = Theme::new(&app.appearance().theme);
    let mut last_blink = Instant::now();
    let mut last_tick = Instant::now();
    let mut blink_state = true;

    loop {
        poll_scan(app, scan);

        if last_tick.elapsed() >= Duration::from_millis(SPINNER_TICK_MS) {
            app.tick();
            last_tick = Instant::now();
        }

        if last_blink.elapsed() >= Duration::from_millis(CURSOR_BLINK_MS) {
            blink_state = !blink_state;
            last_blink = Instant::now();
        }

        let size = terminal.size()?;
        let layout = MainLayout::with_config(
            Rect::new(0, 0, size.width, size.height),
            app.appearance(),
        );
        app.set_page_size(layout.list_rows());

        terminal.draw(|frame| render(frame, app, &theme, blink_state))?;

        if event::poll(Duration::from_millis(INPUT_POLL_MS))? {
            let event = event::read()?;
            if handle_event(app, event)? {
                break;
            }
            // Reset blink on input
            blink_state = true;
            last_blink = Instant::now();
        }

        if app.is_terminated() {
            break;
        }
    }

    Ok(())
}

/// Deliver a finished scan to the app without blocking.
fn poll_scan(app: &mut App, scan: &Receiver<NxResult<DiscoveryResult>>) {
    match scan.try_recv() {
        Ok(result) => app.on_scan_complete(result),
        Err(TryRecvError::Empty) => {}
        // Only reachable if the scan thread died without sending.
        Err(TryRecvError::Disconnected) => {
            app.on_scan_failed("Project scan stopped unexpectedly")
        }
    }
}

/// Render the complete UI.
pub fn render(frame: &mut Frame, app: &App, theme: &Theme, blink_state: bool) {
    let config = app.appearance();
    let layout = MainLayout::with_config(frame.area(), config);

    frame.render_widget(Header::new(app.workspace_name(), theme, config), layout.header);

    match app.state() {
        SessionState::Loading => render_loading(frame, app, theme, layout.list),
        SessionState::Ready | SessionState::Terminated => {
            let status = app.status_line();
            frame.render_widget(StatusLine::new(&status, theme), layout.status);
            frame.render_widget(
                Filter::new(app.filter_text(), theme, config).blink(blink_state),
                layout.filter,
            );
            render_entries(frame, app, theme, layout.list);
            render_detail(frame, app, theme, layout.detail);
        }
        SessionState::Error { message } => render_error_overlay(frame, theme, message),
    }

    if config.show_footer {
        frame.render_widget(Footer::new(app.state(), theme), layout.footer);
    }
}

/// Render the spinner while projects load.
fn render_loading(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let message = format!("{} Loading projects...", app.spinner());
    let loading = EmptyEntries::new(&message, theme).style(theme.spinner());
    frame.render_widget(loading, area);
}

/// Render the entry list.
fn render_entries(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let visible = app.visible_entries();

    if visible.is_empty() {
        let empty = if app.entries().is_empty() {
            EmptyEntries::no_projects(theme)
        } else {
            EmptyEntries::no_matches(theme)
        };
        frame.render_widget(empty, area);
        return;
    }

    let list = EntryList::new(&visible, app.selected_index(), theme)
        .scroll_offset(app.scroll_offset())
        .query(app.filter_text())
        .icons(app.appearance().icons);
    frame.render_widget(list, area);
}

/// Render the detail panel.
fn render_detail(frame: &mut Frame, app: &App, theme: &Theme, area: Rect) {
    let entry = app.selected_entry();
    let root = entry.and_then(|e| app.project_root(e));
    let detail = Detail::new(entry, app.nx_command(), theme, app.appearance()).project_root(root);
    frame.render_widget(detail, area);
}

/// Render an error overlay.
fn render_error_overlay(frame: &mut Frame, theme: &Theme, message: &str) {
    let area = frame.area();
    let height = (message.lines().count() as u16).saturating_add(6);
    let error_area = centered_rect_fixed(area.width.saturating_sub(4).min(90), height, area);

    frame.render_widget(Clear, error_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Error ")
        .border_style(theme.error());
    let inner = block.inner(error_area);
    frame.render_widget(block, error_area);
    frame.render_widget(ErrorDisplay::new(message, theme), inner);
}
