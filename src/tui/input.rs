//! Input handling for the TUI.

use anyhow::Result;
use crossterm::event::{Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::{App, SessionState};

/// Handle a terminal event.
///
/// Returns `Ok(true)` once the session has ended, `Ok(false)` to continue.
pub fn handle_event(app: &mut App, event: Event) -> Result<bool> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => Ok(handle_key(app, key)),
        // The next frame picks up the new size.
        Event::Resize(..) => Ok(false),
        _ => Ok(false),
    }
}

/// Handle a key event.
///
/// Returns true once the session has ended.
fn handle_key(app: &mut App, key: KeyEvent) -> bool {
    match app.state() {
        SessionState::Loading => handle_loading_state(app, key),
        SessionState::Ready => handle_ready_state(app, key),
        SessionState::Error { .. } => handle_error_state(app, key),
        SessionState::Terminated => {}
    }

    app.is_terminated()
}

/// Only Ctrl+C is honored while projects load.
fn handle_loading_state(app: &mut App, key: KeyEvent) {
    if is_ctrl(&key, 'c') {
        app.quit();
    }
}

/// Handle keys while entries are listed.
///
/// - Ctrl+C/Esc: quit
/// - Ctrl+R: run the reset command
/// - Ctrl+U: clear the search
/// - ↑/Ctrl+P, ↓/Ctrl+N: move
/// - PgUp/PgDn/Home/End: jump
/// - Enter: run the highlighted entry
/// - Backspace: delete the last search character
/// - any other character: extend the search
fn handle_ready_state(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('c') => app.quit(),
            KeyCode::Char('r') => app.reset(),
            KeyCode::Char('u') => app.clear_filter(),
            KeyCode::Char('p') => app.move_up(),
            KeyCode::Char('n') => app.move_down(),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Esc => app.quit(),
        KeyCode::Enter => app.select(),
        KeyCode::Up => app.move_up(),
        KeyCode::Down => app.move_down(),
        KeyCode::PageUp => app.page_up(),
        KeyCode::PageDown => app.page_down(),
        KeyCode::Home => app.move_to_first(),
        KeyCode::End => app.move_to_last(),
        KeyCode::Backspace => app.pop_filter_char(),
        KeyCode::Char(c) => app.push_filter_char(c),
        _ => {}
    }
}

/// Any key leaves the error screen.
fn handle_error_state(app: &mut App, _key: KeyEvent) {
    app.quit();
}

fn is_ctrl(key: &KeyEvent, c: char) -> bool {
    key.code == KeyCode::Char(c) && key.modifiers.contains(KeyModifiers::CONTROL)
}
