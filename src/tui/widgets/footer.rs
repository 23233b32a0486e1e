//! Footer and status line widgets for the TUI.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::tui::app::SessionState;
use crate::tui::theme::Theme;

/// Footer widget showing keybinding hints.
pub struct Footer<'a> {
    state: &'a SessionState,
    theme: &'a Theme,
}

impl<'a> Footer<'a> {
    /// Create a new footer widget.
    pub fn new(state: &'a SessionState, theme: &'a Theme) -> Self {
        Self { state, theme }
    }

    /// Get keybinding hints for the current state.
    fn get_hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.state {
            SessionState::Loading => vec![("Ctrl+C", "quit")],
            SessionState::Ready => vec![
                ("↑/↓", "move"),
                ("Enter", "run"),
                ("Ctrl+U", "clear"),
                ("Ctrl+R", "nx reset"),
                ("Esc", "quit"),
            ],
            SessionState::Error { .. } => vec![("any key", "exit")],
            SessionState::Terminated => Vec::new(),
        }
    }

    /// Build the footer line with adaptive width.
    fn build_line(&self, width: u16) -> Line<'a> {
        let hints = self.get_hints();
        let mut spans = vec![Span::raw(" ")];

        if hints.is_empty() {
            return Line::from(spans);
        }

        let full_width: usize = hints
            .iter()
            .map(|(key, action)| key.chars().count() + action.chars().count() + 3)
            .sum();

        if (width as usize) >= full_width + 2 {
            for (i, (key, action)) in hints.iter().enumerate() {
                spans.push(Span::styled(*key, self.theme.key()));
                spans.push(Span::styled(format!(" {} ", action), self.theme.footer()));
                if i < hints.len() - 1 {
                    spans.push(Span::styled(" ", self.theme.footer()));
                }
            }
        } else {
            // Keys only, as many as fit
            let mut used = 1;
            for (key, _) in &hints {
                let len = key.chars().count() + 1;
                if used + len > width as usize {
                    break;
                }
                spans.push(Span::styled(*key, self.theme.key()));
                spans.push(Span::styled(" ", self.theme.footer()));
                used += len;
            }
        }

        Line::from(spans)
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let line = self.build_line(area.width);
        let paragraph = Paragraph::new(line);
        paragraph.render(area, buf);
    }
}

/// One-line summary such as `3 projects with 12 tasks`.
pub struct StatusLine<'a> {
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> StatusLine<'a> {
    /// Create a new status line.
    pub fn new(message: &'a str, theme: &'a Theme) -> Self {
        Self { message, theme }
    }
}

impl Widget for StatusLine<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let line = Line::from(vec![
            Span::raw(" "),
            Span::styled(self.message, self.theme.status()),
        ]);
        Paragraph::new(line).render(area, buf);
    }
}
