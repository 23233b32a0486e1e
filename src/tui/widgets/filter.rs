//! Search bar widget for the TUI.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::config::AppearanceConfig;
use crate::tui::theme::Theme;

/// Search bar widget. Typing always goes here.
pub struct Filter<'a> {
    query: &'a str,
    theme: &'a Theme,
    show_icon: bool,
    blink_state: bool,
}

impl<'a> Filter<'a> {
    /// Create a new search bar widget.
    pub fn new(query: &'a str, theme: &'a Theme, config: &AppearanceConfig) -> Self {
        Self {
            query,
            theme,
            show_icon: config.icons,
            blink_state: true,
        }
    }

    /// Set the blink state for the cursor.
    pub fn blink(mut self, state: bool) -> Self {
        self.blink_state = state;
        self
    }

    /// Build the search line.
    fn build_line(&self) -> Line<'a> {
        let prompt = if self.show_icon { " ❯ " } else { " > " };
        let cursor = if self.blink_state { "_" } else { " " };

        if self.query.is_empty() {
            Line::from(vec![
                Span::styled(prompt, self.theme.filter()),
                Span::styled(cursor, self.theme.filter()),
                Span::styled("Type to search tasks...", self.theme.filter_placeholder()),
            ])
        } else {
            Line::from(vec![
                Span::styled(prompt, self.theme.filter()),
                Span::styled(self.query.to_string(), self.theme.filter()),
                Span::styled(cursor, self.theme.filter()),
            ])
        }
    }
}

impl Widget for Filter<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let line = self.build_line();
        let paragraph = Paragraph::new(line);
        paragraph.render(area, buf);
    }
}
