//! Detail panel widget for the TUI.

use std::path::Path;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use crate::config::AppearanceConfig;
use crate::project::CommandEntry;
use crate::tui::theme::Theme;

use super::header::truncate_with_ellipsis;

/// Detail panel for the highlighted entry.
pub struct Detail<'a> {
    entry: Option<&'a CommandEntry>,
    project_root: Option<&'a Path>,
    nx_command: &'a str,
    theme: &'a Theme,
    compact: bool,
}

impl<'a> Detail<'a> {
    /// Create a new detail widget.
    pub fn new(
        entry: Option<&'a CommandEntry>,
        nx_command: &'a str,
        theme: &'a Theme,
        config: &AppearanceConfig,
    ) -> Self {
        Self {
            entry,
            project_root: None,
            nx_command,
            theme,
            compact: config.compact,
        }
    }

    /// Show the directory of the owning project.
    pub fn project_root(mut self, root: Option<&'a Path>) -> Self {
        self.project_root = root;
        self
    }

    /// Build lines for the detail panel.
    fn build_lines(&self, width: u16) -> Vec<Line<'a>> {
        let mut lines = Vec::new();

        if !self.compact {
            let separator = "─".repeat((width as usize).min(60));
            lines.push(Line::from(Span::styled(separator, self.theme.separator())));
        }

        let Some(entry) = self.entry else {
            lines.push(Line::from(Span::styled(
                " No matching tasks",
                self.theme.detail(),
            )));
            return lines;
        };

        let max_len = (width as usize).saturating_sub(3);
        let command = format!("$ {} run {}", self.nx_command, entry.invocation());
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled(truncate_with_ellipsis(&command, max_len), self.theme.command()),
        ]));

        let mut info = format!("{} {}", entry.project_type(), entry.project());
        if !entry.framework().is_empty() {
            info.push_str(&format!(" · {}", entry.framework()));
        }
        if let Some(root) = self.project_root {
            info.push_str(&format!(" · {}", root.display()));
        }
        lines.push(Line::from(vec![
            Span::raw(" "),
            Span::styled(truncate_with_ellipsis(&info, max_len), self.theme.detail()),
        ]));

        lines
    }
}

impl Widget for Detail<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let lines = self.build_lines(area.width);
        Paragraph::new(lines).render(area, buf);
    }
}

/// Error display widget.
pub struct ErrorDisplay<'a> {
    message: &'a str,
    theme: &'a Theme,
}

impl<'a> ErrorDisplay<'a> {
    /// Create a new error display widget.
    pub fn new(message: &'a str, theme: &'a Theme) -> Self {
        Self { message, theme }
    }

    /// Build lines for the error display.
    fn build_lines(&self) -> Vec<Line<'a>> {
        let mut lines = vec![Line::from(Span::styled("Error", self.theme.error())), Line::raw("")];
        lines.extend(
            self.message
                .lines()
                .map(|l| Line::from(Span::styled(l, self.theme.detail()))),
        );
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled(
            "Press any key to exit...",
            self.theme.dim(),
        )));
        lines
    }
}

impl Widget for ErrorDisplay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let lines = self.build_lines();
        let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
        paragraph.render(area, buf);
    }
}
