//! Entry list widget for the TUI.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Widget,
};

use crate::filter::get_match_indices;
use crate::project::CommandEntry;
use crate::tui::theme::Theme;
use crate::tui::widgets::header::truncate_with_ellipsis;

/// Scrolling list of command entries, one per row.
pub struct EntryList<'a> {
    entries: &'a [&'a CommandEntry],
    selected: usize,
    scroll_offset: usize,
    query: &'a str,
    theme: &'a Theme,
    show_icons: bool,
}

impl<'a> EntryList<'a> {
    /// Create a new entry list widget.
    pub fn new(entries: &'a [&'a CommandEntry], selected: usize, theme: &'a Theme) -> Self {
        Self {
            entries,
            selected,
            scroll_offset: 0,
            query: "",
            theme,
            show_icons: true,
        }
    }

    /// Set the scroll offset.
    pub fn scroll_offset(mut self, offset: usize) -> Self {
        self.scroll_offset = offset;
        self
    }

    /// Highlight characters matching `query`.
    pub fn query(mut self, query: &'a str) -> Self {
        self.query = query;
        self
    }

    /// Use a glyph for the cursor instead of `>`.
    pub fn icons(mut self, show: bool) -> Self {
        self.show_icons = show;
        self
    }

    /// Build the spans for one row.
    fn render_entry(&self, entry: &CommandEntry, is_selected: bool, max_width: u16) -> Vec<Span<'a>> {
        let marker = match (is_selected, self.show_icons) {
            (true, true) => "❯ ",
            (true, false) => "> ",
            (false, _) => "  ",
        };

        let display = entry.display_string();
        let text_width = (max_width as usize).saturating_sub(3);
        let text = truncate_with_ellipsis(&display, text_width);
        let matched = get_match_indices(self.query, &display);
        let tag_len = display.chars().position(|c| c == ']').map(|i| i + 1).unwrap_or(0);

        let base = if is_selected {
            self.theme.selected()
        } else {
            self.theme.entry()
        };

        let mut spans = vec![
            Span::raw(" "),
            Span::styled(marker, self.theme.cursor()),
        ];

        // Group consecutive characters sharing a style into one span.
        let mut run = String::new();
        let mut run_style: Option<Style> = None;
        for (i, c) in text.chars().enumerate() {
            let mut style = if i < tag_len && !is_selected {
                self.theme.tag()
            } else {
                base
            };
            if matched.contains(&i) {
                style = style.patch(self.theme.matched());
            }

            if run_style != Some(style) {
                if let Some(prev) = run_style {
                    spans.push(Span::styled(std::mem::take(&mut run), prev));
                }
                run_style = Some(style);
            }
            run.push(c);
        }
        if let Some(style) = run_style {
            spans.push(Span::styled(run, style));
        }

        spans
    }
}

impl Widget for EntryList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 || area.width == 0 || self.entries.is_empty() {
            return;
        }

        let rows = area.height as usize;
        let end = (self.scroll_offset + rows).min(self.entries.len());

        for (row, index) in (self.scroll_offset..end).enumerate() {
            let entry = self.entries[index];
            let line = Line::from(self.render_entry(entry, index == self.selected, area.width));
            buf.set_line(area.x, area.y + row as u16, &line, area.width);
        }
    }
}

/// Placeholder shown instead of the list.
pub struct EmptyEntries<'a> {
    message: &'a str,
    hint: Option<&'a str>,
    style: Style,
    theme: &'a Theme,
}

impl<'a> EmptyEntries<'a> {
    /// Create a new placeholder.
    pub fn new(message: &'a str, theme: &'a Theme) -> Self {
        Self {
            message,
            hint: None,
            style: theme.detail(),
            theme,
        }
    }

    /// Create a new placeholder with a hint below the message.
    pub fn with_hint(message: &'a str, hint: &'a str, theme: &'a Theme) -> Self {
        Self {
            hint: Some(hint),
            ..Self::new(message, theme)
        }
    }

    /// Create for a workspace without projects.
    pub fn no_projects(theme: &'a Theme) -> Self {
        Self::with_hint(
            "No projects found",
            "Add a project.json to a directory in the workspace",
            theme,
        )
    }

    /// Create for a search without matches.
    pub fn no_matches(theme: &'a Theme) -> Self {
        Self::with_hint(
            "No tasks match the search",
            "Press Ctrl+U to clear the search",
            theme,
        )
    }

    /// Set the style of the main message.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }
}

impl Widget for EmptyEntries<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let has_hint = self.hint.is_some() && area.height >= 3;

        // Center the message vertically
        let y = if has_hint {
            area.y + area.height / 2 - 1
        } else {
            area.y + area.height / 2
        };

        let msg_len = self.message.chars().count() as u16;
        let x = area.x + (area.width.saturating_sub(msg_len)) / 2;
        let line = Line::from(Span::styled(self.message, self.style));
        buf.set_line(x, y, &line, area.width.saturating_sub(x - area.x));

        if let (true, Some(hint)) = (has_hint, self.hint) {
            let hint_y = y + 2;
            if hint_y < area.y + area.height {
                let hint_len = hint.chars().count() as u16;
                let hint_x = area.x + (area.width.saturating_sub(hint_len)) / 2;
                let hint_line = Line::from(Span::styled(hint, self.theme.filter_placeholder()));
                buf.set_line(
                    hint_x,
                    hint_y,
                    &hint_line,
                    area.width.saturating_sub(hint_x - area.x),
                );
            }
        }
    }
}
