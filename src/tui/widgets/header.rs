//! Header widget for the TUI.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::config::AppearanceConfig;
use crate::tui::theme::Theme;

/// Header widget showing the tool name, version and workspace.
pub struct Header<'a> {
    workspace_name: &'a str,
    theme: &'a Theme,
    show_icons: bool,
}

impl<'a> Header<'a> {
    /// Create a new header widget.
    pub fn new(workspace_name: &'a str, theme: &'a Theme, config: &AppearanceConfig) -> Self {
        Self {
            workspace_name,
            theme,
            show_icons: config.icons,
        }
    }

    /// Build the header line.
    fn build_line(&self, width: u16) -> Line<'a> {
        let icon = if self.show_icons { "◆ " } else { "" };
        let title = format!(" {}nxplorer v{}", icon, env!("CARGO_PKG_VERSION"));

        let title_len = title.chars().count();
        let max_workspace_len = (width as usize).saturating_sub(title_len + 3);
        let workspace = truncate_with_ellipsis(self.workspace_name, max_workspace_len);
        let right_content = format!("{} ", workspace);

        let mut spans = vec![Span::styled(title, self.theme.header())];

        let padding_len =
            (width as usize).saturating_sub(title_len + right_content.chars().count());
        if padding_len > 0 {
            spans.push(Span::styled(" ".repeat(padding_len), self.theme.header()));
        }
        spans.push(Span::styled(right_content, self.theme.header_workspace()));

        Line::from(spans)
    }
}

impl Widget for Header<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.height == 0 {
            return;
        }

        let line = self.build_line(area.width);
        let paragraph = Paragraph::new(line).style(self.theme.header());
        paragraph.render(area, buf);
    }
}

/// Truncate a string with ellipsis if it exceeds max length.
///
/// Handles Unicode characters properly by counting characters, not bytes.
/// Uses the Unicode ellipsis character (…) which is more compact.
pub fn truncate_with_ellipsis(s: &str, max_len: usize) -> String {
    let char_count = s.chars().count();

    if char_count <= max_len {
        s.to_string()
    } else if max_len == 0 {
        String::new()
    } else if max_len <= 3 {
        // For very short lengths, just truncate without ellipsis
        s.chars().take(max_len).collect()
    } else {
        // Leave room for ellipsis (1 character)
        let truncated: String = s.chars().take(max_len - 1).collect();
        format!("{}…", truncated)
    }
}
