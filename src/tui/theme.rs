//! Color theme for the TUI.

use ratatui::style::{Color, Modifier, Style};

use crate::config::Theme as ThemeConfig;

/// Color theme for the TUI.
#[derive(Debug, Clone)]
pub struct Theme {
    // Header
    header_bg: Color,
    header_fg: Color,
    status_fg: Color,

    // Search
    filter_fg: Color,
    filter_placeholder_fg: Color,

    // Entries
    tag_fg: Color,
    entry_fg: Color,
    match_fg: Color,
    selected_bg: Color,
    selected_fg: Color,
    cursor_fg: Color,

    // Detail
    detail_fg: Color,
    command_fg: Color,
    separator_fg: Color,

    // Footer
    footer_fg: Color,
    key_fg: Color,

    // Status
    error_fg: Color,
    spinner_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::new(&ThemeConfig::Default)
    }
}

impl Theme {
    /// Create a theme from configuration.
    pub fn new(config: &ThemeConfig) -> Self {
        match config {
            ThemeConfig::Default => Self::default_theme(),
            ThemeConfig::Minimal => Self::minimal_theme(),
            ThemeConfig::None => Self::no_color_theme(),
        }
    }

    /// Default full-color theme.
    fn default_theme() -> Self {
        Self {
            header_bg: Color::Blue,
            header_fg: Color::White,
            status_fg: Color::Gray,

            filter_fg: Color::Yellow,
            filter_placeholder_fg: Color::DarkGray,

            tag_fg: Color::Magenta,
            entry_fg: Color::White,
            match_fg: Color::Yellow,
            selected_bg: Color::Blue,
            selected_fg: Color::White,
            cursor_fg: Color::Green,

            detail_fg: Color::Gray,
            command_fg: Color::Cyan,
            separator_fg: Color::DarkGray,

            footer_fg: Color::DarkGray,
            key_fg: Color::Cyan,

            error_fg: Color::Red,
            spinner_fg: Color::Magenta,
        }
    }

    /// Minimal color theme (fewer colors, less bold).
    fn minimal_theme() -> Self {
        Self {
            header_bg: Color::Reset,
            header_fg: Color::White,
            status_fg: Color::Gray,

            filter_fg: Color::White,
            filter_placeholder_fg: Color::DarkGray,

            tag_fg: Color::Gray,
            entry_fg: Color::White,
            match_fg: Color::Cyan,
            selected_bg: Color::Reset,
            selected_fg: Color::Cyan,
            cursor_fg: Color::White,

            detail_fg: Color::Gray,
            command_fg: Color::White,
            separator_fg: Color::DarkGray,

            footer_fg: Color::DarkGray,
            key_fg: Color::Gray,

            error_fg: Color::Red,
            spinner_fg: Color::White,
        }
    }

    /// No-color theme (monochrome).
    fn no_color_theme() -> Self {
        Self {
            header_bg: Color::Reset,
            header_fg: Color::Reset,
            status_fg: Color::Reset,

            filter_fg: Color::Reset,
            filter_placeholder_fg: Color::Reset,

            tag_fg: Color::Reset,
            entry_fg: Color::Reset,
            match_fg: Color::Reset,
            selected_bg: Color::Reset,
            selected_fg: Color::Reset,
            cursor_fg: Color::Reset,

            detail_fg: Color::Reset,
            command_fg: Color::Reset,
            separator_fg: Color::Reset,

            footer_fg: Color::Reset,
            key_fg: Color::Reset,

            error_fg: Color::Reset,
            spinner_fg: Color::Reset,
        }
    }

    // ==================== Header Styles ====================

    /// Get the header style.
    pub fn header(&self) -> Style {
        Style::default()
            .fg(self.header_fg)
            .bg(self.header_bg)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the header workspace name style.
    pub fn header_workspace(&self) -> Style {
        Style::default().fg(self.header_fg).bg(self.header_bg)
    }

    /// Get the status line style.
    pub fn status(&self) -> Style {
        Style::default().fg(self.status_fg)
    }

    // ==================== Search Styles ====================

    /// Get the search text style.
    pub fn filter(&self) -> Style {
        Style::default()
            .fg(self.filter_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the search placeholder style.
    pub fn filter_placeholder(&self) -> Style {
        Style::default()
            .fg(self.filter_placeholder_fg)
            .add_modifier(Modifier::ITALIC)
    }

    // ==================== Entry Styles ====================

    /// Get the `[type:framework]` tag style.
    pub fn tag(&self) -> Style {
        Style::default().fg(self.tag_fg)
    }

    /// Get the entry text style.
    pub fn entry(&self) -> Style {
        Style::default().fg(self.entry_fg)
    }

    /// Get the style for characters matched by the search.
    pub fn matched(&self) -> Style {
        Style::default()
            .fg(self.match_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the selected entry style.
    pub fn selected(&self) -> Style {
        if self.selected_bg == Color::Reset {
            Style::default()
                .fg(self.selected_fg)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
                .fg(self.selected_fg)
                .bg(self.selected_bg)
                .add_modifier(Modifier::BOLD)
        }
    }

    /// Get the cursor style.
    pub fn cursor(&self) -> Style {
        Style::default()
            .fg(self.cursor_fg)
            .add_modifier(Modifier::BOLD)
    }

    // ==================== Detail Styles ====================

    /// Get the detail text style.
    pub fn detail(&self) -> Style {
        Style::default().fg(self.detail_fg)
    }

    /// Get the command preview style.
    pub fn command(&self) -> Style {
        Style::default()
            .fg(self.command_fg)
            .add_modifier(Modifier::ITALIC)
    }

    /// Get the separator style.
    pub fn separator(&self) -> Style {
        Style::default().fg(self.separator_fg)
    }

    // ==================== Footer Styles ====================

    /// Get the footer style.
    pub fn footer(&self) -> Style {
        Style::default().fg(self.footer_fg)
    }

    /// Get the keybinding style.
    pub fn key(&self) -> Style {
        Style::default()
            .fg(self.key_fg)
            .add_modifier(Modifier::BOLD)
    }

    // ==================== Status Styles ====================

    /// Get the error style.
    pub fn error(&self) -> Style {
        Style::default()
            .fg(self.error_fg)
            .add_modifier(Modifier::BOLD)
    }

    /// Get the loading spinner style.
    pub fn spinner(&self) -> Style {
        Style::default().fg(self.spinner_fg)
    }

    /// Get style for dimmed/muted text.
    pub fn dim(&self) -> Style {
        Style::default().add_modifier(Modifier::DIM)
    }
}
