//! Layout calculations for the TUI.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::config::AppearanceConfig;

/// Minimum terminal dimensions.
pub const MIN_WIDTH: u16 = 40;
pub const MIN_HEIGHT: u16 = 10;

/// Main layout areas.
#[derive(Debug, Clone, Copy)]
pub struct MainLayout {
    /// Header area.
    pub header: Rect,
    /// Project and task count.
    pub status: Rect,
    /// Search bar area.
    pub filter: Rect,
    /// Entry list area.
    pub list: Rect,
    /// Detail panel for the highlighted entry.
    pub detail: Rect,
    /// Footer area.
    pub footer: Rect,
}

impl MainLayout {
    /// Calculate the main layout for the given area with default settings.
    pub fn new(area: Rect) -> Self {
        Self::with_config(area, &AppearanceConfig::default())
    }

    /// Calculate the main layout with configuration options.
    pub fn with_config(area: Rect, config: &AppearanceConfig) -> Self {
        if area.width < MIN_WIDTH || area.height < MIN_HEIGHT {
            return Self::minimal_layout(area);
        }

        let detail_height = if config.compact { 2 } else { 3 };
        let footer_height = if config.show_footer { 1 } else { 0 };

        Self::split(
            area,
            [
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(3), // Entries (flexible, minimum 3 rows)
                Constraint::Length(detail_height),
                Constraint::Length(footer_height),
            ],
        )
    }

    /// Create minimal layout for small terminals.
    fn minimal_layout(area: Rect) -> Self {
        Self::split(
            area,
            [
                Constraint::Length(1), // Header
                Constraint::Length(1), // Status
                Constraint::Length(1), // Search
                Constraint::Min(1),    // Entries
                Constraint::Length(0), // No detail
                Constraint::Length(1), // Footer
            ],
        )
    }

    fn split(area: Rect, constraints: [Constraint; 6]) -> Self {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints(constraints)
            .split(area);

        Self {
            header: chunks[0],
            status: chunks[1],
            filter: chunks[2],
            list: chunks[3],
            detail: chunks[4],
            footer: chunks[5],
        }
    }

    /// Calculate available rows for entries.
    pub fn list_rows(&self) -> usize {
        self.list.height as usize
    }
}

/// Create a fixed-size centered rectangle for popups/overlays.
pub fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let actual_width = width.min(area.width);
    let actual_height = height.min(area.height);

    let x = area.x + (area.width.saturating_sub(actual_width)) / 2;
    let y = area.y + (area.height.saturating_sub(actual_height)) / 2;

    Rect::new(x, y, actual_width, actual_height)
}
