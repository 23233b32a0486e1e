//! Session state for the TUI.

use std::path::Path;

use crate::config::AppearanceConfig;
use crate::error::Result;
use crate::filter::filter_entries;
use crate::project::{CommandEntry, DiscoveryResult, Project};

/// Spinner frames shown while projects load.
const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Rows moved by PageUp/PageDown when the list height is not yet known.
const DEFAULT_PAGE_SIZE: usize = 10;

/// Lifecycle of an interactive session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Discovery is running in the background.
    #[default]
    Loading,
    /// Entries are listed and can be filtered and selected.
    Ready,
    /// Discovery failed.
    Error { message: String },
    /// The session is over.
    Terminated,
}

/// What the user asked for when the session ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// Leave without running anything.
    Quit,
    /// Run the task with this invocation string.
    Run(String),
    /// Run the nx reset command.
    Reset,
}

/// Main application state.
pub struct App {
    state: SessionState,
    appearance: AppearanceConfig,
    workspace_name: String,
    /// Command prefix shown in the detail panel, e.g. `nx`.
    nx_command: String,

    projects: Vec<Project>,
    entries: Vec<CommandEntry>,

    /// Current search text.
    filter_text: String,
    /// Indices into `entries`, best match first.
    visible_indices: Vec<usize>,
    /// Highlighted position within `visible_indices`.
    selected: usize,
    scroll_offset: usize,
    page_size: usize,

    spinner_frame: usize,
    outcome: Option<SessionOutcome>,
}

impl App {
    /// Create a session in the `Loading` state.
    pub fn new(workspace_name: impl Into<String>, appearance: AppearanceConfig) -> Self {
        Self {
            state: SessionState::Loading,
            appearance,
            workspace_name: workspace_name.into(),
            nx_command: "nx".to_string(),
            projects: Vec::new(),
            entries: Vec::new(),
            filter_text: String::new(),
            visible_indices: Vec::new(),
            selected: 0,
            scroll_offset: 0,
            page_size: DEFAULT_PAGE_SIZE,
            spinner_frame: 0,
            outcome: None,
        }
    }

    /// Set the command prefix shown in the detail panel.
    pub fn with_nx_command(mut self, command: impl Into<String>) -> Self {
        self.nx_command = command.into();
        self
    }

    // ==================== Getters ====================

    /// Get the session state.
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Whether the session is over.
    pub fn is_terminated(&self) -> bool {
        self.state == SessionState::Terminated
    }

    /// Get the appearance settings.
    pub fn appearance(&self) -> &AppearanceConfig {
        &self.appearance
    }

    /// Get the workspace name shown in the header.
    pub fn workspace_name(&self) -> &str {
        &self.workspace_name
    }

    /// Get the command prefix shown in the detail panel.
    pub fn nx_command(&self) -> &str {
        &self.nx_command
    }

    /// Get the discovered projects.
    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    /// Get all command entries.
    pub fn entries(&self) -> &[CommandEntry] {
        &self.entries
    }

    /// Get the current search text.
    pub fn filter_text(&self) -> &str {
        &self.filter_text
    }

    /// Get the highlighted position in the visible list.
    pub fn selected_index(&self) -> usize {
        self.selected
    }

    /// Get the scroll offset.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// Get the number of visible entries.
    pub fn visible_count(&self) -> usize {
        self.visible_indices.len()
    }

    /// Get the entries matching the current search, best first.
    pub fn visible_entries(&self) -> Vec<&CommandEntry> {
        self.visible_indices
            .iter()
            .filter_map(|&i| self.entries.get(i))
            .collect()
    }

    /// Get the highlighted entry.
    pub fn selected_entry(&self) -> Option<&CommandEntry> {
        self.visible_indices
            .get(self.selected)
            .and_then(|&i| self.entries.get(i))
    }

    /// Get the directory of the project owning `entry`.
    pub fn project_root(&self, entry: &CommandEntry) -> Option<&Path> {
        self.projects
            .get(entry.project_index())
            .filter(|p| p.name() == entry.project())
            .map(Project::root)
    }

    /// Summary shown above the search field.
    pub fn status_line(&self) -> String {
        format!(
            "{} projects with {} tasks",
            self.projects.len(),
            self.entries.len()
        )
    }

    /// Current spinner frame.
    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// What to do after the session ends.
    pub fn outcome(&self) -> SessionOutcome {
        self.outcome.clone().unwrap_or(SessionOutcome::Quit)
    }

    // ==================== Background events ====================

    /// Apply the result of the background scan.
    ///
    /// Ignored unless the session is still loading.
    pub fn on_scan_complete(&mut self, result: Result<DiscoveryResult>) {
        match result {
            Ok(discovery) => self.on_scan_success(discovery),
            Err(e) => self.on_scan_failed(e.to_string()),
        }
    }

    fn on_scan_success(&mut self, discovery: DiscoveryResult) {
        if self.state != SessionState::Loading {
            return;
        }
        self.projects = discovery.projects;
        self.entries = discovery.entries;
        self.filter_text.clear();
        self.state = SessionState::Ready;
        self.update_visible_entries();
    }

    /// Move to the error state with `message`.
    ///
    /// Ignored unless the session is still loading.
    pub fn on_scan_failed(&mut self, message: impl Into<String>) {
        if self.state != SessionState::Loading {
            return;
        }
        self.state = SessionState::Error {
            message: message.into(),
        };
    }

    /// Advance the spinner.
    pub fn tick(&mut self) {
        if self.state == SessionState::Loading {
            self.spinner_frame = (self.spinner_frame + 1) % SPINNER_FRAMES.len();
        }
    }

    // ==================== Search ====================

    /// Append a character to the search text.
    pub fn push_filter_char(&mut self, c: char) {
        if self.state != SessionState::Ready {
            return;
        }
        self.filter_text.push(c);
        self.update_visible_entries();
    }

    /// Remove the last character of the search text.
    pub fn pop_filter_char(&mut self) {
        if self.state != SessionState::Ready {
            return;
        }
        if self.filter_text.pop().is_some() {
            self.update_visible_entries();
        }
    }

    /// Clear the search text.
    pub fn clear_filter(&mut self) {
        if self.state != SessionState::Ready {
            return;
        }
        self.filter_text.clear();
        self.update_visible_entries();
    }

    /// Re-run the filter against every entry and reset the highlight.
    fn update_visible_entries(&mut self) {
        self.visible_indices = filter_entries(&self.filter_text, &self.entries)
            .into_iter()
            .map(|(idx, _)| idx)
            .collect();
        self.selected = 0;
        self.scroll_offset = 0;
    }

    // ==================== Navigation ====================

    /// Set the number of list rows on screen.
    pub fn set_page_size(&mut self, rows: usize) {
        self.page_size = rows.max(1);
        self.ensure_visible();
    }

    /// Move the highlight up one row.
    pub fn move_up(&mut self) {
        self.move_to(self.selected.saturating_sub(1));
    }

    /// Move the highlight down one row.
    pub fn move_down(&mut self) {
        self.move_to(self.selected.saturating_add(1));
    }

    /// Move the highlight up one page.
    pub fn page_up(&mut self) {
        self.move_to(self.selected.saturating_sub(self.page_size));
    }

    /// Move the highlight down one page.
    pub fn page_down(&mut self) {
        self.move_to(self.selected.saturating_add(self.page_size));
    }

    /// Move the highlight to the first entry.
    pub fn move_to_first(&mut self) {
        self.move_to(0);
    }

    /// Move the highlight to the last entry.
    pub fn move_to_last(&mut self) {
        self.move_to(usize::MAX);
    }

    fn move_to(&mut self, index: usize) {
        if self.state != SessionState::Ready || self.visible_indices.is_empty() {
            return;
        }
        self.selected = index.min(self.visible_indices.len() - 1);
        self.ensure_visible();
    }

    /// Keep the highlighted row inside the scroll window.
    fn ensure_visible(&mut self) {
        if self.selected < self.scroll_offset {
            self.scroll_offset = self.selected;
        } else if self.selected >= self.scroll_offset + self.page_size {
            self.scroll_offset = self.selected + 1 - self.page_size;
        }
    }

    // ==================== Actions ====================

    /// Run the highlighted entry. No-op when nothing is visible.
    pub fn select(&mut self) {
        if self.state != SessionState::Ready {
            return;
        }
        if let Some(entry) = self.selected_entry() {
            self.outcome = Some(SessionOutcome::Run(entry.invocation()));
            self.state = SessionState::Terminated;
        }
    }

    /// Run the reset command.
    pub fn reset(&mut self) {
        if self.state != SessionState::Ready {
            return;
        }
        self.outcome = Some(SessionOutcome::Reset);
        self.state = SessionState::Terminated;
    }

    /// End the session without running anything.
    pub fn quit(&mut self) {
        if self.state == SessionState::Terminated {
            return;
        }
        self.outcome = Some(SessionOutcome::Quit);
        self.state = SessionState::Terminated;
    }
}
