//! Fuzzy matching implementation.
//!
//! Uses SkimMatcherV2 for high-performance fuzzy matching with scoring.
//! Matching always ignores case and runs on the original text, so match
//! positions line up with the characters that are rendered.

use std::sync::OnceLock;

use fuzzy_matcher::skim::SkimMatcherV2;
use fuzzy_matcher::FuzzyMatcher;

use crate::project::CommandEntry;

/// Shared matcher, initialized on first use.
static GLOBAL_MATCHER: OnceLock<SkimMatcherV2> = OnceLock::new();

fn global_matcher() -> &'static SkimMatcherV2 {
    GLOBAL_MATCHER.get_or_init(|| SkimMatcherV2::default().ignore_case())
}

/// Filter entries based on a query.
///
/// Returns (index, score) pairs sorted by score descending. Entries with
/// equal scores keep their input order. An empty query returns every entry
/// with score 0.
///
/// # Examples
///
/// ```
/// use nxplorer::filter::filter_entries;
/// use nxplorer::project::{CommandEntry, ProjectType};
///
/// let entries = vec![
///     CommandEntry::new(ProjectType::Application, "", "web", "serve", ""),
///     CommandEntry::new(ProjectType::Library, "", "ui", "test", ""),
/// ];
///
/// let results = filter_entries("uitest", &entries);
/// assert_eq!(results.len(), 1);
/// assert_eq!(results[0].0, 1);
/// ```
pub fn filter_entries(query: &str, entries: &[CommandEntry]) -> Vec<(usize, i64)> {
    if query.is_empty() {
        return (0..entries.len()).map(|i| (i, 0)).collect();
    }

    let matcher = global_matcher();
    let mut matches: Vec<(usize, i64)> = Vec::with_capacity(entries.len().min(32));

    for (idx, entry) in entries.iter().enumerate() {
        if let Some(score) = matcher.fuzzy_match(&entry.display_string(), query) {
            if score > 0 {
                matches.push((idx, score));
            }
        }
    }

    // Stable: equal scores keep input order.
    matches.sort_by(|a, b| b.1.cmp(&a.1));

    matches
}

/// Filter entries, returning the matching entries best first.
pub fn filter(entries: &[CommandEntry], query: &str) -> Vec<CommandEntry> {
    filter_entries(query, entries)
        .into_iter()
        .map(|(idx, _)| entries[idx].clone())
        .collect()
}

/// Get the character positions of matched characters in `text`.
///
/// Used to highlight matched portions of entries in the list.
///
/// # Examples
///
/// ```
/// use nxplorer::filter::get_match_indices;
///
/// let indices = get_match_indices("bd", "build");
/// assert_eq!(indices, vec![0, 4]);
/// ```
pub fn get_match_indices(query: &str, text: &str) -> Vec<usize> {
    if query.is_empty() || text.is_empty() {
        return Vec::new();
    }

    global_matcher()
        .fuzzy_indices(text, query)
        .map(|(_, indices)| indices)
        .unwrap_or_default()
}
