//! Browser-style navigation history.
//!
//! The application layer never touches a real history stack. It emits
//! [`HistoryEntry`] values that a [`NavigationPort`] pushes, and it receives
//! back-navigation as an `Event::HistoryPopped` carrying the [`HistoryState`]
//! of the entry that became current.
//!
//! [`MemoryHistory`] is an in-process stack with the same push/back semantics
//! as a browser: pushing discards any forward entries.

use crate::app::modes::ViewMode;
use crate::domain::error::Result;
use serde::{Deserialize, Serialize};

/// State object stored with a history entry.
///
/// Serializes to `{"view": "detail", "id": 7}` for detail entries and `{}`
/// for the root entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub view: Option<ViewMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
}

/// A `(state, title, url)` triple as pushed onto the history stack.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryEntry {
    pub state: HistoryState,
    pub title: String,
    pub url: String,
}

impl HistoryEntry {
    /// Entry for a listing's detail view, addressed by `#listing-{id}`.
    ///
    /// # Example
    ///
    /// ```
    /// use listings_client::infrastructure::HistoryEntry;
    ///
    /// let entry = HistoryEntry::detail(7);
    /// assert_eq!(entry.url, "#listing-7");
    /// assert_eq!(entry.state.id, Some(7));
    /// ```
    #[must_use]
    pub fn detail(id: i64) -> Self {
        Self {
            state: HistoryState {
                view: Some(ViewMode::Detail),
                id: Some(id),
            },
            title: String::new(),
            url: format!("#listing-{id}"),
        }
    }

    /// Entry resetting the location to the root path.
    #[must_use]
    pub fn root() -> Self {
        Self {
            state: HistoryState::default(),
            title: String::new(),
            url: "/".to_string(),
        }
    }
}

/// Extracts the listing id from a `#listing-{id}` fragment or URL.
#[must_use]
pub fn listing_id_from_fragment(url: &str) -> Option<i64> {
    let (_, fragment) = url.rsplit_once('#')?;
    fragment.strip_prefix("listing-")?.parse().ok()
}

/// Sink for history entries.
pub trait NavigationPort {
    /// Pushes a new entry, making it current.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying history refuses the entry.
    fn push_state(&mut self, entry: &HistoryEntry) -> Result<()>;
}

/// In-memory history stack.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    entries: Vec<HistoryEntry>,
    index: usize,
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self {
            entries: vec![HistoryEntry::root()],
            index: 0,
        }
    }
}

impl MemoryHistory {
    /// Creates a history holding only the root entry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current entry.
    #[must_use]
    pub fn current(&self) -> &HistoryEntry {
        &self.entries[self.index]
    }

    /// Moves one entry back, returning the state that becomes current.
    ///
    /// Returns `None` when already at the oldest entry.
    pub fn back(&mut self) -> Option<HistoryState> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        Some(self.current().state.clone())
    }
}

impl NavigationPort for MemoryHistory {
    fn push_state(&mut self, entry: &HistoryEntry) -> Result<()> {
        self.entries.truncate(self.index + 1);
        self.entries.push(entry.clone());
        self.index = self.entries.len() - 1;
        tracing::debug!(url = %entry.url, depth = self.entries.len(), "history entry pushed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_state_serializes_like_browser_state() {
        let entry = HistoryEntry::detail(7);
        assert_eq!(
            serde_json::to_string(&entry.state).unwrap(),
            r#"{"view":"detail","id":7}"#
        );
        assert_eq!(serde_json::to_string(&HistoryEntry::root().state).unwrap(), "{}");
    }

    #[test]
    fn push_discards_forward_entries() {
        let mut history = MemoryHistory::new();
        history.push_state(&HistoryEntry::detail(1)).unwrap();
        history.push_state(&HistoryEntry::root()).unwrap();

        assert_eq!(history.back().and_then(|s| s.id), Some(1));
        history.push_state(&HistoryEntry::detail(2)).unwrap();

        assert_eq!(history.current().url, "#listing-2");
        assert_eq!(history.back().and_then(|s| s.id), Some(1));
        assert_eq!(history.back(), Some(HistoryState::default()));
        assert!(history.back().is_none());
    }

    #[test]
    fn back_stops_at_root() {
        let mut history = MemoryHistory::new();
        assert!(history.back().is_none());
        history.push_state(&HistoryEntry::detail(5)).unwrap();
        assert_eq!(history.back(), Some(HistoryState::default()));
        assert!(history.back().is_none());
    }

    #[test]
    fn fragment_parsing() {
        assert_eq!(listing_id_from_fragment("#listing-42"), Some(42));
        assert_eq!(listing_id_from_fragment("http://host/#listing-9"), Some(9));
        assert_eq!(listing_id_from_fragment("/"), None);
        assert_eq!(listing_id_from_fragment("#listing-x"), None);
    }
}
