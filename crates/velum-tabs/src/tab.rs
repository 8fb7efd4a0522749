//! Tab data structure
//!
//! A tab is either in the start-page state (`url` is `None`) or loaded.
//! History is an ordered list of loaded URLs with a cursor; loading and
//! recording are separate operations so back/forward can re-load without
//! pushing a new entry.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use url::Url;

/// Unique tab identifier. Assigned monotonically, never reused.
pub type TabId = u64;

/// Title shown for start-page tabs and for URLs whose host cannot be parsed.
pub const NEW_TAB_TITLE: &str = "New Tab";

const TITLE_MAX_CHARS: usize = 20;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tab {
    /// Unique identifier
    pub id: TabId,
    /// Display title derived from the loaded URL's host
    pub title: String,
    /// Currently loaded address, `None` in the start-page state
    pub url: Option<String>,
    /// True exactly when the start page is shown
    pub is_new_tab: bool,
    /// Previously loaded URLs, oldest first
    pub history: Vec<String>,
    /// Cursor into `history`, `None` when empty
    pub history_index: Option<usize>,
    /// When the tab was created
    pub created_at: DateTime<Utc>,
    /// Last time the tab was selected
    pub last_accessed_at: DateTime<Utc>,
}

impl Tab {
    pub(crate) fn new(id: TabId) -> Self {
        let now = Utc::now();

        Self {
            id,
            title: NEW_TAB_TITLE.to_string(),
            url: None,
            is_new_tab: true,
            history: Vec::new(),
            history_index: None,
            created_at: now,
            last_accessed_at: now,
        }
    }

    /// Load a URL into the tab without touching history.
    ///
    /// Back/forward/refresh call this directly; only `record` mutates
    /// the history list.
    pub(crate) fn load(&mut self, url: String) {
        self.title = title_for(&url);
        self.url = Some(url);
        self.is_new_tab = false;
    }

    /// Append a URL to history, discarding any abandoned forward branch.
    pub(crate) fn record(&mut self, url: String) {
        match self.history_index {
            Some(index) => self.history.truncate(index + 1),
            None => self.history.clear(),
        }

        self.history.push(url);
        self.history_index = Some(self.history.len() - 1);
    }

    /// Reset to the start-page state, clearing history.
    pub(crate) fn reset_to_start_page(&mut self) {
        self.url = None;
        self.title = NEW_TAB_TITLE.to_string();
        self.is_new_tab = true;
        self.history.clear();
        self.history_index = None;
    }

    /// Step the history cursor back and return the URL to re-load.
    pub(crate) fn step_back(&mut self) -> Option<String> {
        match self.history_index {
            Some(index) if index > 0 => {
                self.history_index = Some(index - 1);
                Some(self.history[index - 1].clone())
            }
            _ => None,
        }
    }

    /// Step the history cursor forward and return the URL to re-load.
    pub(crate) fn step_forward(&mut self) -> Option<String> {
        match self.history_index {
            Some(index) if index + 1 < self.history.len() => {
                self.history_index = Some(index + 1);
                Some(self.history[index + 1].clone())
            }
            _ => None,
        }
    }

    pub(crate) fn touch(&mut self) {
        self.last_accessed_at = Utc::now();
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.history_index, Some(index) if index > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.history_index, Some(index) if index + 1 < self.history.len())
    }
}

/// Derive a display title from a URL's host.
///
/// Strips a leading `www.` and truncates long hosts. Falls back to the
/// "New Tab" sentinel when the URL has no parseable host.
fn title_for(url: &str) -> String {
    let host = match Url::parse(url) {
        Ok(parsed) => match parsed.host_str() {
            Some(host) => host.to_string(),
            None => return NEW_TAB_TITLE.to_string(),
        },
        Err(_) => return NEW_TAB_TITLE.to_string(),
    };

    let stripped = host.strip_prefix("www.").unwrap_or(&host);

    if stripped.chars().count() > TITLE_MAX_CHARS {
        let truncated: String = stripped.chars().take(TITLE_MAX_CHARS).collect();
        format!("{truncated}...")
    } else {
        stripped.to_string()
    }
}
