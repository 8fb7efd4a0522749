//! Tab session manager
//!
//! Owns the ordered tab collection and the active-tab pointer. All
//! operations are synchronous state transitions; per the shell's error
//! model, references to unknown tab ids and refused closes are silent
//! no-ops rather than errors.

use crate::tab::{Tab, TabId};

pub struct TabSessionManager {
    /// Ordered tab collection, display order
    tabs: Vec<Tab>,
    /// Id of the active tab, always a member of `tabs`
    active_tab_id: TabId,
    /// Next id to hand out, never decremented
    next_tab_id: TabId,
}

impl TabSessionManager {
    /// Create a session with a single start-page tab. The collection is
    /// never empty after this point.
    pub fn new() -> Self {
        let mut session = Self {
            tabs: Vec::new(),
            active_tab_id: 0,
            next_tab_id: 1,
        };
        session.create_tab(None);
        session
    }

    /// Create a tab, append it, and make it active. With a URL the tab
    /// starts loaded and the URL becomes its first history entry.
    pub fn create_tab(&mut self, url: Option<String>) -> &Tab {
        let id = self.next_tab_id;
        self.next_tab_id += 1;

        let mut tab = Tab::new(id);
        if let Some(url) = url {
            tab.load(url.clone());
            tab.record(url);
        }

        tracing::info!(tab_id = id, "Created tab");

        self.tabs.push(tab);
        self.active_tab_id = id;
        self.tabs.last().expect("collection is non-empty after push")
    }

    /// Make the tab with `id` active. Unknown ids leave the session
    /// unchanged.
    pub fn switch_to_tab(&mut self, id: TabId) -> Option<&Tab> {
        let tab = self.tabs.iter_mut().find(|tab| tab.id == id)?;
        tab.touch();
        self.active_tab_id = id;

        tracing::debug!(tab_id = id, "Switched tab");
        Some(&*tab)
    }

    /// Close the tab with `id`. Refused when it is the last remaining tab
    /// or when `id` is unknown; returns whether a tab was removed.
    ///
    /// If the closed tab was active, the new active tab is its previous
    /// sibling, or the first tab when none precedes it.
    pub fn close_tab(&mut self, id: TabId) -> bool {
        if self.tabs.len() <= 1 {
            tracing::debug!(tab_id = id, "Refusing to close the last tab");
            return false;
        }

        let Some(index) = self.tabs.iter().position(|tab| tab.id == id) else {
            return false;
        };

        self.tabs.remove(index);

        if self.active_tab_id == id {
            let next = &mut self.tabs[index.saturating_sub(1)];
            next.touch();
            self.active_tab_id = next.id;
        }

        tracing::info!(tab_id = id, "Closed tab");
        true
    }

    /// Load `url` into the tab with `id` and record it in history,
    /// discarding any forward branch. Unknown ids are a no-op.
    ///
    /// `url` must already be normalized; input resolution happens in
    /// the navigation layer.
    pub fn navigate(&mut self, id: TabId, url: String) -> Option<&Tab> {
        let tab = self.tabs.iter_mut().find(|tab| tab.id == id)?;
        tracing::debug!(tab_id = id, url = %url, "Navigating tab");

        tab.load(url.clone());
        tab.record(url);
        Some(&*tab)
    }

    /// Move the active tab one step back in its history and re-load.
    /// No-op at the start of history.
    pub fn go_back(&mut self) -> Option<&Tab> {
        let tab = self.active_tab_mut()?;
        let url = tab.step_back()?;
        tab.load(url);
        Some(&*tab)
    }

    /// Move the active tab one step forward in its history and re-load.
    /// No-op at the end of history.
    pub fn go_forward(&mut self) -> Option<&Tab> {
        let tab = self.active_tab_mut()?;
        let url = tab.step_forward()?;
        tab.load(url);
        Some(&*tab)
    }

    /// Re-load the active tab's current URL without touching history.
    /// No-op for start-page tabs.
    pub fn refresh(&mut self) -> Option<&Tab> {
        let tab = self.active_tab_mut()?;
        let url = tab.url.clone()?;
        tab.load(url);
        Some(&*tab)
    }

    /// Return the active tab to the start-page state, clearing its history.
    pub fn go_home(&mut self) -> Option<&Tab> {
        let tab = self.active_tab_mut()?;
        tab.reset_to_start_page();

        tracing::debug!(tab_id = tab.id, "Tab returned to start page");
        Some(&*tab)
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id == self.active_tab_id)
    }

    fn active_tab_mut(&mut self) -> Option<&mut Tab> {
        let id = self.active_tab_id;
        self.tabs.iter_mut().find(|tab| tab.id == id)
    }

    pub fn get_tab(&self, id: TabId) -> Option<&Tab> {
        self.tabs.iter().find(|tab| tab.id == id)
    }

    pub fn active_tab_id(&self) -> TabId {
        self.active_tab_id
    }

    /// Ordered view of the collection, for the tab strip.
    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }
}

impl Default for TabSessionManager {
    fn default() -> Self {
        Self::new()
    }
}
