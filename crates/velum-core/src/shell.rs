//! Shell: binds UI events to session operations and state to the view
//!
//! The session manager is pure state; the shell is the adapter around it.
//! Every mutation is followed by the declarative commands the view needs
//! to reflect it: tab strip, content area, address field, back/forward
//! affordances.

use std::sync::Arc;
use std::time::Duration;

use velum_navigation::{frame_url, InputResolver};
use velum_tabs::{Tab, TabId, TabSessionManager};
use velum_view::{ContentView, TabStripEntry, ViewCommand, ViewRenderer};

use crate::config::Config;
use crate::loading::LoadingIndicator;

pub struct Shell {
    config: Config,
    session: TabSessionManager,
    resolver: InputResolver,
    loading: LoadingIndicator,
    view: Arc<dyn ViewRenderer>,
}

impl Shell {
    /// Create a shell with one start-page tab and render the initial state.
    pub fn new(config: Config, view: Arc<dyn ViewRenderer>) -> Self {
        let resolver = InputResolver::with_search_engine(config.search_engine.clone());
        let loading = LoadingIndicator::new(Duration::from_millis(config.loading_delay_ms));

        let shell = Self {
            config,
            session: TabSessionManager::new(),
            resolver,
            loading,
            view,
        };

        shell.emit_content(shell.session.active_tab_id());
        shell.sync_chrome();
        shell
    }

    /// Open a new tab, optionally straight onto an address-bar input.
    pub fn new_tab(&mut self, input: Option<&str>) -> TabId {
        let url = input
            .and_then(|input| self.resolver.resolve(input))
            .map(|resolution| resolution.into_url());
        let loaded = url.is_some();

        let id = self.session.create_tab(url).id;

        if loaded {
            self.loading.begin(id, Arc::clone(&self.view));
        }
        self.emit_content(id);
        self.sync_chrome();
        id
    }

    /// Select the tab with `id`. Unknown ids change nothing.
    pub fn switch_to_tab(&mut self, id: TabId) {
        if self.session.switch_to_tab(id).is_some() {
            self.sync_chrome();
        }
    }

    /// Close the tab with `id`. The last remaining tab stays open.
    pub fn close_tab(&mut self, id: TabId) {
        if self.session.close_tab(id) {
            self.loading.cancel(id);
            self.sync_chrome();
        }
    }

    /// Address-bar submission for the active tab.
    pub fn submit_address(&mut self, input: &str) {
        let id = self.session.active_tab_id();
        self.navigate_to(id, input);
    }

    /// Start-page quick link: load its URL in the active tab.
    pub fn open_quick_link(&mut self, url: &str) {
        let id = self.session.active_tab_id();
        self.navigate_to(id, url);
    }

    /// Resolve `input` and load the result into the tab with `id`.
    /// Empty input and unknown ids change nothing.
    pub fn navigate_to(&mut self, id: TabId, input: &str) {
        let Some(resolution) = self.resolver.resolve(input) else {
            return;
        };
        if self.session.get_tab(id).is_none() {
            return;
        }

        self.loading.begin(id, Arc::clone(&self.view));
        self.session.navigate(id, resolution.into_url());
        self.emit_content(id);
        self.sync_chrome();
    }

    /// One step back in the active tab's history.
    pub fn go_back(&mut self) {
        if let Some(id) = self.session.go_back().map(|tab| tab.id) {
            self.loading.begin(id, Arc::clone(&self.view));
            self.emit_content(id);
            self.sync_chrome();
        }
    }

    /// One step forward in the active tab's history.
    pub fn go_forward(&mut self) {
        if let Some(id) = self.session.go_forward().map(|tab| tab.id) {
            self.loading.begin(id, Arc::clone(&self.view));
            self.emit_content(id);
            self.sync_chrome();
        }
    }

    /// Re-load the active tab's current URL. Start-page tabs stay put.
    pub fn refresh(&mut self) {
        if let Some(id) = self.session.refresh().map(|tab| tab.id) {
            self.loading.begin(id, Arc::clone(&self.view));
            self.emit_content(id);
            self.sync_chrome();
        }
    }

    /// Return the active tab to the start page, clearing its history.
    pub fn go_home(&mut self) {
        if let Some(id) = self.session.go_home().map(|tab| tab.id) {
            self.emit_content(id);
            self.sync_chrome();
        }
    }

    pub fn active_tab(&self) -> Option<&Tab> {
        self.session.active_tab()
    }

    pub fn tabs(&self) -> &[Tab] {
        self.session.tabs()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Emit the content area for one tab.
    fn emit_content(&self, id: TabId) {
        let Some(tab) = self.session.get_tab(id) else {
            return;
        };

        let view = match &tab.url {
            Some(url) => ContentView::RemoteFrame {
                frame_url: frame_url(&self.config.rendering_service, url),
            },
            None => ContentView::StartPage {
                quick_links: self.config.quick_links.clone(),
            },
        };

        self.view.render(ViewCommand::Content { tab_id: id, view });
    }

    /// Emit the tab strip, address field, and back/forward affordances for
    /// the current active tab.
    fn sync_chrome(&self) {
        let tabs = self
            .session
            .tabs()
            .iter()
            .map(|tab| TabStripEntry {
                id: tab.id,
                title: tab.title.clone(),
            })
            .collect();

        self.view.render(ViewCommand::TabStrip {
            tabs,
            active_id: self.session.active_tab_id(),
        });

        let Some(active) = self.session.active_tab() else {
            return;
        };

        let (value, placeholder) = match &active.url {
            Some(url) => (url.clone(), self.config.loaded_placeholder.clone()),
            None => (String::new(), self.config.start_page_placeholder.clone()),
        };
        self.view
            .render(ViewCommand::AddressField { value, placeholder });

        self.view.render(ViewCommand::NavigationState {
            can_go_back: active.can_go_back(),
            can_go_forward: active.can_go_forward(),
        });
    }
}
