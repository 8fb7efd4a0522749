//! Declarative render commands

use serde::{Deserialize, Serialize};

/// One tab's entry in the tab strip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabStripEntry {
    pub id: u64,
    pub title: String,
}

/// A start-page shortcut tile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickLink {
    pub title: String,
    pub description: String,
    pub url: String,
}

/// What a tab's content area should display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ContentView {
    /// The start page with its quick-link tiles
    StartPage { quick_links: Vec<QuickLink> },
    /// A remote page, loaded through the rendering-service frame
    RemoteFrame { frame_url: String },
}

/// Instruction to the view layer. The core emits these after every state
/// change; the renderer applies them however it likes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum ViewCommand {
    /// Replace the tab strip with these entries, marking the active tab
    TabStrip {
        tabs: Vec<TabStripEntry>,
        active_id: u64,
    },
    /// Set one tab's content area
    Content { tab_id: u64, view: ContentView },
    /// Set the address field's value and placeholder
    AddressField { value: String, placeholder: String },
    /// Enable or disable the back/forward affordances
    NavigationState {
        can_go_back: bool,
        can_go_forward: bool,
    },
    /// Assert or deassert a tab's loading indicator
    Loading { tab_id: u64, active: bool },
}
