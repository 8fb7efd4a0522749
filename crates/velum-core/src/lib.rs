//! Velum Core
//!
//! Coordination layer for the Velum tab shell. The session state lives in
//! `velum-tabs`, input handling in `velum-navigation`, and the declarative
//! render surface in `velum-view`; the [`Shell`] here binds UI events to
//! session operations and session state to view commands.

mod config;
mod error;
mod loading;
mod shell;

pub use config::Config;
pub use error::CoreError;
pub use loading::LoadingIndicator;
pub use shell::Shell;

// Re-export core components
pub use velum_navigation::{frame_url, InputResolver, Resolution};
pub use velum_tabs::{Tab, TabId, TabSessionManager, NEW_TAB_TITLE};
pub use velum_view::{ContentView, QuickLink, RecordingRenderer, TabStripEntry, ViewCommand, ViewRenderer};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
