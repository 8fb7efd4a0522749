//! Velum Tab Session State
//!
//! Pure state transitions for the tab collection: create, switch, close,
//! per-tab history with back/forward truncation. Presentation is driven
//! elsewhere; nothing in this crate touches a view.

mod session;
mod tab;

pub use session::TabSessionManager;
pub use tab::{Tab, TabId, NEW_TAB_TITLE};
