//! Velum View Surface
//!
//! The session core never renders anything itself; it emits declarative
//! [`ViewCommand`]s to a [`ViewRenderer`] collaborator and never inspects
//! the rendered output. Commands are serializable so a host shell can
//! forward them over an IPC boundary unchanged.

mod command;
mod renderer;

pub use command::{ContentView, QuickLink, TabStripEntry, ViewCommand};
pub use renderer::{RecordingRenderer, ViewRenderer};
