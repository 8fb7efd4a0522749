//! Renderer trait and the recording test double

use parking_lot::Mutex;

use crate::command::ViewCommand;

/// Consumer of view commands. Implementations apply commands to whatever
/// actual UI exists; the core only ever calls `render`.
pub trait ViewRenderer: Send + Sync {
    fn render(&self, command: ViewCommand);
}

/// Renderer that records every command it receives. Used in tests and for
/// headless operation.
#[derive(Default)]
pub struct RecordingRenderer {
    commands: Mutex<Vec<ViewCommand>>,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything rendered so far.
    pub fn commands(&self) -> Vec<ViewCommand> {
        self.commands.lock().clone()
    }

    /// Drain the recorded commands.
    pub fn take(&self) -> Vec<ViewCommand> {
        std::mem::take(&mut *self.commands.lock())
    }
}

impl ViewRenderer for RecordingRenderer {
    fn render(&self, command: ViewCommand) {
        self.commands.lock().push(command);
    }
}
