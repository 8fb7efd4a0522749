//! Loading indicator scheduling
//!
//! The indicator is a UX cue, not a completion signal: it is asserted when
//! a load starts and dismissed after a fixed delay, with no knowledge of
//! whether the rendering frame actually finished. Each assertion bumps a
//! per-tab generation so a navigation that starts before the previous
//! dismissal fires supersedes it instead of being dismissed early.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use velum_tabs::TabId;
use velum_view::{ViewCommand, ViewRenderer};

pub struct LoadingIndicator {
    delay: Duration,
    generations: Arc<Mutex<HashMap<TabId, u64>>>,
}

impl LoadingIndicator {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            generations: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Assert the indicator for `tab_id` and schedule its dismissal.
    ///
    /// Outside a tokio runtime the dismissal is skipped; the next state
    /// emission overrides the indicator anyway.
    pub fn begin(&self, tab_id: TabId, view: Arc<dyn ViewRenderer>) {
        let generation = {
            let mut generations = self.generations.lock();
            let entry = generations.entry(tab_id).or_insert(0);
            *entry += 1;
            *entry
        };

        view.render(ViewCommand::Loading {
            tab_id,
            active: true,
        });

        let Ok(handle) = tokio::runtime::Handle::try_current() else {
            tracing::debug!(tab_id, "No async runtime, skipping indicator dismissal");
            return;
        };

        let generations = Arc::clone(&self.generations);
        let delay = self.delay;
        handle.spawn(async move {
            tokio::time::sleep(delay).await;

            let current = generations.lock().get(&tab_id).copied();
            if current == Some(generation) {
                view.render(ViewCommand::Loading {
                    tab_id,
                    active: false,
                });
            }
        });
    }

    /// Drop any pending dismissal for `tab_id`. Called when the tab closes.
    pub fn cancel(&self, tab_id: TabId) {
        self.generations.lock().remove(&tab_id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use velum_view::RecordingRenderer;

    fn dismissals(commands: &[ViewCommand]) -> usize {
        commands
            .iter()
            .filter(|command| matches!(command, ViewCommand::Loading { active: false, .. }))
            .count()
    }

    #[tokio::test(start_paused = true)]
    async fn test_indicator_dismissed_after_delay() {
        let renderer = Arc::new(RecordingRenderer::new());
        let indicator = LoadingIndicator::new(Duration::from_secs(1));

        indicator.begin(7, renderer.clone());
        assert_eq!(
            renderer.commands(),
            vec![ViewCommand::Loading {
                tab_id: 7,
                active: true
            }]
        );

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(dismissals(&renderer.commands()), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_navigation_supersedes_pending_dismissal() {
        let renderer = Arc::new(RecordingRenderer::new());
        let indicator = LoadingIndicator::new(Duration::from_secs(1));

        indicator.begin(7, renderer.clone());
        tokio::time::sleep(Duration::from_millis(500)).await;
        indicator.begin(7, renderer.clone());

        // The first timer fires but its generation is stale.
        tokio::time::sleep(Duration::from_millis(600)).await;
        assert_eq!(dismissals(&renderer.commands()), 0);

        tokio::time::sleep(Duration::from_secs(1)).await;
        assert_eq!(dismissals(&renderer.commands()), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_drops_pending_dismissal() {
        let renderer = Arc::new(RecordingRenderer::new());
        let indicator = LoadingIndicator::new(Duration::from_secs(1));

        indicator.begin(7, renderer.clone());
        indicator.cancel(7);

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(dismissals(&renderer.commands()), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_independent_tabs_dismiss_independently() {
        let renderer = Arc::new(RecordingRenderer::new());
        let indicator = LoadingIndicator::new(Duration::from_secs(1));

        indicator.begin(1, renderer.clone());
        indicator.begin(2, renderer.clone());

        tokio::time::sleep(Duration::from_secs(2)).await;
        assert_eq!(dismissals(&renderer.commands()), 2);
    }
}
