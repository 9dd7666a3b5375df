//! The poll loop.

use std::future::Future;
use std::time::Duration;

use crate::tracker::{RecordTracker, RecordUpdate};

use super::{ClipboardSource, TitleSource};

/// Reads the clipboard and the active window title on every tick and feeds
/// changes to a [`RecordTracker`].
pub struct Poller {
    clipboard: Option<Box<dyn ClipboardSource>>,
    titles: Option<Box<dyn TitleSource>>,
    interval: Duration,
    last_title: Option<String>,
}

impl Poller {
    /// Creates a poller. Each tick reads whichever sources are present.
    pub fn new(
        clipboard: Option<Box<dyn ClipboardSource>>,
        titles: Option<Box<dyn TitleSource>>,
        interval: Duration,
    ) -> Self {
        Self {
            clipboard,
            titles,
            interval,
            last_title: None,
        }
    }

    /// Runs one tick and returns the lists that changed.
    ///
    /// Source failures are logged and skipped.
    pub async fn tick(&mut self, tracker: &mut RecordTracker) -> Vec<RecordUpdate> {
        let mut updates = Vec::new();

        if let Some(clipboard) = self.clipboard.as_mut() {
            match clipboard.read_text() {
                Ok(Some(text)) => updates.extend(tracker.observe_clipboard(&text)),
                Ok(None) => {}
                Err(e) => tracing::warn!(source = clipboard.name(), "Clipboard read failed: {}", e),
            }
        }

        if let Some(titles) = self.titles.as_mut() {
            match titles.active_title().await {
                Ok(Some(title)) => {
                    if self.last_title.as_deref() != Some(title.as_str()) {
                        updates.extend(tracker.observe_title(&title));
                        self.last_title = Some(title);
                    }
                }
                Ok(None) => {}
                Err(e) => tracing::warn!(source = titles.name(), "Title read failed: {}", e),
            }
        }

        updates
    }

    /// Ticks until `shutdown` completes, calling `on_update` for every change.
    pub async fn run<S, F>(&mut self, tracker: &mut RecordTracker, shutdown: S, mut on_update: F)
    where
        S: Future<Output = ()>,
        F: FnMut(&RecordUpdate),
    {
        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);
        tokio::pin!(shutdown);

        tracing::info!(
            interval_ms = self.interval.as_millis() as u64,
            clipboard = self.clipboard.is_some(),
            titles = self.titles.is_some(),
            "Watching clipboard and window titles"
        );

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    tracing::info!("Stopping watch loop");
                    break;
                }
                _ = ticker.tick() => {
                    for update in self.tick(tracker).await {
                        on_update(&update);
                    }
                }
            }
        }
    }
}
