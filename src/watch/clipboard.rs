//! Routing of clipboard content into prefix buckets.

use crate::cache::{RecordCache, SharedCapacity};
use crate::tracker::{RecordUpdate, UpdateSource};

/// Files new clipboard content into the bucket of the first matching prefix.
///
/// Each bucket is a [`RecordCache`] named after its prefix and bound by the
/// shared capacity. Content equal to the previous observation is skipped.
#[derive(Debug)]
pub struct ClipboardRouter {
    buckets: Vec<RecordCache>,
    last_content: Option<String>,
}

impl ClipboardRouter {
    /// Creates a router with one bucket per prefix, in order.
    pub fn new<I, S>(prefixes: I, capacity: SharedCapacity) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let buckets = prefixes
            .into_iter()
            .map(|prefix| RecordCache::new(prefix, capacity.clone()))
            .collect();

        Self {
            buckets,
            last_content: None,
        }
    }

    /// Handles one clipboard read.
    pub fn observe(&mut self, content: &str) -> Option<RecordUpdate> {
        if self.last_content.as_deref() == Some(content) {
            return None;
        }
        self.last_content = Some(content.to_string());

        if content.is_empty() {
            return None;
        }

        let bucket = self
            .buckets
            .iter_mut()
            .find(|bucket| content.starts_with(bucket.category()))?;

        tracing::debug!(prefix = bucket.category(), "Clipboard content matched prefix");

        if bucket.add_or_touch(content, None) {
            Some(RecordUpdate {
                source: UpdateSource::Clipboard,
                category: bucket.category().to_string(),
                records: bucket.keys(),
            })
        } else {
            None
        }
    }

    /// Content seen on the last read.
    pub fn last_content(&self) -> Option<&str> {
        self.last_content.as_deref()
    }

    /// Bucket for `prefix`.
    pub fn bucket(&self, prefix: &str) -> Option<&RecordCache> {
        self.buckets.iter().find(|b| b.category() == prefix)
    }

    /// All buckets in prefix order.
    pub fn buckets(&self) -> &[RecordCache] {
        &self.buckets
    }
}
