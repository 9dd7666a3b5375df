//! The record tracker: state shared by one poll loop.
//!
//! [`RecordTracker`] owns one [`RecordCache`] per record type, the
//! [`IgnoreGate`], the [`SharedCapacity`] setting, the [`ActionRegistry`],
//! the title parser and the clipboard router. Callers own the tracker and
//! pass it by `&mut` into every tick; nothing here is global.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::actions::ActionRegistry;
use crate::cache::{IgnoreGate, RecordCache, SharedCapacity};
use crate::shortcut;
use crate::types::config::Config;
use crate::watch::{ClipboardRouter, TitleParser};

/// Where an update came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum UpdateSource {
    /// Active window title.
    Title,
    /// Clipboard content.
    Clipboard,
}

impl std::fmt::Display for UpdateSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateSource::Title => write!(f, "title"),
            UpdateSource::Clipboard => write!(f, "clipboard"),
        }
    }
}

/// A list whose visible order changed and should be re-rendered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordUpdate {
    /// Where the record came from.
    pub source: UpdateSource,

    /// Record type, or clipboard prefix.
    pub category: String,

    /// Records, most recent first.
    pub records: Vec<String>,
}

/// One list in a [`TrackerSnapshot`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategorySnapshot {
    /// Record type, or clipboard prefix.
    pub category: String,

    /// Records, most recent first.
    pub records: Vec<String>,

    /// When the first record was added or moved to the front.
    pub updated: Option<DateTime<Utc>>,
}

/// Everything the tracker currently shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrackerSnapshot {
    /// Shared capacity.
    pub capacity: usize,

    /// Record types in name order.
    pub categories: Vec<CategorySnapshot>,

    /// Clipboard buckets in prefix order.
    pub clipboard: Vec<CategorySnapshot>,

    /// Ignored record types, sorted.
    pub ignored: Vec<String>,
}

/// Per-process record state.
pub struct RecordTracker {
    caches: BTreeMap<String, RecordCache>,
    gate: IgnoreGate,
    capacity: SharedCapacity,
    min_capacity: usize,
    max_capacity: usize,
    actions: ActionRegistry,
    parser: TitleParser,
    clipboard: ClipboardRouter,
    shortcuts: BTreeMap<String, String>,
}

impl RecordTracker {
    /// Creates a tracker from configuration.
    pub fn from_config(config: &Config) -> Self {
        let capacity = SharedCapacity::new(config.records.capacity);
        let prefixes: Vec<String> = if config.clipboard.enabled {
            config.clipboard.prefixes.clone()
        } else {
            Vec::new()
        };

        Self {
            caches: BTreeMap::new(),
            gate: IgnoreGate::new()
                .with_plural_heuristic(config.records.ignore_plural)
                .with_ignored(config.records.ignored_categories.iter().cloned()),
            clipboard: ClipboardRouter::new(prefixes, capacity.clone()),
            capacity,
            min_capacity: config.records.min_capacity,
            max_capacity: config.records.max_capacity,
            actions: ActionRegistry::new(),
            parser: TitleParser::from_config(&config.title),
            shortcuts: config.shortcuts.clone(),
        }
    }

    /// Mutable access to the action registry.
    pub fn actions_mut(&mut self) -> &mut ActionRegistry {
        &mut self.actions
    }

    /// Handles an active window title.
    ///
    /// Titles that do not parse are skipped.
    pub fn observe_title(&mut self, title: &str) -> Option<RecordUpdate> {
        let parsed = match self.parser.parse(title) {
            Some(parsed) => parsed,
            None => {
                tracing::trace!(title, "Title does not name a record");
                return None;
            }
        };
        self.observe_record(&parsed.category, &parsed.record)
    }

    /// Records `record` under `category`, creating the cache on first use.
    ///
    /// Returns the new order when it changed.
    pub fn observe_record(&mut self, category: &str, record: &str) -> Option<RecordUpdate> {
        if category.is_empty() || record.is_empty() {
            return None;
        }
        if self.gate.should_ignore(category) {
            return None;
        }

        let cache = self.caches.entry(category.to_string()).or_insert_with(|| {
            tracing::debug!(category, "Record type not found, created");
            RecordCache::new(category, self.capacity.clone())
        });

        let actions = &self.actions;
        let changed = cache.add_or_touch_with(record, || {
            actions.run(category, record).into_associated()
        });

        if changed {
            Some(RecordUpdate {
                source: UpdateSource::Title,
                category: category.to_string(),
                records: cache.keys(),
            })
        } else {
            None
        }
    }

    /// Handles a clipboard read.
    pub fn observe_clipboard(&mut self, content: &str) -> Option<RecordUpdate> {
        self.clipboard.observe(content)
    }

    /// Sets the shared capacity, clamped to the configured bounds.
    ///
    /// Returns the value applied. Caches shrink on their next update.
    pub fn set_capacity(&mut self, capacity: usize) -> usize {
        let applied = capacity.clamp(self.min_capacity, self.max_capacity);
        if applied != capacity {
            tracing::debug!(requested = capacity, applied, "Capacity clamped");
        }
        self.capacity.set(applied);
        tracing::info!(capacity = applied, "Record limit changed");
        applied
    }

    /// Current shared capacity.
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Cache for `category`.
    pub fn cache(&self, category: &str) -> Option<&RecordCache> {
        self.caches.get(category)
    }

    /// Records of `category`, most recent first.
    pub fn records(&self, category: &str) -> Vec<String> {
        self.caches
            .get(category)
            .map(RecordCache::keys)
            .unwrap_or_default()
    }

    /// Most recent record of `category`.
    pub fn latest(&self, category: &str) -> Option<&str> {
        self.caches.get(category).and_then(RecordCache::head)
    }

    /// Known record types in name order.
    pub fn categories(&self) -> Vec<&str> {
        self.caches.keys().map(String::as_str).collect()
    }

    /// The ignore gate.
    pub fn gate(&self) -> &IgnoreGate {
        &self.gate
    }

    /// The clipboard router.
    pub fn clipboard(&self) -> &ClipboardRouter {
        &self.clipboard
    }

    /// Expands a notepad shortcut at the end of `text`.
    pub fn expand_shortcut(&self, text: &str) -> Option<String> {
        shortcut::expand(text, &self.shortcuts, |category| {
            self.latest(category).map(str::to_string)
        })
    }

    /// Current state of every list.
    pub fn snapshot(&self) -> TrackerSnapshot {
        TrackerSnapshot {
            capacity: self.capacity(),
            categories: self.caches.values().map(category_snapshot).collect(),
            clipboard: self
                .clipboard
                .buckets()
                .iter()
                .map(category_snapshot)
                .collect(),
            ignored: self.gate.ignored().into_iter().map(String::from).collect(),
        }
    }
}

fn category_snapshot(cache: &RecordCache) -> CategorySnapshot {
    CategorySnapshot {
        category: cache.category().to_string(),
        records: cache.keys(),
        updated: cache.last_update(),
    }
}

impl Default for RecordTracker {
    fn default() -> Self {
        Self::from_config(&Config::default_config())
    }
}
