//! Bounded, recency-ordered record list for one record type.

use chrono::{DateTime, Utc};
use lru::LruCache;

use super::SharedCapacity;

/// A stored record.
#[derive(Debug, Clone)]
pub struct RecordEntry {
    /// Value stored alongside the record (e.g. a contact's email address).
    pub associated: Option<String>,

    /// When the record was inserted.
    pub first_seen: DateTime<Utc>,

    /// When the record was last inserted or moved to the front.
    pub last_seen: DateTime<Utc>,
}

impl RecordEntry {
    fn new(associated: Option<String>) -> Self {
        let now = Utc::now();
        Self {
            associated,
            first_seen: now,
            last_seen: now,
        }
    }
}

/// Cache counters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordCacheStats {
    /// Current number of records.
    pub size: usize,

    /// Capacity in effect.
    pub capacity: usize,

    /// New records added.
    pub inserts: u64,

    /// Existing records moved to the front.
    pub moves: u64,

    /// Calls that found the record already at the front.
    pub unchanged: u64,

    /// Records dropped from the tail.
    pub evictions: u64,
}

/// Most-recent-first list of record names for one record type.
///
/// Backed by an unbounded [`LruCache`]; the bound comes from the
/// [`SharedCapacity`] and is enforced lazily on every
/// [`add_or_touch`](Self::add_or_touch), so lowering the capacity takes
/// effect on the next call.
pub struct RecordCache {
    category: String,
    capacity: SharedCapacity,
    entries: LruCache<String, RecordEntry>,
    inserts: u64,
    moves: u64,
    unchanged: u64,
    evictions: u64,
}

impl RecordCache {
    /// Creates an empty cache for `category` bound by a shared capacity.
    pub fn new(category: impl Into<String>, capacity: SharedCapacity) -> Self {
        Self {
            category: category.into(),
            capacity,
            entries: LruCache::unbounded(),
            inserts: 0,
            moves: 0,
            unchanged: 0,
            evictions: 0,
        }
    }

    /// Creates a cache with its own capacity setting.
    pub fn with_capacity(category: impl Into<String>, capacity: usize) -> Self {
        Self::new(category, SharedCapacity::new(capacity))
    }

    /// Adds `value` at the front, or moves it there if already present.
    ///
    /// Returns `true` when the visible order changed (new record, or an
    /// existing one moved to the front) and `false` when `value` was already
    /// first. With a capacity of zero the call returns `true` and nothing is
    /// retained.
    ///
    /// The associated value is only stored for new records.
    pub fn add_or_touch(&mut self, value: &str, associated: Option<String>) -> bool {
        self.add_or_touch_with(value, || associated)
    }

    /// Like [`add_or_touch`](Self::add_or_touch), but computes the associated
    /// value only when `value` ends up inserted as a new record, after the
    /// capacity in effect has been applied.
    pub fn add_or_touch_with<F>(&mut self, value: &str, associated: F) -> bool
    where
        F: FnOnce() -> Option<String>,
    {
        let capacity = self.capacity.get();
        self.evict_to(capacity);

        if self.entries.contains(value) {
            if self.is_head(value) {
                self.unchanged += 1;
                return false;
            }

            self.entries.promote(value);
            if let Some(entry) = self.entries.peek_mut(value) {
                entry.last_seen = Utc::now();
            }
            self.moves += 1;
            tracing::debug!(
                record = value,
                category = %self.category,
                "Record exists, moved to front"
            );
            return true;
        }

        // Room for the new record.
        self.evict_to(capacity.saturating_sub(1));
        self.inserts += 1;

        if capacity == 0 {
            self.evictions += 1;
            tracing::debug!(
                record = value,
                category = %self.category,
                "Capacity is zero, record not retained"
            );
            return true;
        }

        self.entries
            .push(value.to_string(), RecordEntry::new(associated()));
        tracing::debug!(record = value, category = %self.category, "Added record");
        true
    }

    /// Drops records from the tail until at most `limit` remain.
    fn evict_to(&mut self, limit: usize) {
        while self.entries.len() > limit {
            match self.entries.pop_lru() {
                Some((key, _)) => {
                    self.evictions += 1;
                    tracing::debug!(
                        record = %key,
                        category = %self.category,
                        "Evicted least recent record"
                    );
                }
                None => break,
            }
        }
    }

    fn is_head(&self, value: &str) -> bool {
        self.head() == Some(value)
    }

    /// Record type this cache belongs to.
    pub fn category(&self) -> &str {
        &self.category
    }

    /// Capacity currently in effect.
    pub fn capacity(&self) -> usize {
        self.capacity.get()
    }

    /// Number of stored records.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no record is stored.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True when `value` is stored.
    pub fn contains(&self, value: &str) -> bool {
        self.entries.contains(value)
    }

    /// Most recent record.
    pub fn head(&self) -> Option<&str> {
        self.entries.iter().next().map(|(k, _)| k.as_str())
    }

    /// When the most recent record was added or moved to the front.
    pub fn last_update(&self) -> Option<DateTime<Utc>> {
        self.entries.iter().next().map(|(_, entry)| entry.last_seen)
    }

    /// Record names, most recent first.
    pub fn keys(&self) -> Vec<String> {
        self.entries.iter().map(|(k, _)| k.clone()).collect()
    }

    /// Entry for `value` without changing the order.
    pub fn get(&self, value: &str) -> Option<&RecordEntry> {
        self.entries.peek(value)
    }

    /// Records and entries, most recent first.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RecordEntry)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Removes every record. Counters are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns cache counters.
    pub fn stats(&self) -> RecordCacheStats {
        RecordCacheStats {
            size: self.entries.len(),
            capacity: self.capacity.get(),
            inserts: self.inserts,
            moves: self.moves,
            unchanged: self.unchanged,
            evictions: self.evictions,
        }
    }
}

impl std::fmt::Debug for RecordCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RecordCache")
            .field("category", &self.category)
            .field("capacity", &self.capacity.get())
            .field("records", &self.keys())
            .finish()
    }
}
