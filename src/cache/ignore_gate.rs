//! One-way filter for record types that never get a cache.

use std::collections::HashSet;

/// Remembers record types that should be ignored.
///
/// Names ending in `"s"` are taken for list views ("Contacts", "Invoices")
/// and marked the first time they are seen. A mark is never removed.
#[derive(Debug, Clone)]
pub struct IgnoreGate {
    ignored: HashSet<String>,
    plural_heuristic: bool,
}

impl IgnoreGate {
    /// Creates an empty gate with the plural heuristic enabled.
    pub fn new() -> Self {
        Self {
            ignored: HashSet::new(),
            plural_heuristic: true,
        }
    }

    /// Enables or disables the plural heuristic. Existing marks stay.
    pub fn with_plural_heuristic(mut self, enabled: bool) -> Self {
        self.plural_heuristic = enabled;
        self
    }

    /// Creates a gate with `categories` already marked.
    pub fn with_ignored<I, S>(mut self, categories: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for category in categories {
            self.mark(category);
        }
        self
    }

    /// Returns true if `category` is ignored, marking it when it looks like a
    /// plural.
    pub fn should_ignore(&mut self, category: &str) -> bool {
        if self.ignored.contains(category) {
            return true;
        }

        if self.plural_heuristic && category.ends_with('s') {
            tracing::debug!(category, "Ignoring plural record type");
            self.ignored.insert(category.to_string());
            return true;
        }

        false
    }

    /// Marks `category` as ignored.
    pub fn mark(&mut self, category: impl Into<String>) {
        self.ignored.insert(category.into());
    }

    /// True if `category` has been marked, without applying the heuristic.
    pub fn is_marked(&self, category: &str) -> bool {
        self.ignored.contains(category)
    }

    /// Number of marked record types.
    pub fn len(&self) -> usize {
        self.ignored.len()
    }

    /// True when nothing is marked.
    pub fn is_empty(&self) -> bool {
        self.ignored.is_empty()
    }

    /// Marked record types, sorted.
    pub fn ignored(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.ignored.iter().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

impl Default for IgnoreGate {
    fn default() -> Self {
        Self::new()
    }
}
