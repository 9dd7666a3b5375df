//! Capacity setting shared by every record cache.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Handle to the number of records each cache keeps.
///
/// Clones share the same value, so the owner can change the limit once and
/// every cache sees it on its next insertion.
#[derive(Debug, Clone)]
pub struct SharedCapacity(Arc<AtomicUsize>);

impl SharedCapacity {
    /// Creates a new setting.
    pub fn new(capacity: usize) -> Self {
        Self(Arc::new(AtomicUsize::new(capacity)))
    }

    /// Current capacity.
    pub fn get(&self) -> usize {
        self.0.load(Ordering::Relaxed)
    }

    /// Replaces the capacity. Caches shrink lazily.
    pub fn set(&self, capacity: usize) {
        self.0.store(capacity, Ordering::Relaxed);
    }
}

impl Default for SharedCapacity {
    fn default() -> Self {
        Self::new(10)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clones_share_value() {
        let a = SharedCapacity::new(3);
        let b = a.clone();

        b.set(8);
        assert_eq!(a.get(), 8);
    }

    #[test]
    fn test_default_is_ten() {
        assert_eq!(SharedCapacity::default().get(), 10);
    }
}
