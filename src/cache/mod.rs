//! Recently seen records per record type.
//!
//! [`RecordCache`] keeps a bounded, recency-ordered list of record names for
//! one record type. [`IgnoreGate`] decides which record types never get a
//! cache. Both are plain single-threaded structures owned by the
//! [`RecordTracker`](crate::tracker::RecordTracker).

mod capacity;
mod ignore_gate;
mod record_cache;

pub use capacity::SharedCapacity;
pub use ignore_gate::IgnoreGate;
pub use record_cache::{RecordCache, RecordCacheStats, RecordEntry};
