//! # recordwatch
//!
//! Keeps a short, most-recent-first list of records per record type, fed by
//! the active window title and the clipboard.
//!
//! ## Modules
//!
//! - [`cache`] - Bounded record lists and the record type ignore gate
//! - [`tracker`] - Per-process state fed by the poll loop
//! - [`watch`] - Title parsing, clipboard routing, sources and the poll loop
//! - [`actions`] - Per record type actions for new records
//! - [`shortcut`] - Notepad shortcut expansion
//! - [`menu`] - Popup menu model and terminal presenter
//! - [`replay`] - Scripted sessions
//! - [`cli`] - Command line interface
//! - [`types`] - Configuration and errors

pub mod actions;
pub mod cache;
#[cfg(feature = "cli")]
pub mod cli;
pub mod menu;
pub mod replay;
pub mod shortcut;
pub mod tracker;
pub mod types;
pub mod watch;

pub use cache::{IgnoreGate, RecordCache, SharedCapacity};
pub use tracker::{RecordTracker, RecordUpdate};
pub use types::config::Config;
pub use types::errors::{RecordwatchError, RecordwatchResult};
