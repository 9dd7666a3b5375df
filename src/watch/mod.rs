//! Inputs of the poll loop.
//!
//! - [`title`]: parses the active window title into a record and its type
//! - [`clipboard`]: files changed clipboard content into prefix buckets
//! - [`sources`]: where clipboard text and window titles come from
//! - [`poller`]: the periodic tick driving a [`RecordTracker`](crate::tracker::RecordTracker)

pub mod clipboard;
pub mod poller;
pub mod sources;
pub mod title;

pub use clipboard::ClipboardRouter;
pub use poller::Poller;
pub use sources::{ClipboardSource, CommandTitleSource, ScriptedClipboard, ScriptedTitles, TitleSource};
#[cfg(feature = "system-clipboard")]
pub use sources::SystemClipboard;
pub use title::{ParsedTitle, TitleParser};
