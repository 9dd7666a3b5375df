//! Clipboard and window title sources.

use std::collections::VecDeque;

use async_trait::async_trait;

use crate::types::config::TitleConfig;
use crate::{RecordwatchError, RecordwatchResult};

// ═══════════════════════════════════════════════════════════════════════════
// Clipboard
// ═══════════════════════════════════════════════════════════════════════════

/// Something that can read the current clipboard text.
pub trait ClipboardSource {
    /// Source name, for logs.
    fn name(&self) -> &str;

    /// Current clipboard text, or `None` when the clipboard holds no text.
    fn read_text(&mut self) -> RecordwatchResult<Option<String>>;
}

/// System clipboard through arboard.
#[cfg(feature = "system-clipboard")]
pub struct SystemClipboard {
    clipboard: arboard::Clipboard,
}

#[cfg(feature = "system-clipboard")]
impl SystemClipboard {
    /// Opens the system clipboard.
    pub fn new() -> RecordwatchResult<Self> {
        let clipboard =
            arboard::Clipboard::new().map_err(|e| RecordwatchError::Clipboard(e.to_string()))?;
        Ok(Self { clipboard })
    }
}

#[cfg(feature = "system-clipboard")]
impl ClipboardSource for SystemClipboard {
    fn name(&self) -> &str {
        "system"
    }

    fn read_text(&mut self) -> RecordwatchResult<Option<String>> {
        match self.clipboard.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(RecordwatchError::Clipboard(e.to_string())),
        }
    }
}

/// Clipboard that replays a fixed sequence, then keeps its last value.
#[derive(Debug, Default)]
pub struct ScriptedClipboard {
    queue: VecDeque<String>,
    current: Option<String>,
}

impl ScriptedClipboard {
    /// Creates a scripted clipboard.
    pub fn new<I, S>(contents: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: contents.into_iter().map(Into::into).collect(),
            current: None,
        }
    }
}

impl ClipboardSource for ScriptedClipboard {
    fn name(&self) -> &str {
        "scripted"
    }

    fn read_text(&mut self) -> RecordwatchResult<Option<String>> {
        if let Some(next) = self.queue.pop_front() {
            self.current = Some(next);
        }
        Ok(self.current.clone())
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Window titles
// ═══════════════════════════════════════════════════════════════════════════

/// Something that can report the active window title.
#[async_trait]
pub trait TitleSource: Send {
    /// Source name, for logs.
    fn name(&self) -> &str;

    /// Title of the active window, or `None` when there is none.
    async fn active_title(&mut self) -> RecordwatchResult<Option<String>>;
}

/// Runs an external command (e.g. `xdotool getactivewindow getwindowname`)
/// and takes the first line of its output as the title.
#[derive(Debug, Clone)]
pub struct CommandTitleSource {
    command: String,
    args: Vec<String>,
}

impl CommandTitleSource {
    /// Creates a source for `command` with `args`.
    pub fn new(command: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            command: command.into(),
            args,
        }
    }

    /// Creates a source from configuration.
    pub fn from_config(config: &TitleConfig) -> Self {
        Self::new(config.command.clone(), config.args.clone())
    }

    /// Command being run.
    pub fn command(&self) -> &str {
        &self.command
    }

    /// Checks whether the command can be spawned and succeeds.
    pub async fn is_available(&self) -> bool {
        tokio::process::Command::new(&self.command)
            .args(&self.args)
            .output()
            .await
            .map(|output| output.status.success())
            .unwrap_or(false)
    }
}

#[async_trait]
impl TitleSource for CommandTitleSource {
    fn name(&self) -> &str {
        &self.command
    }

    async fn active_title(&mut self) -> RecordwatchResult<Option<String>> {
        let output = tokio::process::Command::new(&self.command)
            .args(&self.args)
            .output()
            .await
            .map_err(|e| RecordwatchError::TitleSource(self.command.clone(), e.to_string()))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            return Err(RecordwatchError::TitleSource(self.command.clone(), stderr));
        }

        let title = String::from_utf8_lossy(&output.stdout)
            .lines()
            .next()
            .map(|line| line.trim_end().to_string())
            .filter(|line| !line.is_empty());

        Ok(title)
    }
}

/// Title source that replays a fixed sequence, then keeps its last value.
#[derive(Debug, Default)]
pub struct ScriptedTitles {
    queue: VecDeque<String>,
    current: Option<String>,
}

impl ScriptedTitles {
    /// Creates a scripted title source.
    pub fn new<I, S>(titles: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            queue: titles.into_iter().map(Into::into).collect(),
            current: None,
        }
    }
}

#[async_trait]
impl TitleSource for ScriptedTitles {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn active_title(&mut self) -> RecordwatchResult<Option<String>> {
        if let Some(next) = self.queue.pop_front() {
            self.current = Some(next);
        }
        Ok(self.current.clone())
    }
}
