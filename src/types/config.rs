//! Configuration for recordwatch.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use crate::menu::MenuNode;
use crate::RecordwatchResult;

/// Default file name looked up in the working directory.
pub const DEFAULT_CONFIG_FILE: &str = "recordwatch.toml";

/// Main configuration for recordwatch.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// General settings.
    #[serde(default)]
    pub general: GeneralConfig,

    /// Record cache settings.
    #[serde(default)]
    pub records: RecordsConfig,

    /// Window title parsing and source settings.
    #[serde(default)]
    pub title: TitleConfig,

    /// Clipboard routing settings.
    #[serde(default)]
    pub clipboard: ClipboardConfig,

    /// Poll loop settings.
    #[serde(default)]
    pub poll: PollConfig,

    /// Notepad shortcuts: typed word -> record type.
    #[serde(default = "default_shortcuts")]
    pub shortcuts: BTreeMap<String, String>,

    /// Popup menu structure.
    #[serde(default)]
    pub menu: MenuConfig,
}

/// General settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneralConfig {
    /// Log level (trace, debug, info, warn, error).
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Log format (text, json).
    #[serde(default = "default_log_format")]
    pub log_format: String,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            log_format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "text".to_string()
}

/// Record cache settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RecordsConfig {
    /// Records kept per record type, shared by every category.
    #[serde(default = "default_capacity")]
    pub capacity: usize,

    /// Lower bound applied when the capacity is changed at runtime.
    #[serde(default = "default_min_capacity")]
    pub min_capacity: usize,

    /// Upper bound applied when the capacity is changed at runtime.
    #[serde(default = "default_max_capacity")]
    pub max_capacity: usize,

    /// Treat record types ending in "s" as list views and ignore them.
    #[serde(default = "default_true")]
    pub ignore_plural: bool,

    /// Record types ignored from the start.
    #[serde(default)]
    pub ignored_categories: Vec<String>,
}

impl Default for RecordsConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            min_capacity: default_min_capacity(),
            max_capacity: default_max_capacity(),
            ignore_plural: true,
            ignored_categories: Vec::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_capacity() -> usize {
    10
}

fn default_min_capacity() -> usize {
    5
}

fn default_max_capacity() -> usize {
    50
}

/// Window title settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TitleConfig {
    /// Separator between record, record type and application name.
    #[serde(default = "default_delimiter")]
    pub delimiter: String,

    /// Prefix the third title segment must start with.
    #[serde(default = "default_marker")]
    pub marker: String,

    /// Command printing the active window title on stdout.
    #[serde(default = "default_title_command")]
    pub command: String,

    /// Arguments for the title command.
    #[serde(default = "default_title_args")]
    pub args: Vec<String>,
}

impl Default for TitleConfig {
    fn default() -> Self {
        Self {
            delimiter: default_delimiter(),
            marker: default_marker(),
            command: default_title_command(),
            args: default_title_args(),
        }
    }
}

fn default_delimiter() -> String {
    " | ".to_string()
}

fn default_marker() -> String {
    "Salesforce".to_string()
}

fn default_title_command() -> String {
    "xdotool".to_string()
}

fn default_title_args() -> Vec<String> {
    vec!["getactivewindow".to_string(), "getwindowname".to_string()]
}

/// Clipboard routing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClipboardConfig {
    /// Enabled.
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Prefixes routed into their own buckets, checked in order.
    #[serde(default = "default_prefixes")]
    pub prefixes: Vec<String>,
}

impl Default for ClipboardConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            prefixes: default_prefixes(),
        }
    }
}

fn default_prefixes() -> Vec<String> {
    ["GR-", "CN-", "Account"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Poll loop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PollConfig {
    /// Tick interval in milliseconds.
    #[serde(default = "default_interval_ms")]
    pub interval_ms: u64,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            interval_ms: default_interval_ms(),
        }
    }
}

fn default_interval_ms() -> u64 {
    // Every 10th frame at ~60 fps.
    160
}

fn default_shortcuts() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("cn".to_string(), "Case".to_string()),
        ("co".to_string(), "Contact".to_string()),
    ])
}

/// Popup menu settings.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MenuConfig {
    /// Menu entries; empty means the built-in menu.
    #[serde(default)]
    pub items: Vec<MenuNode>,
}

impl Config {
    /// Loads configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> RecordwatchResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to a TOML file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> RecordwatchResult<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Creates default configuration.
    pub fn default_config() -> Self {
        Self {
            general: GeneralConfig::default(),
            records: RecordsConfig::default(),
            title: TitleConfig::default(),
            clipboard: ClipboardConfig::default(),
            poll: PollConfig::default(),
            shortcuts: default_shortcuts(),
            menu: MenuConfig::default(),
        }
    }

    /// Checks values that serde cannot reject on its own.
    pub fn validate(&self) -> RecordwatchResult<()> {
        if self.records.min_capacity > self.records.max_capacity {
            return Err(crate::RecordwatchError::config(format!(
                "records.min_capacity ({}) is greater than records.max_capacity ({})",
                self.records.min_capacity, self.records.max_capacity
            )));
        }
        if self.title.delimiter.is_empty() {
            return Err(crate::RecordwatchError::config(
                "title.delimiter must not be empty",
            ));
        }
        if self.poll.interval_ms == 0 {
            return Err(crate::RecordwatchError::config(
                "poll.interval_ms must be greater than zero",
            ));
        }
        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::default_config()
    }
}
