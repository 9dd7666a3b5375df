//! Popup menu model.
//!
//! A menu is a list of [`MenuNode`]s: plain items, or titled submenus with
//! their own items. Picking an item yields its hierarchy, the titles of the
//! submenus leading to it followed by the item itself (the untitled top-level
//! menu is not part of it).

#[cfg(feature = "cli")]
mod interactive;

#[cfg(feature = "cli")]
pub use interactive::run_popup_menu;

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::types::config::MenuConfig;
use crate::{RecordwatchError, RecordwatchResult};

/// One entry of a menu.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MenuNode {
    /// Selectable item.
    Item(String),

    /// Nested menu.
    Submenu {
        /// Submenu title.
        title: String,
        /// Entries of the submenu.
        items: Vec<MenuNode>,
    },
}

impl MenuNode {
    /// Creates an item.
    pub fn item(label: impl Into<String>) -> Self {
        MenuNode::Item(label.into())
    }

    /// Creates a submenu.
    pub fn submenu(title: impl Into<String>, items: Vec<MenuNode>) -> Self {
        MenuNode::Submenu {
            title: title.into(),
            items,
        }
    }

    /// Item label or submenu title.
    pub fn label(&self) -> &str {
        match self {
            MenuNode::Item(label) => label,
            MenuNode::Submenu { title, .. } => title,
        }
    }
}

/// Built-in demonstration menu.
pub fn default_menu() -> Vec<MenuNode> {
    vec![
        MenuNode::submenu(
            "Option 1",
            vec![
                MenuNode::submenu(
                    "Sub Option 1.1",
                    vec![MenuNode::item("Item 1.1.1"), MenuNode::item("Item 1.1.2")],
                ),
                MenuNode::submenu(
                    "Sub Option 1.2",
                    vec![MenuNode::item("Item 1.2.1"), MenuNode::item("Item 1.2.2")],
                ),
            ],
        ),
        MenuNode::submenu(
            "Option 2",
            vec![MenuNode::item("Item 2.1"), MenuNode::item("Item 2.2")],
        ),
        MenuNode::submenu(
            "Other Menu",
            vec![
                MenuNode::submenu(
                    "Option 3",
                    vec![MenuNode::item("Item 3.1"), MenuNode::item("Item 3.2")],
                ),
                MenuNode::submenu(
                    "Option 4",
                    vec![MenuNode::item("Item 4.1"), MenuNode::item("Item 4.2")],
                ),
            ],
        ),
        MenuNode::item("Item 5"),
        MenuNode::item("Item 6"),
    ]
}

/// Formats a hierarchy as `"a -> b -> c"`.
pub fn format_hierarchy(hierarchy: &[String]) -> String {
    hierarchy.join(" -> ")
}

/// A popup menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PopupMenu {
    items: Vec<MenuNode>,
}

impl PopupMenu {
    /// Creates a menu, rejecting empty labels.
    pub fn new(items: Vec<MenuNode>) -> RecordwatchResult<Self> {
        validate(&items)?;
        Ok(Self { items })
    }

    /// Menu from configuration, or the built-in one when none is configured.
    pub fn from_config(config: &MenuConfig) -> RecordwatchResult<Self> {
        if config.items.is_empty() {
            Self::new(default_menu())
        } else {
            Self::new(config.items.clone())
        }
    }

    /// Loads a menu from a JSON file holding an array of entries.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> RecordwatchResult<Self> {
        let content = std::fs::read_to_string(path)?;
        let items: Vec<MenuNode> = serde_json::from_str(&content)?;
        Self::new(items)
    }

    /// Top-level entries.
    pub fn items(&self) -> &[MenuNode] {
        &self.items
    }

    /// Entries of the submenu reached by following `path` (indices at each
    /// level). An empty path is the top level.
    pub fn level(&self, path: &[usize]) -> Option<&[MenuNode]> {
        let mut level: &[MenuNode] = &self.items;
        for &index in path {
            match level.get(index)? {
                MenuNode::Submenu { items, .. } => level = items,
                MenuNode::Item(_) => return None,
            }
        }
        Some(level)
    }

    /// Hierarchy of the item reached by `path`.
    ///
    /// Returns `None` if `path` is empty, out of range, or ends on a submenu.
    pub fn hierarchy(&self, path: &[usize]) -> Option<Vec<String>> {
        let (&last, parents) = path.split_last()?;
        let mut hierarchy = Vec::with_capacity(path.len());
        let mut level: &[MenuNode] = &self.items;

        for &index in parents {
            match level.get(index)? {
                MenuNode::Submenu { title, items } => {
                    hierarchy.push(title.clone());
                    level = items;
                }
                MenuNode::Item(_) => return None,
            }
        }

        match level.get(last)? {
            MenuNode::Item(label) => {
                hierarchy.push(label.clone());
                Some(hierarchy)
            }
            MenuNode::Submenu { .. } => None,
        }
    }

    /// Hierarchies of every item, depth first.
    pub fn leaves(&self) -> Vec<Vec<String>> {
        let mut out = Vec::new();
        collect_leaves(&self.items, &mut Vec::new(), &mut out);
        out
    }
}

impl Default for PopupMenu {
    fn default() -> Self {
        Self {
            items: default_menu(),
        }
    }
}

fn validate(items: &[MenuNode]) -> RecordwatchResult<()> {
    for node in items {
        if node.label().trim().is_empty() {
            return Err(RecordwatchError::Menu("menu entry with empty label".to_string()));
        }
        if let MenuNode::Submenu { items, .. } = node {
            validate(items)?;
        }
    }
    Ok(())
}

fn collect_leaves(items: &[MenuNode], prefix: &mut Vec<String>, out: &mut Vec<Vec<String>>) {
    for node in items {
        match node {
            MenuNode::Item(label) => {
                let mut hierarchy = prefix.clone();
                hierarchy.push(label.clone());
                out.push(hierarchy);
            }
            MenuNode::Submenu { title, items } => {
                prefix.push(title.clone());
                collect_leaves(items, prefix, out);
                prefix.pop();
            }
        }
    }
}
