//! Terminal presentation of the popup menu using dialoguer.

use dialoguer::{theme::ColorfulTheme, Select};

use super::{MenuNode, PopupMenu};
use crate::{RecordwatchError, RecordwatchResult};

/// Shows `menu` and returns the hierarchy of the picked item.
///
/// Submenus open in place; the last entry of each level goes back (or
/// cancels at the top). Escape cancels. Returns `None` when cancelled.
pub fn run_popup_menu(menu: &PopupMenu) -> RecordwatchResult<Option<Vec<String>>> {
    let theme = ColorfulTheme::default();
    let mut path: Vec<usize> = Vec::new();

    loop {
        let level = menu
            .level(&path)
            .ok_or_else(|| RecordwatchError::Menu("menu path out of range".to_string()))?;

        let mut labels: Vec<String> = level
            .iter()
            .map(|node| match node {
                MenuNode::Item(label) => label.clone(),
                MenuNode::Submenu { title, .. } => format!("{} ▸", title),
            })
            .collect();
        labels.push(if path.is_empty() { "Cancel" } else { "Back" }.to_string());

        let selection = Select::with_theme(&theme)
            .with_prompt(prompt(menu, &path))
            .items(&labels)
            .default(0)
            .interact_opt()?;

        match selection {
            None => return Ok(None),
            Some(index) if index == level.len() => {
                if path.pop().is_none() {
                    return Ok(None);
                }
            }
            Some(index) => {
                path.push(index);
                if let Some(MenuNode::Item(_)) = level.get(index) {
                    let hierarchy = menu.hierarchy(&path);
                    tracing::debug!(?hierarchy, "Menu item selected");
                    return Ok(hierarchy);
                }
            }
        }
    }
}

/// Breadcrumb of the open submenus.
fn prompt(menu: &PopupMenu, path: &[usize]) -> String {
    let mut titles = vec!["Menu".to_string()];
    for depth in 0..path.len() {
        if let Some(node) = menu
            .level(&path[..depth])
            .and_then(|level| level.get(path[depth]))
        {
            titles.push(node.label().to_string());
        }
    }
    titles.join(" ▸ ")
}
