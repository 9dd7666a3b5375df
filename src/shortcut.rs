//! Notepad shortcut expansion.
//!
//! Typing a shortcut word followed by a space (e.g. `"call co "`) replaces the
//! word with the most recent record of the mapped record type
//! (`"call Jane Doe "`). Trailing punctuation typed after the shortcut is
//! kept: `"email co, "` becomes `"email Jane Doe, "`.

use std::collections::BTreeMap;

/// Expands the second-to-last word of `text`.
///
/// `text` is split from the right on single spaces, at most twice. The word
/// before the last piece is stripped of ASCII punctuation and looked up in
/// `shortcuts`; `latest` returns the most recent record of the mapped type.
/// Returns `None` when nothing was replaced.
pub fn expand<F>(text: &str, shortcuts: &BTreeMap<String, String>, latest: F) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    let mut words: Vec<&str> = text.rsplitn(3, ' ').collect();
    words.reverse();

    if words.len() < 2 {
        return None;
    }

    let target = words.len() - 2;
    let word = words[target];
    let clean: String = word.chars().filter(|c| !c.is_ascii_punctuation()).collect();
    let remainder: String = word.chars().skip(clean.chars().count()).collect();

    tracing::debug!(word = %clean, "Checking word for shortcut match");
    let category = shortcuts.get(&clean)?;
    let mut replacement = latest(category)?;
    replacement.push_str(&remainder);
    tracing::debug!(%replacement, category = %category, "Expanded shortcut");

    let mut expanded: Vec<&str> = words;
    expanded[target] = &replacement;
    Some(expanded.join(" "))
}
