//! Scripted sessions for the tracker.
//!
//! A script has one step per line:
//!
//! ```text
//! # comment
//! title Jane Doe | Contact | Salesforce
//! clip CN-1001
//! type call co
//! capacity 5
//! show
//! ```
//!
//! `type` text is taken verbatim after the first space, so a trailing space
//! (which triggers shortcut expansion) is kept.

use serde::Serialize;

use crate::tracker::{RecordTracker, RecordUpdate, TrackerSnapshot};
use crate::{RecordwatchError, RecordwatchResult};

/// One script step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptStep {
    /// Active window title changed.
    Title(String),
    /// Clipboard content changed.
    Clip(String),
    /// Notepad text typed.
    Type(String),
    /// Record limit changed.
    Capacity(usize),
    /// Print every list.
    Show,
}

/// What a step produced.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StepOutput {
    /// A list changed.
    Update(RecordUpdate),
    /// Nothing visible changed.
    Unchanged,
    /// Typed text after shortcut expansion.
    Expanded { text: String },
    /// Typed text left as is.
    NotExpanded { text: String },
    /// Capacity applied after clamping.
    Capacity { capacity: usize },
    /// Current state.
    Snapshot(TrackerSnapshot),
}

/// Parses a script.
pub fn parse_script(script: &str) -> RecordwatchResult<Vec<ScriptStep>> {
    let mut steps = Vec::new();

    for (index, raw) in script.lines().enumerate() {
        let line_no = index + 1;
        let line = raw.trim_start();
        if line.trim().is_empty() || line.starts_with('#') {
            continue;
        }

        let (keyword, rest) = match line.split_once(' ') {
            Some((keyword, rest)) => (keyword, rest),
            None => (line.trim_end(), ""),
        };

        let step = match keyword {
            "title" => ScriptStep::Title(rest.trim_end().to_string()),
            "clip" => ScriptStep::Clip(rest.trim_end().to_string()),
            "type" => ScriptStep::Type(rest.to_string()),
            "capacity" => {
                let value = rest.trim().parse::<usize>().map_err(|e| {
                    RecordwatchError::script(line_no, format!("invalid capacity '{}': {}", rest.trim(), e))
                })?;
                ScriptStep::Capacity(value)
            }
            "show" => ScriptStep::Show,
            other => {
                return Err(RecordwatchError::script(
                    line_no,
                    format!("unknown step '{}'", other),
                ))
            }
        };
        steps.push(step);
    }

    Ok(steps)
}

/// Applies one step to `tracker`.
pub fn apply(tracker: &mut RecordTracker, step: &ScriptStep) -> StepOutput {
    match step {
        ScriptStep::Title(title) => tracker
            .observe_title(title)
            .map_or(StepOutput::Unchanged, StepOutput::Update),
        ScriptStep::Clip(content) => tracker
            .observe_clipboard(content)
            .map_or(StepOutput::Unchanged, StepOutput::Update),
        ScriptStep::Type(text) => match tracker.expand_shortcut(text) {
            Some(expanded) => StepOutput::Expanded { text: expanded },
            None => StepOutput::NotExpanded { text: text.clone() },
        },
        ScriptStep::Capacity(capacity) => StepOutput::Capacity {
            capacity: tracker.set_capacity(*capacity),
        },
        ScriptStep::Show => StepOutput::Snapshot(tracker.snapshot()),
    }
}

/// Parses and runs a whole script.
pub fn run_script(tracker: &mut RecordTracker, script: &str) -> RecordwatchResult<Vec<StepOutput>> {
    let steps = parse_script(script)?;
    Ok(steps.iter().map(|step| apply(tracker, step)).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_steps() {
        let steps = parse_script(
            "# session\n\ntitle A | Case | Salesforce\nclip GR-1\ntype call co \ncapacity 7\nshow\n",
        )
        .unwrap();

        assert_eq!(
            steps,
            vec![
                ScriptStep::Title("A | Case | Salesforce".to_string()),
                ScriptStep::Clip("GR-1".to_string()),
                ScriptStep::Type("call co ".to_string()),
                ScriptStep::Capacity(7),
                ScriptStep::Show,
            ]
        );
    }

    #[test]
    fn test_unknown_step_reports_line() {
        let err = parse_script("show\njump 3\n").unwrap_err();
        assert!(matches!(err, RecordwatchError::Script { line: 2, .. }));
    }

    #[test]
    fn test_bad_capacity() {
        let err = parse_script("capacity ten").unwrap_err();
        assert!(matches!(err, RecordwatchError::Script { line: 1, .. }));
    }

    #[test]
    fn test_run_script_session() {
        let mut tracker = RecordTracker::default();
        let outputs = run_script(
            &mut tracker,
            "title Jane Doe | Contact | Salesforce\n\
             title Jane Doe | Contact | Salesforce\n\
             type email co, \n\
             capacity 1\n",
        )
        .unwrap();

        assert!(matches!(outputs[0], StepOutput::Update(_)));
        assert_eq!(outputs[1], StepOutput::Unchanged);
        assert_eq!(
            outputs[2],
            StepOutput::Expanded {
                text: "email Jane Doe, ".to_string()
            }
        );
        assert_eq!(outputs[3], StepOutput::Capacity { capacity: 5 });
    }

    #[test]
    fn test_output_json_shape() {
        let output = StepOutput::Capacity { capacity: 5 };
        let json = serde_json::to_value(&output).unwrap();

        assert_eq!(json["kind"], "capacity");
        assert_eq!(json["capacity"], 5);
    }
}
