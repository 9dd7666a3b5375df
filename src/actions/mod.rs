//! Per-record-type actions run when a new record is seen.
//!
//! An action can attach a value to a record before it is stored (for
//! example a contact's email address). Record types without a registered
//! action fall back to [`NoopAction`].

use std::collections::HashMap;

// ═══════════════════════════════════════════════════════════════════════════
// Outcome
// ═══════════════════════════════════════════════════════════════════════════

/// Result of running an action on a new record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Store the record as is.
    #[default]
    Continue,

    /// Store the record with this associated value.
    Associate(String),
}

impl ActionOutcome {
    /// Associated value carried by the outcome.
    pub fn into_associated(self) -> Option<String> {
        match self {
            ActionOutcome::Continue => None,
            ActionOutcome::Associate(value) => Some(value),
        }
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Trait RecordAction
// ═══════════════════════════════════════════════════════════════════════════

/// Strategy run for records of one record type.
pub trait RecordAction: Send + Sync {
    /// Action name, for logs.
    fn name(&self) -> &str;

    /// Record type this action applies to.
    fn category(&self) -> &str;

    /// Called once per record that is not yet cached.
    fn on_new_record(&self, record: &str) -> ActionOutcome;
}

/// Action that does nothing.
#[derive(Debug, Default)]
pub struct NoopAction;

impl RecordAction for NoopAction {
    fn name(&self) -> &str {
        "noop"
    }

    fn category(&self) -> &str {
        "*"
    }

    fn on_new_record(&self, _record: &str) -> ActionOutcome {
        ActionOutcome::Continue
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// Registry
// ═══════════════════════════════════════════════════════════════════════════

/// Actions keyed by record type.
pub struct ActionRegistry {
    actions: HashMap<String, Box<dyn RecordAction>>,
    fallback: NoopAction,
}

impl ActionRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            actions: HashMap::new(),
            fallback: NoopAction,
        }
    }

    /// Registers an action, replacing any previous one for its record type.
    pub fn register(&mut self, action: Box<dyn RecordAction>) {
        let category = action.category().to_string();
        tracing::debug!(
            action_name = action.name(),
            category = %category,
            "Registering record action"
        );

        if let Some(previous) = self.actions.insert(category, action) {
            tracing::debug!(action_name = previous.name(), "Replaced record action");
        }
    }

    /// Action for `category`, or the no-op fallback.
    pub fn for_category(&self, category: &str) -> &dyn RecordAction {
        match self.actions.get(category) {
            Some(action) => action.as_ref(),
            None => &self.fallback,
        }
    }

    /// Runs the action for `category` on a new record.
    pub fn run(&self, category: &str, record: &str) -> ActionOutcome {
        self.for_category(category).on_new_record(record)
    }

    /// Number of registered actions.
    pub fn count(&self) -> usize {
        self.actions.len()
    }
}

impl Default for ActionRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    struct CountingAction {
        category: String,
        count: Arc<AtomicUsize>,
    }

    impl RecordAction for CountingAction {
        fn name(&self) -> &str {
            "counting"
        }

        fn category(&self) -> &str {
            &self.category
        }

        fn on_new_record(&self, record: &str) -> ActionOutcome {
            self.count.fetch_add(1, Ordering::SeqCst);
            ActionOutcome::Associate(format!("{}@example.com", record.to_lowercase()))
        }
    }

    #[test]
    fn test_unknown_category_uses_noop() {
        let registry = ActionRegistry::new();

        assert_eq!(registry.count(), 0);
        assert_eq!(registry.for_category("Invoice").name(), "noop");
        assert_eq!(registry.run("Invoice", "INV-1"), ActionOutcome::Continue);
    }

    #[test]
    fn test_registered_action_runs() {
        let mut registry = ActionRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));
        registry.register(Box::new(CountingAction {
            category: "Contact".to_string(),
            count: count.clone(),
        }));

        let outcome = registry.run("Contact", "Jane");
        assert_eq!(outcome.into_associated().as_deref(), Some("jane@example.com"));
        assert_eq!(registry.run("Case", "001"), ActionOutcome::Continue);
        assert_eq!(count.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_register_replaces() {
        let mut registry = ActionRegistry::new();
        let count = Arc::new(AtomicUsize::new(0));
        for _ in 0..2 {
            registry.register(Box::new(CountingAction {
                category: "Contact".to_string(),
                count: count.clone(),
            }));
        }

        assert_eq!(registry.count(), 1);
    }
}
