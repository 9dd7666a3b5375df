//! Integration tests for the record tracker and its caches.

use std::time::Duration;

use recordwatch::actions::{ActionOutcome, RecordAction};
use recordwatch::cache::{IgnoreGate, RecordCache, SharedCapacity};
use recordwatch::tracker::UpdateSource;
use recordwatch::types::config::Config;
use recordwatch::watch::{Poller, ScriptedClipboard, ScriptedTitles};
use recordwatch::RecordTracker;

fn title(record: &str, category: &str) -> String {
    format!("{} | {} | Salesforce - Google Chrome", record, category)
}

// Record cache properties
mod record_cache_tests {
    use super::*;

    #[test]
    fn test_head_after_every_call() {
        let mut cache = RecordCache::with_capacity("Contact", 4);
        for value in ["a", "b", "c", "a", "d", "e", "b", "b"] {
            cache.add_or_touch(value, None);
            assert_eq!(cache.head(), Some(value));
            assert!(cache.len() <= 4);
        }
    }

    #[test]
    fn test_evicted_key_is_always_the_tail() {
        let mut cache = RecordCache::with_capacity("Case", 3);
        let sequence = ["1", "2", "3", "1", "4", "2", "5", "3", "1"];

        for value in sequence {
            let before = cache.keys();
            cache.add_or_touch(value, None);
            let after = cache.keys();

            let evicted: Vec<&String> = before.iter().filter(|k| !after.contains(k)).collect();
            assert!(evicted.len() <= 1);
            if let Some(key) = evicted.first() {
                assert_eq!(Some(*key), before.last());
            }
        }
    }

    #[test]
    fn test_shared_capacity_change_is_lazy() {
        let capacity = SharedCapacity::new(10);
        let mut cache = RecordCache::new("Invoice", capacity.clone());
        for i in 0..10 {
            cache.add_or_touch(&format!("INV-{}", i), None);
        }

        capacity.set(3);
        assert_eq!(cache.len(), 10);
        assert_eq!(cache.capacity(), 3);

        cache.add_or_touch("INV-new", None);
        assert_eq!(cache.keys(), vec!["INV-new", "INV-9", "INV-8"]);
    }
}

// Ignore gate
mod ignore_gate_tests {
    use super::*;

    #[test]
    fn test_ratchet() {
        let mut gate = IgnoreGate::new();

        for _ in 0..3 {
            assert!(gate.should_ignore("Invoices"));
        }
        assert!(!gate.should_ignore("Invoice"));
        gate.mark("Invoice");
        assert!(gate.should_ignore("Invoice"));
    }
}

// Tracker fed by titles and clipboard
mod tracker_tests {
    use super::*;

    #[test]
    fn test_categories_are_independent() {
        let mut tracker = RecordTracker::default();

        tracker.observe_title(&title("Jane Doe", "Contact"));
        tracker.observe_title(&title("00001001", "Case"));
        tracker.observe_title(&title("John Roe", "Contact"));

        assert_eq!(tracker.records("Contact"), vec!["John Roe", "Jane Doe"]);
        assert_eq!(tracker.records("Case"), vec!["00001001"]);
        assert_eq!(tracker.categories(), vec!["Case", "Contact"]);
    }

    #[test]
    fn test_configured_ignore_list() {
        let mut config = Config::default_config();
        config.records.ignored_categories = vec!["Report".to_string()];
        let mut tracker = RecordTracker::from_config(&config);

        assert!(tracker.observe_title(&title("Q3", "Report")).is_none());
        assert!(tracker.cache("Report").is_none());
    }

    #[test]
    fn test_plural_heuristic_can_be_disabled() {
        let mut config = Config::default_config();
        config.records.ignore_plural = false;
        let mut tracker = RecordTracker::from_config(&config);

        let update = tracker.observe_title(&title("Acme", "Business")).unwrap();
        assert_eq!(update.category, "Business");
    }

    #[test]
    fn test_shortcut_uses_latest_record() {
        let mut tracker = RecordTracker::default();
        tracker.observe_title(&title("00001001", "Case"));
        tracker.observe_title(&title("00001002", "Case"));

        assert_eq!(
            tracker.expand_shortcut("see cn ").as_deref(),
            Some("see 00001002 ")
        );
        assert!(tracker.expand_shortcut("see co ").is_none());
    }

    #[test]
    fn test_action_runs_only_for_new_records() {
        use std::sync::atomic::{AtomicUsize, Ordering};
        use std::sync::Arc;

        struct Counting(Arc<AtomicUsize>);

        impl RecordAction for Counting {
            fn name(&self) -> &str {
                "counting"
            }

            fn category(&self) -> &str {
                "Contact"
            }

            fn on_new_record(&self, _record: &str) -> ActionOutcome {
                self.0.fetch_add(1, Ordering::SeqCst);
                ActionOutcome::Continue
            }
        }

        let count = Arc::new(AtomicUsize::new(0));
        let mut tracker = RecordTracker::default();
        tracker
            .actions_mut()
            .register(Box::new(Counting(count.clone())));

        tracker.observe_title(&title("Jane Doe", "Contact"));
        tracker.observe_title(&title("John Roe", "Contact"));
        tracker.observe_title(&title("Jane Doe", "Contact"));

        assert_eq!(count.load(Ordering::SeqCst), 2);
    }
}

// Poll loop
mod poller_tests {
    use super::*;

    #[tokio::test]
    async fn test_poll_session() {
        let mut tracker = RecordTracker::default();
        let mut poller = Poller::new(
            Some(Box::new(ScriptedClipboard::new([
                "GR-100", "GR-100", "note", "GR-200",
            ]))),
            Some(Box::new(ScriptedTitles::new([
                title("Jane Doe", "Contact"),
                title("Jane Doe", "Contact"),
                "Inbox - Mail".to_string(),
                title("John Roe", "Contact"),
            ]))),
            Duration::from_millis(1),
        );

        let mut updates = Vec::new();
        for _ in 0..4 {
            updates.extend(poller.tick(&mut tracker).await);
        }

        let sources: Vec<UpdateSource> = updates.iter().map(|u| u.source).collect();
        assert_eq!(
            sources,
            vec![
                UpdateSource::Clipboard,
                UpdateSource::Title,
                UpdateSource::Clipboard,
                UpdateSource::Title,
            ]
        );
        assert_eq!(
            tracker.clipboard().bucket("GR-").unwrap().keys(),
            vec!["GR-200", "GR-100"]
        );
        assert_eq!(tracker.records("Contact"), vec!["John Roe", "Jane Doe"]);
    }
}
