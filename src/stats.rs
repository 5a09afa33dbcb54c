//! Usage statistics for mouse-triggered commands.
//!
//! Two independent counters: shortcut text for bound commands, command id
//! for unbound ones. Counts are monotonic for the process lifetime and are
//! never persisted or evicted; cardinality is bounded by the host's command
//! registry, so unbounded growth is accepted.

use parking_lot::Mutex;
use std::collections::HashMap;

use crate::command::CommandId;

/// Thread-safe usage counters, safe against concurrent increments from the
/// event-dispatch path.
#[derive(Debug, Default)]
pub struct UsageStats {
    shortcut_counts: Mutex<HashMap<String, u64>>,
    unbound_counts: Mutex<HashMap<CommandId, u64>>,
}

impl UsageStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one mouse use of a command that has the given shortcut.
    /// Returns the new count.
    pub fn record_shortcut_use(&self, shortcut_text: &str) -> u64 {
        let mut counts = self.shortcut_counts.lock();
        let count = counts.entry(shortcut_text.to_string()).or_insert(0);
        *count += 1;
        *count
    }

    /// Record one mouse use of a command with no shortcut. Returns the new
    /// count.
    pub fn record_unbound_use(&self, command: &CommandId) -> u64 {
        let mut counts = self.unbound_counts.lock();
        let count = counts.entry(command.clone()).or_insert(0);
        *count += 1;
        *count
    }

    pub fn shortcut_count(&self, shortcut_text: &str) -> u64 {
        self.shortcut_counts
            .lock()
            .get(shortcut_text)
            .copied()
            .unwrap_or(0)
    }

    pub fn unbound_count(&self, command: &CommandId) -> u64 {
        self.unbound_counts.lock().get(command).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    #[test]
    fn counts_start_at_one_on_first_use() {
        let stats = UsageStats::new();
        assert_eq!(stats.record_shortcut_use("Ctrl+C"), 1);
        assert_eq!(stats.record_shortcut_use("Ctrl+C"), 2);
        assert_eq!(stats.record_shortcut_use("Ctrl+V"), 1);
    }

    #[test]
    fn shortcut_and_unbound_counters_are_independent() {
        let stats = UsageStats::new();
        stats.record_shortcut_use("Ctrl+C");
        stats.record_unbound_use(&CommandId::new("editor.copy"));

        assert_eq!(stats.shortcut_count("Ctrl+C"), 1);
        assert_eq!(stats.unbound_count(&CommandId::new("editor.copy")), 1);
        assert_eq!(stats.shortcut_count("editor.copy"), 0);
    }

    #[test]
    fn unknown_keys_read_as_zero() {
        let stats = UsageStats::new();
        assert_eq!(stats.shortcut_count("Ctrl+Z"), 0);
        assert_eq!(stats.unbound_count(&CommandId::new("nope")), 0);
    }

    #[test]
    fn concurrent_increments_lose_no_updates() {
        let stats = Arc::new(UsageStats::new());
        let threads: u64 = 8;
        let per_thread: u64 = 250;

        let handles: Vec<_> = (0..threads)
            .map(|_| {
                let stats = Arc::clone(&stats);
                std::thread::spawn(move || {
                    let id = CommandId::new("refactor.rename");
                    for _ in 0..per_thread {
                        stats.record_shortcut_use("Shift+F6");
                        stats.record_unbound_use(&id);
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(stats.shortcut_count("Shift+F6"), threads * per_thread);
        assert_eq!(
            stats.unbound_count(&CommandId::new("refactor.rename")),
            threads * per_thread
        );
    }
}
