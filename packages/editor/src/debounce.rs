//! # Trailing-edge Debouncer
//!
//! Rapid edits to the same target are folded into one pending value which is
//! released only after the target has been quiet for the interval. Time is
//! supplied by the caller in milliseconds, so the host's event clock drives
//! it.

use resume_document::StylePatch;

/// Default quiet interval for style controls
pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// Values that can absorb a newer value of the same kind
pub trait Coalesce {
    fn coalesce(&mut self, newer: Self);
}

impl Coalesce for StylePatch {
    fn coalesce(&mut self, newer: Self) {
        self.merge(newer);
    }
}

#[derive(Debug, Clone)]
struct Pending<K, V> {
    key: K,
    value: V,
    last_push_ms: u64,
}

/// Per-key trailing-edge debouncer
#[derive(Debug, Clone)]
pub struct Debouncer<K, V> {
    interval_ms: u64,
    pending: Vec<Pending<K, V>>,
}

impl<K: PartialEq, V: Coalesce> Debouncer<K, V> {
    pub fn new(interval_ms: u64) -> Self {
        Self {
            interval_ms,
            pending: Vec::new(),
        }
    }

    pub fn interval_ms(&self) -> u64 {
        self.interval_ms
    }

    /// Queue a value; an existing entry for `key` absorbs it and restarts its timer
    pub fn push(&mut self, key: K, value: V, now_ms: u64) {
        if let Some(entry) = self.pending.iter_mut().find(|entry| entry.key == key) {
            entry.value.coalesce(value);
            entry.last_push_ms = now_ms;
        } else {
            self.pending.push(Pending {
                key,
                value,
                last_push_ms: now_ms,
            });
        }
    }

    /// Remove and return entries that have been quiet for the full interval
    pub fn drain_due(&mut self, now_ms: u64) -> Vec<(K, V)> {
        let interval = self.interval_ms;
        let (due, waiting): (Vec<_>, Vec<_>) = std::mem::take(&mut self.pending)
            .into_iter()
            .partition(|entry| now_ms.saturating_sub(entry.last_push_ms) >= interval);

        self.pending = waiting;
        due.into_iter()
            .map(|entry| (entry.key, entry.value))
            .collect()
    }

    /// Remove and return every pending entry regardless of timing
    pub fn drain_all(&mut self) -> Vec<(K, V)> {
        std::mem::take(&mut self.pending)
            .into_iter()
            .map(|entry| (entry.key, entry.value))
            .collect()
    }

    /// Earliest time at which some entry becomes due
    pub fn next_deadline(&self) -> Option<u64> {
        self.pending
            .iter()
            .map(|entry| entry.last_push_ms + self.interval_ms)
            .min()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<K: PartialEq, V: Coalesce> Default for Debouncer<K, V> {
    fn default() -> Self {
        Self::new(DEFAULT_DEBOUNCE_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_document::{FontStyle, FontWeight};

    #[test]
    fn test_nothing_due_before_interval() {
        let mut debouncer: Debouncer<&str, StylePatch> = Debouncer::default();
        debouncer.push("title", StylePatch::bold(true), 1_000);

        assert!(debouncer.drain_due(1_299).is_empty());
        assert_eq!(debouncer.pending_count(), 1);
        assert_eq!(debouncer.next_deadline(), Some(1_300));
    }

    #[test]
    fn test_rapid_pushes_coalesce_and_restart_timer() {
        let mut debouncer: Debouncer<&str, StylePatch> = Debouncer::new(300);
        debouncer.push("title", StylePatch::bold(true), 0);
        debouncer.push("title", StylePatch::italic(true), 200);

        assert!(debouncer.drain_due(300).is_empty());

        let due = debouncer.drain_due(500);
        assert_eq!(due.len(), 1);
        let (_, patch) = &due[0];
        assert_eq!(patch.font_weight, Some(FontWeight::Bold));
        assert_eq!(patch.font_style, Some(FontStyle::Italic));
        assert!(debouncer.is_idle());
    }

    #[test]
    fn test_keys_are_independent() {
        let mut debouncer: Debouncer<&str, StylePatch> = Debouncer::new(300);
        debouncer.push("title", StylePatch::bold(true), 0);
        debouncer.push("details", StylePatch::italic(true), 250);

        let due = debouncer.drain_due(300);
        assert_eq!(due.len(), 1);
        assert_eq!(due[0].0, "title");
        assert_eq!(debouncer.pending_count(), 1);
    }

    #[test]
    fn test_drain_all_keeps_first_push_order() {
        let mut debouncer: Debouncer<&str, StylePatch> = Debouncer::new(300);
        debouncer.push("b", StylePatch::bold(true), 0);
        debouncer.push("a", StylePatch::bold(true), 10);
        debouncer.push("b", StylePatch::italic(true), 20);

        let keys: Vec<&str> = debouncer.drain_all().into_iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["b", "a"]);
    }
}
