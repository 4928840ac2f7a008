//! # Undo/Redo History
//!
//! Linear history of full document snapshots with a single cursor.
//!
//! ## Design
//!
//! - The first snapshot is the document the editor started with
//! - Recording a document that differs (deep equality) from the snapshot at
//!   the cursor truncates everything after the cursor, appends, and moves
//!   the cursor to the new tail
//! - Recording an equal document is ignored, so no-op commands never create
//!   undo steps
//! - Undo/redo only move the cursor; the caller swaps the live document
//!
//! ## Example
//!
//! ```rust,ignore
//! let mut history = History::new(doc.clone());
//!
//! let next = reduce(&doc, &command);
//! history.record(&next);
//!
//! let previous = history.undo().cloned();
//! let again = history.redo().cloned();
//! ```

use resume_document::Document;

/// Snapshot history for one editing session
#[derive(Debug, Clone)]
pub struct History {
    /// Committed snapshots, oldest first
    snapshots: Vec<Document>,

    /// Index of the snapshot currently displayed
    cursor: usize,

    /// Maximum number of snapshots kept (0 = unlimited)
    max_levels: usize,
}

impl History {
    /// Create an unlimited history starting at `initial`
    pub fn new(initial: Document) -> Self {
        Self::with_max_levels(initial, 0)
    }

    /// Create a history that keeps at most `max_levels` snapshots
    pub fn with_max_levels(initial: Document, max_levels: usize) -> Self {
        Self {
            snapshots: vec![initial],
            cursor: 0,
            max_levels,
        }
    }

    /// Record a committed document; returns whether a snapshot was added
    pub fn record(&mut self, doc: &Document) -> bool {
        if self.snapshots.get(self.cursor) == Some(doc) {
            return false;
        }

        // A new edit invalidates the redo branch
        self.snapshots.truncate(self.cursor + 1);
        self.snapshots.push(doc.clone());
        self.cursor = self.snapshots.len() - 1;

        if self.max_levels > 0 && self.snapshots.len() > self.max_levels {
            let overflow = self.snapshots.len() - self.max_levels;
            self.snapshots.drain(..overflow);
            self.cursor -= overflow;
        }

        true
    }

    /// Step back one snapshot
    pub fn undo(&mut self) -> Option<&Document> {
        if !self.can_undo() {
            return None;
        }
        self.cursor -= 1;
        self.snapshots.get(self.cursor)
    }

    /// Step forward one snapshot
    pub fn redo(&mut self) -> Option<&Document> {
        if !self.can_redo() {
            return None;
        }
        self.cursor += 1;
        self.snapshots.get(self.cursor)
    }

    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    pub fn can_redo(&self) -> bool {
        self.cursor + 1 < self.snapshots.len()
    }

    /// Number of undo steps available
    pub fn undo_levels(&self) -> usize {
        self.cursor
    }

    /// Number of redo steps available
    pub fn redo_levels(&self) -> usize {
        self.snapshots.len() - self.cursor - 1
    }

    /// Snapshot at the cursor
    pub fn current(&self) -> &Document {
        &self.snapshots[self.cursor]
    }

    /// Every retained snapshot, oldest first
    pub fn snapshots(&self) -> &[Document] {
        &self.snapshots
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Forget every snapshot except the current one
    pub fn clear(&mut self) {
        let current = self.snapshots.swap_remove(self.cursor);
        self.snapshots = vec![current];
        self.cursor = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{reduce, Command};
    use resume_document::{NaiveDate, SectionPatch};

    fn doc() -> Document {
        Document::seeded(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    fn retitle(doc: &Document, title: &str) -> Document {
        reduce(
            doc,
            &Command::UpdateSection {
                section_id: "1".to_string(),
                updates: SectionPatch::title(title),
            },
        )
    }

    #[test]
    fn test_history_creation() {
        let history = History::new(doc());
        assert_eq!(history.undo_levels(), 0);
        assert_eq!(history.redo_levels(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_record_undo_redo() {
        let start = doc();
        let mut history = History::new(start.clone());

        let edited = retitle(&start, "About Me");
        assert!(history.record(&edited));
        assert_eq!(history.undo_levels(), 1);

        assert_eq!(history.undo(), Some(&start));
        assert!(history.can_redo());
        assert_eq!(history.redo(), Some(&edited));
        assert!(!history.can_redo());
    }

    #[test]
    fn test_equal_document_is_not_recorded() {
        let start = doc();
        let mut history = History::new(start.clone());

        assert!(!history.record(&start.clone()));
        assert_eq!(history.len(), 1);
    }

    #[test]
    fn test_bounds_are_noops() {
        let mut history = History::new(doc());
        assert_eq!(history.undo(), None);
        assert_eq!(history.redo(), None);
        assert_eq!(history.cursor(), 0);
    }

    #[test]
    fn test_new_record_clears_redo() {
        let start = doc();
        let mut history = History::new(start.clone());

        let a = retitle(&start, "A");
        let b = retitle(&a, "B");
        history.record(&a);
        history.record(&b);
        history.undo();
        history.undo();
        assert_eq!(history.redo_levels(), 2);

        let c = retitle(&start, "C");
        history.record(&c);
        assert_eq!(history.redo_levels(), 0);
        assert_eq!(history.redo(), None);
        assert_eq!(history.current(), &c);
    }

    #[test]
    fn test_max_levels_enforced() {
        let mut current = doc();
        let mut history = History::with_max_levels(current.clone(), 3);

        for i in 0..5 {
            current = retitle(&current, &format!("Title {}", i));
            history.record(&current);
        }

        assert_eq!(history.len(), 3);
        assert_eq!(history.undo_levels(), 2);
        assert_eq!(history.current(), &current);
    }

    #[test]
    fn test_clear_keeps_current() {
        let start = doc();
        let mut history = History::new(start.clone());
        let edited = retitle(&start, "X");
        history.record(&edited);
        history.undo();

        history.clear();
        assert_eq!(history.len(), 1);
        assert_eq!(history.current(), &start);
    }
}
