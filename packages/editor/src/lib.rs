//! # Resume Editor
//!
//! Core editing engine for the WYSIWYG resume flow.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ document: sections → items → styles         │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ editor: commands + history                  │
//! │  - Pure reducer (document, command) → doc   │
//! │  - Linear snapshot history with a cursor    │
//! │  - Debounced style commits                  │
//! │  - Edit panel selection                     │
//! └─────────────────────────────────────────────┘
//!                     ↓
//! ┌─────────────────────────────────────────────┐
//! │ preview: document → HTML                    │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Core Principles
//!
//! 1. **Document values are immutable**: every command yields a new document
//! 2. **Deep equality gates history**: no-op commands leave no undo step
//! 3. **Redo is linear**: a fresh edit after undo discards the redo branch
//! 4. **Missing targets are no-ops**: commands never fail the session
//!
//! ## Usage
//!
//! ```rust,ignore
//! use resume_editor::{Editor, Command};
//!
//! let mut editor = Editor::seeded(today, now_ms);
//!
//! let item_id = editor.add_item("3").unwrap();
//! editor.move_item("3", 1, 0);
//!
//! editor.undo();
//! editor.redo();
//! ```

mod commands;
mod debounce;
mod errors;
mod history;
mod reducer;
mod session;

pub use commands::{Command, CommandError};
pub use debounce::{Coalesce, Debouncer, DEFAULT_DEBOUNCE_MS};
pub use errors::EditorError;
pub use history::History;
pub use reducer::{reduce, reorder};
pub use session::{Editor, EditorOptions, ItemStyleField, StyleTarget};

// Re-export the model for convenience
pub use resume_document as document;
