//! # Editor Session
//!
//! The controller for the WYSIWYG flow. It owns the live document and
//! replaces it wholesale on every command.
//!
//! An `Editor` tracks:
//! - the live document and its snapshot history
//! - the section opened in the edit panel
//! - style edits waiting out their debounce interval
//! - the last inline image error

use resume_document::{
    Document, ImagePolicy, ImagePosition, ImageUpload, ItemPatch, NaiveDate, Section,
    SectionKind, SectionPatch, StylePatch,
};
use serde::{Deserialize, Serialize};

use crate::commands::Command;
use crate::debounce::{Debouncer, DEFAULT_DEBOUNCE_MS};
use crate::errors::EditorError;
use crate::history::History;
use crate::reducer::reduce;
use resume_document::IdGenerator;

/// Which of an item's four text regions a style applies to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemStyleField {
    Title,
    Subheading,
    Details,
    Date,
}

/// Text region addressed by a style control
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StyleTarget {
    SectionHeading {
        section_id: String,
    },
    Item {
        section_id: String,
        item_id: String,
        field: ItemStyleField,
    },
}

/// Tunables for an editing session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EditorOptions {
    /// Maximum snapshots kept (0 = unlimited)
    pub history_limit: usize,
    /// Quiet interval before a style edit is committed
    pub style_debounce_ms: u64,
    pub image_policy: ImagePolicy,
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            history_limit: 0,
            style_debounce_ms: DEFAULT_DEBOUNCE_MS,
            image_policy: ImagePolicy::unlimited(),
        }
    }
}

/// Single-user editing session
#[derive(Debug, Clone)]
pub struct Editor {
    document: Document,
    history: History,
    ids: IdGenerator,
    selected_section: Option<String>,
    styles: Debouncer<StyleTarget, StylePatch>,
    image_policy: ImagePolicy,
    image_error: Option<String>,
}

impl Editor {
    /// Start editing `document`; new ids count up from `id_seed`
    pub fn new(document: Document, id_seed: u64) -> Self {
        Self::with_options(document, id_seed, EditorOptions::default())
    }

    pub fn with_options(document: Document, id_seed: u64, options: EditorOptions) -> Self {
        Self {
            history: History::with_max_levels(document.clone(), options.history_limit),
            document,
            ids: IdGenerator::from_seed(id_seed),
            selected_section: None,
            styles: Debouncer::new(options.style_debounce_ms),
            image_policy: options.image_policy,
            image_error: None,
        }
    }

    /// Start from the seed template
    pub fn seeded(today: NaiveDate, id_seed: u64) -> Self {
        Self::new(Document::seeded(today), id_seed)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    /// Apply a command and record the result; returns whether history advanced
    pub fn dispatch(&mut self, command: Command) -> bool {
        if let Err(reason) = command.validate(&self.document) {
            tracing::trace!(command = command.name(), %reason, "command is a no-op");
        }

        self.document = reduce(&self.document, &command);
        let recorded = self.history.record(&self.document);

        tracing::debug!(
            command = command.name(),
            recorded,
            undo_levels = self.history.undo_levels(),
            "dispatched command"
        );
        recorded
    }

    /// Like `dispatch`, but refuse commands whose targets do not exist
    pub fn try_dispatch(&mut self, command: Command) -> Result<bool, EditorError> {
        command.validate(&self.document)?;
        Ok(self.dispatch(command))
    }

    /// Dispatch a JSON-encoded command
    pub fn dispatch_json(&mut self, json: &str) -> Result<bool, EditorError> {
        let command: Command = serde_json::from_str(json)?;
        Ok(self.dispatch(command))
    }

    pub fn undo(&mut self) -> bool {
        let Some(snapshot) = self.history.undo().cloned() else {
            return false;
        };
        self.replace_document(snapshot);
        tracing::debug!(cursor = self.history.cursor(), "undo");
        true
    }

    pub fn redo(&mut self) -> bool {
        let Some(snapshot) = self.history.redo().cloned() else {
            return false;
        };
        self.replace_document(snapshot);
        tracing::debug!(cursor = self.history.cursor(), "redo");
        true
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Swap in a history snapshot without recording it again
    fn replace_document(&mut self, snapshot: Document) {
        self.document = reduce(
            &self.document,
            &Command::ReplaceDocument {
                document: Box::new(snapshot),
            },
        );
    }

    pub fn update_section(&mut self, section_id: &str, updates: SectionPatch) -> bool {
        self.dispatch(Command::UpdateSection {
            section_id: section_id.to_string(),
            updates,
        })
    }

    /// Append a blank item; returns its id, or `None` if the section is missing
    pub fn add_item(&mut self, section_id: &str) -> Option<String> {
        self.document.find_section(section_id)?;

        let item_id = self.mint_id();
        self.dispatch(Command::AddItem {
            section_id: section_id.to_string(),
            item_id: item_id.clone(),
        });
        Some(item_id)
    }

    pub fn update_item(&mut self, section_id: &str, item_id: &str, updates: ItemPatch) -> bool {
        self.dispatch(Command::UpdateItem {
            section_id: section_id.to_string(),
            item_id: item_id.to_string(),
            updates,
        })
    }

    pub fn delete_item(&mut self, section_id: &str, item_id: &str) -> bool {
        self.dispatch(Command::DeleteItem {
            section_id: section_id.to_string(),
            item_id: item_id.to_string(),
        })
    }

    /// Drop an item at a new position (drag end or up/down control)
    pub fn move_item(&mut self, section_id: &str, from_index: usize, to_index: usize) -> bool {
        self.dispatch(Command::MoveItem {
            section_id: section_id.to_string(),
            from_index,
            to_index,
        })
    }

    /// Append an empty section; returns its id
    pub fn add_section(&mut self, kind: SectionKind) -> String {
        let section_id = self.mint_id();
        self.dispatch(Command::AddSection {
            kind,
            section_id: section_id.clone(),
        });
        section_id
    }

    /// Next generated id not carried by the live document or any snapshot
    fn mint_id(&mut self) -> String {
        loop {
            let id = self.ids.new_id();
            let taken = self.document.uses_id(&id)
                || self.history.snapshots().iter().any(|doc| doc.uses_id(&id));
            if !taken {
                return id;
            }
        }
    }

    pub fn remove_section(&mut self, section_id: &str) -> bool {
        self.dispatch(Command::RemoveSection {
            section_id: section_id.to_string(),
        })
    }

    pub fn move_section(&mut self, from_index: usize, to_index: usize) -> bool {
        self.dispatch(Command::MoveSection {
            from_index,
            to_index,
        })
    }

    pub fn set_profile_image(&mut self, image: Option<String>, position: ImagePosition) -> bool {
        self.dispatch(Command::SetProfileImage { image, position })
    }

    pub fn set_image_position(&mut self, position: ImagePosition) -> bool {
        let image = self.document.profile_image.clone();
        self.set_profile_image(image, position)
    }

    pub fn remove_profile_image(&mut self) -> bool {
        let position = self.document.profile_image_position;
        self.set_profile_image(None, position)
    }

    /// Validate and embed an uploaded picture, keeping the current position.
    ///
    /// A rejected upload commits nothing and leaves its message in `image_error`.
    pub fn upload_profile_image(&mut self, upload: &ImageUpload) -> Result<(), EditorError> {
        match self.image_policy.to_data_uri(upload) {
            Ok(data_uri) => {
                self.image_error = None;
                let position = self.document.profile_image_position;
                self.set_profile_image(Some(data_uri), position);
                Ok(())
            }
            Err(err) => {
                tracing::warn!(file = %upload.file_name, size = upload.size(), %err, "image rejected");
                self.image_error = Some(err.to_string());
                Err(err.into())
            }
        }
    }

    pub fn image_error(&self) -> Option<&str> {
        self.image_error.as_deref()
    }

    /// Open the edit panel on a section (click in the preview)
    pub fn select_section(&mut self, section_id: &str) -> bool {
        if self.document.find_section(section_id).is_none() {
            return false;
        }
        self.selected_section = Some(section_id.to_string());
        true
    }

    pub fn close_panel(&mut self) {
        self.selected_section = None;
    }

    /// Section shown in the edit panel, looked up in the live document
    pub fn selected_section(&self) -> Option<&Section> {
        self.selected_section
            .as_deref()
            .and_then(|id| self.document.find_section(id))
    }

    /// Queue a style edit; it is committed once the target has been quiet
    pub fn queue_style_change(&mut self, target: StyleTarget, patch: StylePatch, now_ms: u64) {
        self.styles.push(target, patch, now_ms);
    }

    /// Commit style edits whose debounce interval has elapsed
    pub fn flush_due_styles(&mut self, now_ms: u64) -> usize {
        let due = self.styles.drain_due(now_ms);
        self.commit_styles(due)
    }

    /// Commit every queued style edit now
    pub fn flush_all_styles(&mut self) -> usize {
        let pending = self.styles.drain_all();
        self.commit_styles(pending)
    }

    pub fn pending_style_changes(&self) -> usize {
        self.styles.pending_count()
    }

    /// When the host should next call `flush_due_styles`
    pub fn next_style_deadline(&self) -> Option<u64> {
        self.styles.next_deadline()
    }

    fn commit_styles(&mut self, entries: Vec<(StyleTarget, StylePatch)>) -> usize {
        let mut committed = 0;
        for (target, patch) in entries {
            match self.style_command(&target, &patch) {
                Some(command) => {
                    if self.dispatch(command) {
                        committed += 1;
                    }
                }
                None => tracing::trace!(?target, "style target disappeared before commit"),
            }
        }
        committed
    }

    fn style_command(&self, target: &StyleTarget, patch: &StylePatch) -> Option<Command> {
        match target {
            StyleTarget::SectionHeading { section_id } => {
                let section = self.document.find_section(section_id)?;
                Some(Command::UpdateSection {
                    section_id: section_id.clone(),
                    updates: SectionPatch::heading_style(section.heading_style.patched(patch)),
                })
            }
            StyleTarget::Item {
                section_id,
                item_id,
                field,
            } => {
                let item = self.document.find_item(section_id, item_id)?;
                let mut updates = ItemPatch::default();
                match field {
                    ItemStyleField::Title => {
                        updates.title_style = Some(item.title_style.patched(patch))
                    }
                    ItemStyleField::Subheading => {
                        updates.subheading_style = Some(item.subheading_style.patched(patch))
                    }
                    ItemStyleField::Details => {
                        updates.details_style = Some(item.details_style.patched(patch))
                    }
                    ItemStyleField::Date => {
                        updates.date_style = Some(item.date_style.patched(patch))
                    }
                }
                Some(Command::UpdateItem {
                    section_id: section_id.clone(),
                    item_id: item_id.clone(),
                    updates,
                })
            }
        }
    }
}
