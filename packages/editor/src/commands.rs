//! # Editor Commands
//!
//! The closed set of operations that change a resume document.
//!
//! ## Command Semantics
//!
//! ### Missing targets
//! - A command naming a section or item that does not exist is a no-op
//! - Unrecognised command tags deserialize to `Unknown`, also a no-op
//!
//! ### MoveItem / MoveSection
//! - Remove the element at `from_index`, then insert it at `to_index` in the
//!   shortened list
//! - `to_index` past the end of the shortened list means "append"
//! - `from_index` out of range leaves the list untouched
//!
//! ### Creation
//! - New item and section ids travel inside the command, so applying a
//!   command never depends on hidden state

use resume_document::{Document, ImagePosition, ItemPatch, SectionKind, SectionPatch};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Document-changing command
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    tag = "type",
    rename_all = "SCREAMING_SNAKE_CASE",
    rename_all_fields = "camelCase"
)]
pub enum Command {
    /// Overwrite fields of a section
    UpdateSection {
        section_id: String,
        updates: SectionPatch,
    },

    /// Append a blank item to a section
    AddItem { section_id: String, item_id: String },

    /// Overwrite fields of one item
    UpdateItem {
        section_id: String,
        item_id: String,
        updates: ItemPatch,
    },

    /// Remove one item from a section
    DeleteItem { section_id: String, item_id: String },

    /// Reorder an item within its section
    MoveItem {
        section_id: String,
        from_index: usize,
        to_index: usize,
    },

    /// Append an empty section
    AddSection { kind: SectionKind, section_id: String },

    /// Remove a whole section
    RemoveSection { section_id: String },

    /// Reorder sections
    MoveSection { from_index: usize, to_index: usize },

    /// Swap in a complete document (undo/redo)
    ReplaceDocument { document: Box<Document> },

    /// Set or clear the profile picture and its position
    SetProfileImage {
        #[serde(default)]
        image: Option<String>,
        position: ImagePosition,
    },

    /// Any tag this build does not know
    #[serde(other)]
    Unknown,
}

/// Why a command would leave the document unchanged
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Section not found: {0}")]
    SectionNotFound(String),

    #[error("Item not found: {item_id} in section {section_id}")]
    ItemNotFound { section_id: String, item_id: String },

    #[error("Index {index} out of range for {len} entries")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Unknown command")]
    UnknownCommand,
}

impl Command {
    /// Debug name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Command::UpdateSection { .. } => "UPDATE_SECTION",
            Command::AddItem { .. } => "ADD_ITEM",
            Command::UpdateItem { .. } => "UPDATE_ITEM",
            Command::DeleteItem { .. } => "DELETE_ITEM",
            Command::MoveItem { .. } => "MOVE_ITEM",
            Command::AddSection { .. } => "ADD_SECTION",
            Command::RemoveSection { .. } => "REMOVE_SECTION",
            Command::MoveSection { .. } => "MOVE_SECTION",
            Command::ReplaceDocument { .. } => "REPLACE_DOCUMENT",
            Command::SetProfileImage { .. } => "SET_PROFILE_IMAGE",
            Command::Unknown => "UNKNOWN",
        }
    }

    /// Check the command's targets without applying it
    pub fn validate(&self, doc: &Document) -> Result<(), CommandError> {
        match self {
            Command::UpdateSection { section_id, .. }
            | Command::AddItem { section_id, .. }
            | Command::RemoveSection { section_id } => {
                require_section(doc, section_id)?;
                Ok(())
            }

            Command::UpdateItem {
                section_id,
                item_id,
                ..
            }
            | Command::DeleteItem {
                section_id,
                item_id,
            } => {
                let section = require_section(doc, section_id)?;
                if section.find_item(item_id).is_none() {
                    return Err(CommandError::ItemNotFound {
                        section_id: section_id.clone(),
                        item_id: item_id.clone(),
                    });
                }
                Ok(())
            }

            Command::MoveItem {
                section_id,
                from_index,
                ..
            } => {
                let section = require_section(doc, section_id)?;
                require_index(*from_index, section.content.len())
            }

            Command::MoveSection { from_index, .. } => {
                require_index(*from_index, doc.sections.len())
            }

            Command::AddSection { .. }
            | Command::ReplaceDocument { .. }
            | Command::SetProfileImage { .. } => Ok(()),

            Command::Unknown => Err(CommandError::UnknownCommand),
        }
    }
}

fn require_section<'a>(
    doc: &'a Document,
    section_id: &str,
) -> Result<&'a resume_document::Section, CommandError> {
    doc.find_section(section_id)
        .ok_or_else(|| CommandError::SectionNotFound(section_id.to_string()))
}

fn require_index(index: usize, len: usize) -> Result<(), CommandError> {
    if index < len {
        Ok(())
    } else {
        Err(CommandError::IndexOutOfRange { index, len })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use resume_document::NaiveDate;

    fn doc() -> Document {
        Document::seeded(NaiveDate::from_ymd_opt(2024, 6, 1).unwrap())
    }

    #[test]
    fn test_command_serialization() {
        let command = Command::MoveItem {
            section_id: "3".to_string(),
            from_index: 0,
            to_index: 2,
        };

        let json = serde_json::to_value(&command).unwrap();
        assert_eq!(json["type"], "MOVE_ITEM");
        assert_eq!(json["sectionId"], "3");
        assert_eq!(json["toIndex"], 2);

        let deserialized: Command = serde_json::from_value(json).unwrap();
        assert_eq!(command, deserialized);
    }

    #[test]
    fn test_unknown_tag_deserializes_to_unknown() {
        let command: Command =
            serde_json::from_str(r#"{ "type": "SHUFFLE_EVERYTHING", "seed": 4 }"#).unwrap();
        assert_eq!(command, Command::Unknown);
        assert_eq!(command.validate(&doc()), Err(CommandError::UnknownCommand));
    }

    #[test]
    fn test_validation_rejects_missing_targets() {
        let doc = doc();

        let missing_section = Command::AddItem {
            section_id: "99".to_string(),
            item_id: "x".to_string(),
        };
        assert_eq!(
            missing_section.validate(&doc),
            Err(CommandError::SectionNotFound("99".to_string()))
        );

        let missing_item = Command::DeleteItem {
            section_id: "3".to_string(),
            item_id: "nope".to_string(),
        };
        assert!(matches!(
            missing_item.validate(&doc),
            Err(CommandError::ItemNotFound { .. })
        ));

        let bad_index = Command::MoveItem {
            section_id: "3".to_string(),
            from_index: 1,
            to_index: 0,
        };
        assert_eq!(
            bad_index.validate(&doc),
            Err(CommandError::IndexOutOfRange { index: 1, len: 1 })
        );
    }

    #[test]
    fn test_validation_accepts_existing_targets() {
        let command = Command::UpdateItem {
            section_id: "4".to_string(),
            item_id: "1".to_string(),
            updates: ItemPatch::title("MSc"),
        };
        assert!(command.validate(&doc()).is_ok());
    }
}
