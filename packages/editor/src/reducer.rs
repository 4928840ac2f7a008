//! # Document Reducer
//!
//! `reduce` maps `(document, command)` to the next document. The input is
//! never modified: every level holding a changed node is rebuilt up to the
//! root and untouched siblings are cloned as-is.

use resume_document::{ContentItem, Document, Section};

use crate::commands::Command;

/// Apply a command, returning the next document
pub fn reduce(doc: &Document, command: &Command) -> Document {
    match command {
        Command::UpdateSection {
            section_id,
            updates,
        } => map_section(doc, section_id, |section| updates.apply_to(section)),

        Command::AddItem {
            section_id,
            item_id,
        } => map_section(doc, section_id, |section| {
            let mut content = section.content.clone();
            content.push(ContentItem::blank(item_id.clone(), section.kind));
            with_content(section, content)
        }),

        Command::UpdateItem {
            section_id,
            item_id,
            updates,
        } => map_section(doc, section_id, |section| {
            let content = section
                .content
                .iter()
                .map(|item| {
                    if &item.id == item_id {
                        updates.apply_to(item)
                    } else {
                        item.clone()
                    }
                })
                .collect();
            with_content(section, content)
        }),

        Command::DeleteItem {
            section_id,
            item_id,
        } => map_section(doc, section_id, |section| {
            let content = section
                .content
                .iter()
                .filter(|item| &item.id != item_id)
                .cloned()
                .collect();
            with_content(section, content)
        }),

        Command::MoveItem {
            section_id,
            from_index,
            to_index,
        } => map_section(doc, section_id, |section| {
            match reorder(&section.content, *from_index, *to_index) {
                Some(content) => with_content(section, content),
                None => section.clone(),
            }
        }),

        Command::AddSection { kind, section_id } => {
            let mut sections = doc.sections.clone();
            sections.push(Section::new(section_id.clone(), *kind));
            with_sections(doc, sections)
        }

        Command::RemoveSection { section_id } => {
            let sections = doc
                .sections
                .iter()
                .filter(|section| &section.id != section_id)
                .cloned()
                .collect();
            with_sections(doc, sections)
        }

        Command::MoveSection {
            from_index,
            to_index,
        } => match reorder(&doc.sections, *from_index, *to_index) {
            Some(sections) => with_sections(doc, sections),
            None => doc.clone(),
        },

        Command::ReplaceDocument { document } => document.as_ref().clone(),

        Command::SetProfileImage { image, position } => Document {
            sections: doc.sections.clone(),
            theme: doc.theme.clone(),
            profile_image: image.clone().filter(|data| !data.is_empty()),
            profile_image_position: *position,
        },

        Command::Unknown => doc.clone(),
    }
}

/// Remove the element at `from`, then insert it at `to` in the shortened
/// list. `to` is clamped to the end of that list. Returns `None` when `from`
/// is out of range.
pub fn reorder<T: Clone>(list: &[T], from: usize, to: usize) -> Option<Vec<T>> {
    if from >= list.len() {
        return None;
    }

    let mut reordered = list.to_vec();
    let moved = reordered.remove(from);
    let insert_at = to.min(reordered.len());
    reordered.insert(insert_at, moved);
    Some(reordered)
}

fn map_section(doc: &Document, section_id: &str, f: impl Fn(&Section) -> Section) -> Document {
    let sections = doc
        .sections
        .iter()
        .map(|section| {
            if section.id == section_id {
                f(section)
            } else {
                section.clone()
            }
        })
        .collect();
    with_sections(doc, sections)
}

fn with_sections(doc: &Document, sections: Vec<Section>) -> Document {
    Document {
        sections,
        theme: doc.theme.clone(),
        profile_image: doc.profile_image.clone(),
        profile_image_position: doc.profile_image_position,
    }
}

fn with_content(section: &Section, content: Vec<ContentItem>) -> Section {
    Section {
        id: section.id.clone(),
        title: section.title.clone(),
        kind: section.kind,
        content,
        heading_style: section.heading_style.clone(),
    }
}
