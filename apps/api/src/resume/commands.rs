//! Reducer-style mutations over `ResumeState`.
//!
//! Every edit the builder UI can make is one `Command`. `ResumeState::apply`
//! validates first and mutates second, so a rejected command never leaves a
//! half-applied document behind.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::models::presentation::is_hex_color;
use crate::models::{
    EducationEntry, EntryId, ExperienceEntry, PersonalField, PresentationConfig, ProjectEntry,
    ResumeDocument, SectionId, SectionOrder, TemplateId,
};
use crate::resume::ids::IdGenerator;
use crate::resume::lists;

/// The complete editable session: content plus presentation preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeState {
    pub document: ResumeDocument,
    pub presentation: PresentationConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryList {
    Experience,
    Education,
    Projects,
}

impl fmt::Display for EntryList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            EntryList::Experience => "experience",
            EntryList::Education => "education",
            EntryList::Projects => "projects",
        })
    }
}

/// A list entry tagged with the list it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "list", rename_all = "snake_case")]
pub enum EntryPayload {
    Experience(ExperienceEntry),
    Education(EducationEntry),
    Projects(ProjectEntry),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Command {
    UpdatePersonal { field: PersonalField, value: String },
    SetPhoto { photo: Option<String> },
    SetSummary { text: String },
    SetHobbies { text: String },
    /// The payload's id is ignored; a fresh one is issued.
    AddEntry { entry: EntryPayload },
    UpdateEntry { entry: EntryPayload },
    RemoveEntry { list: EntryList, id: EntryId },
    MoveEntry { list: EntryList, from: usize, to: usize },
    ReorderEntries { list: EntryList, ids: Vec<EntryId> },
    AddSkill { skill: String },
    RemoveSkill { skill: String },
    SetTemplate { template: TemplateId },
    SetAccentColor { color: Option<String> },
    SetFontFamily { font: Option<String> },
    SetSectionVisibility { section: SectionId, visible: bool },
    ToggleSection { section: SectionId },
    SetSectionOrder { order: Vec<SectionId> },
    MoveSection { section: SectionId, to: usize },
    Reset,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CommandError {
    #[error("No {list} entry with id {id}")]
    UnknownEntry { list: EntryList, id: EntryId },

    #[error("Index {index} is out of range for {list} ({len} entries)")]
    IndexOutOfRange {
        list: EntryList,
        index: usize,
        len: usize,
    },

    #[error("Reorder must name every {list} id exactly once")]
    NotAPermutation { list: EntryList },

    #[error("Section '{}' appears more than once in the order", .0.as_str())]
    DuplicateSection(SectionId),

    #[error("Invalid accent color '{0}': expected #rgb or #rrggbb")]
    InvalidColor(String),

    #[error("Photo must be a data:image URI")]
    InvalidPhoto,

    #[error("Duplicate {list} id {id}")]
    DuplicateEntryId { list: EntryList, id: EntryId },
}

macro_rules! on_list {
    ($doc:expr, $list:expr, |$items:ident| $body:expr) => {
        match $list {
            EntryList::Experience => {
                let $items = &mut $doc.experience;
                $body
            }
            EntryList::Education => {
                let $items = &mut $doc.education;
                $body
            }
            EntryList::Projects => {
                let $items = &mut $doc.projects;
                $body
            }
        }
    };
}

impl EntryPayload {
    pub fn list(&self) -> EntryList {
        match self {
            EntryPayload::Experience(_) => EntryList::Experience,
            EntryPayload::Education(_) => EntryList::Education,
            EntryPayload::Projects(_) => EntryList::Projects,
        }
    }

    pub fn id(&self) -> EntryId {
        match self {
            EntryPayload::Experience(e) => e.id,
            EntryPayload::Education(e) => e.id,
            EntryPayload::Projects(e) => e.id,
        }
    }
}

fn first_duplicate(mut ids: impl Iterator<Item = EntryId>) -> Option<EntryId> {
    let mut seen = std::collections::HashSet::new();
    ids.find(|id| !seen.insert(*id))
}

impl ResumeState {
    /// Checks a wholesale replacement against the invariants commands keep.
    pub fn check_import(&self) -> Result<(), CommandError> {
        let doc = &self.document;
        let duplicates = [
            (EntryList::Experience, first_duplicate(doc.experience.iter().map(|e| e.id))),
            (EntryList::Education, first_duplicate(doc.education.iter().map(|e| e.id))),
            (EntryList::Projects, first_duplicate(doc.projects.iter().map(|e| e.id))),
        ];
        if let Some((list, Some(id))) = duplicates.into_iter().find(|(_, dup)| dup.is_some()) {
            return Err(CommandError::DuplicateEntryId { list, id });
        }
        if let Some(photo) = &doc.personal_info.photo {
            if !photo.starts_with("data:image/") {
                return Err(CommandError::InvalidPhoto);
            }
        }
        if let Some(color) = &self.presentation.accent_color {
            if !is_hex_color(color) {
                return Err(CommandError::InvalidColor(color.clone()));
            }
        }
        Ok(())
    }

    /// Applies one command. On error the state is untouched.
    pub fn apply(
        &mut self,
        command: Command,
        ids: &mut IdGenerator,
        defaults: impl FnOnce() -> ResumeState,
    ) -> Result<(), CommandError> {
        debug!(?command, "Applying resume command");
        let doc = &mut self.document;
        let presentation = &mut self.presentation;

        match command {
            Command::UpdatePersonal { field, value } => {
                *doc.personal_info.field_mut(field) = value;
            }
            Command::SetPhoto { photo } => {
                if let Some(uri) = &photo {
                    if !uri.starts_with("data:image/") {
                        return Err(CommandError::InvalidPhoto);
                    }
                }
                doc.personal_info.photo = photo;
            }
            Command::SetSummary { text } => doc.summary = text,
            Command::SetHobbies { text } => doc.hobbies = text,
            Command::AddEntry { entry } => {
                let id = match entry {
                    EntryPayload::Experience(e) => lists::insert(&mut doc.experience, e, ids),
                    EntryPayload::Education(e) => lists::insert(&mut doc.education, e, ids),
                    EntryPayload::Projects(e) => lists::insert(&mut doc.projects, e, ids),
                };
                debug!(id, "Added list entry");
            }
            Command::UpdateEntry { entry } => {
                let (list, id) = (entry.list(), entry.id());
                let replaced = match entry {
                    EntryPayload::Experience(e) => lists::replace(&mut doc.experience, e),
                    EntryPayload::Education(e) => lists::replace(&mut doc.education, e),
                    EntryPayload::Projects(e) => lists::replace(&mut doc.projects, e),
                };
                if !replaced {
                    return Err(CommandError::UnknownEntry { list, id });
                }
            }
            Command::RemoveEntry { list, id } => {
                if !on_list!(doc, list, |items| lists::remove(items, id)) {
                    return Err(CommandError::UnknownEntry { list, id });
                }
            }
            Command::MoveEntry { list, from, to } => on_list!(doc, list, |items| {
                let len = items.len();
                if let Some(index) = [from, to].into_iter().find(|i| *i >= len) {
                    return Err(CommandError::IndexOutOfRange { list, index, len });
                }
                lists::move_item(items, from, to);
            }),
            Command::ReorderEntries { list, ids: order } => on_list!(doc, list, |items| {
                if !lists::is_permutation(items, &order) {
                    return Err(CommandError::NotAPermutation { list });
                }
                lists::reorder(items, &order);
            }),
            Command::AddSkill { skill } => {
                if !doc.skills.insert(&skill) {
                    debug!(%skill, "Skill ignored (blank or duplicate)");
                }
            }
            Command::RemoveSkill { skill } => {
                doc.skills.remove(&skill);
            }
            Command::SetTemplate { template } => presentation.template_id = template,
            Command::SetAccentColor { color } => {
                if let Some(c) = &color {
                    if !is_hex_color(c) {
                        return Err(CommandError::InvalidColor(c.clone()));
                    }
                }
                presentation.accent_color = color;
            }
            Command::SetFontFamily { font } => {
                presentation.font_family = font.filter(|f| !f.trim().is_empty());
            }
            Command::SetSectionVisibility { section, visible } => {
                presentation.visible_sections.set(section, visible);
            }
            Command::ToggleSection { section } => {
                presentation.visible_sections.toggle(section);
            }
            Command::SetSectionOrder { order } => {
                presentation.section_order =
                    SectionOrder::new(order).map_err(CommandError::DuplicateSection)?;
            }
            Command::MoveSection { section, to } => {
                presentation.section_order.move_to(section, to);
            }
            Command::Reset => *self = defaults(),
        }
        Ok(())
    }
}
