pub mod document;
pub mod presentation;
pub mod template;

pub use document::{
    EducationEntry, EntryId, ExperienceEntry, Identified, PersonalField, PersonalInfo,
    ProjectEntry, ResumeDocument, SkillSet,
};
pub use presentation::{PresentationConfig, SectionId, SectionOrder, VisibleSections};
pub use template::{TemplateCategory, TemplateId, TemplateInfo};
