use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::template::TemplateId;

/// Reorderable, toggleable resume sections. Personal info is not a section:
/// it always renders in the template header.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SectionId {
    Summary,
    Experience,
    Education,
    Projects,
    Skills,
    Hobbies,
}

impl SectionId {
    pub const ALL: [SectionId; 6] = [
        SectionId::Summary,
        SectionId::Experience,
        SectionId::Education,
        SectionId::Projects,
        SectionId::Skills,
        SectionId::Hobbies,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Summary => "summary",
            SectionId::Experience => "experience",
            SectionId::Education => "education",
            SectionId::Projects => "projects",
            SectionId::Skills => "skills",
            SectionId::Hobbies => "hobbies",
        }
    }

    pub fn heading(&self) -> &'static str {
        match self {
            SectionId::Summary => "Professional Summary",
            SectionId::Experience => "Experience",
            SectionId::Education => "Education",
            SectionId::Projects => "Projects",
            SectionId::Skills => "Skills",
            SectionId::Hobbies => "Hobbies & Interests",
        }
    }
}

/// Per-section visibility toggles. Sections absent from the map are visible.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VisibleSections(BTreeMap<SectionId, bool>);

impl VisibleSections {
    pub fn is_visible(&self, section: SectionId) -> bool {
        self.0.get(&section).copied().unwrap_or(true)
    }

    pub fn set(&mut self, section: SectionId, visible: bool) {
        self.0.insert(section, visible);
    }

    /// Flips the toggle and returns the new value.
    pub fn toggle(&mut self, section: SectionId) -> bool {
        let visible = !self.is_visible(section);
        self.set(section, visible);
        visible
    }
}

/// Render order of sections. Never holds duplicates; a section left out of
/// the order does not render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<SectionId>")]
pub struct SectionOrder(Vec<SectionId>);

impl TryFrom<Vec<SectionId>> for SectionOrder {
    type Error = String;

    fn try_from(order: Vec<SectionId>) -> Result<Self, Self::Error> {
        SectionOrder::new(order)
            .map_err(|dup| format!("section '{}' appears more than once", dup.as_str()))
    }
}

impl Default for SectionOrder {
    fn default() -> Self {
        Self(SectionId::ALL.to_vec())
    }
}

impl SectionOrder {
    /// Builds an order, returning the first duplicated section on failure.
    pub fn new(order: Vec<SectionId>) -> Result<Self, SectionId> {
        let mut seen = Vec::with_capacity(order.len());
        for section in &order {
            if seen.contains(section) {
                return Err(*section);
            }
            seen.push(*section);
        }
        Ok(Self(order))
    }

    pub fn iter(&self) -> impl Iterator<Item = SectionId> + '_ {
        self.0.iter().copied()
    }

    /// Moves `section` to index `to` (clamped to the end). Sections not yet in
    /// the order are inserted. Returns false when nothing changed.
    pub fn move_to(&mut self, section: SectionId, to: usize) -> bool {
        let before = self.0.clone();
        self.0.retain(|s| *s != section);
        let to = to.min(self.0.len());
        self.0.insert(to, section);
        self.0 != before
    }
}

/// Template choice and theme, kept apart from resume content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PresentationConfig {
    pub template_id: TemplateId,
    /// `#rgb` / `#rrggbb`; `None` uses the template's accent.
    pub accent_color: Option<String>,
    /// CSS font stack; `None` uses the template's typography.
    pub font_family: Option<String>,
    pub visible_sections: VisibleSections,
    pub section_order: SectionOrder,
}

/// True for `#rgb` and `#rrggbb` hex colors.
pub fn is_hex_color(value: &str) -> bool {
    match value.strip_prefix('#') {
        Some(hex) => matches!(hex.len(), 3 | 6) && hex.chars().all(|c| c.is_ascii_hexdigit()),
        None => false,
    }
}
