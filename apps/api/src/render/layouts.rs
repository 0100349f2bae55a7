//! Per-template geometry and typography.
//!
//! A `TemplateLayout` only answers "where" and "how it looks": column split,
//! sidebar routing, header style, default font and accent. Whether a section
//! renders at all is decided once, in `render::contract`.

use serde::Serialize;

use crate::models::template::{template_info, LayoutKind};
use crate::models::{SectionId, TemplateId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HeaderStyle {
    /// Name and contacts centered above a rule.
    Centered,
    /// Name flush left, contacts on one line below.
    LeftAligned,
    /// Full-width accent-colored band.
    Band,
    /// Header lives at the top of the sidebar column.
    InSidebar,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FontClass {
    Sans,
    Serif,
    Mono,
}

impl FontClass {
    pub fn fallback_stack(&self) -> &'static str {
        match self {
            FontClass::Sans => "'Helvetica Neue', Arial, sans-serif",
            FontClass::Serif => "Georgia, 'Times New Roman', serif",
            FontClass::Mono => "'SFMono-Regular', Consolas, monospace",
        }
    }
}

pub trait TemplateLayout: Send + Sync {
    fn id(&self) -> TemplateId;

    fn header_style(&self) -> HeaderStyle {
        HeaderStyle::LeftAligned
    }

    /// Sections routed to the sidebar. Empty for single-column templates.
    fn sidebar_sections(&self) -> &'static [SectionId] {
        &[]
    }

    fn default_font(&self) -> &'static str;

    fn font_class(&self) -> FontClass {
        FontClass::Sans
    }

    fn default_accent(&self) -> &'static str;

    fn shows_photo(&self) -> bool {
        false
    }

    fn columns(&self) -> LayoutKind {
        template_info(self.id()).layout
    }

    fn routes_to_sidebar(&self, section: SectionId) -> bool {
        self.sidebar_sections().contains(&section)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Single-column templates
// ────────────────────────────────────────────────────────────────────────────

pub struct Modern;

impl TemplateLayout for Modern {
    fn id(&self) -> TemplateId {
        TemplateId::Modern
    }
    fn default_font(&self) -> &'static str {
        "Inter"
    }
    fn default_accent(&self) -> &'static str {
        "#2563eb"
    }
}

pub struct Classic;

impl TemplateLayout for Classic {
    fn id(&self) -> TemplateId {
        TemplateId::Classic
    }
    fn header_style(&self) -> HeaderStyle {
        HeaderStyle::Centered
    }
    fn default_font(&self) -> &'static str {
        "Garamond"
    }
    fn font_class(&self) -> FontClass {
        FontClass::Serif
    }
    fn default_accent(&self) -> &'static str {
        "#1f2937"
    }
}

pub struct Minimal;

impl TemplateLayout for Minimal {
    fn id(&self) -> TemplateId {
        TemplateId::Minimal
    }
    fn default_font(&self) -> &'static str {
        "Helvetica"
    }
    fn default_accent(&self) -> &'static str {
        "#111827"
    }
}

pub struct Creative;

impl TemplateLayout for Creative {
    fn id(&self) -> TemplateId {
        TemplateId::Creative
    }
    fn header_style(&self) -> HeaderStyle {
        HeaderStyle::Band
    }
    fn default_font(&self) -> &'static str {
        "Poppins"
    }
    fn default_accent(&self) -> &'static str {
        "#db2777"
    }
    fn shows_photo(&self) -> bool {
        true
    }
}

pub struct Executive;

impl TemplateLayout for Executive {
    fn id(&self) -> TemplateId {
        TemplateId::Executive
    }
    fn header_style(&self) -> HeaderStyle {
        HeaderStyle::Band
    }
    fn default_font(&self) -> &'static str {
        "Merriweather"
    }
    fn font_class(&self) -> FontClass {
        FontClass::Serif
    }
    fn default_accent(&self) -> &'static str {
        "#0f172a"
    }
}

pub struct Elegant;

impl TemplateLayout for Elegant {
    fn id(&self) -> TemplateId {
        TemplateId::Elegant
    }
    fn header_style(&self) -> HeaderStyle {
        HeaderStyle::Centered
    }
    fn default_font(&self) -> &'static str {
        "Playfair Display"
    }
    fn font_class(&self) -> FontClass {
        FontClass::Serif
    }
    fn default_accent(&self) -> &'static str {
        "#92400e"
    }
}

pub struct Tech;

impl TemplateLayout for Tech {
    fn id(&self) -> TemplateId {
        TemplateId::Tech
    }
    fn default_font(&self) -> &'static str {
        "JetBrains Mono"
    }
    fn font_class(&self) -> FontClass {
        FontClass::Mono
    }
    fn default_accent(&self) -> &'static str {
        "#059669"
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Two-column templates
// ────────────────────────────────────────────────────────────────────────────

pub struct Corporate;

impl TemplateLayout for Corporate {
    fn id(&self) -> TemplateId {
        TemplateId::Corporate
    }
    fn header_style(&self) -> HeaderStyle {
        HeaderStyle::Band
    }
    fn sidebar_sections(&self) -> &'static [SectionId] {
        &[SectionId::Skills, SectionId::Education, SectionId::Hobbies]
    }
    fn default_font(&self) -> &'static str {
        "Roboto"
    }
    fn default_accent(&self) -> &'static str {
        "#1e3a8a"
    }
}

pub struct Swiss;

impl TemplateLayout for Swiss {
    fn id(&self) -> TemplateId {
        TemplateId::Swiss
    }
    fn sidebar_sections(&self) -> &'static [SectionId] {
        &[SectionId::Skills, SectionId::Hobbies]
    }
    fn default_font(&self) -> &'static str {
        "Helvetica"
    }
    fn default_accent(&self) -> &'static str {
        "#dc2626"
    }
}

pub struct Sidebar;

impl TemplateLayout for Sidebar {
    fn id(&self) -> TemplateId {
        TemplateId::Sidebar
    }
    fn header_style(&self) -> HeaderStyle {
        HeaderStyle::InSidebar
    }
    fn sidebar_sections(&self) -> &'static [SectionId] {
        &[SectionId::Skills, SectionId::Education, SectionId::Hobbies]
    }
    fn default_font(&self) -> &'static str {
        "Lato"
    }
    fn default_accent(&self) -> &'static str {
        "#0d9488"
    }
    fn shows_photo(&self) -> bool {
        true
    }
}

pub fn layout_for(id: TemplateId) -> &'static dyn TemplateLayout {
    match id {
        TemplateId::Modern => &Modern,
        TemplateId::Classic => &Classic,
        TemplateId::Minimal => &Minimal,
        TemplateId::Creative => &Creative,
        TemplateId::Executive => &Executive,
        TemplateId::Elegant => &Elegant,
        TemplateId::Tech => &Tech,
        TemplateId::Corporate => &Corporate,
        TemplateId::Swiss => &Swiss,
        TemplateId::Sidebar => &Sidebar,
    }
}
