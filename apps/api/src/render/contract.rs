//! Section visibility and ordering contract shared by every template.
//!
//! # Contract rules
//! - A section renders iff it is toggled visible AND has qualifying content:
//!   - summary / hobbies: non-blank text
//!   - experience / projects: first entry has a non-blank title
//!   - education: first entry has a non-blank degree
//!   - skills: at least one skill
//! - Personal info is never gated; it always lands in the header region.
//! - Rendered sections follow `section_order`. Two-column templates peel off
//!   their fixed sidebar subset; the rest stays in the main column.

use serde::Serialize;

use crate::models::presentation::is_hex_color;
use crate::models::template::LayoutKind;
use crate::models::{PresentationConfig, ResumeDocument, SectionId, TemplateId, VisibleSections};
use crate::render::layouts::{HeaderStyle, TemplateLayout};

// ────────────────────────────────────────────────────────────────────────────
// Gating
// ────────────────────────────────────────────────────────────────────────────

fn is_filled(text: &str) -> bool {
    !text.trim().is_empty()
}

/// Whether `section` has anything worth rendering.
pub fn has_content(section: SectionId, doc: &ResumeDocument) -> bool {
    match section {
        SectionId::Summary => is_filled(&doc.summary),
        SectionId::Hobbies => is_filled(&doc.hobbies),
        SectionId::Experience => doc.experience.first().is_some_and(|e| is_filled(&e.title)),
        SectionId::Education => doc.education.first().is_some_and(|e| is_filled(&e.degree)),
        SectionId::Projects => doc.projects.first().is_some_and(|p| is_filled(&p.title)),
        SectionId::Skills => !doc.skills.is_empty(),
    }
}

pub fn should_render(section: SectionId, doc: &ResumeDocument, visible: &VisibleSections) -> bool {
    visible.is_visible(section) && has_content(section, doc)
}

// ────────────────────────────────────────────────────────────────────────────
// Theme
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Theme {
    pub accent_color: String,
    pub font_family: String,
    /// Full CSS `font-family` value, primary font first.
    pub font_stack: String,
}

/// CSS generic families. These must stay unquoted in a `font-family` value.
const GENERIC_FAMILIES: [&str; 6] = [
    "serif",
    "sans-serif",
    "monospace",
    "cursive",
    "fantasy",
    "system-ui",
];

/// Keeps characters that are safe inside a quoted CSS font name.
fn clean_font_name(name: &str) -> Option<String> {
    let cleaned: String = name
        .chars()
        .filter(|c| c.is_alphanumeric() || matches!(c, ' ' | '-' | '_'))
        .collect();
    let cleaned = cleaned.trim();
    (!cleaned.is_empty()).then(|| cleaned.to_string())
}

/// One `font-family` entry: generic families bare, everything else quoted.
fn css_family(name: &str) -> String {
    match GENERIC_FAMILIES
        .iter()
        .find(|g| g.eq_ignore_ascii_case(name))
    {
        Some(generic) => generic.to_string(),
        None => format!("'{name}'"),
    }
}

/// Splits a comma-separated font stack into cleaned family names, dropping
/// entries with nothing usable left.
fn parse_font_stack(value: &str) -> Vec<String> {
    value.split(',').filter_map(clean_font_name).collect()
}

/// Presentation overrides win over template defaults. Overrides that would
/// not be valid CSS fall back to the template's own values.
pub fn resolve_theme(presentation: &PresentationConfig, layout: &dyn TemplateLayout) -> Theme {
    let accent_color = presentation
        .accent_color
        .as_deref()
        .filter(|c| is_hex_color(c))
        .unwrap_or(layout.default_accent())
        .to_string();
    let mut families = presentation
        .font_family
        .as_deref()
        .map(parse_font_stack)
        .unwrap_or_default();
    if families.is_empty() {
        families.push(layout.default_font().to_string());
    }
    let font_family = families[0].clone();
    let user_stack: Vec<String> = families.iter().map(|f| css_family(f)).collect();
    let font_stack = format!(
        "{}, {}",
        user_stack.join(", "),
        layout.font_class().fallback_stack()
    );
    Theme {
        accent_color,
        font_family,
        font_stack,
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Plan
// ────────────────────────────────────────────────────────────────────────────

/// Everything a writer needs to lay out a resume, minus the content itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderPlan {
    pub template: TemplateId,
    pub columns: LayoutKind,
    pub header_style: HeaderStyle,
    pub show_photo: bool,
    pub theme: Theme,
    pub main: Vec<SectionId>,
    pub sidebar: Vec<SectionId>,
}

pub fn plan(
    doc: &ResumeDocument,
    presentation: &PresentationConfig,
    layout: &dyn TemplateLayout,
) -> RenderPlan {
    let (sidebar, main): (Vec<SectionId>, Vec<SectionId>) = presentation
        .section_order
        .iter()
        .filter(|s| should_render(*s, doc, &presentation.visible_sections))
        .partition(|s| layout.routes_to_sidebar(*s));

    let has_photo = doc
        .personal_info
        .photo
        .as_deref()
        .is_some_and(|p| !p.trim().is_empty());

    RenderPlan {
        template: layout.id(),
        columns: layout.columns(),
        header_style: layout.header_style(),
        show_photo: layout.shows_photo() && has_photo,
        theme: resolve_theme(presentation, layout),
        main,
        sidebar,
    }
}
