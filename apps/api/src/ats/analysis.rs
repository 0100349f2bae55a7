//! ATS readability check over plain text pulled from an uploaded resume.
//!
//! # Scoring (from 100, floor 0)
//! - each missing core section (summary, experience, education, skills): −10
//! - no email address: −15; no phone number: −10
//! - under `MIN_WORDS` words: −15; over `MAX_WORDS` words: −10
//! - passive phrasing anywhere: −5

use serde::Serialize;

use crate::review::score::PASSIVE_PHRASES;
use crate::review::text::{contains_any_phrase, looks_like_email, looks_like_phone, word_count};

const MIN_WORDS: usize = 200;
const MAX_WORDS: usize = 1000;
const MAX_HEADING_WORDS: usize = 4;
const MIN_PHONE_DIGITS: usize = 7;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AtsSection {
    Summary,
    Experience,
    Education,
    Skills,
    Projects,
}

impl AtsSection {
    const ALL: [AtsSection; 5] = [
        AtsSection::Summary,
        AtsSection::Experience,
        AtsSection::Education,
        AtsSection::Skills,
        AtsSection::Projects,
    ];

    fn headings(&self) -> &'static [&'static str] {
        match self {
            AtsSection::Summary => &["summary", "profile", "objective", "about me"],
            AtsSection::Experience => &["experience", "employment", "work history"],
            AtsSection::Education => &["education", "academic background"],
            AtsSection::Skills => &["skills", "competencies", "technologies"],
            AtsSection::Projects => &["projects", "portfolio"],
        }
    }

    fn is_core(&self) -> bool {
        !matches!(self, AtsSection::Projects)
    }

    fn label(&self) -> &'static str {
        match self {
            AtsSection::Summary => "Summary",
            AtsSection::Experience => "Experience",
            AtsSection::Education => "Education",
            AtsSection::Skills => "Skills",
            AtsSection::Projects => "Projects",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AtsReport {
    pub score: u32,
    pub word_count: usize,
    pub sections_found: Vec<AtsSection>,
    pub sections_missing: Vec<AtsSection>,
    pub has_email: bool,
    pub has_phone: bool,
    pub uses_passive_voice: bool,
    pub tips: Vec<String>,
}

/// A short line naming the section, e.g. "WORK EXPERIENCE" or "Skills:".
fn is_heading_for(line: &str, section: AtsSection) -> bool {
    let count = word_count(line);
    count > 0 && count <= MAX_HEADING_WORDS && contains_any_phrase(line, section.headings())
}

pub fn analyze_text(text: &str) -> AtsReport {
    let (sections_found, sections_missing): (Vec<AtsSection>, Vec<AtsSection>) = AtsSection::ALL
        .into_iter()
        .partition(|section| text.lines().any(|line| is_heading_for(line, *section)));

    let words = word_count(text);
    let has_email = looks_like_email(text);
    let has_phone = looks_like_phone(text, MIN_PHONE_DIGITS);
    let uses_passive_voice = contains_any_phrase(text, &PASSIVE_PHRASES);

    let mut penalty = 0u32;
    let mut tips = Vec::new();

    for section in sections_missing.iter().filter(|s| s.is_core()) {
        penalty += 10;
        tips.push(format!(
            "Add a clearly labeled \"{}\" heading so parsers can find that section.",
            section.label()
        ));
    }
    if !has_email {
        penalty += 15;
        tips.push("Include an email address as plain text.".to_string());
    }
    if !has_phone {
        penalty += 10;
        tips.push("Include a phone number as plain text.".to_string());
    }
    if words < MIN_WORDS {
        penalty += 15;
        tips.push(format!(
            "Only {words} words were readable; aim for at least {MIN_WORDS}."
        ));
    } else if words > MAX_WORDS {
        penalty += 10;
        tips.push(format!(
            "At {words} words the resume is long; trim toward {MAX_WORDS}."
        ));
    }
    if uses_passive_voice {
        penalty += 5;
        tips.push("Lead bullets with action verbs instead of passive phrasing.".to_string());
    }

    AtsReport {
        score: 100u32.saturating_sub(penalty),
        word_count: words,
        sections_found,
        sections_missing,
        has_email,
        has_phone,
        uses_passive_voice,
        tips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(body_words: usize) -> String {
        format!(
            "Jane Doe\njane@example.com | +1 555 010 0199\n\nSUMMARY\nBackend engineer.\n\n\
             Work Experience\nLed the platform team. {}\n\nEducation\nBSc Physics\n\n\
             Skills:\nRust, Go, SQL\n\nProjects\nCompiler\n",
            "shipped ".repeat(body_words)
        )
    }

    #[test]
    fn test_clean_resume_scores_full() {
        let report = analyze_text(&sample(250));
        assert_eq!(report.score, 100, "{:?}", report.tips);
        assert!(report.sections_missing.is_empty());
        assert_eq!(report.sections_found.len(), 5);
        assert!(report.has_email && report.has_phone);
        assert!(!report.uses_passive_voice);
        assert!(report.tips.is_empty());
    }

    #[test]
    fn test_empty_text() {
        let report = analyze_text("");
        assert_eq!(report.word_count, 0);
        assert_eq!(report.sections_missing.len(), 5);
        // 4 core sections, email, phone, length
        assert_eq!(report.score, 100 - 40 - 15 - 10 - 15);
        assert_eq!(report.tips.len(), 7);
    }

    #[test]
    fn test_heading_must_be_short_line() {
        let text = "I gained experience in many skills during my education years";
        let report = analyze_text(text);
        assert!(report.sections_found.is_empty());
    }

    #[test]
    fn test_passive_and_length_penalties() {
        let text = sample(1000).replace("Led the platform team.", "Deploys were handled by me.");
        let report = analyze_text(&text);
        assert!(report.uses_passive_voice);
        assert!(report.word_count > MAX_WORDS);
        assert_eq!(report.score, 85);
    }

    #[test]
    fn test_analysis_is_deterministic() {
        let text = sample(10);
        assert_eq!(analyze_text(&text), analyze_text(&text));
    }
}
