//! Resume score: a 0-100 completeness heuristic with actionable tips.
//!
//! # Rules (applied in order, penalties subtracted from `baseline`)
//! - blank summary                                → `summary_missing`   (−20)
//! - summary under `min_summary_words` words      → `summary_short`     (−10)
//! - no experience entry with a non-blank title   → `experience_missing` (−20)
//! - fewer than `min_skills` skills               → `few_skills`        (−10)
//! - any description using a passive phrase       → `passive_voice`     (−10, once)
//!
//! The result never drops below `floor`.

use serde::{Deserialize, Serialize};

use crate::models::ResumeDocument;
use crate::review::text::{contains_any_phrase, word_count};

/// Phrases that mark passive, duty-focused writing.
pub const PASSIVE_PHRASES: [&str; 3] = ["was", "responsible for", "handled by"];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoreRules {
    pub baseline: u32,
    pub floor: u32,
    pub min_summary_words: usize,
    pub min_skills: usize,
    pub passive_phrases: Vec<String>,
    pub summary_missing_penalty: u32,
    pub summary_short_penalty: u32,
    pub experience_missing_penalty: u32,
    pub few_skills_penalty: u32,
    pub passive_voice_penalty: u32,
}

impl Default for ScoreRules {
    fn default() -> Self {
        Self {
            baseline: 100,
            floor: 40,
            min_summary_words: 20,
            min_skills: 3,
            passive_phrases: PASSIVE_PHRASES.iter().map(|p| p.to_string()).collect(),
            summary_missing_penalty: 20,
            summary_short_penalty: 10,
            experience_missing_penalty: 20,
            few_skills_penalty: 10,
            passive_voice_penalty: 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TipId {
    SummaryMissing,
    SummaryShort,
    ExperienceMissing,
    FewSkills,
    PassiveVoice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreTip {
    pub id: TipId,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeScore {
    pub score: u32,
    pub tips: Vec<ScoreTip>,
}

pub fn score_resume(doc: &ResumeDocument, rules: &ScoreRules) -> ResumeScore {
    let mut penalty = 0u32;
    let mut tips = Vec::new();
    let mut flag = |id: TipId, cost: u32, message: String| {
        penalty = penalty.saturating_add(cost);
        tips.push(ScoreTip { id, message });
    };

    let summary_words = word_count(&doc.summary);
    if summary_words == 0 {
        flag(
            TipId::SummaryMissing,
            rules.summary_missing_penalty,
            "Add a professional summary so recruiters see your pitch first.".to_string(),
        );
    } else if summary_words < rules.min_summary_words {
        flag(
            TipId::SummaryShort,
            rules.summary_short_penalty,
            format!(
                "Expand your summary to at least {} words (currently {summary_words}).",
                rules.min_summary_words
            ),
        );
    }

    // Any titled entry counts, even when the first one is still blank.
    let has_experience = doc.experience.iter().any(|e| !e.title.trim().is_empty());
    if !has_experience {
        flag(
            TipId::ExperienceMissing,
            rules.experience_missing_penalty,
            "Add at least one work experience entry with a job title.".to_string(),
        );
    }

    if doc.skills.len() < rules.min_skills {
        flag(
            TipId::FewSkills,
            rules.few_skills_penalty,
            format!(
                "List at least {} skills (currently {}).",
                rules.min_skills,
                doc.skills.len()
            ),
        );
    }

    let passive = doc
        .experience
        .iter()
        .any(|e| contains_any_phrase(&e.description, &rules.passive_phrases));
    if passive {
        flag(
            TipId::PassiveVoice,
            rules.passive_voice_penalty,
            "Replace passive phrases like \"was responsible for\" with action verbs \
             (Led, Built, Delivered)."
                .to_string(),
        );
    }

    ResumeScore {
        score: rules.baseline.saturating_sub(penalty).max(rules.floor),
        tips,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExperienceEntry, SkillSet};

    fn strong_document() -> ResumeDocument {
        ResumeDocument {
            summary: "word ".repeat(20),
            experience: vec![ExperienceEntry {
                id: 1,
                title: "Engineer".to_string(),
                description: "Built the payments API serving 2M requests a day".to_string(),
                ..Default::default()
            }],
            skills: ["Rust", "SQL", "Kubernetes"].into_iter().collect::<SkillSet>(),
            ..Default::default()
        }
    }

    fn tip_ids(score: &ResumeScore) -> Vec<TipId> {
        score.tips.iter().map(|t| t.id).collect()
    }

    #[test]
    fn test_strong_document_scores_100() {
        let result = score_resume(&strong_document(), &ScoreRules::default());
        assert_eq!(result.score, 100);
        assert!(result.tips.is_empty());
    }

    #[test]
    fn test_titled_later_entry_counts_as_experience() {
        let mut doc = strong_document();
        doc.experience.insert(
            0,
            ExperienceEntry {
                id: 2,
                ..Default::default()
            },
        );
        let result = score_resume(&doc, &ScoreRules::default());
        assert!(!tip_ids(&result).contains(&TipId::ExperienceMissing));
        assert_eq!(result.score, 100);
        assert!(!crate::render::contract::has_content(
            crate::models::SectionId::Experience,
            &doc
        ));
    }

    #[test]
    fn test_empty_document_scores_50() {
        let result = score_resume(&ResumeDocument::default(), &ScoreRules::default());
        assert_eq!(result.score, 50);
        assert_eq!(
            tip_ids(&result),
            vec![
                TipId::SummaryMissing,
                TipId::ExperienceMissing,
                TipId::FewSkills
            ]
        );
    }

    #[test]
    fn test_score_is_deterministic() {
        let doc = ResumeDocument {
            summary: "Short summary".to_string(),
            ..strong_document()
        };
        let rules = ScoreRules::default();
        assert_eq!(score_resume(&doc, &rules), score_resume(&doc, &rules));
    }

    #[test]
    fn test_short_summary_excludes_missing_summary() {
        let doc = ResumeDocument {
            summary: "Seasoned backend engineer".to_string(),
            ..strong_document()
        };
        let result = score_resume(&doc, &ScoreRules::default());
        assert_eq!(result.score, 90);
        assert_eq!(tip_ids(&result), vec![TipId::SummaryShort]);
    }

    #[test]
    fn test_whitespace_summary_counts_as_missing() {
        let doc = ResumeDocument {
            summary: "   \n ".to_string(),
            ..strong_document()
        };
        assert_eq!(
            tip_ids(&score_resume(&doc, &ScoreRules::default())),
            vec![TipId::SummaryMissing]
        );
    }

    #[test]
    fn test_single_blank_title_counts_as_no_experience() {
        let mut doc = strong_document();
        doc.experience[0].title = "  ".to_string();
        let result = score_resume(&doc, &ScoreRules::default());
        assert_eq!(result.score, 80);
        assert_eq!(tip_ids(&result), vec![TipId::ExperienceMissing]);
    }

    #[test]
    fn test_passive_voice_penalized_once() {
        let mut doc = strong_document();
        for id in 2..5 {
            doc.experience.push(ExperienceEntry {
                id,
                title: "Analyst".to_string(),
                description: "I was responsible for quarterly reporting".to_string(),
                ..Default::default()
            });
        }
        let result = score_resume(&doc, &ScoreRules::default());
        assert_eq!(result.score, 90);
        assert_eq!(tip_ids(&result), vec![TipId::PassiveVoice]);
    }

    #[test]
    fn test_passive_match_is_case_insensitive_whole_word() {
        let mut doc = strong_document();
        doc.experience[0].description = "Escalations HANDLED BY my team".to_string();
        assert_eq!(score_resume(&doc, &ScoreRules::default()).score, 90);

        doc.experience[0].description = "Wasted less compute after the rewrite".to_string();
        assert_eq!(score_resume(&doc, &ScoreRules::default()).score, 100);
    }

    #[test]
    fn test_floor_clamps_score() {
        let rules = ScoreRules {
            summary_missing_penalty: 50,
            experience_missing_penalty: 50,
            ..ScoreRules::default()
        };
        assert_eq!(score_resume(&ResumeDocument::default(), &rules).score, 40);
    }

    #[test]
    fn test_thresholds_are_configurable() {
        let rules = ScoreRules {
            min_skills: 5,
            min_summary_words: 2,
            ..ScoreRules::default()
        };
        let doc = ResumeDocument {
            summary: "Two words".to_string(),
            ..strong_document()
        };
        let result = score_resume(&doc, &rules);
        assert_eq!(tip_ids(&result), vec![TipId::FewSkills]);
    }

    #[test]
    fn test_tip_ids_serialize_snake_case() {
        assert_eq!(
            serde_json::to_value(TipId::PassiveVoice).unwrap(),
            serde_json::json!("passive_voice")
        );
    }
}
