use serde::{Deserialize, Serialize};

use crate::models::ResumeDocument;
use crate::review::text::looks_like_email;

/// Wizard steps in editing order. Only `Personal` and `Skills` gate progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Personal,
    Summary,
    Experience,
    Education,
    Projects,
    Skills,
    Finalize,
}

impl WizardStep {
    pub const ALL: [WizardStep; 7] = [
        WizardStep::Personal,
        WizardStep::Summary,
        WizardStep::Experience,
        WizardStep::Education,
        WizardStep::Projects,
        WizardStep::Skills,
        WizardStep::Finalize,
    ];

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StepErrorId {
    NameRequired,
    EmailInvalid,
    SkillsRequired,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepError {
    pub id: StepErrorId,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StepValidation {
    pub step: Option<WizardStep>,
    pub is_valid: bool,
    pub error: Option<StepError>,
}

impl StepValidation {
    fn pass(step: Option<WizardStep>) -> Self {
        Self {
            step,
            is_valid: true,
            error: None,
        }
    }

    fn fail(step: WizardStep, id: StepErrorId, message: &str) -> Self {
        Self {
            step: Some(step),
            is_valid: false,
            error: Some(StepError {
                id,
                message: message.to_string(),
            }),
        }
    }
}

/// Decides whether the wizard may advance past `step_index`.
/// Unknown indices pass.
pub fn validate_step(step_index: usize, doc: &ResumeDocument) -> StepValidation {
    let step = WizardStep::from_index(step_index);
    match step {
        Some(WizardStep::Personal) => {
            let info = &doc.personal_info;
            if info.full_name.trim().is_empty() {
                StepValidation::fail(
                    WizardStep::Personal,
                    StepErrorId::NameRequired,
                    "Full name is required.",
                )
            } else if !looks_like_email(&info.email) {
                StepValidation::fail(
                    WizardStep::Personal,
                    StepErrorId::EmailInvalid,
                    "Enter a valid email address.",
                )
            } else {
                StepValidation::pass(step)
            }
        }
        Some(WizardStep::Skills) if doc.skills.is_empty() => StepValidation::fail(
            WizardStep::Skills,
            StepErrorId::SkillsRequired,
            "Add at least one skill.",
        ),
        _ => StepValidation::pass(step),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::SkillSet;

    fn doc_with(name: &str, email: &str) -> ResumeDocument {
        let mut doc = ResumeDocument::default();
        doc.personal_info.full_name = name.to_string();
        doc.personal_info.email = email.to_string();
        doc
    }

    fn error_id(v: &StepValidation) -> Option<StepErrorId> {
        v.error.as_ref().map(|e| e.id)
    }

    #[test]
    fn test_blank_name_is_required() {
        let v = validate_step(0, &doc_with("   ", "ada@example.com"));
        assert!(!v.is_valid);
        assert_eq!(error_id(&v), Some(StepErrorId::NameRequired));
    }

    #[test]
    fn test_name_checked_before_email() {
        let v = validate_step(0, &doc_with("", "nope"));
        assert_eq!(error_id(&v), Some(StepErrorId::NameRequired));
    }

    #[test]
    fn test_bad_email_is_invalid() {
        for email in ["", "ada", "ada@example", "ada@ example.com"] {
            let v = validate_step(0, &doc_with("Ada", email));
            assert_eq!(error_id(&v), Some(StepErrorId::EmailInvalid), "{email}");
        }
    }

    #[test]
    fn test_personal_step_passes() {
        let v = validate_step(0, &doc_with("Ada Lovelace", "ada@example.com"));
        assert!(v.is_valid);
        assert_eq!(v.error, None);
        assert_eq!(v.step, Some(WizardStep::Personal));
    }

    #[test]
    fn test_skills_step_requires_one_skill() {
        let mut doc = ResumeDocument::default();
        assert_eq!(
            error_id(&validate_step(5, &doc)),
            Some(StepErrorId::SkillsRequired)
        );

        doc.skills = ["Rust"].into_iter().collect::<SkillSet>();
        assert!(validate_step(5, &doc).is_valid);
    }

    #[test]
    fn test_other_steps_always_pass() {
        let empty = ResumeDocument::default();
        for index in [1, 2, 3, 4, 6, 7, 99] {
            assert!(validate_step(index, &empty).is_valid, "step {index}");
        }
        assert_eq!(validate_step(99, &empty).step, None);
    }
}
