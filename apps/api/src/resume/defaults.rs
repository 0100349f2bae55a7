use crate::models::{
    EducationEntry, ExperienceEntry, PersonalInfo, PresentationConfig, ResumeDocument, SkillSet,
};
use crate::resume::commands::ResumeState;

/// Placeholder content shown on first load, before anything is saved.
pub fn placeholder_state() -> ResumeState {
    ResumeState {
        document: ResumeDocument {
            personal_info: PersonalInfo {
                full_name: "Alex Morgan".to_string(),
                email: "alex.morgan@example.com".to_string(),
                phone: "+1 555 0100".to_string(),
                address: "San Francisco, CA".to_string(),
                linkedin: "linkedin.com/in/alexmorgan".to_string(),
                portfolio: "alexmorgan.dev".to_string(),
                photo: None,
            },
            summary: "Product-minded software engineer with six years of experience building \
                      reliable web platforms, leading small teams and shipping features used by \
                      millions of customers."
                .to_string(),
            experience: vec![ExperienceEntry {
                id: 1,
                title: "Senior Software Engineer".to_string(),
                company: "Northwind Labs".to_string(),
                location: "Remote".to_string(),
                start_date: "2021".to_string(),
                end_date: String::new(),
                is_present: true,
                description: "Led the migration of the billing platform to an event-driven \
                              design, cutting invoice latency by 60%."
                    .to_string(),
            }],
            education: vec![EducationEntry {
                id: 1,
                degree: "B.Sc. Computer Science".to_string(),
                school: "State University".to_string(),
                city: "Austin".to_string(),
                year: "2017".to_string(),
            }],
            projects: Vec::new(),
            skills: ["TypeScript", "Rust", "PostgreSQL", "System Design"]
                .into_iter()
                .collect::<SkillSet>(),
            hobbies: "Trail running, chess".to_string(),
        },
        presentation: PresentationConfig::default(),
    }
}
