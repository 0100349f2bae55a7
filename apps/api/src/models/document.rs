use serde::{Deserialize, Serialize};

/// Identity key for list entries. Assigned from a millisecond timestamp, unique per list.
pub type EntryId = u64;

/// Anything stored in a reorderable resume list.
pub trait Identified {
    fn id(&self) -> EntryId;
    fn set_id(&mut self, id: EntryId);
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PersonalInfo {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub linkedin: String,
    pub portfolio: String,
    /// Profile photo as a `data:image/...` URI.
    pub photo: Option<String>,
}

/// Free-text personal fields addressable by the `update_personal` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PersonalField {
    FullName,
    Email,
    Phone,
    Address,
    Linkedin,
    Portfolio,
}

impl PersonalInfo {
    pub fn field_mut(&mut self, field: PersonalField) -> &mut String {
        match field {
            PersonalField::FullName => &mut self.full_name,
            PersonalField::Email => &mut self.email,
            PersonalField::Phone => &mut self.phone,
            PersonalField::Address => &mut self.address,
            PersonalField::Linkedin => &mut self.linkedin,
            PersonalField::Portfolio => &mut self.portfolio,
        }
    }

    /// Contact fragments in header order, blanks dropped.
    pub fn contact_line(&self) -> Vec<&str> {
        [
            self.email.as_str(),
            self.phone.as_str(),
            self.address.as_str(),
            self.linkedin.as_str(),
            self.portfolio.as_str(),
        ]
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExperienceEntry {
    pub id: EntryId,
    pub title: String,
    pub company: String,
    pub location: String,
    pub start_date: String,
    pub end_date: String,
    pub is_present: bool,
    pub description: String,
}

impl ExperienceEntry {
    /// "start – end", with "Present" replacing the end date for current roles.
    /// Blank parts are left out.
    pub fn date_range(&self) -> String {
        let start = self.start_date.trim();
        let end = if self.is_present {
            "Present"
        } else {
            self.end_date.trim()
        };
        match (start.is_empty(), end.is_empty()) {
            (false, false) => format!("{start} – {end}"),
            (false, true) => start.to_string(),
            (true, false) => end.to_string(),
            (true, true) => String::new(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EducationEntry {
    pub id: EntryId,
    pub degree: String,
    pub school: String,
    pub city: String,
    pub year: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProjectEntry {
    pub id: EntryId,
    pub title: String,
    pub link: String,
    pub description: String,
}

macro_rules! identified {
    ($($ty:ty),+) => {
        $(impl Identified for $ty {
            fn id(&self) -> EntryId {
                self.id
            }

            fn set_id(&mut self, id: EntryId) {
                self.id = id;
            }
        })+
    };
}

identified!(ExperienceEntry, EducationEntry, ProjectEntry);

/// Insertion-ordered skill list, de-duplicated case-sensitively.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SkillSet(Vec<String>);

impl SkillSet {
    /// Adds a trimmed skill. Returns false for blanks and exact duplicates.
    pub fn insert(&mut self, skill: &str) -> bool {
        let skill = skill.trim();
        if skill.is_empty() || self.0.iter().any(|s| s == skill) {
            return false;
        }
        self.0.push(skill.to_string());
        true
    }

    pub fn remove(&mut self, skill: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|s| s != skill.trim());
        self.0.len() != before
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for SkillSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut set = SkillSet::default();
        for skill in iter {
            set.insert(skill.as_ref());
        }
        set
    }
}

/// The user's resume content. Presentation preferences live in `PresentationConfig`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub summary: String,
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    pub projects: Vec<ProjectEntry>,
    pub skills: SkillSet,
    pub hobbies: String,
}
