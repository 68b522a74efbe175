use serde::{Deserialize, Serialize};

/// Sentinel end date for ongoing roles.
pub const PRESENT: &str = "Present";

/// Identity and contact fields. Every field is optional; absence is a valid outcome.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

impl ContactInfo {
    pub fn is_empty(&self) -> bool {
        self.full_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
            && self.location.is_none()
            && self.linkedin.is_none()
            && self.website.is_none()
    }
}

/// One job block. All fields are always present, possibly as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceEntry {
    pub title: String,
    pub company: String,
    pub start_date: String,
    /// Either a year or the `"Present"` sentinel.
    pub end_date: String,
    /// Line breaks collapsed to single spaces.
    pub description: String,
}

/// One credential block. `degree` and `school` are non-empty for every emitted entry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EducationEntry {
    pub degree: String,
    pub school: String,
    pub year: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gpa: Option<String>,
}

/// Root output of the extraction pipeline. Built once per request, never mutated after.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractedResumeData {
    pub contact: ContactInfo,
    pub summary: String,
    /// Order of appearance in the source text, not chronological.
    pub experience: Vec<ExperienceEntry>,
    pub education: Vec<EducationEntry>,
    /// Unique, first-occurrence order, at most `MAX_SKILLS` items.
    pub skills: Vec<String>,
    /// Paragraph-preserving normalized text.
    pub raw_text: String,
}

impl ExtractedResumeData {
    /// Whitespace-separated token count of the normalized text.
    pub fn word_count(&self) -> usize {
        self.raw_text.split_whitespace().count()
    }

    /// True when no structured field was populated.
    pub fn is_empty(&self) -> bool {
        self.contact.is_empty()
            && self.summary.is_empty()
            && self.experience.is_empty()
            && self.education.is_empty()
            && self.skills.is_empty()
    }
}
