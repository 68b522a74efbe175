// Document-to-structured-resume extraction engine.
// Pure and synchronous: no I/O, no clock, no shared mutable state.
// Every stage is total; only a missing input at the boundary is an error.

pub mod contact;
pub mod dates;
pub mod education;
pub mod experience;
pub mod models;
pub mod normalize;
pub mod sections;
pub mod skills;
pub mod summary;

use thiserror::Error;
use tracing::debug;

pub use models::{ContactInfo, EducationEntry, ExperienceEntry, ExtractedResumeData, PRESENT};
pub use sections::{SectionKind, SectionRule, Segmenter};
pub use skills::MAX_SKILLS;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractionError {
    /// The caller supplied no text at all. An empty string is not this case.
    #[error("raw_text is required")]
    MissingText,
}

/// Runs the full pipeline. Holds only immutable configuration, so one instance
/// can be shared across concurrent requests.
#[derive(Debug, Clone, Default)]
pub struct ResumeExtractor {
    segmenter: Segmenter,
}

impl ResumeExtractor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Uses a custom section dispatch table instead of the default keyword sets.
    pub fn with_segmenter(segmenter: Segmenter) -> Self {
        Self { segmenter }
    }

    pub fn extract(&self, raw_text: &str) -> ExtractedResumeData {
        let text = normalize::normalize(raw_text);

        let contact = contact::extract_contact(&text);
        let zones = self.segmenter.segment(&text.paragraphs);
        let summary = summary::extract_summary(&text.paragraphs);
        let experience = experience::parse_experience(&zones.experience);
        let education = education::parse_education(&zones.education);
        let skills = skills::extract_skills(&zones.skills);

        debug!(
            "Extracted resume: {} chars, {} experience, {} education, {} skills, summary={}",
            text.paragraphs.len(),
            experience.len(),
            education.len(),
            skills.len(),
            !summary.is_empty()
        );

        ExtractedResumeData {
            contact,
            summary,
            experience,
            education,
            skills,
            raw_text: text.paragraphs,
        }
    }

    /// Rejects absent input; any present text, including `""`, is extracted.
    pub fn try_extract(
        &self,
        raw_text: Option<&str>,
    ) -> Result<ExtractedResumeData, ExtractionError> {
        raw_text
            .map(|text| self.extract(text))
            .ok_or(ExtractionError::MissingText)
    }
}

/// Single entry point: raw decoded text in, structured record out. Never fails.
pub fn extract_and_parse_resume(raw_text: &str) -> ExtractedResumeData {
    ResumeExtractor::default().extract(raw_text)
}

/// Boundary variant for callers whose input may be absent.
pub fn try_extract_and_parse_resume(
    raw_text: Option<&str>,
) -> Result<ExtractedResumeData, ExtractionError> {
    ResumeExtractor::default().try_extract(raw_text)
}
