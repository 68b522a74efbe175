//! Section Segmenter — assigns each paragraph to a coarse zone.
//!
//! Classification is a dispatch table of `SectionRule`s tested in order; the
//! first rule whose keyword set hits the paragraph claims it. A paragraph that
//! mentions both "experience" and "education" therefore lands in experience.
//! Unclaimed paragraphs fill the summary slot once (if moderately sized) and
//! otherwise go to `other`.

use tracing::debug;

/// Summary paragraphs are at least this long (chars)...
const SUMMARY_MIN_LEN: usize = 50;
/// ...and strictly shorter than this.
const SUMMARY_MAX_LEN: usize = 500;

const ZONE_SEPARATOR: &str = "\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionKind {
    Summary,
    Experience,
    Education,
    Skills,
    Other,
}

/// One entry of the classification table: a zone and the keywords that select it.
#[derive(Debug, Clone)]
pub struct SectionRule {
    pub kind: SectionKind,
    pub keywords: Vec<String>,
}

impl SectionRule {
    pub fn new(kind: SectionKind, keywords: &[&str]) -> Self {
        Self {
            kind,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// `paragraph_lower` must already be lowercased.
    fn matches(&self, paragraph_lower: &str) -> bool {
        self.keywords.iter().any(|k| paragraph_lower.contains(k.as_str()))
    }
}

/// Default precedence: experience, then education, then skills.
pub fn default_rules() -> Vec<SectionRule> {
    vec![
        SectionRule::new(
            SectionKind::Experience,
            &[
                "work experience",
                "professional experience",
                "employment",
                "experience",
            ],
        ),
        SectionRule::new(
            SectionKind::Education,
            &["education", "academic", "degree", "university", "college"],
        ),
        SectionRule::new(
            SectionKind::Skills,
            &["skills", "technologies", "technical skills", "competencies"],
        ),
    ]
}

/// Zone text per section. Paragraphs within a zone are joined by a blank line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Sections {
    pub summary: String,
    pub experience: String,
    pub education: String,
    pub skills: String,
    pub other: String,
}

impl Sections {
    fn push(&mut self, kind: SectionKind, paragraph: &str) {
        let zone = match kind {
            SectionKind::Summary => &mut self.summary,
            SectionKind::Experience => &mut self.experience,
            SectionKind::Education => &mut self.education,
            SectionKind::Skills => &mut self.skills,
            SectionKind::Other => &mut self.other,
        };
        if !zone.is_empty() {
            zone.push_str(ZONE_SEPARATOR);
        }
        zone.push_str(paragraph);
    }
}

#[derive(Debug, Clone)]
pub struct Segmenter {
    rules: Vec<SectionRule>,
}

impl Default for Segmenter {
    fn default() -> Self {
        Self::new(default_rules())
    }
}

impl Segmenter {
    pub fn new(rules: Vec<SectionRule>) -> Self {
        Self { rules }
    }

    /// Returns the zone a single paragraph belongs to given the current state.
    pub fn classify(&self, paragraph: &str, summary_taken: bool) -> SectionKind {
        let lower = paragraph.to_lowercase();
        if let Some(rule) = self.rules.iter().find(|r| r.matches(&lower)) {
            return rule.kind;
        }
        let len = paragraph.chars().count();
        if !summary_taken && (SUMMARY_MIN_LEN..SUMMARY_MAX_LEN).contains(&len) {
            SectionKind::Summary
        } else {
            SectionKind::Other
        }
    }

    /// Splits paragraph-form text on blank lines and routes each paragraph.
    pub fn segment(&self, paragraphs: &str) -> Sections {
        let mut sections = Sections::default();
        let mut count = 0usize;

        for paragraph in split_paragraphs(paragraphs) {
            count += 1;
            let kind = self.classify(paragraph, !sections.summary.is_empty());
            sections.push(kind, paragraph);
        }

        debug!(
            "Segmented {} paragraphs: experience={}B education={}B skills={}B summary={}B other={}B",
            count,
            sections.experience.len(),
            sections.education.len(),
            sections.skills.len(),
            sections.summary.len(),
            sections.other.len()
        );

        sections
    }
}

pub fn split_paragraphs(text: &str) -> impl Iterator<Item = &str> {
    text.split("\n\n").map(str::trim).filter(|p| !p.is_empty())
}
