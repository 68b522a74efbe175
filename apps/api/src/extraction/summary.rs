//! Summary Extractor — a second, heading-driven pass over the full text.
//!
//! An explicit "SUMMARY:" / "OBJECTIVE" heading is a stronger signal than the
//! segmenter's paragraph-length guess, so this runs independently of it.

use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::normalize::collapse_whitespace;

/// Searched in this order; the first heading yielding an acceptable body wins.
pub const SUMMARY_HEADINGS: &[&str] = &[
    "PROFESSIONAL SUMMARY",
    "SUMMARY",
    "PROFILE",
    "OVERVIEW",
    "OBJECTIVE",
    "ABOUT",
    "CAREER OBJECTIVE",
];

/// Bodies must be strictly longer than this (chars).
const MIN_SUMMARY_LEN: usize = 20;

/// A heading starts a line and is followed by a colon or the end of the line.
static HEADING_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    SUMMARY_HEADINGS
        .iter()
        .map(|h| {
            Regex::new(&format!(r"(?im)^[ \t]*{}[ \t]*(?::|$)", regex::escape(h))).unwrap()
        })
        .collect()
});

static CAPS_HEADING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z][A-Z0-9 &/,'-]{2,}:?$").unwrap());
static SECTION_START_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)^(?:work |professional |technical )?(?:experience|education|skills|employment)\b")
        .unwrap()
});

/// Returns the first acceptable headed summary, or an empty string.
pub fn extract_summary(paragraphs: &str) -> String {
    HEADING_RES
        .iter()
        .filter_map(|re| re.find(paragraphs))
        .map(|m| capture_body(&paragraphs[m.end()..]))
        .find(|body| body.chars().count() > MIN_SUMMARY_LEN)
        .unwrap_or_default()
}

/// Text after a heading up to the next heading-like line, flattened to one line.
fn capture_body(rest: &str) -> String {
    let mut lines = rest.split('\n');
    // Remainder of the heading line itself ("SUMMARY: inline text").
    let mut body: Vec<&str> = lines.next().into_iter().collect();

    for line in lines {
        let trimmed = line.trim();
        if is_heading_line(trimmed) {
            break;
        }
        body.push(trimmed);
    }

    collapse_whitespace(&body.join(" "))
}

fn is_heading_line(line: &str) -> bool {
    CAPS_HEADING_RE.is_match(line) || SECTION_START_RE.is_match(line)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headed_summary_until_next_caps_heading() {
        let text = "Jane Doe\n\nPROFESSIONAL SUMMARY\nBackend engineer with eight years\nof payments experience.\n\nWORK EXPERIENCE\nSenior Engineer";
        assert_eq!(
            extract_summary(text),
            "Backend engineer with eight years of payments experience."
        );
    }

    #[test]
    fn test_inline_body_after_colon() {
        let text = "Objective: Seeking a junior analyst role in fintech.\nEducation\nB.S.";
        assert_eq!(
            extract_summary(text),
            "Seeking a junior analyst role in fintech."
        );
    }

    #[test]
    fn test_stops_at_mixed_case_section_keyword() {
        let text = "Summary\nPragmatic engineer who ships reliable systems.\nSkills: Rust, Go";
        assert_eq!(
            extract_summary(text),
            "Pragmatic engineer who ships reliable systems."
        );
    }

    #[test]
    fn test_experienced_word_does_not_end_summary() {
        let text = "SUMMARY\nEngineer focused on APIs.\nExperienced in distributed tracing.";
        assert_eq!(
            extract_summary(text),
            "Engineer focused on APIs. Experienced in distributed tracing."
        );
    }

    #[test]
    fn test_short_body_falls_through_to_next_heading() {
        let text = "SUMMARY\nToo short.\n\nPROFILE\nA much longer profile paragraph about the candidate.";
        assert_eq!(
            extract_summary(text),
            "A much longer profile paragraph about the candidate."
        );
    }

    #[test]
    fn test_body_must_exceed_twenty_chars() {
        let twenty = "a".repeat(20);
        assert_eq!(extract_summary(&format!("SUMMARY\n{twenty}")), "");

        let twenty_one = "a".repeat(21);
        assert_eq!(extract_summary(&format!("SUMMARY\n{twenty_one}")), twenty_one);
    }

    #[test]
    fn test_heading_word_inside_sentence_is_ignored() {
        let text = "I wrote a summary of the project for the about page.";
        assert_eq!(extract_summary(text), "");
    }

    #[test]
    fn test_career_objective_heading() {
        let text = "CAREER OBJECTIVE\nTo lead platform teams building developer tooling.";
        assert_eq!(
            extract_summary(text),
            "To lead platform teams building developer tooling."
        );
    }

    #[test]
    fn test_no_heading_yields_empty_string() {
        assert_eq!(extract_summary(""), "");
        assert_eq!(extract_summary("Jane Doe\njane@example.com"), "");
    }
}
