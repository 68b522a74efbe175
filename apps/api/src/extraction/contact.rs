//! Contact Extractor — identity and contact fields by pattern recognition.
//!
//! Runs over the whole document, independent of section segmentation, because
//! contact details usually sit above the first heading. Each field takes the
//! first confident match; fields never influence each other except that the
//! website pass ignores text already claimed by an email or LinkedIn URL.

use std::ops::Range;
use std::sync::LazyLock;

use regex::Regex;

use crate::extraction::models::ContactInfo;
use crate::extraction::normalize::NormalizedText;

/// Only this many leading lines are considered for the name.
pub const NAME_SCAN_LINES: usize = 10;
const NAME_MIN_LEN: usize = 5;
const NAME_MAX_LEN: usize = 50;

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}").unwrap());

/// Tried in order; the first pattern with any match wins.
static PHONE_RES: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?:\+1[ .-]?)?\(\d{3}\)[ .-]?\d{3}[ .-]?\d{4}\b",
        r"(?:\+1[ .-]?)?\b\d{3}[.-]\d{3}[.-]\d{4}\b",
        r"(?:\+1[ .-]?)?\b\d{3} \d{3} \d{4}\b",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static LINKEDIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:https?://)?(?:[a-z]{2,3}\.)?linkedin\.com/(?:in|pub)/([A-Za-z0-9_%-]+)/?")
        .unwrap()
});

static WEBSITE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\b(?:https?://)?(?:www\.)?(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+(?:com|io|dev|net|org|me|co|app|ai|tech|xyz|info|us)\b(?:/[^\s,;|()<>]*)?",
    )
    .unwrap()
});

static NAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][A-Za-z'.-]*(?: [A-Z][A-Za-z'.-]*)+$").unwrap()
});

static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b([A-Z][a-z]*\.?(?:[ -][A-Z][a-z]+)*), ?([A-Z]{2})\b(?: (\d{5})\b)?").unwrap()
});

/// US states and territories, then Canadian provinces.
const REGION_CODES: &[&str] = &[
    "AL", "AK", "AZ", "AR", "CA", "CO", "CT", "DE", "DC", "FL", "GA", "HI", "ID", "IL", "IN",
    "IA", "KS", "KY", "LA", "ME", "MD", "MA", "MI", "MN", "MS", "MO", "MT", "NE", "NV", "NH",
    "NJ", "NM", "NY", "NC", "ND", "OH", "OK", "OR", "PA", "RI", "SC", "SD", "TN", "TX", "UT",
    "VT", "VA", "WA", "WV", "WI", "WY", "PR", "AB", "BC", "MB", "NB", "NL", "NS", "NT", "NU",
    "ON", "PE", "QC", "SK", "YT",
];

pub fn extract_contact(text: &NormalizedText) -> ContactInfo {
    let collapsed = text.collapsed.as_str();

    let email_spans: Vec<Range<usize>> =
        EMAIL_RE.find_iter(collapsed).map(|m| m.range()).collect();
    let linkedin_spans: Vec<Range<usize>> =
        LINKEDIN_RE.find_iter(collapsed).map(|m| m.range()).collect();

    let email = EMAIL_RE.find(collapsed).map(|m| m.as_str().to_string());
    let phone = extract_phone(collapsed);
    let linkedin = extract_linkedin(collapsed);

    let claimed: Vec<Range<usize>> = email_spans.into_iter().chain(linkedin_spans).collect();
    let website = extract_website(collapsed, &claimed);

    let full_name = extract_name(&text.paragraphs);
    let location = extract_location(&text.paragraphs);

    ContactInfo {
        full_name,
        email,
        phone,
        location,
        linkedin,
        website,
    }
}

fn extract_phone(text: &str) -> Option<String> {
    PHONE_RES
        .iter()
        .find_map(|re| re.find(text))
        .map(|m| m.as_str().trim().to_string())
}

fn extract_linkedin(text: &str) -> Option<String> {
    LINKEDIN_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|slug| format!("https://linkedin.com/in/{}", slug.as_str()))
}

fn extract_website(text: &str, claimed: &[Range<usize>]) -> Option<String> {
    WEBSITE_RE
        .find_iter(text)
        .filter(|m| !claimed.iter().any(|span| overlaps(span, &m.range())))
        .filter(|m| !text[..m.start()].ends_with('@'))
        .map(|m| m.as_str().trim_end_matches('.'))
        .find(|candidate| !candidate.to_ascii_lowercase().contains("linkedin.com"))
        .map(ensure_scheme)
}

fn ensure_scheme(url: &str) -> String {
    let lower = url.to_ascii_lowercase();
    if lower.starts_with("https://") || lower.starts_with("http://") {
        url.to_string()
    } else {
        format!("https://{url}")
    }
}

fn overlaps(a: &Range<usize>, b: &Range<usize>) -> bool {
    a.start < b.end && b.start < a.end
}

/// Best-effort guess: the first short line of capitalized words near the top.
fn extract_name(paragraphs: &str) -> Option<String> {
    paragraphs
        .lines()
        .take(NAME_SCAN_LINES)
        .map(str::trim)
        .find(|line| is_name_line(line))
        .map(String::from)
}

fn is_name_line(line: &str) -> bool {
    let len = line.chars().count();
    if !(NAME_MIN_LEN..=NAME_MAX_LEN).contains(&len) {
        return false;
    }
    let lower = line.to_lowercase();
    if line.contains('@') || lower.contains("http") || lower.contains("resume") {
        return false;
    }
    if line.chars().any(|c| c.is_ascii_digit()) {
        return false;
    }
    NAME_RE.is_match(line)
}

fn extract_location(paragraphs: &str) -> Option<String> {
    LOCATION_RE
        .captures_iter(paragraphs)
        .find(|caps| REGION_CODES.contains(&&caps[2]))
        .map(|caps| match caps.get(3) {
            Some(zip) => format!("{}, {} {}", &caps[1], &caps[2], zip.as_str()),
            None => format!("{}, {}", &caps[1], &caps[2]),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extraction::normalize::normalize;

    const HEADER: &str = "Jane Doe\n\
        Austin, TX 78701\n\
        jane.doe@gmail.com | (512) 555-0142\n\
        linkedin.com/in/janedoe | github.com/janedoe\n\
        \n\
        PROFESSIONAL SUMMARY\n\
        Backend engineer.";

    fn contact_of(text: &str) -> ContactInfo {
        extract_contact(&normalize(text))
    }

    #[test]
    fn test_full_header_extracts_every_field() {
        let c = contact_of(HEADER);
        assert_eq!(c.full_name.as_deref(), Some("Jane Doe"));
        assert_eq!(c.location.as_deref(), Some("Austin, TX 78701"));
        assert_eq!(c.email.as_deref(), Some("jane.doe@gmail.com"));
        assert_eq!(c.phone.as_deref(), Some("(512) 555-0142"));
        assert_eq!(c.linkedin.as_deref(), Some("https://linkedin.com/in/janedoe"));
        assert_eq!(c.website.as_deref(), Some("https://github.com/janedoe"));
    }

    #[test]
    fn test_empty_text_has_no_fields() {
        assert!(contact_of("").is_empty());
    }

    #[test]
    fn test_single_email_is_extracted_exactly() {
        let c = contact_of("Reach me at first.last+jobs@mail.example.org any time");
        assert_eq!(c.email.as_deref(), Some("first.last+jobs@mail.example.org"));
    }

    #[test]
    fn test_email_domain_is_not_a_website() {
        let c = contact_of("jane@acme.com");
        assert_eq!(c.website, None);
    }

    #[test]
    fn test_phone_with_country_code() {
        let c = contact_of("Phone: +1 555-123-4567");
        assert_eq!(c.phone.as_deref(), Some("+1 555-123-4567"));
    }

    #[test]
    fn test_phone_dashed_form() {
        let c = contact_of("call 555.123.4567 today");
        assert_eq!(c.phone.as_deref(), Some("555.123.4567"));
    }

    #[test]
    fn test_parenthesized_phone_has_priority() {
        let c = contact_of("Fax 555-999-0000 Cell (555) 123-4567");
        assert_eq!(c.phone.as_deref(), Some("(555) 123-4567"));
    }

    #[test]
    fn test_linkedin_pub_is_canonicalized() {
        let c = contact_of("https://www.linkedin.com/pub/jane-doe/1/2/3");
        assert_eq!(c.linkedin.as_deref(), Some("https://linkedin.com/in/jane-doe"));
        assert_eq!(c.website, None);
    }

    #[test]
    fn test_website_keeps_existing_scheme() {
        let c = contact_of("Portfolio: http://janedoe.dev.");
        assert_eq!(c.website.as_deref(), Some("http://janedoe.dev"));
    }

    #[test]
    fn test_name_rejects_resume_heading() {
        let c = contact_of("RESUME OF\nJohn Smith");
        assert_eq!(c.full_name.as_deref(), Some("John Smith"));
    }

    #[test]
    fn test_name_rejects_lines_with_digits_or_at() {
        let c = contact_of("Apt 4 Main Street\nJohn Q@ Public\nMary Ann Lee");
        assert_eq!(c.full_name.as_deref(), Some("Mary Ann Lee"));
    }

    #[test]
    fn test_name_only_scans_leading_lines() {
        let mut text = "x\n".repeat(NAME_SCAN_LINES);
        text.push_str("Late Name");
        assert_eq!(contact_of(&text).full_name, None);
    }

    #[test]
    fn test_single_word_is_not_a_name() {
        assert_eq!(contact_of("Jane").full_name, None);
    }

    #[test]
    fn test_location_requires_state_code() {
        let c = contact_of("Skills: Python, JS\nSeattle, WA");
        assert_eq!(c.location.as_deref(), Some("Seattle, WA"));
    }

    #[test]
    fn test_location_without_zip() {
        let c = contact_of("San Francisco, CA");
        assert_eq!(c.location.as_deref(), Some("San Francisco, CA"));
    }

    #[test]
    fn test_location_keeps_whole_city_name() {
        let cases = [
            ("Salt Lake City, UT 84101", "Salt Lake City, UT 84101"),
            ("St. Louis, MO", "St. Louis, MO"),
            ("Winston-Salem, NC", "Winston-Salem, NC"),
        ];
        for (input, expected) in cases {
            assert_eq!(contact_of(input).location.as_deref(), Some(expected), "{input}");
        }
    }

    #[test]
    fn test_location_accepts_canadian_province() {
        let c = contact_of("Toronto, ON");
        assert_eq!(c.location.as_deref(), Some("Toronto, ON"));
    }

    #[test]
    fn test_location_rejects_unknown_region_code() {
        assert_eq!(contact_of("Engineer, XY").location, None);
    }
}
