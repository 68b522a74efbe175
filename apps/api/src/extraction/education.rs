//! Education Parser — splits the education zone into credential entries.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::extraction::models::EducationEntry;

static DEGREE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:Bachelor|Master|PhD|Associate)|\b(?:B\.A|B\.S|M\.A|M\.S|Ph\.D)\b").unwrap()
});
static INSTITUTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(?:University|College|Institute)\b").unwrap());
static GRAD_YEAR_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\b20\d{2}\b").unwrap());
static GPA_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\bGPA\b[:\s]*([0-4]\.\d{1,2})|\b([0-4]\.\d{1,2}) ?/ ?4\.00?\b").unwrap()
});
static INLINE_SEPARATOR_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*(?:,|\||\s[-–]\s|\sat\s)\s*").unwrap());

const SCHOOL_WINDOW: usize = 3;
const YEAR_WINDOW: usize = 2;

pub fn parse_education(zone: &str) -> Vec<EducationEntry> {
    let lines: Vec<&str> = zone
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut entries = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if !DEGREE_RE.is_match(lines[i]) {
            i += 1;
            continue;
        }

        // An entry never reaches into the next degree line.
        let entry_end = (i + 1..lines.len())
            .find(|&j| DEGREE_RE.is_match(lines[j]))
            .unwrap_or(lines.len());

        let school_idx = first_in(&lines, i + 1, (i + 1 + SCHOOL_WINDOW).min(entry_end), |l| {
            INSTITUTION_RE.is_match(l)
        });

        let (degree, school, school_idx) = match school_idx {
            Some(s) => (lines[i].to_string(), lines[s].to_string(), s),
            None => match split_inline(lines[i]) {
                Some((degree, school)) => (degree, school, i),
                None => {
                    i += 1;
                    continue;
                }
            },
        };

        let year_line = first_in(
            &lines,
            school_idx + 1,
            (school_idx + 1 + YEAR_WINDOW).min(entry_end),
            |l| GRAD_YEAR_RE.is_match(l),
        )
        .or_else(|| [school_idx, i].into_iter().find(|&j| GRAD_YEAR_RE.is_match(lines[j])));

        let year = year_line
            .and_then(|j| GRAD_YEAR_RE.find_iter(lines[j]).last())
            .map(|m| m.as_str().to_string())
            .unwrap_or_default();

        let gpa = lines[i..entry_end].iter().find_map(|l| extract_gpa(l));

        entries.push(EducationEntry {
            degree,
            school,
            year,
            gpa,
        });

        i = entry_end;
    }

    debug!("Parsed {} education entries", entries.len());
    entries
}

fn first_in(
    lines: &[&str],
    start: usize,
    end: usize,
    pred: impl Fn(&str) -> bool,
) -> Option<usize> {
    (start..end).find(|&j| pred(lines[j]))
}

/// Splits "B.S. Computer Science, Stanford University" into degree and school.
/// The school is the first separated segment naming an institution; everything
/// before it is the degree.
fn split_inline(line: &str) -> Option<(String, String)> {
    let segments: Vec<&str> = INLINE_SEPARATOR_RE
        .split(line)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    let k = segments.iter().position(|s| INSTITUTION_RE.is_match(s))?;
    if k == 0 {
        return None;
    }
    Some((segments[..k].join(", "), segments[k].to_string()))
}

fn extract_gpa(line: &str) -> Option<String> {
    GPA_RE
        .captures(line)
        .and_then(|caps| caps.get(1).or_else(|| caps.get(2)))
        .map(|m| m.as_str().to_string())
}
