//! Experience Parser — splits the experience zone into job entries.
//!
//! An entry is recognized by a title line (role keyword), followed by a company
//! line (organization keyword) and optionally a date line. Everything after the
//! date line up to the next title line is the description. A title without a
//! company nearby is not an entry and is skipped.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use crate::extraction::dates::{has_date_marker, resolve_date_range};
use crate::extraction::models::ExperienceEntry;
use crate::extraction::normalize::collapse_whitespace;

static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"\b(?:Engineer|Developer|Manager|Analyst|Specialist|Coordinator|Director|Lead|Senior|Junior|Intern)\b",
    )
    .unwrap()
});
static COMPANY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:Inc|LLC|Corp|Company|Technologies|Systems)\b").unwrap()
});

/// How many lines after the title may hold the company.
const COMPANY_WINDOW: usize = 3;
/// How many lines after the company may hold the date range.
const DATE_WINDOW: usize = 2;

pub fn is_title_line(line: &str) -> bool {
    TITLE_RE.is_match(line)
}

pub fn is_company_line(line: &str) -> bool {
    COMPANY_RE.is_match(line)
}

pub fn parse_experience(zone: &str) -> Vec<ExperienceEntry> {
    let lines: Vec<&str> = zone
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect();

    let mut entries = Vec::new();
    let mut i = 0;

    while i < lines.len() {
        if !is_title_line(lines[i]) {
            i += 1;
            continue;
        }

        let Some(company_idx) = find_in_window(&lines, i + 1, COMPANY_WINDOW, is_company_line)
        else {
            i += 1;
            continue;
        };

        let date_idx = find_in_window(&lines, company_idx + 1, DATE_WINDOW, has_date_marker);
        let dates = date_idx
            .map(|d| resolve_date_range(lines[d]))
            .unwrap_or_default();

        let desc_start = date_idx.unwrap_or(company_idx) + 1;
        let desc_end = (desc_start..lines.len())
            .find(|&j| is_title_line(lines[j]))
            .unwrap_or(lines.len());

        entries.push(ExperienceEntry {
            title: lines[i].to_string(),
            company: lines[company_idx].to_string(),
            start_date: dates.start,
            end_date: dates.end,
            description: collapse_whitespace(&lines[desc_start..desc_end].join(" ")),
        });

        i = desc_end;
    }

    debug!("Parsed {} experience entries", entries.len());
    entries
}

fn find_in_window(
    lines: &[&str],
    start: usize,
    window: usize,
    pred: impl Fn(&str) -> bool,
) -> Option<usize> {
    let end = (start + window).min(lines.len());
    (start..end).find(|&j| pred(lines[j]))
}
