//! Skills Extractor — tokenizes the skills zone into a flat, deduplicated list.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;

/// Hard cap on returned skills; extras are dropped silently.
pub const MAX_SKILLS: usize = 20;

const MIN_TOKEN_LEN: usize = 2;
const MAX_TOKEN_LEN: usize = 30;
/// A "Label: a, b" prefix is only stripped when the label is this short.
const MAX_LABEL_LEN: usize = 30;

const SKILL_HEADINGS: &[&str] = &[
    "skills",
    "technical skills",
    "technologies",
    "competencies",
    "core competencies",
];

static DELIMITER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[,;|•·▪●◦‣∙■]").unwrap());

pub fn extract_skills(zone: &str) -> Vec<String> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut skills = Vec::new();

    let tokens = zone
        .lines()
        .map(strip_label)
        .flat_map(|line| DELIMITER_RE.split(line))
        .map(clean_token)
        .filter(|t| is_skill_token(t));

    for token in tokens {
        if skills.len() == MAX_SKILLS {
            break;
        }
        if seen.insert(token.to_string()) {
            skills.push(token.to_string());
        }
    }

    skills
}

/// "Languages: Rust, Go" → "Rust, Go". A bare "Skills:" heading becomes empty.
fn strip_label(line: &str) -> &str {
    match line.split_once(':') {
        Some((label, rest)) if label.trim().chars().count() <= MAX_LABEL_LEN => rest,
        _ => line,
    }
}

fn clean_token(token: &str) -> &str {
    token
        .trim()
        .trim_start_matches(['-', '*', '–'])
        .trim()
}

fn is_skill_token(token: &str) -> bool {
    let len = token.chars().count();
    if !(MIN_TOKEN_LEN..MAX_TOKEN_LEN).contains(&len) {
        return false;
    }
    if token.chars().all(|c| c.is_ascii_digit() || c == '.') {
        return false;
    }
    !SKILL_HEADINGS.contains(&token.to_lowercase().as_str())
}
