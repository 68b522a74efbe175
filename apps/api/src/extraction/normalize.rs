//! Text Normalizer — canonical line-oriented text from raw decoder output.
//!
//! Two forms are produced from the same input:
//! - `paragraphs`: one line per source line, blank lines collapsed to a single
//!   paragraph separator. Segmentation and line-based parsers read this form.
//! - `collapsed`: every whitespace run (newlines included) reduced to one space.
//!   Pattern matching that may span lines reads this form.

/// Both normalized forms of one input text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NormalizedText {
    pub paragraphs: String,
    pub collapsed: String,
}

pub fn normalize(raw: &str) -> NormalizedText {
    let paragraphs = paragraph_form(raw);
    let collapsed = collapse_whitespace(&paragraphs);
    NormalizedText {
        paragraphs,
        collapsed,
    }
}

/// Unifies line endings, collapses horizontal whitespace inside each line and
/// reduces any run of blank lines to exactly one. Leading and trailing blank
/// lines are dropped. A form feed (page break) counts as a paragraph boundary.
pub fn paragraph_form(raw: &str) -> String {
    let unified = raw
        .replace("\r\n", "\n")
        .replace('\r', "\n")
        .replace('\x0C', "\n\n");

    let mut lines: Vec<String> = Vec::new();
    let mut pending_blank = false;

    for line in unified.split('\n') {
        let line = collapse_whitespace(line);
        if line.is_empty() {
            pending_blank = !lines.is_empty();
            continue;
        }
        if pending_blank {
            lines.push(String::new());
            pending_blank = false;
        }
        lines.push(line);
    }

    lines.join("\n")
}

pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
