//! Line tagging for the conversion pipeline.
//!
//! Every line is tagged before any inline or paragraph processing.
//! Fenced code regions are resolved first, so their content is opaque
//! to the heading, list, and paragraph rules — a code line reading
//! `* foo` stays code.

use crate::line::{Line, Lines};

/// List ordering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListKind {
    /// Numbered list (`1. `, `2. `, ...). Source numbering is discarded.
    Ordered,
    /// Bulleted list (`* `).
    Unordered,
}

/// A classified piece of input.
///
/// `Heading`, `Item`, and `Plain` carry single-line content; `Code`
/// spans from its opening fence to its closing fence and captures the
/// body verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tagged<'a> {
    /// A line of only spaces and tabs. Paragraph boundary.
    Blank,
    /// `# `, `## `, or `### ` at column 0 (longest prefix first).
    Heading { level: u8, text: &'a str },
    /// A list item. Indentation is recorded but never produces
    /// nesting; all items of a run render into one flat list.
    Item {
        kind: ListKind,
        indent: usize,
        text: &'a str,
    },
    /// A fenced code region. `lang` is the token after the opening
    /// backticks; it is a hint only and is not rendered.
    Code { lang: &'a str, body: Vec<&'a str> },
    /// Anything else; goes through inline formatting unchanged.
    Plain(&'a str),
}

/// Tag every line of the input.
///
/// Total over all inputs: unrecognized or malformed syntax falls back
/// to `Plain`, never to an error. An opening fence with no closing
/// fence is itself reclassified as plain text.
pub fn classify(input: &str) -> Vec<Tagged<'_>> {
    let lines: Vec<Line> = Lines::new(input).collect();
    let mut tagged = Vec::with_capacity(lines.len());

    let mut i = 0;
    while i < lines.len() {
        let line = lines[i];

        if let Some(lang) = fence_lang(line) {
            // Scan ahead for the closing fence; everything between is
            // captured verbatim, blank lines and list markers included.
            if let Some(close) = lines[i + 1..].iter().position(|l| fence_lang(*l).is_some()) {
                let body = lines[i + 1..i + 1 + close].iter().map(|l| l.text).collect();
                tagged.push(Tagged::Code { lang, body });
                i += close + 2;
                continue;
            }
            // Unclosed fence: leave the backticks as literal text.
            tagged.push(Tagged::Plain(line.text));
            i += 1;
            continue;
        }

        tagged.push(classify_line(line));
        i += 1;
    }

    tagged
}

/// Language token of a fence line, or `None` if the line is not a fence.
#[inline]
fn fence_lang(line: Line<'_>) -> Option<&str> {
    line.trimmed().strip_prefix("```").map(str::trim)
}

#[inline]
fn classify_line(line: Line<'_>) -> Tagged<'_> {
    if line.is_blank() {
        return Tagged::Blank;
    }

    let text = line.text;

    // Longest prefix first so `### ` is not consumed as `# `.
    for (prefix, level) in [("### ", 3u8), ("## ", 2), ("# ", 1)] {
        if let Some(rest) = text.strip_prefix(prefix) {
            return Tagged::Heading { level, text: rest };
        }
    }

    let indent = text.len() - text.trim_start_matches([' ', '\t']).len();
    let rest = &text[indent..];

    if let Some(item) = rest.strip_prefix("* ") {
        return Tagged::Item {
            kind: ListKind::Unordered,
            indent,
            text: item,
        };
    }

    if let Some(item) = numbered_item(rest) {
        return Tagged::Item {
            kind: ListKind::Ordered,
            indent,
            text: item,
        };
    }

    Tagged::Plain(text)
}

/// Match `<digits>. <content>`, returning the content.
#[inline]
fn numbered_item(rest: &str) -> Option<&str> {
    let bytes = rest.as_bytes();
    let digits = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    rest[digits..].strip_prefix(". ")
}
