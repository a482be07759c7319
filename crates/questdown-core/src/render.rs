//! Block assembly: tagged lines to an HTML fragment.
//!
//! Tagged lines are grouped at blank-line boundaries. Headings, list
//! runs, and code regions render as block elements; a group led by an
//! ordinary text line becomes a `<p>` with `<br>` between its lines.
//! The converter is a pure function over strings and cannot fail:
//! malformed input degrades to literal text, never to an error.

use std::borrow::Cow;

use crate::classify::{classify, ListKind, Tagged};
use crate::inline::{push_angle_escaped, render_inline};

/// Convert a restricted markdown subset into an HTML fragment.
///
/// Supported syntax: `#`/`##`/`###` headings, `**bold**`, `*italic*`,
/// fenced and inline code (with `<`/`>` escaped), flat `* ` bullet
/// lists, and flat numbered lists. Everything else passes through as
/// paragraph text. The result is a fragment, not a document; the
/// caller parses it into nodes before insertion.
///
/// No sanitization is performed: script tags or event-handler
/// attributes in the input survive conversion. The trust boundary is
/// the caller's sanitizer.
pub fn convert(markdown: &str) -> String {
    if markdown.is_empty() {
        return String::new();
    }

    let tagged = classify(markdown);
    let mut groups: Vec<String> = Vec::new();
    let mut parts: Vec<Part> = Vec::new();

    let mut i = 0;
    while i < tagged.len() {
        match &tagged[i] {
            Tagged::Blank => {
                flush_group(&mut parts, &mut groups);
                i += 1;
            }
            Tagged::Heading { level, text } => {
                let mut html = format!("<h{level}>");
                render_inline(text, &mut html);
                html.push_str(&format!("</h{level}>"));
                parts.push(Part::block(html));
                i += 1;
            }
            Tagged::Item { kind, .. } => {
                // A maximal run of adjacent same-kind items becomes one list.
                let run_kind = *kind;
                let mut html = String::from(open_tag(run_kind));
                while let Some(Tagged::Item { kind, text, .. }) = tagged.get(i) {
                    if *kind != run_kind {
                        break;
                    }
                    html.push_str("<li>");
                    render_inline(text, &mut html);
                    html.push_str("</li>");
                    i += 1;
                }
                html.push_str(close_tag(run_kind));
                parts.push(Part::block(html));
            }
            Tagged::Code { body, .. } => {
                let mut html = String::from("<pre><code>");
                push_angle_escaped(body.join("\n").trim(), &mut html);
                html.push_str("</code></pre>");
                parts.push(Part::block(html));
                i += 1;
            }
            Tagged::Plain(text) => {
                let mut html = String::new();
                render_inline(text, &mut html);
                // Text the author already wrote as HTML passes through
                // unwrapped, matching the paragraph rule below.
                let wrappable = !text.trim_start().starts_with('<');
                parts.push(Part { html, wrappable });
                i += 1;
            }
        }
    }
    flush_group(&mut parts, &mut groups);

    groups.join("\n")
}

/// Heuristic the call sites use to skip conversion of content that is
/// already HTML: a closing `</p>`, `</h*>`, or `</div>` tag.
pub fn is_html_fragment(text: &str) -> bool {
    text.contains("</p>") || text.contains("</h") || text.contains("</div>")
}

/// Render a generated message for insertion.
///
/// The single entry point shared by every caller: pre-existing HTML is
/// passed through borrowed and byte-for-byte unchanged; anything else
/// goes through [`convert`]. This makes conversion idempotent at the
/// call-site level — converted output contains closing tags and will
/// not be converted again.
pub fn render_message(text: &str) -> Cow<'_, str> {
    if is_html_fragment(text) {
        Cow::Borrowed(text)
    } else {
        Cow::Owned(convert(text))
    }
}

/// One rendered element of a group. `wrappable` is true only for
/// ordinary text lines, and decides whether the group becomes a
/// paragraph.
struct Part {
    html: String,
    wrappable: bool,
}

impl Part {
    fn block(html: String) -> Self {
        Self {
            html,
            wrappable: false,
        }
    }
}

fn flush_group(parts: &mut Vec<Part>, groups: &mut Vec<String>) {
    if parts.is_empty() {
        return;
    }

    let wrap = parts[0].wrappable;
    let mut pieces: Vec<&str> = parts.iter().map(|p| p.html.as_str()).collect();

    // Trim the group edges only; interior spacing is preserved.
    if let Some(first) = pieces.first_mut() {
        *first = first.trim_start();
    }
    if let Some(last) = pieces.last_mut() {
        *last = last.trim_end();
    }

    let html = if wrap {
        // Line boundaries inside a paragraph become <br>; element
        // interiors (a <pre> body, say) are never touched.
        format!("<p>{}</p>", pieces.join("<br>"))
    } else {
        pieces.join("\n")
    };

    if !html.is_empty() {
        groups.push(html);
    }
    parts.clear();
}

fn open_tag(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Ordered => "<ol>",
        ListKind::Unordered => "<ul>",
    }
}

fn close_tag(kind: ListKind) -> &'static str {
    match kind {
        ListKind::Ordered => "</ol>",
        ListKind::Unordered => "</ul>",
    }
}
