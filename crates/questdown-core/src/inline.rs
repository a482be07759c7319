//! Inline formatting: code spans, bold, italic.
//!
//! A single left-to-right pass over one line of tagged content,
//! writing HTML into the output buffer. Uses `memchr` to skip runs of
//! ordinary text. Whichever delimiter opens first wins, so a code
//! span is opaque to emphasis and `**` is never split into two `*`.
//! Unmatched delimiters are emitted literally; the pass cannot fail.

use memchr::{memchr, memchr2};

/// Render the inline content of a line into `out`.
pub fn render_inline(text: &str, out: &mut String) {
    let bytes = text.as_bytes();
    let mut pos = 0;

    while pos < bytes.len() {
        let special = match memchr2(b'`', b'*', &bytes[pos..]) {
            Some(off) => pos + off,
            None => break,
        };

        out.push_str(&text[pos..special]);
        pos = special;

        let consumed = if bytes[special] == b'`' {
            try_code_span(text, pos, out)
        } else {
            try_asterisk(text, pos, out)
        };

        match consumed {
            Some(next) => pos = next,
            None => {
                // Not a valid span here; the delimiter is literal text.
                out.push(bytes[special] as char);
                pos += 1;
            }
        }
    }

    out.push_str(&text[pos..]);
}

/// Append `text` with `<` and `>` entity-escaped.
///
/// `&` is deliberately left alone, matching the escaping the editor
/// callers rely on for code content.
pub(crate) fn push_angle_escaped(text: &str, out: &mut String) {
    for c in text.chars() {
        match c {
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

/// `` `code` `` with non-empty content, angle-escaped, no inner markup.
#[inline]
fn try_code_span(text: &str, pos: usize, out: &mut String) -> Option<usize> {
    let bytes = text.as_bytes();
    let close = pos + 1 + memchr(b'`', &bytes[pos + 1..])?;
    if close == pos + 1 {
        return None;
    }
    out.push_str("<code>");
    push_angle_escaped(&text[pos + 1..close], out);
    out.push_str("</code>");
    Some(close + 1)
}

#[inline]
fn try_asterisk(text: &str, pos: usize, out: &mut String) -> Option<usize> {
    let bytes = text.as_bytes();
    if bytes.get(pos + 1) == Some(&b'*') {
        try_strong(text, pos, out)
    } else {
        try_emphasis(text, pos, out)
    }
}

/// `**strong**`: content non-empty with no literal `*` inside, so the
/// first `*` after the opener must close the span (and be doubled).
#[inline]
fn try_strong(text: &str, pos: usize, out: &mut String) -> Option<usize> {
    let bytes = text.as_bytes();
    let content_start = pos + 2;
    let close = content_start + memchr(b'*', bytes.get(content_start..)?)?;
    if close == content_start || bytes.get(close + 1) != Some(&b'*') {
        return None;
    }
    out.push_str("<strong>");
    render_inline(&text[content_start..close], out);
    out.push_str("</strong>");
    Some(close + 2)
}

/// `*emphasis*`: same content rule as strong, single delimiter.
#[inline]
fn try_emphasis(text: &str, pos: usize, out: &mut String) -> Option<usize> {
    let bytes = text.as_bytes();
    let content_start = pos + 1;
    let close = content_start + memchr(b'*', bytes.get(content_start..)?)?;
    if close == content_start {
        return None;
    }
    out.push_str("<em>");
    render_inline(&text[content_start..close], out);
    out.push_str("</em>");
    Some(close + 1)
}
