//! Line scanner with SIMD-accelerated newline detection.
//!
//! Splits input into lines for the classification pass. Lines borrow
//! directly from the input; nothing is allocated. A trailing `\r` is
//! stripped so CRLF input behaves like LF input.

use memchr::memchr;

/// A single line of input, without its line terminator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Line<'a> {
    /// The line text (no trailing `\n` or `\r\n`).
    pub text: &'a str,
}

impl<'a> Line<'a> {
    /// Check if this line contains only spaces and tabs.
    #[inline(always)]
    pub fn is_blank(&self) -> bool {
        self.text.bytes().all(|b| b == b' ' || b == b'\t')
    }

    /// Line text with leading/trailing whitespace removed.
    #[inline(always)]
    pub fn trimmed(&self) -> &'a str {
        self.text.trim()
    }
}

/// Iterator over the lines of an input string.
///
/// Uses `memchr` for newline scanning (SIMD on supported platforms).
pub struct Lines<'a> {
    input: &'a str,
    offset: usize,
}

impl<'a> Lines<'a> {
    #[inline]
    pub fn new(input: &'a str) -> Self {
        Self { input, offset: 0 }
    }
}

impl<'a> Iterator for Lines<'a> {
    type Item = Line<'a>;

    #[inline]
    fn next(&mut self) -> Option<Line<'a>> {
        let bytes = self.input.as_bytes();
        if self.offset >= bytes.len() {
            return None;
        }

        let start = self.offset;
        let end = match memchr(b'\n', &bytes[start..]) {
            Some(pos) => start + pos,
            None => bytes.len(),
        };

        // CRLF: drop the CR before the newline.
        let text_end = if end > start && bytes[end - 1] == b'\r' {
            end - 1
        } else {
            end
        };

        self.offset = if end < bytes.len() { end + 1 } else { end };

        Some(Line {
            text: &self.input[start..text_end],
        })
    }
}
