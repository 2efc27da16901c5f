//! Text normalization applied before any split.

use unicode_normalization::UnicodeNormalization;

/// Zero-width characters that survive extraction from PDFs and web pages.
const INVISIBLE: [char; 5] = ['\u{200B}', '\u{200C}', '\u{200D}', '\u{2060}', '\u{FEFF}'];

/// Normalize raw text for splitting.
///
/// - `\r\n` and `\r` become `\n`
/// - runs of three or more `\n` collapse to exactly two
/// - zero-width characters and ASCII control characters (other than `\n`
///   and `\t`) are removed
/// - leading and trailing whitespace is trimmed
/// - the result is put in Unicode NFC, so a letter and its combining accent
///   count as one character against `chunk_size`
///
/// ```rust
/// use docsplit::normalize;
///
/// assert_eq!(normalize("a\r\nb\r\n\r\n\r\n\r\nc  "), "a\nb\n\nc");
/// assert_eq!(normalize("cafe\u{301}"), "caf\u{e9}");
/// ```
#[must_use]
pub fn normalize(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut newlines = 0usize;
    let mut chars = text.chars().peekable();

    while let Some(c) = chars.next() {
        let c = if c == '\r' {
            if chars.peek() == Some(&'\n') {
                chars.next();
            }
            '\n'
        } else {
            c
        };

        if c == '\n' {
            newlines += 1;
            if newlines <= 2 {
                out.push(c);
            }
            continue;
        }

        if INVISIBLE.contains(&c) || (c.is_ascii_control() && c != '\t') {
            continue;
        }

        newlines = 0;
        out.push(c);
    }

    // Compose last: dropping a control char can bring a base letter and a
    // combining mark together.
    out.trim().nfc().collect()
}
