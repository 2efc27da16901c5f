//! Fixed-length splitting with overlap and boundary search.
//!
//! ## How It Works
//!
//! ```text
//! size = 30, overlap = 10, step = 20
//!
//! Document: "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789"  (36 chars)
//!
//! Chunk 0: "ABCDEFGHIJKLMNOPQRSTUVWXYZ0123"   [0..30]
//! Chunk 1: "UVWXYZ0123456789"                 [20..36]  <- starts at 30 - 10
//! ```
//!
//! ## Finding a Better Cut
//!
//! A hard cut every N characters severs words and sentences. Before cutting,
//! each window searches backward from its right edge, never past it:
//!
//! ```text
//! 1. sentence terminator   "...end of thought.|"   (not "v1.|2" or "example.|com")
//! 2. newline               "...last line\n|"
//! 3. whitespace/punct      "...some word |"      (only in the right half)
//! 4. hard edge             "...mid-wo|rd"        (snapped to a grapheme boundary)
//! ```
//!
//! The word-boundary search stops at the window midpoint: cutting a
//! 1000-character window down to 12 characters to save one word produces a
//! useless chunk.
//!
//! After a cut, the next window starts `overlap` characters before it, so
//! the overlap is preserved relative to where the previous chunk actually
//! ended.
//!
//! ## Characters, Not Bytes
//!
//! Every offset here is a character index. Slicing goes through a table of
//! byte offsets built once per call, so multi-byte code points are never
//! split:
//!
//! ```text
//! "日本語"  chars: [日, 本, 語]  bytes: [0, 3, 6, 9]
//! ```

use unicode_segmentation::UnicodeSegmentation;

use crate::sentence::is_terminator;
use crate::{Error, Result};

/// CJK punctuation that marks a clause or word boundary.
const CJK_BREAKS: [char; 10] = ['，', '、', '：', '；', '）', '》', '」', '』', '】', '…'];

fn is_break(c: char) -> bool {
    c.is_whitespace() || c.is_ascii_punctuation() || CJK_BREAKS.contains(&c)
}

/// Whether `chars[i]` ends a sentence. A terminator directly followed by an
/// ASCII letter or digit sits inside a token such as a decimal, a version
/// number, or a domain name.
fn ends_sentence(chars: &[char], i: usize) -> bool {
    is_terminator(chars[i]) && !chars.get(i + 1).is_some_and(char::is_ascii_alphanumeric)
}

/// Fixed-length splitter with configurable overlap.
///
/// ## Example
///
/// ```rust
/// use docsplit::LengthSplitter;
///
/// let splitter = LengthSplitter::new(30, 10).unwrap();
/// let chunks = splitter.split("ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789");
///
/// assert_eq!(chunks.len(), 2);
/// assert_eq!(chunks[0].len(), 30);
/// assert_eq!(&chunks[0][20..], &chunks[1][..10]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LengthSplitter {
    size: usize,
    overlap: usize,
}

impl LengthSplitter {
    /// Create a new fixed-length splitter.
    ///
    /// # Arguments
    ///
    /// * `size` - Maximum chunk size in characters
    /// * `overlap` - Characters to overlap between adjacent chunks
    ///
    /// # Errors
    ///
    /// Returns an error if `size == 0` or `overlap >= size`.
    pub fn new(size: usize, overlap: usize) -> Result<Self> {
        if size == 0 {
            return Err(Error::InvalidChunkSize(size));
        }
        if overlap >= size {
            return Err(Error::OverlapExceedsSize { size, overlap });
        }
        Ok(Self { size, overlap })
    }

    /// The maximum chunk size in characters.
    #[must_use]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// The overlap between adjacent windows.
    #[must_use]
    pub const fn overlap(&self) -> usize {
        self.overlap
    }

    /// The step between window starts when no boundary adjustment occurs.
    #[must_use]
    pub const fn step(&self) -> usize {
        self.size - self.overlap
    }

    /// Split `text` into trimmed windows of at most `size` characters.
    #[must_use]
    pub fn split(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let n = chars.len();
        if n == 0 {
            return vec![];
        }

        // offsets[i] is the byte offset of char i; offsets[n] == text.len()
        let mut offsets: Vec<usize> = text.char_indices().map(|(b, _)| b).collect();
        offsets.push(text.len());

        let mut chunks = Vec::with_capacity(self.estimate_chunks(n));
        let mut start = 0;

        loop {
            let edge = (start + self.size).min(n);
            let end = if edge < n {
                find_cut(text, &chars, &offsets, start, edge)
            } else {
                edge
            };

            let piece = text[offsets[start]..offsets[end]].trim();
            if !piece.is_empty() {
                chunks.push(piece.to_string());
            }

            if end >= n {
                break;
            }

            let next = end.saturating_sub(self.overlap);
            start = if next > start { next } else { end };
        }

        chunks
    }

    /// Estimate the number of windows for a text of `char_len` characters.
    #[must_use]
    pub fn estimate_chunks(&self, char_len: usize) -> usize {
        if char_len <= self.size {
            return usize::from(char_len > 0);
        }
        (char_len - self.overlap).div_ceil(self.step())
    }
}

/// Pick the cut for window `[start, edge)`. Always in `(start, edge]`.
fn find_cut(text: &str, chars: &[char], offsets: &[usize], start: usize, edge: usize) -> usize {
    if let Some(i) = (start..edge).rev().find(|&i| ends_sentence(chars, i)) {
        return i + 1;
    }

    if let Some(i) = chars[start..edge].iter().rposition(|&c| c == '\n') {
        return start + i + 1;
    }

    // Cut at position p keeps chars[..p]; p is a boundary when the char
    // before it is a break, or the char at it is whitespace.
    let mid = start + (edge - start) / 2;
    for p in (mid.max(start + 1)..=edge).rev() {
        if is_break(chars[p - 1]) || chars[p].is_whitespace() {
            return p;
        }
    }

    snap_to_grapheme(text, offsets, start, edge)
}

/// Move a hard cut back to the nearest extended grapheme cluster boundary,
/// so combining marks and emoji sequences are not severed. Falls back to the
/// hard edge when the window holds less than one cluster.
fn snap_to_grapheme(text: &str, offsets: &[usize], start: usize, edge: usize) -> usize {
    let base = offsets[start];
    let limit = offsets[edge] - base;

    let mut best = None;
    for (i, _) in text[base..].grapheme_indices(true) {
        if i > limit {
            break;
        }
        if i > 0 {
            best = Some(i);
        }
    }

    best.and_then(|b| offsets.binary_search(&(base + b)).ok())
        .filter(|&cut| cut > start)
        .unwrap_or(edge)
}
