//! Reduction of chunks that exceed the target size.
//!
//! ## Picking a Strategy
//!
//! Paragraphs and sentences come out of the primary pass at whatever size
//! the author wrote them. Anything over `chunk_size` is reduced by a
//! strategy chosen from what the chunk looks like:
//!
//! ```text
//! > 3 newlines      -> split lines,          merge back up to size
//! contains Han      -> CJK sentence split,   merge back up to size
//! otherwise         -> fixed-length windows
//! ```
//!
//! Line structure is the strongest signal (lists, tables, code). CJK prose
//! has no spaces, so sentence punctuation is the only clean cut. Latin prose
//! is left to the length splitter, whose boundary search already prefers
//! sentence ends and word gaps.
//!
//! ## Termination
//!
//! A merge can still emit an oversized unit: one line or one sentence
//! longer than `chunk_size` with nothing to cut on. Such pieces go back on a
//! worklist with a pass counter. After [`MAX_REDUCTION_PASSES`] they are
//! handed to the length splitter, which always produces pieces within size.
//! No recursion, so stack depth does not depend on the input.

use crate::length::LengthSplitter;
use crate::merge::merge_units;
use crate::script::contains_han;
use crate::sentence::split_cjk_sentences;

/// Content-driven passes before a piece is forced through the length splitter.
pub const MAX_REDUCTION_PASSES: u8 = 2;

/// Chunks with more newlines than this are reduced line by line.
const LINE_SPLIT_THRESHOLD: usize = 3;

/// Reduces oversized chunks until every chunk fits `chunk_size`.
///
/// ## Example
///
/// ```rust
/// use docsplit::{LengthSplitter, OversizeHandler};
///
/// let handler = OversizeHandler::new(LengthSplitter::new(50, 10).unwrap());
/// let chunks = handler.reduce(vec!["中".repeat(500)]);
///
/// assert!(chunks.len() >= 10);
/// assert!(chunks.iter().all(|c| c.chars().count() <= 50));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct OversizeHandler {
    length: LengthSplitter,
}

impl OversizeHandler {
    /// Create a handler whose size limit and terminal strategy come from
    /// `length`.
    #[must_use]
    pub const fn new(length: LengthSplitter) -> Self {
        Self { length }
    }

    /// The size limit in characters.
    #[must_use]
    pub const fn chunk_size(&self) -> usize {
        self.length.size()
    }

    /// Reduce every chunk longer than `chunk_size`, preserving order.
    #[must_use]
    pub fn reduce(&self, chunks: Vec<String>) -> Vec<String> {
        let size = self.chunk_size();
        let mut reduced = Vec::with_capacity(chunks.len());

        // Stack of pending pieces, reversed so pops come out in order.
        let mut pending: Vec<(String, u8)> = chunks.into_iter().rev().map(|c| (c, 0)).collect();

        while let Some((chunk, pass)) = pending.pop() {
            if chunk.chars().count() <= size {
                reduced.push(chunk);
                continue;
            }

            let pieces = if pass >= MAX_REDUCTION_PASSES {
                self.length.split(&chunk)
            } else {
                self.reduce_once(&chunk)
            };

            tracing::debug!(
                pass,
                pieces = pieces.len(),
                chars = chunk.chars().count(),
                "reduced oversized chunk"
            );

            pending.extend(pieces.into_iter().rev().map(|p| (p, pass + 1)));
        }

        reduced
    }

    fn reduce_once(&self, chunk: &str) -> Vec<String> {
        let size = self.chunk_size();

        if chunk.matches('\n').count() > LINE_SPLIT_THRESHOLD {
            let lines = chunk.split('\n').map(str::trim).filter(|l| !l.is_empty());
            merge_units(lines, size)
        } else if contains_han(chunk) {
            merge_units(split_cjk_sentences(chunk), size)
        } else {
            self.length.split(chunk)
        }
    }
}
