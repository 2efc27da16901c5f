//! Heuristic chunk quality scoring.
//!
//! Extraction leaves behind fragments that are not worth a vector: page
//! numbers, table rules, runs of symbols. The score favours chunks made of
//! letters, digits, and spaces, with reasonably long lines:
//!
//! ```text
//! score = 0.5 * meaningful_ratio
//!       + 0.3 * min(1, avg_line_len / 40)
//!       + 0.2 * min(1, lines / 3)
//! ```

/// Chunks scoring below this are dropped when quality filtering is enabled.
pub const QUALITY_THRESHOLD: f64 = 0.2;

/// Chunks shorter than this many characters always score zero.
const MIN_SCORED_CHARS: usize = 10;

/// Score `chunk` between 0.0 and 1.0.
///
/// ```rust
/// use docsplit::estimate_quality;
///
/// assert_eq!(estimate_quality("p. 12"), 0.0);
/// assert!(estimate_quality("A full sentence with ordinary words in it.") > 0.5);
/// ```
#[must_use]
pub fn estimate_quality(chunk: &str) -> f64 {
    let chars = chunk.chars().count();
    if chars < MIN_SCORED_CHARS {
        return 0.0;
    }

    let meaningful = chunk
        .chars()
        .filter(|c| c.is_alphanumeric() || c.is_whitespace())
        .count();
    let lines = chunk.matches('\n').count() + 1;

    let meaningful_ratio = meaningful as f64 / chars as f64;
    let avg_line_len = chars as f64 / lines as f64;

    let score = 0.5 * meaningful_ratio
        + 0.3 * (avg_line_len / 40.0).min(1.0)
        + 0.2 * (lines as f64 / 3.0).min(1.0);
    score.clamp(0.0, 1.0)
}
