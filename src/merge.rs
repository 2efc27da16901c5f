//! Greedy recombination of small units into chunks.
//!
//! Sentence and line splitting produce fragments far below the target size.
//! Embedding each fragment alone wastes vectors on units with no context, so
//! consecutive fragments are packed back together:
//!
//! ```text
//! size = 40
//!
//! units:  ["One.", "Two.", "Three is longer.", "Four.", "Five."]
//! merged: ["One. Two. Three is longer. Four.", "Five."]
//!                                         ^ 32 chars >= 80% of 40: flush early
//! ```
//!
//! The early flush at 80% keeps a buffer from creeping right up to the hard
//! limit, where the next unit would almost certainly overflow it anyway.

/// Fraction of the target size (in tenths) at which a buffer flushes early.
const EARLY_FLUSH_TENTHS: usize = 8;

/// Buffers at or below `size / SMALL_DIVISOR` never flush early.
const SMALL_DIVISOR: usize = 5;

/// Merge `units` into chunks of at most `size` characters.
///
/// Units are joined with a single space, or nothing when the buffer already
/// ends in a newline. A unit larger than `size` is emitted on its own; it is
/// never split here.
///
/// ```rust
/// use docsplit::merge_units;
///
/// let units = ["a".repeat(4), "b".repeat(4), "c".repeat(4)];
/// assert_eq!(merge_units(units, 10), vec!["aaaa bbbb", "cccc"]);
/// ```
#[must_use]
pub fn merge_units<I>(units: I, size: usize) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let early_flush = size * EARLY_FLUSH_TENTHS / 10;
    let small = size / SMALL_DIVISOR;

    let mut merged = Vec::new();
    let mut buffer = String::new();
    let mut buffer_len = 0usize;

    for unit in units {
        let unit: String = unit.into();
        let unit_len = unit.chars().count();

        if buffer.is_empty() {
            buffer = unit;
            buffer_len = unit_len;
        } else {
            let separator = usize::from(!buffer.ends_with('\n'));
            if buffer_len + separator + unit_len <= size {
                if separator == 1 {
                    buffer.push(' ');
                }
                buffer.push_str(&unit);
                buffer_len += separator + unit_len;
            } else {
                merged.push(std::mem::take(&mut buffer));
                buffer = unit;
                buffer_len = unit_len;
            }
        }

        if buffer_len >= early_flush && buffer_len > small {
            merged.push(std::mem::take(&mut buffer));
            buffer_len = 0;
        }
    }

    if !buffer.is_empty() {
        merged.push(buffer);
    }

    merged
}

/// Pack sentences into chunks of at most `size` characters, repeating the
/// trailing sentences of each chunk (up to `overlap` characters) at the start
/// of the next.
///
/// ```text
/// size = 40, overlap = 15
///
/// ["One is here. Two is here. Three is here.", "Three is here. Four is here."]
///                             ^^^^^^^^^^^^^^     ^^^^^^^^^^^^^^ carried
/// ```
///
/// A chunk never carries all of its sentences forward, and carried sentences
/// are dropped from the front until the next sentence fits. A unit larger than
/// `size` is emitted on its own, as with [`merge_units`].
///
/// ```rust
/// use docsplit::merge_with_overlap;
///
/// let merged = merge_with_overlap(["aaaa", "bbbb", "cccc"], 10, 5);
/// assert_eq!(merged, vec!["aaaa bbbb", "bbbb cccc"]);
/// ```
#[must_use]
pub fn merge_with_overlap<I>(units: I, size: usize, overlap: usize) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    let mut merged = Vec::new();
    let mut current: Vec<(String, usize)> = Vec::new();

    for unit in units {
        let unit: String = unit.into();
        let unit_len = unit.chars().count();

        if !current.is_empty() && joined_len(&current) + 1 + unit_len > size {
            merged.push(join(&current));
            current = carry_over(&current, overlap);
            while !current.is_empty() && joined_len(&current) + 1 + unit_len > size {
                current.remove(0);
            }
        }
        current.push((unit, unit_len));
    }

    if !current.is_empty() {
        merged.push(join(&current));
    }

    merged
}

/// Character length of `units` joined by single spaces.
fn joined_len(units: &[(String, usize)]) -> usize {
    units.iter().map(|(_, len)| len).sum::<usize>() + units.len().saturating_sub(1)
}

fn join(units: &[(String, usize)]) -> String {
    units
        .iter()
        .map(|(unit, _)| unit.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

/// The longest run of trailing units, excluding the first, whose joined
/// length is at most `overlap`.
fn carry_over(current: &[(String, usize)], overlap: usize) -> Vec<(String, usize)> {
    let mut taken = 0;
    let mut len = 0;
    for (_, unit_len) in current.iter().skip(1).rev() {
        let next = if taken == 0 { *unit_len } else { len + 1 + unit_len };
        if next > overlap {
            break;
        }
        len = next;
        taken += 1;
    }
    current[current.len() - taken..].to_vec()
}
