//! The Content type: one emitted chunk.

/// A chunk of text and its position in the emitted sequence.
///
/// Every `Content` returned from a single split call is non-empty, trimmed,
/// and indexed contiguously from zero:
///
/// ```rust
/// use docsplit::{Splitter, SplitterConfig, TextSplitter};
///
/// let splitter = TextSplitter::new(SplitterConfig::default()).unwrap();
/// let chunks = splitter.split("P1.\n\nP2.").unwrap();
///
/// assert_eq!(chunks[0].text, "P1.");
/// assert_eq!(chunks[1].index, 1);
/// ```
///
/// Unlike a byte-offset slice, a `Content` does not point back into the
/// input: preprocessing, trimming, and merging mean the text is not always a
/// verbatim substring of what was passed in.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Content {
    /// The chunk text.
    pub text: String,
    /// Zero-based position of this chunk in the sequence.
    pub index: usize,
}

impl Content {
    /// Create a new content entry.
    #[must_use]
    pub fn new(text: impl Into<String>, index: usize) -> Self {
        Self {
            text: text.into(),
            index,
        }
    }

    /// The length of this chunk in characters.
    #[must_use]
    pub fn char_len(&self) -> usize {
        self.text.chars().count()
    }
}

impl std::fmt::Display for Content {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Content {{ index: {}, chars: {} }}",
            self.index,
            self.char_len()
        )
    }
}
