//! Splitter configuration.
//!
//! ## Size Is Measured in Characters
//!
//! `chunk_size` and `chunk_overlap` count Unicode scalar values, not bytes.
//! A 1000-character budget holds 1000 ASCII letters or 1000 Han characters
//! alike, which keeps chunk sizes comparable across scripts:
//!
//! ```text
//! "hello"   -> 5 chars, 5 bytes
//! "你好世界" -> 4 chars, 12 bytes
//! ```
//!
//! ## Overlap Must Stay Below Size
//!
//! Fixed-length windows advance by `chunk_size - chunk_overlap`. An overlap
//! equal to the size would never advance, so such a configuration is rejected
//! up front rather than discovered as an infinite loop.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Default target chunk size in characters.
pub const DEFAULT_CHUNK_SIZE: usize = 1000;

/// Default overlap between fixed-length windows in characters.
pub const DEFAULT_CHUNK_OVERLAP: usize = 200;

/// Strategy used for the primary split pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SplitType {
    /// Structural split on blank lines, headings, and bullets.
    #[default]
    Paragraph,
    /// One chunk per sentence (Latin and CJK terminators, quote-aware).
    Sentence,
    /// Fixed-length sliding window with boundary search.
    Length,
    /// Reserved. Topic-boundary splitting is not implemented; splitting
    /// falls back to [`SplitType::Paragraph`].
    Semantic,
}

impl SplitType {
    /// The lowercase name used in configuration files.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Paragraph => "paragraph",
            Self::Sentence => "sentence",
            Self::Length => "length",
            Self::Semantic => "semantic",
        }
    }
}

impl fmt::Display for SplitType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SplitType {
    type Err = Error;

    /// Parse a split type name, ignoring case and surrounding whitespace.
    ///
    /// ```rust
    /// use docsplit::SplitType;
    ///
    /// assert_eq!("Sentence".parse::<SplitType>().unwrap(), SplitType::Sentence);
    /// assert!("topic".parse::<SplitType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "paragraph" => Ok(Self::Paragraph),
            "sentence" => Ok(Self::Sentence),
            "length" => Ok(Self::Length),
            "semantic" => Ok(Self::Semantic),
            _ => Err(Error::UnknownSplitType(s.to_string())),
        }
    }
}

/// Configuration for a [`TextSplitter`](crate::TextSplitter).
///
/// # Examples
///
/// ```rust
/// use docsplit::{SplitType, SplitterConfig};
///
/// let config = SplitterConfig::default()
///     .with_split_type(SplitType::Length)
///     .with_chunk_size(500)
///     .with_overlap(50)
///     .with_max_chunks(100);
///
/// assert!(config.validate().is_ok());
/// assert!(SplitterConfig::default().with_chunk_size(100).validate().is_err()); // overlap 200
/// ```
///
/// Deserializes from partial documents; missing fields take their defaults:
///
/// ```rust
/// use docsplit::{SplitType, SplitterConfig};
///
/// let config: SplitterConfig =
///     serde_json::from_str(r#"{ "split_type": "sentence", "max_chunks": 3 }"#).unwrap();
/// assert_eq!(config.split_type, SplitType::Sentence);
/// assert_eq!(config.chunk_size, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SplitterConfig {
    /// Primary split strategy.
    pub split_type: SplitType,
    /// Target maximum chunk size in characters.
    pub chunk_size: usize,
    /// Characters shared between consecutive fixed-length windows, and the
    /// budget for sentences repeated between merged sentence chunks.
    pub chunk_overlap: usize,
    /// Hard cap on emitted chunks. 0 means unlimited.
    pub max_chunks: usize,
    /// In sentence mode, pack consecutive sentences into chunks of up to
    /// `chunk_size` instead of emitting one chunk per sentence. Trailing
    /// sentences of up to `chunk_overlap` characters repeat in the next chunk.
    pub merge_sentences: bool,
    /// Drop chunks shorter than this many characters. 0 keeps everything.
    pub min_chunk_len: usize,
    /// Drop chunks whose [`estimate_quality`](crate::estimate_quality) score
    /// is below [`QUALITY_THRESHOLD`](crate::QUALITY_THRESHOLD).
    pub filter_low_quality: bool,
}

impl Default for SplitterConfig {
    fn default() -> Self {
        Self {
            split_type: SplitType::Paragraph,
            chunk_size: DEFAULT_CHUNK_SIZE,
            chunk_overlap: DEFAULT_CHUNK_OVERLAP,
            max_chunks: 0,
            merge_sentences: false,
            min_chunk_len: 0,
            filter_low_quality: false,
        }
    }
}

impl SplitterConfig {
    /// Set the split strategy.
    #[must_use]
    pub const fn with_split_type(mut self, split_type: SplitType) -> Self {
        self.split_type = split_type;
        self
    }

    /// Set the target chunk size in characters.
    ///
    /// The overlap is left unchanged, and it must stay below the size: with the
    /// default overlap of 200, any size of 200 or less also needs
    /// [`with_overlap`](Self::with_overlap).
    ///
    /// ```rust
    /// use docsplit::{Error, SplitterConfig};
    ///
    /// let config = SplitterConfig::default().with_chunk_size(50);
    /// assert_eq!(config.validate(), Err(Error::OverlapExceedsSize { size: 50, overlap: 200 }));
    /// assert!(config.with_overlap(10).validate().is_ok());
    /// ```
    #[must_use]
    pub const fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the overlap between fixed-length windows.
    #[must_use]
    pub const fn with_overlap(mut self, chunk_overlap: usize) -> Self {
        self.chunk_overlap = chunk_overlap;
        self
    }

    /// Cap the number of emitted chunks (0 = unlimited).
    #[must_use]
    pub const fn with_max_chunks(mut self, max_chunks: usize) -> Self {
        self.max_chunks = max_chunks;
        self
    }

    /// Pack sentences up to `chunk_size` in sentence mode.
    #[must_use]
    pub const fn with_merged_sentences(mut self, merge: bool) -> Self {
        self.merge_sentences = merge;
        self
    }

    /// Drop emitted chunks shorter than `min_chunk_len` characters.
    #[must_use]
    pub const fn with_min_chunk_len(mut self, min_chunk_len: usize) -> Self {
        self.min_chunk_len = min_chunk_len;
        self
    }

    /// Drop emitted chunks that score as extraction noise.
    #[must_use]
    pub const fn with_quality_filter(mut self, enabled: bool) -> Self {
        self.filter_low_quality = enabled;
        self
    }

    /// Check that the configuration describes a window that always advances.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidChunkSize`] if `chunk_size == 0`, and
    /// [`Error::OverlapExceedsSize`] if `chunk_overlap >= chunk_size`.
    pub fn validate(&self) -> Result<()> {
        if self.chunk_size == 0 {
            return Err(Error::InvalidChunkSize(self.chunk_size));
        }
        if self.chunk_overlap >= self.chunk_size {
            return Err(Error::OverlapExceedsSize {
                size: self.chunk_size,
                overlap: self.chunk_overlap,
            });
        }
        Ok(())
    }
}
