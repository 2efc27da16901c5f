//! The splitting pipeline.
//!
//! ```text
//! Preprocess -> {Paragraph | Sentence | Length} -> [Merge]
//!            -> OversizeHandle -> Filter -> Truncate(max_chunks) -> Assemble
//! ```
//!
//! Each stage takes an ordered `Vec<String>` and returns another. Nothing is
//! shared between stages except the immutable configuration, which is why a
//! single [`TextSplitter`] can serve any number of threads at once.

use tracing::{debug, info, warn};

use crate::config::{SplitType, SplitterConfig};
use crate::length::LengthSplitter;
use crate::merge::merge_with_overlap;
use crate::oversize::OversizeHandler;
use crate::paragraph::split_paragraphs;
use crate::preprocess::normalize;
use crate::quality::{estimate_quality, QUALITY_THRESHOLD};
use crate::script::detect_language;
use crate::sentence::split_sentences;
use crate::{Content, Result, Splitter};

/// Splitter driven by a [`SplitterConfig`].
///
/// ## Example
///
/// ```rust
/// use docsplit::{SplitType, Splitter, SplitterConfig, TextSplitter};
///
/// let config = SplitterConfig::default().with_split_type(SplitType::Sentence);
/// let splitter = TextSplitter::new(config).unwrap();
///
/// let chunks = splitter.split("A. B! C?").unwrap();
/// let texts: Vec<&str> = chunks.iter().map(|c| c.text.as_str()).collect();
/// assert_eq!(texts, ["A.", "B!", "C?"]);
/// ```
#[derive(Debug, Clone)]
pub struct TextSplitter {
    config: SplitterConfig,
    length: LengthSplitter,
}

impl TextSplitter {
    /// Create a splitter, validating the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if `chunk_size == 0` or `chunk_overlap >= chunk_size`.
    pub fn new(config: SplitterConfig) -> Result<Self> {
        config.validate()?;
        let length = LengthSplitter::new(config.chunk_size, config.chunk_overlap)?;
        Ok(Self { config, length })
    }

    /// The configuration this splitter was built with.
    #[must_use]
    pub const fn config(&self) -> &SplitterConfig {
        &self.config
    }

    /// Run the primary split for the configured strategy.
    fn primary_split(&self, text: &str) -> Vec<String> {
        match self.config.split_type {
            SplitType::Paragraph => split_paragraphs(text, self.config.chunk_size),
            SplitType::Sentence => {
                let sentences = split_sentences(text);
                if self.config.merge_sentences {
                    merge_with_overlap(
                        sentences,
                        self.config.chunk_size,
                        self.config.chunk_overlap,
                    )
                } else {
                    sentences
                }
            }
            SplitType::Length => self.length.split(text),
            SplitType::Semantic => {
                warn!("semantic splitting is not implemented, falling back to paragraph");
                split_paragraphs(text, self.config.chunk_size)
            }
        }
    }
}

impl Splitter for TextSplitter {
    fn split(&self, text: &str) -> Result<Vec<Content>> {
        let text = normalize(text);
        if text.is_empty() {
            debug!("empty input after preprocessing");
            return Ok(vec![]);
        }

        let chunks = self.primary_split(&text);
        debug!(
            split_type = %self.config.split_type,
            units = chunks.len(),
            "primary split"
        );

        let chunks = OversizeHandler::new(self.length).reduce(chunks);
        let contents = assemble(chunks, &self.config);

        info!(
            split_type = %self.config.split_type,
            language = %detect_language(&text),
            chunks = contents.len(),
            "split text"
        );
        Ok(contents)
    }

    fn estimate_chunks(&self, text_len: usize) -> usize {
        let estimate = (text_len / self.config.chunk_size).max(1);
        match self.config.max_chunks {
            0 => estimate,
            max => estimate.min(max),
        }
    }
}

/// Trim, drop empties and filtered chunks, cap at `max_chunks` (0 =
/// unlimited), and index.
fn assemble(chunks: Vec<String>, config: &SplitterConfig) -> Vec<Content> {
    let limit = if config.max_chunks == 0 {
        usize::MAX
    } else {
        config.max_chunks
    };

    chunks
        .iter()
        .map(|c| c.trim())
        .filter(|c| !c.is_empty() && keep(c, config))
        .take(limit)
        .enumerate()
        .map(|(index, text)| Content::new(text, index))
        .collect()
}

/// Apply the opt-in length and quality filters.
fn keep(chunk: &str, config: &SplitterConfig) -> bool {
    if config.min_chunk_len > 0 {
        let len = chunk.chars().count();
        if len < config.min_chunk_len {
            debug!(chars = len, "dropping short chunk");
            return false;
        }
    }
    if config.filter_low_quality {
        let quality = estimate_quality(chunk);
        if quality < QUALITY_THRESHOLD {
            debug!(quality, "dropping low-quality chunk");
            return false;
        }
    }
    true
}
