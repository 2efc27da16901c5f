//! # docsplit
//!
//! Document chunking for retrieval-augmented generation (RAG) pipelines.
//!
//! ## The Problem
//!
//! Extracted documents are long. Embedding models are not. Text has to be cut
//! into pieces ("chunks") small enough to embed, without cutting through the
//! words and sentences that carry the meaning.
//!
//! Real documents make this harder than it sounds:
//!
//! - Markdown has headings and bullets that mark natural breaks
//! - PDFs arrive as hard-wrapped lines with no paragraph markers
//! - Chinese and Japanese have no spaces, so "split on a word gap" finds nothing
//! - Byte offsets slice multi-byte characters in half
//!
//! ## The Pipeline
//!
//! ```text
//! raw text
//!   │ normalize         \r\n -> \n, collapse blank runs, trim, NFC
//!   ▼
//! primary split         Paragraph | Sentence | Length
//!   │
//!   ▼
//! oversize reduction    lines / CJK sentences / fixed windows
//!   │
//!   ▼
//! assemble              drop empties (and, opt-in, short or noisy chunks),
//!   │                   cap at max_chunks, index 0..n
//!   ▼
//! Vec<Content>
//! ```
//!
//! ## Strategies
//!
//! ### Paragraph
//!
//! Blank lines end a paragraph; `# heading` and `* bullet` lines start one.
//! When the text has no such structure, falls back to `\n\n`, then (for
//! text longer than `chunk_size`) to single lines merged back up to size.
//!
//! ### Sentence
//!
//! One chunk per sentence. Terminators cover Latin and CJK punctuation
//! (`. ! ? ; 。 ！ ？ ；`), and terminators inside double quotes are ignored.
//! With `merge_sentences`, sentences are packed up to `chunk_size` and the
//! trailing sentences of each chunk repeat at the start of the next.
//!
//! ### Length
//!
//! Fixed windows of `chunk_size` characters with `chunk_overlap` overlap.
//! Each cut is pulled back to the nearest sentence end, newline, or word gap
//! when one exists in the window.
//!
//! Any chunk still longer than `chunk_size` after the primary split is
//! reduced further, so chunk sizes stay bounded whatever the strategy.
//!
//! ## Quick Start
//!
//! ```rust
//! use docsplit::{SplitType, Splitter, SplitterConfig, TextSplitter};
//!
//! let config = SplitterConfig::default()
//!     .with_split_type(SplitType::Length)
//!     .with_chunk_size(30)
//!     .with_overlap(10);
//! let splitter = TextSplitter::new(config)?;
//!
//! let chunks = splitter.split("ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789")?;
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[1].index, 1);
//! # Ok::<(), docsplit::Error>(())
//! ```
//!
//! ## Concurrency
//!
//! Splitting is synchronous and allocation-local. A [`TextSplitter`] holds
//! only its configuration, so one instance can be shared across threads
//! behind an `Arc` without locking. Cost is linear in input length.

mod config;
mod content;
mod error;
mod length;
mod merge;
mod oversize;
mod paragraph;
mod preprocess;
mod quality;
mod script;
mod sentence;
mod splitter;

pub use config::{SplitType, SplitterConfig, DEFAULT_CHUNK_OVERLAP, DEFAULT_CHUNK_SIZE};
pub use content::Content;
pub use error::{Error, Result};
pub use length::LengthSplitter;
pub use merge::{merge_units, merge_with_overlap};
pub use oversize::{OversizeHandler, MAX_REDUCTION_PASSES};
pub use paragraph::split_paragraphs;
pub use preprocess::normalize;
pub use quality::{estimate_quality, QUALITY_THRESHOLD};
pub use script::{contains_han, detect_language, is_han, Language};
pub use sentence::{is_terminator, split_cjk_sentences, split_sentences, TERMINATORS};
pub use splitter::TextSplitter;

/// A text splitting strategy.
///
/// This is the seam between document extraction (which produces text) and
/// persistence or embedding (which consumes [`Content`]). Implementations
/// must be shareable across threads:
///
/// ```rust
/// use docsplit::{Content, Splitter, SplitterConfig, TextSplitter};
///
/// fn ingest(splitter: &dyn Splitter, text: &str) -> docsplit::Result<Vec<Content>> {
///     splitter.split(text)
/// }
///
/// let splitter = TextSplitter::new(SplitterConfig::default()).unwrap();
/// let chunks = ingest(&splitter, "Hello world.").unwrap();
/// assert_eq!(chunks.len(), 1);
/// ```
pub trait Splitter: Send + Sync {
    /// Split text into indexed chunks.
    ///
    /// Empty or whitespace-only input yields an empty vector, not an error.
    ///
    /// # Errors
    ///
    /// The built-in [`TextSplitter`] never fails here; configuration errors
    /// surface from its constructor. Other implementations may fail.
    fn split(&self, text: &str) -> Result<Vec<Content>>;

    /// Estimate the number of chunks for a given text length.
    ///
    /// Useful for pre-allocation. May be approximate.
    fn estimate_chunks(&self, text_len: usize) -> usize {
        // Conservative default
        (text_len / 500).max(1)
    }
}
