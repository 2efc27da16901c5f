//! Error types for docsplit.

/// Errors that can occur while configuring a splitter.
///
/// Splitting itself never fails: every input degrades through the fallback
/// cascades. Only configuration is checked, and always before any text is
/// processed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// Invalid chunk size (must be > 0).
    #[error("invalid chunk size: {0} (must be > 0)")]
    InvalidChunkSize(usize),

    /// Overlap is not smaller than the chunk size.
    #[error("overlap {overlap} must be smaller than chunk size {size}")]
    OverlapExceedsSize {
        /// The chunk size.
        size: usize,
        /// The overlap that reached or exceeded the size.
        overlap: usize,
    },

    /// Split type string not recognized.
    #[error("unknown split type '{0}' (expected paragraph, sentence, length or semantic)")]
    UnknownSplitType(String),
}

/// Result type for docsplit operations.
pub type Result<T> = std::result::Result<T, Error>;
