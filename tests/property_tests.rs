//! Property-based tests for the splitting pipeline.
//!
//! These tests verify that every strategy maintains key invariants:
//! - Indexed: `Content[i].index == i`
//! - Non-empty: no chunk is empty or whitespace-only
//! - Bounded: chunks stay within `chunk_size` characters
//! - Capped: at most `max_chunks` chunks when a cap is set

use docsplit::{
    merge_units, merge_with_overlap, normalize, split_sentences, Content, LengthSplitter,
    SplitType, Splitter, SplitterConfig, TextSplitter,
};
use proptest::prelude::*;

// =============================================================================
// Test Generators
// =============================================================================

/// Arbitrary text, including multi-byte and control characters
fn arbitrary_text() -> impl Strategy<Value = String> {
    prop::string::string_regex("(?s).{0,400}").unwrap()
}

/// Text with sentence, line, and paragraph structure in Latin and CJK
fn structured_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        (
            prop::string::string_regex("[A-Za-z]{1,12}|[一-龥]{1,8}").unwrap(),
            prop::sample::select(vec![" ", ". ", "。", "\n", "\n\n", "! ", "\"", "# ", "* "]),
        ),
        1..80,
    )
    .prop_map(|parts| {
        let mut result = String::new();
        for (word, sep) in parts {
            result.push_str(&word);
            result.push_str(sep);
        }
        result
    })
}

fn split_type() -> impl Strategy<Value = SplitType> {
    prop::sample::select(vec![
        SplitType::Paragraph,
        SplitType::Sentence,
        SplitType::Length,
        SplitType::Semantic,
    ])
}

// =============================================================================
// Invariant Helpers
// =============================================================================

fn indices_contiguous(contents: &[Content]) -> bool {
    contents.iter().enumerate().all(|(i, c)| c.index == i)
}

fn all_non_empty(contents: &[Content]) -> bool {
    contents
        .iter()
        .all(|c| !c.text.trim().is_empty() && c.text.trim() == c.text)
}

fn splitter(split_type: SplitType, size: usize, overlap: usize, max: usize) -> TextSplitter {
    let config = SplitterConfig::default()
        .with_split_type(split_type)
        .with_chunk_size(size)
        .with_overlap(overlap)
        .with_max_chunks(max);
    TextSplitter::new(config).unwrap()
}

// =============================================================================
// Pipeline Invariants
// =============================================================================

proptest! {
    #[test]
    fn indices_are_contiguous(
        text in structured_text(),
        ty in split_type(),
        size in 10usize..200,
    ) {
        let contents = splitter(ty, size, size / 4, 0).split(&text).unwrap();
        prop_assert!(indices_contiguous(&contents));
    }

    #[test]
    fn chunks_are_non_empty_and_trimmed(
        text in arbitrary_text(),
        ty in split_type(),
        size in 5usize..100,
    ) {
        let contents = splitter(ty, size, 0, 0).split(&text).unwrap();
        prop_assert!(all_non_empty(&contents));
    }

    #[test]
    fn chunks_respect_size(
        text in structured_text(),
        ty in split_type(),
        size in 10usize..200,
        overlap_frac in 0usize..4,
    ) {
        let overlap = size * overlap_frac / 5;
        let contents = splitter(ty, size, overlap, 0).split(&text).unwrap();
        for c in &contents {
            prop_assert!(
                c.char_len() <= size,
                "chunk of {} chars exceeds {}: {:?}",
                c.char_len(),
                size,
                c.text
            );
        }
    }

    #[test]
    fn max_chunks_enforced(
        text in structured_text(),
        ty in split_type(),
        max in 1usize..5,
    ) {
        let contents = splitter(ty, 20, 5, max).split(&text).unwrap();
        prop_assert!(contents.len() <= max);
    }

    #[test]
    fn max_chunks_keeps_leading_chunks(text in structured_text()) {
        let all = splitter(SplitType::Sentence, 40, 0, 0).split(&text).unwrap();
        let capped = splitter(SplitType::Sentence, 40, 0, 3).split(&text).unwrap();
        prop_assert_eq!(&all[..all.len().min(3)], &capped[..]);
    }

    #[test]
    fn splitting_is_deterministic(text in structured_text(), ty in split_type()) {
        let s = splitter(ty, 50, 10, 0);
        prop_assert_eq!(s.split(&text).unwrap(), s.split(&text).unwrap());
    }
}

// =============================================================================
// Stage Invariants
// =============================================================================

proptest! {
    #[test]
    fn normalize_has_no_long_newline_runs(text in arbitrary_text()) {
        let normalized = normalize(&text);
        prop_assert!(!normalized.contains("\n\n\n"));
        prop_assert!(!normalized.contains('\r'));
        prop_assert_eq!(normalized.trim(), normalized.as_str());
    }

    #[test]
    fn normalize_is_idempotent(text in arbitrary_text()) {
        let once = normalize(&text);
        prop_assert_eq!(normalize(&once), once);
    }

    #[test]
    fn sentences_preserve_non_whitespace(text in structured_text()) {
        let joined: String = split_sentences(&text).concat();
        let strip = |s: &str| s.chars().filter(|c| !c.is_whitespace()).collect::<String>();
        prop_assert_eq!(strip(&joined), strip(&text));
    }

    #[test]
    fn length_windows_bounded(
        text in arbitrary_text(),
        size in 1usize..100,
        overlap_frac in 0usize..4,
    ) {
        let overlap = size * overlap_frac / 5;
        let splitter = LengthSplitter::new(size, overlap).unwrap();
        for chunk in splitter.split(&text) {
            prop_assert!(chunk.chars().count() <= size);
            prop_assert!(!chunk.is_empty());
        }
    }

    #[test]
    fn length_covers_tail(text in "[a-z]{1,300}", size in 5usize..60) {
        // Without boundaries or overlap, windows tile the text exactly.
        let splitter = LengthSplitter::new(size, 0).unwrap();
        prop_assert_eq!(splitter.split(&text).concat(), text);
    }

    #[test]
    fn length_overlap_without_boundaries(
        text in "[A-Z0-9]{1,300}",
        size in 5usize..60,
        overlap_frac in 1usize..4,
    ) {
        let overlap = (size * overlap_frac / 5).max(1);
        let chunks = LengthSplitter::new(size, overlap).unwrap().split(&text);
        for pair in chunks.windows(2) {
            let tail: String = pair[0].chars().skip(pair[0].chars().count() - overlap).collect();
            let head: String = pair[1].chars().take(overlap).collect();
            prop_assert_eq!(tail, head);
        }
    }

    #[test]
    fn merge_respects_size_for_small_units(
        units in prop::collection::vec("[a-z]{1,10}", 0..50),
        size in 10usize..100,
    ) {
        for chunk in merge_units(units, size) {
            prop_assert!(chunk.chars().count() <= size);
        }
    }

    #[test]
    fn merge_with_overlap_respects_size(
        units in prop::collection::vec("[a-z]{1,10}", 0..50),
        size in 10usize..100,
        overlap_frac in 0usize..4,
    ) {
        let overlap = size * overlap_frac / 5;
        for chunk in merge_with_overlap(units, size, overlap) {
            prop_assert!(chunk.chars().count() <= size);
        }
    }

    #[test]
    fn merged_sentences_stay_bounded(
        text in structured_text(),
        size in 10usize..200,
        overlap_frac in 0usize..4,
    ) {
        let config = SplitterConfig::default()
            .with_split_type(SplitType::Sentence)
            .with_chunk_size(size)
            .with_overlap(size * overlap_frac / 5)
            .with_merged_sentences(true);
        let contents = TextSplitter::new(config).unwrap().split(&text).unwrap();
        prop_assert!(indices_contiguous(&contents));
        for c in &contents {
            prop_assert!(c.char_len() <= size);
        }
    }

    #[test]
    fn min_chunk_len_is_honored(text in structured_text(), min in 1usize..20) {
        let config = SplitterConfig::default()
            .with_chunk_size(50)
            .with_overlap(10)
            .with_min_chunk_len(min);
        let contents = TextSplitter::new(config).unwrap().split(&text).unwrap();
        prop_assert!(indices_contiguous(&contents));
        prop_assert!(contents.iter().all(|c| c.char_len() >= min));
    }
}
