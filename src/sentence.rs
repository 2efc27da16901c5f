//! Sentence splitting for mixed Latin and CJK text.
//!
//! ## How It Works
//!
//! A single left-to-right pass over code points, with one bit of state:
//!
//! ```text
//!             quote mark
//!   Outside ─────────────▶ Inside
//!      ▲                      │
//!      └──────────────────────┘
//!             quote mark
//!
//! Outside + terminator  => flush sentence
//! Inside  + terminator  => keep accumulating
//! ```
//!
//! Terminators cover both scripts so mixed-language text is segmented
//! uniformly:
//!
//! ```text
//! Latin: .  !  ?  ;
//! CJK:   。 ！ ？ ；
//! ```
//!
//! ## Trade-offs
//!
//! This is deliberately simpler than UAX #29 segmentation. "Dr. Smith" is two
//! sentences here, and so is "3.14". In exchange the rules are predictable
//! for CJK text, where UAX #29 sentence boundaries rely on spacing that
//! Chinese and Japanese prose do not have. Downstream merging recombines the
//! small fragments anyway.

/// Sentence-terminating punctuation, Latin and CJK.
pub const TERMINATORS: [char; 8] = ['.', '!', '?', '。', '！', '？', '；', ';'];

/// Whether `c` ends a sentence.
#[must_use]
pub fn is_terminator(c: char) -> bool {
    TERMINATORS.contains(&c)
}

fn is_quote(c: char) -> bool {
    matches!(c, '"' | '\u{201C}' | '\u{201D}')
}

/// Split text into sentences, ignoring terminators inside double quotes.
///
/// Quote state toggles on straight and curly double quotes. An unclosed quote
/// simply holds the rest of the text as one sentence.
///
/// ```rust
/// use docsplit::split_sentences;
///
/// assert_eq!(split_sentences("A. B! C?"), vec!["A.", "B!", "C?"]);
/// assert_eq!(
///     split_sentences(r#"He said "Stop. Now." Then left."#),
///     vec![r#"He said "Stop. Now." Then left."#],
/// );
/// ```
#[must_use]
pub fn split_sentences(text: &str) -> Vec<String> {
    scan(text, true)
}

/// Split CJK text into sentences without quote tracking.
///
/// CJK prose uses corner brackets or full-width quotes rather than the
/// straight quotes the quote-aware scan toggles on, so tracking them would
/// only risk swallowing whole paragraphs after a stray `"`.
///
/// ```rust
/// use docsplit::split_cjk_sentences;
///
/// assert_eq!(split_cjk_sentences("第一句。第二句！"), vec!["第一句。", "第二句！"]);
/// ```
#[must_use]
pub fn split_cjk_sentences(text: &str) -> Vec<String> {
    scan(text, false)
}

fn scan(text: &str, track_quotes: bool) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut in_quote = false;

    for c in text.chars() {
        current.push(c);

        if track_quotes && is_quote(c) {
            in_quote = !in_quote;
        }

        if !in_quote && is_terminator(c) {
            flush(&mut current, &mut sentences);
        }
    }

    flush(&mut current, &mut sentences);
    sentences
}

fn flush(current: &mut String, sentences: &mut Vec<String>) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        sentences.push(trimmed.to_string());
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_sentences() {
        let sentences = split_sentences("Hello world. How are you? I am fine.");
        assert_eq!(sentences, vec!["Hello world.", "How are you?", "I am fine."]);
    }

    #[test]
    fn test_chinese_terminators() {
        let sentences = split_sentences("这是第一个句子。这是第二个句子！这是第三个问题？");
        assert_eq!(sentences.len(), 3);
        assert!(sentences[0].contains("第一个句子"));
    }

    #[test]
    fn test_mixed_language() {
        let sentences = split_sentences("This is English. 这是中文。And this is mixed.混合语言句子测试！");
        assert_eq!(
            sentences,
            vec![
                "This is English.",
                "这是中文。",
                "And this is mixed.",
                "混合语言句子测试！"
            ]
        );
    }

    #[test]
    fn test_semicolons_terminate() {
        assert_eq!(split_sentences("one; two；three"), vec!["one;", "two；", "three"]);
    }

    #[test]
    fn test_curly_quotes() {
        let sentences = split_sentences("She wrote \u{201C}Wait. Listen!\u{201D} and paused. Done.");
        assert_eq!(sentences.len(), 2);
        assert!(sentences[0].ends_with("paused."));
    }

    #[test]
    fn test_unclosed_quote_holds_remainder() {
        let sentences = split_sentences("First. \"Open quote. Never closed.");
        assert_eq!(sentences, vec!["First.", "\"Open quote. Never closed."]);
    }

    #[test]
    fn test_cjk_ignores_quotes() {
        let sentences = split_cjk_sentences("他说\"走。\"然后离开。");
        assert_eq!(sentences, vec!["他说\"走。", "\"然后离开。"]);
    }

    #[test]
    fn test_no_terminator() {
        assert_eq!(split_sentences("no ending here"), vec!["no ending here"]);
    }

    #[test]
    fn test_punctuation_only() {
        assert_eq!(split_sentences(".!?"), vec![".", "!", "?"]);
    }

    #[test]
    fn test_empty_and_whitespace() {
        assert!(split_sentences("").is_empty());
        assert!(split_sentences("   \n\t  ").is_empty());
    }
}
