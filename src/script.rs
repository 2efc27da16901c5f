//! Script detection for CJK-aware splitting.
//!
//! CJK prose has no spaces between words, so whitespace-based boundary
//! search finds nothing and sentence punctuation is the only reliable cut
//! point. The oversize pass uses [`contains_han`] to route such chunks to the
//! CJK sentence splitter.

use std::fmt;

/// Minimum share of script-specific characters for a language to win.
const LANGUAGE_THRESHOLD: f64 = 0.1;

/// Texts shorter than this are reported as English.
const MIN_DETECT_CHARS: usize = 10;

/// Whether `c` is a Han ideograph (CJK Unified Ideographs and extensions).
#[must_use]
pub const fn is_han(c: char) -> bool {
    matches!(c,
        '\u{3400}'..='\u{4DBF}'
        | '\u{4E00}'..='\u{9FFF}'
        | '\u{F900}'..='\u{FAFF}'
        | '\u{20000}'..='\u{2A6DF}'
        | '\u{2A700}'..='\u{2EBEF}'
        | '\u{30000}'..='\u{3134F}')
}

const fn is_kana(c: char) -> bool {
    matches!(c, '\u{3040}'..='\u{30FF}' | '\u{31F0}'..='\u{31FF}')
}

const fn is_hangul(c: char) -> bool {
    matches!(c, '\u{3130}'..='\u{318F}' | '\u{AC00}'..='\u{D7AF}')
}

/// Whether the text contains at least one Han ideograph.
#[must_use]
pub fn contains_han(text: &str) -> bool {
    text.chars().any(is_han)
}

/// Coarse language guess from script shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    /// Chinese (Han ideographs dominate).
    Chinese,
    /// Japanese (kana present above threshold).
    Japanese,
    /// Korean (hangul present above threshold).
    Korean,
    /// Anything else, including short or empty text.
    English,
}

impl Language {
    /// Two-letter code for logs.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Chinese => "zh",
            Self::Japanese => "ja",
            Self::Korean => "ko",
            Self::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Guess the dominant language of `text`.
///
/// Han is checked first, then kana, then hangul; the first script whose
/// share of all characters exceeds 10% wins. Kanji-heavy Japanese reports
/// as Chinese.
///
/// ```rust
/// use docsplit::{detect_language, Language};
///
/// assert_eq!(detect_language("这是一段中文文本。它包含了几个句子。"), Language::Chinese);
/// assert_eq!(detect_language("short"), Language::English);
/// ```
#[must_use]
pub fn detect_language(text: &str) -> Language {
    let (mut total, mut han, mut kana, mut hangul) = (0usize, 0usize, 0usize, 0usize);
    for c in text.chars() {
        total += 1;
        if is_han(c) {
            han += 1;
        } else if is_kana(c) {
            kana += 1;
        } else if is_hangul(c) {
            hangul += 1;
        }
    }

    if total < MIN_DETECT_CHARS {
        return Language::English;
    }

    let share = |n: usize| n as f64 / total as f64;
    if share(han) > LANGUAGE_THRESHOLD {
        Language::Chinese
    } else if share(kana) > LANGUAGE_THRESHOLD {
        Language::Japanese
    } else if share(hangul) > LANGUAGE_THRESHOLD {
        Language::Korean
    } else {
        Language::English
    }
}
