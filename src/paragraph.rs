//! Paragraph splitting for markdown-flavored prose.
//!
//! ## The Cascade
//!
//! Extracted documents vary wildly in how much structure survives. A
//! markdown file keeps its headings and bullets; a PDF often arrives as one
//! wall of text with hard-wrapped lines. Each level below is only tried when
//! the previous one found at most one unit:
//!
//! ```text
//! 1. Structural   blank lines end a paragraph;
//!                 "# Heading" and "* bullet" lines start one
//! 2. Fallback A   split on "\n\n"
//! 3. Fallback B   split on "\n", then merge lines up to chunk_size
//!                 (only when the text is longer than chunk_size)
//! ```
//!
//! Fallback B is guarded by size so that a long but legitimately unbroken
//! paragraph that already fits is left intact.

use crate::merge::merge_units;

/// Maximum heading depth recognized (`######`).
const MAX_HEADING_LEVEL: usize = 6;

/// Whether `line` opens a markdown heading: 1–6 `#` followed by whitespace.
fn is_heading(line: &str) -> bool {
    let hashes = line.chars().take_while(|&c| c == '#').count();
    (1..=MAX_HEADING_LEVEL).contains(&hashes)
        && line[hashes..].starts_with(|c: char| c.is_whitespace())
}

/// Whether `line` opens a `*` bullet.
fn is_bullet(line: &str) -> bool {
    line.strip_prefix('*')
        .is_some_and(|rest| rest.starts_with(|c: char| c.is_whitespace()))
}

/// Split preprocessed text into paragraphs.
///
/// `chunk_size` (in characters) gates the single-newline fallback.
///
/// ```rust
/// use docsplit::split_paragraphs;
///
/// let text = "# Title\nIntro line.\n\n* first\n* second";
/// assert_eq!(
///     split_paragraphs(text, 1000),
///     vec!["# Title\nIntro line.", "* first", "* second"],
/// );
/// ```
#[must_use]
pub fn split_paragraphs(text: &str, chunk_size: usize) -> Vec<String> {
    let structural = split_structural(text);
    if structural.len() > 1 {
        return structural;
    }

    let blocks = split_trimmed(text, "\n\n");
    if blocks.len() > 1 || text.chars().count() <= chunk_size {
        return if blocks.is_empty() { structural } else { blocks };
    }

    let lines = split_trimmed(text, "\n");
    if lines.len() > 1 {
        return merge_units(lines, chunk_size);
    }

    blocks
}

fn split_structural(text: &str) -> Vec<String> {
    let mut paragraphs = Vec::new();
    let mut current = String::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            push_trimmed(&mut paragraphs, &mut current);
            continue;
        }

        if is_heading(line) || is_bullet(line) {
            push_trimmed(&mut paragraphs, &mut current);
        }

        if !current.is_empty() {
            current.push('\n');
        }
        current.push_str(line);
    }

    push_trimmed(&mut paragraphs, &mut current);
    paragraphs
}

fn split_trimmed(text: &str, separator: &str) -> Vec<String> {
    text.split(separator)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

fn push_trimmed(paragraphs: &mut Vec<String>, current: &mut String) {
    let trimmed = current.trim();
    if !trimmed.is_empty() {
        paragraphs.push(trimmed.to_string());
    }
    current.clear();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_line_paragraphs() {
        let paragraphs = split_paragraphs("P1.\n\nP2.\n\nP3.", 1000);
        assert_eq!(paragraphs, vec!["P1.", "P2.", "P3."]);
    }

    #[test]
    fn test_markdown_headers() {
        let text = "# 标题1\n\n这是第一部分内容。\n\n## 标题2\n\n这是第二部分内容。";
        let paragraphs = split_paragraphs(text, 1000);
        assert_eq!(paragraphs.len(), 4);
        assert_eq!(paragraphs[2], "## 标题2");
    }

    #[test]
    fn test_heading_starts_new_paragraph_without_blank_line() {
        let paragraphs = split_paragraphs("intro text\n## Section\nbody", 1000);
        assert_eq!(paragraphs, vec!["intro text", "## Section\nbody"]);
    }

    #[test]
    fn test_heading_rules() {
        assert!(is_heading("# a"));
        assert!(is_heading("###### six"));
        assert!(!is_heading("####### seven"));
        assert!(!is_heading("#hashtag"));
        assert!(!is_heading("text # not"));
    }

    #[test]
    fn test_bullet_rules() {
        assert!(is_bullet("* item"));
        assert!(!is_bullet("*emphasis*"));
        assert!(!is_bullet("- dash"));
    }

    #[test]
    fn test_single_newlines_kept_when_short() {
        let text = "这是一个测试文档内容。\n这是第二段落。\n这是第三段落。";
        let paragraphs = split_paragraphs(text, 1000);
        assert_eq!(paragraphs.len(), 1);
        assert!(paragraphs[0].contains("第三段落"));
    }

    #[test]
    fn test_single_newlines_merged_when_long() {
        let line = "a line of wrapped text";
        let text = vec![line; 10].join("\n");
        let paragraphs = split_paragraphs(&text, 50);

        assert!(paragraphs.len() > 1);
        for p in &paragraphs {
            assert!(p.chars().count() <= 50, "{p:?}");
            assert!(!p.contains('\n'));
        }
    }

    #[test]
    fn test_long_paragraph_without_newlines() {
        let text = "word ".repeat(100);
        let paragraphs = split_paragraphs(text.trim(), 50);
        assert_eq!(paragraphs.len(), 1);
    }

    #[test]
    fn test_complex_formatting() {
        let text = "# 标题\n\n* 项目1\n* 项目2\n\n> 引用文本\n\n```\n代码块\n```";
        let paragraphs = split_paragraphs(text, 1000);
        assert_eq!(paragraphs[0], "# 标题");
        assert_eq!(paragraphs[1], "* 项目1");
        assert_eq!(paragraphs[2], "* 项目2");
        assert!(paragraphs.len() >= 5);
    }

    #[test]
    fn test_empty() {
        assert!(split_paragraphs("", 10).is_empty());
    }
}
