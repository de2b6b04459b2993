//! Paragraph-aware word wrapping
//!
//! Text is split into paragraphs on blank lines. Each paragraph is packed
//! greedily: words go onto the current line until the next one would push
//! it past the width. Words are never broken, so a single word wider than
//! the width sits on a line of its own.

use std::fmt;
use tracing::warn;
use unicode_width::UnicodeWidthStr;

/// Output width in terminal columns, always at least one
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Width(usize);

impl Width {
    pub const DEFAULT: Width = Width(100);
    pub const MIN: Width = Width(1);

    /// Build a width from user input, clamping non-positive values
    pub fn clamped(columns: i64) -> Self {
        if columns < 1 {
            warn!(columns, "width must be positive, using {}", Self::MIN);
            return Self::MIN;
        }
        Self(usize::try_from(columns).unwrap_or(usize::MAX))
    }

    pub fn columns(self) -> usize {
        self.0
    }
}

impl Default for Width {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Wrap every paragraph of `text` to `width`, separated by one blank line
pub fn format(text: &str, width: Width) -> String {
    paragraphs(text)
        .iter()
        .map(|words| wrap(words, width).join("\n"))
        .collect::<Vec<_>>()
        .join("\n\n")
}

/// Words of each paragraph, in order
///
/// Lines that are empty or only whitespace end a paragraph; runs of them
/// collapse, so no paragraph is ever empty.
pub fn paragraphs(text: &str) -> Vec<Vec<&str>> {
    let mut paragraphs = Vec::new();
    let mut current = Vec::new();

    for line in text.lines() {
        if line.trim().is_empty() {
            if !current.is_empty() {
                paragraphs.push(std::mem::take(&mut current));
            }
        } else {
            current.extend(line.split_whitespace());
        }
    }

    if !current.is_empty() {
        paragraphs.push(current);
    }

    paragraphs
}

/// Greedily pack `words` into lines no wider than `width`
pub fn wrap(words: &[&str], width: Width) -> Vec<String> {
    let mut lines = Vec::new();
    let mut line = String::new();
    let mut line_width = 0;

    for word in words {
        let word_width = word.width();

        if line.is_empty() {
            line.push_str(word);
            line_width = word_width;
        } else if line_width + 1 + word_width <= width.columns() {
            line.push(' ');
            line.push_str(word);
            line_width += 1 + word_width;
        } else {
            lines.push(std::mem::replace(&mut line, word.to_string()));
            line_width = word_width;
        }
    }

    if !line.is_empty() {
        lines.push(line);
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    const LOREM: &str = "The quick brown fox jumps over the lazy dog while the \
        cautious cat watches from the windowsill, wondering whether the \
        afternoon sun will last long enough for another nap before dinner \
        arrives and the household wakes up again for the evening routine of \
        feeding, brushing and the inevitable chase around the garden.";

    #[test]
    fn test_width_clamps_non_positive() {
        assert_eq!(Width::clamped(0), Width::MIN);
        assert_eq!(Width::clamped(-20), Width::MIN);
        assert_eq!(Width::clamped(40).columns(), 40);
        assert_eq!(Width::default().columns(), 100);
    }

    #[test]
    fn test_short_paragraph_unchanged() {
        assert_eq!(format("GET - Fetch a resource", Width::clamped(80)), "GET - Fetch a resource");
    }

    #[test]
    fn test_whitespace_is_normalized() {
        assert_eq!(format("  one   two\tthree  ", Width::clamped(80)), "one two three");
    }

    #[test]
    fn test_lines_never_exceed_width() {
        assert!(LOREM.len() > 250);
        let width = Width::clamped(40);
        let wrapped = format(LOREM, width);

        assert!(wrapped.lines().count() > 1);
        for line in wrapped.lines() {
            assert!(line.len() <= 40, "line too long: {:?}", line);
        }
    }

    #[test]
    fn test_wrapping_keeps_word_sequence() {
        let wrapped = format(LOREM, Width::clamped(23));
        let rejoined = wrapped.lines().collect::<Vec<_>>().join(" ");
        let original: Vec<&str> = LOREM.split_whitespace().collect();
        assert_eq!(rejoined.split(' ').collect::<Vec<_>>(), original);
    }

    #[test]
    fn test_greedy_packing_fills_exactly() {
        let words = ["aaaa", "bbbb", "cc", "dddddd"];
        assert_eq!(wrap(&words, Width::clamped(9)), vec!["aaaa bbbb", "cc dddddd"]);
        assert_eq!(wrap(&words, Width::clamped(8)), vec!["aaaa", "bbbb cc", "dddddd"]);
    }

    #[test]
    fn test_long_word_overflows_alone() {
        let words = ["a", "Strict-Transport-Security", "b"];
        assert_eq!(
            wrap(&words, Width::clamped(10)),
            vec!["a", "Strict-Transport-Security", "b"]
        );
    }

    #[test]
    fn test_width_one_puts_each_word_on_a_line() {
        assert_eq!(format("a bc d", Width::MIN), "a\nbc\nd");
    }

    #[test]
    fn test_paragraphs_split_on_blank_lines() {
        let text = "first line\ncontinues here\n\n  \n\nsecond paragraph\n";
        assert_eq!(
            paragraphs(text),
            vec![vec!["first", "line", "continues", "here"], vec!["second", "paragraph"]]
        );
        assert_eq!(
            format(text, Width::clamped(100)),
            "first line continues here\n\nsecond paragraph"
        );
    }

    #[test]
    fn test_each_paragraph_wrapped_independently() {
        let text = "aaa bbb ccc\n\nddd eee";
        assert_eq!(format(text, Width::clamped(7)), "aaa bbb\nccc\n\nddd eee");
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(format("", Width::default()), "");
        assert_eq!(format("\n \n", Width::default()), "");
    }

    #[test]
    fn test_columns_count_display_width() {
        let words = ["caf\u{e9}", "na\u{ef}ve"];
        assert_eq!(wrap(&words, Width::clamped(10)), vec!["caf\u{e9} na\u{ef}ve"]);
    }
}
