//! Width-aware text helpers for help layout. All input is plain (unstyled) text.

use unicode_width::UnicodeWidthStr;

/// Display width in terminal columns.
pub(crate) fn display_width(s: &str) -> usize {
    s.width()
}

/// Greedy word wrap. Existing newlines are kept as paragraph breaks; words
/// wider than `width` get a line of their own rather than being split.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut lines = Vec::new();

    for paragraph in text.lines() {
        let mut line = String::new();
        let mut line_width = 0;

        for word in paragraph.split_whitespace() {
            let word_width = word.width();
            if !line.is_empty() && line_width + 1 + word_width > width {
                lines.push(std::mem::take(&mut line));
                line_width = 0;
            }
            if !line.is_empty() {
                line.push(' ');
                line_width += 1;
            }
            line.push_str(word);
            line_width += word_width;
        }

        lines.push(line);
    }

    lines
}
