// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Text layout — builds the quote block, wraps it to a fixed number of
// characters per line, and measures the wrapped block in pixels.

use crate::font::{BUILTIN_CELL_HEIGHT, BUILTIN_CELL_WIDTH, RenderFont};

/// Characters per line when no width is configured.
pub const DEFAULT_LINE_WIDTH: usize = 40;

/// Vertical gap between rendered lines, in pixels.
pub const LINE_SPACING: u32 = 4;

/// Outline thickness around every glyph, in pixels.
pub const STROKE_WIDTH: u32 = 1;

/// Quote text split into display lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrappedText {
    lines: Vec<String>,
}

impl WrappedText {
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Length of the longest line, in characters.
    pub fn longest_line(&self) -> usize {
        self.lines
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0)
    }
}

impl std::fmt::Display for WrappedText {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.lines.join("\n"))
    }
}

/// Pixel footprint of a wrapped block, outline included.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextExtent {
    pub width: u32,
    pub height: u32,
}

/// The text drawn on the image: the quoted body, a newline, then `- author`.
pub fn quote_block(body: &str, author: &str) -> String {
    format!("\"{body}\"\n- {author}")
}

/// Build the quote block and wrap it to `line_width` characters per line.
pub fn wrap(body: &str, author: &str, line_width: usize) -> WrappedText {
    wrap_text(&quote_block(body, author), line_width)
}

/// Greedy word wrap. Each input line is wrapped on its own and breaks only
/// at whitespace. Spacing between words on one output line is kept (each
/// whitespace character becomes one space); whitespace at a break point is
/// dropped. Words longer than the width are broken at the width.
pub fn wrap_text(text: &str, line_width: usize) -> WrappedText {
    let width = line_width.max(1);
    let mut lines = Vec::new();
    for source in text.lines() {
        wrap_line(source, width, &mut lines);
    }
    if lines.is_empty() {
        lines.push(String::new());
    }
    WrappedText { lines }
}

fn wrap_line(source: &str, width: usize, out: &mut Vec<String>) {
    let start = out.len();
    let mut current = String::new();
    let mut current_len = 0usize;

    for (gap, word) in words_with_gaps(source) {
        let mut word = word;
        let mut word_len = word.chars().count();

        if current_len > 0 && current_len + gap + word_len <= width {
            current.push_str(&" ".repeat(gap));
            current.push_str(word);
            current_len += gap + word_len;
            continue;
        }
        if current_len > 0 {
            out.push(std::mem::take(&mut current));
            current_len = 0;
        }
        while word_len > width {
            let split = word
                .char_indices()
                .nth(width)
                .map(|(index, _)| index)
                .unwrap_or(word.len());
            out.push(word[..split].to_string());
            word = &word[split..];
            word_len -= width;
        }
        current.push_str(word);
        current_len = word_len;
    }

    if current_len > 0 || out.len() == start {
        out.push(current);
    }
}

/// Words of `source`, each paired with the number of whitespace characters
/// that precede it.
fn words_with_gaps(source: &str) -> Vec<(usize, &str)> {
    let mut pieces = Vec::new();
    let mut rest = source;
    loop {
        let word_start = rest
            .find(|c: char| !c.is_whitespace())
            .unwrap_or(rest.len());
        let gap = rest[..word_start].chars().count();
        rest = &rest[word_start..];
        if rest.is_empty() {
            break;
        }
        let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
        pieces.push((gap, &rest[..word_end]));
        rest = &rest[word_end..];
    }
    pieces
}

/// Measure a wrapped block.
///
/// Uses the font's own multiline bounding box when it has one; the built-in
/// bitmap font does not, so the block is estimated from its line count and
/// longest line on a fixed character cell.
pub fn measure(wrapped: &WrappedText, font: &RenderFont) -> TextExtent {
    font.multiline_extent(wrapped.lines(), LINE_SPACING, STROKE_WIDTH)
        .unwrap_or_else(|| estimate_extent(wrapped))
}

/// Fixed-cell size estimate, independent of any font.
pub fn estimate_extent(wrapped: &WrappedText) -> TextExtent {
    let lines = wrapped.line_count() as u32;
    TextExtent {
        width: wrapped.longest_line() as u32 * BUILTIN_CELL_WIDTH + 2 * STROKE_WIDTH,
        height: lines * BUILTIN_CELL_HEIGHT
            + lines.saturating_sub(1) * LINE_SPACING
            + 2 * STROKE_WIDTH,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_quote_keeps_author_line() {
        let wrapped = wrap("Hello", "World", DEFAULT_LINE_WIDTH);
        assert_eq!(wrapped.lines(), ["\"Hello\"", "- World"]);
        assert_eq!(wrapped.to_string(), "\"Hello\"\n- World");
    }

    #[test]
    fn wraps_on_word_boundaries() {
        let wrapped = wrap(
            "Life is what happens to you while you're busy making other plans",
            "John Lennon",
            DEFAULT_LINE_WIDTH,
        );
        assert_eq!(
            wrapped.lines(),
            [
                "\"Life is what happens to you while",
                "you're busy making other plans\"",
                "- John Lennon",
            ]
        );
        assert!(wrapped.longest_line() <= DEFAULT_LINE_WIDTH);
    }

    #[test]
    fn long_word_is_broken_at_width() {
        let wrapped = wrap_text("abcdefghij xy", 4);
        assert_eq!(wrapped.lines(), ["abcd", "efgh", "ij", "xy"]);
    }

    #[test]
    fn exact_fit_stays_on_one_line() {
        let wrapped = wrap_text("abcd efgh", 9);
        assert_eq!(wrapped.lines(), ["abcd efgh"]);
    }

    #[test]
    fn inner_spacing_is_kept() {
        let wrapped = wrap("Sit  stay", "Rex", DEFAULT_LINE_WIDTH);
        assert_eq!(wrapped.lines(), ["\"Sit  stay\"", "- Rex"]);

        let padded = wrap("  spaced  ", "  Rex", DEFAULT_LINE_WIDTH);
        assert_eq!(padded.lines(), ["\"  spaced  \"", "-   Rex"]);
    }

    #[test]
    fn spacing_dropped_at_breaks() {
        let wrapped = wrap_text("aa   bb  cc", 7);
        assert_eq!(wrapped.lines(), ["aa   bb", "cc"]);
        assert_eq!(wrap_text("  lead", 10).lines(), ["lead"]);
    }

    #[test]
    fn tabs_become_spaces() {
        assert_eq!(wrap_text("a\tb", 10).lines(), ["a b"]);
    }

    #[test]
    fn characters_not_bytes() {
        let wrapped = wrap_text("ééééé ü", 7);
        assert_eq!(wrapped.lines(), ["ééééé ü"]);
    }

    #[test]
    fn body_text_survives_wrapping() {
        let body = "Bark like no one is listening";
        let wrapped = wrap(body, "Rex", 80);
        assert_eq!(wrapped.lines()[0], format!("\"{body}\""));
    }

    #[test]
    fn builtin_font_falls_back_to_estimate() {
        let wrapped = wrap("Hello", "World", DEFAULT_LINE_WIDTH);
        let extent = measure(&wrapped, &RenderFont::builtin());
        assert_eq!(extent, estimate_extent(&wrapped));
        // 7 chars ("Hello" quoted), 2 lines
        assert_eq!(extent.width, 7 * BUILTIN_CELL_WIDTH + 2);
        assert_eq!(extent.height, 2 * BUILTIN_CELL_HEIGHT + LINE_SPACING + 2);
    }
}
