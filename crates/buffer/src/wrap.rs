//! Word wrapping for the plain (no line numbers) text layout
//!
//! Text is split into whitespace-delimited words. A word that would overflow a
//! line that already has content moves to the next visual line; a word wider
//! than the whole line is placed alone and overflows. There is no mapping back
//! from visual lines to buffer indices.

use std::ops::Range;

use super::TextMeasure;

/// A word placed on a visual line
#[derive(Debug, Clone, PartialEq)]
pub struct WrappedWord {
    /// Visual line (0-based)
    pub line: usize,
    /// Horizontal offset from the left edge of the text area
    pub x: f32,
    /// Byte range of the word in the source text
    pub range: Range<usize>,
}

/// Result of wrapping a text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrappedText {
    /// Words in reading order
    pub words: Vec<WrappedWord>,
    /// Number of visual lines (at least one)
    pub line_count: usize,
}

impl WrappedText {
    /// Height of the laid out text for a given line height
    pub fn height(&self, line_height: f32) -> f32 {
        self.line_count as f32 * line_height
    }
}

/// Lay out `text` into visual lines no wider than `max_width`.
///
/// Spaces advance by the measured width of `" "`, tabs by `tab_width` spaces,
/// and `\n` always starts a new visual line.
pub fn wrap_words(
    text: &str,
    max_width: f32,
    tab_width: usize,
    measure: &dyn TextMeasure,
) -> WrappedText {
    let space_width = measure.measure_width(" ");
    let tab_advance = space_width * tab_width as f32;

    let mut words = Vec::new();
    let mut line = 0;
    let mut x = 0.0_f32;
    let mut word_start: Option<usize> = None;

    let mut place_word = |range: Range<usize>, line: &mut usize, x: &mut f32| {
        let width = measure.measure_width(&text[range.clone()]);
        if *x > 0.0 && *x + width > max_width {
            *line += 1;
            *x = 0.0;
        }
        words.push(WrappedWord {
            line: *line,
            x: *x,
            range,
        });
        *x += width;
    };

    for (i, ch) in text.char_indices() {
        match ch {
            ' ' | '\t' | '\n' => {
                if let Some(start) = word_start.take() {
                    place_word(start..i, &mut line, &mut x);
                }
                match ch {
                    ' ' => x += space_width,
                    '\t' => x += tab_advance,
                    _ => {
                        line += 1;
                        x = 0.0;
                    }
                }
            }
            _ => {
                if word_start.is_none() {
                    word_start = Some(i);
                }
            }
        }
    }
    if let Some(start) = word_start {
        place_word(start..text.len(), &mut line, &mut x);
    }

    WrappedText {
        words,
        line_count: line + 1,
    }
}
