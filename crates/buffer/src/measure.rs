//! Text measurement.
//!
//! The editor never assumes a unit: terminal front ends measure in cells,
//! tests and pixel front ends measure with a fixed advance per character.

use unicode_width::UnicodeWidthStr;

/// Measures the rendered width of a run of text.
///
/// Font and size are properties of the implementor.
pub trait TextMeasure {
    /// Width of `text` when drawn on a single line
    fn measure_width(&self, text: &str) -> f32;
}

/// Terminal cell measurement (display width in columns).
#[derive(Debug, Clone, Copy, Default)]
pub struct CellMeasure;

impl TextMeasure for CellMeasure {
    fn measure_width(&self, text: &str) -> f32 {
        // Tabs are drawn as a single cell.
        let tabs = text.bytes().filter(|&b| b == b'\t').count();
        let columns: usize = text.split('\t').map(|part| part.width()).sum();
        (columns + tabs) as f32
    }
}

/// Monospace measurement with a fixed advance per character.
#[derive(Debug, Clone, Copy)]
pub struct FixedAdvance(pub f32);

impl TextMeasure for FixedAdvance {
    fn measure_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.0
    }
}

impl<T: TextMeasure + ?Sized> TextMeasure for &T {
    fn measure_width(&self, text: &str) -> f32 {
        (**self).measure_width(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_measure_counts_columns() {
        assert_eq!(CellMeasure.measure_width(""), 0.0);
        assert_eq!(CellMeasure.measure_width("ls -la"), 6.0);
        assert_eq!(CellMeasure.measure_width("a\tb"), 3.0);
    }

    #[test]
    fn test_fixed_advance() {
        let measure = FixedAdvance(9.5);
        assert_eq!(measure.measure_width("abcd"), 38.0);
        assert_eq!((&measure).measure_width("a"), 9.5);
    }
}
