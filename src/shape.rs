// SPDX-License-Identifier: MIT OR Apache-2.0

//! Cell based shaping and line wrapping.
//!
//! Every grapheme advances by its display width in cells, which is what a
//! terminal or a monospace renderer does. This gives hosts without a font
//! engine a complete [`LayoutOracle`], and gives tests a deterministic one.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::ops::Range;
use unicode_linebreak::BreakOpportunity;
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::oracle::check_width;
use crate::{
    LayoutLine, LayoutOracle, LineEnding, LineMetrics, MeasureError, ParagraphIter, StyledText,
};

/// Metrics of a cell layout
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Metrics {
    /// Advance of a single-width cell
    pub cell_width: f32,
    /// Height of a visual line
    pub line_height: f32,
}

impl Metrics {
    pub const fn new(cell_width: f32, line_height: f32) -> Self {
        Self {
            cell_width,
            line_height,
        }
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}

/// The wrapping mode
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Wrap {
    /// No wrapping
    None,
    /// Wraps at a glyph level
    Glyph,
    /// Wraps at the word level, words wider than a line overflow it
    Word,
    /// Wraps at the word level, or fallback to glyph level if a word can't fit on a line by itself
    #[default]
    WordOrGlyph,
}

/// A shaped grapheme cluster
#[derive(Clone, Debug)]
pub struct ShapeGlyph {
    pub start: usize,
    pub end: usize,
    /// Advance in cells
    pub x_advance: f32,
}

/// A shaped word (for word wrapping)
#[derive(Clone, Debug)]
pub struct ShapeWord {
    pub blank: bool,
    /// A new line must start after this word
    pub hard_break: bool,
    pub range: Range<usize>,
    pub glyphs: Vec<ShapeGlyph>,
    /// Advance in cells
    pub x_advance: f32,
}

impl ShapeWord {
    pub fn new(text: &str, word_range: Range<usize>, blank: bool) -> Self {
        let word = &text[word_range.clone()];

        log::trace!(
            "      Word{}: '{}'",
            if blank { " BLANK" } else { "" },
            word
        );

        let glyphs: Vec<ShapeGlyph> = word
            .grapheme_indices(true)
            .map(|(i, egc)| ShapeGlyph {
                start: word_range.start + i,
                end: word_range.start + i + egc.len(),
                x_advance: egc.width() as f32,
            })
            .collect();
        let x_advance = glyphs.iter().map(|glyph| glyph.x_advance).sum();

        Self {
            blank,
            hard_break: false,
            range: word_range,
            glyphs,
            x_advance,
        }
    }
}

/// A shaped paragraph
#[derive(Clone, Debug)]
pub struct ShapeLine {
    /// Range of the paragraph, without its line ending
    pub range: Range<usize>,
    pub ending: LineEnding,
    pub words: Vec<ShapeWord>,
}

impl ShapeLine {
    /// Shape the paragraph of `text` at `range`, terminated by `ending`
    pub fn new(text: &str, range: Range<usize>, ending: LineEnding) -> Self {
        let line = &text[range.clone()];
        let mut words = Vec::new();

        // Each segment between break opportunities is a word followed by
        // whitespace; every whitespace char becomes its own blank word.
        let mut start_word = 0;
        for (end_lb, opportunity) in unicode_linebreak::linebreaks(line) {
            let segment = &line[start_word..end_lb];
            let start_blank = segment
                .char_indices()
                .rev()
                .take_while(|(_, c)| c.is_whitespace())
                .last()
                .map_or(end_lb, |(i, _)| start_word + i);
            if start_word < start_blank {
                words.push(ShapeWord::new(
                    text,
                    range.start + start_word..range.start + start_blank,
                    false,
                ));
            }
            for (i, c) in line[start_blank..end_lb].char_indices() {
                let start = range.start + start_blank + i;
                words.push(ShapeWord::new(text, start..start + c.len_utf8(), true));
            }
            // Mandatory breaks inside a paragraph (U+2028, form feed, ...)
            if opportunity == BreakOpportunity::Mandatory && end_lb < line.len() {
                if let Some(word) = words.last_mut() {
                    word.hard_break = true;
                }
            }
            start_word = end_lb;
        }

        Self {
            range,
            ending,
            words,
        }
    }

    /// Lay out the paragraph into visual lines no wider than `width` cells
    pub fn layout(&self, width: f32, wrap: Wrap) -> Vec<LayoutLine> {
        let mut builder = LineBuilder::new(self.range.start, width);
        for word in &self.words {
            if word.blank {
                builder.push_blank(word.x_advance);
            } else {
                match wrap {
                    Wrap::None => builder.push_word(word),
                    Wrap::Glyph => builder.push_glyphs(word),
                    Wrap::Word | Wrap::WordOrGlyph => {
                        if !builder.fits(word.x_advance) {
                            builder.wrap_at(word.range.start);
                        }
                        if wrap == Wrap::WordOrGlyph && builder.overflows(word.x_advance) {
                            builder.push_glyphs(word);
                        } else {
                            builder.push_word(word);
                        }
                    }
                }
            }
            if word.hard_break {
                builder.break_at(word.range.end);
            }
        }
        builder.finish(self.range.end + self.ending.len())
    }
}

/// Greedy line filling state, all widths in cells
struct LineBuilder {
    lines: Vec<LayoutLine>,
    width: f32,
    line_start: usize,
    /// Width of content placed on the current line
    x: f32,
    /// Width of whitespace since the last placed word, it hangs if the line wraps
    pending: f32,
    has_content: bool,
}

impl LineBuilder {
    fn new(start: usize, width: f32) -> Self {
        Self {
            lines: Vec::with_capacity(1),
            width,
            line_start: start,
            x: 0.0,
            pending: 0.0,
            has_content: false,
        }
    }

    /// Would `advance` fit on the current line, an empty line always fits
    fn fits(&self, advance: f32) -> bool {
        !self.has_content || !self.overflows(advance)
    }

    /// Would `advance` run past the edge, even on an empty line
    fn overflows(&self, advance: f32) -> bool {
        self.x + self.pending + advance > self.width
    }

    /// Start a new line at `index` if the current one has content
    fn wrap_at(&mut self, index: usize) {
        if self.has_content {
            self.break_at(index);
        }
    }

    /// Start a new line at `index` unconditionally
    fn break_at(&mut self, index: usize) {
        self.lines.push(LayoutLine {
            range: self.line_start..index,
            w: self.x,
        });
        self.line_start = index;
        self.x = 0.0;
        self.pending = 0.0;
        self.has_content = false;
    }

    fn push_blank(&mut self, advance: f32) {
        self.pending += advance;
    }

    fn push_word(&mut self, word: &ShapeWord) {
        self.x += self.pending + word.x_advance;
        self.pending = 0.0;
        self.has_content = true;
    }

    fn push_glyphs(&mut self, word: &ShapeWord) {
        for glyph in &word.glyphs {
            if !self.fits(glyph.x_advance) {
                self.wrap_at(glyph.start);
            }
            self.x += self.pending + glyph.x_advance;
            self.pending = 0.0;
            self.has_content = true;
        }
    }

    fn finish(mut self, end: usize) -> Vec<LayoutLine> {
        self.lines.push(LayoutLine {
            range: self.line_start..end,
            w: self.x,
        });
        self.lines
    }
}

/// A [`LayoutOracle`] that lays text out on a grid of cells
#[derive(Clone, Debug, Default)]
pub struct CellOracle {
    metrics: Metrics,
    wrap: Wrap,
}

impl CellOracle {
    pub fn new(metrics: Metrics) -> Self {
        Self {
            metrics,
            wrap: Wrap::default(),
        }
    }

    /// Set wrapping mode, consuming `self`
    pub fn with_wrap(mut self, wrap: Wrap) -> Self {
        self.wrap = wrap;
        self
    }

    pub fn metrics(&self) -> Metrics {
        self.metrics
    }

    pub fn wrap(&self) -> Wrap {
        self.wrap
    }

    /// Lay out `text` into visual lines at `width`
    ///
    /// ## Errors
    ///
    /// Returns [`MeasureError::InvalidWidth`] if `width` is zero, negative, or not finite.
    pub fn layout(&self, text: &StyledText, width: f32) -> Result<Vec<LayoutLine>, MeasureError> {
        let width = check_width(width)?;
        let cells = width / self.metrics.cell_width;
        let mut lines = Vec::new();
        for (range, ending) in ParagraphIter::new(text.text()) {
            let shape = ShapeLine::new(text.text(), range, ending);
            lines.extend(shape.layout(cells, self.wrap).into_iter().map(|mut line| {
                line.w *= self.metrics.cell_width;
                line
            }));
        }
        Ok(lines)
    }
}

impl LayoutOracle for CellOracle {
    fn measure(&mut self, text: &StyledText, width: f32) -> Result<LineMetrics, MeasureError> {
        let lines = self.layout(text, width)?;
        let metrics = LineMetrics::new(
            lines.len(),
            lines.len() as f32 * self.metrics.line_height,
        );
        log::trace!("measure {:?} at {}: {:?}", text.text(), width, metrics);
        Ok(metrics)
    }

    fn line_end(
        &mut self,
        text: &StyledText,
        width: f32,
        line: usize,
    ) -> Result<usize, MeasureError> {
        let lines = self.layout(text, width)?;
        lines
            .get(line)
            .map(|layout_line| layout_line.range.end)
            .ok_or(MeasureError::LineOutOfRange {
                line,
                count: lines.len(),
            })
    }
}
