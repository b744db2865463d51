// SPDX-License-Identifier: MIT OR Apache-2.0

use core::ops::Range;

/// Result of measuring text at a fixed width
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct LineMetrics {
    /// Number of visual lines
    pub line_count: usize,
    /// Total height of all visual lines
    pub height: f32,
}

impl LineMetrics {
    pub const fn new(line_count: usize, height: f32) -> Self {
        Self { line_count, height }
    }
}

/// A visual line of laid out text
#[derive(Clone, Debug, PartialEq)]
pub struct LayoutLine {
    /// Byte range of the line in the measured text, including any hanging
    /// whitespace and the hard line ending that terminated it
    pub range: Range<usize>,
    /// Width of the line, excluding hanging whitespace
    pub w: f32,
}

/// Space between the edges of a view and its text
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Padding {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Padding {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Same padding on every edge
    pub const fn uniform(padding: f32) -> Self {
        Self::new(padding, padding, padding, padding)
    }

    /// Sum of left and right padding
    pub fn horizontal(&self) -> f32 {
        self.left + self.right
    }

    /// Sum of top and bottom padding
    pub fn vertical(&self) -> f32 {
        self.top + self.bottom
    }
}
