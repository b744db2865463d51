// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{LineMetrics, StyledText};

/// Errors reported by a [`LayoutOracle`]
#[derive(Clone, Copy, Debug, PartialEq, thiserror::Error)]
pub enum MeasureError {
    /// Width was zero, negative, or not finite
    #[error("cannot lay out text at width {0}")]
    InvalidWidth(f32),
    /// Asked for the end of a line the layout does not have
    #[error("line {line} out of range, layout has {count} lines")]
    LineOutOfRange { line: usize, count: usize },
}

/// Text measurement provided by the host layout engine
///
/// Implementations must be deterministic: the same text and width always
/// produce the same answer. They take `&mut self` so they may keep shaping
/// caches, but must not otherwise change behavior between calls.
pub trait LayoutOracle {
    /// Measure how many visual lines `text` occupies at `width`, and their height
    ///
    /// ## Errors
    ///
    /// Returns [`MeasureError::InvalidWidth`] if `width` cannot be laid out.
    fn measure(&mut self, text: &StyledText, width: f32) -> Result<LineMetrics, MeasureError>;

    /// Byte offset just past the end of visual line `line` (0-indexed) of `text` at `width`
    ///
    /// ## Errors
    ///
    /// Returns [`MeasureError::LineOutOfRange`] if the layout has no such line.
    fn line_end(&mut self, text: &StyledText, width: f32, line: usize)
        -> Result<usize, MeasureError>;

    /// Called by [`FoldView`](crate::FoldView) after each fold computation, a place to trim caches
    fn finish_pass(&mut self) {}
}

impl<O: LayoutOracle + ?Sized> LayoutOracle for &mut O {
    fn measure(&mut self, text: &StyledText, width: f32) -> Result<LineMetrics, MeasureError> {
        (**self).measure(text, width)
    }

    fn line_end(
        &mut self,
        text: &StyledText,
        width: f32,
        line: usize,
    ) -> Result<usize, MeasureError> {
        (**self).line_end(text, width, line)
    }

    fn finish_pass(&mut self) {
        (**self).finish_pass();
    }
}

/// Check that a width can be laid out
pub(crate) fn check_width(width: f32) -> Result<f32, MeasureError> {
    if width.is_finite() && width > 0.0 {
        Ok(width)
    } else {
        Err(MeasureError::InvalidWidth(width))
    }
}
