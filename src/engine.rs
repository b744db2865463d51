// SPDX-License-Identifier: MIT OR Apache-2.0

//! Truncation point search.

#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

use crate::{
    Affordance, FoldConfig, LayoutOracle, LineMetrics, MeasureError, Search, StyledText, ELLIPSIS,
};

/// Upper bound on spaces inserted to push the collapse affordance right
pub const MAX_ALIGN_PADDING: usize = 4096;

/// Closed and open renderings of a text for one width and config
#[derive(Clone, Debug, PartialEq)]
pub struct FoldResult {
    /// True if the text needs more than `max_lines` lines and can be folded
    pub expandable: bool,
    /// Prefix, ellipsis and expand affordance; the full text if not expandable
    pub closed: StyledText,
    /// Full text and collapse affordance; the full text if not expandable
    pub open: StyledText,
    /// Height of `closed` plus vertical padding
    pub closed_height: f32,
    /// Height of `open` plus vertical padding
    pub open_height: f32,
    /// Lines the full text occupies, 0 if it could not be measured
    pub line_count: usize,
}

impl FoldResult {
    /// A result that shows `text` as is
    pub fn unfolded(text: &StyledText, metrics: LineMetrics, vertical_padding: f32) -> Self {
        let height = metrics.height + vertical_padding;
        Self {
            expandable: false,
            closed: text.clone(),
            open: text.clone(),
            closed_height: height,
            open_height: height,
            line_count: metrics.line_count,
        }
    }
}

/// Compute the closed and open renderings of `text` at `width`
///
/// `width` is the content width, without horizontal padding. Measurement
/// failures never escape: they leave the text unfolded.
pub fn compute_fold<O: LayoutOracle>(
    oracle: &mut O,
    text: &StyledText,
    width: f32,
    config: &FoldConfig,
) -> FoldResult {
    let vertical_padding = config.padding.vertical();
    if config.max_lines == 0 || text.is_empty() {
        return FoldResult::unfolded(text, measure_or_empty(oracle, text, width), vertical_padding);
    }

    let full = match oracle.measure(text, width) {
        Ok(full) => full,
        Err(err) => {
            log::warn!("failed to measure text at width {}: {}", width, err);
            return FoldResult::unfolded(text, LineMetrics::default(), vertical_padding);
        }
    };
    if full.line_count <= config.max_lines {
        log::debug!(
            "{} lines fit in {} at width {}",
            full.line_count,
            config.max_lines,
            width
        );
        return FoldResult::unfolded(text, full, vertical_padding);
    }

    match fold(oracle, text, width, config, full) {
        Ok(result) => result,
        Err(err) => {
            log::warn!("failed to fold text at width {}: {}", width, err);
            FoldResult::unfolded(text, full, vertical_padding)
        }
    }
}

fn measure_or_empty<O: LayoutOracle>(
    oracle: &mut O,
    text: &StyledText,
    width: f32,
) -> LineMetrics {
    oracle.measure(text, width).unwrap_or_default()
}

fn fold<O: LayoutOracle>(
    oracle: &mut O,
    text: &StyledText,
    width: f32,
    config: &FoldConfig,
    full: LineMetrics,
) -> Result<FoldResult, MeasureError> {
    let vertical_padding = config.padding.vertical();
    let end = text.floor_char_boundary(oracle.line_end(text, width, config.max_lines - 1)?);
    let tail = closed_tail(config);

    let (closed, closed_metrics) = match config.search {
        Search::Linear => shrink_linear(oracle, text, end, &tail, width, config.max_lines)?,
        Search::Binary => shrink_binary(oracle, text, end, &tail, width, config.max_lines)?,
    };
    log::debug!(
        "closed {} of {} bytes in {} lines",
        closed.len(),
        text.len(),
        closed_metrics.line_count
    );

    let (open, open_metrics) = open_content(oracle, text, width, config, full)?;

    Ok(FoldResult {
        expandable: true,
        closed,
        open,
        closed_height: closed_metrics.height + vertical_padding,
        open_height: open_metrics.height + vertical_padding,
        line_count: full.line_count,
    })
}

/// Ellipsis followed by the expand affordance, or a plain ellipsis
fn closed_tail(config: &FoldConfig) -> StyledText {
    let ellipsis = StyledText::new(ELLIPSIS);
    match Affordance::expand(&config.open_suffix, config.open_suffix_color) {
        Some(affordance) => ellipsis.concat(&affordance),
        None => ellipsis,
    }
}

/// Remove one trailing character at a time until prefix and tail fit
///
/// An empty prefix is accepted even if the tail alone does not fit.
fn shrink_linear<O: LayoutOracle>(
    oracle: &mut O,
    text: &StyledText,
    end: usize,
    tail: &StyledText,
    width: f32,
    max_lines: usize,
) -> Result<(StyledText, LineMetrics), MeasureError> {
    let mut end = end;
    loop {
        let candidate = text.prefix(end).concat(tail);
        let metrics = oracle.measure(&candidate, width)?;
        if metrics.line_count <= max_lines || end == 0 {
            return Ok((candidate, metrics));
        }
        end = text.prev_char_boundary(end);
    }
}

/// Find a prefix up to `end` that fits with the tail in O(log n) measurements
///
/// Word wrap is not monotone in prefix length: a prefix whose last word merges
/// with the tail can take more lines than a longer one. The prefix found always
/// fits but may be shorter than the one [`shrink_linear`] finds.
fn shrink_binary<O: LayoutOracle>(
    oracle: &mut O,
    text: &StyledText,
    end: usize,
    tail: &StyledText,
    width: f32,
    max_lines: usize,
) -> Result<(StyledText, LineMetrics), MeasureError> {
    let boundaries: Vec<usize> = text.text()[..end]
        .char_indices()
        .map(|(i, _)| i)
        .chain(core::iter::once(end))
        .collect();

    // Invariant: boundaries[low] fits, or low is 0; boundaries[high] does not fit
    let last = boundaries.len() - 1;
    let candidate = text.prefix(end).concat(tail);
    let metrics = oracle.measure(&candidate, width)?;
    if metrics.line_count <= max_lines {
        return Ok((candidate, metrics));
    }
    let mut low = 0;
    let mut high = last;
    while high - low > 1 {
        let mid = low + (high - low) / 2;
        let candidate = text.prefix(boundaries[mid]).concat(tail);
        if oracle.measure(&candidate, width)?.line_count <= max_lines {
            low = mid;
        } else {
            high = mid;
        }
    }

    let candidate = text.prefix(boundaries[low]).concat(tail);
    let metrics = oracle.measure(&candidate, width)?;
    Ok((candidate, metrics))
}

/// Full text with the collapse affordance inline, on a new line, or right aligned
fn open_content<O: LayoutOracle>(
    oracle: &mut O,
    text: &StyledText,
    width: f32,
    config: &FoldConfig,
    full: LineMetrics,
) -> Result<(StyledText, LineMetrics), MeasureError> {
    let align_opposite = config.close_in_new_line && config.close_align_right;
    let Some(affordance) =
        Affordance::collapse(&config.close_suffix, config.close_suffix_color, align_opposite)
    else {
        return Ok((text.clone(), full));
    };

    let new_line = |oracle: &mut O| -> Result<(StyledText, LineMetrics), MeasureError> {
        let open = text.concat_str("\n").concat(&affordance);
        let metrics = oracle.measure(&open, width)?;
        Ok((open, metrics))
    };

    if config.close_in_new_line {
        return new_line(oracle);
    }

    let inline = text.concat(&affordance);
    let metrics = oracle.measure(&inline, width)?;
    if metrics.line_count > full.line_count {
        log::debug!("collapse affordance does not fit inline");
        return new_line(oracle);
    }
    if !config.close_align_right {
        return Ok((inline, metrics));
    }

    // Insert spaces before the affordance until it would wrap, keep the last
    // padding that stayed on the same line
    let mut open = inline.clone();
    let mut open_metrics = metrics;
    for _ in 0..MAX_ALIGN_PADDING {
        let padded = open.insert_str(text.len(), " ");
        let padded_metrics = oracle.measure(&padded, width)?;
        if padded_metrics.line_count != full.line_count {
            return Ok((open, open_metrics));
        }
        open = padded;
        open_metrics = padded_metrics;
    }
    // The layout never wrapped, there is no edge to align to
    log::warn!(
        "collapse affordance still not aligned after {} spaces, leaving it inline",
        MAX_ALIGN_PADDING
    );
    Ok((inline, metrics))
}
