// SPDX-License-Identifier: MIT OR Apache-2.0

#[cfg(not(feature = "std"))]
use alloc::{string::String, vec::Vec};
use core::ops::Range;

use crate::{Attr, ClickAction};

/// An attribute applied to a byte range of a [`StyledText`]
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Span {
    /// Byte range, start and end are on `char` boundaries
    pub range: Range<usize>,
    pub attr: Attr,
}

impl Span {
    pub fn new(range: Range<usize>, attr: Attr) -> Self {
        Self { range, attr }
    }

    fn contains(&self, index: usize) -> bool {
        self.range.contains(&index)
    }
}

/// Text plus attribute spans over byte ranges of it
///
/// Spans may overlap. A `StyledText` is never changed in place once handed out:
/// [`Self::concat`], [`Self::slice`] and [`Self::insert_str`] all produce new
/// values, so a closed and an open rendering can never alias each other.
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct StyledText {
    text: String,
    spans: Vec<Span>,
}

impl StyledText {
    /// Create text without any spans
    pub fn new<T: Into<String>>(text: T) -> Self {
        Self {
            text: text.into(),
            spans: Vec::new(),
        }
    }

    /// Add a span, consuming `self`
    ///
    /// The end of the range is clamped to the text length. Empty ranges and
    /// ranges that do not fall on `char` boundaries are dropped.
    pub fn with_span(mut self, range: Range<usize>, attr: Attr) -> Self {
        let end = range.end.min(self.text.len());
        let start = range.start;
        if start < end && self.text.is_char_boundary(start) && self.text.is_char_boundary(end) {
            self.spans.push(Span::new(start..end, attr));
        } else {
            log::warn!("dropping span {:?} on text of length {}", range, self.text.len());
        }
        self
    }

    /// Add a span covering the whole text, consuming `self`
    pub fn with_attr(self, attr: Attr) -> Self {
        let len = self.text.len();
        self.with_span(0..len, attr)
    }

    /// Get current text
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get spans, in insertion order
    pub fn spans(&self) -> &[Span] {
        &self.spans
    }

    /// Length of the text in bytes
    pub fn len(&self) -> usize {
        self.text.len()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Consume this text, returning only its contents as a String.
    pub fn into_text(self) -> String {
        self.text
    }

    /// New text with `other` appended, spans of `other` shifted to follow this text
    pub fn concat(&self, other: &Self) -> Self {
        let len = self.text.len();
        let mut text = String::with_capacity(len + other.text.len());
        text.push_str(&self.text);
        text.push_str(&other.text);

        let mut spans = Vec::with_capacity(self.spans.len() + other.spans.len());
        spans.extend(self.spans.iter().cloned());
        spans.extend(other.spans.iter().map(|span| {
            Span::new(span.range.start + len..span.range.end + len, span.attr)
        }));

        Self { text, spans }
    }

    /// New text with plain `s` appended
    pub fn concat_str(&self, s: &str) -> Self {
        let mut text = String::with_capacity(self.text.len() + s.len());
        text.push_str(&self.text);
        text.push_str(s);
        Self {
            text,
            spans: self.spans.clone(),
        }
    }

    /// New text holding `range` of this one
    ///
    /// Both ends are clamped to the text and floored to a `char` boundary.
    /// Spans are clipped to the range and rebased to start at zero; spans
    /// falling outside it are dropped.
    pub fn slice(&self, range: Range<usize>) -> Self {
        let end = self.floor_char_boundary(range.end);
        let start = self.floor_char_boundary(range.start.min(end));
        let spans = self
            .spans
            .iter()
            .filter_map(|span| {
                let span_start = span.range.start.max(start);
                let span_end = span.range.end.min(end);
                if span_start < span_end {
                    Some(Span::new(span_start - start..span_end - start, span.attr))
                } else {
                    None
                }
            })
            .collect();
        Self {
            text: String::from(&self.text[start..end]),
            spans,
        }
    }

    /// New text holding the first `end` bytes
    pub fn prefix(&self, end: usize) -> Self {
        self.slice(0..end)
    }

    /// New text with plain `s` inserted at byte `index`, floored to a `char` boundary
    ///
    /// Spans starting at or after `index` move behind the insertion, spans
    /// strictly containing `index` grow to cover it, spans ending at `index`
    /// are left as they are.
    pub fn insert_str(&self, index: usize, s: &str) -> Self {
        let index = self.floor_char_boundary(index);
        let shift = s.len();
        let mut text = String::with_capacity(self.text.len() + shift);
        text.push_str(&self.text[..index]);
        text.push_str(s);
        text.push_str(&self.text[index..]);

        let spans = self
            .spans
            .iter()
            .map(|span| {
                let range = if span.range.start >= index {
                    span.range.start + shift..span.range.end + shift
                } else if span.range.end > index {
                    span.range.start..span.range.end + shift
                } else {
                    span.range.clone()
                };
                Span::new(range, span.attr)
            })
            .collect();

        Self { text, spans }
    }

    /// Byte index of the `char` before `index`, or 0
    pub fn prev_char_boundary(&self, index: usize) -> usize {
        let index = index.min(self.text.len());
        self.text[..index]
            .char_indices()
            .next_back()
            .map_or(0, |(i, _)| i)
    }

    /// Largest `char` boundary not after `index`, clamped to the text length
    pub fn floor_char_boundary(&self, index: usize) -> usize {
        let mut index = index.min(self.text.len());
        while !self.text.is_char_boundary(index) {
            index -= 1;
        }
        index
    }

    /// Attributes of all spans covering byte `index`
    pub fn attrs_at(&self, index: usize) -> impl Iterator<Item = &Attr> + '_ {
        self.spans
            .iter()
            .filter(move |span| span.contains(index))
            .map(|span| &span.attr)
    }

    /// Click action at byte `index`, the most recently added clickable span wins
    pub fn click_action_at(&self, index: usize) -> Option<ClickAction> {
        self.spans
            .iter()
            .rev()
            .filter(|span| span.contains(index))
            .find_map(|span| span.attr.click_action())
    }
}

impl From<&str> for StyledText {
    fn from(text: &str) -> Self {
        Self::new(text)
    }
}

impl From<String> for StyledText {
    fn from(text: String) -> Self {
        Self::new(text)
    }
}
