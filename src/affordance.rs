// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{Attr, ClickAction, Color, Style, StyledText};

/// Ellipsis placed between a truncated prefix and the expand affordance
pub const ELLIPSIS: &str = "\u{2026}";

/// Builder for the clickable labels appended to folded text
pub struct Affordance;

impl Affordance {
    /// The label appended to closed content, `None` if `label` is empty
    pub fn expand(label: &str, color: Color) -> Option<StyledText> {
        Self::build(label, color, false)
    }

    /// The label appended to open content, `None` if `label` is empty
    ///
    /// `align_opposite` marks the label to be drawn against the far edge of its
    /// line, only meaningful when it sits on a line of its own.
    pub fn collapse(label: &str, color: Color, align_opposite: bool) -> Option<StyledText> {
        Self::build(label, color, align_opposite)
    }

    fn build(label: &str, color: Color, align_opposite: bool) -> Option<StyledText> {
        if label.is_empty() {
            return None;
        }
        let mut text = StyledText::new(label)
            .with_attr(Attr::Style(Style::BOLD))
            .with_attr(Attr::Color(color));
        if align_opposite {
            text = text.with_attr(Attr::AlignOpposite);
        }
        Some(text.with_attr(Attr::Clickable(ClickAction::Toggle)))
    }
}
