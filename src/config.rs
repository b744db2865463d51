// SPDX-License-Identifier: MIT OR Apache-2.0

use smol_str::SmolStr;

use crate::{Color, Padding};

/// Default number of lines shown while closed
pub const DEFAULT_MAX_LINES: usize = 3;
/// Default label of the expand affordance
pub const DEFAULT_OPEN_SUFFIX: &str = "Expand";
/// Default label of the collapse affordance
pub const DEFAULT_CLOSE_SUFFIX: &str = "Collapse";

/// How the truncation point is searched for
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum Search {
    /// Drop one trailing character at a time until the closed content fits
    #[default]
    Linear,
    /// Binary search over prefix lengths
    ///
    /// Takes O(log n) measurements instead of O(n). Word wrap is not strictly
    /// monotone in prefix length, so the closed content always fits but may keep
    /// fewer characters than [`Search::Linear`] would.
    Binary,
}

/// Settings of a fold, see field docs for defaults
#[derive(Clone, Debug, PartialEq)]
pub struct FoldConfig {
    /// Lines shown while closed, 0 disables folding (default 3)
    pub max_lines: usize,
    /// Expand affordance label, empty for a plain ellipsis (default "Expand")
    pub open_suffix: SmolStr,
    /// Collapse affordance label, empty for none (default "Collapse")
    pub close_suffix: SmolStr,
    /// Default [`Color::ACCENT`]
    pub open_suffix_color: Color,
    /// Default [`Color::ACCENT`]
    pub close_suffix_color: Color,
    /// Always put the collapse affordance on its own line (default false)
    pub close_in_new_line: bool,
    /// Push the collapse affordance to the right edge (default false)
    pub close_align_right: bool,
    /// A click anywhere on the view toggles (default false)
    pub click_toggles: bool,
    /// Transitions are animated by the host (default true)
    pub animated: bool,
    /// View padding, horizontal padding is removed from the view width and
    /// vertical padding added to heights (default zero)
    pub padding: Padding,
    /// Default [`Search::Linear`]
    pub search: Search,
}

impl Default for FoldConfig {
    fn default() -> Self {
        Self {
            max_lines: DEFAULT_MAX_LINES,
            open_suffix: SmolStr::new_inline(DEFAULT_OPEN_SUFFIX),
            close_suffix: SmolStr::new_inline(DEFAULT_CLOSE_SUFFIX),
            open_suffix_color: Color::ACCENT,
            close_suffix_color: Color::ACCENT,
            close_in_new_line: false,
            close_align_right: false,
            click_toggles: false,
            animated: true,
            padding: Padding::default(),
            search: Search::default(),
        }
    }
}

impl FoldConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn open_suffix(mut self, text: &str, color: Color) -> Self {
        self.open_suffix = SmolStr::new(text);
        self.open_suffix_color = color;
        self
    }

    pub fn close_suffix(mut self, text: &str, color: Color) -> Self {
        self.close_suffix = SmolStr::new(text);
        self.close_suffix_color = color;
        self
    }

    pub fn close_in_new_line(mut self, close_in_new_line: bool) -> Self {
        self.close_in_new_line = close_in_new_line;
        self
    }

    pub fn close_align_right(mut self, close_align_right: bool) -> Self {
        self.close_align_right = close_align_right;
        self
    }

    pub fn click_toggles(mut self, click_toggles: bool) -> Self {
        self.click_toggles = click_toggles;
        self
    }

    pub fn animated(mut self, animated: bool) -> Self {
        self.animated = animated;
        self
    }

    pub fn padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub fn search(mut self, search: Search) -> Self {
        self.search = search;
        self
    }

    /// Check if two configs would fold the same text differently
    ///
    /// Click and animation settings do not change layout.
    pub fn layout_differs(&self, other: &Self) -> bool {
        self.max_lines != other.max_lines
            || self.open_suffix != other.open_suffix
            || self.close_suffix != other.close_suffix
            || self.open_suffix_color != other.open_suffix_color
            || self.close_suffix_color != other.close_suffix_color
            || self.close_in_new_line != other.close_in_new_line
            || self.close_align_right != other.close_align_right
            || self.padding != other.padding
            || self.search != other.search
    }
}
