// SPDX-License-Identifier: MIT OR Apache-2.0

/// Text color
#[derive(Clone, Copy, Debug, PartialOrd, Ord, Eq, Hash, PartialEq)]
pub struct Color(pub u32);

impl Color {
    /// Accent used for affordance labels unless configured otherwise (`#F23030`)
    pub const ACCENT: Self = Self::rgb(0xF2, 0x30, 0x30);

    /// Create new color with red, green, and blue components
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 0xFF)
    }

    /// Create new color with red, green, blue, and alpha components
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((a as u32) << 24) | ((r as u32) << 16) | ((g as u32) << 8) | (b as u32))
    }

    /// Parse a `#RRGGBB` or `#AARRGGBB` hex string
    pub fn parse_hex(s: &str) -> Option<Self> {
        let digits = s.strip_prefix('#')?;
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Self(0xFF00_0000 | value)),
            8 => Some(Self(value)),
            _ => None,
        }
    }

    /// Get a tuple over all of the attributes, in `(r, g, b, a)` order.
    #[inline]
    pub fn as_rgba_tuple(self) -> (u8, u8, u8, u8) {
        (self.r(), self.g(), self.b(), self.a())
    }

    /// Get the red component
    #[inline]
    pub fn r(&self) -> u8 {
        ((self.0 & 0x00_FF_00_00) >> 16) as u8
    }

    /// Get the green component
    #[inline]
    pub fn g(&self) -> u8 {
        ((self.0 & 0x00_00_FF_00) >> 8) as u8
    }

    /// Get the blue component
    #[inline]
    pub fn b(&self) -> u8 {
        (self.0 & 0x00_00_00_FF) as u8
    }

    /// Get the alpha component
    #[inline]
    pub fn a(&self) -> u8 {
        ((self.0 & 0xFF_00_00_00) >> 24) as u8
    }
}

bitflags::bitflags! {
    /// Font style flags applied to a span
    #[derive(Clone, Copy, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
    #[repr(transparent)]
    pub struct Style: u8 {
        const BOLD = 1;
        const ITALIC = 1 << 1;
        const UNDERLINE = 1 << 2;
    }
}

/// What a click on a clickable span does
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum ClickAction {
    /// Flip the fold state (expand and collapse affordances)
    Toggle,
    /// Host defined link, identified by user metadata
    Link(usize),
}

/// A single attribute carried by a [`crate::Span`]
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Attr {
    /// Font style
    Style(Style),
    /// Foreground color
    Color(Color),
    /// Range dispatches clicks to [`ClickAction`]
    Clickable(ClickAction),
    /// Range should be drawn aligned to the opposite edge of its line
    AlignOpposite,
}

impl Attr {
    /// Get the click action, if this attribute is clickable
    pub fn click_action(&self) -> Option<ClickAction> {
        match self {
            Self::Clickable(action) => Some(*action),
            _ => None,
        }
    }
}
