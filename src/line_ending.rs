// SPDX-License-Identifier: MIT OR Apache-2.0

use core::ops::Range;

/// Line ending
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum LineEnding {
    /// Use `\n` for line ending (POSIX-style)
    #[default]
    Lf,
    /// Use `\r\n` for line ending (Windows-style)
    CrLf,
    /// Use `\r` for line ending (many legacy systems)
    Cr,
    /// Use `\n\r` for line ending (some legacy systems)
    LfCr,
    /// No line ending
    None,
}

impl LineEnding {
    /// Get the line ending as a str
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "\n",
            Self::CrLf => "\r\n",
            Self::Cr => "\r",
            Self::LfCr => "\n\r",
            Self::None => "",
        }
    }

    /// Length of the line ending in bytes
    pub fn len(&self) -> usize {
        self.as_str().len()
    }

    pub fn is_none(&self) -> bool {
        *self == Self::None
    }

    fn detect(after: &str) -> Self {
        if after.starts_with("\r\n") {
            Self::CrLf
        } else if after.starts_with("\n\r") {
            Self::LfCr
        } else if after.starts_with('\n') {
            Self::Lf
        } else if after.starts_with('\r') {
            Self::Cr
        } else {
            Self::None
        }
    }
}

/// Iterator over the hard paragraphs of a string, the way a layout sees them
///
/// Unlike [`str::lines`], an empty string yields one empty paragraph and a
/// string ending in a line ending yields a trailing empty paragraph, since both
/// occupy a visual line.
#[derive(Debug)]
pub struct ParagraphIter<'a> {
    string: &'a str,
    start: usize,
    done: bool,
}

impl<'a> ParagraphIter<'a> {
    /// Create an iterator of paragraphs in a string slice
    pub fn new(string: &'a str) -> Self {
        Self {
            string,
            start: 0,
            done: false,
        }
    }
}

impl Iterator for ParagraphIter<'_> {
    type Item = (Range<usize>, LineEnding);

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        let start = self.start;
        match self.string[start..].find(['\r', '\n']) {
            Some(i) => {
                let end = start + i;
                let ending = LineEnding::detect(&self.string[end..]);
                self.start = end + ending.len();
                Some((start..end, ending))
            }
            None => {
                self.done = true;
                Some((start..self.string.len(), LineEnding::None))
            }
        }
    }
}

#[test]
fn test_paragraph_iter() {
    let string = "LF\nCRLF\r\nCR\rLFCR\n\rNONE";
    let mut iter = ParagraphIter::new(string);
    assert_eq!(iter.next(), Some((0..2, LineEnding::Lf)));
    assert_eq!(iter.next(), Some((3..7, LineEnding::CrLf)));
    assert_eq!(iter.next(), Some((9..11, LineEnding::Cr)));
    assert_eq!(iter.next(), Some((12..16, LineEnding::LfCr)));
    assert_eq!(iter.next(), Some((18..22, LineEnding::None)));
    assert_eq!(iter.next(), None);
}

#[test]
fn test_paragraph_iter_empty_lines() {
    let mut iter = ParagraphIter::new("");
    assert_eq!(iter.next(), Some((0..0, LineEnding::None)));
    assert_eq!(iter.next(), None);

    let mut iter = ParagraphIter::new("a\n");
    assert_eq!(iter.next(), Some((0..1, LineEnding::Lf)));
    assert_eq!(iter.next(), Some((2..2, LineEnding::None)));
    assert_eq!(iter.next(), None);

    let iter = ParagraphIter::new("\n\n");
    assert_eq!(iter.count(), 3);
}
