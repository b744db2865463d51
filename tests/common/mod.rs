#![allow(dead_code)]

use cosmic_fold::{CellOracle, LayoutOracle, LineMetrics, MeasureError, Metrics, StyledText};

/// Nine short words, five lines at a width of 12 cells
pub const NINE_WORDS: &str = "one two three four five six seven eight nine";

pub const LOREM: &str = "Lorem ipsum dolor sit amet, qui minim labore adipisicing minim sint cillum sint consectetur cupidatat. Duis aute irure dolor in reprehenderit in voluptate velit esse cillum dolore eu fugiat nulla pariatur.";

/// A cell oracle where one cell is one unit wide and one unit high
pub fn cells() -> CellOracle {
    CellOracle::new(Metrics::default())
}

/// Deterministic text of `count` short lowercase words
pub fn random_words(seed: u64, count: usize) -> String {
    // xorshift64, zero is a fixed point
    let mut state = seed.wrapping_mul(0x9E37_79B9_7F4A_7C15) | 1;
    let mut next = move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        state
    };
    let mut words = Vec::with_capacity(count);
    for _ in 0..count {
        let len = 1 + (next() % 5) as usize;
        let word: String = (0..len)
            .map(|_| char::from(b'a' + (next() % 26) as u8))
            .collect();
        words.push(word);
    }
    words.join(" ")
}

pub fn line_count(text: &StyledText, width: f32) -> usize {
    cells()
        .measure(text, width)
        .expect("failed to measure")
        .line_count
}

/// Wraps an oracle and counts the questions it is asked
#[derive(Debug, Default)]
pub struct CountingOracle {
    pub inner: CellOracle,
    pub measures: usize,
    pub line_ends: usize,
}

impl CountingOracle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> usize {
        self.measures + self.line_ends
    }
}

impl LayoutOracle for CountingOracle {
    fn measure(&mut self, text: &StyledText, width: f32) -> Result<LineMetrics, MeasureError> {
        self.measures += 1;
        self.inner.measure(text, width)
    }

    fn line_end(
        &mut self,
        text: &StyledText,
        width: f32,
        line: usize,
    ) -> Result<usize, MeasureError> {
        self.line_ends += 1;
        self.inner.line_end(text, width, line)
    }
}
