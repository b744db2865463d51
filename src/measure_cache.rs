// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::{HashMap, LayoutOracle, LineMetrics, MeasureError, StyledText};

/// Key for caching measurements.
///
/// Spans are part of the key, a host oracle may measure bold text wider.
#[derive(Clone, Debug, Hash, PartialEq, Eq)]
pub struct MeasureKey {
    pub text: StyledText,
    /// `f32` bits of the width
    pub width_bits: u32,
    /// Visual line asked for, `None` for a whole-text measurement
    pub line: Option<usize>,
}

impl MeasureKey {
    pub fn new(text: &StyledText, width: f32, line: Option<usize>) -> Self {
        Self {
            text: text.clone(),
            width_bits: width.to_bits(),
            line,
        }
    }
}

/// A cached measurement answer
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Measured {
    Metrics(LineMetrics),
    LineEnd(usize),
}

/// Measurement answers stamped with the trim generation that last used them
#[derive(Clone, Default)]
pub struct MeasureCache {
    generation: u64,
    entries: HashMap<MeasureKey, (u64, Measured)>,
}

impl MeasureCache {
    /// Look up an answer, marking it used in the current generation
    pub fn get(&mut self, key: &MeasureKey) -> Option<Measured> {
        let (used, measured) = self.entries.get_mut(key)?;
        *used = self.generation;
        Some(*measured)
    }

    pub fn insert(&mut self, key: MeasureKey, measured: Measured) {
        self.entries.insert(key, (self.generation, measured));
    }

    /// Drop answers not used in the last `keep_ages` generations, then start a new one
    ///
    /// `trim(0)` empties the cache.
    pub fn trim(&mut self, keep_ages: u64) {
        let generation = self.generation;
        let before = self.entries.len();
        self.entries.retain(|_, (used, _)| generation - *used < keep_ages);
        log::trace!(
            "measure cache generation {}: dropped {}, kept {}",
            generation,
            before - self.entries.len(),
            self.entries.len()
        );
        self.generation += 1;
    }

    /// Current generation, advanced by every [`Self::trim`]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Number of cached answers
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl core::fmt::Debug for MeasureCache {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("MeasureCache")
            .field("generation", &self.generation)
            .field("len", &self.entries.len())
            .finish()
    }
}

/// A [`LayoutOracle`] that remembers the answers of another one
///
/// The truncation search measures many near-identical candidates, and a view
/// recomputes on every text or config change, so repeated questions are
/// common. Errors are not cached.
///
/// ## Memory
///
/// Every key owns a clone of the candidate it measured. A linear search over
/// a text of `n` bytes asks about up to `n` prefixes, so one pass can hold
/// O(n²) bytes of keys. The cache trims itself at the end of each pass (see
/// [`LayoutOracle::finish_pass`]), keeping only answers used in the last
/// `keep_ages` passes, so memory stays bounded by that many passes. Prefer
/// [`Search::Binary`](crate::Search::Binary) for long texts.
#[derive(Debug)]
pub struct CachedOracle<O> {
    inner: O,
    cache: MeasureCache,
    keep_ages: u64,
    hits: u64,
    misses: u64,
}

impl<O: LayoutOracle> CachedOracle<O> {
    pub fn new(inner: O) -> Self {
        Self {
            inner,
            cache: MeasureCache::default(),
            keep_ages: 2,
            hits: 0,
            misses: 0,
        }
    }

    /// Keep answers for this many passes, 2 by default
    pub fn with_keep_ages(mut self, keep_ages: u64) -> Self {
        self.keep_ages = keep_ages;
        self
    }

    pub fn inner(&self) -> &O {
        &self.inner
    }

    /// Get the wrapped oracle mutably, clearing the cache since its answers may change
    pub fn inner_mut(&mut self) -> &mut O {
        self.cache = MeasureCache::default();
        &mut self.inner
    }

    pub fn cache(&self) -> &MeasureCache {
        &self.cache
    }

    /// Cache hits and misses since creation
    pub fn stats(&self) -> (u64, u64) {
        (self.hits, self.misses)
    }

    /// Forget answers that have not been used for `keep_ages` trims
    pub fn trim(&mut self, keep_ages: u64) {
        self.cache.trim(keep_ages);
    }

    fn lookup(&mut self, key: &MeasureKey) -> Option<Measured> {
        let found = self.cache.get(key);
        if found.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        found
    }
}

impl<O: LayoutOracle> LayoutOracle for CachedOracle<O> {
    fn measure(&mut self, text: &StyledText, width: f32) -> Result<LineMetrics, MeasureError> {
        let key = MeasureKey::new(text, width, None);
        if let Some(Measured::Metrics(metrics)) = self.lookup(&key) {
            return Ok(metrics);
        }
        let metrics = self.inner.measure(text, width)?;
        self.cache.insert(key, Measured::Metrics(metrics));
        Ok(metrics)
    }

    fn line_end(
        &mut self,
        text: &StyledText,
        width: f32,
        line: usize,
    ) -> Result<usize, MeasureError> {
        let key = MeasureKey::new(text, width, Some(line));
        if let Some(Measured::LineEnd(end)) = self.lookup(&key) {
            return Ok(end);
        }
        let end = self.inner.line_end(text, width, line)?;
        self.cache.insert(key, Measured::LineEnd(end));
        Ok(end)
    }

    fn finish_pass(&mut self) {
        self.cache.trim(self.keep_ages);
        self.inner.finish_pass();
    }
}
