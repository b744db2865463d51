// SPDX-License-Identifier: MIT OR Apache-2.0

//! # COSMIC Fold
//!
//! This library folds long text to a line budget. Given a width and a maximum number of
//! visible lines, it computes a closed rendering that ends with an ellipsis and a clickable
//! "Expand" label, and an open rendering with the full text and a "Collapse" label.
//!
//! Measurement is delegated to a [LayoutOracle]. Hosts with their own text engine implement
//! it over that engine; [CellOracle] lays text out on a grid of cells for terminals and tests,
//! and [CachedOracle] remembers the answers of any oracle. [compute_fold] is the pure
//! truncation search, [Fold] switches between its results, and [FoldView] ties both to the
//! lifecycle of a host view.
//!
//! ```
//! use cosmic_fold::{CellOracle, FoldState, FoldView, Metrics};
//!
//! // Cells are 8 pixels wide and 16 pixels high
//! let oracle = CellOracle::new(Metrics::new(8.0, 16.0));
//!
//! // A FoldView holds the fold of one text, create one per text widget
//! let mut view = FoldView::new(oracle);
//! view.set_max_lines(2);
//! view.set_has_animation(false);
//! view.set_text("The quick brown fox jumps over the lazy dog, then naps in the afternoon sun.");
//!
//! // Folding happens once the view knows its width, in pixels
//! view.set_size(160.0);
//! assert_eq!(view.state(), Some(FoldState::Closed));
//! assert!(view.content().text().ends_with("\u{2026}Expand"));
//! assert_eq!(view.height(), 32.0);
//!
//! // Clicking the affordance, or calling toggle_state, opens the text
//! view.toggle_state();
//! assert_eq!(view.state(), Some(FoldState::Open));
//! assert!(view.content().text().starts_with("The quick brown fox"));
//! assert!(view.content().text().ends_with("Collapse"));
//! ```

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

#[cfg(not(any(feature = "std", feature = "no_std")))]
compile_error!("Either the `std` or `no_std` feature must be enabled");

pub use self::affordance::*;
mod affordance;

pub use self::attrs::*;
mod attrs;

pub use self::config::*;
mod config;

pub use self::engine::*;
mod engine;

pub use self::fold::*;
mod fold;

pub use self::layout::*;
mod layout;

pub use self::line_ending::*;
mod line_ending;

pub use self::measure_cache::*;
mod measure_cache;

pub use self::oracle::*;
mod oracle;

pub use self::shape::*;
mod shape;

pub use self::styled::*;
mod styled;

pub use self::view::*;
mod view;

type BuildHasher = core::hash::BuildHasherDefault<rustc_hash::FxHasher>;

#[cfg(feature = "std")]
type HashMap<K, V> = std::collections::HashMap<K, V, BuildHasher>;
#[cfg(not(feature = "std"))]
type HashMap<K, V> = hashbrown::HashMap<K, V, BuildHasher>;
