// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Chart model types.
//!
//! A [ChartGrid] holds the 169 starting hands cells painted by the user, each
//! cell has a background and a foreground [Color]. Cells can be grouped by their
//! background color into named ranges with a [RangeSet] to count how many of the
//! 1326 combinations each range covers:
//!
//! ```
//! # use holdem_chart_core::*;
//! let mut grid = ChartGrid::new();
//! let raise = CellColors::new("#c00000".parse().unwrap(), Color::WHITE);
//! for hand in ["AA", "KK", "AKs", "AKo"] {
//!     grid.paint_hand(hand.parse().unwrap(), raise);
//! }
//!
//! let mut ranges = RangeSet::new();
//! ranges.add("Raise", raise.bg);
//! let counts = ranges.counts(&grid);
//! assert_eq!(counts[0].combos, 6 + 6 + 4 + 12);
//! assert_eq!(counts[0].to_string(), "Raise: 28 combos (2.11%)");
//! ```
//!
//! The grid colors are saved and loaded as JSON, see [ChartGrid::save] and
//! [ChartGrid::load].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod color;
pub use color::Color;

pub mod error;
pub use error::{Error, Result};

pub mod grid;
pub use grid::{Cell, CellColors, ChartGrid, GridColors, coverage};

pub mod range;
pub use range::{LegendEntry, Range, RangeCount, RangeSet};

// Reexport hands types.
pub use holdem_chart_cards::{GRID_SIZE, HandGrid, HandKind, HandLabel, Rank, TOTAL_COMBOS};
