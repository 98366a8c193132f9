// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Chart cards and starting hands types.
//!
//! This crate defines the card ranks and suits:
//!
//! ```
//! # use holdem_chart_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! assert_eq!(ah.to_string(), "AH");
//! ```
//!
//! and the 169 starting hands laid out on a 13x13 [HandGrid], each hand knows
//! how many of the 1326 two cards combinations it stands for:
//!
//! ```
//! # use holdem_chart_cards::{HandGrid, HandLabel, TOTAL_COMBOS};
//! let aks = "AKs".parse::<HandLabel>().unwrap();
//! assert_eq!(aks.combos(), 4);
//! assert_eq!(aks.position(), (0, 1));
//!
//! let total = HandGrid::iter().map(|(_, _, h)| h.combos()).sum::<u32>();
//! assert_eq!(total, TOTAL_COMBOS);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod cards;
pub use cards::{Card, ParseRankError, Rank, Suit};

mod hands;
pub use hands::{GRID_SIZE, HandGrid, HandKind, HandLabel, ParseHandError, TOTAL_COMBOS};
