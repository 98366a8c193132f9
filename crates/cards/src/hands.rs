// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Starting hands and the 13x13 hands grid.
use std::{fmt, str::FromStr, sync::LazyLock};
use thiserror::Error;

use crate::{Card, Rank, Suit};

/// The number of two cards combinations from a 52 cards deck.
pub const TOTAL_COMBOS: u32 = 1326;

/// The number of rows and columns in the hands grid.
pub const GRID_SIZE: usize = Rank::COUNT;

/// The kind of a starting hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandKind {
    /// Two cards of the same rank.
    Pair,
    /// Two cards of different rank and same suit.
    Suited,
    /// Two cards of different rank and suit.
    Offsuit,
}

impl HandKind {
    /// The number of combinations for this kind of hand.
    pub fn combos(&self) -> u32 {
        match self {
            HandKind::Pair => 6,
            HandKind::Suited => 4,
            HandKind::Offsuit => 12,
        }
    }
}

/// A starting hand category, like `AA`, `AKs` or `T9o`.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct HandLabel {
    high: Rank,
    low: Rank,
    kind: HandKind,
}

impl HandLabel {
    /// Creates a pocket pair.
    pub fn pair(rank: Rank) -> Self {
        Self {
            high: rank,
            low: rank,
            kind: HandKind::Pair,
        }
    }

    /// Creates a suited hand, ranks are sorted so `r1` and `r2` can be in any order.
    ///
    /// Panics if the two ranks are equal.
    pub fn suited(r1: Rank, r2: Rank) -> Self {
        Self::unpaired(r1, r2, HandKind::Suited)
    }

    /// Creates an offsuit hand, ranks are sorted so `r1` and `r2` can be in any order.
    ///
    /// Panics if the two ranks are equal.
    pub fn offsuit(r1: Rank, r2: Rank) -> Self {
        Self::unpaired(r1, r2, HandKind::Offsuit)
    }

    fn unpaired(r1: Rank, r2: Rank, kind: HandKind) -> Self {
        assert_ne!(r1, r2, "A {kind:?} hand needs two different ranks");
        Self {
            high: r1.max(r2),
            low: r1.min(r2),
            kind,
        }
    }

    /// The higher rank.
    pub fn high(&self) -> Rank {
        self.high
    }

    /// The lower rank, equal to the higher for pairs.
    pub fn low(&self) -> Rank {
        self.low
    }

    /// This hand kind.
    pub fn kind(&self) -> HandKind {
        self.kind
    }

    /// Checks if this hand is a pocket pair.
    pub fn is_pair(&self) -> bool {
        self.kind == HandKind::Pair
    }

    /// The number of two cards combinations this hand represents.
    pub fn combos(&self) -> u32 {
        self.kind.combos()
    }

    /// The grid (row, column) for this hand, suited hands are above the diagonal
    /// and offsuit hands below.
    pub fn position(&self) -> (usize, usize) {
        let (hi, lo) = (self.high.chart_index(), self.low.chart_index());
        match self.kind {
            HandKind::Pair | HandKind::Suited => (hi, lo),
            HandKind::Offsuit => (lo, hi),
        }
    }

    /// Returns all the concrete two cards combinations for this hand.
    pub fn cards(&self) -> Vec<(Card, Card)> {
        let (high, low) = (self.high, self.low);
        let mut cards = Vec::with_capacity(self.combos() as usize);

        for (i, s1) in Suit::suits().enumerate() {
            for (j, s2) in Suit::suits().enumerate() {
                let keep = match self.kind {
                    HandKind::Pair => i < j,
                    HandKind::Suited => i == j,
                    HandKind::Offsuit => i != j,
                };

                if keep {
                    cards.push((Card::new(high, s1), Card::new(low, s2)));
                }
            }
        }

        cards
    }
}

impl fmt::Display for HandLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            HandKind::Pair => write!(f, "{}{}", self.high, self.low),
            HandKind::Suited => write!(f, "{}{}s", self.high, self.low),
            HandKind::Offsuit => write!(f, "{}{}o", self.high, self.low),
        }
    }
}

impl fmt::Debug for HandLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HandLabel({self})")
    }
}

impl FromStr for HandLabel {
    type Err = ParseHandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseHandError(s.to_string());

        let chars = s.trim().chars().collect::<Vec<_>>();
        let (r1, r2, suffix) = match chars.as_slice() {
            [r1, r2] => (*r1, *r2, None),
            [r1, r2, suffix] => (*r1, *r2, Some(suffix.to_ascii_lowercase())),
            _ => return Err(err()),
        };

        let r1 = Rank::from_symbol(r1).ok_or_else(err)?;
        let r2 = Rank::from_symbol(r2).ok_or_else(err)?;

        match (r1 == r2, suffix) {
            (true, None) => Ok(HandLabel::pair(r1)),
            (false, Some('s')) => Ok(HandLabel::suited(r1, r2)),
            (false, Some('o')) => Ok(HandLabel::offsuit(r1, r2)),
            _ => Err(err()),
        }
    }
}

/// Error returned when parsing an invalid hand label.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid hand '{0}'")]
pub struct ParseHandError(String);

static HANDS: LazyLock<[[HandLabel; GRID_SIZE]; GRID_SIZE]> = LazyLock::new(|| {
    std::array::from_fn(|i| {
        std::array::from_fn(|j| {
            let a = Rank::from_chart_index(i);
            let b = Rank::from_chart_index(j);
            if i > j {
                HandLabel::offsuit(b, a)
            } else if i == j {
                HandLabel::pair(a)
            } else {
                HandLabel::suited(a, b)
            }
        })
    })
});

/// The 13x13 grid of starting hands.
///
/// Rows and columns are indexed by rank from the ace (index 0) to the deuce
/// (index 12), pairs are on the diagonal, suited hands above it and offsuit hands
/// below it:
///
/// ```
/// # use holdem_chart_cards::HandGrid;
/// let grid = HandGrid::labels();
/// assert_eq!(grid[0][0].to_string(), "AA");
/// assert_eq!(grid[0][1].to_string(), "AKs");
/// assert_eq!(grid[1][0].to_string(), "AKo");
/// assert_eq!(grid[12][12].to_string(), "22");
/// ```
pub struct HandGrid;

impl HandGrid {
    /// Returns the grid labels, computed once.
    pub fn labels() -> &'static [[HandLabel; GRID_SIZE]; GRID_SIZE] {
        &HANDS
    }

    /// Returns the label at the given row and column.
    ///
    /// Panics if row or column are out of the grid.
    pub fn label(row: usize, col: usize) -> HandLabel {
        HANDS[row][col]
    }

    /// Iterates the grid labels in row major order with their positions.
    pub fn iter() -> impl Iterator<Item = (usize, usize, HandLabel)> {
        HANDS
            .iter()
            .enumerate()
            .flat_map(|(i, row)| row.iter().enumerate().map(move |(j, h)| (i, j, *h)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ahash::HashSet;

    #[test]
    fn grid_labels() {
        let labels = HandGrid::iter()
            .map(|(_, _, h)| h.to_string())
            .collect::<HashSet<_>>();
        assert_eq!(labels.len(), 169);

        let pairs = labels.iter().filter(|l| l.len() == 2).count();
        let suited = labels.iter().filter(|l| l.ends_with('s')).count();
        let offsuit = labels.iter().filter(|l| l.ends_with('o')).count();
        assert_eq!(pairs, 13);
        assert_eq!(suited, 78);
        assert_eq!(offsuit, 78);
    }

    #[test]
    fn grid_layout() {
        for (i, j, hand) in HandGrid::iter() {
            match hand.kind() {
                HandKind::Pair => assert_eq!(i, j),
                HandKind::Suited => assert!(i < j, "{hand} at {i},{j}"),
                HandKind::Offsuit => assert!(i > j, "{hand} at {i},{j}"),
            }
            assert_eq!(hand.position(), (i, j));
        }

        assert_eq!(HandGrid::label(0, 12).to_string(), "A2s");
        assert_eq!(HandGrid::label(12, 0).to_string(), "A2o");
        assert_eq!(HandGrid::label(4, 5).to_string(), "T9s");
        assert_eq!(HandGrid::label(5, 4).to_string(), "T9o");
    }

    #[test]
    fn total_combos() {
        let total = HandGrid::iter().map(|(_, _, h)| h.combos()).sum::<u32>();
        assert_eq!(total, TOTAL_COMBOS);
    }

    #[test]
    fn hand_cards() {
        let mut all = HashSet::default();
        for (_, _, hand) in HandGrid::iter() {
            let cards = hand.cards();
            assert_eq!(cards.len() as u32, hand.combos(), "{hand}");

            for (c1, c2) in cards {
                assert_ne!(c1, c2);
                match hand.kind() {
                    HandKind::Pair => assert_eq!(c1.rank(), c2.rank()),
                    HandKind::Suited => assert_eq!(c1.suit(), c2.suit()),
                    HandKind::Offsuit => assert_ne!(c1.suit(), c2.suit()),
                }

                // Every combination must belong to exactly one hand.
                let key = if c1.to_string() < c2.to_string() {
                    (c1, c2)
                } else {
                    (c2, c1)
                };
                assert!(all.insert(key), "duplicated {c1} {c2}");
            }
        }

        assert_eq!(all.len() as u32, TOTAL_COMBOS);
    }

    #[test]
    fn parse_hand() {
        assert_eq!("AA".parse::<HandLabel>(), Ok(HandLabel::pair(Rank::Ace)));
        assert_eq!(
            "AKs".parse::<HandLabel>(),
            Ok(HandLabel::suited(Rank::Ace, Rank::King))
        );
        assert_eq!(
            "ka0".parse::<HandLabel>().map_err(|e| e.to_string()),
            Err("Invalid hand 'ka0'".to_string())
        );

        let err: Box<dyn std::error::Error> = Box::new("AKx".parse::<HandLabel>().unwrap_err());
        assert_eq!(err.to_string(), "Invalid hand 'AKx'");
        assert_eq!(
            "kaO".parse::<HandLabel>(),
            Ok(HandLabel::offsuit(Rank::Ace, Rank::King))
        );
        assert_eq!(
            "t9s".parse::<HandLabel>(),
            Ok(HandLabel::suited(Rank::Nine, Rank::Ten))
        );

        assert!("AAs".parse::<HandLabel>().is_err());
        assert!("AK".parse::<HandLabel>().is_err());
        assert!("AKx".parse::<HandLabel>().is_err());
        assert!("A".parse::<HandLabel>().is_err());
        assert!("1Ks".parse::<HandLabel>().is_err());

        for (_, _, hand) in HandGrid::iter() {
            assert_eq!(hand.to_string().parse::<HandLabel>(), Ok(hand));
        }
    }
}
