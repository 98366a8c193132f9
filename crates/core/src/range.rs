// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Named ranges and their combos counts.
use log::{debug, warn};
use std::fmt;

use crate::{ChartGrid, Color, grid::coverage};

/// A named range, a cell belongs to a range if its background has the range color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Range {
    /// The range name.
    pub name: String,
    /// The range color.
    pub color: Color,
}

impl Range {
    /// Creates a new range.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// An entry in a chart legend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LegendEntry {
    /// The entry name.
    pub name: String,
    /// The entry swatch color.
    pub color: Color,
}

impl LegendEntry {
    /// Creates a new legend entry.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

impl From<&Range> for LegendEntry {
    fn from(range: &Range) -> Self {
        Self::new(range.name.clone(), range.color)
    }
}

/// The combos count for a range.
#[derive(Debug, Clone, PartialEq)]
pub struct RangeCount {
    /// The range name.
    pub name: String,
    /// The range color.
    pub color: Color,
    /// The combos for this range.
    pub combos: u32,
    /// The percentage of all combos.
    pub percentage: f64,
}

impl fmt::Display for RangeCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} combos ({:.2}%)",
            self.name, self.combos, self.percentage
        )
    }
}

/// An ordered set of ranges.
///
/// Ranges keep their creation order, in cumulative mode each range count includes
/// the counts of all the ranges before it:
///
/// ```
/// # use holdem_chart_core::*;
/// let mut grid = ChartGrid::new();
/// let red = Color::rgb(255, 0, 0);
/// let blue = Color::rgb(0, 0, 255);
/// grid.paint_hand("AA".parse().unwrap(), CellColors::new(red, Color::BLACK));
/// grid.paint_hand("AKs".parse().unwrap(), CellColors::new(blue, Color::BLACK));
///
/// let mut ranges = RangeSet::new();
/// ranges.add("Raise", red);
/// ranges.add("Call", blue);
///
/// let counts = ranges.counts(&grid);
/// assert_eq!(counts[0].combos, 6);
/// assert_eq!(counts[1].combos, 4);
///
/// ranges.set_cumulative(true);
/// let counts = ranges.counts(&grid);
/// assert_eq!(counts[1].combos, 10);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RangeSet {
    ranges: Vec<Range>,
    cumulative: bool,
}

impl RangeSet {
    /// Creates an empty set in independent mode.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a range at the end of the set, returns its index.
    pub fn add(&mut self, name: impl Into<String>, color: Color) -> usize {
        let range = Range::new(name, color);
        debug!("Adding range {} {}", range.name, range.color);
        self.ranges.push(range);
        self.ranges.len() - 1
    }

    /// Removes the range at `index`.
    ///
    /// Returns `None` and leaves the set unchanged if the index is invalid or if
    /// this is the last range in the set.
    pub fn remove(&mut self, index: usize) -> Option<Range> {
        if index >= self.ranges.len() {
            return None;
        }

        if self.ranges.len() == 1 {
            warn!("Cannot remove the last range {}", self.ranges[0].name);
            return None;
        }

        Some(self.ranges.remove(index))
    }

    /// Renames the range at `index`, returns false if the index is invalid.
    pub fn rename(&mut self, index: usize, name: impl Into<String>) -> bool {
        match self.ranges.get_mut(index) {
            Some(range) => {
                range.name = name.into();
                true
            }
            None => false,
        }
    }

    /// Sets the color of the range at `index`, returns false if the index is invalid.
    pub fn set_color(&mut self, index: usize, color: Color) -> bool {
        match self.ranges.get_mut(index) {
            Some(range) => {
                range.color = color;
                true
            }
            None => false,
        }
    }

    /// Sets the cumulative counting mode.
    pub fn set_cumulative(&mut self, cumulative: bool) {
        self.cumulative = cumulative;
    }

    /// Checks if counts are cumulative.
    pub fn is_cumulative(&self) -> bool {
        self.cumulative
    }

    /// Returns the range at `index`.
    pub fn get(&self, index: usize) -> Option<&Range> {
        self.ranges.get(index)
    }

    /// Iterates the ranges in creation order.
    pub fn iter(&self) -> impl Iterator<Item = &Range> {
        self.ranges.iter()
    }

    /// The number of ranges.
    pub fn len(&self) -> usize {
        self.ranges.len()
    }

    /// Checks if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// The legend entries for the ranges.
    pub fn legend(&self) -> Vec<LegendEntry> {
        self.ranges.iter().map(LegendEntry::from).collect()
    }

    /// Computes the combos for each range in creation order.
    ///
    /// Each range counts all the cells with its color, if two ranges share a
    /// color in cumulative mode their cells are counted twice.
    pub fn counts(&self, grid: &ChartGrid) -> Vec<RangeCount> {
        let mut total = 0;
        self.ranges
            .iter()
            .map(|range| {
                let own = grid.count_combos(range.color);
                let combos = if self.cumulative {
                    total += own;
                    total
                } else {
                    own
                };

                RangeCount {
                    name: range.name.clone(),
                    color: range.color,
                    combos,
                    percentage: coverage(combos),
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::CellColors;
    use holdem_chart_cards::TOTAL_COMBOS;

    const C1: Color = Color::rgb(200, 0, 0);
    const C2: Color = Color::rgb(0, 200, 0);

    fn paint(grid: &mut ChartGrid, color: Color, hands: &[&str]) {
        for hand in hands {
            grid.paint_hand(hand.parse().unwrap(), CellColors::new(color, Color::BLACK));
        }
    }

    #[test]
    fn independent_and_cumulative() {
        let mut grid = ChartGrid::new();
        // 8 offsuit and 1 suited hands.
        paint(
            &mut grid,
            C1,
            &["AKo", "AQo", "AJo", "ATo", "KQo", "KJo", "KTo", "QJo", "AKs"],
        );
        // 3 offsuit, 1 pair and 2 suited hands.
        paint(&mut grid, C2, &["QTo", "JTo", "A9o", "AA", "AQs", "AJs"]);
        assert_eq!(grid.count_combos(C1), 100);
        assert_eq!(grid.count_combos(C2), 50);

        let mut ranges = RangeSet::new();
        ranges.add("R1", C1);
        ranges.add("R2", C2);

        let counts = ranges.counts(&grid);
        assert_eq!(counts[0].combos, 100);
        assert_eq!(counts[1].combos, 50);

        ranges.set_cumulative(true);
        assert!(ranges.is_cumulative());

        let counts = ranges.counts(&grid);
        assert_eq!(counts[0].combos, 100);
        assert_eq!(counts[1].combos, 150);
        assert_eq!(format!("{:.2}", counts[1].percentage), "11.31");
    }

    #[test]
    fn overlapping_colors_double_count() {
        let mut grid = ChartGrid::new();
        paint(&mut grid, C1, &["AKo", "AQo", "AJo", "ATo", "A9o"]);

        let mut ranges = RangeSet::new();
        ranges.add("Open", C1);
        ranges.add("Also open", C1);
        ranges.set_cumulative(true);

        let counts = ranges.counts(&grid);
        assert_eq!(counts[0].combos, 60);
        assert_eq!(counts[1].combos, 120);
    }

    #[test]
    fn unused_color() {
        let grid = ChartGrid::new();
        let mut ranges = RangeSet::new();
        ranges.add("Fold", C1);
        ranges.add("All", Color::WHITE);

        let counts = ranges.counts(&grid);
        assert_eq!(counts[0].combos, 0);
        assert_eq!(counts[0].percentage, 0.0);
        assert_eq!(counts[1].combos, TOTAL_COMBOS);
        assert_eq!(counts[1].to_string(), "All: 1326 combos (100.00%)");
    }

    #[test]
    fn remove_keeps_last() {
        let mut ranges = RangeSet::new();
        assert!(ranges.is_empty());
        assert_eq!(ranges.remove(0), None);

        assert_eq!(ranges.add("Raise", C1), 0);
        assert_eq!(ranges.add("Call", C2), 1);
        assert_eq!(ranges.len(), 2);

        assert_eq!(ranges.remove(5), None);
        assert_eq!(ranges.remove(0), Some(Range::new("Raise", C1)));
        assert_eq!(ranges.len(), 1);

        // The last range cannot be removed.
        assert_eq!(ranges.remove(0), None);
        assert_eq!(ranges.len(), 1);
        assert_eq!(ranges.get(0), Some(&Range::new("Call", C2)));
    }

    #[test]
    fn edit_ranges() {
        let mut ranges = RangeSet::new();
        ranges.add("Raise", C1);
        ranges.add("Call", C2);

        assert!(ranges.rename(1, "Flat"));
        assert!(ranges.set_color(0, Color::BLACK));
        assert!(!ranges.rename(2, "Nope"));
        assert!(!ranges.set_color(2, Color::BLACK));

        let names = ranges.iter().map(|r| r.name.as_str()).collect::<Vec<_>>();
        assert_eq!(names, ["Raise", "Flat"]);

        assert_eq!(
            ranges.legend(),
            vec![
                LegendEntry::new("Raise", Color::BLACK),
                LegendEntry::new("Flat", C2)
            ]
        );
    }
}
