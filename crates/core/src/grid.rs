// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Chart cells grid and combos accounting.
use ahash::AHashMap;
use log::debug;
use serde::{Deserialize, Serialize};
use std::io;

use holdem_chart_cards::{GRID_SIZE, HandGrid, HandLabel, TOTAL_COMBOS};

use crate::{Color, Error, Result};

/// The percentage of all two cards combinations covered by `combos`.
pub fn coverage(combos: u32) -> f64 {
    combos as f64 / TOTAL_COMBOS as f64 * 100.0
}

/// A cell background and foreground colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellColors {
    /// The cell background color.
    pub bg: Color,
    /// The label color.
    pub fg: Color,
}

impl CellColors {
    /// Creates a new colors pair.
    pub fn new(bg: Color, fg: Color) -> Self {
        Self { bg, fg }
    }
}

impl Default for CellColors {
    fn default() -> Self {
        Self {
            bg: Color::WHITE,
            fg: Color::BLACK,
        }
    }
}

/// A chart cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    hand: HandLabel,
    /// The cell colors.
    pub colors: CellColors,
}

impl Cell {
    fn new(hand: HandLabel) -> Self {
        Self {
            hand,
            colors: CellColors::default(),
        }
    }

    /// The hand for this cell.
    pub fn hand(&self) -> HandLabel {
        self.hand
    }

    /// Checks if this cell background has been painted.
    pub fn is_active(&self) -> bool {
        self.colors.bg != CellColors::default().bg
    }
}

/// The colors of all the cells in the grid, row major.
pub type GridColors = [[CellColors; GRID_SIZE]; GRID_SIZE];

/// A 13x13 grid of painted cells.
///
/// The cells follow the [HandGrid] order with the aces row and column first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChartGrid {
    cells: [[Cell; GRID_SIZE]; GRID_SIZE],
}

impl Default for ChartGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl ChartGrid {
    /// Creates a grid with all cells using the default colors.
    pub fn new() -> Self {
        let labels = HandGrid::labels();
        Self {
            cells: std::array::from_fn(|i| std::array::from_fn(|j| Cell::new(labels[i][j]))),
        }
    }

    /// Creates a grid with the given cells colors.
    pub fn from_colors(colors: &GridColors) -> Self {
        let mut grid = Self::new();
        grid.set_colors(colors);
        grid
    }

    /// Returns the cell at the given position.
    ///
    /// Panics if the position is outside the grid.
    pub fn cell(&self, row: usize, col: usize) -> &Cell {
        &self.cells[row][col]
    }

    /// Returns the mutable cell at the given position.
    ///
    /// Panics if the position is outside the grid.
    pub fn cell_mut(&mut self, row: usize, col: usize) -> &mut Cell {
        &mut self.cells[row][col]
    }

    /// Returns the cell for a hand.
    pub fn hand_cell(&self, hand: HandLabel) -> &Cell {
        let (row, col) = hand.position();
        &self.cells[row][col]
    }

    /// Finds the position of a hand by its label.
    pub fn find(&self, label: &str) -> Result<(usize, usize)> {
        label
            .parse::<HandLabel>()
            .map(|h| h.position())
            .map_err(|_| Error::InvalidHand(label.to_string()))
    }

    /// Paints a cell.
    pub fn paint(&mut self, row: usize, col: usize, colors: CellColors) {
        self.cells[row][col].colors = colors;
    }

    /// Paints the cell of a hand.
    pub fn paint_hand(&mut self, hand: HandLabel, colors: CellColors) {
        let (row, col) = hand.position();
        self.paint(row, col, colors);
    }

    /// Resets a cell to the default colors.
    pub fn clear(&mut self, row: usize, col: usize) {
        self.paint(row, col, CellColors::default());
    }

    /// Resets all cells to the default colors.
    pub fn clear_all(&mut self) {
        self.iter_mut()
            .for_each(|cell| cell.colors = CellColors::default());
    }

    /// Iterates the cells in row major order.
    pub fn iter(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter().flatten()
    }

    fn iter_mut(&mut self) -> impl Iterator<Item = &mut Cell> {
        self.cells.iter_mut().flatten()
    }

    /// A snapshot of the cells colors.
    pub fn colors(&self) -> GridColors {
        std::array::from_fn(|i| std::array::from_fn(|j| self.cells[i][j].colors))
    }

    /// Sets all the cells colors.
    pub fn set_colors(&mut self, colors: &GridColors) {
        for (cells, colors) in self.cells.iter_mut().zip(colors) {
            for (cell, colors) in cells.iter_mut().zip(colors) {
                cell.colors = *colors;
            }
        }
    }

    /// The number of combos for the cells with the given background color.
    pub fn count_combos(&self, color: Color) -> u32 {
        self.iter()
            .filter(|cell| cell.colors.bg == color)
            .map(|cell| cell.hand.combos())
            .sum()
    }

    /// The number of combos for all painted cells.
    pub fn active_combos(&self) -> u32 {
        self.iter()
            .filter(|cell| cell.is_active())
            .map(|cell| cell.hand.combos())
            .sum()
    }

    /// The number of combos for each background color used in the grid.
    ///
    /// Colors are sorted by descending combos and then by color string.
    pub fn combos_by_color(&self) -> Vec<(Color, u32)> {
        let mut counts = AHashMap::<Color, u32>::default();
        for cell in self.iter() {
            *counts.entry(cell.colors.bg).or_default() += cell.hand.combos();
        }

        let mut counts = counts.into_iter().collect::<Vec<_>>();
        counts.sort_by(|(c1, n1), (c2, n2)| {
            n2.cmp(n1).then_with(|| c1.to_string().cmp(&c2.to_string()))
        });
        counts
    }

    /// Writes the cells colors as JSON.
    pub fn save<W: io::Write>(&self, mut writer: W) -> Result<()> {
        let rows = self.colors().iter().map(|r| r.to_vec()).collect::<Vec<_>>();
        serde_json::to_writer(&mut writer, &rows).map_err(io::Error::from)?;
        writer.flush()?;
        Ok(())
    }

    /// Returns the cells colors as a JSON string.
    pub fn to_json(&self) -> Result<String> {
        let mut buf = Vec::new();
        self.save(&mut buf)?;
        String::from_utf8(buf).map_err(|e| Error::MalformedSaveData(e.to_string()))
    }

    /// Reads a grid from JSON cells colors.
    pub fn load<R: io::Read>(reader: R) -> Result<Self> {
        let rows = serde_json::from_reader::<_, Vec<Vec<CellColors>>>(reader).map_err(|e| {
            if e.is_io() {
                Error::Io(e.into())
            } else {
                Error::MalformedSaveData(e.to_string())
            }
        })?;

        let grid = Self::from_colors(&parse_rows(rows)?);
        debug!("Loaded grid with {} active combos", grid.active_combos());
        Ok(grid)
    }

    /// Reads a grid from a JSON string.
    pub fn from_json(json: &str) -> Result<Self> {
        Self::load(json.as_bytes())
    }

    /// Replaces this grid colors with the ones read from `reader`, on error this
    /// grid is left unchanged.
    pub fn load_colors<R: io::Read>(&mut self, reader: R) -> Result<()> {
        let grid = Self::load(reader)?;
        self.cells = grid.cells;
        Ok(())
    }
}

fn parse_rows(rows: Vec<Vec<CellColors>>) -> Result<GridColors> {
    if rows.len() != GRID_SIZE {
        return Err(Error::MalformedSaveData(format!(
            "expected {GRID_SIZE} rows found {}",
            rows.len()
        )));
    }

    let mut colors = [[CellColors::default(); GRID_SIZE]; GRID_SIZE];
    for (i, row) in rows.into_iter().enumerate() {
        if row.len() != GRID_SIZE {
            return Err(Error::MalformedSaveData(format!(
                "expected {GRID_SIZE} cells in row {i} found {}",
                row.len()
            )));
        }

        for (j, cell) in row.into_iter().enumerate() {
            colors[i][j] = cell;
        }
    }

    Ok(colors)
}
