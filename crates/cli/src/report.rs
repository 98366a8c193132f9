// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Text reports for charts.
use std::io::{self, Write};

use holdem_chart_core::{ChartGrid, GRID_SIZE, RangeSet, TOTAL_COMBOS, coverage};

fn separator<W: Write>(w: &mut W) -> io::Result<()> {
    write!(w, "|")?;
    for _ in 0..GRID_SIZE {
        write!(w, "-----|")?;
    }
    writeln!(w)
}

/// Prints the chart grid, hands with the default background are left blank.
pub fn print_chart<W: Write>(w: &mut W, grid: &ChartGrid) -> io::Result<()> {
    separator(w)?;

    for row in 0..GRID_SIZE {
        write!(w, "|")?;
        for col in 0..GRID_SIZE {
            let cell = grid.cell(row, col);
            if cell.is_active() {
                write!(w, " {:<3} |", cell.hand().to_string())?;
            } else {
                write!(w, "     |")?;
            }
        }
        writeln!(w)?;
        separator(w)?;
    }

    Ok(())
}

/// Prints the combos for each background color.
pub fn print_colors<W: Write>(w: &mut W, grid: &ChartGrid) -> io::Result<()> {
    writeln!(w, "{:<10} {:>6} {:>8}", "Color", "Combos", "Percent")?;
    for (color, combos) in grid.combos_by_color() {
        writeln!(
            w,
            "{:<10} {:>6} {:>7.2}%",
            color.to_string(),
            combos,
            coverage(combos)
        )?;
    }

    let active = grid.active_combos();
    writeln!(
        w,
        "Active {active}/{TOTAL_COMBOS} combos ({:.2}%)",
        coverage(active)
    )
}

/// Prints the combos for each range.
pub fn print_ranges<W: Write>(w: &mut W, grid: &ChartGrid, ranges: &RangeSet) -> io::Result<()> {
    let width = ranges
        .iter()
        .map(|r| r.name.chars().count())
        .max()
        .unwrap_or_default()
        .max(5);

    writeln!(w, "{:<width$} {:>6} {:>8}", "Range", "Combos", "Percent")?;
    for count in ranges.counts(grid) {
        writeln!(
            w,
            "{:<width$} {:>6} {:>7.2}%",
            count.name, count.combos, count.percentage
        )?;
    }

    if ranges.is_cumulative() {
        writeln!(w, "(cumulative)")?;
    }

    Ok(())
}
