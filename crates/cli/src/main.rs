// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Chart CLI.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use log::info;
use std::{
    fs::File,
    io::{self, BufReader, BufWriter},
    path::{Path, PathBuf},
};

use holdem_chart_core::{CellColors, ChartGrid, Color, HandLabel, Range, RangeSet};
use holdem_chart_render::{ChartRenderer, ChartSpec, RenderConfig};

pub mod report;

#[derive(Debug, Parser)]
struct Cli {
    /// Enable debug logging.
    #[clap(long, short, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Create a blank chart.
    New {
        /// The chart file.
        file: PathBuf,
        /// Overwrite an existing file.
        #[clap(long)]
        force: bool,
    },
    /// Paint hands in a chart.
    Paint {
        /// The chart file.
        file: PathBuf,
        /// The cells background color.
        #[clap(long, default_value = "white", value_parser = parse_color)]
        bg: Color,
        /// The cells text color.
        #[clap(long, default_value = "black", value_parser = parse_color)]
        fg: Color,
        /// Reset the hands to the default colors.
        #[clap(long, conflicts_with_all = ["bg", "fg"])]
        clear: bool,
        /// The hands to paint, like AA AKs AKo.
        #[clap(required = true, value_parser = parse_hand)]
        hands: Vec<HandLabel>,
    },
    /// Print a chart hands and combos counts.
    Counts {
        /// The chart file.
        file: PathBuf,
        /// A range as NAME=COLOR, ranges are counted in the given order.
        #[clap(long = "range", short, value_parser = parse_range)]
        ranges: Vec<Range>,
        /// Each range count includes the ranges before it.
        #[clap(long)]
        cumulative: bool,
    },
    /// Render a chart to a PNG image.
    Render {
        /// The chart file.
        file: PathBuf,
        /// The PNG output file.
        #[clap(long, short)]
        output: PathBuf,
        /// The grid width in pixels.
        #[clap(long, default_value_t = 800)]
        width: u32,
        /// The grid height in pixels.
        #[clap(long, default_value_t = 800)]
        height: u32,
        /// The gap in pixels between cells.
        #[clap(long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(0..=20))]
        border: u32,
        /// The color of the gaps between cells.
        #[clap(long, default_value = "black", value_parser = parse_color)]
        background: Color,
        /// A legend entry as NAME=COLOR.
        #[clap(long = "range", short, value_parser = parse_range)]
        ranges: Vec<Range>,
        /// A TrueType font for the labels.
        #[clap(long)]
        font: Option<PathBuf>,
    },
}

fn parse_color(s: &str) -> Result<Color, String> {
    s.parse::<Color>().map_err(|e| e.to_string())
}

fn parse_hand(s: &str) -> Result<HandLabel, String> {
    s.parse::<HandLabel>().map_err(|e| e.to_string())
}

fn parse_range(s: &str) -> Result<Range, String> {
    let (name, color) = s
        .rsplit_once('=')
        .ok_or_else(|| format!("Invalid range '{s}', expected NAME=COLOR"))?;

    if name.trim().is_empty() {
        return Err(format!("Invalid range '{s}', empty name"));
    }

    Ok(Range::new(name.trim(), parse_color(color)?))
}

fn load_grid(path: &Path) -> Result<ChartGrid> {
    let file = File::open(path).with_context(|| format!("Cannot open {}", path.display()))?;
    let grid = ChartGrid::load(BufReader::new(file))
        .with_context(|| format!("Cannot load {}", path.display()))?;
    Ok(grid)
}

fn save_grid(grid: &ChartGrid, path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("Cannot create {}", path.display()))?;
    grid.save(BufWriter::new(file))?;
    info!("Chart saved to {}", path.display());
    Ok(())
}

fn range_set(ranges: Vec<Range>, cumulative: bool) -> RangeSet {
    let mut set = RangeSet::new();
    for range in ranges {
        set.add(range.name, range.color);
    }
    set.set_cumulative(cumulative);
    set
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::New { file, force } => {
            if file.exists() && !force {
                bail!("{} exists, use --force to overwrite it", file.display());
            }
            save_grid(&ChartGrid::new(), &file)?;
        }
        Command::Paint {
            file,
            bg,
            fg,
            clear,
            hands,
        } => {
            let mut grid = load_grid(&file)?;
            let colors = if clear {
                CellColors::default()
            } else {
                CellColors::new(bg, fg)
            };

            for hand in &hands {
                grid.paint_hand(*hand, colors);
            }

            info!("Painted {} hands with {}", hands.len(), colors.bg);
            save_grid(&grid, &file)?;
        }
        Command::Counts {
            file,
            ranges,
            cumulative,
        } => {
            let grid = load_grid(&file)?;
            let ranges = range_set(ranges, cumulative);

            let mut stdout = io::stdout().lock();
            report::print_chart(&mut stdout, &grid)?;
            if ranges.is_empty() {
                report::print_colors(&mut stdout, &grid)?;
            } else {
                report::print_ranges(&mut stdout, &grid, &ranges)?;
            }
        }
        Command::Render {
            file,
            output,
            width,
            height,
            border,
            background,
            ranges,
            font,
        } => {
            let grid = load_grid(&file)?;
            let config = RenderConfig {
                border,
                background,
                ..Default::default()
            };

            let renderer = match font {
                Some(path) => {
                    let data = std::fs::read(&path)
                        .with_context(|| format!("Cannot read font {}", path.display()))?;
                    ChartRenderer::with_font(config, data)?
                }
                None => ChartRenderer::new(config)?,
            };

            let legend = range_set(ranges, false).legend();
            let spec = ChartSpec::new(width, height, &grid).with_legend(legend);
            renderer.export_png(&spec, &output)?;
        }
    }

    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    env_logger::builder()
        .filter_level(level)
        .format_target(false)
        .format_timestamp_millis()
        .init();

    run(cli.command)
}
