// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Holdem Chart images renderer.
//!
//! Renders a [ChartGrid](holdem_chart_core::ChartGrid) as a raster image with
//! the cells painted with their colors and labeled with their hands, and an
//! optional legend on the right of the grid:
//!
//! ```
//! # use holdem_chart_core::*;
//! # use holdem_chart_render::*;
//! let mut grid = ChartGrid::new();
//! let raise = "#d04040".parse::<Color>().unwrap();
//! grid.paint_hand("AA".parse().unwrap(), CellColors::new(raise, Color::WHITE));
//!
//! let spec = ChartSpec::new(512, 512, &grid)
//!     .with_legend(vec![LegendEntry::new("Raise", raise)]);
//! let renderer = ChartRenderer::new(RenderConfig::default()).unwrap();
//! let img = renderer.render(&spec).unwrap();
//! assert_eq!(img.dimensions(), (512 + 307, 512));
//! ```
//!
//! Cells are sized to fill the requested size, rendering fails with
//! [Error::Layout] if the cells would be smaller than
//! [RenderConfig::min_cell].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod chart;
pub use chart::{ChartRenderer, ChartSpec, RenderConfig};

pub mod error;
pub use error::{Error, Result};

pub mod font;

pub mod layout;
pub use layout::{Boundaries, ChartLayout};

// Reexport image type.
pub use image::RgbaImage;
