// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Chart images rendering.
use ab_glyph::FontArc;
use image::{ExtendedColorType, ImageEncoder, Rgba, RgbaImage, codecs::png::PngEncoder};
use imageproc::{
    drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut},
    rect::Rect,
};
use log::{debug, info};
use std::{fs::File, io, path::Path};

use holdem_chart_core::{ChartGrid, Color, GRID_SIZE, GridColors, HandGrid, LegendEntry};

use crate::{
    ChartLayout, Result,
    font::{REFERENCE_LABEL, default_font, fit_font_size, load_font},
};

const WHITE: Rgba<u8> = Rgba([255, 255, 255, 255]);
const BLACK: Rgba<u8> = Rgba([0, 0, 0, 255]);

/// The renderer configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderConfig {
    /// The gap in pixels between cells and around the grid.
    pub border: u32,
    /// The minimum cell size in pixels.
    pub min_cell: u32,
    /// The cell padding on each side as a fraction of the cell size.
    pub cell_padding: f32,
    /// The legend panel width as a fraction of the grid width.
    pub legend_width: f32,
    /// The legend swatch size as a fraction of the legend panel width.
    pub swatch_ratio: f32,
    /// The margin between the grid and the legend panel.
    pub chart_margin: u32,
    /// The legend top padding and the gap between legend rows.
    pub legend_padding_top: u32,
    /// The minimum height of a legend row.
    pub legend_row_height: u32,
    /// The gap between a legend swatch and its name.
    pub text_margin: u32,
    /// The label horizontal offset for pairs as a fraction of the cell width.
    pub pair_text_offset: f32,
    /// The label horizontal offset for non pairs as a fraction of the cell width.
    pub text_offset: f32,
    /// The label vertical offset as a fraction of the cell height.
    pub text_offset_y: f32,
    /// The color of the gaps between cells.
    pub background: Color,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            border: 3,
            min_cell: 20,
            cell_padding: 0.2,
            legend_width: 0.6,
            swatch_ratio: 0.15,
            chart_margin: 10,
            legend_padding_top: 10,
            legend_row_height: 40,
            text_margin: 5,
            pair_text_offset: 0.25,
            text_offset: 0.18,
            text_offset_y: 0.35,
            background: Color::BLACK,
        }
    }
}

/// What to render: the grid size, cells colors and an optional legend.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    /// The grid width in pixels.
    pub width: u32,
    /// The grid height in pixels.
    pub height: u32,
    /// The cells colors.
    pub cells: GridColors,
    /// The legend entries, no legend is drawn if empty.
    pub legend: Vec<LegendEntry>,
}

impl ChartSpec {
    /// Creates a spec for a `width` x `height` chart of the grid.
    pub fn new(width: u32, height: u32, grid: &ChartGrid) -> Self {
        Self {
            width,
            height,
            cells: grid.colors(),
            legend: Vec::new(),
        }
    }

    /// Sets the legend entries.
    pub fn with_legend(mut self, legend: Vec<LegendEntry>) -> Self {
        self.legend = legend;
        self
    }
}

/// Renders chart images.
///
/// The image is `width` x `height` when there is no legend, with a legend the
/// image is widened by `width * legend_width` pixels for the legend panel.
pub struct ChartRenderer {
    config: RenderConfig,
    font: FontArc,
}

impl ChartRenderer {
    /// Creates a renderer with the default font.
    pub fn new(config: RenderConfig) -> Result<Self> {
        Ok(Self {
            config,
            font: default_font()?,
        })
    }

    /// Creates a renderer with a TrueType or OpenType font.
    pub fn with_font(config: RenderConfig, font_data: Vec<u8>) -> Result<Self> {
        Ok(Self {
            config,
            font: load_font(font_data)?,
        })
    }

    /// The renderer configuration.
    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    /// The image size for a spec.
    pub fn image_size(&self, spec: &ChartSpec) -> (u32, u32) {
        if spec.legend.is_empty() {
            (spec.width, spec.height)
        } else {
            (spec.width + self.legend_panel_width(spec.width), spec.height)
        }
    }

    fn legend_panel_width(&self, width: u32) -> u32 {
        (width as f32 * self.config.legend_width) as u32
    }

    /// Renders a chart image.
    pub fn render(&self, spec: &ChartSpec) -> Result<RgbaImage> {
        let layout = ChartLayout::new(
            spec.width,
            spec.height,
            self.config.border,
            self.config.min_cell,
        )?;

        let (width, height) = self.image_size(spec);
        let mut img = RgbaImage::from_pixel(width, height, WHITE);

        self.draw_grid(&mut img, &layout, &spec.cells);
        if !spec.legend.is_empty() {
            self.draw_legend(&mut img, spec.width, &spec.legend);
        }

        Ok(img)
    }

    /// Renders a chart and writes it as PNG to `writer`.
    pub fn write_png<W: io::Write>(&self, spec: &ChartSpec, writer: W) -> Result<()> {
        let img = self.render(spec)?;
        PngEncoder::new(writer).write_image(
            img.as_raw(),
            img.width(),
            img.height(),
            ExtendedColorType::Rgba8,
        )?;
        Ok(())
    }

    /// Renders a chart and saves it as a PNG file.
    pub fn export_png<P: AsRef<Path>>(&self, spec: &ChartSpec, path: P) -> Result<()> {
        let path = path.as_ref();
        let mut writer = io::BufWriter::new(File::create(path)?);
        self.write_png(spec, &mut writer)?;
        io::Write::flush(&mut writer)?;
        info!("Chart saved to {}", path.display());
        Ok(())
    }

    fn draw_grid(&self, img: &mut RgbaImage, layout: &ChartLayout, cells: &GridColors) {
        let config = &self.config;
        let (cell_w, cell_h) = (layout.cell_width(), layout.cell_height());

        let padded = cell_w.min(cell_h) as f32 * (1.0 - 2.0 * config.cell_padding);
        let padded = padded.max(0.0) as u32;
        let font_size = fit_font_size(&self.font, REFERENCE_LABEL, padded, padded);
        debug!("Grid cells {cell_w}x{cell_h} font size {font_size}");

        draw_filled_rect_mut(img, layout.grid_rect(), to_rgba(config.background));

        let labels = HandGrid::labels();
        for i in 0..GRID_SIZE {
            for j in 0..GRID_SIZE {
                let rect = layout.cell_rect(i, j);
                let colors = cells[i][j];
                draw_filled_rect_mut(img, rect, to_rgba(colors.bg));

                let offset_x = if i == j {
                    config.pair_text_offset
                } else {
                    config.text_offset
                };
                let x = rect.left() + (offset_x * cell_w as f32) as i32;
                let y = rect.top() + (config.text_offset_y * cell_h as f32) as i32;

                let label = labels[i][j].to_string();
                draw_text_mut(img, to_rgba(colors.fg), x, y, font_size, &self.font, &label);
            }
        }
    }

    fn legend_layout(&self, width: u32, legend: &[LegendEntry]) -> Option<LegendLayout> {
        let config = &self.config;
        let panel_w = self
            .legend_panel_width(width)
            .saturating_sub(config.chart_margin * 2);

        let swatch = (panel_w as f32 * config.swatch_ratio) as u32;
        if swatch == 0 {
            debug!("Legend panel too small {panel_w}px");
            return None;
        }

        // One font size for all rows, fitted to the longest name.
        let text_width = (panel_w as f32 * (1.0 - config.swatch_ratio * 1.5)) as u32;
        let longest = legend
            .iter()
            .map(|e| e.name.as_str())
            .max_by_key(|name| name.chars().count())
            .unwrap_or_default();
        let font_size = fit_font_size(&self.font, longest, text_width, swatch);
        debug!("Legend swatch {swatch}px font size {font_size}");

        Some(LegendLayout {
            x: width + config.chart_margin,
            swatch,
            text_width,
            font_size,
            row_pitch: config.legend_row_height.max(swatch) + config.legend_padding_top,
        })
    }

    fn draw_legend(&self, img: &mut RgbaImage, width: u32, legend: &[LegendEntry]) {
        let Some(layout) = self.legend_layout(width, legend) else {
            return;
        };

        let config = &self.config;
        for (idx, entry) in legend.iter().enumerate() {
            let x = layout.x as i32;
            let y = (config.legend_padding_top + layout.row_pitch * idx as u32) as i32;

            let rect = Rect::at(x, y).of_size(layout.swatch, layout.swatch);
            draw_filled_rect_mut(img, rect, to_rgba(entry.color));
            draw_hollow_rect_mut(img, rect, BLACK);

            let text_x = x + (layout.swatch + config.text_margin) as i32;
            draw_text_mut(img, BLACK, text_x, y, layout.font_size, &self.font, &entry.name);
        }
    }
}

/// The legend rows geometry.
#[derive(Debug, Clone, Copy, PartialEq)]
struct LegendLayout {
    x: u32,
    swatch: u32,
    text_width: u32,
    font_size: f32,
    row_pitch: u32,
}

fn to_rgba(color: Color) -> Rgba<u8> {
    let [r, g, b] = color.components();
    Rgba([r, g, b, 255])
}
