// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Chart fonts.
use ab_glyph::FontArc;
use imageproc::drawing::text_size;

use crate::{Error, Result};

/// The default monospace font.
const BYTES_MONO: &[u8] = include_bytes!("assets/DejaVuSansMono.ttf");

/// The widest hand label, used to size the cells font.
pub const REFERENCE_LABEL: &str = "XXx";

/// Loads the default chart font.
pub fn default_font() -> Result<FontArc> {
    FontArc::try_from_slice(BYTES_MONO).map_err(|e| Error::Font(e.to_string()))
}

/// Loads a font from TrueType or OpenType data.
pub fn load_font(data: Vec<u8>) -> Result<FontArc> {
    FontArc::try_from_vec(data).map_err(|e| Error::Font(e.to_string()))
}

/// Returns the largest pixel size for which `text` fits in a `max_width` x
/// `max_height` box, the smallest returned size is 1.
pub fn fit_font_size(font: &FontArc, text: &str, max_width: u32, max_height: u32) -> f32 {
    let mut size = 1;
    while size < max_height {
        let (w, h) = text_size((size + 1) as f32, font, text);
        if w > max_width || h > max_height {
            break;
        }
        size += 1;
    }

    size as f32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn load_default() {
        let font = default_font().unwrap();
        let (w, h) = text_size(20.0, &font, REFERENCE_LABEL);
        assert!(w > 0 && h > 0);
    }

    #[test]
    fn invalid_font() {
        assert!(matches!(load_font(vec![1, 2, 3]), Err(Error::Font(_))));
    }

    #[test]
    fn fit_size() {
        let font = default_font().unwrap();

        let size = fit_font_size(&font, REFERENCE_LABEL, 60, 60);
        let (w, h) = text_size(size, &font, REFERENCE_LABEL);
        assert!(w <= 60 && h <= 60);

        // One more pixel doesn't fit.
        let (w, h) = text_size(size + 1.0, &font, REFERENCE_LABEL);
        assert!(w > 60 || h > 60);
    }

    #[test]
    fn fit_size_grows_with_box() {
        let font = default_font().unwrap();

        let mut last = 0.0;
        for max in [20, 40, 80, 160, 320] {
            let size = fit_font_size(&font, REFERENCE_LABEL, max, max);
            assert!(size > last, "{size} <= {last}");
            last = size;
        }

        // Longer text gets a smaller font.
        let short = fit_font_size(&font, "Call", 100, 100);
        let long = fit_font_size(&font, "Call or raise", 100, 100);
        assert!(long < short);

        // Boxes too small still get a usable size.
        assert_eq!(fit_font_size(&font, REFERENCE_LABEL, 0, 0), 1.0);
    }
}
