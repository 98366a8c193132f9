// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Chart colors.
use ahash::AHashMap;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::LazyLock};

use crate::Error;

/// Named colors accepted by the color parser.
static NAMED_COLORS: LazyLock<AHashMap<&'static str, Color>> = LazyLock::new(|| {
    let mut colors = AHashMap::with_capacity(20);

    colors.insert("white", Color::WHITE);
    colors.insert("black", Color::BLACK);
    colors.insert("red", Color::rgb(255, 0, 0));
    colors.insert("green", Color::rgb(0, 128, 0));
    colors.insert("lime", Color::rgb(0, 255, 0));
    colors.insert("blue", Color::rgb(0, 0, 255));
    colors.insert("yellow", Color::rgb(255, 255, 0));
    colors.insert("orange", Color::rgb(255, 165, 0));
    colors.insert("purple", Color::rgb(128, 0, 128));
    colors.insert("magenta", Color::rgb(255, 0, 255));
    colors.insert("cyan", Color::rgb(0, 255, 255));
    colors.insert("pink", Color::rgb(255, 192, 203));
    colors.insert("brown", Color::rgb(165, 42, 42));
    colors.insert("gray", Color::rgb(128, 128, 128));
    colors.insert("grey", Color::rgb(128, 128, 128));
    colors.insert("lightgray", Color::rgb(211, 211, 211));
    colors.insert("lightgrey", Color::rgb(211, 211, 211));
    colors.insert("darkgray", Color::rgb(169, 169, 169));
    colors.insert("darkgrey", Color::rgb(169, 169, 169));

    colors
});

/// An opaque RGB color.
///
/// Colors compare by value so `#FFF`, `#ffffff` and `white` are the same color,
/// the canonical string form is the lowercase `#rrggbb`:
///
/// ```
/// # use holdem_chart_core::Color;
/// let c1 = "#FFF".parse::<Color>().unwrap();
/// let c2 = "white".parse::<Color>().unwrap();
/// assert_eq!(c1, c2);
/// assert_eq!(c1.to_string(), "#ffffff");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color([u8; 3]);

impl Color {
    /// The white color.
    pub const WHITE: Color = Color([255, 255, 255]);

    /// The black color.
    pub const BLACK: Color = Color([0, 0, 0]);

    /// Creates a color from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self([r, g, b])
    }

    /// The red, green and blue components.
    pub fn components(&self) -> [u8; 3] {
        self.0
    }

    /// Parses a color from `#rgb`, `#rrggbb` (with or without `#`) or a name.
    pub fn parse(s: &str) -> Option<Color> {
        let s = s.trim();
        let name = s.to_ascii_lowercase();
        if let Some(color) = NAMED_COLORS.get(name.as_str()) {
            return Some(*color);
        }

        let hex = name.strip_prefix('#').unwrap_or(&name);
        if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }

        match hex.len() {
            3 => {
                let mut rgb = [0u8; 3];
                for (c, v) in hex.chars().zip(rgb.iter_mut()) {
                    let d = c.to_digit(16)? as u8;
                    *v = d << 4 | d;
                }
                Some(Color(rgb))
            }
            6 => {
                let mut rgb = [0u8; 3];
                for (i, v) in rgb.iter_mut().enumerate() {
                    *v = u8::from_str_radix(&hex[i * 2..i * 2 + 2], 16).ok()?;
                }
                Some(Color(rgb))
            }
            _ => None,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [r, g, b] = self.0;
        write!(f, "#{r:02x}{g:02x}{b:02x}")
    }
}

impl fmt::Debug for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Color({self})")
    }
}

impl FromStr for Color {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Color::parse(s).ok_or_else(|| Error::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = Error;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<Color> for String {
    fn from(c: Color) -> Self {
        c.to_string()
    }
}

impl From<[u8; 3]> for Color {
    fn from(rgb: [u8; 3]) -> Self {
        Color(rgb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_hex() {
        assert_eq!(Color::parse("#ff8000"), Some(Color::rgb(255, 128, 0)));
        assert_eq!(Color::parse("#FF8000"), Some(Color::rgb(255, 128, 0)));
        assert_eq!(Color::parse("ff8000"), Some(Color::rgb(255, 128, 0)));
        assert_eq!(Color::parse(" #f80 "), Some(Color::rgb(255, 136, 0)));
        assert_eq!(Color::parse("#000"), Some(Color::BLACK));

        assert_eq!(Color::parse("#ff80"), None);
        assert_eq!(Color::parse("#gg0000"), None);
        assert_eq!(Color::parse("#ff80001"), None);
        assert_eq!(Color::parse(""), None);
        assert_eq!(Color::parse("#é00"), None);
    }

    #[test]
    fn parse_names() {
        assert_eq!(Color::parse("White"), Some(Color::WHITE));
        assert_eq!(Color::parse("BLACK"), Some(Color::BLACK));
        assert_eq!(Color::parse("grey"), Color::parse("gray"));
        assert_eq!(Color::parse("red"), Some(Color::rgb(255, 0, 0)));
        assert!(Color::parse("reddish").is_none());
        assert!(matches!(
            "reddish".parse::<Color>(),
            Err(Error::InvalidColor(s)) if s == "reddish"
        ));
    }

    #[test]
    fn canonical_form() {
        for s in ["#ABCDEF", "abcdef", "#abcdef", " #AbCdEf"] {
            let c = s.parse::<Color>().unwrap();
            assert_eq!(c.to_string(), "#abcdef");
        }

        assert_eq!(Color::WHITE.to_string(), "#ffffff");
        assert_eq!(format!("{:?}", Color::BLACK), "Color(#000000)");
    }

    #[test]
    fn serde_string() {
        let c = Color::rgb(1, 2, 255);
        let json = serde_json::to_string(&c).unwrap();
        assert_eq!(json, "\"#0102ff\"");

        let c: Color = serde_json::from_str("\"#0102FF\"").unwrap();
        assert_eq!(c, Color::rgb(1, 2, 255));

        let c: Color = serde_json::from_str("\"white\"").unwrap();
        assert_eq!(c, Color::WHITE);

        assert!(serde_json::from_str::<Color>("\"nope\"").is_err());
        assert!(serde_json::from_str::<Color>("12").is_err());
    }
}
