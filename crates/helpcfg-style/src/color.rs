//! Color parsing for style descriptors.
//!
//! Supported formats:
//!
//! - Named colors: `red`, `green`, `blue`, etc. (8 ANSI colors, plus `gray`/`grey`)
//! - Bright variants: `bright_red`, `bright_green`, etc.
//! - 256-color palette: `0` through `255`
//! - RGB hex: `#ff6b35` or `#fff` (3 or 6 digit)
//!
//! # Example
//!
//! ```rust
//! use helpcfg_style::ColorDef;
//!
//! let red = ColorDef::parse_string("red").unwrap();
//! let hex = ColorDef::parse_string("#ff6b35").unwrap();
//! let palette = ColorDef::parse_string("208").unwrap();
//! assert_eq!(palette, ColorDef::Color256(208));
//! assert_eq!(hex.to_string(), "#ff6b35");
//! assert_eq!(red.to_string(), "red");
//! ```

use std::fmt;

use console::Color;

const BASIC_NAMES: [(&str, Color); 8] = [
    ("black", Color::Black),
    ("red", Color::Red),
    ("green", Color::Green),
    ("yellow", Color::Yellow),
    ("blue", Color::Blue),
    ("magenta", Color::Magenta),
    ("cyan", Color::Cyan),
    ("white", Color::White),
];

/// A parsed color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorDef {
    /// Named ANSI color.
    Named(Color),
    /// 256-color palette index. Bright colors live at 8-15.
    Color256(u8),
    /// True color RGB, downsampled to the 256 palette when rendered.
    Rgb(u8, u8, u8),
}

impl ColorDef {
    /// Parses a color from a single token.
    ///
    /// Returns a human-readable message on failure; callers wrap it into a
    /// [`StyleError`](crate::StyleError).
    pub fn parse_string(s: &str) -> Result<Self, String> {
        let s = s.trim();

        if let Some(hex) = s.strip_prefix('#') {
            return Self::parse_hex(hex);
        }

        if !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit()) {
            return s
                .parse::<u8>()
                .map(ColorDef::Color256)
                .map_err(|_| format!("palette index {} out of range (0-255)", s));
        }

        Self::parse_named(s)
    }

    fn parse_hex(hex: &str) -> Result<Self, String> {
        let component = |digits: &str| {
            u8::from_str_radix(digits, 16).map_err(|_| format!("invalid hex: #{}", hex))
        };
        if !hex.is_ascii() {
            return Err(format!("invalid hex: #{}", hex));
        }
        match hex.len() {
            // #rgb -> #rrggbb
            3 => Ok(ColorDef::Rgb(
                component(&hex[0..1])? * 17,
                component(&hex[1..2])? * 17,
                component(&hex[2..3])? * 17,
            )),
            6 => Ok(ColorDef::Rgb(
                component(&hex[0..2])?,
                component(&hex[2..4])?,
                component(&hex[4..6])?,
            )),
            _ => Err(format!("invalid hex color: #{} (must be 3 or 6 digits)", hex)),
        }
    }

    fn parse_named(name: &str) -> Result<Self, String> {
        let name_lower = name.to_lowercase();

        if let Some(base) = name_lower.strip_prefix("bright_") {
            return basic_index(base)
                .map(|i| ColorDef::Color256(i + 8))
                .ok_or_else(|| format!("unknown bright color: {}", name));
        }

        if name_lower == "gray" || name_lower == "grey" {
            return Ok(ColorDef::Named(Color::White));
        }

        basic_index(&name_lower)
            .map(|i| ColorDef::Named(BASIC_NAMES[i as usize].1))
            .ok_or_else(|| format!("unknown color name: {}", name))
    }

    /// Converts this color to a `console::Color`.
    pub fn to_console_color(&self) -> Color {
        match self {
            ColorDef::Named(c) => *c,
            ColorDef::Color256(n) => Color::Color256(*n),
            ColorDef::Rgb(r, g, b) => Color::Color256(rgb_to_ansi256((*r, *g, *b))),
        }
    }
}

fn basic_index(name: &str) -> Option<u8> {
    BASIC_NAMES
        .iter()
        .position(|(n, _)| *n == name)
        .map(|i| i as u8)
}

impl fmt::Display for ColorDef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ColorDef::Named(c) => {
                let name = BASIC_NAMES
                    .iter()
                    .find(|(_, color)| color == c)
                    .map(|(n, _)| *n);
                match name {
                    Some(n) => f.write_str(n),
                    None => write!(f, "{:?}", c),
                }
            }
            ColorDef::Color256(n @ 8..=15) => {
                write!(f, "bright_{}", BASIC_NAMES[(*n - 8) as usize].0)
            }
            ColorDef::Color256(n) => write!(f, "{}", n),
            ColorDef::Rgb(r, g, b) => write!(f, "#{:02x}{:02x}{:02x}", r, g, b),
        }
    }
}

/// Converts an RGB triplet to the nearest ANSI 256-color palette index.
///
/// ```rust
/// use helpcfg_style::rgb_to_ansi256;
///
/// assert_eq!(rgb_to_ansi256((255, 0, 0)), 196);
/// assert_eq!(rgb_to_ansi256((0, 255, 0)), 46);
/// ```
pub fn rgb_to_ansi256((r, g, b): (u8, u8, u8)) -> u8 {
    if r == g && g == b {
        if r < 8 {
            16
        } else if r > 248 {
            231
        } else {
            232 + ((r as u16 - 8) * 24 / 247) as u8
        }
    } else {
        let red = (r as u16 * 5 / 255) as u8;
        let green = (g as u16 * 5 / 255) as u8;
        let blue = (b as u16 * 5 / 255) as u8;
        16 + 36 * red + 6 * green + blue
    }
}
