//! Style descriptors parsed from shorthand strings.
//!
//! A descriptor is a space-separated list of attribute words and colors:
//!
//! - `"bold"` → bold
//! - `"cyan"` → fg: cyan
//! - `"cyan bold"` → fg: cyan, bold
//! - `"yellow on blue italic"` → fg: yellow, bg: blue, italic

use std::fmt;
use std::str::FromStr;

use console::Style;
use serde::{Serialize, Serializer};

use crate::color::ColorDef;
use crate::error::StyleError;

/// A parsed style description.
///
/// All fields are optional; `None` leaves the terminal default in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleDescriptor {
    /// Foreground (text) color.
    pub fg: Option<ColorDef>,
    /// Background color.
    pub bg: Option<ColorDef>,
    /// Bold text.
    pub bold: Option<bool>,
    /// Dimmed/faded text.
    pub dim: Option<bool>,
    /// Italic text.
    pub italic: Option<bool>,
    /// Underlined text.
    pub underline: Option<bool>,
    /// Blinking text (limited terminal support).
    pub blink: Option<bool>,
    /// Swap fg/bg colors.
    pub reverse: Option<bool>,
    /// Hidden text.
    pub hidden: Option<bool>,
    /// Strikethrough text.
    pub strikethrough: Option<bool>,
}

impl StyleDescriptor {
    /// Creates an empty descriptor (all None).
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses a shorthand descriptor.
    ///
    /// # Errors
    ///
    /// - [`StyleError::InvalidShorthand`] for empty input, a second foreground
    ///   color, or an `on` with no color after it
    /// - [`StyleError::InvalidColor`] for a token that is neither an attribute
    ///   nor a color
    ///
    /// # Example
    ///
    /// ```rust
    /// use helpcfg_style::StyleDescriptor;
    ///
    /// let style = StyleDescriptor::parse("bright_white bold").unwrap();
    /// assert_eq!(style.bold, Some(true));
    /// assert_eq!(style.to_string(), "bright_white bold");
    ///
    /// assert!(StyleDescriptor::parse("red blue").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self, StyleError> {
        let mut desc = StyleDescriptor::new();
        let mut tokens = s.split_whitespace();

        while let Some(token) = tokens.next() {
            let lower = token.to_lowercase();
            if desc.set_flag(&lower) {
                continue;
            }

            if lower == "on" {
                let color = tokens
                    .next()
                    .ok_or_else(|| StyleError::shorthand(s, "'on' must be followed by a color"))?;
                if desc.bg.is_some() {
                    return Err(StyleError::shorthand(s, "multiple background colors"));
                }
                desc.bg = Some(ColorDef::parse_string(color).map_err(|e| StyleError::color(color, e))?);
                continue;
            }

            if desc.fg.is_some() {
                return Err(StyleError::shorthand(
                    s,
                    format!("multiple colors: already have fg, got '{}'", token),
                ));
            }
            desc.fg = Some(ColorDef::parse_string(token).map_err(|e| StyleError::color(token, e))?);
        }

        if desc.is_empty() {
            return Err(StyleError::shorthand(s, "empty style"));
        }

        Ok(desc)
    }

    fn set_flag(&mut self, word: &str) -> bool {
        let slot = match word {
            "bold" => &mut self.bold,
            "dim" => &mut self.dim,
            "italic" => &mut self.italic,
            "underline" => &mut self.underline,
            "blink" => &mut self.blink,
            "reverse" => &mut self.reverse,
            "hidden" => &mut self.hidden,
            "strikethrough" => &mut self.strikethrough,
            _ => return false,
        };
        *slot = Some(true);
        true
    }

    /// Sets the foreground color, returning `self` for chaining.
    pub fn fg(mut self, color: ColorDef) -> Self {
        self.fg = Some(color);
        self
    }

    /// Sets the bold flag, returning `self` for chaining.
    pub fn bold(mut self) -> Self {
        self.bold = Some(true);
        self
    }

    /// Returns true if all attributes are None.
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.flags().all(|(_, v)| v.is_none())
    }

    fn flags(&self) -> impl Iterator<Item = (&'static str, Option<bool>)> {
        [
            ("bold", self.bold),
            ("dim", self.dim),
            ("italic", self.italic),
            ("underline", self.underline),
            ("blink", self.blink),
            ("reverse", self.reverse),
            ("hidden", self.hidden),
            ("strikethrough", self.strikethrough),
        ]
        .into_iter()
    }

    /// Converts this descriptor to a `console::Style`.
    pub fn to_style(&self) -> Style {
        let mut style = Style::new();

        if let Some(ref fg) = self.fg {
            style = style.fg(fg.to_console_color());
        }
        if let Some(ref bg) = self.bg {
            style = style.bg(bg.to_console_color());
        }
        if self.bold == Some(true) {
            style = style.bold();
        }
        if self.dim == Some(true) {
            style = style.dim();
        }
        if self.italic == Some(true) {
            style = style.italic();
        }
        if self.underline == Some(true) {
            style = style.underlined();
        }
        if self.blink == Some(true) {
            style = style.blink();
        }
        if self.reverse == Some(true) {
            style = style.reverse();
        }
        if self.hidden == Some(true) {
            style = style.hidden();
        }
        if self.strikethrough == Some(true) {
            style = style.strikethrough();
        }

        style
    }
}

/// Writes the canonical shorthand: foreground, `on` background, then flags.
impl fmt::Display for StyleDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut parts: Vec<String> = Vec::new();
        if let Some(ref fg) = self.fg {
            parts.push(fg.to_string());
        }
        if let Some(ref bg) = self.bg {
            parts.push(format!("on {}", bg));
        }
        parts.extend(
            self.flags()
                .filter(|(_, v)| *v == Some(true))
                .map(|(name, _)| name.to_string()),
        );
        f.write_str(&parts.join(" "))
    }
}

impl FromStr for StyleDescriptor {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for StyleDescriptor {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
