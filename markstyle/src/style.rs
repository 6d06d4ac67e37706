//! Abstract style values
//!
//! These types describe *what* a run of text should look like, never *how* to draw it. A host
//! maps [`Font`], [`Color`] and [`ParagraphStyle`] onto its platform types when rendering.

use crate::error::ColorParseError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Family name used when no explicit font family is configured.
pub const SYSTEM_FONT_FAMILY: &str = "system";

/// Family name used for inline code spans.
pub const MONOSPACE_FONT_FAMILY: &str = "monospace";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontWeight {
    #[default]
    Regular,
    Bold,
}

/// Font description: family, point size and traits
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    pub family: String,
    pub size: f32,
    #[serde(default)]
    pub weight: FontWeight,
    #[serde(default)]
    pub italic: bool,
}

impl Font {
    pub fn new(family: impl Into<String>, size: f32) -> Self {
        Font {
            family: family.into(),
            size,
            weight: FontWeight::Regular,
            italic: false,
        }
    }

    /// The platform's default font at the given size.
    pub fn system(size: f32) -> Self {
        Font::new(SYSTEM_FONT_FAMILY, size)
    }

    pub fn monospace(size: f32) -> Self {
        Font::new(MONOSPACE_FONT_FAMILY, size)
    }

    /// Same family and size, bold weight.
    pub fn bold(&self) -> Self {
        Font {
            weight: FontWeight::Bold,
            ..self.clone()
        }
    }

    /// Same family and size, italic trait.
    pub fn italic(&self) -> Self {
        Font {
            italic: true,
            ..self.clone()
        }
    }

    pub fn with_size(&self, size: f32) -> Self {
        Font {
            size,
            ..self.clone()
        }
    }

    pub fn is_bold(&self) -> bool {
        self.weight == FontWeight::Bold
    }
}

impl Default for Font {
    fn default() -> Self {
        Font::system(12.0)
    }
}

/// RGBA color with 8 bits per channel
///
/// Parses from and serializes to `#RRGGBB` or `#RRGGBBAA`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const GRAY: Color = Color::rgb(128, 128, 128);
    pub const CLEAR: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Color { r, g, b, a }
    }
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let hex = s
            .trim()
            .strip_prefix('#')
            .ok_or_else(|| ColorParseError::MissingHash(s.to_string()))?;
        if hex.len() != 6 && hex.len() != 8 {
            return Err(ColorParseError::InvalidLength(s.to_string()));
        }
        if !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(ColorParseError::InvalidDigit(s.to_string()));
        }

        let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16);
        let parse = || -> Result<Color, std::num::ParseIntError> {
            let a = if hex.len() == 8 { channel(6)? } else { 255 };
            Ok(Color::rgba(channel(0)?, channel(2)?, channel(4)?, a))
        };
        parse().map_err(|_| ColorParseError::InvalidDigit(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(
                f,
                "#{:02x}{:02x}{:02x}{:02x}",
                self.r, self.g, self.b, self.a
            )
        }
    }
}

/// Line and paragraph layout hints
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphStyle {
    pub line_spacing: f32,
    pub paragraph_spacing: f32,
    pub paragraph_spacing_before: f32,
    /// Indent of every line after the first, in points
    pub head_indent: f32,
    pub first_line_head_indent: f32,
}

impl ParagraphStyle {
    /// Returns a copy whose lines are all shifted right by `indent` points.
    pub fn indented(&self, indent: f32) -> Self {
        ParagraphStyle {
            head_indent: self.head_indent + indent,
            first_line_head_indent: self.first_line_head_indent + indent,
            ..self.clone()
        }
    }
}

impl Default for ParagraphStyle {
    fn default() -> Self {
        ParagraphStyle {
            line_spacing: 1.38,
            paragraph_spacing: 3.0,
            paragraph_spacing_before: 0.0,
            head_indent: 0.0,
            first_line_head_indent: 0.0,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const fn new(width: f32, height: f32) -> Self {
        Size { width, height }
    }
}

/// The style set every element derives its attributes from
///
/// Element attributes are never set one by one; they are re-derived from a `BaseStyle` through
/// [`crate::pipeline::restyle`].
#[derive(Debug, Clone, PartialEq)]
pub struct BaseStyle {
    pub font: Font,
    /// Replaces the derived bold variant of `font` when set
    pub bold_font: Option<Font>,
    /// Replaces the derived italic variant of `font` when set
    pub italic_font: Option<Font>,
    /// Replaces the monospace font at `font`'s size when set
    pub code_font: Option<Font>,
    pub color: Color,
    pub background: Color,
    /// Foreground for link text; links keep the surrounding color when unset
    pub link_color: Option<Color>,
    pub paragraph: ParagraphStyle,
}

impl BaseStyle {
    pub fn bold_font(&self) -> Font {
        self.bold_font.clone().unwrap_or_else(|| self.font.bold())
    }

    pub fn italic_font(&self) -> Font {
        self.italic_font
            .clone()
            .unwrap_or_else(|| self.font.italic())
    }

    pub fn code_font(&self) -> Font {
        self.code_font
            .clone()
            .unwrap_or_else(|| Font::monospace(self.font.size))
    }
}

impl Default for BaseStyle {
    fn default() -> Self {
        BaseStyle {
            font: Font::default(),
            bold_font: None,
            italic_font: None,
            code_font: None,
            color: Color::BLACK,
            background: Color::CLEAR,
            link_color: None,
            paragraph: ParagraphStyle::default(),
        }
    }
}
