//! Color slots and validated color values.
//!
//! A color is accepted in one of three textual forms:
//! - `#RRGGBB`
//! - `rgb(r, g, b)` with decimal components in 0..=255
//! - a named terminal color (see [`NamedColor::ALL`])
//!
//! The original string is kept verbatim so a value reads back exactly as it
//! was written.

use crate::error::{Result, ThemeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the sixteen roles a color can fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ColorSlot {
    Primary,
    Secondary,
    Accent,
    Success,
    Warning,
    Error,
    Info,
    Background,
    Surface,
    Border,
    TextPrimary,
    TextSecondary,
    TextMuted,
    CodeBg,
    CodeText,
    Highlight,
}

impl ColorSlot {
    pub const ALL: [ColorSlot; 16] = [
        ColorSlot::Primary,
        ColorSlot::Secondary,
        ColorSlot::Accent,
        ColorSlot::Success,
        ColorSlot::Warning,
        ColorSlot::Error,
        ColorSlot::Info,
        ColorSlot::Background,
        ColorSlot::Surface,
        ColorSlot::Border,
        ColorSlot::TextPrimary,
        ColorSlot::TextSecondary,
        ColorSlot::TextMuted,
        ColorSlot::CodeBg,
        ColorSlot::CodeText,
        ColorSlot::Highlight,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ColorSlot::Primary => "primary",
            ColorSlot::Secondary => "secondary",
            ColorSlot::Accent => "accent",
            ColorSlot::Success => "success",
            ColorSlot::Warning => "warning",
            ColorSlot::Error => "error",
            ColorSlot::Info => "info",
            ColorSlot::Background => "background",
            ColorSlot::Surface => "surface",
            ColorSlot::Border => "border",
            ColorSlot::TextPrimary => "text_primary",
            ColorSlot::TextSecondary => "text_secondary",
            ColorSlot::TextMuted => "text_muted",
            ColorSlot::CodeBg => "code_bg",
            ColorSlot::CodeText => "code_text",
            ColorSlot::Highlight => "highlight",
        }
    }
}

impl fmt::Display for ColorSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ColorSlot {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        // Accept `text-primary` as well as `text_primary`.
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        ColorSlot::ALL
            .into_iter()
            .find(|slot| slot.as_str() == normalized)
            .ok_or_else(|| ThemeError::UnknownSlot(s.to_string()))
    }
}

/// Fixed set of terminal color names.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Gray,
    DarkGray,
    DarkRed,
    DarkGreen,
    DarkYellow,
    DarkBlue,
    DarkMagenta,
    DarkCyan,
}

impl NamedColor {
    pub const ALL: [NamedColor; 16] = [
        NamedColor::Black,
        NamedColor::Red,
        NamedColor::Green,
        NamedColor::Yellow,
        NamedColor::Blue,
        NamedColor::Magenta,
        NamedColor::Cyan,
        NamedColor::White,
        NamedColor::Gray,
        NamedColor::DarkGray,
        NamedColor::DarkRed,
        NamedColor::DarkGreen,
        NamedColor::DarkYellow,
        NamedColor::DarkBlue,
        NamedColor::DarkMagenta,
        NamedColor::DarkCyan,
    ];

    pub fn name(self) -> &'static str {
        match self {
            NamedColor::Black => "black",
            NamedColor::Red => "red",
            NamedColor::Green => "green",
            NamedColor::Yellow => "yellow",
            NamedColor::Blue => "blue",
            NamedColor::Magenta => "magenta",
            NamedColor::Cyan => "cyan",
            NamedColor::White => "white",
            NamedColor::Gray => "gray",
            NamedColor::DarkGray => "dark_gray",
            NamedColor::DarkRed => "dark_red",
            NamedColor::DarkGreen => "dark_green",
            NamedColor::DarkYellow => "dark_yellow",
            NamedColor::DarkBlue => "dark_blue",
            NamedColor::DarkMagenta => "dark_magenta",
            NamedColor::DarkCyan => "dark_cyan",
        }
    }

    /// Case-insensitive lookup; `grey` spellings are folded onto `gray`.
    pub fn from_name(name: &str) -> Option<Self> {
        let normalized = name.to_ascii_lowercase().replace("grey", "gray");
        NamedColor::ALL.into_iter().find(|c| c.name() == normalized)
    }

    /// Approximate RGB, used for hex display only.
    pub fn rgb(self) -> (u8, u8, u8) {
        match self {
            NamedColor::Black => (0, 0, 0),
            NamedColor::Red => (255, 0, 0),
            NamedColor::Green => (0, 255, 0),
            NamedColor::Yellow => (255, 255, 0),
            NamedColor::Blue => (0, 0, 255),
            NamedColor::Magenta => (255, 0, 255),
            NamedColor::Cyan => (0, 255, 255),
            NamedColor::White => (255, 255, 255),
            NamedColor::Gray => (170, 170, 170),
            NamedColor::DarkGray => (85, 85, 85),
            NamedColor::DarkRed => (128, 0, 0),
            NamedColor::DarkGreen => (0, 128, 0),
            NamedColor::DarkYellow => (128, 128, 0),
            NamedColor::DarkBlue => (0, 0, 128),
            NamedColor::DarkMagenta => (128, 0, 128),
            NamedColor::DarkCyan => (0, 128, 128),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParsedColor {
    Rgb(u8, u8, u8),
    Named(NamedColor),
}

/// A color string that is known to match the accepted grammar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ColorValue {
    raw: String,
    parsed: ParsedColor,
}

impl ColorValue {
    pub fn hex(r: u8, g: u8, b: u8) -> Self {
        Self {
            raw: format!("#{}", hex::encode([r, g, b])),
            parsed: ParsedColor::Rgb(r, g, b),
        }
    }

    pub fn named(color: NamedColor) -> Self {
        Self {
            raw: color.name().to_string(),
            parsed: ParsedColor::Named(color),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn parsed(&self) -> ParsedColor {
        self.parsed
    }

    pub fn rgb(&self) -> (u8, u8, u8) {
        match self.parsed {
            ParsedColor::Rgb(r, g, b) => (r, g, b),
            ParsedColor::Named(c) => c.rgb(),
        }
    }

    /// Normalized `#rrggbb` form.
    pub fn to_hex(&self) -> String {
        let (r, g, b) = self.rgb();
        format!("#{}", hex::encode([r, g, b]))
    }
}

impl fmt::Display for ColorValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.raw)
    }
}

impl FromStr for ColorValue {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        let invalid = |reason: String| ThemeError::InvalidColorFormat {
            value: s.to_string(),
            reason,
        };

        if s.trim().is_empty() {
            return Err(invalid("empty color value".into()));
        }
        if s.trim() != s {
            return Err(invalid("surrounding whitespace".into()));
        }

        let lower = s.to_ascii_lowercase();
        let parsed = if let Some(digits) = s.strip_prefix('#') {
            parse_hex(digits).map_err(invalid)?
        } else if let Some(body) = lower
            .strip_prefix("rgb(")
            .and_then(|rest| rest.strip_suffix(')'))
        {
            parse_rgb(body).map_err(invalid)?
        } else if let Some(named) = NamedColor::from_name(s) {
            ParsedColor::Named(named)
        } else {
            return Err(invalid(
                "expected #RRGGBB, rgb(r, g, b) or a named color".into(),
            ));
        };

        Ok(Self {
            raw: s.to_string(),
            parsed,
        })
    }
}

impl TryFrom<String> for ColorValue {
    type Error = ThemeError;

    fn try_from(value: String) -> Result<Self> {
        value.parse()
    }
}

impl From<ColorValue> for String {
    fn from(value: ColorValue) -> Self {
        value.raw
    }
}

fn parse_hex(digits: &str) -> std::result::Result<ParsedColor, String> {
    if digits.len() != 6 {
        return Err(format!("expected 6 hex digits, got {}", digits.len()));
    }
    let bytes = hex::decode(digits).map_err(|e| format!("bad hex digits: {e}"))?;
    match bytes.as_slice() {
        [r, g, b] => Ok(ParsedColor::Rgb(*r, *g, *b)),
        _ => Err("expected 3 bytes".into()),
    }
}

fn parse_rgb(body: &str) -> std::result::Result<ParsedColor, String> {
    let parts: Vec<&str> = body.split(',').map(str::trim).collect();
    if parts.len() != 3 {
        return Err(format!("expected 3 components, got {}", parts.len()));
    }
    let mut channels = [0u8; 3];
    for (channel, part) in channels.iter_mut().zip(&parts) {
        if part.is_empty() || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(format!("component `{part}` is not a number"));
        }
        *channel = part
            .parse()
            .map_err(|_| format!("component `{part}` is not in 0..=255"))?;
    }
    let [r, g, b] = channels;
    Ok(ParsedColor::Rgb(r, g, b))
}

/// Sixteen named color slots. Every field is always a valid [`ColorValue`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScheme {
    pub primary: ColorValue,
    pub secondary: ColorValue,
    pub accent: ColorValue,
    pub success: ColorValue,
    pub warning: ColorValue,
    pub error: ColorValue,
    pub info: ColorValue,
    pub background: ColorValue,
    pub surface: ColorValue,
    pub border: ColorValue,
    pub text_primary: ColorValue,
    pub text_secondary: ColorValue,
    pub text_muted: ColorValue,
    pub code_bg: ColorValue,
    pub code_text: ColorValue,
    pub highlight: ColorValue,
}

impl ColorScheme {
    pub fn get(&self, slot: ColorSlot) -> &ColorValue {
        match slot {
            ColorSlot::Primary => &self.primary,
            ColorSlot::Secondary => &self.secondary,
            ColorSlot::Accent => &self.accent,
            ColorSlot::Success => &self.success,
            ColorSlot::Warning => &self.warning,
            ColorSlot::Error => &self.error,
            ColorSlot::Info => &self.info,
            ColorSlot::Background => &self.background,
            ColorSlot::Surface => &self.surface,
            ColorSlot::Border => &self.border,
            ColorSlot::TextPrimary => &self.text_primary,
            ColorSlot::TextSecondary => &self.text_secondary,
            ColorSlot::TextMuted => &self.text_muted,
            ColorSlot::CodeBg => &self.code_bg,
            ColorSlot::CodeText => &self.code_text,
            ColorSlot::Highlight => &self.highlight,
        }
    }

    pub fn set(&mut self, slot: ColorSlot, value: ColorValue) {
        let target = match slot {
            ColorSlot::Primary => &mut self.primary,
            ColorSlot::Secondary => &mut self.secondary,
            ColorSlot::Accent => &mut self.accent,
            ColorSlot::Success => &mut self.success,
            ColorSlot::Warning => &mut self.warning,
            ColorSlot::Error => &mut self.error,
            ColorSlot::Info => &mut self.info,
            ColorSlot::Background => &mut self.background,
            ColorSlot::Surface => &mut self.surface,
            ColorSlot::Border => &mut self.border,
            ColorSlot::TextPrimary => &mut self.text_primary,
            ColorSlot::TextSecondary => &mut self.text_secondary,
            ColorSlot::TextMuted => &mut self.text_muted,
            ColorSlot::CodeBg => &mut self.code_bg,
            ColorSlot::CodeText => &mut self.code_text,
            ColorSlot::Highlight => &mut self.highlight,
        };
        *target = value;
    }

    pub fn iter(&self) -> impl Iterator<Item = (ColorSlot, &ColorValue)> {
        ColorSlot::ALL.into_iter().map(move |slot| (slot, self.get(slot)))
    }
}
