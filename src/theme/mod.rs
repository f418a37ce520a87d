//! Theme model: colors, fonts and presentation flags.

pub mod borders;
pub mod builtin;
pub mod fonts;
pub mod palette;

pub use borders::BorderStyle;
pub use fonts::{FontConfig, FontRole, FontSize};
pub use palette::{ColorScheme, ColorSlot, ColorValue, NamedColor, ParsedColor};

use crate::error::{Result, ThemeError};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Theme that is always present and active on a fresh start.
pub const DEFAULT_THEME_NAME: &str = "light";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ThemeKind {
    Light,
    Dark,
    HighContrast,
    Retro,
    Matrix,
    Custom,
}

impl ThemeKind {
    pub fn is_predefined(self) -> bool {
        !matches!(self, ThemeKind::Custom)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ThemeKind::Light => "light",
            ThemeKind::Dark => "dark",
            ThemeKind::HighContrast => "high_contrast",
            ThemeKind::Retro => "retro",
            ThemeKind::Matrix => "matrix",
            ThemeKind::Custom => "custom",
        }
    }
}

impl fmt::Display for ThemeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A named bundle of colors, fonts and presentation flags.
///
/// ASCII mode is not stored: it is always the negation of `use_emojis`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "ThemeRecord", into = "ThemeRecord")]
pub struct Theme {
    pub name: String,
    pub kind: ThemeKind,
    pub description: String,
    pub colors: ColorScheme,
    pub fonts: FontConfig,
    pub use_colors: bool,
    pub use_emojis: bool,
    pub border_style: BorderStyle,
    pub separator_char: String,
    pub progress_chars: (String, String),
}

impl Theme {
    pub fn ascii_mode(&self) -> bool {
        !self.use_emojis
    }

    pub fn is_custom(&self) -> bool {
        self.kind == ThemeKind::Custom
    }

    /// Deep copy under a new name, tagged as custom.
    pub fn derive_custom(&self, name: &str, description: String) -> Self {
        Self {
            name: name.to_string(),
            kind: ThemeKind::Custom,
            description,
            ..self.clone()
        }
    }

    /// Checks the invariants serde cannot express on its own.
    pub fn validate(&self) -> Result<()> {
        FontConfig::check_header_multiplier(self.fonts.header_multiplier)?;
        if self.separator_char.is_empty() {
            return Err(empty_glyph("separator_char"));
        }
        if self.progress_chars.0.is_empty() || self.progress_chars.1.is_empty() {
            return Err(empty_glyph("progress_chars"));
        }
        if self.fonts.code_font.trim().is_empty() || self.fonts.ui_font.trim().is_empty() {
            return Err(ThemeError::InvalidValue {
                field: "font family",
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }
}

pub(crate) fn empty_glyph(field: &'static str) -> ThemeError {
    ThemeError::InvalidValue {
        field,
        reason: "glyph must not be empty".into(),
    }
}

/// On-disk layout of a theme.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ThemeRecord {
    name: String,
    #[serde(rename = "type")]
    kind: ThemeKind,
    #[serde(default)]
    description: String,
    colors: ColorScheme,
    fonts: FontConfig,
    use_colors: bool,
    use_emojis: bool,
    ascii_mode: bool,
    border_style: BorderStyle,
    separator_char: String,
    progress_chars: (String, String),
}

impl From<ThemeRecord> for Theme {
    fn from(r: ThemeRecord) -> Self {
        if r.ascii_mode == r.use_emojis {
            tracing::warn!(
                theme = %r.name,
                use_emojis = r.use_emojis,
                "ascii_mode contradicts use_emojis; ignoring ascii_mode"
            );
        }
        Self {
            name: r.name,
            kind: r.kind,
            description: r.description,
            colors: r.colors,
            fonts: r.fonts,
            use_colors: r.use_colors,
            use_emojis: r.use_emojis,
            border_style: r.border_style,
            separator_char: r.separator_char,
            progress_chars: r.progress_chars,
        }
    }
}

impl From<Theme> for ThemeRecord {
    fn from(t: Theme) -> Self {
        Self {
            ascii_mode: t.ascii_mode(),
            name: t.name,
            kind: t.kind,
            description: t.description,
            colors: t.colors,
            fonts: t.fonts,
            use_colors: t.use_colors,
            use_emojis: t.use_emojis,
            border_style: t.border_style,
            separator_char: t.separator_char,
            progress_chars: t.progress_chars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_layout_matches_store_format() {
        let theme = builtin::dark().derive_custom("Mine", "mine".into());
        let value = serde_json::to_value(&theme).unwrap();
        assert_eq!(value["type"], "custom");
        assert_eq!(value["ascii_mode"], !theme.use_emojis);
        assert_eq!(value["fonts"]["size"], "normal");
        assert_eq!(value["progress_chars"].as_array().unwrap().len(), 2);
        assert_eq!(value["colors"].as_object().unwrap().len(), 16);
        assert_eq!(value["border_style"], "rounded");
    }

    #[test]
    fn contradicting_ascii_mode_is_ignored() {
        let theme = builtin::light();
        let mut value = serde_json::to_value(&theme).unwrap();
        value["ascii_mode"] = serde_json::Value::Bool(theme.use_emojis);
        let back: Theme = serde_json::from_value(value).unwrap();
        assert_eq!(back, theme);
        assert_eq!(back.ascii_mode(), !back.use_emojis);
    }

    #[test]
    fn derive_custom_is_a_deep_copy() {
        let base = builtin::dark();
        let mut copy = base.derive_custom("copy", String::new());
        copy.colors.set(ColorSlot::Primary, ColorValue::named(NamedColor::Red));
        assert_ne!(copy.colors, base.colors);
        assert_eq!(copy.kind, ThemeKind::Custom);
    }

    #[test]
    fn validate_rejects_empty_glyphs() {
        let mut theme = builtin::light();
        theme.separator_char.clear();
        assert!(matches!(theme.validate(), Err(ThemeError::InvalidValue { .. })));
    }
}
