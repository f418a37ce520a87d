use crate::error::{Result, ThemeError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const HEADER_MULTIPLIER_MIN: f64 = 0.8;
pub const HEADER_MULTIPLIER_MAX: f64 = 3.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FontSize {
    Small,
    #[default]
    Normal,
    Large,
    ExtraLarge,
}

impl FontSize {
    pub const ALL: [FontSize; 4] = [
        FontSize::Small,
        FontSize::Normal,
        FontSize::Large,
        FontSize::ExtraLarge,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            FontSize::Small => "small",
            FontSize::Normal => "normal",
            FontSize::Large => "large",
            FontSize::ExtraLarge => "extra_large",
        }
    }
}

impl fmt::Display for FontSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FontSize {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        FontSize::ALL
            .into_iter()
            .find(|size| size.as_str() == normalized)
            .ok_or_else(|| ThemeError::InvalidValue {
                field: "font size",
                reason: format!("`{s}` is not one of small, normal, large, extra_large"),
            })
    }
}

/// Which font family a theme edit targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontRole {
    Code,
    Ui,
}

impl FromStr for FontRole {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "code" => Ok(FontRole::Code),
            "ui" => Ok(FontRole::Ui),
            other => Err(ThemeError::InvalidValue {
                field: "font role",
                reason: format!("`{other}` is not `code` or `ui`"),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FontConfig {
    pub size: FontSize,
    pub header_multiplier: f64,
    pub code_font: String,
    pub ui_font: String,
}

impl FontConfig {
    pub fn check_header_multiplier(value: f64) -> Result<f64> {
        // NaN fails both comparisons, so test for containment.
        if (HEADER_MULTIPLIER_MIN..=HEADER_MULTIPLIER_MAX).contains(&value) {
            Ok(value)
        } else {
            Err(ThemeError::OutOfRange {
                field: "header_multiplier",
                value,
                min: HEADER_MULTIPLIER_MIN,
                max: HEADER_MULTIPLIER_MAX,
            })
        }
    }

    pub fn family(&self, role: FontRole) -> &str {
        match role {
            FontRole::Code => &self.code_font,
            FontRole::Ui => &self.ui_font,
        }
    }
}

impl Default for FontConfig {
    fn default() -> Self {
        Self {
            size: FontSize::Normal,
            header_multiplier: 1.5,
            code_font: "monospace".to_string(),
            ui_font: "sans-serif".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_multiplier_bounds() {
        assert!(FontConfig::check_header_multiplier(0.8).is_ok());
        assert!(FontConfig::check_header_multiplier(3.0).is_ok());
        assert!(FontConfig::check_header_multiplier(0.5).is_err());
        assert!(FontConfig::check_header_multiplier(5.0).is_err());
        assert!(FontConfig::check_header_multiplier(f64::NAN).is_err());
    }

    #[test]
    fn font_size_parsing() {
        assert_eq!("extra-large".parse::<FontSize>().unwrap(), FontSize::ExtraLarge);
        assert_eq!("Small".parse::<FontSize>().unwrap(), FontSize::Small);
        assert!("huge".parse::<FontSize>().is_err());
    }

    #[test]
    fn font_size_serializes_snake_case() {
        let json = serde_json::to_string(&FontSize::ExtraLarge).unwrap();
        assert_eq!(json, "\"extra_large\"");
    }
}
