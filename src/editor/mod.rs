//! Validated edits to themes held by a [`ThemeRegistry`].
//!
//! Every edit is checked before it touches the theme, so a failed call
//! leaves the theme exactly as it was.

pub mod presets;

use crate::error::{Result, ThemeError};
use crate::registry::ThemeRegistry;
use crate::theme::{BorderStyle, ColorSlot, ColorValue, FontConfig, FontRole, FontSize, Theme};

pub use presets::PRESETS;

pub struct ThemeEditor<'a> {
    registry: &'a mut ThemeRegistry,
}

impl<'a> ThemeEditor<'a> {
    pub fn new(registry: &'a mut ThemeRegistry) -> Self {
        Self { registry }
    }

    pub fn registry(&self) -> &ThemeRegistry {
        self.registry
    }

    fn theme_mut(&mut self, name: &str) -> Result<&mut Theme> {
        self.registry.get_theme_mut(name)
    }

    pub fn set_color(&mut self, theme: &str, slot: &str, value: &str) -> Result<()> {
        let slot: ColorSlot = slot.parse()?;
        let value: ColorValue = value.parse()?;
        let target = self.theme_mut(theme)?;
        tracing::debug!(theme, %slot, value = value.as_str(), "set color");
        target.colors.set(slot, value);
        Ok(())
    }

    /// Applies every `slot -> value` pair or none of them.
    pub fn apply_colors<'c, I>(&mut self, theme: &str, colors: I) -> Result<usize>
    where
        I: IntoIterator<Item = (&'c str, &'c str)>,
    {
        let parsed = colors
            .into_iter()
            .map(|(slot, value)| -> Result<(ColorSlot, ColorValue)> {
                Ok((slot.parse()?, value.parse()?))
            })
            .collect::<Result<Vec<_>>>()?;

        let target = self.theme_mut(theme)?;
        let mut colors = target.colors.clone();
        for (slot, value) in &parsed {
            colors.set(*slot, value.clone());
        }
        target.colors = colors;
        Ok(parsed.len())
    }

    pub fn apply_preset(&mut self, theme: &str, preset: &str) -> Result<usize> {
        let preset = presets::find(preset)?;
        let applied = self.apply_colors(theme, preset.colors.iter().copied())?;
        tracing::debug!(theme, preset = preset.name, applied, "applied preset");
        Ok(applied)
    }

    pub fn set_font_size(&mut self, theme: &str, size: FontSize) -> Result<()> {
        self.theme_mut(theme)?.fonts.size = size;
        Ok(())
    }

    pub fn set_header_multiplier(&mut self, theme: &str, value: f64) -> Result<()> {
        let value = FontConfig::check_header_multiplier(value)?;
        self.theme_mut(theme)?.fonts.header_multiplier = value;
        Ok(())
    }

    pub fn set_font_family(&mut self, theme: &str, role: FontRole, family: &str) -> Result<()> {
        let family = family.trim();
        if family.is_empty() {
            return Err(ThemeError::InvalidValue {
                field: "font family",
                reason: "must not be empty".into(),
            });
        }
        let fonts = &mut self.theme_mut(theme)?.fonts;
        match role {
            FontRole::Code => fonts.code_font = family.to_string(),
            FontRole::Ui => fonts.ui_font = family.to_string(),
        }
        Ok(())
    }

    /// Flips emoji use; ASCII mode follows as its negation.
    pub fn toggle_emojis(&mut self, theme: &str) -> Result<bool> {
        let target = self.theme_mut(theme)?;
        target.use_emojis = !target.use_emojis;
        Ok(target.use_emojis)
    }

    pub fn toggle_colors(&mut self, theme: &str) -> Result<bool> {
        let target = self.theme_mut(theme)?;
        target.use_colors = !target.use_colors;
        Ok(target.use_colors)
    }

    pub fn set_border_style(&mut self, theme: &str, style: BorderStyle) -> Result<()> {
        self.theme_mut(theme)?.border_style = style;
        Ok(())
    }

    pub fn set_separator(&mut self, theme: &str, glyph: &str) -> Result<()> {
        if glyph.is_empty() {
            return Err(crate::theme::empty_glyph("separator_char"));
        }
        self.theme_mut(theme)?.separator_char = glyph.to_string();
        Ok(())
    }

    pub fn set_progress_chars(&mut self, theme: &str, filled: &str, empty: &str) -> Result<()> {
        if filled.is_empty() || empty.is_empty() {
            return Err(crate::theme::empty_glyph("progress_chars"));
        }
        self.theme_mut(theme)?.progress_chars = (filled.to_string(), empty.to_string());
        Ok(())
    }

    /// Creates a custom copy of `base` and gives it a description.
    pub fn create_custom(
        &mut self,
        new_name: &str,
        base: &str,
        description: Option<&str>,
    ) -> Result<String> {
        let name = self.registry.create_custom(new_name, base)?.to_string();
        if let Some(description) = description.map(str::trim).filter(|d| !d.is_empty()) {
            self.theme_mut(&name)?.description = description.to_string();
        }
        Ok(name)
    }
}
