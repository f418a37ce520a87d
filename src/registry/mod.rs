//! Owns every theme and tracks which one is active.

pub mod store;

pub use store::ThemeStore;

use crate::error::{Result, ThemeError};
use crate::theme::{DEFAULT_THEME_NAME, Theme, ThemeKind, builtin};
use std::collections::HashMap;
use std::path::Path;
use store::StoredThemes;

pub struct ThemeRegistry {
    themes: HashMap<String, Theme>,
    /// Predefined names first, in declaration order, then custom themes.
    order: Vec<String>,
    active: String,
    /// Returned by [`ThemeRegistry::active`] if the active name is ever unregistered.
    fallback: Theme,
    store: ThemeStore,
}

impl ThemeRegistry {
    /// Registry with predefined themes only; call [`ThemeRegistry::load`] to
    /// merge the persisted custom themes.
    pub fn new(store_path: &Path) -> Self {
        let mut themes = HashMap::new();
        let mut order = Vec::new();
        for theme in builtin::all() {
            order.push(theme.name.clone());
            themes.insert(theme.name.clone(), theme);
        }
        Self {
            themes,
            order,
            active: DEFAULT_THEME_NAME.to_string(),
            fallback: builtin::light(),
            store: ThemeStore::new(store_path),
        }
    }

    pub fn store_path(&self) -> &Path {
        self.store.path()
    }

    pub fn list_themes(&self) -> &[String] {
        &self.order
    }

    pub fn custom_names(&self) -> impl Iterator<Item = &str> {
        self.order
            .iter()
            .filter(|name| self.themes.get(*name).is_some_and(Theme::is_custom))
            .map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.themes.contains_key(name)
    }

    pub fn is_custom(&self, name: &str) -> Result<bool> {
        Ok(self.get_theme(name)?.is_custom())
    }

    pub fn get_theme(&self, name: &str) -> Result<&Theme> {
        self.themes
            .get(name)
            .ok_or_else(|| ThemeError::theme_not_found(name))
    }

    pub(crate) fn get_theme_mut(&mut self, name: &str) -> Result<&mut Theme> {
        self.themes
            .get_mut(name)
            .ok_or_else(|| ThemeError::theme_not_found(name))
    }

    pub fn active_name(&self) -> &str {
        &self.active
    }

    pub fn active(&self) -> &Theme {
        self.themes
            .get(&self.active)
            .or_else(|| self.themes.get(DEFAULT_THEME_NAME))
            .unwrap_or(&self.fallback)
    }

    pub fn set_active(&mut self, name: &str) -> Result<()> {
        if !self.contains(name) {
            return Err(ThemeError::theme_not_found(name));
        }
        tracing::debug!(theme = name, "active theme changed");
        self.active = name.to_string();
        Ok(())
    }

    /// Deep-copies `base` into a new custom theme called `new_name`.
    pub fn create_custom(&mut self, new_name: &str, base_name: &str) -> Result<&str> {
        let new_name = new_name.trim();
        if new_name.is_empty() {
            return Err(ThemeError::InvalidValue {
                field: "theme name",
                reason: "must not be empty".into(),
            });
        }
        if self.contains(new_name) {
            return Err(ThemeError::DuplicateName(new_name.to_string()));
        }
        let base = self.get_theme(base_name)?;
        let theme = base.derive_custom(new_name, format!("Custom theme based on {base_name}"));
        self.insert_custom(theme);
        Ok(self.order.last().map(String::as_str).unwrap_or_default())
    }

    pub fn delete_custom(&mut self, name: &str) -> Result<Theme> {
        if self.get_theme(name)?.kind.is_predefined() {
            return Err(ThemeError::PredefinedTheme(name.to_string()));
        }
        let removed = self
            .themes
            .remove(name)
            .ok_or_else(|| ThemeError::theme_not_found(name))?;
        self.order.retain(|n| n != name);
        if self.active == name {
            tracing::info!(theme = name, "active theme deleted; falling back to {DEFAULT_THEME_NAME}");
            self.active = DEFAULT_THEME_NAME.to_string();
        }
        Ok(removed)
    }

    /// Merges custom themes from the store. A missing store loads nothing.
    ///
    /// On `CorruptStore` the registry is left untouched; callers decide
    /// whether to carry on with what is already registered.
    pub fn load(&mut self) -> Result<usize> {
        let Some(stored) = self.store.read()? else {
            tracing::debug!(path = %self.store.path().display(), "no theme store yet");
            return Ok(0);
        };

        let mut loaded = 0;
        for (key, mut theme) in stored {
            if builtin::PREDEFINED.contains(&key.as_str()) {
                tracing::warn!(theme = %key, "stored theme shadows a predefined theme; skipped");
                continue;
            }
            if theme.name != key {
                tracing::warn!(key = %key, name = %theme.name, "stored theme name differs from key; using key");
                theme.name = key;
            }
            if !theme.is_custom() {
                tracing::warn!(theme = %theme.name, kind = %theme.kind, "stored theme is not tagged custom; retagging");
                theme.kind = ThemeKind::Custom;
            }
            self.insert_custom(theme);
            loaded += 1;
        }

        tracing::info!(count = loaded, path = %self.store.path().display(), "loaded custom themes");
        Ok(loaded)
    }

    /// Writes every custom theme to the store. Predefined themes are never written.
    pub fn save(&self) -> Result<usize> {
        let custom: StoredThemes = self
            .order
            .iter()
            .filter_map(|name| self.themes.get(name))
            .filter(|t| t.is_custom())
            .map(|t| (t.name.clone(), t.clone()))
            .collect();
        self.store.write(&custom)?;
        tracing::info!(count = custom.len(), path = %self.store.path().display(), "saved custom themes");
        Ok(custom.len())
    }

    fn insert_custom(&mut self, theme: Theme) {
        if !self.themes.contains_key(&theme.name) {
            self.order.push(theme.name.clone());
        }
        self.themes.insert(theme.name.clone(), theme);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::{ColorSlot, ColorValue, NamedColor};
    use std::fs;

    fn registry(dir: &tempfile::TempDir) -> ThemeRegistry {
        ThemeRegistry::new(&dir.path().join("themes.json"))
    }

    #[test]
    fn fresh_start_has_predefined_only() {
        let dir = tempfile::tempdir().unwrap();
        let mut reg = registry(&dir);
        assert_eq!(reg.load().unwrap(), 0);
        assert_eq!(reg.list_themes(), builtin::PREDEFINED);
        assert_eq!(reg.active_name(), "light");
        assert_eq!(reg.active().kind, ThemeKind::Light);
    }

    #[test]
    fn set_active_unknown_fails() {
        let dir = tempfile::tempdir().unwrap();
        let mut reg = registry(&dir);
        assert!(matches!(reg.set_active("nope"), Err(ThemeError::NotFound { .. })));
        reg.set_active("matrix").unwrap();
        assert_eq!(reg.active().name, "matrix");
    }

    #[test]
    fn create_custom_copies_base() {
        let dir = tempfile::tempdir().unwrap();
        let mut reg = registry(&dir);
        reg.create_custom("MyTheme", "dark").unwrap();

        let dark = reg.get_theme("dark").unwrap().clone();
        let mine = reg.get_theme("MyTheme").unwrap();
        assert_eq!(mine.kind, ThemeKind::Custom);
        assert_eq!(mine.colors, dark.colors);
        assert_eq!(mine.fonts, dark.fonts);
        assert_eq!(reg.list_themes().last().unwrap(), "MyTheme");

        reg.get_theme_mut("dark")
            .unwrap()
            .colors
            .set(ColorSlot::Primary, ColorValue::named(NamedColor::Red));
        assert_eq!(reg.get_theme("MyTheme").unwrap().colors, dark.colors);
    }

    #[test]
    fn create_custom_rejects_duplicates_and_missing_base() {
        let dir = tempfile::tempdir().unwrap();
        let mut reg = registry(&dir);
        assert!(matches!(
            reg.create_custom("dark", "light"),
            Err(ThemeError::DuplicateName(_))
        ));
        assert!(matches!(
            reg.create_custom("fresh", "missing"),
            Err(ThemeError::NotFound { .. })
        ));
        reg.create_custom("fresh", "light").unwrap();
        assert!(matches!(
            reg.create_custom("fresh", "dark"),
            Err(ThemeError::DuplicateName(_))
        ));
    }

    #[test]
    fn save_then_load_round_trips_custom_themes() {
        let dir = tempfile::tempdir().unwrap();
        let mut reg = registry(&dir);
        reg.create_custom("a", "retro").unwrap();
        reg.create_custom("b", "matrix").unwrap();
        reg.get_theme_mut("b").unwrap().fonts.header_multiplier = 2.25;
        assert_eq!(reg.save().unwrap(), 2);

        let mut fresh = registry(&dir);
        assert_eq!(fresh.load().unwrap(), 2);
        for name in ["a", "b"] {
            assert_eq!(fresh.get_theme(name).unwrap(), reg.get_theme(name).unwrap());
        }
        for name in builtin::PREDEFINED {
            assert_eq!(fresh.get_theme(name).unwrap(), reg.get_theme(name).unwrap());
        }
    }

    #[test]
    fn predefined_themes_are_never_persisted() {
        let dir = tempfile::tempdir().unwrap();
        let reg = registry(&dir);
        assert_eq!(reg.save().unwrap(), 0);
        let raw = fs::read_to_string(dir.path().join("themes.json")).unwrap();
        assert_eq!(raw.trim(), "{}");
    }

    #[test]
    fn stored_theme_cannot_shadow_predefined() {
        let dir = tempfile::tempdir().unwrap();
        let mut themes = StoredThemes::new();
        let mut imposter = builtin::light().derive_custom("dark", String::new());
        imposter.colors.set(ColorSlot::Primary, ColorValue::named(NamedColor::Red));
        themes.insert("dark".into(), imposter);
        ThemeStore::new(dir.path().join("themes.json")).write(&themes).unwrap();

        let mut reg = registry(&dir);
        assert_eq!(reg.load().unwrap(), 0);
        assert_eq!(reg.get_theme("dark").unwrap(), &builtin::dark());
    }

    #[test]
    fn custom_themes_reload_in_creation_order() {
        let dir = tempfile::tempdir().unwrap();
        let mut reg = registry(&dir);
        reg.create_custom("zeta", "dark").unwrap();
        reg.create_custom("alpha", "light").unwrap();
        reg.create_custom("mid", "retro").unwrap();
        reg.save().unwrap();

        let mut fresh = registry(&dir);
        fresh.load().unwrap();
        assert_eq!(fresh.list_themes(), reg.list_themes());
        assert_eq!(fresh.custom_names().collect::<Vec<_>>(), ["zeta", "alpha", "mid"]);
    }

    #[test]
    fn load_uses_key_as_name_and_retags_custom() {
        let dir = tempfile::tempdir().unwrap();
        let mut inner = builtin::dark();
        inner.name = "inner".into();
        let value = serde_json::json!({ "outer": inner });
        assert_eq!(value["outer"]["type"], "dark");
        fs::write(dir.path().join("themes.json"), value.to_string()).unwrap();

        let mut reg = registry(&dir);
        assert_eq!(reg.load().unwrap(), 1);
        let outer = reg.get_theme("outer").unwrap();
        assert_eq!(outer.name, "outer");
        assert!(outer.is_custom());
        assert_eq!(outer.colors, builtin::dark().colors);
        assert!(!reg.contains("inner"));
        assert_eq!(reg.list_themes().last().unwrap(), "outer");
    }

    #[test]
    fn corrupt_store_keeps_predefined_usable() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("themes.json"), "[1, 2").unwrap();
        let mut reg = registry(&dir);
        assert!(matches!(reg.load(), Err(ThemeError::CorruptStore { .. })));
        assert_eq!(reg.list_themes().len(), builtin::PREDEFINED.len());
        reg.set_active("dark").unwrap();
    }

    #[test]
    fn delete_custom_resets_active() {
        let dir = tempfile::tempdir().unwrap();
        let mut reg = registry(&dir);
        reg.create_custom("gone", "dark").unwrap();
        reg.set_active("gone").unwrap();
        reg.delete_custom("gone").unwrap();
        assert_eq!(reg.active_name(), "light");
        assert_eq!(reg.active().kind, ThemeKind::Light);
        assert!(!reg.contains("gone"));
        assert!(matches!(
            reg.delete_custom("light"),
            Err(ThemeError::PredefinedTheme(_))
        ));
    }
}
