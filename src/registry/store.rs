//! JSON file holding custom themes, keyed by theme name.

use crate::error::{Result, ThemeError};
use crate::theme::Theme;
use indexmap::IndexMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Kept in file order so custom themes reload in the order they were created.
pub type StoredThemes = IndexMap<String, Theme>;

#[derive(Debug, Clone)]
pub struct ThemeStore {
    path: PathBuf,
}

impl ThemeStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// `Ok(None)` when the file does not exist yet.
    pub fn read(&self) -> Result<Option<StoredThemes>> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.corrupt(e.to_string())),
        };

        let themes: StoredThemes =
            serde_json::from_str(&raw).map_err(|e| self.corrupt(e.to_string()))?;
        for (key, theme) in &themes {
            theme
                .validate()
                .map_err(|e| self.corrupt(format!("theme `{key}`: {e}")))?;
        }
        Ok(Some(themes))
    }

    /// Write to a sibling temp file, then rename over the store.
    pub fn write(&self, themes: &StoredThemes) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| ThemeError::io(parent, e))?;
        }

        let raw = serde_json::to_string_pretty(themes).map_err(|e| ThemeError::Io {
            path: self.path.clone(),
            source: io::Error::other(e),
        })?;

        let tmp = self.temp_path();
        fs::write(&tmp, raw).map_err(|e| ThemeError::io(&tmp, e))?;
        if let Err(e) = fs::rename(&tmp, &self.path) {
            let _ = fs::remove_file(&tmp);
            return Err(ThemeError::io(&self.path, e));
        }
        Ok(())
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "themes.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn corrupt(&self, reason: String) -> ThemeError {
        ThemeError::CorruptStore {
            path: self.path.clone(),
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::builtin;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = ThemeStore::new(dir.path().join("themes.json"));
        assert!(store.read().unwrap().is_none());
    }

    #[test]
    fn write_creates_parent_and_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("themes.json");
        let store = ThemeStore::new(&path);

        let mut themes = StoredThemes::new();
        themes.insert("mine".into(), builtin::dark().derive_custom("mine", String::new()));
        store.write(&themes).unwrap();

        assert!(path.exists());
        assert!(!dir.path().join("nested").join("themes.json.tmp").exists());
        assert_eq!(store.read().unwrap().unwrap(), themes);
    }

    #[test]
    fn garbage_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("themes.json");
        fs::write(&path, "{ not json").unwrap();
        let err = ThemeStore::new(&path).read().unwrap_err();
        assert!(matches!(err, ThemeError::CorruptStore { .. }));
    }

    #[test]
    fn invalid_color_in_store_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("themes.json");
        let theme = builtin::light().derive_custom("bad", String::new());
        let mut value = serde_json::json!({ "bad": theme });
        value["bad"]["colors"]["primary"] = serde_json::json!("#ZZZZZZ");
        fs::write(&path, value.to_string()).unwrap();

        let err = ThemeStore::new(&path).read().unwrap_err();
        assert!(matches!(err, ThemeError::CorruptStore { .. }));
    }

    #[test]
    fn out_of_range_multiplier_in_store_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("themes.json");
        let mut theme = builtin::light().derive_custom("big", String::new());
        theme.fonts.header_multiplier = 9.0;
        let mut themes = StoredThemes::new();
        themes.insert("big".into(), theme);
        fs::write(&path, serde_json::to_string(&themes).unwrap()).unwrap();

        let err = ThemeStore::new(&path).read().unwrap_err();
        assert!(matches!(err, ThemeError::CorruptStore { .. }));
    }
}
