use super::{Config, PathsConfig, ThemeConfig, UiConfig};
use std::path::PathBuf;

/// Store location: next to `config.toml`.
pub fn themes_file() -> PathBuf {
    let config_dir = super::project_dirs()
        .map(|p| p.config_dir().to_path_buf())
        .unwrap_or_else(|| std::env::temp_dir().join("hue"));
    config_dir.join("themes.json")
}

pub fn defaults() -> Config {
    Config {
        theme: ThemeConfig::default(),
        paths: PathsConfig::default(),
        ui: UiConfig::default(),
    }
}
