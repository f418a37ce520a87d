//! Named color presets applied through [`super::ThemeEditor::apply_preset`].

use crate::error::{Result, ThemeError};

pub struct ColorPreset {
    pub name: &'static str,
    pub description: &'static str,
    pub colors: &'static [(&'static str, &'static str)],
}

pub const PRESETS: &[ColorPreset] = &[
    ColorPreset {
        name: "ocean",
        description: "Deep blues and teals",
        colors: &[
            ("primary", "#0077be"),
            ("secondary", "#00a8cc"),
            ("accent", "#40e0d0"),
            ("info", "#5dade2"),
            ("border", "#1b4f72"),
            ("highlight", "rgb(174, 214, 241)"),
        ],
    },
    ColorPreset {
        name: "forest",
        description: "Greens and earthy browns",
        colors: &[
            ("primary", "#228b22"),
            ("secondary", "#6b8e23"),
            ("accent", "#daa520"),
            ("success", "#32cd32"),
            ("border", "#556b2f"),
            ("highlight", "rgb(240, 230, 140)"),
        ],
    },
    ColorPreset {
        name: "sunset",
        description: "Warm oranges, pinks and purples",
        colors: &[
            ("primary", "#ff6b35"),
            ("secondary", "#f7931e"),
            ("accent", "#c1121f"),
            ("warning", "#ffd23f"),
            ("border", "#8e44ad"),
            ("highlight", "rgb(255, 209, 220)"),
        ],
    },
    ColorPreset {
        name: "monochrome",
        description: "Shades of gray only",
        colors: &[
            ("primary", "white"),
            ("secondary", "gray"),
            ("accent", "white"),
            ("success", "gray"),
            ("warning", "gray"),
            ("error", "white"),
            ("info", "gray"),
            ("border", "dark_gray"),
            ("highlight", "dark_gray"),
        ],
    },
];

pub fn find(name: &str) -> Result<&'static ColorPreset> {
    PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name.trim()))
        .ok_or_else(|| ThemeError::NotFound {
            kind: "preset",
            name: name.to_string(),
        })
}
