//! Read-only comparison table and samples over registered themes.

use super::Painter;
use crate::error::Result;
use crate::registry::ThemeRegistry;
use crate::theme::{ColorSlot, Theme};
use std::fmt::Write;
use unicode_width::UnicodeWidthStr;

const SAMPLE_WIDTH: usize = 36;

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

/// Flag table followed by one sample per theme. An empty `names` compares
/// every registered theme.
pub fn compare(registry: &ThemeRegistry, names: &[String], color_output: bool) -> Result<String> {
    let names: Vec<&str> = if names.is_empty() {
        registry.list_themes().iter().map(String::as_str).collect()
    } else {
        names.iter().map(String::as_str).collect()
    };
    let themes = names
        .iter()
        .map(|name| registry.get_theme(name))
        .collect::<Result<Vec<&Theme>>>()?;

    let mut out = String::new();
    out.push_str(&summary_table(&themes));
    for theme in themes {
        out.push('\n');
        out.push_str(&sample(theme, color_output));
    }
    Ok(out)
}

pub fn summary_table(themes: &[&Theme]) -> String {
    let name_width = themes
        .iter()
        .map(|t| t.name.chars().count())
        .chain(std::iter::once("Theme".len()))
        .max()
        .unwrap_or(5);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<name_width$}  {:<13}  {:<6}  {:<6}  {:<5}  {:<7}  {}",
        "Theme", "Type", "Colors", "Emojis", "ASCII", "Border", "Font"
    );
    let _ = writeln!(out, "{}", "-".repeat(name_width + 64));
    for theme in themes {
        let _ = writeln!(
            out,
            "{:<name_width$}  {:<13}  {:<6}  {:<6}  {:<5}  {:<7}  {} x{:.1}",
            theme.name,
            theme.kind.as_str(),
            yes_no(theme.use_colors),
            yes_no(theme.use_emojis),
            yes_no(theme.ascii_mode()),
            theme.border_style.as_str(),
            theme.fonts.size,
            theme.fonts.header_multiplier,
        );
    }
    out
}

fn sample_lines(p: &Painter, theme: &Theme) -> [String; 4] {
    [
        format!("{} {}", p.icon("🎨", "*"), p.header(&format!("{} theme", theme.name))),
        p.paint(ColorSlot::TextPrimary, "Body text reads like this."),
        p.paint(ColorSlot::TextSecondary, "Secondary notes sit here."),
        p.code("print(\"hello\")"),
    ]
}

/// Header, body text and a code line rendered in the theme's colors, boxed
/// in the theme's border style.
pub fn sample(theme: &Theme, color_output: bool) -> String {
    let p = Painter::new(theme, color_output);
    // Widths are measured on the unstyled rendering.
    let plain = sample_lines(&Painter::new(theme, false), theme);
    let side = p.box_side();

    let mut out = String::new();
    let _ = writeln!(out, "{}", p.box_edge(true, SAMPLE_WIDTH));
    for (styled, plain) in sample_lines(&p, theme).iter().zip(&plain) {
        let pad = SAMPLE_WIDTH.saturating_sub(plain.width() + 1);
        let _ = writeln!(out, "{side} {styled}{}{side}", " ".repeat(pad));
    }
    let _ = writeln!(out, "{}", p.box_edge(false, SAMPLE_WIDTH));
    out
}

/// Full preview of one theme: sample, status lines, progress bar and palette.
pub fn preview(theme: &Theme, color_output: bool) -> String {
    let p = Painter::new(theme, color_output);
    let mut out = sample(theme, color_output);

    let _ = writeln!(
        out,
        "  {} {}   {} {}   {} {}   {} {}",
        p.icon("✅", "[OK]"),
        p.paint(ColorSlot::Success, "success"),
        p.icon("⚠️", "[!]"),
        p.paint(ColorSlot::Warning, "warning"),
        p.icon("❌", "[X]"),
        p.paint(ColorSlot::Error, "error"),
        p.icon("ℹ️", "[i]"),
        p.paint(ColorSlot::Info, "info"),
    );
    let _ = writeln!(out, "  {} 60%", p.progress_bar(0.6, 20));
    let _ = writeln!(out, "  {}", p.highlight("highlighted passage"));
    let _ = writeln!(out, "{}", p.separator(SAMPLE_WIDTH + 2));

    for (slot, value) in theme.colors.iter() {
        let swatch = p.paint(slot, "■■");
        let _ = writeln!(out, "  {swatch} {:<15} {}", slot.as_str(), value);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;

    fn registry() -> (tempfile::TempDir, ThemeRegistry) {
        let dir = tempfile::tempdir().unwrap();
        let reg = ThemeRegistry::new(&dir.path().join("themes.json"));
        (dir, reg)
    }

    #[test]
    fn compare_lists_flags_per_theme() {
        let (_dir, reg) = registry();
        let out = compare(&reg, &["light".into(), "matrix".into()], false).unwrap();
        let rows: Vec<&str> = out.lines().collect();
        assert!(rows[2].starts_with("light"));
        assert!(rows[2].contains("yes     yes     no"));
        assert!(rows[3].starts_with("matrix"));
        assert!(rows[3].contains("yes     no      yes"));
        assert!(out.contains("LIGHT THEME"));
        assert!(out.contains("MATRIX THEME"));
    }

    #[test]
    fn compare_defaults_to_all_themes() {
        let (_dir, reg) = registry();
        let out = compare(&reg, &[], false).unwrap();
        for name in reg.list_themes() {
            assert!(out.contains(name.as_str()));
        }
    }

    #[test]
    fn compare_unknown_theme_fails() {
        let (_dir, reg) = registry();
        let err = compare(&reg, &["light".into(), "ghost".into()], false).unwrap_err();
        assert!(matches!(err, ThemeError::NotFound { .. }));
    }

    #[test]
    fn sample_box_is_closed_on_both_sides() {
        let (_dir, reg) = registry();
        for name in ["retro", "dark"] {
            let out = sample(reg.get_theme(name).unwrap(), false);
            let lines: Vec<&str> = out.lines().collect();
            assert_eq!(lines.len(), 6);
            for line in &lines {
                assert_eq!(line.width(), SAMPLE_WIDTH + 2, "{name}: {line}");
            }
        }
        let retro = sample(reg.get_theme("retro").unwrap(), false);
        assert!(retro.lines().skip(1).take(4).all(|l| l.starts_with("| ") && l.ends_with('|')));
    }

    #[test]
    fn preview_lists_every_slot() {
        let (_dir, reg) = registry();
        let out = preview(reg.get_theme("high_contrast").unwrap(), false);
        for slot in ColorSlot::ALL {
            assert!(out.contains(slot.as_str()));
        }
        assert!(out.contains("[OK] success"));
        assert!(out.contains("######"));
    }
}
