//! Predefined themes, rebuilt from code on every start and never persisted.

use super::{
    BorderStyle, ColorScheme, ColorValue, FontConfig, FontSize, NamedColor, Theme, ThemeKind,
};

/// Predefined theme names in declaration order.
pub const PREDEFINED: [&str; 5] = ["light", "dark", "high_contrast", "retro", "matrix"];

pub fn all() -> Vec<Theme> {
    vec![light(), dark(), high_contrast(), retro(), matrix()]
}

pub fn light() -> Theme {
    Theme {
        name: "light".to_string(),
        kind: ThemeKind::Light,
        description: "Clean, bright theme for well-lit rooms".to_string(),
        colors: ColorScheme {
            primary: ColorValue::hex(0x25, 0x63, 0xeb),
            secondary: ColorValue::hex(0x7c, 0x3a, 0xed),
            accent: ColorValue::hex(0xdb, 0x27, 0x77),
            success: ColorValue::hex(0x16, 0xa3, 0x4a),
            warning: ColorValue::hex(0xd9, 0x77, 0x06),
            error: ColorValue::hex(0xdc, 0x26, 0x26),
            info: ColorValue::hex(0x08, 0x91, 0xb2),
            background: ColorValue::hex(0xff, 0xff, 0xff),
            surface: ColorValue::hex(0xf8, 0xfa, 0xfc),
            border: ColorValue::hex(0xe2, 0xe8, 0xf0),
            text_primary: ColorValue::hex(0x1e, 0x29, 0x3b),
            text_secondary: ColorValue::hex(0x47, 0x55, 0x69),
            text_muted: ColorValue::hex(0x94, 0xa3, 0xb8),
            code_bg: ColorValue::hex(0xf1, 0xf5, 0xf9),
            code_text: ColorValue::hex(0x0f, 0x17, 0x2a),
            highlight: ColorValue::hex(0xfe, 0xf0, 0x8a),
        },
        fonts: FontConfig::default(),
        use_colors: true,
        use_emojis: true,
        border_style: BorderStyle::Single,
        separator_char: "─".to_string(),
        progress_chars: ("█".to_string(), "░".to_string()),
    }
}

pub fn dark() -> Theme {
    Theme {
        name: "dark".to_string(),
        kind: ThemeKind::Dark,
        description: "Low-glare theme for long sessions".to_string(),
        colors: ColorScheme {
            primary: ColorValue::hex(0x60, 0xa5, 0xfa),
            secondary: ColorValue::hex(0xa7, 0x8b, 0xfa),
            accent: ColorValue::hex(0xf4, 0x72, 0xb6),
            success: ColorValue::hex(0x4a, 0xde, 0x80),
            warning: ColorValue::hex(0xfb, 0xbf, 0x24),
            error: ColorValue::hex(0xf8, 0x71, 0x71),
            info: ColorValue::hex(0x22, 0xd3, 0xee),
            background: ColorValue::hex(0x0f, 0x17, 0x2a),
            surface: ColorValue::hex(0x1e, 0x29, 0x3b),
            border: ColorValue::hex(0x33, 0x41, 0x55),
            text_primary: ColorValue::hex(0xf1, 0xf5, 0xf9),
            text_secondary: ColorValue::hex(0xcb, 0xd5, 0xe1),
            text_muted: ColorValue::hex(0x64, 0x74, 0x8b),
            code_bg: ColorValue::hex(0x02, 0x06, 0x17),
            code_text: ColorValue::hex(0xe2, 0xe8, 0xf0),
            highlight: ColorValue::hex(0x85, 0x4d, 0x0e),
        },
        fonts: FontConfig::default(),
        use_colors: true,
        use_emojis: true,
        border_style: BorderStyle::Rounded,
        separator_char: "─".to_string(),
        progress_chars: ("█".to_string(), "░".to_string()),
    }
}

pub fn high_contrast() -> Theme {
    Theme {
        name: "high_contrast".to_string(),
        kind: ThemeKind::HighContrast,
        description: "Maximum contrast for accessibility".to_string(),
        colors: ColorScheme {
            primary: ColorValue::named(NamedColor::White),
            secondary: ColorValue::named(NamedColor::Yellow),
            accent: ColorValue::named(NamedColor::Cyan),
            success: ColorValue::named(NamedColor::Green),
            warning: ColorValue::named(NamedColor::Yellow),
            error: ColorValue::named(NamedColor::Red),
            info: ColorValue::named(NamedColor::Cyan),
            background: ColorValue::named(NamedColor::Black),
            surface: ColorValue::named(NamedColor::Black),
            border: ColorValue::named(NamedColor::White),
            text_primary: ColorValue::named(NamedColor::White),
            text_secondary: ColorValue::named(NamedColor::White),
            text_muted: ColorValue::named(NamedColor::Gray),
            code_bg: ColorValue::named(NamedColor::Black),
            code_text: ColorValue::named(NamedColor::Yellow),
            highlight: ColorValue::named(NamedColor::Magenta),
        },
        fonts: FontConfig {
            size: FontSize::Large,
            header_multiplier: 2.0,
            ..FontConfig::default()
        },
        use_colors: true,
        use_emojis: false,
        border_style: BorderStyle::Heavy,
        separator_char: "=".to_string(),
        progress_chars: ("#".to_string(), "-".to_string()),
    }
}

pub fn retro() -> Theme {
    Theme {
        name: "retro".to_string(),
        kind: ThemeKind::Retro,
        description: "Amber phosphor terminal from the 80s".to_string(),
        colors: ColorScheme {
            primary: ColorValue::hex(0xff, 0xb0, 0x00),
            secondary: ColorValue::hex(0xff, 0xcc, 0x66),
            accent: ColorValue::hex(0xff, 0x80, 0x00),
            success: ColorValue::hex(0xcc, 0xff, 0x66),
            warning: ColorValue::hex(0xff, 0xd7, 0x00),
            error: ColorValue::hex(0xff, 0x55, 0x33),
            info: ColorValue::hex(0xff, 0xc8, 0x57),
            background: ColorValue::hex(0x1a, 0x10, 0x00),
            surface: ColorValue::hex(0x2b, 0x1b, 0x00),
            border: ColorValue::hex(0x80, 0x58, 0x00),
            text_primary: ColorValue::hex(0xff, 0xb0, 0x00),
            text_secondary: ColorValue::hex(0xcc, 0x8c, 0x00),
            text_muted: ColorValue::hex(0x80, 0x58, 0x00),
            code_bg: ColorValue::hex(0x10, 0x0a, 0x00),
            code_text: ColorValue::hex(0xff, 0xcc, 0x66),
            highlight: ColorValue::hex(0x4d, 0x33, 0x00),
        },
        fonts: FontConfig {
            code_font: "VT323".to_string(),
            ui_font: "VT323".to_string(),
            ..FontConfig::default()
        },
        use_colors: true,
        use_emojis: false,
        border_style: BorderStyle::Ascii,
        separator_char: "-".to_string(),
        progress_chars: ("=".to_string(), ".".to_string()),
    }
}

pub fn matrix() -> Theme {
    Theme {
        name: "matrix".to_string(),
        kind: ThemeKind::Matrix,
        description: "Green-on-black digital rain".to_string(),
        colors: ColorScheme {
            primary: ColorValue::hex(0x00, 0xff, 0x41),
            secondary: ColorValue::hex(0x00, 0x8f, 0x11),
            accent: ColorValue::hex(0x39, 0xff, 0x14),
            success: ColorValue::hex(0x00, 0xff, 0x41),
            warning: ColorValue::hex(0xad, 0xff, 0x2f),
            error: ColorValue::named(NamedColor::Red),
            info: ColorValue::hex(0x00, 0x8f, 0x11),
            background: ColorValue::named(NamedColor::Black),
            surface: ColorValue::hex(0x0d, 0x0d, 0x0d),
            border: ColorValue::hex(0x00, 0x3b, 0x00),
            text_primary: ColorValue::hex(0x00, 0xff, 0x41),
            text_secondary: ColorValue::hex(0x00, 0xcc, 0x33),
            text_muted: ColorValue::named(NamedColor::DarkGreen),
            code_bg: ColorValue::named(NamedColor::Black),
            code_text: ColorValue::hex(0x00, 0xff, 0x41),
            highlight: ColorValue::hex(0x00, 0x3b, 0x00),
        },
        fonts: FontConfig {
            code_font: "Courier New".to_string(),
            ..FontConfig::default()
        },
        use_colors: true,
        use_emojis: false,
        border_style: BorderStyle::Double,
        separator_char: "═".to_string(),
        progress_chars: ("▓".to_string(), "░".to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn names_match_declaration_order() {
        let names: Vec<String> = all().into_iter().map(|t| t.name).collect();
        assert_eq!(names, PREDEFINED);
    }

    #[test]
    fn predefined_themes_are_valid() {
        for theme in all() {
            assert!(theme.kind.is_predefined());
            theme.validate().unwrap();
        }
    }
}
