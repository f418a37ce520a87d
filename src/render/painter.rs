//! Turns a theme's abstract colors and flags into terminal output.

use crate::theme::{ColorSlot, ColorValue, NamedColor, ParsedColor, Theme};
use crossterm::style::{Color, Stylize};

pub fn to_terminal_color(value: &ColorValue) -> Color {
    match value.parsed() {
        ParsedColor::Rgb(r, g, b) => Color::Rgb { r, g, b },
        ParsedColor::Named(named) => match named {
            NamedColor::Black => Color::Black,
            NamedColor::Red => Color::Red,
            NamedColor::Green => Color::Green,
            NamedColor::Yellow => Color::Yellow,
            NamedColor::Blue => Color::Blue,
            NamedColor::Magenta => Color::Magenta,
            NamedColor::Cyan => Color::Cyan,
            NamedColor::White => Color::White,
            NamedColor::Gray => Color::Grey,
            NamedColor::DarkGray => Color::DarkGrey,
            NamedColor::DarkRed => Color::DarkRed,
            NamedColor::DarkGreen => Color::DarkGreen,
            NamedColor::DarkYellow => Color::DarkYellow,
            NamedColor::DarkBlue => Color::DarkBlue,
            NamedColor::DarkMagenta => Color::DarkMagenta,
            NamedColor::DarkCyan => Color::DarkCyan,
        },
    }
}

pub struct Painter<'a> {
    theme: &'a Theme,
    colored: bool,
}

impl<'a> Painter<'a> {
    /// `color_output` is the global switch; the theme's own `use_colors` must
    /// also be on for any escape codes to be emitted.
    pub fn new(theme: &'a Theme, color_output: bool) -> Self {
        Self {
            theme,
            colored: color_output && theme.use_colors,
        }
    }

    pub fn color(&self, slot: ColorSlot) -> Color {
        to_terminal_color(self.theme.colors.get(slot))
    }

    pub fn paint(&self, slot: ColorSlot, text: &str) -> String {
        if !self.colored {
            return text.to_string();
        }
        text.with(self.color(slot)).to_string()
    }

    pub fn header(&self, text: &str) -> String {
        let text = if self.theme.fonts.header_multiplier >= 1.5 {
            text.to_uppercase()
        } else {
            text.to_string()
        };
        if !self.colored {
            return text;
        }
        text.with(self.color(ColorSlot::Primary)).bold().to_string()
    }

    pub fn code(&self, text: &str) -> String {
        if !self.colored {
            return format!("`{text}`");
        }
        format!(" {text} ")
            .with(self.color(ColorSlot::CodeText))
            .on(self.color(ColorSlot::CodeBg))
            .to_string()
    }

    pub fn highlight(&self, text: &str) -> String {
        if !self.colored {
            return text.to_string();
        }
        text.on(self.color(ColorSlot::Highlight)).to_string()
    }

    /// Emoji when the theme allows it, otherwise the ASCII fallback.
    pub fn icon<'s>(&self, emoji: &'s str, ascii: &'s str) -> &'s str {
        if self.theme.use_emojis { emoji } else { ascii }
    }

    pub fn separator(&self, width: usize) -> String {
        self.paint(ColorSlot::Border, &self.theme.separator_char.repeat(width))
    }

    pub fn progress_bar(&self, ratio: f64, width: usize) -> String {
        let ratio = if ratio.is_nan() { 0.0 } else { ratio.clamp(0.0, 1.0) };
        let filled = ((ratio * width as f64).round() as usize).min(width);
        let (full, empty) = &self.theme.progress_chars;
        format!(
            "{}{}",
            self.paint(ColorSlot::Success, &full.repeat(filled)),
            self.paint(ColorSlot::TextMuted, &empty.repeat(width - filled)),
        )
    }

    pub fn box_side(&self) -> String {
        self.paint(ColorSlot::Border, self.theme.border_style.to_border_set().vertical)
    }

    /// Horizontal box edge of `width` inner cells.
    pub fn box_edge(&self, top: bool, width: usize) -> String {
        let set = self.theme.border_style.to_border_set();
        let (left, right) = if top {
            (set.top_left, set.top_right)
        } else {
            (set.bottom_left, set.bottom_right)
        };
        self.paint(
            ColorSlot::Border,
            &format!("{left}{}{right}", set.horizontal.repeat(width)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::theme::builtin;

    #[test]
    fn plain_output_without_colors() {
        let theme = builtin::dark();
        let painter = Painter::new(&theme, false);
        assert_eq!(painter.paint(ColorSlot::Error, "boom"), "boom");
        assert_eq!(painter.code("x = 1"), "`x = 1`");
        assert_eq!(painter.header("Lesson"), "LESSON");
    }

    #[test]
    fn theme_flag_disables_color() {
        let mut theme = builtin::dark();
        theme.use_colors = false;
        let painter = Painter::new(&theme, true);
        assert_eq!(painter.paint(ColorSlot::Accent, "plain"), "plain");
        assert_eq!(painter.separator(3), "───");
    }

    #[test]
    fn progress_bar_uses_theme_glyphs() {
        let theme = builtin::retro();
        let painter = Painter::new(&theme, false);
        assert_eq!(painter.progress_bar(0.5, 10), "=====.....");
        assert_eq!(painter.progress_bar(2.0, 4), "====");
        assert_eq!(painter.progress_bar(-1.0, 4), "....");
    }

    #[test]
    fn icon_follows_emoji_flag() {
        let light = builtin::light();
        let matrix = builtin::matrix();
        assert_eq!(Painter::new(&light, false).icon("✅", "[ok]"), "✅");
        assert_eq!(Painter::new(&matrix, false).icon("✅", "[ok]"), "[ok]");
    }

    #[test]
    fn named_colors_map_to_terminal_colors() {
        let value = ColorValue::named(NamedColor::DarkGray);
        assert_eq!(to_terminal_color(&value), Color::DarkGrey);
        let value = ColorValue::hex(1, 2, 3);
        assert_eq!(to_terminal_color(&value), Color::Rgb { r: 1, g: 2, b: 3 });
    }

    #[test]
    fn box_edges_follow_border_style() {
        let theme = builtin::retro();
        let painter = Painter::new(&theme, false);
        assert_eq!(painter.box_edge(true, 3), "+---+");
    }
}
