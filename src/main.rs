mod config;
mod editor;
mod error;
mod registry;
mod render;
mod theme;

use anyhow::{Context, bail};
use clap::{ArgAction, Parser, Subcommand};
use editor::ThemeEditor;
use registry::ThemeRegistry;
use std::path::PathBuf;
use theme::{BorderStyle, ColorSlot, FontRole, FontSize, NamedColor};

#[derive(Debug, Parser)]
#[command(
    name = "hue",
    version,
    about = "Terminal theme manager for the course runner",
    after_help = "Edit commands only accept custom themes; use `hue create` to copy a predefined one."
)]
struct Cli {
    /// Override config file path.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Override the custom theme store (themes.json) for this run.
    #[arg(long)]
    themes: Option<PathBuf>,

    /// Disable ANSI colors regardless of theme.
    #[arg(long)]
    no_color: bool,

    /// More log output (-v info, -vv debug).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// List themes (predefined first, then custom).
    List,
    /// Show every setting of a theme.
    Show { name: String },
    /// Make a theme the active one.
    Use { name: String },
    /// Create a custom theme copied from an existing one.
    Create {
        name: String,
        #[arg(long, default_value = theme::DEFAULT_THEME_NAME)]
        base: String,
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete a custom theme.
    Delete { name: String },
    /// Set one color slot (#RRGGBB, rgb(r, g, b) or a color name).
    SetColor {
        theme: String,
        slot: String,
        value: String,
    },
    /// Apply a named color preset.
    Preset { theme: String, preset: String },
    /// Set the font size (small, normal, large, extra_large).
    FontSize { theme: String, size: FontSize },
    /// Set the header size multiplier (0.8 to 3.0).
    HeaderMultiplier {
        theme: String,
        #[arg(allow_negative_numbers = true)]
        value: f64,
    },
    /// Set the code or ui font family.
    FontFamily {
        theme: String,
        role: FontRole,
        family: String,
    },
    /// Toggle emoji use (ASCII mode follows).
    ToggleEmojis { theme: String },
    /// Toggle color output for a theme.
    ToggleColors { theme: String },
    /// Set the border style (single, double, rounded, heavy, ascii).
    Border { theme: String, style: BorderStyle },
    /// Set the separator glyph.
    Separator { theme: String, glyph: String },
    /// Set the progress bar glyphs.
    ProgressChars {
        theme: String,
        filled: String,
        empty: String,
    },
    /// Compare themes side by side (all themes when none given).
    Compare { names: Vec<String> },
    /// Preview a theme (active theme by default).
    Preview { name: Option<String> },
    /// List color slots and accepted color names.
    Slots,
    /// List color presets.
    Presets,
    /// Print a theme as JSON.
    Export { name: String },
}

struct Session {
    cfg: config::Config,
    cfg_override: Option<PathBuf>,
    registry: ThemeRegistry,
    /// Set when the store could not be read; saving would clobber it.
    store_degraded: bool,
    color: bool,
}

impl Session {
    fn open(cli: &Cli) -> anyhow::Result<Self> {
        let cfg = config::load(cli.config.as_deref()).context("load config")?;
        let themes_path = cli
            .themes
            .clone()
            .unwrap_or_else(|| cfg.paths.themes_file.clone());

        let mut registry = ThemeRegistry::new(&themes_path);
        let mut store_degraded = false;
        match registry.load() {
            Ok(count) => tracing::debug!(count, "custom themes restored"),
            Err(e) => {
                tracing::warn!(error = %e, "continuing with predefined themes only");
                eprintln!("warning: {e}; custom themes are unavailable this session");
                store_degraded = true;
            }
        }

        if let Err(e) = registry.set_active(&cfg.theme.name) {
            tracing::warn!(error = %e, "configured theme missing; using {}", registry.active_name());
        }

        let color = cfg.ui.color && !cli.no_color;
        Ok(Self {
            cfg,
            cfg_override: cli.config.clone(),
            registry,
            store_degraded,
            color,
        })
    }

    fn save_store(&self) -> anyhow::Result<()> {
        if self.store_degraded {
            bail!(
                "theme store {} is corrupt; fix or remove it before saving",
                self.registry.store_path().display()
            );
        }
        self.registry.save().context("save themes")?;
        Ok(())
    }

    /// Editor for `theme`, refused for predefined themes.
    fn edit(&mut self, theme: &str) -> anyhow::Result<ThemeEditor<'_>> {
        ensure_editable(&self.registry, theme)?;
        Ok(self.editor())
    }

    fn save_active(&mut self) -> anyhow::Result<()> {
        self.cfg.theme.name = self.registry.active_name().to_string();
        config::save(&self.cfg, self.cfg_override.as_deref()).context("save config")
    }

    fn editor(&mut self) -> ThemeEditor<'_> {
        ThemeEditor::new(&mut self.registry)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => tracing::Level::WARN,
        1 => tracing::Level::INFO,
        _ => tracing::Level::DEBUG,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .init();

    let mut session = Session::open(&cli)?;

    match cli.command.unwrap_or(Command::Preview { name: None }) {
        Command::List => {
            let reg = &session.registry;
            for name in reg.list_themes() {
                let theme = reg.get_theme(name)?;
                let marker = if name == reg.active_name() { "*" } else { " " };
                println!("{marker} {:<16} {:<13} {}", name, theme.kind.as_str(), theme.description);
            }
            let custom = reg.custom_names().count();
            println!();
            println!("{custom} custom theme(s) in {}", reg.store_path().display());
        }
        Command::Show { name } => {
            let theme = session.registry.get_theme(&name)?;
            print_settings(theme);
            println!();
            print!("{}", render::preview(theme, session.color));
        }
        Command::Use { name } => {
            session.registry.set_active(&name)?;
            session.save_active()?;
            println!("Active theme: {name}");
        }
        Command::Create {
            name,
            base,
            description,
        } => {
            let mut editor = session.editor();
            let name = editor.create_custom(&name, &base, description.as_deref())?;
            let description = editor.registry().get_theme(&name)?.description.clone();
            session.save_store()?;
            println!("Created `{name}` from `{base}`: {description}");
        }
        Command::Delete { name } => {
            session.registry.delete_custom(&name)?;
            session.save_store()?;
            if session.cfg.theme.name == name {
                session.save_active()?;
            }
            println!("Deleted `{name}`.");
        }
        Command::SetColor { theme, slot, value } => {
            session.edit(&theme)?.set_color(&theme, &slot, &value)?;
            session.save_store()?;
            println!("{theme}.{slot} = {value}");
        }
        Command::Preset { theme, preset } => {
            let applied = session.edit(&theme)?.apply_preset(&theme, &preset)?;
            session.save_store()?;
            println!("Applied `{preset}` to `{theme}` ({applied} colors).");
        }
        Command::FontSize { theme, size } => {
            session.edit(&theme)?.set_font_size(&theme, size)?;
            session.save_store()?;
            println!("{theme} font size = {size}");
        }
        Command::HeaderMultiplier { theme, value } => {
            session.edit(&theme)?.set_header_multiplier(&theme, value)?;
            session.save_store()?;
            println!("{theme} header multiplier = {value}");
        }
        Command::FontFamily {
            theme,
            role,
            family,
        } => {
            session.edit(&theme)?.set_font_family(&theme, role, &family)?;
            session.save_store()?;
            println!("{theme} font updated: {family}");
        }
        Command::ToggleEmojis { theme } => {
            let on = session.edit(&theme)?.toggle_emojis(&theme)?;
            session.save_store()?;
            println!("{theme}: emojis {}, ascii mode {}", on_off(on), on_off(!on));
        }
        Command::ToggleColors { theme } => {
            let on = session.edit(&theme)?.toggle_colors(&theme)?;
            session.save_store()?;
            println!("{theme}: colors {}", on_off(on));
        }
        Command::Border { theme, style } => {
            session.edit(&theme)?.set_border_style(&theme, style)?;
            session.save_store()?;
            println!("{theme} border = {style}");
        }
        Command::Separator { theme, glyph } => {
            session.edit(&theme)?.set_separator(&theme, &glyph)?;
            session.save_store()?;
            println!("{theme} separator = {glyph}");
        }
        Command::ProgressChars {
            theme,
            filled,
            empty,
        } => {
            session.edit(&theme)?.set_progress_chars(&theme, &filled, &empty)?;
            session.save_store()?;
            println!("{theme} progress = {filled}{empty}");
        }
        Command::Compare { names } => {
            print!("{}", render::compare(&session.registry, &names, session.color)?);
        }
        Command::Preview { name } => {
            let theme = match name.as_deref() {
                Some(name) => session.registry.get_theme(name)?,
                None => session.registry.active(),
            };
            print!("{}", render::preview(theme, session.color));
        }
        Command::Slots => {
            let slots: Vec<&str> = ColorSlot::ALL.iter().map(|s| s.as_str()).collect();
            let names: Vec<&str> = NamedColor::ALL.iter().map(|c| c.name()).collect();
            println!("Slots: {}", slots.join(", "));
            println!("Named colors: {}", names.join(", "));
            println!("Also accepted: #RRGGBB, rgb(r, g, b)");
        }
        Command::Presets => {
            for preset in editor::PRESETS {
                println!("{:<12} {}", preset.name, preset.description);
            }
        }
        Command::Export { name } => {
            let theme = session.registry.get_theme(&name)?;
            println!("{}", serde_json::to_string_pretty(theme)?);
        }
    }

    Ok(())
}

/// Only custom themes are persisted, so only they accept edits.
fn ensure_editable(registry: &ThemeRegistry, theme: &str) -> anyhow::Result<()> {
    if !registry.is_custom(theme)? {
        bail!("`{theme}` is predefined and read-only; copy it first with `hue create <name> --base {theme}`");
    }
    Ok(())
}

fn on_off(flag: bool) -> &'static str {
    if flag { "on" } else { "off" }
}

fn print_settings(theme: &theme::Theme) {
    println!("{} ({})", theme.name, theme.kind);
    if !theme.description.is_empty() {
        println!("  {}", theme.description);
    }
    println!(
        "  colors {}  emojis {}  ascii {}",
        on_off(theme.use_colors),
        on_off(theme.use_emojis),
        on_off(theme.ascii_mode())
    );
    println!(
        "  font {} x{:.2}  code: {}  ui: {}",
        theme.fonts.size,
        theme.fonts.header_multiplier,
        theme.fonts.family(FontRole::Code),
        theme.fonts.family(FontRole::Ui)
    );
    println!(
        "  border {}  separator {}  progress {}{}",
        theme.border_style, theme.separator_char, theme.progress_chars.0, theme.progress_chars.1
    );
    for (slot, value) in theme.colors.iter() {
        println!("  {:<15} {:<20} {}", slot.as_str(), value, value.to_hex());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn predefined_themes_are_read_only_from_the_cli() {
        let dir = tempfile::tempdir().unwrap();
        let mut reg = ThemeRegistry::new(&dir.path().join("themes.json"));
        let err = ensure_editable(&reg, "dark").unwrap_err();
        assert!(err.to_string().contains("hue create"));
        assert!(ensure_editable(&reg, "ghost").is_err());

        reg.create_custom("mine", "dark").unwrap();
        ensure_editable(&reg, "mine").unwrap();
    }
}
