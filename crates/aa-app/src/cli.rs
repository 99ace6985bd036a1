use std::path::PathBuf;

use aa_core::charset::RampPreset;
use aa_core::config::{RenderConfig, clamp_width};
use clap::Parser;

/// Largeur utilisée quand le terminal ne répond pas.
const FALLBACK_TERMINAL_WIDTH: u16 = 80;

/// ascii-art — Convert images to ASCII art.
#[derive(Parser, Debug)]
#[command(name = "ascii-art", version, about = "Convert images to ASCII art", long_about = None)]
pub struct Cli {
    /// Path to image file.
    pub image: PathBuf,

    /// Output width in characters (default: terminal width), clamped to 10..=300.
    #[arg(short, long, allow_negative_numbers = true)]
    pub width: Option<i64>,

    /// Invert brightness (for light backgrounds).
    #[arg(long, default_value_t = false)]
    pub invert: bool,

    /// Custom character ramp (dark to light).
    #[arg(long)]
    pub chars: Option<String>,

    /// Built-in ramp: default, simple, blocks.
    #[arg(long, value_parser = parse_ramp)]
    pub ramp: Option<RampPreset>,

    /// Use braille characters for higher resolution.
    #[arg(long, default_value_t = false)]
    pub braille: bool,

    /// Output as colored JavaScript console.log statements.
    #[arg(long, default_value_t = false)]
    pub console_log: bool,

    /// Fichier de configuration TOML. Défaut : config/default.toml.
    #[arg(short, long, default_value = "config/default.toml")]
    pub config: PathBuf,

    /// Niveau de log : error, warn, info, debug, trace.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

fn parse_ramp(value: &str) -> Result<RampPreset, String> {
    match value.to_ascii_lowercase().as_str() {
        "default" => Ok(RampPreset::Default),
        "simple" => Ok(RampPreset::Simple),
        "blocks" => Ok(RampPreset::Blocks),
        other => Err(format!("rampe inconnue '{other}' (default, simple, blocks)")),
    }
}

impl Cli {
    /// Apply command-line overrides on top of the file configuration.
    ///
    /// Flags only switch features on; a flag left off keeps the file value.
    pub fn apply_overrides(&self, config: &mut RenderConfig) {
        if let Some(w) = self.width {
            config.width = Some(clamp_width(w));
        }
        if let Some(ref chars) = self.chars {
            config.charset = Some(chars.clone());
        }
        if let Some(ramp) = self.ramp {
            config.ramp = ramp;
        }
        config.invert |= self.invert;
        config.braille |= self.braille;
        config.console_log |= self.console_log;
    }
}

/// Output width: explicit value, else the terminal width, clamped.
#[must_use]
pub fn resolve_width(requested: Option<u16>) -> u16 {
    let width = requested.unwrap_or_else(|| {
        crossterm::terminal::size().map_or(FALLBACK_TERMINAL_WIDTH, |(cols, _rows)| cols)
    });
    clamp_width(i64::from(width))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_all_flags() {
        let cli = Cli::try_parse_from([
            "ascii-art",
            "photo.png",
            "-w",
            "120",
            "--invert",
            "--chars",
            "@. ",
            "--braille",
            "--console-log",
        ])
        .unwrap();
        assert_eq!(cli.image, PathBuf::from("photo.png"));
        assert_eq!(cli.width, Some(120));
        assert!(cli.invert && cli.braille && cli.console_log);
        assert_eq!(cli.chars.as_deref(), Some("@. "));
    }

    #[test]
    fn image_is_required() {
        assert!(Cli::try_parse_from(["ascii-art"]).is_err());
    }

    #[test]
    fn ramp_parser_rejects_unknown() {
        assert!(Cli::try_parse_from(["ascii-art", "x.png", "--ramp", "simple"]).is_ok());
        assert!(Cli::try_parse_from(["ascii-art", "x.png", "--ramp", "neon"]).is_err());
    }

    #[test]
    fn overrides_layer_on_config() {
        let cli = Cli::try_parse_from(["ascii-art", "x.png", "--braille", "--ramp", "blocks"]).unwrap();
        let mut config = RenderConfig {
            invert: true,
            width: Some(50),
            ..RenderConfig::default()
        };
        cli.apply_overrides(&mut config);
        assert!(config.braille);
        assert!(config.invert);
        assert_eq!(config.width, Some(50));
        assert_eq!(config.ramp, RampPreset::Blocks);
    }

    #[test]
    fn out_of_range_width_is_accepted_then_clamped() {
        for (arg, expected) in [("70000", 300), ("-5", 10), ("0", 10), ("150", 150)] {
            let cli = Cli::try_parse_from(["ascii-art", "x.png", "-w", arg]).unwrap();
            let mut config = RenderConfig::default();
            cli.apply_overrides(&mut config);
            assert_eq!(config.width, Some(expected), "-w {arg}");
            assert_eq!(resolve_width(config.width), expected);
        }
    }

    #[test]
    fn explicit_width_is_clamped() {
        assert_eq!(resolve_width(Some(3)), 10);
        assert_eq!(resolve_width(Some(999)), 300);
        assert_eq!(resolve_width(Some(64)), 64);
    }
}
