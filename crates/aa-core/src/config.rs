use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::charset::{CharacterRamp, RampPreset};
use crate::error::CoreError;

/// Narrowest accepted output, in characters.
pub const MIN_WIDTH: u16 = 10;
/// Widest accepted output, in characters.
pub const MAX_WIDTH: u16 = 300;
/// Terminal cells are roughly twice as tall as wide.
pub const ASPECT_CORRECTION: f64 = 0.45;

/// Configuration complète du rendu.
///
/// Chargée depuis TOML via [`load_config`]. Chaque champ a une valeur par défaut saine.
///
/// # Example
/// ```
/// use aa_core::config::RenderConfig;
/// let config = RenderConfig::default();
/// assert!(!config.braille);
/// assert_eq!(config.width, None);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RenderConfig {
    /// Output width in characters. `None` = terminal width.
    pub width: Option<u16>,
    /// Inverser la luminance (pour fond clair).
    pub invert: bool,
    /// Custom ramp, darkest → lightest. Takes priority over `ramp`.
    pub charset: Option<String>,
    /// Built-in ramp used when `charset` is unset.
    pub ramp: RampPreset,
    /// Braille dot-matrix mode (2×4 pixels per glyph).
    pub braille: bool,
    /// Emit colored `console.log` statements instead of plain text.
    pub console_log: bool,
    /// Vertical squash applied when computing the output height.
    pub aspect_correction: f64,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: None,
            invert: false,
            charset: None,
            ramp: RampPreset::Default,
            braille: false,
            console_log: false,
            aspect_correction: ASPECT_CORRECTION,
        }
    }
}

impl RenderConfig {
    /// Clamp all numeric fields to their valid ranges.
    /// Called after TOML deserialization to prevent out-of-range values.
    pub fn clamp_all(&mut self) {
        if let Some(w) = self.width {
            self.width = Some(clamp_width(i64::from(w)));
        }
        self.aspect_correction = self.aspect_correction.clamp(0.1, 4.0);
    }

    /// Ramp selected by this configuration.
    ///
    /// # Example
    /// ```
    /// use aa_core::config::RenderConfig;
    /// let config = RenderConfig { charset: Some("#. ".into()), ..Default::default() };
    /// assert_eq!(config.character_ramp().len(), 3);
    /// ```
    #[must_use]
    pub fn character_ramp(&self) -> CharacterRamp {
        match self.charset.as_deref() {
            Some(s) if !s.is_empty() => CharacterRamp::from_string(Some(s)),
            _ => CharacterRamp::preset(self.ramp),
        }
    }
}

/// Clamp a requested width into [`MIN_WIDTH`, `MAX_WIDTH`].
///
/// Any integer is accepted, negative or far beyond `u16`.
///
/// # Example
/// ```
/// use aa_core::config::clamp_width;
/// assert_eq!(clamp_width(4), 10);
/// assert_eq!(clamp_width(-5), 10);
/// assert_eq!(clamp_width(70_000), 300);
/// assert_eq!(clamp_width(120), 120);
/// ```
#[must_use]
pub fn clamp_width(width: i64) -> u16 {
    let clamped = width.clamp(i64::from(MIN_WIDTH), i64::from(MAX_WIDTH)) as u16;
    if i64::from(clamped) != width {
        log::warn!("width {width} hors limites, ramené à {clamped}");
    }
    clamped
}

/// Structure TOML intermédiaire pour désérialisation avec valeurs optionnelles.
#[derive(Deserialize)]
struct ConfigFile {
    render: Option<RenderSection>,
}

/// Render section of the TOML config, all fields optional for partial override.
#[derive(Deserialize)]
struct RenderSection {
    width: Option<i64>,
    invert: Option<bool>,
    charset: Option<String>,
    ramp: Option<RampPreset>,
    braille: Option<bool>,
    console_log: Option<bool>,
    aspect_correction: Option<f64>,
}

/// Charge un fichier TOML et fusionne avec les valeurs par défaut.
///
/// # Errors
/// Returns an error if the file cannot be read or parsed, or if
/// `aspect_correction` is not a finite positive number.
///
/// # Example
/// ```no_run
/// use aa_core::config::load_config;
/// use std::path::Path;
/// let config = load_config(Path::new("config/default.toml")).unwrap();
/// ```
pub fn load_config(path: &Path) -> Result<RenderConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Impossible de lire {}", path.display()))?;
    parse_config(&content).with_context(|| format!("Configuration invalide dans {}", path.display()))
}

/// Parse TOML text into a config merged over the defaults.
///
/// # Errors
/// Returns an error on malformed TOML or a non-positive aspect correction.
///
/// # Example
/// ```
/// use aa_core::config::parse_config;
/// let config = parse_config("[render]\nbraille = true\n").unwrap();
/// assert!(config.braille);
/// assert!(!config.invert);
/// ```
pub fn parse_config(content: &str) -> Result<RenderConfig> {
    let file: ConfigFile = toml::from_str(content).context("Erreur de parsing TOML")?;

    let mut config = RenderConfig::default();
    let Some(r) = file.render else {
        return Ok(config);
    };

    if let Some(v) = r.width {
        config.width = Some(clamp_width(v));
    }
    if let Some(v) = r.invert {
        config.invert = v;
    }
    if let Some(v) = r.charset {
        config.charset = Some(v);
    }
    if let Some(v) = r.ramp {
        config.ramp = v;
    }
    if let Some(v) = r.braille {
        config.braille = v;
    }
    if let Some(v) = r.console_log {
        config.console_log = v;
    }
    if let Some(v) = r.aspect_correction {
        if !v.is_finite() || v <= 0.0 {
            return Err(CoreError::Config(format!("aspect_correction doit être > 0 (reçu {v})")).into());
        }
        config.aspect_correction = v;
    }

    config.clamp_all();
    Ok(config)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        assert_eq!(parse_config("").unwrap(), RenderConfig::default());
    }

    #[test]
    fn partial_section_overrides_only_given_fields() {
        let config = parse_config("[render]\ninvert = true\nramp = \"simple\"\n").unwrap();
        assert!(config.invert);
        assert_eq!(config.ramp, RampPreset::Simple);
        assert!(!config.console_log);
        assert!((config.aspect_correction - ASPECT_CORRECTION).abs() < f64::EPSILON);
    }

    #[test]
    fn width_is_clamped() {
        let config = parse_config("[render]\nwidth = 2\n").unwrap();
        assert_eq!(config.width, Some(MIN_WIDTH));
        let config = parse_config("[render]\nwidth = 5000\n").unwrap();
        assert_eq!(config.width, Some(MAX_WIDTH));
        let config = parse_config("[render]\nwidth = 70000\n").unwrap();
        assert_eq!(config.width, Some(MAX_WIDTH));
        let config = parse_config("[render]\nwidth = -5\n").unwrap();
        assert_eq!(config.width, Some(MIN_WIDTH));
    }

    #[test]
    fn non_positive_aspect_is_rejected() {
        assert!(parse_config("[render]\naspect_correction = 0.0\n").is_err());
        assert!(parse_config("[render]\naspect_correction = -1.0\n").is_err());
    }

    #[test]
    fn malformed_toml_is_an_error() {
        assert!(parse_config("[render\nwidth = ").is_err());
    }

    #[test]
    fn charset_wins_over_preset() {
        let config = parse_config("[render]\ncharset = \"ab\"\nramp = \"blocks\"\n").unwrap();
        assert_eq!(config.character_ramp().characters(), &['a', 'b']);
    }

    #[test]
    fn empty_charset_falls_back_to_preset() {
        let config = parse_config("[render]\ncharset = \"\"\nramp = \"blocks\"\n").unwrap();
        assert_eq!(config.character_ramp().len(), 5);
    }

    #[test]
    fn load_config_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[render]\nbraille = true\nconsole_log = true\nwidth = 80").unwrap();
        let config = load_config(file.path()).unwrap();
        assert!(config.braille);
        assert!(config.console_log);
        assert_eq!(config.width, Some(80));
    }

    #[test]
    fn load_config_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_config(&dir.path().join("absent.toml")).is_err());
    }
}
