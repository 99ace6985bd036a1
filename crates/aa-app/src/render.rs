use std::path::Path;

use aa_ascii::{braille, colorize, console_log, luminance};
use aa_core::config::RenderConfig;
use aa_source::image::{LoadOptions, load_color_image, load_image};
use anyhow::Result;

/// Output flavour selected by the `braille` / `console_log` switches.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    /// Plain ramp characters.
    Ascii,
    /// Plain Braille dot-matrix.
    Braille,
    /// Ramp characters as colored `console.log` statements.
    ConsoleLog,
    /// Braille glyphs as colored `console.log` statements.
    BrailleConsoleLog,
}

impl Mode {
    #[must_use]
    pub fn from_config(config: &RenderConfig) -> Self {
        match (config.braille, config.console_log) {
            (true, true) => Self::BrailleConsoleLog,
            (false, true) => Self::ConsoleLog,
            (true, false) => Self::Braille,
            (false, false) => Self::Ascii,
        }
    }
}

/// Load `path` at `width` characters and render it as text.
///
/// # Errors
/// Propagates loading errors unchanged (see [`aa_source::image::load_color_image`]).
pub fn render(path: &Path, config: &RenderConfig, width: u16) -> Result<String> {
    let mode = Mode::from_config(config);
    let options = LoadOptions::new(u32::from(width)).with_aspect_correction(config.aspect_correction);
    log::debug!("mode {mode:?}, largeur {width}");

    let out = match mode {
        Mode::BrailleConsoleLog => {
            let image = load_color_image(path, &options.braille())?;
            console_log::format_as_console_log(&colorize::convert_braille_to_colored(&image, config.invert))
        }
        Mode::ConsoleLog => {
            let image = load_color_image(path, &options)?;
            let ramp = config.character_ramp();
            console_log::format_as_console_log(&colorize::convert_to_colored(&image, &ramp, config.invert))
        }
        Mode::Braille => {
            let image = load_image(path, &options.braille())?;
            braille::convert_to_braille(&image, config.invert).to_string()
        }
        Mode::Ascii => {
            let image = load_image(path, &options)?;
            let ramp = config.character_ramp();
            luminance::convert(&image, &ramp, config.invert).to_string()
        }
    };
    Ok(out)
}
