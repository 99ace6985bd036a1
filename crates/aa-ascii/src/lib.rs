/// Pixel → glyph conversion engine for ascii-art.
///
/// Converts brightness and color buffers to ramp or Braille character
/// grids, and formats colored grids as styled console output.
pub mod braille;
pub mod colorize;
pub mod console_log;
pub mod luminance;

pub use braille::convert_to_braille;
pub use colorize::{convert_braille_to_colored, convert_to_colored};
pub use console_log::format_as_console_log;
pub use luminance::convert;
