/// Shared types, color math, character ramps and configuration for ascii-art.
///
/// Everything here is plain immutable data; conversion lives in `aa-ascii`
/// and image loading in `aa-source`.

pub mod charset;
pub mod color;
pub mod config;
pub mod error;
pub mod frame;

pub use charset::CharacterRamp;
pub use color::Rgb;
pub use config::RenderConfig;
pub use error::CoreError;
pub use frame::{AsciiArt, BrightnessBuffer, ColorBuffer, ColoredAsciiArt, ColoredChar};
