/// Image loading for ascii-art: decode, convert to RGB, resize to the
/// output resolution.

pub mod image;
pub mod resize;

pub use self::image::{LoadOptions, load_color_image, load_image};
