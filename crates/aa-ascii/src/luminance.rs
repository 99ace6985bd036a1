use aa_core::charset::CharacterRamp;
use aa_core::frame::{AsciiArt, BrightnessBuffer};

/// Convert a brightness buffer into ramp characters, one glyph per pixel.
///
/// With `invert`, each sample `p` is read as `255 - p` first.
///
/// # Example
/// ```
/// use aa_core::charset::CharacterRamp;
/// use aa_core::frame::BrightnessBuffer;
/// use aa_ascii::luminance::convert;
///
/// let ramp = CharacterRamp::from_string(Some("#. "));
/// let buf = BrightnessBuffer::new(vec![0, 128, 255, 255, 128, 0], 3, 2).unwrap();
/// assert_eq!(convert(&buf, &ramp, false).to_string(), "#. \n .#");
/// ```
#[must_use]
pub fn convert(image: &BrightnessBuffer, ramp: &CharacterRamp, invert: bool) -> AsciiArt {
    let width = image.width() as usize;
    log::debug!(
        "luminance: {}×{} px, rampe de {} glyphes",
        image.width(),
        image.height(),
        ramp.len()
    );

    if width == 0 {
        return AsciiArt::new(vec![String::new(); image.height() as usize]);
    }

    let rows = image
        .pixels()
        .chunks_exact(width)
        .map(|row| {
            row.iter()
                .map(|&p| ramp.character_for(if invert { 255 - p } else { p }))
                .collect::<String>()
        })
        .collect();
    AsciiArt::new(rows)
}
