use aa_core::charset::CharacterRamp;
use aa_core::color::Rgb;
use aa_core::frame::{ColorBuffer, ColoredAsciiArt, ColoredChar};

use crate::braille::{BLOCK_H, BLOCK_W, DOT_BITS, braille_char, grid_size, median_threshold};

/// One ramp glyph per pixel, colored with the pixel itself.
///
/// # Example
/// ```
/// use aa_core::charset::CharacterRamp;
/// use aa_core::color::Rgb;
/// use aa_core::frame::ColorBuffer;
/// use aa_ascii::colorize::convert_to_colored;
///
/// let buf = ColorBuffer::new(vec![Rgb::new(0, 0, 0), Rgb::WHITE], 2, 1).unwrap();
/// let art = convert_to_colored(&buf, &CharacterRamp::from_string(Some("#.")), false);
/// assert_eq!(art.plain_text(), "#.");
/// assert_eq!(art.rows()[0][1].color, Rgb::WHITE);
/// ```
#[must_use]
pub fn convert_to_colored(image: &ColorBuffer, ramp: &CharacterRamp, invert: bool) -> ColoredAsciiArt {
    let width = image.width() as usize;
    if width == 0 {
        return ColoredAsciiArt::new(vec![Vec::new(); image.height() as usize]);
    }

    let rows = image
        .pixels()
        .chunks_exact(width)
        .map(|row| {
            row.iter()
                .map(|&color| {
                    let lum = color.luminance();
                    ColoredChar {
                        ch: ramp.character_for(if invert { 255 - lum } else { lum }),
                        color,
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect();
    ColoredAsciiArt::new(rows)
}

/// Braille rendering where each glyph carries the average color of its block.
///
/// Dots follow the same median rule as
/// [`convert_to_braille`](crate::braille::convert_to_braille), applied to the
/// per-pixel luminance. Only in-bounds samples contribute to the average.
///
/// # Example
/// ```
/// use aa_core::color::Rgb;
/// use aa_core::frame::ColorBuffer;
/// use aa_ascii::colorize::convert_braille_to_colored;
///
/// let buf = ColorBuffer::new(vec![Rgb::new(0, 0, 0); 8], 2, 4).unwrap();
/// let art = convert_braille_to_colored(&buf, false);
/// assert_eq!(art.rows()[0][0].color, Rgb::new(0, 0, 0));
/// ```
#[must_use]
pub fn convert_braille_to_colored(image: &ColorBuffer, invert: bool) -> ColoredAsciiArt {
    let luminances: Vec<u8> = image
        .pixels()
        .iter()
        .map(|c| {
            let lum = c.luminance();
            if invert { 255 - lum } else { lum }
        })
        .collect();

    let Some(threshold) = median_threshold(&luminances) else {
        return ColoredAsciiArt::default();
    };
    let (cols, rows) = grid_size(image.width(), image.height());
    log::debug!(
        "braille couleur: {}×{} px → {cols}×{rows} glyphes, seuil {threshold}",
        image.width(),
        image.height()
    );

    let rows = (0..rows)
        .map(|block_row| {
            (0..cols)
                .map(|block_col| colored_block(image, &luminances, threshold, block_col, block_row))
                .collect::<Vec<_>>()
        })
        .collect();
    ColoredAsciiArt::new(rows)
}

fn colored_block(
    image: &ColorBuffer,
    luminances: &[u8],
    threshold: u8,
    block_col: u32,
    block_row: u32,
) -> ColoredChar {
    let origin_x = block_col * BLOCK_W;
    let origin_y = block_row * BLOCK_H;
    let width = image.width();

    let mut block = Vec::with_capacity(8);
    let mut mask = 0u8;
    for (dy, bits) in DOT_BITS.iter().enumerate() {
        for (dx, &bit) in bits.iter().enumerate() {
            let x = origin_x + dx as u32;
            let y = origin_y + dy as u32;
            if x >= width || y >= image.height() {
                continue;
            }
            let idx = y as usize * width as usize + x as usize;
            block.push(image.pixels()[idx]);
            if luminances[idx] < threshold {
                mask |= bit;
            }
        }
    }

    ColoredChar {
        ch: braille_char(mask),
        color: Rgb::average(&block).unwrap_or(Rgb::WHITE),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BLACK: Rgb = Rgb::new(0, 0, 0);

    #[test]
    fn ramp_colored_matches_source_dimensions() {
        let buf = ColorBuffer::new(vec![Rgb::new(10, 20, 30); 15], 5, 3).unwrap();
        let art = convert_to_colored(&buf, &CharacterRamp::standard(), false);
        assert_eq!(art.rows().len(), 3);
        assert!(art.rows().iter().all(|r| r.len() == 5));
        assert!(art.rows().iter().flatten().all(|c| c.color == Rgb::new(10, 20, 30)));
    }

    #[test]
    fn ramp_colored_uses_luminance() {
        let red = Rgb::new(255, 0, 0);
        let buf = ColorBuffer::new(vec![red], 1, 1).unwrap();
        let ramp = CharacterRamp::standard();
        let art = convert_to_colored(&buf, &ramp, false);
        assert_eq!(art.rows()[0][0].ch, ramp.character_for(76));
        let art = convert_to_colored(&buf, &ramp, true);
        assert_eq!(art.rows()[0][0].ch, ramp.character_for(255 - 76));
        assert_eq!(art.rows()[0][0].color, red);
    }

    #[test]
    fn braille_colored_averages_block() {
        let mut pixels = vec![BLACK; 4];
        pixels.extend([Rgb::WHITE; 4]);
        let buf = ColorBuffer::new(pixels, 2, 4).unwrap();
        let art = convert_braille_to_colored(&buf, false);
        let cell = art.rows()[0][0];
        assert_eq!(cell.ch, '\u{281B}');
        assert_eq!(cell.color, Rgb::new(127, 127, 127));
    }

    #[test]
    fn braille_colored_blocks_are_independent() {
        // 4×4: left block red, right block blue.
        let red = Rgb::new(200, 0, 0);
        let blue = Rgb::new(0, 0, 200);
        let pixels: Vec<Rgb> = (0..16).map(|i| if i % 4 < 2 { red } else { blue }).collect();
        let buf = ColorBuffer::new(pixels, 4, 4).unwrap();
        let art = convert_braille_to_colored(&buf, false);
        assert_eq!(art.rows().len(), 1);
        assert_eq!(art.rows()[0][0].color, red);
        assert_eq!(art.rows()[0][1].color, blue);
    }

    #[test]
    fn braille_colored_matches_plain_braille_glyphs() {
        let pixels: Vec<Rgb> = (0..48u32)
            .map(|i| {
                let v = ((i * 37) % 256) as u8;
                Rgb::new(v, v, v)
            })
            .collect();
        let buf = ColorBuffer::new(pixels, 6, 8).unwrap();
        for invert in [false, true] {
            let colored = convert_braille_to_colored(&buf, invert);
            let plain = crate::braille::convert_to_braille(&buf.to_brightness(), invert);
            assert_eq!(colored.plain_text(), plain.to_string());
        }
    }

    #[test]
    fn short_braille_grid_is_empty() {
        let buf = ColorBuffer::new(vec![BLACK; 3], 1, 3).unwrap();
        assert!(convert_braille_to_colored(&buf, false).rows().is_empty());
    }

    #[test]
    fn narrow_braille_grid_keeps_empty_rows() {
        let buf = ColorBuffer::new(vec![BLACK; 8], 1, 8).unwrap();
        let art = convert_braille_to_colored(&buf, false);
        assert_eq!(art.rows().len(), 2);
        assert!(art.rows().iter().all(Vec::is_empty));
    }
}
