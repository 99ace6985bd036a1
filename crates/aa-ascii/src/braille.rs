use aa_core::frame::{AsciiArt, BrightnessBuffer};

/// Braille base codepoint (U+2800).
const BRAILLE_BASE: u32 = 0x2800;

/// Bit for each dot of a 2×4 block, indexed `[row][col]`.
///
/// Braille dot numbering (column-major):
/// ```text
///  1 4
///  2 5
///  3 6
///  7 8
/// ```
pub(crate) const DOT_BITS: [[u8; 2]; 4] = [[0x01, 0x08], [0x02, 0x10], [0x04, 0x20], [0x40, 0x80]];

/// Block width in source pixels.
pub(crate) const BLOCK_W: u32 = 2;
/// Block height in source pixels.
pub(crate) const BLOCK_H: u32 = 4;

/// Map un masque 8 bits vers le caractère Braille `U+2800 + mask`.
///
/// # Example
/// ```
/// use aa_ascii::braille::braille_char;
/// assert_eq!(braille_char(0x00), '\u{2800}'); // empty
/// assert_eq!(braille_char(0xFF), '\u{28FF}'); // full
/// ```
#[must_use]
#[inline(always)]
pub const fn braille_char(mask: u8) -> char {
    match char::from_u32(BRAILLE_BASE + mask as u32) {
        Some(c) => c,
        None => ' ',
    }
}

/// Médiane tronquée des échantillons, ou `None` si vide.
///
/// For an even count this is the floor of the mean of the two middle
/// values. Counting sort over the 256 possible values keeps it O(n).
///
/// # Example
/// ```
/// use aa_ascii::braille::median_threshold;
/// assert_eq!(median_threshold(&[0, 0, 0, 0, 255, 255, 255, 255]), Some(127));
/// assert_eq!(median_threshold(&[9, 1, 5]), Some(5));
/// assert_eq!(median_threshold(&[]), None);
/// ```
#[must_use]
pub fn median_threshold(samples: &[u8]) -> Option<u8> {
    if samples.is_empty() {
        return None;
    }
    let mut histogram = [0usize; 256];
    for &s in samples {
        histogram[s as usize] += 1;
    }
    let nth = |k: usize| -> u8 {
        let mut seen = 0usize;
        for (value, &count) in histogram.iter().enumerate() {
            seen += count;
            if seen > k {
                return value as u8;
            }
        }
        u8::MAX
    };
    let n = samples.len();
    if n % 2 == 1 {
        Some(nth(n / 2))
    } else {
        let lo = u16::from(nth(n / 2 - 1));
        let hi = u16::from(nth(n / 2));
        Some(((lo + hi) / 2) as u8)
    }
}

/// Output grid size in glyphs for a `width × height` pixel buffer.
///
/// Trailing columns/rows that do not fill a whole block are dropped.
#[must_use]
pub fn grid_size(width: u32, height: u32) -> (u32, u32) {
    (width / BLOCK_W, height / BLOCK_H)
}

/// Sample at (`x`, `y`), or white when outside the buffer.
#[inline(always)]
pub(crate) fn sample_or_white(samples: &[u8], width: u32, height: u32, x: u32, y: u32) -> u8 {
    if x >= width || y >= height {
        return 255;
    }
    samples[y as usize * width as usize + x as usize]
}

/// Dot mask of the block at (`block_col`, `block_row`): a dot is set when its
/// sample is strictly below `threshold`.
#[must_use]
pub fn block_mask(
    samples: &[u8],
    width: u32,
    height: u32,
    block_col: u32,
    block_row: u32,
    threshold: u8,
) -> u8 {
    let origin_x = block_col * BLOCK_W;
    let origin_y = block_row * BLOCK_H;
    let mut mask = 0u8;
    for (dy, bits) in DOT_BITS.iter().enumerate() {
        for (dx, &bit) in bits.iter().enumerate() {
            let s = sample_or_white(samples, width, height, origin_x + dx as u32, origin_y + dy as u32);
            if s < threshold {
                mask |= bit;
            }
        }
    }
    mask
}

/// Convertit un buffer de luminance en Braille (2×4 pixels par glyphe).
///
/// The threshold is the median of the whole (possibly inverted) buffer,
/// computed once.
///
/// # Example
/// ```
/// use aa_core::frame::BrightnessBuffer;
/// use aa_ascii::braille::convert_to_braille;
///
/// // 4×4, left half black, right half white: threshold 127.
/// let pixels: Vec<u8> = (0..16).map(|i| if i % 4 < 2 { 0 } else { 255 }).collect();
/// let split = BrightnessBuffer::new(pixels, 4, 4).unwrap();
/// assert_eq!(convert_to_braille(&split, false).to_string(), "\u{28FF}\u{2800}");
///
/// // A uniform buffer sits exactly on its own median: no dot is set.
/// let black = BrightnessBuffer::filled(0, 2, 4);
/// assert_eq!(convert_to_braille(&black, false).to_string(), "\u{2800}");
/// ```
#[must_use]
pub fn convert_to_braille(image: &BrightnessBuffer, invert: bool) -> AsciiArt {
    let inverted;
    let source = if invert {
        inverted = image.inverted();
        &inverted
    } else {
        image
    };
    let (width, height) = (source.width(), source.height());
    let samples = source.pixels();

    let Some(threshold) = median_threshold(samples) else {
        return AsciiArt::default();
    };
    let (cols, rows) = grid_size(width, height);
    log::debug!("braille: {width}×{height} px → {cols}×{rows} glyphes, seuil {threshold}");

    let rows = (0..rows)
        .map(|block_row| {
            (0..cols)
                .map(|block_col| {
                    braille_char(block_mask(samples, width, height, block_col, block_row, threshold))
                })
                .collect::<String>()
        })
        .collect();
    AsciiArt::new(rows)
}
