use std::fmt;

use crate::color::Rgb;
use crate::error::CoreError;

fn check_len(len: usize, width: u32, height: u32) -> Result<(), CoreError> {
    let expected = width as usize * height as usize;
    if len == expected {
        Ok(())
    } else {
        Err(CoreError::BufferSize {
            expected,
            actual: len,
        })
    }
}

/// Buffer de luminance, row-major, un octet par pixel.
///
/// # Example
/// ```
/// use aa_core::frame::BrightnessBuffer;
/// let buf = BrightnessBuffer::new(vec![0, 128, 255, 64], 2, 2).unwrap();
/// assert_eq!(buf.get(1, 1), 64);
/// assert!(BrightnessBuffer::new(vec![0; 3], 2, 2).is_err());
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BrightnessBuffer {
    pixels: Vec<u8>,
    width: u32,
    height: u32,
}

impl BrightnessBuffer {
    /// # Errors
    /// Returns [`CoreError::BufferSize`] if `pixels.len() != width * height`.
    pub fn new(pixels: Vec<u8>, width: u32, height: u32) -> Result<Self, CoreError> {
        check_len(pixels.len(), width, height)?;
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Uniform buffer, handy for tests and padding.
    #[must_use]
    pub fn filled(value: u8, width: u32, height: u32) -> Self {
        Self {
            pixels: vec![value; width as usize * height as usize],
            width,
            height,
        }
    }

    #[must_use]
    pub fn pixels(&self) -> &[u8] {
        &self.pixels
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Sample at column `x`, row `y`.
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> u8 {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Copie avec chaque échantillon `p` remplacé par `255 - p`.
    #[must_use]
    pub fn inverted(&self) -> Self {
        Self {
            pixels: self.pixels.iter().map(|&p| 255 - p).collect(),
            width: self.width,
            height: self.height,
        }
    }
}

/// Buffer couleur RGB, row-major.
///
/// # Example
/// ```
/// use aa_core::color::Rgb;
/// use aa_core::frame::ColorBuffer;
/// let buf = ColorBuffer::new(vec![Rgb::new(255, 0, 0); 6], 3, 2).unwrap();
/// assert_eq!(buf.luminances(), vec![76; 6]);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColorBuffer {
    pixels: Vec<Rgb>,
    width: u32,
    height: u32,
}

impl ColorBuffer {
    /// # Errors
    /// Returns [`CoreError::BufferSize`] if `pixels.len() != width * height`.
    pub fn new(pixels: Vec<Rgb>, width: u32, height: u32) -> Result<Self, CoreError> {
        check_len(pixels.len(), width, height)?;
        Ok(Self {
            pixels,
            width,
            height,
        })
    }

    /// Build from packed RGB bytes (3 bytes per pixel).
    ///
    /// # Errors
    /// Returns [`CoreError::BufferSize`] if the byte count does not match
    /// `width * height * 3`.
    pub fn from_rgb_bytes(data: &[u8], width: u32, height: u32) -> Result<Self, CoreError> {
        if data.len() % 3 != 0 {
            return Err(CoreError::BufferSize {
                expected: width as usize * height as usize * 3,
                actual: data.len(),
            });
        }
        let pixels = data
            .chunks_exact(3)
            .map(|px| Rgb::new(px[0], px[1], px[2]))
            .collect();
        Self::new(pixels, width, height)
    }

    #[must_use]
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Pixel at column `x`, row `y`.
    #[inline(always)]
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> Rgb {
        debug_assert!(x < self.width && y < self.height, "pixel out of bounds");
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Per-pixel luminance, row-major.
    #[must_use]
    pub fn luminances(&self) -> Vec<u8> {
        self.pixels.iter().map(|c| c.luminance()).collect()
    }

    /// Grayscale view of this buffer.
    #[must_use]
    pub fn to_brightness(&self) -> BrightnessBuffer {
        BrightnessBuffer {
            pixels: self.luminances(),
            width: self.width,
            height: self.height,
        }
    }
}

/// Rendu texte : une chaîne par ligne.
///
/// # Example
/// ```
/// use aa_core::frame::AsciiArt;
/// let art = AsciiArt::new(vec!["ab".into(), "cd".into()]);
/// assert_eq!(art.to_string(), "ab\ncd");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AsciiArt {
    rows: Vec<String>,
}

impl AsciiArt {
    #[must_use]
    pub fn new(rows: Vec<String>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[String] {
        &self.rows
    }
}

impl fmt::Display for AsciiArt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            f.write_str(row)?;
        }
        Ok(())
    }
}

/// A glyph with its display color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColoredChar {
    /// Caractère à afficher.
    pub ch: char,
    /// Couleur foreground.
    pub color: Rgb,
}

/// Rendu colorisé : une suite de cellules par ligne.
///
/// # Example
/// ```
/// use aa_core::color::Rgb;
/// use aa_core::frame::{ColoredAsciiArt, ColoredChar};
/// let cell = ColoredChar { ch: '#', color: Rgb::WHITE };
/// let art = ColoredAsciiArt::new(vec![vec![cell; 3]]);
/// assert_eq!(art.rows()[0].len(), 3);
/// assert_eq!(art.plain_text(), "###");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ColoredAsciiArt {
    rows: Vec<Vec<ColoredChar>>,
}

impl ColoredAsciiArt {
    #[must_use]
    pub fn new(rows: Vec<Vec<ColoredChar>>) -> Self {
        Self { rows }
    }

    #[must_use]
    pub fn rows(&self) -> &[Vec<ColoredChar>] {
        &self.rows
    }

    /// Glyphs only, rows joined with `\n`.
    #[must_use]
    pub fn plain_text(&self) -> String {
        self.rows
            .iter()
            .map(|row| row.iter().map(|c| c.ch).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }
}
