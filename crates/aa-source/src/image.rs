use std::io::ErrorKind;
use std::path::Path;

use aa_core::color::Rgb;
use aa_core::config::ASPECT_CORRECTION;
use aa_core::error::CoreError;
use aa_core::frame::{BrightnessBuffer, ColorBuffer};
use anyhow::{Context, Result};
use image::{ImageError, ImageReader};

use crate::resize::Resizer;

/// Paramètres de chargement : largeur cible et mise à l'échelle.
///
/// # Example
/// ```
/// use aa_source::image::LoadOptions;
/// let opts = LoadOptions::new(80).braille();
/// assert_eq!(opts.pixel_scale, (2, 4));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadOptions {
    /// Output width in characters.
    pub target_width: u32,
    /// Pixels per character, `(columns, rows)`. `(2, 4)` for Braille.
    pub pixel_scale: (u32, u32),
    /// Vertical squash compensating for tall terminal cells.
    pub aspect_correction: f64,
}

impl LoadOptions {
    #[must_use]
    pub fn new(target_width: u32) -> Self {
        Self {
            target_width,
            pixel_scale: (1, 1),
            aspect_correction: ASPECT_CORRECTION,
        }
    }

    /// One Braille glyph covers 2×4 pixels.
    #[must_use]
    pub fn braille(mut self) -> Self {
        self.pixel_scale = (2, 4);
        self
    }

    #[must_use]
    pub fn with_aspect_correction(mut self, aspect_correction: f64) -> Self {
        self.aspect_correction = aspect_correction;
        self
    }

    /// Pixel dimensions of the resized buffer for a `(width, height)` source.
    ///
    /// The character-row count is truncated, then floored at one row so that
    /// very wide images still produce output.
    ///
    /// # Example
    /// ```
    /// use aa_source::image::LoadOptions;
    /// // 200×100 → 100 columns, floor(0.5 * 100 * 0.45) = 22 rows
    /// assert_eq!(LoadOptions::new(100).target_size(200, 100), (100, 22));
    /// assert_eq!(LoadOptions::new(100).braille().target_size(200, 100), (200, 88));
    /// ```
    #[must_use]
    pub fn target_size(&self, width: u32, height: u32) -> (u32, u32) {
        let (sx, sy) = self.pixel_scale;
        let rows = f64::from(height) / f64::from(width.max(1))
            * f64::from(self.target_width)
            * self.aspect_correction;
        let rows = (rows as u32).max(1);
        (self.target_width * sx, rows * sy)
    }
}

fn decode(path: &Path) -> Result<image::RgbImage> {
    let shown = path.display().to_string();
    let reader = ImageReader::open(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => anyhow::Error::from(CoreError::FileNotFound { path: shown.clone() }),
        _ => anyhow::Error::from(e).context(format!("Impossible d'ouvrir {shown}")),
    })?;
    let reader = reader
        .with_guessed_format()
        .with_context(|| format!("Impossible de lire {shown}"))?;
    let img = reader.decode().map_err(|e| match e {
        ImageError::Unsupported(_) | ImageError::Decoding(_) => {
            anyhow::Error::from(CoreError::UnsupportedFormat { path: shown.clone() })
        }
        other => anyhow::Error::from(other).context(format!("Impossible de charger {shown}")),
    })?;
    Ok(img.to_rgb8())
}

/// Charge une image, la convertit en RGB et la redimensionne.
///
/// # Errors
/// [`CoreError::FileNotFound`] if the path does not exist,
/// [`CoreError::UnsupportedFormat`] if the content cannot be decoded, or a
/// contextual error from resizing.
///
/// # Example
/// ```no_run
/// use aa_source::image::{LoadOptions, load_color_image};
/// use std::path::Path;
/// let buf = load_color_image(Path::new("photo.png"), &LoadOptions::new(80)).unwrap();
/// assert_eq!(buf.width(), 80);
/// ```
pub fn load_color_image(path: &Path, options: &LoadOptions) -> Result<ColorBuffer> {
    let rgb = decode(path)?;
    let (src_w, src_h) = rgb.dimensions();
    let (dst_w, dst_h) = options.target_size(src_w, src_h);
    log::info!("{}: {src_w}×{src_h} → {dst_w}×{dst_h} px", path.display());

    let data = Resizer::new().resize_rgb(rgb.into_raw(), (src_w, src_h), (dst_w, dst_h))?;
    Ok(ColorBuffer::from_rgb_bytes(&data, dst_w, dst_h)?)
}

/// Luma ITU-R 601-2 en virgule fixe 16 bits, arrondie au plus proche.
///
/// Unlike [`Rgb::luminance`], which truncates, this rounds: `(0, 255, 0)`
/// gives 150, not 149.
#[inline(always)]
fn luma(c: Rgb) -> u8 {
    let l = u32::from(c.r) * 19_595 + u32::from(c.g) * 38_470 + u32::from(c.b) * 7_471 + 0x8000;
    (l >> 16) as u8
}

/// Same as [`load_color_image`], reduced to rounded per-pixel luma after the
/// resize.
///
/// # Errors
/// See [`load_color_image`].
pub fn load_image(path: &Path, options: &LoadOptions) -> Result<BrightnessBuffer> {
    let color = load_color_image(path, options)?;
    let samples = color.pixels().iter().map(|&c| luma(c)).collect();
    Ok(BrightnessBuffer::new(samples, color.width(), color.height())?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(dir: &Path, name: &str, w: u32, h: u32, px: [u8; 3]) -> std::path::PathBuf {
        let path = dir.join(name);
        image::RgbImage::from_pixel(w, h, image::Rgb(px)).save(&path).unwrap();
        path
    }

    #[test]
    fn loads_and_resizes_to_target() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "white.png", 40, 40, [255, 255, 255]);
        let buf = load_image(&path, &LoadOptions::new(20)).unwrap();
        // floor(1.0 * 20 * 0.45) = 9
        assert_eq!((buf.width(), buf.height()), (20, 9));
        assert!(buf.pixels().iter().all(|&p| p >= 250));
    }

    #[test]
    fn braille_scale_multiplies_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "red.png", 30, 20, [200, 0, 0]);
        let buf = load_color_image(&path, &LoadOptions::new(10).braille()).unwrap();
        // floor(20/30 * 10 * 0.45) = 3 rows → 12 px
        assert_eq!((buf.width(), buf.height()), (20, 12));
    }

    #[test]
    fn missing_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_image(&dir.path().join("absent.png"), &LoadOptions::new(10)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::FileNotFound { .. })
        ));
    }

    #[test]
    fn garbage_is_unsupported_format() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"definitely not an image").unwrap();
        let err = load_image(&path, &LoadOptions::new(10)).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<CoreError>(),
            Some(CoreError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn luma_rounds_to_nearest() {
        assert_eq!(luma(Rgb::new(0, 255, 0)), 150);
        assert_eq!(luma(Rgb::new(255, 0, 0)), 76);
        assert_eq!(luma(Rgb::new(0, 0, 255)), 29);
        assert_eq!(luma(Rgb::WHITE), 255);
        assert_eq!(luma(Rgb::new(0, 0, 0)), 0);
    }

    #[test]
    fn grayscale_load_uses_rounded_luma() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "green.png", 20, 20, [0, 255, 0]);
        let buf = load_image(&path, &LoadOptions::new(20)).unwrap();
        assert!(buf.pixels().iter().all(|&p| p.abs_diff(150) <= 1), "{:?}", &buf.pixels()[..4]);
    }

    #[test]
    fn very_wide_image_keeps_one_row() {
        assert_eq!(LoadOptions::new(10).target_size(1000, 1), (10, 1));
        assert_eq!(LoadOptions::new(10).braille().target_size(1000, 1), (20, 4));
    }
}
