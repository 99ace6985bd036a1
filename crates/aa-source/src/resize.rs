use aa_core::error::CoreError;
use anyhow::{Context, Result};
use fast_image_resize::images::Image;
use fast_image_resize::{PixelType, ResizeOptions, Resizer as FirResizer};

/// Resizer réutilisable wrappant fast_image_resize, RGB 8 bits.
///
/// Uses the crate's default Lanczos3 convolution.
///
/// # Example
/// ```
/// use aa_source::resize::Resizer;
/// let mut r = Resizer::new();
/// let out = r.resize_rgb(vec![255; 4 * 4 * 3], (4, 4), (2, 2)).unwrap();
/// assert_eq!(out.len(), 2 * 2 * 3);
/// ```
pub struct Resizer {
    inner: FirResizer,
    options: ResizeOptions,
}

impl Resizer {
    /// Create a new resizer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: FirResizer::new(),
            options: ResizeOptions::new(),
        }
    }

    /// Resize packed RGB bytes from `src` dimensions to `dst` dimensions.
    ///
    /// # Errors
    /// Returns an error if either size has a zero side, if `data` does not
    /// match `src`, or if the resize operation fails.
    pub fn resize_rgb(&mut self, data: Vec<u8>, src: (u32, u32), dst: (u32, u32)) -> Result<Vec<u8>> {
        for (width, height) in [src, dst] {
            if width == 0 || height == 0 {
                return Err(CoreError::InvalidDimensions { width, height }.into());
            }
        }
        if src == dst {
            return Ok(data);
        }

        let src_image = Image::from_vec_u8(src.0, src.1, data, PixelType::U8x3)
            .context("Invalid source dimensions")?;
        let mut dst_image = Image::new(dst.0, dst.1, PixelType::U8x3);

        self.inner
            .resize(&src_image, &mut dst_image, Some(&self.options))
            .context("Resize failed")?;

        Ok(dst_image.into_vec())
    }
}

impl Default for Resizer {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_size_is_passthrough() {
        let data: Vec<u8> = (0..12).collect();
        let out = Resizer::new().resize_rgb(data.clone(), (2, 2), (2, 2)).unwrap();
        assert_eq!(out, data);
    }

    #[test]
    fn uniform_color_survives_resize() {
        let data = [10u8, 200, 30].repeat(16 * 8);
        let out = Resizer::new().resize_rgb(data, (16, 8), (5, 3)).unwrap();
        assert_eq!(out.len(), 5 * 3 * 3);
        for px in out.chunks_exact(3) {
            for (got, want) in px.iter().zip([10u8, 200, 30]) {
                assert!(got.abs_diff(want) <= 1, "{px:?}");
            }
        }
    }

    #[test]
    fn zero_target_is_rejected() {
        assert!(Resizer::new().resize_rgb(vec![0; 12], (2, 2), (0, 4)).is_err());
    }

    #[test]
    fn mismatched_buffer_is_rejected() {
        assert!(Resizer::new().resize_rgb(vec![0; 5], (2, 2), (1, 1)).is_err());
    }
}
