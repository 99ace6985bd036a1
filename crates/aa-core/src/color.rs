/// Couleur RGB 8 bits par canal.
///
/// # Example
/// ```
/// use aa_core::color::Rgb;
/// let c = Rgb::new(255, 128, 0);
/// assert_eq!(c.to_hex(), "#ff8000");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Pure white, used when a block has no samples to average.
    pub const WHITE: Self = Self::new(255, 255, 255);

    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Luminance perceptuelle BT.601, tronquée.
    ///
    /// Computed in `f64` in the order `0.299 r + 0.587 g + 0.114 b` so that
    /// the truncation lands on the same integer for every input.
    ///
    /// # Example
    /// ```
    /// use aa_core::color::Rgb;
    /// assert_eq!(Rgb::new(255, 255, 255).luminance(), 255);
    /// assert_eq!(Rgb::new(0, 0, 0).luminance(), 0);
    /// assert_eq!(Rgb::new(255, 0, 0).luminance(), 76);
    /// ```
    #[inline(always)]
    #[must_use]
    pub fn luminance(self) -> u8 {
        let lum = 0.299 * f64::from(self.r) + 0.587 * f64::from(self.g) + 0.114 * f64::from(self.b);
        lum as u8
    }

    /// `#rrggbb`, lowercase.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Moyenne composante par composante (division entière).
    ///
    /// Returns `None` for an empty slice.
    ///
    /// # Example
    /// ```
    /// use aa_core::color::Rgb;
    /// let avg = Rgb::average(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]);
    /// assert_eq!(avg, Some(Rgb::new(127, 127, 127)));
    /// assert_eq!(Rgb::average(&[]), None);
    /// ```
    #[must_use]
    pub fn average(colors: &[Self]) -> Option<Self> {
        if colors.is_empty() {
            return None;
        }
        let count = colors.len() as u32;
        let (r, g, b) = colors.iter().fold((0u32, 0u32, 0u32), |(r, g, b), c| {
            (r + u32::from(c.r), g + u32::from(c.g), b + u32::from(c.b))
        });
        Some(Self::new(
            (r / count) as u8,
            (g / count) as u8,
            (b / count) as u8,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_is_zero_padded() {
        assert_eq!(Rgb::new(1, 2, 3).to_hex(), "#010203");
        assert_eq!(Rgb::new(0xab, 0xcd, 0xef).to_hex(), "#abcdef");
    }

    #[test]
    fn luminance_truncates() {
        // 0.299*10 + 0.587*120 + 0.114*5 evaluates to 73.99999999999999
        assert_eq!(Rgb::new(10, 120, 5).luminance(), 73);
        assert_eq!(Rgb::new(0, 255, 0).luminance(), 149);
        assert_eq!(Rgb::new(0, 0, 255).luminance(), 29);
    }

    #[test]
    fn average_floors_each_channel() {
        let avg = Rgb::average(&[Rgb::new(10, 0, 1), Rgb::new(11, 3, 2), Rgb::new(12, 0, 2)]);
        assert_eq!(avg, Some(Rgb::new(11, 1, 1)));
    }

    #[test]
    fn average_of_single_is_identity() {
        let c = Rgb::new(200, 100, 50);
        assert_eq!(Rgb::average(&[c]), Some(c));
    }
}
