use serde::Deserialize;

/// 70 caractères — Paul Bourke, dense→clair.
pub const RAMP_DEFAULT: &str =
    "$@B%8&WM#*oahkbdpqwmZO0QLCJUYXzcvunxrjft/\\|()1{}[]?-_+~<>i!lI;:,\"^`'. ";

/// 10 caractères — compact, bon contraste.
pub const RAMP_SIMPLE: &str = "@%#*+=-:. ";

/// Blocs Unicode — pseudo-pixels.
pub const RAMP_BLOCKS: &str = "█▓▒░ ";

/// Built-in ramp presets.
///
/// # Example
/// ```
/// use aa_core::charset::RampPreset;
/// assert!(matches!(RampPreset::default(), RampPreset::Default));
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RampPreset {
    /// [`RAMP_DEFAULT`].
    #[default]
    Default,
    /// [`RAMP_SIMPLE`].
    Simple,
    /// [`RAMP_BLOCKS`].
    Blocks,
}

impl RampPreset {
    #[must_use]
    pub fn characters(self) -> &'static str {
        match self {
            Self::Default => RAMP_DEFAULT,
            Self::Simple => RAMP_SIMPLE,
            Self::Blocks => RAMP_BLOCKS,
        }
    }
}

/// Ordered brightness → glyph table, darkest glyph first.
///
/// The per-brightness lookup is pre-computed at construction for O(1)
/// per-pixel cost.
///
/// # Example
/// ```
/// use aa_core::charset::CharacterRamp;
/// let ramp = CharacterRamp::from_string(Some("@. "));
/// assert_eq!(ramp.character_for(0), '@');
/// assert_eq!(ramp.character_for(255), ' ');
/// ```
#[derive(Clone, Debug)]
pub struct CharacterRamp {
    chars: Vec<char>,
    lut: [char; 256],
}

impl CharacterRamp {
    fn build(characters: &str) -> Self {
        let chars: Vec<char> = characters.chars().collect();
        if chars.is_empty() {
            return Self::default();
        }
        let steps = (chars.len() - 1) as f64;
        let mut lut = [' '; 256];
        for (brightness, slot) in lut.iter_mut().enumerate() {
            // f64, divide before scaling; the order changes the truncated index.
            let index = (brightness as f64 / 255.0 * steps) as usize;
            *slot = chars[index.min(chars.len() - 1)];
        }
        Self { chars, lut }
    }

    /// 70-glyph preset.
    #[must_use]
    pub fn standard() -> Self {
        Self::build(RAMP_DEFAULT)
    }

    /// 10-glyph preset.
    #[must_use]
    pub fn simple() -> Self {
        Self::build(RAMP_SIMPLE)
    }

    /// Ramp for a built-in preset.
    #[must_use]
    pub fn preset(preset: RampPreset) -> Self {
        Self::build(preset.characters())
    }

    /// User-supplied ramp; `None` or an empty string falls back to the
    /// default preset.
    ///
    /// # Example
    /// ```
    /// use aa_core::charset::{CharacterRamp, RAMP_DEFAULT};
    /// assert_eq!(CharacterRamp::from_string(None).len(), RAMP_DEFAULT.chars().count());
    /// assert_eq!(CharacterRamp::from_string(Some("")).len(), RAMP_DEFAULT.chars().count());
    /// assert_eq!(CharacterRamp::from_string(Some("ab")).len(), 2);
    /// ```
    #[must_use]
    pub fn from_string(value: Option<&str>) -> Self {
        match value {
            Some(s) if !s.is_empty() => Self::build(s),
            _ => Self::standard(),
        }
    }

    /// Glyph for a brightness value; 0 → first glyph, 255 → last.
    #[inline(always)]
    #[must_use]
    pub fn character_for(&self, brightness: u8) -> char {
        self.lut[brightness as usize]
    }

    /// Number of glyphs. Never zero.
    #[must_use]
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    /// Always `false`; kept for API symmetry with `len`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Glyphs, darkest first.
    #[must_use]
    pub fn characters(&self) -> &[char] {
        &self.chars
    }
}

impl Default for CharacterRamp {
    fn default() -> Self {
        Self::standard()
    }
}
