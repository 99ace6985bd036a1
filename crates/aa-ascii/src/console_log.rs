//! Browser `console.log` output with `%c` CSS styling.
//!
//! Each row becomes one statement. Adjacent cells sharing a color are merged
//! into a single styled segment:
//!
//! ```text
//! console.log('%cAB%cC', 'color: #ff0000; font-family: monospace;', 'color: #0000ff; font-family: monospace;');
//! ```

use aa_core::color::Rgb;
use aa_core::frame::{ColoredAsciiArt, ColoredChar};

/// Run maximal de cellules contiguës de même couleur.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ConsoleLogSegment {
    /// Concatenated glyphs of the run.
    pub text: String,
    /// Color shared by every glyph of the run.
    pub color: Rgb,
}

impl ConsoleLogSegment {
    /// Style argument passed alongside the `%c` placeholder.
    #[must_use]
    pub fn style(&self) -> String {
        format!("color: {}; font-family: monospace;", self.color.to_hex())
    }
}

/// Split a row into same-color runs. Equal colors that are not adjacent stay
/// in separate segments.
///
/// # Example
/// ```
/// use aa_core::color::Rgb;
/// use aa_core::frame::ColoredChar;
/// use aa_ascii::console_log::segments_from_row;
///
/// let red = Rgb::new(255, 0, 0);
/// let blue = Rgb::new(0, 0, 255);
/// let row: Vec<ColoredChar> = [red, red, blue, blue, red]
///     .into_iter()
///     .map(|color| ColoredChar { ch: 'x', color })
///     .collect();
/// let segments = segments_from_row(&row);
/// assert_eq!(segments.len(), 3);
/// assert_eq!(segments[0].text, "xx");
/// assert_eq!(segments[2].color, red);
/// ```
#[must_use]
pub fn segments_from_row(row: &[ColoredChar]) -> Vec<ConsoleLogSegment> {
    row.chunk_by(|a, b| a.color == b.color)
        .map(|run| ConsoleLogSegment {
            text: run.iter().map(|c| c.ch).collect(),
            color: run[0].color,
        })
        .collect()
}

/// Escape for embedding inside a single-quoted JavaScript string.
fn escape_js(text: &str) -> String {
    text.replace('\\', "\\\\").replace('\'', "\\'")
}

/// `%` would otherwise be read as a format directive by the console.
fn escape_format(text: &str) -> String {
    text.replace('%', "%%")
}

/// One `console.log(...)` statement for a row of segments.
///
/// The argument separator is always written, so a row without segments
/// gives `console.log('', );`.
///
/// # Example
/// ```
/// use aa_core::color::Rgb;
/// use aa_ascii::console_log::{ConsoleLogSegment, format_row};
///
/// let seg = ConsoleLogSegment { text: "50%".into(), color: Rgb::new(1, 2, 3) };
/// assert_eq!(
///     format_row(&[seg]),
///     "console.log('%c50%%', 'color: #010203; font-family: monospace;');"
/// );
/// ```
#[must_use]
pub fn format_row(segments: &[ConsoleLogSegment]) -> String {
    let mut template = String::new();
    for segment in segments {
        template.push_str("%c");
        template.push_str(&escape_format(&segment.text));
    }

    let styles: Vec<String> = segments.iter().map(|s| format!("'{}'", s.style())).collect();
    format!("console.log('{}', {});", escape_js(&template), styles.join(", "))
}

/// Render colored art as newline-separated `console.log` statements.
#[must_use]
pub fn format_as_console_log(art: &ColoredAsciiArt) -> String {
    let statements: Vec<String> = art
        .rows()
        .iter()
        .map(|row| format_row(&segments_from_row(row)))
        .collect();
    log::debug!("console.log: {} instructions", statements.len());
    statements.join("\n")
}
