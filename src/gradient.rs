//! Two-stop gradient decorations and color utilities.

use csscolorparser::Color as CssColor;
use palette::Srgb;
use ratatui::style::{Color, Style};
use ratatui::text::Span;

/// Gradient direction used everywhere: top-left towards bottom-right.
pub const GRADIENT_ANGLE_DEG: u16 = 135;

/// Stop color substituted in terminal rendering when a stop fails to parse.
/// The CSS output is never substituted; garbage passes through verbatim.
const FALLBACK_STOP: Srgb<u8> = Srgb::new(0x99, 0x99, 0x99);

/// Parse a color in any CSS format into an `Srgb<u8>`.
pub fn parse_color(input: &str) -> Result<Srgb<u8>, String> {
    let css_color: CssColor = input
        .parse()
        .map_err(|e| format!("Invalid color '{}': {}", input, e))?;
    let [r, g, b, _a] = css_color.to_rgba8();
    Ok(Srgb::new(r, g, b))
}

/// Convert sRGB to hex string (with # prefix).
pub fn srgb_to_hex(color: Srgb<u8>) -> String {
    format!("#{:02x}{:02x}{:02x}", color.red, color.green, color.blue)
}

/// A text decoration fading from one color stop to another.
///
/// Construction never fails and performs no validation; unparseable stops
/// reach the CSS output untouched and fall back to gray in the terminal.
///
/// # Example
///
/// ```
/// use role_preview::gradient::Decoration;
///
/// let deco = Decoration::new("#000000", "#ffffff");
/// assert!(deco.css().contains("linear-gradient(135deg, #000000, #ffffff)"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoration {
    color_one: String,
    color_two: String,
}

impl Decoration {
    pub fn new(color_one: impl Into<String>, color_two: impl Into<String>) -> Self {
        Self {
            color_one: color_one.into(),
            color_two: color_two.into(),
        }
    }

    /// The two stops, in gradient order.
    pub fn stops(&self) -> (&str, &str) {
        (&self.color_one, &self.color_two)
    }

    /// The CSS style fragment for this decoration: a two-stop linear
    /// gradient clipped to the text glyphs, with a transparent fill so the
    /// gradient shows through.
    pub fn css(&self) -> String {
        format!(
            "background: linear-gradient({}deg, {}, {});\n\
             -webkit-background-clip: text;\n\
             background-clip: text;\n\
             color: transparent;",
            GRADIENT_ANGLE_DEG, self.color_one, self.color_two
        )
    }

    /// Sample the gradient at `t` in `[0, 1]`.
    ///
    /// Interpolation is linear per sRGB channel, matching how CSS blends
    /// gradient stops by default.
    ///
    /// # Example
    ///
    /// ```
    /// use palette::Srgb;
    /// use role_preview::gradient::Decoration;
    ///
    /// let deco = Decoration::new("#000000", "#ffffff");
    /// assert_eq!(deco.sample(0.0), Srgb::new(0u8, 0, 0));
    /// assert_eq!(deco.sample(1.0), Srgb::new(255u8, 255, 255));
    /// ```
    pub fn sample(&self, t: f32) -> Srgb<u8> {
        let start = parse_color(&self.color_one).unwrap_or(FALLBACK_STOP);
        let end = parse_color(&self.color_two).unwrap_or(FALLBACK_STOP);
        lerp_srgb(start, end, t.clamp(0.0, 1.0))
    }

    /// Render `text` as ratatui spans with one gradient sample per glyph,
    /// the terminal stand-in for glyph-clipped gradient text.
    ///
    /// A single glyph gets the first stop; an empty string yields no spans.
    pub fn styled_spans(&self, text: &str) -> Vec<Span<'static>> {
        let chars: Vec<char> = text.chars().collect();
        if chars.is_empty() {
            return Vec::new();
        }
        let start = parse_color(&self.color_one).unwrap_or(FALLBACK_STOP);
        let end = parse_color(&self.color_two).unwrap_or(FALLBACK_STOP);
        let last = chars.len().saturating_sub(1).max(1) as f32;

        chars
            .iter()
            .enumerate()
            .map(|(i, c)| {
                let color = if chars.len() == 1 {
                    start
                } else {
                    lerp_srgb(start, end, i as f32 / last)
                };
                Span::styled(
                    c.to_string(),
                    Style::default().fg(Color::Rgb(color.red, color.green, color.blue)),
                )
            })
            .collect()
    }
}

/// Linear per-channel interpolation between two sRGB colors.
fn lerp_srgb(start: Srgb<u8>, end: Srgb<u8>, t: f32) -> Srgb<u8> {
    let channel = |a: u8, b: u8| -> u8 {
        let v = f32::from(a) + (f32::from(b) - f32::from(a)) * t;
        v.round().clamp(0.0, 255.0) as u8
    };
    Srgb::new(
        channel(start.red, end.red),
        channel(start.green, end.green),
        channel(start.blue, end.blue),
    )
}
