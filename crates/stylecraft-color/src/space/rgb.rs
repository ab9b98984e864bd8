//! RGB hub, its alpha form, the painter's RYB wheel and hex notation.

use std::fmt;

use rand::Rng;

use super::{clamp_channel, format_alpha, write_functional, Space};
use crate::error::{ColorError, Result};
use crate::kind::ColorKind;

// ─── RGB ────────────────────────────────────────────────────────────────────

/// Additive red/green/blue, channels nominally `0..=255`.
///
/// Channels are kept as `f64` so arithmetic between conversions does not
/// accumulate rounding; text output rounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255.0, 255.0, 255.0);
    pub const BLACK: Rgb = Rgb::new(0.0, 0.0, 0.0);

    pub const fn new(red: f64, green: f64, blue: f64) -> Self {
        Self { red, green, blue }
    }

    /// Channels clamped to `0..=255` and rounded to integers.
    pub fn to_bytes(&self) -> [u8; 3] {
        [
            clamp_channel(self.red).round() as u8,
            clamp_channel(self.green).round() as u8,
            clamp_channel(self.blue).round() as u8,
        ]
    }

    /// Uniformly random integral channels.
    pub fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::new(
            rng.gen_range(0..=255u8) as f64,
            rng.gen_range(0..=255u8) as f64,
            rng.gen_range(0..=255u8) as f64,
        )
    }

    pub(crate) fn max(&self) -> f64 {
        self.red.max(self.green).max(self.blue)
    }

    pub(crate) fn min(&self) -> f64 {
        self.red.min(self.green).min(self.blue)
    }
}

impl Space for Rgb {
    const KIND: ColorKind = ColorKind::Rgb;

    fn from_rgb(rgb: &Rgb) -> Self {
        *rgb
    }

    fn to_rgb(&self) -> Rgb {
        *self
    }

    fn components(&self) -> Vec<f64> {
        vec![self.red, self.green, self.blue]
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgb({}, {}, {})",
            self.red.round(),
            self.green.round(),
            self.blue.round()
        )
    }
}

// ─── RGBA ───────────────────────────────────────────────────────────────────

/// RGB with an alpha channel in `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub red: f64,
    pub green: f64,
    pub blue: f64,
    pub alpha: f64,
}

impl Rgba {
    pub const fn new(red: f64, green: f64, blue: f64, alpha: f64) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Fully opaque version of an RGB color.
    pub fn opaque(rgb: &Rgb) -> Self {
        Self::new(rgb.red, rgb.green, rgb.blue, 1.0)
    }

    /// The channels without alpha applied.
    pub fn channels(&self) -> Rgb {
        Rgb::new(self.red, self.green, self.blue)
    }

    /// Composites the color over an opaque background.
    pub fn over(&self, background: &Rgb) -> Rgb {
        let a = self.alpha;
        Rgb::new(
            a * self.red + (1.0 - a) * background.red,
            a * self.green + (1.0 - a) * background.green,
            a * self.blue + (1.0 - a) * background.blue,
        )
    }

    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }
}

impl Space for Rgba {
    const KIND: ColorKind = ColorKind::Rgba;

    fn from_rgb(rgb: &Rgb) -> Self {
        Self::opaque(rgb)
    }

    fn to_rgb(&self) -> Rgb {
        self.over(&Rgb::WHITE)
    }

    fn components(&self) -> Vec<f64> {
        vec![self.red, self.green, self.blue, self.alpha]
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.red.round(),
            self.green.round(),
            self.blue.round(),
            format_alpha(self.alpha)
        )
    }
}

// ─── RYB ────────────────────────────────────────────────────────────────────

/// Subtractive red/yellow/blue painter's wheel, channels `0..=255`.
///
/// Conversion removes the white component, redistributes green between
/// yellow and blue (and back), then rescales so the strongest channel keeps
/// its magnitude.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ryb {
    pub red: f64,
    pub yellow: f64,
    pub blue: f64,
}

impl Ryb {
    pub const fn new(red: f64, yellow: f64, blue: f64) -> Self {
        Self { red, yellow, blue }
    }
}

impl Space for Ryb {
    const KIND: ColorKind = ColorKind::Ryb;

    fn from_rgb(rgb: &Rgb) -> Self {
        let white = rgb.min();
        let mut red = rgb.red - white;
        let mut green = rgb.green - white;
        let mut blue = rgb.blue - white;
        let mut yellow = red.min(green);
        let peak = red.max(green).max(blue);

        red -= yellow;
        green -= yellow;

        if green != 0.0 && blue != 0.0 {
            green /= 2.0;
            blue /= 2.0;
        }

        yellow += green;
        blue += green;

        let strongest = red.max(yellow).max(blue);
        if strongest != 0.0 {
            let n = peak / strongest;
            red *= n;
            yellow *= n;
            blue *= n;
        }

        Self::new(red + white, yellow + white, blue + white)
    }

    fn to_rgb(&self) -> Rgb {
        let white = self.red.min(self.yellow).min(self.blue);
        let mut red = self.red - white;
        let mut yellow = self.yellow - white;
        let mut blue = self.blue - white;
        let mut green = yellow.min(blue);
        let peak = red.max(yellow).max(blue);

        yellow -= green;
        blue -= green;

        if blue != 0.0 && green != 0.0 {
            blue *= 2.0;
            green *= 2.0;
        }

        red += yellow;
        green += yellow;

        let strongest = red.max(green).max(blue);
        if strongest != 0.0 {
            let n = peak / strongest;
            red *= n;
            green *= n;
            blue *= n;
        }

        Rgb::new(red + white, green + white, blue + white)
    }

    fn components(&self) -> Vec<f64> {
        vec![self.red, self.yellow, self.blue]
    }
}

impl fmt::Display for Ryb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_functional(f, "ryb", &self.components())
    }
}

// ─── Hex ────────────────────────────────────────────────────────────────────

/// Six-digit hexadecimal notation.
///
/// Stored as three bytes, so a `Hex` is always set; invalid text is
/// rejected by [`Hex::parse`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Hex([u8; 3]);

impl Hex {
    pub const fn from_bytes(bytes: [u8; 3]) -> Self {
        Self(bytes)
    }

    /// Parses `#rgb`, `#rrggbb`, `rgb` or `rrggbb`, case-insensitively.
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        let digits = trimmed.strip_prefix('#').unwrap_or(trimmed);
        if !digits.chars().all(|c| c.is_ascii_hexdigit()) {
            return Err(ColorError::InvalidColor(text.to_string()));
        }

        let expanded: String = match digits.len() {
            3 => digits.chars().flat_map(|c| [c, c]).collect(),
            6 => digits.to_string(),
            _ => return Err(ColorError::InvalidColor(text.to_string())),
        };

        let channel = |i: usize| {
            u8::from_str_radix(&expanded[i..i + 2], 16)
                .map_err(|_| ColorError::InvalidColor(text.to_string()))
        };
        Ok(Self([channel(0)?, channel(2)?, channel(4)?]))
    }

    /// The six lowercase digits, without `#`.
    pub fn value(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.0[0], self.0[1], self.0[2])
    }

    pub fn bytes(&self) -> [u8; 3] {
        self.0
    }
}

impl Space for Hex {
    const KIND: ColorKind = ColorKind::Hex;

    fn from_rgb(rgb: &Rgb) -> Self {
        Self(rgb.to_bytes())
    }

    fn to_rgb(&self) -> Rgb {
        Rgb::new(self.0[0] as f64, self.0[1] as f64, self.0[2] as f64)
    }

    fn components(&self) -> Vec<f64> {
        self.0.iter().map(|b| *b as f64).collect()
    }
}

impl fmt::Display for Hex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.value())
    }
}
