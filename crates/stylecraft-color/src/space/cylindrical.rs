//! Hue-based cylinders: HSL, HSLA and HSV.
//!
//! Hue is in degrees `[0, 360)`; saturation, lightness and value are
//! percentages `0..=100`.

use std::fmt;

use super::rgb::{Rgb, Rgba};
use super::{format_number, round_to, write_functional, Space};
use crate::kind::ColorKind;

/// Adds `angle` to `hue` and wraps into `[0, 360)` by whole turns.
pub fn shift_hue(hue: f64, angle: f64) -> f64 {
    let mut shifted = hue + angle;
    if !shifted.is_finite() {
        return shifted;
    }
    while shifted < 0.0 {
        shifted += 360.0;
    }
    while shifted >= 360.0 {
        shifted -= 360.0;
    }
    shifted
}

/// Hue as printed: whole degrees in `[0, 360)`.
fn display_hue(hue: f64) -> f64 {
    hue.round().rem_euclid(360.0) + 0.0
}

/// Three-piece hue-to-channel helper, `t` is a phase in turns.
fn hue_to_channel(p: f64, q: f64, mut t: f64) -> f64 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 0.5 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

// ─── HSL ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsl {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
}

impl Hsl {
    pub const fn new(hue: f64, saturation: f64, lightness: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
        }
    }
}

impl Space for Hsl {
    const KIND: ColorKind = ColorKind::Hsl;

    fn from_rgb(rgb: &Rgb) -> Self {
        let r = rgb.red / 255.0;
        let g = rgb.green / 255.0;
        let b = rgb.blue / 255.0;
        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        if max == min {
            return Self::new(0.0, 0.0, lightness * 100.0);
        }

        let d = max - min;
        let saturation = if lightness > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };
        let sector = if max == r {
            (g - b) / d + if g < b { 6.0 } else { 0.0 }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };
        let hue = sector / 6.0;

        Self::new(hue * 360.0, saturation * 100.0, lightness * 100.0)
    }

    fn to_rgb(&self) -> Rgb {
        let h = self.hue / 360.0;
        let s = self.saturation / 100.0;
        let l = self.lightness / 100.0;

        if s == 0.0 {
            let v = l * 255.0;
            return Rgb::new(v, v, v);
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Rgb::new(
            hue_to_channel(p, q, h + 1.0 / 3.0) * 255.0,
            hue_to_channel(p, q, h) * 255.0,
            hue_to_channel(p, q, h - 1.0 / 3.0) * 255.0,
        )
    }

    fn components(&self) -> Vec<f64> {
        vec![self.hue, self.saturation, self.lightness]
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsl({}, {}%, {}%)",
            display_hue(self.hue),
            self.saturation.round(),
            self.lightness.round()
        )
    }
}

// ─── HSLA ───────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub hue: f64,
    pub saturation: f64,
    pub lightness: f64,
    pub alpha: f64,
}

impl Hsla {
    pub const fn new(hue: f64, saturation: f64, lightness: f64, alpha: f64) -> Self {
        Self {
            hue,
            saturation,
            lightness,
            alpha,
        }
    }

    pub fn from_rgba(rgba: &Rgba) -> Self {
        let hsl = Hsl::from_rgb(&rgba.channels());
        Self::new(hsl.hue, hsl.saturation, hsl.lightness, rgba.alpha)
    }

    pub fn to_rgba(&self) -> Rgba {
        let rgb = self.hsl().to_rgb();
        Rgba::new(rgb.red, rgb.green, rgb.blue, self.alpha)
    }

    /// The color without its alpha channel.
    pub fn hsl(&self) -> Hsl {
        Hsl::new(self.hue, self.saturation, self.lightness)
    }
}

impl Space for Hsla {
    const KIND: ColorKind = ColorKind::Hsla;

    fn from_rgb(rgb: &Rgb) -> Self {
        Self::from_rgba(&Rgba::opaque(rgb))
    }

    fn to_rgb(&self) -> Rgb {
        self.to_rgba().to_rgb()
    }

    fn components(&self) -> Vec<f64> {
        vec![self.hue, self.saturation, self.lightness, self.alpha]
    }
}

impl fmt::Display for Hsla {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "hsla({}, {}%, {}%, {})",
            display_hue(self.hue),
            self.saturation.round(),
            self.lightness.round(),
            format_number(round_to(self.alpha, 2))
        )
    }
}

// ─── HSV ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsv {
    pub hue: f64,
    pub saturation: f64,
    pub value: f64,
}

impl Hsv {
    pub const fn new(hue: f64, saturation: f64, value: f64) -> Self {
        Self {
            hue,
            saturation,
            value,
        }
    }
}

impl Space for Hsv {
    const KIND: ColorKind = ColorKind::Hsv;

    fn from_rgb(rgb: &Rgb) -> Self {
        let max = rgb.max();
        let diff = max - rgb.min();
        let saturation = if max == 0.0 { 0.0 } else { 100.0 * diff / max };

        let mut hue = if saturation == 0.0 {
            0.0
        } else if rgb.red == max {
            60.0 * (rgb.green - rgb.blue) / diff
        } else if rgb.green == max {
            120.0 + 60.0 * (rgb.blue - rgb.red) / diff
        } else {
            240.0 + 60.0 * (rgb.red - rgb.green) / diff
        };
        if hue < 0.0 {
            hue += 360.0;
        }

        Self::new(hue, saturation, max * 100.0 / 255.0)
    }

    fn to_rgb(&self) -> Rgb {
        if self.saturation == 0.0 {
            let v = self.value * 2.55;
            return Rgb::new(v, v, v);
        }

        let h = self.hue / 60.0;
        let s = self.saturation / 100.0;
        let v = self.value / 100.0;
        let i = h.floor();
        let f = h - i;
        let p = v * (1.0 - s);
        let q = v * (1.0 - s * f);
        let t = v * (1.0 - s * (1.0 - f));

        let (r, g, b) = match i as i64 {
            0 => (v, t, p),
            1 => (q, v, p),
            2 => (p, v, t),
            3 => (p, q, v),
            4 => (t, p, v),
            _ => (v, p, q),
        };
        Rgb::new(r * 255.0, g * 255.0, b * 255.0)
    }

    fn components(&self) -> Vec<f64> {
        vec![self.hue, self.saturation, self.value]
    }
}

impl fmt::Display for Hsv {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_functional(f, "hsv", &self.components())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    #[test]
    fn test_shift_hue_wraps() {
        assert_eq!(shift_hue(350.0, 20.0), 10.0);
        assert_eq!(shift_hue(10.0, -20.0), 350.0);
        assert_eq!(shift_hue(180.0, 180.0), 0.0);
        assert_eq!(shift_hue(0.0, 1080.0), 0.0);
    }

    #[test]
    fn test_display_hue_stays_below_a_turn() {
        let almost_red = Hsl::from_rgb(&Rgb::new(255.0, 0.0, 1.0));
        assert!(almost_red.hue > 359.5);
        assert_eq!(almost_red.to_string(), "hsl(0, 100%, 50%)");

        let hsla = Hsla::new(almost_red.hue, 100.0, 50.0, 0.5);
        assert_eq!(hsla.to_string(), "hsla(0, 100%, 50%, 0.5)");
    }

    #[test]
    fn test_hsl_primaries() {
        let red = Hsl::from_rgb(&Rgb::new(255.0, 0.0, 0.0));
        assert_eq!(red, Hsl::new(0.0, 100.0, 50.0));

        let blue = Hsl::from_rgb(&Rgb::new(0.0, 0.0, 255.0));
        assert!(approx(blue.hue, 240.0));
    }

    #[test]
    fn test_hsl_gray_has_no_saturation() {
        let gray = Hsl::from_rgb(&Rgb::new(128.0, 128.0, 128.0));
        assert_eq!(gray.saturation, 0.0);
        assert_eq!(gray.hue, 0.0);
    }

    #[test]
    fn test_hsl_to_rgb() {
        let rgb = Hsl::new(120.0, 100.0, 25.0).to_rgb();
        assert_eq!(rgb.to_bytes(), [0, 128, 0]);
    }

    #[test]
    fn test_hsl_display() {
        assert_eq!(Hsl::new(210.4, 50.5, 40.0).to_string(), "hsl(210, 51%, 40%)");
        assert_eq!(
            Hsla::new(0.0, 100.0, 50.0, 1.0).to_string(),
            "hsla(0, 100%, 50%, 1)"
        );
    }

    #[test]
    fn test_hsla_keeps_alpha() {
        let rgba = Rgba::new(255.0, 0.0, 0.0, 0.25);
        let hsla = Hsla::from_rgba(&rgba);
        assert_eq!(hsla.alpha, 0.25);
        assert_eq!(hsla.to_rgba().channels().to_bytes(), [255, 0, 0]);
    }

    #[test]
    fn test_hsv_roundtrip_orange() {
        let orange = Rgb::new(255.0, 165.0, 0.0);
        let hsv = Hsv::from_rgb(&orange);
        assert!(approx(hsv.hue, 38.82352941176471));
        assert!(approx(hsv.saturation, 100.0));
        assert!(approx(hsv.value, 100.0));
        assert_eq!(hsv.to_rgb().to_bytes(), [255, 165, 0]);
    }

    #[test]
    fn test_hsv_black() {
        let hsv = Hsv::from_rgb(&Rgb::BLACK);
        assert_eq!(hsv, Hsv::new(0.0, 0.0, 0.0));
        assert_eq!(hsv.to_rgb(), Rgb::BLACK);
    }
}
