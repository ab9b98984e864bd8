//! Subtractive process color.

use std::fmt;

use super::rgb::Rgb;
use super::{write_functional, Space};
use crate::kind::ColorKind;

/// Cyan, magenta, yellow and key (black), each `0..=1`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cmyk {
    pub cyan: f64,
    pub magenta: f64,
    pub yellow: f64,
    pub key: f64,
}

impl Cmyk {
    pub const fn new(cyan: f64, magenta: f64, yellow: f64, key: f64) -> Self {
        Self {
            cyan,
            magenta,
            yellow,
            key,
        }
    }

    /// True when every component lies in `0..=1`.
    pub fn in_range(&self) -> bool {
        self.components().iter().all(|c| (0.0..=1.0).contains(c))
    }
}

impl Space for Cmyk {
    const KIND: ColorKind = ColorKind::Cmyk;

    fn from_rgb(rgb: &Rgb) -> Self {
        if rgb.red == 0.0 && rgb.green == 0.0 && rgb.blue == 0.0 {
            return Self::new(0.0, 0.0, 0.0, 1.0);
        }

        let c = 1.0 - rgb.red / 255.0;
        let m = 1.0 - rgb.green / 255.0;
        let y = 1.0 - rgb.blue / 255.0;
        let k = c.min(m).min(y);

        if k >= 1.0 {
            return Self::new(0.0, 0.0, 0.0, 1.0);
        }
        Self::new(
            (c - k) / (1.0 - k),
            (m - k) / (1.0 - k),
            (y - k) / (1.0 - k),
            k,
        )
    }

    fn to_rgb(&self) -> Rgb {
        let channel = |ink: f64| (1.0 - (ink * (1.0 - self.key) + self.key).min(1.0)) * 255.0;
        Rgb::new(
            channel(self.cyan),
            channel(self.magenta),
            channel(self.yellow),
        )
    }

    fn components(&self) -> Vec<f64> {
        vec![self.cyan, self.magenta, self.yellow, self.key]
    }
}

impl fmt::Display for Cmyk {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_functional(f, "cmyk", &self.components())
    }
}
