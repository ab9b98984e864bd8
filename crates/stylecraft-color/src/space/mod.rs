//! Concrete color representations and their conversion formulas.
//!
//! # Hub routing
//!
//! Every representation knows exactly two formulas: how to build itself
//! from [`Rgb`] and how to turn itself back into [`Rgb`]. The perceptual
//! spaces (xyY, CIELab, CIELuv, HunterLab) additionally route through
//! [`Xyz`], so conversions among them never pass through 8-bit RGB.
//!
//! | Module | Types |
//! |--------|-------|
//! | [`rgb`] | [`Rgb`], [`Rgba`], [`Ryb`], [`Hex`] |
//! | [`cylindrical`] | [`Hsl`], [`Hsla`], [`Hsv`] |
//! | [`cie`] | [`Xyz`], [`XyY`], [`CieLab`], [`CieLuv`], [`HunterLab`] |
//! | [`cmyk`] | [`Cmyk`] |
//! | [`video`] | [`Yiq`], [`Yuv`], [`YDbDr`], [`YCbCr`], [`YPbPr`] |

pub mod cie;
pub mod cmyk;
pub mod cylindrical;
pub mod rgb;
pub mod video;

use std::fmt;

use rand::Rng;

pub use cie::{CieLab, CieLuv, HunterLab, Tristimulus, XyY, Xyz};
pub use cmyk::Cmyk;
pub use cylindrical::{Hsl, Hsla, Hsv};
pub use rgb::{Hex, Rgb, Rgba, Ryb};
pub use video::{YCbCr, YDbDr, YPbPr, Yiq, Yuv};

use crate::kind::ColorKind;

/// A numeric color representation connected to the RGB hub.
pub trait Space: Copy + fmt::Display {
    /// Tag of the representation.
    const KIND: ColorKind;

    /// Builds the representation from RGB.
    fn from_rgb(rgb: &Rgb) -> Self;

    /// Converts back to RGB. Alpha representations composite over white.
    fn to_rgb(&self) -> Rgb;

    /// Raw components in field order.
    fn components(&self) -> Vec<f64>;

    /// A value is set when every component is finite.
    fn is_set(&self) -> bool {
        self.components().iter().all(|c| c.is_finite())
    }

    /// A random value, always derived from a uniformly random RGB triple.
    fn random() -> Self {
        Self::from_rgb(&Rgb::random_with(&mut rand::thread_rng()))
    }

    /// Like [`Space::random`] with a caller-supplied generator.
    fn random_with<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from_rgb(&Rgb::random_with(rng))
    }
}

/// Rounds to a fixed number of decimal places.
pub(crate) fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}

/// Shortest decimal form of a number; integral values print without a
/// fraction and negative zero prints as `0`.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        return "0".to_string();
    }
    format!("{}", value)
}

/// Alpha as printed in `rgba()`: integral values keep one decimal.
pub(crate) fn format_alpha(alpha: f64) -> String {
    let alpha = round_to(alpha, 2);
    if alpha.fract() == 0.0 {
        format!("{:.1}", alpha)
    } else {
        format_number(alpha)
    }
}

/// Writes `name(c1, c2, ...)` with components rounded to four places.
pub(crate) fn write_functional(
    f: &mut fmt::Formatter<'_>,
    name: &str,
    components: &[f64],
) -> fmt::Result {
    let parts: Vec<String> = components
        .iter()
        .map(|c| format_number(round_to(*c, 4)))
        .collect();
    write!(f, "{}({})", name, parts.join(", "))
}

/// Clamps a channel into `[0, 255]`.
pub(crate) fn clamp_channel(value: f64) -> f64 {
    value.clamp(0.0, 255.0)
}
