//! CIE tristimulus space and the perceptual spaces derived from it.
//!
//! # Pipeline
//!
//! ```text
//! sRGB ──gamma──▶ linear ──matrix──▶ XYZ ──┬──▶ xyY
//!                                          ├──▶ CIELab
//!                                          ├──▶ CIELuv
//!                                          └──▶ HunterLab
//! ```
//!
//! XYZ is scaled so that the D65 white point has `Y = 100`. Where a formula
//! would divide by zero (black in xyY, CIELuv and HunterLab) the result is
//! that space's zero point, so black survives a round trip.

use std::fmt;

use super::rgb::Rgb;
use super::{write_functional, Space};
use crate::kind::ColorKind;

/// D65 reference white, scaled to `Y = 100`.
const XN: f64 = 95.047;
const YN: f64 = 100.000;
const ZN: f64 = 108.883;

/// Threshold below which the LAB transfer curve is linear.
const EPSILON: f64 = 0.008856;

/// Convert an sRGB component (0–255) to linear light (0.0–1.0).
fn srgb_to_linear(c: f64) -> f64 {
    let c = c / 255.0;
    if c <= 0.04045 {
        c / 12.92
    } else {
        ((c + 0.055) / 1.055).powf(2.4)
    }
}

/// Convert linear light to an sRGB component (0–255), unclamped.
fn linear_to_srgb(c: f64) -> f64 {
    let s = if c <= 0.0031308 {
        12.92 * c
    } else {
        1.055 * c.powf(1.0 / 2.4) - 0.055
    };
    s * 255.0
}

/// LAB forward transform helper.
fn lab_f(t: f64) -> f64 {
    if t > EPSILON {
        t.cbrt()
    } else {
        7.787 * t + 16.0 / 116.0
    }
}

/// LAB inverse transform helper.
fn lab_f_inv(t: f64) -> f64 {
    let cube = t * t * t;
    if cube > EPSILON {
        cube
    } else {
        (t - 16.0 / 116.0) / 7.787
    }
}

/// A representation defined relative to CIE XYZ.
pub trait Tristimulus: Sized {
    fn from_xyz(xyz: &Xyz) -> Self;
    fn to_xyz(&self) -> Xyz;
}

/// Implements [`Space`] for a tristimulus type by routing through XYZ.
macro_rules! via_xyz {
    ($ty:ident, $kind:expr, $name:literal, [$($field:ident),+]) => {
        impl Space for $ty {
            const KIND: ColorKind = $kind;

            fn from_rgb(rgb: &Rgb) -> Self {
                Self::from_xyz(&Xyz::from_rgb(rgb))
            }

            fn to_rgb(&self) -> Rgb {
                self.to_xyz().to_rgb()
            }

            fn components(&self) -> Vec<f64> {
                vec![$(self.$field),+]
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_functional(f, $name, &self.components())
            }
        }
    };
}

// ─── XYZ ────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Xyz {
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Tristimulus for Xyz {
    fn from_xyz(xyz: &Xyz) -> Self {
        *xyz
    }

    fn to_xyz(&self) -> Xyz {
        *self
    }
}

impl Space for Xyz {
    const KIND: ColorKind = ColorKind::Xyz;

    fn from_rgb(rgb: &Rgb) -> Self {
        let r = srgb_to_linear(rgb.red) * 100.0;
        let g = srgb_to_linear(rgb.green) * 100.0;
        let b = srgb_to_linear(rgb.blue) * 100.0;

        Self::new(
            r * 0.4124 + g * 0.3576 + b * 0.1805,
            r * 0.2126 + g * 0.7152 + b * 0.0722,
            r * 0.0193 + g * 0.1192 + b * 0.9505,
        )
    }

    fn to_rgb(&self) -> Rgb {
        let x = self.x / 100.0;
        let y = self.y / 100.0;
        let z = self.z / 100.0;

        Rgb::new(
            linear_to_srgb(x * 3.2406 + y * -1.5372 + z * -0.4986),
            linear_to_srgb(x * -0.9689 + y * 1.8758 + z * 0.0415),
            linear_to_srgb(x * 0.0557 + y * -0.2040 + z * 1.0570),
        )
    }

    fn components(&self) -> Vec<f64> {
        vec![self.x, self.y, self.z]
    }
}

impl fmt::Display for Xyz {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_functional(f, "xyz", &self.components())
    }
}

// ─── xyY ────────────────────────────────────────────────────────────────────

/// Chromaticity `(x, y)` plus luminance `Y`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XyY {
    pub x: f64,
    pub y: f64,
    pub luminance: f64,
}

impl XyY {
    pub const fn new(x: f64, y: f64, luminance: f64) -> Self {
        Self { x, y, luminance }
    }
}

impl Tristimulus for XyY {
    fn from_xyz(xyz: &Xyz) -> Self {
        let sum = xyz.x + xyz.y + xyz.z;
        if sum == 0.0 {
            return Self::new(0.0, 0.0, 0.0);
        }
        Self::new(xyz.x / sum, xyz.y / sum, xyz.y)
    }

    fn to_xyz(&self) -> Xyz {
        if self.y == 0.0 {
            return Xyz::new(0.0, 0.0, 0.0);
        }
        Xyz::new(
            self.x * self.luminance / self.y,
            self.luminance,
            (1.0 - self.x - self.y) * self.luminance / self.y,
        )
    }
}

via_xyz!(XyY, ColorKind::XyY, "xyy", [x, y, luminance]);

// ─── CIELab ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CieLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl CieLab {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

impl Tristimulus for CieLab {
    fn from_xyz(xyz: &Xyz) -> Self {
        let fx = lab_f(xyz.x / XN);
        let fy = lab_f(xyz.y / YN);
        let fz = lab_f(xyz.z / ZN);

        Self::new(116.0 * fy - 16.0, 500.0 * (fx - fy), 200.0 * (fy - fz))
    }

    fn to_xyz(&self) -> Xyz {
        let fy = (self.l + 16.0) / 116.0;
        let fx = self.a / 500.0 + fy;
        let fz = fy - self.b / 200.0;

        Xyz::new(XN * lab_f_inv(fx), YN * lab_f_inv(fy), ZN * lab_f_inv(fz))
    }
}

via_xyz!(CieLab, ColorKind::CieLab, "cielab", [l, a, b]);

// ─── CIELuv ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CieLuv {
    pub l: f64,
    pub u: f64,
    pub v: f64,
}

impl CieLuv {
    pub const fn new(l: f64, u: f64, v: f64) -> Self {
        Self { l, u, v }
    }
}

/// Reference white chromaticity `(u', v')`.
fn white_uv() -> (f64, f64) {
    let denominator = XN + 15.0 * YN + 3.0 * ZN;
    (4.0 * XN / denominator, 9.0 * YN / denominator)
}

impl Tristimulus for CieLuv {
    fn from_xyz(xyz: &Xyz) -> Self {
        let denominator = xyz.x + 15.0 * xyz.y + 3.0 * xyz.z;
        if denominator == 0.0 {
            return Self::new(0.0, 0.0, 0.0);
        }
        let u_prime = 4.0 * xyz.x / denominator;
        let v_prime = 9.0 * xyz.y / denominator;
        let (ref_u, ref_v) = white_uv();

        let l = 116.0 * lab_f(xyz.y / YN) - 16.0;
        Self::new(l, 13.0 * l * (u_prime - ref_u), 13.0 * l * (v_prime - ref_v))
    }

    fn to_xyz(&self) -> Xyz {
        if self.l == 0.0 {
            return Xyz::new(0.0, 0.0, 0.0);
        }
        let y = lab_f_inv((self.l + 16.0) / 116.0) * YN;
        let (ref_u, ref_v) = white_uv();
        let u_prime = self.u / (13.0 * self.l) + ref_u;
        let v_prime = self.v / (13.0 * self.l) + ref_v;

        let x = -(9.0 * y * u_prime) / ((u_prime - 4.0) * v_prime - u_prime * v_prime);
        let z = (9.0 * y - 15.0 * v_prime * y - v_prime * x) / (3.0 * v_prime);
        Xyz::new(x, y, z)
    }
}

via_xyz!(CieLuv, ColorKind::CieLuv, "cieluv", [l, u, v]);

// ─── Hunter Lab ─────────────────────────────────────────────────────────────

/// Hunter 1948 Lab, a square-root approximation distinct from CIELab.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HunterLab {
    pub l: f64,
    pub a: f64,
    pub b: f64,
}

impl HunterLab {
    pub const fn new(l: f64, a: f64, b: f64) -> Self {
        Self { l, a, b }
    }
}

impl Tristimulus for HunterLab {
    fn from_xyz(xyz: &Xyz) -> Self {
        if xyz.y <= 0.0 {
            return Self::new(0.0, 0.0, 0.0);
        }
        let root = xyz.y.sqrt();
        Self::new(
            10.0 * root,
            17.5 * (1.02 * xyz.x - xyz.y) / root,
            7.0 * (xyz.y - 0.847 * xyz.z) / root,
        )
    }

    fn to_xyz(&self) -> Xyz {
        let scaled = self.l / 10.0;
        let y = scaled * scaled;
        let x = (self.a / 17.5 * scaled + y) / 1.02;
        let z = -(self.b / 7.0 * scaled - y) / 0.847;
        Xyz::new(x, y, z)
    }
}

via_xyz!(HunterLab, ColorKind::HunterLab, "hunterlab", [l, a, b]);

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64, tolerance: f64) -> bool {
        (a - b).abs() < tolerance
    }

    #[test]
    fn test_white_is_reference_white() {
        let xyz = Xyz::from_rgb(&Rgb::WHITE);
        assert!(close(xyz.x, 95.05, 0.01));
        assert!(close(xyz.y, 100.0, 0.01));
        assert!(close(xyz.z, 108.9, 0.01));
    }

    #[test]
    fn test_lab_of_red() {
        let lab = CieLab::from_rgb(&Rgb::new(255.0, 0.0, 0.0));
        assert!(close(lab.l, 53.24, 0.1));
        assert!(close(lab.a, 80.09, 0.1));
        assert!(close(lab.b, 67.20, 0.1));
    }

    #[test]
    fn test_lab_white_is_neutral() {
        let lab = CieLab::from_rgb(&Rgb::WHITE);
        assert!(close(lab.l, 100.0, 0.01));
        assert!(close(lab.a, 0.0, 0.05));
        assert!(close(lab.b, 0.0, 0.05));
    }

    #[test]
    fn test_black_survives_every_tristimulus_space() {
        assert_eq!(XyY::from_rgb(&Rgb::BLACK).to_rgb().to_bytes(), [0, 0, 0]);
        assert_eq!(CieLuv::from_rgb(&Rgb::BLACK).to_rgb().to_bytes(), [0, 0, 0]);
        assert_eq!(HunterLab::from_rgb(&Rgb::BLACK).to_rgb().to_bytes(), [0, 0, 0]);
        assert_eq!(CieLab::from_rgb(&Rgb::BLACK).to_rgb().to_bytes(), [0, 0, 0]);
    }

    #[test]
    fn test_roundtrip_through_each_space() {
        let color = Rgb::new(51.0, 153.0, 204.0);
        assert_eq!(Xyz::from_rgb(&color).to_rgb().to_bytes(), [51, 153, 204]);
        assert_eq!(XyY::from_rgb(&color).to_rgb().to_bytes(), [51, 153, 204]);
        assert_eq!(CieLab::from_rgb(&color).to_rgb().to_bytes(), [51, 153, 204]);
        assert_eq!(CieLuv::from_rgb(&color).to_rgb().to_bytes(), [51, 153, 204]);
        assert_eq!(HunterLab::from_rgb(&color).to_rgb().to_bytes(), [51, 153, 204]);
    }

    #[test]
    fn test_display_uses_functional_notation() {
        assert_eq!(CieLab::new(50.0, -12.5, 0.0).to_string(), "cielab(50, -12.5, 0)");
    }
}
