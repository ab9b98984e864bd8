//! The closed set of color representations.
//!
//! Every [`Color`](crate::Color) carries one of these tags. Conversion
//! dispatch, CSS capability checks and result typing are all decided from
//! the tag, never from the shape of the value.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ColorError;

/// Tag identifying a color representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColorKind {
    Named,
    Hex,
    Rgb,
    Rgba,
    Ryb,
    Hsl,
    Hsla,
    Hsv,
    Xyz,
    XyY,
    CieLab,
    CieLuv,
    HunterLab,
    Cmyk,
    Yiq,
    Yuv,
    YDbDr,
    YCbCr,
    YPbPr,
}

impl ColorKind {
    /// Every variant, in declaration order.
    pub const ALL: [ColorKind; 19] = [
        ColorKind::Named,
        ColorKind::Hex,
        ColorKind::Rgb,
        ColorKind::Rgba,
        ColorKind::Ryb,
        ColorKind::Hsl,
        ColorKind::Hsla,
        ColorKind::Hsv,
        ColorKind::Xyz,
        ColorKind::XyY,
        ColorKind::CieLab,
        ColorKind::CieLuv,
        ColorKind::HunterLab,
        ColorKind::Cmyk,
        ColorKind::Yiq,
        ColorKind::Yuv,
        ColorKind::YDbDr,
        ColorKind::YCbCr,
        ColorKind::YPbPr,
    ];

    /// Conventional display name of the variant.
    pub fn name(self) -> &'static str {
        match self {
            ColorKind::Named => "Named",
            ColorKind::Hex => "Hex",
            ColorKind::Rgb => "RGB",
            ColorKind::Rgba => "RGBA",
            ColorKind::Ryb => "RYB",
            ColorKind::Hsl => "HSL",
            ColorKind::Hsla => "HSLA",
            ColorKind::Hsv => "HSV",
            ColorKind::Xyz => "XYZ",
            ColorKind::XyY => "xyY",
            ColorKind::CieLab => "CIELab",
            ColorKind::CieLuv => "CIELuv",
            ColorKind::HunterLab => "HunterLab",
            ColorKind::Cmyk => "CMYK",
            ColorKind::Yiq => "YIQ",
            ColorKind::Yuv => "YUV",
            ColorKind::YDbDr => "YDbDr",
            ColorKind::YCbCr => "YCbCr",
            ColorKind::YPbPr => "YPbPr",
        }
    }

    /// True when the variant has a CSS text form.
    pub fn is_css(self) -> bool {
        matches!(
            self,
            ColorKind::Named
                | ColorKind::Hex
                | ColorKind::Rgb
                | ColorKind::Rgba
                | ColorKind::Hsl
                | ColorKind::Hsla
        )
    }

    /// True when the variant carries an alpha channel.
    pub fn has_alpha(self) -> bool {
        matches!(self, ColorKind::Rgba | ColorKind::Hsla)
    }

    /// True for the perceptual spaces that convert among themselves via XYZ.
    pub fn is_tristimulus(self) -> bool {
        matches!(
            self,
            ColorKind::Xyz
                | ColorKind::XyY
                | ColorKind::CieLab
                | ColorKind::CieLuv
                | ColorKind::HunterLab
        )
    }

    /// Variant in which derived colors are returned.
    ///
    /// A computed color rarely has a name, so operations on named input
    /// answer in hex.
    pub fn result_kind(self) -> ColorKind {
        match self {
            ColorKind::Named => ColorKind::Hex,
            other => other,
        }
    }
}

impl fmt::Display for ColorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ColorKind {
    type Err = ColorError;

    /// Parses a variant name case-insensitively (`"rgb"`, `"CIELab"`, `"xyy"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        ColorKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| ColorError::UnsupportedConversion {
                from: ColorKind::Named,
                to: wanted.to_string(),
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_case_insensitive() {
        assert_eq!("rgb".parse::<ColorKind>().unwrap(), ColorKind::Rgb);
        assert_eq!("cielab".parse::<ColorKind>().unwrap(), ColorKind::CieLab);
        assert_eq!(" XYY ".parse::<ColorKind>().unwrap(), ColorKind::XyY);
    }

    #[test]
    fn test_from_str_unknown() {
        let err = "lch".parse::<ColorKind>().unwrap_err();
        assert!(matches!(err, ColorError::UnsupportedConversion { .. }));
    }

    #[test]
    fn test_css_kinds() {
        let css: Vec<_> = ColorKind::ALL.iter().filter(|k| k.is_css()).collect();
        assert_eq!(css.len(), 6);
        assert!(!ColorKind::Cmyk.is_css());
    }

    #[test]
    fn test_result_kind_for_named() {
        assert_eq!(ColorKind::Named.result_kind(), ColorKind::Hex);
        assert_eq!(ColorKind::Hsla.result_kind(), ColorKind::Hsla);
    }
}
