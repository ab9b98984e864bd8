//! The tagged color value and generic conversion.
//!
//! [`Color`] is a closed sum over every representation in [`crate::space`]
//! plus [`Named`]. Conversion never inspects value shapes: the source tag
//! picks the path, and the path is always one of
//!
//! 1. identity, when source and target tags match;
//! 2. XYZ, when both tags are tristimulus spaces;
//! 3. RGBA, for everything else (alpha kept when the target has alpha,
//!    composited over white otherwise).

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::{ColorError, Result};
use crate::kind::ColorKind;
use crate::names::{Named, Palette};
use crate::search::{self, Weighting};
use crate::space::{
    CieLab, CieLuv, Cmyk, Hex, Hsl, Hsla, Hsv, HunterLab, Rgb, Rgba, Ryb, Space, Tristimulus,
    XyY, Xyz, YCbCr, YDbDr, YPbPr, Yiq, Yuv,
};

macro_rules! color_enum {
    ($($variant:ident),+ $(,)?) => {
        /// A color in one of the supported representations.
        #[derive(Debug, Clone, PartialEq)]
        pub enum Color {
            $($variant($variant)),+
        }

        impl Color {
            /// Tag of the representation.
            pub fn kind(&self) -> ColorKind {
                match self {
                    $(Color::$variant(_) => ColorKind::$variant),+
                }
            }
        }

        $(
            impl From<$variant> for Color {
                fn from(value: $variant) -> Self {
                    Color::$variant(value)
                }
            }
        )+
    };
}

color_enum!(
    Named, Hex, Rgb, Rgba, Ryb, Hsl, Hsla, Hsv, Xyz, XyY, CieLab, CieLuv, HunterLab, Cmyk, Yiq,
    Yuv, YDbDr, YCbCr, YPbPr,
);

/// Runs `$body` with `$c` bound to the inner value of any variant.
macro_rules! dispatch {
    ($color:expr, $c:ident => $body:expr) => {
        match $color {
            Color::Named($c) => $body,
            Color::Hex($c) => $body,
            Color::Rgb($c) => $body,
            Color::Rgba($c) => $body,
            Color::Ryb($c) => $body,
            Color::Hsl($c) => $body,
            Color::Hsla($c) => $body,
            Color::Hsv($c) => $body,
            Color::Xyz($c) => $body,
            Color::XyY($c) => $body,
            Color::CieLab($c) => $body,
            Color::CieLuv($c) => $body,
            Color::HunterLab($c) => $body,
            Color::Cmyk($c) => $body,
            Color::Yiq($c) => $body,
            Color::Yuv($c) => $body,
            Color::YDbDr($c) => $body,
            Color::YCbCr($c) => $body,
            Color::YPbPr($c) => $body,
        }
    };
}

impl Color {
    /// Parses CSS color text. See [`crate::parse`].
    pub fn parse(text: &str) -> Result<Color> {
        crate::parse::parse(text)
    }

    /// Detects which representation `text` is written in, if any.
    pub fn classify(text: &str) -> Option<ColorKind> {
        crate::parse::classify(text)
    }

    /// Raw components in field order (hex and named colors give RGB bytes).
    pub fn components(&self) -> Vec<f64> {
        dispatch!(self, c => c.components())
    }

    /// True when every component is a finite number.
    pub fn is_set(&self) -> bool {
        dispatch!(self, c => c.is_set())
    }

    fn ensure_set(&self) -> Result<()> {
        if self.is_set() {
            Ok(())
        } else {
            Err(ColorError::InvalidColor(format!("{:?}", self)))
        }
    }

    /// The color in RGBA, alpha preserved for alpha representations.
    pub fn to_rgba(&self) -> Result<Rgba> {
        self.ensure_set()?;
        Ok(match self {
            Color::Rgba(c) => *c,
            Color::Hsla(c) => c.to_rgba(),
            other => Rgba::opaque(&dispatch!(other, c => c.to_rgb())),
        })
    }

    /// The color in RGB, composited over white when it has alpha.
    pub fn to_rgb(&self) -> Result<Rgb> {
        self.to_rgb_over(&Rgb::WHITE)
    }

    /// The color in RGB, composited over `background` when it has alpha.
    pub fn to_rgb_over(&self, background: &Rgb) -> Result<Rgb> {
        Ok(self.to_rgba()?.over(background))
    }

    fn to_xyz(&self) -> Option<Xyz> {
        match self {
            Color::Xyz(c) => Some(*c),
            Color::XyY(c) => Some(c.to_xyz()),
            Color::CieLab(c) => Some(c.to_xyz()),
            Color::CieLuv(c) => Some(c.to_xyz()),
            Color::HunterLab(c) => Some(c.to_xyz()),
            _ => None,
        }
    }

    fn from_xyz(xyz: &Xyz, kind: ColorKind) -> Option<Color> {
        Some(match kind {
            ColorKind::Xyz => Color::Xyz(*xyz),
            ColorKind::XyY => XyY::from_xyz(xyz).into(),
            ColorKind::CieLab => CieLab::from_xyz(xyz).into(),
            ColorKind::CieLuv => CieLuv::from_xyz(xyz).into(),
            ColorKind::HunterLab => HunterLab::from_xyz(xyz).into(),
            _ => return None,
        })
    }

    /// Builds a color of `kind` from RGB.
    ///
    /// Fails only for [`ColorKind::Named`] when no keyword matches exactly.
    pub fn from_rgb(rgb: &Rgb, kind: ColorKind) -> Result<Color> {
        Ok(match kind {
            ColorKind::Named => Named::from_rgb(rgb)?.into(),
            ColorKind::Hex => Hex::from_rgb(rgb).into(),
            ColorKind::Rgb => Rgb::from_rgb(rgb).into(),
            ColorKind::Rgba => Rgba::from_rgb(rgb).into(),
            ColorKind::Ryb => Ryb::from_rgb(rgb).into(),
            ColorKind::Hsl => Hsl::from_rgb(rgb).into(),
            ColorKind::Hsla => Hsla::from_rgb(rgb).into(),
            ColorKind::Hsv => Hsv::from_rgb(rgb).into(),
            ColorKind::Xyz => Xyz::from_rgb(rgb).into(),
            ColorKind::XyY => XyY::from_rgb(rgb).into(),
            ColorKind::CieLab => CieLab::from_rgb(rgb).into(),
            ColorKind::CieLuv => CieLuv::from_rgb(rgb).into(),
            ColorKind::HunterLab => HunterLab::from_rgb(rgb).into(),
            ColorKind::Cmyk => Cmyk::from_rgb(rgb).into(),
            ColorKind::Yiq => Yiq::from_rgb(rgb).into(),
            ColorKind::Yuv => Yuv::from_rgb(rgb).into(),
            ColorKind::YDbDr => YDbDr::from_rgb(rgb).into(),
            ColorKind::YCbCr => YCbCr::from_rgb(rgb).into(),
            ColorKind::YPbPr => YPbPr::from_rgb(rgb).into(),
        })
    }

    /// Builds a color of `kind` from RGBA, keeping alpha where `kind` has it
    /// and compositing over white where it does not.
    pub fn from_rgba(rgba: &Rgba, kind: ColorKind) -> Result<Color> {
        match kind {
            ColorKind::Rgba => Ok(Color::Rgba(*rgba)),
            ColorKind::Hsla => Ok(Hsla::from_rgba(rgba).into()),
            other => Color::from_rgb(&rgba.over(&Rgb::WHITE), other),
        }
    }

    /// Converts to another representation.
    ///
    /// Converting to the source representation returns a copy.
    pub fn convert(&self, to: ColorKind) -> Result<Color> {
        self.ensure_set()?;
        if self.kind() == to {
            return Ok(self.clone());
        }
        if to.is_tristimulus() {
            if let Some(converted) = self.to_xyz().and_then(|xyz| Color::from_xyz(&xyz, to)) {
                return Ok(converted);
            }
        }
        Color::from_rgba(&self.to_rgba()?, to)
    }

    /// Converts to a representation given by name (`"HSL"`, `"cielab"`).
    pub fn convert_to(&self, target: &str) -> Result<Color> {
        let kind = target
            .parse::<ColorKind>()
            .map_err(|_| ColorError::UnsupportedConversion {
                from: self.kind(),
                to: target.to_string(),
            })?;
        self.convert(kind)
    }

    /// CSS text for the color; representations without a CSS form render as
    /// hex.
    pub fn to_css(&self) -> Result<String> {
        self.ensure_set()?;
        if self.kind().is_css() {
            Ok(self.to_string())
        } else {
            Ok(Hex::from_rgb(&self.to_rgb()?).to_string())
        }
    }

    /// A random color of `kind`.
    pub fn random(kind: ColorKind) -> Color {
        Color::random_with(kind, &mut rand::thread_rng())
    }

    /// A random color of `kind`, drawn from a uniformly random RGB triple.
    ///
    /// Random named colors are the keyword nearest to the drawn triple.
    pub fn random_with<R: Rng + ?Sized>(kind: ColorKind, rng: &mut R) -> Color {
        let rgb = Rgb::random_with(rng);
        if kind == ColorKind::Named {
            let hex = Hex::from_rgb(&rgb);
            if let Some((_, name)) = search::closest(&hex, &Palette::Named, Weighting::Perceptual) {
                if let Ok(named) = Named::new(&name) {
                    return named.into();
                }
            }
            return hex.into();
        }
        Color::from_rgb(&rgb, kind).unwrap_or(Color::Rgb(rgb))
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        dispatch!(self, c => fmt::Display::fmt(c, f))
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self> {
        Color::parse(s)
    }
}

impl Serialize for Color {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let css = self.to_css().map_err(serde::ser::Error::custom)?;
        serializer.serialize_str(&css)
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Color::parse(&text).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_named_to_hex() {
        let hex = Color::parse("red").unwrap().convert(ColorKind::Hex).unwrap();
        assert_eq!(hex, Color::Hex(Hex::from_bytes([255, 0, 0])));
        assert_eq!(hex.to_string(), "#ff0000");
    }

    #[test]
    fn test_hex_to_named() {
        let named = Color::parse("#ff0000").unwrap().convert(ColorKind::Named).unwrap();
        assert_eq!(named.to_string(), "red");
    }

    #[test]
    fn test_hex_to_named_without_match() {
        let err = Color::parse("#fe0000").unwrap().convert(ColorKind::Named).unwrap_err();
        assert!(matches!(err, ColorError::NoExactName(_)));
    }

    #[test]
    fn test_self_conversion_is_copy() {
        let hsl = Color::Hsl(Hsl::new(12.5, 40.0, 60.0));
        assert_eq!(hsl.convert(ColorKind::Hsl).unwrap(), hsl);
    }

    #[test]
    fn test_unset_color_is_invalid() {
        let broken = Color::Rgb(Rgb::new(f64::NAN, 0.0, 0.0));
        assert!(!broken.is_set());
        assert!(matches!(broken.convert(ColorKind::Hex), Err(ColorError::InvalidColor(_))));
        assert!(broken.to_css().is_err());
    }

    #[test]
    fn test_alpha_kept_between_alpha_kinds() {
        let rgba = Color::Rgba(Rgba::new(255.0, 0.0, 0.0, 0.5));
        let hsla = rgba.convert(ColorKind::Hsla).unwrap();
        assert_eq!(hsla.to_string(), "hsla(0, 100%, 50%, 0.5)");
        assert_eq!(hsla.convert(ColorKind::Rgba).unwrap(), rgba);
    }

    #[test]
    fn test_alpha_composited_for_opaque_kinds() {
        let rgba = Color::Rgba(Rgba::new(0.0, 0.0, 0.0, 0.5));
        assert_eq!(rgba.convert(ColorKind::Hex).unwrap().to_string(), "#808080");
    }

    #[test]
    fn test_tristimulus_route_skips_rgb() {
        let lab = Color::CieLab(CieLab::new(50.0, 20.0, -30.0));
        let xyz = lab.convert(ColorKind::Xyz).unwrap();
        let back = xyz.convert(ColorKind::CieLab).unwrap();
        let (Color::CieLab(a), Color::CieLab(b)) = (&lab, &back) else {
            panic!("expected CIELab");
        };
        assert!((a.l - b.l).abs() < 1e-9);
        assert!((a.a - b.a).abs() < 1e-9);
        assert!((a.b - b.b).abs() < 1e-9);
    }

    #[test]
    fn test_convert_to_by_name() {
        let color = Color::parse("#00ff00").unwrap();
        assert_eq!(color.convert_to("hsl").unwrap().to_string(), "hsl(120, 100%, 50%)");

        let err = color.convert_to("lch").unwrap_err();
        assert_eq!(
            err,
            ColorError::UnsupportedConversion {
                from: ColorKind::Hex,
                to: "lch".to_string()
            }
        );
    }

    #[test]
    fn test_to_css_for_non_css_kind() {
        let cmyk = Color::Cmyk(Cmyk::new(0.0, 1.0, 1.0, 0.0));
        assert_eq!(cmyk.to_css().unwrap(), "#ff0000");
    }

    #[test]
    fn test_every_kind_reachable_from_rgb() {
        let source = Color::Rgb(Rgb::new(255.0, 255.0, 255.0));
        for kind in ColorKind::ALL {
            let converted = source.convert(kind).unwrap();
            assert_eq!(converted.kind(), kind);
            assert_eq!(converted.to_rgb().unwrap().to_bytes(), [255, 255, 255], "{kind}");
        }
    }

    #[test]
    fn test_random_targets_its_own_kind() {
        let mut rng = StdRng::seed_from_u64(7);
        for kind in ColorKind::ALL {
            assert_eq!(Color::random_with(kind, &mut rng).kind(), kind);
        }
    }

    #[test]
    fn test_serde_as_css_text() {
        let color = Color::Cmyk(Cmyk::new(0.0, 0.0, 0.0, 1.0));
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#000000\"");

        let parsed: Color = serde_json::from_str("\"rgb(1, 2, 3)\"").unwrap();
        assert_eq!(parsed, Color::Rgb(Rgb::new(1.0, 2.0, 3.0)));
    }
}
