//! Color detection and parsing from CSS text.
//!
//! Detection order is fixed: named keyword, then `#hex`, `rgb()`, `rgba()`,
//! `hsl()`, `hsla()`. The first form that matches decides the
//! representation; components are then range-checked, and a recognized form
//! with out-of-range components is an [`InvalidColor`](ColorError::InvalidColor)
//! rather than "not a color".
//!
//! | Form | Ranges |
//! |------|--------|
//! | `#rgb`, `#rrggbb` | hex digits, case-insensitive |
//! | `rgb(r, g, b)` | `0..=255` |
//! | `rgba(r, g, b, a)` | `0..=255`, alpha `0..=1` |
//! | `hsl(h, s%, l%)` | hue `0..=360`, `0..=100` |
//! | `hsla(h, s%, l%, a)` | as `hsl`, alpha `0..=1` |

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::color::Color;
use crate::error::{ColorError, Result};
use crate::kind::ColorKind;
use crate::names::{self, Named};
use crate::space::{Hex, Hsl, Hsla, Rgb, Rgba};

const ALPHA: &str = r"(\.\d+|\d+(?:\.\d+)?)";

static HEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^\s*#[a-f0-9]{3,6}\s*$").expect("hex pattern"));

static RGB: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*rgb\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*\)\s*$").expect("rgb pattern")
});

static RGBA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^\s*rgba\(\s*(\d+)\s*,\s*(\d+)\s*,\s*(\d+)\s*,\s*{}\s*\)\s*$",
        ALPHA
    ))
    .expect("rgba pattern")
});

static HSL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)^\s*hsl\(\s*(\d+)\s*,\s*(\d+)%\s*,\s*(\d+)%\s*\)\s*$").expect("hsl pattern")
});

static HSLA: Lazy<Regex> = Lazy::new(|| {
    Regex::new(&format!(
        r"(?i)^\s*hsla\(\s*(\d+)\s*,\s*(\d+)%\s*,\s*(\d+)%\s*,\s*{}\s*\)\s*$",
        ALPHA
    ))
    .expect("hsla pattern")
});

/// Color literals embedded in free text.
static LITERAL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)#(?:[a-f0-9]{6}|[a-f0-9]{3})\b|rgba?\([^)]*\)|hsla?\([^)]*\)")
        .expect("literal pattern")
});

/// Detects the representation `text` is written in.
///
/// `None` means "not a color"; callers treat such text as a plain value.
pub fn classify(text: &str) -> Option<ColorKind> {
    if names::lookup(text).is_some() {
        Some(ColorKind::Named)
    } else if HEX.is_match(text) {
        Some(ColorKind::Hex)
    } else if RGB.is_match(text) {
        Some(ColorKind::Rgb)
    } else if RGBA.is_match(text) {
        Some(ColorKind::Rgba)
    } else if HSL.is_match(text) {
        Some(ColorKind::Hsl)
    } else if HSLA.is_match(text) {
        Some(ColorKind::Hsla)
    } else {
        None
    }
}

/// Parses CSS color text into the representation it is written in.
pub fn parse(text: &str) -> Result<Color> {
    let invalid = || ColorError::InvalidColor(text.to_string());

    match classify(text).ok_or_else(invalid)? {
        ColorKind::Named => Ok(Named::new(text)?.into()),
        ColorKind::Hex => Ok(Hex::parse(text)?.into()),
        ColorKind::Rgb => {
            let [r, g, b] = numbers::<3>(&RGB, text)?;
            ensure(channels_in_range(&[r, g, b]), text)?;
            Ok(Rgb::new(r, g, b).into())
        }
        ColorKind::Rgba => {
            let [r, g, b, a] = numbers::<4>(&RGBA, text)?;
            ensure(channels_in_range(&[r, g, b]) && unit_range(a), text)?;
            Ok(Rgba::new(r, g, b, a).into())
        }
        ColorKind::Hsl => {
            let [h, s, l] = numbers::<3>(&HSL, text)?;
            ensure(hsl_in_range(h, s, l), text)?;
            Ok(Hsl::new(h, s, l).into())
        }
        ColorKind::Hsla => {
            let [h, s, l, a] = numbers::<4>(&HSLA, text)?;
            ensure(hsl_in_range(h, s, l) && unit_range(a), text)?;
            Ok(Hsla::new(h, s, l, a).into())
        }
        _ => Err(invalid()),
    }
}

/// Rewrites every color literal in `text` into the text form of `kind`.
///
/// Literals that do not parse, or cannot be expressed in `kind`, are left
/// as written.
pub fn recolor(text: &str, kind: ColorKind) -> String {
    LITERAL
        .replace_all(text, |caps: &Captures| {
            let literal = &caps[0];
            match Color::parse(literal).and_then(|c| c.convert(kind)) {
                Ok(color) => color.to_string(),
                Err(e) => {
                    log::debug!("leaving '{}' unchanged: {}", literal, e);
                    literal.to_string()
                }
            }
        })
        .into_owned()
}

fn numbers<const N: usize>(pattern: &Regex, text: &str) -> Result<[f64; N]> {
    let invalid = || ColorError::InvalidColor(text.to_string());
    let caps = pattern.captures(text).ok_or_else(invalid)?;

    let mut out = [0.0; N];
    for (i, slot) in out.iter_mut().enumerate() {
        let value: f64 = caps
            .get(i + 1)
            .and_then(|m| m.as_str().parse().ok())
            .ok_or_else(invalid)?;
        if !value.is_finite() {
            return Err(invalid());
        }
        *slot = value;
    }
    Ok(out)
}

fn ensure(ok: bool, text: &str) -> Result<()> {
    if ok {
        Ok(())
    } else {
        Err(ColorError::InvalidColor(text.to_string()))
    }
}

fn channels_in_range(channels: &[f64]) -> bool {
    channels.iter().all(|c| (0.0..=255.0).contains(c))
}

fn unit_range(value: f64) -> bool {
    (0.0..=1.0).contains(&value)
}

fn hsl_in_range(hue: f64, saturation: f64, lightness: f64) -> bool {
    (0.0..=360.0).contains(&hue)
        && (0.0..=100.0).contains(&saturation)
        && (0.0..=100.0).contains(&lightness)
}
