//! Color algebra: mixing, lightness, saturation, opacity and grading.
//!
//! Every operation is pure and answers in the input's representation (hex
//! for named input, since a computed color rarely has a keyword). Work
//! happens in whichever space makes the operation simple: HSLA for
//! lightness and saturation, RGBA for opacity and inversion, YIQ for
//! temperature and black point.
//!
//! Results are clamped to their domain whatever the sign or magnitude of a
//! multiplier.

use rand::Rng;

use crate::color::Color;
use crate::error::{ColorError, Result};
use crate::space::{Hsl, Hsla, Rgb, Rgba, Space, Yiq};

/// Round-trips `color` through HSLA, applying `edit` in between.
fn through_hsla(color: &Color, edit: impl FnOnce(&mut Hsla)) -> Result<Color> {
    let mut hsla = Hsla::from_rgba(&color.to_rgba()?);
    edit(&mut hsla);
    Color::from_rgba(&hsla.to_rgba(), color.kind().result_kind())
}

/// Round-trips `color` through YIQ, applying `edit` in between.
fn through_yiq(color: &Color, edit: impl FnOnce(&mut Yiq)) -> Result<Color> {
    let rgba = color.to_rgba()?;
    let mut yiq = Yiq::from_rgb(&rgba.channels());
    edit(&mut yiq);
    let rgb = yiq.to_rgb();
    Color::from_rgba(
        &Rgba::new(rgb.red, rgb.green, rgb.blue, rgba.alpha),
        color.kind().result_kind(),
    )
}

fn scale_percent(value: f64, multiplier: f64, increase: bool) -> f64 {
    let change = value * multiplier;
    let next = if increase { value + change } else { value - change };
    next.clamp(0.0, 100.0)
}

// ─── Lightness & saturation ─────────────────────────────────────────────────

/// Raises lightness by `lightness * multiplier`.
pub fn lighten(color: &Color, multiplier: f64) -> Result<Color> {
    through_hsla(color, |c| c.lightness = scale_percent(c.lightness, multiplier, true))
}

/// Lowers lightness by `lightness * multiplier`.
pub fn darken(color: &Color, multiplier: f64) -> Result<Color> {
    through_hsla(color, |c| c.lightness = scale_percent(c.lightness, multiplier, false))
}

/// Raises saturation by `saturation * multiplier`.
pub fn saturate(color: &Color, multiplier: f64) -> Result<Color> {
    through_hsla(color, |c| c.saturation = scale_percent(c.saturation, multiplier, true))
}

/// Lowers saturation by `saturation * multiplier`.
pub fn desaturate(color: &Color, multiplier: f64) -> Result<Color> {
    through_hsla(color, |c| c.saturation = scale_percent(c.saturation, multiplier, false))
}

/// Fully desaturated.
pub fn grayscale(color: &Color) -> Result<Color> {
    desaturate(color, 1.0)
}

/// True when every RGB channel rounds to the same value.
pub fn is_grayscale(color: &Color) -> Result<bool> {
    let [r, g, b] = color.to_rgb()?.to_bytes();
    Ok(r == g && g == b)
}

// ─── Opacity ────────────────────────────────────────────────────────────────

fn background_rgb(background: Option<&Color>) -> Result<Rgb> {
    background.map_or(Ok(Rgb::WHITE), |c| c.to_rgb())
}

/// Applies `alpha` to the color.
///
/// Alpha representations keep the new alpha; opaque ones are composited
/// over `background` (white when `None`).
fn with_alpha(color: &Color, alpha: f64, background: Option<&Color>) -> Result<Color> {
    let rgba = color.to_rgba()?.with_alpha(alpha.clamp(0.0, 1.0));
    let kind = color.kind().result_kind();
    if kind.has_alpha() {
        Color::from_rgba(&rgba, kind)
    } else {
        Color::from_rgb(&rgba.over(&background_rgb(background)?), kind)
    }
}

/// Sets opacity, clamped to `[0, 1]`.
pub fn set_opacity(color: &Color, opacity: f64, background: Option<&Color>) -> Result<Color> {
    with_alpha(color, opacity, background)
}

/// Raises alpha by `alpha * multiplier`.
pub fn increase_opacity(
    color: &Color,
    multiplier: f64,
    background: Option<&Color>,
) -> Result<Color> {
    let alpha = color.to_rgba()?.alpha;
    with_alpha(color, alpha + alpha * multiplier, background)
}

/// Lowers alpha by `alpha * multiplier`.
pub fn decrease_opacity(
    color: &Color,
    multiplier: f64,
    background: Option<&Color>,
) -> Result<Color> {
    let alpha = color.to_rgba()?.alpha;
    with_alpha(color, alpha - alpha * multiplier, background)
}

/// Each channel subtracted from 255; alpha preserved.
pub fn invert(color: &Color) -> Result<Color> {
    let rgba = color.to_rgba()?;
    let inverted = Rgba::new(
        255.0 - rgba.red,
        255.0 - rgba.green,
        255.0 - rgba.blue,
        rgba.alpha,
    );
    Color::from_rgba(&inverted, color.kind().result_kind())
}

// ─── Mixing & grading ───────────────────────────────────────────────────────

/// Equal-weight average of RGB channels, in the first color's
/// representation.
pub fn mix(colors: &[Color]) -> Result<Color> {
    let first = colors
        .first()
        .ok_or_else(|| ColorError::InvalidArgument("mix needs at least one color".to_string()))?;

    let mut sum = Rgb::BLACK;
    for color in colors {
        let rgb = color.to_rgb()?;
        sum.red += rgb.red;
        sum.green += rgb.green;
        sum.blue += rgb.blue;
    }
    let n = colors.len() as f64;
    let average = Rgb::new(sum.red / n, sum.green / n, sum.blue / n);
    Color::from_rgb(&average, first.kind().result_kind())
}

/// Warms (positive) or cools (negative) a color by shifting I and Q.
pub fn temperature(color: &Color, multiplier: f64) -> Result<Color> {
    let mut shift = multiplier * 20000.0 / 2000.0;
    if shift > 0.0 {
        shift *= 2.0;
    }
    through_yiq(color, |c| {
        c.i += shift;
        c.q -= shift;
    })
}

/// Moves the black point: `Y = (1 + m) * Y - m`.
pub fn black_point(color: &Color, multiplier: f64) -> Result<Color> {
    through_yiq(color, |c| c.y = (1.0 + multiplier) * c.y - multiplier)
}

/// Perceived brightness, `0..=255`.
pub fn brightness(color: &Color) -> Result<f64> {
    let rgb = color.to_rgb()?;
    Ok((299.0 * rgb.red + 587.0 * rgb.green + 114.0 * rgb.blue) / 1000.0)
}

/// Sum of absolute channel differences.
pub fn brightness_difference(a: &Color, b: &Color) -> Result<f64> {
    let a = a.to_rgb()?;
    let b = b.to_rgb()?;
    Ok((a.red - b.red).abs() + (a.green - b.green).abs() + (a.blue - b.blue).abs())
}

/// Default lightness gap used by [`select_foreground`].
pub const DEFAULT_FOREGROUND_DIFFERENCE: f64 = 45.0;

/// A foreground readable on `background`.
///
/// Starts from `foreground` (or the background's complement) and sets its
/// lightness `difference` points away from the background's: above it on
/// dark backgrounds, below it on light ones. Heuristic only; no contrast-ratio
/// guarantee.
pub fn select_foreground(
    background: &Color,
    foreground: Option<&Color>,
    difference: Option<f64>,
) -> Result<Color> {
    let difference = difference.unwrap_or(DEFAULT_FOREGROUND_DIFFERENCE);
    let foreground = match foreground {
        Some(color) => color.clone(),
        None => crate::palette::complement(background)?,
    };

    let backdrop = Hsl::from_rgb(&background.to_rgb()?);
    through_hsla(&foreground, |c| {
        let target = if backdrop.lightness < 50.0 {
            backdrop.lightness + difference
        } else {
            backdrop.lightness - difference
        };
        c.lightness = target.clamp(0.0, 100.0);
    })
}

/// Broad hue family of a color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shade {
    Gray,
    Red,
    Orange,
    Brown,
    Yellow,
    Green,
    Blue,
    Purple,
}

impl Shade {
    pub fn name(self) -> &'static str {
        match self {
            Shade::Gray => "gray",
            Shade::Red => "red",
            Shade::Orange => "orange",
            Shade::Brown => "brown",
            Shade::Yellow => "yellow",
            Shade::Green => "green",
            Shade::Blue => "blue",
            Shade::Purple => "magenta / purple",
        }
    }
}

/// Buckets a color by hue.
pub fn shade(color: &Color) -> Result<Shade> {
    if is_grayscale(color)? {
        return Ok(Shade::Gray);
    }
    let hue = Hsl::from_rgb(&color.to_rgb()?).hue;
    Ok(match hue {
        h if !(10.0..340.0).contains(&h) => Shade::Red,
        h if h < 31.0 => Shade::Orange,
        h if h < 41.0 => Shade::Brown,
        h if h < 66.0 => Shade::Yellow,
        h if h < 161.0 => Shade::Green,
        h if h < 256.0 => Shade::Blue,
        _ => Shade::Purple,
    })
}

// ─── Bit depth ──────────────────────────────────────────────────────────────

/// Per-channel bit counts for each supported total depth.
const DEPTHS: &[(u32, [u32; 3])] = &[
    (3, [1, 1, 1]),
    (6, [2, 2, 2]),
    (9, [3, 3, 3]),
    (12, [4, 4, 4]),
    (15, [5, 5, 5]),
    (16, [5, 6, 5]),
    (18, [6, 6, 6]),
    (21, [7, 7, 7]),
    (24, [8, 8, 8]),
];

/// Quantizes to a total bit depth, returning the integer level of each
/// channel (`0..2^bits`).
pub fn set_color_depth(color: &Color, bits: u32) -> Result<[u32; 3]> {
    let [r, g, b] = DEPTHS
        .iter()
        .find(|(total, _)| *total == bits)
        .map(|(_, channels)| *channels)
        .ok_or_else(|| ColorError::InvalidArgument(format!("unsupported color depth {}", bits)))?;
    set_color_depth_channels(color, r, g, b)
}

/// Quantizes with explicit per-channel bit counts (`1..=8` each).
pub fn set_color_depth_channels(
    color: &Color,
    red_bits: u32,
    green_bits: u32,
    blue_bits: u32,
) -> Result<[u32; 3]> {
    let rgb = color.to_rgb()?;
    let level = |value: f64, bits: u32| -> Result<u32> {
        if !(1..=8).contains(&bits) {
            return Err(ColorError::InvalidArgument(format!(
                "channel depth must be 1..=8 bits, got {}",
                bits
            )));
        }
        let max = ((1u32 << bits) - 1) as f64;
        Ok((value.clamp(0.0, 255.0) * max / 255.0).round() as u32)
    };
    Ok([
        level(rgb.red, red_bits)?,
        level(rgb.green, green_bits)?,
        level(rgb.blue, blue_bits)?,
    ])
}

// ─── Channels & noise ───────────────────────────────────────────────────────

/// An RGB channel selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Channel {
    Red,
    Green,
    Blue,
}

/// One RGB channel, compositing alpha over `background` (white when `None`).
pub fn channel(color: &Color, which: Channel, background: Option<&Color>) -> Result<f64> {
    let rgb = color.to_rgb_over(&background_rgb(background)?)?;
    Ok(match which {
        Channel::Red => rgb.red,
        Channel::Green => rgb.green,
        Channel::Blue => rgb.blue,
    })
}

/// Adds independent random noise of up to `±change * 255` to each channel.
pub fn mutate<R: Rng + ?Sized>(color: &Color, change: f64, rng: &mut R) -> Result<Color> {
    let rgba = color.to_rgba()?;
    let spread = (change.abs() * 255.0).min(255.0);
    let mut jitter = |value: f64| {
        let delta = if spread > 0.0 {
            rng.gen_range(-spread..=spread)
        } else {
            0.0
        };
        (value + delta).clamp(0.0, 255.0)
    };
    let mutated = Rgba::new(
        jitter(rgba.red),
        jitter(rgba.green),
        jitter(rgba.blue),
        rgba.alpha,
    );
    Color::from_rgba(&mutated, color.kind().result_kind())
}
