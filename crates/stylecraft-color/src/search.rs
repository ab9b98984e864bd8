//! Color distance, nearest-color search and sort comparators.
//!
//! Distance is Euclidean in RGB. The default [`Weighting::Perceptual`]
//! scales squared channel deltas by `0.3 / 0.59 / 0.11`, approximating how
//! strongly the eye responds to each primary.
//!
//! ```rust
//! use stylecraft_color::{search, Color, Palette, Weighting};
//!
//! let teal = Color::parse("#008081").unwrap();
//! let near = search::nearest(&teal, Some(1), &Palette::WebSafe, Weighting::Perceptual).unwrap();
//! assert_eq!(near, vec!["008080".to_string()]);
//! ```

use std::cmp::Ordering;

use crate::color::Color;
use crate::error::{ColorError, Result};
use crate::names::{self, Named, Palette};
use crate::space::{Hex, Rgb, Space};

/// Default number of results for [`nearest`].
pub const DEFAULT_NEAREST_LIMIT: usize = 10;

/// How channel deltas are weighted in [`distance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Weighting {
    /// Luminance-sensitivity bias.
    #[default]
    Perceptual,
    /// Plain Euclidean distance.
    Uniform,
}

fn rgb_distance(a: &Rgb, b: &Rgb, weighting: Weighting) -> f64 {
    let dr = a.red - b.red;
    let dg = a.green - b.green;
    let db = a.blue - b.blue;
    match weighting {
        Weighting::Perceptual => (0.3 * dr * dr + 0.59 * dg * dg + 0.11 * db * db).sqrt(),
        Weighting::Uniform => (dr * dr + dg * dg + db * db).sqrt(),
    }
}

/// Distance between two colors in RGB space.
pub fn distance(a: &Color, b: &Color, weighting: Weighting) -> Result<f64> {
    Ok(rgb_distance(&a.to_rgb()?, &b.to_rgb()?, weighting))
}

/// Candidates ordered by distance from `target`, excluding `target` itself.
fn ranked(target: &Hex, palette: &Palette, weighting: Weighting) -> Vec<(Hex, String, f64)> {
    let origin = target.to_rgb();
    let mut ranked: Vec<(Hex, String, f64)> = palette
        .candidates()
        .into_iter()
        .filter(|(hex, _)| hex != target)
        .map(|(hex, label)| {
            let d = rgb_distance(&origin, &hex.to_rgb(), weighting);
            (hex, label, d)
        })
        .collect();
    ranked.sort_by(|a, b| a.2.total_cmp(&b.2));
    ranked
}

/// The single closest candidate, which may be `target` itself.
pub(crate) fn closest(
    target: &Hex,
    palette: &Palette,
    weighting: Weighting,
) -> Option<(Hex, String)> {
    let origin = target.to_rgb();
    palette
        .candidates()
        .into_iter()
        .map(|(hex, label)| {
            let d = rgb_distance(&origin, &hex.to_rgb(), weighting);
            (hex, label, d)
        })
        .min_by(|a, b| a.2.total_cmp(&b.2))
        .map(|(hex, label, _)| (hex, label))
}

/// Hex values (without `#`) of the closest candidates, nearest first.
///
/// `limit` of `None` returns every candidate. The color itself is never
/// part of the result; ties keep table order.
pub fn nearest(
    color: &Color,
    limit: Option<usize>,
    palette: &Palette,
    weighting: Weighting,
) -> Result<Vec<String>> {
    let target = Hex::from_rgb(&color.to_rgb()?);
    let mut found: Vec<String> = ranked(&target, palette, weighting)
        .into_iter()
        .map(|(hex, _, _)| hex.value())
        .collect();
    if let Some(limit) = limit {
        found.truncate(limit);
    }
    Ok(found)
}

/// Hex values of the farthest candidates, farthest first.
pub fn distant(
    color: &Color,
    limit: Option<usize>,
    palette: &Palette,
    weighting: Weighting,
) -> Result<Vec<String>> {
    let mut found = nearest(color, None, palette, weighting)?;
    found.reverse();
    if let Some(limit) = limit {
        found.truncate(limit);
    }
    Ok(found)
}

/// The nearest of the sixteen web-safe colors, in the input's representation.
pub fn to_web_safe(color: &Color, weighting: Weighting) -> Result<Color> {
    let hex = Hex::from_rgb(&color.to_rgb()?);
    if names::is_web_safe(&hex) {
        return Ok(color.clone());
    }
    let (safe, _) = closest(&hex, &Palette::WebSafe, weighting)
        .ok_or_else(|| ColorError::InvalidArgument("empty web-safe palette".to_string()))?;

    if color.kind() == crate::ColorKind::Named {
        return Ok(Named::from_rgb(&safe.to_rgb())?.into());
    }
    Color::from_rgb(&safe.to_rgb(), color.kind())
}

/// The CSS keyword for a color.
///
/// Without `approximate` only an exact match succeeds; with it the nearest
/// keyword is returned.
pub fn to_named(color: &Color, approximate: bool, weighting: Weighting) -> Result<Named> {
    let rgb = color.to_rgb()?;
    match Named::from_rgb(&rgb) {
        Ok(named) => Ok(named),
        Err(err) if !approximate => Err(err),
        Err(_) => {
            let (hex, _) = closest(&Hex::from_rgb(&rgb), &Palette::Named, weighting)
                .ok_or_else(|| ColorError::InvalidArgument("empty named palette".to_string()))?;
            Named::from_rgb(&hex.to_rgb())
        }
    }
}

// ─── Comparators ────────────────────────────────────────────────────────────

fn rgb_or_black(color: &Color) -> Rgb {
    color.to_rgb().unwrap_or(Rgb::BLACK)
}

/// Brightest first.
pub fn by_brightness(a: &Color, b: &Color) -> Ordering {
    let key = |c: &Color| {
        let rgb = rgb_or_black(c);
        (299.0 * rgb.red + 587.0 * rgb.green + 114.0 * rgb.blue) / 1000.0
    };
    key(b).total_cmp(&key(a))
}

fn by_channel(a: &Color, b: &Color, channel: fn(&Rgb) -> (f64, f64)) -> Ordering {
    let (a_main, a_rest) = channel(&rgb_or_black(a));
    let (b_main, b_rest) = channel(&rgb_or_black(b));
    b_main
        .total_cmp(&a_main)
        .then_with(|| a_rest.total_cmp(&b_rest))
}

/// Most red first; ties go to the lower sum of green and blue.
pub fn by_red(a: &Color, b: &Color) -> Ordering {
    by_channel(a, b, |c| (c.red, c.green + c.blue))
}

/// Most green first; ties go to the lower sum of red and blue.
pub fn by_green(a: &Color, b: &Color) -> Ordering {
    by_channel(a, b, |c| (c.green, c.red + c.blue))
}

/// Most blue first; ties go to the lower sum of red and green.
pub fn by_blue(a: &Color, b: &Color) -> Ordering {
    by_channel(a, b, |c| (c.blue, c.red + c.green))
}

fn by_relative(a: &Color, b: &Color, channel: fn(&Rgb) -> f64) -> Ordering {
    channel(&rgb_or_black(b)).total_cmp(&channel(&rgb_or_black(a)))
}

/// Red dominance over the other two channels, highest first.
pub fn by_red_relative(a: &Color, b: &Color) -> Ordering {
    by_relative(a, b, |c| c.red - (c.green + c.blue) / 2.0)
}

/// Green dominance over the other two channels, highest first.
pub fn by_green_relative(a: &Color, b: &Color) -> Ordering {
    by_relative(a, b, |c| c.green - (c.red + c.blue) / 2.0)
}

/// Blue dominance over the other two channels, highest first.
pub fn by_blue_relative(a: &Color, b: &Color) -> Ordering {
    by_relative(a, b, |c| c.blue - (c.red + c.green) / 2.0)
}
