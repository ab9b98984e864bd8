//! Hue rotation, color harmonies and gradients.
//!
//! Harmonies are fixed angle lists fed to [`shift_hue`]. Angles apply
//! cumulatively: each one rotates the hue produced by the previous, so
//! `[90, 90, 90]` walks the remaining three corners of a square.
//!
//! | Harmony | Angles |
//! |---------|--------|
//! | complement | `180` |
//! | analogous | `-30, 60` |
//! | split | `-150, 300` |
//! | triad | `-120, 240` |
//! | square | `90 × 3` |
//! | tetradic | `60, 120, 60` |
//! | pentadic | `72 × 4` |
//! | hexadic | `60 × 5` |
//! | octadic | `45 × 7` |
//! | decadic | `36 × 9` |

use crate::color::Color;
use crate::error::{ColorError, Result};
use crate::space::cylindrical;
use crate::space::{Hsla, Rgb};

/// Default number of colors per gradient segment, endpoints included.
pub const DEFAULT_GRADIENT_STEPS: usize = 5;

/// Rotates the hue once per angle, returning each intermediate color.
pub fn shift_hue(color: &Color, angles: &[f64]) -> Result<Vec<Color>> {
    let kind = color.kind().result_kind();
    let mut hsla = Hsla::from_rgba(&color.to_rgba()?);
    angles
        .iter()
        .map(|angle| {
            hsla.hue = cylindrical::shift_hue(hsla.hue, *angle);
            Color::from_rgba(&hsla.to_rgba(), kind)
        })
        .collect()
}

/// Rotates the hue by a single angle.
pub fn shift_hue_by(color: &Color, angle: f64) -> Result<Color> {
    let mut shifted = shift_hue(color, &[angle])?;
    shifted
        .pop()
        .ok_or_else(|| ColorError::InvalidArgument("no hue shift produced".to_string()))
}

/// The color opposite on the wheel.
pub fn complement(color: &Color) -> Result<Color> {
    shift_hue_by(color, 180.0)
}

/// A named color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Harmony {
    Complement,
    Analogous,
    Split,
    Triad,
    Square,
    Tetradic,
    Pentadic,
    Hexadic,
    Octadic,
    Decadic,
}

impl Harmony {
    pub const ALL: [Harmony; 10] = [
        Harmony::Complement,
        Harmony::Analogous,
        Harmony::Split,
        Harmony::Triad,
        Harmony::Square,
        Harmony::Tetradic,
        Harmony::Pentadic,
        Harmony::Hexadic,
        Harmony::Octadic,
        Harmony::Decadic,
    ];

    /// Cumulative hue steps for the scheme.
    pub fn angles(self) -> Vec<f64> {
        match self {
            Harmony::Complement => vec![180.0],
            Harmony::Analogous => vec![-30.0, 60.0],
            Harmony::Split => vec![-150.0, 300.0],
            Harmony::Triad => vec![-120.0, 240.0],
            Harmony::Square => vec![90.0; 3],
            Harmony::Tetradic => vec![60.0, 120.0, 60.0],
            Harmony::Pentadic => vec![72.0; 4],
            Harmony::Hexadic => vec![60.0; 5],
            Harmony::Octadic => vec![45.0; 7],
            Harmony::Decadic => vec![36.0; 9],
        }
    }
}

/// The other members of `scheme` for `color`, in rotation order.
pub fn harmony(color: &Color, scheme: Harmony) -> Result<Vec<Color>> {
    shift_hue(color, &scheme.angles())
}

/// Linear RGB interpolation through `colors`.
///
/// Each neighbouring pair becomes a segment of `steps` colors (default
/// [`DEFAULT_GRADIENT_STEPS`]); shared endpoints appear once. Results take
/// the first color's representation.
pub fn gradient(colors: &[Color], steps: Option<usize>) -> Result<Vec<Color>> {
    let steps = steps.unwrap_or(DEFAULT_GRADIENT_STEPS);
    if steps < 2 {
        return Err(ColorError::InvalidArgument(format!(
            "gradient needs at least 2 steps, got {}",
            steps
        )));
    }
    let first = match colors {
        [first, _, ..] => first,
        _ => {
            return Err(ColorError::InvalidArgument(
                "gradient needs at least two colors".to_string(),
            ))
        }
    };

    let kind = first.kind().result_kind();
    let stops = colors
        .iter()
        .map(Color::to_rgb)
        .collect::<Result<Vec<Rgb>>>()?;

    let increments = (steps - 1) as f64;
    let mut out = vec![Color::from_rgb(&stops[0], kind)?];
    for pair in stops.windows(2) {
        let (from, to) = (&pair[0], &pair[1]);
        for i in 1..steps {
            let t = i as f64 / increments;
            let point = Rgb::new(
                from.red + (to.red - from.red) * t,
                from.green + (to.green - from.green) * t,
                from.blue + (to.blue - from.blue) * t,
            );
            out.push(Color::from_rgb(&point, kind)?);
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kind::ColorKind;
    use crate::space::{Hsl, Space};

    fn color(text: &str) -> Color {
        Color::parse(text).unwrap()
    }

    fn hue(color: &Color) -> f64 {
        Hsl::from_rgb(&color.to_rgb().unwrap()).hue
    }

    // =========================================================================
    // Hue shifting
    // =========================================================================

    #[test]
    fn test_complement_of_red() {
        let cyan = complement(&color("#ff0000")).unwrap();
        assert_eq!(cyan.to_string(), "#00ffff");
    }

    #[test]
    fn test_shift_hue_is_cumulative() {
        let out = shift_hue(&color("hsl(0, 100%, 50%)"), &[90.0, 90.0, 90.0]).unwrap();
        let hues: Vec<f64> = out.iter().map(|c| hue(c).round()).collect();
        assert_eq!(hues, vec![90.0, 180.0, 270.0]);
    }

    #[test]
    fn test_shift_hue_wraps_negative() {
        let out = shift_hue_by(&color("hsl(10, 100%, 50%)"), -30.0).unwrap();
        assert_eq!(out.to_string(), "hsl(340, 100%, 50%)");
    }

    #[test]
    fn test_shift_hue_keeps_alpha() {
        let out = complement(&color("rgba(255, 0, 0, 0.5)")).unwrap();
        assert_eq!(out.to_string(), "rgba(0, 255, 255, 0.5)");
    }

    #[test]
    fn test_named_complement_is_hex() {
        let out = complement(&color("blue")).unwrap();
        assert_eq!(out.kind(), ColorKind::Hex);
        assert_eq!(out.to_string(), "#ffff00");
    }

    // =========================================================================
    // Harmonies
    // =========================================================================

    #[test]
    fn test_harmony_sizes() {
        let base = color("#336699");
        let sizes: Vec<usize> = Harmony::ALL
            .iter()
            .map(|h| harmony(&base, *h).unwrap().len())
            .collect();
        assert_eq!(sizes, vec![1, 2, 2, 2, 3, 3, 4, 5, 7, 9]);
    }

    #[test]
    fn test_triad_hues() {
        let out = harmony(&color("hsl(0, 100%, 50%)"), Harmony::Triad).unwrap();
        let hues: Vec<f64> = out.iter().map(|c| hue(c).round()).collect();
        assert_eq!(hues, vec![240.0, 120.0]);
    }

    // =========================================================================
    // Gradient
    // =========================================================================

    #[test]
    fn test_gradient_default_steps() {
        let out = gradient(&[color("#000000"), color("#ffffff")], None).unwrap();
        let hexes: Vec<String> = out.iter().map(|c| c.to_string()).collect();
        assert_eq!(hexes, vec!["#000000", "#404040", "#808080", "#bfbfbf", "#ffffff"]);
    }

    #[test]
    fn test_gradient_shares_endpoints() {
        let out = gradient(&[color("red"), color("lime"), color("blue")], Some(3)).unwrap();
        assert_eq!(out.len(), 5);
        assert_eq!(out[0].to_string(), "#ff0000");
        assert_eq!(out[2].to_string(), "#00ff00");
        assert_eq!(out[4].to_string(), "#0000ff");
    }

    #[test]
    fn test_gradient_rejects_degenerate_input() {
        assert!(gradient(&[color("red")], None).is_err());
        assert!(gradient(&[color("red"), color("blue")], Some(1)).is_err());
    }
}
