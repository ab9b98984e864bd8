//! Property-based tests for color conversion and algebra using proptest.

use proptest::prelude::*;
use stylecraft_color::search::{self, Weighting};
use stylecraft_color::space::cylindrical::shift_hue;
use stylecraft_color::{adjust, palette, Color, ColorKind, Hex, Hsl, Rgb, Space};

// ============================================================================
// Test helpers
// ============================================================================

fn rgb_strategy() -> impl Strategy<Value = [u8; 3]> {
    any::<[u8; 3]>()
}

fn hex_color(bytes: [u8; 3]) -> Color {
    Color::Hex(Hex::from_bytes(bytes))
}

fn within_one(a: [u8; 3], b: [u8; 3]) -> bool {
    a.iter().zip(b.iter()).all(|(x, y)| x.abs_diff(*y) <= 1)
}

/// Kinds whose conversion from RGB is numerically invertible.
const INVERTIBLE: &[ColorKind] = &[
    ColorKind::Hex,
    ColorKind::Rgb,
    ColorKind::Rgba,
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

// ============================================================================
// Property tests
// ============================================================================

proptest! {
    /// Hex text parses back to the same bytes.
    #[test]
    fn hex_text_round_trips(bytes in rgb_strategy()) {
        let text = Hex::from_bytes(bytes).to_string();
        let parsed = Color::parse(&text).unwrap();
        prop_assert_eq!(parsed.to_rgb().unwrap().to_bytes(), bytes);
    }

    /// RGB -> HSL -> RGB stays within one unit per channel.
    #[test]
    fn hsl_round_trips_within_one(bytes in rgb_strategy()) {
        let rgb = Rgb::new(bytes[0] as f64, bytes[1] as f64, bytes[2] as f64);
        let back = Hsl::from_rgb(&rgb).to_rgb().to_bytes();
        prop_assert!(within_one(back, bytes), "{:?} -> {:?}", bytes, back);
    }

    /// Converting out and back through any invertible kind preserves the color.
    #[test]
    fn conversions_round_trip(bytes in rgb_strategy(), index in 0..INVERTIBLE.len()) {
        let kind = INVERTIBLE[index];
        let source = hex_color(bytes);
        let back = source.convert(kind).unwrap().convert(ColorKind::Hex).unwrap();
        let out = back.to_rgb().unwrap().to_bytes();
        prop_assert!(within_one(out, bytes), "{}: {:?} -> {:?}", kind, bytes, out);
    }

    /// Hue shifts land in [0, 360) and undo cleanly.
    #[test]
    fn hue_shift_wraps_and_inverts(hue in 0.0f64..360.0, angle in -1080i32..1080) {
        let angle = angle as f64;
        let shifted = shift_hue(hue, angle);
        prop_assert!((0.0..360.0).contains(&shifted));

        let back = shift_hue(shifted, -angle);
        let gap = (back - hue).abs();
        prop_assert!(gap < 1e-9 || (360.0 - gap) < 1e-9, "{} -> {}", hue, back);
    }

    /// The complement of the complement is the original color.
    #[test]
    fn complement_is_an_involution(bytes in rgb_strategy()) {
        let color = hex_color(bytes);
        let twice = palette::complement(&palette::complement(&color).unwrap()).unwrap();
        prop_assert!(within_one(twice.to_rgb().unwrap().to_bytes(), bytes));
    }

    /// Lightness adjustments clamp whatever the multiplier.
    #[test]
    fn lightness_adjustments_clamp(bytes in rgb_strategy(), multiplier in -20.0f64..20.0) {
        let color = hex_color(bytes);
        for adjusted in [
            adjust::lighten(&color, multiplier).unwrap(),
            adjust::darken(&color, multiplier).unwrap(),
        ] {
            let Color::Hsl(hsl) = adjusted.convert(ColorKind::Hsl).unwrap() else {
                panic!("expected HSL");
            };
            prop_assert!((0.0..=100.0).contains(&hsl.lightness));
        }
    }

    /// Opacity adjustments keep alpha in [0, 1].
    #[test]
    fn opacity_adjustments_clamp(bytes in rgb_strategy(), multiplier in -20.0f64..20.0) {
        let color = Color::parse(&format!("rgba({}, {}, {}, 0.5)", bytes[0], bytes[1], bytes[2])).unwrap();
        for adjusted in [
            adjust::increase_opacity(&color, multiplier, None).unwrap(),
            adjust::decrease_opacity(&color, multiplier, None).unwrap(),
        ] {
            let alpha = adjusted.to_rgba().unwrap().alpha;
            prop_assert!((0.0..=1.0).contains(&alpha));
        }
    }

    /// Distance is symmetric, non-negative and zero only on identity.
    #[test]
    fn distance_is_symmetric(a in rgb_strategy(), b in rgb_strategy()) {
        let (ca, cb) = (hex_color(a), hex_color(b));
        for weighting in [Weighting::Perceptual, Weighting::Uniform] {
            let ab = search::distance(&ca, &cb, weighting).unwrap();
            let ba = search::distance(&cb, &ca, weighting).unwrap();
            prop_assert_eq!(ab, ba);
            prop_assert!(ab >= 0.0);
            prop_assert_eq!(ab == 0.0, a == b);
        }
    }
}
