//! Luma/chroma encodings from broadcast and video standards.
//!
//! All five take RGB channels in `0..=255`; the inverse transforms clamp
//! their output back into that range.

use std::fmt;

use super::rgb::Rgb;
use super::{clamp_channel, write_functional, Space};
use crate::kind::ColorKind;

/// Declares a three-component luma/chroma struct with forward and inverse
/// matrices.
macro_rules! luma_chroma {
    (
        $(#[$meta:meta])*
        $ty:ident, $kind:expr, $name:literal, ($l:ident, $c1:ident, $c2:ident),
        from_rgb: |$r:ident, $g:ident, $b:ident| $forward:expr,
        to_rgb: |$sl:ident, $sc1:ident, $sc2:ident| $inverse:expr $(,)?
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq)]
        pub struct $ty {
            pub $l: f64,
            pub $c1: f64,
            pub $c2: f64,
        }

        impl $ty {
            pub const fn new($l: f64, $c1: f64, $c2: f64) -> Self {
                Self { $l, $c1, $c2 }
            }
        }

        impl Space for $ty {
            const KIND: ColorKind = $kind;

            fn from_rgb(rgb: &Rgb) -> Self {
                let ($r, $g, $b) = (rgb.red, rgb.green, rgb.blue);
                let (l, c1, c2) = $forward;
                Self::new(l, c1, c2)
            }

            fn to_rgb(&self) -> Rgb {
                let ($sl, $sc1, $sc2) = (self.$l, self.$c1, self.$c2);
                let (r, g, b) = $inverse;
                Rgb::new(clamp_channel(r), clamp_channel(g), clamp_channel(b))
            }

            fn components(&self) -> Vec<f64> {
                vec![self.$l, self.$c1, self.$c2]
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write_functional(f, $name, &self.components())
            }
        }
    };
}

luma_chroma! {
    /// NTSC YIQ.
    Yiq, ColorKind::Yiq, "yiq", (y, i, q),
    from_rgb: |r, g, b| (
        0.299 * r + 0.587 * g + 0.114 * b,
        0.595716 * r - 0.274453 * g - 0.321263 * b,
        0.211456 * r - 0.522591 * g + 0.311135 * b,
    ),
    to_rgb: |y, i, q| (
        y + 0.9563 * i + 0.6210 * q,
        y - 0.2721 * i - 0.6474 * q,
        y - 1.1070 * i + 1.7046 * q,
    ),
}

luma_chroma! {
    /// PAL YUV.
    Yuv, ColorKind::Yuv, "yuv", (y, u, v),
    from_rgb: |r, g, b| (
        0.299 * r + 0.587 * g + 0.114 * b,
        -0.14713 * r - 0.28886 * g + 0.436 * b,
        0.615 * r - 0.51499 * g - 0.10001 * b,
    ),
    to_rgb: |y, u, v| (
        y + 1.13983 * v,
        y - 0.39465 * u - 0.5806 * v,
        y + 2.03211 * u,
    ),
}

luma_chroma! {
    /// SECAM YDbDr.
    YDbDr, ColorKind::YDbDr, "ydbdr", (y, db, dr),
    from_rgb: |r, g, b| (
        0.299 * r + 0.587 * g + 0.114 * b,
        -0.45 * r - 0.883 * g + 1.333 * b,
        -1.333 * r + 1.116 * g + 0.217 * b,
    ),
    to_rgb: |y, db, dr| (
        y + 0.000092303716148 * db - 0.525912630661865 * dr,
        y - 0.129132898890509 * db + 0.267899328207599 * dr,
        y + 0.664679059978955 * db - 0.000079202543533 * dr,
    ),
}

luma_chroma! {
    /// ITU-R BT.601 YCbCr with studio-swing offsets.
    YCbCr, ColorKind::YCbCr, "ycbcr", (y, cb, cr),
    from_rgb: |r, g, b| (
        16.0 + (0.257 * r + 0.504 * g + 0.098 * b),
        128.0 + (-0.148 * r - 0.291 * g + 0.439 * b),
        128.0 + (0.439 * r - 0.368 * g - 0.071 * b),
    ),
    to_rgb: |y, cb, cr| {
        let luma = 1.164 * (y - 16.0);
        (
            luma + 1.596 * (cr - 128.0),
            luma - 0.392 * (cb - 128.0) - 0.813 * (cr - 128.0),
            luma + 2.017 * (cb - 128.0),
        )
    },
}

luma_chroma! {
    /// ITU-R BT.709 YPbPr.
    YPbPr, ColorKind::YPbPr, "ypbpr", (y, pb, pr),
    from_rgb: |r, g, b| (
        0.213 * r + 0.715 * g + 0.072 * b,
        -0.115 * r - 0.385 * g + 0.5 * b,
        0.5 * r - 0.454 * g - 0.046 * b,
    ),
    to_rgb: |y, pb, pr| (
        y + 1.575 * pr,
        y - 0.187 * pb - 0.468 * pr,
        y + 1.856 * pb,
    ),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrips<S: Space>(rgb: Rgb, tolerance: f64) -> bool {
        let back = S::from_rgb(&rgb).to_rgb();
        (back.red - rgb.red).abs() <= tolerance
            && (back.green - rgb.green).abs() <= tolerance
            && (back.blue - rgb.blue).abs() <= tolerance
    }

    #[test]
    fn test_luma_of_white() {
        let yiq = Yiq::from_rgb(&Rgb::WHITE);
        assert!((yiq.y - 255.0).abs() < 1e-9);
        assert!(yiq.i.abs() < 1e-3);
        assert!(yiq.q.abs() < 1e-3);
    }

    #[test]
    fn test_ycbcr_black_offsets() {
        assert_eq!(YCbCr::from_rgb(&Rgb::BLACK), YCbCr::new(16.0, 128.0, 128.0));
    }

    #[test]
    fn test_roundtrips_within_a_channel_step() {
        let color = Rgb::new(200.0, 120.0, 40.0);
        assert!(roundtrips::<Yiq>(color, 1.0));
        assert!(roundtrips::<Yuv>(color, 1.0));
        assert!(roundtrips::<YDbDr>(color, 1.0));
        assert!(roundtrips::<YCbCr>(color, 1.0));
        assert!(roundtrips::<YPbPr>(color, 1.5));
    }

    #[test]
    fn test_inverse_clamps() {
        let rgb = Yuv::new(0.0, -100.0, -100.0).to_rgb();
        assert!(rgb.red >= 0.0 && rgb.green <= 255.0 && rgb.blue >= 0.0);
    }
}
