//! # Stylecraft Color - Color Conversion and Algebra
//!
//! `stylecraft-color` parses CSS color text, converts between nineteen color
//! representations, searches named-color tables, and derives new colors
//! (lighter, darker, mixed, complementary, ...).
//!
//! It is the color engine behind the `stylecraft` stylesheet compiler, but
//! has no dependency on it.
//!
//! ## Core Concepts
//!
//! - [`Color`]: a color tagged with its representation ([`ColorKind`])
//! - [`space`]: one struct per numeric representation, all connected to RGB
//! - [`names`]: CSS keywords and the extended descriptive name table
//! - [`adjust`]: lighten, darken, saturate, mix, opacity and friends
//! - [`palette`]: hue rotation, harmonies and gradients
//! - [`search`]: distance, nearest colors and sort comparators
//!
//! ## Quick Start
//!
//! ```rust
//! use stylecraft_color::{adjust, Color, ColorKind};
//!
//! let navy = Color::parse("navy").unwrap();
//! let hsl = navy.convert(ColorKind::Hsl).unwrap();
//! assert_eq!(hsl.to_string(), "hsl(240, 100%, 25%)");
//!
//! let lighter = adjust::lighten(&hsl, 0.5).unwrap();
//! assert_eq!(lighter.to_string(), "hsl(240, 100%, 38%)");
//! ```
//!
//! ## Result Representation
//!
//! Operations answer in the representation they were given. Named input is
//! the one exception: a derived color rarely has a keyword, so it comes back
//! as hex. Converting explicitly to [`ColorKind::Named`] succeeds only on an
//! exact match; [`search::to_named`] can approximate.
//!
//! ## Text Rewriting
//!
//! ```rust
//! use stylecraft_color::{recolor, ColorKind};
//!
//! let css = recolor("linear-gradient(top, #fff, #000)", ColorKind::Rgb);
//! assert_eq!(css, "linear-gradient(top, rgb(255, 255, 255), rgb(0, 0, 0))");
//! ```

pub mod adjust;
mod color;
mod error;
mod kind;
pub mod names;
pub mod palette;
mod parse;
pub mod search;
pub mod space;

pub use color::Color;
pub use error::{ColorError, Result};
pub use kind::ColorKind;

pub use names::{Named, Palette};
pub use parse::{classify, recolor};
pub use search::Weighting;

pub use space::{
    format_number, CieLab, CieLuv, Cmyk, Hex, Hsl, Hsla, Hsv, HunterLab, Rgb, Rgba, Ryb, Space,
    Tristimulus, XyY, Xyz, YCbCr, YDbDr, YPbPr, Yiq, Yuv,
};
