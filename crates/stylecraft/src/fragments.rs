//! Vendor-prefixed declaration fragments.
//!
//! Each builder returns a small [`Tree`] of declarations meant to be merged
//! into a block with [`Tree::extend`]. Nothing here compiles or validates
//! CSS; a builder only assembles property names and value text.
//!
//! ```rust
//! use stylecraft::{Compiler, Fragments, Tree, Unit};
//!
//! let fx = Fragments::new(Unit::Px);
//! let mut button = Tree::new().add("color", "white");
//! button.extend(fx.border_radius(4));
//!
//! let css = Compiler::new(Unit::Px)
//!     .compile(&Tree::new().add(".button", button))
//!     .render();
//! assert_eq!(
//!     css,
//!     ".button {\n\tcolor: white;\n\t-webkit-border-radius: 4px;\n\t-moz-border-radius: 4px;\n\tborder-radius: 4px\n}"
//! );
//! ```
//!
//! Lengths follow one rule throughout: numbers take the fragment unit, text
//! is used as written, and zero or empty lengths count as absent. Shadow
//! offsets are the exception, where an absent length still prints `0`.

use std::fmt;

use stylecraft_color::{format_number, Color};

use crate::unit::Unit;
use crate::value::{Tree, Value};

// ─── Property tables ────────────────────────────────────────────────────────

const BORDER_RADIUS: &[&str] = &["-webkit-border-radius", "-moz-border-radius", "border-radius"];
const BORDER_RADIUS_TOP_LEFT: &[&str] = &[
    "-webkit-border-top-left-radius",
    "-moz-border-radius-topleft",
    "border-top-left-radius",
];
const BORDER_RADIUS_BOTTOM_LEFT: &[&str] = &[
    "-webkit-border-bottom-left-radius",
    "-moz-border-radius-bottomleft",
    "border-bottom-left-radius",
];
const BORDER_RADIUS_BOTTOM_RIGHT: &[&str] = &[
    "-webkit-border-bottom-right-radius",
    "-moz-border-radius-bottomright",
    "border-bottom-right-radius",
];
const BORDER_RADIUS_TOP_RIGHT: &[&str] = &[
    "-webkit-border-top-right-radius",
    "-moz-border-radius-topright",
    "border-top-right-radius",
];
const LINEAR_GRADIENT: &[&str] = &[
    "-moz-linear-gradient",
    "-webkit-linear-gradient",
    "-o-linear-gradient",
    "-ms-linear-gradient",
    "linear-gradient",
];
const RADIAL_GRADIENT: &[&str] = &[
    "-moz-radial-gradient",
    "-webkit-radial-gradient",
    "-o-radial-gradient",
    "-ms-radial-gradient",
    "radial-gradient",
];
const BOX_SHADOW: &[&str] = &["-moz-box-shadow", "-webkit-box-shadow", "box-shadow"];
const TRANSITION: &[&str] = &["-webkit-transition", "-moz-transition", "-o-transition", "transition"];
const TRANSFORM: &[&str] = &["-webkit-transform", "-moz-transform", "-o-transform", "transform"];
const TRANSFORM_ORIGIN: &[&str] = &[
    "-webkit-transform-origin",
    "-moz-transform-origin",
    "-o-transform-origin",
    "transform-origin",
];
const BOX_SIZING: &[&str] = &["-webkit-box-sizing", "-moz-box-sizing"];

// ─── Arguments ──────────────────────────────────────────────────────────────

/// A length argument: a bare number or ready-made CSS text.
#[derive(Debug, Clone, PartialEq)]
pub enum Length {
    Number(f64),
    Text(String),
}

impl Length {
    /// Zero and empty text are treated as "not given".
    pub fn is_absent(&self) -> bool {
        match self {
            Length::Number(n) => *n == 0.0 || !n.is_finite(),
            Length::Text(text) => text.trim().is_empty(),
        }
    }
}

impl From<f64> for Length {
    fn from(value: f64) -> Self {
        Length::Number(value)
    }
}

impl From<i32> for Length {
    fn from(value: i32) -> Self {
        Length::Number(value as f64)
    }
}

impl From<&str> for Length {
    fn from(value: &str) -> Self {
        Length::Text(value.to_string())
    }
}

impl From<String> for Length {
    fn from(value: String) -> Self {
        Length::Text(value)
    }
}

/// Per-corner radii; corners left `None` are not emitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Corners {
    pub top_left: Option<Length>,
    pub bottom_left: Option<Length>,
    pub bottom_right: Option<Length>,
    pub top_right: Option<Length>,
}

/// Shadow placement keyword for [`Fragments::box_shadow`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowSet {
    Inset,
    Outset,
}

impl ShadowSet {
    pub fn as_str(self) -> &'static str {
        match self {
            ShadowSet::Inset => "inset",
            ShadowSet::Outset => "outset",
        }
    }
}

impl fmt::Display for ShadowSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ─── Builders ───────────────────────────────────────────────────────────────

/// Fragment builders sharing one length unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Fragments {
    unit: Unit,
}

impl Fragments {
    pub fn new(unit: Unit) -> Self {
        Self { unit }
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// One radius for every corner.
    pub fn border_radius(&self, all: impl Into<Length>) -> Tree {
        match self.length(&all.into()) {
            Some(radius) => prefixed(BORDER_RADIUS, &radius),
            None => Tree::new(),
        }
    }

    /// Independent radii; only the corners given are emitted, in
    /// top-left, bottom-left, bottom-right, top-right order.
    pub fn border_radius_corners(&self, corners: Corners) -> Tree {
        let mut out = Tree::new();
        for (names, corner) in [
            (BORDER_RADIUS_TOP_LEFT, &corners.top_left),
            (BORDER_RADIUS_BOTTOM_LEFT, &corners.bottom_left),
            (BORDER_RADIUS_BOTTOM_RIGHT, &corners.bottom_right),
            (BORDER_RADIUS_TOP_RIGHT, &corners.top_right),
        ] {
            if let Some(radius) = corner.as_ref().and_then(|l| self.length(l)) {
                out.extend(prefixed(names, &radius));
            }
        }
        out
    }

    /// `background` fallbacks for a linear gradient.
    ///
    /// Stops that are neither text, numbers nor CSS colors are dropped. A
    /// gradient with no stops at all yields an empty tree.
    pub fn linear_gradient(&self, position: &str, stops: &[Value]) -> Tree {
        if stops.is_empty() {
            return Tree::new();
        }
        gradient(LINEAR_GRADIENT, position, &stop_list(stops))
    }

    /// `background` fallbacks for a radial gradient.
    pub fn radial_gradient(&self, position: &str, shape: &str, stops: &[Value]) -> Tree {
        let head = format!("{}, {}", position, shape);
        gradient(RADIAL_GRADIENT, &head, &stop_list(stops))
    }

    /// `text-shadow: h v [blur] [color]`.
    pub fn text_shadow(
        &self,
        horizontal: impl Into<Length>,
        vertical: impl Into<Length>,
        blur: Option<Length>,
        color: Option<&Color>,
    ) -> Tree {
        let mut parts = vec![self.offset(&horizontal.into()), self.offset(&vertical.into())];
        parts.extend(blur.as_ref().and_then(|l| self.length(l)));
        parts.extend(color.and_then(css_color));
        Tree::new().add("text-shadow", parts.join(" "))
    }

    /// `box-shadow: h v [blur] [spread] [color] [inset|outset]`, with
    /// vendor fallbacks.
    pub fn box_shadow(
        &self,
        horizontal: impl Into<Length>,
        vertical: impl Into<Length>,
        blur: Option<Length>,
        spread: Option<Length>,
        color: Option<&Color>,
        set: Option<ShadowSet>,
    ) -> Tree {
        let mut parts = vec![self.offset(&horizontal.into()), self.offset(&vertical.into())];
        parts.extend(blur.as_ref().and_then(|l| self.length(l)));
        parts.extend(spread.as_ref().and_then(|l| self.length(l)));
        parts.extend(color.and_then(css_color));
        parts.extend(set.map(|s| s.as_str().to_string()));
        prefixed(BOX_SHADOW, &parts.join(" "))
    }

    pub fn transition(&self, transition: &str) -> Tree {
        prefixed_text(TRANSITION, transition)
    }

    pub fn transform(&self, transform: &str) -> Tree {
        prefixed_text(TRANSFORM, transform)
    }

    pub fn transform_origin(&self, origin: &str) -> Tree {
        prefixed_text(TRANSFORM_ORIGIN, origin)
    }

    pub fn box_sizing(&self, sizing: &str) -> Tree {
        prefixed_text(BOX_SIZING, sizing)
    }

    fn length(&self, length: &Length) -> Option<String> {
        if length.is_absent() {
            return None;
        }
        Some(match length {
            Length::Number(n) => format!("{}{}", format_number(*n), self.unit),
            Length::Text(text) => text.trim().to_string(),
        })
    }

    fn offset(&self, length: &Length) -> String {
        self.length(length).unwrap_or_else(|| "0".to_string())
    }
}

// ─── Helpers ────────────────────────────────────────────────────────────────

fn prefixed(names: &[&str], value: &str) -> Tree {
    names.iter().map(|name| (*name, value)).collect()
}

fn prefixed_text(names: &[&str], value: &str) -> Tree {
    let value = value.trim();
    if value.is_empty() {
        return Tree::new();
    }
    prefixed(names, value)
}

fn css_color(color: &Color) -> Option<String> {
    if !color.kind().is_css() || !color.is_set() {
        return None;
    }
    color.to_css().ok()
}

fn stop_list(stops: &[Value]) -> String {
    stops
        .iter()
        .filter_map(|stop| match stop {
            Value::Text(text) => Some(text.clone()),
            Value::Number(n) if n.is_finite() => Some(format_number(*n)),
            Value::Color(color) => css_color(color),
            _ => None,
        })
        .map(|stop| format!(", {}", stop))
        .collect()
}

fn gradient(functions: &[&str], head: &str, stops: &str) -> Tree {
    let values: Vec<Value> = functions
        .iter()
        .map(|function| Value::Text(format!("{}({}{})", function, head, stops)))
        .collect();
    Tree::new().add("background", values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::Compiler;

    fn fx() -> Fragments {
        Fragments::new(Unit::Px)
    }

    fn keys(tree: &Tree) -> Vec<&str> {
        tree.iter().map(|(k, _)| k).collect()
    }

    fn text(tree: &Tree, key: &str) -> String {
        match tree.get(key) {
            Some(Value::Text(text)) => text.clone(),
            other => panic!("expected text at {}, got {:?}", key, other),
        }
    }

    // =========================================================================
    // Border radius
    // =========================================================================

    #[test]
    fn test_border_radius_all_corners() {
        let tree = fx().border_radius(5);
        assert_eq!(
            keys(&tree),
            vec!["-webkit-border-radius", "-moz-border-radius", "border-radius"]
        );
        assert_eq!(text(&tree, "border-radius"), "5px");
    }

    #[test]
    fn test_border_radius_text_is_verbatim() {
        let tree = Fragments::new(Unit::Em).border_radius("50%");
        assert_eq!(text(&tree, "-moz-border-radius"), "50%");
    }

    #[test]
    fn test_border_radius_zero_is_empty() {
        assert!(fx().border_radius(0).is_empty());
    }

    #[test]
    fn test_border_radius_selected_corners() {
        let tree = fx().border_radius_corners(Corners {
            top_left: Some(4.into()),
            bottom_right: Some("1em".into()),
            ..Corners::default()
        });
        assert_eq!(
            keys(&tree),
            vec![
                "-webkit-border-top-left-radius",
                "-moz-border-radius-topleft",
                "border-top-left-radius",
                "-webkit-border-bottom-right-radius",
                "-moz-border-radius-bottomright",
                "border-bottom-right-radius",
            ]
        );
        assert_eq!(text(&tree, "border-top-left-radius"), "4px");
        assert_eq!(text(&tree, "border-bottom-right-radius"), "1em");
    }

    // =========================================================================
    // Gradients
    // =========================================================================

    #[test]
    fn test_linear_gradient_values() {
        let red = Color::parse("#ff0000").unwrap();
        let tree = fx().linear_gradient("top", &[red.into(), "white".into(), Value::Disabled]);
        let Some(Value::List(values)) = tree.get("background") else {
            panic!("expected a background list");
        };
        assert_eq!(values.len(), 5);
        assert_eq!(values[0], Value::Text("-moz-linear-gradient(top, #ff0000, white)".into()));
        assert_eq!(values[4], Value::Text("linear-gradient(top, #ff0000, white)".into()));
    }

    #[test]
    fn test_linear_gradient_without_stops_is_empty() {
        assert!(fx().linear_gradient("top", &[]).is_empty());
    }

    #[test]
    fn test_gradient_drops_non_css_colors() {
        let cmyk = Color::parse("#ff0000")
            .unwrap()
            .convert(stylecraft_color::ColorKind::Cmyk)
            .unwrap();
        let tree = fx().linear_gradient("left", &[cmyk.into(), "blue".into()]);
        let Some(Value::List(values)) = tree.get("background") else {
            panic!("expected a background list");
        };
        assert_eq!(values[1], Value::Text("-webkit-linear-gradient(left, blue)".into()));
    }

    #[test]
    fn test_radial_gradient_includes_shape() {
        let tree = fx().radial_gradient("center", "circle", &["#fff".into(), "#000".into()]);
        let Some(Value::List(values)) = tree.get("background") else {
            panic!("expected a background list");
        };
        assert_eq!(
            values[3],
            Value::Text("-ms-radial-gradient(center, circle, #fff, #000)".into())
        );
    }

    // =========================================================================
    // Shadows
    // =========================================================================

    #[test]
    fn test_text_shadow_falsy_offsets_are_zero() {
        let black = Color::parse("#000000").unwrap();
        let tree = fx().text_shadow(0, 2, Some(3.into()), Some(&black));
        assert_eq!(text(&tree, "text-shadow"), "0 2px 3px #000000");
    }

    #[test]
    fn test_text_shadow_minimal() {
        let tree = fx().text_shadow(1, "0.5em", None, None);
        assert_eq!(text(&tree, "text-shadow"), "1px 0.5em");
    }

    #[test]
    fn test_box_shadow_full() {
        let color = Color::parse("rgba(0, 0, 0, 0.5)").unwrap();
        let tree = fx().box_shadow(
            1,
            1,
            Some(4.into()),
            Some(0.into()),
            Some(&color),
            Some(ShadowSet::Inset),
        );
        assert_eq!(keys(&tree), vec!["-moz-box-shadow", "-webkit-box-shadow", "box-shadow"]);
        assert_eq!(
            text(&tree, "box-shadow"),
            "1px 1px 4px rgba(0, 0, 0, 0.5) inset"
        );
    }

    // =========================================================================
    // Simple prefixed properties
    // =========================================================================

    #[test]
    fn test_transition_prefixes() {
        let tree = fx().transition("opacity 0.3s ease");
        assert_eq!(
            keys(&tree),
            vec!["-webkit-transition", "-moz-transition", "-o-transition", "transition"]
        );
        assert_eq!(text(&tree, "-o-transition"), "opacity 0.3s ease");
    }

    #[test]
    fn test_transform_and_origin() {
        assert_eq!(keys(&fx().transform("rotate(45deg)")).len(), 4);
        assert_eq!(
            text(&fx().transform_origin("50% 50%"), "transform-origin"),
            "50% 50%"
        );
    }

    #[test]
    fn test_box_sizing_has_no_standard_name() {
        assert_eq!(
            keys(&fx().box_sizing("border-box")),
            vec!["-webkit-box-sizing", "-moz-box-sizing"]
        );
    }

    #[test]
    fn test_empty_text_is_empty() {
        assert!(fx().transform("  ").is_empty());
    }

    // =========================================================================
    // Compilation
    // =========================================================================

    #[test]
    fn test_gradient_compiles_to_fallback_lines() {
        let mut block = Tree::new();
        block.extend(fx().linear_gradient("top", &["#fff".into(), "#000".into()]));
        let css = Compiler::new(Unit::Px)
            .compile(&Tree::new().add("div", block))
            .render();
        assert_eq!(css.matches("background: ").count(), 5);
        assert!(css.ends_with("background: linear-gradient(top, #fff, #000)\n}"));
    }
}
