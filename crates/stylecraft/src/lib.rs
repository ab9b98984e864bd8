//! # Stylecraft - Nested Declaration Trees to CSS
//!
//! `stylecraft` compiles nested trees of declarations into flat CSS. Keys
//! are selector fragments or property names, values are text, numbers,
//! colors, lists or further trees. The compiler combines selectors, appends
//! the default unit to bare numbers, and merges every declaration that
//! lands on the same selector into one rule.
//!
//! Color math lives in the companion crate `stylecraft-color`, re-exported
//! here as [`color`].
//!
//! ## Core Concepts
//!
//! - [`Tree`] / [`Value`]: the input model, built in code or loaded from
//!   YAML and JSON
//! - [`selector`]: how child keys combine with their parent (`$hover`,
//!   `html.ie$`, `$raw > selector$`)
//! - [`Compiler`]: flattens a tree into [`Compiled`] rules plus diagnostics
//! - [`Document`]: ordered trees and raw CSS rendered together, with an
//!   optional banner
//! - [`Fragments`]: vendor-prefixed border-radius, gradients, shadows and
//!   transforms
//! - [`calc()`]: em/px arithmetic resolved to pixels
//! - [`parse_css`]: read simple CSS back into a tree
//!
//! ## Quick Start
//!
//! ```rust
//! use stylecraft::color::Color;
//! use stylecraft::{Document, Fragments, Tree, Unit};
//!
//! let fx = Fragments::new(Unit::Px);
//! let mut link = Tree::new()
//!     .add("color", Color::parse("#336699").unwrap())
//!     .add("$hover", Tree::new().add("text_decoration", "underline"));
//! link.extend(fx.transition("color 0.2s"));
//!
//! let mut doc = Document::new();
//! doc.push(Tree::new().add("nav a", link));
//!
//! let css = doc.render();
//! assert!(css.starts_with("nav a {\n\tcolor: #336699;\n\t-webkit-transition: color 0.2s;"));
//! assert!(css.ends_with("nav a:hover {\n\ttext-decoration: underline\n}"));
//! ```
//!
//! ## Loading Trees
//!
//! ```rust
//! use stylecraft::{Compiler, Tree, Unit};
//!
//! let tree = Tree::from_yaml(r#"
//! body:
//!   margin: 0
//!   font: !group
//!     family: sans-serif
//!     size: 14
//!   h1, h2:
//!     margin_bottom: 1.5
//! "#).unwrap();
//!
//! let css = Compiler::new(Unit::Em).compile(&tree).render();
//! assert_eq!(
//!     css,
//!     "body {\n\tmargin: 0;\n\tfont-family: sans-serif;\n\tfont-size: 14em\n}\n\n\
//!      body h1, body h2 {\n\tmargin-bottom: 1.5em\n}"
//! );
//! ```
//!
//! ## Malformed Input
//!
//! Compilation never fails as a whole. Entries the compiler cannot use are
//! skipped, logged through the `log` facade, and listed in
//! [`Compiled::skipped`].

pub mod calc;
pub mod compiler;
mod config;
mod css_text;
mod document;
mod error;
pub mod fragments;
mod registry;
pub mod selector;
mod unit;
mod value;

pub use stylecraft_color as color;

// Error type
pub use error::{Result, StyleError};

// Model and configuration
pub use config::{Settings, DEFAULT_EM_SIZE};
pub use unit::Unit;
pub use value::{Tree, Value, JSON_GROUP_KEY, YAML_GROUP_TAG};

// Compilation
pub use calc::calc;
pub use compiler::{Compiled, Compiler, Rule};
pub use css_text::parse_css;
pub use document::{Document, Entry};
pub use fragments::{Corners, Fragments, Length, ShadowSet};

// Process-wide registry
pub use registry::{clear_registry, register, register_raw, render_registered, with_registry};
