//! Flattening declaration trees into CSS rules.
//!
//! The compiler walks a [`Tree`] depth-first, combining selector keys with
//! [`selector::combine`](crate::selector::combine) and collecting
//! declarations into [`Compiled`], an ordered selector → declarations
//! builder. Rules are created on first reference and appended to on every
//! later one, so two subtrees that reach the same selector merge in
//! first-seen order instead of overwriting each other.
//!
//! Bad entries never abort a compile. They are skipped, logged with
//! `log::warn!`, and kept as diagnostics in [`Compiled::skipped`].
//!
//! ```rust
//! use stylecraft::{Compiler, Tree, Unit};
//!
//! let tree = Tree::new().add(
//!     "a",
//!     Tree::new()
//!         .add("font_weight", "bold")
//!         .add("$hover", Tree::new().add("text_decoration", "underline")),
//! );
//! let css = Compiler::new(Unit::Px).compile(&tree).render();
//! assert_eq!(
//!     css,
//!     "a {\n\tfont-weight: bold\n}\n\na:hover {\n\ttext-decoration: underline\n}"
//! );
//! ```

use std::collections::HashMap;
use std::fmt;

use stylecraft_color::format_number;

use crate::config::Settings;
use crate::error::{Result, StyleError};
use crate::selector;
use crate::unit::Unit;
use crate::value::{Tree, Value};

/// CSS property name for a tree key: underscores become hyphens.
pub fn property_name(key: &str) -> String {
    key.replace('_', "-")
}

/// Text of a scalar declaration value.
///
/// Numbers print in shortest form with `unit` appended unless zero. Colors
/// print their CSS text. `Ok(None)` means the value emits nothing
/// ([`Value::Disabled`]); non-scalar values are an error.
pub fn declaration_value(value: &Value, unit: Unit) -> Result<Option<String>> {
    match value {
        Value::Text(text) => Ok(Some(text.clone())),
        Value::Number(n) if !n.is_finite() => Err(StyleError::MalformedTree {
            selector: String::new(),
            key: String::new(),
            reason: format!("number {} is not finite", n),
        }),
        Value::Number(n) if *n == 0.0 => Ok(Some("0".to_string())),
        Value::Number(n) => Ok(Some(format!("{}{}", format_number(*n), unit))),
        Value::Color(color) => Ok(Some(color.to_css()?)),
        Value::Disabled => Ok(None),
        Value::Invalid(reason) => Err(StyleError::MalformedTree {
            selector: String::new(),
            key: String::new(),
            reason: reason.clone(),
        }),
        other => Err(StyleError::MalformedTree {
            selector: String::new(),
            key: String::new(),
            reason: format!("a {} is not a declaration value", other.type_name()),
        }),
    }
}

/// One selector and its declarations, in emission order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Rule {
    pub selector: String,
    pub declarations: Vec<String>,
}

impl Rule {
    /// `selector {\n\tdecl;\n\tdecl\n}`, or `None` when there are no
    /// declarations.
    pub fn render(&self) -> Option<String> {
        if self.declarations.is_empty() {
            return None;
        }
        Some(format!(
            "{} {{\n\t{}\n}}",
            self.selector,
            self.declarations.join(";\n\t")
        ))
    }
}

/// The flattened result of compiling a tree.
#[derive(Debug, Clone, Default)]
pub struct Compiled {
    rules: Vec<Rule>,
    index: HashMap<String, usize>,
    skipped: Vec<StyleError>,
}

impl Compiled {
    pub fn new() -> Self {
        Self::default()
    }

    /// The declaration list for `selector`, created empty on first use.
    pub fn declarations_mut(&mut self, selector: &str) -> &mut Vec<String> {
        let position = match self.index.get(selector) {
            Some(&position) => position,
            None => {
                self.rules.push(Rule {
                    selector: selector.to_string(),
                    declarations: Vec::new(),
                });
                let position = self.rules.len() - 1;
                self.index.insert(selector.to_string(), position);
                position
            }
        };
        &mut self.rules[position].declarations
    }

    /// Appends one `name: value` declaration to `selector`.
    pub fn push(&mut self, selector: &str, name: &str, value: &str) {
        self.declarations_mut(selector)
            .push(format!("{}: {}", name, value));
    }

    /// Rules in first-reference order, including empty ones.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    pub fn get(&self, selector: &str) -> Option<&[String]> {
        self.index
            .get(selector)
            .map(|&i| self.rules[i].declarations.as_slice())
    }

    /// Entries left out of the output, with the reason for each.
    pub fn skipped(&self) -> &[StyleError] {
        &self.skipped
    }

    /// True when rendering would produce no text.
    pub fn is_empty(&self) -> bool {
        self.rules.iter().all(|rule| rule.declarations.is_empty())
    }

    fn skip(&mut self, selector: &str, key: &str, error: StyleError) {
        let error = match error {
            StyleError::MalformedTree { reason, .. } => StyleError::MalformedTree {
                selector: selector.to_string(),
                key: key.to_string(),
                reason,
            },
            other => StyleError::MalformedTree {
                selector: selector.to_string(),
                key: key.to_string(),
                reason: other.to_string(),
            },
        };
        log::warn!("{}", error);
        self.skipped.push(error);
    }

    /// Non-empty rules rendered and joined by a blank line.
    pub fn render(&self) -> String {
        self.rules
            .iter()
            .filter_map(Rule::render)
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

impl fmt::Display for Compiled {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

/// Compiles trees using a fixed default unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Compiler {
    unit: Unit,
}

impl Compiler {
    pub fn new(unit: Unit) -> Self {
        Self { unit }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.unit)
    }

    pub fn unit(&self) -> Unit {
        self.unit
    }

    /// Flattens `tree`. Top-level keys are selectors.
    pub fn compile(&self, tree: &Tree) -> Compiled {
        let mut out = Compiled::new();
        self.compile_into(tree, &mut out);
        out
    }

    /// Flattens `tree` into an existing builder.
    pub fn compile_into(&self, tree: &Tree, out: &mut Compiled) {
        for (key, value) in tree.iter() {
            match value {
                Value::Block(block) => self.compile_child("", key, block, out),
                Value::Disabled => {}
                Value::Invalid(reason) => out.skip("", key, malformed(reason.clone())),
                other => out.skip(
                    "",
                    key,
                    malformed(format!(
                        "a top-level {} has no selector to attach to",
                        other.type_name()
                    )),
                ),
            }
        }
    }

    /// Compiles a nested block under the selector `key` forms with `parent`.
    fn compile_child(&self, parent: &str, key: &str, block: &Tree, out: &mut Compiled) {
        let combined = selector::combine(parent, key);
        if combined.trim().is_empty() {
            out.skip(parent, key, malformed("key does not form a selector"));
            return;
        }
        self.compile_block(&combined, block, out);
    }

    fn compile_block(&self, selector: &str, block: &Tree, out: &mut Compiled) {
        out.declarations_mut(selector);

        for (key, value) in block.iter() {
            match value {
                Value::Block(child) => self.compile_child(selector, key, child, out),
                Value::Group(group) => self.compile_group(selector, key, group, out),
                other => self.emit(selector, key, &property_name(key), other, out),
            }
        }
    }

    fn compile_group(&self, selector: &str, key: &str, group: &Tree, out: &mut Compiled) {
        let base = property_name(key);
        for (sub, value) in group.iter() {
            let name = format!("{}-{}", base, property_name(sub));
            let path = format!("{}.{}", key, sub);
            match value {
                Value::Block(_) | Value::Group(_) => out.skip(
                    selector,
                    &path,
                    malformed(format!("a {} cannot sit inside a group", value.type_name())),
                ),
                other => self.emit(selector, &path, &name, other, out),
            }
        }
    }

    /// Emits a scalar or list value under `name`.
    fn emit(&self, selector: &str, key: &str, name: &str, value: &Value, out: &mut Compiled) {
        match value {
            Value::List(items) => {
                for item in items {
                    match item {
                        Value::List(_) | Value::Block(_) | Value::Group(_) => out.skip(
                            selector,
                            key,
                            malformed(format!("a {} cannot sit inside a list", item.type_name())),
                        ),
                        scalar => self.emit_scalar(selector, key, name, scalar, out),
                    }
                }
            }
            scalar => self.emit_scalar(selector, key, name, scalar, out),
        }
    }

    fn emit_scalar(&self, selector: &str, key: &str, name: &str, value: &Value, out: &mut Compiled) {
        match declaration_value(value, self.unit) {
            Ok(Some(text)) => out.push(selector, name, &text),
            Ok(None) => {}
            Err(e) => out.skip(selector, key, e),
        }
    }
}

fn malformed(reason: impl Into<String>) -> StyleError {
    StyleError::MalformedTree {
        selector: String::new(),
        key: String::new(),
        reason: reason.into(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stylecraft_color::{Color, Rgb};

    fn compile(tree: &Tree) -> Compiled {
        Compiler::new(Unit::Px).compile(tree)
    }

    // =========================================================================
    // Declaration values
    // =========================================================================

    #[test]
    fn test_zero_gets_no_unit() {
        assert_eq!(
            declaration_value(&Value::Number(0.0), Unit::Px).unwrap(),
            Some("0".to_string())
        );
        assert_eq!(
            declaration_value(&Value::Number(-0.0), Unit::Em).unwrap(),
            Some("0".to_string())
        );
    }

    #[test]
    fn test_numbers_get_the_unit() {
        assert_eq!(declaration_value(&Value::Number(5.0), Unit::Px).unwrap().unwrap(), "5px");
        assert_eq!(declaration_value(&Value::Number(5.0), Unit::Em).unwrap().unwrap(), "5em");
        assert_eq!(
            declaration_value(&Value::Number(1.5), Unit::Percent).unwrap().unwrap(),
            "1.5%"
        );
    }

    #[test]
    fn test_colors_render_css_text() {
        let cmyk = Color::parse("#ff0000").unwrap().convert_to("cmyk").unwrap();
        assert_eq!(
            declaration_value(&Value::Color(cmyk), Unit::Px).unwrap().unwrap(),
            "#ff0000"
        );
    }

    #[test]
    fn test_non_finite_number_is_malformed() {
        assert!(declaration_value(&Value::Number(f64::INFINITY), Unit::Px).is_err());
    }

    // =========================================================================
    // Compilation
    // =========================================================================

    #[test]
    fn test_end_to_end_pseudo_class() {
        let tree = Tree::new().add(
            "a",
            Tree::new()
                .add("font_weight", "bold")
                .add("$hover", Tree::new().add("text_decoration", "underline")),
        );
        assert_eq!(
            compile(&tree).render(),
            "a {\n\tfont-weight: bold\n}\n\na:hover {\n\ttext-decoration: underline\n}"
        );
    }

    #[test]
    fn test_merge_not_overwrite() {
        let tree = Tree::new()
            .add("x", Tree::new().add("$a$", Tree::new().add("color", "red")))
            .add("y", Tree::new().add("$a$", Tree::new().add("margin", 0)));
        let compiled = compile(&tree);
        assert_eq!(compiled.render(), "a {\n\tcolor: red;\n\tmargin: 0\n}");
    }

    #[test]
    fn test_lists_repeat_the_property() {
        let tree = Tree::new().add(
            "div",
            Tree::new().add("background", vec!["-moz-linear-gradient(top)", "linear-gradient(top)"]),
        );
        assert_eq!(
            compile(&tree).get("div").unwrap(),
            &[
                "background: -moz-linear-gradient(top)".to_string(),
                "background: linear-gradient(top)".to_string(),
            ]
        );
    }

    #[test]
    fn test_group_expands_on_current_rule() {
        let tree = Tree::new().add(
            "p",
            Tree::new().add(
                "font",
                Value::group(Tree::new().add("size", 12).add("family", "serif")),
            ),
        );
        assert_eq!(compile(&tree).render(), "p {\n\tfont-size: 12px;\n\tfont-family: serif\n}");
    }

    #[test]
    fn test_disabled_entries_vanish() {
        let tree = Tree::new()
            .add("a", Tree::new().add("color", None::<&str>))
            .add("b", Tree::new().add("color", "red"));
        let compiled = compile(&tree);
        assert_eq!(compiled.render(), "b {\n\tcolor: red\n}");
        assert!(compiled.skipped().is_empty());
    }

    #[test]
    fn test_rule_order_is_first_reference() {
        let tree = Tree::new().add(
            "a",
            Tree::new()
                .add("$hover", Tree::new().add("color", "blue"))
                .add("color", "red"),
        );
        let sheet = compile(&tree);
        let selectors: Vec<&str> = sheet
            .rules()
            .iter()
            .map(|r| r.selector.as_str())
            .collect();
        assert_eq!(selectors, vec!["a", "a:hover"]);
    }

    #[test]
    fn test_malformed_entries_are_skipped_not_fatal() {
        let unset = Color::Rgb(Rgb::new(f64::NAN, 0.0, 0.0));
        let tree = Tree::new()
            .add("stray", "red")
            .add(
                "a",
                Tree::new()
                    .add("color", unset)
                    .add("flag", Value::Invalid("boolean values have no CSS form".into()))
                    .add("margin", vec![Value::from(1), Value::from(vec![2, 3])])
                    .add("padding", 4),
            );
        let compiled = compile(&tree);

        assert_eq!(compiled.render(), "a {\n\tmargin: 1px;\n\tpadding: 4px\n}");
        let keys: Vec<String> = compiled
            .skipped()
            .iter()
            .map(|e| match e {
                StyleError::MalformedTree { key, .. } => key.clone(),
                other => panic!("unexpected {other:?}"),
            })
            .collect();
        assert_eq!(keys, vec!["stray", "color", "flag", "margin"]);
    }

    #[test]
    fn test_blank_selector_keys_are_skipped() {
        let rule = || Tree::new().add("color", "red");
        let tree = Tree::new()
            .add("", rule())
            .add(
                "a",
                Tree::new()
                    .add("margin", 0)
                    .add("  ", rule())
                    .add(" , ", rule()),
            )
            .add("$$", rule());

        let compiled = compile(&tree);
        assert_eq!(compiled.render(), "a {\n\tmargin: 0\n}");
        assert!(compiled.rules().iter().all(|r| !r.selector.trim().is_empty()));

        let keys: Vec<String> = compiled
            .skipped()
            .iter()
            .map(|e| match e {
                StyleError::MalformedTree { key, .. } => key.clone(),
                other => panic!("unexpected {:?}", other),
            })
            .collect();
        assert_eq!(keys, vec!["", "  ", " , ", "$$"]);
    }

    #[test]
    fn test_empty_rules_are_not_rendered() {
        let tree = Tree::new().add("a", Tree::new()).add("b", Tree::new().add("x", None::<i32>));
        let compiled = compile(&tree);
        assert!(compiled.is_empty());
        assert_eq!(compiled.render(), "");
    }
}
