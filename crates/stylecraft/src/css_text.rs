//! Reading plain CSS text back into a [`Tree`].
//!
//! This is a convenience for round-tripping simple, single-level
//! stylesheets, not a CSS engine. Tokenizing is done by `cssparser`, but
//! nothing is interpreted:
//!
//! - each selector list becomes one block key, as written;
//! - each declaration becomes a [`Value::Text`] holding the raw value;
//! - comments are dropped and at-rules (`@media`, `@import`, ...) skipped;
//! - a selector that appears twice is merged into one block, later
//!   declarations replacing earlier ones of the same name.
//!
//! Nested rules, escapes inside selectors and anything beyond this are not
//! guaranteed to survive.
//!
//! ```rust
//! use stylecraft::{parse_css, Value};
//!
//! let tree = parse_css("a { color: red; margin: 0 auto }").unwrap();
//! let Some(Value::Block(a)) = tree.get("a") else { panic!() };
//! assert_eq!(a.get("margin"), Some(&Value::Text("0 auto".into())));
//! ```

use cssparser::{
    AtRuleParser, CowRcStr, DeclarationParser, ParseError, Parser, ParserInput, ParserState,
    QualifiedRuleParser, RuleBodyItemParser, RuleBodyParser,
};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Result, StyleError};
use crate::value::{Tree, Value};

static COMMENT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/\*[\s\S]*?\*/").expect("valid comment pattern"));

/// Parses CSS text into a tree of blocks.
pub fn parse_css(css: &str) -> Result<Tree> {
    let mut input = ParserInput::new(css);
    let mut parser = Parser::new(&mut input);

    let mut sheet = SheetParser::default();
    let rules = cssparser::StyleSheetParser::new(&mut parser, &mut sheet);

    for result in rules {
        if let Err((error, text)) = result {
            return Err(StyleError::Load(format!(
                "line {}: cannot read '{}': {:?}",
                error.location.line + 1,
                text.trim(),
                error.kind
            )));
        }
    }

    Ok(sheet
        .blocks
        .into_iter()
        .map(|(selector, block)| (selector, Value::Block(block)))
        .collect())
}

/// Remaining tokens of `input` as trimmed text, comments removed.
fn raw_text(input: &mut Parser<'_, '_>) -> String {
    let start = input.position();
    while input.next().is_ok() {}
    let text = input.slice_from(start);
    COMMENT.replace_all(text, "").trim().to_string()
}

// ─── Rules ──────────────────────────────────────────────────────────────────

#[derive(Default)]
struct SheetParser {
    blocks: Vec<(String, Tree)>,
}

impl SheetParser {
    fn merge(&mut self, selector: String, declarations: Tree) {
        match self.blocks.iter_mut().find(|(s, _)| *s == selector) {
            Some((_, block)) => block.extend(declarations),
            None => self.blocks.push((selector, declarations)),
        }
    }
}

impl<'i> QualifiedRuleParser<'i> for SheetParser {
    type Prelude = String;
    type QualifiedRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::Prelude, ParseError<'i, Self::Error>> {
        let selector = raw_text(input);
        if selector.is_empty() {
            return Err(input.new_custom_error::<(), ()>(()));
        }
        Ok(selector)
    }

    fn parse_block<'t>(
        &mut self,
        selector: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::QualifiedRule, ParseError<'i, Self::Error>> {
        let mut decl_parser = BodyParser;
        let body = RuleBodyParser::new(input, &mut decl_parser);

        let mut declarations = Tree::new();
        for item in body {
            match item {
                Ok(Some((name, value))) => declarations.set(name, value),
                Ok(None) => {}
                Err((_, text)) => {
                    log::warn!("ignoring declaration '{}' in '{}'", text.trim(), selector)
                }
            }
        }

        self.merge(selector, declarations);
        Ok(())
    }
}

impl<'i> AtRuleParser<'i> for SheetParser {
    type Prelude = String;
    type AtRule = ();
    type Error = ();

    fn parse_prelude<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::Prelude, ParseError<'i, Self::Error>> {
        raw_text(input);
        Ok(name.as_ref().to_string())
    }

    fn rule_without_block(
        &mut self,
        name: Self::Prelude,
        _start: &ParserState,
    ) -> std::result::Result<Self::AtRule, ()> {
        log::debug!("skipping @{} rule", name);
        Ok(())
    }

    fn parse_block<'t>(
        &mut self,
        name: Self::Prelude,
        _start: &ParserState,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::AtRule, ParseError<'i, Self::Error>> {
        raw_text(input);
        log::debug!("skipping @{} block", name);
        Ok(())
    }
}

// ─── Declarations ───────────────────────────────────────────────────────────

/// Yields `(name, raw value)`; `None` for items that are not declarations.
struct BodyParser;

type Declaration = Option<(String, String)>;

impl<'i> DeclarationParser<'i> for BodyParser {
    type Declaration = Declaration;
    type Error = ();

    fn parse_value<'t>(
        &mut self,
        name: CowRcStr<'i>,
        input: &mut Parser<'i, 't>,
    ) -> std::result::Result<Self::Declaration, ParseError<'i, Self::Error>> {
        let value = raw_text(input);
        if value.is_empty() {
            return Err(input.new_custom_error::<(), ()>(()));
        }
        Ok(Some((name.as_ref().to_string(), value)))
    }
}

impl<'i> AtRuleParser<'i> for BodyParser {
    type Prelude = ();
    type AtRule = Declaration;
    type Error = ();
}

impl<'i> QualifiedRuleParser<'i> for BodyParser {
    type Prelude = ();
    type QualifiedRule = Declaration;
    type Error = ();
}

impl<'i> RuleBodyItemParser<'i, Declaration, ()> for BodyParser {
    fn parse_declarations(&self) -> bool {
        true
    }

    fn parse_qualified(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compiler::Compiler;
    use crate::unit::Unit;

    fn block<'a>(tree: &'a Tree, selector: &str) -> &'a Tree {
        match tree.get(selector) {
            Some(Value::Block(block)) => block,
            other => panic!("expected a block at {}, got {:?}", selector, other),
        }
    }

    // =========================================================================
    // Reading
    // =========================================================================

    #[test]
    fn test_simple_rules() {
        let tree = parse_css("h1, h2 { font-weight: bold }\np { margin: 0 }").unwrap();
        let keys: Vec<&str> = tree.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["h1, h2", "p"]);
        assert_eq!(
            block(&tree, "h1, h2").get("font-weight"),
            Some(&Value::Text("bold".into()))
        );
    }

    #[test]
    fn test_comments_are_ignored() {
        let tree = parse_css("/* head */ a /* x */ { color: /* y */ red; }").unwrap();
        assert_eq!(block(&tree, "a").get("color"), Some(&Value::Text("red".into())));
    }

    #[test]
    fn test_repeated_selectors_merge() {
        let tree = parse_css("a { color: red } b { color: blue } a { margin: 0; color: green }")
            .unwrap();
        assert_eq!(tree.len(), 2);
        let a = block(&tree, "a");
        assert_eq!(a.get("color"), Some(&Value::Text("green".into())));
        assert_eq!(a.get("margin"), Some(&Value::Text("0".into())));
    }

    #[test]
    fn test_at_rules_are_skipped() {
        let css = "@import url(x.css);\n@media print { a { color: red } }\np { color: blue }";
        let tree = parse_css(css).unwrap();
        let keys: Vec<&str> = tree.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["p"]);
    }

    #[test]
    fn test_values_keep_functions_and_priority() {
        let tree =
            parse_css("div { background: linear-gradient(top, #fff, #000) !important }").unwrap();
        assert_eq!(
            block(&tree, "div").get("background"),
            Some(&Value::Text("linear-gradient(top, #fff, #000) !important".into()))
        );
    }

    #[test]
    fn test_empty_input() {
        assert!(parse_css("").unwrap().is_empty());
        assert!(parse_css("  /* nothing */ ").unwrap().is_empty());
    }

    // =========================================================================
    // Round trip
    // =========================================================================

    #[test]
    fn test_compiled_output_reads_back() {
        let source = Tree::new().add(
            "ul",
            Tree::new()
                .add("margin", 0)
                .add("padding_left", 10)
                .add("li", Tree::new().add("list_style", "none")),
        );
        let css = Compiler::new(Unit::Px).compile(&source).render();
        let tree = parse_css(&css).unwrap();

        let again = Compiler::new(Unit::Px).compile(&tree).render();
        assert_eq!(again, css);
    }
}
