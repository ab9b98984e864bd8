//! A pixel arithmetic evaluator.
//!
//! `calc` rewrites `em` lengths to pixels, drops `px` suffixes, evaluates
//! the remaining arithmetic and prints the rounded result in pixels:
//!
//! ```rust
//! use stylecraft::calc;
//!
//! assert_eq!(calc("2em + 4px", 16.0).unwrap(), "36px");
//! assert_eq!(calc("(100px - 1.5em) / 2", 16.0).unwrap(), "38px");
//! ```
//!
//! The grammar is `+ - * /`, unary minus and parentheses over decimal
//! numbers. Nothing else is accepted.

use once_cell::sync::Lazy;
use regex::{Captures, Regex};

use crate::error::{Result, StyleError};

static EM_LENGTH: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([0-9]+(?:\.[0-9]+)?)em").expect("valid em pattern"));

static PX_SUFFIX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)([0-9.])px").expect("valid px pattern"));

/// Evaluates `expression` and returns the rounded result as `Npx`.
pub fn calc(expression: &str, em_size: f64) -> Result<String> {
    let pixels = EM_LENGTH.replace_all(expression, |caps: &Captures| {
        let n: f64 = caps[1].parse().unwrap_or(0.0);
        format!("{}", n * em_size)
    });
    let plain = PX_SUFFIX.replace_all(&pixels, "$1");

    let value = Evaluator::new(&plain).evaluate()?;
    if !value.is_finite() {
        return Err(StyleError::Calc(format!(
            "'{}' does not evaluate to a finite number",
            expression
        )));
    }
    let rounded = value.round();
    // -0.5 rounds to -0
    let rounded = if rounded == 0.0 { 0.0 } else { rounded };
    Ok(format!("{}px", rounded))
}

// ─── Evaluator ──────────────────────────────────────────────────────────────

struct Evaluator<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Evaluator<'a> {
    fn new(input: &'a str) -> Self {
        Self { input, pos: 0 }
    }

    fn evaluate(mut self) -> Result<f64> {
        let value = self.expression()?;
        self.skip_whitespace();
        if self.pos < self.input.len() {
            return Err(self.error("unexpected input"));
        }
        Ok(value)
    }

    // expression := term (('+' | '-') term)*
    fn expression(&mut self) -> Result<f64> {
        let mut value = self.term()?;
        loop {
            match self.peek() {
                Some('+') => {
                    self.bump();
                    value += self.term()?;
                }
                Some('-') => {
                    self.bump();
                    value -= self.term()?;
                }
                _ => return Ok(value),
            }
        }
    }

    // term := factor (('*' | '/') factor)*
    fn term(&mut self) -> Result<f64> {
        let mut value = self.factor()?;
        loop {
            match self.peek() {
                Some('*') => {
                    self.bump();
                    value *= self.factor()?;
                }
                Some('/') => {
                    self.bump();
                    let divisor = self.factor()?;
                    if divisor == 0.0 {
                        return Err(self.error("division by zero"));
                    }
                    value /= divisor;
                }
                _ => return Ok(value),
            }
        }
    }

    // factor := '-' factor | '+' factor | '(' expression ')' | number
    fn factor(&mut self) -> Result<f64> {
        match self.peek() {
            Some('-') => {
                self.bump();
                Ok(-self.factor()?)
            }
            Some('+') => {
                self.bump();
                self.factor()
            }
            Some('(') => {
                self.bump();
                let value = self.expression()?;
                if self.peek() != Some(')') {
                    return Err(self.error("expected ')'"));
                }
                self.bump();
                Ok(value)
            }
            Some(c) if c.is_ascii_digit() || c == '.' => self.number(),
            Some(_) => Err(self.error("unexpected character")),
            None => Err(self.error("unexpected end of expression")),
        }
    }

    fn number(&mut self) -> Result<f64> {
        let start = self.pos;
        let rest = &self.input[start..];
        let len = rest
            .find(|c: char| !(c.is_ascii_digit() || c == '.'))
            .unwrap_or(rest.len());
        self.pos += len;
        rest[..len]
            .parse()
            .map_err(|_| StyleError::Calc(format!("invalid number '{}'", &rest[..len])))
    }

    /// Next non-whitespace character, without consuming it.
    fn peek(&mut self) -> Option<char> {
        self.skip_whitespace();
        self.input[self.pos..].chars().next()
    }

    fn bump(&mut self) {
        if let Some(c) = self.input[self.pos..].chars().next() {
            self.pos += c.len_utf8();
        }
    }

    fn skip_whitespace(&mut self) {
        let rest = &self.input[self.pos..];
        self.pos += rest.len() - rest.trim_start().len();
    }

    fn error(&self, what: &str) -> StyleError {
        StyleError::Calc(format!("{} at offset {} in '{}'", what, self.pos, self.input))
    }
}
