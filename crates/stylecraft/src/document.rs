//! Documents: ordered collections of trees and raw CSS rendered together.
//!
//! A [`Document`] is the unit of output. Entries are rendered in the order
//! they were pushed, each with the document's [`Settings`], and joined with
//! a blank line. Entries that render to nothing are left out entirely.
//!
//! ```rust
//! use stylecraft::{Document, Tree};
//!
//! let mut doc = Document::new();
//! doc.push_raw("@charset \"utf-8\";");
//! doc.push(Tree::new().add("body", Tree::new().add("margin", 0)));
//! assert_eq!(doc.render(), "@charset \"utf-8\";\n\nbody {\n\tmargin: 0\n}");
//! ```
//!
//! With [`Settings::banner`] on, the output starts with a single
//! generated-by comment carrying the crate version and a timestamp. Pin the
//! timestamp with [`Document::set_timestamp`] for reproducible output.

use chrono::{DateTime, SecondsFormat, Utc};

use crate::compiler::{Compiled, Compiler};
use crate::config::Settings;
use crate::value::Tree;

/// One document member.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry {
    /// CSS text emitted as-is.
    Raw(String),
    /// A declaration tree compiled at render time.
    Tree(Tree),
}

#[derive(Debug, Clone, Default)]
pub struct Document {
    entries: Vec<Entry>,
    settings: Settings,
    timestamp: Option<DateTime<Utc>>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_settings(settings: Settings) -> Self {
        Self {
            settings,
            ..Self::default()
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn settings_mut(&mut self) -> &mut Settings {
        &mut self.settings
    }

    /// Uses `timestamp` in the banner instead of the render time.
    pub fn set_timestamp(&mut self, timestamp: DateTime<Utc>) {
        self.timestamp = Some(timestamp);
    }

    pub fn push(&mut self, tree: Tree) {
        self.entries.push(Entry::Tree(tree));
    }

    pub fn push_raw(&mut self, css: impl Into<String>) {
        self.entries.push(Entry::Raw(css.into()));
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Removes every entry; settings are kept.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Compiles every tree entry, in order.
    ///
    /// Raw entries have no compiled form and are not included.
    pub fn compile(&self) -> Vec<Compiled> {
        let compiler = Compiler::from_settings(&self.settings);
        self.entries
            .iter()
            .filter_map(|entry| match entry {
                Entry::Tree(tree) => Some(compiler.compile(tree)),
                Entry::Raw(_) => None,
            })
            .collect()
    }

    /// Renders the whole document.
    pub fn render(&self) -> String {
        let compiler = Compiler::from_settings(&self.settings);
        let body = self
            .entries
            .iter()
            .map(|entry| match entry {
                Entry::Raw(css) => css.trim().to_string(),
                Entry::Tree(tree) => compiler.compile(tree).render(),
            })
            .filter(|text| !text.is_empty())
            .collect::<Vec<_>>()
            .join("\n\n");

        if self.settings.banner {
            format!("{}{}", self.banner(), body)
        } else {
            body
        }
    }

    fn banner(&self) -> String {
        let timestamp = self
            .timestamp
            .unwrap_or_else(Utc::now)
            .to_rfc3339_opts(SecondsFormat::Secs, true);
        format!(
            "/**\n * Generated by stylecraft {}, {}\n */\n",
            env!("CARGO_PKG_VERSION"),
            timestamp
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::unit::Unit;
    use chrono::TimeZone;

    fn rule(selector: &str, key: &str, value: i32) -> Tree {
        Tree::new().add(selector, Tree::new().add(key, value))
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    #[test]
    fn test_entries_render_in_order() {
        let mut doc = Document::new();
        doc.push(rule("a", "margin", 1));
        doc.push_raw("  b { color: red }  ");
        doc.push(rule("c", "padding", 2));
        assert_eq!(
            doc.render(),
            "a {\n\tmargin: 1px\n}\n\nb { color: red }\n\nc {\n\tpadding: 2px\n}"
        );
    }

    #[test]
    fn test_empty_entries_are_omitted() {
        let mut doc = Document::new();
        doc.push(Tree::new().add("a", Tree::new().add("color", Option::<&str>::None)));
        doc.push_raw("");
        doc.push(rule("b", "margin", 0));
        assert_eq!(doc.render(), "b {\n\tmargin: 0\n}");
    }

    #[test]
    fn test_document_unit() {
        let mut doc = Document::new();
        doc.settings_mut().unit = Unit::Em;
        doc.push(rule("a", "margin", 2));
        assert_eq!(doc.render(), "a {\n\tmargin: 2em\n}");
    }

    #[test]
    fn test_empty_document() {
        let doc = Document::new();
        assert!(doc.is_empty());
        assert_eq!(doc.render(), "");
    }

    // =========================================================================
    // Banner
    // =========================================================================

    #[test]
    fn test_banner_appears_once() {
        let mut doc = Document::with_settings(Settings {
            banner: true,
            ..Settings::default()
        });
        doc.set_timestamp(Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap());
        doc.push(rule("a", "margin", 1));
        doc.push(rule("b", "margin", 2));

        let css = doc.render();
        let expected_banner = format!(
            "/**\n * Generated by stylecraft {}, 2024-05-01T12:00:00Z\n */\n",
            env!("CARGO_PKG_VERSION")
        );
        assert!(css.starts_with(&expected_banner));
        assert_eq!(css.matches("Generated by").count(), 1);
    }

    #[test]
    fn test_clear_keeps_settings() {
        let mut doc = Document::new();
        doc.settings_mut().unit = Unit::Pt;
        doc.push(rule("a", "margin", 1));
        doc.clear();
        assert_eq!(doc.len(), 0);
        assert_eq!(doc.settings().unit, Unit::Pt);
    }

    #[test]
    fn test_compile_skips_raw_entries() {
        let mut doc = Document::new();
        doc.push_raw("x {}");
        doc.push(rule("a", "margin", 1));
        let compiled = doc.compile();
        assert_eq!(compiled.len(), 1);
        assert_eq!(compiled[0].get("a"), Some(&["margin: 1px".to_string()][..]));
    }
}
