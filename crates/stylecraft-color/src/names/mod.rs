//! Named colors and candidate palettes for nearest-match search.
//!
//! Two name tables exist:
//!
//! | Table | Entries | Used for |
//! |-------|---------|----------|
//! | [`tables::CSS_NAMED`] + [`tables::WEB_SAFE`] | CSS color keywords | parsing, exact naming, `to_named` |
//! | [`extended::EXTENDED`] | descriptive names ("Aero blue") | nearest search only |
//!
//! Name lookup is exact and case-insensitive. Fuzzy matching is the job of
//! [`crate::search`].

pub mod extended;
pub mod tables;

use std::collections::HashMap;
use std::fmt;

use once_cell::sync::Lazy;

use crate::error::{ColorError, Result};
use crate::space::{Hex, Rgb, Space};

static BY_NAME: Lazy<HashMap<String, Hex>> = Lazy::new(|| {
    tables::WEB_SAFE
        .iter()
        .chain(tables::CSS_NAMED.iter())
        .flat_map(|(hex, names)| names.iter().map(move |name| (name.to_string(), *hex)))
        .filter_map(|(name, hex)| Hex::parse(hex).ok().map(|h| (name, h)))
        .collect()
});

static BY_HEX: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    tables::WEB_SAFE
        .iter()
        .chain(tables::CSS_NAMED.iter())
        .filter_map(|(hex, names)| names.first().map(|name| (*hex, *name)))
        .collect()
});

/// Hex value of a CSS color keyword, case-insensitive.
pub fn lookup(name: &str) -> Option<Hex> {
    BY_NAME.get(&name.trim().to_ascii_lowercase()).copied()
}

/// Canonical keyword for an exact hex value.
pub fn name_for(hex: &Hex) -> Option<&'static str> {
    BY_HEX.get(hex.value().as_str()).copied()
}

/// True when the hex value is one of the sixteen web-safe colors.
pub fn is_web_safe(hex: &Hex) -> bool {
    let value = hex.value();
    tables::WEB_SAFE.iter().any(|(h, _)| *h == value)
}

/// A CSS color keyword together with its resolved value.
#[derive(Debug, Clone, PartialEq)]
pub struct Named {
    name: String,
    hex: Hex,
}

impl Named {
    /// Resolves a keyword; the stored name is lowercased.
    pub fn new(name: &str) -> Result<Self> {
        let hex = lookup(name).ok_or_else(|| ColorError::InvalidColor(name.to_string()))?;
        Ok(Self {
            name: name.trim().to_ascii_lowercase(),
            hex,
        })
    }

    /// The keyword whose value is exactly `rgb` after rounding.
    pub fn from_rgb(rgb: &Rgb) -> Result<Self> {
        let hex = Hex::from_rgb(rgb);
        let name = name_for(&hex).ok_or_else(|| ColorError::NoExactName(hex.value()))?;
        Ok(Self {
            name: name.to_string(),
            hex,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn hex(&self) -> Hex {
        self.hex
    }

    pub fn to_rgb(&self) -> Rgb {
        self.hex.to_rgb()
    }

    pub fn components(&self) -> Vec<f64> {
        self.hex.components()
    }

    pub fn is_set(&self) -> bool {
        true
    }
}

impl fmt::Display for Named {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Candidate set for nearest-color search.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Palette {
    /// The sixteen web-safe colors.
    WebSafe,
    /// CSS color keywords.
    Named,
    /// Descriptive names, the widest built-in set.
    #[default]
    Extended,
    /// Caller-supplied hex values, with or without `#`.
    Custom(Vec<String>),
}

impl Palette {
    /// Candidates as `(hex, label)` pairs in table order.
    ///
    /// Custom entries that are not valid hex are skipped with a warning.
    pub fn candidates(&self) -> Vec<(Hex, String)> {
        let from_table = |table: &[(&str, &[&str])]| -> Vec<(Hex, String)> {
            table
                .iter()
                .filter_map(|(hex, names)| {
                    let label = names.first().copied().unwrap_or(*hex);
                    Hex::parse(hex).ok().map(|h| (h, label.to_string()))
                })
                .collect()
        };

        match self {
            Palette::WebSafe => from_table(tables::WEB_SAFE),
            Palette::Named => {
                let mut all = from_table(tables::CSS_NAMED);
                all.extend(from_table(tables::WEB_SAFE));
                all
            }
            Palette::Extended => from_table(extended::EXTENDED),
            Palette::Custom(values) => values
                .iter()
                .filter_map(|value| match Hex::parse(value) {
                    Ok(hex) => Some((hex, hex.value())),
                    Err(_) => {
                        log::warn!("skipping palette entry '{}': not a hex color", value);
                        None
                    }
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_case_insensitive() {
        assert_eq!(lookup("Red").unwrap().value(), "ff0000");
        assert_eq!(lookup("ALICEBLUE").unwrap().value(), "f0f8ff");
        assert!(lookup("notacolor").is_none());
    }

    #[test]
    fn test_aliases_share_a_value() {
        assert_eq!(lookup("darkgray"), lookup("darkgrey"));
        assert_eq!(lookup("cyan"), lookup("aqua"));
        assert_eq!(lookup("magenta").unwrap().value(), "ff00ff");
    }

    #[test]
    fn test_name_for_prefers_first_alias() {
        let hex = Hex::parse("a9a9a9").unwrap();
        assert_eq!(name_for(&hex), Some("darkgray"));
        assert_eq!(name_for(&Hex::parse("00ffff").unwrap()), Some("aqua"));
    }

    #[test]
    fn test_named_from_rgb_exact_only() {
        let red = Named::from_rgb(&Rgb::new(255.0, 0.0, 0.0)).unwrap();
        assert_eq!(red.name(), "red");

        let err = Named::from_rgb(&Rgb::new(254.0, 0.0, 0.0)).unwrap_err();
        assert_eq!(err, ColorError::NoExactName("fe0000".to_string()));
    }

    #[test]
    fn test_web_safe() {
        assert!(is_web_safe(&Hex::parse("#808080").unwrap()));
        assert!(!is_web_safe(&Hex::parse("#808081").unwrap()));
        assert_eq!(Palette::WebSafe.candidates().len(), 16);
    }

    #[test]
    fn test_custom_palette_skips_invalid_entries() {
        let palette = Palette::Custom(vec!["#fff".into(), "nope".into(), "123456".into()]);
        let values: Vec<String> = palette.candidates().into_iter().map(|(h, _)| h.value()).collect();
        assert_eq!(values, vec!["ffffff", "123456"]);
    }

    #[test]
    fn test_extended_is_the_largest_palette() {
        assert!(Palette::Extended.candidates().len() > Palette::Named.candidates().len());
    }
}
