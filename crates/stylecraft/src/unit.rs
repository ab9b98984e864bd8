//! Length units appended to bare numeric declaration values.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::StyleError;

/// A CSS length unit from the accepted whitelist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Unit {
    #[default]
    Px,
    Em,
    Ex,
    Pt,
    Pc,
    Mm,
    Cm,
    In,
    Percent,
}

impl Unit {
    pub const ALL: [Unit; 9] = [
        Unit::Px,
        Unit::Em,
        Unit::Ex,
        Unit::Pt,
        Unit::Pc,
        Unit::Mm,
        Unit::Cm,
        Unit::In,
        Unit::Percent,
    ];

    /// The suffix as written in CSS.
    pub fn suffix(self) -> &'static str {
        match self {
            Unit::Px => "px",
            Unit::Em => "em",
            Unit::Ex => "ex",
            Unit::Pt => "pt",
            Unit::Pc => "pc",
            Unit::Mm => "mm",
            Unit::Cm => "cm",
            Unit::In => "in",
            Unit::Percent => "%",
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.suffix())
    }
}

impl FromStr for Unit {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_ascii_lowercase();
        Unit::ALL
            .iter()
            .copied()
            .find(|unit| unit.suffix() == wanted)
            .ok_or_else(|| StyleError::UnitConfig(format!("unknown unit '{}'", s)))
    }
}

impl Serialize for Unit {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.suffix())
    }
}

impl<'de> Deserialize<'de> for Unit {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        text.parse().map_err(serde::de::Error::custom)
    }
}
