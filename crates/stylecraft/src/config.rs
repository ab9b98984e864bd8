//! Compiler settings: default unit, em size and the banner switch.
//!
//! Settings load from YAML; missing keys keep their defaults.
//!
//! ```rust
//! use stylecraft::{Settings, Unit};
//!
//! let settings = Settings::from_yaml("unit: em\nbanner: true").unwrap();
//! assert_eq!(settings.unit, Unit::Em);
//! assert_eq!(settings.em_size, 16.0);
//! assert!(settings.banner);
//! ```

use serde::{Deserialize, Serialize};

use crate::error::{Result, StyleError};
use crate::unit::Unit;

/// Default pixel size of one `em`, used by [`calc`](crate::calc::calc).
pub const DEFAULT_EM_SIZE: f64 = 16.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Unit appended to bare non-zero numbers.
    pub unit: Unit,
    /// Pixels per `em`.
    pub em_size: f64,
    /// Prefix rendered documents with a generated-by comment.
    pub banner: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            unit: Unit::Px,
            em_size: DEFAULT_EM_SIZE,
            banner: false,
        }
    }
}

impl Settings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parses settings from a YAML mapping.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let settings: Settings =
            serde_yaml::from_str(yaml).map_err(|e| StyleError::Load(e.to_string()))?;
        settings.validate_em_size(settings.em_size)?;
        Ok(settings)
    }

    /// Sets the default unit; an unknown unit leaves the current one in place.
    pub fn set_default_unit(&mut self, unit: &str) -> Result<()> {
        match unit.parse::<Unit>() {
            Ok(parsed) => {
                self.unit = parsed;
                Ok(())
            }
            Err(e) => {
                log::warn!("keeping default unit '{}': {}", self.unit, e);
                Err(e)
            }
        }
    }

    /// Sets the em size; non-finite or non-positive sizes are rejected.
    pub fn set_em_size(&mut self, size: f64) -> Result<()> {
        self.validate_em_size(size)?;
        self.em_size = size;
        Ok(())
    }

    fn validate_em_size(&self, size: f64) -> Result<()> {
        if size.is_finite() && size > 0.0 {
            Ok(())
        } else {
            let err = StyleError::UnitConfig(format!("em size must be positive, got {}", size));
            log::warn!("keeping em size {}: {}", self.em_size, err);
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = Settings::new();
        assert_eq!(settings.unit, Unit::Px);
        assert_eq!(settings.em_size, 16.0);
        assert!(!settings.banner);
    }

    #[test]
    fn test_set_default_unit() {
        let mut settings = Settings::new();
        settings.set_default_unit("em").unwrap();
        assert_eq!(settings.unit, Unit::Em);
    }

    #[test]
    fn test_rejected_unit_keeps_previous() {
        let mut settings = Settings::new();
        settings.set_default_unit("pt").unwrap();
        assert!(matches!(settings.set_default_unit("furlong"), Err(StyleError::UnitConfig(_))));
        assert_eq!(settings.unit, Unit::Pt);
    }

    #[test]
    fn test_em_size_validation() {
        let mut settings = Settings::new();
        settings.set_em_size(10.0).unwrap();
        assert!(settings.set_em_size(0.0).is_err());
        assert!(settings.set_em_size(f64::NAN).is_err());
        assert_eq!(settings.em_size, 10.0);
    }

    #[test]
    fn test_from_yaml_partial() {
        let settings = Settings::from_yaml("em_size: 12").unwrap();
        assert_eq!(settings.em_size, 12.0);
        assert_eq!(settings.unit, Unit::Px);
    }

    #[test]
    fn test_from_yaml_rejects_bad_values() {
        assert!(matches!(Settings::from_yaml("unit: parsec"), Err(StyleError::Load(_))));
        assert!(matches!(Settings::from_yaml("em_size: -1"), Err(StyleError::UnitConfig(_))));
    }
}
