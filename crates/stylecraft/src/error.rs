//! Error types for stylesheet compilation.

use stylecraft_color::ColorError;
use thiserror::Error;

/// Errors that can occur while building, loading or compiling styles.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum StyleError {
    /// A tree entry has a shape the compiler cannot interpret.
    ///
    /// Compilation skips the entry and keeps going; this error is reported
    /// through [`Compiled::skipped`](crate::Compiled::skipped).
    #[error("skipped '{key}' in '{selector}': {reason}")]
    MalformedTree {
        selector: String,
        key: String,
        reason: String,
    },

    /// A length unit or em size outside the accepted set.
    #[error("invalid unit configuration: {0}")]
    UnitConfig(String),

    /// A color value could not be parsed or converted.
    #[error(transparent)]
    Color(#[from] ColorError),

    /// An arithmetic expression `calc` cannot evaluate.
    #[error("calc error: {0}")]
    Calc(String),

    /// YAML, JSON or CSS text that cannot be turned into a tree.
    #[error("failed to load styles: {0}")]
    Load(String),
}

/// Result type for style operations.
pub type Result<T> = std::result::Result<T, StyleError>;
