//! Error types for color parsing and conversion.

use thiserror::Error;

use crate::kind::ColorKind;

/// Errors that can occur while parsing, converting or adjusting colors.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ColorError {
    /// Text or structured input is not a usable color.
    ///
    /// Covers unrecognized text, recognized formats carrying out-of-range
    /// components, and structured values with non-finite components.
    #[error("invalid color: {0}")]
    InvalidColor(String),

    /// No conversion path exists to the requested variant.
    #[error("unsupported conversion from {from} to '{to}'")]
    UnsupportedConversion { from: ColorKind, to: String },

    /// Conversion to a named color found no exact table entry.
    #[error("no named color matches #{0} exactly")]
    NoExactName(String),

    /// An operation argument is outside its domain.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type for color operations.
pub type Result<T> = std::result::Result<T, ColorError>;
