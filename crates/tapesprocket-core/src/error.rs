//! Error handling for Tape Sprocket Designer
//!
//! Provides the error kinds raised while turning user input into a sprocket profile
//! and writing that profile to disk:
//! - Parameter errors (unparseable or out-of-domain input, raised before any geometry)
//! - Geometry errors (inputs that are valid by type but impossible to construct)
//! - I/O errors (export file writes)
//! - Configuration errors (config files and export format selection)
//!
//! All error types use `thiserror` for ergonomic error handling.

use std::io;
use thiserror::Error;

/// Parameter error type
///
/// Raised by validation before the geometry derivation starts. Recoverable by
/// re-entering the offending value.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// Text input could not be parsed as a number
    #[error("Parameter '{name}' is not a number: {input:?}")]
    NotANumber {
        /// The parameter name.
        name: String,
        /// The rejected input text.
        input: String,
    },

    /// Text input could not be parsed as a whole number
    #[error("Parameter '{name}' is not an integer: {input:?}")]
    NotAnInteger {
        /// The parameter name.
        name: String,
        /// The rejected input text.
        input: String,
    },

    /// A numeric value lies outside its allowed domain
    #[error("Parameter '{name}' out of range: {value} (must be {constraint})")]
    OutOfRange {
        /// The parameter name.
        name: String,
        /// The rejected value.
        value: f64,
        /// Human readable description of the allowed domain.
        constraint: String,
    },

    /// A numeric value is NaN or infinite
    #[error("Parameter '{name}' must be a finite number")]
    NonFinite {
        /// The parameter name.
        name: String,
    },
}

impl ParameterError {
    /// Shorthand for [`ParameterError::OutOfRange`].
    pub fn out_of_range(name: &str, value: f64, constraint: &str) -> Self {
        Self::OutOfRange {
            name: name.to_string(),
            value,
            constraint: constraint.to_string(),
        }
    }
}

/// Geometry error type
///
/// Raised when validated parameters still describe a profile that cannot exist.
/// No partial result is produced.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    /// The tooth is wider than the chord the design circle can hold
    #[error(
        "tooth width exceeds design circle capacity: width {tooth_width} mm at design radius {design_radius} mm"
    )]
    ToothWidthExceedsDesignCircle {
        /// Requested tooth width (mm).
        tooth_width: f64,
        /// Design radius derived from tooth count and pitch (mm).
        design_radius: f64,
    },

    /// A derived value became NaN or infinite
    #[error("Derived value '{quantity}' is not finite: {value}")]
    NonFinite {
        /// Name of the derived quantity.
        quantity: &'static str,
        /// The offending value.
        value: f64,
    },
}

/// Main error type for Tape Sprocket Designer
///
/// Aggregates all error types for convenient propagation with `?`.
#[derive(Error, Debug)]
pub enum Error {
    /// Parameter validation error
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    /// Geometry derivation error
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    /// I/O error during export
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Configuration or format selection error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a configuration error from any displayable message
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }
}

/// Result type alias for Tape Sprocket Designer operations.
pub type Result<T> = std::result::Result<T, Error>;
