//! Unit rebasing for exported drawings
//!
//! Geometry is always computed in millimeters. Exporters multiply coordinates by a
//! scale factor; this module maps target units to that factor.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Millimeters per inch
pub const MM_PER_INCH: f64 = 25.4;

/// Length unit of exported coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LengthUnit {
    /// Millimeters (as computed)
    #[default]
    Millimeters,
    /// Inches
    Inches,
}

impl LengthUnit {
    /// Factor that converts a millimeter value into this unit
    pub fn scale_from_mm(self) -> f64 {
        match self {
            Self::Millimeters => 1.0,
            Self::Inches => 1.0 / MM_PER_INCH,
        }
    }

    /// Short unit label ("mm" or "in")
    pub fn label(self) -> &'static str {
        match self {
            Self::Millimeters => "mm",
            Self::Inches => "in",
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for LengthUnit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mm" | "millimeters" | "metric" => Ok(Self::Millimeters),
            "in" | "inch" | "inches" | "imperial" => Ok(Self::Inches),
            _ => Err(format!("Unknown length unit: {}", s)),
        }
    }
}

/// Format a length with three decimals, the precision used throughout the exports
pub fn format_length(value: f64) -> String {
    format!("{:.3}", value)
}
