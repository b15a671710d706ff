//! Diameter report
//!
//! Presents the derived radii as the diameters a machinist measures, with three
//! decimals, or "N/A" before any profile has been computed.

use std::fmt;

use serde::Serialize;
use tapesprocket_core::units::format_length;
use tapesprocket_core::RadiiSet;

/// Placeholder shown before the first successful computation
pub const NOT_AVAILABLE: &str = "N/A";

/// Formatted diameters of a sprocket
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiameterReport {
    pub inner_diameter: String,
    pub design_diameter: String,
    pub outer_diameter: String,
    pub max_outer_diameter: String,
}

impl DiameterReport {
    /// Report for the given radii, or the not-available report for `None`
    pub fn new(radii: Option<&RadiiSet>) -> Self {
        match radii {
            Some(r) => Self {
                inner_diameter: format_length(r.inner_radius * 2.0),
                design_diameter: format_length(r.design_radius * 2.0),
                outer_diameter: format_length(r.outer_radius * 2.0),
                max_outer_diameter: format_length(r.max_outer_radius * 2.0),
            },
            None => Self::not_available(),
        }
    }

    /// Report with every value set to [`NOT_AVAILABLE`]
    pub fn not_available() -> Self {
        Self {
            inner_diameter: NOT_AVAILABLE.to_string(),
            design_diameter: NOT_AVAILABLE.to_string(),
            outer_diameter: NOT_AVAILABLE.to_string(),
            max_outer_diameter: NOT_AVAILABLE.to_string(),
        }
    }

    /// Label/value rows in display order
    pub fn rows(&self) -> [(&'static str, &str); 4] {
        [
            ("Inner diameter", self.inner_diameter.as_str()),
            ("Design diameter", self.design_diameter.as_str()),
            ("Outer diameter", self.outer_diameter.as_str()),
            ("Max. outer diameter", self.max_outer_diameter.as_str()),
        ]
    }
}

impl Default for DiameterReport {
    fn default() -> Self {
        Self::not_available()
    }
}

impl From<&RadiiSet> for DiameterReport {
    fn from(radii: &RadiiSet) -> Self {
        Self::new(Some(radii))
    }
}

impl fmt::Display for DiameterReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in self.rows() {
            writeln!(f, "{:<20} {:>10} mm", label, value)?;
        }
        Ok(())
    }
}
