//! # Tape Sprocket Designer CAM Tools
//!
//! Parametric generation of tape sprocket profiles.
//!
//! ## Tools Included
//!
//! - **Sprocket Generator**: Radii and closed tooth contour from five physical parameters
//! - **Diameter Report**: Derived radii formatted as diameters for display
//! - **Cutter Compensation**: Shoulder drill centers for round cutters (not wired into exports)

pub mod cutter_compensation;
pub mod report;
pub mod sprocket;

// Re-export commonly used items
pub use cutter_compensation::cutter_compensation_drills;
pub use report::{DiameterReport, NOT_AVAILABLE};
pub use sprocket::{compute_profile, derive_dimensions, SprocketGenerator, ToothSegmentKind};
