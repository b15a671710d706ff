//! # Tape Sprocket Designer Core
//!
//! Core types and error kinds shared by the profile generator, the exporters and
//! the configuration layer.

pub mod data;
pub mod error;
pub mod units;

pub use data::{
    DrillPoint, LineSegment, Point, PolarPoint, ProfileResult, RadiiSet, SprocketParameters,
    ToothAngles, MAX_TOOTH_COUNT,
};
pub use error::{Error, GeometryError, ParameterError, Result};
pub use units::LengthUnit;
