//! Sprocket input parameters and their validation

use std::num::IntErrorKind;

use crate::error::ParameterError;
use serde::{Deserialize, Serialize};

/// Largest accepted tooth count
pub const MAX_TOOTH_COUNT: u32 = 1000;

const TOOTH_COUNT_RANGE: &str = "between 1 and 1000";

/// The five physical parameters that define a tape sprocket.
///
/// `tooth_length_percent` is conventionally 0–100 but is deliberately not clamped:
/// values outside that range extrapolate the outer radius past the design or
/// max-outer radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SprocketParameters {
    /// Number of teeth (1..=[`MAX_TOOTH_COUNT`])
    pub tooth_count: u32,
    /// Tooth width/diameter (mm, > 0)
    pub tooth_width: f64,
    /// Center-to-center tooth spacing along the design circle (mm, > 0)
    pub tooth_pitch: f64,
    /// Radial flank height below the design radius (mm, >= 0)
    pub flank_height: f64,
    /// Tooth length as a percentage of the full face height
    pub tooth_length_percent: f64,
}

impl Default for SprocketParameters {
    fn default() -> Self {
        Self {
            tooth_count: 14,
            tooth_width: 1.0,
            tooth_pitch: 4.0,
            flank_height: 1.0,
            tooth_length_percent: 60.0,
        }
    }
}

fn parse_number(name: &str, input: &str) -> Result<f64, ParameterError> {
    input
        .trim()
        .parse::<f64>()
        .map_err(|_| ParameterError::NotANumber {
            name: name.to_string(),
            input: input.to_string(),
        })
}

impl SprocketParameters {
    /// Build parameters from free-text fields and validate them.
    ///
    /// Surrounding whitespace is ignored. The tooth count must be a whole number.
    pub fn parse_fields(
        tooth_count: &str,
        tooth_width: &str,
        tooth_pitch: &str,
        flank_height: &str,
        tooth_length_percent: &str,
    ) -> Result<Self, ParameterError> {
        let count = tooth_count.trim().parse::<i64>().map_err(|e| match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => ParameterError::out_of_range(
                "tooth_count",
                tooth_count.trim().parse().unwrap_or(f64::NAN),
                TOOTH_COUNT_RANGE,
            ),
            _ => ParameterError::NotAnInteger {
                name: "tooth_count".to_string(),
                input: tooth_count.to_string(),
            },
        })?;
        let count = u32::try_from(count)
            .ok()
            .filter(|c| (1..=MAX_TOOTH_COUNT).contains(c))
            .ok_or_else(|| {
                ParameterError::out_of_range("tooth_count", count as f64, TOOTH_COUNT_RANGE)
            })?;

        let params = Self {
            tooth_count: count,
            tooth_width: parse_number("tooth_width", tooth_width)?,
            tooth_pitch: parse_number("tooth_pitch", tooth_pitch)?,
            flank_height: parse_number("flank_height", flank_height)?,
            tooth_length_percent: parse_number("tooth_length_percent", tooth_length_percent)?,
        };
        params.validate()?;
        Ok(params)
    }

    /// Check every parameter against its type-level domain.
    ///
    /// Geometric feasibility (tooth width vs. design circle) is checked later by the
    /// profile computation.
    pub fn validate(&self) -> Result<(), ParameterError> {
        if !(1..=MAX_TOOTH_COUNT).contains(&self.tooth_count) {
            return Err(ParameterError::out_of_range(
                "tooth_count",
                f64::from(self.tooth_count),
                TOOTH_COUNT_RANGE,
            ));
        }

        let finite = [
            ("tooth_width", self.tooth_width),
            ("tooth_pitch", self.tooth_pitch),
            ("flank_height", self.flank_height),
            ("tooth_length_percent", self.tooth_length_percent),
        ];
        if let Some((name, _)) = finite.iter().find(|(_, v)| !v.is_finite()) {
            return Err(ParameterError::NonFinite {
                name: name.to_string(),
            });
        }

        if self.tooth_width <= 0.0 {
            return Err(ParameterError::out_of_range(
                "tooth_width",
                self.tooth_width,
                "> 0",
            ));
        }
        if self.tooth_pitch <= 0.0 {
            return Err(ParameterError::out_of_range(
                "tooth_pitch",
                self.tooth_pitch,
                "> 0",
            ));
        }
        if self.flank_height < 0.0 {
            return Err(ParameterError::out_of_range(
                "flank_height",
                self.flank_height,
                ">= 0",
            ));
        }

        Ok(())
    }

    /// Angle between adjacent tooth centers (degrees)
    pub fn pitch_angle(&self) -> f64 {
        360.0 / f64::from(self.tooth_count)
    }

    /// True when the tooth length lies in the conventional 0–100 % range
    pub fn tooth_length_in_range(&self) -> bool {
        (0.0..=100.0).contains(&self.tooth_length_percent)
    }
}
