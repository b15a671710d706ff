//! Cutter shoulder drills
//!
//! When the profile is cut as an outside pocket, a round cutter leaves a shoulder where
//! each flank meets the inner radius. This computes drill centers on the inner radius,
//! one cutter radius away from each flank, that would take those shoulders off.
//!
//! Nothing in the default profile path calls this and neither exporter writes drills;
//! [`ProfileResult::drills`] stays empty. Completing the compensation (cutting below the
//! inner radius, rejecting cutters wider than the tooth gap) is still open.

use tapesprocket_core::{DrillPoint, ParameterError, PolarPoint, ProfileResult};

/// Two drill centers per tooth: after its left flank and before the next right flank
pub fn cutter_compensation_drills(
    profile: &ProfileResult,
    cutter_diameter: f64,
) -> Result<Vec<DrillPoint>, ParameterError> {
    if !cutter_diameter.is_finite() {
        return Err(ParameterError::NonFinite {
            name: "cutter_diameter".to_string(),
        });
    }
    if cutter_diameter < 0.0 {
        return Err(ParameterError::out_of_range(
            "cutter_diameter",
            cutter_diameter,
            ">= 0",
        ));
    }

    let inner_radius = profile.radii.inner_radius;
    let cutter_radius = cutter_diameter / 2.0;
    if cutter_radius >= inner_radius {
        return Err(ParameterError::OutOfRange {
            name: "cutter_diameter".to_string(),
            value: cutter_diameter,
            constraint: format!("< {:.3} (inner diameter)", inner_radius * 2.0),
        });
    }

    // Arc of one cutter radius, measured at the cutter center's radius.
    let offset = (cutter_radius / (inner_radius - cutter_radius)).to_degrees();
    let half_chord = profile.angles.chord_angle / 2.0;
    let pitch_angle = profile.parameters.pitch_angle();

    let drills = (0..profile.parameters.tooth_count)
        .map(|i| f64::from(i) * pitch_angle)
        .flat_map(|center| {
            [
                center + half_chord + offset,
                center + pitch_angle - half_chord - offset,
            ]
        })
        .map(|angle| DrillPoint::from(PolarPoint::new(inner_radius, angle).to_cartesian()))
        .collect();

    Ok(drills)
}
