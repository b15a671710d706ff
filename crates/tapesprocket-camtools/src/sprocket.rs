//! Sprocket Profile Generator
//!
//! Derives the cutting contour of a tape sprocket from its five physical parameters.
//!
//! Each tooth is built in polar coordinates around its center angle, going from the
//! right-hand side to the left-hand side (counter-clockwise):
//! right flank, right face, blunted tip, left face, left flank, then the gap along the
//! inner radius up to the next tooth. The faces are tapered so that the tooth does not
//! splay outward, compensating for the teeth sitting on an arc instead of a straight tape.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tapesprocket_core::{
    GeometryError, LineSegment, ParameterError, PolarPoint, ProfileResult, RadiiSet, Result,
    SprocketParameters, ToothAngles,
};
use tracing::{debug, warn};

/// Face spans smaller than this are treated as a flat top (mm)
pub const FACE_SPAN_EPSILON: f64 = 1e-12;

/// Which of the six per-tooth segments a line represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ToothSegmentKind {
    RightFlank = 0,
    RightFace = 1,
    Tip = 2,
    LeftFace = 3,
    LeftFlank = 4,
    Gap = 5,
}

impl ToothSegmentKind {
    /// All kinds in emission order
    pub const ALL: [ToothSegmentKind; 6] = [
        ToothSegmentKind::RightFlank,
        ToothSegmentKind::RightFace,
        ToothSegmentKind::Tip,
        ToothSegmentKind::LeftFace,
        ToothSegmentKind::LeftFlank,
        ToothSegmentKind::Gap,
    ];

    /// Kind of the segment at `index` in a profile's segment list
    pub fn of_index(index: usize) -> Self {
        Self::ALL[index % ProfileResult::SEGMENTS_PER_TOOTH]
    }
}

/// Generator for sprocket profiles
pub struct SprocketGenerator {
    params: SprocketParameters,
}

impl SprocketGenerator {
    /// Create a generator, validating the parameters up front
    pub fn new(params: SprocketParameters) -> std::result::Result<Self, ParameterError> {
        params.validate()?;
        Ok(Self { params })
    }

    /// Parameters this generator was built with
    pub fn parameters(&self) -> &SprocketParameters {
        &self.params
    }

    /// Compute the radii and the closed tooth contour
    pub fn generate(&self) -> Result<ProfileResult> {
        let p = &self.params;
        let (radii, angles) = derive_dimensions(p)?;

        let pitch_angle = p.pitch_angle();
        let segments: Vec<LineSegment> = (0..p.tooth_count)
            .flat_map(|i| tooth_outline(f64::from(i) * pitch_angle, pitch_angle, &radii, &angles))
            .collect();

        debug!(
            teeth = p.tooth_count,
            segments = segments.len(),
            inner_radius = radii.inner_radius,
            design_radius = radii.design_radius,
            outer_radius = radii.outer_radius,
            max_outer_radius = radii.max_outer_radius,
            "Computed sprocket profile"
        );

        Ok(ProfileResult {
            parameters: *p,
            radii,
            angles,
            segments,
            drills: Vec::new(),
        })
    }
}

/// Compute a sprocket profile from parameters.
///
/// Fails with a parameter error for out-of-domain input, or a geometry error when the
/// tooth cannot fit on the design circle. Never returns a partial profile.
pub fn compute_profile(params: &SprocketParameters) -> Result<ProfileResult> {
    SprocketGenerator::new(*params)?.generate()
}

fn ensure_finite(quantity: &'static str, value: f64) -> std::result::Result<f64, GeometryError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(GeometryError::NonFinite { quantity, value })
    }
}

/// Derive the radii and construction angles for validated parameters
pub fn derive_dimensions(
    p: &SprocketParameters,
) -> std::result::Result<(RadiiSet, ToothAngles), GeometryError> {
    let teeth = f64::from(p.tooth_count);

    let design_radius = ensure_finite("design_radius", teeth * p.tooth_pitch / (2.0 * PI))?;
    let inner_radius = ensure_finite("inner_radius", design_radius - p.flank_height)?;

    // Half-chord over radius; asin is only defined (and the tooth only fits) below 1.
    let half_chord_ratio = p.tooth_width / (2.0 * design_radius);
    if half_chord_ratio.is_nan() || half_chord_ratio >= 1.0 {
        return Err(GeometryError::ToothWidthExceedsDesignCircle {
            tooth_width: p.tooth_width,
            design_radius,
        });
    }
    let chord_angle = ensure_finite("chord_angle", 2.0 * half_chord_ratio.asin().to_degrees())?;

    // Half the edge-to-edge angle between neighbouring teeth.
    // This does not guarantee straight outer edges across two adjacent teeth.
    let tooth_outer_angle = (chord_angle + p.pitch_angle()) / 4.0;
    let tooth_inner_angle = 90.0 - tooth_outer_angle - chord_angle / 2.0;

    let tooth_face_height = ensure_finite(
        "tooth_face_height",
        (p.tooth_width / 2.0) * tooth_inner_angle.to_radians().tan(),
    )?;
    let max_outer_radius = ensure_finite("max_outer_radius", design_radius + tooth_face_height)?;
    let face_span = max_outer_radius - design_radius;
    let outer_radius = ensure_finite(
        "outer_radius",
        design_radius + face_span * (p.tooth_length_percent / 100.0),
    )?;

    let face_ratio = if face_span.abs() < FACE_SPAN_EPSILON {
        1.0
    } else {
        ensure_finite("face_ratio", (outer_radius - design_radius) / face_span)?
    };
    // A full-length tooth ends in a point; shorter teeth keep part of the chord as a flat tip.
    let tooth_ending_angle = (1.0 - face_ratio) * (chord_angle / 2.0);

    if !p.tooth_length_in_range() {
        warn!(
            tooth_length_percent = p.tooth_length_percent,
            "Tooth length outside 0-100%, outer radius is extrapolated"
        );
    }
    if tooth_face_height < 0.0 {
        warn!(
            tooth_face_height,
            "Tooth faces converge below the design radius"
        );
    }

    Ok((
        RadiiSet {
            inner_radius,
            design_radius,
            outer_radius,
            max_outer_radius,
        },
        ToothAngles {
            chord_angle,
            tooth_outer_angle,
            tooth_inner_angle,
            tooth_ending_angle,
            tooth_face_height,
            face_ratio,
        },
    ))
}

/// The six segments of one tooth centered at `center` degrees
fn tooth_outline(
    center: f64,
    pitch_angle: f64,
    radii: &RadiiSet,
    angles: &ToothAngles,
) -> [LineSegment; 6] {
    let half_chord = angles.chord_angle / 2.0;
    let ending = angles.tooth_ending_angle;

    let flank_right_low = PolarPoint::new(radii.inner_radius, center - half_chord);
    let flank_right_high = PolarPoint::new(radii.design_radius, center - half_chord);
    let tip_right = PolarPoint::new(radii.outer_radius, center - ending);
    let tip_left = PolarPoint::new(radii.outer_radius, center + ending);
    let flank_left_high = PolarPoint::new(radii.design_radius, center + half_chord);
    let flank_left_low = PolarPoint::new(radii.inner_radius, center + half_chord);
    let next_tooth = PolarPoint::new(radii.inner_radius, center + pitch_angle - half_chord);

    [
        LineSegment::from_polar(flank_right_low, flank_right_high),
        LineSegment::from_polar(flank_right_high, tip_right),
        LineSegment::from_polar(tip_right, tip_left),
        LineSegment::from_polar(tip_left, flank_left_high),
        LineSegment::from_polar(flank_left_high, flank_left_low),
        LineSegment::from_polar(flank_left_low, next_tooth),
    ]
}
