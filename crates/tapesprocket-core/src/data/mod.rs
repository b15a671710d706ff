//! Data models for sprocket profiles
//!
//! This module provides:
//! - Validated sprocket input parameters
//! - Derived radii and tooth angles
//! - Polar and Cartesian points, line segments
//! - The immutable profile result handed to exporters

pub mod parameters;

pub use parameters::{SprocketParameters, MAX_TOOTH_COUNT};

use serde::{Deserialize, Serialize};

/// Cartesian point in millimeters
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    /// X coordinate (mm)
    pub x: f64,
    /// Y coordinate (mm)
    pub y: f64,
}

impl Point {
    /// Create a new point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Distance from the profile center
    pub fn radius(&self) -> f64 {
        self.x.hypot(self.y)
    }
}

/// Polar coordinate, angle in degrees counter-clockwise from +X
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PolarPoint {
    /// Radius (mm)
    pub radius: f64,
    /// Angle (degrees)
    pub angle: f64,
}

impl PolarPoint {
    /// Create a new polar point
    pub fn new(radius: f64, angle: f64) -> Self {
        Self { radius, angle }
    }

    /// Convert to Cartesian coordinates
    pub fn to_cartesian(self) -> Point {
        let theta = self.angle.to_radians();
        Point::new(self.radius * theta.cos(), self.radius * theta.sin())
    }
}

impl From<PolarPoint> for Point {
    fn from(polar: PolarPoint) -> Self {
        polar.to_cartesian()
    }
}

/// Straight line between two Cartesian points
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    /// Start point
    pub start: Point,
    /// End point
    pub end: Point,
}

impl LineSegment {
    /// Create a new segment
    pub fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Build a segment from two polar endpoints
    pub fn from_polar(start: PolarPoint, end: PolarPoint) -> Self {
        Self::new(start.to_cartesian(), end.to_cartesian())
    }

    /// Segment length
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

/// Drill center for cutter-radius shoulder compensation.
///
/// Not produced by the default profile path.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DrillPoint {
    /// X coordinate (mm)
    pub x: f64,
    /// Y coordinate (mm)
    pub y: f64,
}

impl DrillPoint {
    /// Create a new drill point
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<Point> for DrillPoint {
    fn from(p: Point) -> Self {
        Self::new(p.x, p.y)
    }
}

/// The four characteristic radii of a sprocket (mm)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiiSet {
    /// Disc body radius below the teeth
    pub inner_radius: f64,
    /// Radius at which the tape rests
    pub design_radius: f64,
    /// Radius at which the tooth tips are cut off
    pub outer_radius: f64,
    /// Radius at which the tooth faces would meet in a point
    pub max_outer_radius: f64,
}

impl RadiiSet {
    /// True when `inner <= design <= outer <= max_outer` within `epsilon`
    pub fn is_ordered(&self, epsilon: f64) -> bool {
        self.inner_radius <= self.design_radius + epsilon
            && self.design_radius <= self.outer_radius + epsilon
            && self.outer_radius <= self.max_outer_radius + epsilon
    }
}

/// Intermediate angles of the tooth construction, all in degrees except the face height
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ToothAngles {
    /// Angle subtended by one tooth width at the design radius
    pub chord_angle: f64,
    /// Face angle from radial
    pub tooth_outer_angle: f64,
    /// Complement used for the face height
    pub tooth_inner_angle: f64,
    /// Half-angle of the blunted tip
    pub tooth_ending_angle: f64,
    /// Radial height of the untruncated face (mm)
    pub tooth_face_height: f64,
    /// Fraction of the face kept below the tip, 1.0 for a pointed tooth
    pub face_ratio: f64,
}

/// Complete output of one profile computation.
///
/// Segments are emitted tooth by tooth, six per tooth, and trace one closed contour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileResult {
    /// Parameters the profile was computed from
    pub parameters: SprocketParameters,
    /// Derived radii
    pub radii: RadiiSet,
    /// Derived construction angles
    pub angles: ToothAngles,
    /// Ordered contour segments
    pub segments: Vec<LineSegment>,
    /// Cutter compensation drills; empty unless explicitly attached
    #[serde(default)]
    pub drills: Vec<DrillPoint>,
}

impl ProfileResult {
    /// Number of segments making up a single tooth
    pub const SEGMENTS_PER_TOOTH: usize = 6;

    /// Number of teeth in the profile
    pub fn tooth_count(&self) -> usize {
        self.segments.len() / Self::SEGMENTS_PER_TOOTH
    }

    /// The six segments of tooth `index`, if it exists
    pub fn tooth_segments(&self, index: usize) -> Option<&[LineSegment]> {
        let start = index.checked_mul(Self::SEGMENTS_PER_TOOTH)?;
        self.segments
            .get(start..start + Self::SEGMENTS_PER_TOOTH)
    }

    /// Every segment endpoint in emission order, two per segment
    pub fn points(&self) -> impl Iterator<Item = Point> + '_ {
        self.segments.iter().flat_map(|s| [s.start, s.end])
    }

    /// Largest distance of any endpoint from the center
    pub fn bounding_radius(&self) -> f64 {
        self.points().map(|p| p.radius()).fold(0.0, f64::max)
    }
}
