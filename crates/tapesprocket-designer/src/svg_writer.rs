//! SVG writer
//!
//! Writes a profile as a single stroked `<path>` on a square canvas of
//! `2 * max_outer_radius` millimeters. The profile center maps to the canvas center:
//! `(x, y)` becomes `(max_outer_radius + x, max_outer_radius + y)`. The Y axis is not
//! flipped, so viewers show the profile mirrored vertically.
//!
//! Every segment contributes both of its endpoints, even where consecutive segments
//! share one. The first point is an absolute `M`; the rest follow either as implicit
//! line-to pairs (`M x y x y ...`) or with an explicit `L` before each pair.
//!
//! The canvas is written exactly as computed for any finite radius. Degenerate profiles
//! (a single tooth on a tiny design circle) can have a zero or negative maximum outer
//! radius; they still serialize, with a canvas most viewers will not display.

use std::fmt::Write;

use serde::{Deserialize, Serialize};
use tapesprocket_core::{LineSegment, ParameterError, Point};

/// Default stroke width (mm)
pub const DEFAULT_STROKE_WIDTH: f64 = 0.25;

/// How points after the initial move are written in the path data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PathEncoding {
    /// Bare coordinate pairs after `M`, implicitly line-to
    #[default]
    Implicit,
    /// An `L` command before every pair, for strict parsers
    Explicit,
}

/// SVG output options
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SvgOptions {
    pub encoding: PathEncoding,
    pub stroke_width: f64,
}

impl Default for SvgOptions {
    fn default() -> Self {
        Self {
            encoding: PathEncoding::Implicit,
            stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

/// Build the `d` attribute for the given segments, already offset into canvas space
pub fn path_data(segments: &[LineSegment], offset: f64, encoding: PathEncoding) -> String {
    let mut d = String::new();
    let points = segments.iter().flat_map(|s| [s.start, s.end]);

    for (i, Point { x, y }) in points.enumerate() {
        let (px, py) = (offset + x, offset + y);
        let _ = match (i, encoding) {
            (0, _) => write!(d, "M {:.6} {:.6}", px, py),
            (_, PathEncoding::Implicit) => write!(d, " {:.6} {:.6}", px, py),
            (_, PathEncoding::Explicit) => write!(d, " L {:.6} {:.6}", px, py),
        };
    }

    d
}

/// Serialize segments as an SVG document with default options
pub fn serialize_svg(
    segments: &[LineSegment],
    max_outer_radius: f64,
) -> Result<String, ParameterError> {
    serialize_svg_with(segments, max_outer_radius, &SvgOptions::default())
}

/// Serialize segments as an SVG document
pub fn serialize_svg_with(
    segments: &[LineSegment],
    max_outer_radius: f64,
    options: &SvgOptions,
) -> Result<String, ParameterError> {
    if !max_outer_radius.is_finite() {
        return Err(ParameterError::NonFinite {
            name: "max_outer_radius".to_string(),
        });
    }
    if !options.stroke_width.is_finite() || options.stroke_width <= 0.0 {
        return Err(ParameterError::out_of_range(
            "stroke_width",
            options.stroke_width,
            "> 0",
        ));
    }

    let size = max_outer_radius * 2.0;
    let d = path_data(segments, max_outer_radius, options.encoding);

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"utf-8\" ?>\n");
    let _ = writeln!(
        svg,
        "<svg xmlns=\"http://www.w3.org/2000/svg\" version=\"1.1\" baseProfile=\"full\" \
         width=\"{size:.6}mm\" height=\"{size:.6}mm\" viewBox=\"0 0 {size:.6} {size:.6}\">"
    );
    let _ = writeln!(
        svg,
        "<path d=\"{}\" fill=\"none\" stroke=\"black\" stroke-width=\"{}\" />",
        d, options.stroke_width
    );
    svg.push_str("</svg>\n");

    Ok(svg)
}
