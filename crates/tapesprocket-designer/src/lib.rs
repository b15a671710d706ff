//! # Tape Sprocket Designer Export
//!
//! Serializers that turn a computed sprocket profile into files for fabrication
//! and inspection.
//!
//! ## Features
//!
//! - **DXF**: R12 ASCII drawing with one `LINE` entity per contour segment
//! - **SVG**: single stroked path sized to the maximum outer diameter
//! - **Export**: format selection by extension and atomic file replacement
//!
//! Both serializers are pure functions of the segment list; only [`export`] touches
//! the file system.

pub mod dxf_writer;
pub mod export;
pub mod svg_writer;

pub use dxf_writer::{serialize_dxf, DEFAULT_LAYER, DRILL_LAYER};
pub use export::{export_profile, render_profile, write_atomically, ExportFormat, ExportSettings};
pub use svg_writer::{path_data, serialize_svg, serialize_svg_with, PathEncoding, SvgOptions};
