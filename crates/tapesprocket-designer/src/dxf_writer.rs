//! DXF writer
//!
//! Writes a profile as ASCII DXF (AutoCAD R12, `AC1009`) with millimeter units.
//!
//! R12 is the revision nearly every CAD and CAM reader accepts, and its minimal
//! structure needs no block records, owner handles or OBJECTS section.
//!
//! Document layout:
//! - HEADER: version, `$HANDLING`/`$HANDSEED`, `$INSUNITS`/`$MEASUREMENT` for millimeters
//! - TABLES: a `CONTINUOUS` line type and the `Default` and `Drills` layers
//! - BLOCKS: empty
//! - ENTITIES: one `LINE` per segment on `Default`, in input order
//!
//! Every table and entity gets its own hexadecimal handle. All coordinates are
//! multiplied by the scale factor and written with three decimals.

use std::fmt::{Display, Write};

use tapesprocket_core::LineSegment;

/// Layer holding the profile contour
pub const DEFAULT_LAYER: &str = "Default";
/// Layer reserved for cutter compensation drills
pub const DRILL_LAYER: &str = "Drills";
/// ACI color of the contour layer and its lines (white/black)
pub const DEFAULT_COLOR: i16 = 7;
/// ACI color of the drill layer (red)
pub const DRILL_COLOR: i16 = 1;
/// Line type used by both layers
pub const LINE_TYPE: &str = "CONTINUOUS";

const ACAD_VERSION: &str = "AC1009";
const INSUNITS_MILLIMETERS: i16 = 4;
const MEASUREMENT_METRIC: i16 = 1;
const FIRST_HANDLE: u32 = 0x10;

/// Group-code/value emitter with a running handle counter
struct DxfWriter {
    out: String,
    next_handle: u32,
}

impl DxfWriter {
    fn new(first_handle: u32) -> Self {
        Self {
            out: String::new(),
            next_handle: first_handle,
        }
    }

    fn pair(&mut self, code: u16, value: impl Display) {
        // Writing into a String cannot fail.
        let _ = write!(self.out, "{:>3}\n{}\n", code, value);
    }

    fn coordinate(&mut self, code: u16, value: f64) {
        self.pair(code, format_args!("{:.3}", value));
    }

    fn handle(&mut self) {
        let handle = self.next_handle;
        self.next_handle += 1;
        self.pair(5, format_args!("{:X}", handle));
    }

    fn begin_section(&mut self, name: &str) {
        self.pair(0, "SECTION");
        self.pair(2, name);
    }

    fn end_section(&mut self) {
        self.pair(0, "ENDSEC");
    }

    fn begin_table(&mut self, name: &str, entries: usize) {
        self.pair(0, "TABLE");
        self.pair(2, name);
        self.handle();
        self.pair(70, entries);
    }

    fn end_table(&mut self) {
        self.pair(0, "ENDTAB");
    }

    fn line_type(&mut self) {
        self.pair(0, "LTYPE");
        self.handle();
        self.pair(2, LINE_TYPE);
        self.pair(70, 0);
        self.pair(3, "Solid line");
        self.pair(72, 65);
        self.pair(73, 0);
        self.pair(40, "0.0");
    }

    fn layer(&mut self, name: &str, color: i16) {
        self.pair(0, "LAYER");
        self.handle();
        self.pair(2, name);
        self.pair(70, 0);
        self.pair(62, color);
        self.pair(6, LINE_TYPE);
    }

    fn line(&mut self, segment: &LineSegment, scale: f64) {
        self.pair(0, "LINE");
        self.handle();
        self.pair(8, DEFAULT_LAYER);
        self.pair(62, DEFAULT_COLOR);
        self.coordinate(10, segment.start.x * scale);
        self.coordinate(20, segment.start.y * scale);
        self.coordinate(30, 0.0);
        self.coordinate(11, segment.end.x * scale);
        self.coordinate(21, segment.end.y * scale);
        self.coordinate(31, 0.0);
    }

    fn header(&mut self, handle_seed: u32) {
        self.begin_section("HEADER");
        self.pair(9, "$ACADVER");
        self.pair(1, ACAD_VERSION);
        self.pair(9, "$HANDLING");
        self.pair(70, 1);
        self.pair(9, "$INSUNITS");
        self.pair(70, INSUNITS_MILLIMETERS);
        self.pair(9, "$MEASUREMENT");
        self.pair(70, MEASUREMENT_METRIC);
        self.pair(9, "$HANDSEED");
        self.pair(5, format_args!("{:X}", handle_seed));
        self.end_section();
    }
}

/// Serialize segments as a DXF document.
///
/// `scale` multiplies every coordinate before formatting; pass `1.0` to keep millimeters.
/// Entities appear in the same order as `segments`.
pub fn serialize_dxf(segments: &[LineSegment], scale: f64) -> String {
    let mut body = DxfWriter::new(FIRST_HANDLE);

    body.begin_section("TABLES");
    body.begin_table("LTYPE", 1);
    body.line_type();
    body.end_table();
    body.begin_table("LAYER", 2);
    body.layer(DEFAULT_LAYER, DEFAULT_COLOR);
    body.layer(DRILL_LAYER, DRILL_COLOR);
    body.end_table();
    body.end_section();

    body.begin_section("BLOCKS");
    body.end_section();

    body.begin_section("ENTITIES");
    for segment in segments {
        body.line(segment, scale);
    }
    body.end_section();
    body.pair(0, "EOF");

    // The header needs the final handle seed, so it is written after the body.
    let mut document = DxfWriter::new(body.next_handle);
    document.header(body.next_handle);
    document.out.push_str(&body.out);
    document.out
}
