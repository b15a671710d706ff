//! # Tape Sprocket Designer
//!
//! Generates the 2D cutting profile of a sprocket wheel that drives perforated tape
//! (film, punched paper tape, tape-fed printers) and exports it for CNC routing or
//! laser cutting.
//!
//! ## Architecture
//!
//! The tool is organized as a workspace with multiple crates:
//!
//! 1. **tapesprocket-core** - Parameters, radii, geometric primitives, error kinds
//! 2. **tapesprocket-camtools** - Profile generation, diameter report, cutter compensation
//! 3. **tapesprocket-designer** - DXF and SVG writers, atomic file export
//! 4. **tapesprocket-settings** - TOML/JSON configuration files
//! 5. **tapesprocket** - Command-line binary that integrates all crates
//!
//! ## Example
//!
//! ```no_run
//! use tapesprocket::{compute_profile, serialize_dxf, SprocketParameters};
//!
//! let profile = compute_profile(&SprocketParameters::default())?;
//! let dxf = serialize_dxf(&profile.segments, 1.0);
//! # Ok::<(), tapesprocket::Error>(())
//! ```

pub use tapesprocket_camtools::{
    compute_profile, cutter_compensation_drills, derive_dimensions, DiameterReport,
    SprocketGenerator, ToothSegmentKind,
};
pub use tapesprocket_core::{
    DrillPoint, Error, GeometryError, LengthUnit, LineSegment, ParameterError, Point, PolarPoint,
    ProfileResult, RadiiSet, Result, SprocketParameters, ToothAngles,
};
pub use tapesprocket_designer::{
    export_profile, render_profile, serialize_dxf, serialize_svg, serialize_svg_with,
    ExportFormat, ExportSettings, PathEncoding, SvgOptions,
};
pub use tapesprocket_settings::Config;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Parameter values given on the command line, each replacing the configured one
#[derive(Debug, Clone, Default, PartialEq, clap::Args)]
pub struct ParameterOverrides {
    /// Number of teeth
    #[arg(short = 'n', long = "teeth")]
    pub tooth_count: Option<u32>,
    /// Tooth width along the design circle (mm)
    #[arg(short = 'w', long = "width")]
    pub tooth_width: Option<f64>,
    /// Distance between perforations (mm)
    #[arg(short = 'p', long = "pitch")]
    pub tooth_pitch: Option<f64>,
    /// Radial depth of the gap below the design circle (mm)
    #[arg(short = 'f', long = "flank")]
    pub flank_height: Option<f64>,
    /// Tooth length as a percentage of the maximum tooth height
    #[arg(short = 'l', long = "length")]
    pub tooth_length_percent: Option<f64>,
}

impl ParameterOverrides {
    /// Apply the overrides on top of `base` and validate the result
    pub fn apply(
        &self,
        base: &SprocketParameters,
    ) -> std::result::Result<SprocketParameters, ParameterError> {
        let params = SprocketParameters {
            tooth_count: self.tooth_count.unwrap_or(base.tooth_count),
            tooth_width: self.tooth_width.unwrap_or(base.tooth_width),
            tooth_pitch: self.tooth_pitch.unwrap_or(base.tooth_pitch),
            flank_height: self.flank_height.unwrap_or(base.flank_height),
            tooth_length_percent: self
                .tooth_length_percent
                .unwrap_or(base.tooth_length_percent),
        };
        params.validate()?;
        Ok(params)
    }
}

/// Initialize logging with the default configuration
///
/// Sets up structured logging with:
/// - Output on stderr, so documents written to stdout stay clean
/// - RUST_LOG environment variable support
/// - INFO as the default level
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .try_init()?;

    Ok(())
}
