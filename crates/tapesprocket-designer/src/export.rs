//! Profile export
//!
//! Picks the output format from the file extension, renders the profile and writes it
//! through a temporary file in the destination directory that is renamed into place
//! once fully written. A failed export leaves the destination untouched; the profile
//! itself is never modified and can be exported again.
//!
//! The written file gets the same permissions a plain write would give it: a replaced
//! file keeps its mode, a new file gets `0o666` minus the process umask.

use std::fmt;
use std::io::Write;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tapesprocket_core::{Error, ParameterError, ProfileResult, Result};
use tempfile::{Builder, NamedTempFile};
use tracing::{debug, info};

use crate::dxf_writer::serialize_dxf;
use crate::svg_writer::{serialize_svg_with, PathEncoding, SvgOptions, DEFAULT_STROKE_WIDTH};

/// Supported export file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// AutoCAD drawing interchange
    Dxf,
    /// Scalable vector graphics
    Svg,
}

impl ExportFormat {
    /// Determine the format from a file extension (case-insensitive)
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("")
            .to_lowercase();
        match ext.as_str() {
            "dxf" => Ok(Self::Dxf),
            "svg" => Ok(Self::Svg),
            "" => Err(Error::config(format!(
                "Output file has no extension: {}",
                path.display()
            ))),
            other => Err(Error::config(format!("Unknown output format: {}", other))),
        }
    }

    /// Canonical file extension
    pub fn extension(self) -> &'static str {
        match self {
            Self::Dxf => "dxf",
            Self::Svg => "svg",
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Dxf => write!(f, "DXF"),
            Self::Svg => write!(f, "SVG"),
        }
    }
}

/// Export settings shared by both writers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportSettings {
    /// Multiplier applied to DXF coordinates (1.0 keeps millimeters)
    pub dxf_scale: f64,
    /// SVG path point encoding
    pub svg_path_encoding: PathEncoding,
    /// SVG stroke width (mm)
    pub svg_stroke_width: f64,
}

impl Default for ExportSettings {
    fn default() -> Self {
        Self {
            dxf_scale: 1.0,
            svg_path_encoding: PathEncoding::Implicit,
            svg_stroke_width: DEFAULT_STROKE_WIDTH,
        }
    }
}

impl ExportSettings {
    /// Validate the settings
    pub fn validate(&self) -> std::result::Result<(), ParameterError> {
        if !self.dxf_scale.is_finite() || self.dxf_scale <= 0.0 {
            return Err(ParameterError::out_of_range(
                "dxf_scale",
                self.dxf_scale,
                "a finite number > 0",
            ));
        }
        if !self.svg_stroke_width.is_finite() || self.svg_stroke_width <= 0.0 {
            return Err(ParameterError::out_of_range(
                "svg_stroke_width",
                self.svg_stroke_width,
                "a finite number > 0",
            ));
        }
        Ok(())
    }

    /// SVG writer options derived from these settings
    pub fn svg_options(&self) -> SvgOptions {
        SvgOptions {
            encoding: self.svg_path_encoding,
            stroke_width: self.svg_stroke_width,
        }
    }
}

/// Render a profile in the given format
pub fn render_profile(
    profile: &ProfileResult,
    format: ExportFormat,
    settings: &ExportSettings,
) -> Result<String> {
    settings.validate()?;
    let text = match format {
        ExportFormat::Dxf => serialize_dxf(&profile.segments, settings.dxf_scale),
        ExportFormat::Svg => serialize_svg_with(
            &profile.segments,
            profile.radii.max_outer_radius,
            &settings.svg_options(),
        )?,
    };
    debug!(%format, bytes = text.len(), "Rendered profile");
    Ok(text)
}

/// Temporary file in `dir`, created with the mode a regular new file would get
fn temp_file_in(dir: &Path) -> std::io::Result<NamedTempFile> {
    let mut builder = Builder::new();
    builder.prefix(".tapesprocket-").suffix(".tmp");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        builder.permissions(std::fs::Permissions::from_mode(0o666));
    }
    builder.tempfile_in(dir)
}

/// Replace `path` with `contents` via a temporary file in the same directory
pub fn write_atomically(path: &Path, contents: &[u8]) -> std::io::Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = temp_file_in(dir)?;
    if let Ok(existing) = std::fs::metadata(path) {
        tmp.as_file().set_permissions(existing.permissions())?;
    }
    tmp.write_all(contents)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Render and write a profile, choosing the format from the path's extension
pub fn export_profile(
    profile: &ProfileResult,
    path: &Path,
    settings: &ExportSettings,
) -> Result<ExportFormat> {
    let format = ExportFormat::from_path(path)?;
    let text = render_profile(profile, format, settings)?;
    write_atomically(path, text.as_bytes())?;

    info!(
        %format,
        path = %path.display(),
        bytes = text.len(),
        segments = profile.segments.len(),
        "Exported sprocket profile"
    );
    Ok(format)
}
