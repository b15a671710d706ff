use std::fs;

use tapesprocket_camtools::compute_profile;
use tapesprocket_core::{Error, SprocketParameters};
use tapesprocket_designer::export::{export_profile, ExportFormat, ExportSettings};
use tapesprocket_designer::{serialize_dxf, serialize_svg};
use tempfile::TempDir;

#[test]
fn test_export_dxf_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("sprocket.dxf");
    let profile = compute_profile(&SprocketParameters::default()).unwrap();

    let format = export_profile(&profile, &path, &ExportSettings::default()).unwrap();
    assert_eq!(format, ExportFormat::Dxf);

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, serialize_dxf(&profile.segments, 1.0));
}

#[test]
fn test_export_svg_file_replaces_existing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("sprocket.svg");
    fs::write(&path, "old contents").unwrap();
    let profile = compute_profile(&SprocketParameters::default()).unwrap();

    export_profile(&profile, &path, &ExportSettings::default()).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    let expected = serialize_svg(&profile.segments, profile.radii.max_outer_radius).unwrap();
    assert_eq!(written, expected);
    assert_eq!(fs::read_dir(temp_dir.path()).unwrap().count(), 1);
}

#[test]
fn test_export_to_missing_directory_is_io_error() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("missing").join("sprocket.dxf");
    let profile = compute_profile(&SprocketParameters::default()).unwrap();

    let err = export_profile(&profile, &path, &ExportSettings::default()).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
    assert!(!path.exists());

    // The profile is still usable after a failed export.
    let retry = temp_dir.path().join("sprocket.dxf");
    assert!(export_profile(&profile, &retry, &ExportSettings::default()).is_ok());
}

#[test]
fn test_unknown_extension_writes_nothing() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("sprocket.step");
    let profile = compute_profile(&SprocketParameters::default()).unwrap();

    let err = export_profile(&profile, &path, &ExportSettings::default()).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
    assert!(!path.exists());
}

#[cfg(unix)]
#[test]
fn test_new_export_gets_regular_file_mode() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let reference = temp_dir.path().join("reference.txt");
    fs::write(&reference, "x").unwrap();
    let expected = fs::metadata(&reference).unwrap().permissions().mode() & 0o777;

    let path = temp_dir.path().join("sprocket.dxf");
    let profile = compute_profile(&SprocketParameters::default()).unwrap();
    export_profile(&profile, &path, &ExportSettings::default()).unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, expected);
}

#[cfg(unix)]
#[test]
fn test_replaced_export_keeps_its_mode() {
    use std::os::unix::fs::PermissionsExt;

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("sprocket.svg");
    fs::write(&path, "old contents").unwrap();
    fs::set_permissions(&path, fs::Permissions::from_mode(0o640)).unwrap();

    let profile = compute_profile(&SprocketParameters::default()).unwrap();
    export_profile(&profile, &path, &ExportSettings::default()).unwrap();

    let mode = fs::metadata(&path).unwrap().permissions().mode() & 0o777;
    assert_eq!(mode, 0o640);
}
