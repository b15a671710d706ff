use tapesprocket_camtools::sprocket::{compute_profile, SprocketGenerator, ToothSegmentKind};
use tapesprocket_core::{Error, GeometryError, ParameterError, SprocketParameters};

fn scenario_a() -> SprocketParameters {
    SprocketParameters {
        tooth_count: 14,
        tooth_width: 1.0,
        tooth_pitch: 4.0,
        flank_height: 1.0,
        tooth_length_percent: 60.0,
    }
}

#[test]
fn test_scenario_a_radii() {
    let profile = compute_profile(&scenario_a()).unwrap();
    let r = profile.radii;

    assert!((r.design_radius - 8.913).abs() < 1e-3);
    assert!((r.inner_radius - 7.913).abs() < 1e-3);
    assert_eq!(format!("{:.3}", r.inner_radius * 2.0), "15.825");
    assert_eq!(format!("{:.3}", r.design_radius * 2.0), "17.825");
    assert!(r.is_ordered(1e-9));
}

#[test]
fn test_scenario_a_first_tooth() {
    let profile = compute_profile(&scenario_a()).unwrap();
    let tooth = profile.tooth_segments(0).unwrap();
    let r = profile.radii;

    let flank = tooth[ToothSegmentKind::RightFlank as usize];
    assert!((flank.start.radius() - r.inner_radius).abs() < 1e-9);
    assert!((flank.end.radius() - r.design_radius).abs() < 1e-9);
    // The first tooth straddles the +X axis.
    assert!(flank.start.y < 0.0);

    let tip = tooth[ToothSegmentKind::Tip as usize];
    assert!((tip.start.radius() - r.outer_radius).abs() < 1e-9);
    assert!((tip.end.radius() - r.outer_radius).abs() < 1e-9);
    assert!((tip.start.y + tip.end.y).abs() < 1e-9);

    let gap = tooth[ToothSegmentKind::Gap as usize];
    assert!((gap.start.radius() - r.inner_radius).abs() < 1e-9);
    assert!((gap.end.radius() - r.inner_radius).abs() < 1e-9);
}

#[test]
fn test_segments_are_contiguous() {
    let profile = compute_profile(&scenario_a()).unwrap();
    let segments = &profile.segments;
    for i in 0..segments.len() {
        let next = &segments[(i + 1) % segments.len()];
        assert!(
            segments[i].end.distance_to(&next.start) < 1e-9,
            "gap between segment {} and {}",
            i,
            i + 1
        );
    }
}

#[test]
fn test_single_tooth_profile() {
    let params = SprocketParameters {
        tooth_count: 1,
        tooth_width: 0.5,
        tooth_pitch: 4.0,
        flank_height: 0.1,
        tooth_length_percent: 50.0,
    };
    let profile = compute_profile(&params).unwrap();
    assert_eq!(profile.segments.len(), 6);
    assert_eq!(profile.tooth_count(), 1);
    assert!(profile.tooth_segments(1).is_none());
}

#[test]
fn test_extrapolated_tooth_length_is_kept() {
    let mut params = scenario_a();
    params.tooth_length_percent = 150.0;
    let profile = compute_profile(&params).unwrap();
    let r = profile.radii;
    assert!(r.outer_radius > r.max_outer_radius);

    params.tooth_length_percent = -50.0;
    let profile = compute_profile(&params).unwrap();
    assert!(profile.radii.outer_radius < profile.radii.design_radius);
}

#[test]
fn test_geometry_error_message() {
    let params = SprocketParameters {
        tooth_count: 2,
        tooth_width: 10.0,
        tooth_pitch: 2.0,
        flank_height: 0.0,
        tooth_length_percent: 60.0,
    };
    let err = compute_profile(&params).unwrap_err();
    assert!(err
        .to_string()
        .contains("tooth width exceeds design circle capacity"));
    assert!(matches!(
        err,
        Error::Geometry(GeometryError::ToothWidthExceedsDesignCircle { .. })
    ));
}

#[test]
fn test_generator_rejects_invalid_parameters() {
    let params = SprocketParameters {
        tooth_pitch: -4.0,
        ..scenario_a()
    };
    let err = SprocketGenerator::new(params).err().unwrap();
    assert!(matches!(err, ParameterError::OutOfRange { .. }));
}

#[test]
fn test_recompute_is_deterministic() {
    let a = compute_profile(&scenario_a()).unwrap();
    let b = compute_profile(&scenario_a()).unwrap();
    assert_eq!(a, b);
}
