use proptest::prelude::*;
use std::f64::consts::PI;
use tapesprocket_camtools::sprocket::compute_profile;
use tapesprocket_core::{Error, GeometryError, SprocketParameters};

fn design_radius(teeth: u32, pitch: f64) -> f64 {
    f64::from(teeth) * pitch / (2.0 * PI)
}

proptest! {
    #[test]
    fn segment_count_is_six_per_tooth(
        teeth in 1u32..=100,
        pitch in 1.0f64..10.0,
        width_fraction in 0.01f64..0.95,
        flank in 0.0f64..2.0,
        length in 0.0f64..=100.0,
    ) {
        let params = SprocketParameters {
            tooth_count: teeth,
            tooth_width: width_fraction * 2.0 * design_radius(teeth, pitch),
            tooth_pitch: pitch,
            flank_height: flank,
            tooth_length_percent: length,
        };
        let profile = compute_profile(&params).unwrap();
        prop_assert_eq!(profile.segments.len(), 6 * teeth as usize);
        prop_assert!(profile.drills.is_empty());
    }

    #[test]
    fn radii_are_ordered_for_conventional_lengths(
        teeth in 3u32..=100,
        pitch in 1.0f64..10.0,
        width_fraction in 0.05f64..0.5,
        flank in 0.0f64..2.0,
        length in 0.0f64..=100.0,
    ) {
        let params = SprocketParameters {
            tooth_count: teeth,
            tooth_width: width_fraction * pitch,
            tooth_pitch: pitch,
            flank_height: flank,
            tooth_length_percent: length,
        };
        let r = compute_profile(&params).unwrap().radii;
        prop_assert!(r.is_ordered(1e-9), "{:?}", r);
    }

    #[test]
    fn contour_is_closed(
        teeth in 1u32..=100,
        pitch in 1.0f64..10.0,
        width_fraction in 0.01f64..0.95,
        length in -50.0f64..150.0,
    ) {
        let params = SprocketParameters {
            tooth_count: teeth,
            tooth_width: width_fraction * 2.0 * design_radius(teeth, pitch),
            tooth_pitch: pitch,
            flank_height: 0.5,
            tooth_length_percent: length,
        };
        let profile = compute_profile(&params).unwrap();
        let n = teeth as usize;
        for i in 0..n {
            let gap = profile.tooth_segments(i).unwrap()[5];
            let next_flank = profile.tooth_segments((i + 1) % n).unwrap()[0];
            prop_assert!(gap.end.distance_to(&next_flank.start) < 1e-9);
        }
    }

    #[test]
    fn too_wide_teeth_fail_without_result(
        teeth in 1u32..=100,
        pitch in 0.5f64..10.0,
        factor in 1.0f64..5.0,
    ) {
        let params = SprocketParameters {
            tooth_count: teeth,
            tooth_width: 2.0 * design_radius(teeth, pitch) * factor,
            tooth_pitch: pitch,
            flank_height: 0.0,
            tooth_length_percent: 60.0,
        };
        let result = compute_profile(&params);
        let is_width_error = matches!(
            result,
            Err(Error::Geometry(GeometryError::ToothWidthExceedsDesignCircle { .. }))
        );
        prop_assert!(is_width_error);
    }
}
