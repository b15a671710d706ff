use dxf::entities::EntityType;
use dxf::enums::AcadVersion;
use dxf::Drawing;
use proptest::prelude::*;
use tapesprocket_camtools::compute_profile;
use tapesprocket_core::{Point, SprocketParameters};
use tapesprocket_designer::dxf_writer::{serialize_dxf, DEFAULT_LAYER, DRILL_LAYER};

/// Start and end points of every LINE entity, read straight from the group codes
fn parse_lines(text: &str) -> Vec<(Point, Point)> {
    let lines: Vec<&str> = text.lines().collect();
    let pairs: Vec<(i32, &str)> = lines
        .chunks(2)
        .map(|c| (c[0].trim().parse().unwrap(), c[1].trim()))
        .collect();

    let mut result = Vec::new();
    let mut i = 0;
    while i < pairs.len() {
        if pairs[i] == (0, "LINE") {
            let mut coords = [0.0f64; 4];
            i += 1;
            while i < pairs.len() && pairs[i].0 != 0 {
                let slot = match pairs[i].0 {
                    10 => Some(0),
                    20 => Some(1),
                    11 => Some(2),
                    21 => Some(3),
                    _ => None,
                };
                if let Some(slot) = slot {
                    coords[slot] = pairs[i].1.parse().unwrap();
                }
                i += 1;
            }
            result.push((
                Point::new(coords[0], coords[1]),
                Point::new(coords[2], coords[3]),
            ));
        } else {
            i += 1;
        }
    }
    result
}

#[test]
fn test_roundtrip_scenario_a() {
    let profile = compute_profile(&SprocketParameters::default()).unwrap();
    let text = serialize_dxf(&profile.segments, 1.0);
    let parsed = parse_lines(&text);

    assert_eq!(parsed.len(), profile.segments.len());
    for (segment, (start, end)) in profile.segments.iter().zip(&parsed) {
        assert!((segment.start.x - start.x).abs() <= 0.001);
        assert!((segment.start.y - start.y).abs() <= 0.001);
        assert!((segment.end.x - end.x).abs() <= 0.001);
        assert!((segment.end.y - end.y).abs() <= 0.001);
    }
}

#[test]
fn test_coordinates_have_three_decimals() {
    let profile = compute_profile(&SprocketParameters::default()).unwrap();
    let text = serialize_dxf(&profile.segments, 1.0);
    let lines: Vec<&str> = text.lines().collect();
    for pair in lines.chunks(2) {
        let code: i32 = pair[0].trim().parse().unwrap();
        if matches!(code, 10 | 20 | 30 | 11 | 21 | 31) {
            let decimals = pair[1].split('.').nth(1).unwrap();
            assert_eq!(decimals.len(), 3, "bad coordinate {:?}", pair[1]);
        }
    }
}

#[test]
fn test_dxf_crate_reads_output() {
    let profile = compute_profile(&SprocketParameters::default()).unwrap();
    let text = serialize_dxf(&profile.segments, 1.0);
    let drawing = Drawing::load(&mut text.as_bytes()).expect("DXF should parse");
    assert_eq!(drawing.header.version, AcadVersion::R12);

    let layers: Vec<String> = drawing.layers().map(|l| l.name.clone()).collect();
    assert!(layers.iter().any(|l| l == DEFAULT_LAYER));
    assert!(layers.iter().any(|l| l == DRILL_LAYER));

    let lines: Vec<_> = drawing
        .entities()
        .filter_map(|e| match e.specific {
            EntityType::Line(ref line) => Some((e.common.layer.clone(), line.clone())),
            _ => None,
        })
        .collect();
    assert_eq!(lines.len(), profile.segments.len());

    for ((layer, line), segment) in lines.iter().zip(&profile.segments) {
        assert_eq!(layer, DEFAULT_LAYER);
        assert!((line.p1.x - segment.start.x).abs() <= 0.001);
        assert!((line.p1.y - segment.start.y).abs() <= 0.001);
        assert!((line.p2.x - segment.end.x).abs() <= 0.001);
        assert!((line.p2.y - segment.end.y).abs() <= 0.001);
        assert_eq!(line.p1.z, 0.0);
    }
}

#[test]
fn test_inch_scale() {
    let profile = compute_profile(&SprocketParameters::default()).unwrap();
    let scale = 1.0 / 25.4;
    let parsed = parse_lines(&serialize_dxf(&profile.segments, scale));
    let (start, _) = parsed[0];
    assert!((start.x - profile.segments[0].start.x * scale).abs() <= 0.001);
}

proptest! {
    #[test]
    fn entity_count_and_coordinates_roundtrip(
        teeth in 1u32..=60,
        length in 0.0f64..=100.0,
    ) {
        let params = SprocketParameters {
            tooth_count: teeth,
            tooth_width: 0.5,
            tooth_length_percent: length,
            ..SprocketParameters::default()
        };
        let profile = compute_profile(&params).unwrap();
        let parsed = parse_lines(&serialize_dxf(&profile.segments, 1.0));

        prop_assert_eq!(parsed.len(), profile.segments.len());
        for (segment, (start, end)) in profile.segments.iter().zip(&parsed) {
            prop_assert!(segment.start.distance_to(start) <= 0.001 * 2f64.sqrt());
            prop_assert!(segment.end.distance_to(end) <= 0.001 * 2f64.sqrt());
        }
    }
}
