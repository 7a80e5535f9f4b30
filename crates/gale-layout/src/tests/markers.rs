use crate::curve::Polyline;
use crate::markers::{MarkerOptions, TrackMarker, place_markers};
use gale_core::geom::point;

fn straight(length: f64) -> Polyline {
    Polyline::new([point(0.0, 0.0), point(length, 0.0)])
}

#[test]
fn two_waypoints_get_one_marker_near_the_middle() {
    let curve = straight(100.0);
    let waypoints = [point(0.0, 0.0), point(100.0, 0.0)];
    let markers = place_markers(&curve, &waypoints, &MarkerOptions::default());

    assert_eq!(markers.len(), 1, "{markers:?}");
    let m = markers[0];
    assert!((m.x - 50.0).abs() < 2.0, "{m:?}");
    assert_eq!(m.y, 0.0);
    assert!(m.rotation_degrees.abs() < 1e-9);
    assert!(m.distance_since_last_marker >= 3.0);
}

#[test]
fn every_leg_between_waypoints_gets_a_marker() {
    let curve = straight(100.0);
    let waypoints = [point(0.0, 0.0), point(50.0, 0.0), point(100.0, 0.0)];
    let options = MarkerOptions {
        reach_radius: 2.1,
        ..MarkerOptions::default()
    };
    let markers = place_markers(&curve, &waypoints, &options);

    let xs: Vec<f64> = markers.iter().map(|m| m.x).collect();
    assert_eq!(xs.len(), 2, "{markers:?}");
    assert!((xs[0] - 24.0).abs() < 1e-9, "{xs:?}");
    assert!((xs[1] - 73.0).abs() < 1e-9, "{xs:?}");
    assert!((markers[1].distance_since_last_marker - 25.0).abs() < 1e-9);
}

#[test]
fn rotation_follows_the_curve() {
    let curve = Polyline::new([point(0.0, 0.0), point(0.0, 100.0)]);
    let waypoints = [point(0.0, 100.0)];
    let markers = place_markers(&curve, &waypoints, &MarkerOptions::default());

    assert_eq!(markers.len(), 1);
    assert!((markers[0].rotation_degrees - 90.0).abs() < 1e-9);
}

#[test]
fn close_waypoints_are_skipped() {
    let curve = straight(4.0);
    let waypoints = [point(4.0, 0.0)];
    let markers = place_markers(&curve, &waypoints, &MarkerOptions::default());
    assert!(markers.is_empty(), "{markers:?}");
}

#[test]
fn degenerate_input_places_nothing() {
    let options = MarkerOptions::default();
    assert!(place_markers(&straight(100.0), &[], &options).is_empty());
    assert!(place_markers(&Polyline::default(), &[point(0.0, 0.0)], &options).is_empty());
    assert!(
        place_markers(&Polyline::new([point(1.0, 1.0)]), &[point(1.0, 1.0)], &options).is_empty()
    );
    let no_samples = MarkerOptions {
        samples: 0,
        ..MarkerOptions::default()
    };
    assert!(place_markers(&straight(100.0), &[point(100.0, 0.0)], &no_samples).is_empty());
}

#[test]
fn placement_is_deterministic() {
    let curve = Polyline::new([point(0.0, 0.0), point(60.0, 80.0), point(160.0, 80.0)]);
    let waypoints = [point(0.0, 0.0), point(60.0, 80.0), point(160.0, 80.0)];
    let options = MarkerOptions::default();

    let first: Vec<TrackMarker> = place_markers(&curve, &waypoints, &options);
    let second = place_markers(&curve, &waypoints, &options);
    assert_eq!(first, second);
    assert!(!first.is_empty());
    assert!(first.windows(2).all(|w| w[0].distance_since_last_marker > 0.0));
}

#[test]
fn marker_serializes_camel_case() {
    let marker = TrackMarker {
        x: 1.0,
        y: 2.0,
        rotation_degrees: 45.0,
        distance_since_last_marker: 12.5,
    };
    assert_eq!(
        serde_json::to_value(marker).unwrap(),
        serde_json::json!({
            "x": 1.0,
            "y": 2.0,
            "rotationDegrees": 45.0,
            "distanceSinceLastMarker": 12.5
        })
    );
}
