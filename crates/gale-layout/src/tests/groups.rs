use super::{area, fix, live, parse, track};
use crate::groups::group_features;
use gale_core::{Feature, FeatureKind, FixType, TrackType};

fn cone(extent: &str, coords: &str) -> String {
    area(
        "tcForecastArea",
        &format!("<areaType>Likely Tracks Area</areaType><extent>{extent}</extent>"),
        coords,
    )
}

fn storm() -> String {
    [
        area(
            "tcWarningArea",
            "<areaType>Warning Area</areaType>",
            "153,-27 154,-27 154,-28 153,-27",
        ),
        cone("Up to 24 hours", "154,-26 156,-26 156,-28 154,-26"),
        cone("Up to 48 hours", "152,-25 158,-25 158,-30 152,-25"),
        area(
            "tcWindArea",
            "<windType>Damaging</windType>",
            "155,-26 156,-26 156,-27 155,-26",
        ),
        track("Observed", "157,-25 155.6,-26.7"),
        track("Forecast", "155.6,-26.7 153.9,-27.4"),
        fix("Observed", "Cyclone", "157,-25"),
        fix("Current", "Cyclone", "155.6,-26.7"),
        fix("Forecast", "Low", "153.9,-27.4"),
    ]
    .join("\n")
}

fn extent(feature: &Feature) -> Option<String> {
    feature.as_area()?.properties.get("extent").cloned()
}

#[test]
fn likely_tracks_are_drawn_last_and_reversed() {
    let advisory = parse(&live(&storm()));
    let groups = group_features(&advisory);

    assert_eq!(groups.ordered.len(), advisory.features().len());
    let kinds: Vec<FeatureKind> = groups.ordered.iter().map(|f| f.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            FeatureKind::Area,
            FeatureKind::Area,
            FeatureKind::Track,
            FeatureKind::Track,
            FeatureKind::Point,
            FeatureKind::Point,
            FeatureKind::Point,
            FeatureKind::Area,
            FeatureKind::Area,
        ]
    );

    let cones: Vec<(usize, Option<String>)> = groups
        .likely_tracks
        .iter()
        .map(|c| (c.index, extent(c.feature)))
        .collect();
    assert_eq!(
        cones,
        vec![
            (2, Some("Up to 48 hours".to_string())),
            (1, Some("Up to 24 hours".to_string())),
        ]
    );
    assert_eq!(
        extent(groups.ordered[groups.ordered.len() - 1]).as_deref(),
        Some("Up to 24 hours")
    );
}

#[test]
fn features_are_partitioned_for_rendering() {
    let advisory = parse(&live(&storm()));
    let groups = group_features(&advisory);

    assert_eq!(groups.areas.len(), 1);
    assert!(groups.areas[0].is_watch_or_warning());
    assert_eq!(groups.fixes.len(), 3);
    assert_eq!(groups.cyclones.len(), 1);
    assert_eq!(groups.cyclones[0].fix_type, FixType::Current);
    // Wind area, two cones and two tracks.
    assert_eq!(groups.weather.len(), 5);
    assert!(groups.weather.iter().all(|f| f.as_fix().is_none()));
}

#[test]
fn center_area_is_the_nearest_cone_and_track_is_the_forecast() {
    let advisory = parse(&live(&storm()));
    let groups = group_features(&advisory);

    let center = groups.center_area.expect("center area");
    assert_eq!(extent(center).as_deref(), Some("Up to 24 hours"));
    assert_eq!(groups.track.unwrap().track_type, TrackType::Forecast);
}

#[test]
fn observed_track_stands_in_without_cones_or_forecast() {
    let body = [
        track("Observed", "157,-25 155.6,-26.7"),
        fix("Current", "Cyclone", "155.6,-26.7"),
    ]
    .join("\n");
    let advisory = parse(&live(&body));
    let groups = group_features(&advisory);

    assert!(groups.likely_tracks.is_empty());
    let center = groups.center_area.expect("observed track");
    assert_eq!(center.as_track().unwrap().track_type, TrackType::Observed);
    assert_eq!(groups.track.unwrap().track_type, TrackType::Observed);
}

#[test]
fn fixes_only_have_no_center_or_track() {
    let advisory = parse(&live(&fix("Current", "Low", "118,-15")));
    let groups = group_features(&advisory);

    assert!(groups.center_area.is_none());
    assert!(groups.track.is_none());
    assert!(groups.cyclones.is_empty());
    assert_eq!(groups.fixes.len(), 1);
}
