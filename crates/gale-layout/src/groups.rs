//! Render-oriented partition of an advisory's features.

use gale_core::{
    Advisory, AreaPolygon, AreaType, Feature, FixType, PointFix, Symbol, TrackLine, TrackType,
};

/// A likely-tracks cone with its 1-based position among the advisory's cones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LikelyTrack<'a> {
    pub index: usize,
    pub feature: &'a Feature,
    pub area: &'a AreaPolygon,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FeatureGroups<'a> {
    /// Draw order: every feature, likely-tracks cones last and in reverse.
    pub ordered: Vec<&'a Feature>,
    /// Watch and warning areas.
    pub areas: Vec<&'a AreaPolygon>,
    /// The current position of a tropical cyclone.
    pub cyclones: Vec<&'a PointFix>,
    /// Wind zones, cones and tracks (everything but fixes and watch/warning areas).
    pub weather: Vec<&'a Feature>,
    pub fixes: Vec<&'a PointFix>,
    /// Likely-tracks cones, reversed so the widest horizon comes first.
    pub likely_tracks: Vec<LikelyTrack<'a>>,
    /// Area city labels are chosen around: the first likely-tracks cone, else the observed
    /// track.
    pub center_area: Option<&'a Feature>,
    /// Line to decorate with direction markers: the forecast track, else the observed track.
    pub track: Option<&'a TrackLine>,
}

fn is_likely_tracks(feature: &Feature) -> bool {
    feature
        .as_area()
        .is_some_and(|a| a.area_type() == Some(&AreaType::LikelyTracks))
}

pub fn group_features(advisory: &Advisory) -> FeatureGroups<'_> {
    let mut groups = FeatureGroups::default();

    let mut cones: Vec<LikelyTrack<'_>> = Vec::new();
    for feature in advisory.features() {
        if let Feature::Area(area) = feature {
            if is_likely_tracks(feature) {
                cones.push(LikelyTrack {
                    index: cones.len() + 1,
                    feature,
                    area,
                });
                continue;
            }
        }
        groups.ordered.push(feature);
    }
    cones.reverse();
    groups.ordered.extend(cones.iter().map(|c| c.feature));
    groups.likely_tracks = cones;

    let mut observed_track: Option<&Feature> = None;
    let mut forecast_track: Option<&TrackLine> = None;
    for &feature in &groups.ordered {
        match feature {
            Feature::Area(area) => {
                if area.is_watch_or_warning() {
                    groups.areas.push(area);
                } else {
                    groups.weather.push(feature);
                }
            }
            Feature::Track(track) => {
                groups.weather.push(feature);
                match track.track_type {
                    TrackType::Observed => observed_track = Some(feature),
                    TrackType::Forecast => forecast_track = Some(track),
                }
            }
            Feature::Point(fix) => {
                if fix.symbol == Symbol::Cyclone && fix.fix_type == FixType::Current {
                    groups.cyclones.push(fix);
                }
                groups.fixes.push(fix);
            }
        }
    }

    groups.center_area = groups
        .likely_tracks
        .last()
        .map(|c| c.feature)
        .or(observed_track);
    groups.track = forecast_track.or_else(|| observed_track.and_then(Feature::as_track));
    groups
}
