//! Direction markers along a projected track.

use crate::curve::ArcLengthCurve;
use gale_core::geom::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MarkerOptions {
    pub samples: usize,
    /// A sample within this distance of a waypoint has reached it.
    pub reach_radius: f64,
    /// Minimum arc length between the previous emission point and a new marker.
    pub min_spacing: f64,
    /// Arc length between the two samples the tangent is taken from.
    pub tangent_step: f64,
}

impl Default for MarkerOptions {
    fn default() -> Self {
        Self {
            samples: 200,
            reach_radius: 2.0,
            min_spacing: 3.0,
            tangent_step: 1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackMarker {
    pub x: f64,
    pub y: f64,
    pub rotation_degrees: f64,
    pub distance_since_last_marker: f64,
}

/// Places one marker halfway between consecutive waypoints along `curve`.
///
/// The curve is walked in `options.samples` equal steps. Whenever a step lands near a waypoint,
/// a marker is emitted at the arc-length midpoint since the last emission, unless that midpoint
/// is closer than `min_spacing`. Output is ordered by arc length.
pub fn place_markers<C>(curve: &C, waypoints: &[Point], options: &MarkerOptions) -> Vec<TrackMarker>
where
    C: ArcLengthCurve + ?Sized,
{
    let total = curve.total_length();
    if waypoints.is_empty() || options.samples == 0 || !total.is_finite() || total <= 0.0 {
        return Vec::new();
    }

    let mut markers = Vec::new();
    let mut last_emitted = 0.0;
    for i in 1..=options.samples {
        let length = total * i as f64 / options.samples as f64;
        let p = curve.point_at_length(length);

        let reached = waypoints
            .iter()
            .any(|w| (*w - p).length() <= options.reach_radius);
        if !reached {
            continue;
        }

        let halfway = last_emitted + (length - last_emitted) / 2.0;
        if halfway - last_emitted < options.min_spacing {
            continue;
        }

        let p1 = curve.point_at_length(halfway);
        let p2 = curve.point_at_length(halfway + options.tangent_step);
        markers.push(TrackMarker {
            x: p1.x,
            y: p1.y,
            rotation_degrees: (p2.y - p1.y).atan2(p2.x - p1.x).to_degrees(),
            distance_since_last_marker: halfway - last_emitted,
        });
        last_emitted = length;
    }

    tracing::debug!(markers = markers.len(), total_length = total, "placed track markers");
    markers
}
