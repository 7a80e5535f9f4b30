//! One-call layout of an advisory onto a fixed-size screen.

use crate::LayoutOptions;
use crate::cities::City;
use crate::curve::Polyline;
use crate::declutter::{DeclutterRequest, PlacedCity, select_cities};
use crate::groups::group_features;
use crate::markers::{TrackMarker, place_markers};
use crate::projection::{LinearProjection, Projection};
use crate::viewport::{ViewportBounds, fit_viewport};
use gale_core::Advisory;
use gale_core::geom::Point;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutRequest {
    pub width: f64,
    pub height: f64,
    pub zoom: f64,
    pub allowlist: Option<Vec<String>>,
}

impl Default for LayoutRequest {
    fn default() -> Self {
        Self {
            width: 800.0,
            height: 600.0,
            zoom: 1.0,
            allowlist: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvisoryLayout<'a> {
    pub title: String,
    pub width: f64,
    pub height: f64,
    pub viewport: Option<ViewportBounds>,
    pub cities: Vec<PlacedCity<'a>>,
    pub markers: Vec<TrackMarker>,
}

/// Fits the viewport, projects it onto `request.width` x `request.height`, declutters `cities`
/// around the advisory's center area and places direction markers along its track.
///
/// An advisory with nothing to frame gets no viewport, cities or markers.
pub fn layout_advisory<'a>(
    advisory: &Advisory,
    cities: &'a [City],
    request: &LayoutRequest,
    options: &LayoutOptions,
) -> AdvisoryLayout<'a> {
    let mut layout = AdvisoryLayout {
        title: advisory.title().to_string(),
        width: request.width,
        height: request.height,
        viewport: None,
        cities: Vec::new(),
        markers: Vec::new(),
    };

    let Some(viewport) = fit_viewport(advisory, &options.viewport) else {
        return layout;
    };
    layout.viewport = Some(viewport);

    let projection = LinearProjection::fit(&viewport, request.width, request.height);
    let groups = group_features(advisory);

    let declutter = DeclutterRequest {
        target_area: groups.center_area.map(|f| f.geometry()),
        zoom: request.zoom,
        allowlist: request.allowlist.as_deref(),
    };
    layout.cities = select_cities(cities, &projection, &declutter, &options.declutter);

    if let Some(track) = groups.track {
        let curve = Polyline::new(
            track
                .coordinates
                .iter()
                .filter_map(|c| projection.project(*c)),
        );
        let waypoints: Vec<Point> = groups
            .fixes
            .iter()
            .filter_map(|f| projection.project(f.coordinate))
            .collect();
        layout.markers = place_markers(&curve, &waypoints, &options.markers);
    }

    layout
}
