//! City label selection.
//!
//! Candidates are ranked by population and a label is suppressed when a more populous
//! surviving label sits inside its proximity box. The box is measured in screen units scaled
//! by `1 / zoom`, so labels thin out as the map zooms out.

use crate::cities::City;
use crate::projection::Projection;
use gale_core::Geometry;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeclutterOptions {
    /// Screen-unit margin around the target area's bounds.
    pub margin: f64,
    pub max_candidates: usize,
    /// Zoom factors (`1 / zoom`) at or below this use `x_threshold_zoomed`.
    pub zoom_cutoff: f64,
    pub x_threshold: f64,
    pub x_threshold_zoomed: f64,
    pub y_threshold: f64,
}

impl Default for DeclutterOptions {
    fn default() -> Self {
        Self {
            margin: 40.0,
            max_candidates: 100,
            zoom_cutoff: 0.2,
            x_threshold: 4.0,
            x_threshold_zoomed: 2.2,
            y_threshold: 5.0,
        }
    }
}

impl DeclutterOptions {
    /// `(x, y)` proximity thresholds at `zoom`.
    pub fn thresholds(&self, zoom: f64) -> (f64, f64) {
        let zoom = if zoom.is_finite() && zoom != 0.0 {
            zoom
        } else {
            1.0
        };
        let factor = 1.0 / zoom;
        let x = if factor <= self.zoom_cutoff {
            self.x_threshold_zoomed
        } else {
            self.x_threshold
        };
        (x * factor, self.y_threshold * factor)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct DeclutterRequest<'a> {
    /// Area whose screen bounds (plus margin) candidates must fall in. Ignored when an
    /// allowlist is given; `None` disables the bounds filter.
    pub target_area: Option<Geometry<'a>>,
    pub zoom: f64,
    /// City ids to consider. `None` or empty means every city.
    pub allowlist: Option<&'a [String]>,
}

impl Default for DeclutterRequest<'_> {
    fn default() -> Self {
        Self {
            target_area: None,
            zoom: 1.0,
            allowlist: None,
        }
    }
}

/// A city with the screen position it was laid out at.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlacedCity<'a> {
    #[serde(flatten)]
    pub city: &'a City,
    pub x: f64,
    pub y: f64,
}

pub fn select_cities<'a>(
    cities: &'a [City],
    projection: &dyn Projection,
    request: &DeclutterRequest<'_>,
    options: &DeclutterOptions,
) -> Vec<PlacedCity<'a>> {
    let allowlist = request.allowlist.filter(|ids| !ids.is_empty());

    let mut candidates: Vec<PlacedCity<'a>> = cities
        .iter()
        .filter(|c| allowlist.is_none_or(|ids| ids.iter().any(|id| *id == c.id)))
        .filter_map(|city| {
            let p = projection.project(city.coordinate)?;
            Some(PlacedCity {
                city,
                x: p.x,
                y: p.y,
            })
        })
        .collect();

    if allowlist.is_none() {
        if let Some(area) = request.target_area.and_then(|g| projection.bounds(&g)) {
            let m = options.margin;
            candidates.retain(|c| {
                c.x >= area.min.x - m
                    && c.x <= area.max.x + m
                    && c.y >= area.min.y - m
                    && c.y <= area.max.y + m
            });
        }
    }

    candidates.sort_by(|a, b| b.city.population.cmp(&a.city.population));
    candidates.truncate(options.max_candidates);

    let (near_x, near_y) = options.thresholds(request.zoom);
    let mut kept: Vec<PlacedCity<'a>> = Vec::with_capacity(candidates.len());
    for candidate in candidates {
        let crowded_by = kept.iter().find(|other| {
            other.city.population > candidate.city.population
                && (other.x - candidate.x).abs() < near_x
                && (other.y - candidate.y).abs() < near_y
        });
        match crowded_by {
            Some(other) => tracing::trace!(
                city = %candidate.city.id,
                by = %other.city.id,
                "suppressed city label"
            ),
            None => kept.push(candidate),
        }
    }
    kept
}
