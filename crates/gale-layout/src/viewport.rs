//! Initial map framing.

use gale_core::{Advisory, Coordinate, Feature, FixType, GeoBox, Symbol};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ViewportOptions {
    /// Padding around live advisories.
    pub live_padding_km: f64,
    /// Padding around archived advisories (the whole history is shown).
    pub archived_padding_km: f64,
    /// Flat conversion, independent of latitude.
    pub km_per_degree: f64,
}

impl Default for ViewportOptions {
    fn default() -> Self {
        Self {
            live_padding_km: 20.0,
            archived_padding_km: 50.0,
            km_per_degree: 111.0,
        }
    }
}

impl ViewportOptions {
    pub fn padding_degrees(&self, archived: bool) -> f64 {
        let km = if archived {
            self.archived_padding_km
        } else {
            self.live_padding_km
        };
        km / self.km_per_degree
    }
}

/// Geographic viewport. Only obtainable by padding a raw box (or merging padded viewports).
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportBounds {
    min_lng: f64,
    min_lat: f64,
    max_lng: f64,
    max_lat: f64,
}

impl ViewportBounds {
    /// Expands `raw` symmetrically by `padding_degrees` on every side.
    pub fn padded(raw: GeoBox, padding_degrees: f64) -> Self {
        Self {
            min_lng: raw.min_lng() - padding_degrees,
            min_lat: raw.min_lat() - padding_degrees,
            max_lng: raw.max_lng() + padding_degrees,
            max_lat: raw.max_lat() + padding_degrees,
        }
    }

    pub fn min_lng(&self) -> f64 {
        self.min_lng
    }

    pub fn min_lat(&self) -> f64 {
        self.min_lat
    }

    pub fn max_lng(&self) -> f64 {
        self.max_lng
    }

    pub fn max_lat(&self) -> f64 {
        self.max_lat
    }

    /// Longitudinal span in degrees.
    pub fn width(&self) -> f64 {
        self.max_lng - self.min_lng
    }

    /// Latitudinal span in degrees.
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    pub fn center(&self) -> Coordinate {
        [
            (self.min_lng + self.max_lng) / 2.0,
            (self.min_lat + self.max_lat) / 2.0,
        ]
    }

    pub fn contains(&self, [lng, lat]: Coordinate) -> bool {
        (self.min_lng..=self.max_lng).contains(&lng) && (self.min_lat..=self.max_lat).contains(&lat)
    }

    /// Union of both viewports.
    pub fn extend(self, other: Self) -> Self {
        Self {
            min_lng: self.min_lng.min(other.min_lng),
            min_lat: self.min_lat.min(other.min_lat),
            max_lng: self.max_lng.max(other.max_lng),
            max_lat: self.max_lat.max(other.max_lat),
        }
    }
}

/// Features a live advisory is framed around: watch/warning areas, wind zones, the current fix
/// and forecast cyclone positions.
fn frames_live_view(feature: &Feature) -> bool {
    match feature {
        Feature::Area(area) => area.is_watch_or_warning() || area.wind_type().is_some(),
        Feature::Point(fix) => {
            fix.fix_type == FixType::Current
                || (fix.symbol == Symbol::Cyclone && fix.fix_type == FixType::Forecast)
        }
        Feature::Track(_) => false,
    }
}

fn is_current_or_forecast_fix(feature: &Feature) -> bool {
    matches!(
        feature,
        Feature::Point(fix) if matches!(fix.fix_type, FixType::Current | FixType::Forecast)
    )
}

/// Computes the initial viewport, or `None` when no feature qualifies.
///
/// Archived advisories frame every feature with the archived padding. Live advisories frame the
/// features of [`frames_live_view`], falling back to the current/forecast fixes when there are
/// none.
pub fn fit_viewport(advisory: &Advisory, options: &ViewportOptions) -> Option<ViewportBounds> {
    let features = advisory.features();
    let archived = advisory.is_archived();

    let selected: Vec<&Feature> = if archived {
        features.iter().collect()
    } else {
        let framing: Vec<&Feature> = features.iter().filter(|f| frames_live_view(f)).collect();
        if framing.is_empty() {
            features
                .iter()
                .filter(|f| is_current_or_forecast_fix(f))
                .collect()
        } else {
            framing
        }
    };

    let raw = GeoBox::from_coordinates(selected.iter().flat_map(|f| f.geometry().coordinates()))?;
    let bounds = ViewportBounds::padded(raw, options.padding_degrees(archived));
    tracing::debug!(
        archived,
        features = selected.len(),
        ?bounds,
        "fitted viewport"
    );
    Some(bounds)
}

/// Extends `bounds` with the advisory's viewport. Returns `bounds` unmodified when nothing
/// qualifies.
pub fn fit_viewport_onto(
    advisory: &Advisory,
    options: &ViewportOptions,
    bounds: ViewportBounds,
) -> ViewportBounds {
    match fit_viewport(advisory, options) {
        Some(fitted) => bounds.extend(fitted),
        None => bounds,
    }
}
