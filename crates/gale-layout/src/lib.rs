#![forbid(unsafe_code)]

//! Headless map layout for parsed cyclone advisories.
//!
//! Every layout function is pure: it takes the advisory (or already-projected screen data) and
//! returns fresh output. Projection and curve measurement come in through the [`Projection`]
//! and [`ArcLengthCurve`] traits so no rendering technology is assumed.

pub mod cities;
pub mod curve;
pub mod declutter;
pub mod groups;
pub mod headless;
pub mod markers;
pub mod projection;
pub mod viewport;

pub use cities::{City, CityCatalog};
pub use curve::{ArcLengthCurve, Polyline};
pub use declutter::{DeclutterOptions, DeclutterRequest, PlacedCity, select_cities};
pub use groups::{FeatureGroups, LikelyTrack, group_features};
pub use headless::{AdvisoryLayout, LayoutRequest, layout_advisory};
pub use markers::{MarkerOptions, TrackMarker, place_markers};
pub use projection::{LinearProjection, Projection, ScreenRect};
pub use viewport::{ViewportBounds, ViewportOptions, fit_viewport, fit_viewport_onto};

use serde::{Deserialize, Serialize};

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid city catalog entry #{index}: {message}")]
    CityCatalog { index: usize, message: String },
    #[error("layout JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Tunables for every layout step. Deserializes from partial JSON: missing keys keep their
/// defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LayoutOptions {
    pub viewport: ViewportOptions,
    pub declutter: DeclutterOptions,
    pub markers: MarkerOptions,
}

impl LayoutOptions {
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }
}

#[cfg(test)]
mod tests;
