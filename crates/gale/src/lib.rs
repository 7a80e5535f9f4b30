#![forbid(unsafe_code)]

//! `gale` is a headless tropical-cyclone advisory toolkit.
//!
//! The parser and typed model are always available. Map layout (viewport fitting, city
//! declutter, track markers) lives behind a feature flag.
//!
//! # Features
//!
//! - `layout`: enable headless map layout (`gale::layout`)

pub use gale_core::*;

#[cfg(feature = "layout")]
pub mod layout {
    pub use gale_layout::{
        AdvisoryLayout, ArcLengthCurve, City, CityCatalog, DeclutterOptions, DeclutterRequest,
        FeatureGroups, LayoutOptions, LayoutRequest, LikelyTrack, LinearProjection,
        MarkerOptions, PlacedCity, Polyline, Projection, ScreenRect, TrackMarker, ViewportBounds,
        ViewportOptions, fit_viewport, fit_viewport_onto, group_features, layout_advisory,
        place_markers, select_cities,
    };

    #[derive(Debug, thiserror::Error)]
    pub enum HeadlessError {
        #[error(transparent)]
        Parse(#[from] gale_core::Error),
        #[error(transparent)]
        Layout(#[from] gale_layout::Error),
    }

    pub type Result<T> = std::result::Result<T, HeadlessError>;

    /// Parses a bulletin and lays it out in one call.
    pub fn layout_bulletin_sync<'a>(
        xml: &str,
        parse_options: gale_core::ParseOptions,
        cities: &'a [City],
        request: &LayoutRequest,
        layout_options: &LayoutOptions,
    ) -> Result<AdvisoryLayout<'a>> {
        let advisory = gale_core::parse_advisory(xml, parse_options)?;
        Ok(layout_advisory(&advisory, cities, request, layout_options))
    }

    /// Bundles the city catalog with parse and layout options so UI integrations can lay out
    /// bulletin after bulletin with a single argument.
    #[derive(Debug, Clone, Default)]
    pub struct HeadlessLayouter {
        pub parse: gale_core::ParseOptions,
        pub catalog: CityCatalog,
        pub layout: LayoutOptions,
    }

    impl HeadlessLayouter {
        pub fn new(catalog: CityCatalog) -> Self {
            Self {
                catalog,
                ..Self::default()
            }
        }

        /// Loads the catalog from GeoJSON text.
        pub fn from_cities_geojson(text: &str) -> Result<Self> {
            Ok(Self::new(CityCatalog::from_geojson(text)?))
        }

        pub fn with_layout_options(mut self, layout: LayoutOptions) -> Self {
            self.layout = layout;
            self
        }

        pub fn lenient(mut self) -> Self {
            self.parse = gale_core::ParseOptions::lenient();
            self
        }

        pub fn parse_sync(&self, xml: &str) -> Result<gale_core::Advisory> {
            Ok(gale_core::parse_advisory(xml, self.parse)?)
        }

        pub fn layout_sync(&self, xml: &str, request: &LayoutRequest) -> Result<AdvisoryLayout<'_>> {
            layout_bulletin_sync(
                xml,
                self.parse,
                self.catalog.cities(),
                request,
                &self.layout,
            )
        }
    }
}
