#![forbid(unsafe_code)]

//! Tropical-cyclone warning parser + typed advisory model (headless).
//!
//! Design goals:
//! - the parser is a pure function of the document (no global state, no I/O)
//! - features are an exhaustively matched enum, never a loose property bag
//! - the XML library is pluggable through [`tree::ElementNode`]

pub mod error;
mod geojson;
pub mod geom;
pub mod model;
mod parse;
pub mod tree;

pub use error::{Error, Result};
pub use model::{
    Advisory, AdvisoryMeta, AreaKind, AreaPolygon, AreaSource, AreaType, Category, Coordinate,
    Feature, FeatureKind, FixType, GeoBox, Geometry, MarineType, PointFix, Properties, Symbol,
    TrackLine, TrackType, WindType,
};
pub use parse::{parse_advisory, parse_coordinate, parse_coordinates, parse_tree};
pub use tree::ElementNode;

#[derive(Debug, Clone, Copy, Default)]
pub struct ParseOptions {
    pub skip_malformed_features: bool,
}

impl ParseOptions {
    /// Strict parsing: the first malformed feature aborts the parse.
    pub fn strict() -> Self {
        Self {
            skip_malformed_features: false,
        }
    }

    /// Lenient parsing: malformed features are logged and left out of the advisory. Documents
    /// that cannot be read at all still fail.
    pub fn lenient() -> Self {
        Self {
            skip_malformed_features: true,
        }
    }
}

#[cfg(test)]
mod tests;
