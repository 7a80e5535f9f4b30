//! Static city reference data.

use crate::{Error, Result};
use gale_core::Coordinate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct City {
    pub id: String,
    pub name: String,
    pub population: u64,
    /// `[lng, lat]`.
    pub coordinate: Coordinate,
}

/// Cities loaded once and shared read-only across layout calls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CityCatalog {
    cities: Vec<City>,
}

#[derive(Debug, Deserialize)]
struct RawCollection {
    features: Vec<RawFeature>,
}

#[derive(Debug, Deserialize)]
struct RawFeature {
    geometry: Option<RawGeometry>,
    #[serde(default)]
    properties: RawProperties,
}

#[derive(Debug, Deserialize)]
struct RawGeometry {
    #[serde(rename = "type")]
    kind: String,
    coordinates: Vec<f64>,
}

#[derive(Debug, Default, Deserialize)]
struct RawProperties {
    id: Option<Value>,
    name: Option<String>,
    population: Option<f64>,
}

impl CityCatalog {
    pub fn new(cities: Vec<City>) -> Self {
        Self { cities }
    }

    /// Loads a GeoJSON `FeatureCollection` of `Point` features carrying `id`, `name` and
    /// `population` properties. `id` may be a string or a number.
    pub fn from_geojson(text: &str) -> Result<Self> {
        let raw: RawCollection = serde_json::from_str(text)?;
        let cities = raw
            .features
            .into_iter()
            .enumerate()
            .map(|(index, f)| city_from_feature(index, f))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(cities = cities.len(), "loaded city catalog");
        Ok(Self { cities })
    }

    pub fn cities(&self) -> &[City] {
        &self.cities
    }

    pub fn get(&self, id: &str) -> Option<&City> {
        self.cities.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.cities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cities.is_empty()
    }
}

fn city_from_feature(index: usize, feature: RawFeature) -> Result<City> {
    let invalid = |message: &str| Error::CityCatalog {
        index,
        message: message.to_string(),
    };

    let Some(geometry) = feature.geometry else {
        return Err(invalid("missing geometry"));
    };
    if geometry.kind != "Point" {
        return Err(Error::CityCatalog {
            index,
            message: format!("expected a Point geometry, got {}", geometry.kind),
        });
    }
    let &[lng, lat, ..] = geometry.coordinates.as_slice() else {
        return Err(invalid("expected [lng, lat] coordinates"));
    };

    let id = match feature.properties.id {
        Some(Value::String(s)) => s,
        Some(Value::Number(n)) => n.to_string(),
        _ => return Err(invalid("missing id")),
    };
    let name = feature
        .properties
        .name
        .ok_or_else(|| invalid("missing name"))?;
    let population = feature
        .properties
        .population
        .filter(|p| p.is_finite() && *p >= 0.0)
        .ok_or_else(|| invalid("missing or negative population"))?;

    Ok(City {
        id,
        name,
        population: population.round() as u64,
        coordinate: [lng, lat],
    })
}
