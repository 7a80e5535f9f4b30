use crate::model::{Advisory, AreaKind, Feature, GeoBox, Geometry, PointFix, Properties};
use serde_json::{Map, Value, json};

impl Advisory {
    /// GeoJSON `FeatureCollection` with the bulletin metadata under `properties`.
    ///
    /// Feature property keys are lowercased (`fixtype`, `tracktype`, `areatype`, ...), which is
    /// what map renderers consuming these bulletins expect.
    pub fn to_geojson(&self) -> Value {
        let mut properties = Map::new();
        let meta = self.meta();
        for (key, value) in [
            ("fcastTime", &meta.forecast_time),
            ("expiryHrs", &meta.expiry_hours),
            ("distId", &meta.dist_id),
            ("distName", &meta.dist_name),
            ("issueTimeABC", &meta.issue_time),
        ] {
            if let Some(v) = value {
                properties.insert(key.to_string(), Value::String(v.clone()));
            }
        }
        properties.insert("isArchived".to_string(), Value::Bool(self.is_archived()));
        if let Some(range) = self.historical_range() {
            properties.insert("historicalRange".to_string(), json!(range));
        }
        properties.insert("title".to_string(), Value::String(self.title().to_string()));
        properties.insert(
            "box".to_string(),
            self.bounding_box().map_or(Value::Null, box_json),
        );
        properties.insert(
            "currentFix".to_string(),
            self.current_fix().map_or(Value::Null, fix_feature),
        );

        json!({
            "type": "FeatureCollection",
            "properties": properties,
            "features": self.features().iter().map(Feature::to_geojson).collect::<Vec<_>>(),
        })
    }
}

impl Feature {
    pub fn to_geojson(&self) -> Value {
        match self {
            Feature::Point(fix) => fix_feature(fix),
            Feature::Track(track) => {
                let mut properties = bag_json(&track.properties);
                properties.insert(
                    "tracktype".to_string(),
                    json!(track.track_type.as_str()),
                );
                feature_json(self.geometry(), properties)
            }
            Feature::Area(area) => {
                let mut properties = bag_json(&area.properties);
                match &area.kind {
                    AreaKind::Zone { area_type, extent } => {
                        properties.insert("areatype".to_string(), json!(area_type.as_str()));
                        if let Some(extent) = extent {
                            properties.insert("extent".to_string(), json!(extent));
                        }
                    }
                    AreaKind::Wind(w) => {
                        properties.insert("windtype".to_string(), json!(w.as_str()));
                    }
                    AreaKind::Marine(m) => {
                        properties.insert("marinetype".to_string(), json!(m.as_str()));
                    }
                }
                feature_json(self.geometry(), properties)
            }
        }
    }
}

impl Geometry<'_> {
    pub fn to_geojson(&self) -> Value {
        let coordinates = match *self {
            Geometry::Point(c) => json!(c),
            Geometry::LineString(line) => json!(line),
            Geometry::Polygon(rings) => json!(rings),
        };
        json!({ "type": self.type_name(), "coordinates": coordinates })
    }
}

fn fix_feature(fix: &PointFix) -> Value {
    let mut properties = Map::new();
    properties.insert("fixtype".to_string(), json!(fix.fix_type.as_str()));
    properties.insert("fixtime".to_string(), json!(fix.fix_time));
    properties.insert("symbol".to_string(), json!(fix.symbol.as_str()));
    properties.insert("category".to_string(), json!(fix.category.get()));
    feature_json(Geometry::Point(&fix.coordinate), properties)
}

fn feature_json(geometry: Geometry<'_>, properties: Map<String, Value>) -> Value {
    json!({
        "type": "Feature",
        "geometry": geometry.to_geojson(),
        "properties": properties,
    })
}

fn bag_json(bag: &Properties) -> Map<String, Value> {
    bag.iter()
        .map(|(k, v)| (k.clone(), Value::String(v.clone())))
        .collect()
}

fn box_json(b: GeoBox) -> Value {
    json!({
        "top": b.top,
        "left": b.left,
        "bottom": b.bottom,
        "right": b.right,
    })
}
