use crate::Error;
use crate::cities::CityCatalog;

#[test]
fn catalog_loads_point_features() {
    let catalog = CityCatalog::from_geojson(
        r#"{
  "type": "FeatureCollection",
  "features": [
    { "type": "Feature", "geometry": { "type": "Point", "coordinates": [153.0251, -27.4698, 12.0] },
      "properties": { "id": "brisbane", "name": "Brisbane", "population": 2560720 } },
    { "type": "Feature", "geometry": { "type": "Point", "coordinates": [152.7, -25.2833] },
      "properties": { "id": 7, "name": "Hervey Bay", "population": 57722.4 } }
  ]
}"#,
    )
    .unwrap();

    assert_eq!(catalog.len(), 2);
    let brisbane = catalog.get("brisbane").unwrap();
    assert_eq!(brisbane.coordinate, [153.0251, -27.4698]);
    assert_eq!(brisbane.population, 2_560_720);
    let hervey = catalog.get("7").unwrap();
    assert_eq!(hervey.name, "Hervey Bay");
    assert_eq!(hervey.population, 57_722);
    assert!(catalog.get("sydney").is_none());
}

#[test]
fn catalog_rejects_bad_entries() {
    let cases = [
        (r#"{ "properties": { "id": "a", "name": "A", "population": 1 } }"#, "missing geometry"),
        (
            r#"{ "geometry": { "type": "LineString", "coordinates": [] },
                 "properties": { "id": "a", "name": "A", "population": 1 } }"#,
            "expected a Point geometry, got LineString",
        ),
        (
            r#"{ "geometry": { "type": "Point", "coordinates": [1] },
                 "properties": { "id": "a", "name": "A", "population": 1 } }"#,
            "expected [lng, lat] coordinates",
        ),
        (
            r#"{ "geometry": { "type": "Point", "coordinates": [1, 2] },
                 "properties": { "name": "A", "population": 1 } }"#,
            "missing id",
        ),
        (
            r#"{ "geometry": { "type": "Point", "coordinates": [1, 2] },
                 "properties": { "id": "a", "name": "A", "population": -5 } }"#,
            "missing or negative population",
        ),
    ];

    for (feature, expected) in cases {
        let text = format!(r#"{{ "features": [{feature}] }}"#);
        match CityCatalog::from_geojson(&text) {
            Err(Error::CityCatalog { index, message }) => {
                assert_eq!(index, 0);
                assert_eq!(message, expected);
            }
            other => panic!("expected a catalog error for {feature}, got {other:?}"),
        }
    }
}

#[test]
fn catalog_reports_invalid_json() {
    let err = CityCatalog::from_geojson("{ not json").unwrap_err();
    assert!(matches!(err, Error::Json(_)));
    assert!(err.to_string().starts_with("layout JSON error"));
}

#[test]
fn empty_collection_is_an_empty_catalog() {
    let catalog = CityCatalog::from_geojson(r#"{ "features": [] }"#).unwrap();
    assert!(catalog.is_empty());
    assert!(catalog.cities().is_empty());
}
