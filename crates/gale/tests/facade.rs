use gale::{ParseOptions, parse_advisory};
use std::path::PathBuf;

fn fixture(rel: &str) -> String {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join(rel);
    std::fs::read_to_string(&path).expect("fixture")
}

#[test]
fn core_api_is_reexported() {
    let advisory = parse_advisory(&fixture("live/alfred.gml"), ParseOptions::default()).unwrap();
    assert_eq!(advisory.title(), "Tropical Cyclone Alfred");

    let geojson = advisory.to_geojson();
    assert_eq!(geojson["type"], "FeatureCollection");
    assert_eq!(geojson["features"].as_array().map(Vec::len), Some(11));
    assert_eq!(geojson["properties"]["isArchived"], serde_json::json!(false));
}

#[cfg(feature = "layout")]
mod layout {
    use super::fixture;
    use gale::layout::{HeadlessError, HeadlessLayouter, LayoutRequest, layout_bulletin_sync};

    #[test]
    fn layouter_parses_and_lays_out() {
        let layouter = HeadlessLayouter::from_cities_geojson(&fixture("cities.geojson")).unwrap();
        let layout = layouter
            .layout_sync(&fixture("live/alfred.gml"), &LayoutRequest::default())
            .unwrap();

        assert_eq!(layout.title, "Tropical Cyclone Alfred");
        assert!(layout.viewport.is_some());
        assert!(!layout.cities.is_empty());
        assert!(!layout.markers.is_empty());
    }

    #[test]
    fn parse_errors_surface_as_headless_errors() {
        let err = layout_bulletin_sync(
            "<tcWarning>",
            gale::ParseOptions::strict(),
            &[],
            &LayoutRequest::default(),
            &Default::default(),
        )
        .unwrap_err();
        assert!(matches!(err, HeadlessError::Parse(gale::Error::Xml(_))));
    }

    #[test]
    fn bad_city_catalog_is_a_layout_error() {
        let err = HeadlessLayouter::from_cities_geojson("[]").unwrap_err();
        assert!(matches!(err, HeadlessError::Layout(_)));
    }
}
