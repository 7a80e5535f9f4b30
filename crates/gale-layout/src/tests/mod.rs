mod cities;
mod groups;
mod markers;

use gale_core::{Advisory, ParseOptions, parse_advisory};

pub(crate) fn live(body: &str) -> String {
    format!(
        r#"<tcWarning xmlns:gml="http://www.opengis.net/gml">
  <distName>Alfred</distName>
{body}
</tcWarning>"#
    )
}

pub(crate) fn fix(fix_type: &str, symbol: &str, coords: &str) -> String {
    format!(
        r#"  <tcFix>
    <fixType>{fix_type}</fixType>
    <fixTime>2025-03-04T18:00:00Z</fixTime>
    <symbol>{symbol}</symbol>
    <category>2</category>
    <geometry><gml:Point><gml:coordinates>{coords}</gml:coordinates></gml:Point></geometry>
  </tcFix>"#
    )
}

/// One `lng,lat` pair per line, as GML writes them.
fn coordinate_lines(coords: &str) -> String {
    coords.split_whitespace().collect::<Vec<_>>().join("\n")
}

/// `coords` is a space-separated list of `lng,lat` pairs.
pub(crate) fn track(track_type: &str, coords: &str) -> String {
    let coords = coordinate_lines(coords);
    format!(
        r#"  <tcTrack>
    <trackType>{track_type}</trackType>
    <geometry><gml:LineString><gml:coordinates>{coords}</gml:coordinates></gml:LineString></geometry>
  </tcTrack>"#
    )
}

/// `classification` is the element naming the area, e.g. `<areaType>Watch Area</areaType>`.
pub(crate) fn area(tag: &str, classification: &str, coords: &str) -> String {
    let coords = coordinate_lines(coords);
    format!(
        r#"  <{tag}>
    {classification}
    <geometry><gml:Polygon><gml:outerBoundaryIs><gml:LinearRing>
      <gml:coordinates>{coords}</gml:coordinates>
    </gml:LinearRing></gml:outerBoundaryIs></gml:Polygon></geometry>
  </{tag}>"#
    )
}

pub(crate) fn parse(xml: &str) -> Advisory {
    parse_advisory(xml, ParseOptions::strict()).expect("test advisory parses")
}

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
