//! Tropical-cyclone warning (GML) to [`Advisory`].

use crate::model::{
    Advisory, AdvisoryMeta, AreaKind, AreaPolygon, AreaSource, AreaType, Category, Coordinate,
    Feature, FeatureKind, FixType, GeoBox, MarineType, PointFix, Properties, Symbol, TrackLine,
    TrackType, WindType, derive_title,
};
use crate::tree::ElementNode;
use crate::{Error, ParseOptions, Result};

/// Wrapper element around live geometry. Archived bulletins carry none.
const GEOMETRY_TAG: &str = "geometry";
const TRACK_TAG: &str = "tcTrack";
const FIX_TAG: &str = "tcFix";

/// Parses bulletin text with `roxmltree` and builds the advisory from it.
pub fn parse_advisory(xml: &str, options: ParseOptions) -> Result<Advisory> {
    let doc = roxmltree::Document::parse(xml)?;
    parse_tree(&doc.root(), options)
}

/// Builds an advisory from any element tree. `document` must be the document (or root
/// element); every lookup searches its descendants.
pub fn parse_tree<N: ElementNode>(document: &N, options: ParseOptions) -> Result<Advisory> {
    let nodes = document.descendants();
    let first_text = |name: &str| {
        nodes
            .iter()
            .find(|n| n.is(name))
            .map(ElementNode::text_content)
    };
    let all = |name: &str| nodes.iter().filter(|n| n.is(name)).collect::<Vec<_>>();

    let meta = AdvisoryMeta {
        dist_id: first_text("distId"),
        dist_name: first_text("distName"),
        issue_time: first_text("issueTimeABC"),
        forecast_time: first_text("fcastTime"),
        expiry_hours: first_text("expiryHrs"),
    };

    let is_archived = !nodes.iter().any(|n| n.is(GEOMETRY_TAG));

    let mut features = Vec::new();

    for source in AreaSource::ALL {
        for (index, node) in all(source.tag_name()).into_iter().enumerate() {
            let parsed = parse_areas(node, source, index);
            if let Some(areas) = accept(parsed, options)? {
                features.extend(areas.into_iter().map(Feature::Area));
            }
        }
    }

    for (index, node) in all(TRACK_TAG).into_iter().enumerate() {
        if let Some(track) = accept(parse_track(node, index), options)? {
            features.push(Feature::Track(track));
        }
    }

    let mut bounding_box: Option<GeoBox> = None;
    let mut current_fix: Option<PointFix> = None;
    let mut fix_times: Vec<String> = Vec::new();
    for (index, node) in all(FIX_TAG).into_iter().enumerate() {
        let parsed = parse_fix(node, index).and_then(|fix| {
            if fix.fix_type == FixType::Current && current_fix.is_some() {
                return Err(Error::malformed(
                    FeatureKind::Point,
                    index,
                    "second fix with fixType `Current`",
                ));
            }
            Ok(fix)
        });
        let Some(fix) = accept(parsed, options)? else {
            continue;
        };

        match bounding_box.as_mut() {
            Some(b) => b.include(fix.coordinate),
            None => bounding_box = GeoBox::from_coordinates([fix.coordinate]),
        }
        if fix.fix_type == FixType::Current {
            current_fix = Some(fix.clone());
        }
        fix_times.push(fix.fix_time.clone());
        features.push(Feature::Point(fix));
    }

    let historical_range = if is_archived {
        let (Some(first), Some(last)) = (fix_times.first(), fix_times.last()) else {
            return Err(Error::MissingHistory);
        };
        Some([first.clone(), last.clone()])
    } else {
        None
    };

    let title = derive_title(
        meta.dist_name.as_deref(),
        is_archived,
        current_fix.as_ref().map(|f| f.category),
    );

    tracing::debug!(
        title = %title,
        archived = is_archived,
        features = features.len(),
        fixes = fix_times.len(),
        "parsed advisory"
    );

    Ok(Advisory {
        meta,
        is_archived,
        historical_range,
        title,
        bounding_box,
        current_fix,
        features,
    })
}

/// Turns a malformed feature into a skip under lenient parsing. Document-level errors always
/// propagate.
fn accept<T>(parsed: Result<T>, options: ParseOptions) -> Result<Option<T>> {
    match parsed {
        Ok(v) => Ok(Some(v)),
        Err(err @ Error::MalformedFeature { .. }) if options.skip_malformed_features => {
            tracing::warn!(error = %err, "skipping malformed feature");
            Ok(None)
        }
        Err(err) => Err(err),
    }
}

/// Direct child tags (lowercased, `geometry` excluded) mapped to their text.
fn node_properties<N: ElementNode>(node: &N) -> Properties {
    node.child_elements()
        .iter()
        .filter(|child| !child.is(GEOMETRY_TAG))
        .map(|child| (child.local_name().to_lowercase(), child.text_content()))
        .collect()
}

fn property<'p>(properties: &'p Properties, key: &str) -> Option<&'p str> {
    properties
        .get(key)
        .map(|v| v.trim())
        .filter(|v| !v.is_empty())
}

fn area_kind(properties: &Properties) -> Option<AreaKind> {
    if let Some(area_type) = property(properties, "areatype") {
        return Some(AreaKind::Zone {
            area_type: AreaType::parse(area_type),
            extent: property(properties, "extent").map(str::to_string),
        });
    }
    if let Some(wind_type) = property(properties, "windtype") {
        return Some(AreaKind::Wind(WindType::parse(wind_type)));
    }
    property(properties, "marinetype").map(|m| AreaKind::Marine(MarineType::parse(m)))
}

/// One polygon per coordinates element beneath an area element.
fn parse_areas<N: ElementNode>(
    node: &N,
    source: AreaSource,
    index: usize,
) -> Result<Vec<AreaPolygon>> {
    let rings = node
        .coordinates_nodes()
        .iter()
        .map(|c| parse_coordinates(&c.text_content()))
        .collect::<Result<Vec<_>>>()?;
    if rings.is_empty() {
        return Ok(Vec::new());
    }
    if rings.iter().any(Vec::is_empty) {
        return Err(Error::malformed(
            FeatureKind::Area,
            index,
            format!("<{}> has an empty coordinate list", source.tag_name()),
        ));
    }

    let properties = node_properties(node);
    let Some(kind) = area_kind(&properties) else {
        return Err(Error::malformed(
            FeatureKind::Area,
            index,
            format!(
                "<{}> has none of areaType, windType, marineType",
                source.tag_name()
            ),
        ));
    };

    Ok(rings
        .into_iter()
        .map(|ring| AreaPolygon {
            rings: vec![ring],
            kind: kind.clone(),
            source,
            properties: properties.clone(),
        })
        .collect())
}

fn parse_track<N: ElementNode>(node: &N, index: usize) -> Result<TrackLine> {
    let Some(coords_node) = node.coordinates_nodes().into_iter().next() else {
        return Err(Error::malformed(
            FeatureKind::Track,
            index,
            "missing coordinates",
        ));
    };
    let coordinates = parse_coordinates(&coords_node.text_content())?;
    if coordinates.is_empty() {
        return Err(Error::malformed(
            FeatureKind::Track,
            index,
            "empty coordinate list",
        ));
    }

    let properties = node_properties(node);
    let track_type = match property(&properties, "tracktype") {
        None => {
            return Err(Error::malformed(
                FeatureKind::Track,
                index,
                "missing trackType",
            ));
        }
        Some(raw) => TrackType::parse(raw).ok_or_else(|| {
            Error::malformed(
                FeatureKind::Track,
                index,
                format!("unknown trackType `{raw}`"),
            )
        })?,
    };

    Ok(TrackLine {
        coordinates,
        track_type,
        start_time: property(&properties, "starttime").map(str::to_string),
        end_time: property(&properties, "endtime").map(str::to_string),
        properties,
    })
}

fn parse_fix<N: ElementNode>(node: &N, index: usize) -> Result<PointFix> {
    let malformed = |message: String| Error::malformed(FeatureKind::Point, index, message);
    let required = |name: &str| {
        node.find_text(name)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .ok_or_else(|| malformed(format!("missing {name}")))
    };

    let Some(coords_node) = node.coordinates_nodes().into_iter().next() else {
        return Err(malformed("missing coordinates".to_string()));
    };
    let coordinate = parse_coordinate(&coords_node.text_content())?;

    let fix_type_raw = required("fixType")?;
    let fix_type = FixType::parse(&fix_type_raw)
        .ok_or_else(|| malformed(format!("unknown fixType `{fix_type_raw}`")))?;
    let fix_time = required("fixTime")?;
    let symbol_raw = required("symbol")?;
    let symbol = Symbol::parse(&symbol_raw)
        .ok_or_else(|| malformed(format!("unknown symbol `{symbol_raw}`")))?;

    let category = match node.find_text("category").as_deref().map(str::trim) {
        None | Some("") => Category::default(),
        Some(raw) => raw
            .parse::<u8>()
            .ok()
            .and_then(Category::new)
            .ok_or_else(|| malformed(format!("category `{raw}` is not in 0..=5")))?,
    };

    Ok(PointFix {
        coordinate,
        fix_type,
        fix_time,
        symbol,
        category,
    })
}

/// Parses one `lng,lat` pair. Surrounding whitespace is ignored, as are ordinates past the
/// second (altitude).
pub fn parse_coordinate(text: &str) -> Result<Coordinate> {
    let line = text.trim();
    let mut parts = line.split(',').map(str::trim);
    let lng = parse_ordinate(parts.next(), line)?;
    let lat = parse_ordinate(parts.next(), line)?;
    Ok([lng, lat])
}

/// Parses a newline-separated list of `lng,lat` pairs. Blank lines are skipped.
pub fn parse_coordinates(text: &str) -> Result<Vec<Coordinate>> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(parse_coordinate)
        .collect()
}

fn parse_ordinate(part: Option<&str>, line: &str) -> Result<f64> {
    let invalid = |message: String| Error::InvalidCoordinate {
        text: line.to_string(),
        message,
    };
    let Some(part) = part.filter(|p| !p.is_empty()) else {
        return Err(invalid("expected `lng,lat`".to_string()));
    };
    let v = part.parse::<f64>().map_err(|e| invalid(e.to_string()))?;
    if !v.is_finite() {
        return Err(invalid(format!("`{part}` is not a finite number")));
    }
    Ok(v)
}
