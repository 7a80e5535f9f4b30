//! Typed advisory model.
//!
//! An [`Advisory`] owns its [`Feature`]s. Every feature is one of three shapes ([`PointFix`],
//! [`TrackLine`], [`AreaPolygon`]); consumers match on [`Feature`] instead of probing a loose
//! property dictionary.

use indexmap::IndexMap;
use serde::Serialize;
use std::fmt;

/// `[longitude, latitude]` in degrees.
pub type Coordinate = [f64; 2];

/// Lowercased child-tag name to text content, in document order.
pub type Properties = IndexMap<String, String>;

pub const TROPICAL_LOW: &str = "Tropical Low";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FixType {
    Observed,
    Current,
    Forecast,
}

impl FixType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Observed" => Some(Self::Observed),
            "Current" => Some(Self::Current),
            "Forecast" => Some(Self::Forecast),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Observed => "Observed",
            Self::Current => "Current",
            Self::Forecast => "Forecast",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum TrackType {
    Observed,
    Forecast,
}

impl TrackType {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Observed" => Some(Self::Observed),
            "Forecast" => Some(Self::Forecast),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Observed => "Observed",
            Self::Forecast => "Forecast",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Symbol {
    Low,
    Cyclone,
}

impl Symbol {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "Low" => Some(Self::Low),
            "Cyclone" => Some(Self::Cyclone),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Cyclone => "Cyclone",
        }
    }
}

/// Cyclone intensity category, `0..=5`. `0` means "not a tropical cyclone" (and is the value used
/// when a fix carries no category).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub struct Category(u8);

impl Category {
    pub const MAX: u8 = 5;

    pub fn new(value: u8) -> Option<Self> {
        (value <= Self::MAX).then_some(Self(value))
    }

    pub fn get(self) -> u8 {
        self.0
    }
}

/// Defines an enum of known bulletin values with a catch-all for values newer bulletins may add.
macro_rules! open_enum {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash)]
        pub enum $name {
            $($variant,)+
            Other(String),
        }

        impl $name {
            pub fn parse(s: &str) -> Self {
                match s.trim() {
                    $($text => Self::$variant,)+
                    other => Self::Other(other.to_string()),
                }
            }

            pub fn as_str(&self) -> &str {
                match self {
                    $(Self::$variant => $text,)+
                    Self::Other(s) => s.as_str(),
                }
            }
        }

        impl Serialize for $name {
            fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.serialize_str(self.as_str())
            }
        }
    };
}

open_enum!(
    AreaType {
        LikelyTracks => "Likely Tracks Area",
        Watch => "Watch Area",
        Warning => "Warning Area",
    }
);

open_enum!(
    WindType {
        Damaging => "Damaging",
        Destructive => "Destructive",
        VeryDestructive => "Very Destructive",
    }
);

open_enum!(
    MarineType {
        Gale => "Gale",
        Storm => "Storm",
        Hurricane => "Hurricane",
    }
);

/// What an [`AreaPolygon`] denotes.
#[derive(Debug, Clone, PartialEq)]
pub enum AreaKind {
    Zone {
        area_type: AreaType,
        extent: Option<String>,
    },
    Wind(WindType),
    Marine(MarineType),
}

/// Which bulletin element a polygon came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum AreaSource {
    Warning,
    Watch,
    Forecast,
    Wind,
}

impl AreaSource {
    pub const ALL: [Self; 4] = [Self::Warning, Self::Watch, Self::Forecast, Self::Wind];

    pub fn tag_name(self) -> &'static str {
        match self {
            Self::Warning => "tcWarningArea",
            Self::Watch => "tcWatchArea",
            Self::Forecast => "tcForecastArea",
            Self::Wind => "tcWindArea",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointFix {
    pub coordinate: Coordinate,
    pub fix_type: FixType,
    pub fix_time: String,
    pub symbol: Symbol,
    pub category: Category,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackLine {
    pub coordinates: Vec<Coordinate>,
    pub track_type: TrackType,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub properties: Properties,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AreaPolygon {
    pub rings: Vec<Vec<Coordinate>>,
    pub kind: AreaKind,
    pub source: AreaSource,
    pub properties: Properties,
}

impl AreaPolygon {
    pub fn area_type(&self) -> Option<&AreaType> {
        match &self.kind {
            AreaKind::Zone { area_type, .. } => Some(area_type),
            _ => None,
        }
    }

    pub fn wind_type(&self) -> Option<&WindType> {
        match &self.kind {
            AreaKind::Wind(w) => Some(w),
            _ => None,
        }
    }

    /// Watch and warning areas (as opposed to likely-track cones and wind zones).
    pub fn is_watch_or_warning(&self) -> bool {
        matches!(self.area_type(), Some(AreaType::Watch | AreaType::Warning))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FeatureKind {
    Point,
    Track,
    Area,
}

impl fmt::Display for FeatureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Point => "fix",
            Self::Track => "track",
            Self::Area => "area",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Feature {
    Point(PointFix),
    Track(TrackLine),
    Area(AreaPolygon),
}

impl Feature {
    pub fn kind(&self) -> FeatureKind {
        match self {
            Self::Point(_) => FeatureKind::Point,
            Self::Track(_) => FeatureKind::Track,
            Self::Area(_) => FeatureKind::Area,
        }
    }

    pub fn geometry(&self) -> Geometry<'_> {
        match self {
            Self::Point(p) => Geometry::Point(&p.coordinate),
            Self::Track(t) => Geometry::LineString(&t.coordinates),
            Self::Area(a) => Geometry::Polygon(&a.rings),
        }
    }

    pub fn as_fix(&self) -> Option<&PointFix> {
        match self {
            Self::Point(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_track(&self) -> Option<&TrackLine> {
        match self {
            Self::Track(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_area(&self) -> Option<&AreaPolygon> {
        match self {
            Self::Area(a) => Some(a),
            _ => None,
        }
    }
}

/// Borrowed GeoJSON-style geometry of a feature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Geometry<'a> {
    Point(&'a Coordinate),
    LineString(&'a [Coordinate]),
    Polygon(&'a [Vec<Coordinate>]),
}

impl<'a> Geometry<'a> {
    pub fn type_name(&self) -> &'static str {
        match self {
            Self::Point(_) => "Point",
            Self::LineString(_) => "LineString",
            Self::Polygon(_) => "Polygon",
        }
    }

    /// Every coordinate, across all rings for polygons.
    pub fn coordinates(&self) -> Box<dyn Iterator<Item = Coordinate> + 'a> {
        match *self {
            Self::Point(c) => Box::new(std::iter::once(*c)),
            Self::LineString(line) => Box::new(line.iter().copied()),
            Self::Polygon(rings) => Box::new(rings.iter().flat_map(|r| r.iter().copied())),
        }
    }
}

/// Latitude/longitude extrema.
///
/// Field names follow screen orientation in the southern hemisphere bulletins this model was
/// built for: `top` is the minimum latitude, `bottom` the maximum; `left`/`right` are the
/// minimum/maximum longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct GeoBox {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl GeoBox {
    pub fn from_coordinates(coords: impl IntoIterator<Item = Coordinate>) -> Option<Self> {
        let mut it = coords.into_iter();
        let [lng, lat] = it.next()?;
        let mut b = Self {
            top: lat,
            left: lng,
            bottom: lat,
            right: lng,
        };
        for c in it {
            b.include(c);
        }
        Some(b)
    }

    pub fn include(&mut self, [lng, lat]: Coordinate) {
        self.top = self.top.min(lat);
        self.left = self.left.min(lng);
        self.bottom = self.bottom.max(lat);
        self.right = self.right.max(lng);
    }

    pub fn min_lng(&self) -> f64 {
        self.left
    }

    pub fn max_lng(&self) -> f64 {
        self.right
    }

    pub fn min_lat(&self) -> f64 {
        self.top
    }

    pub fn max_lat(&self) -> f64 {
        self.bottom
    }
}

/// Bulletin metadata as found in the top-level tags. Every field is optional: a missing tag
/// leaves it unset.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdvisoryMeta {
    pub dist_id: Option<String>,
    pub dist_name: Option<String>,
    pub issue_time: Option<String>,
    pub forecast_time: Option<String>,
    pub expiry_hours: Option<String>,
}

/// One parsed cyclone bulletin. Built by [`crate::parse_advisory`] and immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Advisory {
    pub(crate) meta: AdvisoryMeta,
    pub(crate) is_archived: bool,
    pub(crate) historical_range: Option<[String; 2]>,
    pub(crate) title: String,
    pub(crate) bounding_box: Option<GeoBox>,
    pub(crate) current_fix: Option<PointFix>,
    pub(crate) features: Vec<Feature>,
}

impl Advisory {
    pub fn meta(&self) -> &AdvisoryMeta {
        &self.meta
    }

    pub fn dist_id(&self) -> Option<&str> {
        self.meta.dist_id.as_deref()
    }

    pub fn dist_name(&self) -> Option<&str> {
        self.meta.dist_name.as_deref()
    }

    pub fn issue_time(&self) -> Option<&str> {
        self.meta.issue_time.as_deref()
    }

    pub fn forecast_time(&self) -> Option<&str> {
        self.meta.forecast_time.as_deref()
    }

    pub fn expiry_hours(&self) -> Option<&str> {
        self.meta.expiry_hours.as_deref()
    }

    /// `true` when the bulletin carried no live geometry (a historical track only).
    pub fn is_archived(&self) -> bool {
        self.is_archived
    }

    /// `[first fix time, last fix time]`; present exactly when the advisory is archived.
    pub fn historical_range(&self) -> Option<&[String; 2]> {
        self.historical_range.as_ref()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Extrema over every fix; `None` when the bulletin has no fixes.
    pub fn bounding_box(&self) -> Option<GeoBox> {
        self.bounding_box
    }

    pub fn current_fix(&self) -> Option<&PointFix> {
        self.current_fix.as_ref()
    }

    pub fn features(&self) -> &[Feature] {
        &self.features
    }

    pub fn fixes(&self) -> impl Iterator<Item = &PointFix> {
        self.features.iter().filter_map(Feature::as_fix)
    }

    pub fn tracks(&self) -> impl Iterator<Item = &TrackLine> {
        self.features.iter().filter_map(Feature::as_track)
    }

    pub fn areas(&self) -> impl Iterator<Item = &AreaPolygon> {
        self.features.iter().filter_map(Feature::as_area)
    }
}

/// Derives the display title from the bulletin name.
///
/// A "Tropical Low" keeps its name; anything else is a named cyclone. Archived bulletins, and
/// named systems whose current fix has dropped below category 1, are prefixed with `Ex-`.
pub fn derive_title(
    dist_name: Option<&str>,
    is_archived: bool,
    current_category: Option<Category>,
) -> String {
    let name = dist_name.unwrap_or_default();
    let is_low = name == TROPICAL_LOW;

    let mut title = if is_low {
        name.to_string()
    } else {
        format!("Tropical Cyclone {name}").trim_end().to_string()
    };

    let weakened = !is_low && current_category.is_some_and(|c| c.get() < 1);
    if is_archived || weakened {
        title.insert_str(0, "Ex-");
    }
    title
}
