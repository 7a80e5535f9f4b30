use gale_core::geom::{self, Point};

/// A curve parametrized by arc length.
pub trait ArcLengthCurve {
    fn total_length(&self) -> f64;

    /// Point at `length` along the curve. Lengths outside `0..=total_length()` clamp to the
    /// nearest end.
    fn point_at_length(&self, length: f64) -> Point;
}

/// Straight segments through screen points.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    points: Vec<Point>,
    /// `cumulative[i]` is the arc length at `points[i]`.
    cumulative: Vec<f64>,
}

impl Polyline {
    pub fn new(points: impl IntoIterator<Item = Point>) -> Self {
        let points: Vec<Point> = points.into_iter().collect();
        let mut cumulative = Vec::with_capacity(points.len());
        let mut acc = 0.0;
        for (i, p) in points.iter().enumerate() {
            if i > 0 {
                acc += (*p - points[i - 1]).length();
            }
            cumulative.push(acc);
        }
        Self { points, cumulative }
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }
}

impl ArcLengthCurve for Polyline {
    fn total_length(&self) -> f64 {
        self.cumulative.last().copied().unwrap_or(0.0)
    }

    fn point_at_length(&self, length: f64) -> Point {
        let Some(&first) = self.points.first() else {
            return geom::point(0.0, 0.0);
        };
        if length.is_nan() || length <= 0.0 || self.points.len() == 1 {
            return first;
        }
        // First vertex at or past `length`.
        let i = self.cumulative.partition_point(|&d| d < length);
        if i >= self.points.len() {
            return self.points[self.points.len() - 1];
        }
        let (a, b) = (self.points[i - 1], self.points[i]);
        let (da, db) = (self.cumulative[i - 1], self.cumulative[i]);
        let seg = db - da;
        if seg <= 0.0 {
            return b;
        }
        a.lerp(b, (length - da) / seg)
    }
}
