//! Geographic to screen projection seam.

use crate::viewport::ViewportBounds;
use gale_core::geom::{self, Box2D, Point};
use gale_core::{Coordinate, Geometry};

/// Axis-aligned screen-space box.
pub type ScreenRect = Box2D;

/// Maps `[lng, lat]` to screen space. `None` means the coordinate is not visible under this
/// projection (clipped, or outside the projection's domain).
///
/// Any `Fn(Coordinate) -> Option<Point>` is a projection.
pub trait Projection {
    fn project(&self, coordinate: Coordinate) -> Option<Point>;

    /// Screen bounds of every projectable coordinate of `geometry`.
    fn bounds(&self, geometry: &Geometry<'_>) -> Option<ScreenRect> {
        geom::bounding_box(geometry.coordinates().filter_map(|c| self.project(c)))
    }

    /// Screen centroid: the point itself, the length-weighted midpoint of a line, or the area
    /// centroid of a polygon's outer ring. Degenerate lines and rings fall back to the vertex mean.
    fn centroid(&self, geometry: &Geometry<'_>) -> Option<Point> {
        match *geometry {
            Geometry::Point(c) => self.project(*c),
            Geometry::LineString(line) => {
                let points: Vec<Point> = line.iter().filter_map(|c| self.project(*c)).collect();
                line_centroid(&points).or_else(|| vertex_mean(&points))
            }
            Geometry::Polygon(rings) => {
                let outer: Vec<Point> = rings
                    .first()
                    .map(|r| r.iter().filter_map(|c| self.project(*c)).collect())
                    .unwrap_or_default();
                ring_centroid(&outer)
                    .or_else(|| line_centroid(&outer))
                    .or_else(|| vertex_mean(&outer))
            }
        }
    }
}

impl<F> Projection for F
where
    F: Fn(Coordinate) -> Option<Point>,
{
    fn project(&self, coordinate: Coordinate) -> Option<Point> {
        self(coordinate)
    }
}

fn vertex_mean(points: &[Point]) -> Option<Point> {
    if points.is_empty() {
        return None;
    }
    let n = points.len() as f64;
    let (sx, sy) = points
        .iter()
        .fold((0.0, 0.0), |(sx, sy), p| (sx + p.x, sy + p.y));
    Some(geom::point(sx / n, sy / n))
}

fn line_centroid(points: &[Point]) -> Option<Point> {
    let mut total = 0.0;
    let (mut cx, mut cy) = (0.0, 0.0);
    for w in points.windows(2) {
        let len = (w[1] - w[0]).length();
        let mid = w[0].lerp(w[1], 0.5);
        total += len;
        cx += mid.x * len;
        cy += mid.y * len;
    }
    (total > 0.0).then(|| geom::point(cx / total, cy / total))
}

fn ring_centroid(points: &[Point]) -> Option<Point> {
    if points.len() < 3 {
        return None;
    }
    let mut area2 = 0.0;
    let (mut cx, mut cy) = (0.0, 0.0);
    for (i, a) in points.iter().enumerate() {
        let b = points[(i + 1) % points.len()];
        let cross = a.x * b.y - b.x * a.y;
        area2 += cross;
        cx += (a.x + b.x) * cross;
        cy += (a.y + b.y) * cross;
    }
    if area2.abs() < f64::EPSILON {
        return None;
    }
    Some(geom::point(cx / (3.0 * area2), cy / (3.0 * area2)))
}

/// Equirectangular projection: longitude and latitude scale linearly to x and y, y growing
/// southwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearProjection {
    /// Screen units per degree.
    pub scale: f64,
    /// `[lng, lat]` mapped to `offset`.
    pub origin: Coordinate,
    pub offset: Point,
}

impl LinearProjection {
    /// Largest uniform scale that shows `bounds` inside a `width` x `height` screen, centered.
    pub fn fit(bounds: &ViewportBounds, width: f64, height: f64) -> Self {
        let sx = if bounds.width() > 0.0 {
            width / bounds.width()
        } else {
            f64::INFINITY
        };
        let sy = if bounds.height() > 0.0 {
            height / bounds.height()
        } else {
            f64::INFINITY
        };
        let mut scale = sx.min(sy);
        if !scale.is_finite() || scale <= 0.0 {
            scale = 1.0;
        }

        let offset = geom::point(
            (width - bounds.width() * scale) / 2.0,
            (height - bounds.height() * scale) / 2.0,
        );
        Self {
            scale,
            origin: [bounds.min_lng(), bounds.max_lat()],
            offset,
        }
    }
}

impl Projection for LinearProjection {
    fn project(&self, [lng, lat]: Coordinate) -> Option<Point> {
        let [lng0, lat0] = self.origin;
        Some(geom::point(
            self.offset.x + (lng - lng0) * self.scale,
            self.offset.y + (lat0 - lat) * self.scale,
        ))
    }
}
