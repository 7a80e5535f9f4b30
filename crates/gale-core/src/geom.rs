#![forbid(unsafe_code)]

//! Screen-space geometry shared by the layout crates.
//!
//! Geographic data stays in `[longitude, latitude]` arrays (see [`crate::model::Coordinate`]);
//! these aliases are for projected, pixel-like units only.

pub type Unit = euclid::UnknownUnit;

pub type Point = euclid::Point2D<f64, Unit>;
pub type Vector = euclid::Vector2D<f64, Unit>;
pub type Box2D = euclid::Box2D<f64, Unit>;

pub fn point(x: f64, y: f64) -> Point {
    euclid::point2(x, y)
}

/// Smallest box containing every point, or `None` for an empty input.
pub fn bounding_box(points: impl IntoIterator<Item = Point>) -> Option<Box2D> {
    let mut it = points.into_iter();
    let first = it.next()?;
    let mut b = Box2D::new(first, first);
    for p in it {
        b.min = b.min.min(p);
        b.max = b.max.max(p);
    }
    Some(b)
}
