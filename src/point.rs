use std::cmp::Ordering;

/// A point of the 2D plane.
///
/// This is the exchange format of the whole crate: every predicate accepts
/// anything convertible to `[f64; 2]`, so a `Point`, a plain coordinate
/// array or a reference to either can stand in for a query point or for a
/// polygon vertex.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub(crate) x: f64,
    pub(crate) y: f64,
}

impl Point {
    /// Creates a point from its coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<&Point> for [f64; 2] {
    fn from(point: &Point) -> Self {
        [point.x, point.y]
    }
}

impl From<Point> for [f64; 2] {
    fn from(point: Point) -> Self {
        [point.x, point.y]
    }
}

impl From<&[f64; 2]> for Point {
    fn from(&[x, y]: &[f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

/// Positioning of a [`Point`] with respect to a directed line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Positioning {
    Left,
    On,
    Right,
}

impl Point {
    /// Tests if the point is left, on or right of the infinite line through
    /// `p1` and `p2`, looking from `p1` towards `p2`.
    ///
    /// The verdict is the sign of the cross product
    /// `(p2 - p1) x (self - p1)`, compared to zero without any tolerance.
    /// [`Positioning::On`] therefore means the cross product evaluates to
    /// exactly zero in floating-point arithmetic, which a point
    /// mathematically on the line does not always achieve once rounding is
    /// involved.
    pub fn position<T>(&self, p1: T, p2: T) -> Positioning
    where
        T: Into<[f64; 2]>,
    {
        let [x1, y1] = p1.into();
        let [x2, y2] = p2.into();
        match ((x2 - x1) * (self.y - y1) - (self.x - x1) * (y2 - y1)).total_cmp(&0.) {
            Ordering::Greater => Positioning::Left,
            Ordering::Less => Positioning::Right,
            Ordering::Equal => Positioning::On,
        }
    }
}
