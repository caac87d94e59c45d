use itertools::Itertools;

use crate::point::Point;

impl Point {
    /// Returns `true` if the point lies on an edge of the ring.
    ///
    /// Edge endpoints are part of their edge, so vertices also test
    /// positive. Coincidence is exact: the point must make the edge's cross
    /// product vanish, see [`Point::position`]. Use
    /// [`Point::on_edge_within`] to thicken the boundary.
    pub fn on_edge<I>(&self, ring: I) -> bool
    where
        I: IntoIterator,
        I::IntoIter: Clone + ExactSizeIterator,
        I::Item: Into<[f64; 2]> + Clone,
    {
        self.on_edge_within(0., ring)
    }

    /// Like [`Point::on_edge`], with an absolute tolerance on every
    /// comparison.
    ///
    /// Coordinate spans are widened by `tol` on each side and the cross
    /// product is accepted when its magnitude is at most `tol`. The cross
    /// product is not normalized by edge length, so the effective thickness
    /// of a long edge is smaller than that of a short one. `tol == 0.`
    /// recovers the exact test.
    pub fn on_edge_within<I>(&self, tol: f64, ring: I) -> bool
    where
        I: IntoIterator,
        I::IntoIter: Clone + ExactSizeIterator,
        I::Item: Into<[f64; 2]> + Clone,
    {
        for (e1, e2) in ring.into_iter().circular_tuple_windows() {
            let [x1, y1] = e1.into();
            let [x2, y2] = e2.into();
            // A horizontal edge level with the point: check the x-span.
            if (self.y - y1).abs() <= tol
                && (self.y - y2).abs() <= tol
                && x1.min(x2) - tol <= self.x
                && self.x <= x1.max(x2) + tol
            {
                return true;
            }
            // Any edge whose y-span holds the point: check collinearity.
            if y1.min(y2) - tol <= self.y && self.y <= y1.max(y2) + tol {
                let cross = (x2 - x1) * (self.y - y1) - (self.x - x1) * (y2 - y1);
                if cross.abs() <= tol {
                    return true;
                }
            }
        }
        false
    }

    /// Returns `true` if the point coincides with a vertex of the ring.
    ///
    /// Coincidence is exact floating-point equality of both coordinates.
    pub fn on_vertex<I>(&self, ring: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<[f64; 2]>,
    {
        self.on_vertex_within(0., ring)
    }

    /// Like [`Point::on_vertex`], accepting vertices whose coordinates both
    /// lie within `tol` of the point's.
    pub fn on_vertex_within<I>(&self, tol: f64, ring: I) -> bool
    where
        I: IntoIterator,
        I::Item: Into<[f64; 2]>,
    {
        ring.into_iter()
            .map(Into::into)
            .any(|[x, y]| (self.x - x).abs() <= tol && (self.y - y).abs() <= tol)
    }
}
