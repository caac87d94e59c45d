use crate::error::PipError;
use crate::method::Method;

/// A simple polygon ring.
///
/// Vertices are stored in traversal order and the ring is implicitly closed:
/// the edge from the last vertex back to the first always exists, and the
/// first vertex must not be repeated at the end. Construction rejects rings
/// that cannot enclose any area, but self-intersections and duplicate
/// vertices are not checked; feeding a self-intersecting ring to the
/// containment methods yields the even-odd/winding semantics of the
/// underlying counters rather than an error.
#[derive(Debug, Clone, PartialEq)]
pub struct Ring {
    vertices: Vec<[f64; 2]>,
    bbox: BoundingBox,
}

impl Ring {
    /// Creates a ring from vertices in traversal order.
    ///
    /// Either winding direction is fine. Fails with
    /// [`PipError::DegeneratePolygon`] if fewer than 3 vertices are supplied
    /// or if all vertices are collinear (which includes all of them being
    /// equal).
    pub fn new<I>(vertices: I) -> Result<Self, PipError>
    where
        I: IntoIterator,
        I::Item: Into<[f64; 2]>,
    {
        let vertices: Vec<[f64; 2]> = vertices.into_iter().map(Into::into).collect();
        if vertices.len() < 3 {
            return Err(PipError::DegeneratePolygon("fewer than 3 vertices"));
        }
        if !encloses_area(&vertices) {
            return Err(PipError::DegeneratePolygon("all vertices are collinear"));
        }
        let bbox = BoundingBox::of(&vertices);
        Ok(Self { vertices, bbox })
    }

    /// The vertices in traversal order, without the implicit closing vertex.
    pub fn vertices(&self) -> &[[f64; 2]] {
        &self.vertices
    }

    /// The number of vertices, which is also the number of edges.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// The axis-aligned bounding box, computed once at construction.
    pub fn bounding_box(&self) -> &BoundingBox {
        &self.bbox
    }

    /// Classifies a single point with the default method (`w+`).
    ///
    /// Shorthand for a one-off [`Pip::classify_one`](crate::Pip::classify_one)
    /// with an exact boundary test.
    pub fn contains<T>(&self, point: T) -> bool
    where
        T: Into<[f64; 2]>,
    {
        crate::pip::classify_point(self, 0., point.into(), Method::default())
    }
}

/// True if at least one vertex falls off the line through the others.
fn encloses_area(vertices: &[[f64; 2]]) -> bool {
    let first = vertices[0];
    let [x1, y1] = first;
    let Some(&[x2, y2]) = vertices.iter().find(|&&v| v != first) else {
        return false;
    };
    // Plain `==` here: a collinear vertex can leave a negative-zero cross,
    // which `total_cmp` would order below `0.`.
    vertices
        .iter()
        .any(|&[x, y]| (x2 - x1) * (y - y1) - (x - x1) * (y2 - y1) != 0.)
}

/// Axis-aligned bounding box of a [`Ring`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub xmin: f64,
    pub xmax: f64,
    pub ymin: f64,
    pub ymax: f64,
}

impl BoundingBox {
    fn of(vertices: &[[f64; 2]]) -> Self {
        let mut bbox = Self {
            xmin: f64::INFINITY,
            xmax: f64::NEG_INFINITY,
            ymin: f64::INFINITY,
            ymax: f64::NEG_INFINITY,
        };
        for &[x, y] in vertices {
            bbox.xmin = bbox.xmin.min(x);
            bbox.xmax = bbox.xmax.max(x);
            bbox.ymin = bbox.ymin.min(y);
            bbox.ymax = bbox.ymax.max(y);
        }
        bbox
    }

    /// Tests whether a point falls within the box, bounds included.
    ///
    /// A point outside the box is conclusively outside the ring for every
    /// [`Method`]; a point inside still needs the full classification.
    pub fn contains<T>(&self, point: T) -> bool
    where
        T: Into<[f64; 2]>,
    {
        self.contains_within(0., point)
    }

    /// Like [`BoundingBox::contains`] with the bounds pushed out by `tol`,
    /// so that a thickened boundary is not cut off by the box filter.
    pub fn contains_within<T>(&self, tol: f64, point: T) -> bool
    where
        T: Into<[f64; 2]>,
    {
        let [x, y] = point.into();
        self.xmin - tol <= x && x <= self.xmax + tol && self.ymin - tol <= y && y <= self.ymax + tol
    }

    /// The four corners, counter-clockwise from the lower left.
    pub fn corners(&self) -> [[f64; 2]; 4] {
        [
            [self.xmin, self.ymin],
            [self.xmax, self.ymin],
            [self.xmax, self.ymax],
            [self.xmin, self.ymax],
        ]
    }
}

#[cfg(test)]
mod tests {
    use anyhow::Result;
    use rstest::rstest;

    use super::*;

    #[test]
    fn too_few_vertices_are_rejected() {
        let res = Ring::new([[0., 0.], [1., 1.]]);

        assert_eq!(
            res.unwrap_err(),
            PipError::DegeneratePolygon("fewer than 3 vertices")
        );
    }

    #[test]
    fn collinear_vertices_are_rejected() {
        let res = Ring::new([[0., 0.], [1., 1.], [2., 2.], [3., 3.]]);

        assert_eq!(
            res.unwrap_err(),
            PipError::DegeneratePolygon("all vertices are collinear")
        );
    }

    #[rstest]
    #[case::sorted([[0., 0.], [1., 0.], [2., 0.]])]
    #[case::middle_first([[1., 0.], [0., 0.], [2., 0.]])]
    #[case::last_first([[2., 0.], [0., 0.], [1., 0.]])]
    fn collinear_vertices_are_rejected_in_any_order(#[case] vertices: [[f64; 2]; 3]) {
        // Vertices on a horizontal line produce signed zeros in the cross
        // product, so the verdict has to hold for every starting vertex.
        let res = Ring::new(vertices);

        assert_eq!(
            res.unwrap_err(),
            PipError::DegeneratePolygon("all vertices are collinear")
        );
    }

    #[test]
    fn coincident_vertices_are_rejected() {
        let res = Ring::new([[2., 3.], [2., 3.], [2., 3.]]);

        assert_eq!(
            res.unwrap_err(),
            PipError::DegeneratePolygon("all vertices are collinear")
        );
    }

    #[test]
    fn duplicated_leading_vertices_do_not_mask_a_valid_ring() -> Result<()> {
        // The collinearity check must skip duplicates of the first vertex
        // before picking the line's second anchor.
        let ring = Ring::new([[0., 0.], [0., 0.], [1., 0.], [0., 1.]])?;

        assert_eq!(ring.vertex_count(), 4);
        Ok(())
    }

    #[test]
    fn bounding_box_spans_the_vertices() -> Result<()> {
        let ring = Ring::new([[-1., 0.], [3., -2.], [4., 5.], [0., 1.]])?;

        let bbox = ring.bounding_box();
        assert_eq!(bbox.xmin, -1.);
        assert_eq!(bbox.xmax, 4.);
        assert_eq!(bbox.ymin, -2.);
        assert_eq!(bbox.ymax, 5.);
        Ok(())
    }

    #[test]
    fn bounding_box_includes_its_bounds() -> Result<()> {
        let ring = Ring::new([[0., 0.], [2., 0.], [2., 2.], [0., 2.]])?;
        let bbox = ring.bounding_box();

        assert!(bbox.contains([0., 0.]));
        assert!(bbox.contains([2., 1.]));
        assert!(bbox.contains([1., 2.]));
        assert!(!bbox.contains([2.0000001, 1.]));
        assert!(!bbox.contains([1., -0.0000001]));
        Ok(())
    }

    #[test]
    fn corners_run_counter_clockwise() -> Result<()> {
        let ring = Ring::new([[1., 2.], [5., 2.], [3., 7.]])?;

        assert_eq!(
            ring.bounding_box().corners(),
            [[1., 2.], [5., 2.], [5., 7.], [1., 7.]]
        );
        Ok(())
    }

    #[test]
    fn contains_uses_the_default_method() -> Result<()> {
        let square = Ring::new([[0., 0.], [1., 0.], [1., 1.], [0., 1.]])?;

        assert!(square.contains([0.5, 0.5]));
        assert!(square.contains([0., 0.])); // boundary counts under `w+`
        assert!(square.contains([1., 1.]));
        assert!(!square.contains([2., 2.]));
        Ok(())
    }
}
