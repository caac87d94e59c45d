use itertools::Itertools;

use crate::point::{Point, Positioning};

impl Point {
    /// Computes the winding number of the point for a polygon ring.
    ///
    /// The ring is anything iterating over vertices in traversal order; the
    /// closing edge back to the first vertex is implicit. The number is:
    /// - `0` if the ring does not wind around the point
    /// - `> 0` if the ring winds around the point counter-clockwise
    /// - `< 0` if the ring winds around the point clockwise
    ///
    /// Crossings are counted on half-open spans so that the two edges
    /// meeting at a vertex level with the point cannot both fire: an upward
    /// edge counts for `e1.y <= y < e2.y` with the point to its left, a
    /// downward edge for `e2.y < y <= e1.y` with the point to its right.
    /// With counter-clockwise vertices this makes bottom and left boundary
    /// points wind and leaves top and right boundary points at zero.
    ///
    /// For background on winding numbers versus crossing counts, see
    /// <https://web.archive.org/web/20130126163405/http://geomalgorithms.com/a03-_inclusion.html>.
    pub fn wn<I>(&self, ring: I) -> isize
    where
        I: IntoIterator,
        I::IntoIter: Clone + ExactSizeIterator,
        I::Item: Into<[f64; 2]> + Clone,
    {
        let mut wn = 0;
        for (e1, e2) in ring.into_iter().circular_tuple_windows() {
            let [_, y1] = e1.clone().into();
            let [_, y2] = e2.clone().into();
            if y1 <= self.y && self.y < y2 {
                // upward crossing, start of the edge included
                if self.position(e1, e2) == Positioning::Left {
                    wn += 1;
                }
            } else if y2 < self.y && self.y <= y1 {
                // downward crossing, start of the edge included
                if self.position(e1, e2) == Positioning::Right {
                    wn -= 1;
                }
            }
        }
        wn
    }

    /// Returns `true` if the point has a nonzero winding number for `ring`.
    pub fn is_inside<I>(&self, ring: I) -> bool
    where
        I: IntoIterator,
        I::IntoIter: Clone + ExactSizeIterator,
        I::Item: Into<[f64; 2]> + Clone,
    {
        self.wn(ring) != 0
    }
}
