use itertools::Itertools;

use crate::point::{Point, Positioning};

impl Point {
    /// Counts how often a horizontal ray cast from the point to the right
    /// crosses the edges of a polygon ring.
    ///
    /// An odd count means the point is inside by the even-odd rule. Edges
    /// count on half-open spans closed at their lower end: an upward edge
    /// for `e1.y <= y < e2.y` with the point to its left, a downward edge
    /// for `e2.y <= y < e1.y` with the point to its right.
    ///
    /// The count is unsigned and ignores ring orientation. Because both
    /// spans exclude their top, a ray level with a vertex sees either both
    /// adjacent edges (at a local minimum) or neither (at a local maximum),
    /// so the parity can disagree with [`Point::wn`] for such rays.
    pub fn crossings<I>(&self, ring: I) -> usize
    where
        I: IntoIterator,
        I::IntoIter: Clone + ExactSizeIterator,
        I::Item: Into<[f64; 2]> + Clone,
    {
        let mut crossings = 0;
        for (e1, e2) in ring.into_iter().circular_tuple_windows() {
            let [_, y1] = e1.clone().into();
            let [_, y2] = e2.clone().into();
            if y1 <= self.y && self.y < y2 {
                // upward crossing
                if self.position(e1, e2) == Positioning::Left {
                    crossings += 1;
                }
            } else if y2 <= self.y && self.y < y1 {
                // downward crossing
                if self.position(e1, e2) == Positioning::Right {
                    crossings += 1;
                }
            }
        }
        crossings
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn crossings_square() {
        //
        //     +------5------+
        //     |             |
        //     |             |
        //     |             |
        //     2      0      4      1
        //     |             |
        //     |             |
        //     |             |
        //     +------3------+
        //
        let poly = [[0., 0.], [1., 0.], [1., 1.], [0., 1.]];

        assert_eq!(Point::new(0.5, 0.5).crossings(poly), 1);
        assert_eq!(Point::new(1.5, 0.5).crossings(poly), 0);
        assert_eq!(Point::new(0., 0.5).crossings(poly), 1); // Left edges are included
        assert_eq!(Point::new(0.5, 0.).crossings(poly), 1); // Bottom edges are included
        assert_eq!(Point::new(1., 0.5).crossings(poly), 0); // Right edges are not included
        assert_eq!(Point::new(0.5, 1.).crossings(poly), 0); // Top edges are not included
    }

    #[test]
    fn crossings_ignore_orientation() {
        let ccw = [[0., 0.], [1., 0.], [1., 1.], [0., 1.]];
        let cw = [[0., 0.], [0., 1.], [1., 1.], [1., 0.]];

        assert_eq!(Point::new(0.5, 0.5).crossings(ccw), 1);
        assert_eq!(Point::new(0.5, 0.5).crossings(cw), 1);
    }

    #[test]
    fn crossings_u_shape() {
        //
        //     +-----------------+
        //     |                 |
        //     |       0         |
        //     |   +-------+     |
        //     |   |       |     |
        //     |   |   1   |     |
        //     +---+       +-----+
        //
        let poly = [
            [0., 0.],
            [1., 0.],
            [1., 1.],
            [2., 1.],
            [2., 0.],
            [3., 0.],
            [3., 2.],
            [0., 2.],
        ];

        // The ray from inside the notch crosses the notch wall and the
        // outer wall, the one from above the notch only the outer wall.
        assert_eq!(Point::new(1.5, 1.5).crossings(poly), 1);
        assert_eq!(Point::new(1.5, 0.5).crossings(poly), 2);
    }

    #[test]
    fn crossings_level_with_a_bottom_vertex() {
        let poly = [[1., 0.], [2., 1.], [0., 1.]];

        // Both edges at the apex sit in the ray's half-open span, so the
        // parity here disagrees with the winding number.
        assert_eq!(Point::new(0., 0.).crossings(poly), 2);
        assert_eq!(Point::new(0., 0.).wn(poly), 1);
    }
}
