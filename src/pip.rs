use std::str::FromStr;

use rayon::prelude::*;

use crate::error::PipError;
use crate::method::Method;
use crate::point::Point;
use crate::ring::Ring;

/// The point-in-polygon engine.
///
/// A `Pip` pairs a validated [`Ring`] with the query points to classify.
/// Both are fixed at construction, so the same engine can be re-run with
/// every [`Method`], sequentially or in parallel, without rebuilding
/// anything.
#[derive(Debug, Clone)]
pub struct Pip {
    ring: Ring,
    points: Vec<[f64; 2]>,
    tolerance: f64,
}

impl Pip {
    /// Creates an engine for a ring and a set of query points.
    pub fn new<I>(ring: Ring, points: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<[f64; 2]>,
    {
        Self {
            ring,
            points: points.into_iter().map(Into::into).collect(),
            tolerance: 0.,
        }
    }

    /// Sets the absolute tolerance of the boundary tests.
    ///
    /// The default is `0.`: boundary coincidence means exact floating-point
    /// equality. A positive tolerance thickens edges and vertices (see
    /// [`Point::on_edge_within`]) and pushes the bounding box filter out by
    /// the same amount; the winding and crossing counts themselves are
    /// never relaxed. The tolerance must not be negative.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        debug_assert!(tolerance >= 0., "tolerance must be non-negative");
        self.tolerance = tolerance;
        self
    }

    /// The ring the points are classified against.
    pub fn ring(&self) -> &Ring {
        &self.ring
    }

    /// The query points, in input order.
    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    /// Classifies every query point with `method`.
    ///
    /// The verdict at index `i` is for the point at index `i`; the result
    /// is empty when there are no query points.
    pub fn classify(&self, method: Method) -> Vec<bool> {
        self.points
            .iter()
            .map(|&p| classify_point(&self.ring, self.tolerance, p, method))
            .collect()
    }

    /// Classifies every query point with `method`, in parallel.
    ///
    /// Same verdicts as [`Pip::classify`]; points are partitioned across
    /// the rayon thread pool.
    pub fn par_classify(&self, method: Method) -> Vec<bool> {
        self.points
            .par_iter()
            .map(|&p| classify_point(&self.ring, self.tolerance, p, method))
            .collect()
    }

    /// Classifies a single point, which need not be one of the stored
    /// query points.
    pub fn classify_one<T>(&self, point: T, method: Method) -> bool
    where
        T: Into<[f64; 2]>,
    {
        classify_point(&self.ring, self.tolerance, point.into(), method)
    }
}

/// Classifies one point: box filter, then the base method, then the
/// boundary overlay of the `+` methods.
pub(crate) fn classify_point(ring: &Ring, tol: f64, point: [f64; 2], method: Method) -> bool {
    // Points off the bounding box are outside for every method, including
    // the boundary-only ones.
    if !ring.bounding_box().contains_within(tol, point) {
        return false;
    }
    let p = Point::from(point);
    let vertices = ring.vertices();
    let inside = match method {
        Method::OnEdge => p.on_edge_within(tol, vertices.iter().copied()),
        Method::OnVertex => p.on_vertex_within(tol, vertices.iter().copied()),
        Method::OnBoundary => {
            p.on_edge_within(tol, vertices.iter().copied())
                || p.on_vertex_within(tol, vertices.iter().copied())
        }
        Method::Winding | Method::WindingPlus => p.is_inside(vertices.iter().copied()),
        Method::RayCasting | Method::RayCastingPlus => {
            p.crossings(vertices.iter().copied()) % 2 == 1
        }
    };
    if inside {
        return true;
    }
    method.includes_boundary()
        && (p.on_edge_within(tol, vertices.iter().copied())
            || p.on_vertex_within(tol, vertices.iter().copied()))
}

/// Classifies `points` against `polygon` with the method named by `method`.
///
/// This is the string-driven entry point: `method` must be one of the
/// tokens listed on [`Method`], and `polygon` holds the ring's vertices in
/// traversal order without a closing duplicate of the first one. The
/// selector is validated before the polygon. Fails with
/// [`PipError::InvalidMethod`] for an unknown token and with
/// [`PipError::DegeneratePolygon`] when no ring can be built from the
/// vertices.
pub fn classify(
    polygon: &[[f64; 2]],
    points: &[[f64; 2]],
    method: &str,
) -> Result<Vec<bool>, PipError> {
    let method = Method::from_str(method)?;
    let ring = Ring::new(polygon.iter().copied())?;
    Ok(Pip::new(ring, points.iter().copied()).classify(method))
}
