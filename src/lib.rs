//! Point-in-polygon testing with interchangeable classifiers.
//!
//! This crate answers one question: which of these points are inside this
//! polygon? The polygon is a single [`Ring`] of vertices in traversal
//! order, implicitly closed, and the answer depends on the chosen
//! [`Method`]:
//! - `w` / `w+`: winding number, without / with the boundary
//! - `rc` / `rc+`: ray casting, without / with the boundary
//! - `ol`, `ov`, `lv`: only the boundary itself (edges, vertices, or both)
//!
//! All comparisons are exact floating-point comparisons, so "on the
//! boundary" means coordinates that hit an edge or vertex exactly; an
//! opt-in tolerance is available through [`Pip::with_tolerance`]. Points
//! outside the ring's bounding box are rejected early by every method.
//!
//! The easiest entry point is the [`classify`] function, which mirrors the
//! string selectors above:
//!
//! ```
//! use pipoly::classify;
//!
//! let square = [[0., 0.], [1., 0.], [1., 1.], [0., 1.]];
//! let points = [[0.5, 0.5], [2., 2.], [0., 0.]];
//!
//! let inside = classify(&square, &points, "w+")?;
//! assert_eq!(inside, vec![true, false, true]);
//! # Ok::<(), pipoly::PipError>(())
//! ```
//!
//! For repeated queries against the same polygon, build a [`Pip`] engine
//! once and re-run it, possibly in parallel with [`Pip::par_classify`].
//! The underlying predicates are also available directly on [`Point`] for
//! callers that want the raw winding numbers or crossing counts.

mod boundary;
mod error;
mod method;
mod pip;
mod point;
mod ray_casting;
mod ring;
mod winding_number;

pub use crate::error::PipError;
pub use crate::method::Method;
pub use crate::pip::{classify, Pip};
pub use crate::point::{Point, Positioning};
pub use crate::ring::{BoundingBox, Ring};
