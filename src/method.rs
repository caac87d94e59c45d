use std::fmt;
use std::str::FromStr;

use crate::error::PipError;

/// Selects how query points are classified against a ring.
///
/// Each variant has a short string token, accepted by [`FromStr`] and by the
/// [`classify`](crate::classify) function:
/// - `ol`: on an edge of the ring
/// - `ov`: on a vertex of the ring
/// - `lv`: on an edge or on a vertex
/// - `w`: nonzero winding number
/// - `w+`: nonzero winding number, boundary points included
/// - `rc`: odd ray-crossing count
/// - `rc+`: odd ray-crossing count, boundary points included
///
/// The `+` variants run the boundary tests on top of the containment test,
/// so a point counts as inside when either verdict is positive. There is no
/// `ol+` token: the modifier only applies to the two containment methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// `ol`: true only for points lying on an edge.
    OnEdge,
    /// `ov`: true only for points coinciding with a vertex.
    OnVertex,
    /// `lv`: true for points on an edge or on a vertex.
    OnBoundary,
    /// `w`: true for points with a nonzero winding number.
    Winding,
    /// `w+`: like `w`, plus every point on the boundary.
    WindingPlus,
    /// `rc`: true for points with an odd number of ray crossings.
    RayCasting,
    /// `rc+`: like `rc`, plus every point on the boundary.
    RayCastingPlus,
}

impl Method {
    /// Every recognized method, in token order.
    pub const ALL: [Method; 7] = [
        Method::OnEdge,
        Method::OnVertex,
        Method::OnBoundary,
        Method::Winding,
        Method::WindingPlus,
        Method::RayCasting,
        Method::RayCastingPlus,
    ];

    /// The string token for this method.
    pub fn as_str(self) -> &'static str {
        match self {
            Method::OnEdge => "ol",
            Method::OnVertex => "ov",
            Method::OnBoundary => "lv",
            Method::Winding => "w",
            Method::WindingPlus => "w+",
            Method::RayCasting => "rc",
            Method::RayCastingPlus => "rc+",
        }
    }

    /// Whether boundary points count as inside on top of the containment
    /// test.
    pub fn includes_boundary(self) -> bool {
        matches!(self, Method::WindingPlus | Method::RayCastingPlus)
    }
}

impl Default for Method {
    /// Winding number with the boundary included, the most inclusive of the
    /// containment methods.
    fn default() -> Self {
        Method::WindingPlus
    }
}

impl FromStr for Method {
    type Err = PipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ol" => Ok(Method::OnEdge),
            "ov" => Ok(Method::OnVertex),
            "lv" => Ok(Method::OnBoundary),
            "w" => Ok(Method::Winding),
            "w+" => Ok(Method::WindingPlus),
            "rc" => Ok(Method::RayCasting),
            "rc+" => Ok(Method::RayCastingPlus),
            _ => Err(PipError::InvalidMethod(s.to_string())),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
