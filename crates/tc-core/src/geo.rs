//! Geographic coordinates and straight-line distance.
//!
//! Unlike a routing cost, the great-circle distance here only feeds the
//! curvature statistic, so `f64` is used throughout to keep the ratio stable
//! for stops a few hundred metres apart.

/// Mean Earth radius in metres.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// A WGS-84 coordinate in degrees.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    #[inline]
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Great-circle distance to `other` in metres.
    #[inline]
    pub fn distance_m(self, other: Coordinates) -> f64 {
        compute_distance(self, other)
    }
}

/// Great-circle distance in metres (spherical law of cosines).
///
/// Identical points short-circuit to exactly `0.0`; the cosine term is
/// clamped to `[-1, 1]` so rounding never produces `NaN` for near-identical
/// points.
pub fn compute_distance(from: Coordinates, to: Coordinates) -> f64 {
    if from == to {
        return 0.0;
    }
    let dr = std::f64::consts::PI / 180.0;
    let cos_angle = (from.lat * dr).sin() * (to.lat * dr).sin()
        + (from.lat * dr).cos() * (to.lat * dr).cos() * ((from.lng - to.lng).abs() * dr).cos();
    cos_angle.clamp(-1.0, 1.0).acos() * EARTH_RADIUS_M
}

impl std::fmt::Display for Coordinates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}
