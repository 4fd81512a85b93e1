//! Stored records and derived statistics.

use tc_core::{Coordinates, StopId};

/// A named stop.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stop {
    pub name:        String,
    pub coordinates: Coordinates,
}

/// A named bus route over catalogue stops.
///
/// For a round trip `stops` is the closed loop (first == last).  Otherwise
/// it is the outward leg only and the vehicle returns along the same stops
/// in reverse.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Route {
    pub name:         String,
    pub stops:        Vec<StopId>,
    pub is_roundtrip: bool,
}

impl Route {
    /// Stops in the order a rider sees them over one full trip.
    ///
    /// Out-and-back routes are unfolded: `A B C` becomes `A B C B A`.
    pub fn traversal(&self) -> impl Iterator<Item = StopId> + '_ {
        let back: &[StopId] = if self.is_roundtrip || self.stops.is_empty() {
            &[]
        } else {
            &self.stops[..self.stops.len() - 1]
        };
        self.stops.iter().chain(back.iter().rev()).copied()
    }

    /// Number of entries in [`traversal`](Self::traversal).
    pub fn traversal_len(&self) -> usize {
        if self.is_roundtrip || self.stops.is_empty() {
            self.stops.len()
        } else {
            self.stops.len() * 2 - 1
        }
    }
}

/// Statistics derived from a route on demand.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RouteInfo {
    /// Stops over the full traversal, repeats included.
    pub stop_count: usize,
    pub unique_stop_count: usize,
    /// Road length in metres, summed from the distance table.
    pub route_length: u64,
    /// Road length over great-circle length.  `0.0` when the great-circle
    /// length is zero.
    pub curvature: f64,
}
