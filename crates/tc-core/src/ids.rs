//! Strongly typed, zero-cost identifier wrappers.
//!
//! Stops and routes live in arenas owned by the catalogue; these ids are
//! their positions.  The inner integer is `pub` for direct indexing, but
//! callers should prefer `.index()`.

use std::fmt;

/// Declare an arena index newtype over `u32`.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident;) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub u32);

        impl $name {
            /// Never issued by an arena; marks "no predecessor" and the like.
            pub const INVALID: $name = $name(u32::MAX);

            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }

        /// Fails once the arena outgrows `u32`.
        impl TryFrom<usize> for $name {
            type Error = std::num::TryFromIntError;
            fn try_from(n: usize) -> Result<$name, Self::Error> {
                u32::try_from(n).map($name)
            }
        }
    };
}

typed_id! {
    /// Index of a stop in the catalogue's stop arena.
    pub struct StopId;
}

typed_id! {
    /// Index of a route in the catalogue's route arena.
    pub struct RouteId;
}

typed_id! {
    /// Index of a vertex in a compiled graph.
    pub struct VertexId;
}

typed_id! {
    /// Identifier the graph assigns to a directed edge (insertion order).
    pub struct EdgeId;
}

impl From<StopId> for VertexId {
    /// Compiled graphs allocate exactly one vertex per stop, in arena order.
    #[inline(always)]
    fn from(id: StopId) -> VertexId {
        VertexId(id.0)
    }
}

impl From<VertexId> for StopId {
    #[inline(always)]
    fn from(id: VertexId) -> StopId {
        StopId(id.0)
    }
}
