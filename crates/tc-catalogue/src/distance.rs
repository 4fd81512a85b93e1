//! Directional road distances.
//!
//! Setting `A → B` also fills `B → A` if no `B → A` value exists yet.
//! Once filled in, the reverse is only changed by setting `B → A` itself.

use rustc_hash::FxHashMap;

use tc_core::StopId;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
struct Entry {
    meters:   u32,
    explicit: bool,
}

/// Road distances in metres between ordered stop pairs.
#[derive(Clone, Debug, Default)]
pub struct DistanceTable {
    entries: FxHashMap<(StopId, StopId), Entry>,
}

impl DistanceTable {
    /// Record `from → to` and, if `to → from` is still unset, the symmetric
    /// fallback.
    pub fn set(&mut self, from: StopId, to: StopId, meters: u32) {
        self.entries.insert((from, to), Entry { meters, explicit: true });
        if from == to {
            return;
        }
        self.entries
            .entry((to, from))
            .or_insert(Entry { meters, explicit: false });
    }

    /// Distance `from → to`, explicit or fallback.
    #[inline]
    pub fn get(&self, from: StopId, to: StopId) -> Option<u32> {
        self.entries.get(&(from, to)).map(|e| e.meters)
    }

    /// `true` if `from → to` was set directly rather than filled in.
    pub fn is_explicit(&self, from: StopId, to: StopId) -> bool {
        self.entries.get(&(from, to)).is_some_and(|e| e.explicit)
    }

    /// Number of resolvable ordered pairs, fallbacks included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
