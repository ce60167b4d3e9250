//! Occurrence index: identity -> queue of old positions
//!
//! Duplicate identities are paired by occurrence, not by position:
//! the k-th new element with identity `x` takes the k-th old element
//! with identity `x`.
//!
//! ```text
//! old: [A, B, A]      A -> [0, 2]   B -> [1]
//! new: [A, A, A]      A0 takes 0, A1 takes 2, A2 finds nothing -> Insert
//! ```
//!
//! Positions live in one small vector per identity with a read cursor, so
//! taking a match is O(1) and the common unique-identity case does not
//! spill to the heap.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::diffable::Diffable;

/// Positions of one identity in the old sequence.
#[derive(Debug, Default)]
struct Occurrences {
    positions: SmallVec<[usize; 2]>,
    next: usize,
}

/// Identity -> unconsumed old positions, in sequence order.
pub(crate) struct OccurrenceIndex<'a, T: Diffable + 'a> {
    map: FxHashMap<T::Id<'a>, Occurrences>,
}

impl<'a, T: Diffable + 'a> OccurrenceIndex<'a, T> {
    /// Index every element of `old` by identity.
    pub(crate) fn build(old: &'a [T]) -> Self {
        let mut map: FxHashMap<T::Id<'a>, Occurrences> =
            FxHashMap::with_capacity_and_hasher(old.len(), Default::default());
        for (pos, item) in old.iter().enumerate() {
            map.entry(item.diff_id()).or_default().positions.push(pos);
        }
        Self { map }
    }

    /// Take the earliest unconsumed old position for `id`.
    #[inline]
    pub(crate) fn take(&mut self, id: &T::Id<'a>) -> Option<usize> {
        let occ = self.map.get_mut(id)?;
        let pos = occ.positions.get(occ.next).copied()?;
        occ.next += 1;
        Some(pos)
    }

    /// Number of distinct identities in the old sequence.
    #[cfg(test)]
    pub(crate) fn identities(&self) -> usize {
        self.map.len()
    }
}
