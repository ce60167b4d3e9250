//! Batch update view of a change script
//!
//! List widgets usually apply structural edits inside one atomic update
//! transaction and content reloads after it, because a reload inside the
//! transaction conflicts with the structural bookkeeping.
//!
//! ```text
//! begin batch
//!     delete  deletes      (old indices)
//!     insert  inserts      (new indices)
//!     move    from -> to   (old -> new)
//! end batch
//! reload  reloads          (new indices)
//! ```
//!
//! `BatchUpdate` is that split as plain index data. Driving the widget is
//! left to the caller.

use crate::change::Change;

/// Index sets of a change script, grouped by when they are applied.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[must_use]
pub struct BatchUpdate {
    /// Old indices to delete, ascending
    pub deletes: Vec<usize>,
    /// New indices to insert, ascending
    pub inserts: Vec<usize>,
    /// `(from, to)` pairs, ascending by `to`
    pub moves: Vec<(usize, usize)>,
    /// New indices to reload after the batch, ascending
    pub reloads: Vec<usize>,
}

impl BatchUpdate {
    /// Group a change script.
    ///
    /// The input does not need to be in canonical order.
    pub fn from_changes<T>(changes: &[Change<T>]) -> Self {
        let mut batch = Self::default();
        for change in changes {
            match *change {
                Change::Delete { index, .. } => batch.deletes.push(index),
                Change::Insert { index, .. } => batch.inserts.push(index),
                Change::Replace { index, .. } => batch.reloads.push(index),
                Change::Move { from, to, .. } => batch.moves.push((from, to)),
            }
        }
        batch.deletes.sort_unstable();
        batch.inserts.sort_unstable();
        batch.reloads.sort_unstable();
        batch.moves.sort_unstable_by_key(|&(from, to)| (to, from));
        batch
    }

    /// Whether anything has to run inside the transaction
    pub fn has_structural(&self) -> bool {
        !self.deletes.is_empty() || !self.inserts.is_empty() || !self.moves.is_empty()
    }

    /// Whether anything has to run after the transaction
    pub fn has_reloads(&self) -> bool {
        !self.reloads.is_empty()
    }

    /// Check if there is nothing to apply
    pub fn is_empty(&self) -> bool {
        !self.has_structural() && !self.has_reloads()
    }

    /// Deletes in descending order, for consumers that remove one element
    /// at a time and must not shift the indices still to come.
    pub fn deletes_descending(&self) -> impl Iterator<Item = usize> + '_ {
        self.deletes.iter().rev().copied()
    }
}

impl<T> From<&[Change<T>]> for BatchUpdate {
    fn from(changes: &[Change<T>]) -> Self {
        Self::from_changes(changes)
    }
}
