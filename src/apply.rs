//! Replaying a change script
//!
//! Applies a script the way a batch-update consumer does: every change
//! with an old index vacates that position, every change with a new index
//! fills that position, and the untouched old elements slide into the
//! remaining positions in their original order.
//!
//! ```text
//! old:     [A, B, C]
//! script:  Move A 0 -> 2
//! vacate:  [_, B, C]       fill: [_, _, A]
//! slide:   [B, C, A]
//! ```
//!
//! This is the same as deleting by descending old index, then inserting by
//! ascending new index, with moves as a delete at `from` and an insert at
//! `to`, and replaces as a delete and insert of the new content.

use crate::change::Change;
use crate::error::{ApplyError, ApplyResult};

/// Apply `changes` to `old` and return the resulting sequence.
///
/// Every script produced by [`diff`](crate::diff) applies cleanly:
///
/// ```
/// use tola_seqdiff::{apply, diff};
///
/// let old = ["a", "b", "c", "d"];
/// let new = ["d", "x", "a", "c"];
/// let changes = diff(&old, &new);
/// assert_eq!(apply(&old, &changes).unwrap(), new);
/// ```
///
/// # Errors
///
/// Fails when an index is out of range, or when two changes vacate the
/// same old position or fill the same new position.
pub fn apply<T: Clone>(old: &[T], changes: &[Change<T>]) -> ApplyResult<Vec<T>> {
    replay(old, changes).inspect_err(|err| {
        tracing::debug!(%err, old_len = old.len(), changes = changes.len(), "change script does not apply");
    })
}

fn replay<T: Clone>(old: &[T], changes: &[Change<T>]) -> ApplyResult<Vec<T>> {
    let deletes = changes.iter().filter(|c| c.is_delete()).count();
    let inserts = changes.iter().filter(|c| c.is_insert()).count();
    if deletes > old.len() {
        return Err(ApplyError::LengthUnderflow { deletes, len: old.len() });
    }
    let new_len = old.len() - deletes + inserts;

    let mut vacated = vec![false; old.len()];
    let mut slots: Vec<Option<T>> = vec![None; new_len];

    for change in changes {
        let kind = change.kind();

        if let Some(index) = change.old_index() {
            let flag = vacated
                .get_mut(index)
                .ok_or(ApplyError::IndexOutOfBounds { kind, index, len: old.len() })?;
            if *flag {
                return Err(ApplyError::SourceReused { index });
            }
            *flag = true;
        }

        if let Some(index) = change.new_index() {
            let slot = slots
                .get_mut(index)
                .ok_or(ApplyError::IndexOutOfBounds { kind, index, len: new_len })?;
            if slot.is_some() {
                return Err(ApplyError::TargetReused { index });
            }
            *slot = Some(change.item().clone());
        }
    }

    // Distinct in-range indices leave exactly as many gaps as survivors.
    let mut survivors = old
        .iter()
        .zip(&vacated)
        .filter_map(|(item, &gone)| (!gone).then_some(item));
    for slot in slots.iter_mut().filter(|slot| slot.is_none()) {
        *slot = survivors.next().cloned();
    }

    Ok(slots.into_iter().flatten().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::change::ChangeKind;

    #[test]
    fn test_empty_script_is_identity() {
        assert_eq!(apply(&[1, 2, 3], &[]), Ok(vec![1, 2, 3]));
    }

    #[test]
    fn test_move_slides_survivors() {
        let changes = [Change::Move { item: 'a', from: 0, to: 2 }];
        assert_eq!(apply(&['a', 'b', 'c'], &changes), Ok(vec!['b', 'c', 'a']));
    }

    #[test]
    fn test_delete_then_insert() {
        let changes = [
            Change::Delete { item: 2, index: 1 },
            Change::Delete { item: 4, index: 3 },
            Change::Insert { item: 5, index: 1 },
        ];
        assert_eq!(apply(&[1, 2, 3, 4], &changes), Ok(vec![1, 5, 3]));
    }

    #[test]
    fn test_replace_uses_new_item() {
        let changes = [Change::Replace { old_item: "x", new_item: "y", old_index: 0, index: 1 }];
        assert_eq!(apply(&["x", "z"], &changes), Ok(vec!["z", "y"]));
    }

    #[test]
    fn test_order_independent() {
        let changes = [
            Change::Insert { item: 'x', index: 0 },
            Change::Move { item: 'a', from: 0, to: 2 },
            Change::Delete { item: 'c', index: 2 },
        ];
        let mut reversed = changes.clone();
        reversed.reverse();
        let old = ['a', 'b', 'c'];
        assert_eq!(apply(&old, &changes), apply(&old, &reversed));
        assert_eq!(apply(&old, &changes), Ok(vec!['x', 'b', 'a']));
    }

    #[test]
    fn test_out_of_bounds() {
        let changes = [Change::Delete { item: 1, index: 5 }];
        assert_eq!(
            apply(&[1, 2], &changes),
            Err(ApplyError::IndexOutOfBounds { kind: ChangeKind::Delete, index: 5, len: 2 })
        );

        let changes = [Change::Insert { item: 1, index: 3 }];
        assert_eq!(
            apply(&[1], &changes),
            Err(ApplyError::IndexOutOfBounds { kind: ChangeKind::Insert, index: 3, len: 2 })
        );
    }

    #[test]
    fn test_source_reused() {
        let changes = [
            Change::Delete { item: 1, index: 0 },
            Change::Move { item: 1, from: 0, to: 1 },
        ];
        assert_eq!(apply(&[1, 2, 3], &changes), Err(ApplyError::SourceReused { index: 0 }));
    }

    #[test]
    fn test_target_reused() {
        let changes = [
            Change::Insert { item: 9, index: 0 },
            Change::Insert { item: 8, index: 0 },
        ];
        assert_eq!(apply(&[1], &changes), Err(ApplyError::TargetReused { index: 0 }));
    }

    #[test]
    fn test_length_underflow() {
        let changes = [
            Change::Delete { item: 1, index: 0 },
            Change::Delete { item: 1, index: 0 },
        ];
        assert_eq!(
            apply(&[1], &changes),
            Err(ApplyError::LengthUnderflow { deletes: 2, len: 1 })
        );
    }
}
