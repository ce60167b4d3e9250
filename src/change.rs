//! Edit script operations
//!
//! A `Change` is one typed step of the script that turns the old sequence
//! into the new one. Indices are raw positions: `Delete` and a move's `from`
//! index the old sequence, `Insert` and a move's `to` index the new one.
//! Nothing is adjusted for the other operations in the script.
//!
//! # Applying
//!
//! A consumer reproduces the new sequence by:
//!
//! 1. Removing deletes (descending old index), move sources and replace
//!    sources from the old sequence.
//! 2. Placing inserts (ascending new index), move targets and replace
//!    targets at their new index.
//! 3. Filling the remaining positions with the untouched old elements, in
//!    their original order.
//!
//! Steps 1 and 2 are the structural part of a batch update. Replaces can be
//! applied on their own, after the batch, as a content reload.

use std::fmt;

// =============================================================================
// ChangeKind
// =============================================================================

/// Discriminant of a [`Change`], in script order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ChangeKind {
    Delete,
    Insert,
    Replace,
    Move,
}

impl ChangeKind {
    /// Lowercase name, e.g. for log fields.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Delete => "delete",
            Self::Insert => "insert",
            Self::Replace => "replace",
            Self::Move => "move",
        }
    }

    /// Whether this kind belongs inside a batch transaction.
    ///
    /// Replaces are content reloads and run outside of it.
    #[inline]
    pub const fn is_structural(self) -> bool {
        !matches!(self, Self::Replace)
    }
}

impl fmt::Display for ChangeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// Change
// =============================================================================

/// One operation of an edit script.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[must_use]
pub enum Change<T> {
    /// Present only in the new sequence, at `index`.
    Insert { item: T, index: usize },

    /// Present only in the old sequence, at `index`.
    Delete { item: T, index: usize },

    /// Identity matched but content differs.
    ///
    /// `index` is the position in the new sequence and `old_index` the
    /// position in the old one. They differ only when the item also changed
    /// place; the content change takes precedence and no `Move` is emitted.
    Replace {
        old_item: T,
        new_item: T,
        old_index: usize,
        index: usize,
    },

    /// Identity matched, content equal, order changed.
    Move { item: T, from: usize, to: usize },
}

impl<T> Change<T> {
    /// Get the kind of this change
    pub const fn kind(&self) -> ChangeKind {
        match self {
            Self::Insert { .. } => ChangeKind::Insert,
            Self::Delete { .. } => ChangeKind::Delete,
            Self::Replace { .. } => ChangeKind::Replace,
            Self::Move { .. } => ChangeKind::Move,
        }
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Self::Insert { .. })
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Self::Delete { .. })
    }

    pub fn is_replace(&self) -> bool {
        matches!(self, Self::Replace { .. })
    }

    pub fn is_move(&self) -> bool {
        matches!(self, Self::Move { .. })
    }

    /// The element this change is about.
    ///
    /// For `Replace` this is the new item.
    pub fn item(&self) -> &T {
        match self {
            Self::Insert { item, .. } | Self::Delete { item, .. } | Self::Move { item, .. } => item,
            Self::Replace { new_item, .. } => new_item,
        }
    }

    /// Consume the change and return its element (the new item for `Replace`).
    pub fn into_item(self) -> T {
        match self {
            Self::Insert { item, .. } | Self::Delete { item, .. } | Self::Move { item, .. } => item,
            Self::Replace { new_item, .. } => new_item,
        }
    }

    /// Position in the old sequence, if the change touches one.
    pub fn old_index(&self) -> Option<usize> {
        match *self {
            Self::Insert { .. } => None,
            Self::Delete { index, .. } => Some(index),
            Self::Replace { old_index, .. } => Some(old_index),
            Self::Move { from, .. } => Some(from),
        }
    }

    /// Position in the new sequence, if the change touches one.
    pub fn new_index(&self) -> Option<usize> {
        match *self {
            Self::Insert { index, .. } => Some(index),
            Self::Delete { .. } => None,
            Self::Replace { index, .. } => Some(index),
            Self::Move { to, .. } => Some(to),
        }
    }

    /// Borrow the payload, e.g. to inspect a `Vec<Change<String>>` as `&str`.
    pub fn by_ref(&self) -> Change<&T> {
        match self {
            Self::Insert { item, index } => Change::Insert { item, index: *index },
            Self::Delete { item, index } => Change::Delete { item, index: *index },
            Self::Replace { old_item, new_item, old_index, index } => Change::Replace {
                old_item,
                new_item,
                old_index: *old_index,
                index: *index,
            },
            Self::Move { item, from, to } => Change::Move { item, from: *from, to: *to },
        }
    }

    /// Convert the payload, keeping kind and indices.
    ///
    /// ```
    /// use tola_seqdiff::{diff, Change};
    ///
    /// let old = vec![String::from("a")];
    /// let new: Vec<String> = vec![];
    /// let refs_old: Vec<&String> = old.iter().collect();
    /// let refs_new: Vec<&String> = new.iter().collect();
    ///
    /// let owned: Vec<Change<String>> = diff(&refs_old, &refs_new)
    ///     .into_iter()
    ///     .map(|c| c.map(Clone::clone))
    ///     .collect();
    /// assert_eq!(owned, vec![Change::Delete { item: "a".to_string(), index: 0 }]);
    /// ```
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Change<U> {
        match self {
            Self::Insert { item, index } => Change::Insert { item: f(item), index },
            Self::Delete { item, index } => Change::Delete { item: f(item), index },
            Self::Replace { old_item, new_item, old_index, index } => Change::Replace {
                old_item: f(old_item),
                new_item: f(new_item),
                old_index,
                index,
            },
            Self::Move { item, from, to } => Change::Move { item: f(item), from, to },
        }
    }

    /// The change that undoes this one.
    ///
    /// Inverting every change of `diff(old, new)` yields a script that turns
    /// `new` back into `old`.
    pub fn invert(self) -> Self {
        match self {
            Self::Insert { item, index } => Self::Delete { item, index },
            Self::Delete { item, index } => Self::Insert { item, index },
            Self::Replace { old_item, new_item, old_index, index } => Self::Replace {
                old_item: new_item,
                new_item: old_item,
                old_index: index,
                index: old_index,
            },
            Self::Move { item, from, to } => Self::Move { item, from: to, to: from },
        }
    }

    /// Key that sorts a script into its canonical order: grouped by kind,
    /// deletes by old index, everything else by new index.
    pub(crate) fn order_key(&self) -> (ChangeKind, usize) {
        let index = match *self {
            Self::Delete { index, .. } => index,
            Self::Insert { index, .. } | Self::Replace { index, .. } => index,
            Self::Move { to, .. } => to,
        };
        (self.kind(), index)
    }
}

/// Put a script into canonical order.
///
/// `diff` already emits this order; use it after editing a script by hand,
/// e.g. after inverting every change.
pub fn sort_changes<T>(changes: &mut [Change<T>]) {
    changes.sort_by_key(Change::order_key);
}

// =============================================================================
// Tests
// =============================================================================
