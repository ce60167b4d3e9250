//! Sequence Diff Algorithm
//!
//! Computes a move-aware edit script between two ordered sequences.
//! This is a **pure algorithm module**: no I/O, no shared state, and no
//! knowledge of how the script is applied.
//!
//! # Algorithm
//!
//! 1. Strip the common prefix (same identity, same content)
//! 2. Index the rest of `old` by identity (occurrence order)
//! 3. Walk `new`, pairing each element with the earliest unconsumed old
//!    element of the same identity; unpaired elements are inserts
//! 4. Unpaired old elements are deletes, paired elements whose content
//!    differs are replaces
//! 5. Among the remaining pairs, keep every element sitting at the same
//!    index on both sides plus the longest order-preserving run around
//!    them, and report the rest as moves
//!
//! # Key Features
//!
//! - **Move Detection**: Reordered elements generate `Move`, not Delete+Insert
//! - **Stable Identity**: Same identity = same element across states
//! - **Deterministic Duplicates**: k-th occurrence pairs with k-th occurrence
//!
//! # Complexity
//!
//! - Time: O(n) expected for indexing and matching, O(k log n) for the
//!   move pass over k kept pairs
//! - Space: O(n + m)

use crate::change::Change;
use crate::diffable::Diffable;

use super::index::OccurrenceIndex;
use super::lis::heaviest_increasing;

// =============================================================================
// Public Types
// =============================================================================

/// How repositioned elements are reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveMode {
    /// Keep the longest order-preserving run of paired elements in place
    /// and report every other paired element as a `Move`. Elements at the
    /// same raw index in both sequences always stay.
    ///
    /// `[A, B, C] -> [B, C, A]` yields a single move of `A`, and
    /// `[A, B, C] -> [C, B, A]` moves `C` and `A` around `B`.
    #[default]
    Minimal,

    /// Report a `Move` for every paired element whose raw old and new
    /// indices differ.
    ///
    /// `[A, B, C] -> [B, C]` yields a delete of `A` and moves of `B` and `C`.
    Positional,

    /// Never emit `Move`. Elements that would move are reported as a
    /// `Delete` at the old index plus an `Insert` at the new index.
    Off,
}

/// Configuration for the diff algorithm.
///
/// The default is move-aware with replace detection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DiffConfig {
    /// Move reporting strategy.
    /// Default: `MoveMode::Minimal`
    pub moves: MoveMode,
    /// Report a content change of a paired element as `Replace`.
    /// When disabled, it becomes `Delete` + `Insert`.
    /// Default: true
    pub detect_replaces: bool,
}

impl Default for DiffConfig {
    fn default() -> Self {
        Self {
            moves: MoveMode::Minimal,
            detect_replaces: true,
        }
    }
}

impl DiffConfig {
    /// Create config with explicit settings.
    pub const fn new(moves: MoveMode, detect_replaces: bool) -> Self {
        Self { moves, detect_replaces }
    }

    /// Report every raw index change as a move.
    pub const fn positional() -> Self {
        Self::new(MoveMode::Positional, true)
    }

    /// Non-move-aware mode.
    pub const fn without_moves() -> Self {
        Self::new(MoveMode::Off, true)
    }

    /// Only structural changes: content changes become Delete + Insert.
    pub const fn structural() -> Self {
        Self::new(MoveMode::Minimal, false)
    }
}

/// Statistics from a diff operation
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub struct DiffStats {
    /// Number of paired elements left in place
    pub unchanged: usize,
    /// Number of inserts
    pub inserted: usize,
    /// Number of deletes
    pub deleted: usize,
    /// Number of replaces
    pub replaced: usize,
    /// Number of moves
    pub moved: usize,
}

impl DiffStats {
    /// Total number of emitted changes
    pub fn edit_count(&self) -> usize {
        self.inserted + self.deleted + self.replaced + self.moved
    }

    /// Check if there are no changes
    pub fn is_empty(&self) -> bool {
        self.edit_count() == 0
    }
}

/// Result of a diff operation
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub struct DiffResult<T> {
    /// Edit script in canonical order: deletes, inserts, replaces, moves
    pub changes: Vec<Change<T>>,
    /// Statistics about the diff
    pub stats: DiffStats,
}

impl<T> Default for DiffResult<T> {
    fn default() -> Self {
        Self {
            changes: Vec::new(),
            stats: DiffStats::default(),
        }
    }
}

impl<T> DiffResult<T> {
    /// Check if any changes were detected
    pub fn has_changes(&self) -> bool {
        !self.changes.is_empty()
    }

    /// Drop the statistics and keep the script
    pub fn into_changes(self) -> Vec<Change<T>> {
        self.changes
    }
}

// =============================================================================
// Public API
// =============================================================================

/// Diff two sequences with the default configuration.
///
/// # Example
///
/// ```
/// use tola_seqdiff::{diff, Change};
///
/// let changes = diff(&['a', 'b', 'c'], &['b', 'c', 'a']);
/// assert_eq!(changes, vec![Change::Move { item: 'a', from: 0, to: 2 }]);
/// ```
pub fn diff<T>(old: &[T], new: &[T]) -> Vec<Change<T>>
where
    T: Diffable + Clone,
{
    diff_with_config(old, new, DiffConfig::default()).changes
}

/// Diff two sequences with custom configuration.
///
/// # Example
///
/// ```
/// use tola_seqdiff::{diff_with_config, DiffConfig};
///
/// let result = diff_with_config(&[1, 2, 3], &[2, 3], DiffConfig::positional());
/// assert_eq!(result.stats.deleted, 1);
/// assert_eq!(result.stats.moved, 2);
/// ```
pub fn diff_with_config<'a, T>(old: &'a [T], new: &'a [T], config: DiffConfig) -> DiffResult<T>
where
    T: Diffable + Clone + 'a,
{
    let mut ctx = DiffContext::new(config);

    // Quick paths
    if old.is_empty() {
        ctx.insert_all(new, 0);
    } else if new.is_empty() {
        ctx.delete_all(old, 0);
    } else {
        ctx.diff_sequences(old, new);
    }

    let result = ctx.into_result();
    tracing::trace!(
        old_len = old.len(),
        new_len = new.len(),
        unchanged = result.stats.unchanged,
        inserted = result.stats.inserted,
        deleted = result.stats.deleted,
        replaced = result.stats.replaced,
        moved = result.stats.moved,
        "sequence diff complete"
    );
    result
}

/// Diff many independent sequence pairs in parallel.
///
/// Typical use is a sectioned list, where every section's rows are diffed
/// separately. Results are in the order of `pairs`.
#[cfg(feature = "parallel")]
pub fn diff_batch<T>(pairs: &[(&[T], &[T])], config: DiffConfig) -> Vec<DiffResult<T>>
where
    T: Diffable + Clone + Send + Sync,
{
    use rayon::prelude::*;

    pairs
        .par_iter()
        .map(|&(old, new)| diff_with_config(old, new, config))
        .collect()
}

// =============================================================================
// Internal Context
// =============================================================================

struct DiffContext<T> {
    deletes: Vec<Change<T>>,
    inserts: Vec<Change<T>>,
    replaces: Vec<Change<T>>,
    moves: Vec<Change<T>>,
    unchanged: usize,
    config: DiffConfig,
}

impl<T: Diffable + Clone> DiffContext<T> {
    fn new(config: DiffConfig) -> Self {
        Self {
            deletes: Vec::new(),
            inserts: Vec::new(),
            replaces: Vec::new(),
            moves: Vec::new(),
            unchanged: 0,
            config,
        }
    }

    fn into_result(mut self) -> DiffResult<T> {
        // Matching walks `new`, so only deletes can be out of order.
        self.deletes.sort_unstable_by_key(|c| c.old_index());

        let stats = DiffStats {
            unchanged: self.unchanged,
            inserted: self.inserts.len(),
            deleted: self.deletes.len(),
            replaced: self.replaces.len(),
            moved: self.moves.len(),
        };

        let mut changes = self.deletes;
        changes.reserve(stats.inserted + stats.replaced + stats.moved);
        changes.append(&mut self.inserts);
        changes.append(&mut self.replaces);
        changes.append(&mut self.moves);

        DiffResult { changes, stats }
    }

    fn insert_all(&mut self, new: &[T], offset: usize) {
        self.inserts.extend(new.iter().enumerate().map(|(i, item)| Change::Insert {
            item: item.clone(),
            index: offset + i,
        }));
    }

    fn delete_all(&mut self, old: &[T], offset: usize) {
        self.deletes.extend(old.iter().enumerate().map(|(i, item)| Change::Delete {
            item: item.clone(),
            index: offset + i,
        }));
    }

    /// Diff two non-empty sequences
    fn diff_sequences<'a>(&mut self, old: &'a [T], new: &'a [T])
    where
        T: 'a,
    {
        // A shared prefix pairs occurrence-for-occurrence, so the index
        // only needs the remainder.
        let prefix = old
            .iter()
            .zip(new)
            .take_while(|(a, b)| a.diff_id() == b.diff_id() && a.same_content(b))
            .count();
        self.unchanged += prefix;

        let old_rest = &old[prefix..];
        let new_rest = &new[prefix..];
        if old_rest.is_empty() {
            self.insert_all(new_rest, prefix);
            return;
        }
        if new_rest.is_empty() {
            self.delete_all(old_rest, prefix);
            return;
        }

        let mut index = OccurrenceIndex::build(old_rest);
        let mut consumed = vec![false; old_rest.len()];
        // Paired elements with equal content, in new order: (old, new)
        let mut kept: Vec<(usize, usize)> = Vec::new();

        for (offset, item) in new_rest.iter().enumerate() {
            let new_idx = prefix + offset;
            let Some(rel) = index.take(&item.diff_id()) else {
                self.inserts.push(Change::Insert { item: item.clone(), index: new_idx });
                continue;
            };
            consumed[rel] = true;
            let old_idx = prefix + rel;
            let old_item = &old[old_idx];

            if old_item.same_content(item) {
                kept.push((old_idx, new_idx));
            } else if self.config.detect_replaces {
                self.replaces.push(Change::Replace {
                    old_item: old_item.clone(),
                    new_item: item.clone(),
                    old_index: old_idx,
                    index: new_idx,
                });
            } else {
                self.deletes.push(Change::Delete { item: old_item.clone(), index: old_idx });
                self.inserts.push(Change::Insert { item: item.clone(), index: new_idx });
            }
        }

        for (rel, item) in old_rest.iter().enumerate() {
            if !consumed[rel] {
                self.deletes.push(Change::Delete { item: item.clone(), index: prefix + rel });
            }
        }

        self.classify_kept(old, new, &kept);
    }

    /// Decide which content-equal pairs stay and which move
    fn classify_kept(&mut self, old: &[T], new: &[T], kept: &[(usize, usize)]) {
        let stays: Vec<bool> = match self.config.moves {
            MoveMode::Positional => kept.iter().map(|&(o, n)| o == n).collect(),
            MoveMode::Minimal | MoveMode::Off => {
                // An element at the same raw index on both sides outweighs
                // every other pair together, so all of them stay.
                let in_place = kept.len() + 1;
                let (old_positions, weights): (Vec<usize>, Vec<usize>) = kept
                    .iter()
                    .map(|&(o, n)| (o, if o == n { in_place } else { 1 }))
                    .unzip();
                heaviest_increasing(&old_positions, &weights)
            }
        };

        let mut split_moves = false;
        for (&(old_idx, new_idx), stay) in kept.iter().zip(stays) {
            if stay {
                self.unchanged += 1;
                continue;
            }
            match self.config.moves {
                MoveMode::Minimal | MoveMode::Positional => self.moves.push(Change::Move {
                    item: new[new_idx].clone(),
                    from: old_idx,
                    to: new_idx,
                }),
                MoveMode::Off => {
                    self.deletes.push(Change::Delete { item: old[old_idx].clone(), index: old_idx });
                    self.inserts.push(Change::Insert { item: new[new_idx].clone(), index: new_idx });
                    split_moves = true;
                }
            }
        }

        // Split moves interleave with plain inserts.
        if split_moves {
            self.inserts.sort_unstable_by_key(|c| c.new_index());
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
