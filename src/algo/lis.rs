//! Heaviest increasing subsequence
//!
//! Used to pick which matched elements stay put. Walking the matched pairs
//! in new order, their old positions form a sequence; an increasing run of
//! it is a set of elements whose relative order survived, and everything
//! outside the chosen run is reported as a move.
//!
//! ```text
//! old: [A, B, C]   new: [B, C, A]
//! old positions in new order: [1, 2, 0]
//! run: [1, 2] (B, C)  ->  only A moves
//! ```
//!
//! Each element carries a weight and the run with the largest total weight
//! wins. With unit weights this is the plain longest increasing
//! subsequence. The differ gives elements sitting at the same raw index in
//! both sequences a weight larger than all other weights combined, so they
//! are never reported as moved:
//!
//! ```text
//! old: [A, B, C]   new: [C, B, A]
//! old positions in new order: [2, 1, 0], weights [1, 4, 1]
//! run: [1] (B)  ->  C and A move, B stays
//! ```
//!
//! # Complexity
//!
//! A Fenwick tree of prefix maxima over old positions: O(k log n) time,
//! O(k + n) space, where n bounds the values in the sequence.
//!
//! # Tie-breaking
//!
//! On equal weight the later element wins, both when picking a predecessor
//! and when picking where the run ends, so the result is a pure function
//! of the input.

/// Best run ending below some value: (total weight, index into seq)
type Best = Option<(usize, usize)>;

/// Return a mask over `seq` marking one strictly increasing subsequence of
/// maximum total weight.
///
/// `weights[i]` is the weight of `seq[i]`; both slices have the same length.
pub(crate) fn heaviest_increasing(seq: &[usize], weights: &[usize]) -> Vec<bool> {
    debug_assert_eq!(seq.len(), weights.len());

    let mut keep = vec![false; seq.len()];
    let Some(&max) = seq.iter().max() else {
        return keep;
    };

    // tree[p] (1-based) = best run ending at a value in the range covered by p
    let mut tree: Vec<Best> = vec![None; max + 2];
    // prev[i] = index of the element before seq[i] in its best run
    let mut prev: Vec<Option<usize>> = vec![None; seq.len()];
    let mut end: Best = None;

    for (i, (&value, &weight)) in seq.iter().zip(weights).enumerate() {
        let before = prefix_best(&tree, value);
        let total = weight + before.map_or(0, |(w, _)| w);
        prev[i] = before.map(|(_, j)| j);

        raise(&mut tree, value + 1, (total, i));
        if end.is_none_or(|(w, _)| total >= w) {
            end = Some((total, i));
        }
    }

    let mut cursor = end.map(|(_, i)| i);
    while let Some(i) = cursor {
        keep[i] = true;
        cursor = prev[i];
    }
    keep
}

/// Best run ending at a value below `bound` (tree positions 1..=bound)
fn prefix_best(tree: &[Best], bound: usize) -> Best {
    let mut best: Best = None;
    let mut pos = bound;
    while pos > 0 {
        if let Some(entry) = tree[pos] {
            if best.is_none_or(|(w, j)| entry.0 > w || (entry.0 == w && entry.1 > j)) {
                best = Some(entry);
            }
        }
        pos &= pos - 1;
    }
    best
}

/// Record `entry` at tree position `pos` and every range above it
fn raise(tree: &mut [Best], mut pos: usize, entry: (usize, usize)) {
    while pos < tree.len() {
        if tree[pos].is_none_or(|(w, _)| entry.0 >= w) {
            tree[pos] = Some(entry);
        }
        pos += pos & pos.wrapping_neg();
    }
}
