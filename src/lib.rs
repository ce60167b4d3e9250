//! tola-seqdiff - Move-aware, identity-keyed sequence diffing
//!
//! ## Core Concepts
//!
//! **Identity + Content**: Elements implement [`Diffable`], which splits
//! "is this the same item?" (identity) from "did it change?" (content).
//! Matching by identity is what makes move detection possible.
//!
//! **Edit Script**: [`diff`] returns a list of [`Change`] values grouped as
//! deletes, inserts, replaces, moves. Indices are raw positions in the old
//! and new sequences.
//!
//! ## Modules
//! - `diffable`: Identity contract and impls for std types
//! - `change`: The `Change` sum type
//! - `algo`: Diff algorithm and configuration
//! - `batch`: Grouping a script into batch-update phases
//! - `apply`: Replaying a script
//! - `error`: Error types
//!
//! ## Usage
//!
//! ```
//! use tola_seqdiff::{apply, diff, diffable, BatchUpdate, Change};
//!
//! #[derive(Debug, Clone, PartialEq)]
//! struct Row {
//!     id: u64,
//!     title: String,
//! }
//!
//! diffable!(Row, id: u64);
//!
//! let row = |id, title: &str| Row { id, title: title.to_string() };
//! let old = vec![row(1, "inbox"), row(2, "drafts"), row(3, "sent")];
//! let new = vec![row(3, "sent"), row(1, "inbox (2)"), row(2, "drafts")];
//!
//! let changes = diff(&old, &new);
//! assert!(matches!(changes[0], Change::Replace { index: 1, .. }));
//! assert!(matches!(changes[1], Change::Move { from: 2, to: 0, .. }));
//!
//! // Structural edits inside the widget's batch, reloads after it
//! let batch = BatchUpdate::from_changes(&changes);
//! assert_eq!(batch.moves, vec![(2, 0)]);
//! assert_eq!(batch.reloads, vec![1]);
//!
//! assert_eq!(apply(&old, &changes).unwrap(), new);
//! ```

// =============================================================================
// Modules
// =============================================================================

/// Identity contract: Diffable
pub mod diffable;

/// Edit script operations
pub mod change;

/// Algorithms: diff, occurrence index, longest increasing subsequence
pub mod algo;

/// Batch update grouping
pub mod batch;

/// Script replay
pub mod apply;

/// Error types
pub mod error;

/// Prelude for common imports
pub mod prelude;

// =============================================================================
// Re-exports
// =============================================================================

// Identity
pub use diffable::Diffable;

// Script
pub use change::{sort_changes, Change, ChangeKind};

// Algorithms
pub use algo::{diff, diff_with_config, DiffConfig, DiffResult, DiffStats, MoveMode};

#[cfg(feature = "parallel")]
pub use algo::diff_batch;

// Consumers
pub use apply::apply;
pub use batch::BatchUpdate;

// Error types
pub use error::{ApplyError, ApplyResult};

// =============================================================================
// Tests
// =============================================================================
