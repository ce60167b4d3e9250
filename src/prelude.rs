//! Prelude module for common imports.
//!
//! ```
//! use tola_seqdiff::prelude::*;
//! ```

// Identity
pub use crate::diffable::Diffable;

// Script
pub use crate::change::{sort_changes, Change, ChangeKind};

// Algorithms
pub use crate::algo::{diff, diff_with_config, DiffConfig, DiffResult, DiffStats, MoveMode};

#[cfg(feature = "parallel")]
pub use crate::algo::diff_batch;

// Consumers
pub use crate::apply::apply;
pub use crate::batch::BatchUpdate;

// Error
pub use crate::error::{ApplyError, ApplyResult};
