//! Algorithm implementations for sequence diffing.
//!
//! - `diff`: identity-keyed diff producing a `Change` script
//! - `index`: occurrence index pairing duplicate identities
//! - `lis`: longest increasing subsequence for minimal moves

mod diff;
mod index;
mod lis;

pub use diff::{diff, diff_with_config, DiffConfig, DiffResult, DiffStats, MoveMode};

#[cfg(feature = "parallel")]
pub use diff::diff_batch;
