//! Error types for tola-seqdiff.
//!
//! Diffing itself is total; only replaying a script can fail, when the
//! script does not fit the sequence it is applied to.

use thiserror::Error;

use crate::change::ChangeKind;

/// Errors that can occur while applying a change script.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ApplyError {
    /// A change points outside the sequence it addresses
    #[error("{kind} index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        /// Kind of the offending change
        kind: ChangeKind,
        /// The offending index
        index: usize,
        /// Length of the addressed sequence (old for sources, new for targets)
        len: usize,
    },

    /// Two changes remove the same old element
    #[error("old index {index} is vacated by more than one change")]
    SourceReused {
        /// The old index
        index: usize,
    },

    /// Two changes fill the same new position
    #[error("new index {index} is filled by more than one change")]
    TargetReused {
        /// The new index
        index: usize,
    },

    /// More deletes than elements
    #[error("script deletes {deletes} elements from a sequence of length {len}")]
    LengthUnderflow {
        /// Number of deletes in the script
        deletes: usize,
        /// Length of the old sequence
        len: usize,
    },
}

/// Result type alias for applying a script.
pub type ApplyResult<T> = Result<T, ApplyError>;
